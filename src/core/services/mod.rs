mod result_decoder;
mod result_list;
mod search_service;

pub use search_service::{SearchOutcome, SearchReport, SearchService};
