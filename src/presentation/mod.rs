pub mod app_theme;
mod search_view;

pub use search_view::{SearchView, SearchViewMessage};
