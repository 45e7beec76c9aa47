mod image_fetcher;
mod link_opener;
mod search_api_client;

pub use image_fetcher::ImageFetcher;
pub use link_opener::LinkOpener;
pub use search_api_client::SearchApiClient;
