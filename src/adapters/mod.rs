mod reqwest_image_fetcher;
mod reqwest_search_api_client;
mod system_browser_link_opener;

pub use reqwest_image_fetcher::ReqwestImageFetcher;
pub use reqwest_search_api_client::ReqwestSearchApiClient;
pub use system_browser_link_opener::SystemBrowserLinkOpener;
