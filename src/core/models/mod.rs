mod raw_api_response;
mod search_error;
mod search_query;
mod search_result_item;
mod user_settings;

pub use raw_api_response::{RawApiItem, RawApiResponse};
pub use search_error::{ItemMaterializationError, SearchError};
pub use search_query::SearchQueryTemplate;
pub use search_result_item::{ItemImage, SearchResultItem, ValidatedEntry};
pub use user_settings::{ThemeMode, UserSettings};

#[cfg(test)]
pub(crate) use search_result_item::encode_test_png;
