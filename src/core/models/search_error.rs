use thiserror::Error;

/// Failure of a whole search. The published result list is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("keyword could not be made URL-safe: {0}")]
    Encoding(String),

    #[error("failed to build request URL: {0}")]
    RequestBuild(String),

    #[error("transport failure: {0}")]
    Transport(String),

    #[error("failed to decode search response: {0}")]
    Decode(String),

    #[error("search #{0} was superseded by a newer search")]
    Superseded(u64),
}

impl SearchError {
    pub fn is_superseded(&self) -> bool {
        matches!(self, SearchError::Superseded(_))
    }
}

/// Failure to turn one decoded entry into a result item. Only that entry is dropped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ItemMaterializationError {
    #[error("failed to fetch image {url}: {reason}")]
    ImageFetch { url: String, reason: String },

    #[error("image {url} could not be decoded: {reason}")]
    ImageDecode { url: String, reason: String },
}
