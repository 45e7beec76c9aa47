use reqwest::Url;

use crate::core::models::SearchError;
use crate::global_constants;

/// Fixed parts of the search request; only the keyword varies per search.
///
/// The result cap and order are not part of the template: every request asks
/// for at most `DEFAULT_MAX_RESULTS` entries in `DEFAULT_RESULT_ORDER`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQueryTemplate {
    pub endpoint: String,
    pub api_key: String,
}

impl Default for SearchQueryTemplate {
    fn default() -> Self {
        Self {
            endpoint: global_constants::DEFAULT_SEARCH_ENDPOINT.to_string(),
            api_key: global_constants::DEFAULT_API_KEY.to_string(),
        }
    }
}

/// Percent-encodes everything outside the RFC 3986 unreserved set.
pub fn encode_keyword(keyword: &str) -> String {
    urlencoding::encode(keyword).into_owned()
}

impl SearchQueryTemplate {
    pub fn build_url(&self, keyword: &str) -> Result<Url, SearchError> {
        let endpoint = self.parse_endpoint()?;
        let encoded_keyword = encode_keyword(keyword);

        let raw_url = format!(
            "{}?{}={}&{}={}&{}={}&{}={}&{}={}",
            endpoint,
            global_constants::QUERY_PARAM_API_KEY,
            urlencoding::encode(&self.api_key),
            global_constants::QUERY_PARAM_FORMAT,
            global_constants::RESPONSE_FORMAT,
            global_constants::QUERY_PARAM_KEYWORD,
            encoded_keyword,
            global_constants::QUERY_PARAM_MAX,
            global_constants::DEFAULT_MAX_RESULTS,
            global_constants::QUERY_PARAM_ORDER,
            global_constants::DEFAULT_RESULT_ORDER,
        );

        let url = Url::parse(&raw_url)
            .map_err(|error| SearchError::RequestBuild(format!("{}: {}", raw_url, error)))?;

        Self::verify_keyword_round_trip(&url, keyword)?;

        Ok(url)
    }

    fn parse_endpoint(&self) -> Result<Url, SearchError> {
        let endpoint = Url::parse(self.endpoint.trim()).map_err(|error| {
            SearchError::RequestBuild(format!("invalid endpoint {:?}: {}", self.endpoint, error))
        })?;

        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(SearchError::RequestBuild(format!(
                "endpoint {} is not an http(s) URL",
                endpoint
            )));
        }

        if endpoint.query().is_some() || endpoint.fragment().is_some() {
            return Err(SearchError::RequestBuild(format!(
                "endpoint {} must not carry a query or fragment",
                endpoint
            )));
        }

        Ok(endpoint)
    }

    fn verify_keyword_round_trip(url: &Url, keyword: &str) -> Result<(), SearchError> {
        let decoded = url
            .query_pairs()
            .find(|(name, _)| name == global_constants::QUERY_PARAM_KEYWORD)
            .map(|(_, value)| value.into_owned());

        match decoded {
            Some(value) if value == keyword => Ok(()),
            Some(value) => Err(SearchError::Encoding(format!(
                "keyword {:?} decoded back as {:?}",
                keyword, value
            ))),
            None => Err(SearchError::Encoding(format!(
                "keyword {:?} missing from {}",
                keyword, url
            ))),
        }
    }
}
