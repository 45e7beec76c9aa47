pub const APPLICATION_NAME: &str = "Okashi Search - Desktop";
pub const APPLICATION_TITLE: &str = "Okashi Search";
pub const APPLICATION_CONFIG_DIR: &str = "okashi-search";

pub const LOG_TAG_APP: &str = "[APP]";
pub const LOG_TAG_SEARCH: &str = "[SEARCH]";

pub const DEFAULT_SEARCH_ENDPOINT: &str = "https://sysbird.jp/toriko/api/";
pub const DEFAULT_API_KEY: &str = "guest";
pub const DEFAULT_MAX_RESULTS: u32 = 10;
pub const DEFAULT_RESULT_ORDER: &str = "r";
pub const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 15;

pub const RESPONSE_FORMAT: &str = "json";

pub const QUERY_PARAM_API_KEY: &str = "apikey";
pub const QUERY_PARAM_FORMAT: &str = "format";
pub const QUERY_PARAM_KEYWORD: &str = "keyword";
pub const QUERY_PARAM_MAX: &str = "max";
pub const QUERY_PARAM_ORDER: &str = "order";

pub const SETTINGS_FILE_NAME: &str = "settings.json";

pub const KEYWORD_PLACEHOLDER: &str = "Enter a keyword";
pub const RESULT_IMAGE_HEIGHT: f32 = 40.0;

pub const STATUS_READY: &str = "Type a keyword and press Enter";
pub const STATUS_SEARCHING: &str = "Searching...";
