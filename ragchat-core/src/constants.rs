//! Fixed values shared by the controller and its views

/// Number of knowledge-base chunks requested per query
pub const DEFAULT_TOP_K: u32 = 3;

/// Backend address used when neither config nor CLI provides one
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

pub const HEALTH_PATH: &str = "/health";
pub const CHAT_PATH: &str = "/chat";
pub const SEARCH_PATH: &str = "/search";

pub const EMPTY_KEY_ALERT: &str = "Please enter your API key";
pub const CHAT_FALLBACK_ERROR: &str = "Failed to get response";
pub const SEARCH_FALLBACK_ERROR: &str = "Search failed";
pub const NETWORK_ERROR_PREFIX: &str = "Network error: ";
pub const GENERIC_CHUNKS_LABEL: &str = "Knowledge base loaded";
pub const NO_SEARCH_HITS: &str = "No matching chunks found.";
