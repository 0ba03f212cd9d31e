/// Default base URL for the Simwood REST endpoint.
pub const DEFAULT_API_URL: &str = "http://ws.simwood.com/REST.php";

/// Default token lifetime requested at authentication (one day).
pub const DEFAULT_TOKEN_THRESHOLD_SECS: u64 = 86_400;
