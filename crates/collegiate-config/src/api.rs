use std::env;

/// Backend API endpoint configuration.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Base URL of the college API, without a trailing slash.
    pub base_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        Self::from_vars(
            env::var("COLLEGIATE_API_URL").ok(),
            env::var("COLLEGIATE_HTTP_TIMEOUT_SECS").ok(),
        )
    }

    fn from_vars(base_url: Option<String>, timeout_secs: Option<String>) -> Self {
        Self {
            base_url: base_url
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| "http://localhost:8080".to_string()),
            timeout_secs: timeout_secs
                .and_then(|s| s.parse().ok())
                .unwrap_or(30),
        }
    }
}
