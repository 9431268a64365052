//! Build-time configuration.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Base URL used when `SB_API_URL` is not set at build time.
pub const DEFAULT_API_URL: &str = "http://localhost:4000";

/// REST API base URL, without a trailing slash.
///
/// Read from the `SB_API_URL` environment variable at compile time,
/// falling back to [`DEFAULT_API_URL`].
pub fn api_base_url() -> String {
    normalize_base_url(option_env!("SB_API_URL").unwrap_or(DEFAULT_API_URL))
}

/// Strip trailing slashes so endpoint paths can always be joined with `/`.
pub fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_owned()
}
