use std::env;
use std::time::Duration;

/// Environment variable holding the backend base URL.
pub const API_BASE_URL: &str = trip::BASE_URL_KEY;

/// Environment variable holding the request timeout in whole seconds.
pub const API_TIMEOUT_SECS: &str = "API_TIMEOUT_SECS";

/// Environment variable holding the driver's session token.
pub const SESSION_TOKEN: &str = "DRIVEHUB_SESSION_TOKEN";

const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

pub fn get_api_base_url() -> String {
    env::var(API_BASE_URL).unwrap_or_else(|_| {
        let default = DEFAULT_API_BASE_URL.to_string();
        tracing::trace!("{API_BASE_URL} not set, using default: {default}");
        default
    })
}

/// Request timeout for the HTTP client. `None` leaves requests unbounded.
pub fn get_request_timeout() -> Option<Duration> {
    let value = env::var(API_TIMEOUT_SECS).ok()?;
    match value.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Some(Duration::from_secs(secs)),
        _ => {
            tracing::trace!("{API_TIMEOUT_SECS} is not a positive integer: {value}");
            None
        }
    }
}

pub fn get_session_token() -> Option<String> {
    let value = env::var(SESSION_TOKEN).ok()?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    tracing::trace!("{SESSION_TOKEN} loaded from environment");
    Some(trimmed.to_string())
}
