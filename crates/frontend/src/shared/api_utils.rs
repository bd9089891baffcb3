//! API utilities for talking to the analysis service.

/// Analysis service port. The service runs as a separate local process;
/// there is no other configuration surface.
const SERVICE_PORT: u16 = 8000;

/// Get the base URL for analysis-service requests.
///
/// Scheme and hostname come from the current window location, the port is
/// fixed by [`SERVICE_PORT`].
///
/// # Returns
/// - Base URL like "http://127.0.0.1:8000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, SERVICE_PORT)
}

/// Build a full service URL from a path
///
/// # Example
/// ```no_run
/// use frontend::shared::api_utils::api_url;
/// let url = api_url("/upload");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
