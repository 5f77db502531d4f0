use shared::constants::DEFAULT_API_BASE_URL;
use web_sys::window;

/// Origin the API calls go to. The server renders the pages it serves, so the
/// current origin is used whenever there is one.
pub fn get_api_base_url() -> String {
    if let Some(window) = window() {
        if let Ok(host) = window.location().host() {
            if !host.is_empty() {
                let protocol = window.location().protocol().unwrap_or_else(|_| "http:".to_string());
                return format!("{}//{}", protocol, host);
            }
        }
    }

    DEFAULT_API_BASE_URL.to_string()
}

pub fn api_url(path: &str) -> String {
    format!("{}{}", get_api_base_url(), path)
}
