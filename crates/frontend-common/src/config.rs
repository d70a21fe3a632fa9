//! Frontend configuration

use authclient_http::ClientConfig;
use web_sys::window;

/// API base URL baked in at build time, if any
const BUILD_API_URL: Option<&str> = option_env!("API_URL");

/// Pick the base URL: the build-time value wins, then the page origin
fn resolve_base_url(build_time: Option<&str>, origin: Option<String>) -> String {
    build_time
        .filter(|url| !url.is_empty())
        .map(ToString::to_string)
        .or(origin)
        .unwrap_or_default()
}

/// Get the base URL for API calls
pub fn base_url() -> String {
    let origin = window().and_then(|w| w.location().origin().ok());
    resolve_base_url(BUILD_API_URL, origin)
}

/// Client configuration for the browser build
pub fn client_config() -> ClientConfig {
    ClientConfig::new(base_url())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_time_url_takes_precedence() {
        assert_eq!(
            resolve_base_url(Some("https://api.example.com"), Some("https://app.example.com".into())),
            "https://api.example.com"
        );
    }

    #[test]
    fn falls_back_to_origin() {
        assert_eq!(
            resolve_base_url(None, Some("https://app.example.com".into())),
            "https://app.example.com"
        );
        assert_eq!(
            resolve_base_url(Some(""), Some("https://app.example.com".into())),
            "https://app.example.com"
        );
    }

    #[test]
    fn empty_without_any_source() {
        assert_eq!(resolve_base_url(None, None), "");
    }
}
