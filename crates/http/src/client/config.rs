//! Client configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default endpoint used to exchange a refresh token for a new access token
pub const DEFAULT_REFRESH_PATH: &str = "/token/refresh/";
/// Default location the user is sent to when a refresh fails
pub const DEFAULT_LOGIN_PATH: &str = "/login";
/// Default storage key holding the access token
pub const DEFAULT_ACCESS_TOKEN_KEY: &str = "token";
/// Default storage key holding the refresh token
pub const DEFAULT_REFRESH_TOKEN_KEY: &str = "refreshToken";
/// URL fragments that never receive an `Authorization` header by default
pub const DEFAULT_AUTH_ROUTES: [&str; 2] = ["/token/", "/register/"];

/// Configuration for [`AuthClient`](super::AuthClient)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL every relative request path is resolved against
    pub base_url: String,
    /// Path of the refresh endpoint, relative to `base_url`
    pub refresh_path: String,
    /// Navigation target after an unrecoverable refresh failure
    pub login_path: String,
    /// URL substrings exempt from automatic token attachment
    pub auth_routes: Vec<String>,
    /// Storage key of the access token
    pub access_token_key: String,
    /// Storage key of the refresh token
    pub refresh_token_key: String,
    /// User agent sent by the underlying transport
    pub user_agent: String,
    /// Transport timeout. Not supported on wasm32, where it is ignored.
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            refresh_path: DEFAULT_REFRESH_PATH.to_string(),
            login_path: DEFAULT_LOGIN_PATH.to_string(),
            auth_routes: DEFAULT_AUTH_ROUTES.iter().map(ToString::to_string).collect(),
            access_token_key: DEFAULT_ACCESS_TOKEN_KEY.to_string(),
            refresh_token_key: DEFAULT_REFRESH_TOKEN_KEY.to_string(),
            user_agent: concat!("authclient/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: None,
        }
    }
}

impl ClientConfig {
    /// Create a configuration for the given base URL with all other values defaulted
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Create configuration from environment variables
    ///
    /// Supports the following environment variables:
    /// - `API_URL` or `VITE_API_URL`: Base URL of the API
    /// - `API_REFRESH_PATH`: Refresh endpoint path
    /// - `API_LOGIN_PATH`: Login page path
    /// - `API_TIMEOUT_SECS`: Transport timeout in whole seconds
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let base_url = std::env::var("API_URL")
            .or_else(|_| std::env::var("VITE_API_URL"))
            .unwrap_or(defaults.base_url);

        let refresh_path = std::env::var("API_REFRESH_PATH").unwrap_or(defaults.refresh_path);
        let login_path = std::env::var("API_LOGIN_PATH").unwrap_or(defaults.login_path);

        let timeout = std::env::var("API_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_secs);

        Self {
            base_url,
            refresh_path,
            login_path,
            timeout,
            ..defaults
        }
    }

    /// Base URL without a trailing slash
    pub fn normalized_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Absolute URL of the refresh endpoint
    pub fn refresh_url(&self) -> String {
        format!("{}{}", self.normalized_base_url(), self.refresh_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_wire_contract() {
        let config = ClientConfig::default();
        assert_eq!(config.refresh_path, "/token/refresh/");
        assert_eq!(config.login_path, "/login");
        assert_eq!(config.access_token_key, "token");
        assert_eq!(config.refresh_token_key, "refreshToken");
        assert_eq!(config.auth_routes, vec!["/token/", "/register/"]);
        assert!(config.timeout.is_none());
    }

    #[test]
    fn refresh_url_joins_without_double_slash() {
        let config = ClientConfig::new("https://api.example.com/");
        assert_eq!(
            config.refresh_url(),
            "https://api.example.com/token/refresh/"
        );
    }

    const ENV_VARS: [&str; 5] = [
        "API_URL",
        "VITE_API_URL",
        "API_REFRESH_PATH",
        "API_LOGIN_PATH",
        "API_TIMEOUT_SECS",
    ];

    fn clear_env() {
        for var in ENV_VARS {
            // SAFETY: only this test touches these variables.
            unsafe { std::env::remove_var(var) };
        }
    }

    fn set_env(var: &str, value: &str) {
        // SAFETY: only this test touches these variables.
        unsafe { std::env::set_var(var, value) };
    }

    // Environment is process-global, so every case runs inside one test.
    #[test]
    fn from_env_precedence_and_defaults() {
        clear_env();
        let config = ClientConfig::from_env();
        assert_eq!(config, ClientConfig::default());

        set_env("VITE_API_URL", "http://vite.example");
        assert_eq!(ClientConfig::from_env().base_url, "http://vite.example");

        set_env("API_URL", "http://api.example");
        set_env("API_REFRESH_PATH", "/auth/refresh/");
        set_env("API_LOGIN_PATH", "/signin");
        set_env("API_TIMEOUT_SECS", "15");
        let config = ClientConfig::from_env();
        assert_eq!(config.base_url, "http://api.example");
        assert_eq!(config.refresh_path, "/auth/refresh/");
        assert_eq!(config.login_path, "/signin");
        assert_eq!(config.timeout, Some(Duration::from_secs(15)));
        assert_eq!(config.access_token_key, "token");

        set_env("API_TIMEOUT_SECS", "soon");
        assert_eq!(ClientConfig::from_env().timeout, None);

        clear_env();
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"base_url":"http://localhost:8000"}"#).unwrap();
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.login_path, "/login");
    }
}
