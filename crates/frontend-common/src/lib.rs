//! Browser side of the authenticated client
//!
//! Wires [`authclient_http::AuthClient`] to `window.localStorage` for the two
//! credentials and to `window.location` for the login redirect.

pub mod client;
pub mod config;
pub mod logging;
pub mod navigation;
pub mod storage;

pub use client::{auth_client, reset_client};
pub use config::{base_url, client_config};
pub use logging::init_logging;
pub use navigation::WindowNavigator;
pub use storage::BrowserTokenStore;
