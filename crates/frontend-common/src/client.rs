//! Process-wide client instance

use crate::config::client_config;
use crate::navigation::WindowNavigator;
use crate::storage::BrowserTokenStore;
use authclient_http::{AuthClient, ClientError};
use once_cell::sync::Lazy;
use std::sync::{Arc, Mutex, PoisonError};

/// Global client instance
static AUTH_CLIENT: Lazy<Mutex<Option<AuthClient>>> = Lazy::new(|| Mutex::new(None));

/// Get the shared client, creating it on first use
pub fn auth_client() -> Result<AuthClient, ClientError> {
    let mut client_lock = AUTH_CLIENT.lock().unwrap_or_else(PoisonError::into_inner);

    if let Some(client) = client_lock.as_ref() {
        return Ok(client.clone());
    }

    let client = AuthClient::builder()
        .config(client_config())
        .token_store(Arc::new(BrowserTokenStore))
        .navigator(Arc::new(WindowNavigator))
        .build()?;
    *client_lock = Some(client.clone());
    Ok(client)
}

/// Drop the shared client so the next call rebuilds it
pub fn reset_client() {
    *AUTH_CLIENT.lock().unwrap_or_else(PoisonError::into_inner) = None;
}
