//! `localStorage`-backed token store

use authclient_http::{ClientError, TokenStore};
use wasm_bindgen::JsValue;
use web_sys::Storage;

/// Keeps credentials in `window.localStorage` as plain strings, readable by
/// any other script on the page that uses the same keys.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTokenStore;

/// Get localStorage
fn get_local_storage() -> Option<Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

fn js_error(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

impl TokenStore for BrowserTokenStore {
    fn get(&self, key: &str) -> Option<String> {
        get_local_storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ClientError> {
        let storage = get_local_storage()
            .ok_or_else(|| ClientError::Storage("localStorage is unavailable".into()))?;
        storage
            .set_item(key, value)
            .map_err(|e| ClientError::Storage(js_error(&e)))
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = get_local_storage()
            && let Err(e) = storage.remove_item(key)
        {
            tracing::warn!(key, error = %js_error(&e), "failed to remove item from localStorage");
        }
    }
}
