//! Browser tests for the localStorage bindings

#![cfg(target_arch = "wasm32")]

use authclient_frontend_common::BrowserTokenStore;
use authclient_http::{AuthClient, TokenStore};
use std::sync::Arc;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};

wasm_bindgen_test_configure!(run_in_browser);

fn raw_storage() -> web_sys::Storage {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .expect("localStorage available")
}

#[wasm_bindgen_test]
fn stores_plain_strings() {
    let store = BrowserTokenStore;
    store.set("token", "T1").unwrap();

    assert_eq!(raw_storage().get_item("token").unwrap().as_deref(), Some("T1"));
    assert_eq!(store.get("token").as_deref(), Some("T1"));

    store.remove("token");
    assert_eq!(store.get("token"), None);
}

#[wasm_bindgen_test]
fn reads_values_written_by_other_scripts() {
    raw_storage().set_item("refreshToken", "R-from-js").unwrap();
    assert_eq!(BrowserTokenStore.get("refreshToken").as_deref(), Some("R-from-js"));
    BrowserTokenStore.remove("refreshToken");
}

#[wasm_bindgen_test]
fn client_session_uses_browser_store() {
    let client = AuthClient::builder()
        .base_url("http://localhost:8000")
        .token_store(Arc::new(BrowserTokenStore))
        .build()
        .unwrap();

    client.login("T1", "R1").unwrap();
    assert!(client.is_authenticated());
    assert_eq!(raw_storage().get_item("refreshToken").unwrap().as_deref(), Some("R1"));

    client.logout();
    assert_eq!(raw_storage().get_item("token").unwrap(), None);
}
