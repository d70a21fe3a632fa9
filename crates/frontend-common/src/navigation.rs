//! Redirects through `window.location`

use authclient_http::Navigator;

/// Navigates the current page by assigning `window.location.href`
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowNavigator;

impl Navigator for WindowNavigator {
    fn navigate(&self, location: &str) {
        let Some(window) = web_sys::window() else {
            tracing::warn!(location, "no window to navigate");
            return;
        };
        if let Err(e) = window.location().set_href(location) {
            tracing::error!(location, error = ?e, "navigation failed");
        }
    }
}
