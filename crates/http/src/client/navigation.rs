//! Navigation side effect triggered when the session cannot be recovered

/// Capability to send the user somewhere else, typically a login page
pub trait Navigator: Send + Sync {
    /// Navigate to `location`
    fn navigate(&self, location: &str);
}

impl<F> Navigator for F
where
    F: Fn(&str) + Send + Sync,
{
    fn navigate(&self, location: &str) {
        self(location);
    }
}

/// Navigator that ignores every request
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNavigator;

impl Navigator for NoopNavigator {
    fn navigate(&self, location: &str) {
        tracing::debug!(location, "navigation requested without a navigator");
    }
}
