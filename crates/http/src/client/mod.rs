//! Authenticated HTTP client
//!
//! [`AuthClient`] wraps a `reqwest::Client` with two interceptors: outgoing
//! requests get the stored access token unless they target an auth route, and
//! a first 401 triggers a refresh of the access token followed by exactly one
//! retry. When the refresh fails both tokens are dropped and the injected
//! [`Navigator`] is sent to the login page.

pub mod config;
pub mod error;
pub mod interceptor;
pub mod navigation;
mod refresh;
pub mod request;
pub mod response;
pub mod storage;

use config::ClientConfig;
use error::ClientError;
use interceptor::{AuthRoutes, Inbound};
use navigation::{Navigator, NoopNavigator};
use request::{RequestContext, RequestDescriptor};
use reqwest::{Client, ClientBuilder, Method};
use response::ApiResponse;
use std::sync::Arc;
use std::time::Duration;
use storage::{MemoryTokenStore, TokenStore};

/// HTTP client that manages bearer credentials
#[derive(Clone)]
pub struct AuthClient {
    client: Client,
    config: Arc<ClientConfig>,
    auth_routes: AuthRoutes,
    tokens: Arc<dyn TokenStore>,
    navigator: Arc<dyn Navigator>,
}

impl std::fmt::Debug for AuthClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthClient")
            .field("base_url", &self.config.base_url)
            .field("auth_routes", &self.auth_routes)
            .finish_non_exhaustive()
    }
}

impl AuthClient {
    /// Create a new client builder
    pub fn builder() -> AuthClientBuilder {
        AuthClientBuilder::default()
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        self.config.normalized_base_url()
    }

    /// Get the active configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Get the token store
    pub fn tokens(&self) -> &Arc<dyn TokenStore> {
        &self.tokens
    }

    /// Describe a request against `path`
    pub fn request(&self, method: Method, path: &str) -> RequestDescriptor {
        RequestDescriptor::new(method, path)
    }

    pub fn get(&self, path: &str) -> RequestDescriptor {
        self.request(Method::GET, path)
    }

    pub fn post(&self, path: &str) -> RequestDescriptor {
        self.request(Method::POST, path)
    }

    pub fn put(&self, path: &str) -> RequestDescriptor {
        self.request(Method::PUT, path)
    }

    pub fn patch(&self, path: &str) -> RequestDescriptor {
        self.request(Method::PATCH, path)
    }

    pub fn delete(&self, path: &str) -> RequestDescriptor {
        self.request(Method::DELETE, path)
    }

    /// Send a request through both interceptors.
    ///
    /// Non-2xx responses are returned as errors. A 401 may be recovered
    /// transparently by refreshing the access token once.
    pub async fn send(&self, descriptor: RequestDescriptor) -> Result<ApiResponse, ClientError> {
        let mut ctx = RequestContext::new(descriptor);
        loop {
            let outcome = match self.outbound(&mut ctx) {
                Ok(()) => self.transmit(&ctx).await,
                Err(e) => Err(e),
            };

            match self.inbound(ctx, outcome).await {
                Inbound::Complete(result) => return result,
                Inbound::Retry(retry) => ctx = retry,
            }
        }
    }

    /// Send a request and decode its JSON body
    pub async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        descriptor: RequestDescriptor,
    ) -> Result<T, ClientError> {
        self.send(descriptor).await?.json()
    }

    /// Store a freshly issued credential pair
    pub fn login(&self, access_token: &str, refresh_token: &str) -> Result<(), ClientError> {
        self.tokens.set(&self.config.access_token_key, access_token)?;
        self.tokens.set(&self.config.refresh_token_key, refresh_token)
    }

    /// Forget both credentials. Does not navigate.
    pub fn logout(&self) {
        self.tokens.remove(&self.config.access_token_key);
        self.tokens.remove(&self.config.refresh_token_key);
    }

    /// Whether an access token is stored
    pub fn is_authenticated(&self) -> bool {
        self.access_token().is_some()
    }

    /// Stored access token. Empty values count as absent.
    pub fn access_token(&self) -> Option<String> {
        self.tokens
            .get(&self.config.access_token_key)
            .filter(|t| !t.is_empty())
    }

    /// Stored refresh token. Empty values count as absent.
    pub fn refresh_token(&self) -> Option<String> {
        self.tokens
            .get(&self.config.refresh_token_key)
            .filter(|t| !t.is_empty())
    }

    /// Absolute URLs pass through, protocol-relative URLs take the base URL's
    /// scheme, and everything else is joined to the base URL
    pub fn resolve_url(&self, url: &str) -> String {
        let base = self.base_url();
        if url.starts_with("//") {
            let scheme = base.split_once("://").map_or("https", |(scheme, _)| scheme);
            return format!("{scheme}:{url}");
        }
        if has_scheme(url) {
            return url.to_string();
        }
        format!("{}/{}", base, url.trim_start_matches('/'))
    }

    async fn transmit(&self, ctx: &RequestContext) -> Result<ApiResponse, ClientError> {
        let descriptor = &ctx.descriptor;
        let url = self.resolve_url(descriptor.url());

        let mut request = self
            .client
            .request(descriptor.method().clone(), url)
            .headers(descriptor.headers().clone());
        if let Some(body) = descriptor.body() {
            request = request.body(body.clone());
        }

        let response = request.send().await?;
        ApiResponse::from_reqwest(response).await
    }
}

/// True if `url` starts with `<scheme>://`, where a scheme is a letter
/// followed by letters, digits, `+`, `-` or `.`
fn has_scheme(url: &str) -> bool {
    let Some((scheme, _)) = url.split_once("://") else {
        return false;
    };
    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Builder for AuthClient
#[derive(Default)]
pub struct AuthClientBuilder {
    config: Option<ClientConfig>,
    base_url: Option<String>,
    timeout: Option<Duration>,
    tokens: Option<Arc<dyn TokenStore>>,
    navigator: Option<Arc<dyn Navigator>>,
}

impl AuthClientBuilder {
    /// Start from a full configuration
    #[must_use]
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the base URL, overriding the configuration's
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the request timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set where credentials are kept. Defaults to an in-memory store.
    #[must_use]
    pub fn token_store(mut self, store: Arc<dyn TokenStore>) -> Self {
        self.tokens = Some(store);
        self
    }

    /// Set what happens when the session cannot be recovered. Defaults to
    /// doing nothing.
    #[must_use]
    pub fn navigator(mut self, navigator: Arc<dyn Navigator>) -> Self {
        self.navigator = Some(navigator);
        self
    }

    /// Build the client
    pub fn build(self) -> Result<AuthClient, ClientError> {
        let mut config = self.config.unwrap_or_default();
        if let Some(base_url) = self.base_url {
            config.base_url = base_url;
        }
        if self.timeout.is_some() {
            config.timeout = self.timeout;
        }

        if config.base_url.is_empty() {
            return Err(ClientError::Configuration("base_url is required".into()));
        }
        url::Url::parse(&config.base_url)
            .map_err(|e| ClientError::Configuration(format!("invalid base_url: {e}")))?;

        let mut client_builder = ClientBuilder::new().user_agent(config.user_agent.as_str());

        #[cfg(not(target_arch = "wasm32"))]
        if let Some(timeout) = config.timeout {
            client_builder = client_builder.timeout(timeout);
        }

        let client = client_builder.build()?;
        let auth_routes = AuthRoutes::new(config.auth_routes.iter().cloned());

        Ok(AuthClient {
            client,
            config: Arc::new(config),
            auth_routes,
            tokens: self
                .tokens
                .unwrap_or_else(|| Arc::new(MemoryTokenStore::new())),
            navigator: self.navigator.unwrap_or_else(|| Arc::new(NoopNavigator)),
        })
    }
}
