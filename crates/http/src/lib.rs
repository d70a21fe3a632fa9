//! Bearer-token HTTP client
//!
//! Attaches a stored access token to outgoing requests, skips it for
//! authentication endpoints, and recovers from an expired token by exchanging
//! the stored refresh token once before giving up and sending the user to the
//! login page. Storage and navigation are injected, so the same client runs in
//! the browser (see `authclient-frontend-common`) and natively.

pub mod client;
pub mod types;

pub use client::config::ClientConfig;
pub use client::error::ClientError;
pub use client::interceptor::AuthRoutes;
pub use client::navigation::{Navigator, NoopNavigator};
pub use client::request::{RequestContext, RequestDescriptor};
pub use client::response::ApiResponse;
pub use client::storage::{MemoryTokenStore, TokenStore};
pub use client::{AuthClient, AuthClientBuilder};
