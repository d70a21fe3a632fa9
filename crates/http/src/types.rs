//! Wire types exchanged with the authentication server

use serde::{Deserialize, Serialize};

/// Token refresh request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshRequest {
    /// Refresh token issued at login
    pub refresh: String,
}

/// Token refresh response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshResponse {
    /// Newly issued access token
    pub access: String,
}
