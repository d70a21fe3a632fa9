//! Access token refresh

use super::error::ClientError;
use super::response::ApiResponse;
use super::AuthClient;
use crate::types::{RefreshRequest, RefreshResponse};

impl AuthClient {
    /// Exchange `refresh_token` for a new access token and store it.
    ///
    /// The call bypasses the interceptors. It does not clear the session on
    /// failure; callers going through [`AuthClient::send`] get that behaviour
    /// from the response interceptor.
    pub async fn refresh_access_token(&self, refresh_token: &str) -> Result<String, ClientError> {
        let response = self
            .client
            .post(self.config.refresh_url())
            .json(&RefreshRequest {
                refresh: refresh_token.to_string(),
            })
            .send()
            .await?;

        let RefreshResponse { access } = ApiResponse::from_reqwest(response).await?.json()?;

        self.tokens.set(&self.config.access_token_key, &access)?;
        tracing::info!("access token refreshed");

        Ok(access)
    }

    /// Drop both credentials and send the user to the login page
    pub(crate) fn end_session(&self) {
        self.tokens.remove(&self.config.access_token_key);
        self.tokens.remove(&self.config.refresh_token_key);
        tracing::warn!(location = %self.config.login_path, "redirecting to login");
        self.navigator.navigate(&self.config.login_path);
    }
}
