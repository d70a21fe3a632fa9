//! Request and response interceptors
//!
//! The outbound stage decides whether a request carries the stored access
//! token. The inbound stage turns a first 401 into a refresh of the access
//! token followed by a single re-submission of the same request.

use super::error::ClientError;
use super::request::RequestContext;
use super::response::ApiResponse;
use super::AuthClient;

/// URL fragments that must never receive an `Authorization` header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthRoutes {
    routes: Vec<String>,
}

impl AuthRoutes {
    pub fn new<I, S>(routes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            routes: routes.into_iter().map(Into::into).collect(),
        }
    }

    /// True if `url` contains any configured fragment
    pub fn matches(&self, url: &str) -> bool {
        self.routes.iter().any(|route| url.contains(route.as_str()))
    }
}

/// What the inbound stage decided for a finished request
#[derive(Debug)]
pub(crate) enum Inbound {
    /// Deliver this result to the caller
    Complete(Result<ApiResponse, ClientError>),
    /// Submit the request again; credentials were refreshed
    Retry(RequestContext),
}

impl AuthClient {
    /// Attach `Authorization: Bearer <token>` when a token is stored and the
    /// URL is not an auth route. An existing header is left alone otherwise.
    pub(crate) fn outbound(&self, ctx: &mut RequestContext) -> Result<(), ClientError> {
        let url = ctx.descriptor.url();
        if self.auth_routes.matches(url) {
            tracing::debug!(url, "auth route, not attaching access token");
            return Ok(());
        }

        match self.access_token() {
            Some(token) => {
                tracing::debug!(url, "attaching access token");
                ctx.descriptor.set_bearer(&token)
            }
            None => Ok(()),
        }
    }

    /// Inspect the outcome of a transmission.
    ///
    /// Only a 401 on a request that has not been retried yet, with a refresh
    /// token available, is intercepted. Everything else reaches the caller
    /// unchanged.
    pub(crate) async fn inbound(
        &self,
        mut ctx: RequestContext,
        outcome: Result<ApiResponse, ClientError>,
    ) -> Inbound {
        let error = match outcome {
            Ok(response) => return Inbound::Complete(Ok(response)),
            Err(error) => error,
        };

        if !error.is_auth_expired() || ctx.retried {
            return Inbound::Complete(Err(error));
        }
        let Some(refresh_token) = self.refresh_token() else {
            return Inbound::Complete(Err(error));
        };

        ctx.retried = true;
        tracing::debug!(url = ctx.descriptor.url(), "401 received, refreshing access token");

        let refreshed = match self.refresh_access_token(&refresh_token).await {
            Ok(access) => ctx.descriptor.set_bearer(&access),
            Err(refresh_error) => Err(refresh_error),
        };

        match refreshed {
            Ok(()) => Inbound::Retry(ctx),
            Err(refresh_error) => {
                tracing::warn!(error = %refresh_error, "token refresh failed, ending session");
                self.end_session();
                Inbound::Complete(Err(refresh_error))
            }
        }
    }
}
