//! Outgoing request description

use bytes::Bytes;
use reqwest::Method;
use reqwest::header::{self, HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;

use super::error::ClientError;

/// Method, URL, headers and body of an outgoing call
///
/// Unlike `reqwest::Request` this is always cloneable, so a request can be
/// submitted again after its credentials were refreshed.
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    method: Method,
    url: String,
    headers: HeaderMap,
    body: Option<Bytes>,
}

impl RequestDescriptor {
    /// Describe a request. `url` is either a path relative to the client's
    /// base URL or an absolute URL.
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: HeaderMap::new(),
            body: None,
        }
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    pub fn body(&self) -> Option<&Bytes> {
        self.body.as_ref()
    }

    /// Current `Authorization` header, if any
    pub fn authorization(&self) -> Option<&str> {
        self.headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
    }

    /// Set `Authorization: Bearer <token>`, replacing any previous value
    pub fn set_bearer(&mut self, token: &str) -> Result<(), ClientError> {
        let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|e| ClientError::InvalidHeader(e.to_string()))?;
        value.set_sensitive(true);
        self.headers.insert(header::AUTHORIZATION, value);
        Ok(())
    }

    /// Add a header
    pub fn header(mut self, name: &str, value: &str) -> Result<Self, ClientError> {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| ClientError::InvalidHeader(e.to_string()))?;
        let value =
            HeaderValue::from_str(value).map_err(|e| ClientError::InvalidHeader(e.to_string()))?;
        self.headers.insert(name, value);
        Ok(self)
    }

    /// Set a raw body
    #[must_use]
    pub fn body_bytes(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Serialize `value` as the JSON body and set the content type
    pub fn json<T: Serialize + ?Sized>(mut self, value: &T) -> Result<Self, ClientError> {
        let body = serde_json::to_vec(value)?;
        self.headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        self.body = Some(Bytes::from(body));
        Ok(self)
    }
}

/// A request in flight together with its refresh-retry state
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub descriptor: RequestDescriptor,
    /// Set once a refresh-and-retry has been attempted for this request.
    /// Never reset.
    pub retried: bool,
}

impl RequestContext {
    pub fn new(descriptor: RequestDescriptor) -> Self {
        Self {
            descriptor,
            retried: false,
        }
    }
}

impl From<RequestDescriptor> for RequestContext {
    fn from(descriptor: RequestDescriptor) -> Self {
        Self::new(descriptor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn set_bearer_replaces_existing_header() {
        let mut req = RequestDescriptor::new(Method::GET, "/items/");
        req.set_bearer("T1").unwrap();
        req.set_bearer("T2").unwrap();
        assert_eq!(req.authorization(), Some("Bearer T2"));
        assert_eq!(req.headers().get_all(header::AUTHORIZATION).iter().count(), 1);
    }

    #[test]
    fn set_bearer_rejects_control_characters() {
        let mut req = RequestDescriptor::new(Method::GET, "/items/");
        let result = req.set_bearer("bad\ntoken");
        assert!(matches!(result, Err(ClientError::InvalidHeader(_))));
        assert_eq!(req.authorization(), None);
    }

    #[test]
    fn json_sets_body_and_content_type() {
        let req = RequestDescriptor::new(Method::POST, "/items/")
            .json(&json!({"name": "widget"}))
            .unwrap();
        assert_eq!(
            req.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
        let body: serde_json::Value = serde_json::from_slice(req.body().unwrap()).unwrap();
        assert_eq!(body["name"], "widget");
    }

    #[test]
    fn new_context_is_unretried() {
        let ctx = RequestContext::from(RequestDescriptor::new(Method::GET, "/"));
        assert!(!ctx.retried);
    }
}
