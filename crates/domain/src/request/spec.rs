//! Request descriptor type

use url::Url;

use super::{Headers, HttpMethod, RequestBody};
use crate::error::{DomainError, DomainResult};

/// Descriptor for one exchange with the Costealo API.
///
/// Paths are server-relative (`/api/...`) and resolved against the fixed
/// base origin when the request is dispatched.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// Server-relative route, starting with `/`.
    pub path: String,
    /// HTTP method.
    pub method: HttpMethod,
    /// Header overrides applied on top of the gateway defaults.
    pub headers: Headers,
    /// Optional request body.
    pub body: RequestBody,
}

impl ApiRequest {
    /// Creates a bodyless request descriptor.
    #[must_use]
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method,
            headers: Headers::new(),
            body: RequestBody::None,
        }
    }

    /// Creates a GET request for the given path.
    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    /// Creates a DELETE request for the given path.
    #[must_use]
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Delete, path)
    }

    /// Replaces the body.
    #[must_use]
    pub fn with_body(mut self, body: RequestBody) -> Self {
        self.body = body;
        self
    }

    /// Adds a header override.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.set(name, value);
        self
    }

    /// Resolves the relative path against the base origin.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidPath`] if the path does not start
    /// with `/` or does not combine into a valid absolute URL.
    pub fn resolve_against(&self, base: &Url) -> DomainResult<Url> {
        if !self.path.starts_with('/') {
            return Err(DomainError::InvalidPath(self.path.clone()));
        }
        base.join(&self.path)
            .map_err(|e| DomainError::InvalidPath(format!("{}: {e}", self.path)))
    }
}
