//! Measurement unit service

use std::sync::Arc;

use serde_json::Value;

use crate::error::ApiResult;
use crate::gateway::ApiGateway;
use crate::ports::{CredentialStore, HttpTransport};

/// Read-only catalog of measurement units.
pub struct UnitsApi<T, S> {
    gateway: Arc<ApiGateway<T, S>>,
}

impl<T, S> UnitsApi<T, S>
where
    T: HttpTransport,
    S: CredentialStore,
{
    /// Creates the service over a shared gateway.
    #[must_use]
    pub fn new(gateway: Arc<ApiGateway<T, S>>) -> Self {
        Self { gateway }
    }

    /// Fetches the full unit catalog.
    ///
    /// # Errors
    ///
    /// Fails like any gateway call.
    pub async fn catalog(&self) -> ApiResult<Value> {
        self.gateway.get("/api/Units/catalog").await
    }

    /// Fetches the units valid for new items.
    ///
    /// # Errors
    ///
    /// Fails like any gateway call.
    pub async fn valid(&self) -> ApiResult<Value> {
        self.gateway.get("/api/Units/valid").await
    }

    /// Checks one unit symbol against the catalog.
    ///
    /// # Errors
    ///
    /// Fails like any gateway call.
    pub async fn validate(&self, unit: &str) -> ApiResult<Value> {
        self.gateway.get(&format!("/api/Units/validate/{unit}")).await
    }
}
