//! Subscription service

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::error::ApiResult;
use crate::gateway::ApiGateway;
use crate::ports::{CredentialStore, HttpTransport};

/// The caller's subscription and plan changes.
pub struct SubscriptionsApi<T, S> {
    gateway: Arc<ApiGateway<T, S>>,
}

impl<T, S> SubscriptionsApi<T, S>
where
    T: HttpTransport,
    S: CredentialStore,
{
    /// Creates the service over a shared gateway.
    #[must_use]
    pub fn new(gateway: Arc<ApiGateway<T, S>>) -> Self {
        Self { gateway }
    }

    /// Fetches the authenticated user's subscription.
    ///
    /// # Errors
    ///
    /// Fails like any gateway call.
    pub async fn mine(&self) -> ApiResult<Value> {
        self.gateway.get("/api/Subscriptions/me").await
    }

    /// Creates a subscription.
    ///
    /// # Errors
    ///
    /// Fails like any gateway call.
    pub async fn create<B: Serialize + Sync + ?Sized>(&self, data: &B) -> ApiResult<Value> {
        self.gateway.post("/api/Subscriptions", data).await
    }

    /// Updates a subscription.
    ///
    /// # Errors
    ///
    /// Fails like any gateway call.
    pub async fn update<B: Serialize + Sync + ?Sized>(
        &self,
        id: &str,
        data: &B,
    ) -> ApiResult<Value> {
        self.gateway
            .put(&format!("/api/Subscriptions/{id}"), data)
            .await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use costealo_domain::HttpMethod;

    use crate::test_util::{gateway_with, RecordingTransport};
    use crate::MemoryCredentialStore;

    #[tokio::test]
    async fn test_paths_and_verbs() {
        let transport = RecordingTransport::replying(200, "{}");
        let subscriptions = SubscriptionsApi::new(Arc::new(gateway_with(
            transport.clone(),
            MemoryCredentialStore::new(),
        )));

        subscriptions.mine().await.unwrap();
        let (_, request) = transport.last_request().unwrap();
        assert_eq!(request.path, "/api/Subscriptions/me");
        assert_eq!(request.method, HttpMethod::Get);

        subscriptions.create(&json!({"plan": "basic"})).await.unwrap();
        let (_, request) = transport.last_request().unwrap();
        assert_eq!(request.path, "/api/Subscriptions");
        assert_eq!(request.method, HttpMethod::Post);

        subscriptions
            .update("9", &json!({"plan": "premium"}))
            .await
            .unwrap();
        let (_, request) = transport.last_request().unwrap();
        assert_eq!(request.path, "/api/Subscriptions/9");
        assert_eq!(request.method, HttpMethod::Put);
    }
}
