//! Workbook service

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::error::ApiResult;
use crate::gateway::ApiGateway;
use crate::ports::{CredentialStore, HttpTransport};

/// CRUD, publishing, and item management for costing workbooks.
pub struct WorkbooksApi<T, S> {
    gateway: Arc<ApiGateway<T, S>>,
}

impl<T, S> WorkbooksApi<T, S>
where
    T: HttpTransport,
    S: CredentialStore,
{
    /// Creates the service over a shared gateway.
    #[must_use]
    pub fn new(gateway: Arc<ApiGateway<T, S>>) -> Self {
        Self { gateway }
    }

    /// Lists all workbooks.
    ///
    /// # Errors
    ///
    /// Fails like any gateway call.
    pub async fn list(&self) -> ApiResult<Value> {
        self.gateway.get("/api/Workbooks").await
    }

    /// Fetches one workbook.
    ///
    /// # Errors
    ///
    /// Fails like any gateway call.
    pub async fn get(&self, id: &str) -> ApiResult<Value> {
        self.gateway.get(&format!("/api/Workbooks/{id}")).await
    }

    /// Creates a workbook.
    ///
    /// # Errors
    ///
    /// Fails like any gateway call.
    pub async fn create<B: Serialize + Sync + ?Sized>(&self, data: &B) -> ApiResult<Value> {
        self.gateway.post("/api/Workbooks", data).await
    }

    /// Updates a workbook.
    ///
    /// # Errors
    ///
    /// Fails like any gateway call.
    pub async fn update<B: Serialize + Sync + ?Sized>(
        &self,
        id: &str,
        data: &B,
    ) -> ApiResult<Value> {
        self.gateway.put(&format!("/api/Workbooks/{id}"), data).await
    }

    /// Deletes a workbook.
    ///
    /// # Errors
    ///
    /// Fails like any gateway call.
    pub async fn delete(&self, id: &str) -> ApiResult<Value> {
        self.gateway.delete(&format!("/api/Workbooks/{id}")).await
    }

    /// Publishes a workbook.
    ///
    /// # Errors
    ///
    /// Fails like any gateway call.
    pub async fn publish(&self, id: &str) -> ApiResult<Value> {
        self.gateway
            .put_empty(&format!("/api/Workbooks/{id}/publish"))
            .await
    }

    /// Adds an item to a workbook.
    ///
    /// # Errors
    ///
    /// Fails like any gateway call.
    pub async fn add_item<B: Serialize + Sync + ?Sized>(
        &self,
        id: &str,
        item: &B,
    ) -> ApiResult<Value> {
        self.gateway
            .post(&format!("/api/Workbooks/{id}/items"), item)
            .await
    }

    /// Removes an item from a workbook.
    ///
    /// # Errors
    ///
    /// Fails like any gateway call.
    pub async fn remove_item(&self, workbook_id: &str, item_id: &str) -> ApiResult<Value> {
        self.gateway
            .delete(&format!("/api/Workbooks/{workbook_id}/items/{item_id}"))
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

    fn service(
        transport: RecordingTransport,
    ) -> WorkbooksApi<RecordingTransport, MemoryCredentialStore> {
        WorkbooksApi::new(Arc::new(gateway_with(
            transport,
            MemoryCredentialStore::new(),
        )))
    }

    #[tokio::test]
    async fn test_crud_paths() {
        let transport = RecordingTransport::replying(200, "{}");
        let workbooks = service(transport.clone());

        workbooks.list().await.unwrap();
        let (_, request) = transport.last_request().unwrap();
        assert_eq!(request.path, "/api/Workbooks");
        assert_eq!(request.method, HttpMethod::Get);

        workbooks.create(&json!({"name": "Panadería"})).await.unwrap();
        let (_, request) = transport.last_request().unwrap();
        assert_eq!(request.path, "/api/Workbooks");
        assert_eq!(request.method, HttpMethod::Post);

        workbooks.delete("12").await.unwrap();
        let (_, request) = transport.last_request().unwrap();
        assert_eq!(request.path, "/api/Workbooks/12");
        assert_eq!(request.method, HttpMethod::Delete);
    }

    #[tokio::test]
    async fn test_publish_is_a_bodyless_put() {
        let transport = RecordingTransport::replying(200, "{}");
        let workbooks = service(transport.clone());

        workbooks.publish("12").await.unwrap();
        let (_, request) = transport.last_request().unwrap();
        assert_eq!(request.path, "/api/Workbooks/12/publish");
        assert_eq!(request.method, HttpMethod::Put);
        assert!(request.body.is_none());
    }

    #[tokio::test]
    async fn test_item_management_paths() {
        let transport = RecordingTransport::replying(200, "{}");
        let workbooks = service(transport.clone());

        workbooks
            .add_item("12", &json!({"ingredient": "harina"}))
            .await
            .unwrap();
        let (_, request) = transport.last_request().unwrap();
        assert_eq!(request.path, "/api/Workbooks/12/items");
        assert_eq!(request.method, HttpMethod::Post);

        workbooks.remove_item("12", "3").await.unwrap();
        let (_, request) = transport.last_request().unwrap();
        assert_eq!(request.path, "/api/Workbooks/12/items/3");
        assert_eq!(request.method, HttpMethod::Delete);
    }
}
