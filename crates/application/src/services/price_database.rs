//! Price database service

use std::sync::Arc;

use serde::Serialize;
use serde_json::{json, Value};

use costealo_domain::{FormField, UploadPolicy};

use crate::error::ApiResult;
use crate::gateway::ApiGateway;
use crate::ports::{CredentialStore, HttpTransport};

/// CRUD, import, and item management for price databases.
pub struct PriceDatabasesApi<T, S> {
    gateway: Arc<ApiGateway<T, S>>,
    upload_policy: UploadPolicy,
}

impl<T, S> PriceDatabasesApi<T, S>
where
    T: HttpTransport,
    S: CredentialStore,
{
    /// Creates the service over a shared gateway, with the default
    /// upload policy.
    #[must_use]
    pub fn new(gateway: Arc<ApiGateway<T, S>>) -> Self {
        Self {
            gateway,
            upload_policy: UploadPolicy::default(),
        }
    }

    /// Replaces the upload policy (tests, self-hosted backends).
    #[must_use]
    pub fn with_upload_policy(mut self, policy: UploadPolicy) -> Self {
        self.upload_policy = policy;
        self
    }

    /// Lists all price databases.
    ///
    /// # Errors
    ///
    /// Fails like any gateway call.
    pub async fn list(&self) -> ApiResult<Value> {
        self.gateway.get("/api/PriceDatabase").await
    }

    /// Fetches one price database.
    ///
    /// # Errors
    ///
    /// Fails like any gateway call.
    pub async fn get(&self, id: &str) -> ApiResult<Value> {
        self.gateway.get(&format!("/api/PriceDatabase/{id}")).await
    }

    /// Creates a price database.
    ///
    /// # Errors
    ///
    /// Fails like any gateway call.
    pub async fn create<B: Serialize + Sync + ?Sized>(&self, data: &B) -> ApiResult<Value> {
        self.gateway.post("/api/PriceDatabase", data).await
    }

    /// Updates a price database.
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
            .put(&format!("/api/PriceDatabase/{id}"), data)
            .await
    }

    /// Deletes a price database.
    ///
    /// # Errors
    ///
    /// Fails like any gateway call.
    pub async fn delete(&self, id: &str) -> ApiResult<Value> {
        self.gateway
            .delete(&format!("/api/PriceDatabase/{id}"))
            .await
    }

    /// Uploads a spreadsheet as a new price database.
    ///
    /// The file is validated against the upload policy (size, content
    /// type) before any I/O.
    ///
    /// # Errors
    ///
    /// Fails with a domain error when the policy rejects the file, or
    /// like any gateway call.
    pub async fn upload_file(
        &self,
        file_name: &str,
        content: Vec<u8>,
        database_name: &str,
    ) -> ApiResult<Value> {
        let file = FormField::file("file", file_name, content);
        self.upload_policy.validate(&file)?;

        let fields = vec![file, FormField::text("databaseName", database_name)];
        self.gateway.upload("/api/PriceDatabase/upload", fields).await
    }

    /// Imports a price database from a remote URL.
    ///
    /// # Errors
    ///
    /// Fails like any gateway call.
    pub async fn import_url(&self, name: &str, url: &str) -> ApiResult<Value> {
        self.gateway
            .post("/api/PriceDatabase/import-url", &json!({"name": name, "url": url}))
            .await
    }

    /// Re-imports a database from its original source.
    ///
    /// # Errors
    ///
    /// Fails like any gateway call.
    pub async fn refresh(&self, id: &str) -> ApiResult<Value> {
        self.gateway
            .put_empty(&format!("/api/PriceDatabase/{id}/refresh"))
            .await
    }

    /// Lists the items of a database.
    ///
    /// # Errors
    ///
    /// Fails like any gateway call.
    pub async fn items(&self, id: &str) -> ApiResult<Value> {
        self.gateway
            .get(&format!("/api/PriceDatabase/{id}/items"))
            .await
    }

    /// Adds an item to a database.
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
            .post(&format!("/api/PriceDatabase/{id}/items"), item)
            .await
    }

    /// Updates an item of a database.
    ///
    /// # Errors
    ///
    /// Fails like any gateway call.
    pub async fn update_item<B: Serialize + Sync + ?Sized>(
        &self,
        database_id: &str,
        item_id: &str,
        item: &B,
    ) -> ApiResult<Value> {
        self.gateway
            .put(
                &format!("/api/PriceDatabase/{database_id}/items/{item_id}"),
                item,
            )
            .await
    }

    /// Removes an item from a database.
    ///
    /// # Errors
    ///
    /// Fails like any gateway call.
    pub async fn delete_item(&self, database_id: &str, item_id: &str) -> ApiResult<Value> {
        self.gateway
            .delete(&format!("/api/PriceDatabase/{database_id}/items/{item_id}"))
            .await
    }
}
