//! Costealo Client - ready-to-use SDK facade
//!
//! Wires the reqwest transport and the file-backed credential store into
//! a [`CostealoClient`] exposing one service per API resource.
//!
//! # Example
//!
//! ```rust,no_run
//! use costealo_client::CostealoClient;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = CostealoClient::new("https://app.costealo.example")?;
//!
//! client.auth().login("ana@example.com", "secreta").await?;
//! let workbooks = client.workbooks().list().await?;
//! println!("{workbooks}");
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::broadcast;
use url::Url;

use costealo_application::ports::{CredentialStore, CredentialStoreError, HttpTransport, TransportError};
use costealo_application::{
    ApiGateway, AuthApi, PriceDatabasesApi, SessionEvent, SubscriptionsApi, UnitsApi, WorkbooksApi,
};
use costealo_infrastructure::{FileCredentialStore, ReqwestTransport};

pub use costealo_application::{ApiError, ApiResult, MemoryCredentialStore};
pub use costealo_domain::{
    format_currency, format_date, CostingDefaults, Credential, PlanTier, SubscriptionPlan,
    UploadPolicy,
};

/// Errors raised while constructing a client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The base origin is not a valid absolute URL.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// The HTTP transport could not be created.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The credential store could not be created.
    #[error(transparent)]
    Store(#[from] CredentialStoreError),
}

/// The Costealo API client.
///
/// Cheap to clone-by-accessor: every service handed out shares the same
/// gateway, and with it the same base origin, credential slot and event
/// channel.
pub struct CostealoClient<T = ReqwestTransport, S = FileCredentialStore> {
    gateway: Arc<ApiGateway<T, S>>,
}

impl CostealoClient {
    /// Creates a client with the default adapters: reqwest transport and
    /// file-backed credential storage.
    ///
    /// # Errors
    ///
    /// Fails when the base URL is invalid or an adapter cannot be built.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let base = Url::parse(base_url).map_err(|e| {
            ClientError::InvalidBaseUrl(format!("{base_url}: {e}"))
        })?;
        let transport = ReqwestTransport::new()?;
        let store = FileCredentialStore::new()?;
        Ok(Self::with_parts(base, transport, store))
    }
}

impl<T, S> CostealoClient<T, S>
where
    T: HttpTransport,
    S: CredentialStore,
{
    /// Assembles a client from explicit parts. Useful for tests and for
    /// embedders with their own transport or credential storage.
    #[must_use]
    pub fn with_parts(base_url: Url, transport: T, store: S) -> Self {
        Self {
            gateway: Arc::new(ApiGateway::new(base_url, transport, store)),
        }
    }

    /// The shared gateway behind all services.
    #[must_use]
    pub fn gateway(&self) -> &ApiGateway<T, S> {
        &self.gateway
    }

    /// Subscribes to session events (e.g. authentication required).
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.gateway.subscribe()
    }

    /// Login, registration, and local session management.
    #[must_use]
    pub fn auth(&self) -> AuthApi<T, S> {
        AuthApi::new(Arc::clone(&self.gateway))
    }

    /// Price database operations.
    #[must_use]
    pub fn price_databases(&self) -> PriceDatabasesApi<T, S> {
        PriceDatabasesApi::new(Arc::clone(&self.gateway))
    }

    /// Workbook operations.
    #[must_use]
    pub fn workbooks(&self) -> WorkbooksApi<T, S> {
        WorkbooksApi::new(Arc::clone(&self.gateway))
    }

    /// Subscription operations.
    #[must_use]
    pub fn subscriptions(&self) -> SubscriptionsApi<T, S> {
        SubscriptionsApi::new(Arc::clone(&self.gateway))
    }

    /// Measurement unit operations.
    #[must_use]
    pub fn units(&self) -> UnitsApi<T, S> {
        UnitsApi::new(Arc::clone(&self.gateway))
    }
}
