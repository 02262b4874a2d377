//! In-memory credential storage

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use costealo_domain::Credential;

use crate::ports::{CredentialStore, CredentialStoreError};

/// Thread-safe in-memory credential store.
///
/// Holds at most one credential and never touches disk. Suitable for
/// tests and for embedders that manage persistence themselves. Clones
/// share the same slot.
#[derive(Debug, Clone, Default)]
pub struct MemoryCredentialStore {
    slot: Arc<RwLock<Option<Credential>>>,
}

impl MemoryCredentialStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with a credential.
    #[must_use]
    pub fn with_credential(credential: Credential) -> Self {
        Self {
            slot: Arc::new(RwLock::new(Some(credential))),
        }
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn get(&self) -> Result<Option<Credential>, CredentialStoreError> {
        Ok(self.slot.read().await.clone())
    }

    async fn set(&self, credential: Credential) -> Result<(), CredentialStoreError> {
        *self.slot.write().await = Some(credential);
        Ok(())
    }

    async fn clear(&self) -> Result<(), CredentialStoreError> {
        *self.slot.write().await = None;
        Ok(())
    }
}
