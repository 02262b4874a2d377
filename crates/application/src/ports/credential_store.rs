//! Credential storage port

use async_trait::async_trait;
use thiserror::Error;

use costealo_domain::Credential;

/// Errors from credential persistence.
#[derive(Debug, Error)]
pub enum CredentialStoreError {
    /// Underlying storage I/O failed.
    #[error("credential storage failed: {0}")]
    Io(#[from] std::io::Error),

    /// The storage location could not be determined.
    #[error("credential storage unavailable: {0}")]
    Unavailable(String),
}

/// Port for the single persisted credential slot.
///
/// At most one credential is live at a time. The slot is read afresh at
/// the start of every gateway call and cleared on logout or when the
/// server rejects the credential. There are no compound
/// read-modify-write sequences, so implementations need no locking
/// beyond a single-point get/set/clear.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Reads the stored credential, if any.
    async fn get(&self) -> Result<Option<Credential>, CredentialStoreError>;

    /// Stores a credential, replacing any previous one.
    async fn set(&self, credential: Credential) -> Result<(), CredentialStoreError>;

    /// Erases the stored credential. Clearing an empty slot is not an
    /// error.
    async fn clear(&self) -> Result<(), CredentialStoreError>;
}
