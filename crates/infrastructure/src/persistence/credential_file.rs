//! File-backed credential storage.
//!
//! The credential occupies a single named slot (`costealo_token`) under
//! the user configuration directory, mirroring the storage key of the
//! web client. The file holds the raw token string and nothing else.

use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use costealo_application::ports::{CredentialStore, CredentialStoreError};
use costealo_domain::Credential;

/// Name of the storage slot.
const STORAGE_SLOT: &str = "costealo_token";

/// Credential store persisting the token to a single file.
#[derive(Debug, Clone)]
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    /// Creates a store under the user configuration directory
    /// (`<config>/costealo/costealo_token`).
    ///
    /// # Errors
    ///
    /// Fails when the platform exposes no configuration directory.
    pub fn new() -> Result<Self, CredentialStoreError> {
        let base = dirs::config_dir().ok_or_else(|| {
            CredentialStoreError::Unavailable("no user configuration directory".to_string())
        })?;
        Ok(Self::in_dir(base.join("costealo")))
    }

    /// Creates a store under an explicit directory.
    #[must_use]
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            path: dir.into().join(STORAGE_SLOT),
        }
    }

    /// The file backing the slot.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CredentialStore for FileCredentialStore {
    async fn get(&self) -> Result<Option<Credential>, CredentialStoreError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => {
                let token = raw.trim();
                if token.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(Credential::new(token)))
                }
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(CredentialStoreError::Io(e)),
        }
    }

    async fn set(&self, credential: Credential) -> Result<(), CredentialStoreError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&self.path, credential.as_str()).await?;
        debug!(path = %self.path.display(), "credential stored");
        Ok(())
    }

    async fn clear(&self) -> Result<(), CredentialStoreError> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => {
                debug!(path = %self.path.display(), "credential cleared");
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(CredentialStoreError::Io(e)),
        }
    }
}
