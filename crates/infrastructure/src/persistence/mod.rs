//! Credential persistence adapter

mod credential_file;

pub use credential_file::FileCredentialStore;
