//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the application core and external
//! systems. Each port is a trait implemented by an adapter in the
//! infrastructure layer, or by a fake in tests.

mod credential_store;
mod http_transport;

pub use credential_store::{CredentialStore, CredentialStoreError};
pub use http_transport::{HttpTransport, TransportError};
