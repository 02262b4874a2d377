//! Costealo Application - Gateway, ports and services
//!
//! This crate defines the application layer with:
//! - Port traits (credential storage, HTTP transport)
//! - The [`ApiGateway`], the single chokepoint for outbound calls
//! - The error taxonomy surfaced to callers
//! - One thin service per API resource

pub mod error;
pub mod gateway;
pub mod ports;
pub mod services;
pub mod session;

#[cfg(test)]
pub(crate) mod test_util;

pub use error::{ApiError, ApiResult, REQUEST_FALLBACK_MESSAGE};
pub use gateway::ApiGateway;
pub use ports::{CredentialStore, CredentialStoreError, HttpTransport, TransportError};
pub use services::{AuthApi, PriceDatabasesApi, SubscriptionsApi, UnitsApi, WorkbooksApi};
pub use session::{MemoryCredentialStore, SessionEvent};
