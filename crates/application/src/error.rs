//! Application error taxonomy
//!
//! Every gateway call resolves to the parsed JSON body or to exactly one
//! of these errors. User-facing messages are the fixed Spanish strings
//! the web client shows; diagnostic messages are English.

use thiserror::Error;

use costealo_domain::DomainError;

use crate::ports::{CredentialStoreError, TransportError};

/// Fallback message when an error body carries no `message` field.
pub const REQUEST_FALLBACK_MESSAGE: &str = "Error en la solicitud";

/// Errors surfaced by gateway calls.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server rejected the credential. The stored credential has been
    /// cleared and an authentication-required event emitted; the caller
    /// should present the login view.
    #[error("No autorizado. Por favor inicia sesión.")]
    Authentication,

    /// The server denied the operation because of a subscription limit.
    /// The stored credential is untouched.
    #[error("Límite de suscripción alcanzado.")]
    Quota,

    /// Any other non-success response from the server.
    #[error("{message}")]
    Request {
        /// HTTP status code of the reply.
        status: u16,
        /// Message from the response body, or the fixed fallback.
        message: String,
    },

    /// Validation failed before any I/O was issued.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Transport-level failure: network, TLS, body read, malformed JSON.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Credential persistence failure.
    #[error(transparent)]
    Store(#[from] CredentialStoreError),
}

/// Result type alias for gateway calls.
pub type ApiResult<T> = Result<T, ApiError>;
