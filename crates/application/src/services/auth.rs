//! Authentication service

use std::sync::Arc;

use serde_json::{json, Value};
use tracing::info;

use costealo_domain::Credential;

use crate::error::ApiResult;
use crate::gateway::ApiGateway;
use crate::ports::{CredentialStore, HttpTransport, TransportError};
use crate::session::SessionEvent;

/// Login, registration, and local session management.
pub struct AuthApi<T, S> {
    gateway: Arc<ApiGateway<T, S>>,
}

impl<T, S> AuthApi<T, S>
where
    T: HttpTransport,
    S: CredentialStore,
{
    /// Creates the service over a shared gateway.
    #[must_use]
    pub fn new(gateway: Arc<ApiGateway<T, S>>) -> Self {
        Self { gateway }
    }

    /// Authenticates and stores the returned credential.
    ///
    /// The backend replies with either a bare token string or an object
    /// carrying a `token` field; both shapes are accepted.
    ///
    /// # Errors
    ///
    /// Fails like any gateway call; additionally fails with a transport
    /// error when the reply carries no recognizable token.
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<Value> {
        let value = self
            .gateway
            .post("/api/Auth/login", &json!({"email": email, "password": password}))
            .await?;

        let token = extract_token(&value).ok_or_else(|| {
            TransportError::MalformedResponse("login response carried no token".to_string())
        })?;
        self.gateway
            .credential_store()
            .set(Credential::new(token))
            .await?;
        info!("session established");

        Ok(value)
    }

    /// Registers a new user account.
    ///
    /// # Errors
    ///
    /// Fails like any gateway call.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> ApiResult<Value> {
        self.gateway
            .post(
                "/api/Users",
                &json!({"name": name, "email": email, "password": password}),
            )
            .await
    }

    /// Erases the stored credential and asks the embedder to show the
    /// login view. Local only; the server is not contacted.
    ///
    /// # Errors
    ///
    /// Fails when the credential store cannot be cleared.
    pub async fn logout(&self) -> ApiResult<()> {
        self.gateway.credential_store().clear().await?;
        self.gateway.emit(SessionEvent::AuthenticationRequired);
        info!("session closed");
        Ok(())
    }

    /// Returns true if a credential is currently stored.
    ///
    /// Presence only; the token is not validated against the server.
    ///
    /// # Errors
    ///
    /// Fails when the credential store cannot be read.
    pub async fn is_authenticated(&self) -> ApiResult<bool> {
        Ok(self.gateway.credential_store().get().await?.is_some())
    }
}

fn extract_token(value: &Value) -> Option<&str> {
    match value {
        Value::String(token) => Some(token),
        Value::Object(map) => map.get("token").and_then(Value::as_str),
        _ => None,
    }
}
