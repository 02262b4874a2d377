//! The API gateway
//!
//! Every outbound Costealo call funnels through [`ApiGateway`]. It owns
//! header construction, bearer-token attachment, status-code
//! interpretation, and JSON decoding. It is generic over the transport
//! and credential store ports so the whole contract is testable with
//! fakes.

use serde::Serialize;
use serde_json::Value;
use tokio::sync::broadcast;
use tracing::{debug, error, warn};
use url::Url;

use costealo_domain::{ApiRequest, DomainError, FormField, HttpMethod, RequestBody, ResponseEnvelope};

use crate::error::{ApiError, ApiResult, REQUEST_FALLBACK_MESSAGE};
use crate::ports::{CredentialStore, HttpTransport, TransportError};
use crate::session::SessionEvent;

/// Capacity of the session event channel.
const EVENT_CHANNEL_CAPACITY: usize = 16;

/// The single chokepoint for outbound API calls.
///
/// One gateway per base origin. Calls are independent single-shot
/// exchanges: no retries, no timeouts beyond the transport's own, no
/// cross-call ordering. The only shared state is the credential behind
/// the store port, read afresh on every call.
pub struct ApiGateway<T, S> {
    base_url: Url,
    transport: T,
    store: S,
    events: broadcast::Sender<SessionEvent>,
}

impl<T, S> ApiGateway<T, S>
where
    T: HttpTransport,
    S: CredentialStore,
{
    /// Creates a gateway for the given base origin.
    pub fn new(base_url: Url, transport: T, store: S) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            base_url,
            transport,
            store,
            events,
        }
    }

    /// The base origin every relative path resolves against.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The credential store backing this gateway.
    #[must_use]
    pub const fn credential_store(&self) -> &S {
        &self.store
    }

    /// Subscribes to session events.
    ///
    /// Receivers created after an event was sent do not see it; subscribe
    /// before issuing calls.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    pub(crate) fn emit(&self, event: SessionEvent) {
        // No receivers is fine; the embedder may not care about events.
        let _ = self.events.send(event);
    }

    /// Performs one JSON exchange described by `request`.
    ///
    /// A `Content-Type: application/json` header is added unless the
    /// caller overrode it. The stored credential, when present, is
    /// attached last as the `Authorization` header, replacing only that
    /// header.
    ///
    /// # Errors
    ///
    /// See [`ApiError`] for the full taxonomy.
    pub async fn request(&self, mut request: ApiRequest) -> ApiResult<Value> {
        if !request.headers.contains("Content-Type") {
            request.headers.set("Content-Type", "application/json");
        }
        self.dispatch(request).await
    }

    /// Uploads a multipart form with a POST.
    ///
    /// No `Content-Type` header is set; the transport derives the
    /// multipart boundary. Status interpretation is identical to
    /// [`request`](Self::request), including the 401/403 handling.
    ///
    /// # Errors
    ///
    /// See [`ApiError`] for the full taxonomy.
    pub async fn upload(&self, path: &str, fields: Vec<FormField>) -> ApiResult<Value> {
        let request =
            ApiRequest::new(HttpMethod::Post, path).with_body(RequestBody::multipart(fields));
        self.dispatch(request).await
    }

    /// Shorthand for a GET request.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn get(&self, path: &str) -> ApiResult<Value> {
        self.request(ApiRequest::get(path)).await
    }

    /// Shorthand for a POST with a JSON-serialized body.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn post<B>(&self, path: &str, body: &B) -> ApiResult<Value>
    where
        B: Serialize + Sync + ?Sized,
    {
        let request = ApiRequest::new(HttpMethod::Post, path)
            .with_body(RequestBody::json(to_json_value(body)?));
        self.request(request).await
    }

    /// Shorthand for a PUT with a JSON-serialized body.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn put<B>(&self, path: &str, body: &B) -> ApiResult<Value>
    where
        B: Serialize + Sync + ?Sized,
    {
        let request = ApiRequest::new(HttpMethod::Put, path)
            .with_body(RequestBody::json(to_json_value(body)?));
        self.request(request).await
    }

    /// Shorthand for a bodyless PUT (refresh/publish style endpoints).
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn put_empty(&self, path: &str) -> ApiResult<Value> {
        self.request(ApiRequest::new(HttpMethod::Put, path)).await
    }

    /// Shorthand for a DELETE request.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn delete(&self, path: &str) -> ApiResult<Value> {
        self.request(ApiRequest::delete(path)).await
    }

    async fn dispatch(&self, mut request: ApiRequest) -> ApiResult<Value> {
        let url = request.resolve_against(&self.base_url)?;

        // Fresh read on every call: never a stale or request-pinned copy.
        if let Some(credential) = self.store.get().await? {
            request
                .headers
                .set("Authorization", credential.authorization_header());
        }

        debug!(method = %request.method, path = %request.path, "dispatching request");

        let response = match self.transport.execute(url, &request).await {
            Ok(response) => response,
            Err(e) => {
                error!(method = %request.method, path = %request.path, error = %e, "transport failure");
                return Err(ApiError::Transport(e));
            }
        };

        self.interpret(&request, &response).await
    }

    async fn interpret(&self, request: &ApiRequest, response: &ResponseEnvelope) -> ApiResult<Value> {
        if response.status == 401 {
            warn!(path = %request.path, "credential rejected, clearing session");
            if let Err(e) = self.store.clear().await {
                error!(error = %e, "failed to clear rejected credential");
            }
            self.emit(SessionEvent::AuthenticationRequired);
            return Err(ApiError::Authentication);
        }

        if response.status == 403 {
            warn!(path = %request.path, "subscription limit reached");
            return Err(ApiError::Quota);
        }

        let value = response.body_as_json().map_err(|e| {
            error!(path = %request.path, status = response.status, error = %e, "malformed response body");
            ApiError::Transport(TransportError::MalformedResponse(e.to_string()))
        })?;

        if !response.is_success() {
            let message = value
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or(REQUEST_FALLBACK_MESSAGE)
                .to_string();
            warn!(path = %request.path, status = response.status, message = %message, "request failed");
            return Err(ApiError::Request {
                status: response.status,
                message,
            });
        }

        Ok(value)
    }
}

fn to_json_value<B: Serialize + ?Sized>(body: &B) -> ApiResult<Value> {
    serde_json::to_value(body)
        .map_err(|e| ApiError::Domain(DomainError::InvalidBody(e.to_string())))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use costealo_domain::Credential;

    use crate::test_util::{base_url, gateway_with, RecordingTransport};
    use crate::MemoryCredentialStore;

    #[tokio::test]
    async fn test_success_returns_body_verbatim() {
        let transport = RecordingTransport::replying(200, r#"{"id": 5, "name": "Precios"}"#);
        let gateway = gateway_with(transport.clone(), MemoryCredentialStore::new());

        let value = gateway.get("/api/PriceDatabase/5").await.unwrap();
        assert_eq!(value, json!({"id": 5, "name": "Precios"}));
    }

    #[tokio::test]
    async fn test_bearer_attached_from_store_at_call_time() {
        let transport = RecordingTransport::replying(200, "{}");
        let store = MemoryCredentialStore::with_credential(Credential::new("tok-1"));
        let gateway = gateway_with(transport.clone(), store.clone());

        gateway.get("/api/Workbooks").await.unwrap();
        let (_, request) = transport.last_request().unwrap();
        assert_eq!(request.headers.get("Authorization"), Some("Bearer tok-1"));

        // A replaced credential is picked up by the next call.
        store.set(Credential::new("tok-2")).await.unwrap();
        gateway.get("/api/Workbooks").await.unwrap();
        let (_, request) = transport.last_request().unwrap();
        assert_eq!(request.headers.get("Authorization"), Some("Bearer tok-2"));
    }

    #[tokio::test]
    async fn test_no_credential_means_no_authorization_header() {
        let transport = RecordingTransport::replying(200, "{}");
        let gateway = gateway_with(transport.clone(), MemoryCredentialStore::new());

        gateway.get("/api/Units/catalog").await.unwrap();
        let (_, request) = transport.last_request().unwrap();
        assert!(!request.headers.contains("Authorization"));
    }

    #[tokio::test]
    async fn test_default_content_type_and_caller_override() {
        let transport = RecordingTransport::replying(200, "{}");
        let gateway = gateway_with(transport.clone(), MemoryCredentialStore::new());

        gateway.get("/api/Units/valid").await.unwrap();
        let (_, request) = transport.last_request().unwrap();
        assert_eq!(request.headers.get("Content-Type"), Some("application/json"));

        let custom = ApiRequest::get("/api/Units/valid").with_header("content-type", "text/plain");
        gateway.request(custom).await.unwrap();
        let (_, request) = transport.last_request().unwrap();
        assert_eq!(request.headers.get("Content-Type"), Some("text/plain"));
        assert_eq!(request.headers.len(), 1);
    }

    #[tokio::test]
    async fn test_401_clears_credential_emits_event_and_fails() {
        let transport = RecordingTransport::replying(401, "{}");
        let store = MemoryCredentialStore::with_credential(Credential::new("stale"));
        let gateway = gateway_with(transport, store.clone());
        let mut events = gateway.subscribe();

        let result = gateway.get("/api/Subscriptions/me").await;

        assert!(matches!(result, Err(ApiError::Authentication)));
        assert_eq!(store.get().await.unwrap(), None);
        assert_eq!(
            events.try_recv().unwrap(),
            SessionEvent::AuthenticationRequired
        );
    }

    #[tokio::test]
    async fn test_401_applies_to_uploads_too() {
        let transport = RecordingTransport::replying(401, "{}");
        let store = MemoryCredentialStore::with_credential(Credential::new("stale"));
        let gateway = gateway_with(transport, store.clone());

        let fields = vec![FormField::text("databaseName", "Precios")];
        let result = gateway.upload("/api/PriceDatabase/upload", fields).await;

        assert!(matches!(result, Err(ApiError::Authentication)));
        assert_eq!(store.get().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_403_is_quota_and_leaves_credential_alone() {
        let transport = RecordingTransport::replying(403, "{}");
        let store = MemoryCredentialStore::with_credential(Credential::new("tok"));
        let gateway = gateway_with(transport, store.clone());
        let mut events = gateway.subscribe();

        let result = gateway.put_empty("/api/Workbooks/9/publish").await;

        assert!(matches!(result, Err(ApiError::Quota)));
        assert_eq!(store.get().await.unwrap(), Some(Credential::new("tok")));
        assert!(events.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_error_message_taken_from_body() {
        let transport = RecordingTransport::replying(404, r#"{"message": "No encontrado"}"#);
        let gateway = gateway_with(transport, MemoryCredentialStore::new());

        let result = gateway.get("/api/Workbooks/404").await;
        match result {
            Err(ApiError::Request { status, message }) => {
                assert_eq!(status, 404);
                assert_eq!(message, "No encontrado");
            }
            other => panic!("expected request error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_error_message_falls_back_when_body_has_none() {
        let transport = RecordingTransport::replying(500, "{}");
        let gateway = gateway_with(transport, MemoryCredentialStore::new());

        let result = gateway.get("/api/Workbooks").await;
        match result {
            Err(ApiError::Request { message, .. }) => {
                assert_eq!(message, REQUEST_FALLBACK_MESSAGE);
            }
            other => panic!("expected request error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_malformed_json_surfaces_as_transport_error() {
        let transport = RecordingTransport::replying(200, "<html>mantenimiento</html>");
        let gateway = gateway_with(transport, MemoryCredentialStore::new());

        let result = gateway.get("/api/Units/catalog").await;
        assert!(matches!(
            result,
            Err(ApiError::Transport(TransportError::MalformedResponse(_)))
        ));
    }

    #[tokio::test]
    async fn test_transport_failure_propagates_unchanged() {
        let transport =
            RecordingTransport::failing(TransportError::ConnectionFailed("refused".to_string()));
        let gateway = gateway_with(transport, MemoryCredentialStore::new());

        let result = gateway.get("/api/Units/catalog").await;
        assert!(matches!(
            result,
            Err(ApiError::Transport(TransportError::ConnectionFailed(_)))
        ));
    }

    #[tokio::test]
    async fn test_upload_sets_no_content_type() {
        let transport = RecordingTransport::replying(200, "{}");
        let gateway = gateway_with(transport.clone(), MemoryCredentialStore::new());

        let fields = vec![
            FormField::file("file", "precios.csv", b"a;b".to_vec()),
            FormField::text("databaseName", "Precios"),
        ];
        gateway
            .upload("/api/PriceDatabase/upload", fields)
            .await
            .unwrap();

        let (_, request) = transport.last_request().unwrap();
        assert_eq!(request.method, HttpMethod::Post);
        assert!(!request.headers.contains("Content-Type"));
    }

    #[tokio::test]
    async fn test_upload_still_carries_bearer() {
        let transport = RecordingTransport::replying(200, "{}");
        let store = MemoryCredentialStore::with_credential(Credential::new("tok"));
        let gateway = gateway_with(transport.clone(), store);

        gateway
            .upload("/api/PriceDatabase/upload", vec![])
            .await
            .unwrap();
        let (_, request) = transport.last_request().unwrap();
        assert_eq!(request.headers.get("Authorization"), Some("Bearer tok"));
    }

    #[tokio::test]
    async fn test_post_serializes_body() {
        let transport = RecordingTransport::replying(200, "{}");
        let gateway = gateway_with(transport.clone(), MemoryCredentialStore::new());

        gateway
            .post("/api/PriceDatabase", &json!({"name": "Precios"}))
            .await
            .unwrap();

        let (url, request) = transport.last_request().unwrap();
        assert_eq!(url.as_str(), format!("{}api/PriceDatabase", base_url()));
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(
            request.body,
            RequestBody::json(json!({"name": "Precios"}))
        );
    }

    #[tokio::test]
    async fn test_invalid_path_fails_before_any_io() {
        let transport = RecordingTransport::replying(200, "{}");
        let gateway = gateway_with(transport.clone(), MemoryCredentialStore::new());

        let result = gateway.get("api/missing-slash").await;
        assert!(matches!(
            result,
            Err(ApiError::Domain(DomainError::InvalidPath(_)))
        ));
        assert!(transport.last_request().is_none());
    }
}
