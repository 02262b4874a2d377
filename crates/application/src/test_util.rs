//! Shared test doubles for gateway and service tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use url::Url;

use costealo_domain::{ApiRequest, ResponseEnvelope};

use crate::gateway::ApiGateway;
use crate::ports::{HttpTransport, TransportError};
use crate::session::MemoryCredentialStore;

/// Fake transport that records every dispatched request and replies with
/// one canned outcome. Clones share the recording.
#[derive(Clone)]
pub(crate) struct RecordingTransport {
    outcome: Result<ResponseEnvelope, TransportError>,
    requests: Arc<Mutex<Vec<(Url, ApiRequest)>>>,
}

impl RecordingTransport {
    pub(crate) fn replying(status: u16, body: &str) -> Self {
        Self {
            outcome: Ok(ResponseEnvelope::new(
                status,
                HashMap::new(),
                body.as_bytes().to_vec(),
                Duration::from_millis(1),
            )),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub(crate) fn failing(error: TransportError) -> Self {
        Self {
            outcome: Err(error),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub(crate) fn last_request(&self) -> Option<(Url, ApiRequest)> {
        self.requests
            .lock()
            .ok()
            .and_then(|requests| requests.last().cloned())
    }
}

#[async_trait]
impl HttpTransport for RecordingTransport {
    async fn execute(
        &self,
        url: Url,
        request: &ApiRequest,
    ) -> Result<ResponseEnvelope, TransportError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push((url, request.clone()));
        }
        self.outcome.clone()
    }
}

/// Base origin used across application-layer tests.
pub(crate) fn base_url() -> Url {
    Url::parse("https://app.costealo.example").unwrap_or_else(|_| unreachable!())
}

/// Builds a gateway over the fake transport and the given store.
pub(crate) fn gateway_with(
    transport: RecordingTransport,
    store: MemoryCredentialStore,
) -> ApiGateway<RecordingTransport, MemoryCredentialStore> {
    ApiGateway::new(base_url(), transport, store)
}
