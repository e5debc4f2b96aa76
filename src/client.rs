/// Query client: one POST to the ask endpoint, mapped onto a QueryOutcome

use crate::query::{
    AskBody, GENERIC_SERVER_ERROR, PENDING_MESSAGE, QueryOutcome, RequestState,
    VALIDATION_MESSAGE,
};
use async_trait::async_trait;
use gloo_net::http::Request;
use thiserror::Error;
use uuid::Uuid;

/// Raw HTTP response as seen by the client
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("failed to encode request: {0}")]
    Encode(String),

    #[error("{0}")]
    Request(String),

    #[error("failed to read response body: {0}")]
    Body(String),
}

/// Sends one JSON POST and hands back whatever came over the wire
#[async_trait(?Send)]
pub trait Transport {
    async fn post_json(&self, url: &str, body: &AskBody) -> Result<RawResponse, TransportError>;
}

/// Transport backed by the browser fetch API
#[derive(Debug, Clone, Default)]
pub struct FetchTransport;

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn post_json(&self, url: &str, body: &AskBody) -> Result<RawResponse, TransportError> {
        let response = Request::post(url)
            .json(body)
            .map_err(|e| TransportError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Body(e.to_string()))?;

        Ok(RawResponse { status, body })
    }
}

pub struct QueryClient<T: Transport> {
    transport: T,
    endpoint: String,
}

impl<T: Transport> QueryClient<T> {
    pub fn new(transport: T, endpoint: impl Into<String>) -> Self {
        QueryClient {
            transport,
            endpoint: endpoint.into(),
        }
    }

    /// Ask one question about one video.
    ///
    /// Rejected locally, with no network call, when either input is blank
    /// or `state` says a previous ask is still pending.
    pub async fn ask(&self, state: &RequestState, video_id: &str, question: &str) -> QueryOutcome {
        match self.prepare(state, video_id, question) {
            Ok(body) => self.send(body).await,
            Err(outcome) => outcome,
        }
    }

    /// Local checks that run before any I/O
    pub fn prepare(
        &self,
        state: &RequestState,
        video_id: &str,
        question: &str,
    ) -> Result<AskBody, QueryOutcome> {
        if state.is_pending() {
            return Err(QueryOutcome::ValidationError(PENDING_MESSAGE.to_string()));
        }

        AskBody::from_input(video_id, question)
            .ok_or_else(|| QueryOutcome::ValidationError(VALIDATION_MESSAGE.to_string()))
    }

    /// Issue exactly one request for an already validated body
    pub async fn send(&self, body: AskBody) -> QueryOutcome {
        let request_id = Uuid::new_v4();
        log::debug!("[{}] asking {} about video {}", request_id, self.endpoint, body.video_id);

        let outcome = match self.transport.post_json(&self.endpoint, &body).await {
            Ok(raw) => map_response(&raw),
            Err(e) => QueryOutcome::NetworkError(e.to_string()),
        };

        match &outcome {
            QueryOutcome::ServerError(msg) => {
                log::error!("[{}] server error response: {}", request_id, msg)
            }
            QueryOutcome::NetworkError(msg) => {
                log::error!("[{}] fetch error: {}", request_id, msg)
            }
            _ => {}
        }
        log::debug!("[{}] finished with {}", request_id, outcome.kind());

        outcome
    }
}

/// Map a raw response onto an outcome.
///
/// Status decides success vs server error. Only `response` is read from a
/// 2xx body and only `error` from any other; a body that is not JSON at all
/// is treated as a transport failure.
pub fn map_response(raw: &RawResponse) -> QueryOutcome {
    let reply: serde_json::Value = match serde_json::from_str(&raw.body) {
        Ok(reply) => reply,
        Err(e) => {
            return QueryOutcome::NetworkError(format!(
                "Malformed response body (HTTP {}): {}",
                raw.status, e
            ));
        }
    };

    if raw.is_ok() {
        match reply.get("response").and_then(value_text) {
            Some(text) => QueryOutcome::Success(text),
            None => QueryOutcome::NetworkError(format!(
                "Response body (HTTP {}) has no `response` field",
                raw.status
            )),
        }
    } else {
        QueryOutcome::ServerError(
            reply
                .get("error")
                .and_then(value_text)
                .unwrap_or_else(|| GENERIC_SERVER_ERROR.to_string()),
        )
    }
}

/// Render a JSON field as text; null counts as absent
fn value_text(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
