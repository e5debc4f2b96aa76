/// Data structures for a single ask round-trip
use serde::{Deserialize, Serialize};

pub const VALIDATION_MESSAGE: &str = "Please enter both video ID and a question.";
pub const PENDING_MESSAGE: &str = "A question is already being answered. Please wait.";
pub const GENERIC_SERVER_ERROR: &str = "Something went wrong on the server.";
pub const LOADING_MESSAGE: &str = "Loading...";

/// Body sent to the ask endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AskBody {
    #[serde(rename = "videoId")]
    pub video_id: String,
    pub question: String,
}

impl AskBody {
    /// Build a body from raw input, trimming both fields.
    /// Returns None when either field is blank.
    pub fn from_input(video_id: &str, question: &str) -> Option<AskBody> {
        let video_id = video_id.trim();
        let question = question.trim();

        if video_id.is_empty() || question.is_empty() {
            return None;
        }

        Some(AskBody {
            video_id: video_id.to_string(),
            question: question.to_string(),
        })
    }
}

/// Result of one ask
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome {
    Success(String),
    ServerError(String),
    NetworkError(String),
    ValidationError(String),
}

impl QueryOutcome {
    pub fn kind(&self) -> &'static str {
        match self {
            QueryOutcome::Success(_) => "success",
            QueryOutcome::ServerError(_) => "server_error",
            QueryOutcome::NetworkError(_) => "network_error",
            QueryOutcome::ValidationError(_) => "validation_error",
        }
    }

    /// Text shown to the user for this outcome
    pub fn display(&self) -> DisplayState {
        match self {
            QueryOutcome::Success(text) => DisplayState::Answer(text.clone()),
            QueryOutcome::ServerError(msg) => DisplayState::Error(format!("Error: {}", msg)),
            QueryOutcome::NetworkError(msg) => DisplayState::Error(format!(
                "Network error: Could not connect to the backend server. \
                 Make sure it's running and CORS is enabled. Details: {}",
                msg
            )),
            QueryOutcome::ValidationError(msg) => DisplayState::Error(msg.clone()),
        }
    }
}

/// Caller-owned in-flight tracking
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RequestState {
    #[default]
    Idle,
    Pending,
    Done(QueryOutcome),
}

impl RequestState {
    pub fn is_pending(&self) -> bool {
        matches!(self, RequestState::Pending)
    }

    pub fn display(&self) -> DisplayState {
        match self {
            RequestState::Idle => DisplayState::Empty,
            RequestState::Pending => DisplayState::Loading(LOADING_MESSAGE.to_string()),
            RequestState::Done(outcome) => outcome.display(),
        }
    }
}

/// What the response panel renders
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayState {
    Empty,
    Loading(String),
    Answer(String),
    Error(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ask_body_wire_names() {
        let body = AskBody::from_input("dQw4w9WgXcQ", "What is this about?").unwrap();
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"videoId": "dQw4w9WgXcQ", "question": "What is this about?"})
        );
    }

    #[test]
    fn test_ask_body_trims_input() {
        let body = AskBody::from_input("  dQw4w9WgXcQ\n", "\t why? ").unwrap();

        assert_eq!(body.video_id, "dQw4w9WgXcQ");
        assert_eq!(body.question, "why?");
    }

    #[test]
    fn test_ask_body_rejects_blank_fields() {
        assert_eq!(AskBody::from_input("", "why?"), None);
        assert_eq!(AskBody::from_input("dQw4w9WgXcQ", ""), None);
        assert_eq!(AskBody::from_input("   ", "why?"), None);
        assert_eq!(AskBody::from_input("dQw4w9WgXcQ", " \n\t "), None);
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(
            QueryOutcome::Success("42".to_string()).display(),
            DisplayState::Answer("42".to_string())
        );
        assert_eq!(
            QueryOutcome::ServerError("boom".to_string()).display(),
            DisplayState::Error("Error: boom".to_string())
        );
        assert_eq!(
            QueryOutcome::ValidationError(VALIDATION_MESSAGE.to_string()).display(),
            DisplayState::Error(VALIDATION_MESSAGE.to_string())
        );

        match QueryOutcome::NetworkError("connection refused".to_string()).display() {
            DisplayState::Error(text) => {
                assert!(text.starts_with("Network error:"));
                assert!(text.ends_with("Details: connection refused"));
            }
            other => panic!("unexpected display state: {:?}", other),
        }
    }

    #[test]
    fn test_request_state_display() {
        assert_eq!(RequestState::default(), RequestState::Idle);
        assert_eq!(RequestState::Idle.display(), DisplayState::Empty);
        assert_eq!(
            RequestState::Pending.display(),
            DisplayState::Loading(LOADING_MESSAGE.to_string())
        );
        assert!(RequestState::Pending.is_pending());
        assert!(!RequestState::Done(QueryOutcome::Success("ok".to_string())).is_pending());
    }
}
