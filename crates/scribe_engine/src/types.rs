use std::fmt;

use serde::{Deserialize, Serialize};

/// Classified reply from a well-formed response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// `success: true` with its payload (transcript or outline).
    Payload(String),
    /// `success: false`; the message may be empty if the backend sent none.
    Rejected(String),
}

/// Reply body of the extraction endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExtractionEnvelope {
    pub success: bool,
    #[serde(default)]
    pub transcript: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Reply body of the outline endpoint. Failures use the same
/// `{ "success": false, "error": "..." }` shape as extraction.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OutlineEnvelope {
    pub success: bool,
    #[serde(default)]
    pub outline: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Request body of the outline endpoint.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct OutlineRequest<'a> {
    pub text: &'a str,
}

pub(crate) trait Envelope {
    /// Name of the payload field, for diagnostics.
    const PAYLOAD_FIELD: &'static str;

    fn into_parts(self) -> (bool, Option<String>, Option<String>);

    fn into_reply(self) -> Result<Reply, RequestError>
    where
        Self: Sized,
    {
        match self.into_parts() {
            (true, Some(payload), _) => Ok(Reply::Payload(payload)),
            (true, None, _) => Err(RequestError::new(
                FailureKind::MalformedEnvelope,
                format!("success envelope without `{}`", Self::PAYLOAD_FIELD),
            )),
            (false, _, error) => Ok(Reply::Rejected(error.unwrap_or_default())),
        }
    }
}

impl Envelope for ExtractionEnvelope {
    const PAYLOAD_FIELD: &'static str = "transcript";

    fn into_parts(self) -> (bool, Option<String>, Option<String>) {
        (self.success, self.transcript, self.error)
    }
}

impl Envelope for OutlineEnvelope {
    const PAYLOAD_FIELD: &'static str = "outline";

    fn into_parts(self) -> (bool, Option<String>, Option<String>) {
        (self.success, self.outline, self.error)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct RequestError {
    pub kind: FailureKind,
    pub message: String,
}

impl RequestError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    Timeout,
    Network,
    /// Non-success status whose body was not an envelope.
    HttpStatus(u16),
    /// Body was not a recognizable envelope.
    MalformedEnvelope,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::MalformedEnvelope => write!(f, "malformed response"),
        }
    }
}
