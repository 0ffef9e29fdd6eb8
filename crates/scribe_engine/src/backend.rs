use std::time::Duration;

use scribe_logging::{excerpt, scribe_debug};
use serde::de::DeserializeOwned;
use url::Url;

use crate::types::{Envelope, OutlineRequest};
use crate::{ExtractionEnvelope, FailureKind, OutlineEnvelope, Reply, RequestError};

const BODY_EXCERPT_CHARS: usize = 200;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendSettings {
    pub base_url: String,
    /// Resolved against `base_url`.
    pub extract_path: String,
    /// Resolved against `base_url`.
    pub outline_path: String,
    /// `None` leaves the connection attempt unbounded.
    pub connect_timeout: Option<Duration>,
    /// `None` leaves the whole request unbounded.
    pub request_timeout: Option<Duration>,
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
            extract_path: "/extract".to_string(),
            outline_path: "/outline".to_string(),
            connect_timeout: None,
            request_timeout: None,
        }
    }
}

/// Turns a video URL into a transcript.
#[async_trait::async_trait]
pub trait TranscriptSource: Send + Sync {
    async fn extract(&self, url: &str) -> Result<Reply, RequestError>;
}

/// Turns transcript text into a quote outline.
#[async_trait::async_trait]
pub trait OutlineSource: Send + Sync {
    async fn outline(&self, text: &str) -> Result<Reply, RequestError>;
}

/// HTTP client for both backend endpoints.
#[derive(Debug, Clone)]
pub struct ReqwestBackend {
    client: reqwest::Client,
    extract_url: Url,
    outline_url: Url,
}

impl ReqwestBackend {
    pub fn new(settings: BackendSettings) -> Result<Self, RequestError> {
        let base = Url::parse(&settings.base_url)
            .map_err(|err| RequestError::new(FailureKind::InvalidUrl, err.to_string()))?;
        let join = |path: &str| {
            base.join(path)
                .map_err(|err| RequestError::new(FailureKind::InvalidUrl, err.to_string()))
        };
        let extract_url = join(&settings.extract_path)?;
        let outline_url = join(&settings.outline_path)?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = settings.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| RequestError::new(FailureKind::Network, err.to_string()))?;

        Ok(Self {
            client,
            extract_url,
            outline_url,
        })
    }

    pub fn extract_url(&self) -> &Url {
        &self.extract_url
    }

    pub fn outline_url(&self) -> &Url {
        &self.outline_url
    }

    /// Sends the request and reads the body as envelope `E`.
    ///
    /// A parseable envelope wins over the HTTP status; anything else is a
    /// transport-level failure.
    async fn send_for_envelope<E>(&self, request: reqwest::RequestBuilder) -> Result<Reply, RequestError>
    where
        E: DeserializeOwned + Envelope,
    {
        let response = request.send().await.map_err(map_reqwest_error)?;
        let status = response.status();
        let body = response.bytes().await.map_err(map_reqwest_error)?;
        scribe_debug!("Backend replied {} with {} bytes", status, body.len());

        match serde_json::from_slice::<E>(&body) {
            Ok(envelope) => envelope.into_reply(),
            Err(err) => {
                let snippet = excerpt(&String::from_utf8_lossy(&body), BODY_EXCERPT_CHARS);
                let kind = if status.is_success() {
                    FailureKind::MalformedEnvelope
                } else {
                    FailureKind::HttpStatus(status.as_u16())
                };
                Err(RequestError::new(kind, format!("{err}; body: {snippet}")))
            }
        }
    }
}

#[async_trait::async_trait]
impl TranscriptSource for ReqwestBackend {
    async fn extract(&self, url: &str) -> Result<Reply, RequestError> {
        scribe_debug!("POST {} url={}", self.extract_url, url);
        let request = self
            .client
            .post(self.extract_url.clone())
            .form(&[("url", url)]);
        self.send_for_envelope::<ExtractionEnvelope>(request).await
    }
}

#[async_trait::async_trait]
impl OutlineSource for ReqwestBackend {
    async fn outline(&self, text: &str) -> Result<Reply, RequestError> {
        scribe_debug!(
            "POST {} text={}",
            self.outline_url,
            excerpt(text, BODY_EXCERPT_CHARS)
        );
        let request = self
            .client
            .post(self.outline_url.clone())
            .json(&OutlineRequest { text });
        self.send_for_envelope::<OutlineEnvelope>(request).await
    }
}

fn map_reqwest_error(err: reqwest::Error) -> RequestError {
    if err.is_timeout() {
        return RequestError::new(FailureKind::Timeout, err.to_string());
    }
    RequestError::new(FailureKind::Network, err.to_string())
}
