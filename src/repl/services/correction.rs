//! # Correction Service
//!
//! Sends text to the remote correction endpoint and turns whatever comes
//! back into either a validated `CorrectionResult` or a classified
//! `CorrectionError`. One request per call, no retries, no cancellation.

use crate::config::{ConfigError, ServiceConfig};
use crate::repl::models::{CorrectionRequest, CorrectionResult, ErrorKind, ErrorNotice};
use reqwest::{StatusCode, Url};
use serde::Deserialize;
use std::error::Error as StdError;
use thiserror::Error;

/// Shown when a submission is attempted without an endpoint
pub const CONFIGURATION_MESSAGE: &str = "Configuration needed: set the correction service endpoint (--endpoint, SYNTAXGUARD_ENDPOINT, or the profile file) before using the application.";

/// Shown when a success body decodes but has the wrong shape
pub const INVALID_RESPONSE_MESSAGE: &str =
    "Received an invalid response from the correction service.";

/// Shown when a success body is not JSON at all
pub const UNEXPECTED_FORMAT_MESSAGE: &str =
    "The correction service returned a response in an unexpected format. Please try again.";

/// What was wrong with a success response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProtocolFault {
    /// Decoded, but `correctedText`/`notes`/`alternatives` had the wrong types
    InvalidShape,
    /// Body could not be decoded as JSON
    UnexpectedFormat,
}

impl ProtocolFault {
    pub fn message(&self) -> &'static str {
        match self {
            ProtocolFault::InvalidShape => INVALID_RESPONSE_MESSAGE,
            ProtocolFault::UnexpectedFormat => UNEXPECTED_FORMAT_MESSAGE,
        }
    }
}

/// Classified failure of a correction call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CorrectionError {
    #[error("{}", CONFIGURATION_MESSAGE)]
    Configuration,

    /// Remote error message, surfaced verbatim
    #[error("{message}")]
    Service { status: u16, message: String },

    #[error("{}", .0.message())]
    Protocol(ProtocolFault),

    #[error("Failed to reach the correction service: {message}")]
    Transport { message: String },
}

impl CorrectionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CorrectionError::Configuration => ErrorKind::Configuration,
            CorrectionError::Service { .. } => ErrorKind::Service,
            CorrectionError::Protocol(_) => ErrorKind::Protocol,
            CorrectionError::Transport { .. } => ErrorKind::Transport,
        }
    }

    /// Convert into the notice shown by the view
    pub fn to_notice(&self) -> ErrorNotice {
        ErrorNotice::new(self.kind(), self.to_string())
    }

    fn transport(error: reqwest::Error) -> Self {
        // Show full error chain so "connection refused" etc. is not lost
        let mut message = error.to_string();
        let mut source = error.source();
        while let Some(cause) = source {
            message.push_str(&format!(": {cause}"));
            source = cause.source();
        }
        tracing::error!("Correction request failed: {message}");
        CorrectionError::Transport { message }
    }
}

#[derive(Debug, Deserialize)]
struct ServiceErrorBody {
    error: Option<String>,
}

/// Build the error for a non-2xx response
pub(crate) fn service_error(status: StatusCode, body: &str) -> CorrectionError {
    let remote_message = serde_json::from_str::<ServiceErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .filter(|message| !message.is_empty());

    let message = remote_message
        .unwrap_or_else(|| format!("Request failed with status {}", status.as_u16()));
    tracing::warn!(
        "Correction service returned {}: {}",
        status.as_u16(),
        message
    );

    CorrectionError::Service {
        status: status.as_u16(),
        message,
    }
}

/// Decode and validate a 2xx response body
pub(crate) fn parse_success_body(body: &str) -> Result<CorrectionResult, CorrectionError> {
    let value: serde_json::Value = serde_json::from_str(body).map_err(|e| {
        tracing::error!("Correction response is not JSON ({e}): {body}");
        CorrectionError::Protocol(ProtocolFault::UnexpectedFormat)
    })?;

    serde_json::from_value::<CorrectionResult>(value).map_err(|e| {
        tracing::error!(
            "Correction response is missing required fields or has incorrect types ({e}): {body}"
        );
        CorrectionError::Protocol(ProtocolFault::InvalidShape)
    })
}

/// Mediator between a submission and the remote correction endpoint
#[derive(Debug, Clone)]
pub struct CorrectionService {
    client: reqwest::Client,
    endpoint: Option<Url>,
}

impl CorrectionService {
    /// Create a service from resolved configuration
    pub fn new(config: &ServiceConfig) -> Result<Self, ConfigError> {
        let endpoint = config
            .endpoint()
            .map(|value| {
                Url::parse(value).map_err(|e| ConfigError::InvalidEndpoint {
                    value: value.to_string(),
                    message: e.to_string(),
                })
            })
            .transpose()?;

        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| ConfigError::InvalidEndpoint {
                value: config.endpoint().unwrap_or_default().to_string(),
                message: format!("failed to create HTTP client: {e}"),
            })?;

        tracing::debug!(
            "CorrectionService created (configured: {}, timeout: {:?})",
            endpoint.is_some(),
            config.timeout()
        );

        Ok(Self { client, endpoint })
    }

    /// Whether an endpoint was supplied at construction
    pub fn is_configured(&self) -> bool {
        self.endpoint.is_some()
    }

    pub fn endpoint(&self) -> Option<&Url> {
        self.endpoint.as_ref()
    }

    /// Correct `text` against `reference_document`
    pub async fn correct(
        &self,
        text: &str,
        reference_document: &str,
    ) -> Result<CorrectionResult, CorrectionError> {
        self.execute(&CorrectionRequest::new(text, reference_document))
            .await
    }

    /// Execute a prepared request
    pub async fn execute(
        &self,
        request: &CorrectionRequest,
    ) -> Result<CorrectionResult, CorrectionError> {
        if request.is_blank() {
            tracing::debug!("Blank text, skipping correction request");
            return Ok(CorrectionResult::empty());
        }

        let Some(endpoint) = &self.endpoint else {
            tracing::warn!("Correction requested but no endpoint is configured");
            return Err(CorrectionError::Configuration);
        };

        tracing::info!(
            "Sending {} characters to the correction service",
            request.text.len()
        );

        let response = self
            .client
            .post(endpoint.clone())
            .json(request)
            .send()
            .await
            .map_err(CorrectionError::transport)?;

        let status = response.status();
        let body = response.text().await.map_err(CorrectionError::transport)?;

        if !status.is_success() {
            return Err(service_error(status, &body));
        }

        let result = parse_success_body(&body)?;
        tracing::info!(
            "Correction received: {} notes, {} alternatives",
            result.notes.len(),
            result.alternatives.len()
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_error_should_use_remote_error_field() {
        let err = service_error(StatusCode::INTERNAL_SERVER_ERROR, r#"{"error":"boom"}"#);
        assert_eq!(
            err,
            CorrectionError::Service {
                status: 500,
                message: "boom".to_string()
            }
        );
        assert_eq!(err.to_string(), "boom");
        assert_eq!(err.kind(), ErrorKind::Service);
    }

    #[test]
    fn service_error_should_fall_back_to_status_message() {
        for body in ["", "not json", r#"{"error":""}"#, r#"{"error":42}"#, "{}"] {
            let err = service_error(StatusCode::BAD_GATEWAY, body);
            assert_eq!(
                err.to_string(),
                "Request failed with status 502",
                "body {body:?}"
            );
        }
    }

    #[test]
    fn success_body_should_decode_and_default_alternatives() {
        let result = parse_success_body(r#"{"correctedText":"X","notes":["n1"]}"#).unwrap();
        assert_eq!(result.corrected_text, "X");
        assert_eq!(result.notes, vec!["n1".to_string()]);
        assert!(result.alternatives.is_empty());
    }

    #[test]
    fn success_body_with_wrong_types_should_be_protocol_error() {
        let err = parse_success_body(r#"{"correctedText":5}"#).unwrap_err();
        assert_eq!(err, CorrectionError::Protocol(ProtocolFault::InvalidShape));
        assert_eq!(err.to_string(), INVALID_RESPONSE_MESSAGE);
    }

    #[test]
    fn success_body_that_is_not_json_should_be_protocol_error() {
        let err = parse_success_body("<html>oops</html>").unwrap_err();
        assert_eq!(
            err,
            CorrectionError::Protocol(ProtocolFault::UnexpectedFormat)
        );
        assert_eq!(err.kind(), ErrorKind::Protocol);
    }

    #[test]
    fn configuration_error_should_carry_fixed_message() {
        let notice = CorrectionError::Configuration.to_notice();
        assert!(notice.is_configuration());
        assert!(notice.message.starts_with("Configuration needed"));
    }

    #[test]
    fn new_should_reject_malformed_endpoint() {
        let err = CorrectionService::new(&ServiceConfig::with_endpoint("not a url")).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEndpoint { .. }));
    }

    #[test]
    fn new_should_report_configuration_capability() {
        let unconfigured = CorrectionService::new(&ServiceConfig::unconfigured()).unwrap();
        assert!(!unconfigured.is_configured());

        let configured =
            CorrectionService::new(&ServiceConfig::with_endpoint("https://proxy.example.com"))
                .unwrap();
        assert!(configured.is_configured());
    }

    #[tokio::test]
    async fn blank_text_should_resolve_without_contacting_service() {
        // Unroutable endpoint: any network attempt would fail
        let service =
            CorrectionService::new(&ServiceConfig::with_endpoint("http://127.0.0.1:9/never"))
                .unwrap();
        let result = service.correct("   ", "guide").await.unwrap();
        assert_eq!(result, CorrectionResult::empty());

        let unconfigured = CorrectionService::new(&ServiceConfig::unconfigured()).unwrap();
        assert_eq!(
            unconfigured.correct("", "anything").await.unwrap(),
            CorrectionResult::empty()
        );
    }

    #[tokio::test]
    async fn unconfigured_service_should_fail_with_configuration_error() {
        let service = CorrectionService::new(&ServiceConfig::unconfigured()).unwrap();
        let err = service.correct("Jane Doe", "guide").await.unwrap_err();
        assert_eq!(err, CorrectionError::Configuration);
    }
}
