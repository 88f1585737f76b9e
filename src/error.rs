// src/error.rs
//! Application error types with structured error handling.
//!
//! Error types form the vocabulary for failure modes in a poster run.
//! Only some of them are fatal: headline and prompt problems degrade to
//! fallback content, a missing logo degrades to an uncomposited poster.
//! Everything that reaches the top-level boundary as an `AppError` becomes
//! an alert.

use std::fmt;
use thiserror::Error;

/// HTTP-level failure classes shared by every remote service.
///
/// Instead of comparing raw status numbers at call sites, the failure is
/// encoded in the type system so log lines and alerts can say what kind of
/// trouble the service reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceErrorCode {
    /// Credential rejected or missing (401)
    Unauthorized,
    /// Credential valid but not allowed to do this (403)
    Forbidden,
    /// Request rejected by validation, e.g. a content-policy refusal (400, 422)
    BadRequest,
    /// Quota or rate limit exceeded (429)
    RateLimited,
    /// Service-side failure (5xx)
    ServerError(u16),
    /// Any other non-success status
    HttpStatus(u16),
}

impl ServiceErrorCode {
    /// Classify a non-success HTTP status code.
    pub fn from_http_status(status: u16) -> Self {
        match status {
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            400 | 422 => Self::BadRequest,
            429 => Self::RateLimited,
            500..=599 => Self::ServerError(status),
            other => Self::HttpStatus(other),
        }
    }
}

impl fmt::Display for ServiceErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unauthorized => write!(f, "unauthorized"),
            Self::Forbidden => write!(f, "forbidden"),
            Self::BadRequest => write!(f, "bad_request"),
            Self::RateLimited => write!(f, "rate_limited"),
            Self::ServerError(code) => write!(f, "server_error_{}", code),
            Self::HttpStatus(code) => write!(f, "http_{}", code),
        }
    }
}

/// Main application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing configuration: {0}")]
    MissingConfiguration(String),

    #[error("Network failure: {0}")]
    NetworkFailure(#[from] reqwest::Error),

    #[error("Image generation failed ({code}): {message}")]
    Generation {
        code: ServiceErrorCode,
        message: String,
    },

    #[error("Image generation unreachable: {0}")]
    GenerationUnreachable(String),

    #[error("Unexpected response from image service: {0}")]
    UpstreamFormat(String),

    #[error("Delivery rejected ({code}): {description}")]
    Delivery {
        code: ServiceErrorCode,
        description: String,
    },

    #[error("Image processing failed: {0}")]
    Imaging(#[from] image::ImageError),

    #[error("Filesystem IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Template file not found at {path}: {source}")]
    TemplateNotFound {
        path: String,
        source: std::io::Error,
    },

    #[error("Template render error for template {name}: {message}")]
    TemplateRenderError { name: String, message: String },

    #[error(transparent)]
    ValidationError(#[from] crate::types::ValidationError),
}

impl AppError {
    /// Re-labels transport failures as generation failures so the alert says which stage died.
    pub fn in_generation_stage(self) -> Self {
        match self {
            AppError::NetworkFailure(err) => AppError::GenerationUnreachable(err.to_string()),
            other => other,
        }
    }

    /// Re-labels transport failures as delivery failures.
    pub fn in_delivery_stage(self) -> Self {
        match self {
            AppError::NetworkFailure(err) => AppError::Delivery {
                code: ServiceErrorCode::HttpStatus(0),
                description: format!("messaging endpoint unreachable: {}", err),
            },
            other => other,
        }
    }

    /// Short name of the failing stage for the alert header.
    pub fn stage(&self) -> &'static str {
        match self {
            Self::Generation { .. } | Self::GenerationUnreachable(_) | Self::UpstreamFormat(_) => {
                "image generation"
            }
            Self::Delivery { .. } => "delivery",
            Self::Imaging(_) => "compositing",
            Self::TemplateNotFound { .. } | Self::TemplateRenderError { .. } => "prompt rendering",
            Self::MissingConfiguration(_) | Self::ValidationError(_) => "configuration",
            Self::NetworkFailure(_) | Self::Io(_) => "pipeline",
        }
    }
}

impl From<base64::DecodeError> for AppError {
    fn from(err: base64::DecodeError) -> Self {
        AppError::UpstreamFormat(format!("inline image is not valid base64: {}", err))
    }
}

/// Domain vocabulary for why the live headline feed was not used.
///
/// This is not an error type — it's a classification of the degradation
/// reason. None of these ever leave the headline stage; they pick the log
/// line and trigger the fallback tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedFailure {
    /// No news credential configured (supported degraded mode)
    MissingCredential,
    /// Timeout, DNS, TLS, connection reset
    Network { cause: String },
    /// Non-success HTTP status
    Status { code: ServiceErrorCode, message: String },
    /// Body was not the JSON shape we expect
    Malformed { cause: String },
    /// The feed answered but had nothing usable
    Empty,
}

impl fmt::Display for FeedFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingCredential => write!(f, "no news credential configured"),
            Self::Network { cause } => write!(f, "network failure: {}", cause),
            Self::Status { code, message } => write!(f, "feed returned {}: {}", code, message),
            Self::Malformed { cause } => write!(f, "malformed feed payload: {}", cause),
            Self::Empty => write!(f, "feed returned no usable headlines"),
        }
    }
}

/// Classifies a transport-level error raised while calling the feed.
pub fn classify_feed_error(error: &AppError) -> FeedFailure {
    match error {
        AppError::MissingConfiguration(_) => FeedFailure::MissingCredential,
        AppError::NetworkFailure(err) => FeedFailure::Network {
            cause: err.to_string(),
        },
        other => FeedFailure::Network {
            cause: other.to_string(),
        },
    }
}
