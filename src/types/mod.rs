use thiserror::Error;

mod artifacts;
mod content;
mod domain_types;
mod options;

pub use artifacts::*;
pub use content::*;
pub use domain_types::*;
pub use options::*;

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Collection bounds violation: {actual} items, expected {min}..={max}")]
    BoundsViolation {
        actual: usize,
        min: usize,
        max: usize,
    },

    #[error("Invalid URL: {url} - {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Empty required field: {0}")]
    EmptyField(&'static str),

    #[error("Value out of bounds: {value}, expected {min}..={max}")]
    OutOfBounds { value: u32, min: u32, max: u32 },

    #[error("Invalid API key format: {reason}")]
    InvalidApiKey { reason: String },

    #[error("Invalid chat identifier: {input}")]
    InvalidChatId { input: String },

    #[error("Invalid image size '{input}': expected WIDTHxHEIGHT")]
    InvalidImageSize { input: String },

    #[error("Invalid color '{input}': expected #RRGGBB")]
    InvalidColor { input: String },

    #[error("Unknown {kind} '{input}', expected one of: {expected}")]
    UnknownVariant {
        kind: &'static str,
        input: String,
        expected: &'static str,
    },
}
