//! Request descriptions handed to the service traits.

use crate::types::{ImageQuality, ImageSize, ValidatedUrl};
use serde::Serialize;

/// Filters sent to the headline feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedQuery {
    pub category: String,
    pub country: String,
    pub language: Option<String>,
    pub page_size: u8,
}

impl FeedQuery {
    /// Query parameters in the feed's wire naming, without the credential.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("country", self.country.clone()),
            ("category", self.category.clone()),
            ("pageSize", self.page_size.to_string()),
        ];
        if let Some(language) = &self.language {
            params.push(("language", language.clone()));
        }
        params
    }
}

/// JSON body for one text-to-image generation call.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationRequest {
    pub model: String,
    pub prompt: String,
    #[serde(serialize_with = "serialize_display")]
    pub size: ImageSize,
    #[serde(serialize_with = "serialize_display")]
    pub quality: ImageQuality,
}

fn serialize_display<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: std::fmt::Display,
    S: serde::Serializer,
{
    serializer.collect_str(value)
}

/// The photo half of a delivery: local bytes or a remote reference.
#[derive(Debug, Clone)]
pub enum PhotoUpload {
    Bytes { file_name: String, bytes: Vec<u8> },
    Url(ValidatedUrl),
}
