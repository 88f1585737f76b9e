//! Text-to-image generation over HTTP.

use super::client::{ApiResponse, HttpClient};
use super::types::GenerationRequest;
use super::ImageService;
use crate::error::AppError;
use crate::types::{Secret, ValidatedUrl};

pub struct OpenAiImagesClient {
    http: HttpClient,
    api_key: Secret,
    endpoint: String,
}

impl OpenAiImagesClient {
    pub fn new(http: HttpClient, api_key: Secret, endpoint: impl Into<String>) -> Self {
        Self {
            http,
            api_key,
            endpoint: endpoint.into(),
        }
    }
}

impl ImageService for OpenAiImagesClient {
    fn create_image(&self, request: &GenerationRequest) -> Result<ApiResponse<String>, AppError> {
        let api_key = match &self.api_key {
            Secret::Malformed { reason } => {
                return Err(AppError::MissingConfiguration(format!(
                    "OPENAI_API_KEY is malformed: {}",
                    reason
                )))
            }
            secret => secret.key().ok_or_else(|| {
                AppError::MissingConfiguration("OPENAI_API_KEY is not set".to_string())
            })?,
        };

        log::info!(
            "Requesting {} image at {} ({} quality, prompt {} chars)",
            request.model,
            request.size,
            request.quality,
            request.prompt.len()
        );
        self.http.post_json(&self.endpoint, api_key, request)
    }

    fn download(&self, url: &ValidatedUrl) -> Result<ApiResponse<Vec<u8>>, AppError> {
        log::info!("Downloading generated image");
        self.http.get_bytes(url.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn request() -> GenerationRequest {
        GenerationRequest {
            model: "gpt-image-1".to_string(),
            prompt: "A poster".to_string(),
            size: crate::types::ImageSize::PORTRAIT_POSTER,
            quality: crate::types::ImageQuality::High,
        }
    }

    fn client(api_key: Secret) -> OpenAiImagesClient {
        let http = HttpClient::new(Duration::from_secs(1)).unwrap();
        OpenAiImagesClient::new(http, api_key, "http://127.0.0.1:9/v1/images/generations")
    }

    #[test]
    fn unset_key_fails_before_any_request() {
        match client(Secret::Unset).create_image(&request()) {
            Err(AppError::MissingConfiguration(message)) => assert!(message.contains("not set")),
            other => panic!("expected missing configuration, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn malformed_key_is_reported_by_the_generation_call() {
        let secret = Secret::from_env(Some("abc".to_string()));
        match client(secret).create_image(&request()) {
            Err(AppError::MissingConfiguration(message)) => {
                assert!(message.contains("OPENAI_API_KEY is malformed"), "{message}")
            }
            other => panic!("expected missing configuration, got {:?}", other.map(|_| ())),
        }
    }
}
