// src/generation.rs
//! Image generation and result normalization.

use crate::api::parser::{parse_download, parse_generation};
use crate::api::{GenerationRequest, ImageService};
use crate::error::AppError;
use crate::pipeline::ImageGenerator;
use crate::types::{GeneratedImage, ImageQuality, ImageSize, PosterPrompt, RasterBytes};

/// Generates posters through an `ImageService` with fixed model settings.
pub struct ServiceImageGenerator<S> {
    service: S,
    model: String,
    size: ImageSize,
    quality: ImageQuality,
}

impl<S: ImageService> ServiceImageGenerator<S> {
    pub fn new(
        service: S,
        model: impl Into<String>,
        size: ImageSize,
        quality: ImageQuality,
    ) -> Self {
        Self {
            service,
            model: model.into(),
            size,
            quality,
        }
    }
}

impl<S: ImageService> ImageGenerator for ServiceImageGenerator<S> {
    fn generate(&self, prompt: &PosterPrompt) -> Result<GeneratedImage, AppError> {
        let request = GenerationRequest {
            model: self.model.clone(),
            prompt: prompt.as_str().to_string(),
            size: self.size,
            quality: self.quality,
        };
        let response = self
            .service
            .create_image(&request)
            .map_err(AppError::in_generation_stage)?;
        parse_generation(response)
    }

    fn materialize(&self, image: GeneratedImage) -> Result<RasterBytes, AppError> {
        materialize(image, &self.service)
    }
}

/// Normalizes either generation shape into raw encoded image bytes.
///
/// Inline results are returned as-is; URL results are fetched with one GET.
pub fn materialize(
    image: GeneratedImage,
    service: &dyn ImageService,
) -> Result<RasterBytes, AppError> {
    match image {
        GeneratedImage::InlineBytes(bytes) => Ok(RasterBytes::new(bytes)),
        GeneratedImage::RemoteRef(url) => {
            let response = service.download(&url).map_err(AppError::in_generation_stage)?;
            let raster = parse_download(response)?;
            log::debug!("Downloaded {} bytes", raster.len());
            Ok(raster)
        }
    }
}
