// src/api/mod.rs
//! Remote services — the ability to read headlines, generate images and
//! post to a chat.
//!
//! Each service is a trait returning raw `ApiResponse`s; the stages depend
//! on the traits and on the pure functions in `parser`, never on HTTP
//! details. The reqwest-backed implementations live in `news`, `images`
//! and `telegram`.

pub mod client;
pub mod images;
pub mod news;
pub mod parser;
pub mod responses;
pub mod telegram;
pub mod types;

use crate::error::AppError;
use crate::types::ValidatedUrl;

pub use client::{ApiResponse, HttpClient};
pub use images::OpenAiImagesClient;
pub use news::NewsApiClient;
pub use telegram::TelegramClient;
pub use types::{FeedQuery, GenerationRequest, PhotoUpload};

/// The ability to list current top headlines.
pub trait NewsFeed {
    /// Errors with `MissingConfiguration` when no credential is configured.
    fn top_headlines(&self, query: &FeedQuery) -> Result<ApiResponse<String>, AppError>;
}

/// The ability to turn a prompt into an image.
pub trait ImageService {
    fn create_image(&self, request: &GenerationRequest) -> Result<ApiResponse<String>, AppError>;

    /// Fetches the bytes behind a URL-shaped generation result.
    fn download(&self, url: &ValidatedUrl) -> Result<ApiResponse<Vec<u8>>, AppError>;
}

/// The ability to post into the destination chat.
pub trait MessagingChannel {
    fn send_photo(
        &self,
        photo: &PhotoUpload,
        caption: &str,
    ) -> Result<ApiResponse<String>, AppError>;

    fn send_message(&self, text: &str) -> Result<ApiResponse<String>, AppError>;
}

impl<T: NewsFeed + ?Sized> NewsFeed for &T {
    fn top_headlines(&self, query: &FeedQuery) -> Result<ApiResponse<String>, AppError> {
        (**self).top_headlines(query)
    }
}

impl<T: ImageService + ?Sized> ImageService for &T {
    fn create_image(&self, request: &GenerationRequest) -> Result<ApiResponse<String>, AppError> {
        (**self).create_image(request)
    }

    fn download(&self, url: &ValidatedUrl) -> Result<ApiResponse<Vec<u8>>, AppError> {
        (**self).download(url)
    }
}

impl<T: MessagingChannel + ?Sized> MessagingChannel for &T {
    fn send_photo(
        &self,
        photo: &PhotoUpload,
        caption: &str,
    ) -> Result<ApiResponse<String>, AppError> {
        (**self).send_photo(photo, caption)
    }

    fn send_message(&self, text: &str) -> Result<ApiResponse<String>, AppError> {
        (**self).send_message(text)
    }
}
