//! Shared fakes and fixtures for the integration tests.
//!
//! The fakes stand in for the three remote services and record every call,
//! so scenarios can assert on what would have gone over the wire.

#![allow(dead_code)]

use base64::Engine;
use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use newsposter::{
    ApiResponse, AppError, FeedQuery, GenerationRequest, ImageService, MessagingChannel, NewsFeed,
    PhotoUpload, ValidatedUrl,
};
use reqwest::StatusCode;
use std::cell::RefCell;
use std::io::Cursor;
use std::path::Path;

pub fn response<T>(status: u16, data: T, url: &str) -> ApiResponse<T> {
    ApiResponse::new(data, StatusCode::from_u16(status).unwrap(), url)
}

pub fn feed_query() -> FeedQuery {
    FeedQuery {
        category: "health".to_string(),
        country: "in".to_string(),
        language: None,
        page_size: 5,
    }
}

// ---------------------------------------------------------------------------
// Synthetic images
// ---------------------------------------------------------------------------

pub fn png_bytes(width: u32, height: u32, pixel: [u8; 4]) -> Vec<u8> {
    let img = RgbaImage::from_pixel(width, height, Rgba(pixel));
    let mut out = Cursor::new(Vec::new());
    DynamicImage::ImageRgba8(img)
        .write_to(&mut out, ImageFormat::Png)
        .unwrap();
    out.into_inner()
}

/// A poster with a horizontal gradient so resampling bugs are visible.
pub fn gradient_png(width: u32, height: u32) -> Vec<u8> {
    let img = RgbaImage::from_fn(width, height, |x, y| {
        Rgba([(x * 255 / width) as u8, (y * 255 / height) as u8, 128, 255])
    });
    let mut out = Cursor::new(Vec::new());
    DynamicImage::ImageRgba8(img)
        .write_to(&mut out, ImageFormat::Png)
        .unwrap();
    out.into_inner()
}

pub fn write_logo(path: &Path, width: u32, height: u32) {
    std::fs::write(path, png_bytes(width, height, [255, 0, 0, 255])).unwrap();
}

pub fn decode(bytes: &[u8]) -> RgbaImage {
    image::load_from_memory(bytes).unwrap().to_rgba8()
}

// ---------------------------------------------------------------------------
// News feed
// ---------------------------------------------------------------------------

pub enum FeedBehavior {
    NoCredential,
    Reply(u16, String),
}

pub struct FakeFeed {
    pub behavior: FeedBehavior,
    pub calls: RefCell<usize>,
}

impl FakeFeed {
    pub fn without_credential() -> Self {
        Self {
            behavior: FeedBehavior::NoCredential,
            calls: RefCell::new(0),
        }
    }

    pub fn replying(status: u16, body: impl Into<String>) -> Self {
        Self {
            behavior: FeedBehavior::Reply(status, body.into()),
            calls: RefCell::new(0),
        }
    }

    pub fn with_titles(titles: &[&str]) -> Self {
        let articles: Vec<_> = titles
            .iter()
            .map(|title| serde_json::json!({ "title": title }))
            .collect();
        Self::replying(
            200,
            serde_json::json!({ "status": "ok", "articles": articles }).to_string(),
        )
    }
}

impl NewsFeed for FakeFeed {
    fn top_headlines(&self, _query: &FeedQuery) -> Result<ApiResponse<String>, AppError> {
        *self.calls.borrow_mut() += 1;
        match &self.behavior {
            FeedBehavior::NoCredential => Err(AppError::MissingConfiguration(
                "NEWS_API_KEY is not set".to_string(),
            )),
            FeedBehavior::Reply(status, body) => Ok(response(
                *status,
                body.clone(),
                "https://news.test/v2/top-headlines",
            )),
        }
    }
}

// ---------------------------------------------------------------------------
// Image service
// ---------------------------------------------------------------------------

pub enum GenerationBehavior {
    Inline(Vec<u8>),
    Url(String, Vec<u8>),
    Reply(u16, String),
}

pub struct FakeImageService {
    pub behavior: GenerationBehavior,
    pub prompts: RefCell<Vec<String>>,
    pub downloads: RefCell<Vec<String>>,
}

impl FakeImageService {
    pub fn inline(png: Vec<u8>) -> Self {
        Self::new(GenerationBehavior::Inline(png))
    }

    pub fn url(url: &str, png: Vec<u8>) -> Self {
        Self::new(GenerationBehavior::Url(url.to_string(), png))
    }

    pub fn replying(status: u16, body: impl Into<String>) -> Self {
        Self::new(GenerationBehavior::Reply(status, body.into()))
    }

    fn new(behavior: GenerationBehavior) -> Self {
        Self {
            behavior,
            prompts: RefCell::new(Vec::new()),
            downloads: RefCell::new(Vec::new()),
        }
    }
}

impl ImageService for FakeImageService {
    fn create_image(&self, request: &GenerationRequest) -> Result<ApiResponse<String>, AppError> {
        self.prompts.borrow_mut().push(request.prompt.clone());
        let (status, body) = match &self.behavior {
            GenerationBehavior::Inline(png) => {
                let encoded = base64::engine::general_purpose::STANDARD.encode(png);
                (200, serde_json::json!({ "data": [{ "b64_json": encoded }] }).to_string())
            }
            GenerationBehavior::Url(url, _) => {
                (200, serde_json::json!({ "data": [{ "url": url }] }).to_string())
            }
            GenerationBehavior::Reply(status, body) => (*status, body.clone()),
        };
        Ok(response(status, body, "https://images.test/v1/images/generations"))
    }

    fn download(&self, url: &ValidatedUrl) -> Result<ApiResponse<Vec<u8>>, AppError> {
        self.downloads.borrow_mut().push(url.as_str().to_string());
        match &self.behavior {
            GenerationBehavior::Url(_, png) => Ok(response(200, png.clone(), url.as_str())),
            _ => Ok(response(404, Vec::new(), url.as_str())),
        }
    }
}

// ---------------------------------------------------------------------------
// Messaging channel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub enum Sent {
    Photo(PhotoUpload, String),
    Text(String),
}

pub struct RecordingChannel {
    pub photo_reply: (u16, String),
    pub text_reply: (u16, String),
    pub sent: RefCell<Vec<Sent>>,
}

impl RecordingChannel {
    pub fn accepting() -> Self {
        Self {
            photo_reply: (200, r#"{"ok":true,"result":{"message_id":101}}"#.to_string()),
            text_reply: (200, r#"{"ok":true,"result":{"message_id":102}}"#.to_string()),
            sent: RefCell::new(Vec::new()),
        }
    }

    pub fn rejecting_photos(description: &str) -> Self {
        Self {
            photo_reply: (
                400,
                serde_json::json!({ "ok": false, "error_code": 400, "description": description })
                    .to_string(),
            ),
            ..Self::accepting()
        }
    }

    pub fn photos(&self) -> Vec<(PhotoUpload, String)> {
        self.sent
            .borrow()
            .iter()
            .filter_map(|sent| match sent {
                Sent::Photo(photo, caption) => Some((photo.clone(), caption.clone())),
                Sent::Text(_) => None,
            })
            .collect()
    }

    pub fn texts(&self) -> Vec<String> {
        self.sent
            .borrow()
            .iter()
            .filter_map(|sent| match sent {
                Sent::Text(text) => Some(text.clone()),
                Sent::Photo(..) => None,
            })
            .collect()
    }
}

impl MessagingChannel for RecordingChannel {
    fn send_photo(
        &self,
        photo: &PhotoUpload,
        caption: &str,
    ) -> Result<ApiResponse<String>, AppError> {
        self.sent
            .borrow_mut()
            .push(Sent::Photo(photo.clone(), caption.to_string()));
        let (status, body) = &self.photo_reply;
        Ok(response(*status, body.clone(), "https://chat.test/sendPhoto"))
    }

    fn send_message(&self, text: &str) -> Result<ApiResponse<String>, AppError> {
        self.sent.borrow_mut().push(Sent::Text(text.to_string()));
        let (status, body) = &self.text_reply;
        Ok(response(*status, body.clone(), "https://chat.test/sendMessage"))
    }
}
