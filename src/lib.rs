// src/lib.rs
//! newsposter library — turns today's headlines into a branded poster and
//! posts it to a chat.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Error handling** — `AppError`, `FeedFailure`, `ValidationError`
//! - **Configuration** — `PipelineConfig`, `CommandLineInput`
//! - **Domain types** — `HeadlineSet`, `PosterPrompt`, `GeneratedImage`, `DeliveryOutcome`, etc.
//! - **Remote services** — `NewsFeed`, `ImageService`, `MessagingChannel` and their HTTP clients
//! - **Stages** — one implementation per pipeline trait, wired together by `PosterRun`

pub mod api;
mod config;
pub mod constants;
mod error;
mod formatting;
mod generation;
mod headlines;
pub mod imaging;
mod output;
mod pipeline;
mod types;

// --- Error Handling ---
pub use crate::error::{classify_feed_error, AppError, FeedFailure, ServiceErrorCode};
pub use crate::types::ValidationError;

// --- Configuration ---
pub use crate::config::{
    CommandLineInput, Credentials, PipelineConfig, ServiceEndpoints, ServiceTimeouts,
};

// --- Domain Types ---
pub use crate::types::{
    AlertStatus, Anchor, ApiKey, ChatId, CompositedPoster, DeliveryOutcome, GeneratedImage,
    HeadlineSet, HexColor, ImageQuality, ImageSize, MessageId, PosterArtifact, PosterPrompt,
    Provenance, RasterBytes, RenderedCaption, RunSummary, ScaleRatio, Secret, ValidatedUrl,
};

// --- Remote Services ---
pub use crate::api::{
    ApiResponse, FeedQuery, GenerationRequest, HttpClient, ImageService, MessagingChannel,
    NewsApiClient, NewsFeed, OpenAiImagesClient, PhotoUpload, TelegramClient,
};

// --- Stages ---
pub use crate::formatting::{render_alert, truncate_for_platform, PosterTemplates, TemplateSet};
pub use crate::generation::{materialize, ServiceImageGenerator};
pub use crate::headlines::{FallbackTips, FeedHeadlineSource};
pub use crate::imaging::{LogoCompositor, LogoPlacement};
pub use crate::output::{write_poster, ChannelAlertNotifier, ChannelPublisher};

// --- Pipeline Traits ---
pub use crate::pipeline::{
    AlertNotifier, CaptionComposer, Compositor, HeadlineSource, ImageGenerator, PosterRun,
    PromptBuilder, Publisher,
};
