// src/constants.rs
//! Domain constants that define the operational boundaries of the system.
//!
//! Each constant is named for the domain concept it constrains, not its
//! technical role. Reading these constants should tell you the story
//! of how a poster run operates: how much news it asks for, how short a
//! headline set may be, where the logo sits, how long a caption can grow.

use std::time::Duration;

// ---------------------------------------------------------------------------
// Headline feed boundaries
// ---------------------------------------------------------------------------

/// Default endpoint for top headlines.
pub const NEWS_API_URL: &str = "https://newsapi.org/v2/top-headlines";

/// How many articles we ask the feed for.
///
/// Only the first few are ever featured; five leaves room for entries
/// that come back without a usable title.
pub const DEFAULT_FEED_PAGE_SIZE: u8 = 5;

/// Upper bound on the number of items a headline set may carry.
pub const MAX_HEADLINES: usize = 5;

/// How many headlines (or tips) are featured on a poster by default.
pub const DEFAULT_FEATURED_HEADLINES: usize = 3;

/// Separator used to join headlines into one line of prompt text.
pub const HEADLINE_SEPARATOR: &str = ", ";

/// Titles the feed uses for retracted articles. Treated as missing.
pub const PLACEHOLDER_TITLES: &[&str] = &["[Removed]"];

/// Static tips used whenever live headlines are unavailable or too thin.
pub const AWARENESS_TIPS: &[&str] = &[
    "Donate blood regularly: one donation can save up to three lives",
    "Stay hydrated: drink at least eight glasses of water a day",
    "Wash your hands often to stop infections spreading",
    "Get a regular health check-up to catch problems early",
    "Eat a balanced diet rich in fruits and vegetables",
];

// ---------------------------------------------------------------------------
// Prompt boundaries
// ---------------------------------------------------------------------------

/// Identity the poster and caption are branded for.
pub const DEFAULT_ORGANIZATION: &str = "Swasthya Setu Charitable Trust";

/// Registered names of the two embedded templates.
pub const PROMPT_TEMPLATE_NAME: &str = "poster_prompt";
pub const CAPTION_TEMPLATE_NAME: &str = "caption";

/// Joined headline text shorter than this (after trimming) is replaced by tips.
pub const MIN_HEADLINE_TEXT_CHARS: usize = 10;

/// How the date appears in prompts and captions ("18 October 2026").
pub const DATE_STAMP_FORMAT: &str = "%d %B %Y";

// ---------------------------------------------------------------------------
// Image generation
// ---------------------------------------------------------------------------

/// Default endpoint for text-to-image generation.
pub const IMAGE_API_URL: &str = "https://api.openai.com/v1/images/generations";

/// Model identifier sent with every generation request.
pub const DEFAULT_IMAGE_MODEL: &str = "gpt-image-1";

// ---------------------------------------------------------------------------
// Compositing geometry
// ---------------------------------------------------------------------------

/// Gap in pixels between the logo and the nearest poster edge(s).
pub const DEFAULT_LOGO_MARGIN: u32 = 30;

/// Largest accepted `--margin`.
pub const MAX_LOGO_MARGIN: u32 = 512;

/// Default on-disk logo asset.
pub const DEFAULT_LOGO_PATH: &str = "logo.png";

/// Default location for the finished poster. Overwritten every run.
pub const DEFAULT_OUTPUT_PATH: &str = "final_poster.png";

// ---------------------------------------------------------------------------
// Messaging
// ---------------------------------------------------------------------------

/// Base URL of the bot API; the token is appended as `/bot<token>/<method>`.
pub const TELEGRAM_API_BASE: &str = "https://api.telegram.org";

/// Photo captions longer than this are rejected by the platform.
pub const CAPTION_MAX_CHARS: usize = 1024;

/// Plain text messages longer than this are rejected by the platform.
pub const MESSAGE_MAX_CHARS: usize = 4096;

// ---------------------------------------------------------------------------
// Timeouts
// ---------------------------------------------------------------------------

/// The feed is optional content; give up quickly.
pub const DEFAULT_FEED_TIMEOUT: Duration = Duration::from_secs(10);

/// High-quality generations routinely take over a minute.
pub const DEFAULT_GENERATION_TIMEOUT: Duration = Duration::from_secs(180);

/// Uploading a multi-megabyte PNG over a slow link.
pub const DEFAULT_DELIVERY_TIMEOUT: Duration = Duration::from_secs(60);

// ---------------------------------------------------------------------------
// Error display
// ---------------------------------------------------------------------------

/// Maximum characters shown when previewing error response bodies.
pub const ERROR_BODY_PREVIEW_LENGTH: usize = 200;
