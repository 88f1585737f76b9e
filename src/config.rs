// src/config.rs
use crate::api::FeedQuery;
use crate::constants::{
    DEFAULT_DELIVERY_TIMEOUT, DEFAULT_FEATURED_HEADLINES, DEFAULT_FEED_PAGE_SIZE,
    DEFAULT_FEED_TIMEOUT, DEFAULT_GENERATION_TIMEOUT, DEFAULT_IMAGE_MODEL, DEFAULT_LOGO_MARGIN,
    DEFAULT_LOGO_PATH, DEFAULT_ORGANIZATION, DEFAULT_OUTPUT_PATH, IMAGE_API_URL, MAX_HEADLINES,
    MAX_LOGO_MARGIN, NEWS_API_URL, TELEGRAM_API_BASE,
};
use crate::error::AppError;
use crate::headlines::FallbackTips;
use crate::imaging::LogoPlacement;
use crate::types::{
    Anchor, ApiKey, ChatId, HexColor, ImageQuality, ImageSize, ScaleRatio, Secret,
    ValidationError,
};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variables holding the run's secrets.
pub const OPENAI_API_KEY_VAR: &str = "OPENAI_API_KEY";
pub const TELEGRAM_BOT_TOKEN_VAR: &str = "TELEGRAM_BOT_TOKEN";
pub const TELEGRAM_CHAT_ID_VAR: &str = "TELEGRAM_CHAT_ID";
pub const NEWS_API_KEY_VAR: &str = "NEWS_API_KEY";

/// Parsed command-line input. Secrets are read from the environment only.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineInput {
    /// Organization the poster and caption are branded for
    #[arg(long, default_value = DEFAULT_ORGANIZATION)]
    pub organization: String,

    /// News category to draw headlines from
    #[arg(long, default_value = "health")]
    pub category: String,

    /// Two-letter country code for the headline feed
    #[arg(long, default_value = "in")]
    pub country: String,

    /// Restrict headlines to a language (e.g., "en")
    #[arg(long)]
    pub language: Option<String>,

    /// How many articles to request from the feed
    #[arg(long, default_value_t = DEFAULT_FEED_PAGE_SIZE)]
    pub page_size: u8,

    /// Maximum headlines (or tips) featured on the poster
    #[arg(long, default_value_t = DEFAULT_FEATURED_HEADLINES)]
    pub max_headlines: usize,

    /// Image generation model
    #[arg(long, default_value = DEFAULT_IMAGE_MODEL)]
    pub model: String,

    /// Generated image size as WIDTHxHEIGHT
    #[arg(long, default_value = "1024x1536")]
    pub size: String,

    /// Generation quality: low, medium, high or auto
    #[arg(long, default_value = "high")]
    pub quality: String,

    /// Logo asset composited onto the poster
    #[arg(long, default_value = DEFAULT_LOGO_PATH)]
    pub logo: PathBuf,

    /// Where the finished poster is written (overwritten every run)
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Logo position: top-right, top-center, bottom-right or bottom-center
    #[arg(long, default_value = "top-right")]
    pub anchor: String,

    /// Logo width as a fraction of poster width (1/N)
    #[arg(long, default_value_t = 4)]
    pub scale_ratio: u32,

    /// Distance in pixels between the logo and the nearest edge(s)
    #[arg(long, default_value_t = DEFAULT_LOGO_MARGIN)]
    pub margin: u32,

    /// Place the logo in an added strip instead of over the artwork
    #[arg(long, default_value_t = false)]
    pub non_overlapping: bool,

    /// Fill color of the non-overlapping strip (#RRGGBB)
    #[arg(long, default_value = "#ffffff")]
    pub strip_color: String,

    /// Replace the embedded prompt template with this file
    #[arg(long)]
    pub prompt_template: Option<PathBuf>,

    /// Replace the embedded caption template with this file
    #[arg(long)]
    pub caption_template: Option<PathBuf>,

    /// Fallback tip used when headlines are unavailable (repeatable)
    #[arg(long = "tip")]
    pub tips: Vec<String>,

    /// Headline feed timeout in seconds
    #[arg(long, default_value_t = DEFAULT_FEED_TIMEOUT.as_secs())]
    pub feed_timeout: u64,

    /// Image generation timeout in seconds
    #[arg(long, default_value_t = DEFAULT_GENERATION_TIMEOUT.as_secs())]
    pub generation_timeout: u64,

    /// Messaging timeout in seconds
    #[arg(long, default_value_t = DEFAULT_DELIVERY_TIMEOUT.as_secs())]
    pub delivery_timeout: u64,

    #[arg(long, default_value = NEWS_API_URL, hide = true)]
    pub news_api_url: String,

    #[arg(long, default_value = IMAGE_API_URL, hide = true)]
    pub image_api_url: String,

    #[arg(long, default_value = TELEGRAM_API_BASE, hide = true)]
    pub telegram_api_base: String,

    /// Produce and write the poster but neither publish nor alert
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,

    /// Enable verbose logging (debug level)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

/// Secrets resolved from the environment. Any of them may be absent.
///
/// The generation key is kept even when malformed; the generation stage
/// reports it. A malformed news key is dropped, which sends headlines to the
/// fallback tips.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub openai_api_key: Secret,
    pub telegram_bot_token: Option<ApiKey>,
    pub telegram_chat_id: Option<ChatId>,
    pub news_api_key: Option<ApiKey>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceTimeouts {
    pub feed: Duration,
    pub generation: Duration,
    pub delivery: Duration,
}

impl Default for ServiceTimeouts {
    fn default() -> Self {
        Self {
            feed: DEFAULT_FEED_TIMEOUT,
            generation: DEFAULT_GENERATION_TIMEOUT,
            delivery: DEFAULT_DELIVERY_TIMEOUT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceEndpoints {
    pub news: String,
    pub images: String,
    pub telegram: String,
}

impl Default for ServiceEndpoints {
    fn default() -> Self {
        Self {
            news: NEWS_API_URL.to_string(),
            images: IMAGE_API_URL.to_string(),
            telegram: TELEGRAM_API_BASE.to_string(),
        }
    }
}

/// Resolved pipeline configuration — validated and ready to drive every stage.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub organization: String,
    pub query: FeedQuery,
    pub max_headlines: usize,
    pub model: String,
    pub size: ImageSize,
    pub quality: ImageQuality,
    pub logo_path: PathBuf,
    pub output_path: PathBuf,
    pub placement: LogoPlacement,
    pub prompt_template: Option<PathBuf>,
    pub caption_template: Option<PathBuf>,
    pub tips: FallbackTips,
    pub timeouts: ServiceTimeouts,
    pub endpoints: ServiceEndpoints,
    pub credentials: Credentials,
    pub dry_run: bool,
    pub verbose: bool,
}

impl PipelineConfig {
    /// Resolves a complete pipeline configuration from CLI input and environment.
    pub fn resolve(cli: CommandLineInput) -> Result<Self, AppError> {
        Self::resolve_with(cli, |name| std::env::var(name).ok())
    }

    /// Like [`resolve`](Self::resolve), with secrets taken from `lookup`.
    pub fn resolve_with(
        cli: CommandLineInput,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, AppError> {
        let secret = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let openai_api_key = Secret::from_env(lookup(OPENAI_API_KEY_VAR));
        if let Secret::Malformed { reason } = &openai_api_key {
            log::warn!(
                "{} is malformed ({}); image generation will fail",
                OPENAI_API_KEY_VAR,
                reason
            );
        }

        let news_api_key = match Secret::from_env(lookup(NEWS_API_KEY_VAR)) {
            Secret::Malformed { reason } => {
                log::warn!(
                    "Ignoring malformed {} ({}); headlines will use fallback tips",
                    NEWS_API_KEY_VAR,
                    reason
                );
                None
            }
            other => other.into_key(),
        };

        let credentials = Credentials {
            openai_api_key,
            telegram_bot_token: secret(TELEGRAM_BOT_TOKEN_VAR).map(ApiKey::new).transpose()?,
            telegram_chat_id: secret(TELEGRAM_CHAT_ID_VAR)
                .map(|raw| ChatId::parse(&raw))
                .transpose()?,
            news_api_key,
        };

        if !(1..=100).contains(&cli.page_size) {
            return Err(ValidationError::OutOfBounds {
                value: u32::from(cli.page_size),
                min: 1,
                max: 100,
            }
            .into());
        }
        if !(1..=MAX_HEADLINES).contains(&cli.max_headlines) {
            return Err(ValidationError::BoundsViolation {
                actual: cli.max_headlines,
                min: 1,
                max: MAX_HEADLINES,
            }
            .into());
        }

        if cli.margin > MAX_LOGO_MARGIN {
            return Err(ValidationError::OutOfBounds {
                value: cli.margin,
                min: 0,
                max: MAX_LOGO_MARGIN,
            }
            .into());
        }

        let placement = LogoPlacement {
            anchor: cli.anchor.parse::<Anchor>()?,
            scale_ratio: ScaleRatio::new(cli.scale_ratio)?,
            margin: cli.margin,
            non_overlapping: cli.non_overlapping,
            strip_color: cli.strip_color.parse::<HexColor>()?,
        };

        let tips = if cli.tips.is_empty() {
            FallbackTips::default()
        } else {
            FallbackTips::new(cli.tips)?
        };

        if cli.organization.trim().is_empty() {
            return Err(ValidationError::EmptyField("organization").into());
        }

        Ok(PipelineConfig {
            organization: cli.organization.trim().to_string(),
            query: FeedQuery {
                category: cli.category,
                country: cli.country,
                language: cli.language,
                page_size: cli.page_size,
            },
            max_headlines: cli.max_headlines,
            model: cli.model,
            size: cli.size.parse()?,
            quality: cli.quality.parse()?,
            logo_path: cli.logo,
            output_path: cli.output,
            placement,
            prompt_template: cli.prompt_template,
            caption_template: cli.caption_template,
            tips,
            timeouts: ServiceTimeouts {
                feed: Duration::from_secs(cli.feed_timeout),
                generation: Duration::from_secs(cli.generation_timeout),
                delivery: Duration::from_secs(cli.delivery_timeout),
            },
            endpoints: ServiceEndpoints {
                news: cli.news_api_url,
                images: cli.image_api_url,
                telegram: cli.telegram_api_base,
            },
            credentials,
            dry_run: cli.dry_run,
            verbose: cli.verbose,
        })
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            organization: DEFAULT_ORGANIZATION.to_string(),
            query: FeedQuery {
                category: "health".to_string(),
                country: "in".to_string(),
                language: None,
                page_size: DEFAULT_FEED_PAGE_SIZE,
            },
            max_headlines: DEFAULT_FEATURED_HEADLINES,
            model: DEFAULT_IMAGE_MODEL.to_string(),
            size: ImageSize::PORTRAIT_POSTER,
            quality: ImageQuality::High,
            logo_path: PathBuf::from(DEFAULT_LOGO_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            placement: LogoPlacement::default(),
            prompt_template: None,
            caption_template: None,
            tips: FallbackTips::default(),
            timeouts: ServiceTimeouts::default(),
            endpoints: ServiceEndpoints::default(),
            credentials: Credentials::default(),
            dry_run: false,
            verbose: false,
        }
    }
}
