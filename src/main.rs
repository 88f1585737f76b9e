// src/main.rs

use clap::Parser;
use log::LevelFilter;
use log4rs::{
    append::console::ConsoleAppender,
    append::file::FileAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Config,
};
use newsposter::{
    AlertNotifier, AlertStatus, ChannelAlertNotifier, ChannelPublisher, CommandLineInput,
    DeliveryOutcome, FeedHeadlineSource, HttpClient, LogoCompositor, NewsApiClient,
    OpenAiImagesClient, PipelineConfig, PosterRun, PosterTemplates, RunSummary,
    ServiceImageGenerator, TelegramClient, TemplateSet,
};
use std::fs;
use std::process::ExitCode;

/// Sets up logging configuration.
fn setup_logging(verbose: bool) -> anyhow::Result<()> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let log_file_path = std::env::temp_dir().join("newsposter.log");
    if let Some(parent) = log_file_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let pattern = if verbose {
        "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}"
    } else {
        "{m}{n}"
    };

    let stdout_appender = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build();

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}",
        )))
        .build(&log_file_path)?;

    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout_appender)))
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(LevelFilter::Debug)))
                .build("file", Box::new(file_appender)),
        )
        .build(
            Root::builder()
                .appender("stdout")
                .appender("file")
                .build(log_level),
        )?;

    log4rs::init_config(config)?;
    log::debug!("Logging initialized. Log file: {}", log_file_path.display());
    Ok(())
}

/// Builds every stage from the resolved configuration and runs one pass.
fn run_once(config: &PipelineConfig) -> anyhow::Result<DeliveryOutcome> {
    let creds = &config.credentials;

    let news = NewsApiClient::new(
        HttpClient::new(config.timeouts.feed)?,
        creds.news_api_key.clone(),
        config.endpoints.news.clone(),
    );
    let images = OpenAiImagesClient::new(
        HttpClient::new(config.timeouts.generation)?,
        creds.openai_api_key.clone(),
        config.endpoints.images.clone(),
    );
    let telegram = TelegramClient::new(
        HttpClient::new(config.timeouts.delivery)?,
        creds.telegram_bot_token.clone(),
        creds.telegram_chat_id.clone(),
        config.endpoints.telegram.clone(),
    );

    let alerts = ChannelAlertNotifier::new(&telegram);

    let templates = match TemplateSet::load(
        config.prompt_template.as_deref(),
        config.caption_template.as_deref(),
    ) {
        Ok(templates) => templates,
        Err(error) => {
            log::error!("Could not load templates: {}", error);
            let alert = if config.dry_run {
                AlertStatus::Skipped
            } else {
                alerts.alert(&error)
            };
            return Ok(DeliveryOutcome::Failed { error, alert });
        }
    };

    let headlines = FeedHeadlineSource::new(news, config.tips.clone());
    let posters = PosterTemplates::new(
        config.organization.clone(),
        config.placement.anchor,
        config.tips.clone(),
        templates,
    );
    let generator =
        ServiceImageGenerator::new(images, config.model.clone(), config.size, config.quality);
    let compositor = LogoCompositor::new(&config.logo_path, &config.output_path, config.placement);
    let publisher = ChannelPublisher::new(&telegram);

    let run = PosterRun {
        headlines: &headlines,
        prompts: &posters,
        captions: &posters,
        generator: &generator,
        compositor: &compositor,
        publisher: &publisher,
        alerts: &alerts,
        query: config.query.clone(),
        max_headlines: config.max_headlines,
        dry_run: config.dry_run,
    };

    Ok(run.execute(chrono::Local::now().date_naive()))
}

fn log_summary(summary: &RunSummary) {
    log::info!("  Content: {} headlines", summary.provenance);
    log::info!("  Logo applied: {}", summary.logo_applied);
    match &summary.output_path {
        Some(path) => log::info!("  Poster file: {}", path.display()),
        None => log::info!("  Poster file: none (service URL forwarded)"),
    }
}

fn main() -> ExitCode {
    let cli = CommandLineInput::parse();

    if let Err(e) = setup_logging(cli.verbose) {
        eprintln!("Failed to initialize logging: {e:#}");
        return ExitCode::FAILURE;
    }

    let run_id = uuid::Uuid::new_v4();
    log::info!("Poster run {} starting", run_id);

    let config = match PipelineConfig::resolve(cli) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Run {}: invalid configuration: {}", run_id, e);
            return ExitCode::FAILURE;
        }
    };

    let outcome = match run_once(&config) {
        Ok(outcome) => outcome,
        Err(e) => {
            log::error!("Run {}: could not start: {:#}", run_id, e);
            return ExitCode::FAILURE;
        }
    };

    match &outcome {
        DeliveryOutcome::Delivered {
            message_id,
            summary,
        } => {
            log::info!("Run {} delivered as message {}", run_id, message_id);
            log_summary(summary);
        }
        DeliveryOutcome::DryRun { summary } => {
            log::info!("Run {} finished (dry run, nothing published)", run_id);
            log_summary(summary);
        }
        DeliveryOutcome::Failed { error, alert } => {
            log::error!("Run {} failed: {} (alert: {:?})", run_id, error, alert);
        }
    }

    if outcome.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
