// src/pipeline.rs
//! Pipeline capability traits and the run that drives them.
//!
//! Each trait describes a single stage, enabling testing each stage in
//! isolation. `PosterRun` wires them left to right and owns the only error
//! boundary: whatever a fatal stage returns is turned into an alert there.

use crate::api::FeedQuery;
use crate::error::AppError;
use crate::types::{
    AlertStatus, CompositedPoster, DeliveryOutcome, GeneratedImage, HeadlineSet, MessageId,
    PosterArtifact, PosterPrompt, RasterBytes, RenderedCaption, RunSummary,
};
use chrono::NaiveDate;

/// Produces the headlines for a poster. Never fails; degrades to fallback tips.
pub trait HeadlineSource {
    fn fetch(&self, query: &FeedQuery, max_items: usize) -> HeadlineSet;
}

/// Renders the generation prompt for a headline set and date.
pub trait PromptBuilder {
    fn build(&self, headlines: &HeadlineSet, date: NaiveDate) -> Result<PosterPrompt, AppError>;
}

/// Renders the caption that accompanies the delivered poster.
pub trait CaptionComposer {
    fn caption(&self, prompt: &PosterPrompt, date: NaiveDate) -> Result<RenderedCaption, AppError>;
}

/// Turns a prompt into an image and normalizes either result shape into bytes.
pub trait ImageGenerator {
    fn generate(&self, prompt: &PosterPrompt) -> Result<GeneratedImage, AppError>;

    fn materialize(&self, image: GeneratedImage) -> Result<RasterBytes, AppError>;
}

/// Applies the brand asset and persists the result.
pub trait Compositor {
    /// Whether the logo asset exists on disk right now.
    fn logo_available(&self) -> bool;

    fn overlay(&self, image: RasterBytes) -> Result<CompositedPoster, AppError>;
}

/// Sends the finished poster to the destination channel.
pub trait Publisher {
    fn publish(
        &self,
        poster: &PosterArtifact,
        caption: &RenderedCaption,
    ) -> Result<MessageId, AppError>;
}

/// Reports a failed run. Must never panic or propagate its own failure.
pub trait AlertNotifier {
    fn alert(&self, error: &AppError) -> AlertStatus;
}

/// One invocation of the poster pipeline.
pub struct PosterRun<'a> {
    pub headlines: &'a dyn HeadlineSource,
    pub prompts: &'a dyn PromptBuilder,
    pub captions: &'a dyn CaptionComposer,
    pub generator: &'a dyn ImageGenerator,
    pub compositor: &'a dyn Compositor,
    pub publisher: &'a dyn Publisher,
    pub alerts: &'a dyn AlertNotifier,
    pub query: FeedQuery,
    pub max_headlines: usize,
    pub dry_run: bool,
}

/// What the producing stages hand to delivery.
struct Produced {
    artifact: PosterArtifact,
    caption: RenderedCaption,
    summary: RunSummary,
}

impl PosterRun<'_> {
    /// Runs every stage for `date` and reports the terminal state.
    ///
    /// This is the top-level error boundary: a fatal error from any stage
    /// is logged, sent as an alert (unless this is a dry run) and returned
    /// inside `DeliveryOutcome::Failed`.
    pub fn execute(&self, date: NaiveDate) -> DeliveryOutcome {
        let result = self.produce(date).and_then(|produced| {
            if self.dry_run {
                log::info!("Dry run: skipping delivery");
                return Ok(DeliveryOutcome::DryRun {
                    summary: produced.summary,
                });
            }
            let message_id = self.publisher.publish(&produced.artifact, &produced.caption)?;
            Ok(DeliveryOutcome::Delivered {
                message_id,
                summary: produced.summary,
            })
        });

        match result {
            Ok(outcome) => outcome,
            Err(error) => {
                log::error!("Poster run failed in {} stage: {}", error.stage(), error);
                let alert = if self.dry_run {
                    AlertStatus::Skipped
                } else {
                    self.alerts.alert(&error)
                };
                DeliveryOutcome::Failed { error, alert }
            }
        }
    }

    fn produce(&self, date: NaiveDate) -> Result<Produced, AppError> {
        let headlines = self.headlines.fetch(&self.query, self.max_headlines);
        log::info!(
            "Using {} {} headline(s): {}",
            headlines.len(),
            headlines.provenance(),
            headlines.joined()
        );

        let prompt = self.prompts.build(&headlines, date)?;
        let caption = self.captions.caption(&prompt, date)?;

        let generated = self.generator.generate(&prompt)?;
        log::info!("Generation returned {} image", generated.shape());

        // A dry run always leaves a poster file behind.
        let forward_only = !self.dry_run && !self.compositor.logo_available();
        let artifact = match generated {
            GeneratedImage::RemoteRef(url) if forward_only => {
                log::warn!("Logo asset missing; forwarding the service URL without compositing");
                PosterArtifact::Remote(url)
            }
            generated => {
                let raster = self.generator.materialize(generated)?;
                PosterArtifact::Local(self.compositor.overlay(raster)?)
            }
        };

        let summary = RunSummary {
            provenance: prompt.featured().provenance(),
            logo_applied: artifact.logo_applied(),
            output_path: artifact.output_path().map(|path| path.to_path_buf()),
            remote_only: matches!(artifact, PosterArtifact::Remote(_)),
        };

        Ok(Produced {
            artifact,
            caption,
            summary,
        })
    }
}
