// src/formatting/prompt.rs
//! Renders the generation prompt and the delivery caption.

use super::caption::truncate_for_platform;
use super::templates::TemplateSet;
use crate::constants::{
    CAPTION_MAX_CHARS, CAPTION_TEMPLATE_NAME, DATE_STAMP_FORMAT, DEFAULT_FEATURED_HEADLINES,
    MIN_HEADLINE_TEXT_CHARS, PROMPT_TEMPLATE_NAME,
};
use crate::error::AppError;
use crate::headlines::FallbackTips;
use crate::pipeline::{CaptionComposer, PromptBuilder};
use crate::types::{Anchor, HeadlineSet, PosterPrompt, RenderedCaption};
use chrono::NaiveDate;
use serde::Serialize;

/// Values exposed to both templates.
#[derive(Debug, Serialize)]
struct TemplateData<'a> {
    organization: &'a str,
    date: String,
    logo_region: &'static str,
    headlines: &'a [String],
    joined: String,
    count: usize,
    provenance: String,
}

/// Prompt and caption rendering for one organization.
pub struct PosterTemplates {
    organization: String,
    anchor: Anchor,
    tips: FallbackTips,
    templates: TemplateSet,
}

impl PosterTemplates {
    pub fn new(
        organization: impl Into<String>,
        anchor: Anchor,
        tips: FallbackTips,
        templates: TemplateSet,
    ) -> Self {
        Self {
            organization: organization.into(),
            anchor,
            tips,
            templates,
        }
    }

    /// Thin headline text is replaced by tips, whatever its provenance.
    fn featured(&self, headlines: &HeadlineSet) -> HeadlineSet {
        let joined = headlines.joined();
        if joined.trim().chars().count() < MIN_HEADLINE_TEXT_CHARS {
            log::warn!(
                "Headline text too short ({:?}); substituting fallback tips",
                joined.trim()
            );
            return self.tips.select(DEFAULT_FEATURED_HEADLINES);
        }
        headlines.clone()
    }

    fn data<'a>(&'a self, featured: &'a HeadlineSet, date: NaiveDate) -> TemplateData<'a> {
        TemplateData {
            organization: &self.organization,
            date: date.format(DATE_STAMP_FORMAT).to_string(),
            logo_region: self.anchor.describe(),
            headlines: featured.items(),
            joined: featured.joined(),
            count: featured.len(),
            provenance: featured.provenance().to_string(),
        }
    }
}

impl PromptBuilder for PosterTemplates {
    fn build(&self, headlines: &HeadlineSet, date: NaiveDate) -> Result<PosterPrompt, AppError> {
        let featured = self.featured(headlines);
        let text = self
            .templates
            .render(PROMPT_TEMPLATE_NAME, &self.data(&featured, date))?;
        log::debug!("Rendered prompt ({} chars)", text.chars().count());
        Ok(PosterPrompt::new(text.trim().to_string(), featured))
    }
}

impl CaptionComposer for PosterTemplates {
    fn caption(&self, prompt: &PosterPrompt, date: NaiveDate) -> Result<RenderedCaption, AppError> {
        let rendered = self
            .templates
            .render(CAPTION_TEMPLATE_NAME, &self.data(prompt.featured(), date))?;
        let text = collapse_blank_lines(&rendered);
        Ok(RenderedCaption::new(truncate_for_platform(
            &text,
            CAPTION_MAX_CHARS,
        )))
    }
}

fn collapse_blank_lines(text: &str) -> String {
    text.lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
