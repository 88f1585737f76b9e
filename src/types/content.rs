//! Textual content flowing through the first two stages.

use super::ValidationError;
use crate::constants::{HEADLINE_SEPARATOR, MAX_HEADLINES};
use serde::Serialize;
use std::fmt;

/// Where a headline set came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Provenance {
    /// Fetched from the live news feed
    Live,
    /// Substituted from the static tip list
    Fallback,
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Live => f.write_str("live"),
            Self::Fallback => f.write_str("fallback"),
        }
    }
}

/// An ordered, non-empty set of short headlines tagged with its provenance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlineSet {
    items: Vec<String>,
    provenance: Provenance,
}

impl HeadlineSet {
    pub fn new(items: Vec<String>, provenance: Provenance) -> Result<Self, ValidationError> {
        if items.is_empty() || items.len() > MAX_HEADLINES {
            return Err(ValidationError::BoundsViolation {
                actual: items.len(),
                min: 1,
                max: MAX_HEADLINES,
            });
        }
        Ok(Self { items, provenance })
    }

    /// For callers that already hold a non-empty, bounded list.
    pub(crate) fn from_validated(items: Vec<String>, provenance: Provenance) -> Self {
        debug_assert!(!items.is_empty() && items.len() <= MAX_HEADLINES);
        Self { items, provenance }
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn provenance(&self) -> Provenance {
        self.provenance
    }

    pub fn is_fallback(&self) -> bool {
        self.provenance == Provenance::Fallback
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All items joined with the run-wide separator.
    pub fn joined(&self) -> String {
        self.items.join(HEADLINE_SEPARATOR)
    }
}

/// The rendered text prompt sent to the generation service.
#[derive(Debug, Clone)]
pub struct PosterPrompt {
    text: String,
    featured: HeadlineSet,
}

impl PosterPrompt {
    pub fn new(text: String, featured: HeadlineSet) -> Self {
        Self { text, featured }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The headlines the prompt was actually built from, after any substitution.
    pub fn featured(&self) -> &HeadlineSet {
        &self.featured
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for PosterPrompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Caption attached to the delivered photo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedCaption(String);

impl RenderedCaption {
    pub fn new(content: String) -> Self {
        Self(content)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for RenderedCaption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
