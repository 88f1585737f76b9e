// src/formatting/templates.rs
//! Loads the prompt and caption templates into a Handlebars registry.
//!
//! Both templates ship embedded in the binary; either can be replaced by a
//! file at startup.

use crate::constants::{CAPTION_TEMPLATE_NAME, PROMPT_TEMPLATE_NAME};
use crate::error::AppError;
use handlebars::Handlebars;
use serde::Serialize;
use std::path::Path;

const DEFAULT_PROMPT_TEMPLATE: &str = include_str!("../../templates/poster_prompt.hbs");
const DEFAULT_CAPTION_TEMPLATE: &str = include_str!("../../templates/caption.hbs");

/// A registry holding exactly the two templates a run needs.
pub struct TemplateSet {
    registry: Handlebars<'static>,
}

impl TemplateSet {
    /// Registers the embedded defaults, replacing each one whose override
    /// path is given.
    pub fn load(
        prompt_override: Option<&Path>,
        caption_override: Option<&Path>,
    ) -> Result<Self, AppError> {
        let mut registry = Handlebars::new();
        registry.register_escape_fn(handlebars::no_escape);

        let prompt = source_for(prompt_override, DEFAULT_PROMPT_TEMPLATE)?;
        let caption = source_for(caption_override, DEFAULT_CAPTION_TEMPLATE)?;
        register(&mut registry, PROMPT_TEMPLATE_NAME, &prompt)?;
        register(&mut registry, CAPTION_TEMPLATE_NAME, &caption)?;

        Ok(Self { registry })
    }

    /// Only the embedded templates.
    pub fn embedded() -> Result<Self, AppError> {
        Self::load(None, None)
    }

    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String, AppError> {
        self.registry
            .render(name, data)
            .map_err(|e| AppError::TemplateRenderError {
                name: name.to_string(),
                message: e.to_string(),
            })
    }
}

fn source_for(path: Option<&Path>, embedded: &'static str) -> Result<String, AppError> {
    match path {
        None => Ok(embedded.to_string()),
        Some(path) => {
            log::info!("Loading template override from {}", path.display());
            std::fs::read_to_string(path).map_err(|e| AppError::TemplateNotFound {
                path: path.display().to_string(),
                source: e,
            })
        }
    }
}

fn register(registry: &mut Handlebars<'static>, name: &str, source: &str) -> Result<(), AppError> {
    registry
        .register_template_string(name, source)
        .map_err(|e| AppError::TemplateRenderError {
            name: name.to_string(),
            message: e.to_string(),
        })
}
