// src/formatting/mod.rs
//! Renders prompts, captions and alert text.

mod caption;
mod prompt;
mod templates;

pub use self::caption::{render_alert, truncate_for_platform};
pub use self::prompt::PosterTemplates;
pub use self::templates::TemplateSet;
