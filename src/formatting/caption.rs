// src/formatting/caption.rs
//! Plain-text shaping for messages sent to the chat platform.

use crate::constants::MESSAGE_MAX_CHARS;
use crate::error::AppError;

const ELLIPSIS: char = '…';

/// Cuts `text` to at most `max_chars` characters, preferring a word boundary,
/// and marks the cut with an ellipsis.
pub fn truncate_for_platform(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    if max_chars == 0 {
        return String::new();
    }

    let budget = max_chars - 1;
    let cut: String = text.chars().take(budget).collect();
    let head = match cut.rfind(char::is_whitespace) {
        Some(idx) if idx > 0 => &cut[..idx],
        _ => cut.as_str(),
    };
    format!("{}{}", head.trim_end(), ELLIPSIS)
}

/// The short failure report sent by the alert notifier.
pub fn render_alert(error: &AppError) -> String {
    let text = format!(
        "⚠️ Poster run failed\nStage: {}\nError: {}",
        error.stage(),
        error
    );
    truncate_for_platform(&text, MESSAGE_MAX_CHARS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ServiceErrorCode;
    use pretty_assertions::assert_eq;

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(truncate_for_platform("hello world", 20), "hello world");
    }

    #[test]
    fn cuts_at_word_boundary() {
        let out = truncate_for_platform("alpha beta gamma delta", 13);
        assert_eq!(out, "alpha beta…");
        assert!(out.chars().count() <= 13);
    }

    #[test]
    fn unbroken_text_is_cut_hard() {
        assert_eq!(truncate_for_platform("abcdefghij", 5), "abcd…");
    }

    #[test]
    fn counts_characters_not_bytes() {
        let text = "स्वास्थ्य ".repeat(20);
        let out = truncate_for_platform(&text, 30);
        assert!(out.chars().count() <= 30);
        assert!(out.ends_with(ELLIPSIS));
    }

    #[test]
    fn alert_names_stage_and_error() {
        let error = AppError::Generation {
            code: ServiceErrorCode::RateLimited,
            message: "Rate limit reached".to_string(),
        };
        insta::assert_snapshot!(render_alert(&error), @r"
        ⚠️ Poster run failed
        Stage: image generation
        Error: Image generation failed (rate_limited): Rate limit reached
        ");
    }
}
