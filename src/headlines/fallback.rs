//! The always-available tier of poster content.

use crate::constants::{AWARENESS_TIPS, MAX_HEADLINES};
use crate::types::{HeadlineSet, Provenance, ValidationError};

/// A non-empty list of static tips.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackTips(Vec<String>);

impl FallbackTips {
    /// Blank entries are dropped; at least one tip must remain.
    pub fn new(tips: Vec<String>) -> Result<Self, ValidationError> {
        let tips: Vec<String> = tips
            .into_iter()
            .map(|tip| tip.trim().to_string())
            .filter(|tip| !tip.is_empty())
            .collect();
        if tips.is_empty() {
            return Err(ValidationError::EmptyField("fallback tips"));
        }
        Ok(Self(tips))
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// The first `count` tips as a `Fallback` headline set (at least one).
    pub fn select(&self, count: usize) -> HeadlineSet {
        let count = count.clamp(1, MAX_HEADLINES);
        let items = self.0.iter().take(count).cloned().collect();
        HeadlineSet::from_validated(items, Provenance::Fallback)
    }
}

impl Default for FallbackTips {
    fn default() -> Self {
        Self(AWARENESS_TIPS.iter().map(|tip| tip.to_string()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_all_blank() {
        assert!(FallbackTips::new(vec!["  ".to_string(), String::new()]).is_err());
    }

    #[test]
    fn select_is_a_prefix() {
        let tips = FallbackTips::default();
        let set = tips.select(3);
        assert_eq!(set.items(), &tips.as_slice()[..3]);
        assert!(set.is_fallback());
    }

    #[test]
    fn select_clamps_count() {
        let tips = FallbackTips::new(vec!["only".to_string()]).unwrap();
        assert_eq!(tips.select(0).items(), &["only".to_string()]);
        assert_eq!(tips.select(9).len(), 1);
    }
}
