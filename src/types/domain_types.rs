//! Domain-specific newtypes for type safety and validation.

use super::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use url::Url;

/// Credential for one of the remote services (image generation, messaging, news feed).
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Create a new API key with validation
    pub fn new(key: impl Into<String>) -> Result<Self, ValidationError> {
        let key = key.into().trim().to_string();

        if key.is_empty() {
            return Err(ValidationError::InvalidApiKey {
                reason: "API key cannot be empty".to_string(),
            });
        }

        if key.chars().any(char::is_whitespace) {
            return Err(ValidationError::InvalidApiKey {
                reason: "API key cannot contain whitespace".to_string(),
            });
        }

        if key.len() < 8 {
            return Err(ValidationError::InvalidApiKey {
                reason: "API key is too short".to_string(),
            });
        }

        Ok(Self(key))
    }

    /// Get the API key as a string reference
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A credential as found in the environment.
///
/// A malformed value is kept rather than rejected so that the stage which
/// needs it fails, and that failure is reported like any other.
#[derive(Debug, Clone, Default)]
pub enum Secret {
    #[default]
    Unset,
    Valid(ApiKey),
    Malformed { reason: String },
}

impl Secret {
    /// Blank values count as unset.
    pub fn from_env(raw: Option<String>) -> Self {
        match raw {
            None => Self::Unset,
            Some(raw) if raw.trim().is_empty() => Self::Unset,
            Some(raw) => match ApiKey::new(raw) {
                Ok(key) => Self::Valid(key),
                Err(e) => Self::Malformed {
                    reason: e.to_string(),
                },
            },
        }
    }

    /// The usable key, if any.
    pub fn key(&self) -> Option<&ApiKey> {
        match self {
            Self::Valid(key) => Some(key),
            _ => None,
        }
    }

    pub fn into_key(self) -> Option<ApiKey> {
        match self {
            Self::Valid(key) => Some(key),
            _ => None,
        }
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Redact API key in display
        let visible: String = self.0.chars().take(4).collect();
        write!(f, "{}...", visible)
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ApiKey({})", self)
    }
}

static CHAT_ID_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(-?\d+|@[A-Za-z][A-Za-z0-9_]{3,})$").expect("valid chat id regex"));

/// Destination chat: a numeric id (negative for groups/channels) or an `@channelname`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatId(String);

impl ChatId {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        if CHAT_ID_PATTERN.is_match(trimmed) {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(ValidationError::InvalidChatId {
                input: input.to_string(),
            })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validated URL type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedUrl(Url);

impl ValidatedUrl {
    /// Create a new validated URL
    pub fn parse(url: &str) -> Result<Self, ValidationError> {
        match Url::parse(url) {
            Ok(parsed_url) => {
                if parsed_url.scheme() != "http" && parsed_url.scheme() != "https" {
                    return Err(ValidationError::InvalidUrl {
                        url: url.to_string(),
                        reason: "Only HTTP and HTTPS URLs are supported".to_string(),
                    });
                }
                Ok(Self(parsed_url))
            }
            Err(e) => Err(ValidationError::InvalidUrl {
                url: url.to_string(),
                reason: e.to_string(),
            }),
        }
    }

    /// Get the URL as a string
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for ValidatedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_validation() {
        assert!(ApiKey::new("sk-abcdefghijklmnop").is_ok());
        assert!(ApiKey::new("  123456:ABC-DEF1234ghIkl  ").is_ok());
        assert!(ApiKey::new("").is_err());
        assert!(ApiKey::new("short").is_err());
        assert!(ApiKey::new("has space inside").is_err());
    }

    #[test]
    fn test_api_key_is_redacted() {
        let key = ApiKey::new("sk-abcdefghijklmnop").unwrap();
        assert_eq!(key.to_string(), "sk-a...");
        assert!(!format!("{:?}", key).contains("abcdefghijklmnop"));
    }

    #[test]
    fn test_secret_from_env() {
        assert!(matches!(Secret::from_env(None), Secret::Unset));
        assert!(matches!(Secret::from_env(Some("  ".into())), Secret::Unset));
        assert!(Secret::from_env(Some("sk-abcdefghijklmnop".into())).key().is_some());

        let malformed = Secret::from_env(Some("abc123".into()));
        assert!(malformed.key().is_none());
        match malformed {
            Secret::Malformed { reason } => assert!(reason.contains("too short"), "{reason}"),
            other => panic!("expected malformed secret, got {:?}", other),
        }
    }

    #[test]
    fn test_chat_id_validation() {
        assert_eq!(ChatId::parse("-1001234567890").unwrap().as_str(), "-1001234567890");
        assert_eq!(ChatId::parse(" 42 ").unwrap().as_str(), "42");
        assert!(ChatId::parse("@health_updates").is_ok());
        assert!(ChatId::parse("").is_err());
        assert!(ChatId::parse("@ab").is_err());
        assert!(ChatId::parse("not a chat").is_err());
    }

    #[test]
    fn test_url_validation() {
        assert!(ValidatedUrl::parse("https://cdn.example.com/poster.png").is_ok());
        assert!(ValidatedUrl::parse("http://localhost:8080").is_ok());
        assert!(ValidatedUrl::parse("ftp://example.com").is_err());
        assert!(ValidatedUrl::parse("not a url").is_err());
    }
}
