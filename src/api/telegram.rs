//! Bot API client for the destination chat.

use super::client::{ApiResponse, HttpClient};
use super::types::PhotoUpload;
use super::MessagingChannel;
use crate::error::AppError;
use crate::types::{ApiKey, ChatId};
use reqwest::blocking::multipart::{Form, Part};

pub struct TelegramClient {
    http: HttpClient,
    bot_token: Option<ApiKey>,
    chat_id: Option<ChatId>,
    base_url: String,
}

impl TelegramClient {
    pub fn new(
        http: HttpClient,
        bot_token: Option<ApiKey>,
        chat_id: Option<ChatId>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            http,
            bot_token,
            chat_id,
            base_url: base_url.into(),
        }
    }

    /// Resolves `<base>/bot<token>/<method>` and the destination chat.
    fn route(&self, method: &str) -> Result<(String, &ChatId), AppError> {
        let token = self.bot_token.as_ref().ok_or_else(|| {
            AppError::MissingConfiguration("TELEGRAM_BOT_TOKEN is not set".to_string())
        })?;
        let chat_id = self.chat_id.as_ref().ok_or_else(|| {
            AppError::MissingConfiguration("TELEGRAM_CHAT_ID is not set".to_string())
        })?;
        let url = format!(
            "{}/bot{}/{}",
            self.base_url.trim_end_matches('/'),
            token.as_str(),
            method
        );
        Ok((url, chat_id))
    }
}

impl MessagingChannel for TelegramClient {
    fn send_photo(
        &self,
        photo: &PhotoUpload,
        caption: &str,
    ) -> Result<ApiResponse<String>, AppError> {
        let (url, chat_id) = self.route("sendPhoto")?;

        match photo {
            PhotoUpload::Bytes { file_name, bytes } => {
                log::info!("Uploading {} ({} bytes) to chat {}", file_name, bytes.len(), chat_id);
                let part = Part::bytes(bytes.clone())
                    .file_name(file_name.clone())
                    .mime_str("image/png")?;
                let form = Form::new()
                    .text("chat_id", chat_id.as_str().to_string())
                    .text("caption", caption.to_string())
                    .part("photo", part);
                self.http.post_multipart(&url, form)
            }
            PhotoUpload::Url(remote) => {
                log::info!("Sending remote photo reference to chat {}", chat_id);
                let fields = [
                    ("chat_id", chat_id.as_str().to_string()),
                    ("photo", remote.as_str().to_string()),
                    ("caption", caption.to_string()),
                ];
                self.http.post_form(&url, &fields)
            }
        }
    }

    fn send_message(&self, text: &str) -> Result<ApiResponse<String>, AppError> {
        let (url, chat_id) = self.route("sendMessage")?;
        log::info!("Sending text message to chat {}", chat_id);
        let fields = [
            ("chat_id", chat_id.as_str().to_string()),
            ("text", text.to_string()),
            ("disable_web_page_preview", "true".to_string()),
        ];
        self.http.post_form(&url, &fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn client(token: Option<&str>, chat: Option<&str>) -> TelegramClient {
        TelegramClient::new(
            HttpClient::new(Duration::from_secs(1)).unwrap(),
            token.map(|t| ApiKey::new(t).unwrap()),
            chat.map(|c| ChatId::parse(c).unwrap()),
            "https://api.telegram.org/",
        )
    }

    #[test]
    fn route_builds_method_url() {
        let telegram = client(Some("123456:ABCDEF"), Some("-100200"));
        let (url, chat) = telegram.route("sendPhoto").unwrap();
        assert_eq!(url, "https://api.telegram.org/bot123456:ABCDEF/sendPhoto");
        assert_eq!(chat.as_str(), "-100200");
    }

    #[test]
    fn missing_token_is_configuration_error() {
        let telegram = client(None, Some("-100200"));
        assert!(matches!(
            telegram.send_message("hi"),
            Err(AppError::MissingConfiguration(_))
        ));
    }

    #[test]
    fn missing_chat_is_configuration_error() {
        let telegram = client(Some("123456:ABCDEF"), None);
        assert!(matches!(
            telegram.route("sendMessage"),
            Err(AppError::MissingConfiguration(_))
        ));
    }
}
