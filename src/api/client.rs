// src/api/client.rs
//! Pure HTTP client wrapper shared by all three remote services.
//!
//! This module provides a thin wrapper around reqwest's blocking client.
//! It handles timeouts, bearer authentication and basic request/response
//! operations without parsing or business logic. Every call blocks until
//! the response arrives or the timeout fires.

use crate::error::AppError;
use crate::types::ApiKey;
use reqwest::blocking::{multipart::Form, Client, Response};
use reqwest::{header, StatusCode};
use serde::Serialize;
use std::time::Duration;
use url::Url;

const USER_AGENT: &str = concat!("newsposter/", env!("CARGO_PKG_VERSION"));

/// A thin wrapper around a blocking reqwest Client with one fixed timeout.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Creates a client whose every request aborts after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, AppError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }

    /// Makes a GET request with query parameters and returns the body as text.
    pub fn get(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<ApiResponse<String>, AppError> {
        log::debug!("GET {}", loggable_url(url));
        let response = self.client.get(url).query(query).send()?;
        extract_response_text(response)
    }

    /// Makes a GET request and returns the raw body bytes.
    pub fn get_bytes(&self, url: &str) -> Result<ApiResponse<Vec<u8>>, AppError> {
        log::debug!("GET (binary) {}", loggable_url(url));
        let response = self.client.get(url).send()?;
        extract_response_bytes(response)
    }

    /// Makes a POST request with a JSON body and bearer authentication.
    pub fn post_json<T: Serialize>(
        &self,
        url: &str,
        bearer: &ApiKey,
        body: &T,
    ) -> Result<ApiResponse<String>, AppError> {
        log::debug!("POST {}", loggable_url(url));
        let response = self
            .client
            .post(url)
            .header(header::AUTHORIZATION, format!("Bearer {}", bearer.as_str()))
            .json(body)
            .send()?;
        extract_response_text(response)
    }

    /// Makes a POST request with url-encoded form fields.
    pub fn post_form(
        &self,
        url: &str,
        fields: &[(&str, String)],
    ) -> Result<ApiResponse<String>, AppError> {
        log::debug!("POST (form) {}", loggable_url(url));
        let response = self.client.post(url).form(fields).send()?;
        extract_response_text(response)
    }

    /// Makes a POST request with a multipart body.
    pub fn post_multipart(&self, url: &str, form: Form) -> Result<ApiResponse<String>, AppError> {
        log::debug!("POST (multipart) {}", loggable_url(url));
        let response = self.client.post(url).multipart(form).send()?;
        extract_response_text(response)
    }
}

/// Result of an HTTP operation with response metadata.
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    pub data: T,
    pub status: StatusCode,
    /// Request URL with credentials stripped, safe for logs and alerts
    pub url: String,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T, status: StatusCode, url: impl Into<String>) -> Self {
        Self {
            data,
            status,
            url: url.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

/// Extracts the response body as text with metadata.
pub fn extract_response_text(response: Response) -> Result<ApiResponse<String>, AppError> {
    let status = response.status();
    let url = loggable_url(response.url().as_str());
    let text = response.text()?;
    log::debug!("{} -> {} ({} bytes)", url, status, text.len());

    Ok(ApiResponse {
        data: text,
        status,
        url,
    })
}

/// Extracts the response body as bytes with metadata.
pub fn extract_response_bytes(response: Response) -> Result<ApiResponse<Vec<u8>>, AppError> {
    let status = response.status();
    let url = loggable_url(response.url().as_str());
    let bytes = response.bytes()?.to_vec();
    log::debug!("{} -> {} ({} bytes)", url, status, bytes.len());

    Ok(ApiResponse {
        data: bytes,
        status,
        url,
    })
}

/// Strips the query string and masks bot tokens embedded in the path.
///
/// The feed takes its key as a query parameter and the messaging API takes
/// its token as a path segment, so neither may reach a log line verbatim.
pub fn loggable_url(raw: &str) -> String {
    let Ok(mut url) = Url::parse(raw) else {
        return "<unparseable url>".to_string();
    };
    url.set_query(None);
    url.set_fragment(None);

    let masked: Vec<String> = url
        .path_segments()
        .map(|segments| {
            segments
                .map(|segment| {
                    if segment.starts_with("bot") && segment.contains(':') {
                        "bot***".to_string()
                    } else {
                        segment.to_string()
                    }
                })
                .collect()
        })
        .unwrap_or_default();
    if !masked.is_empty() {
        url.set_path(&masked.join("/"));
    }
    url.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loggable_url_drops_query_credentials() {
        assert_eq!(
            loggable_url("https://newsapi.org/v2/top-headlines?country=in&apiKey=abc123"),
            "https://newsapi.org/v2/top-headlines"
        );
    }

    #[test]
    fn loggable_url_masks_bot_token() {
        assert_eq!(
            loggable_url("https://api.telegram.org/bot123456:AAHsecret/sendPhoto"),
            "https://api.telegram.org/bot***/sendPhoto"
        );
    }

    #[test]
    fn loggable_url_handles_garbage() {
        assert_eq!(loggable_url("::not a url::"), "<unparseable url>");
    }
}
