//! Wire shapes of the three remote services' JSON responses.

use serde::Deserialize;

/// Top-headlines payload from the news feed.
#[derive(Debug, Clone, Deserialize)]
pub struct NewsApiResponse {
    #[serde(default)]
    pub status: Option<String>,
    pub articles: Vec<NewsArticle>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewsArticle {
    #[serde(default)]
    pub title: Option<String>,
}

/// Error payload from the news feed (`{"status":"error","code":..,"message":..}`).
#[derive(Debug, Clone, Deserialize)]
pub struct NewsApiError {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Generation payload: `data[0]` carries either `b64_json` or `url`.
#[derive(Debug, Clone, Deserialize)]
pub struct ImagesResponse {
    #[serde(default)]
    pub data: Vec<ImageDatum>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImageDatum {
    #[serde(default)]
    pub b64_json: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub revised_prompt: Option<String>,
}

/// Error envelope of the generation service.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceErrorEnvelope {
    pub error: ServiceErrorBody,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceErrorBody {
    pub message: String,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

/// Every bot API method answers with this envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct TelegramResponse {
    pub ok: bool,
    #[serde(default)]
    pub result: Option<TelegramMessage>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub error_code: Option<u16>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TelegramMessage {
    pub message_id: i64,
}
