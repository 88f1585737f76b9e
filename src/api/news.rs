//! Headline feed over HTTP.

use super::client::{ApiResponse, HttpClient};
use super::types::FeedQuery;
use super::NewsFeed;
use crate::error::AppError;
use crate::types::ApiKey;

pub struct NewsApiClient {
    http: HttpClient,
    api_key: Option<ApiKey>,
    endpoint: String,
}

impl NewsApiClient {
    pub fn new(http: HttpClient, api_key: Option<ApiKey>, endpoint: impl Into<String>) -> Self {
        Self {
            http,
            api_key,
            endpoint: endpoint.into(),
        }
    }
}

impl NewsFeed for NewsApiClient {
    fn top_headlines(&self, query: &FeedQuery) -> Result<ApiResponse<String>, AppError> {
        let api_key = self.api_key.as_ref().ok_or_else(|| {
            AppError::MissingConfiguration("NEWS_API_KEY is not set".to_string())
        })?;

        let mut params = query.to_params();
        params.push(("apiKey", api_key.as_str().to_string()));

        log::info!(
            "Requesting up to {} '{}' headlines for region '{}'",
            query.page_size,
            query.category,
            query.country
        );
        self.http.get(&self.endpoint, &params)
    }
}
