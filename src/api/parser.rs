// src/api/parser.rs
//! Pure parsing of raw service responses into domain values.
//!
//! Nothing here performs I/O. Each function takes an `ApiResponse` (status,
//! body, url) and decides between the domain value and the failure the
//! calling stage cares about.

use super::client::ApiResponse;
use super::responses::{
    ImagesResponse, NewsApiError, NewsApiResponse, ServiceErrorEnvelope, TelegramResponse,
};
use crate::constants::{ERROR_BODY_PREVIEW_LENGTH, PLACEHOLDER_TITLES};
use crate::error::{AppError, FeedFailure, ServiceErrorCode};
use crate::types::{GeneratedImage, MessageId, RasterBytes, ValidatedUrl};
use base64::Engine;

/// Extracts up to `max_titles` usable titles from the first `scan_limit` articles.
///
/// Articles without a title, with a blank title, or with a placeholder
/// title are skipped. Zero usable titles is reported as `FeedFailure::Empty`.
pub fn parse_headlines(
    result: ApiResponse<String>,
    scan_limit: usize,
    max_titles: usize,
) -> Result<Vec<String>, FeedFailure> {
    if !result.is_success() {
        let message = serde_json::from_str::<NewsApiError>(&result.data)
            .ok()
            .and_then(|err| match (err.code, err.message) {
                (Some(code), Some(message)) => Some(format!("{}: {}", code, message)),
                (None, Some(message)) => Some(message),
                (Some(code), None) => Some(code),
                (None, None) => None,
            })
            .unwrap_or_else(|| preview_body(&result.data));
        return Err(FeedFailure::Status {
            code: ServiceErrorCode::from_http_status(result.status.as_u16()),
            message,
        });
    }

    let payload: NewsApiResponse =
        serde_json::from_str(&result.data).map_err(|e| FeedFailure::Malformed {
            cause: e.to_string(),
        })?;

    if let Some(status) = payload.status.as_deref() {
        if status != "ok" {
            return Err(FeedFailure::Malformed {
                cause: format!("payload status '{}'", status),
            });
        }
    }

    let titles: Vec<String> = payload
        .articles
        .into_iter()
        .take(scan_limit)
        .filter_map(|article| article.title)
        .map(|title| title.trim().to_string())
        .filter(|title| !title.is_empty() && !PLACEHOLDER_TITLES.contains(&title.as_str()))
        .take(max_titles)
        .collect();

    if titles.is_empty() {
        return Err(FeedFailure::Empty);
    }
    Ok(titles)
}

/// Interprets a generation response as one of the two image shapes.
pub fn parse_generation(result: ApiResponse<String>) -> Result<GeneratedImage, AppError> {
    if !result.is_success() {
        let message = serde_json::from_str::<ServiceErrorEnvelope>(&result.data)
            .map(|envelope| match envelope.error.kind {
                Some(kind) => format!("{} ({})", envelope.error.message, kind),
                None => envelope.error.message,
            })
            .unwrap_or_else(|_| format!("HTTP {} from {}", result.status, result.url));
        return Err(AppError::Generation {
            code: ServiceErrorCode::from_http_status(result.status.as_u16()),
            message,
        });
    }

    let payload: ImagesResponse = serde_json::from_str(&result.data).map_err(|e| {
        AppError::UpstreamFormat(format!(
            "response is not generation JSON ({}): {}",
            e,
            preview_body(&result.data)
        ))
    })?;

    let datum = payload
        .data
        .into_iter()
        .next()
        .ok_or_else(|| AppError::UpstreamFormat("response contained no images".to_string()))?;

    if let Some(revised) = &datum.revised_prompt {
        log::debug!("Service revised the prompt to: {}", revised);
    }

    match (datum.b64_json, datum.url) {
        (Some(encoded), _) => {
            let bytes = base64::engine::general_purpose::STANDARD.decode(encoded.trim())?;
            Ok(GeneratedImage::InlineBytes(bytes))
        }
        (None, Some(url)) => {
            let url = ValidatedUrl::parse(&url).map_err(|e| {
                AppError::UpstreamFormat(format!("image url is not usable: {}", e))
            })?;
            Ok(GeneratedImage::RemoteRef(url))
        }
        (None, None) => Err(AppError::UpstreamFormat(
            "image entry has neither b64_json nor url".to_string(),
        )),
    }
}

/// Accepts the body of the secondary image download.
pub fn parse_download(result: ApiResponse<Vec<u8>>) -> Result<RasterBytes, AppError> {
    if !result.is_success() {
        return Err(AppError::Generation {
            code: ServiceErrorCode::from_http_status(result.status.as_u16()),
            message: format!("image download failed: HTTP {} from {}", result.status, result.url),
        });
    }
    if result.data.is_empty() {
        return Err(AppError::UpstreamFormat(format!(
            "image download from {} returned an empty body",
            result.url
        )));
    }
    Ok(RasterBytes::new(result.data))
}

/// Interprets a messaging API reply; anything but `ok: true` is a delivery error.
pub fn parse_delivery(result: ApiResponse<String>) -> Result<MessageId, AppError> {
    let parsed = serde_json::from_str::<TelegramResponse>(&result.data);
    let status_code = ServiceErrorCode::from_http_status(result.status.as_u16());

    match parsed {
        Ok(reply) if result.is_success() && reply.ok => {
            reply.result.map(|message| MessageId(message.message_id)).ok_or_else(|| {
                AppError::Delivery {
                    code: status_code,
                    description: "reply is missing the sent message".to_string(),
                }
            })
        }
        Ok(reply) => {
            let code = match reply.error_code {
                Some(code) => ServiceErrorCode::from_http_status(code),
                None => status_code,
            };
            Err(AppError::Delivery {
                code,
                description: reply
                    .description
                    .unwrap_or_else(|| format!("HTTP {} from {}", result.status, result.url)),
            })
        }
        Err(e) => Err(AppError::Delivery {
            code: status_code,
            description: format!("unreadable reply ({}): {}", e, preview_body(&result.data)),
        }),
    }
}

/// Shortens a response body for inclusion in a message.
pub fn preview_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.chars().count() > ERROR_BODY_PREVIEW_LENGTH {
        let preview: String = trimmed.chars().take(ERROR_BODY_PREVIEW_LENGTH).collect();
        format!("{}...", preview)
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    fn response(status: u16, body: &str) -> ApiResponse<String> {
        ApiResponse::new(
            body.to_string(),
            StatusCode::from_u16(status).unwrap(),
            "https://example.test/endpoint",
        )
    }

    #[test]
    fn headlines_take_titles_in_order_and_skip_untitled() {
        let body = r#"{"status":"ok","totalResults":5,"articles":[
            {"title":"  Dengue cases rise in Kerala "},
            {"author":"no title here"},
            {"title":"[Removed]"},
            {"title":"New blood bank opens in Pune"},
            {"title":"Heatwave advisory issued"}
        ]}"#;
        let titles = parse_headlines(response(200, body), 5, 3).unwrap();
        assert_eq!(
            titles,
            vec![
                "Dengue cases rise in Kerala".to_string(),
                "New blood bank opens in Pune".to_string(),
                "Heatwave advisory issued".to_string(),
            ]
        );
    }

    #[test]
    fn headlines_respect_scan_limit() {
        let body = r#"{"status":"ok","articles":[
            {"title":null},{"title":"B"},{"title":"C"},{"title":"D"}
        ]}"#;
        let titles = parse_headlines(response(200, body), 2, 3).unwrap();
        assert_eq!(titles, vec!["B".to_string()]);
    }

    #[test]
    fn headlines_zero_articles_is_empty() {
        let body = r#"{"status":"ok","totalResults":0,"articles":[]}"#;
        assert_eq!(parse_headlines(response(200, body), 5, 3), Err(FeedFailure::Empty));
    }

    #[test]
    fn headlines_error_status_carries_service_message() {
        let body =
            r#"{"status":"error","code":"apiKeyInvalid","message":"Your API key is invalid."}"#;
        match parse_headlines(response(401, body), 5, 3) {
            Err(FeedFailure::Status { code, message }) => {
                assert_eq!(code, ServiceErrorCode::Unauthorized);
                assert_eq!(message, "apiKeyInvalid: Your API key is invalid.");
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn headlines_malformed_body() {
        assert!(matches!(
            parse_headlines(response(200, "<html>"), 5, 3),
            Err(FeedFailure::Malformed { .. })
        ));
    }

    #[test]
    fn generation_inline_shape_is_decoded() {
        let body = r#"{"created":1,"data":[{"b64_json":"aGVsbG8="}]}"#;
        assert_eq!(
            parse_generation(response(200, body)).unwrap(),
            GeneratedImage::InlineBytes(b"hello".to_vec())
        );
    }

    #[test]
    fn generation_url_shape_is_kept_remote() {
        let body = r#"{"data":[{"url":"https://cdn.example.test/img.png"}]}"#;
        match parse_generation(response(200, body)).unwrap() {
            GeneratedImage::RemoteRef(url) => {
                assert_eq!(url.as_str(), "https://cdn.example.test/img.png")
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn generation_without_either_field_is_format_error() {
        let body = r#"{"data":[{"revised_prompt":"x"}]}"#;
        assert!(matches!(
            parse_generation(response(200, body)),
            Err(AppError::UpstreamFormat(_))
        ));
        assert!(matches!(
            parse_generation(response(200, r#"{"data":[]}"#)),
            Err(AppError::UpstreamFormat(_))
        ));
    }

    #[test]
    fn generation_bad_base64_is_format_error() {
        let body = r#"{"data":[{"b64_json":"***not base64***"}]}"#;
        assert!(matches!(
            parse_generation(response(200, body)),
            Err(AppError::UpstreamFormat(_))
        ));
    }

    #[test]
    fn generation_server_error_uses_service_message() {
        let body = r#"{"error":{"message":"The server had an error","type":"server_error"}}"#;
        match parse_generation(response(500, body)) {
            Err(AppError::Generation { code, message }) => {
                assert_eq!(code, ServiceErrorCode::ServerError(500));
                assert_eq!(message, "The server had an error (server_error)");
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn download_rejects_error_and_empty_bodies() {
        let failed = ApiResponse::new(Vec::new(), StatusCode::NOT_FOUND, "https://cdn.test/x");
        assert!(matches!(parse_download(failed), Err(AppError::Generation { .. })));
        let empty = ApiResponse::new(Vec::new(), StatusCode::OK, "https://cdn.test/x");
        assert!(matches!(parse_download(empty), Err(AppError::UpstreamFormat(_))));
    }

    #[test]
    fn delivery_ok_yields_message_id() {
        let body = r#"{"ok":true,"result":{"message_id":321,"chat":{"id":-100}}}"#;
        assert_eq!(parse_delivery(response(200, body)).unwrap(), MessageId(321));
    }

    #[test]
    fn delivery_rejection_is_delivery_error() {
        let body = r#"{"ok":false,"error_code":400,"description":"Bad Request: chat not found"}"#;
        match parse_delivery(response(400, body)) {
            Err(AppError::Delivery { code, description }) => {
                assert_eq!(code, ServiceErrorCode::BadRequest);
                assert_eq!(description, "Bad Request: chat not found");
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn delivery_unreadable_reply_is_delivery_error() {
        assert!(matches!(
            parse_delivery(response(502, "Bad Gateway")),
            Err(AppError::Delivery { .. })
        ));
    }

    #[test]
    fn preview_body_truncates_long_bodies() {
        let long = "x".repeat(500);
        let preview = preview_body(&long);
        assert_eq!(preview.chars().count(), ERROR_BODY_PREVIEW_LENGTH + 3);
        assert!(preview.ends_with("..."));
    }
}
