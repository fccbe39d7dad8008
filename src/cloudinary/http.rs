//! HTTP utilities for Cloudinary Admin API calls

use anyhow::{Context, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;

/// Maximum length of response body to log (to avoid logging sensitive data)
const MAX_LOG_BODY_LENGTH: usize = 200;

/// Sanitize response body for logging
/// Truncates long responses and strips control characters
fn sanitize_for_log(body: &str) -> String {
    let truncated = if body.chars().count() > MAX_LOG_BODY_LENGTH {
        let head: String = body.chars().take(MAX_LOG_BODY_LENGTH).collect();
        format!("{}... [truncated, {} bytes total]", head, body.len())
    } else {
        body.to_string()
    };

    truncated.replace(|c: char| !c.is_ascii_graphic() && c != ' ', "")
}

/// HTTP client wrapper for Admin API calls
#[derive(Clone)]
pub struct CloudinaryHttpClient {
    client: Client,
}

impl CloudinaryHttpClient {
    /// Create a new HTTP client
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("mansion-scan/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client })
    }

    /// Make a Basic-authenticated GET request and decode the JSON body
    pub async fn get<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
        username: &str,
        password: &str,
    ) -> Result<T> {
        tracing::debug!("GET {} {:?}", url, query);

        let response = self
            .client
            .get(url)
            .basic_auth(username, Some(password))
            .query(query)
            .send()
            .await
            .context("Failed to send request")?;

        let status = response.status();
        let body = response
            .text()
            .await
            .context("Failed to read response body")?;

        if !status.is_success() {
            tracing::error!("API error: {} - {}", status, sanitize_for_log(&body));
            return Err(anyhow::anyhow!("API request failed: {}", status));
        }

        serde_json::from_str(&body).context("Failed to parse response JSON")
    }
}

/// Format an Admin API error for console display
pub fn format_api_error(error: &anyhow::Error) -> String {
    let error_str = error.to_string();

    if error_str.contains("401") {
        return "Authentication failed. Check CLOUDINARY_API_KEY and CLOUDINARY_API_SECRET."
            .to_string();
    }
    if error_str.contains("403") {
        return "Permission denied. The API key cannot list resources.".to_string();
    }
    if error_str.contains("404") {
        return "Account not found. Check CLOUDINARY_CLOUD_NAME.".to_string();
    }
    if error_str.contains("420") || error_str.contains("429") {
        return "Rate limit exceeded. Please try again later.".to_string();
    }
    if error_str.contains("500") || error_str.contains("503") {
        return "Cloudinary service temporarily unavailable. Please try again.".to_string();
    }
    if error_str.contains("API request failed") {
        return error_str;
    }

    // Transport and decode errors: include the cause chain, trimmed
    let detailed = format!("{:#}", error);
    let sanitized = detailed
        .chars()
        .filter(|c| c.is_ascii_graphic() || *c == ' ')
        .take(160)
        .collect::<String>();

    if sanitized.len() < detailed.len() {
        format!("{}...", sanitized)
    } else {
        sanitized
    }
}
