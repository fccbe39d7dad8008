//! Cloudinary Client
//!
//! Combines the account credentials with the HTTP client to call the
//! Admin API resource listing endpoint.

use super::http::CloudinaryHttpClient;
use crate::config::Credentials;
use crate::resource::ResourcePage;
use anyhow::{bail, Context, Result};
use url::Url;

/// Default Admin API host
pub const DEFAULT_API_BASE: &str = "https://api.cloudinary.com";

/// Largest page the listing endpoint will return
pub const PAGE_SIZE: u32 = 500;

/// Main Cloudinary client
#[derive(Clone)]
pub struct CloudinaryClient {
    credentials: Credentials,
    http: CloudinaryHttpClient,
    api_base: Url,
}

impl CloudinaryClient {
    /// Create a new client against `api_base` (normally [`DEFAULT_API_BASE`])
    pub fn new(credentials: Credentials, api_base: &str) -> Result<Self> {
        let api_base =
            Url::parse(api_base).with_context(|| format!("Invalid API base URL: {}", api_base))?;
        if api_base.cannot_be_a_base() || !matches!(api_base.scheme(), "http" | "https") {
            bail!("API base URL must be an http(s) URL: {}", api_base);
        }

        let http = CloudinaryHttpClient::new()?;

        Ok(Self {
            credentials,
            http,
            api_base,
        })
    }

    pub fn cloud_name(&self) -> &str {
        &self.credentials.cloud_name
    }

    /// Build the image resource listing URL for this account
    pub fn resources_url(&self) -> String {
        format!(
            "{}/v1_1/{}/resources/image",
            self.api_base.as_str().trim_end_matches('/'),
            self.credentials.cloud_name
        )
    }

    /// Fetch one page of uploaded images, continuing from `cursor` if given
    pub async fn list_images(&self, cursor: Option<&str>) -> Result<ResourcePage> {
        let url = self.resources_url();
        let max_results = PAGE_SIZE.to_string();

        let mut query = vec![("type", "upload"), ("max_results", max_results.as_str())];
        if let Some(cursor) = cursor {
            query.push(("next_cursor", cursor));
        }

        self.http
            .get(
                &url,
                &query,
                &self.credentials.api_key,
                &self.credentials.api_secret,
            )
            .await
    }
}
