//! Configuration
//!
//! Resolves the Cloudinary account credentials from the process environment.
//! Resolution happens once at startup, before any network call.

use anyhow::{bail, Context, Result};
use std::fmt;
use std::path::{Path, PathBuf};

/// Account (cloud) name, also used in delivery URLs
pub const CLOUD_NAME_VAR: &str = "CLOUDINARY_CLOUD_NAME";
pub const API_KEY_VAR: &str = "CLOUDINARY_API_KEY";
pub const API_SECRET_VAR: &str = "CLOUDINARY_API_SECRET";

/// Cloudinary Admin API credentials
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
}

impl Credentials {
    pub fn new(cloud_name: &str, api_key: &str, api_secret: &str) -> Self {
        Self {
            cloud_name: cloud_name.to_string(),
            api_key: api_key.to_string(),
            api_secret: api_secret.to_string(),
        }
    }

    /// Read credentials from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read credentials through an arbitrary lookup.
    ///
    /// Values that are unset, empty, or whitespace-only count as missing.
    /// The error lists every missing variable, not just the first one.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        match (
            read(CLOUD_NAME_VAR),
            read(API_KEY_VAR),
            read(API_SECRET_VAR),
        ) {
            (Some(cloud_name), Some(api_key), Some(api_secret)) => Ok(Self {
                cloud_name,
                api_key,
                api_secret,
            }),
            (cloud_name, api_key, api_secret) => {
                let missing: Vec<&str> = [
                    (CLOUD_NAME_VAR, cloud_name.is_none()),
                    (API_KEY_VAR, api_key.is_none()),
                    (API_SECRET_VAR, api_secret.is_none()),
                ]
                .into_iter()
                .filter_map(|(name, is_missing)| is_missing.then_some(name))
                .collect();

                bail!(
                    "Missing required environment variables: {}. Please check your .env file.",
                    missing.join(", ")
                )
            }
        }
    }
}

// Key and secret never reach logs
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("cloud_name", &self.cloud_name)
            .field("api_key", &"***")
            .field("api_secret", &"***")
            .finish()
    }
}

/// Load a `.env` file, from `path` or else from the working directory.
///
/// Variables already present in the environment are left untouched.
/// Returns the file that was loaded, or `None` when there is none.
pub fn load_dotenv(path: Option<&Path>) -> Result<Option<PathBuf>> {
    let loaded = match path {
        Some(path) => dotenvy::from_path(path).map(|()| path.to_path_buf()),
        None => dotenvy::dotenv(),
    };

    match loaded {
        Ok(path) => Ok(Some(path)),
        Err(e) if e.not_found() => Ok(None),
        Err(e) => Err(e).context("Failed to load .env file"),
    }
}
