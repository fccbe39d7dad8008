//! Cloudinary Admin API interaction module
//!
//! # Module Structure
//!
//! - [`client`] - Account-scoped client that lists image resources
//! - [`http`] - HTTP utilities for REST API calls
//!
//! # Example
//!
//! ```ignore
//! use mansion_scan::cloudinary::{CloudinaryClient, DEFAULT_API_BASE};
//! use mansion_scan::config::Credentials;
//!
//! async fn example() -> anyhow::Result<()> {
//!     let client = CloudinaryClient::new(Credentials::from_env()?, DEFAULT_API_BASE)?;
//!     let page = client.list_images(None).await?;
//!     println!("{} resources", page.resources.len());
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod http;

pub use client::{CloudinaryClient, DEFAULT_API_BASE, PAGE_SIZE};
pub use http::format_api_error;
