//! Resource scanning
//!
//! - [`model`] - Wire types for listing pages and asset records
//! - [`filter`] - Keyword matching on `public_id`
//! - [`fetcher`] - Cursor-driven pagination with incremental filtering
//!
//! # Example
//!
//! ```ignore
//! use mansion_scan::resource::{scan, KeywordFilter};
//!
//! async fn find(client: &CloudinaryClient) {
//!     let outcome = scan(client, &KeywordFilter::default(), |_| {}).await;
//!     println!("{} matches", outcome.matches.len());
//! }
//! ```

mod fetcher;
mod filter;
mod model;

pub use fetcher::{scan, PageProgress, PageSource, ScanOutcome};
pub use filter::{KeywordFilter, DEFAULT_KEYWORDS};
pub use model::{Resource, ResourcePage};
