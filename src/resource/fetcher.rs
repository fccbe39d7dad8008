//! Resource Fetcher
//!
//! Walks the listing endpoint page by page and applies the keyword filter as
//! pages arrive.

use super::filter::KeywordFilter;
use super::model::{Resource, ResourcePage};
use crate::cloudinary::CloudinaryClient;
use anyhow::Result;

/// Anything that can serve listing pages by cursor
#[allow(async_fn_in_trait)]
pub trait PageSource {
    async fn fetch_page(&self, cursor: Option<&str>) -> Result<ResourcePage>;
}

impl PageSource for CloudinaryClient {
    async fn fetch_page(&self, cursor: Option<&str>) -> Result<ResourcePage> {
        self.list_images(cursor).await
    }
}

/// Running counts after a non-empty page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageProgress {
    pub page_size: usize,
    pub total_scanned: usize,
    pub total_matches: usize,
}

/// Result of a full scan
#[derive(Debug, Default)]
pub struct ScanOutcome {
    /// Every resource seen, in provider order
    pub scanned: Vec<Resource>,
    /// Resources that passed the filter, in provider order
    pub matches: Vec<Resource>,
    /// Pages fetched successfully
    pub pages: usize,
    /// The request error that stopped pagination early
    pub error: Option<anyhow::Error>,
}

impl ScanOutcome {
    pub fn is_partial(&self) -> bool {
        self.error.is_some()
    }
}

/// Fetch all pages (auto-paginate), filtering as we go.
///
/// The first failed request ends the scan. Whatever was gathered before it is
/// kept, and the error is returned inside the outcome rather than as `Err`.
pub async fn scan<S, F>(source: &S, filter: &KeywordFilter, mut on_page: F) -> ScanOutcome
where
    S: PageSource,
    F: FnMut(&PageProgress),
{
    let mut outcome = ScanOutcome::default();
    let mut cursor: Option<String> = None;

    loop {
        let page = match source.fetch_page(cursor.as_deref()).await {
            Ok(page) => page,
            Err(e) => {
                tracing::error!("Page {} failed: {:#}", outcome.pages + 1, e);
                outcome.error = Some(e);
                break;
            }
        };
        outcome.pages += 1;

        let (resources, next_cursor) = page.into_parts();

        if !resources.is_empty() {
            let page_size = resources.len();
            outcome.matches.extend(filter.filter(&resources));
            outcome.scanned.extend(resources);

            tracing::info!("Page {}: {} resources", outcome.pages, page_size);

            let progress = PageProgress {
                page_size,
                total_scanned: outcome.scanned.len(),
                total_matches: outcome.matches.len(),
            };
            on_page(&progress);
        }

        match next_cursor {
            Some(next) => cursor = Some(next),
            None => break,
        }
    }

    tracing::info!(
        "Scan finished: {} pages, {} resources, {} matches{}",
        outcome.pages,
        outcome.scanned.len(),
        outcome.matches.len(),
        if outcome.is_partial() { " (partial)" } else { "" }
    );

    outcome
}
