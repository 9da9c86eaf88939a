//! Common trait definitions
//!
//! Abstractions over where catalog data comes from, so screens can be
//! driven by a file today and by a remote catalog or a mock in tests.

use crate::model::CatalogPage;
use anyhow::Result;
use async_trait::async_trait;

/// Source of paged option values
///
/// Implementations return pages in catalog order. Asking for a page past
/// the end yields an empty page with `has_more == false`.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch one page of option values
    async fn fetch_page(&self, page: usize, page_size: usize) -> Result<CatalogPage>;

    /// Human-readable description of the source, shown in the header
    fn describe(&self) -> String;
}
