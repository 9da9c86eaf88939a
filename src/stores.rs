//! Catalog source implementations
//!
//! Provides a file-backed `CatalogSource`. The whole file is read on first
//! use and pages are served from memory afterwards.

use crate::model::{CatalogPage, OptionValue};
use crate::traits::CatalogSource;
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use std::path::PathBuf;
use tokio::sync::OnceCell;

/// Accepted shapes of a catalog file
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    Bare(Vec<OptionValue>),
    Wrapped { option_values: Vec<OptionValue> },
}

impl CatalogFile {
    fn into_values(self) -> Vec<OptionValue> {
        match self {
            CatalogFile::Bare(values) | CatalogFile::Wrapped { option_values: values } => values,
        }
    }
}

/// Catalog read from a JSON file
///
/// The file holds either an array of option values or an object with an
/// `option_values` array.
pub struct JsonFileCatalog {
    path: PathBuf,
    values: OnceCell<Vec<OptionValue>>,
}

impl JsonFileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            values: OnceCell::new(),
        }
    }

    async fn values(&self) -> Result<&[OptionValue]> {
        let values = self
            .values
            .get_or_try_init(|| async move {
                let contents = tokio::fs::read_to_string(&self.path)
                    .await
                    .with_context(|| format!("Failed to read catalog from {:?}", self.path))?;
                let file: CatalogFile = serde_json::from_str(&contents)
                    .with_context(|| format!("Failed to parse catalog {:?}", self.path))?;
                let values = file.into_values();
                tracing::info!(path = ?self.path, count = values.len(), "loaded catalog");
                Ok::<_, anyhow::Error>(values)
            })
            .await?;
        Ok(values)
    }
}

#[async_trait]
impl CatalogSource for JsonFileCatalog {
    async fn fetch_page(&self, page: usize, page_size: usize) -> Result<CatalogPage> {
        anyhow::ensure!(page_size > 0, "page_size must be greater than zero");
        let values = self.values().await?;

        let start = page.saturating_mul(page_size).min(values.len());
        let end = start.saturating_add(page_size).min(values.len());
        tracing::debug!(page, start, end, total = values.len(), "serving catalog page");

        Ok(CatalogPage {
            page,
            values: values[start..end].to_vec(),
            has_more: end < values.len(),
        })
    }

    fn describe(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}
