//! The snapshot pipeline: fetch → filter → collect → sort → stamp → write.
//!
//! Each stage takes the previous stage's output by value or reference and
//! returns its own; no state is shared between runs.

pub mod filter;
pub mod keys;
pub mod sort;

use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use tracing::{error, info};

use crate::error::ExportError;
use crate::export::{self, OutputFormat};
use crate::scraper::TigerTagScraper;

pub use filter::{extract_get_all_endpoints, is_get_all_path};
pub use keys::transform_path;
pub use sort::{SortField, sort_records, sort_store};

pub struct Pipeline {
    scraper: TigerTagScraper,
    output_path: PathBuf,
    format: OutputFormat,
}

impl Pipeline {
    pub fn new(scraper: TigerTagScraper, output_path: PathBuf, format: OutputFormat) -> Self {
        Self {
            scraper,
            output_path,
            format,
        }
    }

    /// Runs the pipeline stamped with today's local date.
    pub async fn run(&self) -> Result<Option<PathBuf>, ExportError> {
        self.run_on(Local::now().date_naive()).await
    }

    /// Runs the pipeline, stamping the snapshot with `date`.
    ///
    /// Returns `Ok(None)` when the interface description could not be
    /// loaded; in that case nothing is written. Endpoint failures only
    /// drop their own entry. Write failures are returned.
    pub async fn run_on(&self, date: NaiveDate) -> Result<Option<PathBuf>, ExportError> {
        let document = match self.scraper.fetch_interface_document().await {
            Ok(document) => document,
            Err(err) => {
                error!(error = %err, "Failed to load interface description");
                return Ok(None);
            }
        };

        let endpoints = extract_get_all_endpoints(document);

        let mut collection = self.scraper.collect(&endpoints).await;
        sort_store(&mut collection.store);

        info!(
            selected = endpoints.len(),
            stored = collection.store.len(),
            failed = collection.failed.len(),
            "Endpoint data collected"
        );

        let path = export::export(collection.store, &self.output_path, date, self.format)?;
        Ok(Some(path))
    }
}
