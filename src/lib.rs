//! Snapshot builder for the TigerTag public API.
//!
//! Reads the API's interface description, fetches every unpaginated
//! "get all" endpoint and writes the results to a single dated JSON file.

pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod pipeline;
pub mod scraper;

pub use config::Config;
pub use error::{ExportError, FetchError, SortError};
pub use export::OutputFormat;
pub use models::{EndpointDataStore, EndpointSet, InterfaceDocument};
pub use pipeline::Pipeline;
pub use scraper::TigerTagScraper;
