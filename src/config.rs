//! Runtime configuration.
//!
//! Values come from environment variables (a `.env` file is loaded by the
//! binary before this runs).

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

pub const DEFAULT_SPEC_URL: &str = "https://api.tigertag.io/apispec:tigertag?type=json";
pub const DEFAULT_API_BASE: &str = "https://api.tigertag.io/api:tigertag/";
pub const DEFAULT_OUTPUT: &str = "./tiger-bdd.json";

#[derive(Debug, Clone)]
pub struct Config {
    /// Interface description URL, without the token parameter
    pub spec_url: String,
    /// Appended to the spec URL as `token=<value>`
    pub token: String,
    /// Endpoint paths are appended verbatim; with the default trailing `/`
    /// and the path's leading `/` the data URL carries `//`
    pub api_base: String,
    pub output_path: PathBuf,
    /// Sent as `Authorization: Bearer` on data requests when present
    pub bearer_token: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary lookup function.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base = lookup("TIGERTAG_API_BASE").unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        if api_base.is_empty() {
            anyhow::bail!("TIGERTAG_API_BASE must not be empty");
        }

        let spec_url = lookup("TIGERTAG_SPEC_URL").unwrap_or_else(|| DEFAULT_SPEC_URL.to_string());
        reqwest::Url::parse(&spec_url).context("Invalid TIGERTAG_SPEC_URL")?;

        Ok(Self {
            spec_url,
            token: lookup("TIGERTAG_TOKEN").unwrap_or_default(),
            api_base,
            output_path: lookup("TIGERTAG_OUTPUT")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
            bearer_token: lookup("TIGERTAG_BEARER_TOKEN").filter(|t| !t.is_empty()),
        })
    }
}
