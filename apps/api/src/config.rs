use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::recommend::RecommendOptions;

const DEFAULT_MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Every variable is optional; invalid values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// JSON role catalog. `None` uses the built-in seed catalog.
    pub catalog_path: Option<PathBuf>,
    /// Market-demand feed applied once at startup. `None` disables enrichment.
    pub market_data_url: Option<String>,
    pub market_data_timeout: Duration,
    pub recommend_defaults: RecommendOptions,
    pub max_upload_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            catalog_path: None,
            market_data_url: None,
            market_data_timeout: Duration::from_millis(3000),
            recommend_defaults: RecommendOptions::default(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let defaults = Config::default();
        let recommend = defaults.recommend_defaults;

        Ok(Config {
            port: parse_or(get("PORT"), "PORT", defaults.port)?,
            rust_log: get("RUST_LOG").unwrap_or(defaults.rust_log),
            catalog_path: get("CATALOG_PATH").map(PathBuf::from),
            market_data_url: get("MARKET_DATA_URL"),
            market_data_timeout: Duration::from_millis(parse_or(
                get("MARKET_DATA_TIMEOUT_MS"),
                "MARKET_DATA_TIMEOUT_MS",
                3000u64,
            )?),
            recommend_defaults: RecommendOptions {
                suitability_threshold: parse_or(
                    get("SUITABILITY_THRESHOLD"),
                    "SUITABILITY_THRESHOLD",
                    recommend.suitability_threshold,
                )?,
                max_results: parse_or(get("MAX_RESULTS"), "MAX_RESULTS", recommend.max_results)?,
                roadmap_cap: parse_or(get("ROADMAP_CAP"), "ROADMAP_CAP", recommend.roadmap_cap)?,
            }
            .sanitized(),
            max_upload_bytes: parse_or(
                get("MAX_UPLOAD_BYTES"),
                "MAX_UPLOAD_BYTES",
                defaults.max_upload_bytes,
            )?,
        })
    }
}

fn parse_or<T>(value: Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match value {
        Some(raw) => raw
            .parse::<T>()
            .with_context(|| format!("{key} has an invalid value '{raw}'")),
        None => Ok(default),
    }
}
