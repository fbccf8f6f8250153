//! Market-data enrichment: optional startup overlay of per-role demand figures.
//!
//! The feed is advisory. Any failure, including running past the time budget, leaves the
//! catalog as loaded and is only logged.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::catalog::RoleCatalog;

const MAX_RETRIES: u32 = 3;
const BASE_BACKOFF_MS: u64 = 100;

#[derive(Debug, Error)]
pub enum MarketDataError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Market feed error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Market feed unavailable after {retries} attempts")]
    RetriesExhausted { retries: u32 },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RoleDemand {
    #[serde(alias = "role", alias = "job_title")]
    pub title: String,
    #[serde(alias = "demand", alias = "job_market_demand")]
    pub market_demand: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MarketSnapshot {
    pub roles: Vec<RoleDemand>,
}

impl MarketSnapshot {
    pub fn demand_by_title(&self) -> HashMap<String, f64> {
        self.roles
            .iter()
            .map(|r| (r.title.clone(), r.market_demand))
            .collect()
    }
}

/// Source of market-demand figures. Carried as `&dyn MarketDataSource` so tests can
/// substitute an in-memory feed.
#[async_trait]
pub trait MarketDataSource: Send + Sync {
    async fn fetch(&self) -> Result<MarketSnapshot, MarketDataError>;
}

/// Fetches `{"roles": [{"title", "market_demand"}]}` from a URL.
/// Retries on transport errors, 429 and 5xx with exponential backoff.
pub struct HttpMarketDataSource {
    client: Client,
    url: String,
}

impl HttpMarketDataSource {
    pub fn new(url: impl Into<String>, request_timeout: Duration) -> Result<Self, MarketDataError> {
        Ok(Self {
            client: Client::builder().timeout(request_timeout).build()?,
            url: url.into(),
        })
    }
}

#[async_trait]
impl MarketDataSource for HttpMarketDataSource {
    async fn fetch(&self) -> Result<MarketSnapshot, MarketDataError> {
        let mut last_error: Option<MarketDataError> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                // 100ms, 200ms
                let delay = Duration::from_millis(BASE_BACKOFF_MS * (1 << (attempt - 1)));
                warn!(
                    "Market data attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = match self.client.get(&self.url).send().await {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(MarketDataError::Http(e));
                    continue;
                }
            };

            let status = response.status();
            if status.as_u16() == 429 || status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                last_error = Some(MarketDataError::Api {
                    status: status.as_u16(),
                    message: body,
                });
                continue;
            }
            if !status.is_success() {
                return Err(MarketDataError::Api {
                    status: status.as_u16(),
                    message: response.text().await.unwrap_or_default(),
                });
            }

            let body = response.text().await?;
            let snapshot: MarketSnapshot = serde_json::from_str(&body)?;
            debug!("Market feed returned {} role figures", snapshot.roles.len());
            return Ok(snapshot);
        }

        Err(last_error.unwrap_or(MarketDataError::RetriesExhausted {
            retries: MAX_RETRIES,
        }))
    }
}

/// Applies market-demand overrides within `budget`. Never fails.
pub async fn enrich_catalog(
    catalog: RoleCatalog,
    source: &dyn MarketDataSource,
    budget: Duration,
) -> RoleCatalog {
    match tokio::time::timeout(budget, source.fetch()).await {
        Ok(Ok(snapshot)) => {
            let (catalog, updated) = catalog.with_market_demand(&snapshot.demand_by_title());
            info!(
                "Market data applied to {updated} of {} roles",
                catalog.len()
            );
            catalog
        }
        Ok(Err(e)) => {
            warn!("Market data enrichment failed, keeping catalog values: {e}");
            catalog
        }
        Err(_) => {
            warn!(
                "Market data enrichment timed out after {}ms, keeping catalog values",
                budget.as_millis()
            );
            catalog
        }
    }
}
