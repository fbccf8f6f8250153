//! Role Catalog: immutable set of job roles the matching engine scores against.
//!
//! Built once at startup (seed data or a JSON file), optionally enriched with market
//! data, then shared read-only behind an `Arc` for the life of the process.

pub mod handlers;
pub mod record;
pub mod seed;

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use crate::catalog::record::CatalogFile;
use crate::models::role::Role;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Catalog JSON is invalid: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Role #{index} has an empty title")]
    EmptyTitle { index: usize },

    #[error("Role '{role}' lists requirement '{skill}' more than once")]
    DuplicateRequirement { role: String, skill: String },
}

#[derive(Debug, Clone, Default)]
pub struct RoleCatalog {
    roles: Vec<Role>,
}

impl RoleCatalog {
    /// Builds a catalog. Any role with an empty title or a repeated requirement
    /// rejects the whole catalog.
    pub fn new(roles: Vec<Role>) -> Result<Self, CatalogError> {
        for (index, role) in roles.iter().enumerate() {
            if role.title.trim().is_empty() {
                return Err(CatalogError::EmptyTitle { index });
            }
            let mut seen = HashSet::new();
            for requirement in &role.requirements {
                if !seen.insert(requirement.skill.as_str()) {
                    return Err(CatalogError::DuplicateRequirement {
                        role: role.title.clone(),
                        skill: requirement.skill.clone(),
                    });
                }
            }
        }
        Ok(Self { roles })
    }

    pub fn seeded() -> Result<Self, CatalogError> {
        Self::new(seed::seeded_roles())
    }

    /// Parses either a bare JSON array of roles or `{"roles": [...]}`.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        let roles = file
            .into_records()
            .into_iter()
            .map(|record| record.into_role())
            .collect();
        Self::new(roles)
    }

    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json_str(&json)?;
        info!(
            "Loaded {} roles from catalog file {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Replaces market-demand values by case-insensitive title match.
    ///
    /// Values are clamped to 0–10; non-finite values are ignored. Returns the new
    /// catalog and the number of roles updated.
    pub fn with_market_demand(mut self, demand_by_title: &HashMap<String, f64>) -> (Self, usize) {
        let lookup: HashMap<String, f64> = demand_by_title
            .iter()
            .filter(|(_, demand)| demand.is_finite())
            .map(|(title, demand)| (title.trim().to_lowercase(), demand.clamp(0.0, 10.0)))
            .collect();

        let mut updated = 0;
        for role in &mut self.roles {
            if let Some(demand) = lookup.get(&role.title.to_lowercase()) {
                debug!(
                    "Market demand for '{}': {} → {}",
                    role.title, role.market_demand, demand
                );
                role.market_demand = *demand;
                updated += 1;
            }
        }
        (self, updated)
    }

    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}
