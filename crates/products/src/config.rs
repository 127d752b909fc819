//! Catalog configuration.

use serde::{Deserialize, Serialize};

use storecat_core::{DomainError, DomainResult};

use crate::catalog::Catalog;

/// Environment variable holding the catalog capacity.
pub const MAX_PRODUCTS_ENV: &str = "STORECAT_MAX_PRODUCTS";

/// Capacity used when nothing is configured.
pub const DEFAULT_MAX_PRODUCTS: i64 = 100;

/// Settings for building a [`Catalog`].
///
/// The capacity is signed so that a negative value coming from a config file
/// or the environment is reported as an invalid capacity instead of a parse
/// error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub max_products: i64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            max_products: DEFAULT_MAX_PRODUCTS,
        }
    }
}

impl CatalogConfig {
    /// Read settings from the process environment.
    pub fn from_env() -> DomainResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`, falling back to defaults for unset keys.
    pub fn from_lookup<F>(lookup: F) -> DomainResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(raw) = lookup(MAX_PRODUCTS_ENV) {
            config.max_products = raw.trim().parse().map_err(|e| {
                DomainError::configuration(format!("{MAX_PRODUCTS_ENV}={raw:?}: {e}"))
            })?;
        }
        Ok(config)
    }

    /// Build an empty catalog with the configured capacity.
    pub fn build(&self) -> DomainResult<Catalog> {
        Catalog::try_from(self.max_products)
    }
}
