//! Brand lists and the ordered brand set.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Brand name lists from the project config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrandsConfig {
    /// The brand(s) whose share of voice is being measured.
    pub primary: Vec<String>,
    /// Competitor brands measured alongside.
    #[serde(default)]
    pub competitors: Vec<String>,
}

/// Ordered set of distinct brand names: primary first, then competitors,
/// insertion order preserved, exact-string duplicates removed (first
/// occurrence wins). All mention maps and summary tables iterate in this
/// order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrandSet {
    names: Vec<String>,
}

impl BrandSet {
    #[must_use]
    pub fn new(primary: &[String], competitors: &[String]) -> Self {
        let mut names: Vec<String> = Vec::new();
        for name in primary.iter().chain(competitors) {
            let trimmed = name.trim();
            if !trimmed.is_empty() && !names.iter().any(|n| n == trimmed) {
                names.push(trimmed.to_string());
            }
        }
        Self { names }
    }

    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.names.iter()
    }
}

impl<'a> IntoIterator for &'a BrandSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.iter()
    }
}

impl From<&BrandsConfig> for BrandSet {
    fn from(config: &BrandsConfig) -> Self {
        Self::new(&config.primary, &config.competitors)
    }
}

pub(crate) fn validate_brands(brands: &BrandsConfig) -> Result<(), ConfigError> {
    if brands.primary.is_empty() {
        return Err(ConfigError::Validation(
            "brands.primary must list at least one brand".to_string(),
        ));
    }
    for name in brands.primary.iter().chain(&brands.competitors) {
        if name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "brand names must be non-empty".to_string(),
            ));
        }
    }
    Ok(())
}
