//! Tour configuration, loaded from TOML.
//!
//! ```toml
//! animals = ["cat", "dog"]
//! color = true
//! ```

use crate::error::SolidError;
use crate::tagged::Species;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TourConfig {
    /// Animals walked through every lesson, in order.
    pub animals: Vec<Species>,
    pub color: bool,
}

impl Default for TourConfig {
    fn default() -> Self {
        TourConfig {
            animals: Species::ALL.to_vec(),
            color: true,
        }
    }
}

impl TourConfig {
    pub fn from_toml(content: &str) -> Result<Self, SolidError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self, SolidError> {
        let content =
            fs::read_to_string(path).map_err(|err| SolidError::config_read(path, err))?;
        Self::from_toml(&content)
    }
}
