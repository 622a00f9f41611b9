use crate::core::catalog::Catalog;
use crate::core::vehicle::VehicleDetails;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

fn default_currency() -> String {
    "$".to_string()
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    /// Listings to start the catalog with. Unset means the built-in listings.
    #[serde(default)]
    pub catalog: Option<Vec<VehicleDetails>>,
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Seed for the offer generator; unset draws from system entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            catalog: None,
            currency: default_currency(),
            seed: None,
        }
    }
}

impl AppConfig {
    /// Loads the config from the default location, falling back to built-in
    /// defaults when no file exists there.
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            debug!("No config at {}, using defaults", config_path.display());
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("com", "autolink", "autolink")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        config
            .validate()
            .with_context(|| format!("Invalid config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }

    /// Checks every configured listing, naming the first bad one.
    pub fn validate(&self) -> Result<()> {
        for (index, details) in self.catalog.iter().flatten().enumerate() {
            details
                .validate()
                .with_context(|| format!("Catalog listing {} is invalid", index + 1))?;
        }
        Ok(())
    }

    /// Builds the catalog this config describes.
    pub fn build_catalog(&self) -> Catalog {
        match &self.catalog {
            Some(listings) => Catalog::with_listings(listings.clone()),
            None => Catalog::seeded(),
        }
    }
}
