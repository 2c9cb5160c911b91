// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{ResolveError, Result};
use crate::models::ItemType;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub repository: RepositoryConfig,
    pub resolver: ResolverConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RepositoryConfig {
    pub local_path: PathBuf,
    pub remote: String,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            local_path: PathBuf::from("."),
            remote: "origin".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Hint used by `browse` when none is given on the command line.
    pub item_type: ItemType,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    pub json: bool,
}

impl Config {
    /// Layer the config file (optional) and `GIT_BROWSE_*` variables.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder
                .add_source(config::File::from(Path::new(DEFAULT_CONFIG_PATH)).required(false));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("GIT_BROWSE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| ResolveError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| ResolveError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self::default()
    }

    fn validate(&self) -> Result<()> {
        if self.repository.remote.trim().is_empty() {
            return Err(ResolveError::Config(
                "repository.remote must not be empty".to_string(),
            ));
        }

        if self.repository.local_path.as_os_str().is_empty() {
            return Err(ResolveError::Config(
                "repository.local_path must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
