// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{FinderError, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub service: ServiceConfig,
    pub pagination: PaginationConfig,
    pub dataset: DatasetConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServiceConfig {
    pub simulate_latency: bool,
    pub fetch_delay_ms: u64,
    pub add_delay_ms: u64,
    pub options_delay_ms: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PaginationConfig {
    pub default_page: u32,
    pub default_limit: u32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatasetConfig {
    /// JSON file with doctor records; the bundled dataset is used when unset.
    #[serde(default)]
    pub path: Option<PathBuf>,
    pub default_specialty: String,
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder.add_source(config::File::from(Path::new("config/default.toml")));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("DOCFINDER")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| FinderError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| FinderError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            service: ServiceConfig {
                simulate_latency: true,
                fetch_delay_ms: 800,
                add_delay_ms: 1000,
                options_delay_ms: 300,
            },
            pagination: PaginationConfig {
                default_page: 1,
                default_limit: 4,
            },
            dataset: DatasetConfig {
                path: None,
                default_specialty: "General Physician".to_string(),
            },
        }
    }

    fn validate(&self) -> Result<()> {
        if self.pagination.default_limit == 0 {
            return Err(FinderError::Config(
                "default_limit must be greater than 0".to_string(),
            ));
        }

        if self.pagination.default_page == 0 {
            return Err(FinderError::Config(
                "default_page is 1-based and must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default_config();
        assert!(config.validate().is_ok());
        assert_eq!(config.pagination.default_limit, 4);
        assert_eq!(config.service.fetch_delay_ms, 800);
    }

    #[test]
    fn test_load_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("docfinder.toml");
        fs::write(
            &path,
            r#"
[service]
simulate_latency = false
fetch_delay_ms = 10
add_delay_ms = 20
options_delay_ms = 5

[pagination]
default_page = 1
default_limit = 6

[dataset]
default_specialty = "Cardiologist"
"#,
        )
        .unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert!(!config.service.simulate_latency);
        assert_eq!(config.pagination.default_limit, 6);
        assert_eq!(config.dataset.default_specialty, "Cardiologist");
        assert!(config.dataset.path.is_none());
    }

    #[test]
    fn test_zero_limit_rejected() {
        let mut config = Config::default_config();
        config.pagination.default_limit = 0;
        assert!(matches!(config.validate(), Err(FinderError::Config(_))));
    }
}
