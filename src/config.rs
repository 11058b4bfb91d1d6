// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{FetchError, Result};
use crate::utils::Validator;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";
pub const DEFAULT_ENDPOINT: &str = "https://cults3d.com/graphql";
pub const DEFAULT_OUTPUT: &str = "models.json";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub creations: CreationsConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    pub endpoint: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    #[serde(default = "default_terms")]
    pub terms: Vec<String>,
    #[serde(default = "default_types")]
    pub types: Vec<String>,
    #[serde(default = "default_sort")]
    pub sort: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CreationsConfig {
    pub limit: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    pub path: PathBuf,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            terms: default_terms(),
            types: default_types(),
            sort: default_sort(),
        }
    }
}

impl Default for CreationsConfig {
    fn default() -> Self {
        Self { limit: 100 }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

fn default_terms() -> Vec<String> {
    ["anime", "rpg", "video game", "dnd", "final fantasy"]
        .iter()
        .map(|t| t.to_string())
        .collect()
}

fn default_types() -> Vec<String> {
    vec!["product".to_string()]
}

fn default_sort() -> String {
    "LATEST".to_string()
}

impl Config {
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
            config::Environment::with_prefix("MODEL_FETCH")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("search.terms")
                .with_list_parse_key("search.types")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| FetchError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| FetchError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self::default()
    }

    pub fn validate(&self) -> Result<()> {
        Validator::validate_url(&self.api.endpoint)
            .map_err(|e| FetchError::Config(e.to_string()))?;

        Validator::validate_search_terms(&self.search.terms)
            .map_err(|e| FetchError::Config(e.to_string()))?;

        if self.creations.limit == 0 {
            return Err(FetchError::Config(
                "creations.limit must be greater than 0".to_string(),
            ));
        }

        if self.output.path.as_os_str().is_empty() {
            return Err(FetchError::Config("output.path must not be empty".to_string()));
        }

        Ok(())
    }
}
