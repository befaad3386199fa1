use std::path::{Path, PathBuf};

use anyhow::{Context, Result as AnyhowResult};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// JSON array snapshot of the product catalog.
    #[serde(default = "default_catalog_path")]
    pub catalog_path: PathBuf,

    /// LanceDB directory holding the category vector index.
    #[serde(default = "default_db_path")]
    pub db_path: String,

    /// How many direct-search candidates to keep (and rescore) per query.
    #[serde(default = "default_search_limit")]
    pub search_limit: usize,

    /// Default result count for semantic category search.
    #[serde(default = "default_semantic_top_k")]
    pub semantic_top_k: usize,

    /// Prefix of generated report file names.
    #[serde(default = "default_report_prefix")]
    pub report_prefix: String,
}

fn default_catalog_path() -> PathBuf {
    PathBuf::from("data/products.json")
}

fn default_db_path() -> String {
    "data/vectordb".to_string()
}

fn default_search_limit() -> usize {
    50
}

fn default_semantic_top_k() -> usize {
    10
}

fn default_report_prefix() -> String {
    "batch_search_results".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: default_catalog_path(),
            db_path: default_db_path(),
            search_limit: default_search_limit(),
            semantic_top_k: default_semantic_top_k(),
            report_prefix: default_report_prefix(),
        }
    }
}

impl Config {
    /// Loads the YAML config; a missing file falls back to defaults so batch
    /// runs work out of the box.
    pub fn load_from_yaml<P: AsRef<Path>>(path: P) -> AnyhowResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let f = std::fs::File::open(path)
            .with_context(|| format!("Failed to open config at {}", path.display()))?;
        let config: Config = serde_yaml::from_reader(f)
            .with_context(|| format!("Failed to parse config at {}", path.display()))?;
        Ok(config)
    }
}
