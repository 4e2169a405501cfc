//! Startup configuration
//!
//! Defaults are static. An optional JSON file in `~/.grid-tui/` can
//! override them; the app only ever reads it.

use crate::model::column::ColumnRegistry;
use serde::{Deserialize, Serialize};
use simplelog::LevelFilter;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("page size must be greater than zero")]
    ZeroPageSize,
    #[error("page size options must contain at least one non-zero size")]
    NoPageSizeOptions,
    #[error("unknown column '{0}' in visible_columns")]
    UnknownColumn(String),
    #[error("unknown log level '{0}'")]
    UnknownLogLevel(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Initial rows per page
    pub page_size: usize,
    /// Sizes offered by the page size selector
    pub page_size_options: Vec<usize>,
    /// Columns shown at startup
    pub visible_columns: Vec<String>,
    /// Number of generated rows
    pub row_count: usize,
    /// Fixed seed for row generation; random when absent
    pub seed: Option<u64>,
    pub log_level: String,
    /// Log destination; defaults to `~/.grid-tui/grid-tui.log`
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: 5,
            page_size_options: vec![5, 10, 15, 20, 50],
            visible_columns: ["idx", "firstName", "age", "visits", "status", "progress"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            row_count: 55,
            seed: None,
            log_level: "info".to_string(),
            log_file: None,
        }
    }
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".grid-tui"))
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    /// Load from `path`
    pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    fn parse(contents: &str) -> Result<Config, serde_json::Error> {
        serde_json::from_str(contents)
    }

    /// Load and validate the user config file. A missing file yields defaults.
    pub fn load(registry: &ColumnRegistry) -> Result<Config, ConfigError> {
        Self::load_optional(Self::config_path().as_deref(), registry)
    }

    fn load_optional(
        path: Option<&Path>,
        registry: &ColumnRegistry,
    ) -> Result<Config, ConfigError> {
        match path.filter(|p| p.exists()) {
            Some(path) => Self::load_from(path)?.validated(registry),
            None => Ok(Config::default()),
        }
    }

    /// Check the config against `registry` and normalise the page size options
    pub fn validated(mut self, registry: &ColumnRegistry) -> Result<Config, ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        self.page_size_options.retain(|&size| size > 0);
        if self.page_size_options.is_empty() {
            return Err(ConfigError::NoPageSizeOptions);
        }
        if let Some(unknown) = self
            .visible_columns
            .iter()
            .find(|id| !registry.contains(id))
        {
            return Err(ConfigError::UnknownColumn(unknown.clone()));
        }
        self.level_filter()?;

        self.page_size_options.push(self.page_size);
        self.page_size_options.sort_unstable();
        self.page_size_options.dedup();
        Ok(self)
    }

    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        self.log_level
            .parse::<LevelFilter>()
            .map_err(|_| ConfigError::UnknownLogLevel(self.log_level.clone()))
    }

    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_file
            .clone()
            .or_else(|| Self::config_dir().map(|dir| dir.join("grid-tui.log")))
    }
}
