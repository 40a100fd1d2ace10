//! Layered user configuration
//!
//! Precedence, lowest first: built-in defaults, the user config file,
//! environment variables, then command-line flags.

use directories::ProjectDirs;
use log::{info, warn};
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::tables::{TablesError, TraceabilityTables};
use crate::core::traceability::TraceabilityResolver;
use crate::entities::MassUnit;
use crate::yaml::{parse_yaml_file, YamlError};

/// Overrides the location of the user config file
pub const CONFIG_ENV: &str = "CALCERT_CONFIG";

/// Overrides the lookup-table file
pub const TABLES_ENV: &str = "CALCERT_TABLES";

/// User configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Lookup-table YAML replacing the built-in tables
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tables: Option<PathBuf>,

    /// Unit for one-shot conversions when none is given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_unit: Option<MassUnit>,
}

/// Errors reading a config file
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("Invalid config file: {0}")]
    #[diagnostic(transparent)]
    Yaml(#[from] YamlError),
}

impl Config {
    /// Load configuration from every layer
    ///
    /// Never fails: an unreadable config file is reported and skipped.
    pub fn load() -> Self {
        let mut config = Config::default();

        if let Some(path) = Self::config_path() {
            if path.exists() {
                match Self::load_from(&path) {
                    Ok(file) => {
                        info!("using config file {}", path.display());
                        config.merge(file);
                    }
                    Err(e) => warn!("ignoring config file {}: {}", path.display(), e),
                }
            }
        }

        if let Some(tables) = std::env::var_os(TABLES_ENV).filter(|v| !v.is_empty()) {
            config.tables = Some(PathBuf::from(tables));
        }

        config
    }

    /// Read a single config file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        Ok(parse_yaml_file(path)?)
    }

    /// Config file location: `$CALCERT_CONFIG`, else the platform config dir
    pub fn config_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|v| !v.is_empty()) {
            return Some(PathBuf::from(path));
        }
        ProjectDirs::from("", "", "calcert").map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    /// Overlay set fields of `other` onto `self`
    pub fn merge(&mut self, other: Config) {
        if other.tables.is_some() {
            self.tables = other.tables;
        }
        if other.default_unit.is_some() {
            self.default_unit = other.default_unit;
        }
    }

    /// Apply a `--tables` flag
    pub fn with_tables(mut self, tables: Option<PathBuf>) -> Self {
        if tables.is_some() {
            self.tables = tables;
        }
        self
    }

    pub fn default_unit(&self) -> MassUnit {
        self.default_unit.unwrap_or_default()
    }

    /// The active lookup tables, validated
    pub fn tables(&self) -> Result<TraceabilityTables, TablesError> {
        match &self.tables {
            Some(path) => TraceabilityTables::load(path),
            None => {
                info!("using built-in traceability tables");
                TraceabilityTables::builtin()
            }
        }
    }

    /// A resolver over the active lookup tables
    pub fn resolver(&self) -> Result<TraceabilityResolver, TablesError> {
        self.tables().map(TraceabilityResolver::new)
    }
}
