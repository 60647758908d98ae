//! Configuration loaded from `<home>/config.yaml`

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::yaml::{parse_yaml_file, YamlError};

/// Config file name inside the home directory
pub const CONFIG_FILE: &str = "config.yaml";

/// Larder settings
///
/// Every field is optional; a missing config file is the same as an empty one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Default location used by store searches
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Recipe catalog YAML replacing the built-in one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,

    /// Store directory YAML replacing the built-in one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stores: Option<PathBuf>,

    /// Log filter directive, e.g. `debug` or `larder=info`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log: Option<String>,
}

impl Config {
    /// Load the config of a home directory
    pub fn load(home: &Path) -> Result<Self, YamlError> {
        let path = home.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        let mut config: Config = parse_yaml_file(&path)?;
        config.catalog = config.catalog.map(|p| resolve(home, p));
        config.stores = config.stores.map(|p| resolve(home, p));
        Ok(config)
    }

    /// Location to search stores in when none is given
    pub fn location(&self) -> Option<&str> {
        self.location
            .as_deref()
            .map(str::trim)
            .filter(|l| !l.is_empty())
    }
}

fn resolve(home: &Path, path: PathBuf) -> PathBuf {
    if path.is_relative() {
        home.join(path)
    } else {
        path
    }
}
