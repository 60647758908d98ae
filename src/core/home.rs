//! Home directory discovery
//!
//! All persistent state lives in one directory: the JSON documents written by
//! [`FileStorage`] and the optional `config.yaml`. The directory is chosen from,
//! in order, an explicit path, the `LARDER_HOME` environment variable, and the
//! platform data directory.

use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::config::Config;
use crate::core::profile::ProfileStore;
use crate::core::shopping::ShoppingList;
use crate::core::storage::FileStorage;
use crate::yaml::YamlError;

/// Environment variable overriding the home directory
pub const HOME_ENV: &str = "LARDER_HOME";

#[derive(Debug, Error)]
pub enum HomeError {
    #[error("Could not determine a data directory; set LARDER_HOME or pass --home")]
    NoDataDir,

    #[error("Failed to create {}: {source}", path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// The data directory of one user
#[derive(Debug, Clone)]
pub struct Home {
    root: PathBuf,
}

impl Home {
    /// Open `root` as the home directory, creating it if needed
    pub fn at(root: impl Into<PathBuf>) -> Result<Self, HomeError> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|source| HomeError::Create {
            path: root.clone(),
            source,
        })?;
        Ok(Self { root })
    }

    /// Locate the home directory
    ///
    /// `explicit` wins; callers that accept `--home` with an env fallback pass
    /// the resolved value here.
    pub fn locate(explicit: Option<&Path>) -> Result<Self, HomeError> {
        let root = Self::resolve_root(explicit).ok_or(HomeError::NoDataDir)?;
        Self::at(root)
    }

    /// The directory [`Home::locate`] would use, without creating it
    pub fn resolve_root(explicit: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(path.to_path_buf());
        }
        if let Some(path) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
            return Some(PathBuf::from(path));
        }
        ProjectDirs::from("", "", "larder").map(|dirs| dirs.data_dir().to_path_buf())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn storage(&self) -> FileStorage {
        FileStorage::new(&self.root)
    }

    pub fn config(&self) -> Result<Config, YamlError> {
        Config::load(&self.root)
    }

    pub fn shopping_list(&self) -> ShoppingList<FileStorage> {
        ShoppingList::open(self.storage())
    }

    pub fn profile(&self) -> ProfileStore<FileStorage> {
        ProfileStore::open(self.storage())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_explicit_home_is_created() {
        let tmp = tempdir().unwrap();
        let root = tmp.path().join("larder-home");

        let home = Home::locate(Some(&root)).unwrap();
        assert_eq!(home.root(), root.as_path());
        assert!(root.is_dir());
    }

    #[test]
    fn test_stores_share_the_home() {
        let tmp = tempdir().unwrap();
        let home = Home::at(tmp.path()).unwrap();

        let mut list = home.shopping_list();
        list.add("Cumin", None).unwrap();
        drop(list);

        assert!(tmp.path().join("shoppingList.json").exists());
        assert_eq!(home.shopping_list().len(), 1);
    }
}
