use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "thali.toml";
pub const DEFAULT_CATALOGUE_FILE: &str = "veg_indian_meals.csv";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogueConfig {
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// CSV file holding the catalogue
    #[serde(default = "default_catalogue_path")]
    pub path: PathBuf,
}

fn default_catalogue_path() -> PathBuf {
    PathBuf::from(DEFAULT_CATALOGUE_FILE)
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_catalogue_path(),
        }
    }
}

impl CatalogueConfig {
    /// Read the config file at `path`. A missing or unparsable file yields the defaults.
    pub fn load_from(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if let Ok(content) = fs::read_to_string(path) {
            match toml::from_str(&content) {
                Ok(config) => return config,
                Err(e) => tracing::warn!(
                    "Failed to parse {}: {}. Using defaults.",
                    path.display(),
                    e
                ),
            }
        }
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_config_uses_defaults() {
        let dir = tempdir().unwrap();
        let config = CatalogueConfig::load_from(dir.path().join("thali.toml"));
        assert_eq!(config.storage.path, PathBuf::from(DEFAULT_CATALOGUE_FILE));
    }

    #[test]
    fn test_storage_path_from_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("thali.toml");
        fs::write(&path, "[storage]\npath = \"data/meals.csv\"\n").unwrap();

        let config = CatalogueConfig::load_from(&path);
        assert_eq!(config.storage.path, PathBuf::from("data/meals.csv"));
    }

    #[test]
    fn test_broken_config_falls_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("thali.toml");
        fs::write(&path, "[storage\npath = 3").unwrap();

        let config = CatalogueConfig::load_from(&path);
        assert_eq!(config.storage.path, PathBuf::from(DEFAULT_CATALOGUE_FILE));
    }
}
