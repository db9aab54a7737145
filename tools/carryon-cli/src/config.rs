//! CLI configuration.

use std::path::Path;

use anyhow::{Context, Result};
use carryon_commerce::catalog::DEFAULT_RECOMMENDATIONS;
use serde::{Deserialize, Serialize};

/// Config file names searched for, in order, in each directory.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["carryon.toml", ".carryon.toml", "carryon.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Product data settings.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Persistent state settings.
    #[serde(default)]
    pub storage: StorageConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if is_json(path) {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

/// Product data settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Product dataset, relative to the config file's directory.
    #[serde(default = "default_dataset")]
    pub dataset: String,

    /// Products suggested under a product detail view.
    #[serde(default = "default_recommendations")]
    pub recommendations: usize,
}

fn default_dataset() -> String {
    "data.json".to_string()
}

fn default_recommendations() -> usize {
    DEFAULT_RECOMMENDATIONS
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            dataset: default_dataset(),
            recommendations: default_recommendations(),
        }
    }
}

/// Persistent state settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the cart and the selected product.
    #[serde(default = "default_storage_dir")]
    pub dir: String,
}

fn default_storage_dir() -> String {
    ".carryon".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: default_storage_dir(),
        }
    }
}

/// Generate a default carryon.toml config file.
pub fn generate_default_config() -> String {
    format!(
        r#"# Carryon storefront configuration

[catalog]
# Product data: {{ "data": [ ...products ] }}
dataset = "{dataset}"
# Suggestions shown by `carryon show`
recommendations = {recommendations}

[storage]
# Cart and selected product live here
dir = "{dir}"
"#,
        dataset = default_dataset(),
        recommendations = default_recommendations(),
        dir = default_storage_dir(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_config_parses_to_defaults() {
        let parsed: CliConfig = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(parsed, CliConfig::default());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let parsed: CliConfig = toml::from_str("[catalog]\nrecommendations = 8\n").unwrap();
        assert_eq!(parsed.catalog.recommendations, 8);
        assert_eq!(parsed.catalog.dataset, "data.json");
        assert_eq!(parsed.storage.dir, ".carryon");
    }

    #[test]
    fn test_load_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("carryon.json");
        std::fs::write(&path, r#"{"storage": {"dir": "state"}}"#).unwrap();

        let config = CliConfig::load(&path).unwrap();
        assert_eq!(config.storage.dir, "state");
        assert_eq!(config.catalog, CatalogConfig::default());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = CliConfig::load(dir.path().join("carryon.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
