//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use carryon_commerce::cart::CartRepository;
use carryon_commerce::catalog::{Catalog, SelectionRepository};
use carryon_commerce::CommerceError;
use carryon_storage::DirStore;

use crate::config::{CliConfig, CONFIG_FILE_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    /// Directory relative config paths are resolved against: the config
    /// file's directory, or the working directory when there is none.
    pub root: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, root) = if let Some(path) = config_path {
            let path = resolve(&cwd, path);
            let root = path.parent().map_or_else(|| cwd.clone(), Path::to_path_buf);
            (CliConfig::load(&path)?, root)
        } else {
            // Try to find config in current directory or parent directories
            Self::find_config(&cwd).unwrap_or_else(|| (CliConfig::default(), cwd.clone()))
        };

        tracing::debug!(root = %root.display(), "resolved storefront root");
        Ok(Self {
            config,
            output,
            cwd,
            root,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<(CliConfig, PathBuf)> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_FILE_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    match CliConfig::load(&config_path) {
                        Ok(config) => return Some((config, current)),
                        Err(e) => tracing::warn!(error = %e, "skipping unreadable config"),
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Path of the product dataset.
    pub fn dataset_path(&self) -> PathBuf {
        resolve(&self.root, &self.config.catalog.dataset)
    }

    /// Directory holding persisted state.
    pub fn storage_dir(&self) -> PathBuf {
        resolve(&self.root, &self.config.storage.dir)
    }

    /// Load the product catalog.
    ///
    /// A missing or malformed dataset yields an empty catalog rather than an
    /// error. The failure is logged once.
    pub async fn load_catalog(&self) -> Catalog {
        let path = self.dataset_path();
        let spinner = self.output.spinner("Loading products...");

        let source_name = path.display().to_string();
        let result = match tokio::fs::read_to_string(&path).await {
            Ok(content) => Catalog::parse(&content, &source_name),
            Err(e) => Err(CommerceError::Dataset {
                source_name,
                reason: e.to_string(),
            }),
        };
        spinner.finish_and_clear();

        // or_empty logs the failure.
        let catalog = Catalog::or_empty(result);
        self.output
            .debug(&format!("Loaded {} products from {}", catalog.len(), path.display()));
        catalog
    }

    /// Open the state directory, creating it if needed.
    pub fn store(&self) -> Result<DirStore> {
        let dir = self.storage_dir();
        DirStore::open(&dir)
            .with_context(|| format!("Failed to open storage directory: {}", dir.display()))
    }

    /// The persisted cart.
    pub fn cart(&self) -> Result<CartRepository<DirStore>> {
        Ok(CartRepository::new(self.store()?))
    }

    /// The persisted product selection.
    pub fn selection(&self) -> Result<SelectionRepository<DirStore>> {
        Ok(SelectionRepository::new(self.store()?))
    }

    /// Where `config init` writes.
    pub fn default_config_path(&self) -> PathBuf {
        self.cwd.join(CONFIG_FILE_NAMES[0])
    }
}

/// Resolve `path` against `base` unless it is already absolute.
fn resolve(base: &Path, path: &str) -> PathBuf {
    let path = PathBuf::from(path);
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}
