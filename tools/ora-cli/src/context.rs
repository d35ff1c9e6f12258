//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use ora_cache::FileStore;
use ora_commerce::catalog::Storefront;
use ora_commerce::config::StorefrontConfig;

use crate::output::Output;

/// Config file names searched for, in order, in each directory.
pub const CONFIG_NAMES: [&str; 3] = ["ora.toml", ".ora.toml", "ora.json"];

/// Default data directory, relative to the working directory.
const DEFAULT_DATA_DIR: &str = ".ora";

/// Execution context for CLI commands.
pub struct Context {
    /// Storefront configuration.
    pub config: StorefrontConfig,
    /// File the config came from, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            let path = resolve(&cwd, Path::new(path));
            let config = StorefrontConfig::load(&path)
                .with_context(|| format!("Failed to load config {}", path.display()))?;
            (config, Some(path))
        } else {
            // Try to find config in current directory or parent directories
            match Self::find_config(&cwd) {
                Some((config, path)) => (config, Some(path)),
                None => (StorefrontConfig::default(), None),
            }
        };

        if let Some(path) = &config_path {
            output.debug(&format!("Using config {}", path.display()));
        }

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<(StorefrontConfig, PathBuf)> {
        let mut current = start.to_path_buf();
        loop {
            for name in CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    match StorefrontConfig::load(&config_path) {
                        Ok(config) => return Some((config, config_path)),
                        Err(e) => {
                            tracing::warn!(path = %config_path.display(), error = %e, "Skipping invalid config");
                        }
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Directory holding the persisted cart and toggle sets.
    pub fn data_dir(&self) -> PathBuf {
        match &self.config.storage.data_dir {
            Some(dir) => resolve(&self.cwd, dir),
            None => self.cwd.join(DEFAULT_DATA_DIR),
        }
    }

    /// Open the file-backed store.
    pub fn store(&self) -> Result<FileStore> {
        let dir = self.data_dir();
        FileStore::open(&dir).with_context(|| format!("Failed to open store at {}", dir.display()))
    }

    /// Load every catalog, from configured files or the built-in definitions.
    pub fn storefront(&self) -> Result<Storefront> {
        let mut sources = self.config.catalog.clone();
        for path in [
            &mut sources.artifacts,
            &mut sources.courses,
            &mut sources.blog,
            &mut sources.library,
            &mut sources.curriculum,
            &mut sources.teachers,
        ]
        .into_iter()
        .flatten()
        {
            *path = resolve(&self.cwd, path);
        }
        Storefront::load(&sources).context("Failed to load catalogs")
    }
}

fn resolve(cwd: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_config_walks_up() {
        let root = tempfile::tempdir().unwrap();
        let nested = root.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let mut config = StorefrontConfig::default();
        config.storage.cart_key = "walked_up".to_string();
        config.save(root.path().join("ora.toml")).unwrap();

        let (found, path) = Context::find_config(&nested).unwrap();
        assert_eq!(found.storage.cart_key, "walked_up");
        assert_eq!(path, root.path().join("ora.toml"));
    }

    #[test]
    fn test_resolve_relative() {
        let cwd = Path::new("/work");
        assert_eq!(resolve(cwd, Path::new("data")), PathBuf::from("/work/data"));
        assert_eq!(resolve(cwd, Path::new("/abs")), PathBuf::from("/abs"));
    }
}
