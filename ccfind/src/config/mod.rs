//! Workspace configuration.
//!
//! Everything the tools treat as fixed (workspace root, excluded directories,
//! repository name map, remote URL convention, browser and search commands)
//! is resolved once at startup into a [`WorkspaceConfig`]. Defaults match
//! the Curbcut workspace layout; an optional TOML file overrides them.

mod error;
mod file;

pub use error::ConfigError;
pub use file::{
    default_exclude_dirs, BrowserSection, ConfigFile, RemoteSection, SearchSection,
};

use crate::browser::BrowserConfig;
use crate::remote::RemoteConfig;
use crate::search::SearchConfig;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Workspace location relative to `$HOME`.
pub const DEFAULT_WORKSPACE_DIR: &str = "Curbcut/cc_app";

/// Resolved configuration for a single invocation.
#[derive(Debug, Clone)]
pub struct WorkspaceConfig {
    /// Directory whose immediate subdirectories are the repositories.
    pub root: PathBuf,

    /// Directory names the file locator skips.
    pub exclude_dirs: Vec<String>,

    /// Repository name map and URL convention.
    pub remote: RemoteConfig,

    /// Browser used to open file URLs.
    pub browser: BrowserConfig,

    /// External text search command.
    pub search: SearchConfig,
}

impl WorkspaceConfig {
    /// Creates a configuration with default settings rooted at `root`.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        ConfigFile::default().into_config(root.into())
    }

    /// Resolves the configuration from the process environment.
    ///
    /// Reads `HOME` once; an unset or empty value is treated as absent.
    ///
    /// # Errors
    ///
    /// See [`WorkspaceConfig::load`].
    pub fn from_env(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let home = std::env::var_os("HOME")
            .filter(|home| !home.is_empty())
            .map(PathBuf::from);
        Self::load(home.as_deref(), config_path)
    }

    /// Resolves the configuration from an explicit home directory and an
    /// optional config file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingHome`] when neither `home` nor the
    /// config file's `workspace-root` is available, or any error from
    /// [`ConfigFile::load`].
    pub fn load(home: Option<&Path>, config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let file = match config_path {
            Some(path) => ConfigFile::load(path)?,
            None => ConfigFile::default(),
        };

        let root = match &file.workspace_root {
            Some(root) => root.clone(),
            None => home
                .ok_or(ConfigError::MissingHome)?
                .join(DEFAULT_WORKSPACE_DIR),
        };

        info!(root = %root.display(), "Resolved workspace root");
        Ok(file.into_config(root))
    }
}

impl ConfigFile {
    /// Converts the parsed file into a resolved configuration.
    pub fn into_config(self, root: PathBuf) -> WorkspaceConfig {
        debug!(
            exclude_dirs = ?self.exclude_dirs,
            repositories = self.repositories.len(),
            "Building workspace configuration"
        );
        let remote = self.remote_config();
        WorkspaceConfig {
            root,
            exclude_dirs: self.exclude_dirs,
            remote,
            browser: BrowserConfig {
                program: self.browser.program,
                args: self.browser.args,
            },
            search: SearchConfig {
                program: self.search.program,
                exclude_dirs: self.search.exclude_dirs,
                exclude_files: self.search.exclude_files,
            },
        }
    }
}
