//! Config file deserialization and validation.

use crate::browser::BrowserConfig;
use crate::config::ConfigError;
use crate::remote::{RemoteConfig, RepoNameMap, DEFAULT_BRANCH, DEFAULT_HOST, DEFAULT_ORG, DEFAULT_URL_FORMAT};
use crate::search::SearchConfig;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Parsed contents of a TOML config file. Every key is optional.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct ConfigFile {
    /// Overrides `$HOME/Curbcut/cc_app`.
    pub workspace_root: Option<PathBuf>,

    /// Directory names skipped by the file locator.
    pub exclude_dirs: Vec<String>,

    /// Remote host convention.
    pub remote: RemoteSection,

    /// Local folder name -> remote repository name, merged over the built-in map.
    pub repositories: BTreeMap<String, String>,

    /// Browser command.
    pub browser: BrowserSection,

    /// Text search command.
    pub search: SearchSection,
}

/// `[remote]` table.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct RemoteSection {
    pub host: String,
    pub org: String,
    pub default_branch: String,
    /// Handlebars format with `host`, `org`, `repo`, `branch` and `path` variables.
    pub url_format: String,
}

/// `[browser]` table.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct BrowserSection {
    pub program: String,
    pub args: Vec<String>,
}

/// `[search]` table.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct SearchSection {
    pub program: String,
    pub exclude_dirs: Vec<String>,
    pub exclude_files: Vec<String>,
}

/// Directories the file locator never descends into.
pub fn default_exclude_dirs() -> Vec<String> {
    ["node_modules", "dist", ".git"].map(String::from).to_vec()
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            workspace_root: None,
            exclude_dirs: default_exclude_dirs(),
            remote: RemoteSection::default(),
            repositories: BTreeMap::new(),
            browser: BrowserSection::default(),
            search: SearchSection::default(),
        }
    }
}

impl Default for RemoteSection {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            org: DEFAULT_ORG.to_string(),
            default_branch: DEFAULT_BRANCH.to_string(),
            url_format: DEFAULT_URL_FORMAT.to_string(),
        }
    }
}

impl Default for BrowserSection {
    fn default() -> Self {
        let browser = BrowserConfig::default();
        Self {
            program: browser.program,
            args: browser.args,
        }
    }
}

impl Default for SearchSection {
    fn default() -> Self {
        let search = SearchConfig::default();
        Self {
            program: search.program,
            exclude_dirs: search.exclude_dirs,
            exclude_files: search.exclude_files,
        }
    }
}

impl ConfigFile {
    /// Loads and validates a config file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file is missing, is not valid TOML, or
    /// fails validation.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        debug!(path = %path.display(), "Loading config file");

        if !path.exists() {
            return Err(ConfigError::MissingFile {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;

        let file: Self = toml::from_str(&content).map_err(|e| ConfigError::TomlError {
            path: path.display().to_string(),
            source: e,
        })?;

        file.validate(path)?;
        Ok(file)
    }

    /// Validates the parsed values.
    pub fn validate(&self, path: &Path) -> Result<(), ConfigError> {
        let invalid = |message: String| ConfigError::ValidationError {
            path: path.display().to_string(),
            message,
        };

        if let Some(root) = &self.workspace_root {
            if !root.is_absolute() {
                return Err(invalid(format!(
                    "workspace-root must be an absolute path: {}",
                    root.display()
                )));
            }
        }

        for (key, value) in [
            ("remote.host", &self.remote.host),
            ("remote.org", &self.remote.org),
            ("remote.default-branch", &self.remote.default_branch),
            ("browser.program", &self.browser.program),
            ("search.program", &self.search.program),
        ] {
            if value.trim().is_empty() {
                return Err(invalid(format!("{key} must not be empty")));
            }
        }

        check_names("exclude-dirs", &self.exclude_dirs).map_err(&invalid)?;
        check_names("search.exclude-dirs", &self.search.exclude_dirs).map_err(&invalid)?;

        for (local, remote) in &self.repositories {
            if local.trim().is_empty() || remote.trim().is_empty() {
                return Err(invalid(format!(
                    "repositories entry '{local}' = '{remote}' must not be empty"
                )));
            }
        }

        self.remote_config()
            .validate()
            .map_err(|e| invalid(format!("remote.url-format: {e}")))
    }

    /// Builds the remote URL convention from the `[remote]` and `[repositories]` tables.
    pub fn remote_config(&self) -> RemoteConfig {
        let mut repositories = RepoNameMap::default();
        repositories.extend(self.repositories.clone());

        RemoteConfig::new(
            &self.remote.host,
            &self.remote.org,
            &self.remote.default_branch,
        )
        .with_url_format(&self.remote.url_format)
        .with_repositories(repositories)
    }
}

/// Exclusion entries are plain directory names.
fn check_names(key: &str, names: &[String]) -> Result<(), String> {
    for name in names {
        if name.trim().is_empty() {
            return Err(format!("{key} must not contain empty names"));
        }
        if name.contains('/') || name.contains('\\') {
            return Err(format!(
                "{key} entry '{name}' must not contain path separators"
            ));
        }
    }
    Ok(())
}
