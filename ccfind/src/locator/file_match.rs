//! A located file and the repository it belongs to.

use std::path::{Component, Path, PathBuf};

/// A file whose name matched the requested fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMatch {
    /// Top-level folder under the workspace root (e.g., "cc.v3").
    pub repo_name: String,

    /// Path inside the repository, `/`-separated (e.g., "src/App.tsx").
    pub relative_path: String,

    /// Absolute path on disk.
    pub full_path: PathBuf,
}

impl FileMatch {
    /// Splits `full_path` into repository name and repository-relative path.
    ///
    /// Returns `None` when the file is not under `workspace_root`, sits
    /// directly in it (no repository level), or has a non UTF-8 component.
    pub fn from_path(workspace_root: &Path, full_path: &Path) -> Option<Self> {
        let relative = full_path.strip_prefix(workspace_root).ok()?;

        let mut parts = relative.components().map(|component| match component {
            Component::Normal(part) => part.to_str(),
            _ => None,
        });

        let repo_name = parts.next()??.to_string();
        let rest = parts.collect::<Option<Vec<_>>>()?;
        if rest.is_empty() {
            return None;
        }

        Some(Self {
            repo_name,
            relative_path: rest.join("/"),
            full_path: full_path.to_path_buf(),
        })
    }

    /// Path from the workspace root, e.g. "cc.v3/src/App.tsx".
    #[must_use]
    pub fn workspace_path(&self) -> String {
        format!("{}/{}", self.repo_name, self.relative_path)
    }
}
