//! Folder hint resolution.

use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Returns the first immediate subdirectory of `base_dir` whose name contains
/// `substring`, ignoring case.
///
/// Only one level is inspected. "First" is directory iteration order, which
/// the filesystem decides. An unreadable `base_dir` is logged and treated as
/// having no match.
pub fn resolve_subfolder(base_dir: &Path, substring: &str) -> Option<PathBuf> {
    let entries = match std::fs::read_dir(base_dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!(path = %base_dir.display(), error = %e, "Error searching directories");
            return None;
        }
    };

    let needle = substring.to_lowercase();

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(path = %base_dir.display(), error = %e, "Error searching directories");
                continue;
            }
        };

        let path = entry.path();
        // Follows symlinks, so a linked repository counts as a directory.
        if !path.is_dir() {
            continue;
        }

        if entry
            .file_name()
            .to_string_lossy()
            .to_lowercase()
            .contains(&needle)
        {
            debug!(substring, path = %path.display(), "Resolved folder");
            return Some(path);
        }
    }

    debug!(substring, base = %base_dir.display(), "No folder matched");
    None
}
