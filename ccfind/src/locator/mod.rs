//! File discovery by name fragment.
//!
//! Walks a search root, skipping build and VCS noise, and keeps every file
//! whose extension-less name contains the fragment (case-insensitive).
//! Matching is plain substring matching, so short fragments match a lot.

mod file_match;

pub use file_match::FileMatch;

use std::path::Path;
use tracing::{debug, info};
use walkdir::{DirEntry, WalkDir};

/// Finds files under `search_root` whose name matches `fragment`.
///
/// # Arguments
///
/// * `workspace_root` - Root the repository name is derived from
/// * `search_root` - Directory to walk (the workspace root or one repository)
/// * `fragment` - Name fragment, compared against the file name without its extension
/// * `exclude_dirs` - Entry names that are never descended into or reported
///
/// # Returns
///
/// Matches in traversal order. Files outside `workspace_root` or directly in
/// it are dropped. Nothing found yields an empty vector.
pub fn locate(
    workspace_root: &Path,
    search_root: &Path,
    fragment: &str,
    exclude_dirs: &[String],
) -> Vec<FileMatch> {
    info!(root = %search_root.display(), fragment, "Locating files");

    let needle = fragment.to_lowercase();
    let mut matches = Vec::new();

    let walker = WalkDir::new(search_root)
        .into_iter()
        .filter_entry(|entry| !is_excluded(entry, workspace_root, exclude_dirs));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                debug!(error = %e, "Skipping unreadable entry");
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy();
        if !name_matches(&name, &needle) {
            continue;
        }

        match FileMatch::from_path(workspace_root, entry.path()) {
            Some(found) => {
                debug!(path = %found.workspace_path(), "Matched file");
                matches.push(found);
            }
            None => debug!(path = %entry.path().display(), "Not inside a workspace repository"),
        }
    }

    info!(count = matches.len(), "Located files");
    matches
}

/// Entries below the workspace root named like an excluded directory are
/// pruned, including a search root that is itself excluded.
fn is_excluded(entry: &DirEntry, workspace_root: &Path, exclude_dirs: &[String]) -> bool {
    entry.path() != workspace_root
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| exclude_dirs.iter().any(|dir| dir == name))
}

/// `needle` must already be lower-cased.
fn name_matches(file_name: &str, needle: &str) -> bool {
    strip_extension(file_name).to_lowercase().contains(needle)
}

/// Drops the text after the last `.`, if any.
///
/// `MapContainer.test.tsx` becomes `MapContainer.test`, `Makefile` is
/// unchanged and `.env` becomes the empty string.
pub fn strip_extension(file_name: &str) -> &str {
    file_name
        .rsplit_once('.')
        .map_or(file_name, |(stem, _)| stem)
}
