//! Local folder name to remote repository name mapping.

use std::collections::BTreeMap;

/// Repositories known to live under the Curbcut organization.
const KNOWN_REPOSITORIES: [&str; 8] = [
    "cc.v3",
    "curbcut-api",
    "npm-map",
    "npm-ui",
    "npm-types",
    "cc.pipe",
    "cho",
    "queries",
];

/// Maps local repository folder names to canonical remote repository names.
///
/// Names missing from the map pass through unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoNameMap {
    entries: BTreeMap<String, String>,
}

impl Default for RepoNameMap {
    fn default() -> Self {
        Self {
            entries: KNOWN_REPOSITORIES
                .iter()
                .map(|name| (name.to_string(), name.to_string()))
                .collect(),
        }
    }
}

impl RepoNameMap {
    /// Creates an empty map, where every name passes through.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Returns the remote name for `local`, or `local` itself when unmapped.
    #[must_use]
    pub fn canonical_name<'a>(&'a self, local: &'a str) -> &'a str {
        self.entries.get(local).map_or(local, String::as_str)
    }

    /// Adds or replaces a mapping.
    pub fn insert(&mut self, local: impl Into<String>, remote: impl Into<String>) {
        self.entries.insert(local.into(), remote.into());
    }
}

impl Extend<(String, String)> for RepoNameMap {
    fn extend<T: IntoIterator<Item = (String, String)>>(&mut self, iter: T) {
        self.entries.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_repositories_are_identity() {
        let map = RepoNameMap::default();
        for name in KNOWN_REPOSITORIES {
            assert_eq!(map.canonical_name(name), name);
        }
    }

    #[test]
    fn unknown_names_pass_through() {
        let map = RepoNameMap::default();
        assert_eq!(map.canonical_name("scratch"), "scratch");
        assert_eq!(RepoNameMap::empty().canonical_name("cc.v3"), "cc.v3");
    }

    #[test]
    fn inserted_mapping_wins() {
        let mut map = RepoNameMap::default();
        map.insert("cc.v3", "curbcut-v3");
        assert_eq!(map.canonical_name("cc.v3"), "curbcut-v3");
    }
}
