//! Mapping local files to their page on the remote code host.
//!
//! A [`FileMatch`](crate::FileMatch) carries a repository folder name and a
//! path inside it. This module turns that pair into a browsable blob URL,
//! e.g. `https://github.com/Curbcut/cc.v3/blob/main/src/App.tsx`. No request
//! is made to the host; a link to a file that only exists locally is fine.

mod error;
mod names;
mod renderer;

pub use error::RemoteError;
pub use names::RepoNameMap;
use renderer::UrlRenderer;

use serde_json::json;
use tracing::debug;
use url::Url;

/// Default code host.
pub const DEFAULT_HOST: &str = "github.com";

/// Default organization owning the workspace repositories.
pub const DEFAULT_ORG: &str = "Curbcut";

/// Branch links point at.
pub const DEFAULT_BRANCH: &str = "main";

/// GitHub blob URL layout.
pub const DEFAULT_URL_FORMAT: &str = "https://{{host}}/{{org}}/{{repo}}/blob/{{branch}}/{{path}}";

/// Remote host convention plus the repository name map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteConfig {
    host: String,
    org: String,
    default_branch: String,
    url_format: String,
    repositories: RepoNameMap,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self::new(DEFAULT_HOST, DEFAULT_ORG, DEFAULT_BRANCH)
    }
}

impl RemoteConfig {
    /// Creates a convention using the default URL format and name map.
    pub fn new(host: &str, org: &str, default_branch: &str) -> Self {
        Self {
            host: host.to_string(),
            org: org.to_string(),
            default_branch: default_branch.to_string(),
            url_format: DEFAULT_URL_FORMAT.to_string(),
            repositories: RepoNameMap::default(),
        }
    }

    /// Sets a custom URL format.
    #[must_use]
    pub fn with_url_format(mut self, url_format: &str) -> Self {
        self.url_format = url_format.to_string();
        self
    }

    /// Replaces the repository name map.
    #[must_use]
    pub fn with_repositories(mut self, repositories: RepoNameMap) -> Self {
        self.repositories = repositories;
        self
    }

    /// Builds the URL of `relative_path` inside the repository whose local
    /// folder is `repo_name`.
    ///
    /// The folder name goes through the [`RepoNameMap`]; unmapped names are
    /// used as-is. Both are percent-encoded segment by segment, so a `#` or
    /// `?` in a file name stays in the path. With the default format every
    /// input yields a URL.
    ///
    /// # Errors
    ///
    /// Only a custom URL format can fail, see [`RemoteError`].
    pub fn file_url(&self, repo_name: &str, relative_path: &str) -> Result<Url, RemoteError> {
        let repo = self.repositories.canonical_name(repo_name);
        let data = json!({
            "host": self.host,
            "org": self.org,
            "repo": encode_segments(repo),
            "branch": self.default_branch,
            "path": encode_segments(relative_path),
        });

        let rendered = UrlRenderer::new(&self.url_format)?.render(&data)?;
        debug!(repo_name, repo, url = %rendered, "Rendered file URL");

        Url::parse(&rendered).map_err(|source| RemoteError::InvalidUrl {
            url: rendered,
            source,
        })
    }

    /// Checks that the URL format compiles and renders to a URL.
    ///
    /// # Errors
    ///
    /// Returns the [`RemoteError`] a real lookup would produce.
    pub fn validate(&self) -> Result<(), RemoteError> {
        self.file_url("repository", "src/file.txt").map(|_| ())
    }
}

/// Percent-encodes each `/`-separated segment of `path`.
fn encode_segments(path: &str) -> String {
    let Ok(mut scratch) = Url::parse("https://localhost/") else {
        return path.to_string();
    };
    if let Ok(mut segments) = scratch.path_segments_mut() {
        segments.pop_if_empty().extend(path.split('/'));
    }

    let encoded = scratch.path();
    encoded.strip_prefix('/').unwrap_or(encoded).to_string()
}
