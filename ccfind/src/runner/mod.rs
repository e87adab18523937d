//! Orchestrates the `ccgho` and `ccgrep` pipelines.
//!
//! `ccgho`: resolve folder hint → locate files → pick one → build URL → open.
//! `ccgrep`: resolve folder hint → run the search program → forward its status.

mod error;

pub use error::{RunnerError, EXIT_FAILURE, EXIT_SEARCH_UNAVAILABLE};

use crate::browser;
use crate::chooser::choose;
use crate::config::WorkspaceConfig;
use crate::locator::{locate, FileMatch};
use crate::resolver::resolve_subfolder;
use crate::search::run_search;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::{debug, info};
use url::Url;

/// Runs workspace lookups against one resolved configuration.
#[derive(Debug, Clone)]
pub struct Runner {
    config: WorkspaceConfig,
}

impl Runner {
    /// Creates a runner for `config`.
    pub fn new(config: WorkspaceConfig) -> Self {
        Self { config }
    }

    /// Resolves the directory to search.
    ///
    /// Without a folder hint (or with an empty one) this is the workspace
    /// root, otherwise the first top-level folder containing the hint.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::NoSubfolder`] if the hint matches nothing.
    pub fn search_root(&self, folder: Option<&str>) -> Result<PathBuf, RunnerError> {
        let Some(substring) = folder_hint(folder) else {
            return Ok(self.config.root.clone());
        };

        resolve_subfolder(&self.config.root, substring).ok_or_else(|| RunnerError::NoSubfolder {
            substring: substring.to_string(),
            root: self.config.root.clone(),
        })
    }

    /// Locates the file matching `fragment` and returns its remote URL.
    ///
    /// With several matches the first one is taken when a folder hint was
    /// given; otherwise the operator picks one through `input`/`output`.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError`] if the folder hint or fragment matches
    /// nothing, the choice is invalid, or the URL cannot be built.
    pub fn find_file_url<R: BufRead, W: Write>(
        &self,
        fragment: &str,
        folder: Option<&str>,
        input: R,
        output: W,
    ) -> Result<Url, RunnerError> {
        let search_root = self.search_root(folder)?;
        let matches = locate(
            &self.config.root,
            &search_root,
            fragment,
            &self.config.exclude_dirs,
        );

        if matches.is_empty() {
            return Err(RunnerError::NoMatches {
                fragment: fragment.to_string(),
            });
        }

        let selected = select_match(&matches, folder_hint(folder).is_some(), input, output)?;

        Ok(self
            .config
            .remote
            .file_url(&selected.repo_name, &selected.relative_path)?)
    }

    /// Finds the file URL, prints `Opening: <url>` and opens it in the browser.
    ///
    /// # Errors
    ///
    /// See [`Runner::find_file_url`].
    pub fn open_file<R: BufRead, W: Write>(
        &self,
        fragment: &str,
        folder: Option<&str>,
        input: R,
        mut output: W,
    ) -> Result<Url, RunnerError> {
        let url = self.find_file_url(fragment, folder, input, &mut output)?;

        writeln!(output, "Opening: {url}")?;
        output.flush()?;

        browser::open(&self.config.browser, &url);
        Ok(url)
    }

    /// Runs the text search and returns the search program's exit code.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::NoSubfolder`] for an unmatched folder hint and
    /// [`RunnerError::Search`] if the program cannot be started.
    pub fn search_text(&self, query: &str, folder: Option<&str>) -> Result<i32, RunnerError> {
        let search_root = self.search_root(folder)?;
        Ok(run_search(&self.config.search, &search_root, query)?)
    }
}

/// Picks one match.
///
/// One match is taken as-is. Several matches with `auto_pick` set yield the
/// first in traversal order; without it the operator is asked.
///
/// # Errors
///
/// Returns [`RunnerError::Choice`] for empty `matches` or a rejected answer.
pub fn select_match<'a, R: BufRead, W: Write>(
    matches: &'a [FileMatch],
    auto_pick: bool,
    input: R,
    output: W,
) -> Result<&'a FileMatch, RunnerError> {
    let index = match matches.len() {
        1 => 0,
        n if n > 1 && auto_pick => {
            info!(count = n, "Multiple matches in folder, taking the first");
            0
        }
        _ => choose(matches, input, output)?,
    };

    let selected = &matches[index];
    debug!(path = %selected.workspace_path(), "Selected file");
    Ok(selected)
}

/// An empty `-f` value counts as no hint.
fn folder_hint(folder: Option<&str>) -> Option<&str> {
    folder.filter(|substring| !substring.is_empty())
}
