//! Runner error types.

use std::path::PathBuf;

/// Exit status for configuration, lookup and input failures.
pub const EXIT_FAILURE: u8 = 1;

/// Exit status when the search program cannot be started, as a shell
/// reports a command that was not found.
pub const EXIT_SEARCH_UNAVAILABLE: u8 = 127;

/// Errors that end a `ccgho` or `ccgrep` run.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Configuration errors.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// No top-level folder matched the `-f` hint.
    #[error("No subfolder matching '{substring}' found in {}", .root.display())]
    NoSubfolder { substring: String, root: PathBuf },

    /// No file matched the name fragment.
    #[error("No files matching '{fragment}' found")]
    NoMatches { fragment: String },

    /// The interactive choice was rejected.
    #[error(transparent)]
    Choice(#[from] crate::chooser::ChoiceError),

    /// The file URL could not be built.
    #[error(transparent)]
    Remote(#[from] crate::remote::RemoteError),

    /// The search program could not be run.
    #[error(transparent)]
    Search(#[from] crate::search::SearchError),

    /// Writing to the terminal failed.
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl RunnerError {
    /// Process exit status for this error.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Search(_) => EXIT_SEARCH_UNAVAILABLE,
            _ => EXIT_FAILURE,
        }
    }
}
