//! Text search error types.

/// Errors that can occur while delegating a text search.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The search program could not be started or waited on.
    #[error("Failed to run '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}
