//! Remote URL error types.

/// Errors that can occur while building a remote file URL.
#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    /// Handlebars rendering error.
    #[error("URL format rendering error: {0}")]
    RenderError(#[from] handlebars::RenderError),

    /// The URL format failed to compile.
    #[error("URL format error: {0}")]
    RegistrationError(#[from] handlebars::TemplateError),

    /// The rendered string is not a URL.
    #[error("'{url}' is not a valid URL: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}
