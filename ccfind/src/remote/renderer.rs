//! URL format rendering using Handlebars.

use super::RemoteError;
use handlebars::{no_escape, Handlebars};
use serde_json::Value;

/// Name the URL format is registered under.
const URL_TEMPLATE: &str = "file-url";

/// Creates a Handlebars registry for URL formats.
///
/// The registry is configured with:
/// - No HTML escaping (paths may contain `&`, `'` and friends)
/// - Strict mode (catches misspelled variables)
#[must_use]
fn create_handlebars_registry() -> Handlebars<'static> {
    let mut hbs = Handlebars::new();

    // URLs are not HTML, leave `&` and quotes alone
    hbs.register_escape_fn(no_escape);

    // Enable strict mode to catch misspelled variables in custom formats
    hbs.set_strict_mode(true);

    hbs
}

/// Renders a URL format string.
pub struct UrlRenderer {
    handlebars: Handlebars<'static>,
}

impl UrlRenderer {
    /// Compiles `format`.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError::RegistrationError`] if the format is not a valid template.
    pub fn new(format: &str) -> Result<Self, RemoteError> {
        let mut handlebars = create_handlebars_registry();
        handlebars.register_template_string(URL_TEMPLATE, format)?;
        Ok(Self { handlebars })
    }

    /// Renders the compiled format with `data`.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError::RenderError`] if a referenced variable is missing.
    pub fn render(&self, data: &Value) -> Result<String, RemoteError> {
        Ok(self.handlebars.render(URL_TEMPLATE, data)?)
    }
}
