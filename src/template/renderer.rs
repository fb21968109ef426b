//! Ticket rendering through handlebars
//!
//! Templates support field interpolation (`{{login_user}}`, `{{tag.pax}}`)
//! and block constructs (`{{#each orders}}`, `{{#if ...}}`) over the ticket's
//! nested fields.

use std::fs;
use std::io::Write;
use std::path::Path;

use handlebars::Handlebars;
use serde::Serialize;
use tracing::debug;

use super::error::TemplateError;

/// Registry name for the single loaded template
const TEMPLATE_NAME: &str = "ticket";

/// Renders tickets through a parsed handlebars template
pub struct TicketRenderer {
    /// Handlebars template engine
    hbs: Handlebars<'static>,
}

impl TicketRenderer {
    /// Create a renderer from template source text
    ///
    /// Fails when the source does not parse as a valid handlebars template.
    pub fn new(source: &str) -> Result<Self, TemplateError> {
        let mut hbs = Handlebars::new();
        // Strict mode: a reference to a missing field is a render error, not
        // silently-empty output.
        hbs.set_strict_mode(true);
        hbs.register_template_string(TEMPLATE_NAME, source)?;

        Ok(Self { hbs })
    }

    /// Create a renderer from the template file at `path`
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, TemplateError> {
        let path = path.as_ref();
        debug!("Loading template from: {}", path.display());

        let source = fs::read_to_string(path).map_err(|source| TemplateError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::new(&source)
    }

    /// Render `data` through the template, streaming output to `writer`
    pub fn render_to<W, T>(&self, data: &T, writer: W) -> Result<(), TemplateError>
    where
        W: Write,
        T: Serialize,
    {
        self.hbs.render_to_write(TEMPLATE_NAME, data, writer)?;
        Ok(())
    }

    /// Render `data` through the template into a string
    pub fn render<T: Serialize>(&self, data: &T) -> Result<String, TemplateError> {
        Ok(self.hbs.render(TEMPLATE_NAME, data)?)
    }
}
