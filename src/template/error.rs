//! Template error types

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while resolving or rendering a template
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Could not determine the user home directory")]
    HomeDirUnavailable,

    #[error("Failed to read template {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid template syntax: {0}")]
    Parse(#[from] handlebars::TemplateError),

    #[error("Template execution failed: {0}")]
    Render(#[from] handlebars::RenderError),
}

impl TemplateError {
    /// Check if this error happened before any output was produced
    ///
    /// Read, parse, and resolution failures occur up front; a render failure
    /// may leave partial output behind it in the sink.
    pub fn is_load_failure(&self) -> bool {
        !matches!(self, TemplateError::Render(_))
    }
}
