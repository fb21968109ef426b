//! Template path resolution

use std::path::{Path, PathBuf};

use tracing::debug;

use super::error::TemplateError;

/// File name of the fallback template under the user's home directory
pub const DEFAULT_TEMPLATE_FILE: &str = "default_template";

/// Resolve the template file path
///
/// An explicitly provided path is used as-is; otherwise falls back to
/// `~/default_template`. Fails when no path was given and the home directory
/// cannot be determined.
pub fn resolve_template_path(explicit: Option<&Path>) -> Result<PathBuf, TemplateError> {
    if let Some(path) = explicit {
        debug!("Using template from flag: {}", path.display());
        return Ok(path.to_path_buf());
    }

    let home = dirs::home_dir().ok_or(TemplateError::HomeDirUnavailable)?;
    let path = home.join(DEFAULT_TEMPLATE_FILE);
    debug!("Using default template: {}", path.display());
    Ok(path)
}
