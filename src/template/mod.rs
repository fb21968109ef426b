//! Template resolution and rendering
//!
//! Resolves the template file path (explicit flag or the default under the
//! user's home directory) and renders a ticket through it with handlebars.

mod error;
mod renderer;
mod resolver;

pub use error::TemplateError;
pub use renderer::TicketRenderer;
pub use resolver::{DEFAULT_TEMPLATE_FILE, resolve_template_path};
