//! posprint - POS Ticket Renderer
//!
//! Renders a receipt record through a handlebars template for a point-of-sale
//! printer. The flow is a one-shot pipe: build (or load) a ticket, resolve
//! the template path, render to stdout or a file, exit.
//!
//! # Modules
//!
//! - [`ticket`] - Ticket data model, demo factory, and JSON data provider
//! - [`template`] - Template path resolution and handlebars rendering
//! - [`cli`] - Command-line interface

pub mod cli;
pub mod template;
pub mod ticket;

// Re-export commonly used types
pub use cli::Cli;
pub use template::{DEFAULT_TEMPLATE_FILE, TemplateError, TicketRenderer, resolve_template_path};
pub use ticket::{Order, Payment, PaymentInformation, Tag, Ticket};
