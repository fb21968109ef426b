//! posprint - POS Ticket Renderer
//!
//! CLI entry point: builds the ticket record, resolves the template path,
//! and renders to stdout or an output file.

use std::fs;
use std::io::{self, Write};

use clap::Parser;
use eyre::{Context, Result};
use tracing::{debug, info, warn};

use posprint::cli::Cli;
use posprint::template::{TicketRenderer, resolve_template_path};
use posprint::ticket::Ticket;

fn setup_logging(verbose: bool) {
    // Logs go to stderr - stdout belongs to the rendered ticket
    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::INFO };

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    cmd_render(&cli)
}

/// Build the ticket, resolve the template, render to the output sink
fn cmd_render(cli: &Cli) -> Result<()> {
    let ticket = match &cli.data {
        Some(path) => Ticket::from_file(path)?,
        None => Ticket::sample(),
    };

    debug!(
        "Rendering ticket for {} ({} orders, {} payments)",
        ticket.login_user,
        ticket.orders.len(),
        ticket.payments.len()
    );

    let template_path = resolve_template_path(cli.template.as_deref())?;
    let renderer = TicketRenderer::from_file(&template_path)?;

    match &cli.output {
        Some(path) => {
            let file = fs::File::create(path)
                .context(format!("Failed to create output file {}", path.display()))?;
            render_to_sink(&renderer, &ticket, file)?;
            info!("Rendered ticket to: {}", path.display());
        }
        None => {
            render_to_sink(&renderer, &ticket, io::stdout().lock())?;
        }
    }

    Ok(())
}

/// Render into `sink`, flagging failures that can leave partial output behind
fn render_to_sink<W: Write>(renderer: &TicketRenderer, ticket: &Ticket, sink: W) -> Result<()> {
    renderer.render_to(ticket, sink).map_err(|err| {
        if !err.is_load_failure() {
            warn!("Render failed mid-stream; the sink may hold partial output");
        }
        eyre::Report::new(err)
    })
}
