//! CLI flag definitions

use clap::Parser;
use std::path::PathBuf;

/// posprint - render a POS ticket through a text template
#[derive(Parser, Debug)]
#[command(
    name = "posprint",
    about = "Print to a POS printer by interpolating a template with a ticket",
    version
)]
pub struct Cli {
    /// Path to the template file (defaults to ~/default_template)
    #[arg(short, long)]
    pub template: Option<PathBuf>,

    /// Path to the output file (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Path to a ticket JSON file (built-in demo ticket when omitted)
    #[arg(short, long)]
    pub data: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
