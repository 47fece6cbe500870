mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser)]
#[command(name = "contact-form")]
#[command(version, about = "Contact form driver - replay events, print the view", long_about = None)]
struct Cli {
    /// Config file (defaults to ./contact-form.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level: -v for debug, -vv for trace
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay an event script against a fresh form and print the final view
    Run {
        /// Script file, one event per line. Reads stdin when omitted.
        script: Option<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// List the form fields with their labels and HTML5 attributes
    Fields,
}

#[derive(Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text view
    Text,
    /// Server-rendered HTML
    Html,
    /// Submitted record as JSON (null when nothing was submitted)
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let config = commands::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Run { script, format } => {
            commands::run::execute(config, script.as_deref(), format)?;
        }
        Commands::Fields => {
            commands::fields::execute(&config);
        }
    }

    Ok(())
}
