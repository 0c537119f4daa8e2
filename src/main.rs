//! # Vellum CLI
//!
//! Command-line interface for rendering invoices.
//!
//! ## Usage
//!
//! ```bash
//! # List available templates
//! vellum templates
//!
//! # Render a record with a template
//! vellum render invoice.json --template medical --pretty
//!
//! # Read the record from stdin and pin the render date
//! cat invoice.json | vellum render - --date 2024-03-01
//!
//! # Suggest a template and tax rate from saved drafts
//! vellum suggest drafts/*.json
//!
//! # Start the HTTP API
//! vellum serve --listen 0.0.0.0:8080
//! ```
//!
//! Logging goes to stderr and is controlled with `RUST_LOG`
//! (default `vellum=info`).

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use vellum::{
    Engine, EngineDefaults, InvoiceRecord, VellumError,
    server::{self, ServerConfig},
    suggest,
};

/// Vellum - Invoice document rendering engine
#[derive(Parser, Debug)]
#[command(name = "vellum")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List available templates
    Templates,

    /// Render an invoice record (JSON) into a resolved document (JSON)
    Render {
        /// Record file, or `-` for stdin
        input: PathBuf,

        /// Template id (falls back to the record's template, then `standard`)
        #[arg(long, short)]
        template: Option<String>,

        /// Write the document to a file instead of stdout
        #[arg(long, short, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,

        /// Render date (YYYY-MM-DD) used for missing issue/due dates
        #[arg(long, value_parser = parse_date)]
        date: Option<NaiveDate>,

        /// Engine-wide defaults (JSON)
        #[arg(long, value_name = "FILE")]
        defaults: Option<PathBuf>,
    },

    /// Suggest a template and tax rate from saved records
    Suggest {
        /// Record files (oldest first)
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Start the HTTP API server
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "127.0.0.1:8080")]
        listen: String,

        /// Engine-wide defaults (JSON)
        #[arg(long, value_name = "FILE")]
        defaults: Option<PathBuf>,
    },
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| format!("expected YYYY-MM-DD: {}", e))
}

fn main() {
    init_tracing();
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("vellum=info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run() -> Result<(), VellumError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Templates => {
            let engine = Engine::builtin()?;
            println!("Available templates:");
            for template in engine.registry().iter() {
                println!("  {:<14} {} ({})", template.id, template.name, template.industry);
            }
        }

        Commands::Render {
            input,
            template,
            output,
            pretty,
            date,
            defaults,
        } => {
            let engine = build_engine(defaults.as_deref())?;
            let record: InvoiceRecord = serde_json::from_str(&read_input(&input)?)?;

            let template_id = template
                .or_else(|| record.template.clone())
                .unwrap_or_else(|| vellum::template::GENERIC_TEMPLATE.to_string());
            let document = match date {
                Some(date) => engine.render_on(&record, &template_id, date)?,
                None => engine.render(&record, &template_id)?,
            };

            let json = if pretty {
                serde_json::to_string_pretty(&document)?
            } else {
                serde_json::to_string(&document)?
            };

            match output {
                Some(path) => {
                    std::fs::write(&path, json + "\n")?;
                    tracing::info!(template = %document.template.id, path = %path.display(), "Document written");
                }
                None => println!("{}", json),
            }
        }

        Commands::Suggest { files } => {
            let engine = Engine::builtin()?;
            let records = files
                .iter()
                .map(|path| -> Result<InvoiceRecord, VellumError> {
                    Ok(serde_json::from_str(&read_input(path)?)?)
                })
                .collect::<Result<Vec<_>, _>>()?;

            let suggestions = suggest::suggest(&records, engine.registry());
            println!("{}", serde_json::to_string_pretty(&suggestions)?);
        }

        Commands::Serve { listen, defaults } => {
            let engine = build_engine(defaults.as_deref())?;
            let config = ServerConfig {
                listen_addr: listen,
            };
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(server::serve(config, engine))?;
        }
    }

    Ok(())
}

fn build_engine(defaults: Option<&Path>) -> Result<Engine, VellumError> {
    match defaults {
        Some(path) => Engine::with_defaults(EngineDefaults::from_json_file(path)?),
        None => Engine::builtin(),
    }
}

/// Read a file, or stdin for `-`.
fn read_input(path: &Path) -> Result<String, VellumError> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        Ok(std::fs::read_to_string(path)?)
    }
}
