//! `jsontree` CLI: format, validate, query, and convert JSON from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Canonical compact form (stdin → stdout)
//! echo '{ "a" : [1, 2.50] }' | jsontree fmt
//!
//! # Format a file into another file
//! jsontree fmt -i data.json -o data.min.json
//!
//! # Validate with a tighter nesting limit
//! jsontree --max-depth 16 check -i data.json
//!
//! # Print the value at a dot path
//! jsontree get servers.0.host -i config.json
//!
//! # Convert the value at a path in place and print the document
//! jsontree convert --to string --path servers.0.port -i config.json
//!
//! # Tree statistics
//! jsontree stats -i data.json
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use jsontree_core::path::{lookup, lookup_mut};
use jsontree_core::{stringify, Document, JsonError, Kind, ParseOptions, TracingDiagnostics};
use std::io::{self, Read};
use tracing::Level;

#[derive(Parser)]
#[command(
    name = "jsontree",
    version,
    about = "Format, validate, query, and convert JSON"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Maximum container nesting accepted by the parser
    #[arg(long, global = true, value_name = "N")]
    max_depth: Option<usize>,

    /// Log debug events to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Rewrite JSON in canonical compact form
    Fmt {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Check that the input is valid JSON
    Check {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Print the value at a dot-separated path (e.g. `servers.0.host`)
    Get {
        /// Path to look up; empty for the root
        path: String,
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Convert the value at a path to another kind and print the document
    Convert {
        /// Target kind: null, bool, int, double, number, string, array, object
        #[arg(long, value_parser = parse_kind)]
        to: Kind,
        /// Path of the value to convert (the root if omitted)
        #[arg(long, default_value = "")]
        path: String,
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Show tree statistics (kind, node count, depth, sizes)
    Stats {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(if cli.verbose {
            Level::DEBUG
        } else {
            Level::WARN
        })
        .with_target(false)
        .init();

    let options = match cli.max_depth {
        Some(depth) => ParseOptions::with_max_depth(depth),
        None => ParseOptions::default(),
    };

    match cli.command {
        Commands::Fmt { input, output } => {
            let mut doc = load(input.as_deref(), options)?;
            emit(&mut doc, output.as_deref())?;
        }
        Commands::Check { input } => {
            load(input.as_deref(), options)?;
            println!("valid");
        }
        Commands::Get { path, input } => {
            let doc = load(input.as_deref(), options)?;
            let found = lookup(doc.content(), &path)
                .with_context(|| format!("Failed to look up path '{}'", path))?;
            println!("{}", found);
        }
        Commands::Convert {
            to,
            path,
            input,
            output,
        } => {
            let mut doc = load(input.as_deref(), options)?;
            let target = lookup_mut(doc.content_mut(), &path)
                .with_context(|| format!("Failed to look up path '{}'", path))?;
            target
                .convert_to(to)
                .with_context(|| format!("Failed to convert value to {}", to))?;
            emit(&mut doc, output.as_deref())?;
        }
        Commands::Stats { input } => {
            let doc = load(input.as_deref(), options)?;
            let value = doc.content();
            println!("Kind:       {}", value.kind());
            println!("Nodes:      {}", value.node_count());
            println!("Depth:      {}", value.depth());
            println!("Input size: {} bytes", doc.text().len());
            println!("Canonical:  {} bytes", stringify(value).len());
        }
    }

    Ok(())
}

fn parse_kind(name: &str) -> std::result::Result<Kind, String> {
    Kind::from_name(name).ok_or_else(|| {
        format!(
            "unknown kind '{}'. Available kinds: null, bool, int, double, number, string, array, object",
            name
        )
    })
}

/// Load from a file through [`Document::load_with`], or parse stdin when no path is given.
fn load(path: Option<&str>, options: ParseOptions) -> Result<Document> {
    let loaded = match path {
        Some(path) => Document::load_with(path, options, TracingDiagnostics),
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read from stdin")?;
            Document::from_text_with(text, options, TracingDiagnostics)
        }
    };
    loaded.map_err(|err| {
        let context = match (&err, path) {
            (JsonError::Io { .. }, Some(path)) => format!("Failed to read file: {}", path),
            _ => "Failed to parse JSON".to_string(),
        };
        anyhow::Error::new(err).context(context)
    })
}

/// Save the canonical text to `path`, or print it when no path is given.
fn emit(doc: &mut Document, path: Option<&str>) -> Result<()> {
    match path {
        Some(path) => doc
            .save(path)
            .with_context(|| format!("Failed to write file: {}", path)),
        None => {
            doc.sync();
            println!("{}", doc.text());
            Ok(())
        }
    }
}
