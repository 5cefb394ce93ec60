//! cds2ts command-line interface
//!
//! Converts a compiled CDS model (`cds compile --to csn`) into TypeScript
//! declarations.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use cds2ts::prelude::*;
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Convert CDS models to TypeScript type declarations
#[derive(Parser, Debug)]
#[command(name = "cds2ts")]
#[command(author, version, about, long_about = None, arg_required_else_help = true)]
struct Cli {
    /// CSN file to convert (output of `cds compile --to csn`)
    #[arg(short, long, value_name = "FILE.json")]
    cds: PathBuf,

    /// Output location: a `.ts` file, or a directory. Prints to stdout if absent
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Interface prefix
    #[arg(short, long, value_name = "I", default_value = "")]
    prefix: String,

    /// Write one file per definition into the output directory
    #[arg(long, requires = "output")]
    split: bool,

    /// Add an `Entity` enum mapping entity names to model names
    #[arg(long)]
    entity_index: bool,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn config(&self) -> GeneratorConfig {
        let mode = if self.split {
            OutputMode::PerDefinition
        } else {
            OutputMode::Single
        };
        GeneratorConfig::new()
            .prefix(self.prefix.as_str())
            .output_mode(mode)
            .entity_index(self.entity_index)
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    tracing::info!("Converting {}", cli.cds.display());
    let documents = generate_from_file(&cli.cds, cli.config())
        .with_context(|| format!("failed to convert {}", cli.cds.display()))?;

    match &cli.output {
        Some(path) => {
            let written = write_documents(&documents, path)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!("Generated {} file(s)", written.len());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            for document in &documents {
                stdout.write_all(document.content.as_bytes())?;
            }
        }
    }

    Ok(())
}
