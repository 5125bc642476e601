mod docs;
mod index;
mod output;
mod utils;
mod validate;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sidx")]
#[command(about = "Terminal-first toolkit for static documentation search indexes")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate an index file's referential consistency
    Check {
        /// Path to searchindex.js (or a bare JSON index)
        path: PathBuf,

        /// Treat warnings as errors
        #[arg(short, long)]
        strict: bool,
    },
    /// Show index statistics
    Stats {
        /// Path to searchindex.js (or a bare JSON index)
        path: PathBuf,
    },
    /// Build an index from a documentation source tree
    Build {
        /// Source directory containing .rst/.md/.txt documents
        #[arg(default_value = ".")]
        source: PathBuf,

        /// Output file
        #[arg(short, long, default_value = "searchindex.js")]
        output: PathBuf,

        /// Emit bare JSON instead of the Search.setIndex wrapper
        #[arg(long)]
        json: bool,

        /// Pretty-print JSON output (implies --json)
        #[arg(long)]
        pretty: bool,
    },
    /// Re-emit an index as normalized pretty JSON on stdout
    Dump {
        /// Path to searchindex.js (or a bare JSON index)
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let color = !cli.no_color;

    match cli.command {
        Commands::Check { path, strict } => {
            let ix = index::load_index(&path)?;
            let report = validate::validate(&ix);
            output::print_report(&path, &report, color)?;

            let failed = !report.is_ok() || (strict && report.warning_count() > 0);
            if failed {
                std::process::exit(1);
            }
        }
        Commands::Stats { path } => {
            index::stats::show_stats(&path)?;
        }
        Commands::Build {
            source,
            output,
            json,
            pretty,
        } => {
            let ix = index::build_index(&source)?;
            if json || pretty {
                index::write_json(&ix, &output, pretty)?;
            } else {
                index::write_js(&ix, &output)?;
            }
            println!(
                "Indexed {} documents, {} terms -> {}",
                ix.doc_count(),
                ix.terms.len(),
                output.display()
            );
        }
        Commands::Dump { path } => {
            let ix = index::load_index(&path)?;
            println!("{}", index::to_json_string(&ix, true)?);
        }
    }

    Ok(())
}
