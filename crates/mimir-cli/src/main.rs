//! Mimir Command-Line Interface
//!
//! The main entry point for the Mimir CLI tool.

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{resources, search, version};

/// Mimir - quantum memory lookup and Grover search circuits
#[derive(Parser)]
#[command(name = "mimir")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the search circuit for a lookup table, run it, and report
    Search {
        /// Lookup table contents as a bit literal, e.g. 1010
        #[arg(short, long, default_value = "1010")]
        data: String,

        /// Stored value to search for (0 or 1)
        #[arg(short, long, default_value = "1")]
        target: String,

        /// Number of shots
        #[arg(short, long, default_value = "4000")]
        shots: u32,

        /// Directory for rendered circuits and the histogram
        #[arg(short, long, default_value = "figures")]
        out_dir: String,

        /// Print the result summary as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Report qubit count, depth, and gate counts without running
    Resources {
        /// Lookup table contents as a bit literal, e.g. 1010
        #[arg(short, long, default_value = "1010")]
        data: String,

        /// Stored value to search for (0 or 1)
        #[arg(short, long, default_value = "1")]
        target: String,
    },

    /// Show version information
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    // Execute command
    let result = match cli.command {
        Commands::Search {
            data,
            target,
            shots,
            out_dir,
            json,
        } => search::execute(&data, &target, shots, &out_dir, json),

        Commands::Resources { data, target } => resources::execute(&data, &target),

        Commands::Version => {
            version::execute();
            Ok(())
        }
    };

    // Handle errors
    if let Err(e) = result {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
