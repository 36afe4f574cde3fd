// Command-line interface
pub mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "assetlink")]
#[command(about = "Resolve image references into fully addressable URLs", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve a single image reference
    Resolve {
        /// Image reference (full URL, data URI, static asset, or relative path)
        reference: String,

        /// Override the configured base URL
        #[arg(long, env = "API_BASE_URL")]
        base_url: Option<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show how a reference would be classified
    Classify {
        /// Image reference to classify
        reference: String,
    },

    /// Resolve newline-delimited references from a file
    Batch {
        /// Input file, one reference per line
        #[arg(short, long)]
        input: String,

        /// Override the configured base URL
        #[arg(long, env = "API_BASE_URL")]
        base_url: Option<String>,
    },
}
