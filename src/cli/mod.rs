//! Command-line interface for cert-matcher.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **search**: Rank catalog materials against a free-text query
//! - **catalog**: List, show, or export certificates from the catalog
//!
//! ## Usage
//!
//! ```text
//! # Search the embedded sample catalog
//! cert-matcher search "цемент м500"
//!
//! # Search a custom catalog, JSON output for scripting
//! cert-matcher search "кирпич" --catalog certs.json --format json
//!
//! # Browse everything (empty-query unfiltered mode)
//! cert-matcher search "" --all
//!
//! # Inspect the catalog
//! cert-matcher catalog list
//! cert-matcher catalog show cert-001
//! cert-matcher catalog export > certs.json
//! ```

use clap::{Parser, Subcommand};

pub mod catalog;
pub mod search;

#[derive(Parser)]
#[command(name = "cert-matcher")]
#[command(version)]
#[command(about = "Fuzzy material search over a catalog of construction certificates")]
#[command(
    long_about = "cert-matcher ranks material entries from certificate records against free-text queries.\n\nIt tolerates typos, partial words, and reordered words, also matches against certificate numbers, and groups ranked results by owning certificate."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search materials across the certificate catalog
    Search(search::SearchArgs),

    /// Manage the certificate catalog
    Catalog(catalog::CatalogArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
