use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use crate::catalog::store::CertificateCatalog;
use crate::cli::OutputFormat;
use crate::core::types::QueryMode;
use crate::matching::engine::{search, GroupedResult, DEFAULT_GROUP_CAP};
use crate::matching::highlight::{highlight, HighlightRun};

#[derive(Args)]
pub struct SearchArgs {
    /// Free-text query; matched against material descriptions and
    /// certificate numbers
    pub query: String,

    /// Path to a catalog JSON file (defaults to the embedded catalog)
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Browse mode: an empty query lists the whole catalog, and no group
    /// cap is applied
    #[arg(long)]
    pub all: bool,

    /// Maximum number of certificate groups to return
    #[arg(short, long)]
    pub limit: Option<usize>,
}

#[derive(Serialize)]
struct ItemOutput {
    text: String,
    score: i32,
    approximate: bool,
    highlight: Vec<HighlightRun>,
}

#[derive(Serialize)]
struct GroupOutput {
    certificate_id: String,
    number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    valid_until: Option<String>,
    best_score: i32,
    items: Vec<ItemOutput>,
}

pub fn run(args: SearchArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let catalog = if let Some(path) = &args.catalog {
        CertificateCatalog::load_from_file(path)?
    } else {
        CertificateCatalog::load_embedded()?
    };

    if verbose {
        eprintln!(
            "Catalog: {} certificates, {} materials",
            catalog.len(),
            catalog.material_count()
        );
    }

    let (mode, cap) = if args.all {
        (QueryMode::Unfiltered, None)
    } else {
        (
            QueryMode::Empty,
            Some(args.limit.unwrap_or(DEFAULT_GROUP_CAP)),
        )
    };

    let results = search(&catalog, &args.query, mode, cap);

    match format {
        OutputFormat::Text => print_text(&results, verbose),
        OutputFormat::Json => print_json(&results, &args.query)?,
    }

    Ok(())
}

fn print_text(results: &[GroupedResult], verbose: bool) {
    if results.is_empty() {
        println!("No matches.");
        return;
    }

    for group in results {
        match &group.certificate.valid_until {
            Some(date) => println!("{} (valid until {date})", group.certificate.number),
            None => println!("{}", group.certificate.number),
        }
        for item in &group.items {
            let marker = if item.approximate { "~" } else { " " };
            if verbose {
                println!("  {marker} [{:>4}] {}", item.score, item.text);
            } else {
                println!("  {marker} {}", item.text);
            }
        }
    }
}

fn print_json(results: &[GroupedResult], query: &str) -> anyhow::Result<()> {
    let output: Vec<GroupOutput> = results
        .iter()
        .map(|group| GroupOutput {
            certificate_id: group.certificate.id.to_string(),
            number: group.certificate.number.clone(),
            valid_until: group.certificate.valid_until.map(|d| d.to_string()),
            best_score: group.best_score,
            items: group
                .items
                .iter()
                .map(|item| ItemOutput {
                    text: item.text.clone(),
                    score: item.score,
                    approximate: item.approximate,
                    highlight: highlight(&item.text, query),
                })
                .collect(),
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
