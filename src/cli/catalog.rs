use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::catalog::store::CertificateCatalog;
use crate::cli::OutputFormat;
use crate::core::types::CertificateId;

#[derive(Args)]
pub struct CatalogArgs {
    /// Path to a catalog JSON file (defaults to the embedded catalog)
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CatalogCommands,
}

#[derive(Subcommand)]
pub enum CatalogCommands {
    /// List all certificates
    List,

    /// Show one certificate with its materials
    Show {
        /// Certificate id
        id: String,
    },

    /// Export the catalog as JSON to stdout or a file
    Export {
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

pub fn run(args: CatalogArgs, format: OutputFormat, _verbose: bool) -> anyhow::Result<()> {
    let catalog = if let Some(path) = &args.catalog {
        CertificateCatalog::load_from_file(path)?
    } else {
        CertificateCatalog::load_embedded()?
    };

    match args.command {
        CatalogCommands::List => list(&catalog, format)?,
        CatalogCommands::Show { id } => show(&catalog, &id, format)?,
        CatalogCommands::Export { output } => export(&catalog, output.as_deref())?,
    }

    Ok(())
}

fn list(catalog: &CertificateCatalog, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            for cert in &catalog.certificates {
                println!(
                    "{}\t{}\t{} materials",
                    cert.id,
                    cert.number,
                    cert.materials.len()
                );
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&catalog.certificates)?);
        }
    }
    Ok(())
}

fn show(catalog: &CertificateCatalog, id: &str, format: OutputFormat) -> anyhow::Result<()> {
    let cert = catalog
        .get(&CertificateId::new(id))
        .ok_or_else(|| anyhow::anyhow!("Certificate '{id}' not found in catalog"))?;

    match format {
        OutputFormat::Text => {
            println!("Id:          {}", cert.id);
            println!("Number:      {}", cert.number);
            match &cert.valid_until {
                Some(date) => println!("Valid until: {date}"),
                None => println!("Valid until: -"),
            }
            println!("Materials:");
            for material in &cert.materials {
                println!("  - {material}");
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(cert)?);
        }
    }
    Ok(())
}

fn export(catalog: &CertificateCatalog, output: Option<&std::path::Path>) -> anyhow::Result<()> {
    let json = catalog.to_json()?;
    match output {
        Some(path) => std::fs::write(path, json)?,
        None => println!("{json}"),
    }
    Ok(())
}
