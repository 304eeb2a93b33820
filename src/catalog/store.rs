use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;
use tracing::warn;

use crate::core::certificate::CertificateRecord;
use crate::core::types::CertificateId;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Duplicate certificate id: {0}")]
    DuplicateId(String),
}

/// Catalog version for compatibility checking
pub const CATALOG_VERSION: &str = "1.0.0";

/// Serializable catalog format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogData {
    pub version: String,
    pub created_at: String,
    pub certificates: Vec<CertificateRecord>,
}

/// The certificate catalog, indexed by certificate id.
///
/// The vec preserves ingestion order, which is the tie-break order for all
/// ranked search results.
#[derive(Debug)]
pub struct CertificateCatalog {
    /// All certificates, in ingestion order
    pub certificates: Vec<CertificateRecord>,

    /// Index: certificate ID -> index in certificates vec
    id_to_index: HashMap<CertificateId, usize>,
}

impl CertificateCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self {
            certificates: Vec::new(),
            id_to_index: HashMap::new(),
        }
    }

    /// Load the embedded default catalog
    pub fn load_embedded() -> Result<Self, CatalogError> {
        // Embedded at compile time, validated by build.rs
        const EMBEDDED_CATALOG: &str = include_str!("../../catalogs/sample_certificates.json");
        Self::from_json(EMBEDDED_CATALOG)
    }

    /// Load catalog from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse catalog from JSON string
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let data: CatalogData = serde_json::from_str(json)?;

        // Version check (warn but don't fail)
        if data.version != CATALOG_VERSION {
            warn!(
                expected = CATALOG_VERSION,
                found = %data.version,
                "catalog version mismatch"
            );
        }

        let mut catalog = Self::new();
        for certificate in data.certificates {
            catalog.add_certificate(certificate)?;
        }

        Ok(catalog)
    }

    /// Add a certificate to the catalog.
    ///
    /// Certificate ids must be unique across the catalog.
    pub fn add_certificate(&mut self, certificate: CertificateRecord) -> Result<(), CatalogError> {
        if self.id_to_index.contains_key(&certificate.id) {
            return Err(CatalogError::DuplicateId(certificate.id.to_string()));
        }

        let index = self.certificates.len();
        self.id_to_index.insert(certificate.id.clone(), index);
        self.certificates.push(certificate);
        Ok(())
    }

    /// Get a certificate by ID
    pub fn get(&self, id: &CertificateId) -> Option<&CertificateRecord> {
        self.id_to_index
            .get(id)
            .map(|&idx| &self.certificates[idx])
    }

    /// Export catalog to JSON
    pub fn to_json(&self) -> Result<String, CatalogError> {
        let data = CatalogData {
            version: CATALOG_VERSION.to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            certificates: self.certificates.clone(),
        };
        Ok(serde_json::to_string_pretty(&data)?)
    }

    /// Total number of material entries across all certificates
    pub fn material_count(&self) -> usize {
        self.certificates.iter().map(|c| c.materials.len()).sum()
    }

    /// Number of certificates in catalog
    pub fn len(&self) -> usize {
        self.certificates.len()
    }

    /// Check if catalog is empty
    pub fn is_empty(&self) -> bool {
        self.certificates.is_empty()
    }
}

impl Default for CertificateCatalog {
    fn default() -> Self {
        Self::new()
    }
}
