use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::types::CertificateId;

/// A certificate record from the catalog.
///
/// Immutable for the duration of a search call: the matching engine only
/// ever borrows these, all mutation belongs to the catalog owner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CertificateRecord {
    /// Unique identifier
    pub id: CertificateId,

    /// Display number of the certificate. Doubles as secondary match
    /// context: users sometimes type part of the number instead of a
    /// material name.
    pub number: String,

    /// Expiry date, display-only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<NaiveDate>,

    /// Material descriptions covered by this certificate, in catalog order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub materials: Vec<String>,
}

impl CertificateRecord {
    pub fn new(id: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            id: CertificateId::new(id),
            number: number.into(),
            valid_until: None,
            materials: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_materials(mut self, materials: Vec<String>) -> Self {
        self.materials = materials;
        self
    }

    #[must_use]
    pub fn with_valid_until(mut self, date: NaiveDate) -> Self {
        self.valid_until = Some(date);
        self
    }
}
