use serde::{Deserialize, Serialize};

/// Unique identifier for a certificate in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CertificateId(pub String);

impl CertificateId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }
}

impl std::fmt::Display for CertificateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What an empty (or whitespace-only) query should return.
///
/// The two interactive consumers disagree on this, so the contract is an
/// explicit parameter rather than a single hard-coded behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryMode {
    /// An empty query returns every material of every certificate,
    /// unscored, in catalog order. Used for "browse all" views.
    Unfiltered,
    /// An empty query returns no results. Used for live-typing
    /// suggestion lists.
    Empty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_certificate_id_display() {
        let id = CertificateId::new("cert-042");
        assert_eq!(id.to_string(), "cert-042");
    }

    #[test]
    fn test_query_mode_serde() {
        let json = serde_json::to_string(&QueryMode::Unfiltered).unwrap();
        assert_eq!(json, "\"unfiltered\"");
        let mode: QueryMode = serde_json::from_str("\"empty\"").unwrap();
        assert_eq!(mode, QueryMode::Empty);
    }
}
