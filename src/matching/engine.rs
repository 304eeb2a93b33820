use serde::Serialize;
use tracing::debug;

use crate::catalog::store::CertificateCatalog;
use crate::core::certificate::CertificateRecord;
use crate::core::types::QueryMode;
use crate::matching::distance::DistanceCache;
use crate::matching::scoring::{score_material, MaterialMatch};
use crate::matching::token::{normalize, tokenize};

/// Default cap on the number of result groups, sized for interactive
/// suggestion lists
pub const DEFAULT_GROUP_CAP: usize = 10;

/// All matches of one certificate, collapsed into a ranked unit
#[derive(Debug, Clone, Serialize)]
pub struct GroupedResult {
    /// The owning certificate
    pub certificate: CertificateRecord,

    /// Matched materials, sorted ascending by score
    pub items: Vec<MaterialMatch>,

    /// Minimum score across items
    pub best_score: i32,
}

/// Configuration for the search engine
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Empty-query behavior
    pub mode: QueryMode,
    /// Cap on result groups, applied after sorting; `None` means unlimited.
    /// Never applied to the unfiltered browse-all path.
    pub cap: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            mode: QueryMode::Empty,
            cap: Some(DEFAULT_GROUP_CAP),
        }
    }
}

/// The material search engine.
///
/// Borrows the catalog as a read-only snapshot; holds no state between
/// calls, so every search is a pure function of `(catalog, query)`.
pub struct SearchEngine<'a> {
    catalog: &'a CertificateCatalog,
    config: SearchConfig,
}

impl<'a> SearchEngine<'a> {
    /// Create a new engine with default configuration
    pub fn new(catalog: &'a CertificateCatalog) -> Self {
        Self {
            catalog,
            config: SearchConfig::default(),
        }
    }

    /// Create a new engine with custom configuration
    pub fn with_config(catalog: &'a CertificateCatalog, config: SearchConfig) -> Self {
        Self { catalog, config }
    }

    /// Find and rank material matches for a query, grouped by certificate.
    ///
    /// Groups are sorted ascending by best score, items within a group
    /// ascending by score; both sorts are stable, so ties keep catalog
    /// encounter order.
    pub fn search(&self, query: &str) -> Vec<GroupedResult> {
        let tokens = tokenize(query);
        if tokens.is_empty() {
            return match self.config.mode {
                QueryMode::Empty => Vec::new(),
                QueryMode::Unfiltered => self.browse_all(),
            };
        }

        debug!(query, token_count = tokens.len(), "scoring catalog");

        let mut cache = DistanceCache::new();
        let mut groups: Vec<GroupedResult> = Vec::new();

        for cert in &self.catalog.certificates {
            let number_lower = normalize(&cert.number);

            let mut items: Vec<MaterialMatch> = cert
                .materials
                .iter()
                .filter_map(|material| {
                    score_material(&tokens, material, &number_lower, &cert.id, &mut cache)
                })
                .collect();

            if items.is_empty() {
                continue;
            }

            items.sort_by_key(|item| item.score);
            let best_score = items[0].score;

            groups.push(GroupedResult {
                certificate: cert.clone(),
                items,
                best_score,
            });
        }

        groups.sort_by_key(|group| group.best_score);

        if let Some(cap) = self.config.cap {
            groups.truncate(cap);
        }

        groups
    }

    /// Browse-all path: every material of every certificate, unscored, in
    /// catalog order and without a cap. Certificates with no materials
    /// contribute nothing.
    fn browse_all(&self) -> Vec<GroupedResult> {
        self.catalog
            .certificates
            .iter()
            .filter(|cert| !cert.materials.is_empty())
            .map(|cert| GroupedResult {
                certificate: cert.clone(),
                items: cert
                    .materials
                    .iter()
                    .map(|material| MaterialMatch {
                        certificate_id: cert.id.clone(),
                        text: material.clone(),
                        score: 0,
                        approximate: false,
                    })
                    .collect(),
                best_score: 0,
            })
            .collect()
    }
}

/// Convenience wrapper over [`SearchEngine`] for one-off searches
pub fn search(
    catalog: &CertificateCatalog,
    query: &str,
    mode: QueryMode,
    cap: Option<usize>,
) -> Vec<GroupedResult> {
    SearchEngine::with_config(catalog, SearchConfig { mode, cap }).search(query)
}
