//! # cert-matcher
//!
//! A library for fuzzy material search over a catalog of construction
//! certificate records.
//!
//! Inspection-act editors hold certificates that each cover a list of
//! material descriptions. When a user types free text, the exact wording
//! rarely matches the catalog: typos, partial words, reordered words, and
//! queries that are really part of a certificate number all occur.
//!
//! `cert-matcher` ranks candidate materials for such queries, groups them
//! by owning certificate, and computes character-level highlight runs for
//! display.
//!
//! ## Example
//!
//! ```rust,no_run
//! use cert_matcher::{CertificateCatalog, QueryMode, search};
//!
//! // Load the embedded sample catalog
//! let catalog = CertificateCatalog::load_embedded().unwrap();
//!
//! // Find matching materials, at most 10 certificate groups
//! let results = search(&catalog, "цемент м500", QueryMode::Empty, Some(10));
//!
//! for group in results {
//!     println!("{} (best {})", group.certificate.number, group.best_score);
//!     for item in &group.items {
//!         println!("  {} [{}]", item.text, item.score);
//!     }
//! }
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: Certificate catalog storage and indexing
//! - [`core`]: Core data types for certificates and queries
//! - [`matching`]: Matching engine, scoring, and highlight computation
//! - [`cli`]: Command-line interface implementation

pub mod catalog;
pub mod cli;
pub mod core;
pub mod matching;

// Re-export commonly used types for convenience
pub use catalog::store::CertificateCatalog;
pub use core::certificate::CertificateRecord;
pub use core::types::{CertificateId, QueryMode};
pub use matching::engine::{search, GroupedResult, SearchConfig, SearchEngine};
pub use matching::highlight::{highlight, HighlightRun};
pub use matching::scoring::MaterialMatch;
