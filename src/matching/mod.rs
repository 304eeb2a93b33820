//! Material matching engine and scoring algorithms.
//!
//! This module provides the core matching functionality:
//!
//! - [`SearchEngine`]: Main entry point for ranked, grouped material search
//! - [`MaterialMatch`] / [`GroupedResult`]: Ranked search output
//! - [`highlight`]: LCS-based emphasis runs for rendering matched text
//!
//! ## Matching Algorithm
//!
//! Each query token is scored against each material independently, and all
//! tokens must match for a material to qualify:
//!
//! 1. **Word-boundary prefix**: token at the start of a word scores -10
//! 2. **Substring**: token anywhere else in the material scores 0
//! 3. **Number context**: token inside the certificate number scores 5
//! 4. **Fuzzy fallback**: edit distance against each material word within
//!    an adaptive threshold scores `10 + distance`
//!
//! Lower is better; per-token scores sum into the material's aggregate.
//! Matches are grouped by owning certificate and both levels are sorted
//! ascending with stable tie-breaks.
//!
//! ## Example
//!
//! ```rust,no_run
//! use cert_matcher::{CertificateCatalog, SearchEngine};
//! use cert_matcher::matching::highlight::highlight;
//!
//! let catalog = CertificateCatalog::load_embedded().unwrap();
//! let engine = SearchEngine::new(&catalog);
//!
//! for group in engine.search("цемент м500") {
//!     println!("{} (best {})", group.certificate.number, group.best_score);
//!     for item in &group.items {
//!         for run in highlight(&item.text, "цемент м500") {
//!             // render emphasized when run.highlighted
//!             print!("{}", run.text);
//!         }
//!         println!();
//!     }
//! }
//! ```

pub mod distance;
pub mod engine;
pub mod highlight;
pub mod scoring;
pub mod token;

pub use engine::{search, GroupedResult, SearchConfig, SearchEngine};
pub use highlight::{highlight, HighlightRun};
pub use scoring::MaterialMatch;
