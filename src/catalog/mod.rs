//! Certificate catalog storage and indexing.
//!
//! The catalog holds certificate records with their numbers, expiry dates,
//! and material descriptions. An embedded sample catalog is compiled into
//! the binary, but catalogs are normally loaded from JSON files.
//!
//! ## Example
//!
//! ```rust,no_run
//! use cert_matcher::CertificateCatalog;
//! use cert_matcher::core::types::CertificateId;
//!
//! // Load embedded catalog
//! let catalog = CertificateCatalog::load_embedded().unwrap();
//!
//! // List all certificates
//! for cert in &catalog.certificates {
//!     println!("{}: {}", cert.id, cert.number);
//! }
//!
//! // Get a specific certificate
//! let cert = catalog.get(&CertificateId::new("cert-001"));
//! ```
//!
//! Catalogs are treated as read-only snapshots by the matching engine; the
//! caller owns mutation and re-runs searches after changes.

pub mod store;

pub use store::{CatalogError, CertificateCatalog};
