//! Core data types for certificate material matching.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`CertificateRecord`]: A certificate with its number, expiry date, and
//!   covered material descriptions
//! - [`CertificateId`]: Opaque unique identifier for a certificate
//! - [`QueryMode`]: Empty-query contract selector
//!
//! Records are validated at the catalog ingestion boundary, so the matching
//! code can assume well-formed input and never narrows types defensively.

pub mod certificate;
pub mod types;

pub use certificate::CertificateRecord;
pub use types::{CertificateId, QueryMode};
