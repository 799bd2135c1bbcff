//! Domain layer for Regra
//!
//! Architecture: Domain Model - Pure error vocabulary for business-rule enforcement
//! - Contains the business-violation error type and the crate-wide error enum
//! - Independent of infrastructure concerns like databases, file systems, or external APIs
//! - Expresses the ubiquitous language of business-rule validation

pub mod error;

// Re-export main domain types for convenience
pub use error::*;
