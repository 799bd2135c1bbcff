//! Regra - business-rule validation dispatch and utilities for business applications
//!
//! Architecture: Clean Architecture - Library interface serves as the application layer
//! - Pure domain error vocabulary separated from the helper facades that use it
//! - Validation dispatch expresses "do X only if condition holds, otherwise fail"
//!   without scattering `if`/`return Err` blocks through business logic
//! - Supporting helpers (dates, enums, collections) are thin delegations to
//!   chrono, strum, and the iterator/rayon machinery
//!
//! ```
//! use regra::{check, RegraResult};
//!
//! struct Order {
//!     id: u32,
//!     total_cents: i64,
//! }
//!
//! fn approve(order: &Order, credit_cents: i64) -> RegraResult<()> {
//!     check::fail_when_true(&order.total_cents, |t| *t <= 0, || {
//!         format!("order {} has nothing to approve", order.id)
//!     })?;
//!     check::fail_when_false(&order.total_cents, |t| *t <= credit_cents, || {
//!         format!("order {} exceeds available credit", order.id)
//!     })?;
//!     Ok(())
//! }
//!
//! let order = Order { id: 7, total_cents: 1_500 };
//! assert!(approve(&order, 2_000).is_ok());
//! assert!(approve(&order, 1_000).unwrap_err().is_violation());
//! ```

pub mod check;
pub mod collections;
pub mod datetime;
pub mod domain;
pub mod enums;

// Re-export main types for convenient access
pub use domain::error::{Cause, RegraError, RegraResult, Violation};

pub use datetime::{DateStyle, DateTimeStyle};
