//! Core error types for business-rule validation
//!
//! Architecture: Rich Domain Models - Violations are values with behavior, not just data
//! - A `Violation` signals that input failed a domain validation rule
//! - `RegraError` separates rule failures from caller programming defects
//! - Both propagate through ordinary `Result` plumbing; nothing here is retried or recovered

use std::error::Error as StdError;
use std::fmt;

/// Boxed lower-level error a [`Violation`] may wrap as its cause.
pub type Cause = Box<dyn StdError + Send + Sync + 'static>;

/// A detected business-rule failure.
///
/// Carries an optional human-readable message and an optional wrapped
/// lower-level cause. Constructed at the point a rule fails and propagated
/// unchanged to whatever boundary chooses to report it.
#[derive(Debug, Default)]
pub struct Violation {
    message: Option<String>,
    cause: Option<Cause>,
}

impl Violation {
    /// Create a violation with a human-readable message
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: Some(message.into()), cause: None }
    }

    /// Create a violation with neither message nor cause
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a violation wrapping a lower-level error, with no message
    pub fn from_cause(cause: impl Into<Cause>) -> Self {
        Self { message: None, cause: Some(cause.into()) }
    }

    /// Attach a lower-level cause
    pub fn with_cause(mut self, cause: impl Into<Cause>) -> Self {
        self.cause = Some(cause.into());
        self
    }

    /// The human-readable message, if one was set
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// The wrapped lower-level error, if one was set
    pub fn cause(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    /// Construct a violation from a message and immediately return it as `Err`.
    ///
    /// Replacement for raise-at-the-point-of-detection control flow:
    ///
    /// ```
    /// use regra::Violation;
    ///
    /// fn approve(limit: u32, amount: u32) -> Result<(), Violation> {
    ///     if amount > limit {
    ///         return Violation::fail("amount exceeds approval limit");
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub fn fail<T>(message: impl Into<String>) -> Result<T, Violation> {
        let violation = Self::new(message);
        tracing::debug!("business rule violated: {violation}");
        Err(violation)
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.message.as_deref() {
            Some(message) => write!(f, "{message}"),
            None => write!(f, "business rule violated"),
        }
    }
}

impl StdError for Violation {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.cause.as_deref().map(|c| c as &(dyn StdError + 'static))
    }
}

/// Error types produced by Regra operations
#[derive(Debug, thiserror::Error)]
pub enum RegraError {
    /// A business rule was violated
    #[error(transparent)]
    Violation(#[from] Violation),

    /// A required argument was absent or invalid where the contract forbids it.
    /// This is a caller programming defect, not a business-rule failure.
    #[error("invalid argument '{name}': {message}")]
    InvalidArgument { name: &'static str, message: String },
}

impl RegraError {
    /// Create a violation error from a message
    pub fn violation(message: impl Into<String>) -> Self {
        Self::Violation(Violation::new(message))
    }

    /// Create an invalid-argument error
    pub fn invalid_argument(name: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidArgument { name, message: message.into() }
    }

    /// Whether this error is a business-rule violation
    pub fn is_violation(&self) -> bool {
        matches!(self, Self::Violation(_))
    }

    /// The underlying violation, if this error is one
    pub fn as_violation(&self) -> Option<&Violation> {
        match self {
            Self::Violation(v) => Some(v),
            _ => None,
        }
    }
}

/// Result type for Regra operations
pub type RegraResult<T> = Result<T, RegraError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_violation_with_message() {
        let violation = Violation::new("credit limit exceeded");

        assert_eq!(violation.message(), Some("credit limit exceeded"));
        assert!(violation.cause().is_none());
        assert_eq!(violation.to_string(), "credit limit exceeded");
    }

    #[test]
    fn test_violation_from_cause_only() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "ledger missing");
        let violation = Violation::from_cause(io_error);

        assert!(violation.message().is_none());
        assert!(violation.cause().is_some());
        assert_eq!(violation.to_string(), "business rule violated");
        assert_eq!(violation.source().unwrap().to_string(), "ledger missing");
    }

    #[test]
    fn test_violation_with_message_and_cause() {
        let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let violation = Violation::new("account unreadable").with_cause(io_error);

        assert_eq!(violation.message(), Some("account unreadable"));
        assert_eq!(violation.cause().unwrap().to_string(), "denied");
    }

    #[test]
    fn test_violation_empty() {
        let violation = Violation::empty();

        assert!(violation.message().is_none());
        assert!(violation.cause().is_none());
        assert!(violation.source().is_none());
    }

    #[test]
    fn test_fail_returns_err() {
        let result: Result<(), Violation> = Violation::fail("order already shipped");

        let violation = result.unwrap_err();
        assert_eq!(violation.message(), Some("order already shipped"));
    }

    #[test]
    fn test_regra_error_classification() {
        let violation = RegraError::violation("quota exhausted");
        assert!(violation.is_violation());
        assert_eq!(violation.as_violation().unwrap().message(), Some("quota exhausted"));

        let defect = RegraError::invalid_argument("local_date_time", "does not exist");
        assert!(!defect.is_violation());
        assert!(defect.as_violation().is_none());
        assert_eq!(
            defect.to_string(),
            "invalid argument 'local_date_time': does not exist"
        );
    }

    #[test]
    fn test_violation_converts_into_regra_error() {
        fn failing() -> RegraResult<()> {
            Violation::fail("stock depleted")?;
            Ok(())
        }

        let error = failing().unwrap_err();
        assert!(error.is_violation());
        assert_eq!(error.to_string(), "stock depleted");
    }
}
