//! Conditional dispatch for business-rule validation
//!
//! Architecture: Declarative Guard Clauses - a uniform vocabulary replacing scattered
//! `if`/`return Err` blocks in business logic
//! - Presence checks branch on `Option`; predicate checks branch on a caller-supplied condition
//! - Outcomes are either a caller-supplied action or an `Err(Violation)` with a lazy message
//! - Every operation is a pure, synchronous, single-evaluation branch with no state
//!
//! Only the branch itself lives here. The value under test is never validated
//! beyond presence or the given predicate, and errors raised by a callback
//! propagate unchanged.

use crate::domain::error::{RegraResult, Violation};

/// Invoke `action` with the inner value if `value` is present.
///
/// ```
/// use regra::check;
///
/// let mut seen = None;
/// check::when_present(Some(42), |v| seen = Some(v));
/// assert_eq!(seen, Some(42));
/// ```
pub fn when_present<T>(value: Option<T>, action: impl FnOnce(T)) {
    if let Some(inner) = value {
        action(inner);
    }
}

/// Invoke `action` if `value` is absent.
pub fn when_absent<T>(value: Option<T>, action: impl FnOnce()) {
    if value.is_none() {
        action();
    }
}

/// Err with a [`Violation`] if `value` is present; Ok otherwise.
///
/// The message closure is evaluated only on failure.
pub fn ensure_absent<T>(
    value: &Option<T>,
    message: impl FnOnce() -> String,
) -> RegraResult<()> {
    match value {
        Some(_) => {
            let violation = Violation::new(message());
            tracing::debug!("value present where forbidden: {violation}");
            Err(violation.into())
        }
        None => Ok(()),
    }
}

/// Err with a [`Violation`] if `value` is absent; Ok with the inner value otherwise.
///
/// Returning the unwrapped value lets callers continue with it directly:
///
/// ```
/// use regra::check;
///
/// fn lookup(id: u32) -> Option<&'static str> {
///     (id == 1).then_some("alice")
/// }
///
/// # fn run() -> regra::RegraResult<()> {
/// let name = check::ensure_present(lookup(1), || "customer not found".into())?;
/// assert_eq!(name, "alice");
/// # Ok(())
/// # }
/// # run().unwrap();
/// ```
pub fn ensure_present<T>(
    value: Option<T>,
    message: impl FnOnce() -> String,
) -> RegraResult<T> {
    match value {
        Some(inner) => Ok(inner),
        None => {
            let violation = Violation::new(message());
            tracing::debug!("value absent where required: {violation}");
            Err(violation.into())
        }
    }
}

/// Invoke `action` with `value` if `condition(&value)` is true.
pub fn when_true<T>(value: T, condition: impl FnOnce(&T) -> bool, action: impl FnOnce(T)) {
    if condition(&value) {
        action(value);
    }
}

/// Invoke `action` with `value` if `condition(&value)` is false.
pub fn when_false<T>(value: T, condition: impl FnOnce(&T) -> bool, action: impl FnOnce(T)) {
    if !condition(&value) {
        action(value);
    }
}

/// Invoke `action` with both values if `condition(&a, &b)` is true.
pub fn when_true_pair<T, U>(
    a: T,
    b: U,
    condition: impl FnOnce(&T, &U) -> bool,
    action: impl FnOnce(T, U),
) {
    if condition(&a, &b) {
        action(a, b);
    }
}

/// Invoke `action` with both values if `condition(&a, &b)` is false.
pub fn when_false_pair<T, U>(
    a: T,
    b: U,
    condition: impl FnOnce(&T, &U) -> bool,
    action: impl FnOnce(T, U),
) {
    if !condition(&a, &b) {
        action(a, b);
    }
}

/// Err with a [`Violation`] if `condition(value)` is true; Ok otherwise.
///
/// ```
/// use regra::check;
///
/// let result = check::fail_when_true(&-5, |n| *n < 0, || "amount must not be negative".into());
/// assert!(result.is_err());
/// ```
pub fn fail_when_true<T>(
    value: &T,
    condition: impl FnOnce(&T) -> bool,
    message: impl FnOnce() -> String,
) -> RegraResult<()> {
    if condition(value) {
        let violation = Violation::new(message());
        tracing::debug!("business rule violated: {violation}");
        return Err(violation.into());
    }
    Ok(())
}

/// Err with a [`Violation`] if `condition(value)` is false; Ok otherwise.
pub fn fail_when_false<T>(
    value: &T,
    condition: impl FnOnce(&T) -> bool,
    message: impl FnOnce() -> String,
) -> RegraResult<()> {
    if !condition(value) {
        let violation = Violation::new(message());
        tracing::debug!("business rule violated: {violation}");
        return Err(violation.into());
    }
    Ok(())
}
