//! Pure configuration validation.
//!
//! Configuration types implement [`Validate`] and callers check
//! [`Validate::validate`] explicitly before asking for geometry; nothing is
//! validated implicitly inside constructors and nothing is printed.

use thiserror::Error;

/// One or more configuration invariants were violated.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid configuration: {}", violations.join("; "))]
pub struct ValidationError {
    pub violations: Vec<String>,
}

/// A configuration that can report the invariants it violates.
pub trait Validate {
    /// Human-readable descriptions of every violated invariant; empty when
    /// the configuration is usable.
    fn violations(&self) -> Vec<String>;

    /// `Err` carrying all violations when any invariant fails.
    fn validate(&self) -> Result<(), ValidationError> {
        let violations = self.violations();
        if violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { violations })
        }
    }
}
