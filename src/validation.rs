//! Pre-flight validation for case rosters.
//!
//! Checks structural integrity of a roster before scheduling. Detects:
//! - Duplicate case IDs
//! - Empty identity fields (ID, surgeon, equipment)
//! - Durations below the bookable floor
//!
//! The engine itself never validates: it trusts its input and degrades
//! gracefully. Calling this gate first is the caller's choice.

use std::collections::HashSet;
use std::fmt;

use crate::models::{Case, MIN_CASE_MIN};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two cases share the same ID.
    DuplicateId,
    /// An identity field (ID, surgeon, equipment) is blank.
    EmptyIdentity,
    /// A duration is under the bookable floor.
    DurationBelowMinimum,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validates a case roster.
///
/// Checks:
/// 1. No duplicate case IDs
/// 2. No blank identity fields (the display name may be blank)
/// 3. Every duration at or above [`MIN_CASE_MIN`]
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_cases(cases: &[Case]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut case_ids = HashSet::new();

    for (position, case) in cases.iter().enumerate() {
        if case.id.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyIdentity,
                format!("Case at position {} has an empty ID", position),
            ));
        } else if !case_ids.insert(case.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate case ID: {}", case.id),
            ));
        }

        if case.surgeon.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyIdentity,
                format!("Case '{}' has an empty surgeon", case.id),
            ));
        }

        if case.equipment.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyIdentity,
                format!("Case '{}' has an empty equipment set", case.id),
            ));
        }

        if case.duration_min < MIN_CASE_MIN {
            errors.push(ValidationError::new(
                ValidationErrorKind::DurationBelowMinimum,
                format!(
                    "Case '{}' duration {} min is under the {} min floor",
                    case.id, case.duration_min, MIN_CASE_MIN
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
