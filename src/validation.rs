//! Input validation for time allocation.
//!
//! Invalid inputs are rejected eagerly and synchronously:
//! - Proficiency outside [0, 1]
//! - Negative weight
//! - Non-finite numbers (NaN, infinity)
//! - Non-positive total time
//!
//! Duplicate section names are not an error for allocation itself.
//! [`validate_sections`] is an opt-in boundary check for callers that
//! want to reject them before allocating.

use crate::models::SectionPerformance;
use std::collections::HashSet;
use thiserror::Error;

/// Validation result for batch checks.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Proficiency is not within [0, 1].
    ProficiencyOutOfRange,
    /// Weight is below zero.
    NegativeWeight,
    /// A numeric input is NaN or infinite.
    NonFiniteValue {
        /// Which input carried the value.
        field: &'static str,
    },
    /// Total time is zero or negative.
    NonPositiveTotalTime,
    /// Two sections share the same name.
    DuplicateName,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub(crate) fn proficiency_out_of_range() -> Self {
        Self::new(
            ValidationErrorKind::ProficiencyOutOfRange,
            "proficiency must be between 0 and 1",
        )
    }

    pub(crate) fn negative_weight() -> Self {
        Self::new(
            ValidationErrorKind::NegativeWeight,
            "weight must be non-negative",
        )
    }

    pub(crate) fn non_finite(field: &'static str) -> Self {
        Self::new(
            ValidationErrorKind::NonFiniteValue { field },
            format!("{field} must be a finite number"),
        )
    }

    pub(crate) fn non_positive_total_time() -> Self {
        Self::new(
            ValidationErrorKind::NonPositiveTotalTime,
            "total_time must be positive",
        )
    }

    /// Name of the input field that failed validation.
    pub fn field(&self) -> &'static str {
        match self.kind {
            ValidationErrorKind::ProficiencyOutOfRange => "proficiency",
            ValidationErrorKind::NegativeWeight => "weight",
            ValidationErrorKind::NonFiniteValue { field } => field,
            ValidationErrorKind::NonPositiveTotalTime => "total_time",
            ValidationErrorKind::DuplicateName => "name",
        }
    }
}

/// Checks a total time budget.
///
/// Rejects NaN and infinity first, then anything `<= 0`.
pub fn validate_total_time(total_time: f64) -> Result<(), ValidationError> {
    if !total_time.is_finite() {
        return Err(ValidationError::non_finite("total_time"));
    }
    if total_time <= 0.0 {
        return Err(ValidationError::non_positive_total_time());
    }
    Ok(())
}

/// Validates a list of sections before allocation.
///
/// Field invariants are already guaranteed by [`SectionPerformance::new`],
/// so this only checks cross-section structure:
/// 1. No duplicate section names
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with one error per repeated name.
pub fn validate_sections(sections: &[SectionPerformance]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();

    for section in sections {
        let name = section.name();
        if !seen.insert(name) && reported.insert(name) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("Duplicate section name: {name}"),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
