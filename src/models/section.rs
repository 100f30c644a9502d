//! Section performance model.
//!
//! A section is a scored component of an exam (e.g., a subject area).
//! Each section carries a weight (its share of the marks) and the
//! student's proficiency in it.
//!
//! # Invariants
//! - `0 <= proficiency <= 1`
//! - `weight >= 0` and finite
//!
//! Both are enforced at construction, including when deserializing.

use serde::{Deserialize, Serialize};

use crate::validation::ValidationError;

/// A student's standing in one exam section.
///
/// Immutable once built. The only way to obtain one is through
/// [`SectionPerformance::new`] (or deserialization, which calls it).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SectionRecord")]
pub struct SectionPerformance {
    name: String,
    weight: f64,
    proficiency: f64,
}

impl SectionPerformance {
    /// Creates a validated section.
    ///
    /// # Errors
    /// - `ProficiencyOutOfRange` if `proficiency` is outside [0, 1] (or NaN).
    /// - `NonFiniteValue` if `weight` is NaN or infinite.
    /// - `NegativeWeight` if `weight < 0`.
    pub fn new(
        name: impl Into<String>,
        weight: f64,
        proficiency: f64,
    ) -> Result<Self, ValidationError> {
        if !(0.0..=1.0).contains(&proficiency) {
            return Err(ValidationError::proficiency_out_of_range());
        }
        if !weight.is_finite() {
            return Err(ValidationError::non_finite("weight"));
        }
        if weight < 0.0 {
            return Err(ValidationError::negative_weight());
        }

        Ok(Self {
            name: name.into(),
            weight,
            proficiency,
        })
    }

    /// Section identifier.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Relative importance (marks) of the section.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Mastery level in [0, 1].
    pub fn proficiency(&self) -> f64 {
        self.proficiency
    }

    /// Difficulty score: `weight * (1 - proficiency)`.
    ///
    /// Higher for sections that are worth more and less mastered.
    pub fn difficulty(&self) -> f64 {
        self.weight * (1.0 - self.proficiency)
    }
}

/// Unvalidated wire form.
#[derive(Deserialize)]
struct SectionRecord {
    name: String,
    weight: f64,
    proficiency: f64,
}

impl TryFrom<SectionRecord> for SectionPerformance {
    type Error = ValidationError;

    fn try_from(record: SectionRecord) -> Result<Self, Self::Error> {
        Self::new(record.name, record.weight, record.proficiency)
    }
}
