//! Allocation output model.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Recommended time for one section.
///
/// Minutes are unrounded; `Display` rounds to one decimal place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionAllocation {
    /// Section name (copied from the input, duplicates preserved).
    pub name: String,
    /// Recommended time, in the same unit as the total budget.
    pub minutes: f64,
}

impl SectionAllocation {
    /// Creates a new allocation row.
    pub fn new(name: impl Into<String>, minutes: f64) -> Self {
        Self {
            name: name.into(),
            minutes,
        }
    }
}

impl From<SectionAllocation> for (String, f64) {
    fn from(allocation: SectionAllocation) -> Self {
        (allocation.name, allocation.minutes)
    }
}

impl fmt::Display for SectionAllocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:.1} minutes", self.name, self.minutes)
    }
}
