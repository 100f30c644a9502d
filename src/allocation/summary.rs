//! Allocation summary metrics.
//!
//! Computes aggregate indicators over a finished allocation.
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total allocated | Sum of all section times |
//! | Share | Section time / budget |
//! | Largest | Section with the most time (first on ties) |
//! | Balanced | Total allocated matches the budget within a tolerance |

use std::collections::HashMap;

use crate::models::SectionAllocation;

/// Aggregate view of an allocation against its budget.
#[derive(Debug, Clone)]
pub struct AllocationSummary {
    /// Time budget the allocation was computed for.
    pub total_time: f64,
    /// Sum of allocated times.
    pub total_allocated: f64,
    /// Fraction of the budget per section name (0.0..1.0).
    /// Duplicate names are summed.
    pub share_by_section: HashMap<String, f64>,
    /// Name and time of the largest allocation. `None` when empty.
    pub largest: Option<(String, f64)>,
}

impl AllocationSummary {
    /// Computes the summary for `allocations` under a `total_time` budget.
    pub fn calculate(allocations: &[SectionAllocation], total_time: f64) -> Self {
        let total_allocated: f64 = allocations.iter().map(|a| a.minutes).sum();

        let mut share_by_section: HashMap<String, f64> = HashMap::new();
        if total_time > 0.0 {
            for a in allocations {
                *share_by_section.entry(a.name.clone()).or_insert(0.0) +=
                    a.minutes / total_time;
            }
        }

        let largest = allocations
            .iter()
            .fold(None::<&SectionAllocation>, |best, a| match best {
                Some(b) if b.minutes >= a.minutes => Some(b),
                _ => Some(a),
            })
            .map(|a| (a.name.clone(), a.minutes));

        Self {
            total_time,
            total_allocated,
            share_by_section,
            largest,
        }
    }

    /// Whether the allocated total matches the budget within a relative tolerance.
    ///
    /// An empty allocation sums to zero, so it only passes with a tolerance of 1 or more.
    pub fn is_balanced(&self, relative_tolerance: f64) -> bool {
        let drift = (self.total_allocated - self.total_time).abs();
        drift <= self.total_time.abs() * relative_tolerance
    }
}
