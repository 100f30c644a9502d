//! Time allocation and allocation summaries.
//!
//! # Algorithm
//!
//! Each section gets a difficulty score `weight * (1 - proficiency)`.
//! The budget is split in proportion to those scores, so sections that are
//! worth more and less mastered get more time. When every score is zero
//! (all sections mastered or weightless) the budget is split evenly.
//!
//! # Summary
//!
//! `AllocationSummary` reports totals and shares over a computed
//! allocation, including a conservation check against the budget.

mod proportional;
mod summary;

pub use proportional::{allocate_sections, allocate_time, difficulty_scores};
pub use summary::AllocationSummary;
