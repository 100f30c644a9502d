//! Exam time allocation.
//!
//! Recommends how to split an exam's time budget across its sections,
//! given each section's weight and the student's proficiency in it.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `SectionPerformance`, `SectionAllocation`
//! - **`validation`**: `ValidationError` and input checks (ranges, total time, duplicate names)
//! - **`allocation`**: `allocate_time` and `AllocationSummary`
//!
//! # Algorithm
//!
//! Difficulty score per section is `weight * (1 - proficiency)`; the budget
//! is split in proportion to it. If every score is zero the budget is split
//! evenly. Everything is pure and synchronous.
//!
//! # Logging
//!
//! Emits `tracing` events at `debug`/`trace` level. The library never installs
//! a subscriber; that is up to the binary.

pub mod allocation;
pub mod models;
pub mod validation;

pub use allocation::{allocate_sections, allocate_time, difficulty_scores, AllocationSummary};
pub use models::{SectionAllocation, SectionPerformance};
pub use validation::{ValidationError, ValidationErrorKind};
