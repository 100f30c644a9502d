//! Exam allocation domain models.
//!
//! Provides the input record for one exam section and the output row
//! produced for it by the allocator.
//!
//! | Type | Role |
//! |------|------|
//! | `SectionPerformance` | Validated input: name, weight, proficiency |
//! | `SectionAllocation` | Output: name, recommended minutes |

mod allocation;
mod section;

pub use allocation::SectionAllocation;
pub use section::SectionPerformance;
