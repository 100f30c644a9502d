//! Demo: prints the recommended split for a fixed three-section exam.
//!
//! Log output is controlled with `RUST_LOG`
//! (default `exam_time_allocator=info`).

use exam_time_allocator::{
    allocate_sections, AllocationSummary, SectionAllocation, SectionPerformance, ValidationError,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const TOTAL_MINUTES: f64 = 180.0;

fn init_logger() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("exam_time_allocator=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

fn demo_plan() -> Result<Vec<SectionAllocation>, ValidationError> {
    let sections = vec![
        SectionPerformance::new("Math", 50.0, 0.8)?,
        SectionPerformance::new("Reading", 30.0, 0.5)?,
        SectionPerformance::new("Writing", 20.0, 0.2)?,
    ];
    allocate_sections(&sections, TOTAL_MINUTES)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logger();

    let plan = demo_plan()?;
    for allocation in &plan {
        println!("{allocation}");
    }

    let summary = AllocationSummary::calculate(&plan, TOTAL_MINUTES);
    tracing::info!(
        total = summary.total_allocated,
        budget = summary.total_time,
        "allocation complete"
    );

    Ok(())
}
