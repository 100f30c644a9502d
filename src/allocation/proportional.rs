//! Proportional (difficulty-weighted) time allocation.
//!
//! Pure and deterministic: O(n) in the number of sections, no shared state,
//! safe to call from any thread.

use tracing::{debug, trace};

use crate::models::{SectionAllocation, SectionPerformance};
use crate::validation::{validate_total_time, ValidationError};

/// Difficulty score of every section, in input order.
pub fn difficulty_scores(sections: &[SectionPerformance]) -> Vec<f64> {
    sections.iter().map(SectionPerformance::difficulty).collect()
}

/// Splits `total_time` across `sections`.
///
/// Returns one `(name, time)` pair per section in input order. The times
/// sum to `total_time` up to floating-point rounding and are not rounded.
///
/// # Errors
/// `total_time` must be finite and positive. This is checked before
/// anything else, including for an empty section list.
///
/// # Example
/// ```
/// use exam_time_allocator::{allocate_time, SectionPerformance};
///
/// let sections = vec![
///     SectionPerformance::new("Math", 50.0, 0.8).unwrap(),
///     SectionPerformance::new("Writing", 20.0, 0.2).unwrap(),
/// ];
/// let plan = allocate_time(&sections, 130.0).unwrap();
/// assert_eq!(plan[0].0, "Math");
/// assert!((plan[0].1 + plan[1].1 - 130.0).abs() < 1e-9);
/// ```
pub fn allocate_time(
    sections: &[SectionPerformance],
    total_time: f64,
) -> Result<Vec<(String, f64)>, ValidationError> {
    let allocations = allocate_sections(sections, total_time)?;
    Ok(allocations.into_iter().map(Into::into).collect())
}

/// Same as [`allocate_time`], returning typed rows.
pub fn allocate_sections(
    sections: &[SectionPerformance],
    total_time: f64,
) -> Result<Vec<SectionAllocation>, ValidationError> {
    validate_total_time(total_time)?;

    if sections.is_empty() {
        debug!("no sections to allocate");
        return Ok(Vec::new());
    }

    let scores = difficulty_scores(sections);
    let max_score = scores.iter().copied().fold(0.0_f64, f64::max);

    if max_score == 0.0 {
        let even = total_time / sections.len() as f64;
        debug!(
            sections = sections.len(),
            minutes = even,
            "all difficulty scores are zero, splitting evenly"
        );
        return Ok(sections
            .iter()
            .map(|s| SectionAllocation::new(s.name(), even))
            .collect());
    }

    // Scaled to (0, 1] so the sum stays finite for any finite weights.
    let scaled: Vec<f64> = scores.iter().map(|score| score / max_score).collect();
    let total_scaled: f64 = scaled.iter().sum();

    debug!(
        sections = sections.len(),
        max_score, "allocating proportionally to difficulty"
    );

    Ok(sections
        .iter()
        .zip(&scaled)
        .map(|(section, &share)| {
            let minutes = total_time * (share / total_scaled);
            trace!(section = section.name(), share, minutes, "allocated");
            SectionAllocation::new(section.name(), minutes)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    fn s(name: &str, weight: f64, proficiency: f64) -> SectionPerformance {
        SectionPerformance::new(name, weight, proficiency).unwrap()
    }

    fn demo_sections() -> Vec<SectionPerformance> {
        vec![
            s("Math", 50.0, 0.8),
            s("Reading", 30.0, 0.5),
            s("Writing", 20.0, 0.2),
        ]
    }

    fn time_of(plan: &[(String, f64)], name: &str) -> f64 {
        plan.iter().find(|(n, _)| n == name).map(|(_, t)| *t).unwrap()
    }

    #[test]
    fn test_demo_scenario() {
        let plan = allocate_time(&demo_sections(), 180.0).unwrap();

        let names: Vec<&str> = plan.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["Math", "Reading", "Writing"]);

        // Scores 10, 15, 16 → total 41
        assert!((time_of(&plan, "Math") - 180.0 * 10.0 / 41.0).abs() < 1e-9);
        assert!((time_of(&plan, "Reading") - 180.0 * 15.0 / 41.0).abs() < 1e-9);
        assert!((time_of(&plan, "Writing") - 180.0 * 16.0 / 41.0).abs() < 1e-9);

        let formatted: Vec<String> = plan.iter().map(|(_, t)| format!("{t:.1}")).collect();
        assert_eq!(formatted, vec!["43.9", "65.9", "70.2"]);
    }

    #[test]
    fn test_difficulty_scores() {
        let scores = difficulty_scores(&demo_sections());
        let expected = [10.0, 15.0, 16.0];
        for (got, want) in scores.iter().zip(expected) {
            assert!((got - want).abs() < 1e-10);
        }
    }

    #[test]
    fn test_conservation() {
        let plan = allocate_time(&demo_sections(), 180.0).unwrap();
        let sum: f64 = plan.iter().map(|(_, t)| t).sum();
        assert!((sum - 180.0).abs() < 180.0 * 1e-9);
    }

    #[test]
    fn test_conservation_random() {
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..200 {
            let n = rng.random_range(1..20);
            // Roughly one draw in five has only zero scores.
            let all_zero = rng.random_bool(0.2);
            let sections: Vec<_> = (0..n)
                .map(|i| {
                    let (weight, proficiency) = if all_zero {
                        if rng.random_bool(0.5) {
                            (0.0, rng.random_range(0.0..=1.0))
                        } else {
                            (rng.random_range(0.0..100.0), 1.0)
                        }
                    } else {
                        (rng.random_range(0.0..100.0), rng.random_range(0.0..=1.0))
                    };
                    s(&format!("S{i}"), weight, proficiency)
                })
                .collect();
            let total = rng.random_range(1.0..600.0);

            let plan = allocate_time(&sections, total).unwrap();
            assert_eq!(plan.len(), n);
            let sum: f64 = plan.iter().map(|(_, t)| t).sum();
            assert!((sum - total).abs() <= total * 1e-9);
            assert!(plan.iter().all(|(_, t)| *t >= 0.0));
            if all_zero {
                assert!(plan.iter().all(|(_, t)| *t == total / n as f64));
            }
        }
    }

    #[test]
    fn test_huge_weights_stay_finite() {
        let sections = vec![s("A", f64::MAX, 0.0), s("B", f64::MAX, 0.0)];
        let plan = allocate_time(&sections, 180.0).unwrap();
        for (_, t) in &plan {
            assert!((t - 90.0).abs() < 1e-9);
        }

        let uneven = vec![s("A", f64::MAX, 0.0), s("B", f64::MAX, 0.5)];
        let plan = allocate_time(&uneven, 180.0).unwrap();
        assert!((time_of(&plan, "A") - 120.0).abs() < 1e-9);
        assert!((time_of(&plan, "B") - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_huge_total_time_stays_finite() {
        let sections = vec![s("A", 1e10, 0.0), s("B", 1e10, 0.0)];
        let plan = allocate_time(&sections, 1e300).unwrap();
        for (_, t) in &plan {
            assert!(t.is_finite());
            assert!((t - 5e299).abs() <= 5e299 * 1e-12);
        }
        let sum: f64 = plan.iter().map(|(_, t)| t).sum();
        assert!((sum - 1e300).abs() <= 1e300 * 1e-9);
    }

    #[test]
    fn test_even_split_when_all_mastered() {
        let sections = vec![s("A", 50.0, 1.0), s("B", 0.0, 0.3), s("C", 0.0, 1.0)];
        let plan = allocate_time(&sections, 90.0).unwrap();
        assert_eq!(plan.len(), 3);
        for (_, t) in &plan {
            assert_eq!(*t, 90.0 / 3.0);
        }
    }

    #[test]
    fn test_empty_sections() {
        assert!(allocate_time(&[], 60.0).unwrap().is_empty());
        assert!(allocate_sections(&[], 0.5).unwrap().is_empty());
    }

    #[test]
    fn test_total_time_rejected() {
        for total in [0.0, -10.0] {
            let err = allocate_time(&demo_sections(), total).unwrap_err();
            assert_eq!(err.kind, ValidationErrorKind::NonPositiveTotalTime);
            assert_eq!(err.to_string(), "total_time must be positive");
        }
    }

    #[test]
    fn test_total_time_checked_for_empty_input() {
        let err = allocate_time(&[], 0.0).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::NonPositiveTotalTime);

        let err = allocate_time(&[], f64::NAN).unwrap_err();
        assert_eq!(err.field(), "total_time");
    }

    #[test]
    fn test_zero_score_section_gets_nothing() {
        let sections = vec![s("Mastered", 40.0, 1.0), s("Weak", 10.0, 0.0)];
        let plan = allocate_time(&sections, 60.0).unwrap();
        assert_eq!(time_of(&plan, "Mastered"), 0.0);
        assert!((time_of(&plan, "Weak") - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_lower_proficiency_gets_more_time() {
        let base = demo_sections();
        let before = time_of(&allocate_time(&base, 180.0).unwrap(), "Reading");

        let mut weaker = base.clone();
        weaker[1] = s("Reading", 30.0, 0.3);
        let after = time_of(&allocate_time(&weaker, 180.0).unwrap(), "Reading");

        assert!(after > before);
    }

    #[test]
    fn test_higher_weight_gets_more_time() {
        let base = demo_sections();
        let before = time_of(&allocate_time(&base, 180.0).unwrap(), "Math");

        let mut heavier = base.clone();
        heavier[0] = s("Math", 70.0, 0.8);
        let after = time_of(&allocate_time(&heavier, 180.0).unwrap(), "Math");

        assert!(after > before);
    }

    #[test]
    fn test_duplicate_names_preserved() {
        let sections = vec![s("Math", 10.0, 0.5), s("Math", 30.0, 0.5)];
        let plan = allocate_time(&sections, 40.0).unwrap();
        assert_eq!(plan.len(), 2);
        assert_eq!(plan[0].0, "Math");
        assert_eq!(plan[1].0, "Math");
        assert!((plan[0].1 - 10.0).abs() < 1e-9);
        assert!((plan[1].1 - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_single_section_gets_everything() {
        let plan = allocate_sections(&[s("Only", 5.0, 0.4)], 75.0).unwrap();
        assert_eq!(plan.len(), 1);
        assert_eq!(plan[0].name, "Only");
        assert!((plan[0].minutes - 75.0).abs() < 1e-9);
    }
}
