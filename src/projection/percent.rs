//! Expected and achieved percent figures.
//!
//! Both figures share the same not-computable convention: `None` means "no
//! percent available", never zero. Callers render the absence, they do not
//! substitute a default.

use crate::domain::GoalSpec;
use crate::projection::trajectory::expected_at;

/// Share of the goal's total change that should be done by `now_year`,
/// under linear interpolation.
///
/// With a goal present this never falls back to the observed series: a goal
/// whose total change is zero or negative has no meaningful "expected"
/// figure, whatever the observations say. Without a goal, the observed
/// series itself is read as a percent reduction from its first value.
pub fn expected_percent(goal: Option<&GoalSpec>, observed: &[f64], now_year: i32) -> Option<u32> {
    match goal {
        Some(goal) => goal_expected_percent(goal, now_year),
        None => percent_of_base(observed),
    }
}

/// Share of the goal's targeted reduction actually achieved by the latest
/// finite observation.
///
/// With no usable goal (absent, or `fractional_change <= 0`) the observed
/// series is read as a percent reduction from its first value.
pub fn achieved_percent(goal: Option<&GoalSpec>, observed: &[f64]) -> Option<u32> {
    let latest = last_finite(observed)?;
    match goal {
        Some(goal) if goal.fractional_change > 0.0 => {
            let target_reduction = goal.baseline_value * goal.fractional_change;
            let achieved = goal.baseline_value - latest;
            clamp_percent(achieved / target_reduction * 100.0)
        }
        _ => percent_of_base(observed),
    }
}

fn goal_expected_percent(goal: &GoalSpec, now_year: i32) -> Option<u32> {
    if goal.target_year < goal.baseline_year {
        return None;
    }
    let total_change = goal.baseline_value - goal.target_value();
    if !(total_change.is_finite() && total_change > 0.0) {
        return None;
    }

    // Closed form of the per-year table lookup: the point at
    // min(now, target), or the table's last point (the target itself)
    // when now predates the baseline. Never materializes the table, so
    // arbitrary stored year bounds cost nothing.
    let current_year = now_year.min(goal.target_year);
    let expected = if current_year < goal.baseline_year {
        goal.target_value()
    } else {
        expected_at(goal, current_year)
    };

    let achieved = goal.baseline_value - expected;
    clamp_percent(achieved / total_change * 100.0)
}

/// Percent reduction of the latest finite value relative to the first
/// value. The first value itself must be finite and positive.
fn percent_of_base(observed: &[f64]) -> Option<u32> {
    let latest = last_finite(observed)?;
    let base = *observed.first()?;
    if !(base.is_finite() && base > 0.0) {
        return None;
    }
    clamp_percent((base - latest) / base * 100.0)
}

/// Last finite value scanning from the end.
fn last_finite(values: &[f64]) -> Option<f64> {
    values.iter().rev().copied().find(|v| v.is_finite())
}

/// Round, reject non-finite, clamp into `[0, 100]`.
fn clamp_percent(pct: f64) -> Option<u32> {
    if !pct.is_finite() {
        return None;
    }
    Some(pct.round().clamp(0.0, 100.0) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn halving_goal() -> GoalSpec {
        GoalSpec {
            baseline_value: 100.0,
            baseline_year: 2000,
            target_year: 2010,
            fractional_change: 0.5,
        }
    }

    #[test]
    fn expected_percent_halfway_through_goal_is_fifty() {
        let pct = expected_percent(Some(&halving_goal()), &[], 2005);
        assert_eq!(pct, Some(50));
    }

    #[test]
    fn expected_percent_clamps_now_to_target_year() {
        assert_eq!(expected_percent(Some(&halving_goal()), &[], 2025), Some(100));
        assert_eq!(expected_percent(Some(&halving_goal()), &[], 2000), Some(0));
    }

    #[test]
    fn now_before_the_baseline_reads_the_end_of_the_trajectory() {
        assert_eq!(expected_percent(Some(&halving_goal()), &[], 1995), Some(100));
    }

    #[test]
    fn absurd_stored_year_bounds_still_yield_a_percent() {
        // Stored goal years saturate to the i32 limits; the figure must
        // come back without building a per-year table.
        let goal = GoalSpec::from_value(&serde_json::json!({
            "series": [100.0],
            "categories": [-1e300, 1e300],
            "change": [0.5],
        }))
        .unwrap();
        assert_eq!(goal.baseline_year, i32::MIN);
        assert_eq!(goal.target_year, i32::MAX);
        assert_eq!(expected_percent(Some(&goal), &[], 2026), Some(50));
    }

    #[test]
    fn zero_change_goal_has_no_expected_percent() {
        let goal = GoalSpec {
            fractional_change: 0.0,
            ..halving_goal()
        };
        // The series is ignored: a goal with no reduction target cannot be
        // measured against, even when observations exist.
        assert_eq!(expected_percent(Some(&goal), &[100.0, 60.0], 2005), None);
    }

    #[test]
    fn increase_goal_has_no_expected_percent() {
        let goal = GoalSpec {
            fractional_change: -0.25,
            ..halving_goal()
        };
        assert_eq!(expected_percent(Some(&goal), &[], 2005), None);
    }

    #[test]
    fn reversed_goal_years_have_no_expected_percent() {
        let goal = GoalSpec {
            baseline_year: 2030,
            target_year: 2020,
            ..halving_goal()
        };
        assert_eq!(expected_percent(Some(&goal), &[], 2025), None);
    }

    #[test]
    fn fallback_reads_percent_reduction_from_base() {
        let observed = [100.0, 90.0, f64::NAN, 60.0];
        assert_eq!(expected_percent(None, &observed, 2005), Some(40));
    }

    #[test]
    fn fallback_requires_positive_finite_base() {
        assert_eq!(expected_percent(None, &[0.0, 10.0], 2005), None);
        assert_eq!(expected_percent(None, &[-5.0, 10.0], 2005), None);
        assert_eq!(expected_percent(None, &[f64::NAN, 10.0], 2005), None);
    }

    #[test]
    fn fallback_with_no_finite_values_is_none() {
        assert_eq!(expected_percent(None, &[], 2005), None);
        assert_eq!(expected_percent(None, &[f64::NAN, f64::NAN], 2005), None);
    }

    #[test]
    fn achieved_percent_measures_against_target_reduction() {
        // Target reduction is 50; observed reduction is 100 - 80 = 20.
        let pct = achieved_percent(Some(&halving_goal()), &[100.0, 95.0, 80.0]);
        assert_eq!(pct, Some(40));
    }

    #[test]
    fn achieved_percent_skips_trailing_gaps() {
        let pct = achieved_percent(Some(&halving_goal()), &[100.0, 80.0, f64::NAN]);
        assert_eq!(pct, Some(40));
    }

    #[test]
    fn achieved_percent_without_goal_uses_percent_of_base() {
        assert_eq!(achieved_percent(None, &[100.0, 75.0]), Some(25));
    }

    #[test]
    fn achieved_percent_with_zero_change_goal_uses_percent_of_base() {
        let goal = GoalSpec {
            fractional_change: 0.0,
            ..halving_goal()
        };
        assert_eq!(achieved_percent(Some(&goal), &[100.0, 75.0]), Some(25));
    }

    #[test]
    fn achieved_percent_with_zero_baseline_is_none() {
        let goal = GoalSpec {
            baseline_value: 0.0,
            ..halving_goal()
        };
        // Target reduction degenerates to zero; the ratio is not finite.
        assert_eq!(achieved_percent(Some(&goal), &[0.0, 10.0]), None);
    }

    #[test]
    fn achieved_percent_without_observations_is_none() {
        assert_eq!(achieved_percent(Some(&halving_goal()), &[]), None);
        assert_eq!(achieved_percent(Some(&halving_goal()), &[f64::NAN]), None);
    }

    #[test]
    fn percents_never_leave_their_range() {
        // Observed above baseline: negative achieved reduction clamps to 0.
        assert_eq!(achieved_percent(Some(&halving_goal()), &[100.0, 140.0]), Some(0));
        // Observed far below target: overachievement clamps to 100.
        assert_eq!(achieved_percent(Some(&halving_goal()), &[100.0, 10.0]), Some(100));
        // Fallback growth clamps to 0 rather than going negative.
        assert_eq!(expected_percent(None, &[100.0, 160.0], 2005), Some(0));
    }
}
