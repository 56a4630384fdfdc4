//! Linear goal trajectories.

use crate::domain::GoalSpec;

/// Expected value for one year of a goal trajectory.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedPoint {
    pub year: i32,
    pub expected_value: f64,
}

/// Widest goal span that still gets a per-year table. Stored goals can
/// carry arbitrary year bounds, including values saturated to the `i32`
/// limits.
const MAX_SPAN_YEARS: i64 = 1000;

/// Expected value at `year` under linear interpolation of the goal.
///
/// The normalized position clamps to `[0, 1]`, so years outside the goal
/// range evaluate to the nearest endpoint. The arithmetic runs in f64;
/// year bounds at the `i32` limits stay finite.
pub fn expected_at(goal: &GoalSpec, year: i32) -> f64 {
    let span = (f64::from(goal.target_year) - f64::from(goal.baseline_year)).max(1.0);
    let t = ((f64::from(year) - f64::from(goal.baseline_year)) / span).clamp(0.0, 1.0);
    goal.baseline_value + t * (goal.target_value() - goal.baseline_value)
}

/// One projected point per integer year from baseline to target inclusive.
///
/// Empty when `target_year < baseline_year` or when the span is wider than
/// [`MAX_SPAN_YEARS`].
pub fn trajectory(goal: &GoalSpec) -> Vec<ProjectedPoint> {
    let span = i64::from(goal.target_year) - i64::from(goal.baseline_year);
    if !(0..=MAX_SPAN_YEARS).contains(&span) {
        return Vec::new();
    }
    (goal.baseline_year..=goal.target_year)
        .map(|year| ProjectedPoint {
            year,
            expected_value: expected_at(goal, year),
        })
        .collect()
}
