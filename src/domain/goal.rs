//! Goal specifications.
//!
//! A milestone's goal is persisted as a JSON blob shaped like
//! `{ "series": [990], "categories": [2010, 2030], "change": [0.63] }`,
//! read as: from 990 in 2010, reduce by 63% by 2030. Stored rows are uneven:
//! `categories` appears misspelled as `cartegories`, `change` is sometimes a
//! bare number, and years are sometimes numeric strings. Extraction
//! tolerates all of that and returns `None` when any required part is
//! missing or non-finite.

use serde_json::Value;

/// A reduction goal: from `baseline_value` in `baseline_year` down to
/// [`GoalSpec::target_value`] in `target_year`.
///
/// `target_year > baseline_year` is required for a meaningful trajectory;
/// `fractional_change` usually sits in `(0, 1)` but is not range-checked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoalSpec {
    pub baseline_value: f64,
    pub baseline_year: i32,
    pub target_year: i32,
    pub fractional_change: f64,
}

impl GoalSpec {
    /// Value the goal aims for in `target_year`.
    pub fn target_value(&self) -> f64 {
        self.baseline_value * (1.0 - self.fractional_change)
    }

    /// Extract a goal from its persisted JSON shape.
    ///
    /// `series[0]` is the baseline value, `categories[0]`/`categories[1]`
    /// the baseline and target years (the misspelled `cartegories` key is
    /// honored), and `change` the fractional change, either `[number]` or a
    /// bare number. Years and the baseline accept numeric strings; `change`
    /// must be an actual number.
    pub fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        let series = obj.get("series")?.as_array()?;
        let years = obj
            .get("categories")
            .and_then(Value::as_array)
            .or_else(|| obj.get("cartegories").and_then(Value::as_array))?;
        if years.len() < 2 {
            return None;
        }
        let fractional_change = match obj.get("change")? {
            Value::Array(items) => items.first()?.as_f64()?,
            Value::Number(n) => n.as_f64()?,
            _ => return None,
        };
        let baseline_value = finite_number(series.first()?)?;
        let baseline_year = finite_number(&years[0])? as i32;
        let target_year = finite_number(&years[1])? as i32;
        Some(Self {
            baseline_value,
            baseline_year,
            target_year,
            fractional_change,
        })
    }
}

/// Accept JSON numbers and numeric strings.
fn finite_number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}
