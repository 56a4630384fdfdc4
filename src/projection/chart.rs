//! Actual-vs-expected chart rows.
//!
//! A chart row pairs the observed value and the expected trajectory value
//! for one year. Observed years inside the goal range attach to their
//! trajectory row; years outside it become actual-only rows placed before
//! or after, in chronological order.

use crate::domain::GoalSpec;
use crate::projection::trajectory::trajectory;
use crate::px::ParsedSeries;

/// One row of the actual-vs-expected chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartRow {
    pub year: i32,
    pub actual: Option<f64>,
    pub expected: Option<f64>,
}

/// Merge the goal trajectory with the observed series into chart rows.
///
/// Without a goal the rows carry observations only.
pub fn chart_rows(goal: Option<&GoalSpec>, series: &ParsedSeries) -> Vec<ChartRow> {
    let mut rows: Vec<ChartRow> = goal
        .map(trajectory)
        .unwrap_or_default()
        .into_iter()
        .map(|p| ChartRow {
            year: p.year,
            actual: None,
            expected: Some(p.expected_value),
        })
        .collect();

    for (year, value) in observed_year_points(series) {
        match rows.iter_mut().find(|r| r.year == year) {
            Some(row) => row.actual = Some(value),
            None => rows.push(ChartRow {
                year,
                actual: Some(value),
                expected: None,
            }),
        }
    }

    rows.sort_by_key(|r| r.year);
    rows
}

/// Pair observed values with the year parsed from the matching category.
///
/// Values and categories are aligned by index; surplus entries on either
/// side and categories that do not parse as years are skipped. The parsed
/// series itself is left untouched.
pub fn observed_year_points(series: &ParsedSeries) -> Vec<(i32, f64)> {
    series
        .values
        .iter()
        .zip(series.categories.iter())
        .filter_map(|(&value, category)| {
            let year = category.trim().parse::<i32>().ok()?;
            Some((year, value))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goal() -> GoalSpec {
        GoalSpec {
            baseline_value: 100.0,
            baseline_year: 2020,
            target_year: 2025,
            fractional_change: 0.5,
        }
    }

    fn series(values: &[f64], categories: &[&str]) -> ParsedSeries {
        ParsedSeries {
            values: values.to_vec(),
            categories: categories.iter().map(|s| s.to_string()).collect(),
            raw_data_block: String::new(),
        }
    }

    #[test]
    fn observations_inside_goal_range_attach_to_trajectory_rows() {
        let s = series(&[98.0, 90.0], &["2021", "2023"]);
        let rows = chart_rows(Some(&goal()), &s);

        assert_eq!(rows.len(), 6);
        let row_2021 = rows.iter().find(|r| r.year == 2021).unwrap();
        assert_eq!(row_2021.actual, Some(98.0));
        assert_eq!(row_2021.expected, Some(90.0));
        let row_2022 = rows.iter().find(|r| r.year == 2022).unwrap();
        assert_eq!(row_2022.actual, None);
    }

    #[test]
    fn observations_outside_goal_range_extend_the_chart_chronologically() {
        let s = series(&[110.0, 95.0, 40.0], &["2018", "2022", "2027"]);
        let rows = chart_rows(Some(&goal()), &s);

        assert_eq!(rows.len(), 8);
        assert_eq!(rows.first().map(|r| r.year), Some(2018));
        assert_eq!(rows.first().and_then(|r| r.expected), None);
        assert_eq!(rows.last().map(|r| r.year), Some(2027));
        assert_eq!(rows.last().and_then(|r| r.actual), Some(40.0));
        let years: Vec<i32> = rows.iter().map(|r| r.year).collect();
        let mut sorted = years.clone();
        sorted.sort_unstable();
        assert_eq!(years, sorted);
    }

    #[test]
    fn without_goal_rows_carry_observations_only() {
        let s = series(&[10.0, 20.0], &["2001", "2002"]);
        let rows = chart_rows(None, &s);
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.expected.is_none()));
    }

    #[test]
    fn surplus_values_without_categories_are_skipped() {
        let s = series(&[1.0, 2.0, 3.0], &["2020", "2021"]);
        assert_eq!(observed_year_points(&s), vec![(2020, 1.0), (2021, 2.0)]);
    }

    #[test]
    fn non_year_categories_are_skipped() {
        let s = series(&[1.0, 2.0], &["totalt", "2021"]);
        assert_eq!(observed_year_points(&s), vec![(2021, 2.0)]);
    }

    #[test]
    fn empty_series_with_no_goal_yields_no_rows() {
        assert!(chart_rows(None, &ParsedSeries::default()).is_empty());
    }

    #[test]
    fn saturated_goal_years_chart_observations_only() {
        let goal = GoalSpec {
            baseline_value: 100.0,
            baseline_year: i32::MIN,
            target_year: i32::MAX,
            fractional_change: 0.5,
        };
        let s = series(&[98.0], &["2021"]);
        let rows = chart_rows(Some(&goal), &s);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].actual, Some(98.0));
        assert_eq!(rows[0].expected, None);
    }
}
