//! Formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - store access and projection math stay clean and testable
//! - output changes are localized (important for future snapshot tests)

use crate::app::pipeline::SyncReport;
use crate::domain::{GoalSpec, Milestone};
use crate::projection::expected_percent;
use crate::report::OverviewStats;

/// Format the overview header shown above the milestone list.
pub fn format_overview(stats: &OverviewStats) -> String {
    let mut out = String::new();

    out.push_str("=== etapp - Swedish Environmental Milestones ===\n");
    out.push_str(&format!("Milestones: {}\n", stats.total));
    out.push_str(&format!("On track (>=70%):       {}\n", stats.on_track));
    out.push_str(&format!("In progress (40-69%):   {}\n", stats.in_progress));
    out.push_str(&format!("Needs attention (<40%): {}\n", stats.needs_attention));
    out.push_str(&format!("Overall progress:       {}%\n", stats.average_progress));

    out
}

/// Format the milestone table.
///
/// The expected column is goal-derived, so milestones without a goal spec
/// show a blank there rather than a misleading number.
pub fn format_milestone_list(milestones: &[Milestone], now_year: i32) -> String {
    let mut out = String::new();

    out.push_str(
        format!(
            "{:>3} {:<44} {:<26} {:<12} {:>8} {:>8}  {:<15}\n",
            "id", "title", "category", "", "progress", "expected", "status"
        )
        .trim_end(),
    );
    out.push('\n');
    out.push_str(
        format!(
            "{:-<3} {:-<44} {:-<26} {:-<12} {:-<8} {:-<8}  {:-<15}\n",
            "", "", "", "", "", "", ""
        )
        .trim_end(),
    );
    out.push('\n');

    for m in milestones {
        let goal = m.goal.as_ref().and_then(GoalSpec::from_value);
        let expected = expected_percent(goal.as_ref(), &[], now_year)
            .map(|pct| format!("~{pct}%"))
            .unwrap_or_else(|| "-".to_string());
        out.push_str(
            format!(
                "{:>3} {:<44} {:<26} {:<12} {:>7}% {:>8}  {:<15}\n",
                m.id,
                truncate(&m.title, 44),
                truncate(m.category.as_deref().unwrap_or(""), 26),
                progress_bar(m.progress, None, 10),
                m.progress,
                expected,
                status_label(m.progress),
            )
            .trim_end(),
        );
        out.push('\n');
    }

    out
}

/// Format one milestone in full: status, goal, and description.
pub fn format_milestone_detail(milestone: &Milestone, observed: &[f64], now_year: i32) -> String {
    let mut out = String::new();

    out.push_str(&format!("=== etapp - Milestone {} ===\n", milestone.id));
    out.push_str(&format!("{}\n", milestone.title));
    if let Some(category) = &milestone.category {
        out.push_str(&format!("Category: {category}\n"));
    }

    let goal = milestone.goal.as_ref().and_then(GoalSpec::from_value);
    let expected = expected_percent(goal.as_ref(), observed, now_year);
    out.push_str(&format!(
        "Progress: {} {}% ({})\n",
        progress_bar(milestone.progress, expected, 20),
        milestone.progress,
        status_label(milestone.progress),
    ));
    if let Some(pct) = expected {
        out.push_str(&format!("Expected: ~{pct}% by now ({now_year})\n"));
    }
    if let Some(goal) = &goal {
        out.push_str(&format!(
            "Goal:     {:.1} ({}) -> {:.1} ({}), a {:.0}% cut\n",
            goal.baseline_value,
            goal.baseline_year,
            goal.target_value(),
            goal.target_year,
            goal.fractional_change * 100.0,
        ));
    }
    if let Some(description) = &milestone.description {
        out.push('\n');
        out.push_str(description);
        out.push('\n');
    }

    out
}

/// Format the per-source outcomes of a sync run.
pub fn format_sync_report(report: &SyncReport) -> String {
    if report.outcomes.is_empty() {
        return "No sources found.\n".to_string();
    }

    let mut out = String::new();
    out.push_str("Sync results:\n");
    for o in &report.outcomes {
        out.push_str(&format!("  source {}: {}", o.source_id, o.status));
        if let Some(summary) = o.payload_summary {
            out.push_str(&format!(" (payload summary: {summary})"));
        }
        if let Some((before, after)) = o.progress_change {
            out.push_str(&format!(", milestone progress {before} -> {after}"));
        }
        out.push('\n');
    }

    out
}

/// Bucket label used in the list and detail views.
pub fn status_label(progress: u32) -> &'static str {
    if progress >= 70 {
        "on track"
    } else if progress >= 40 {
        "in progress"
    } else {
        "needs attention"
    }
}

/// Text progress bar; a known expected percent is overlaid as a `|` marker.
fn progress_bar(progress: u32, expected: Option<u32>, width: usize) -> String {
    let filled = (progress.min(100) as usize * width) / 100;
    let mut cells: Vec<char> = (0..width).map(|i| if i < filled { '#' } else { '-' }).collect();
    if let Some(pct) = expected {
        let at = (pct.min(100) as usize * width.saturating_sub(1)) / 100;
        if let Some(cell) = cells.get_mut(at) {
            *cell = '|';
        }
    }

    let mut out = String::with_capacity(width + 2);
    out.push('[');
    out.extend(cells);
    out.push(']');
    out
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out = String::new();
    for (i, ch) in s.chars().enumerate() {
        if i + 1 >= max {
            break;
        }
        out.push(ch);
    }
    out.push('.');
    out
}
