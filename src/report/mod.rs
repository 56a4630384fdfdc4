//! Reporting utilities: overview statistics and formatted terminal output.

use crate::domain::Milestone;

pub mod format;

pub use format::*;

/// Progress buckets across the whole milestone table.
///
/// Thresholds match the dashboard cards: 70 and above counts as on track,
/// 40 to 69 as in progress, everything below 40 needs attention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverviewStats {
    pub total: usize,
    pub on_track: usize,
    pub in_progress: usize,
    pub needs_attention: usize,
    /// Rounded mean progress; zero for an empty table.
    pub average_progress: u32,
}

/// Bucket every milestone by progress and average the lot.
pub fn overview_stats(milestones: &[Milestone]) -> OverviewStats {
    let total = milestones.len();
    let on_track = milestones.iter().filter(|m| m.progress >= 70).count();
    let in_progress = milestones
        .iter()
        .filter(|m| m.progress >= 40 && m.progress < 70)
        .count();
    let needs_attention = milestones.iter().filter(|m| m.progress < 40).count();

    let average_progress = if total == 0 {
        0
    } else {
        let sum: u64 = milestones.iter().map(|m| u64::from(m.progress)).sum();
        (sum as f64 / total as f64).round() as u32
    };

    OverviewStats {
        total,
        on_track,
        in_progress,
        needs_attention,
        average_progress,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn milestone(id: u32, progress: u32) -> Milestone {
        Milestone {
            id,
            title: format!("Milestone {id}"),
            category: None,
            description: None,
            progress,
            goal: None,
        }
    }

    #[test]
    fn buckets_split_on_40_and_70() {
        let stats = overview_stats(&[
            milestone(1, 70),
            milestone(2, 100),
            milestone(3, 69),
            milestone(4, 40),
            milestone(5, 39),
            milestone(6, 0),
        ]);
        assert_eq!(stats.total, 6);
        assert_eq!(stats.on_track, 2);
        assert_eq!(stats.in_progress, 2);
        assert_eq!(stats.needs_attention, 2);
    }

    #[test]
    fn average_is_rounded() {
        let stats = overview_stats(&[milestone(1, 65), milestone(2, 66)]);
        assert_eq!(stats.average_progress, 66);
    }

    #[test]
    fn empty_table_averages_to_zero() {
        let stats = overview_stats(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.average_progress, 0);
    }
}
