//! Shared sync pipeline behind `etapp sync`.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! select sources -> conditional fetch -> cache upsert -> progress update
//!
//! The CLI layer can then focus on presentation (printing the report).

use chrono::{DateTime, Utc};

use crate::config::Config;
use crate::data::{FetchOutcome, ScbClient};
use crate::domain::{CacheRow, GoalSpec, Milestone, SourceRow, Transformed};
use crate::error::AppError;
use crate::projection::achieved_percent;
use crate::store::Store;

/// Outcome of syncing one source.
#[derive(Debug, Clone)]
pub struct SyncOutcome {
    pub source_id: u32,
    /// `"updated"`, `"not-modified"`, or `"error:<status>"`.
    pub status: String,
    pub payload_summary: Option<u64>,
    /// `(before, after)` when a linked milestone's progress moved.
    pub progress_change: Option<(u32, u32)>,
}

/// All outcomes of a single `etapp sync` run.
#[derive(Debug, Clone, Default)]
pub struct SyncReport {
    pub outcomes: Vec<SyncOutcome>,
}

/// Execute a sync run over one source (by id, active or not) or all
/// active sources.
pub fn run_sync(config: &Config, source_filter: Option<u32>) -> Result<SyncReport, AppError> {
    let store = Store::open(&config.store_dir);

    // 1) Pick the sources for this run.
    let sources = select_sources(store.load_sources()?, source_filter)?;
    if sources.is_empty() {
        log::info!("no active sources to sync");
        return Ok(SyncReport::default());
    }

    // 2) Fetch each source sequentially, recording every outcome.
    let client = ScbClient::new(config)?;
    let mut milestones = store.load_milestones()?;
    let mut dirty = false;
    let mut outcomes = Vec::with_capacity(sources.len());

    for source in &sources {
        outcomes.push(sync_source(&client, &store, source, &mut milestones, &mut dirty)?);
    }

    // 3) Persist milestone movement once, after the walk.
    if dirty {
        store.save_milestones(&milestones)?;
    }

    Ok(SyncReport { outcomes })
}

fn select_sources(all: Vec<SourceRow>, filter: Option<u32>) -> Result<Vec<SourceRow>, AppError> {
    match filter {
        Some(id) => {
            let source = all
                .into_iter()
                .find(|s| s.id == id)
                .ok_or_else(|| AppError::new(3, format!("Unknown source id {id}")))?;
            Ok(vec![source])
        }
        None => Ok(all.into_iter().filter(|s| s.active).collect()),
    }
}

fn sync_source(
    client: &ScbClient,
    store: &Store,
    source: &SourceRow,
    milestones: &mut [Milestone],
    dirty: &mut bool,
) -> Result<SyncOutcome, AppError> {
    log::info!("syncing source id={} url={}", source.id, source.url);

    let cached = store.cache_row(source.id)?;
    let outcome = client.fetch_conditional(
        &source.url,
        cached.as_ref().and_then(|r| r.etag.as_deref()),
        cached.as_ref().and_then(|r| r.last_modified.as_deref()),
    )?;

    let now = Utc::now();
    let row = refreshed_row(cached, &outcome, source.id, now);
    store.upsert_cache(&row)?;

    match outcome {
        FetchOutcome::NotModified => {
            log::info!("  not-modified");
            Ok(SyncOutcome {
                source_id: source.id,
                status: row.status,
                payload_summary: None,
                progress_change: None,
            })
        }
        FetchOutcome::HttpError(status) => {
            log::warn!("  fetch error status={status}");
            Ok(SyncOutcome {
                source_id: source.id,
                status: row.status,
                payload_summary: None,
                progress_change: None,
            })
        }
        FetchOutcome::Fresh(_) => {
            let payload_summary = row.transformed.as_ref().and_then(|t| t.payload_summary);
            log::info!("  updated (payload summary: {payload_summary:?})");

            let progress_change = match (source.milestone_id, row.transformed.as_ref()) {
                (Some(mid), Some(transformed)) => {
                    apply_progress(milestones, mid, transformed, dirty)
                }
                _ => None,
            };

            Ok(SyncOutcome {
                source_id: source.id,
                status: "updated".to_string(),
                payload_summary,
                progress_change,
            })
        }
    }
}

/// Next cache row for a source after one fetch outcome.
///
/// A 304 touches the clock and status and keeps the stored validators and
/// payload; an HTTP error stamps `status` and `updated_at` but keeps the
/// last good payload; a fresh body replaces the row outright.
fn refreshed_row(
    cached: Option<CacheRow>,
    outcome: &FetchOutcome,
    source_id: u32,
    now: DateTime<Utc>,
) -> CacheRow {
    match outcome {
        FetchOutcome::NotModified => {
            let mut row = cached.unwrap_or_else(|| CacheRow::stub(source_id, now));
            row.last_fetched = now;
            row.status = "not-modified".to_string();
            row
        }
        FetchOutcome::HttpError(status) => {
            let mut row = cached.unwrap_or_else(|| CacheRow::stub(source_id, now));
            row.status = format!("error:{status}");
            row.updated_at = now;
            row
        }
        FetchOutcome::Fresh(fresh) => CacheRow {
            source_id,
            last_fetched: now,
            etag: fresh.etag.clone(),
            last_modified: fresh.last_modified.clone(),
            raw: fresh.payload.raw_value(),
            transformed: Some(fresh.payload.to_transformed(now)),
            status: "ok".to_string(),
            updated_at: now,
        },
    }
}

fn apply_progress(
    milestones: &mut [Milestone],
    milestone_id: u32,
    transformed: &Transformed,
    dirty: &mut bool,
) -> Option<(u32, u32)> {
    let milestone = milestones.iter_mut().find(|m| m.id == milestone_id)?;
    let goal = milestone.goal.as_ref().and_then(GoalSpec::from_value);
    let next = next_progress(
        milestone.progress,
        goal.as_ref(),
        &transformed.series,
        transformed.payload_summary,
    );

    if next == milestone.progress {
        log::info!(
            "  milestone id={milestone_id} progress unchanged ({}%)",
            milestone.progress
        );
        return None;
    }

    log::info!(
        "  milestone id={milestone_id} progress {} -> {next}",
        milestone.progress
    );
    let before = milestone.progress;
    milestone.progress = next;
    *dirty = true;
    Some((before, next))
}

/// Next progress value for a milestone after a fresh payload.
///
/// A decoded series recomputes progress outright, against the goal when one
/// is present. Without a series, a numeric payload summary nudges progress
/// the legacy way. Anything else leaves it alone.
pub fn next_progress(
    current: u32,
    goal: Option<&GoalSpec>,
    series: &[f64],
    payload_summary: Option<u64>,
) -> u32 {
    if !series.is_empty() {
        return achieved_percent(goal, series).unwrap_or(current);
    }
    if let Some(count) = payload_summary {
        return (u64::from(current).saturating_add(count)).min(100) as u32;
    }
    current
}
