//! JSON-file store.
//!
//! One directory holds three files:
//!
//! - `milestones.json`: the milestone table, progress included
//! - `sources.json`: the SCB source table
//! - `cache.json`: one fetch-cache row per source
//!
//! Rows are read and written whole; the cache is upserted per source the
//! same way each sync step lands.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::domain::{CacheRow, Milestone, SourceRow};
use crate::error::AppError;

const MILESTONES_FILE: &str = "milestones.json";
const SOURCES_FILE: &str = "sources.json";
const CACHE_FILE: &str = "cache.json";

pub struct Store {
    dir: PathBuf,
}

impl Store {
    pub fn open(dir: &Path) -> Self {
        Self { dir: dir.to_path_buf() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// True once `seed` has written a milestone table here.
    pub fn is_seeded(&self) -> bool {
        self.dir.join(MILESTONES_FILE).exists()
    }

    /// Write the full milestone and source tables plus an empty cache,
    /// replacing whatever was there.
    pub fn seed(&self, milestones: &[Milestone], sources: &[SourceRow]) -> Result<(), AppError> {
        fs::create_dir_all(&self.dir)
            .map_err(|e| AppError::new(2, format!("Failed to create store directory '{}': {e}", self.dir.display())))?;
        write_json(&self.dir.join(MILESTONES_FILE), &milestones)?;
        write_json(&self.dir.join(SOURCES_FILE), &sources)?;
        write_json(&self.dir.join(CACHE_FILE), &Vec::<CacheRow>::new())?;
        Ok(())
    }

    pub fn load_milestones(&self) -> Result<Vec<Milestone>, AppError> {
        read_json(&self.seeded_path(MILESTONES_FILE)?)
    }

    pub fn save_milestones(&self, milestones: &[Milestone]) -> Result<(), AppError> {
        write_json(&self.dir.join(MILESTONES_FILE), &milestones)
    }

    pub fn load_sources(&self) -> Result<Vec<SourceRow>, AppError> {
        read_json(&self.seeded_path(SOURCES_FILE)?)
    }

    /// The cache row for one source, if any fetch has been recorded.
    pub fn cache_row(&self, source_id: u32) -> Result<Option<CacheRow>, AppError> {
        let rows = self.load_cache()?;
        Ok(rows.into_iter().find(|r| r.source_id == source_id))
    }

    /// All cache rows. An absent cache file reads as empty so a freshly
    /// seeded or hand-pruned store still syncs.
    pub fn load_cache(&self) -> Result<Vec<CacheRow>, AppError> {
        let path = self.dir.join(CACHE_FILE);
        if !path.exists() {
            return Ok(Vec::new());
        }
        read_json(&path)
    }

    /// Replace the row for `row.source_id`, or append it.
    pub fn upsert_cache(&self, row: &CacheRow) -> Result<(), AppError> {
        let mut rows = self.load_cache()?;
        match rows.iter_mut().find(|r| r.source_id == row.source_id) {
            Some(existing) => *existing = row.clone(),
            None => rows.push(row.clone()),
        }
        write_json(&self.dir.join(CACHE_FILE), &rows)
    }

    fn seeded_path(&self, name: &str) -> Result<PathBuf, AppError> {
        let path = self.dir.join(name);
        if !path.exists() {
            return Err(AppError::new(
                3,
                format!("No milestone store at '{}'. Run `etapp init` first.", self.dir.display()),
            ));
        }
        Ok(path)
    }
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create '{}': {e}", path.display())))?;
    serde_json::to_writer_pretty(file, value)
        .map_err(|e| AppError::new(2, format!("Failed to write '{}': {e}", path.display())))?;
    Ok(())
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open '{}': {e}", path.display())))?;
    serde_json::from_reader(file)
        .map_err(|e| AppError::new(2, format!("Invalid JSON in '{}': {e}", path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::catalog::{builtin_milestones, builtin_sources};
    use chrono::Utc;

    fn seeded_store(dir: &Path) -> Store {
        let store = Store::open(dir);
        store
            .seed(&builtin_milestones(), &builtin_sources())
            .unwrap();
        store
    }

    #[test]
    fn seed_then_load_round_trips() {
        let tmp = tempfile::tempdir().unwrap();
        let store = seeded_store(tmp.path());

        assert!(store.is_seeded());
        assert_eq!(store.load_milestones().unwrap().len(), 20);
        assert_eq!(store.load_sources().unwrap().len(), 5);
        assert!(store.load_cache().unwrap().is_empty());
    }

    #[test]
    fn unseeded_store_points_at_init() {
        let tmp = tempfile::tempdir().unwrap();
        let store = Store::open(tmp.path());

        assert!(!store.is_seeded());
        let err = store.load_milestones().unwrap_err();
        assert_eq!(err.exit_code(), 3);
        assert!(err.to_string().contains("etapp init"));
    }

    #[test]
    fn upsert_inserts_then_replaces() {
        let tmp = tempfile::tempdir().unwrap();
        let store = seeded_store(tmp.path());

        let mut row = CacheRow::stub(4, Utc::now());
        row.status = "ok".to_string();
        store.upsert_cache(&row).unwrap();
        assert_eq!(store.cache_row(4).unwrap().unwrap().status, "ok");

        row.status = "not-modified".to_string();
        store.upsert_cache(&row).unwrap();
        let rows = store.load_cache().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].status, "not-modified");
    }

    #[test]
    fn saved_milestone_changes_persist() {
        let tmp = tempfile::tempdir().unwrap();
        let store = seeded_store(tmp.path());

        let mut milestones = store.load_milestones().unwrap();
        milestones[0].progress = 99;
        store.save_milestones(&milestones).unwrap();

        assert_eq!(store.load_milestones().unwrap()[0].progress, 99);
    }

    #[test]
    fn corrupt_table_reports_the_file() {
        let tmp = tempfile::tempdir().unwrap();
        let store = seeded_store(tmp.path());
        std::fs::write(tmp.path().join("milestones.json"), "{ not json").unwrap();

        let err = store.load_milestones().unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("milestones.json"));
    }
}
