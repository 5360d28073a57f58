//! File-backed [`HackathonStore`]: listings and saved ids as JSON in one directory.

use super::json_file::{read_json, read_json_or_default, write_json_atomic};
use super::store::{HackathonStore, SavedSet};
use crate::domain::{parse_timestamp, HackathonRecord, HackboardError, Result};
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;
use tracing::{debug, info};

pub const HACKATHONS_FILE: &str = "hackathons.json";
pub const SAVED_FILE: &str = "saved.json";

/// user id -> saved listing ids
type SavedFile = BTreeMap<String, BTreeSet<String>>;

pub struct JsonStore {
    dir: PathBuf,
    // Serialises read-modify-write of the saved file.
    write_lock: Mutex<()>,
}

impl JsonStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            write_lock: Mutex::new(()),
        }
    }

    fn hackathons_path(&self) -> PathBuf {
        self.dir.join(HACKATHONS_FILE)
    }

    fn saved_path(&self) -> PathBuf {
        self.dir.join(SAVED_FILE)
    }

    fn update_saved(&self, user: &str, change: impl FnOnce(&mut BTreeSet<String>)) -> Result {
        let _guard = self.write_lock.lock();
        let path = self.saved_path();

        let mut saved: SavedFile = read_json_or_default(&path).map_err(HackboardError::into_mutation)?;
        let entry = saved.entry(user.to_string()).or_default();
        change(entry);
        if entry.is_empty() {
            saved.remove(user);
        }

        write_json_atomic(&path, &saved).map_err(HackboardError::into_mutation)
    }
}

impl HackathonStore for JsonStore {
    fn fetch_active_hackathons(&self) -> Result<Vec<HackathonRecord>> {
        let path = self.hackathons_path();
        let records: Vec<HackathonRecord> = read_json(&path)
            .map_err(|e| HackboardError::Fetch(format!("{}: {e}", path.display())))?;
        let total = records.len();

        let active = select_active(records, Utc::now());
        info!(total, active = active.len(), "Loaded hackathons from {}", path.display());
        Ok(active)
    }

    fn fetch_saved_ids(&self, user: Option<&str>) -> Result<SavedSet> {
        let Some(user) = user else {
            return Ok(SavedSet::new());
        };

        let mut saved: SavedFile = read_json_or_default(&self.saved_path()).map_err(HackboardError::into_fetch)?;
        Ok(saved.remove(user).unwrap_or_default().into_iter().collect())
    }

    fn save_record(&self, user: &str, record_id: &str) -> Result {
        debug!(user, record_id, "Saving hackathon");
        self.update_saved(user, |ids| {
            ids.insert(record_id.to_string());
        })
    }

    fn unsave_record(&self, user: &str, record_id: &str) -> Result {
        debug!(user, record_id, "Unsaving hackathon");
        self.update_saved(user, |ids| {
            ids.remove(record_id);
        })
    }
}

/// The backend's listing query: active rows whose registration deadline is
/// still ahead of `now`, earliest deadline first. Rows with unreadable
/// deadlines are dropped.
pub fn select_active(records: Vec<HackathonRecord>, now: DateTime<Utc>) -> Vec<HackathonRecord> {
    let mut open: Vec<(DateTime<Utc>, HackathonRecord)> = records
        .into_iter()
        .filter(|r| r.is_active)
        .filter_map(|r| {
            let deadline = parse_timestamp(&r.registration_deadline).ok()?;
            (deadline > now).then_some((deadline, r))
        })
        .collect();

    open.sort_by_key(|(deadline, _)| *deadline);
    open.into_iter().map(|(_, r)| r).collect()
}
