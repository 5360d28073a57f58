//! In-process [`HackathonStore`], for previews and tests.

use super::store::{HackathonStore, SavedSet};
use crate::domain::{HackathonRecord, HackboardError, Result};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Default)]
pub struct MemoryStore {
    records: Vec<HackathonRecord>,
    saved: Mutex<HashMap<String, SavedSet>>,
    fail_fetch: AtomicBool,
    fail_mutation: AtomicBool,
}

impl MemoryStore {
    /// `records` are returned as-is, so pass them in fetch order.
    pub fn new(records: Vec<HackathonRecord>) -> Self {
        Self {
            records,
            ..Default::default()
        }
    }

    /// Make every following read fail (or succeed again).
    pub fn set_fail_fetch(&self, fail: bool) {
        self.fail_fetch.store(fail, Ordering::SeqCst);
    }

    /// Make every following write fail (or succeed again).
    pub fn set_fail_mutation(&self, fail: bool) {
        self.fail_mutation.store(fail, Ordering::SeqCst);
    }

    fn check_fetch(&self) -> Result {
        if self.fail_fetch.load(Ordering::SeqCst) {
            return Err(HackboardError::Fetch("store unavailable".to_string()));
        }
        Ok(())
    }

    fn check_mutation(&self) -> Result {
        if self.fail_mutation.load(Ordering::SeqCst) {
            return Err(HackboardError::Mutation("store rejected the write".to_string()));
        }
        Ok(())
    }
}

impl HackathonStore for MemoryStore {
    fn fetch_active_hackathons(&self) -> Result<Vec<HackathonRecord>> {
        self.check_fetch()?;
        Ok(self.records.clone())
    }

    fn fetch_saved_ids(&self, user: Option<&str>) -> Result<SavedSet> {
        self.check_fetch()?;
        Ok(user
            .and_then(|u| self.saved.lock().get(u).cloned())
            .unwrap_or_default())
    }

    fn save_record(&self, user: &str, record_id: &str) -> Result {
        self.check_mutation()?;
        self.saved
            .lock()
            .entry(user.to_string())
            .or_default()
            .insert(record_id.to_string());
        Ok(())
    }

    fn unsave_record(&self, user: &str, record_id: &str) -> Result {
        self.check_mutation()?;
        if let Some(ids) = self.saved.lock().get_mut(user) {
            ids.remove(record_id);
        }
        Ok(())
    }
}
