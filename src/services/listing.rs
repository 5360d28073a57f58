//! Listing page data - business logic only.

use crate::domain::{HackathonRecord, HackboardError, Result};
use crate::repositories::{HackathonStore, SavedSet};
use tracing::{info, warn};

/// Everything the listing page holds in memory.
#[derive(Debug, Clone, Default)]
pub struct Listing {
    pub records: Vec<HackathonRecord>,
    pub saved: SavedSet,
}

impl Listing {
    pub fn find(&self, id: &str) -> Option<&HackathonRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn is_saved(&self, id: &str) -> bool {
        self.saved.contains(id)
    }
}

/// Fetch listings and the user's saved ids.
///
/// # Errors
///
/// Returns [`HackboardError::Fetch`] when the listings cannot be read. A
/// failure to read saved ids only loses the saved markers.
pub fn load(store: &dyn HackathonStore, user: Option<&str>) -> Result<Listing> {
    let records = store
        .fetch_active_hackathons()
        .map_err(HackboardError::into_fetch)?;

    let saved = match store.fetch_saved_ids(user) {
        Ok(saved) => saved,
        Err(e) => {
            warn!("Could not read saved hackathons: {e}");
            SavedSet::new()
        }
    };

    info!(
        records = records.len(),
        saved = saved.len(),
        "Listing loaded"
    );
    Ok(Listing { records, saved })
}
