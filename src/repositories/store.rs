//! The data-access seam to the hackathon backend.

use crate::domain::{HackathonRecord, Result};
use std::collections::HashSet;

/// Identifiers of the listings a user has saved.
pub type SavedSet = HashSet<String>;

/// What the listing and detail pages need from the backend.
///
/// Reads fail with [`HackboardError::Fetch`](crate::domain::HackboardError::Fetch),
/// writes with [`HackboardError::Mutation`](crate::domain::HackboardError::Mutation).
/// Saving an already saved listing, or unsaving one that is not saved, succeeds.
pub trait HackathonStore: Send + Sync {
    /// Active listings whose registration is still open, earliest deadline first.
    fn fetch_active_hackathons(&self) -> Result<Vec<HackathonRecord>>;

    /// Listings saved by `user`; anonymous sessions have none.
    fn fetch_saved_ids(&self, user: Option<&str>) -> Result<SavedSet>;

    fn save_record(&self, user: &str, record_id: &str) -> Result;

    fn unsave_record(&self, user: &str, record_id: &str) -> Result;
}
