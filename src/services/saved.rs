//! Save/unsave toggle - business logic only.

use crate::domain::{HackboardError, Result};
use crate::repositories::{HackathonStore, SavedSet};
use tracing::{info, warn};

/// Flip whether `record_id` is saved for `user`, given whether it is saved now.
///
/// Returns the record's new saved flag once the store accepted the write. The
/// caller applies it to its current set; on any error nothing changes.
///
/// # Errors
///
/// Returns [`HackboardError::NotSignedIn`] without a user and
/// [`HackboardError::Mutation`] when the store rejects the write.
pub fn toggle(
    store: &dyn HackathonStore,
    user: Option<&str>,
    record_id: &str,
    was_saved: bool,
) -> Result<bool> {
    let user = user.ok_or(HackboardError::NotSignedIn)?;

    let outcome = if was_saved {
        store.unsave_record(user, record_id)
    } else {
        store.save_record(user, record_id)
    };

    if let Err(e) = outcome {
        warn!(record_id, "Save toggle failed: {e}");
        return Err(e.into_mutation());
    }

    info!(record_id, saved = !was_saved, "Save toggled");
    Ok(!was_saved)
}

/// Record one toggle outcome in `saved`, leaving every other id as it is.
pub fn apply(saved: &mut SavedSet, record_id: &str, now_saved: bool) {
    if now_saved {
        saved.insert(record_id.to_string());
    } else {
        saved.remove(record_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::MemoryStore;

    #[test]
    fn toggles_both_ways() {
        let store = MemoryStore::default();
        assert_eq!(toggle(&store, Some("ana"), "h1", false), Ok(true));
        assert!(store.fetch_saved_ids(Some("ana")).unwrap().contains("h1"));

        assert_eq!(toggle(&store, Some("ana"), "h1", true), Ok(false));
        assert!(store.fetch_saved_ids(Some("ana")).unwrap().is_empty());
    }

    #[test]
    fn failed_write_leaves_state_alone() {
        let store = MemoryStore::default();
        store.set_fail_mutation(true);

        let err = toggle(&store, Some("ana"), "h1", true).unwrap_err();
        assert!(matches!(err, HackboardError::Mutation(_)));

        let err = toggle(&store, Some("ana"), "h2", false).unwrap_err();
        assert!(matches!(err, HackboardError::Mutation(_)));
        assert!(store.fetch_saved_ids(Some("ana")).unwrap().is_empty());
    }

    #[test]
    fn anonymous_user_cannot_save() {
        let store = MemoryStore::default();
        assert_eq!(
            toggle(&store, None, "h1", false),
            Err(HackboardError::NotSignedIn)
        );
    }

    #[test]
    fn apply_only_touches_its_own_id() {
        let mut saved = SavedSet::from(["a".to_string()]);
        apply(&mut saved, "b", true);
        apply(&mut saved, "c", false);
        assert_eq!(saved, SavedSet::from(["a".to_string(), "b".to_string()]));

        apply(&mut saved, "a", false);
        assert_eq!(saved, SavedSet::from(["b".to_string()]));
    }
}
