//! Client-side listing filter and sort.

use super::countdown::parse_timestamp;
use super::hackathon::{HackathonRecord, Source};
use chrono::{DateTime, Utc};
use std::cmp::Reverse;
use std::collections::BTreeSet;
use std::fmt;

// =============================================================================
// Sort key
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    /// Registration deadline, earliest first.
    #[default]
    Deadline,
    /// Creation time, most recent first.
    Newest,
    /// Keep the order the store returned.
    FetchOrder,
}

impl SortKey {
    /// Keys offered in the sort picker.
    pub const ALL: [SortKey; 2] = [SortKey::Deadline, SortKey::Newest];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Deadline => "Deadline",
            SortKey::Newest => "Newest",
            SortKey::FetchOrder => "As listed",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for SortKey {
    /// Unknown keys leave the fetch order alone.
    fn from(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "deadline" => SortKey::Deadline,
            "newest" => SortKey::Newest,
            _ => SortKey::FetchOrder,
        }
    }
}

// =============================================================================
// Filter spec
// =============================================================================

/// The user's current predicates and sort key.
///
/// Treated as an immutable value: every `with_*` call returns a new spec and
/// the page swaps its spec out wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterSpec {
    pub search: String,
    pub source: Option<Source>,
    pub online_only: bool,
    pub skills: BTreeSet<String>,
    pub sort: SortKey,
}

impl FilterSpec {
    pub fn with_search(&self, search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            ..self.clone()
        }
    }

    pub fn with_source(&self, source: Option<Source>) -> Self {
        Self {
            source,
            ..self.clone()
        }
    }

    pub fn with_online_only(&self, online_only: bool) -> Self {
        Self {
            online_only,
            ..self.clone()
        }
    }

    /// Adds the skill when absent, removes it when present.
    pub fn with_skill_toggled(&self, skill: &str) -> Self {
        let mut skills = self.skills.clone();
        if !skills.remove(skill) {
            skills.insert(skill.to_string());
        }
        Self {
            skills,
            ..self.clone()
        }
    }

    pub fn with_sort(&self, sort: SortKey) -> Self {
        Self {
            sort,
            ..self.clone()
        }
    }

    /// Drops every predicate but keeps the sort key.
    pub fn cleared(&self) -> Self {
        Self {
            sort: self.sort,
            ..Default::default()
        }
    }

    /// True when no predicate narrows the listing.
    pub fn is_unfiltered(&self) -> bool {
        self.search.is_empty() && self.source.is_none() && !self.online_only && self.skills.is_empty()
    }
}

// =============================================================================
// Pipeline
// =============================================================================

/// Narrow and order `records` according to `spec`. The input is untouched.
pub fn apply_filters(records: &[HackathonRecord], spec: &FilterSpec) -> Vec<HackathonRecord> {
    let needle = spec.search.to_lowercase();

    let mut kept: Vec<HackathonRecord> = records
        .iter()
        .filter(|r| matches_search(r, &needle))
        .filter(|r| spec.source.is_none_or(|source| r.source == source))
        .filter(|r| !spec.online_only || r.mode.is_remote_friendly())
        .filter(|r| matches_any_skill(r, &spec.skills))
        .cloned()
        .collect();

    sort_records(&mut kept, spec.sort);
    kept
}

/// `needle` must already be lowercased.
fn matches_search(record: &HackathonRecord, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    let hit = |text: &str| text.to_lowercase().contains(needle);

    hit(&record.title)
        || record.description.as_deref().is_some_and(hit)
        || record.skills.iter().any(|skill| hit(skill))
}

/// Match-any: one shared skill is enough.
fn matches_any_skill(record: &HackathonRecord, required: &BTreeSet<String>) -> bool {
    required.is_empty() || record.skills.iter().any(|skill| required.contains(skill))
}

/// Stable in both directions. Unreadable deadlines count as passed and lead;
/// unreadable creation times trail under `Newest`.
fn sort_records(records: &mut [HackathonRecord], key: SortKey) {
    match key {
        SortKey::Deadline => {
            records.sort_by_cached_key(|r| timestamp_key(&r.registration_deadline));
        }
        SortKey::Newest => {
            records.sort_by_cached_key(|r| Reverse(timestamp_key(&r.created_at)));
        }
        SortKey::FetchOrder => {}
    }
}

fn timestamp_key(value: &str) -> Option<DateTime<Utc>> {
    parse_timestamp(value).ok()
}

/// Every skill tag present in `records`, sorted and deduplicated.
pub fn available_skills(records: &[HackathonRecord]) -> Vec<String> {
    records
        .iter()
        .flat_map(|r| r.skills.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::hackathon::{fixtures::record, Mode};
    use chrono::{Duration, TimeZone};
    use proptest::prelude::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap()
    }

    fn in_hours(hours: i64) -> String {
        (now() + Duration::hours(hours)).to_rfc3339()
    }

    fn ids(records: &[HackathonRecord]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    fn sample() -> Vec<HackathonRecord> {
        let mut a = record("a", &in_hours(50));
        a.title = "Rust Systems Jam".into();
        a.source = Source::Mlh;
        a.mode = Mode::Offline;
        a.skills = vec!["Rust".into(), "WebAssembly".into()];
        a.created_at = "2026-09-01T00:00:00Z".into();

        let mut b = record("b", &in_hours(5));
        b.title = "Climate Hack".into();
        b.description = Some("Open data for the planet".into());
        b.source = Source::Devpost;
        b.mode = Mode::Hybrid;
        b.skills = vec!["Python".into()];
        b.created_at = "2026-10-01T00:00:00Z".into();

        let mut c = record("c", &in_hours(200));
        c.title = "Design Sprint".into();
        c.source = Source::Devpost;
        c.mode = Mode::Online;
        c.created_at = "2026-08-15T00:00:00Z".into();

        vec![a, b, c]
    }

    #[test]
    fn default_spec_sorts_by_deadline() {
        let records = vec![record("1", &in_hours(1)), record("2", &in_hours(100))];
        let out = apply_filters(&records, &FilterSpec::default());
        assert_eq!(ids(&out), ["1", "2"]);

        let out = apply_filters(&sample(), &FilterSpec::default());
        assert_eq!(ids(&out), ["b", "a", "c"]);
    }

    #[test]
    fn search_without_match_is_empty() {
        let records = vec![record("1", &in_hours(1)), record("2", &in_hours(100))];
        let out = apply_filters(&records, &FilterSpec::default().with_search("nomatch"));
        assert!(out.is_empty());
    }

    #[test]
    fn search_covers_title_description_and_skills() {
        let spec = FilterSpec::default();
        assert_eq!(ids(&apply_filters(&sample(), &spec.with_search("JAM"))), ["a"]);
        assert_eq!(ids(&apply_filters(&sample(), &spec.with_search("planet"))), ["b"]);
        assert_eq!(ids(&apply_filters(&sample(), &spec.with_search("wasm"))), Vec::<&str>::new());
        assert_eq!(ids(&apply_filters(&sample(), &spec.with_search("assembly"))), ["a"]);
    }

    #[test]
    fn record_without_optional_fields_survives_empty_search() {
        let bare: HackathonRecord = serde_json::from_value(serde_json::json!({
            "id": "bare",
            "title": "Bare",
            "description": null,
            "skills": null,
            "source": "mlh",
            "mode": "online",
            "start_date": "2026-11-01",
            "end_date": "2026-11-02",
            "registration_deadline": "2026-10-30",
            "created_at": "2026-10-01"
        }))
        .unwrap();

        let out = apply_filters(std::slice::from_ref(&bare), &FilterSpec::default());
        assert_eq!(ids(&out), ["bare"]);

        let out = apply_filters(&[bare], &FilterSpec::default().with_search("python"));
        assert!(out.is_empty());
    }

    #[test]
    fn source_and_online_filters() {
        let spec = FilterSpec::default().with_source(Some(Source::Devpost));
        assert_eq!(ids(&apply_filters(&sample(), &spec)), ["b", "c"]);

        let spec = FilterSpec::default().with_online_only(true);
        assert_eq!(ids(&apply_filters(&sample(), &spec)), ["b", "c"]);

        let spec = spec.with_source(Some(Source::Mlh));
        assert!(apply_filters(&sample(), &spec).is_empty());
    }

    #[test]
    fn skills_filter_matches_any() {
        let spec = FilterSpec::default()
            .with_skill_toggled("Python")
            .with_skill_toggled("Rust");
        assert_eq!(ids(&apply_filters(&sample(), &spec)), ["b", "a"]);

        let spec = spec.with_skill_toggled("Rust");
        assert_eq!(spec.skills.len(), 1);
        assert_eq!(ids(&apply_filters(&sample(), &spec)), ["b"]);
    }

    #[test]
    fn newest_sorts_by_creation_descending() {
        let spec = FilterSpec::default().with_sort(SortKey::Newest);
        assert_eq!(ids(&apply_filters(&sample(), &spec)), ["b", "a", "c"]);
    }

    #[test]
    fn unknown_sort_key_keeps_fetch_order() {
        let spec = FilterSpec::default().with_sort(SortKey::from("popularity"));
        assert_eq!(spec.sort, SortKey::FetchOrder);
        assert_eq!(ids(&apply_filters(&sample(), &spec)), ["a", "b", "c"]);
        assert_eq!(SortKey::from(" Newest "), SortKey::Newest);
    }

    #[test]
    fn sort_is_stable_and_unreadable_deadlines_lead() {
        let same = in_hours(10);
        let records = vec![
            record("x", &same),
            record("bad", "whenever"),
            record("y", &same),
        ];
        let out = apply_filters(&records, &FilterSpec::default());
        assert_eq!(ids(&out), ["bad", "x", "y"]);
    }

    #[test]
    fn input_is_not_mutated() {
        let records = sample();
        let before = records.clone();
        let _ = apply_filters(&records, &FilterSpec::default().with_sort(SortKey::Newest));
        assert_eq!(records, before);
    }

    #[test]
    fn cleared_keeps_sort_only() {
        let spec = FilterSpec::default()
            .with_search("rust")
            .with_online_only(true)
            .with_sort(SortKey::Newest);
        assert!(!spec.is_unfiltered());
        let cleared = spec.cleared();
        assert!(cleared.is_unfiltered());
        assert_eq!(cleared.sort, SortKey::Newest);
    }

    #[test]
    fn skills_are_collected_sorted_and_unique() {
        let mut records = sample();
        records[2].skills = vec!["Python".into(), "AI".into()];
        assert_eq!(
            available_skills(&records),
            ["AI", "Python", "Rust", "WebAssembly"]
        );
    }

    fn arb_record() -> impl Strategy<Value = HackathonRecord> {
        (
            "[a-z]{1,6}",
            -500i64..500,
            prop::sample::select(vec![Source::Mlh, Source::Devpost, Source::Community]),
            prop::sample::select(vec![Mode::Online, Mode::Offline, Mode::Hybrid]),
            prop::collection::vec(prop::sample::select(vec!["Rust", "Go", "AI"]), 0..3),
        )
            .prop_map(|(title, hours, source, mode, skills)| {
                let mut r = record(&title, &in_hours(hours));
                r.title = title;
                r.source = source;
                r.mode = mode;
                r.skills = skills.into_iter().map(String::from).collect();
                r
            })
    }

    fn arb_spec() -> impl Strategy<Value = FilterSpec> {
        (
            "[a-z]{0,2}",
            any::<bool>(),
            prop::option::of(prop::sample::select(vec![Source::Mlh, Source::Devpost])),
            prop::collection::btree_set(prop::sample::select(vec!["Rust", "AI"]), 0..2),
        )
            .prop_map(|(search, online_only, source, skills)| FilterSpec {
                search,
                source,
                online_only,
                skills: skills.into_iter().map(String::from).collect(),
                sort: SortKey::Deadline,
            })
    }

    proptest! {
        #[test]
        fn applying_twice_changes_nothing(
            records in prop::collection::vec(arb_record(), 0..12),
            spec in arb_spec(),
        ) {
            let once = apply_filters(&records, &spec);
            let twice = apply_filters(&once, &spec);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn default_spec_keeps_everything_in_deadline_order(
            records in prop::collection::vec(arb_record(), 0..12),
        ) {
            let out = apply_filters(&records, &FilterSpec::default());
            prop_assert_eq!(out.len(), records.len());
            let deadlines: Vec<_> = out
                .iter()
                .map(|r| parse_timestamp(&r.registration_deadline).unwrap())
                .collect();
            prop_assert!(deadlines.windows(2).all(|w| w[0] <= w[1]));
        }
    }
}
