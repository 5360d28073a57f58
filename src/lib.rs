pub mod config;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod ticker;

// Public, stable-ish API surface for consumers (UI / other crates)

pub use crate::domain::{
    apply_filters, classify_status, compute_time_remaining, format_countdown, CountdownStatus,
    FilterSpec, HackathonRecord, HackboardError, Result, SortKey, TimeRemaining,
};

pub use crate::repositories::{HackathonStore, JsonStore, SavedSet};

pub use crate::ticker::{Clock, CountdownTicker, SystemClock};

pub mod prelude {
    pub use crate::config::Config;
    pub use crate::domain::{
        apply_filters, available_skills, classify_status, compute_time_remaining,
        format_countdown, format_countdown_clock, placeholder_gradient, time_remaining_until,
        CountdownStatus, FilterSpec, HackathonRecord, HackboardError, Mode, Result,
        SortKey, Source, TimeRemaining,
    };
    pub use crate::repositories::{HackathonStore, JsonStore, MemoryStore, SavedSet};
    pub use crate::services::{listing, saved};
    pub use crate::ticker::{Clock, CountdownTicker, SystemClock};
}
