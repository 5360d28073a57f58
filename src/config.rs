//! Runtime configuration from the environment.

use crate::domain::{HackboardError, Result};
use std::path::PathBuf;
use std::time::Duration;
use std::{env, fmt::Display, str::FromStr};
use tracing::{info, warn};

pub const DATA_DIR_VAR: &str = "HACKBOARD_DATA_DIR";
pub const USER_ID_VAR: &str = "HACKBOARD_USER_ID";
pub const NOTICE_SECS_VAR: &str = "HACKBOARD_NOTICE_SECS";

const DEFAULT_NOTICE_SECS: u64 = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding `hackathons.json` and `saved.json`.
    pub data_dir: PathBuf,
    /// Signed-in user; `None` browses anonymously.
    pub user_id: Option<String>,
    /// How long a notice stays on screen.
    pub notice_duration: Duration,
}

impl Config {
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup. Bad values are logged and replaced by defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let data_dir = non_empty(lookup(DATA_DIR_VAR))
            .map(PathBuf::from)
            .unwrap_or_else(|| {
                let dir = default_data_dir();
                info!("{DATA_DIR_VAR} not set, using default: {}", dir.display());
                dir
            });

        let user_id = non_empty(lookup(USER_ID_VAR));
        if user_id.is_none() {
            info!("{USER_ID_VAR} not set, browsing anonymously");
        }

        let notice_secs = parse_or(NOTICE_SECS_VAR, lookup(NOTICE_SECS_VAR), DEFAULT_NOTICE_SECS);

        Self {
            data_dir,
            user_id,
            notice_duration: Duration::from_secs(notice_secs),
        }
    }

    /// The data directory may be missing (it is created on first save) but
    /// must not be something other than a directory.
    pub fn validate(&self) -> Result {
        if self.data_dir.exists() && !self.data_dir.is_dir() {
            return Err(HackboardError::Config(format!(
                "{DATA_DIR_VAR} points at {}, which is not a directory",
                self.data_dir.display()
            )));
        }
        Ok(())
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_or<T: FromStr + Display>(key: &str, raw: Option<String>, default: T) -> T
where
    T::Err: Display,
{
    let Some(raw) = non_empty(raw) else {
        return default;
    };
    raw.parse().unwrap_or_else(|e| {
        warn!("Invalid {key} value {raw:?}: {e}, using default: {default}");
        default
    })
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("hackboard"))
        .unwrap_or_else(|| PathBuf::from("data"))
}
