//! Hackathon listing records as delivered by the backend.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

// =============================================================================
// Enumerated tags
// =============================================================================

/// Platform a listing was collected from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Mlh,
    Devfolio,
    Unstop,
    Devpost,
    Community,
    /// Any tag the backend added after this build.
    #[serde(other)]
    Other,
}

impl Source {
    pub const ALL: [Source; 5] = [
        Source::Mlh,
        Source::Devfolio,
        Source::Unstop,
        Source::Devpost,
        Source::Community,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Mlh => "MLH",
            Source::Devfolio => "Devfolio",
            Source::Unstop => "Unstop",
            Source::Devpost => "Devpost",
            Source::Community => "Community",
            Source::Other => "Other",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How participants take part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Online,
    Offline,
    Hybrid,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Online => "Online",
            Mode::Offline => "In person",
            Mode::Hybrid => "Hybrid",
        }
    }

    /// Online and hybrid events can be joined remotely.
    pub fn is_remote_friendly(&self) -> bool {
        matches!(self, Mode::Online | Mode::Hybrid)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Record
// =============================================================================

/// One hackathon listing. Timestamps stay ISO-8601 text and are parsed on
/// demand, so a malformed date only affects the value that reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HackathonRecord {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub source: Source,
    pub mode: Mode,
    pub start_date: String,
    pub end_date: String,
    pub registration_deadline: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub prize_pool: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub skills: Vec<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    pub created_at: String,
}

fn default_active() -> bool {
    true
}

/// Backend rows carry `null` for an empty skill list.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

impl HackathonRecord {
    pub fn has_skill(&self, skill: &str) -> bool {
        self.skills.iter().any(|s| s == skill)
    }

    /// Location line for cards: the venue, or the mode when there is none.
    pub fn location_label(&self) -> String {
        match self.location.as_deref().map(str::trim) {
            Some(place) if !place.is_empty() => place.to_string(),
            _ => self.mode.as_str().to_string(),
        }
    }
}
