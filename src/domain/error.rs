//! Error types for the application.

use thiserror::Error;

pub type Result<T = (), E = HackboardError> = std::result::Result<T, E>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HackboardError {
    #[error("Failed to parse timestamp: {0}")]
    Parse(String),

    #[error("Failed to fetch hackathons: {0}")]
    Fetch(String),

    #[error("Failed to update saved hackathons: {0}")]
    Mutation(String),

    #[error("Sign in to save hackathons")]
    NotSignedIn,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("File system error: {0}")]
    Io(String),

    #[error("Malformed JSON: {0}")]
    Json(String),
}

impl HackboardError {
    /// Short text for the notice banner.
    pub fn to_user_string(&self) -> String {
        match self {
            Self::Fetch(_) => "Could not load hackathons. Try refreshing.".to_string(),
            Self::Mutation(_) => "Could not update your saved list.".to_string(),
            Self::NotSignedIn => self.to_string(),
            Self::Parse(e) => format!("Invalid date: {e}"),
            Self::Config(e) | Self::Io(e) | Self::Json(e) => e.clone(),
        }
    }

    /// Rewrap a store-level failure as a fetch failure.
    pub fn into_fetch(self) -> Self {
        match self {
            Self::Fetch(_) => self,
            other => Self::Fetch(other.to_string()),
        }
    }

    /// Rewrap a store-level failure as a mutation failure.
    pub fn into_mutation(self) -> Self {
        match self {
            Self::Mutation(_) | Self::NotSignedIn => self,
            other => Self::Mutation(other.to_string()),
        }
    }
}

impl From<std::io::Error> for HackboardError {
    fn from(e: std::io::Error) -> Self {
        HackboardError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for HackboardError {
    fn from(e: serde_json::Error) -> Self {
        HackboardError::Json(e.to_string())
    }
}
