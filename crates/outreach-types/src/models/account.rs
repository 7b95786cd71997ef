//! Account snapshot model.

use super::lenient;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Connectivity/validity state of a sending account.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum AccountStatus {
    /// Token is valid and the account can send
    Ok,
    /// Account was banned by the platform
    Banned,
    /// Token was revoked or never valid
    Invalid,
    /// Last check failed with an error
    Error,
    /// Status missing or unrecognized
    #[default]
    Unknown,
}

impl fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Ok => write!(f, "OK"),
            Self::Banned => write!(f, "BANNED"),
            Self::Invalid => write!(f, "INVALID"),
            Self::Error => write!(f, "ERROR"),
            Self::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

impl AccountStatus {
    /// Parse from string. Anything unrecognized is `Unknown`.
    pub fn from_string(s: &str) -> Self {
        match s.trim().to_ascii_uppercase().as_str() {
            "OK" => Self::Ok,
            "BANNED" => Self::Banned,
            "INVALID" => Self::Invalid,
            "ERROR" => Self::Error,
            _ => Self::Unknown,
        }
    }

    /// Whether the account can be counted on for any sending capacity.
    pub const fn is_ok(self) -> bool {
        matches!(self, Self::Ok)
    }
}

impl<'de> Deserialize<'de> for AccountStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(value.as_str().map_or(Self::Unknown, Self::from_string))
    }
}

/// Read-only snapshot of a sending account, as delivered by the accounts source.
///
/// The planner never mutates these; a refreshed list replaces the old one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Account {
    /// Unique identifier for the account
    pub id: String,
    /// Connectivity/validity state
    #[serde(default)]
    pub status: AccountStatus,
    /// Stored health (0-100). `None` means the account was never damaged.
    #[serde(default, deserialize_with = "lenient::opt_int")]
    pub health_score: Option<i64>,
    /// Daily send limit, 0 = unlimited
    #[serde(default, deserialize_with = "lenient::int")]
    pub day_limit: i64,
    /// Messages already sent since the last daily reset
    #[serde(default, deserialize_with = "lenient::int")]
    pub messages_sent_today: i64,
    /// Epoch seconds of the last send, if any
    #[serde(default, deserialize_with = "lenient::opt_int")]
    pub last_activity_at: Option<i64>,
    /// Operator override that disables throttling at execution time
    #[serde(default, deserialize_with = "lenient::flag")]
    pub kamikaze_mode: bool,
}

impl Account {
    /// Create a fresh OK account with no usage and no stored health.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            status: AccountStatus::Ok,
            health_score: None,
            day_limit: 0,
            messages_sent_today: 0,
            last_activity_at: None,
            kamikaze_mode: false,
        }
    }

    /// Set the stored health score.
    #[must_use]
    pub fn with_health(mut self, health: i64) -> Self {
        self.health_score = Some(health);
        self
    }

    /// Set the daily limit and today's usage.
    #[must_use]
    pub fn with_usage(mut self, day_limit: i64, sent_today: i64) -> Self {
        self.day_limit = day_limit;
        self.messages_sent_today = sent_today;
        self
    }

    /// Set the connectivity status.
    #[must_use]
    pub fn with_status(mut self, status: AccountStatus) -> Self {
        self.status = status;
        self
    }

    /// Set the last activity timestamp.
    #[must_use]
    pub fn with_last_activity(mut self, epoch_seconds: i64) -> Self {
        self.last_activity_at = Some(epoch_seconds);
        self
    }

    /// Enable kamikaze mode.
    #[must_use]
    pub fn with_kamikaze(mut self) -> Self {
        self.kamikaze_mode = true;
        self
    }
}
