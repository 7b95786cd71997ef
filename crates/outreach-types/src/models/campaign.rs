//! Campaign draft model: what the operator is composing right now.

use super::lenient;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How inter-message delays are chosen.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DelayMode {
    /// Operator-entered min/max window
    #[default]
    Manual,
    /// Adaptive delays chosen by the execution service
    Auto,
}

impl fmt::Display for DelayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Manual => write!(f, "manual"),
            Self::Auto => write!(f, "auto"),
        }
    }
}

/// How the execution service walks the selected accounts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    /// One account at a time
    #[default]
    Sequential,
    /// All accounts concurrently
    Parallel,
}

impl fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Sequential => write!(f, "sequential"),
            Self::Parallel => write!(f, "parallel"),
        }
    }
}

/// Hours of the day (0-24) during which the execution service may send.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkHours {
    /// First hour sending is allowed
    #[serde(default, deserialize_with = "lenient::int")]
    pub start: i64,
    /// Hour sending stops
    #[serde(default = "default_work_end", deserialize_with = "lenient::int")]
    pub end: i64,
}

impl Default for WorkHours {
    fn default() -> Self {
        Self { start: 0, end: default_work_end() }
    }
}

const fn default_work_end() -> i64 {
    24
}

/// Execution-time filters, forwarded verbatim to the start-campaign call.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct CampaignFilters {
    /// Skip recipients that already have a conversation with the account
    #[serde(default, deserialize_with = "lenient::flag")]
    pub skip_if_dialog_exists: bool,
    /// Move recipients back to the "new" pipeline status after sending
    #[serde(default, deserialize_with = "lenient::flag")]
    pub reset_status_new: bool,
    /// Send a friend request alongside the message
    #[serde(default, deserialize_with = "lenient::flag")]
    pub add_friends: bool,
}

/// A prospective recipient as seen by the campaign composer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    /// Recipient identifier on the platform
    pub id: String,
    /// Whether any account already has a conversation with this contact
    #[serde(default, deserialize_with = "lenient::flag")]
    pub has_dialog: bool,
}

/// Ephemeral campaign draft, rebuilt on every edit in the composer.
///
/// Numeric fields are kept signed and unclamped: the planner sanitizes them
/// at use so that a half-typed value never breaks the preview.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CampaignDraft {
    /// Recipient ids forwarded to the execution service
    #[serde(default)]
    pub recipients: Vec<String>,
    /// Count of all assigned recipients (display only)
    #[serde(default, deserialize_with = "lenient::int")]
    pub total_recipients: i64,
    /// Recipients with no prior conversation; the only count feeding risk math
    #[serde(default, deserialize_with = "lenient::int")]
    pub risky_recipients: i64,
    /// Selected account ids, in operator order
    #[serde(default)]
    pub selected_accounts: Vec<String>,
    /// Number of distinct renderable template variants
    #[serde(default = "default_uniqueness", deserialize_with = "lenient::int")]
    pub uniqueness_score: i64,
    /// Delay selection mode
    #[serde(default)]
    pub delay_mode: DelayMode,
    /// Minimum delay between messages in seconds (manual mode only)
    #[serde(default, deserialize_with = "lenient::float")]
    pub delay_min: f64,
    /// Maximum delay between messages in seconds (manual mode only)
    #[serde(default, deserialize_with = "lenient::float")]
    pub delay_max: f64,
    /// Account traversal strategy
    #[serde(default)]
    pub execution_mode: ExecutionMode,
    /// Sending window
    #[serde(default)]
    pub work_hours: WorkHours,
    /// Execution-time filters
    #[serde(default)]
    pub filters: CampaignFilters,
}

const fn default_uniqueness() -> i64 {
    1
}

impl Default for CampaignDraft {
    fn default() -> Self {
        Self {
            recipients: Vec::new(),
            total_recipients: 0,
            risky_recipients: 0,
            selected_accounts: Vec::new(),
            uniqueness_score: default_uniqueness(),
            delay_mode: DelayMode::Manual,
            delay_min: 0.0,
            delay_max: 0.0,
            execution_mode: ExecutionMode::Sequential,
            work_hours: WorkHours::default(),
            filters: CampaignFilters::default(),
        }
    }
}

impl CampaignDraft {
    /// Draft with the given recipient counts and selected accounts.
    pub fn new(total_recipients: i64, risky_recipients: i64, accounts: &[&str]) -> Self {
        Self {
            total_recipients,
            risky_recipients,
            selected_accounts: accounts.iter().map(|id| (*id).to_string()).collect(),
            ..Self::default()
        }
    }

    /// Set a manual delay window in seconds.
    #[must_use]
    pub fn with_manual_delay(mut self, min: f64, max: f64) -> Self {
        self.delay_mode = DelayMode::Manual;
        self.delay_min = min;
        self.delay_max = max;
        self
    }

    /// Switch to adaptive delays.
    #[must_use]
    pub fn with_auto_delay(mut self) -> Self {
        self.delay_mode = DelayMode::Auto;
        self
    }

    /// Set the template uniqueness score.
    #[must_use]
    pub fn with_uniqueness(mut self, score: i64) -> Self {
        self.uniqueness_score = score;
        self
    }

    /// Set the execution mode.
    #[must_use]
    pub fn with_execution_mode(mut self, mode: ExecutionMode) -> Self {
        self.execution_mode = mode;
        self
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_defaults() {
        let draft: CampaignDraft = serde_json::from_str("{}").unwrap();

        assert_eq!(draft.uniqueness_score, 1);
        assert_eq!(draft.delay_mode, DelayMode::Manual);
        assert_eq!(draft.execution_mode, ExecutionMode::Sequential);
        assert_eq!(draft.work_hours, WorkHours { start: 0, end: 24 });
        assert!(draft.selected_accounts.is_empty());
    }

    #[test]
    fn test_draft_wire_names() {
        let json = r#"{
            "total_recipients": 120,
            "risky_recipients": "80",
            "selected_accounts": ["a", "b"],
            "uniqueness_score": 4,
            "delay_mode": "auto",
            "execution_mode": "parallel",
            "work_hours": {"start": 9, "end": 21},
            "filters": {"skip_if_dialog_exists": true}
        }"#;
        let draft: CampaignDraft = serde_json::from_str(json).unwrap();

        assert_eq!(draft.risky_recipients, 80);
        assert_eq!(draft.delay_mode, DelayMode::Auto);
        assert_eq!(draft.execution_mode, ExecutionMode::Parallel);
        assert_eq!(draft.work_hours.end, 21);
        assert!(draft.filters.skip_if_dialog_exists);
        assert!(!draft.filters.add_friends);
    }
}
