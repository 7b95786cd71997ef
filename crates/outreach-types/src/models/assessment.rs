//! Derived risk models. Never persisted; rebuilt from scratch on every change.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Operator-facing risk classification of a projected health value.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    /// Projected health above 75
    Safe,
    /// Projected health in (25, 75]
    Caution,
    /// Projected health at or below 25
    Critical,
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Safe => write!(f, "safe"),
            Self::Caution => write!(f, "caution"),
            Self::Critical => write!(f, "critical"),
        }
    }
}

/// The three independent penalty components, in health points.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct RiskBreakdown {
    /// Cost of daily-limit utilization
    pub load_penalty: f64,
    /// Cost of sending cadence
    pub speed_penalty: f64,
    /// Cost of duplicate content
    pub content_penalty: f64,
}

impl RiskBreakdown {
    /// Sum of the three components.
    pub fn total(&self) -> f64 {
        self.load_penalty + self.speed_penalty + self.content_penalty
    }
}

/// Projected effect of the campaign on one account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RiskAssessment {
    /// Account this assessment belongs to
    pub account_id: String,
    /// Health the projection starts from (0 for broken accounts)
    pub effective_health: i64,
    /// Risky recipients assigned to this account
    pub planned_messages: i64,
    pub load_penalty: f64,
    pub speed_penalty: f64,
    pub content_penalty: f64,
    /// `load_penalty + speed_penalty + content_penalty`
    pub total_risk: f64,
    /// Expected health after the campaign, within [0, 100]
    pub projected_health: f64,
    pub tier: RiskTier,
    /// Kamikaze accounts ignore throttling, so the numbers are advisory only
    pub advisory_only: bool,
}

/// Conditions the operator should see next to the preview.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlanWarning {
    /// Parallel sends share network egress; IP-level risk is not modeled
    ParallelExecution,
    /// Account runs in kamikaze mode; its projection is advisory only
    KamikazeAdvisory {
        /// Affected account
        account_id: String,
    },
    /// Selected account is absent from the current snapshot
    UnknownAccount {
        /// Unresolved account id
        account_id: String,
    },
    /// Nothing is selected; every workload is zero
    EmptySelection,
    /// Manual delay min exceeded max; the window was swapped
    DelayWindowSwapped,
    /// Work hours were outside 0-24 and got clamped
    WorkHoursClamped,
}

impl fmt::Display for PlanWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ParallelExecution => write!(
                f,
                "parallel execution: concurrent sends behind shared egress carry IP-level ban risk that is not projected"
            ),
            Self::KamikazeAdvisory { account_id } => {
                write!(f, "account {account_id} is in kamikaze mode; projection is advisory only")
            },
            Self::UnknownAccount { account_id } => {
                write!(f, "account {account_id} is not in the current snapshot and was skipped")
            },
            Self::EmptySelection => write!(f, "no accounts selected"),
            Self::DelayWindowSwapped => write!(f, "delay min was above max; window swapped"),
            Self::WorkHoursClamped => write!(f, "work hours clamped to 0-24"),
        }
    }
}

/// Tier counts and extremes across the selection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ProjectionSummary {
    pub safe: usize,
    pub caution: usize,
    pub critical: usize,
    /// Highest-risk tier present, `None` when nothing was assessed
    pub worst_tier: Option<RiskTier>,
    /// Lowest projected health across assessed accounts
    pub lowest_projected_health: Option<f64>,
}

/// Full preview of a campaign draft against an account snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CampaignProjection {
    /// Per-account assessments keyed by account id
    pub assessments: BTreeMap<String, RiskAssessment>,
    /// `ceil(total_recipients / accounts)`, display metric
    pub load_per_account: i64,
    /// `ceil(risky_recipients / accounts)`, the workload fed to risk math
    pub risky_per_account: i64,
    /// Average delay used for the speed penalty
    pub avg_delay_seconds: f64,
    pub warnings: Vec<PlanWarning>,
    pub summary: ProjectionSummary,
}

impl CampaignProjection {
    /// Check whether the operator must acknowledge an elevated-risk warning.
    pub fn requires_acknowledgement(&self) -> bool {
        self.summary.critical > 0
            || self.warnings.iter().any(|w| matches!(w, PlanWarning::ParallelExecution))
    }
}
