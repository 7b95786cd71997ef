//! Campaign risk projection and load distribution.
//!
//! ```text
//! CampaignDraft ──normalize──► NormalizedPlan
//!                                   │
//! Account snapshot ──resolve────────┤
//!                                   ▼
//!                  distribute ──► RiskCalculator ──► projection ──► CampaignProjection
//! ```

pub mod distribution;
pub mod health;
pub mod plan;
pub mod projection;
pub mod recipients;
pub mod risk;
pub(crate) mod sanitize;
pub mod submission;
pub mod template;

pub use distribution::distribute;
pub use health::effective_health;
pub use plan::{normalize, validate_for_submission, DelayWindow, NormalizedPlan};
pub use projection::{classify_tier, projected_health};
pub use recipients::RecipientPool;
pub use risk::{RiskCalculator, RiskInputs};
pub use submission::build_submission;
pub use template::{count_variants, uniqueness_score};

use outreach_types::models::{Account, CampaignDraft, CampaignProjection, RiskAssessment};
use outreach_types::RiskModelConfig;
use std::collections::BTreeMap;

/// Entry point for previews. Holds only immutable tuning, never account state.
#[derive(Debug, Clone, Default)]
pub struct Planner {
    config: RiskModelConfig,
    calculator: RiskCalculator,
}

impl Planner {
    /// Create a planner with custom tuning.
    pub fn new(config: RiskModelConfig) -> Self {
        let calculator = RiskCalculator::new(config.clone());
        Self { config, calculator }
    }

    /// Tuning in effect.
    pub const fn config(&self) -> &RiskModelConfig {
        &self.config
    }

    /// Penalty calculator in effect.
    pub const fn calculator(&self) -> &RiskCalculator {
        &self.calculator
    }
}

/// Per-account assessments with default tuning.
///
/// `now` is the evaluation instant in epoch seconds, used for idle-time cooling.
pub fn compute_risk_assessment(
    draft: &CampaignDraft,
    accounts: &[Account],
    now: i64,
) -> BTreeMap<String, RiskAssessment> {
    Planner::default().compute_risk_assessment(draft, accounts, now)
}

/// Full campaign preview with default tuning.
pub fn project_campaign(
    draft: &CampaignDraft,
    accounts: &[Account],
    now: i64,
) -> CampaignProjection {
    Planner::default().project_campaign(draft, accounts, now)
}
