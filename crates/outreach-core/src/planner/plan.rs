//! Draft normalization: operator input in, sanitized plan plus warnings out.

use super::sanitize;
use crate::error::AppResult;
use outreach_types::models::{
    Account, CampaignDraft, CampaignFilters, DelayMode, ExecutionMode, PlanWarning,
};
use outreach_types::{PlanError, RiskModelConfig};
use std::collections::HashSet;

/// Delay bounds in seconds, `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DelayWindow {
    pub min: f64,
    pub max: f64,
}

impl DelayWindow {
    /// Midpoint, used as the average cadence.
    pub fn average(&self) -> f64 {
        (self.min + self.max) / 2.0
    }
}

/// A draft after clamping, de-duplication and auto-mode substitution.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedPlan {
    /// Selected ids, de-duplicated, first occurrence wins
    pub selected_accounts: Vec<String>,
    pub total_recipients: i64,
    pub risky_recipients: i64,
    /// At least 1
    pub uniqueness_score: i64,
    pub delay_mode: DelayMode,
    pub delay: DelayWindow,
    pub execution_mode: ExecutionMode,
    pub work_start: u8,
    pub work_end: u8,
    pub filters: CampaignFilters,
    pub warnings: Vec<PlanWarning>,
}

/// Normalize a draft for the calculators and the submission payload.
///
/// Auto delay mode always substitutes the configured 60s/120s window and
/// ignores whatever the manual fields hold. Parallel execution leaves the
/// per-account math untouched but is surfaced as a warning.
pub fn normalize(draft: &CampaignDraft, config: &RiskModelConfig) -> NormalizedPlan {
    let mut warnings = Vec::new();

    let mut seen = HashSet::new();
    let mut selected_accounts = Vec::with_capacity(draft.selected_accounts.len());
    for id in &draft.selected_accounts {
        if !id.is_empty() && seen.insert(id.as_str()) {
            selected_accounts.push(id.clone());
        }
    }
    if selected_accounts.is_empty() {
        warnings.push(PlanWarning::EmptySelection);
    }

    let delay = match draft.delay_mode {
        DelayMode::Auto => DelayWindow {
            min: f64::from(config.auto_delay_min),
            max: f64::from(config.auto_delay_max),
        },
        DelayMode::Manual => {
            let min = sanitize::seconds(draft.delay_min);
            let max = sanitize::seconds(draft.delay_max);
            if min > max {
                warnings.push(PlanWarning::DelayWindowSwapped);
                DelayWindow { min: max, max: min }
            } else {
                DelayWindow { min, max }
            }
        },
    };

    let work_start = clamp_hour(draft.work_hours.start);
    let work_end = clamp_hour(draft.work_hours.end);
    if i64::from(work_start) != draft.work_hours.start || i64::from(work_end) != draft.work_hours.end
    {
        warnings.push(PlanWarning::WorkHoursClamped);
    }

    if draft.execution_mode == ExecutionMode::Parallel {
        tracing::warn!(
            "Parallel execution selected: shared-egress IP risk is outside the projection"
        );
        warnings.push(PlanWarning::ParallelExecution);
    }

    NormalizedPlan {
        selected_accounts,
        total_recipients: sanitize::count(draft.total_recipients),
        risky_recipients: sanitize::count(draft.risky_recipients),
        uniqueness_score: draft.uniqueness_score.max(1),
        delay_mode: draft.delay_mode,
        delay,
        execution_mode: draft.execution_mode,
        work_start,
        work_end,
        filters: draft.filters,
        warnings,
    }
}

fn clamp_hour(hour: i64) -> u8 {
    hour.clamp(0, 24) as u8
}

/// Checks a submitting surface runs before handing the draft to the
/// execution service. The preview never calls this.
pub fn validate_for_submission(draft: &CampaignDraft, accounts: &[Account]) -> AppResult<()> {
    if draft.selected_accounts.iter().all(String::is_empty) {
        return Err(PlanError::NoAccounts.into());
    }
    if sanitize::count(draft.total_recipients) == 0 && draft.recipients.is_empty() {
        return Err(PlanError::NoRecipients.into());
    }
    if sanitize::count(draft.risky_recipients) > sanitize::count(draft.total_recipients) {
        return Err(PlanError::ValidationError {
            field: "risky_recipients".to_string(),
            message: "cannot exceed total_recipients".to_string(),
        }
        .into());
    }
    if let Some(missing) = draft
        .selected_accounts
        .iter()
        .filter(|id| !id.is_empty())
        .find(|id| !accounts.iter().any(|a| &a.id == *id))
    {
        return Err(PlanError::UnknownAccount { id: missing.clone() }.into());
    }
    Ok(())
}
