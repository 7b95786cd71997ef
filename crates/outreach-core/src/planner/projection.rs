//! Projected health, tier classification and the full campaign preview.

use super::distribution::distribute_over;
use super::health::effective_health;
use super::plan::{normalize, NormalizedPlan};
use super::risk::RiskInputs;
use super::Planner;
use outreach_types::models::{
    Account, CampaignDraft, CampaignProjection, PlanWarning, ProjectionSummary, RiskAssessment,
    RiskBreakdown, RiskTier,
};
use std::collections::{BTreeMap, HashMap};

/// Above this the account is safe.
pub const SAFE_THRESHOLD: f64 = 75.0;
/// At or below this the account is critical.
pub const CRITICAL_THRESHOLD: f64 = 25.0;

/// `clamp(effective_health - total_risk, 0, 100)`.
pub fn projected_health(effective_health: i64, breakdown: &RiskBreakdown) -> f64 {
    let projected = effective_health as f64 - breakdown.total();
    if projected.is_nan() {
        return 0.0;
    }
    projected.clamp(0.0, 100.0)
}

/// `> 75` safe, `(25, 75]` caution, `<= 25` critical.
pub fn classify_tier(projected_health: f64) -> RiskTier {
    if projected_health > SAFE_THRESHOLD {
        RiskTier::Safe
    } else if projected_health > CRITICAL_THRESHOLD {
        RiskTier::Caution
    } else {
        RiskTier::Critical
    }
}

impl Planner {
    /// Assessment for one account carrying `planned_messages` risky recipients.
    pub fn assess_account(
        &self,
        account: &Account,
        planned_messages: i64,
        plan: &NormalizedPlan,
        now: i64,
    ) -> RiskAssessment {
        let inputs = RiskInputs {
            planned_messages,
            avg_delay_seconds: plan.delay.average(),
            uniqueness_score: plan.uniqueness_score,
            daily_limit: account.day_limit,
            already_sent_today: account.messages_sent_today,
            last_activity_epoch: account.last_activity_at,
            now,
        };
        let breakdown = self.calculator().assess(&inputs);
        let effective = effective_health(account);
        let projected = projected_health(effective, &breakdown);
        let tier = classify_tier(projected);

        tracing::debug!(
            account_id = %account.id,
            effective,
            planned_messages,
            load = breakdown.load_penalty,
            speed = breakdown.speed_penalty,
            content = breakdown.content_penalty,
            projected,
            %tier,
            "Projected account health"
        );

        RiskAssessment {
            account_id: account.id.clone(),
            effective_health: effective,
            planned_messages,
            load_penalty: breakdown.load_penalty,
            speed_penalty: breakdown.speed_penalty,
            content_penalty: breakdown.content_penalty,
            total_risk: breakdown.total(),
            projected_health: projected,
            tier,
            advisory_only: account.kamikaze_mode,
        }
    }

    /// Per-account assessments keyed by account id.
    pub fn compute_risk_assessment(
        &self,
        draft: &CampaignDraft,
        accounts: &[Account],
        now: i64,
    ) -> BTreeMap<String, RiskAssessment> {
        self.project_campaign(draft, accounts, now).assessments
    }

    /// Full preview: assessments, both distribution metrics, warnings, summary.
    ///
    /// Selected ids missing from `accounts` are skipped with a warning and do
    /// not count toward the split, which only raises each remaining share.
    pub fn project_campaign(
        &self,
        draft: &CampaignDraft,
        accounts: &[Account],
        now: i64,
    ) -> CampaignProjection {
        let plan = normalize(draft, self.config());
        let mut warnings = plan.warnings.clone();

        let resolved = resolve_selection(&plan.selected_accounts, accounts, &mut warnings);
        if resolved.is_empty() && !warnings.contains(&PlanWarning::EmptySelection) {
            warnings.push(PlanWarning::EmptySelection);
        }

        let load_per_account = distribute_over(plan.total_recipients, resolved.len());
        let risky_per_account = distribute_over(plan.risky_recipients, resolved.len());

        let mut assessments = BTreeMap::new();
        for account in &resolved {
            if account.kamikaze_mode {
                warnings.push(PlanWarning::KamikazeAdvisory { account_id: account.id.clone() });
            }
            let assessment = self.assess_account(account, risky_per_account, &plan, now);
            assessments.insert(account.id.clone(), assessment);
        }

        let summary = summarize(&assessments);
        tracing::info!(
            accounts = assessments.len(),
            load_per_account,
            risky_per_account,
            safe = summary.safe,
            caution = summary.caution,
            critical = summary.critical,
            "Campaign projection computed"
        );

        CampaignProjection {
            assessments,
            load_per_account,
            risky_per_account,
            avg_delay_seconds: plan.delay.average(),
            warnings,
            summary,
        }
    }
}

fn resolve_selection<'a>(
    selected: &[String],
    accounts: &'a [Account],
    warnings: &mut Vec<PlanWarning>,
) -> Vec<&'a Account> {
    let mut by_id: HashMap<&str, &Account> = HashMap::with_capacity(accounts.len());
    for account in accounts {
        by_id.entry(account.id.as_str()).or_insert(account);
    }

    let mut resolved = Vec::with_capacity(selected.len());
    for id in selected {
        match by_id.get(id.as_str()) {
            Some(account) => resolved.push(*account),
            None => {
                tracing::warn!("Selected account {} is not in the current snapshot", id);
                warnings.push(PlanWarning::UnknownAccount { account_id: id.clone() });
            },
        }
    }
    resolved
}

fn summarize(assessments: &BTreeMap<String, RiskAssessment>) -> ProjectionSummary {
    let mut summary = ProjectionSummary::default();
    for assessment in assessments.values() {
        match assessment.tier {
            RiskTier::Safe => summary.safe += 1,
            RiskTier::Caution => summary.caution += 1,
            RiskTier::Critical => summary.critical += 1,
        }
        summary.worst_tier = summary.worst_tier.max(Some(assessment.tier));
        summary.lowest_projected_health = Some(
            summary
                .lowest_projected_health
                .map_or(assessment.projected_health, |h| h.min(assessment.projected_health)),
        );
    }
    summary
}
