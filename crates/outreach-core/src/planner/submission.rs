//! Start-campaign payload construction.

use super::plan::normalize;
use outreach_types::models::{CampaignDraft, CampaignSubmission, DelayMode};
use outreach_types::RiskModelConfig;

/// Build the payload for the execution service from a draft.
///
/// Uses the same normalization as the preview so the submitted settings are
/// exactly the ones that were projected. Manual delay bounds are rounded to
/// whole seconds; auto mode sends no bounds at all.
pub fn build_submission(draft: &CampaignDraft, config: &RiskModelConfig) -> CampaignSubmission {
    let plan = normalize(draft, config);
    let (delay_min, delay_max) = match plan.delay_mode {
        DelayMode::Auto => (None, None),
        DelayMode::Manual => (Some(whole_seconds(plan.delay.min)), Some(whole_seconds(plan.delay.max))),
    };

    CampaignSubmission {
        recipients: draft.recipients.clone(),
        account_ids: plan.selected_accounts,
        delay_mode: plan.delay_mode,
        delay_min,
        delay_max,
        execution_mode: plan.execution_mode,
        work_start: plan.work_start,
        work_end: plan.work_end,
        skip_if_dialog_exists: plan.filters.skip_if_dialog_exists,
        reset_status_new: plan.filters.reset_status_new,
        add_friends: plan.filters.add_friends,
    }
}

fn whole_seconds(seconds: f64) -> u32 {
    seconds.round().min(f64::from(u32::MAX)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use outreach_types::models::{ExecutionMode, WorkHours};

    #[test]
    fn test_manual_payload() {
        let mut draft = CampaignDraft::new(2, 1, &["a", "b", "a"]).with_manual_delay(45.4, 89.6);
        draft.recipients = vec!["r1".to_string(), "r2".to_string()];
        draft.work_hours = WorkHours { start: 9, end: 21 };
        draft.filters.skip_if_dialog_exists = true;

        let payload = build_submission(&draft, &RiskModelConfig::default());
        assert_eq!(payload.account_ids, vec!["a", "b"]);
        assert_eq!(payload.delay_min, Some(45));
        assert_eq!(payload.delay_max, Some(90));
        assert_eq!((payload.work_start, payload.work_end), (9, 21));
        assert!(payload.skip_if_dialog_exists);
        assert_eq!(payload.recipients.len(), 2);
    }

    #[test]
    fn test_auto_payload_carries_no_bounds() {
        let mut draft = CampaignDraft::new(1, 1, &["a"]).with_auto_delay();
        draft.delay_min = 3.0;
        draft.delay_max = 4.0;
        draft.execution_mode = ExecutionMode::Parallel;

        let payload = build_submission(&draft, &RiskModelConfig::default());
        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(json["delay_mode"], "auto");
        assert!(json.get("delay_min").is_none());
        assert!(json.get("delay_max").is_none());
        assert_eq!(json["execution_mode"], "parallel");
    }
}
