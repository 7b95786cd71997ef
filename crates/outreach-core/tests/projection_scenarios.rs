#![allow(clippy::tests_outside_test_module, reason = "integration tests live in tests/ dir")]
#![allow(clippy::unwrap_used, reason = "integration test — panics are the assertion mechanism")]

use outreach_core::planner::{
    count_variants, distribute, effective_health, uniqueness_score, Planner,
};
use outreach_core::{compute_risk_assessment, project_campaign};
use outreach_types::models::{
    Account, AccountStatus, CampaignDraft, ExecutionMode, PlanWarning, RiskTier,
};
use outreach_types::RiskModelConfig;

const NOW: i64 = 1_760_000_000;

fn standard_account() -> Account {
    Account::new("acc-1").with_health(100).with_usage(20, 0)
}

#[test]
fn scenario_a_safe_campaign() {
    let accounts = vec![standard_account()];
    let draft = CampaignDraft::new(10, 10, &["acc-1"])
        .with_manual_delay(60.0, 120.0)
        .with_uniqueness(5);

    let result = compute_risk_assessment(&draft, &accounts, NOW);
    let a = &result["acc-1"];

    assert_eq!(a.planned_messages, 10);
    assert_eq!(a.load_penalty, 0.0);
    assert_eq!(a.speed_penalty, 0.0);
    assert_eq!(a.content_penalty, 0.0);
    assert_eq!(a.projected_health, 100.0);
    assert_eq!(a.tier, RiskTier::Safe);
}

#[test]
fn scenario_b_critical_campaign() {
    let accounts = vec![standard_account()];
    let draft =
        CampaignDraft::new(19, 19, &["acc-1"]).with_manual_delay(5.0, 5.0).with_uniqueness(1);

    let result = compute_risk_assessment(&draft, &accounts, NOW);
    let a = &result["acc-1"];

    assert!(a.load_penalty > 0.0);
    assert!(a.speed_penalty > 0.0);
    assert!(a.content_penalty > 0.0);
    assert!((a.total_risk - (a.load_penalty + a.speed_penalty + a.content_penalty)).abs() < 1e-9);
    assert!(a.projected_health <= 25.0, "projected {}", a.projected_health);
    assert_eq!(a.tier, RiskTier::Critical);
}

#[test]
fn scenario_c_no_accounts() {
    let draft = CampaignDraft::new(100, 100, &[]);

    let projection = project_campaign(&draft, &[standard_account()], NOW);

    assert!(projection.assessments.is_empty());
    assert_eq!(projection.load_per_account, 0);
    assert_eq!(projection.risky_per_account, 0);
    assert_eq!(projection.warnings, vec![PlanWarning::EmptySelection]);
    assert_eq!(projection.summary.worst_tier, None);
}

#[test]
fn micro_batch_example() {
    let accounts = vec![standard_account()];
    let draft = CampaignDraft::new(6, 6, &["acc-1"]).with_manual_delay(90.0, 90.0);

    let result = compute_risk_assessment(&draft, &accounts, NOW);
    assert_eq!(result["acc-1"].load_penalty, 0.0);
}

#[test]
fn only_risky_recipients_feed_risk_math() {
    let accounts = vec![standard_account()];
    let warm = CampaignDraft::new(500, 0, &["acc-1"]).with_manual_delay(90.0, 90.0);

    let projection = project_campaign(&warm, &accounts, NOW);
    assert_eq!(projection.load_per_account, 500);
    assert_eq!(projection.risky_per_account, 0);
    assert_eq!(projection.assessments["acc-1"].load_penalty, 0.0);
}

#[test]
fn workload_is_split_with_ceiling() {
    let accounts: Vec<Account> =
        ["a", "b", "c"].iter().map(|id| Account::new(*id).with_usage(20, 0)).collect();
    let draft = CampaignDraft::new(31, 20, &["a", "b", "c"]);

    let projection = project_campaign(&draft, &accounts, NOW);
    assert_eq!(projection.load_per_account, distribute(31, 3));
    assert_eq!(projection.load_per_account, 11);
    assert_eq!(projection.risky_per_account, 7);
    assert!(projection.assessments.values().all(|a| a.planned_messages == 7));
}

#[test]
fn auto_delay_uses_conservative_defaults() {
    let accounts = vec![standard_account()];
    let mut draft = CampaignDraft::new(10, 10, &["acc-1"]).with_auto_delay().with_uniqueness(5);
    draft.delay_min = 1.0;
    draft.delay_max = 1.0;

    let projection = project_campaign(&draft, &accounts, NOW);
    assert_eq!(projection.avg_delay_seconds, 90.0);
    assert_eq!(projection.assessments["acc-1"].speed_penalty, 0.0);
}

#[test]
fn parallel_mode_warns_without_changing_math() {
    let accounts = vec![standard_account(), Account::new("acc-2").with_usage(20, 0)];
    let sequential = CampaignDraft::new(30, 30, &["acc-1", "acc-2"])
        .with_manual_delay(20.0, 40.0)
        .with_uniqueness(3);
    let parallel = sequential.clone().with_execution_mode(ExecutionMode::Parallel);

    let seq = project_campaign(&sequential, &accounts, NOW);
    let par = project_campaign(&parallel, &accounts, NOW);

    assert_eq!(seq.assessments, par.assessments);
    assert!(par.warnings.contains(&PlanWarning::ParallelExecution));
    assert!(par.requires_acknowledgement());
    assert!(!seq.warnings.contains(&PlanWarning::ParallelExecution));
}

#[test]
fn broken_accounts_have_zero_effective_health() {
    for status in [AccountStatus::Banned, AccountStatus::Invalid, AccountStatus::Error] {
        let account = Account::new("x").with_health(100).with_status(status);
        assert_eq!(effective_health(&account), 0);

        let result =
            compute_risk_assessment(&CampaignDraft::new(0, 0, &["x"]), &[account], NOW);
        assert_eq!(result["x"].tier, RiskTier::Critical);
    }
}

#[test]
fn cooling_discount_lowers_load_penalty_only() {
    let busy = standard_account().with_usage(20, 6);
    let rested = busy.clone().with_last_activity(NOW - 4 * 3600);
    let draft =
        CampaignDraft::new(10, 10, &["acc-1"]).with_manual_delay(30.0, 30.0).with_uniqueness(2);

    let busy_result = compute_risk_assessment(&draft, &[busy], NOW);
    let rested_result = compute_risk_assessment(&draft, &[rested], NOW);
    let (b, r) = (&busy_result["acc-1"], &rested_result["acc-1"]);

    assert!(r.load_penalty < b.load_penalty);
    assert_eq!(r.speed_penalty, b.speed_penalty);
    assert_eq!(r.content_penalty, b.content_penalty);
    assert!(r.projected_health > b.projected_health);
}

#[test]
fn projected_health_bounded_for_adversarial_inputs() {
    let planner = Planner::default();
    let accounts = vec![
        Account::new("neg").with_health(-500).with_usage(-3, -99),
        Account::new("huge").with_health(i64::MAX).with_usage(1, i64::MAX),
        Account::new("future").with_last_activity(i64::MAX).with_usage(5, 4),
        Account::new("ancient").with_last_activity(i64::MIN).with_usage(5, 4),
        Account::new("blank").with_status(AccountStatus::Unknown),
    ];
    let ids = ["neg", "huge", "future", "ancient", "blank"];

    let drafts = vec![
        CampaignDraft::new(i64::MAX, i64::MAX, &ids).with_manual_delay(f64::NAN, f64::INFINITY),
        CampaignDraft::new(-10, -10, &ids).with_manual_delay(-1.0, -2.0).with_uniqueness(i64::MIN),
        CampaignDraft::new(1_000_000, 999_999, &ids).with_auto_delay().with_uniqueness(i64::MAX),
    ];

    for draft in &drafts {
        for now in [0, NOW, i64::MAX, i64::MIN] {
            for a in planner.compute_risk_assessment(draft, &accounts, now).values() {
                assert!(
                    (0.0..=100.0).contains(&a.projected_health),
                    "{} projected {}",
                    a.account_id,
                    a.projected_health
                );
                assert!(a.load_penalty >= 0.0 && a.speed_penalty >= 0.0 && a.content_penalty >= 0.0);
            }
        }
    }
}

#[test]
fn hostile_tuning_keeps_penalties_as_deductions() {
    let tunings = [
        RiskModelConfig { max_content_penalty: -50.0, ..RiskModelConfig::default() },
        RiskModelConfig {
            max_load_penalty: -1000.0,
            max_speed_penalty: f64::NAN,
            safe_utilization: 2.0,
            heal_per_idle_hour: -25.0,
            ..RiskModelConfig::default()
        },
        RiskModelConfig {
            max_load_penalty: f64::INFINITY,
            safe_delay_seconds: -60.0,
            adequate_uniqueness: 0,
            micro_batch_threshold: 0,
            ..RiskModelConfig::default()
        },
    ];
    let accounts = vec![
        Account::new("weak").with_health(40).with_usage(20, 5).with_last_activity(NOW - 3 * 3600),
        Account::new("fresh").with_usage(0, 0),
        Account::new("banned").with_health(90).with_status(AccountStatus::Banned),
    ];
    let draft = CampaignDraft::new(60, 45, &["weak", "fresh", "banned"])
        .with_manual_delay(3.0, 9.0)
        .with_uniqueness(1);

    for tuning in tunings {
        let planner = Planner::new(tuning);
        for a in planner.compute_risk_assessment(&draft, &accounts, NOW).values() {
            assert!(a.load_penalty >= 0.0, "{} load {}", a.account_id, a.load_penalty);
            assert!(a.speed_penalty >= 0.0, "{} speed {}", a.account_id, a.speed_penalty);
            assert!(a.content_penalty >= 0.0, "{} content {}", a.account_id, a.content_penalty);
            assert!((0.0..=100.0).contains(&a.projected_health));
            assert!(
                a.projected_health <= a.effective_health as f64,
                "{} projected {} above effective {}",
                a.account_id,
                a.projected_health,
                a.effective_health
            );
        }
    }
}

#[test]
fn spintax_counter_handles_adversarial_templates() {
    let unclosed = "{".repeat(50_000);
    assert_eq!(count_variants(&unclosed), 1);

    let nested = format!("{}hi{}", "{".repeat(5_000), "}".repeat(5_000));
    assert_eq!(count_variants(&nested), 1);

    let mixed = format!("{}{{Hi|Hello}} {{there|friend}}", "{|".repeat(10_000));
    assert_eq!(uniqueness_score(&mixed), 4);
}

#[test]
fn identical_inputs_yield_identical_output() {
    let accounts = vec![
        standard_account().with_last_activity(NOW - 7200),
        Account::new("acc-2").with_health(40).with_usage(50, 10).with_kamikaze(),
    ];
    let draft = CampaignDraft::new(77, 41, &["acc-2", "acc-1"])
        .with_manual_delay(12.0, 48.0)
        .with_uniqueness(2)
        .with_execution_mode(ExecutionMode::Parallel);

    let first = serde_json::to_vec(&project_campaign(&draft, &accounts, NOW)).unwrap();
    let second = serde_json::to_vec(&project_campaign(&draft, &accounts, NOW)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn refreshed_snapshot_is_never_stale() {
    let planner = Planner::default();
    let draft = CampaignDraft::new(10, 10, &["acc-1"]).with_manual_delay(90.0, 90.0).with_uniqueness(5);

    let before = planner.compute_risk_assessment(&draft, &[standard_account()], NOW);
    assert_eq!(before["acc-1"].tier, RiskTier::Safe);

    let refreshed = vec![standard_account().with_status(AccountStatus::Banned)];
    let after = planner.compute_risk_assessment(&draft, &refreshed, NOW);
    assert_eq!(after["acc-1"].tier, RiskTier::Critical);
}

#[test]
fn feed_records_round_trip_through_planner() {
    let feed = r#"[
        {"id":"a1","status":"OK","health_score":90,"day_limit":30,"messages_sent_today":5,"last_activity_at":null,"kamikaze_mode":false},
        {"id":"a2","status":"BANNED","health_score":100,"day_limit":30,"messages_sent_today":0,"last_activity_at":1759990000,"kamikaze_mode":true},
        {"id":"a3","status":"garbage","health_score":"??","day_limit":"","messages_sent_today":null}
    ]"#;
    let accounts: Vec<Account> = serde_json::from_str(feed).unwrap();
    let draft = CampaignDraft::new(40, 20, &["a1", "a2", "a3"]).with_auto_delay().with_uniqueness(4);

    let projection = project_campaign(&draft, &accounts, NOW);

    assert_eq!(projection.risky_per_account, 7);
    assert_eq!(projection.assessments["a2"].effective_health, 0);
    assert!(projection.assessments["a2"].advisory_only);
    assert_eq!(projection.assessments["a3"].effective_health, 0);
    assert_eq!(projection.assessments["a1"].tier, RiskTier::Safe);
}
