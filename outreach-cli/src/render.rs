//! Plain-text rendering of a projection.

use outreach_types::models::CampaignProjection;
use std::fmt::Write;

/// Fixed-width table, one row per account, then warnings.
///
/// Advisory-only (kamikaze) rows are marked with `*`.
pub fn projection_table(projection: &CampaignProjection) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "load/account: {}  risky/account: {}  avg delay: {:.0}s",
        projection.load_per_account, projection.risky_per_account, projection.avg_delay_seconds
    );
    let _ = writeln!(
        out,
        "{:<20} {:>6} {:>6} {:>6} {:>7} {:>9}  {}",
        "ACCOUNT", "HEALTH", "LOAD", "SPEED", "CONTENT", "PROJECTED", "TIER"
    );

    for a in projection.assessments.values() {
        let marker = if a.advisory_only { "*" } else { "" };
        let _ = writeln!(
            out,
            "{:<20} {:>6} {:>6.1} {:>6.1} {:>7.1} {:>9.1}  {}{}",
            a.account_id,
            a.effective_health,
            a.load_penalty,
            a.speed_penalty,
            a.content_penalty,
            a.projected_health,
            a.tier,
            marker
        );
    }

    for warning in &projection.warnings {
        let _ = writeln!(out, "warning: {warning}");
    }
    out
}
