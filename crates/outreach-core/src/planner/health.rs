//! Effective health of an account.

use outreach_types::Account;

/// Health assumed for an account that has never been damaged.
pub const FRESH_HEALTH: i64 = 100;

/// Health the projection starts from.
///
/// Any status other than OK yields 0 whatever the stored score says: a broken
/// token has no safe capacity. Stored scores are clamped to 0..=100.
pub fn effective_health(account: &Account) -> i64 {
    if !account.status.is_ok() {
        return 0;
    }
    account.health_score.map_or(FRESH_HEALTH, |score| score.clamp(0, 100))
}

#[cfg(test)]
mod tests {
    use super::*;
    use outreach_types::AccountStatus;

    #[test]
    fn test_broken_accounts_have_zero_health() {
        for status in
            [AccountStatus::Banned, AccountStatus::Invalid, AccountStatus::Error, AccountStatus::Unknown]
        {
            let account = Account::new("a").with_health(95).with_status(status);
            assert_eq!(effective_health(&account), 0, "status {status}");
        }
    }

    #[test]
    fn test_missing_score_means_fresh() {
        assert_eq!(effective_health(&Account::new("a")), FRESH_HEALTH);
    }

    #[test]
    fn test_stored_score_is_clamped() {
        assert_eq!(effective_health(&Account::new("a").with_health(64)), 64);
        assert_eq!(effective_health(&Account::new("a").with_health(180)), 100);
        assert_eq!(effective_health(&Account::new("a").with_health(-20)), 0);
    }
}
