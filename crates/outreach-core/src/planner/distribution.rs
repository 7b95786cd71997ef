//! Even, conservative split of recipients across accounts.

use super::sanitize;

/// Recipients each account receives: `ceil(total / account_count)`.
///
/// Always rounds up, so `distribute(t, n) * n >= t`; the sum over accounts may
/// exceed the true total but no single account's load is ever understated.
/// Zero or negative account counts yield 0.
pub fn distribute(total: i64, account_count: i64) -> i64 {
    if account_count <= 0 {
        return 0;
    }
    let total = sanitize::count(total);
    total / account_count + i64::from(total % account_count != 0)
}

/// Convenience for slice lengths.
pub(crate) fn distribute_over(total: i64, accounts: usize) -> i64 {
    distribute(total, i64::try_from(accounts).unwrap_or(i64::MAX))
}
