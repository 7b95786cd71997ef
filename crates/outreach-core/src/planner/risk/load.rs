use super::{RiskCalculator, RiskInputs};
use crate::planner::sanitize;

const SECONDS_PER_HOUR: i64 = 3600;

/// Whole hours since the last send. Missing, non-positive or future
/// timestamps count as no idle time.
pub fn idle_hours(last_activity_epoch: Option<i64>, now: i64) -> i64 {
    last_activity_epoch
        .filter(|&ts| ts > 0)
        .map_or(0, |ts| sanitize::count(now.saturating_sub(ts)) / SECONDS_PER_HOUR)
}

impl RiskCalculator {
    /// Daily-limit utilization penalty.
    ///
    /// Free for unlimited accounts and for micro-batches. Otherwise ramps from
    /// 0 at `safe_utilization` to `max_load_penalty` at full utilization and
    /// stays there beyond it. Idle time is credited back the way the execution
    /// service heals accounts: a full reset window zeroes today's usage, and
    /// anything shorter subtracts `heal_per_idle_hour` per whole idle hour.
    pub fn load_penalty(&self, inputs: &RiskInputs) -> f64 {
        let limit = sanitize::count(inputs.daily_limit);
        if limit == 0 {
            return 0.0;
        }

        let planned = sanitize::count(inputs.planned_messages);
        if planned < i64::from(self.config.micro_batch_threshold) {
            return 0.0;
        }

        let idle = idle_hours(inputs.last_activity_epoch, inputs.now);
        let reset = idle >= i64::from(self.config.daily_reset_hours);
        let sent = if reset { 0 } else { sanitize::count(inputs.already_sent_today) };

        let utilization = sent.saturating_add(planned) as f64 / limit as f64;
        let raw = self.utilization_penalty(utilization);
        if reset {
            return raw;
        }

        let credit = sanitize::penalty(self.config.heal_per_idle_hour) * idle as f64;
        sanitize::penalty(raw - credit)
    }

    fn utilization_penalty(&self, utilization: f64) -> f64 {
        let safe = self.config.safe_utilization;
        if utilization <= safe {
            return 0.0;
        }
        let ramp = ((utilization - safe) / (1.0 - safe)).min(1.0);
        sanitize::penalty(self.config.max_load_penalty * ramp)
    }
}
