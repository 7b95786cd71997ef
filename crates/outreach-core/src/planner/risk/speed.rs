use super::RiskCalculator;
use crate::planner::sanitize;

impl RiskCalculator {
    /// Cadence penalty: 0 at or above `safe_delay_seconds`, rising linearly
    /// to `max_speed_penalty` as the delay approaches zero.
    pub fn speed_penalty(&self, avg_delay_seconds: f64) -> f64 {
        let delay = sanitize::seconds(avg_delay_seconds);
        let safe = self.config.safe_delay_seconds;
        if delay >= safe {
            return 0.0;
        }
        sanitize::penalty(self.config.max_speed_penalty * (safe - delay) / safe)
    }
}
