use super::RiskCalculator;
use crate::planner::sanitize;

impl RiskCalculator {
    /// Duplicate-content penalty: `max_content_penalty` for a single variant,
    /// falling linearly to 0 at `adequate_uniqueness` variants.
    pub fn content_penalty(&self, uniqueness_score: i64) -> f64 {
        let score = uniqueness_score.max(1);
        let adequate = i64::from(self.config.adequate_uniqueness.max(2));
        if score >= adequate {
            return 0.0;
        }
        sanitize::penalty(
            self.config.max_content_penalty * (adequate - score) as f64 / (adequate - 1) as f64,
        )
    }
}
