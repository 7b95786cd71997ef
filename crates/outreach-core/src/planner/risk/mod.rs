//! Penalty scoring for one account's planned workload.
//!
//! Three independent components, each a non-negative deduction in health
//! points:
//!
//! | component | free when                                   | grows with            |
//! |-----------|---------------------------------------------|-----------------------|
//! | load      | unlimited, micro-batch, utilization <= 50%  | utilization past 50%  |
//! | speed     | average delay >= 60s                        | shorter delays        |
//! | content   | >= 5 template variants                      | fewer variants        |
//!
//! All curves are linear ramps between the breakpoints in [`RiskModelConfig`].

mod content;
mod load;
mod speed;

pub use load::idle_hours;

use super::sanitize;
use outreach_types::{RiskBreakdown, RiskModelConfig};

/// Everything the calculator needs about one account's share of the campaign.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RiskInputs {
    /// Risky recipients assigned to the account
    pub planned_messages: i64,
    /// Average delay between messages in seconds
    pub avg_delay_seconds: f64,
    /// Distinct template variants
    pub uniqueness_score: i64,
    /// Daily limit, 0 = unlimited
    pub daily_limit: i64,
    /// Messages already sent since the last reset
    pub already_sent_today: i64,
    /// Epoch seconds of the last send
    pub last_activity_epoch: Option<i64>,
    /// Evaluation instant, epoch seconds
    pub now: i64,
}

/// Stateless penalty calculator parameterized by tuning.
#[derive(Debug, Clone, Default)]
pub struct RiskCalculator {
    config: RiskModelConfig,
}

impl RiskCalculator {
    pub const fn new(config: RiskModelConfig) -> Self {
        Self { config }
    }

    /// All three components for one account.
    pub fn assess(&self, inputs: &RiskInputs) -> RiskBreakdown {
        RiskBreakdown {
            load_penalty: self.load_penalty(inputs),
            speed_penalty: self.speed_penalty(inputs.avg_delay_seconds),
            content_penalty: self.content_penalty(inputs.uniqueness_score),
        }
    }

    /// Largest value any component can reach.
    pub fn max_total(&self) -> f64 {
        sanitize::penalty(self.config.max_load_penalty)
            + sanitize::penalty(self.config.max_speed_penalty)
            + sanitize::penalty(self.config.max_content_penalty)
    }
}
