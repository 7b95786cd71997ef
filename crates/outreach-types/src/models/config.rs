//! Risk model tuning.
//!
//! Defaults: micro-batches under seven messages are free, utilization up to
//! half the daily limit is free, delays of a minute or more are free, and five
//! template variants remove all duplicate-content risk. With these ceilings a
//! near-limit workload, a near-zero delay and a single variant put a fresh
//! account in the critical tier.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Coefficients and breakpoints for the penalty curves.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Validate)]
#[validate(schema(function = "validate_breakpoints"))]
pub struct RiskModelConfig {
    /// Load penalty at or above full utilization
    #[validate(range(min = 0.0, max = 100.0))]
    #[serde(default = "default_max_load_penalty")]
    pub max_load_penalty: f64,
    /// Speed penalty at zero delay
    #[validate(range(min = 0.0, max = 100.0))]
    #[serde(default = "default_max_speed_penalty")]
    pub max_speed_penalty: f64,
    /// Content penalty with a single template variant
    #[validate(range(min = 0.0, max = 100.0))]
    #[serde(default = "default_max_content_penalty")]
    pub max_content_penalty: f64,
    /// Utilization ratio up to which load is free
    #[validate(range(min = 0.0, max = 0.99))]
    #[serde(default = "default_safe_utilization")]
    pub safe_utilization: f64,
    /// Workloads below this size carry no load penalty
    #[serde(default = "default_micro_batch_threshold")]
    pub micro_batch_threshold: u32,
    /// Average delay (seconds) at or above which speed is free
    #[validate(range(min = 1.0, max = 3600.0))]
    #[serde(default = "default_safe_delay_seconds")]
    pub safe_delay_seconds: f64,
    /// Variant count at or above which content is free
    #[validate(range(min = 2_u32, max = 1000_u32))]
    #[serde(default = "default_adequate_uniqueness")]
    pub adequate_uniqueness: u32,
    /// Health the execution service restores per idle hour
    #[validate(range(min = 0.0, max = 100.0))]
    #[serde(default = "default_heal_per_idle_hour")]
    pub heal_per_idle_hour: f64,
    /// Idle hours after which the daily counter is considered reset
    #[validate(range(min = 1_u32, max = 168_u32))]
    #[serde(default = "default_daily_reset_hours")]
    pub daily_reset_hours: u32,
    /// Delay floor substituted in auto mode
    #[validate(range(min = 1_u32))]
    #[serde(default = "default_auto_delay_min")]
    pub auto_delay_min: u32,
    /// Delay ceiling substituted in auto mode
    #[validate(range(min = 1_u32))]
    #[serde(default = "default_auto_delay_max")]
    pub auto_delay_max: u32,
}

impl Default for RiskModelConfig {
    fn default() -> Self {
        Self {
            max_load_penalty: default_max_load_penalty(),
            max_speed_penalty: default_max_speed_penalty(),
            max_content_penalty: default_max_content_penalty(),
            safe_utilization: default_safe_utilization(),
            micro_batch_threshold: default_micro_batch_threshold(),
            safe_delay_seconds: default_safe_delay_seconds(),
            adequate_uniqueness: default_adequate_uniqueness(),
            heal_per_idle_hour: default_heal_per_idle_hour(),
            daily_reset_hours: default_daily_reset_hours(),
            auto_delay_min: default_auto_delay_min(),
            auto_delay_max: default_auto_delay_max(),
        }
    }
}

fn validate_breakpoints(config: &RiskModelConfig) -> Result<(), ValidationError> {
    if config.auto_delay_min > config.auto_delay_max {
        let mut err = ValidationError::new("auto_delay_window");
        err.message = Some("auto_delay_min must not exceed auto_delay_max".into());
        return Err(err);
    }
    Ok(())
}

const fn default_max_load_penalty() -> f64 {
    40.0
}

const fn default_max_speed_penalty() -> f64 {
    30.0
}

const fn default_max_content_penalty() -> f64 {
    25.0
}

const fn default_safe_utilization() -> f64 {
    0.5
}

const fn default_micro_batch_threshold() -> u32 {
    7
}

const fn default_safe_delay_seconds() -> f64 {
    60.0
}

const fn default_adequate_uniqueness() -> u32 {
    5
}

const fn default_heal_per_idle_hour() -> f64 {
    5.0
}

const fn default_daily_reset_hours() -> u32 {
    24
}

const fn default_auto_delay_min() -> u32 {
    60
}

const fn default_auto_delay_max() -> u32 {
    120
}
