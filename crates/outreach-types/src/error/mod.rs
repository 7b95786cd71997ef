//! Typed error definitions for the Outreach planner.
//!
//! Planning itself never fails on expected edge conditions; these errors cover
//! the surfaces around it:
//!
//! - **Config** - loading, parsing and validating the risk model tuning file
//! - **Plan** - strict pre-submission checks on a campaign draft
//!
//! All errors are serializable (serde), displayable (thiserror) and matchable.

mod config;
mod plan;

pub use config::ConfigError;
pub use plan::PlanError;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type that wraps all domain-specific errors.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "domain", content = "error")]
pub enum TypedError {
    /// Wraps a campaign planning error
    #[error("Plan error: {0}")]
    Plan(#[from] PlanError),

    /// Wraps a configuration error
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}
