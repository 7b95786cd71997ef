//! Core domain models for the Outreach planner.
//!
//! This module contains all shared data structures crossing the planner boundary.

mod account;
mod assessment;
mod campaign;
pub mod config;
pub(crate) mod lenient;
mod submission;

// Re-export all models
pub use account::{Account, AccountStatus};
pub use assessment::{
    CampaignProjection, PlanWarning, ProjectionSummary, RiskAssessment, RiskBreakdown, RiskTier,
};
pub use campaign::{CampaignDraft, CampaignFilters, Contact, DelayMode, ExecutionMode, WorkHours};
pub use config::RiskModelConfig;
pub use submission::CampaignSubmission;
