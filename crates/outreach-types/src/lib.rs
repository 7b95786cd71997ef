//! # Outreach Types
//!
//! Core types, models, and error definitions for the Outreach campaign planner.
//!
//! This crate provides the foundational type system for the planner:
//!
//! - **`error`** - Typed error hierarchy for planning and configuration
//! - **`models`** - Domain models (Account, CampaignDraft, RiskAssessment, RiskModelConfig)
//!
//! ## Architecture Role
//!
//! `outreach-types` sits at the bottom of the dependency graph:
//!
//! ```text
//!     outreach-types (this crate)
//!              │
//!              ▼
//!       outreach-core
//!              │
//!              ▼
//!       outreach-cli
//! ```
//!
//! All types are designed to be:
//! - **Serializable** via serde for the account feed and the start-campaign payload
//! - **Clone** so a fresh snapshot can replace the old one wholesale
//! - **PartialEq** for testing and comparison

pub mod error;
pub mod models;

// Re-export error types for convenience
pub use error::{ConfigError, PlanError, TypedError};

// Re-export core model types
pub use models::{
    Account, AccountStatus, CampaignDraft, CampaignFilters, CampaignProjection,
    CampaignSubmission, Contact, DelayMode, ExecutionMode, PlanWarning, ProjectionSummary,
    RiskAssessment, RiskBreakdown, RiskModelConfig, RiskTier, WorkHours,
};
