//! # Outreach Core
//!
//! Campaign risk projection and load distribution planner.
//!
//! ## Architecture
//!
//! ```text
//! outreach-core/src/
//! ├── planner/
//! │   ├── health.rs        # effective health with the broken-account override
//! │   ├── distribution.rs  # ceiling-division workload split
//! │   ├── risk/            # load / speed / content penalty curves
//! │   ├── projection.rs    # projected health, tiers, full campaign preview
//! │   ├── plan.rs          # draft normalization and warnings
//! │   ├── recipients.rs    # total / risky recipient counts
//! │   ├── template.rs      # spintax variant counting
//! │   └── submission.rs    # start-campaign payload
//! └── modules/
//!     └── config.rs        # risk model tuning file
//! ```
//!
//! Everything under `planner/` is synchronous and side-effect free. Account
//! snapshots are borrowed for the duration of a call and never cached, so a
//! refreshed account list can replace the old one at any time.

#![cfg_attr(test, allow(clippy::float_cmp, clippy::unwrap_used))]

pub mod error;
pub mod modules;
pub mod planner;

// Re-export commonly used types
pub use error::{AppError, AppResult};
pub use outreach_types::models;
pub use planner::{compute_risk_assessment, project_campaign, Planner};
