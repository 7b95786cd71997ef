//! Start-campaign payload handed to the execution service.

use super::{DelayMode, ExecutionMode};
use serde::{Deserialize, Serialize};

/// Payload for the external "start campaign" call.
///
/// Delay bounds are only present in manual mode; in auto mode the service
/// picks its own cadence and `delay_mode` says so.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[allow(
    clippy::struct_excessive_bools,
    reason = "Wire payload - bools are the service's filter flags"
)]
pub struct CampaignSubmission {
    pub recipients: Vec<String>,
    pub account_ids: Vec<String>,
    pub delay_mode: DelayMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay_min: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay_max: Option<u32>,
    pub execution_mode: ExecutionMode,
    pub work_start: u8,
    pub work_end: u8,
    pub skip_if_dialog_exists: bool,
    pub reset_status_new: bool,
    pub add_friends: bool,
}
