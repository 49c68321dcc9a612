//! Shared types for the WASM API
//!
//! Values reported back to the host page.

use serde::{Deserialize, Serialize};
use crate::models::input::{InputMode, PermissionState};

/// Everything the host UI displays about the simulation
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HostStatus {
    pub running: bool,
    pub fps: u32,
    pub mode: InputMode,
    pub show_tangents: bool,
    pub show_controls: bool,
    pub gyro_supported: bool,
    pub gyro_permission_state: PermissionState,
}
