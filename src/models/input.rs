//! Input modes and samples
//!
//! Samples arrive asynchronously from event handlers. Only the most recent
//! sample of each kind is kept; ticks read whatever is current.

use serde::{Deserialize, Serialize};
use super::vector::Vector2;

/// Which input source drives the control rig
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    #[default]
    Pointer,
    Orientation,
}

impl InputMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputMode::Pointer => "pointer",
            InputMode::Orientation => "orientation",
        }
    }

    pub fn parse(value: &str) -> Option<InputMode> {
        match value {
            "pointer" | "mouse" => Some(InputMode::Pointer),
            "orientation" | "gyro" => Some(InputMode::Orientation),
            _ => None,
        }
    }
}

/// Device tilt in degrees
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct OrientationSample {
    /// Front-to-back tilt
    pub beta: f64,
    /// Left-to-right tilt
    pub gamma: f64,
    /// Compass heading (unused by the rig)
    pub alpha: f64,
}

impl OrientationSample {
    pub fn new(beta: f64, gamma: f64, alpha: f64) -> Self {
        Self { beta, gamma, alpha }
    }

    /// Build a sample from possibly-missing event fields; absent angles read as 0
    pub fn from_optional(beta: Option<f64>, gamma: Option<f64>, alpha: Option<f64>) -> Self {
        Self {
            beta: beta.unwrap_or(0.0),
            gamma: gamma.unwrap_or(0.0),
            alpha: alpha.unwrap_or(0.0),
        }
    }
}

/// A single input reading
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum InputSample {
    /// Pointer position in canvas-local pixels
    Pointer(Vector2),
    Orientation(OrientationSample),
}

/// Latest sample of each kind (last value wins, no queue)
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct InputState {
    pointer: Option<Vector2>,
    orientation: Option<OrientationSample>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, sample: InputSample) {
        match sample {
            InputSample::Pointer(position) => self.pointer = Some(position),
            InputSample::Orientation(orientation) => self.orientation = Some(orientation),
        }
    }

    pub fn pointer(&self) -> Option<Vector2> {
        self.pointer
    }

    pub fn orientation(&self) -> Option<OrientationSample> {
        self.orientation
    }

    /// The latest sample that applies to `mode`, if one has arrived
    pub fn latest_for(&self, mode: InputMode) -> Option<InputSample> {
        match mode {
            InputMode::Pointer => self.pointer.map(InputSample::Pointer),
            InputMode::Orientation => self.orientation.map(InputSample::Orientation),
        }
    }
}

/// Host-visible state of orientation access
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PermissionState {
    #[default]
    Unknown,
    Needed,
    Granted,
    Denied,
}

impl PermissionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            PermissionState::Unknown => "unknown",
            PermissionState::Needed => "needed",
            PermissionState::Granted => "granted",
            PermissionState::Denied => "denied",
        }
    }
}

/// Result of an orientation permission request
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PermissionOutcome {
    Granted,
    Denied,
    Unsupported,
}

impl PermissionOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            PermissionOutcome::Granted => "granted",
            PermissionOutcome::Denied => "denied",
            PermissionOutcome::Unsupported => "unsupported",
        }
    }

    /// Permission state after this outcome.
    ///
    /// An unsupported platform leaves the state as it was.
    pub fn apply_to(&self, current: PermissionState) -> PermissionState {
        match self {
            PermissionOutcome::Granted => PermissionState::Granted,
            PermissionOutcome::Denied => PermissionState::Denied,
            PermissionOutcome::Unsupported => current,
        }
    }
}
