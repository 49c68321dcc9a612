//! Serializable view of a running simulation

use serde::{Deserialize, Serialize};
use crate::models::input::InputMode;
use crate::models::rig::ControlRig;
use crate::models::vector::Vector2;
use crate::models::viewport::Viewport;
use crate::renderers::scene::SceneOptions;
use super::LoopState;

/// One control point as seen by the host
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PointSnapshot {
    pub position: Vector2,
    pub velocity: Vector2,
    pub target: Vector2,
    pub fixed: bool,
}

/// State of the whole simulation at one moment
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RigSnapshot {
    pub state: LoopState,
    pub mode: InputMode,
    pub options: SceneOptions,
    pub viewport: Viewport,
    pub fps: u32,

    /// Ticks run since the last start
    pub frames: u64,

    /// Latest pointer sample, if any arrived this session
    pub pointer: Option<Vector2>,

    /// Empty while stopped
    pub points: Vec<PointSnapshot>,
}

impl PointSnapshot {
    pub fn from_rig(rig: &ControlRig) -> Vec<PointSnapshot> {
        rig.points()
            .iter()
            .map(|point| PointSnapshot {
                position: point.position(),
                velocity: point.velocity(),
                target: point.target(),
                fixed: point.is_fixed(),
            })
            .collect()
    }
}
