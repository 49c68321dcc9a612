//! Models module
//!
//! Value types and state for the spring-driven curve: vectors, the
//! Bézier math, spring points, the four-point rig, input samples and
//! configuration.

pub mod vector;
pub mod bezier;
pub mod spring;
pub mod viewport;
pub mod input;
pub mod rig;
pub mod config;

// Re-export commonly used types
pub use vector::Vector2;
pub use bezier::CubicBezier;
pub use spring::SpringPoint;
pub use viewport::Viewport;
pub use input::{InputMode, InputSample, InputState, OrientationSample, PermissionOutcome, PermissionState};
pub use rig::ControlRig;
pub use config::{Palette, RenderConfig, RigConfig, SimulationConfig, SpringConfig, TimingConfig};
