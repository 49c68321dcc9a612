//! Spring Curve WASM Module
//!
//! An interactive cubic Bézier curve whose two interior control points
//! follow pointer or device-tilt input through damped springs, redrawn
//! every display frame.

pub mod error;
pub mod models;
pub mod utils;
pub mod simulation;
pub mod renderers;
pub mod api;

// Re-export commonly used types
pub use error::{SimulationError, SimulationResult};
pub use models::{
    ControlRig, CubicBezier, InputMode, InputSample, OrientationSample, SimulationConfig, SpringPoint,
    Vector2, Viewport,
};
pub use simulation::{LoopState, SimulationLoop, TickReport};
pub use api::SpringCurve;

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    // A second instantiation finds the logger already installed
    #[cfg(feature = "console_log")]
    let _ = console_log::init_with_level(log::Level::Debug);

    log::info!("Spring curve WASM module initialized");
}
