//! Spring curve WASM API
//!
//! This module provides the JavaScript-facing API for the spring curve.
//!
//! # Module Structure
//!
//! - `helpers`: Serialization, error conversion and browser globals
//! - `types`: Status values reported to the host page
//! - `permission`: Device orientation support detection and permission request
//! - `runtime`: Binds the simulation loop to a canvas, gloo listeners and animation frames
//! - `core`: The exported `SpringCurve` class

pub mod helpers;
pub mod types;
pub mod permission;
pub mod runtime;
pub mod core;

pub use core::SpringCurve;
pub use types::HostStatus;
