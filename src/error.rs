//! Error types for the spring curve module
//!
//! Only start-up can fail: a missing drawing surface, a missing browser
//! object or an invalid configuration. A running simulation never errors.

use thiserror::Error;

/// Start-up and configuration failures
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SimulationError {
    /// No global `window` (not running in a browser)
    #[error("No window object available")]
    NoWindow,

    /// No `document` on the window
    #[error("No document object available")]
    NoDocument,

    /// Canvas element lookup failed
    #[error("Canvas element not found: {0}")]
    CanvasNotFound(String),

    /// Element exists but is not a `<canvas>`
    #[error("Element is not a canvas: {0}")]
    NotACanvas(String),

    /// `getContext("2d")` returned nothing
    #[error("2D rendering context unavailable")]
    ContextUnavailable,

    /// Configuration rejected by validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A JavaScript call threw
    #[error("JavaScript error: {0}")]
    Js(String),
}

pub type SimulationResult<T> = Result<T, SimulationError>;

impl From<SimulationError> for wasm_bindgen::JsValue {
    fn from(err: SimulationError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}

impl SimulationError {
    /// Wrap a thrown JavaScript value
    pub fn from_js(value: &wasm_bindgen::JsValue) -> Self {
        SimulationError::Js(
            value
                .as_string()
                .unwrap_or_else(|| format!("{:?}", value)),
        )
    }
}
