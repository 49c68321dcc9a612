//! Shared helpers for WASM API operations
//!
//! Serialization to and from JavaScript values, error conversion, and
//! access to the browser globals every entry point needs.

use wasm_bindgen::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;
use crate::error::{SimulationError, SimulationResult};

// ============================================================================
// Serialization/Deserialization Helpers
// ============================================================================

/// Deserialize a value from JavaScript with automatic error handling
pub fn deserialize<T: DeserializeOwned>(
    value: JsValue,
    error_context: &str,
) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log::error!("{}", msg);
        JsValue::from_str(&msg)
    })
}

/// Serialize a value to JavaScript with automatic error handling
pub fn serialize<T: Serialize>(value: &T, error_context: &str) -> Result<JsValue, JsValue> {
    // Plain objects rather than ES Maps for nested structs
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    value.serialize(&serializer).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log::error!("{}", msg);
        JsValue::from_str(&msg)
    })
}

// ============================================================================
// Error Conversion
// ============================================================================

/// Log a simulation error and turn it into a thrown JavaScript value
pub fn js_error(err: SimulationError) -> JsValue {
    log::error!("{}", err);
    JsValue::from(err)
}

// ============================================================================
// Browser Globals
// ============================================================================

pub fn window() -> SimulationResult<web_sys::Window> {
    web_sys::window().ok_or(SimulationError::NoWindow)
}

pub fn document() -> SimulationResult<web_sys::Document> {
    window()?.document().ok_or(SimulationError::NoDocument)
}

/// Look up a canvas element by id
pub fn canvas_by_id(id: &str) -> SimulationResult<web_sys::HtmlCanvasElement> {
    use wasm_bindgen::JsCast;

    document()?
        .get_element_by_id(id)
        .ok_or_else(|| SimulationError::CanvasNotFound(id.to_string()))?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|_| SimulationError::NotACanvas(id.to_string()))
}
