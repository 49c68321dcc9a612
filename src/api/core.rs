//! JavaScript-facing simulation handle
//!
//! `SpringCurve` is the embedding surface the host page talks to: it takes
//! mode and overlay toggles in, and reports fps and orientation support out.

use std::rc::Rc;
use wasm_bindgen::prelude::*;
use crate::models::config::SimulationConfig;
use crate::models::input::{InputMode, InputSample, OrientationSample};
use crate::models::vector::Vector2;
use super::helpers::{self, deserialize, js_error, serialize};
use super::permission;
use super::runtime::Runtime;

/// Interactive spring-driven Bézier curve bound to a canvas
#[wasm_bindgen]
pub struct SpringCurve {
    runtime: Rc<Runtime>,
}

#[wasm_bindgen]
impl SpringCurve {
    /// Bind to the canvas with id `canvas_id`.
    ///
    /// `config` may be `undefined` or a partial configuration object.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str, config: JsValue) -> Result<SpringCurve, JsValue> {
        let config: SimulationConfig = if config.is_undefined() || config.is_null() {
            SimulationConfig::default()
        } else {
            deserialize(config, "Invalid simulation config")?
        };

        let canvas = helpers::canvas_by_id(canvas_id).map_err(js_error)?;
        let runtime = Runtime::new(canvas, config).map_err(js_error)?;

        log::info!("SpringCurve bound to #{}", canvas_id);
        Ok(SpringCurve { runtime })
    }

    pub fn start(&self) -> Result<(), JsValue> {
        self.runtime.start().map_err(js_error)
    }

    pub fn stop(&self) {
        self.runtime.stop();
    }

    #[wasm_bindgen(js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.runtime.is_running()
    }

    /// Switch input mode: `"pointer"` or `"orientation"`
    #[wasm_bindgen(js_name = setMode)]
    pub fn set_mode(&self, mode: &str) -> Result<(), JsValue> {
        let mode = InputMode::parse(mode)
            .ok_or_else(|| JsValue::from_str(&format!("Unknown input mode: {}", mode)))?;
        self.runtime.set_mode(mode);
        Ok(())
    }

    #[wasm_bindgen(js_name = setShowTangents)]
    pub fn set_show_tangents(&self, show: bool) {
        self.runtime.set_show_tangents(show);
    }

    #[wasm_bindgen(js_name = setShowControls)]
    pub fn set_show_controls(&self, show: bool) {
        self.runtime.set_show_controls(show);
    }

    /// Feed a pointer position (canvas pixels) without a DOM event
    #[wasm_bindgen(js_name = setPointer)]
    pub fn set_pointer(&self, x: f64, y: f64) {
        self.runtime.record(InputSample::Pointer(Vector2::new(x, y)));
    }

    /// Feed a device tilt (degrees) without a DOM event
    #[wasm_bindgen(js_name = setOrientation)]
    pub fn set_orientation(&self, beta: Option<f64>, gamma: Option<f64>, alpha: Option<f64>) {
        let sample = OrientationSample::from_optional(beta, gamma, alpha);
        self.runtime.record(InputSample::Orientation(sample));
    }

    /// Re-read the canvas size (for hosts that resize without a window event)
    pub fn resize(&self) {
        self.runtime.handle_resize();
    }

    /// Register `callback(fps)`, called about once per second
    #[wasm_bindgen(js_name = onFps)]
    pub fn on_fps(&self, callback: Option<js_sys::Function>) {
        self.runtime.set_fps_callback(callback);
    }

    #[wasm_bindgen(getter)]
    pub fn fps(&self) -> u32 {
        self.runtime.status().fps
    }

    #[wasm_bindgen(getter, js_name = gyroSupported)]
    pub fn gyro_supported(&self) -> bool {
        self.runtime.status().gyro_supported
    }

    #[wasm_bindgen(getter, js_name = gyroPermissionState)]
    pub fn gyro_permission_state(&self) -> String {
        self.runtime.status().gyro_permission_state.as_str().to_string()
    }

    /// Status object for the host UI
    pub fn status(&self) -> Result<JsValue, JsValue> {
        serialize(&self.runtime.status(), "Failed to serialize status")
    }

    /// Positions, targets and velocities of the control points
    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let snapshot = self.runtime.with_sim(|sim| sim.snapshot());
        serialize(&snapshot, "Failed to serialize snapshot")
    }

    /// The current frame as a list of draw commands
    #[wasm_bindgen(js_name = renderDisplayList)]
    pub fn render_display_list(&self) -> Result<JsValue, JsValue> {
        serialize(&self.runtime.display_list(), "Failed to serialize display list")
    }

    /// Ask for orientation access; resolves to `"granted"`, `"denied"` or `"unsupported"`.
    ///
    /// Does not change the input mode.
    #[wasm_bindgen(js_name = requestOrientationPermission)]
    pub fn request_orientation_permission(&self) -> js_sys::Promise {
        let runtime = Rc::clone(&self.runtime);
        wasm_bindgen_futures::future_to_promise(async move {
            let outcome = permission::request().await;
            runtime.apply_permission_outcome(outcome);
            Ok(JsValue::from_str(outcome.as_str()))
        })
    }
}

impl Drop for SpringCurve {
    fn drop(&mut self) {
        self.runtime.stop();
    }
}
