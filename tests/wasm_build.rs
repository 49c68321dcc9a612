//! WASM build test
//!
//! Binds the module to a real canvas in a browser and checks the
//! JavaScript-facing lifecycle.

#![cfg(target_arch = "wasm32")]

use gloo_timers::future::TimeoutFuture;
use spring_curve_wasm::SpringCurve;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn mount_canvas(id: &str) -> web_sys::HtmlCanvasElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas = document
        .create_element("canvas")
        .unwrap()
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .unwrap();
    canvas.set_id(id);
    canvas.set_width(320);
    canvas.set_height(240);
    document.body().unwrap().append_child(&canvas).unwrap();
    canvas
}

fn snapshot_field(curve: &SpringCurve, field: &str) -> JsValue {
    let snapshot = curve.snapshot().unwrap();
    js_sys::Reflect::get(&snapshot, &JsValue::from_str(field)).unwrap()
}

fn has_pointer(curve: &SpringCurve) -> bool {
    let pointer = snapshot_field(curve, "pointer");
    !(pointer.is_null() || pointer.is_undefined())
}

fn frames(curve: &SpringCurve) -> f64 {
    snapshot_field(curve, "frames").as_f64().unwrap()
}

#[wasm_bindgen_test]
fn test_missing_canvas_is_an_error() {
    let result = SpringCurve::new("does-not-exist", JsValue::UNDEFINED);
    assert!(result.is_err());
}

#[wasm_bindgen_test]
async fn test_start_stop_lifecycle() {
    mount_canvas("lifecycle-canvas");
    let curve = SpringCurve::new("lifecycle-canvas", JsValue::UNDEFINED).unwrap();

    assert!(!curve.is_running());
    curve.start().unwrap();
    assert!(curve.is_running());

    TimeoutFuture::new(200).await;
    assert!(frames(&curve) > 0.0, "animation frames should tick while running");

    curve.stop();
    assert!(!curve.is_running());
    let stopped_at = frames(&curve);

    TimeoutFuture::new(200).await;
    assert_eq!(frames(&curve), stopped_at, "no frame may run after stop");
}

#[wasm_bindgen_test]
fn test_listeners_detached_on_stop() {
    let canvas = mount_canvas("listener-canvas");
    let curve = SpringCurve::new("listener-canvas", JsValue::UNDEFINED).unwrap();
    let mousemove = || web_sys::MouseEvent::new("mousemove").unwrap();

    curve.start().unwrap();
    canvas.dispatch_event(&mousemove()).unwrap();
    assert!(has_pointer(&curve));

    curve.stop();
    canvas.dispatch_event(&mousemove()).unwrap();
    assert!(!has_pointer(&curve));
}

#[wasm_bindgen_test]
fn test_mode_and_toggles() {
    mount_canvas("toggle-canvas");
    let curve = SpringCurve::new("toggle-canvas", JsValue::UNDEFINED).unwrap();
    curve.start().unwrap();

    assert!(curve.set_mode("orientation").is_ok());
    assert!(curve.set_mode("sideways").is_err());
    curve.set_show_tangents(false);
    curve.set_show_controls(false);
    curve.set_pointer(10.0, 20.0);
    curve.set_orientation(Some(90.0), None, None);

    assert!(curve.status().is_ok());
    assert!(curve.snapshot().is_ok());
    assert!(curve.render_display_list().is_ok());
    curve.stop();
}

#[wasm_bindgen_test]
fn test_partial_config_object() {
    mount_canvas("config-canvas");
    let config = js_sys::JSON::parse(r#"{ "spring": { "damping": 0.6 } }"#).unwrap();
    let curve = SpringCurve::new("config-canvas", config).unwrap();
    assert_eq!(curve.fps(), 0);
}
