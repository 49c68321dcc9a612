//! Device orientation access
//!
//! Some platforms (iOS Safari) gate orientation events behind
//! `DeviceOrientationEvent.requestPermission()`, which must be called from
//! a user gesture. Others deliver events without asking.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use crate::models::input::{PermissionOutcome, PermissionState};

/// What the platform offers for orientation input
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OrientationSupport {
    /// `DeviceOrientationEvent` exists
    pub supported: bool,

    /// Access requires an explicit permission request
    pub gated: bool,
}

impl OrientationSupport {
    /// Permission state to show before any request is made
    pub fn initial_state(&self) -> PermissionState {
        match (self.supported, self.gated) {
            (true, true) => PermissionState::Needed,
            (true, false) => PermissionState::Granted,
            _ => PermissionState::Unknown,
        }
    }
}

fn orientation_constructor() -> Option<JsValue> {
    let window = web_sys::window()?;
    let ctor = js_sys::Reflect::get(&window, &JsValue::from_str("DeviceOrientationEvent")).ok()?;
    if ctor.is_undefined() || ctor.is_null() {
        None
    } else {
        Some(ctor)
    }
}

fn request_permission_fn(ctor: &JsValue) -> Option<js_sys::Function> {
    js_sys::Reflect::get(ctor, &JsValue::from_str("requestPermission"))
        .ok()
        .and_then(|f| f.dyn_into::<js_sys::Function>().ok())
}

/// Probe the current platform
pub fn detect() -> OrientationSupport {
    match orientation_constructor() {
        Some(ctor) => OrientationSupport {
            supported: true,
            gated: request_permission_fn(&ctor).is_some(),
        },
        None => OrientationSupport {
            supported: false,
            gated: false,
        },
    }
}

/// Ask for orientation access.
///
/// Never switches input mode; the caller decides what to do with the outcome.
pub async fn request() -> PermissionOutcome {
    let Some(ctor) = orientation_constructor() else {
        log::warn!("DeviceOrientationEvent not available");
        return PermissionOutcome::Unsupported;
    };

    let Some(request_fn) = request_permission_fn(&ctor) else {
        // Ungated platform: events already flow
        return PermissionOutcome::Granted;
    };

    let promise = match request_fn.call0(&ctor) {
        Ok(value) => js_sys::Promise::resolve(&value),
        Err(e) => {
            log::warn!("requestPermission threw: {:?}", e);
            return PermissionOutcome::Denied;
        }
    };

    match JsFuture::from(promise).await {
        Ok(result) if result.as_string().as_deref() == Some("granted") => {
            log::info!("Orientation permission granted");
            PermissionOutcome::Granted
        }
        Ok(result) => {
            log::warn!("Orientation permission not granted: {:?}", result.as_string());
            PermissionOutcome::Denied
        }
        Err(e) => {
            log::warn!("Orientation permission request failed: {:?}", e);
            PermissionOutcome::Denied
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let gated = OrientationSupport { supported: true, gated: true };
        let open = OrientationSupport { supported: true, gated: false };
        let missing = OrientationSupport { supported: false, gated: false };

        assert_eq!(gated.initial_state(), PermissionState::Needed);
        assert_eq!(open.initial_state(), PermissionState::Granted);
        assert_eq!(missing.initial_state(), PermissionState::Unknown);
    }
}
