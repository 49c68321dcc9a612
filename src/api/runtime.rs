//! Browser runtime for the simulation loop
//!
//! Binds a `SimulationLoop` to a canvas: registers input listeners once at
//! start, drives ticks from `requestAnimationFrame`, and tears both down on
//! stop. Everything runs on the single browser thread, so shared state is
//! `Rc` + `RefCell`/`Cell`. Callbacks hold `Weak` references so the runtime
//! can be dropped while listeners are still attached.
//!
//! Listeners and the pending frame are owned gloo handles: dropping an
//! `EventListener` detaches it and dropping an `AnimationFrame` cancels it.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use gloo::events::{EventListener, EventListenerOptions};
use gloo::render::{request_animation_frame, AnimationFrame};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{DeviceOrientationEvent, Event, HtmlCanvasElement, MouseEvent, TouchEvent};
use crate::error::SimulationResult;
use crate::models::config::SimulationConfig;
use crate::models::input::{InputMode, InputSample, OrientationSample, PermissionOutcome, PermissionState};
use crate::models::vector::Vector2;
use crate::renderers::canvas::CanvasSurface;
use crate::renderers::display_list::DisplayList;
use crate::simulation::SimulationLoop;
use super::helpers;
use super::permission::{self, OrientationSupport};
use super::types::HostStatus;

pub struct Runtime {
    sim: RefCell<SimulationLoop>,
    surface: RefCell<CanvasSurface>,
    listeners: RefCell<Vec<EventListener>>,
    frame: RefCell<Option<AnimationFrame>>,
    fps_callback: RefCell<Option<js_sys::Function>>,
    support: OrientationSupport,
    permission: Cell<PermissionState>,
}

impl Runtime {
    pub fn new(canvas: HtmlCanvasElement, config: SimulationConfig) -> SimulationResult<Rc<Self>> {
        let sim = SimulationLoop::new(config)?;
        let surface = CanvasSurface::new(canvas)?;
        let support = permission::detect();

        log::debug!(
            "Orientation support: supported={}, gated={}",
            support.supported,
            support.gated
        );

        Ok(Rc::new(Self {
            sim: RefCell::new(sim),
            surface: RefCell::new(surface),
            listeners: RefCell::new(Vec::new()),
            frame: RefCell::new(None),
            fps_callback: RefCell::new(None),
            support,
            permission: Cell::new(support.initial_state()),
        }))
    }

    /// Size the canvas, build the rig, attach listeners and request the first frame
    pub fn start(self: &Rc<Self>) -> SimulationResult<()> {
        if self.sim.borrow().is_running() {
            return Ok(());
        }

        let viewport = self.surface.borrow().fit_to_client();
        self.sim.borrow_mut().start(viewport);

        if let Err(e) = self.install_listeners() {
            self.stop();
            return Err(e);
        }
        self.request_frame();

        Ok(())
    }

    /// Detach listeners and cancel the pending frame.
    ///
    /// No tick runs after this returns.
    pub fn stop(&self) {
        self.sim.borrow_mut().stop();

        // Dropping the handles cancels the frame and detaches the listeners
        let frame = self.frame.borrow_mut().take();
        drop(frame);
        let listeners = std::mem::take(&mut *self.listeners.borrow_mut());
        log::debug!("Detached {} listeners", listeners.len());
        drop(listeners);
    }

    pub fn is_running(&self) -> bool {
        self.sim.borrow().is_running()
    }

    fn request_frame(self: &Rc<Self>) {
        let weak = Rc::downgrade(self);
        let handle = request_animation_frame(move |timestamp| {
            with_runtime(&weak, |rt| rt.on_frame(timestamp));
        });
        *self.frame.borrow_mut() = Some(handle);
    }

    fn on_frame(self: &Rc<Self>, timestamp: f64) {
        // The handle for this frame is spent
        let spent = self.frame.borrow_mut().take();
        drop(spent);

        let report = {
            let mut sim = self.sim.borrow_mut();
            let mut surface = self.surface.borrow_mut();
            sim.tick(timestamp, &mut *surface)
        };

        // Borrows released: the host callback may call back into us
        if let Some(fps) = report.and_then(|r| r.fps) {
            self.publish_fps(fps);
        }

        if self.is_running() {
            self.request_frame();
        }
    }

    fn publish_fps(&self, fps: u32) {
        let callback = self.fps_callback.borrow().clone();
        if let Some(callback) = callback {
            if let Err(e) = callback.call1(&JsValue::NULL, &JsValue::from(fps)) {
                log::warn!("fps callback threw: {:?}", e);
            }
        }
    }

    fn install_listeners(self: &Rc<Self>) -> SimulationResult<()> {
        let window = helpers::window()?;
        let canvas = self.surface.borrow().canvas().clone();
        let mut listeners = Vec::new();

        let weak = Rc::downgrade(self);
        listeners.push(EventListener::new(&canvas, "mousemove", move |event: &Event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let position = Vector2::new(event.offset_x() as f64, event.offset_y() as f64);
            with_runtime(&weak, |rt| rt.record(InputSample::Pointer(position)));
        }));

        let weak = Rc::downgrade(self);
        let touch_canvas = canvas.clone();
        // Not passive: the page must not scroll while the curve is dragged
        let options = EventListenerOptions::enable_prevent_default();
        let listener = EventListener::new_with_options(&canvas, "touchmove", options, move |event: &Event| {
            let Some(event) = event.dyn_ref::<TouchEvent>() else {
                return;
            };
            let Some(touch) = event.touches().get(0) else {
                return;
            };
            event.prevent_default();
            let rect = touch_canvas.get_bounding_client_rect();
            let position = Vector2::new(
                touch.client_x() as f64 - rect.left(),
                touch.client_y() as f64 - rect.top(),
            );
            with_runtime(&weak, |rt| rt.record(InputSample::Pointer(position)));
        });
        listeners.push(listener);

        let weak = Rc::downgrade(self);
        listeners.push(EventListener::new(&window, "deviceorientation", move |event: &Event| {
            let Some(event) = event.dyn_ref::<DeviceOrientationEvent>() else {
                return;
            };
            let sample = OrientationSample::from_optional(event.beta(), event.gamma(), event.alpha());
            with_runtime(&weak, |rt| rt.record(InputSample::Orientation(sample)));
        }));

        let weak = Rc::downgrade(self);
        listeners.push(EventListener::new(&window, "resize", move |_event: &Event| {
            with_runtime(&weak, |rt| rt.handle_resize());
        }));

        log::debug!("Attached {} listeners", listeners.len());
        *self.listeners.borrow_mut() = listeners;
        Ok(())
    }

    pub fn record(&self, sample: InputSample) {
        self.sim.borrow_mut().record_input(sample);
    }

    pub fn handle_resize(&self) {
        let viewport = self.surface.borrow().fit_to_client();
        self.sim.borrow_mut().resize(viewport);
    }

    pub fn set_mode(&self, mode: InputMode) {
        self.sim.borrow_mut().set_mode(mode);
    }

    pub fn set_show_tangents(&self, show: bool) {
        self.sim.borrow_mut().set_show_tangents(show);
    }

    pub fn set_show_controls(&self, show: bool) {
        self.sim.borrow_mut().set_show_controls(show);
    }

    pub fn set_fps_callback(&self, callback: Option<js_sys::Function>) {
        *self.fps_callback.borrow_mut() = callback;
    }

    pub fn apply_permission_outcome(&self, outcome: PermissionOutcome) {
        self.permission.set(outcome.apply_to(self.permission.get()));
    }

    pub fn status(&self) -> HostStatus {
        let sim = self.sim.borrow();
        let options = sim.options();
        HostStatus {
            running: sim.is_running(),
            fps: sim.fps(),
            mode: sim.mode(),
            show_tangents: options.show_tangents,
            show_controls: options.show_controls,
            gyro_supported: self.support.supported,
            gyro_permission_state: self.permission.get(),
        }
    }

    pub fn with_sim<R>(&self, f: impl FnOnce(&SimulationLoop) -> R) -> R {
        f(&self.sim.borrow())
    }

    /// Render the current state into a display list without advancing it
    pub fn display_list(&self) -> DisplayList {
        let sim = self.sim.borrow();
        let viewport = sim.viewport();
        let mut list = DisplayList::new(viewport);
        if let Some(rig) = sim.rig() {
            crate::renderers::scene::render_frame(
                &mut list,
                viewport,
                &rig.curve(),
                sim.options(),
                &sim.config().render,
            );
        }
        list
    }
}

fn with_runtime(weak: &Weak<Runtime>, f: impl FnOnce(&Rc<Runtime>)) {
    if let Some(runtime) = weak.upgrade() {
        f(&runtime);
    }
}
