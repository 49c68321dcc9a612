//! Simulation loop
//!
//! The per-frame conductor: compute a bounded time step, count frames,
//! map the latest input onto rig targets, advance the springs and draw.
//! Scheduling is left to the host (see `api::runtime` for the browser);
//! this type only runs one tick when asked.

pub mod snapshot;

use serde::{Deserialize, Serialize};
use crate::error::SimulationResult;
use crate::models::config::SimulationConfig;
use crate::models::input::{InputMode, InputSample, InputState};
use crate::models::rig::ControlRig;
use crate::models::viewport::Viewport;
use crate::renderers::scene::{self, SceneOptions};
use crate::renderers::surface::DrawSurface;
use crate::utils::performance::{FrameClock, FrameStats};

pub use snapshot::{PointSnapshot, RigSnapshot};

/// Lifecycle of a simulation session
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LoopState {
    #[default]
    Stopped,
    Running,
}

/// What one tick did
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickReport {
    /// Step passed to every spring point
    pub delta_time: f64,

    /// New frame rate, when the counting window closed on this tick
    pub fps: Option<u32>,
}

/// Owns all per-session state: rig, input, toggles, timing
#[derive(Clone, Debug)]
pub struct SimulationLoop {
    config: SimulationConfig,
    state: LoopState,
    viewport: Viewport,
    rig: Option<ControlRig>,
    input: InputState,
    mode: InputMode,
    options: SceneOptions,
    clock: FrameClock,
    stats: FrameStats,
    frames: u64,
}

impl SimulationLoop {
    /// Create a stopped loop after validating `config`
    pub fn new(config: SimulationConfig) -> SimulationResult<Self> {
        config.validate()?;
        Ok(Self::from_validated(config))
    }

    /// Stopped loop with the tuned defaults
    pub fn with_defaults() -> Self {
        Self::from_validated(SimulationConfig::default())
    }

    fn from_validated(config: SimulationConfig) -> Self {
        let clock = FrameClock::new(&config.timing);

        Self {
            config,
            state: LoopState::Stopped,
            viewport: Viewport::default(),
            rig: None,
            input: InputState::new(),
            mode: InputMode::default(),
            options: SceneOptions::default(),
            clock,
            stats: FrameStats::new(),
            frames: 0,
        }
    }

    /// Capture the viewport and build the rig in its resting pose
    pub fn start(&mut self, viewport: Viewport) {
        if self.state == LoopState::Running {
            log::warn!("Simulation already running, start ignored");
            return;
        }

        self.viewport = viewport;
        self.rig = Some(ControlRig::new(viewport, &self.config.rig, &self.config.spring));
        self.clock.reset();
        self.stats = FrameStats::new();
        self.frames = 0;
        self.state = LoopState::Running;

        log::info!(
            "Simulation started ({}x{}, mode={})",
            viewport.width,
            viewport.height,
            self.mode.as_str()
        );
    }

    /// Tear down the session; the rig is discarded
    pub fn stop(&mut self) {
        if self.state == LoopState::Stopped {
            return;
        }

        self.state = LoopState::Stopped;
        self.rig = None;
        self.input = InputState::new();
        log::info!("Simulation stopped");
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    /// New surface size, used from the next tick on. Spring state is kept.
    pub fn resize(&mut self, viewport: Viewport) {
        log::debug!("Viewport resized to {}x{}", viewport.width, viewport.height);
        self.viewport = viewport;
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Store a sample; the next tick reads it
    pub fn record_input(&mut self, sample: InputSample) {
        self.input.record(sample);
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn set_mode(&mut self, mode: InputMode) {
        if self.mode != mode {
            log::info!("Input mode: {} -> {}", self.mode.as_str(), mode.as_str());
            self.mode = mode;
        }
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn set_show_tangents(&mut self, show: bool) {
        self.options.show_tangents = show;
    }

    pub fn set_show_controls(&mut self, show: bool) {
        self.options.show_controls = show;
    }

    pub fn options(&self) -> SceneOptions {
        self.options
    }

    /// Last published frame rate
    pub fn fps(&self) -> u32 {
        self.stats.fps
    }

    pub fn frame_stats(&self) -> &FrameStats {
        &self.stats
    }

    /// Ticks run since the last start
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn rig(&self) -> Option<&ControlRig> {
        self.rig.as_ref()
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Run one frame at `now_ms` and draw it on `surface`.
    ///
    /// Returns `None` while stopped.
    pub fn tick(&mut self, now_ms: f64, surface: &mut dyn DrawSurface) -> Option<TickReport> {
        if self.state != LoopState::Running {
            return None;
        }
        let rig = self.rig.as_mut()?;

        // Read once; a resize mid-tick must not split the frame
        let viewport = self.viewport;

        let delta_time = self.clock.advance(now_ms);
        self.frames += 1;

        let fps = self.stats.record_frame(now_ms, self.config.timing.fps_window_ms);
        if let Some(fps) = fps {
            log::debug!("fps={}", fps);
        }

        rig.apply_input(self.mode, &self.input, viewport);
        rig.update(delta_time);

        scene::render_frame(surface, viewport, &rig.curve(), self.options, &self.config.render);

        Some(TickReport { delta_time, fps })
    }

    pub fn snapshot(&self) -> RigSnapshot {
        RigSnapshot {
            state: self.state,
            mode: self.mode,
            options: self.options,
            viewport: self.viewport,
            fps: self.stats.fps,
            frames: self.frames,
            pointer: self.input.pointer(),
            points: self.rig.as_ref().map(PointSnapshot::from_rig).unwrap_or_default(),
        }
    }
}
