//! Renderers module
//!
//! The drawing-surface contract, the per-frame scene routines, and the
//! surfaces they can draw on: a recording display list and an HTML canvas.

pub mod surface;
pub mod scene;
pub mod display_list;
pub mod canvas;

// Re-export commonly used types
pub use surface::{DrawSurface, StrokeStyle};
pub use scene::{render_frame, SceneOptions};
pub use display_list::{DisplayList, DrawCommand};
pub use canvas::CanvasSurface;
