//! Simulation configuration
//!
//! All tuned constants live here. Every field has a serde default so a
//! host can pass a partial object and override only what it needs.

use serde::{Deserialize, Serialize};
use crate::error::{SimulationError, SimulationResult};
use super::vector::Vector2;

/// Spring tuning shared by the dynamic control points
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct SpringConfig {
    pub spring_constant: f64,
    pub damping: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            spring_constant: 0.15,
            damping: 0.85,
        }
    }
}

/// Anchor fractions and input sensitivity for the control rig.
///
/// Anchors are fractions of the viewport size.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct RigConfig {
    pub start_anchor: Vector2,
    pub first_anchor: Vector2,
    pub second_anchor: Vector2,
    pub end_anchor: Vector2,

    /// Multiplier from pointer offset (relative to the viewport center) to target offset
    pub pointer_sensitivity: f64,

    /// Target offset in pixels at full tilt
    pub orientation_range: f64,

    /// Beta angle treated as "level" (degrees)
    pub orientation_beta_center: f64,

    /// Tilt in degrees that maps to `orientation_range`
    pub orientation_full_tilt: f64,
}

impl Default for RigConfig {
    fn default() -> Self {
        Self {
            start_anchor: Vector2::new(0.2, 0.5),
            first_anchor: Vector2::new(0.4, 0.3),
            second_anchor: Vector2::new(0.6, 0.7),
            end_anchor: Vector2::new(0.8, 0.5),
            pointer_sensitivity: 0.3,
            orientation_range: 150.0,
            orientation_beta_center: 90.0,
            orientation_full_tilt: 90.0,
        }
    }
}

/// Frame timing
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct TimingConfig {
    /// Length of one nominal frame in milliseconds
    pub nominal_frame_ms: f64,

    /// Upper bound on the integration step, in nominal frames
    pub max_delta: f64,

    /// Length of the FPS counting window in milliseconds
    pub fps_window_ms: f64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            nominal_frame_ms: 1000.0 / 60.0,
            max_delta: 2.0,
            fps_window_ms: 1000.0,
        }
    }
}

/// CSS colors used by the renderer
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Palette {
    pub background: String,
    pub grid: String,
    pub curve: String,
    pub tangent: String,
    pub guide: String,
    pub fixed_point: String,
    pub dynamic_point: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: "#0f172a".to_string(),
            grid: "rgba(148, 163, 184, 0.1)".to_string(),
            curve: "#38bdf8".to_string(),
            tangent: "#f472b6".to_string(),
            guide: "rgba(148, 163, 184, 0.5)".to_string(),
            fixed_point: "#f59e0b".to_string(),
            dynamic_point: "#22c55e".to_string(),
        }
    }
}

/// Smallest grid spacing, in pixels, the renderer accepts
pub const MIN_GRID_SPACING: f64 = 1.0;

/// Renderer sizes and sample counts
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct RenderConfig {
    pub grid_spacing: f64,
    pub grid_line_width: f64,
    pub curve_samples: usize,
    pub curve_line_width: f64,
    pub tangent_samples: usize,
    pub tangent_length: f64,
    pub tangent_line_width: f64,
    pub arrow_size: f64,
    pub arrow_half_angle_deg: f64,
    pub guide_dash: Vec<f64>,
    pub guide_line_width: f64,
    pub endpoint_radius: f64,
    pub dynamic_radius: f64,
    pub palette: Palette,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            grid_spacing: 50.0,
            grid_line_width: 1.0,
            curve_samples: 100,
            curve_line_width: 3.0,
            tangent_samples: 12,
            tangent_length: 40.0,
            tangent_line_width: 2.0,
            arrow_size: 8.0,
            arrow_half_angle_deg: 30.0,
            guide_dash: vec![5.0, 5.0],
            guide_line_width: 1.0,
            endpoint_radius: 8.0,
            dynamic_radius: 10.0,
            palette: Palette::default(),
        }
    }
}

/// Complete simulation configuration
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    pub spring: SpringConfig,
    pub rig: RigConfig,
    pub timing: TimingConfig,
    pub render: RenderConfig,
}

impl SimulationConfig {
    /// Reject constants that would break the integrator or the renderer
    pub fn validate(&self) -> SimulationResult<()> {
        positive("spring.spring_constant", self.spring.spring_constant)?;
        positive("spring.damping", self.spring.damping)?;
        positive("timing.nominal_frame_ms", self.timing.nominal_frame_ms)?;
        positive("timing.max_delta", self.timing.max_delta)?;
        positive("timing.fps_window_ms", self.timing.fps_window_ms)?;
        positive("render.grid_spacing", self.render.grid_spacing)?;

        if self.render.grid_spacing < MIN_GRID_SPACING {
            return Err(SimulationError::InvalidConfig(format!(
                "render.grid_spacing must be at least {} px (got {})",
                MIN_GRID_SPACING, self.render.grid_spacing
            )));
        }

        if self.render.curve_samples == 0 {
            return Err(SimulationError::InvalidConfig(
                "render.curve_samples must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

fn positive(name: &str, value: f64) -> SimulationResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SimulationError::InvalidConfig(format!(
            "{} must be a positive finite number (got {})",
            name, value
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(SimulationConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: SimulationConfig =
            serde_json::from_str(r#"{ "spring": { "damping": 0.5 }, "render": { "grid_spacing": 25 } }"#)
                .unwrap();

        assert_eq!(config.spring.damping, 0.5);
        assert_eq!(config.spring.spring_constant, 0.15);
        assert_eq!(config.render.grid_spacing, 25.0);
        assert_eq!(config.render.curve_samples, 100);
        assert_eq!(config.rig, RigConfig::default());
    }

    #[test]
    fn test_rejects_non_positive_constants() {
        let mut config = SimulationConfig::default();
        config.spring.spring_constant = 0.0;
        assert!(matches!(config.validate(), Err(SimulationError::InvalidConfig(_))));

        let mut config = SimulationConfig::default();
        config.timing.max_delta = f64::NAN;
        assert!(config.validate().is_err());

        let mut config = SimulationConfig::default();
        config.render.curve_samples = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_sub_pixel_grid_spacing() {
        let mut config = SimulationConfig::default();
        config.render.grid_spacing = 0.01;
        assert!(matches!(config.validate(), Err(SimulationError::InvalidConfig(_))));

        config.render.grid_spacing = MIN_GRID_SPACING;
        assert!(config.validate().is_ok());
    }
}
