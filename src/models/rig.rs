//! Control rig
//!
//! The four spring points that shape the curve: two fixed endpoints and
//! two dynamic interior points whose targets follow the active input.

use serde::{Deserialize, Serialize};
use super::bezier::CubicBezier;
use super::config::{RigConfig, SpringConfig};
use super::input::{InputMode, InputSample, InputState, OrientationSample};
use super::spring::SpringPoint;
use super::vector::Vector2;
use super::viewport::Viewport;

/// Role of each slot in the rig
pub const START: usize = 0;
pub const FIRST_CONTROL: usize = 1;
pub const SECOND_CONTROL: usize = 2;
pub const END: usize = 3;

/// Exactly four control points, P0 and P3 fixed, P1 and P2 dynamic
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ControlRig {
    points: [SpringPoint; 4],
    config: RigConfig,
}

impl ControlRig {
    /// Build the rig in its resting pose for `viewport`
    pub fn new(viewport: Viewport, rig: &RigConfig, spring: &SpringConfig) -> Self {
        let points = [
            SpringPoint::new(viewport.at_fraction(rig.start_anchor), true, spring),
            SpringPoint::new(viewport.at_fraction(rig.first_anchor), false, spring),
            SpringPoint::new(viewport.at_fraction(rig.second_anchor), false, spring),
            SpringPoint::new(viewport.at_fraction(rig.end_anchor), true, spring),
        ];

        Self {
            points,
            config: rig.clone(),
        }
    }

    /// Rig with default tuning
    pub fn with_defaults(viewport: Viewport) -> Self {
        Self::new(viewport, &RigConfig::default(), &SpringConfig::default())
    }

    pub fn points(&self) -> &[SpringPoint; 4] {
        &self.points
    }

    /// Current positions in order P0..P3
    pub fn positions(&self) -> [Vector2; 4] {
        [
            self.points[START].position(),
            self.points[FIRST_CONTROL].position(),
            self.points[SECOND_CONTROL].position(),
            self.points[END].position(),
        ]
    }

    pub fn targets(&self) -> [Vector2; 4] {
        [
            self.points[START].target(),
            self.points[FIRST_CONTROL].target(),
            self.points[SECOND_CONTROL].target(),
            self.points[END].target(),
        ]
    }

    /// The curve described by the current positions
    pub fn curve(&self) -> CubicBezier {
        let [p0, p1, p2, p3] = self.positions();
        CubicBezier::new(p0, p1, p2, p3)
    }

    /// Update the dynamic targets from the latest sample for `mode`.
    ///
    /// Without a sample for the active mode the targets are left as they are.
    pub fn apply_input(&mut self, mode: InputMode, input: &InputState, viewport: Viewport) {
        if let Some(sample) = input.latest_for(mode) {
            self.apply_sample(sample, viewport);
        }
    }

    /// Update the dynamic targets from a single sample
    pub fn apply_sample(&mut self, sample: InputSample, viewport: Viewport) {
        let offset = match sample {
            InputSample::Pointer(position) => self.pointer_offset(position, viewport),
            InputSample::Orientation(orientation) => self.orientation_offset(orientation),
        };
        self.set_dynamic_targets(offset, viewport);
    }

    /// Offset of a pointer from the viewport center, scaled by sensitivity
    pub fn pointer_offset(&self, position: Vector2, viewport: Viewport) -> Vector2 {
        (position - viewport.center()) * self.config.pointer_sensitivity
    }

    /// Offset for a device tilt; beta is re-centered on the "held upright" angle
    pub fn orientation_offset(&self, orientation: OrientationSample) -> Vector2 {
        let range = self.config.orientation_range;
        let full_tilt = self.config.orientation_full_tilt;

        Vector2::new(
            (orientation.gamma / full_tilt) * range,
            ((orientation.beta - self.config.orientation_beta_center) / full_tilt) * range,
        )
    }

    /// Move P1 with the offset and P2 against it
    fn set_dynamic_targets(&mut self, offset: Vector2, viewport: Viewport) {
        let first = viewport.at_fraction(self.config.first_anchor) + offset;
        let second = viewport.at_fraction(self.config.second_anchor) - offset;

        self.points[FIRST_CONTROL].set_target(first.x, first.y);
        self.points[SECOND_CONTROL].set_target(second.x, second.y);
    }

    /// Advance every point by one step, P0 through P3
    pub fn update(&mut self, delta_time: f64) {
        for point in self.points.iter_mut() {
            point.update(delta_time);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Viewport {
        Viewport::new(1000.0, 800.0)
    }

    #[test]
    fn test_resting_pose() {
        let rig = ControlRig::with_defaults(viewport());
        let [p0, p1, p2, p3] = rig.positions();

        assert_eq!(p0, Vector2::new(200.0, 400.0));
        assert_eq!(p1, Vector2::new(400.0, 240.0));
        assert_eq!(p2, Vector2::new(600.0, 560.0));
        assert_eq!(p3, Vector2::new(800.0, 400.0));

        assert!(rig.points()[START].is_fixed());
        assert!(!rig.points()[FIRST_CONTROL].is_fixed());
        assert!(!rig.points()[SECOND_CONTROL].is_fixed());
        assert!(rig.points()[END].is_fixed());
    }

    #[test]
    fn test_pointer_at_center_keeps_anchor_targets() {
        let mut rig = ControlRig::with_defaults(viewport());
        rig.apply_sample(InputSample::Pointer(Vector2::new(500.0, 400.0)), viewport());

        let targets = rig.targets();
        assert_eq!(targets[FIRST_CONTROL], Vector2::new(400.0, 240.0));
        assert_eq!(targets[SECOND_CONTROL], Vector2::new(600.0, 560.0));
    }

    #[test]
    fn test_pointer_offset_mirrors_second_control() {
        let mut rig = ControlRig::with_defaults(viewport());
        rig.apply_sample(InputSample::Pointer(Vector2::new(600.0, 500.0)), viewport());

        // offset = (100, 100) * 0.3 = (30, 30)
        let targets = rig.targets();
        assert!((targets[FIRST_CONTROL].x - 430.0).abs() < 1e-9);
        assert!((targets[FIRST_CONTROL].y - 270.0).abs() < 1e-9);
        assert!((targets[SECOND_CONTROL].x - 570.0).abs() < 1e-9);
        assert!((targets[SECOND_CONTROL].y - 530.0).abs() < 1e-9);
    }

    #[test]
    fn test_orientation_offset() {
        let rig = ControlRig::with_defaults(viewport());

        let level = rig.orientation_offset(OrientationSample::new(90.0, 0.0, 0.0));
        assert_eq!(level, Vector2::ZERO);

        let tilted = rig.orientation_offset(OrientationSample::new(135.0, -45.0, 10.0));
        assert_eq!(tilted, Vector2::new(-75.0, 75.0));
    }

    #[test]
    fn test_endpoint_targets_never_change() {
        let mut rig = ControlRig::with_defaults(viewport());
        let before = rig.targets();

        rig.apply_sample(InputSample::Pointer(Vector2::new(0.0, 0.0)), viewport());
        rig.apply_sample(
            InputSample::Orientation(OrientationSample::new(10.0, 80.0, 0.0)),
            Viewport::new(300.0, 300.0),
        );

        let after = rig.targets();
        assert_eq!(before[START], after[START]);
        assert_eq!(before[END], after[END]);
    }

    #[test]
    fn test_no_sample_leaves_targets() {
        let mut rig = ControlRig::with_defaults(viewport());
        let mut input = InputState::new();
        input.record(InputSample::Pointer(Vector2::new(900.0, 100.0)));
        rig.apply_input(InputMode::Pointer, &input, viewport());
        let pointer_targets = rig.targets();

        rig.apply_input(InputMode::Orientation, &input, viewport());
        assert_eq!(rig.targets(), pointer_targets);
    }
}
