//! Simulation loop scenarios
//!
//! Drives the loop with explicit timestamps and inspects the recorded
//! display list and rig state.

use spring_curve_wasm::renderers::{DisplayList, DrawCommand};
use spring_curve_wasm::simulation::SimulationLoop;
use spring_curve_wasm::{InputMode, InputSample, OrientationSample, SimulationConfig, Vector2, Viewport};

fn started(viewport: Viewport) -> SimulationLoop {
    let mut sim = SimulationLoop::new(SimulationConfig::default()).unwrap();
    sim.start(viewport);
    sim
}

#[test]
fn test_delta_time_clamped_after_ten_frame_gap() {
    let viewport = Viewport::new(640.0, 480.0);
    let mut sim = started(viewport);
    let mut list = DisplayList::new(viewport);
    let frame = sim.config().timing.nominal_frame_ms;

    sim.tick(1000.0, &mut list);
    let normal = sim.tick(1000.0 + frame, &mut list).unwrap();
    assert!((normal.delta_time - 1.0).abs() < 1e-9);

    let stalled = sim.tick(1000.0 + frame + 10.0 * frame, &mut list).unwrap();
    assert_eq!(stalled.delta_time, 2.0);
}

#[test]
fn test_mode_switch_without_orientation_keeps_targets() {
    let viewport = Viewport::new(1000.0, 800.0);
    let mut sim = started(viewport);
    let mut list = DisplayList::new(viewport);

    sim.record_input(InputSample::Pointer(Vector2::new(750.0, 200.0)));
    sim.tick(0.0, &mut list);
    let pointer_targets = sim.rig().unwrap().targets();

    sim.set_mode(InputMode::Orientation);
    for i in 1..30 {
        list.clear();
        sim.tick(i as f64 * 16.0, &mut list);
        assert_eq!(sim.rig().unwrap().targets(), pointer_targets);
    }

    // The first orientation sample takes over
    sim.record_input(InputSample::Orientation(OrientationSample::new(90.0, 45.0, 0.0)));
    sim.tick(500.0, &mut list);
    let targets = sim.rig().unwrap().targets();
    assert!((targets[1].x - (400.0 + 75.0)).abs() < 1e-9);
    assert!((targets[2].x - (600.0 - 75.0)).abs() < 1e-9);
}

#[test]
fn test_end_to_end_frame() {
    let viewport = Viewport::new(400.0, 200.0);
    let mut sim = started(viewport);
    let mut list = DisplayList::new(viewport);

    sim.record_input(InputSample::Pointer(Vector2::new(300.0, 150.0)));
    for i in 0..120 {
        list.clear();
        sim.tick(i as f64 * (1000.0 / 60.0), &mut list);
    }

    // Background covers the viewport
    match &list.commands[0] {
        DrawCommand::FillRect { width, height, .. } => {
            assert_eq!(*width, 400.0);
            assert_eq!(*height, 200.0);
        }
        other => panic!("expected background first, got {:?}", other),
    }

    // Curve runs from P0 to P3
    let curve: Vec<_> = list.polylines().collect();
    assert_eq!(curve.len(), 1);
    let points = curve[0].0;
    assert_eq!(points.first(), Some(&Vector2::new(80.0, 100.0)));
    assert_eq!(points.last(), Some(&Vector2::new(320.0, 100.0)));

    // Markers sit on the rig positions
    let positions = sim.rig().unwrap().positions();
    let centers: Vec<Vector2> = list.circles().map(|(center, _, _)| *center).collect();
    assert_eq!(centers, positions.to_vec());

    // After two seconds the dynamic points have settled on their targets
    let targets = sim.rig().unwrap().targets();
    assert!(positions[1].distance(targets[1]) < 0.5);
    assert!(positions[2].distance(targets[2]) < 0.5);
}

#[test]
fn test_toggles_apply_without_restart() {
    let viewport = Viewport::new(300.0, 300.0);
    let mut sim = started(viewport);
    let mut list = DisplayList::new(viewport);

    sim.tick(0.0, &mut list);
    assert_eq!(list.circles().count(), 4);
    assert_eq!(list.polygons().count(), 13);

    sim.set_show_controls(false);
    sim.set_show_tangents(false);
    list.clear();
    sim.tick(16.0, &mut list);
    assert_eq!(list.circles().count(), 0);
    assert_eq!(list.polygons().count(), 0);
    assert!(sim.is_running());
}

#[test]
fn test_restart_builds_fresh_rig() {
    let viewport = Viewport::new(500.0, 500.0);
    let mut sim = started(viewport);
    let mut list = DisplayList::new(viewport);

    sim.record_input(InputSample::Pointer(Vector2::new(0.0, 0.0)));
    for i in 0..10 {
        sim.tick(i as f64 * 16.0, &mut list);
    }
    sim.stop();

    sim.start(Viewport::new(200.0, 100.0));
    let positions = sim.rig().unwrap().positions();
    assert_eq!(positions[1], Vector2::new(80.0, 30.0));
    assert_eq!(sim.fps(), 0);
}

#[test]
fn test_sub_pixel_grid_rejected_at_construction() {
    let mut config = SimulationConfig::default();
    config.render.grid_spacing = 0.01;
    assert!(SimulationLoop::new(config).is_err());
}
