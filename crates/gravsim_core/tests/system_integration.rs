//! Integration tests for the system pipeline
//!
//! These tests verify the template → validation → world → render pipeline:
//! 1. The bundled system file loads and instantiates
//! 2. Stepping is deterministic and independent of body order
//! 3. Invalid templates never produce a running world
//! 4. Render instances track the physics state

use gravsim_core::{
    ActiveSystem, BodyTemplate, SimulationConfig, SystemError, SystemTemplate, Trajectory, Vec2,
};
use std::path::PathBuf;

fn solar_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../assets/systems/solar.ron")
}

fn binary_template() -> SystemTemplate {
    let mut template = SystemTemplate::new("Binary")
        .with_gravitational_constant(5.0)
        .with_dt(0.25);
    template.add_body(BodyTemplate::new("left", 10.0, 1.0).with_position(-15.0, 0.0).with_velocity(0.0, 0.4));
    template.add_body(BodyTemplate::new("right", 10.0, 1.0).with_position(15.0, 0.0).with_velocity(0.0, -0.4));
    template
}

// ==================== Loading Tests ====================

#[test]
fn test_bundled_system_loads() {
    let active = ActiveSystem::load(solar_path(), None).expect("solar system should load");

    assert_eq!(active.name, "Solar");
    assert_eq!(active.world.body_count(), 4);
    assert_eq!(active.world.config(), SimulationConfig::new(5.0, 1.0));

    let (_, sun) = active.world.get_by_name("Sun").unwrap();
    assert_eq!(sun.mass(), 1000.0);
    assert!((sun.radius() - 10.0).abs() < 1e-9);
}

#[test]
fn test_bundled_system_survives_save_and_load() {
    let template = SystemTemplate::load(solar_path()).unwrap();
    let path = std::env::temp_dir().join(format!("gravsim_roundtrip_{}.ron", std::process::id()));

    template.save(&path).unwrap();
    let reloaded = SystemTemplate::load(&path).unwrap();
    let _ = std::fs::remove_file(&path);

    assert_eq!(reloaded, template);
}

#[test]
fn test_bundled_system_planets_stay_in_orbit() {
    let mut active = ActiveSystem::load(solar_path(), None).unwrap();
    let sun_start = active.world.get_by_name("Sun").unwrap().1.position();

    for _ in 0..500 {
        active.update();
    }

    let sun = active.world.get_by_name("Sun").unwrap().1.position();
    let earth = active.world.get_by_name("Earth").unwrap().1.position();
    let r = sun.distance(earth);
    assert!(r > 150.0 && r < 260.0, "Earth drifted to r = {}", r);
    assert!(sun.distance(sun_start) < 50.0);
}

// ==================== Step Ordering Tests ====================

#[test]
fn test_order_of_bodies_does_not_change_result() {
    let forward = binary_template();
    let mut reversed = forward.clone();
    reversed.bodies.reverse();

    let mut a = ActiveSystem::from_template(&forward, None).unwrap();
    let mut b = ActiveSystem::from_template(&reversed, None).unwrap();
    a.world.step_n(100);
    b.world.step_n(100);

    for name in ["left", "right"] {
        let pa = a.world.get_by_name(name).unwrap().1.position();
        let pb = b.world.get_by_name(name).unwrap().1.position();
        assert_eq!(pa, pb, "{} diverged", name);
    }
}

#[test]
fn test_independent_runs_are_identical() {
    let template = binary_template();
    let mut first = ActiveSystem::from_template(&template, None).unwrap();
    let mut second = ActiveSystem::from_template(&template, None).unwrap();

    let a = Trajectory::record_run(&mut first.world, 300);
    let b = Trajectory::record_run(&mut second.world, 300);

    assert_eq!(a.max_deviation(&b), Some(0.0));
    assert_eq!(a, b);
}

#[test]
fn test_symmetric_pair_stays_symmetric() {
    let mut active = ActiveSystem::from_template(&binary_template(), None).unwrap();
    let trajectory = Trajectory::record_run(&mut active.world, 200);

    let left = trajectory.path("left").unwrap();
    let right = trajectory.path("right").unwrap();
    for (l, r) in left.iter().zip(&right) {
        assert!((*l + *r).length() < 1e-9, "{:?} vs {:?}", l, r);
    }
}

// ==================== Validation Tests ====================

#[test]
fn test_invalid_template_never_starts() {
    let mut template = binary_template();
    template.add_body(BodyTemplate::new("dust", 1.0, -2.0));

    match ActiveSystem::from_template(&template, None) {
        Err(SystemError::Validation(errors)) => {
            assert_eq!(errors.len(), 1);
            assert!(errors[0].to_string().contains("dust"));
        }
        Err(other) => panic!("Expected validation error, got {}", other),
        Ok(_) => panic!("Invalid template instantiated"),
    }
}

#[test]
fn test_missing_file_is_load_error() {
    let result = ActiveSystem::load("no/such/system.ron", None);
    assert!(matches!(result, Err(SystemError::Load(_))));
}

// ==================== Render Tests ====================

#[test]
fn test_instances_follow_bodies() {
    let mut active = ActiveSystem::from_template(&binary_template(), None).unwrap();
    active.update();

    let instances = active.instances();
    let left = active.world.get_by_name("left").unwrap().1.position();
    assert_eq!(instances.len(), 2);
    assert_eq!(instances[0].position, left.to_f32_array());
    assert_ne!(instances[0].position, Vec2::new(-15.0, 0.0).to_f32_array());
}
