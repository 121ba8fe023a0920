//! Integration tests for multi-tick orbital behaviour
//!
//! These run the public world API for many ticks and check the aggregate
//! behaviour that a driver relies on.

use gravsim_math::Vec2;
use gravsim_physics::{Body, GravityWorld, SimulationConfig};

/// Heavy central body with a light satellite on a near-circular orbit
fn star_and_planet(dt: f64) -> GravityWorld {
    let g: f64 = 1.0;
    let star_mass = 1000.0;
    let radius = 100.0;
    // a = G * M / r² and v² / r = a
    let orbital_speed = (g * star_mass / radius).sqrt();

    let mut world = GravityWorld::with_config(SimulationConfig::new(g, dt)).unwrap();
    world.add_body(Body::at_rest("star", star_mass, 1.0, Vec2::ZERO).unwrap());
    world.add_body(
        Body::at_rest("planet", 0.001, 1.0, Vec2::new(radius, 0.0))
            .unwrap()
            .with_velocity(Vec2::new(0.0, orbital_speed)),
    );
    world
}

/// 2π r / v, about 198.7 time units
fn orbital_period() -> f64 {
    2.0 * std::f64::consts::PI * 100.0 / 10.0f64.sqrt()
}

fn separation(world: &GravityWorld) -> f64 {
    let star = world.get_by_name("star").unwrap().1.position();
    let planet = world.get_by_name("planet").unwrap().1.position();
    star.distance(planet)
}

fn separation_x(world: &GravityWorld) -> f64 {
    let left = world.get_by_name("left").unwrap().1.position();
    let right = world.get_by_name("right").unwrap().1.position();
    right.x - left.x
}

#[test]
fn test_circular_orbit_stays_bounded() {
    let mut world = star_and_planet(0.05);

    let ticks = (orbital_period() / 0.05) as u64;
    let mut min_r = f64::MAX;
    let mut max_r = 0.0f64;
    for _ in 0..ticks {
        world.step();
        let r = separation(&world);
        min_r = min_r.min(r);
        max_r = max_r.max(r);
    }

    // Radius stays within 5% over a full period
    assert!(min_r > 95.0, "orbit decayed to {}", min_r);
    assert!(max_r < 105.0, "orbit escaped to {}", max_r);
}

#[test]
fn test_orbit_returns_near_start() {
    let mut world = star_and_planet(0.01);
    let ticks = (orbital_period() / 0.01).round() as u64;

    world.step_n(ticks);

    let planet = world.get_by_name("planet").unwrap().1.position();
    assert!(
        planet.distance(Vec2::new(100.0, 0.0)) < 5.0,
        "planet ended at {:?}",
        planet
    );
}

#[test]
fn test_equal_masses_meet_in_the_middle() {
    let mut world = GravityWorld::with_config(SimulationConfig::new(5.0, 0.1)).unwrap();
    world.add_body(Body::at_rest("left", 10.0, 1.0, Vec2::new(-20.0, 3.0)).unwrap());
    world.add_body(Body::at_rest("right", 10.0, 1.0, Vec2::new(20.0, 3.0)).unwrap());

    for _ in 0..50 {
        world.step();
        let left = world.get_by_name("left").unwrap().1.position();
        let right = world.get_by_name("right").unwrap().1.position();
        assert!((left.x + right.x).abs() < 1e-9);
        assert_eq!(left.y, 3.0);
        assert_eq!(right.y, 3.0);
    }

    assert!(separation_x(&world) < 40.0);
}
