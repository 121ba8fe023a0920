//! Gravity world and simulation step

use crate::body::{Body, BodyKey};
use crate::error::BodyError;
use gravsim_math::Vec2;
use slotmap::SlotMap;

/// Gravitational constant used when none is configured
pub const DEFAULT_GRAVITATIONAL_CONSTANT: f64 = 5.0;

/// Time step used when none is configured
pub const DEFAULT_DT: f64 = 1.0;

/// Configuration for the gravity simulation
///
/// Shared read-only by every body for every tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationConfig {
    /// Scalar multiplier in the inverse-square law
    pub gravitational_constant: f64,
    /// Fixed integration time step
    pub dt: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            gravitational_constant: DEFAULT_GRAVITATIONAL_CONSTANT,
            dt: DEFAULT_DT,
        }
    }
}

impl SimulationConfig {
    /// Create a new simulation config
    pub fn new(gravitational_constant: f64, dt: f64) -> Self {
        Self { gravitational_constant, dt }
    }

    /// Check that G is finite and dt is a finite positive number
    pub fn validate(&self) -> Result<(), BodyError> {
        if !self.gravitational_constant.is_finite() {
            return Err(BodyError::InvalidGravitationalConstant(self.gravitational_constant));
        }
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(BodyError::InvalidTimeStep(self.dt));
        }
        Ok(())
    }
}

/// The gravity world containing all bodies
///
/// Bodies are only ever added, so iteration follows insertion order and is
/// stable from one tick to the next.
#[derive(Clone, Debug)]
pub struct GravityWorld {
    bodies: SlotMap<BodyKey, Body>,
    config: SimulationConfig,
    tick: u64,
}

impl GravityWorld {
    /// Create a new gravity world with default configuration
    pub fn new() -> Self {
        Self {
            bodies: SlotMap::with_key(),
            config: SimulationConfig::default(),
            tick: 0,
        }
    }

    /// Create a new gravity world with custom configuration
    pub fn with_config(config: SimulationConfig) -> Result<Self, BodyError> {
        config.validate()?;
        Ok(Self {
            bodies: SlotMap::with_key(),
            config,
            tick: 0,
        })
    }

    /// Current configuration
    pub fn config(&self) -> SimulationConfig {
        self.config
    }

    /// Replace the configuration between ticks
    pub fn reconfigure(&mut self, config: SimulationConfig) -> Result<(), BodyError> {
        config.validate()?;
        log::debug!(
            "Reconfigured gravity world: G = {}, dt = {}",
            config.gravitational_constant,
            config.dt
        );
        self.config = config;
        Ok(())
    }

    /// Add a body to the world and return its key
    pub fn add_body(&mut self, body: Body) -> BodyKey {
        log::debug!("Adding body '{}' (mass {}, radius {:.3})", body.name(), body.mass(), body.radius());
        self.bodies.insert(body)
    }

    /// Get an immutable reference to a body by key
    pub fn get_body(&self, key: BodyKey) -> Option<&Body> {
        self.bodies.get(key)
    }

    /// Find the first body with the given name
    pub fn get_by_name(&self, name: &str) -> Option<(BodyKey, &Body)> {
        self.bodies.iter().find(|(_, body)| body.name() == name)
    }

    /// Get the number of bodies in the world
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Iterate over all bodies in insertion order
    pub fn bodies(&self) -> impl Iterator<Item = (BodyKey, &Body)> + '_ {
        self.bodies.iter()
    }

    /// Number of completed steps
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Net force on a body from every body in the world (itself included)
    pub fn net_force(&self, key: BodyKey) -> Option<Vec2> {
        self.bodies.get(key).map(|body| self.net_force_on(body))
    }

    fn net_force_on(&self, body: &Body) -> Vec2 {
        let g = self.config.gravitational_constant;
        self.bodies.values().map(|other| body.calculate_force(other, g)).sum()
    }

    /// Step the simulation forward by one `dt`
    ///
    /// This performs:
    /// 1. Net force computation for every body against the current positions
    /// 2. Force application and semi-implicit Euler integration of every body
    ///
    /// No body moves until every net force for the tick is known.
    pub fn step(&mut self) {
        // Phase 1: read-only force pass
        let forces: Vec<Vec2> = self
            .bodies
            .values()
            .map(|body| self.net_force_on(body))
            .collect();

        // Phase 2: each body writes only its own state
        let dt = self.config.dt;
        for (body, force) in self.bodies.values_mut().zip(forces) {
            body.apply_force(force);
            body.advance(dt);
        }

        self.tick += 1;
    }

    /// Step the simulation forward `n` times
    pub fn step_n(&mut self, n: u64) {
        for _ in 0..n {
            self.step();
        }
    }

    /// Sum of every body's linear momentum
    pub fn total_momentum(&self) -> Vec2 {
        self.bodies.values().map(Body::momentum).sum()
    }

    /// Sum of every body's kinetic energy
    pub fn kinetic_energy(&self) -> f64 {
        self.bodies.values().map(Body::kinetic_energy).sum()
    }
}

impl Default for GravityWorld {
    fn default() -> Self {
        Self::new()
    }
}
