//! Gravitating bodies

use crate::error::BodyError;
use gravsim_math::Vec2;
use slotmap::new_key_type;

// Define generational key type for bodies
new_key_type! {
    /// Key to a body in the gravity world
    pub struct BodyKey;
}

/// Separations below this are clamped before the inverse-square law is applied
pub const MIN_DISTANCE: f64 = 1.0;

/// A point/sphere mass
///
/// Mass, density and radius are fixed at construction so the mass a body
/// pulls with is always the mass it resists with. Position and velocity only
/// change through [`apply_force`](Body::apply_force) and
/// [`advance`](Body::advance).
#[derive(Clone, Debug, PartialEq)]
pub struct Body {
    name: String,
    mass: f64,
    density: f64,
    radius: f64,
    position: Vec2,
    velocity: Vec2,
    acceleration: Vec2,
}

impl Body {
    /// Create a body, deriving its radius as `cbrt(mass / density)`
    ///
    /// Fails if mass or density is not a finite positive number.
    pub fn new(
        name: impl Into<String>,
        mass: f64,
        density: f64,
        position: Vec2,
        velocity: Vec2,
        acceleration: Vec2,
    ) -> Result<Self, BodyError> {
        let name = name.into();
        if !(mass.is_finite() && mass > 0.0) {
            return Err(BodyError::NonPositiveMass { name, mass });
        }
        if !(density.is_finite() && density > 0.0) {
            return Err(BodyError::NonPositiveDensity { name, density });
        }

        Ok(Self {
            name,
            mass,
            density,
            radius: (mass / density).cbrt(),
            position,
            velocity,
            acceleration,
        })
    }

    /// Create a body at rest at the given position
    pub fn at_rest(name: impl Into<String>, mass: f64, density: f64, position: Vec2) -> Result<Self, BodyError> {
        Self::new(name, mass, density, position, Vec2::ZERO, Vec2::ZERO)
    }

    /// Set the velocity of this body
    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    /// Display name (not used by the physics)
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn density(&self) -> f64 {
        self.density
    }

    /// Softening radius derived from mass and density
    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Acceleration from the most recent [`apply_force`](Body::apply_force)
    pub fn acceleration(&self) -> Vec2 {
        self.acceleration
    }

    /// Gravitational force exerted on `self` by `other`
    ///
    /// Returns zero when `other` is `self`, and when the separation (clamped
    /// to at least [`MIN_DISTANCE`]) is within this body's radius.
    pub fn calculate_force(&self, other: &Body, gravitational_constant: f64) -> Vec2 {
        if std::ptr::eq(self, other) {
            return Vec2::ZERO;
        }

        let displacement = other.position - self.position;
        let distance = displacement.length().max(MIN_DISTANCE);

        // Overlapping bodies stop attracting each other
        if distance <= self.radius {
            return Vec2::ZERO;
        }

        let magnitude = gravitational_constant * self.mass * other.mass / (distance * distance);
        displacement.normalized() * magnitude
    }

    /// Set acceleration from the net force on this body
    pub fn apply_force(&mut self, net_force: Vec2) {
        self.acceleration = net_force / self.mass;
    }

    /// Integrate one step with semi-implicit Euler
    ///
    /// Velocity is updated first and the new velocity moves the position.
    pub fn advance(&mut self, dt: f64) {
        self.velocity += self.acceleration * dt;
        self.position += self.velocity * dt;
    }

    /// Linear momentum (mass * velocity)
    pub fn momentum(&self) -> Vec2 {
        self.velocity * self.mass
    }

    /// Kinetic energy (0.5 * mass * |velocity|²)
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.length_squared()
    }
}
