//! Physics configuration errors

/// Error constructing a body or a simulation config
#[derive(Debug, Clone, PartialEq)]
pub enum BodyError {
    /// Mass was zero, negative, or not finite
    NonPositiveMass { name: String, mass: f64 },
    /// Density was zero, negative, or not finite
    NonPositiveDensity { name: String, density: f64 },
    /// Gravitational constant was not finite
    InvalidGravitationalConstant(f64),
    /// Time step was zero, negative, or not finite
    InvalidTimeStep(f64),
}

impl std::fmt::Display for BodyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BodyError::NonPositiveMass { name, mass } => {
                write!(f, "Body '{}' has invalid mass {} (must be > 0)", name, mass)
            }
            BodyError::NonPositiveDensity { name, density } => {
                write!(f, "Body '{}' has invalid density {} (must be > 0)", name, density)
            }
            BodyError::InvalidGravitationalConstant(g) => {
                write!(f, "Invalid gravitational constant: {}", g)
            }
            BodyError::InvalidTimeStep(dt) => {
                write!(f, "Invalid time step: {} (must be > 0)", dt)
            }
        }
    }
}

impl std::error::Error for BodyError {}
