//! System validation
//!
//! Validates system templates before a simulation is started. The
//! [`SystemValidator`] checks for empty systems, duplicate body names,
//! non-positive masses or densities, non-finite initial state and an invalid
//! G / dt. Any error keeps the simulation from starting.
//!
//! G and dt are checked against the config the world will actually run with,
//! which may come from an override rather than the template.

use std::collections::HashSet;

use crate::system::SystemTemplate;
use gravsim_physics::{BodyError, SimulationConfig};

/// Validation error found in a system
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// System has no bodies
    EmptySystem,
    /// Duplicate body name found
    DuplicateName(String),
    /// Body mass or density rejected by the physics
    InvalidBody(BodyError),
    /// Initial position, velocity or acceleration is NaN or infinite
    NonFiniteState(String),
    /// Gravitational constant or time step rejected by the physics
    InvalidConfig(BodyError),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::EmptySystem => write!(f, "System has no bodies"),
            ValidationError::DuplicateName(name) => {
                write!(f, "Duplicate body name: '{}'", name)
            }
            ValidationError::InvalidBody(e) => write!(f, "{}", e),
            ValidationError::NonFiniteState(name) => {
                write!(f, "Body '{}' has a non-finite initial state", name)
            }
            ValidationError::InvalidConfig(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ValidationError {}

/// System validator that checks for configuration errors
///
/// # Example
/// ```
/// use gravsim_core::{BodyTemplate, SystemTemplate, SystemValidator, ValidationError};
///
/// let mut template = SystemTemplate::new("Pair");
/// template.add_body(BodyTemplate::new("a", 10.0, 1.0));
/// template.add_body(BodyTemplate::new("a", 10.0, 1.0).with_position(10.0, 0.0));
///
/// let errors = SystemValidator::validate(&template);
/// assert_eq!(errors, vec![ValidationError::DuplicateName("a".to_string())]);
/// ```
pub struct SystemValidator;

impl SystemValidator {
    /// Validate a system, returning all errors found
    ///
    /// Returns an empty vector if no validation errors are detected.
    pub fn validate(system: &SystemTemplate) -> Vec<ValidationError> {
        Self::validate_with_config(system, system.simulation_config())
    }

    /// Validate a system's bodies together with the config it will run under
    pub fn validate_with_config(system: &SystemTemplate, config: SimulationConfig) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if system.bodies.is_empty() {
            errors.push(ValidationError::EmptySystem);
        }

        if let Err(e) = config.validate() {
            errors.push(ValidationError::InvalidConfig(e));
        }

        let mut seen_names = HashSet::new();
        for body in &system.bodies {
            if !seen_names.insert(body.name.as_str()) {
                errors.push(ValidationError::DuplicateName(body.name.clone()));
            }

            if !(body.mass.is_finite() && body.mass > 0.0) {
                errors.push(ValidationError::InvalidBody(BodyError::NonPositiveMass {
                    name: body.name.clone(),
                    mass: body.mass,
                }));
            }

            if !(body.density.is_finite() && body.density > 0.0) {
                errors.push(ValidationError::InvalidBody(BodyError::NonPositiveDensity {
                    name: body.name.clone(),
                    density: body.density,
                }));
            }

            if !(body.pos.is_finite() && body.vel.is_finite() && body.acc.is_finite()) {
                errors.push(ValidationError::NonFiniteState(body.name.clone()));
            }
        }

        errors
    }

    /// Validate and return Result (Ok if no errors, Err with all errors)
    pub fn validate_or_error(system: &SystemTemplate) -> Result<(), Vec<ValidationError>> {
        Self::validate_or_error_with_config(system, system.simulation_config())
    }

    /// [`validate_or_error`](Self::validate_or_error) against an explicit config
    pub fn validate_or_error_with_config(
        system: &SystemTemplate,
        config: SimulationConfig,
    ) -> Result<(), Vec<ValidationError>> {
        let errors = Self::validate_with_config(system, config);
        if errors.is_empty() {
            Ok(())
        } else {
            for error in &errors {
                log::warn!("System '{}': {}", system.name, error);
            }
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::BodyTemplate;

    fn make_valid_system() -> SystemTemplate {
        let mut system = SystemTemplate::new("Valid").with_gravitational_constant(5.0).with_dt(1.0);
        system.add_body(BodyTemplate::new("Sun", 1000.0, 1.0));
        system.add_body(BodyTemplate::new("Earth", 1.0, 1.0).with_position(100.0, 0.0));
        system
    }

    #[test]
    fn test_valid_system_returns_no_errors() {
        let errors = SystemValidator::validate(&make_valid_system());
        assert!(errors.is_empty(), "Expected no errors, got: {:?}", errors);
        assert!(SystemValidator::validate_or_error(&make_valid_system()).is_ok());
    }

    #[test]
    fn test_empty_system_error() {
        let errors = SystemValidator::validate(&SystemTemplate::new("Empty"));
        assert_eq!(errors, vec![ValidationError::EmptySystem]);
    }

    #[test]
    fn test_duplicate_names_detected() {
        let mut system = make_valid_system();
        system.add_body(BodyTemplate::new("Earth", 2.0, 1.0));

        let errors = SystemValidator::validate(&system);
        assert_eq!(errors, vec![ValidationError::DuplicateName("Earth".to_string())]);
    }

    #[test]
    fn test_non_positive_mass_detected() {
        let mut system = make_valid_system();
        system.add_body(BodyTemplate::new("Void", -1.0, 1.0));

        let errors = SystemValidator::validate(&system);
        assert_eq!(
            errors,
            vec![ValidationError::InvalidBody(BodyError::NonPositiveMass {
                name: "Void".to_string(),
                mass: -1.0,
            })]
        );
    }

    #[test]
    fn test_non_positive_density_detected() {
        let mut system = make_valid_system();
        system.add_body(BodyTemplate::new("Gas", 1.0, 0.0));

        let errors = SystemValidator::validate(&system);
        assert_eq!(errors.len(), 1);
        assert!(matches!(
            errors[0],
            ValidationError::InvalidBody(BodyError::NonPositiveDensity { .. })
        ));
    }

    #[test]
    fn test_non_finite_state_detected() {
        let mut system = make_valid_system();
        system.add_body(BodyTemplate::new("Lost", 1.0, 1.0).with_velocity(f64::NAN, 0.0));

        let errors = SystemValidator::validate(&system);
        assert_eq!(errors, vec![ValidationError::NonFiniteState("Lost".to_string())]);
    }

    #[test]
    fn test_invalid_time_step_detected() {
        let system = make_valid_system().with_dt(0.0);
        let errors = SystemValidator::validate(&system);
        assert_eq!(errors, vec![ValidationError::InvalidConfig(BodyError::InvalidTimeStep(0.0))]);
    }

    #[test]
    fn test_explicit_config_replaces_template_config() {
        let system = make_valid_system().with_dt(0.0);

        let errors = SystemValidator::validate_with_config(&system, SimulationConfig::new(5.0, 0.5));
        assert!(errors.is_empty(), "Expected no errors, got: {:?}", errors);

        let config = SimulationConfig::new(f64::INFINITY, 1.0);
        let errors = SystemValidator::validate_with_config(&make_valid_system(), config);
        assert_eq!(
            errors,
            vec![ValidationError::InvalidConfig(BodyError::InvalidGravitationalConstant(f64::INFINITY))]
        );
    }

    #[test]
    fn test_multiple_errors_collected() {
        let mut system = SystemTemplate::new("Broken").with_gravitational_constant(f64::INFINITY);
        system.add_body(BodyTemplate::new("x", 0.0, 0.0));
        system.add_body(BodyTemplate::new("x", 1.0, 1.0));

        let errors = SystemValidator::validate(&system);
        // bad G, mass, density, duplicate name
        assert_eq!(errors.len(), 4, "got: {:?}", errors);
        assert!(SystemValidator::validate_or_error(&system).is_err());
    }
}
