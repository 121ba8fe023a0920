//! System serialization
//!
//! Provides SystemTemplate for loading/saving body systems from RON files,
//! and ActiveSystem, the live world built from a template.

use serde::{Serialize, Deserialize};
use slotmap::SecondaryMap;
use std::path::Path;
use std::fs;
use std::io;

use crate::renderable::{BodyAppearance, BodyInstance};
use crate::system_validator::{SystemValidator, ValidationError};
use gravsim_math::Vec2;
use gravsim_physics::{
    Body, BodyError, BodyKey, GravityWorld, SimulationConfig, DEFAULT_DT, DEFAULT_GRAVITATIONAL_CONSTANT,
};

/// Serializable description of one body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyTemplate {
    /// Display name
    pub name: String,
    /// Mass (must be > 0)
    pub mass: f64,
    /// Density (must be > 0), used to derive the radius
    pub density: f64,
    /// Initial position
    #[serde(default)]
    pub pos: Vec2,
    /// Initial velocity
    #[serde(default)]
    pub vel: Vec2,
    /// Initial acceleration
    #[serde(default)]
    pub acc: Vec2,
    /// Draw colour [r, g, b, a]
    #[serde(default)]
    pub colour: Option<[f32; 4]>,
}

impl BodyTemplate {
    /// Create a body template at rest at the origin
    pub fn new(name: impl Into<String>, mass: f64, density: f64) -> Self {
        Self {
            name: name.into(),
            mass,
            density,
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            acc: Vec2::ZERO,
            colour: None,
        }
    }

    pub fn with_position(mut self, x: f64, y: f64) -> Self {
        self.pos = Vec2::new(x, y);
        self
    }

    pub fn with_velocity(mut self, x: f64, y: f64) -> Self {
        self.vel = Vec2::new(x, y);
        self
    }

    pub fn with_acceleration(mut self, x: f64, y: f64) -> Self {
        self.acc = Vec2::new(x, y);
        self
    }

    pub fn with_colour(mut self, colour: [f32; 4]) -> Self {
        self.colour = Some(colour);
        self
    }

    /// Build the physics body described by this template
    pub fn to_body(&self) -> Result<Body, BodyError> {
        Body::new(self.name.clone(), self.mass, self.density, self.pos, self.vel, self.acc)
    }

    /// Drawing attributes for this body
    pub fn appearance(&self) -> BodyAppearance {
        self.colour.map(BodyAppearance::new).unwrap_or_default()
    }
}

/// A serializable body system
///
/// Systems are loaded from RON files and contain everything needed to start
/// a simulation: the bodies and the global G / dt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemTemplate {
    /// System name (for display/debugging)
    pub name: String,
    /// Gravitational constant
    #[serde(default)]
    pub gravitational_constant: Option<f64>,
    /// Fixed time step
    #[serde(default)]
    pub dt: Option<f64>,
    /// Body templates in this system
    pub bodies: Vec<BodyTemplate>,
}

impl SystemTemplate {
    /// Create a new empty system
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            gravitational_constant: None,
            dt: None,
            bodies: Vec::new(),
        }
    }

    /// Load a system from a RON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SystemLoadError> {
        let contents = fs::read_to_string(path)?;
        Self::from_ron(&contents)
    }

    /// Parse a system from a RON string
    pub fn from_ron(contents: &str) -> Result<Self, SystemLoadError> {
        let system = ron::from_str(contents)?;
        Ok(system)
    }

    /// Save a system to a RON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), SystemSaveError> {
        let pretty = ron::ser::PrettyConfig::new()
            .struct_names(true)
            .enumerate_arrays(false);
        let contents = ron::ser::to_string_pretty(self, pretty)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Add a body template to this system
    pub fn add_body(&mut self, body: BodyTemplate) {
        self.bodies.push(body);
    }

    /// Set the gravitational constant for this system
    pub fn with_gravitational_constant(mut self, g: f64) -> Self {
        self.gravitational_constant = Some(g);
        self
    }

    /// Set the time step for this system
    pub fn with_dt(mut self, dt: f64) -> Self {
        self.dt = Some(dt);
        self
    }

    /// Simulation config from this template, falling back to the defaults
    pub fn simulation_config(&self) -> SimulationConfig {
        SimulationConfig::new(
            self.gravitational_constant.unwrap_or(DEFAULT_GRAVITATIONAL_CONSTANT),
            self.dt.unwrap_or(DEFAULT_DT),
        )
    }
}

/// Error loading a system
#[derive(Debug)]
pub enum SystemLoadError {
    /// IO error (file not found, permission denied, etc.)
    Io(io::Error),
    /// Parse error (invalid RON syntax)
    Parse(ron::error::SpannedError),
}

impl From<io::Error> for SystemLoadError {
    fn from(e: io::Error) -> Self {
        SystemLoadError::Io(e)
    }
}

impl From<ron::error::SpannedError> for SystemLoadError {
    fn from(e: ron::error::SpannedError) -> Self {
        SystemLoadError::Parse(e)
    }
}

impl std::fmt::Display for SystemLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SystemLoadError::Io(e) => write!(f, "IO error: {}", e),
            SystemLoadError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for SystemLoadError {}

/// Error saving a system
#[derive(Debug)]
pub enum SystemSaveError {
    /// IO error (permission denied, disk full, etc.)
    Io(io::Error),
    /// Serialization error
    Serialize(ron::Error),
}

impl From<io::Error> for SystemSaveError {
    fn from(e: io::Error) -> Self {
        SystemSaveError::Io(e)
    }
}

impl From<ron::Error> for SystemSaveError {
    fn from(e: ron::Error) -> Self {
        SystemSaveError::Serialize(e)
    }
}

impl std::fmt::Display for SystemSaveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SystemSaveError::Io(e) => write!(f, "IO error: {}", e),
            SystemSaveError::Serialize(e) => write!(f, "Serialize error: {}", e),
        }
    }
}

impl std::error::Error for SystemSaveError {}

/// Unified error type for setting up a system
#[derive(Debug)]
pub enum SystemError {
    /// The system file could not be read or parsed
    Load(SystemLoadError),
    /// The template failed validation
    Validation(Vec<ValidationError>),
    /// A body or the simulation config was rejected by the physics
    Body(BodyError),
}

impl From<SystemLoadError> for SystemError {
    fn from(e: SystemLoadError) -> Self {
        SystemError::Load(e)
    }
}

impl From<Vec<ValidationError>> for SystemError {
    fn from(errors: Vec<ValidationError>) -> Self {
        SystemError::Validation(errors)
    }
}

impl From<BodyError> for SystemError {
    fn from(e: BodyError) -> Self {
        SystemError::Body(e)
    }
}

impl std::fmt::Display for SystemError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SystemError::Load(e) => write!(f, "Failed to load system: {}", e),
            SystemError::Validation(errors) => {
                write!(f, "Invalid system ({} errors)", errors.len())?;
                for error in errors {
                    write!(f, "; {}", error)?;
                }
                Ok(())
            }
            SystemError::Body(e) => write!(f, "Invalid body: {}", e),
        }
    }
}

impl std::error::Error for SystemError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SystemError::Load(e) => Some(e),
            SystemError::Validation(_) => None,
            SystemError::Body(e) => Some(e),
        }
    }
}

/// A running system containing an instantiated GravityWorld
///
/// Drawing attributes live in a map keyed by [`BodyKey`] next to the world,
/// so the physics bodies carry no rendering state.
pub struct ActiveSystem {
    /// System name (from template)
    pub name: String,
    /// The live world with all bodies
    pub world: GravityWorld,
    appearances: SecondaryMap<BodyKey, BodyAppearance>,
}

impl ActiveSystem {
    /// Create an active system from a template
    ///
    /// `config_override` replaces the template's G / dt when present. The
    /// template's bodies are validated together with whichever config is used.
    pub fn from_template(
        template: &SystemTemplate,
        config_override: Option<SimulationConfig>,
    ) -> Result<Self, SystemError> {
        let config = config_override.unwrap_or_else(|| template.simulation_config());
        SystemValidator::validate_or_error_with_config(template, config)?;

        let mut world = GravityWorld::with_config(config)?;
        let mut appearances = SecondaryMap::new();

        for body_template in &template.bodies {
            let key = world.add_body(body_template.to_body()?);
            appearances.insert(key, body_template.appearance());
        }

        log::info!(
            "Instantiated system '{}' with {} bodies (G = {}, dt = {})",
            template.name,
            world.body_count(),
            config.gravitational_constant,
            config.dt
        );

        Ok(Self {
            name: template.name.clone(),
            world,
            appearances,
        })
    }

    /// Load, validate and instantiate a system file
    pub fn load<P: AsRef<Path>>(path: P, config_override: Option<SimulationConfig>) -> Result<Self, SystemError> {
        let template = SystemTemplate::load(path)?;
        Self::from_template(&template, config_override)
    }

    /// Advance the system by one tick
    pub fn update(&mut self) {
        self.world.step();
    }

    /// Drawing attributes for a body
    pub fn appearance(&self, key: BodyKey) -> Option<&BodyAppearance> {
        self.appearances.get(key)
    }

    /// Render instances for every body, in world order
    pub fn instances(&self) -> Vec<BodyInstance> {
        self.world
            .bodies()
            .map(|(key, body)| {
                let appearance = self.appearances.get(key).copied().unwrap_or_default();
                BodyInstance::new(body, &appearance)
            })
            .collect()
    }
}
