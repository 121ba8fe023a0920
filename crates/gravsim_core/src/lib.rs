//! Core types for gravsim
//!
//! This crate sits between the physics and whatever drives it:
//!
//! - [`SystemTemplate`] - Loadable/saveable description of a body system
//! - [`BodyTemplate`] - Serializable description of one body
//! - [`SystemValidator`] - Checks a template before anything is built
//! - [`ActiveSystem`] - A live [`GravityWorld`] instantiated from a template
//! - [`BodyAppearance`] / [`BodyInstance`] - Drawing data kept beside the physics
//! - [`Trajectory`] - Per-tick position history

mod system;
mod system_validator;
mod renderable;
mod trajectory;

pub use system::{ActiveSystem, BodyTemplate, SystemError, SystemLoadError, SystemSaveError, SystemTemplate};
pub use system_validator::{SystemValidator, ValidationError};
pub use renderable::{BodyAppearance, BodyInstance};
pub use trajectory::Trajectory;

// Re-export commonly used types from gravsim_math for convenience
pub use gravsim_math::Vec2;

// Re-export physics types for convenient access through gravsim_core
pub use gravsim_physics::{Body, BodyError, BodyKey, GravityWorld, SimulationConfig};
