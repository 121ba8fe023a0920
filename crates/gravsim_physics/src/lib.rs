//! 2D gravitational physics for gravsim
//!
//! This crate provides the physics core of the simulator:
//! - Point/sphere bodies with a density-derived softening radius
//! - The pairwise inverse-square force law
//! - A fixed-step world that advances every body in lockstep

pub mod body;
pub mod error;
pub mod world;

// Re-export commonly used types
pub use body::{Body, BodyKey, MIN_DISTANCE};
pub use error::BodyError;
pub use world::{GravityWorld, SimulationConfig, DEFAULT_DT, DEFAULT_GRAVITATIONAL_CONSTANT};
