//! gravsim - 2D gravitational n-body simulator
//!
//! Library half of the application: configuration and the frame driver.
//! The physics lives in `gravsim_physics`, system files in `gravsim_core`.

pub mod config;
pub mod systems;
