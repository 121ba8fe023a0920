//! Application systems
//!
//! Systems extracted from the main loop to keep `main.rs` thin.

mod simulation;

pub use simulation::{FrameResult, SimulationSystem};
