//! 2D Mathematics Library
//!
//! This crate provides the vector type shared by the gravsim crates.
//!
//! ## Core Types
//!
//! - [`Vec2`] - 2D vector with x, y components (f64)

mod vec2;

pub use vec2::Vec2;
