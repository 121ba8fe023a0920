//! Render adapter - bridges the physics world to an external renderer
//!
//! Drawing attributes are kept beside the physics bodies rather than on them.
//! [`BodyInstance`] is a plain `Pod` record ready for upload to a GPU buffer.

use bytemuck::{Pod, Zeroable};
use serde::{Serialize, Deserialize};

use gravsim_physics::Body;

/// Drawing-only attributes of a body
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BodyAppearance {
    /// Fill colour [r, g, b, a] in 0..1
    pub colour: [f32; 4],
}

impl BodyAppearance {
    pub const WHITE: Self = Self { colour: [1.0, 1.0, 1.0, 1.0] };

    pub fn new(colour: [f32; 4]) -> Self {
        Self { colour }
    }
}

impl Default for BodyAppearance {
    fn default() -> Self {
        Self::WHITE
    }
}

/// One body as a renderer sees it: a filled circle
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct BodyInstance {
    /// Centre in world units
    pub position: [f32; 2],
    /// Physical radius in world units
    pub radius: f32,
    /// Fill colour
    pub colour: [f32; 4],
}

impl BodyInstance {
    pub fn new(body: &Body, appearance: &BodyAppearance) -> Self {
        Self {
            position: body.position().to_f32_array(),
            radius: body.radius() as f32,
            colour: appearance.colour,
        }
    }
}
