//! Pure math/data for drawing in Klock
//!
//! This crate contains the geometry primitives and color definitions shared
//! by the input layer, the renderers and the demo applications.

mod color;
mod geometry;

pub use color::*;
pub use geometry::*;
