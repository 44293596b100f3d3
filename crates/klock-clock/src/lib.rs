//! Analog clock demo.
//!
//! Nothing is cached between frames: the face geometry comes from the
//! current drawable size and the hands from the current local time.

mod app;
mod face;
mod time;

pub use app::*;
pub use face::*;
pub use time::*;
