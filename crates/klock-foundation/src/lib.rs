//! Input state and input events for Klock.

mod input;

pub use input::*;
