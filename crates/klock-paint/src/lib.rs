//! Toy paint canvas: a fixed grid of colored cells and a color-select menu.

mod app;
mod grid;
mod menu;

pub use app::*;
pub use grid::*;
pub use menu::*;
