//! Common rendering contracts shared between the demos and renderer backends.

mod paint;
mod recording;

pub use klock_graphics::{Color, Point, Rect, Size};
pub use paint::*;
pub use recording::*;

/// Drawing primitives a render callback may issue. All coordinates are in
/// device-independent pixels; backends apply the content scale.
pub trait Canvas {
    /// Fills the whole drawable with `color`.
    fn clear(&mut self, color: Color);

    fn draw_rect(&mut self, rect: Rect, paint: &Paint);

    /// Draws the ellipse inscribed in `rect`.
    fn draw_oval(&mut self, rect: Rect, paint: &Paint);

    fn draw_line(&mut self, from: Point, to: Point, paint: &Paint);

    /// Draws `text` with its baseline starting at `origin`.
    fn draw_text(&mut self, text: &str, origin: Point, font_size: f32, paint: &Paint);
}
