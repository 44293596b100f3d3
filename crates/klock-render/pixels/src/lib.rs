//! Software rasterizer that implements [`Canvas`](klock_render_common::Canvas)
//! on top of an RGBA8 frame, such as the one handed out by `pixels`.

mod canvas;
mod font;

pub use canvas::PixelsCanvas;
pub use font::{FontAsset, FontError};
