use klock_graphics::Color;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaintStyle {
    Fill,
    Stroke,
}

/// Color and stroke style of a drawing call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Paint {
    pub color: Color,
    pub style: PaintStyle,
    pub stroke_width: f32,
}

impl Paint {
    pub const fn fill(color: Color) -> Self {
        Self {
            color,
            style: PaintStyle::Fill,
            stroke_width: 1.0,
        }
    }

    pub const fn stroke(color: Color, stroke_width: f32) -> Self {
        Self {
            color,
            style: PaintStyle::Stroke,
            stroke_width,
        }
    }
}

impl Default for Paint {
    fn default() -> Self {
        Self::fill(Color::BLACK)
    }
}
