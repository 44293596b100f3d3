use klock_graphics::{Color, Point, Rect};

use crate::{Canvas, Paint};

/// A drawing call captured by [`RecordingCanvas`].
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Clear(Color),
    Rect {
        rect: Rect,
        paint: Paint,
    },
    Oval {
        rect: Rect,
        paint: Paint,
    },
    Line {
        from: Point,
        to: Point,
        paint: Paint,
    },
    Text {
        text: String,
        origin: Point,
        font_size: f32,
        paint: Paint,
    },
}

/// The operations of one frame, in submission order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordedFrame {
    operations: Vec<DrawOp>,
}

impl RecordedFrame {
    pub fn new(operations: Vec<DrawOp>) -> Self {
        Self { operations }
    }

    pub fn operations(&self) -> &[DrawOp] {
        &self.operations
    }

    pub fn lines(&self) -> impl Iterator<Item = (Point, Point, &Paint)> {
        self.operations.iter().filter_map(|op| match op {
            DrawOp::Line { from, to, paint } => Some((*from, *to, paint)),
            _ => None,
        })
    }

    pub fn ovals(&self) -> impl Iterator<Item = (Rect, &Paint)> {
        self.operations.iter().filter_map(|op| match op {
            DrawOp::Oval { rect, paint } => Some((*rect, paint)),
            _ => None,
        })
    }

    pub fn rects(&self) -> impl Iterator<Item = (Rect, &Paint)> {
        self.operations.iter().filter_map(|op| match op {
            DrawOp::Rect { rect, paint } => Some((*rect, paint)),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = (&str, Point)> {
        self.operations.iter().filter_map(|op| match op {
            DrawOp::Text { text, origin, .. } => Some((text.as_str(), *origin)),
            _ => None,
        })
    }
}

/// Headless canvas that records calls instead of rasterizing them.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    operations: Vec<DrawOp>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn finish(self) -> RecordedFrame {
        RecordedFrame::new(self.operations)
    }
}

impl Canvas for RecordingCanvas {
    fn clear(&mut self, color: Color) {
        self.operations.push(DrawOp::Clear(color));
    }

    fn draw_rect(&mut self, rect: Rect, paint: &Paint) {
        self.operations.push(DrawOp::Rect {
            rect,
            paint: *paint,
        });
    }

    fn draw_oval(&mut self, rect: Rect, paint: &Paint) {
        self.operations.push(DrawOp::Oval {
            rect,
            paint: *paint,
        });
    }

    fn draw_line(&mut self, from: Point, to: Point, paint: &Paint) {
        self.operations.push(DrawOp::Line {
            from,
            to,
            paint: *paint,
        });
    }

    fn draw_text(&mut self, text: &str, origin: Point, font_size: f32, paint: &Paint) {
        self.operations.push(DrawOp::Text {
            text: text.to_string(),
            origin,
            font_size,
            paint: *paint,
        });
    }
}

#[cfg(test)]
#[path = "tests/recording_tests.rs"]
mod tests;
