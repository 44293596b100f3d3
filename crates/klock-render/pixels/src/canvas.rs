use klock_graphics::{Color, Point, Rect};
use klock_render_common::{Canvas, Paint, PaintStyle};
use rusttype::{point, Scale};

use crate::FontAsset;

/// Rasterizes drawing calls into an RGBA8 frame of `width * height` pixels.
///
/// Geometry arrives in device-independent pixels and is multiplied by
/// `scale` before rasterization.
pub struct PixelsCanvas<'a> {
    frame: &'a mut [u8],
    width: u32,
    height: u32,
    scale: f32,
    font: &'a FontAsset,
}

impl<'a> PixelsCanvas<'a> {
    pub fn new(
        frame: &'a mut [u8],
        width: u32,
        height: u32,
        scale: f32,
        font: &'a FontAsset,
    ) -> Self {
        debug_assert_eq!(frame.len(), (width * height * 4) as usize);
        Self {
            frame,
            width,
            height,
            scale,
            font,
        }
    }

    fn blend_pixel(&mut self, px: i32, py: i32, color: [f32; 4], coverage: f32) {
        if px < 0 || py < 0 || px as u32 >= self.width || py as u32 >= self.height {
            return;
        }
        let alpha = color[3] * coverage.clamp(0.0, 1.0);
        if alpha <= 0.0 {
            return;
        }
        let idx = ((py as u32 * self.width + px as u32) * 4) as usize;
        let existing = &mut self.frame[idx..idx + 4];
        for i in 0..3 {
            let dst = existing[i] as f32 / 255.0;
            let blended = color[i] * alpha + dst * (1.0 - alpha);
            existing[i] = (blended.clamp(0.0, 1.0) * 255.0).round() as u8;
        }
        let dst_alpha = existing[3] as f32 / 255.0;
        let out_alpha = alpha + dst_alpha * (1.0 - alpha);
        existing[3] = (out_alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
    }

    /// Fills the physical pixel span `[x0, x1) x [y0, y1)`.
    fn fill_span(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, color: Color) {
        let start_x = x0.round().max(0.0) as u32;
        let start_y = y0.round().max(0.0) as u32;
        let end_x = (x1.round().max(0.0) as u32).min(self.width);
        let end_y = (y1.round().max(0.0) as u32).min(self.height);
        if start_x >= end_x || start_y >= end_y {
            return;
        }
        let rgba = color.to_rgba();
        if rgba[3] >= 1.0 {
            let bytes = color.to_rgba8();
            for py in start_y..end_y {
                let row = ((py * self.width + start_x) * 4) as usize;
                let row_end = ((py * self.width + end_x) * 4) as usize;
                for chunk in self.frame[row..row_end].chunks_exact_mut(4) {
                    chunk.copy_from_slice(&bytes);
                }
            }
        } else {
            for py in start_y..end_y {
                for px in start_x..end_x {
                    self.blend_pixel(px as i32, py as i32, rgba, 1.0);
                }
            }
        }
    }

    fn half_stroke(&self, paint: &Paint) -> f32 {
        (paint.stroke_width * self.scale / 2.0).max(0.5)
    }
}

impl<'a> Canvas for PixelsCanvas<'a> {
    fn clear(&mut self, color: Color) {
        let bytes = color.to_rgba8();
        for chunk in self.frame.chunks_exact_mut(4) {
            chunk.copy_from_slice(&bytes);
        }
    }

    fn draw_rect(&mut self, rect: Rect, paint: &Paint) {
        let r = rect.scale(self.scale);
        match paint.style {
            PaintStyle::Fill => self.fill_span(r.x, r.y, r.right(), r.bottom(), paint.color),
            PaintStyle::Stroke => {
                let hw = self.half_stroke(paint);
                let (left, top, right, bottom) = (r.x, r.y, r.right(), r.bottom());
                self.fill_span(left - hw, top - hw, right + hw, top + hw, paint.color);
                self.fill_span(left - hw, bottom - hw, right + hw, bottom + hw, paint.color);
                self.fill_span(left - hw, top + hw, left + hw, bottom - hw, paint.color);
                self.fill_span(right - hw, top + hw, right + hw, bottom - hw, paint.color);
            }
        }
    }

    fn draw_oval(&mut self, rect: Rect, paint: &Paint) {
        let r = rect.scale(self.scale);
        let rx = r.width / 2.0;
        let ry = r.height / 2.0;
        if rx <= 0.0 || ry <= 0.0 {
            return;
        }
        let center = r.center();
        let min_radius = rx.min(ry);
        let color = paint.color.to_rgba();
        let pad = match paint.style {
            PaintStyle::Fill => 1.0,
            PaintStyle::Stroke => self.half_stroke(paint) + 1.0,
        };
        let hw = self.half_stroke(paint);
        let start_x = (r.x - pad).floor().max(0.0) as i32;
        let start_y = (r.y - pad).floor().max(0.0) as i32;
        let end_x = ((r.right() + pad).ceil() as i32).min(self.width as i32);
        let end_y = ((r.bottom() + pad).ceil() as i32).min(self.height as i32);
        for py in start_y..end_y {
            for px in start_x..end_x {
                let dx = (px as f32 + 0.5 - center.x) / rx;
                let dy = (py as f32 + 0.5 - center.y) / ry;
                let d = (dx * dx + dy * dy).sqrt();
                // Distance to the outline, exact for circles.
                let edge = (d - 1.0) * min_radius;
                let coverage = match paint.style {
                    PaintStyle::Fill => 0.5 - edge,
                    PaintStyle::Stroke => hw + 0.5 - edge.abs(),
                };
                if coverage > 0.0 {
                    self.blend_pixel(px, py, color, coverage);
                }
            }
        }
    }

    fn draw_line(&mut self, from: Point, to: Point, paint: &Paint) {
        let a = from.scale(self.scale);
        let b = to.scale(self.scale);
        let hw = self.half_stroke(paint);
        let color = paint.color.to_rgba();
        let start_x = (a.x.min(b.x) - hw - 1.0).floor().max(0.0) as i32;
        let start_y = (a.y.min(b.y) - hw - 1.0).floor().max(0.0) as i32;
        let end_x = ((a.x.max(b.x) + hw + 1.0).ceil() as i32).min(self.width as i32);
        let end_y = ((a.y.max(b.y) + hw + 1.0).ceil() as i32).min(self.height as i32);
        for py in start_y..end_y {
            for px in start_x..end_x {
                let p = Point::new(px as f32 + 0.5, py as f32 + 0.5);
                let coverage = hw + 0.5 - distance_to_segment(p, a, b);
                if coverage > 0.0 {
                    self.blend_pixel(px, py, color, coverage);
                }
            }
        }
    }

    fn draw_text(&mut self, text: &str, origin: Point, font_size: f32, paint: &Paint) {
        let font: &'a FontAsset = self.font;
        let font = font.font();
        let color = paint.color.to_rgba();
        let scale = Scale::uniform(font_size * self.scale);
        let offset = point(origin.x * self.scale, origin.y * self.scale);
        for glyph in font.layout(text, scale, offset) {
            if let Some(bb) = glyph.pixel_bounding_box() {
                glyph.draw(|gx, gy, value| {
                    let px = bb.min.x + gx as i32;
                    let py = bb.min.y + gy as i32;
                    self.blend_pixel(px, py, color, value);
                });
            }
        }
    }
}

fn distance_to_segment(p: Point, a: Point, b: Point) -> f32 {
    let ab = b - a;
    let ap = p - a;
    let len_sq = ab.x * ab.x + ab.y * ab.y;
    let t = if len_sq <= f32::EPSILON {
        0.0
    } else {
        ((ap.x * ab.x + ap.y * ab.y) / len_sq).clamp(0.0, 1.0)
    };
    let closest = Point::new(a.x + ab.x * t, a.y + ab.y * t);
    klock_graphics::distance_sq(p, closest).sqrt()
}

#[cfg(test)]
#[path = "tests/canvas_tests.rs"]
mod tests;
