use klock_app_shell::App;
use klock_foundation::InputState;
use klock_graphics::{Color, Size};
use klock_render_common::{Canvas, Paint};

use crate::{
    ClockFace, Hand, HandFractions, SystemTimeSource, TimeSource, MAJOR_TICKS, MINOR_TICKS,
};

pub const TEXT_SIZE: f32 = 40.0;

const BACKGROUND: Color = Color::WHITE;
const FACE_FILL: Paint = Paint::fill(Color::from_argb(0xFFFFFFFF));
const FACE_FILL_HOVER: Paint = Paint::fill(Color::from_argb(0xFFE4FF01));
const FACE_STROKE: Paint = Paint::stroke(Color::from_argb(0xFF000000), 1.0);
const SECOND_HAND: Paint = Paint::stroke(Color::from_argb(0xFFFF0000), 1.0);
const MINUTE_HOUR_HANDS: Paint = Paint::stroke(Color::from_argb(0xFF0000FF), 3.0);
const TEXT: Paint = Paint::fill(Color::from_argb(0xFF9BC730));

/// Stateless per-frame clock renderer.
pub struct ClockApp<T = SystemTimeSource> {
    time: T,
}

impl ClockApp<SystemTimeSource> {
    pub fn new() -> Self {
        Self::with_time_source(SystemTimeSource)
    }
}

impl Default for ClockApp<SystemTimeSource> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TimeSource> ClockApp<T> {
    pub fn with_time_source(time: T) -> Self {
        Self { time }
    }

    /// Face fill for the given pointer position.
    pub fn face_paint(face: &ClockFace, input: &InputState) -> Paint {
        if face.is_hovered(input.pointer()) {
            FACE_FILL_HOVER
        } else {
            FACE_FILL
        }
    }

    fn draw_face(&self, canvas: &mut dyn Canvas, face: &ClockFace, input: &InputState) {
        let bounds = face.bounds();
        canvas.draw_oval(bounds, &Self::face_paint(face, input));
        canvas.draw_oval(bounds, &FACE_STROKE);
        for (from, to) in face.ticks(MINOR_TICKS, face.tick_length / 3.0) {
            canvas.draw_line(from, to, &FACE_STROKE);
        }
        for (from, to) in face.ticks(MAJOR_TICKS, face.tick_length) {
            canvas.draw_line(from, to, &FACE_STROKE);
        }
    }

    fn draw_hands(&self, canvas: &mut dyn Canvas, face: &ClockFace, fractions: HandFractions) {
        for (hand, paint) in [
            (Hand::Second, &SECOND_HAND),
            (Hand::Minute, &MINUTE_HOUR_HANDS),
            (Hand::Hour, &MINUTE_HOUR_HANDS),
        ] {
            let (from, to) = face.hand(hand, fractions.get(hand));
            canvas.draw_line(from, to, paint);
        }
    }
}

impl<T: TimeSource> App for ClockApp<T> {
    fn render(&mut self, canvas: &mut dyn Canvas, input: &mut InputState, size: Size) {
        let face = ClockFace::for_size(size);
        canvas.clear(BACKGROUND);
        self.draw_face(canvas, &face, input);

        let time = self.time.time_of_day();
        self.draw_hands(canvas, &face, HandFractions::from_millis(time.millis()));

        canvas.draw_text(&time.to_string(), input.pointer(), TEXT_SIZE, &TEXT);
    }
}
