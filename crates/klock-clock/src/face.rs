use std::f64::consts::{PI, TAU};

use klock_graphics::{distance_sq, Point, Rect, Size};

/// Gap between the face and the edge of the drawable.
pub const MARGIN: f32 = 5.0;
pub const TICK_LENGTH: f32 = 15.0;
pub const MINOR_TICKS: usize = 60;
pub const MAJOR_TICKS: usize = 12;

/// Face geometry for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClockFace {
    pub center: Point,
    pub radius: f32,
    pub tick_length: f32,
}

impl ClockFace {
    /// The radius never goes negative: drawables narrower than twice the
    /// margin get a zero-radius face instead of an inverted one.
    pub fn for_size(size: Size) -> Self {
        Self {
            center: size.center(),
            radius: (size.min_dimension() / 2.0 - MARGIN).max(0.0),
            tick_length: TICK_LENGTH,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_circle(self.center, self.radius)
    }

    /// Inclusive of the rim.
    pub fn is_hovered(&self, pointer: Point) -> bool {
        distance_sq(self.center, pointer) <= self.radius * self.radius
    }

    /// `count` radial segments from `radius - length` to `radius`, starting at
    /// angle 0 (3 o'clock) and going counterclockwise.
    pub fn ticks(&self, count: usize, length: f32) -> impl Iterator<Item = (Point, Point)> + '_ {
        (0..count).map(move |i| {
            let angle = (i as f64 * TAU / count as f64) as f32;
            (
                self.center.polar_offset(angle, self.radius - length),
                self.center.polar_offset(angle, self.radius),
            )
        })
    }

    pub fn hand_length(&self, hand: Hand) -> f32 {
        let full = self.radius - self.tick_length;
        match hand {
            Hand::Second | Hand::Minute => full,
            Hand::Hour => full / 2.0,
        }
    }

    /// Segment from the center for a hand that has completed `fraction` turns.
    pub fn hand(&self, hand: Hand, fraction: f64) -> (Point, Point) {
        let tip = self
            .center
            .polar_offset(hand_angle(fraction), self.hand_length(hand));
        (self.center, tip)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hand {
    Second,
    Minute,
    Hour,
}

/// Screen angle for a fraction of a full turn: 12 o'clock up, clockwise.
pub fn hand_angle(fraction: f64) -> f32 {
    ((0.5 - 2.0 * fraction) * PI).rem_euclid(TAU) as f32
}

/// Turn fractions of the three hands.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandFractions {
    pub second: f64,
    pub minute: f64,
    pub hour: f64,
}

impl HandFractions {
    pub fn from_millis(ms_since_midnight: u64) -> Self {
        let minutes = ms_since_midnight as f64 / 60_000.0;
        Self {
            second: minutes.fract(),
            minute: minutes / 60.0,
            hour: minutes / 60.0 / 12.0,
        }
    }

    pub fn get(&self, hand: Hand) -> f64 {
        match hand {
            Hand::Second => self.second,
            Hand::Minute => self.minute,
            Hand::Hour => self.hour,
        }
    }
}

#[cfg(test)]
#[path = "tests/face_tests.rs"]
mod tests;
