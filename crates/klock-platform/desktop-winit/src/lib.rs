//! Translates winit window events into Klock [`InputEvent`]s.
//!
//! winit has no notion of a click, so one is synthesized: a left-button
//! release that follows a press without any drag in between.

use klock_foundation::{InputEvent, KeyCode};
use klock_graphics::Point;
use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, KeyboardInput, MouseButton, VirtualKeyCode};

pub struct DesktopWinitPlatform {
    scale_factor: f64,
    cursor: Point,
    pressed: bool,
    dragged: bool,
}

impl DesktopWinitPlatform {
    pub fn new(scale_factor: f64) -> Self {
        Self {
            scale_factor,
            cursor: Point::ZERO,
            pressed: false,
            dragged: false,
        }
    }

    pub fn set_scale_factor(&mut self, factor: f64) {
        self.scale_factor = factor;
    }

    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    pub fn pointer_position(&self, position: PhysicalPosition<f64>) -> Point {
        Point {
            x: (position.x / self.scale_factor) as f32,
            y: (position.y / self.scale_factor) as f32,
        }
    }

    pub fn cursor_moved(&mut self, position: PhysicalPosition<f64>) -> InputEvent {
        self.cursor = self.pointer_position(position);
        if self.pressed {
            self.dragged = true;
            InputEvent::PointerDragged(self.cursor)
        } else {
            InputEvent::PointerMoved(self.cursor)
        }
    }

    /// Only the primary (left) button is tracked.
    pub fn mouse_input(&mut self, state: ElementState, button: MouseButton) -> Vec<InputEvent> {
        if button != MouseButton::Left {
            return Vec::new();
        }
        match state {
            ElementState::Pressed => {
                self.pressed = true;
                self.dragged = false;
                // The press location doubles as the first drag sample.
                vec![
                    InputEvent::PointerPressed,
                    InputEvent::PointerDragged(self.cursor),
                ]
            }
            ElementState::Released => {
                if !self.pressed {
                    return Vec::new();
                }
                self.pressed = false;
                let mut events = vec![InputEvent::PointerReleased];
                if !self.dragged {
                    events.push(InputEvent::Clicked(self.cursor));
                }
                events
            }
        }
    }

    pub fn keyboard_input(&self, input: &KeyboardInput) -> Option<InputEvent> {
        if input.state != ElementState::Pressed {
            return None;
        }
        input
            .virtual_keycode
            .map(|code| InputEvent::KeyPressed(map_key(code)))
    }
}

impl Default for DesktopWinitPlatform {
    fn default() -> Self {
        Self::new(1.0)
    }
}

pub fn map_key(code: VirtualKeyCode) -> KeyCode {
    match code {
        VirtualKeyCode::Escape => KeyCode::Escape,
        _ => KeyCode::Other,
    }
}

#[cfg(test)]
#[path = "tests/platform_tests.rs"]
mod tests;
