use klock_graphics::Point;

/// Keys the demos react to. Everything else maps to [`KeyCode::Other`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Escape,
    Other,
}

/// A single notification delivered by the platform adapter.
///
/// Positions are in device-independent pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    PointerMoved(Point),
    PointerDragged(Point),
    PointerPressed,
    PointerReleased,
    Clicked(Point),
    KeyPressed(KeyCode),
}

/// Latest pointer status, written by the input handlers and read by the
/// render step once per frame.
///
/// There is no buffering: a second event of the same kind overwrites the
/// first.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InputState {
    pointer: Point,
    pressed: bool,
    press: Point,
    click: Option<Point>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        self.pointer = Point::new(x, y);
    }

    /// A drag is a move with the button held, so it also records a press sample.
    pub fn on_pointer_drag(&mut self, x: f32, y: f32) {
        self.pointer = Point::new(x, y);
        self.press = Point::new(x, y);
    }

    pub fn on_press(&mut self) {
        self.pressed = true;
    }

    pub fn on_release(&mut self) {
        self.pressed = false;
    }

    /// The click keeps its own position; later drag samples do not move it.
    pub fn on_click(&mut self, x: f32, y: f32) {
        self.press = Point::new(x, y);
        self.click = Some(Point::new(x, y));
    }

    /// Applies a platform event. Key presses are not part of the pointer
    /// state and are left to the caller.
    pub fn apply(&mut self, event: InputEvent) {
        log::trace!("input event: {event:?}");
        match event {
            InputEvent::PointerMoved(point) => self.on_pointer_move(point.x, point.y),
            InputEvent::PointerDragged(point) => self.on_pointer_drag(point.x, point.y),
            InputEvent::PointerPressed => self.on_press(),
            InputEvent::PointerReleased => self.on_release(),
            InputEvent::Clicked(point) => self.on_click(point.x, point.y),
            InputEvent::KeyPressed(_) => {}
        }
    }

    pub fn pointer(&self) -> Point {
        self.pointer
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Coordinates of the most recent press or drag sample.
    pub fn press_position(&self) -> Point {
        self.press
    }

    pub fn has_pending_click(&self) -> bool {
        self.click.is_some()
    }

    /// Position of the pending click, without consuming it.
    pub fn pending_click(&self) -> Option<Point> {
        self.click
    }

    /// Read-and-clear access to the pending click. Returns `Some` at most
    /// once per click.
    pub fn take_click(&mut self) -> Option<Point> {
        self.click.take()
    }

    /// Consumes the pending click only when `accept` returns true for its
    /// position; otherwise the click stays pending.
    pub fn take_click_if(&mut self, accept: impl FnOnce(Point) -> bool) -> Option<Point> {
        match self.pending_click() {
            Some(point) if accept(point) => self.take_click(),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "tests/input_tests.rs"]
mod tests;
