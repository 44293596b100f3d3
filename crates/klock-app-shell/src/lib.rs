//! Render-loop driver shared by the Klock demos: owns the input state and
//! the app, routes platform events, and hands the app a canvas each frame.

pub use klock_foundation::{InputEvent, InputState, KeyCode};
pub use klock_graphics::Size;
pub use klock_render_common::Canvas;

/// What the event loop should do after an input callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// A single-window demo: owns its scene model and draws it once per frame.
pub trait App {
    /// Called once per display refresh with the current drawable size in
    /// device-independent pixels. Must not block.
    fn render(&mut self, canvas: &mut dyn Canvas, input: &mut InputState, size: Size);

    fn key_pressed(&mut self, _key: KeyCode) -> AppControl {
        AppControl::Continue
    }
}

/// Owns the input state and the app, and routes platform events to them.
///
/// Everything runs on the event-loop thread; `render` runs to completion
/// before the next event is handled.
pub struct AppShell<A: App> {
    app: A,
    input: InputState,
    viewport: Size,
    buffer_size: (u32, u32),
    exit_requested: bool,
    frame_count: u64,
}

impl<A: App> AppShell<A> {
    pub fn new(app: A) -> Self {
        Self {
            app,
            input: InputState::new(),
            viewport: Size::new(800.0, 600.0),
            buffer_size: (800, 600),
            exit_requested: false,
            frame_count: 0,
        }
    }

    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport = Size::new(width, height);
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    pub fn set_buffer_size(&mut self, width: u32, height: u32) {
        self.buffer_size = (width, height);
    }

    pub fn buffer_size(&self) -> (u32, u32) {
        self.buffer_size
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn app(&self) -> &A {
        &self.app
    }

    pub fn handle_input(&mut self, event: InputEvent) -> AppControl {
        let control = match event {
            InputEvent::KeyPressed(key) => {
                log::trace!("input event: {event:?}");
                self.app.key_pressed(key)
            }
            other => {
                self.input.apply(other);
                AppControl::Continue
            }
        };
        if control == AppControl::Exit {
            log::info!("exit requested");
            self.exit_requested = true;
        }
        control
    }

    /// Window close behaves like an exit request.
    pub fn request_exit(&mut self) {
        self.exit_requested = true;
    }

    pub fn should_exit(&self) -> bool {
        self.exit_requested
    }

    /// Redraw is continuous until exit.
    pub fn should_render(&self) -> bool {
        !self.exit_requested
    }

    pub fn render(&mut self, canvas: &mut dyn Canvas) {
        self.app.render(canvas, &mut self.input, self.viewport);
        self.frame_count += 1;
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}
