#![deny(missing_docs)]

//! High level utilities for running a Klock demo in a desktop window.

use std::convert::Infallible;
use std::path::{Path, PathBuf};

use klock_app_shell::{App, AppControl, AppShell};
use klock_platform_desktop_winit::DesktopWinitPlatform;
use klock_render_pixels::{FontAsset, FontError, PixelsCanvas};
use pixels::{Pixels, SurfaceTexture};
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoopBuilder};
use winit::window::WindowBuilder;

/// Startup failures. All of them are fatal.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// The bundled font could not be loaded.
    #[error("failed to load font: {0}")]
    Font(#[from] FontError),
    /// The window system refused to create a window.
    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),
    /// The pixel surface could not be created.
    #[error("failed to create pixel surface: {0}")]
    Surface(#[from] pixels::Error),
}

/// Builder used to configure and launch a Klock demo.
#[derive(Debug, Clone, Default)]
pub struct KlockAppBuilder {
    options: KlockAppOptions,
}

impl KlockAppBuilder {
    /// Creates a new builder with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the window title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.options.title = title.into();
        self
    }

    /// Sets the preferred logical size of the window.
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.options.initial_size = (width, height);
        self
    }

    /// Sets the minimum logical size of the window.
    pub fn min_size(mut self, width: u32, height: u32) -> Self {
        self.options.min_size = (width, height);
        self
    }

    /// Sets the font file loaded at startup.
    pub fn font_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.options.font_path = path.into();
        self
    }

    /// Returns the options collected so far.
    pub fn options(&self) -> &KlockAppOptions {
        &self.options
    }

    /// Opens the window and runs `app` until the window closes or the app
    /// asks to exit. Only returns on a startup failure.
    pub fn run<A: App + 'static>(self, app: A) -> Result<Infallible, AppError> {
        run_app(self.options, app)
    }
}

/// Options used to configure the demo window.
#[derive(Debug, Clone, PartialEq)]
pub struct KlockAppOptions {
    title: String,
    initial_size: (u32, u32),
    min_size: (u32, u32),
    font_path: PathBuf,
}

impl Default for KlockAppOptions {
    fn default() -> Self {
        Self {
            title: "Klock".to_string(),
            initial_size: (800, 600),
            min_size: (100, 100),
            font_path: PathBuf::from("assets/fonts/DejaVuSansMono.ttf"),
        }
    }
}

impl KlockAppOptions {
    /// Sets the title used for the window.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the preferred window size in logical pixels.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.initial_size = (width, height);
        self
    }

    /// Sets the minimum window size in logical pixels.
    pub fn with_min_size(mut self, width: u32, height: u32) -> Self {
        self.min_size = (width, height);
        self
    }

    /// Sets the font file loaded at startup.
    pub fn with_font_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.font_path = path.into();
        self
    }

    /// Window title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Preferred logical size.
    pub fn initial_size(&self) -> (u32, u32) {
        self.initial_size
    }

    /// Minimum logical size.
    pub fn min_size(&self) -> (u32, u32) {
        self.min_size
    }

    /// Font file loaded at startup.
    pub fn font_path(&self) -> &Path {
        &self.font_path
    }
}

/// Launches `app` with the provided options.
pub fn run_app<A: App + 'static>(
    options: KlockAppOptions,
    app: A,
) -> Result<Infallible, AppError> {
    let font = FontAsset::from_file(&options.font_path)?;

    let event_loop = EventLoopBuilder::new().build();
    let (width, height) = options.initial_size;
    let (min_width, min_height) = options.min_size;
    let window = WindowBuilder::new()
        .with_title(options.title.clone())
        .with_inner_size(LogicalSize::new(width as f64, height as f64))
        .with_min_inner_size(LogicalSize::new(min_width as f64, min_height as f64))
        .build(&event_loop)?;

    let size = window.inner_size();
    let surface_texture = SurfaceTexture::new(size.width, size.height, &window);
    let mut pixels = Pixels::new(size.width, size.height, surface_texture)?;

    let mut platform = DesktopWinitPlatform::new(window.scale_factor());
    let mut shell = AppShell::new(app);
    apply_size(&mut shell, size, platform.scale_factor());
    log::info!(
        "opened \"{}\" at {}x{} physical pixels, scale factor {}",
        options.title,
        size.width,
        size.height,
        platform.scale_factor()
    );

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Poll;
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    shell.request_exit();
                    *control_flow = ControlFlow::Exit;
                }
                WindowEvent::Resized(new_size) => {
                    if let Err(err) = resize(&mut pixels, &mut shell, new_size, &platform) {
                        log::error!("failed to resize surface: {err}");
                        *control_flow = ControlFlow::Exit;
                    }
                }
                WindowEvent::ScaleFactorChanged {
                    scale_factor,
                    new_inner_size,
                } => {
                    platform.set_scale_factor(scale_factor);
                    if let Err(err) =
                        resize(&mut pixels, &mut shell, *new_inner_size, &platform)
                    {
                        log::error!("failed to resize surface: {err}");
                        *control_flow = ControlFlow::Exit;
                    }
                }
                WindowEvent::CursorMoved { position, .. } => {
                    shell.handle_input(platform.cursor_moved(position));
                }
                WindowEvent::MouseInput { state, button, .. } => {
                    for input in platform.mouse_input(state, button) {
                        shell.handle_input(input);
                    }
                }
                WindowEvent::KeyboardInput { input, .. } => {
                    if let Some(key) = platform.keyboard_input(&input) {
                        if shell.handle_input(key) == AppControl::Exit {
                            *control_flow = ControlFlow::Exit;
                        }
                    }
                }
                _ => {}
            },
            Event::MainEventsCleared => {
                if shell.should_render() {
                    window.request_redraw();
                }
            }
            Event::RedrawRequested(_) => {
                let (buffer_width, buffer_height) = shell.buffer_size();
                if buffer_width == 0 || buffer_height == 0 {
                    return;
                }
                let scale = platform.scale_factor() as f32;
                let mut canvas = PixelsCanvas::new(
                    pixels.frame_mut(),
                    buffer_width,
                    buffer_height,
                    scale,
                    &font,
                );
                shell.render(&mut canvas);
                if let Err(err) = pixels.render() {
                    log::error!("pixels render failed: {err}");
                    *control_flow = ControlFlow::Exit;
                }
            }
            Event::LoopDestroyed => {
                log::info!("event loop finished after {} frames", shell.frame_count());
            }
            _ => {}
        }
    })
}

fn resize<A: App>(
    pixels: &mut Pixels,
    shell: &mut AppShell<A>,
    new_size: PhysicalSize<u32>,
    platform: &DesktopWinitPlatform,
) -> Result<(), pixels::TextureError> {
    // Minimized windows report a zero size; keep the old buffer.
    if new_size.width == 0 || new_size.height == 0 {
        return Ok(());
    }
    pixels.resize_surface(new_size.width, new_size.height)?;
    pixels.resize_buffer(new_size.width, new_size.height)?;
    apply_size(shell, new_size, platform.scale_factor());
    Ok(())
}

fn apply_size<A: App>(shell: &mut AppShell<A>, size: PhysicalSize<u32>, scale_factor: f64) {
    shell.set_buffer_size(size.width, size.height);
    let logical = logical_viewport(size, scale_factor);
    shell.set_viewport(logical.0, logical.1);
}

/// Drawable size in device-independent pixels.
fn logical_viewport(size: PhysicalSize<u32>, scale_factor: f64) -> (f32, f32) {
    (
        (size.width as f64 / scale_factor) as f32,
        (size.height as f64 / scale_factor) as f32,
    )
}

#[cfg(test)]
#[path = "tests/options_tests.rs"]
mod tests;
