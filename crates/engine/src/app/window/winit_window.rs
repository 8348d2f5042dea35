use std::sync::Arc;
use std::time::Duration;

use pixels::{Pixels, PixelsBuilder, SurfaceTexture};
use tracing::{info, warn};
use winit::dpi::LogicalSize;
use winit::event::{ElementState, Event, WindowEvent};
use winit::event_loop::EventLoop;
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Window, WindowBuilder};

use super::keymap::{button_id, key_id, scroll_offsets};
use super::{GameWindow, WindowError};
use crate::app::{InputSink, LoopConfig};

/// winit window with a `pixels` surface, polled by pumping the event loop
/// with a zero timeout once per frame.
pub struct WinitWindow {
    pixels: Pixels<'static>,
    window: Arc<Window>,
    event_loop: EventLoop<()>,
    close_requested: bool,
}

impl WinitWindow {
    pub fn open(config: &LoopConfig) -> Result<Self, WindowError> {
        let event_loop = EventLoop::new().map_err(WindowError::CreateEventLoop)?;
        let (surface_width, surface_height) = config.surface_size();
        let window = Arc::new(
            WindowBuilder::new()
                .with_title(config.title.clone())
                .with_inner_size(LogicalSize::new(
                    surface_width as f64,
                    surface_height as f64,
                ))
                .with_visible(false)
                .with_resizable(config.resizable)
                .with_maximized(false)
                .build(&event_loop)
                .map_err(WindowError::CreateWindow)?,
        );

        let size = window.inner_size();
        let surface = SurfaceTexture::new(size.width, size.height, Arc::clone(&window));
        let pixels = PixelsBuilder::new(config.width, config.height, surface)
            .enable_vsync(config.vertical_sync)
            .build()
            .map_err(WindowError::CreateSurface)?;

        info!(
            width = config.width,
            height = config.height,
            scale = config.scale,
            surface_width = size.width,
            surface_height = size.height,
            vertical_sync = config.vertical_sync,
            "window_created"
        );

        Ok(Self {
            pixels,
            window,
            event_loop,
            close_requested: false,
        })
    }

    fn resize_surface(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if let Err(error) = self.pixels.resize_surface(width, height) {
            warn!(error = %error, width, height, "surface_resize_failed");
        }
    }
}

impl GameWindow for WinitWindow {
    fn show(&mut self) {
        self.window.set_visible(true);
    }

    fn should_close(&self) -> bool {
        self.close_requested
    }

    fn clear(&mut self, color: [u8; 4]) {
        for pixel in self.pixels.frame_mut().chunks_exact_mut(4) {
            pixel.copy_from_slice(&color);
        }
    }

    fn present(&mut self) -> Result<(), WindowError> {
        self.pixels
            .render()
            .map_err(|error| WindowError::Present(Box::new(error)))
    }

    fn poll_events(&mut self, sink: &mut dyn InputSink) {
        let window_id = self.window.id();
        let mut close_requested = false;
        let mut resized_to = None;

        let status = self
            .event_loop
            .pump_events(Some(Duration::ZERO), |event, _target| {
                let Event::WindowEvent { window_id: id, event } = event else {
                    return;
                };
                if id != window_id {
                    return;
                }
                match event {
                    WindowEvent::CloseRequested => close_requested = true,
                    WindowEvent::Resized(size) => resized_to = Some((size.width, size.height)),
                    WindowEvent::KeyboardInput { event, .. } => {
                        if let Some(key) = key_id(event.physical_key) {
                            sink.on_key(key, event.state == ElementState::Pressed);
                        }
                    }
                    WindowEvent::CursorMoved { position, .. } => {
                        sink.on_pointer_move(position.x, position.y);
                    }
                    WindowEvent::MouseInput { state, button, .. } => {
                        if let Some(button) = button_id(button) {
                            sink.on_pointer_button(button, state == ElementState::Pressed);
                        }
                    }
                    WindowEvent::MouseWheel { delta, .. } => {
                        let (dx, dy) = scroll_offsets(delta);
                        sink.on_scroll(dx, dy);
                    }
                    _ => {}
                }
            });

        if let PumpStatus::Exit(code) = status {
            info!(code, "event_loop_exited");
            close_requested = true;
        }
        if close_requested && !self.close_requested {
            info!(reason = "window_close", "shutdown_requested");
            self.close_requested = true;
        }
        if let Some((width, height)) = resized_to {
            self.resize_surface(width, height);
        }
    }

    fn set_title(&mut self, title: &str) {
        self.window.set_title(title);
    }

    fn destroy(self) {
        self.window.set_visible(false);
        // Surface goes before the window it borrows from.
        drop(self.pixels);
        drop(self.window);
        info!("window_destroyed");
    }
}
