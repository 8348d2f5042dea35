mod keymap;
mod winit_window;

use pixels::Error as PixelsError;
use thiserror::Error;
use winit::error::{EventLoopError, OsError};

use super::InputSink;

pub use keymap::{button_id, key_id, scroll_offsets};
pub use winit_window::WinitWindow;

#[derive(Debug, Error)]
pub enum WindowError {
    #[error("failed to create event loop: {0}")]
    CreateEventLoop(#[source] EventLoopError),
    #[error("failed to create application window: {0}")]
    CreateWindow(#[source] OsError),
    #[error("failed to create pixel surface: {0}")]
    CreateSurface(#[source] PixelsError),
    #[error("failed to present frame: {0}")]
    Present(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// The window/context the engine loop drives.
///
/// Device events are only delivered inside `poll_events`, on the loop thread.
pub trait GameWindow {
    fn show(&mut self);
    fn should_close(&self) -> bool;
    fn clear(&mut self, color: [u8; 4]);
    fn present(&mut self) -> Result<(), WindowError>;
    fn poll_events(&mut self, sink: &mut dyn InputSink);
    fn set_title(&mut self, title: &str);
    fn destroy(self);
}
