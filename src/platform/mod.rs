//! Platform abstraction layer
//!
//! The frame loop only talks to the window through [`Host`]:
//! - Pending events (resize, close)
//! - Client area size
//! - Held keys
//! - Presenting a finished frame

pub mod native;

pub use native::NativeWindow;

use crate::error::Error;
use crate::renderer::FrameBuffer;
use crate::sim::KeySet;

/// Notifications from the windowing layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    /// The client area changed size (either side may be zero when minimized)
    Resized { width: usize, height: usize },
    /// The user closed the window
    CloseRequested,
}

/// The window as seen by the frame loop
pub trait Host {
    /// Append pending events without blocking.
    fn drain_events(&mut self, events: &mut Vec<HostEvent>);

    /// Current client area in pixels
    fn client_size(&self) -> (usize, usize);

    /// Keys held right now
    fn keys(&self) -> KeySet;

    /// Copy a finished frame onto the visible window.
    fn present(&mut self, frame: &FrameBuffer) -> Result<(), Error>;

    /// Called instead of `present` when there is no frame to show.
    fn idle(&mut self) {}
}
