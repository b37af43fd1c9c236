//! Off-screen pixel surfaces
//!
//! Every frame is drawn completely into a [`FrameBuffer`] and only then
//! handed to the window, so the player never sees a half-drawn frame.

use crate::color::Rgb;
use crate::error::FrameBufferError;

/// Row-major `0x00RRGGBB` pixel surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<u32>,
}

impl FrameBuffer {
    /// Allocate a black surface, reporting allocation failure instead of aborting.
    pub fn try_new(width: usize, height: usize) -> Result<Self, FrameBufferError> {
        let len = width
            .checked_mul(height)
            .ok_or(FrameBufferError::TooLarge { width, height })?;
        let mut pixels = Vec::new();
        pixels
            .try_reserve_exact(len)
            .map_err(|_| FrameBufferError::Allocation { width, height })?;
        pixels.resize(len, 0);
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn fill(&mut self, color: Rgb) {
        self.pixels.fill(color.to_u32());
    }

    /// Pixel at (x, y), or `None` when outside the surface
    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(Rgb::from_u32(self.pixels[y * self.width + x]))
    }
}

/// Owner of the single back buffer for the window.
///
/// Holds at most one surface. The surface always has the size of the last
/// successful non-zero resize.
#[derive(Debug, Default)]
pub struct BackBuffer {
    frame: Option<FrameBuffer>,
}

impl BackBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the surface with one of `width` x `height` pixels.
    ///
    /// A zero dimension (minimized window) keeps the current surface. On
    /// allocation failure the current surface is kept as well.
    pub fn resize(&mut self, width: usize, height: usize) -> Result<(), FrameBufferError> {
        if width == 0 || height == 0 {
            return Ok(());
        }
        let frame = FrameBuffer::try_new(width, height)?;
        self.destroy();
        self.frame = Some(frame);
        log::info!("Back buffer resized to {}x{}", width, height);
        Ok(())
    }

    /// Release the surface. Calling it with nothing allocated is fine.
    pub fn destroy(&mut self) {
        self.frame = None;
    }

    pub fn dimensions(&self) -> Option<(usize, usize)> {
        self.frame.as_ref().map(|f| (f.width, f.height))
    }

    pub fn frame(&self) -> Option<&FrameBuffer> {
        self.frame.as_ref()
    }

    pub fn frame_mut(&mut self) -> Option<&mut FrameBuffer> {
        self.frame.as_mut()
    }
}
