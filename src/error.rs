//! Error types
//!
//! Simulation and drawing never fail. Errors only come from the edges:
//! the window, the frame buffer allocation and the settings file.
//! Allocation failures are recovered from in place (the previous buffer is
//! kept), so they stay a separate type and never end the run.

use thiserror::Error;

/// Failure to (re)allocate the off-screen frame buffer
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FrameBufferError {
    #[error("frame buffer of {width}x{height} pixels overflows the address space")]
    TooLarge { width: usize, height: usize },
    #[error("failed to allocate a {width}x{height} frame buffer")]
    Allocation { width: usize, height: usize },
}

/// Crate-level error
#[derive(Debug, Error)]
pub enum Error {
    #[error("window init error: {0}")]
    WindowInit(String),
    #[error("window update error: {0}")]
    WindowUpdate(String),
    #[error("settings error: {0}")]
    Settings(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
