//! Native window backed by minifb
//!
//! minifb pumps OS messages while a frame is pushed, so events seen in
//! `drain_events` are the ones collected during the previous `present`.

use minifb::{Window, WindowOptions};

use super::{Host, HostEvent};
use crate::error::Error;
use crate::renderer::FrameBuffer;
use crate::settings::Settings;
use crate::sim::{Key, KeySet};

pub struct NativeWindow {
    window: Window,
    /// Size reported with the last `Resized` event; starts at zero so the
    /// first drain announces the initial client area.
    last_size: (usize, usize),
    close_reported: bool,
}

impl NativeWindow {
    pub fn new(settings: &Settings) -> Result<Self, Error> {
        let options = WindowOptions {
            resize: true,
            ..WindowOptions::default()
        };
        let mut window = Window::new(
            &settings.title,
            settings.window_width,
            settings.window_height,
            options,
        )
        .map_err(|e| Error::WindowInit(e.to_string()))?;
        window.set_target_fps(settings.target_fps);

        log::info!(
            "Opened window \"{}\" ({}x{})",
            settings.title,
            settings.window_width,
            settings.window_height
        );
        Ok(Self {
            window,
            last_size: (0, 0),
            close_reported: false,
        })
    }
}

/// Map a minifb key onto the keys the game understands
fn map_key(key: minifb::Key) -> Option<Key> {
    use minifb::Key as K;
    match key {
        K::A => Some(Key::A),
        K::D => Some(Key::D),
        K::W => Some(Key::W),
        K::S => Some(Key::S),
        K::Left => Some(Key::Left),
        K::Right => Some(Key::Right),
        K::Up => Some(Key::Up),
        K::Down => Some(Key::Down),
        K::R => Some(Key::R),
        K::Escape => Some(Key::Escape),
        _ => None,
    }
}

impl Host for NativeWindow {
    fn drain_events(&mut self, events: &mut Vec<HostEvent>) {
        if !self.window.is_open() {
            if !self.close_reported {
                self.close_reported = true;
                events.push(HostEvent::CloseRequested);
            }
            return;
        }

        let size = self.window.get_size();
        if size != self.last_size {
            self.last_size = size;
            events.push(HostEvent::Resized {
                width: size.0,
                height: size.1,
            });
        }
    }

    fn client_size(&self) -> (usize, usize) {
        self.window.get_size()
    }

    fn keys(&self) -> KeySet {
        self.window.get_keys().into_iter().filter_map(map_key).collect()
    }

    fn present(&mut self, frame: &FrameBuffer) -> Result<(), Error> {
        self.window
            .update_with_buffer(&frame.pixels, frame.width, frame.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))
    }

    fn idle(&mut self) {
        // Nothing to show (minimized); still pump messages
        self.window.update();
    }
}
