//! Frame loop driver
//!
//! One iteration: drain window events, snapshot keys, measure the frame
//! time, advance the simulation, draw into the back buffer, present it.
//! Everything runs on the calling thread.

use std::time::Instant;

use crate::consts::MAX_FRAME_DT;
use crate::error::Error;
use crate::platform::{Host, HostEvent};
use crate::renderer::{BackBuffer, Renderer};
use crate::settings::Settings;
use crate::sim::{GameState, Key, KeyState, update};

/// Number of frames averaged by the FPS counter
const FPS_WINDOW: usize = 60;

/// Loop lifecycle; `Stopped` is terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

/// Monotonic frame timer with a clamped delta
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Option<Instant>,
    max_dt: f32,
}

impl FrameClock {
    pub fn new(max_dt: f32) -> Self {
        Self { last: None, max_dt }
    }

    /// Seconds since the previous tick, clamped to `max_dt`. The first tick is 0.
    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    pub fn tick_at(&mut self, now: Instant) -> f32 {
        let dt = match self.last {
            Some(prev) => now.saturating_duration_since(prev).as_secs_f32(),
            None => 0.0,
        };
        self.last = Some(now);
        dt.min(self.max_dt)
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(MAX_FRAME_DT)
    }
}

/// Rolling frames-per-second over the last [`FPS_WINDOW`] frames
#[derive(Debug, Clone)]
struct FpsCounter {
    stamps: [Option<Instant>; FPS_WINDOW],
    index: usize,
    fps: u32,
}

impl FpsCounter {
    fn new() -> Self {
        Self {
            stamps: [None; FPS_WINDOW],
            index: 0,
            fps: 0,
        }
    }

    fn record(&mut self, now: Instant) {
        self.stamps[self.index] = Some(now);
        self.index = (self.index + 1) % FPS_WINDOW;

        // Slot at the new index holds the oldest stamp once the ring is full
        if let Some(oldest) = self.stamps[self.index] {
            let elapsed = now.saturating_duration_since(oldest).as_secs_f64();
            if elapsed > 0.0 {
                self.fps = ((FPS_WINDOW - 1) as f64 / elapsed).round() as u32;
            }
        }
    }
}

/// Owns the game state, the back buffer and the renderer, and runs frames
/// against a [`Host`].
pub struct FrameDriver {
    state: GameState,
    back: BackBuffer,
    renderer: Renderer,
    clock: FrameClock,
    fps: FpsCounter,
    show_fps: bool,
    events: Vec<HostEvent>,
    loop_state: LoopState,
}

impl FrameDriver {
    pub fn new(seed: u64) -> Self {
        Self {
            state: GameState::new(seed),
            back: BackBuffer::new(),
            renderer: Renderer::new(),
            clock: FrameClock::default(),
            fps: FpsCounter::new(),
            show_fps: false,
            events: Vec::new(),
            loop_state: LoopState::Running,
        }
    }

    pub fn from_settings(settings: &Settings, seed: u64) -> Self {
        Self {
            show_fps: settings.show_fps,
            ..Self::new(seed)
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn back_buffer(&self) -> &BackBuffer {
        &self.back
    }

    pub fn loop_state(&self) -> LoopState {
        self.loop_state
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    /// Run one iteration timed by the wall clock.
    pub fn step<H: Host>(&mut self, host: &mut H) -> Result<LoopState, Error> {
        let dt = self.clock.tick();
        self.step_with(host, dt)
    }

    /// Run one iteration with an explicit frame time (clamped to
    /// [`MAX_FRAME_DT`]).
    pub fn step_with<H: Host>(&mut self, host: &mut H, dt: f32) -> Result<LoopState, Error> {
        if self.loop_state == LoopState::Stopped {
            return Ok(LoopState::Stopped);
        }

        let mut close_requested = false;
        self.events.clear();
        host.drain_events(&mut self.events);
        for event in self.events.drain(..) {
            match event {
                HostEvent::Resized { width, height } => {
                    if let Err(e) = self.back.resize(width, height) {
                        log::error!("Keeping previous back buffer: {}", e);
                    }
                }
                HostEvent::CloseRequested => close_requested = true,
            }
        }

        let keys = host.keys();
        if close_requested || keys.is_down(Key::Escape) {
            self.stop();
            return Ok(LoopState::Stopped);
        }

        let (width, height) = host.client_size();
        if self.state.game_over && keys.is_down(Key::R) {
            log::info!("Restarting after score {}", self.state.score);
            self.state.reset_game(width, height);
        }

        let dt = dt.clamp(0.0, MAX_FRAME_DT);
        update(&mut self.state, &keys, dt, width, height);

        match self.back.frame_mut() {
            Some(frame) => {
                self.renderer.render(frame, &self.state);
                if self.show_fps {
                    self.renderer.draw_fps(frame, self.fps.fps);
                }
                host.present(frame)?;
            }
            None => host.idle(),
        }
        self.fps.record(Instant::now());

        Ok(LoopState::Running)
    }

    /// Run until the window closes or Escape is pressed.
    pub fn run<H: Host>(&mut self, host: &mut H) -> Result<(), Error> {
        log::info!("Frame loop running");
        let result = loop {
            match self.step(host) {
                Ok(LoopState::Running) => continue,
                Ok(LoopState::Stopped) => break Ok(()),
                Err(e) => break Err(e),
            }
        };
        self.stop();
        result
    }

    fn stop(&mut self) {
        if self.loop_state == LoopState::Stopped {
            return;
        }
        self.loop_state = LoopState::Stopped;
        self.back.destroy();
        self.renderer.release();
        log::info!("Frame loop stopped (final score {})", self.state.score);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_clock_first_tick_is_zero() {
        let mut clock = FrameClock::default();
        assert_eq!(clock.tick_at(Instant::now()), 0.0);
    }

    #[test]
    fn test_clock_clamps_stalls() {
        let mut clock = FrameClock::new(0.05);
        let t0 = Instant::now();
        clock.tick_at(t0);
        let dt = clock.tick_at(t0 + Duration::from_millis(16));
        assert!((dt - 0.016).abs() < 1e-4);
        assert_eq!(clock.tick_at(t0 + Duration::from_secs(3)), 0.05);
    }

    #[test]
    fn test_clock_never_negative() {
        let mut clock = FrameClock::default();
        let t0 = Instant::now() + Duration::from_secs(1);
        clock.tick_at(t0);
        assert_eq!(clock.tick_at(t0 - Duration::from_millis(500)), 0.0);
    }

    #[test]
    fn test_fps_counter() {
        let mut fps = FpsCounter::new();
        let t0 = Instant::now();
        for i in 0..120u64 {
            fps.record(t0 + Duration::from_micros(i * 16_667));
        }
        assert!((59..=61).contains(&fps.fps), "fps = {}", fps.fps);
    }
}
