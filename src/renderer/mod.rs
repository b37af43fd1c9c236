//! Software rendering module
//!
//! Draws the whole scene back to front into a [`FrameBuffer`]:
//! background, stars, player trail, player, pickups, hazards, HUD.
//! Glow is faked with three stacked discs, no alpha blending needed.

pub mod font;
pub mod framebuffer;
pub mod raster;

pub use framebuffer::{BackBuffer, FrameBuffer};

use crate::color::{Rgb, mix_color};
use crate::sim::{GameState, Orb, OrbKind, Player, Star};

use font::{LARGE, SMALL, draw_text, draw_text_centered, line_height};
use raster::{composite, draw_line, fill_circle, fill_rect, vertical_gradient};

/// Scene palette
pub mod palette {
    use crate::color::Rgb;

    pub const SKY_TOP: Rgb = Rgb::new(12, 24, 45);
    pub const SKY_BOTTOM: Rgb = Rgb::new(20, 46, 78);
    pub const HAZE: Rgb = Rgb::new(20, 32, 60);
    pub const STAR: Rgb = Rgb::new(180, 205, 230);
    pub const TRAIL: Rgb = Rgb::new(80, 180, 210);
    pub const PLAYER: Rgb = Rgb::new(120, 220, 255);
    pub const PLAYER_RIM: Rgb = Rgb::new(40, 120, 200);
    pub const PICKUP_SHADE: Rgb = Rgb::new(20, 40, 80);
    pub const HAZARD_SHADE: Rgb = Rgb::new(12, 18, 40);
    pub const TEXT: Rgb = Rgb::new(220, 230, 240);
    pub const OVERLAY: Rgb = Rgb::new(8, 12, 28);
    pub const HEADLINE: Rgb = Rgb::new(255, 212, 190);
    pub const HINT: Rgb = Rgb::new(200, 220, 240);
}

/// Fraction of the frame height where the haze band starts
const HAZE_START: f32 = 0.72;
/// Opacity of the game-over darkening (0-255)
const OVERLAY_ALPHA: u8 = 110;
/// Trail end offset: horizontal velocity factor and drop below the player
const TRAIL_LEAN: f32 = 0.08;
const TRAIL_DROP: f32 = 28.0;
const TRAIL_WIDTH: i32 = 3;

pub const HEADLINE_TEXT: &str = "Calm Flight Lost";
pub const HINT_TEXT: &str = "Press R to drift again   |   Esc to quit";

/// Draws [`GameState`] into a frame buffer.
///
/// Owns the scratch surface used for the game-over overlay so it is not
/// reallocated every frame.
#[derive(Debug, Default)]
pub struct Renderer {
    overlay: Option<FrameBuffer>,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw a complete frame for `state` into `target`.
    pub fn render(&mut self, target: &mut FrameBuffer, state: &GameState) {
        if target.width == 0 || target.height == 0 {
            return;
        }

        draw_background(target);
        draw_star_field(target, &state.stars);

        draw_trail(target, &state.player);
        draw_soft_circle(
            target,
            state.player.pos.x,
            state.player.pos.y,
            state.player.radius,
            palette::PLAYER,
            palette::PLAYER_RIM,
        );

        // Hazards last so they sit on top of pickups
        for orb in &state.pickups {
            draw_orb(target, orb);
        }
        for orb in &state.hazards {
            draw_orb(target, orb);
        }

        self.render_ui(target, state);
    }

    /// Size of the overlay scratch surface, if one is allocated
    pub fn scratch_dimensions(&self) -> Option<(usize, usize)> {
        self.overlay.as_ref().map(|o| (o.width, o.height))
    }

    /// Drop the overlay scratch surface. The next game-over frame
    /// allocates a fresh one.
    pub fn release(&mut self) {
        if self.overlay.take().is_some() {
            log::debug!("Released overlay scratch surface");
        }
    }

    /// Small frame-rate label in the bottom-left corner
    pub fn draw_fps(&self, target: &mut FrameBuffer, fps: u32) {
        let y = target.height as i32 - 8 - line_height(SMALL);
        draw_text(target, 12, y, &format!("FPS: {}", fps), SMALL, palette::TEXT);
    }

    fn render_ui(&mut self, target: &mut FrameBuffer, state: &GameState) {
        draw_text(
            target,
            12,
            8,
            &format!("Score: {}", state.score),
            SMALL,
            palette::TEXT,
        );
        draw_text(
            target,
            12,
            28,
            &format!("Time: {:.1}s", state.elapsed),
            SMALL,
            palette::TEXT,
        );

        if state.game_over {
            self.draw_overlay(target);
            let h = target.height as f32;
            draw_text_centered(
                target,
                (h * 0.38) as i32,
                HEADLINE_TEXT,
                LARGE,
                palette::HEADLINE,
            );
            draw_text_centered(target, (h * 0.55) as i32, HINT_TEXT, SMALL, palette::HINT);
        }
    }

    /// Darken the whole frame by compositing a flat scratch surface over it.
    fn draw_overlay(&mut self, target: &mut FrameBuffer) {
        let stale = self
            .overlay
            .as_ref()
            .is_none_or(|o| o.width != target.width || o.height != target.height);
        if stale {
            self.overlay = match FrameBuffer::try_new(target.width, target.height) {
                Ok(mut scratch) => {
                    scratch.fill(palette::OVERLAY);
                    Some(scratch)
                }
                Err(e) => {
                    log::warn!("Skipping overlay: {}", e);
                    None
                }
            };
        }
        if let Some(scratch) = &self.overlay {
            composite(target, scratch, OVERLAY_ALPHA);
        }
    }
}

fn draw_background(fb: &mut FrameBuffer) {
    vertical_gradient(fb, palette::SKY_TOP, palette::SKY_BOTTOM);
    let haze_top = (fb.height as f32 * HAZE_START) as i32;
    fill_rect(
        fb,
        0,
        haze_top,
        fb.width as i32,
        fb.height as i32,
        palette::HAZE,
    );
}

fn draw_star_field(fb: &mut FrameBuffer, stars: &[Star]) {
    for star in stars {
        let (x, y) = (star.pos.x as i32, star.pos.y as i32);
        draw_line(fb, (x, y), (x, y + 1), 1, palette::STAR);
    }
}

/// A streak from under the player, leaning against its horizontal motion
fn draw_trail(fb: &mut FrameBuffer, player: &Player) {
    let start = (player.pos.x as i32, player.pos.y as i32 + player.radius as i32);
    let end = (
        (player.pos.x - player.vel.x * TRAIL_LEAN) as i32,
        (player.pos.y + player.radius + TRAIL_DROP) as i32,
    );
    draw_line(fb, start, end, TRAIL_WIDTH, palette::TRAIL);
}

/// Three concentric discs: rim at 1.4r, lightened base at 1.1r, base at r
fn draw_soft_circle(fb: &mut FrameBuffer, cx: f32, cy: f32, r: f32, base: Rgb, rim: Rgb) {
    fill_circle(fb, cx, cy, r * 1.4, rim);
    fill_circle(fb, cx, cy, r * 1.1, mix_color(base, Rgb::WHITE, 0.2));
    fill_circle(fb, cx, cy, r, base);
}

fn draw_orb(fb: &mut FrameBuffer, orb: &Orb) {
    let rim = match orb.kind {
        OrbKind::Pickup => mix_color(orb.color, palette::PICKUP_SHADE, 0.3),
        OrbKind::Hazard => mix_color(orb.color, palette::HAZARD_SHADE, 0.5),
    };
    draw_soft_circle(fb, orb.pos.x, orb.pos.y, orb.radius, orb.color, rim);
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    const W: usize = 320;
    const H: usize = 200;

    fn scene(seed: u64) -> GameState {
        let mut state = GameState::new(seed);
        state.reset_game(W, H);
        // Park everything off-screen so tests control what is visible
        for orb in state.hazards.iter_mut().chain(state.pickups.iter_mut()) {
            orb.pos = Vec2::new(-1000.0, -1000.0);
        }
        for star in &mut state.stars {
            star.pos = Vec2::new(-10.0, -10.0);
        }
        state
    }

    fn frame() -> FrameBuffer {
        FrameBuffer::try_new(W, H).unwrap()
    }

    #[test]
    fn test_background_and_haze() {
        let state = scene(1);
        let mut fb = frame();
        Renderer::new().render(&mut fb, &state);
        // Right edge, above the HUD text rows
        assert_eq!(fb.pixel(W - 1, 0), Some(palette::SKY_TOP));
        assert_eq!(fb.pixel(W - 1, H - 1), Some(palette::HAZE));
        assert_eq!(fb.pixel(W - 1, (H as f32 * 0.72) as usize), Some(palette::HAZE));
        assert_ne!(fb.pixel(W - 1, 100), Some(palette::HAZE));
    }

    #[test]
    fn test_player_layers() {
        let state = scene(2);
        let mut fb = frame();
        Renderer::new().render(&mut fb, &state);
        let (px, py) = (state.player.pos.x as usize, state.player.pos.y as usize);
        assert_eq!(fb.pixel(px, py), Some(palette::PLAYER));
        // Between 1.1r and 1.4r only the rim shows
        let rim_x = px + (state.player.radius * 1.25) as usize;
        assert_eq!(fb.pixel(rim_x, py), Some(palette::PLAYER_RIM));
        // Between r and 1.1r is the lightened base
        let mid_x = px + (state.player.radius * 1.05) as usize;
        assert_eq!(
            fb.pixel(mid_x, py),
            Some(mix_color(palette::PLAYER, Rgb::WHITE, 0.2))
        );
    }

    #[test]
    fn test_hazard_drawn_over_pickup() {
        let mut state = scene(3);
        let spot = Vec2::new(60.0, 100.0);
        state.pickups[0].pos = spot;
        state.pickups[0].radius = 12.0;
        state.hazards[0].pos = spot;
        state.hazards[0].radius = 12.0;
        let mut fb = frame();
        Renderer::new().render(&mut fb, &state);
        assert_eq!(fb.pixel(60, 100), Some(state.hazards[0].color));
    }

    #[test]
    fn test_orb_rim_shades() {
        let mut state = scene(4);
        state.pickups[0].pos = Vec2::new(60.0, 100.0);
        state.pickups[0].radius = 15.0;
        state.hazards[0].pos = Vec2::new(200.0, 100.0);
        state.hazards[0].radius = 15.0;
        let mut fb = frame();
        Renderer::new().render(&mut fb, &state);

        let pickup_rim = mix_color(state.pickups[0].color, palette::PICKUP_SHADE, 0.3);
        let hazard_rim = mix_color(state.hazards[0].color, palette::HAZARD_SHADE, 0.5);
        assert_eq!(fb.pixel(60 + 19, 100), Some(pickup_rim));
        assert_eq!(fb.pixel(200 + 19, 100), Some(hazard_rim));
    }

    #[test]
    fn test_star_strokes() {
        let mut state = scene(5);
        state.stars[0].pos = Vec2::new(300.0, 60.0);
        let mut fb = frame();
        Renderer::new().render(&mut fb, &state);
        assert_eq!(fb.pixel(300, 60), Some(palette::STAR));
        assert_eq!(fb.pixel(300, 61), Some(palette::STAR));
    }

    #[test]
    fn test_trail_leans_against_motion() {
        let mut state = scene(6);
        state.player.vel = Vec2::new(250.0, 0.0);
        let mut fb = frame();
        Renderer::new().render(&mut fb, &state);
        let p = state.player;
        // End point: x - 250 * 0.08 = x - 20, y + r + 28
        let end_x = (p.pos.x - 20.0) as usize;
        let end_y = (p.pos.y + p.radius + 28.0) as usize;
        assert_eq!(fb.pixel(end_x, end_y.min(H - 1)), Some(palette::TRAIL));
    }

    #[test]
    fn test_game_over_overlay_darkens() {
        let mut state = scene(7);
        let mut fb_live = frame();
        Renderer::new().render(&mut fb_live, &state);

        state.game_over = true;
        let mut fb_lost = frame();
        let mut renderer = Renderer::new();
        renderer.render(&mut fb_lost, &state);

        let corner = (W - 1, H - 1);
        let live = fb_live.pixel(corner.0, corner.1).unwrap();
        let lost = fb_lost.pixel(corner.0, corner.1).unwrap();
        assert!(lost.r <= live.r && lost.g < live.g && lost.b < live.b);

        // Scratch surface is kept for the next frame
        assert_eq!(renderer.scratch_dimensions(), Some((W, H)));

        renderer.release();
        assert_eq!(renderer.scratch_dimensions(), None);
        renderer.release();

        // Reallocated on demand
        renderer.render(&mut fb_lost, &state);
        assert_eq!(renderer.scratch_dimensions(), Some((W, H)));
    }

    #[test]
    fn test_game_over_text_rows() {
        let mut state = scene(10);
        state.game_over = true;
        let mut fb = frame();
        Renderer::new().render(&mut fb, &state);

        let row_has = |y: usize, color: Rgb| (0..W).any(|x| fb.pixel(x, y) == Some(color));
        // First glyph row of each line; 0.38 * 200 = 76, 0.55 * 200 = 110
        let headline_y = (H as f32 * 0.38) as usize;
        let hint_y = (H as f32 * 0.55) as usize;
        assert!(row_has(headline_y, palette::HEADLINE));
        assert!(row_has(hint_y, palette::HINT));
        assert!(!row_has(headline_y - 1, palette::HEADLINE));
        assert!(!row_has(hint_y - 1, palette::HINT));

        // Nothing of the kind while the session is live
        state.game_over = false;
        let mut live = frame();
        Renderer::new().render(&mut live, &state);
        assert!(!(0..W).any(|x| live.pixel(x, headline_y) == Some(palette::HEADLINE)));
    }

    #[test]
    fn test_render_fully_overwrites_frame() {
        let state = scene(8);
        let mut a = frame();
        let mut b = frame();
        b.fill(Rgb::new(255, 0, 255));
        let mut renderer = Renderer::new();
        renderer.render(&mut a, &state);
        renderer.render(&mut b, &state);
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_target_is_noop() {
        let state = scene(9);
        let mut fb = FrameBuffer::try_new(0, 0).unwrap();
        Renderer::new().render(&mut fb, &state);
        assert!(fb.pixels.is_empty());
    }
}
