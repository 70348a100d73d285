//! Output seams: the draw-call sink and the HUD sink.
//!
//! The simulation never owns a surface or widgets. Hosts implement these
//! traits over whatever backend they use.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::AssetId;
use crate::types::Rect;

/// RGBA color with components in 0.0..=1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const ORANGE: Color = Color::rgb(1.0, 0.647, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

/// Receives draw primitives for one frame.
pub trait RenderSink {
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Radial gradient from `inner` at `center` to `outer` at `radius`, clipped to `rect`.
    fn fill_radial_gradient(
        &mut self,
        rect: Rect,
        center: Vec2,
        radius: f32,
        inner: Color,
        outer: Color,
    );

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);

    fn stroke_circle(&mut self, center: Vec2, radius: f32, line_width: f32, color: Color);

    /// Blit `asset` scaled into `dest`, rotated by `rotation` radians about its center.
    fn draw_image(&mut self, asset: AssetId, dest: Rect, rotation: f32);
}

/// Receives HUD updates.
pub trait UiSink {
    fn update_score(&mut self, score: u32);

    fn update_lives(&mut self, hearts: u32);

    fn update_power_bar(&mut self, segments: &[bool]);

    fn update_special_bar(&mut self, segments: &[bool]);

    /// Show the game-over banner with its restart affordance.
    fn show_game_over(&mut self, final_score: u32);

    fn hide_game_over(&mut self);
}
