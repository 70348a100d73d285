//! Render system: issues draw calls for the current session state.
//!
//! This system is read-only. The background is painted in every phase;
//! a paused frame shows nothing else and a finished session adds a dimming
//! overlay.

use glam::Vec2;

use skyfire_core::entities::{EnemyBody, Star};
use skyfire_core::enums::{AssetId, GamePhase};
use skyfire_core::render::{Color, RenderSink};
use skyfire_core::types::{Rect, Viewport};

use crate::session::Session;
use crate::systems::movement;

/// Nebula tint at the center of the background gradient.
const NEBULA_INNER: Color = Color::rgba(10.0 / 255.0, 10.0 / 255.0, 30.0 / 255.0, 0.2);

/// Dimming overlay drawn over a finished session.
const GAME_OVER_OVERLAY: Color = Color::rgba(0.0, 0.0, 0.0, 0.7);

/// Draw one frame.
pub fn run(session: &Session, stars: &[Star], sink: &mut dyn RenderSink) {
    draw_background(&session.viewport, stars, sink);

    match session.phase {
        GamePhase::Paused => {}
        GamePhase::GameOver => {
            sink.fill_rect(full_canvas(&session.viewport), GAME_OVER_OVERLAY);
        }
        GamePhase::Playing => draw_playfield(session, sink),
    }
}

/// Black base, radial nebula gradient, then the stars.
pub fn draw_background(viewport: &Viewport, stars: &[Star], sink: &mut dyn RenderSink) {
    let canvas = full_canvas(viewport);
    sink.fill_rect(canvas, Color::BLACK);
    sink.fill_radial_gradient(
        canvas,
        viewport.center(),
        viewport.width,
        NEBULA_INNER,
        Color::BLACK,
    );
    for star in stars {
        sink.fill_circle(star.pos, star.radius, Color::WHITE);
    }
}

fn draw_playfield(session: &Session, sink: &mut dyn RenderSink) {
    let player = &session.player;
    sink.draw_image(AssetId::PlayerShip, player.bounds(), 0.0);

    for bullet in &player.bullets {
        sink.fill_rect(bullet.bounds(), Color::WHITE);
    }
    for bullet in &session.enemy_bullets {
        sink.fill_rect(bullet.bounds(), Color::RED);
    }

    for enemy in &session.enemies {
        let (asset, rotation) = match &enemy.body {
            EnemyBody::Asteroid(asteroid) => (asteroid.class.asset(), asteroid.rotation),
            EnemyBody::Ship(ship) if ship.boss => (AssetId::Boss, 0.0),
            EnemyBody::Ship(ship) => (AssetId::EnemyShip, movement::ship_heading(ship)),
        };
        sink.draw_image(asset, enemy.bounds(), rotation);
    }

    for pickup in &session.pickups {
        sink.draw_image(pickup.kind.asset(), pickup.bounds(), 0.0);
    }

    for ring in &session.rings {
        sink.stroke_circle(ring.origin, ring.radius, ring.thickness, Color::ORANGE);
    }
}

fn full_canvas(viewport: &Viewport) -> Rect {
    Rect::at(Vec2::ZERO, Vec2::new(viewport.width, viewport.height))
}

#[cfg(test)]
mod tests {
    use skyfire_core::config::GameConfig;

    use super::*;

    /// Records draw calls by kind.
    #[derive(Default)]
    struct Recorder {
        rects: Vec<(Rect, Color)>,
        gradients: usize,
        circles: usize,
        strokes: usize,
        images: Vec<(AssetId, f32)>,
    }

    impl RenderSink for Recorder {
        fn fill_rect(&mut self, rect: Rect, color: Color) {
            self.rects.push((rect, color));
        }
        fn fill_radial_gradient(&mut self, _: Rect, _: Vec2, _: f32, _: Color, _: Color) {
            self.gradients += 1;
        }
        fn fill_circle(&mut self, _: Vec2, _: f32, _: Color) {
            self.circles += 1;
        }
        fn stroke_circle(&mut self, _: Vec2, _: f32, _: f32, _: Color) {
            self.strokes += 1;
        }
        fn draw_image(&mut self, asset: AssetId, _: Rect, rotation: f32) {
            self.images.push((asset, rotation));
        }
    }

    fn stars() -> Vec<Star> {
        vec![
            Star {
                pos: Vec2::new(10.0, 10.0),
                radius: 1.0,
            };
            3
        ]
    }

    #[test]
    fn test_paused_draws_background_only() {
        let mut session = Session::new(&GameConfig::default());
        session.phase = GamePhase::Paused;
        let mut sink = Recorder::default();
        run(&session, &stars(), &mut sink);

        assert_eq!(sink.rects.len(), 1);
        assert_eq!(sink.gradients, 1);
        assert_eq!(sink.circles, 3);
        assert!(sink.images.is_empty());
    }

    #[test]
    fn test_game_over_adds_overlay() {
        let mut session = Session::new(&GameConfig::default());
        session.phase = GamePhase::GameOver;
        let mut sink = Recorder::default();
        run(&session, &stars(), &mut sink);

        assert_eq!(sink.rects.len(), 2);
        assert_eq!(sink.rects[1].1, GAME_OVER_OVERLAY);
        assert!(sink.images.is_empty());
    }

    #[test]
    fn test_playing_draws_player_and_boss_unrotated() {
        let mut session = Session::new(&GameConfig::default());
        crate::world_setup::spawn_boss_ship(&mut session);
        let mut sink = Recorder::default();
        run(&session, &[], &mut sink);

        assert_eq!(sink.images[0], (AssetId::PlayerShip, 0.0));
        assert_eq!(sink.images[1], (AssetId::Boss, 0.0));
    }
}
