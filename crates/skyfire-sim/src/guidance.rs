//! Aiming and angle helpers.
//!
//! Pure functions with no state dependency: enemy shots aimed at the player,
//! the boss's radial volley, and the heading used to orient ship sprites.

use std::f32::consts::{FRAC_PI_4, TAU};

use glam::Vec2;

/// Velocity of magnitude `speed` pointing from `from` to `to`.
///
/// Coincident points yield a zero velocity instead of NaN.
pub fn aim(from: Vec2, to: Vec2, speed: f32) -> Vec2 {
    (to - from).normalize_or_zero() * speed
}

/// `count` velocities evenly spread around the circle, starting at angle 0
/// (pointing right) and turning toward +y.
pub fn radial_volley(count: u32, speed: f32) -> impl Iterator<Item = Vec2> {
    let step = TAU / count.max(1) as f32;
    (0..count).map(move |i| Vec2::from_angle(i as f32 * step) * speed)
}

/// Heading angle (radians) of a velocity, as `atan2(vy, vx)`.
pub fn heading(vel: Vec2) -> f32 {
    vel.y.atan2(vel.x)
}

/// Velocity of magnitude `speed` at 45 degrees off the forward axis.
/// `down` selects the lower diagonal (+y).
pub fn diagonal(speed: f32, down: bool) -> Vec2 {
    let component = speed * FRAC_PI_4.cos();
    Vec2::new(component, if down { component } else { -component })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aim_unit_speed() {
        let vel = aim(Vec2::ZERO, Vec2::new(3.0, 4.0), 5.0);
        assert!((vel - Vec2::new(3.0, 4.0)).length() < 1e-5);
    }

    #[test]
    fn test_aim_coincident_points() {
        assert_eq!(aim(Vec2::ONE, Vec2::ONE, 5.0), Vec2::ZERO);
    }

    #[test]
    fn test_radial_volley_24_at_15_degrees() {
        let shots: Vec<Vec2> = radial_volley(24, 7.0).collect();
        assert_eq!(shots.len(), 24);
        assert!((shots[0] - Vec2::new(7.0, 0.0)).length() < 1e-4);
        // 6 * 15 = 90 degrees: straight down the canvas.
        assert!((shots[6] - Vec2::new(0.0, 7.0)).length() < 1e-4);
        for shot in &shots {
            assert!((shot.length() - 7.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_diagonal_components() {
        let up = diagonal(10.0, false);
        let down = diagonal(10.0, true);
        assert!((up.length() - 10.0).abs() < 1e-4);
        assert!(up.y < 0.0 && down.y > 0.0);
        assert_eq!(up.x, down.x);
    }

    #[test]
    fn test_heading() {
        assert!((heading(Vec2::new(-3.0, 0.0)) - std::f32::consts::PI).abs() < 1e-6);
        assert!(heading(Vec2::new(1.0, 0.0)).abs() < 1e-6);
    }
}
