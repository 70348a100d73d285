//! Cleanup system: removes entities that have left the playfield.

use crate::session::Session;

/// Drop bullets outside the canvas, enemies and pickups past the left edge,
/// and rings wider than the canvas.
pub fn run(session: &mut Session) {
    let viewport = session.viewport;

    session
        .player
        .bullets
        .retain(|bullet| viewport.contains(bullet.pos));
    session
        .enemy_bullets
        .retain(|bullet| viewport.contains(bullet.pos));
    session
        .enemies
        .retain(|enemy| enemy.pos.x + enemy.size.x >= 0.0);
    session
        .pickups
        .retain(|pickup| pickup.pos.x + pickup.size >= 0.0);

    let reach = viewport.max_dimension();
    session.rings.retain(|ring| ring.radius <= reach);
}
