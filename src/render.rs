/// Entity drawing.
///
/// Each function receives a surface and an immutable view of an entity.  No
/// game logic is performed; this module only translates state into drawing
/// primitives.

use crate::entities::{Bullet, EnemyPlane, PlayerPlane, SessionState};
use crate::surface::Surface;

/// Length of the enemy's tail below its body.
const TAIL_LENGTH: f64 = 10.0;
/// Inset of the tail's base from each side of the enemy body.
const TAIL_INSET: f64 = 10.0;

/// Render one complete frame of the playfield.
pub fn draw_frame<S: Surface>(surface: &mut S, state: &SessionState) {
    let (w, h) = (surface.width(), surface.height());
    surface.clear_rect(0.0, 0.0, w, h);

    draw_player(surface, &state.player);
    for bullet in &state.player.bullets {
        draw_bullet(surface, bullet);
    }
    for enemy in &state.enemies {
        draw_enemy(surface, enemy);
    }
}

pub fn draw_player<S: Surface>(surface: &mut S, player: &PlayerPlane) {
    surface.set_fill(player.color);
    surface.fill_rect(player.x, player.y, player.width, player.height);

    // Nose
    surface.begin_path();
    surface.move_to(player.x + player.width / 2.0, player.y - player.nose_height);
    surface.line_to(player.x, player.y);
    surface.line_to(player.x + player.width, player.y);
    surface.close_path();
    surface.fill();
}

pub fn draw_bullet<S: Surface>(surface: &mut S, bullet: &Bullet) {
    surface.set_fill(bullet.color);
    surface.fill_rect(bullet.x, bullet.y, bullet.width, bullet.height);
}

pub fn draw_enemy<S: Surface>(surface: &mut S, enemy: &EnemyPlane) {
    surface.set_fill(enemy.color);
    surface.fill_rect(enemy.x, enemy.y, enemy.width, enemy.height);

    // Tail
    let bottom = enemy.y + enemy.height;
    surface.begin_path();
    surface.move_to(enemy.x + enemy.width / 2.0, bottom + TAIL_LENGTH);
    surface.line_to(enemy.x + TAIL_INSET, bottom);
    surface.line_to(enemy.x + enemy.width - TAIL_INSET, bottom);
    surface.close_path();
    surface.fill();
}
