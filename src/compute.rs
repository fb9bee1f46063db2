/// Pure game-logic functions.
///
/// Every public function takes immutable references to the current state
/// (and, where needed, an RNG handle) and returns brand-new values.  The one
/// exception is `check_hit`, which consumes a bullet in place exactly like the
/// frame step needs it to.  Side effects are limited to the injected RNG.

use rand::Rng;

use crate::config::GameConfig;
use crate::entities::{
    Bullet, EnemyPlane, FrameReport, GameStatus, PlayerPlane, Rect, SessionEvent, SessionState,
};
use crate::input::{InputAction, InputState};

// ── Geometry ─────────────────────────────────────────────────────────────────

/// Open-interval overlap on both axes: rectangles that merely touch do not collide.
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.x < b.x + b.width && a.x + a.width > b.x && a.y < b.y + b.height && a.y + a.height > b.y
}

// ── Constructors ─────────────────────────────────────────────────────────────

pub fn new_player(config: &GameConfig) -> PlayerPlane {
    let (x, y) = config.player_spawn();
    PlayerPlane {
        x,
        y,
        width: config.player_width,
        height: config.player_height,
        speed: config.player_speed,
        color: config.player_color,
        nose_height: config.nose_height,
        bullets: Vec::new(),
        since_last_shot_ms: 0.0,
    }
}

/// Build the initial session: full life, no enemies, initial spawn interval.
pub fn new_session(config: &GameConfig) -> SessionState {
    SessionState {
        player: new_player(config),
        enemies: Vec::new(),
        score: 0,
        life: config.starting_life,
        status: GameStatus::Running,
        since_last_spawn_ms: 0.0,
        spawn_interval_ms: config.spawn_interval_ms,
        final_score: None,
        frame: 0,
    }
}

/// Restarting discards everything and starts from the initial session.
pub fn restart(config: &GameConfig) -> SessionState {
    new_session(config)
}

// ── Player & bullets ─────────────────────────────────────────────────────────

/// Apply held direction keys, clamped to the visible area on all four edges.
pub fn move_player(
    player: &PlayerPlane,
    input: &InputState,
    scale: f64,
    config: &GameConfig,
) -> PlayerPlane {
    let step = player.speed * scale;
    let mut dx = 0.0;
    let mut dy = 0.0;
    if input.is_pressed(InputAction::MoveLeft) {
        dx -= step;
    }
    if input.is_pressed(InputAction::MoveRight) {
        dx += step;
    }
    if input.is_pressed(InputAction::MoveUp) {
        dy -= step;
    }
    if input.is_pressed(InputAction::MoveDown) {
        dy += step;
    }
    let max_x = (config.surface_width - player.width).max(0.0);
    let max_y = (config.surface_height - player.height).max(0.0);
    PlayerPlane {
        x: (player.x + dx).clamp(0.0, max_x),
        y: (player.y + dy).clamp(0.0, max_y),
        ..player.clone()
    }
}

/// A new bullet centred on the tip of the player's nose.
pub fn fire_bullet(player: &PlayerPlane, config: &GameConfig) -> Bullet {
    Bullet {
        x: player.x + player.width / 2.0 - config.bullet_width / 2.0,
        y: player.y - player.nose_height,
        width: config.bullet_width,
        height: config.bullet_height,
        color: config.bullet_color,
        speed: config.bullet_speed,
    }
}

pub fn advance_bullet(bullet: &Bullet, scale: f64) -> Bullet {
    Bullet {
        y: bullet.y - bullet.speed * scale,
        ..bullet.clone()
    }
}

/// Bullets live until they have fully left through the top edge.
pub fn bullet_visible(bullet: &Bullet) -> bool {
    bullet.y > -bullet.height
}

/// Move the player, fire if the shot timer has come due, then advance and
/// cull every bullet.  A new shot moves on the frame it is fired, so it first
/// shows one bullet step above the nose tip.
pub fn update_player(
    player: &PlayerPlane,
    delta_ms: f64,
    input: &InputState,
    config: &GameConfig,
) -> PlayerPlane {
    let scale = config.motion_scale(delta_ms);
    let moved = move_player(player, input, scale, config);

    let mut bullets = moved.bullets.clone();
    let mut since_last_shot_ms = moved.since_last_shot_ms + delta_ms;
    if since_last_shot_ms >= config.fire_interval_ms {
        bullets.push(fire_bullet(&moved, config));
        since_last_shot_ms = 0.0;
    }

    let bullets = bullets
        .iter()
        .map(|b| advance_bullet(b, scale))
        .filter(bullet_visible)
        .collect();

    PlayerPlane {
        bullets,
        since_last_shot_ms,
        ..moved
    }
}

// ── Enemies ──────────────────────────────────────────────────────────────────

/// A new enemy just above the top edge, at a random column and speed.
pub fn spawn_enemy(config: &GameConfig, rng: &mut impl Rng) -> EnemyPlane {
    let max_x = (config.surface_width - config.enemy_width).max(0.0);
    EnemyPlane {
        x: rng.gen_range(0.0..=max_x),
        y: -config.enemy_height,
        width: config.enemy_width,
        height: config.enemy_height,
        speed: rng.gen_range(config.enemy_min_speed..config.enemy_max_speed),
        hit_points: config.enemy_hit_points,
        color: config.enemy_color,
    }
}

pub fn advance_enemy(enemy: &EnemyPlane, scale: f64) -> EnemyPlane {
    EnemyPlane {
        y: enemy.y + enemy.speed * scale,
        ..enemy.clone()
    }
}

/// Consume the first bullet (in list order) overlapping `enemy` and take one
/// hit point.  Returns `true` once the enemy has no hit points left.
pub fn check_hit(enemy: &mut EnemyPlane, bullets: &mut Vec<Bullet>) -> bool {
    let target = enemy.rect();
    match bullets.iter().position(|b| overlaps(&b.rect(), &target)) {
        Some(index) => {
            bullets.remove(index);
            enemy.hit_points -= 1;
            enemy.hit_points <= 0
        }
        None => false,
    }
}

/// Shorten the spawn interval by one step, never below the floor.
pub fn next_spawn_interval(current_ms: f64, config: &GameConfig) -> f64 {
    (current_ms - config.spawn_interval_step_ms).max(config.spawn_interval_floor_ms)
}

// ── Per-frame step (nearly pure — RNG is injected) ───────────────────────────

/// Advance a running session by one frame of `delta_ms`.
///
/// Order: spawn timer, player (and its bullets), then every enemy exactly
/// once in collection order: move, bullet hit, player collision, bottom
/// edge.  Once life runs out the remaining enemies are kept as they are and
/// the session is over.  A finished session is returned unchanged.
pub fn step(
    state: &SessionState,
    delta_ms: f64,
    input: &InputState,
    config: &GameConfig,
    rng: &mut impl Rng,
) -> FrameReport {
    let mut state = state.clone();
    let mut events = Vec::new();
    if state.status == GameStatus::GameOver {
        return FrameReport { state, events };
    }
    state.frame += 1;

    // ── 1. Spawn timer ───────────────────────────────────────────────────────
    state.since_last_spawn_ms += delta_ms;
    if state.since_last_spawn_ms >= state.spawn_interval_ms {
        state.enemies.push(spawn_enemy(config, rng));
        state.since_last_spawn_ms = 0.0;
        state.spawn_interval_ms = next_spawn_interval(state.spawn_interval_ms, config);
        events.push(SessionEvent::EnemySpawned {
            next_interval_ms: state.spawn_interval_ms,
        });
    }

    // ── 2. Player & bullets ──────────────────────────────────────────────────
    state.player = update_player(&state.player, delta_ms, input, config);

    // ── 3. Enemies ───────────────────────────────────────────────────────────
    let scale = config.motion_scale(delta_ms);
    let mut pending = std::mem::take(&mut state.enemies).into_iter();
    let mut kept = Vec::with_capacity(pending.len());

    for enemy in pending.by_ref() {
        let mut enemy = advance_enemy(&enemy, scale);

        if check_hit(&mut enemy, &mut state.player.bullets) {
            state.score += config.score_award;
            events.push(SessionEvent::ScoreChanged(state.score));
            continue;
        }

        if overlaps(&enemy.rect(), &state.player.rect()) {
            state.life = state.life.saturating_sub(1);
            events.push(SessionEvent::LifeChanged(state.life));
            if state.life == 0 {
                state.status = GameStatus::GameOver;
                state.final_score = Some(state.score);
                events.push(SessionEvent::GameOver { final_score: state.score });
                // Enemies after this one are kept as they were, neither moved nor checked.
                break;
            }
            continue;
        }

        if enemy.y >= config.surface_height {
            continue;
        }
        kept.push(enemy);
    }

    kept.extend(pending);
    state.enemies = kept;

    FrameReport { state, events }
}
