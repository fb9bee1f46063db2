#![allow(dead_code)]

use plane_shooter::config::GameConfig;
use plane_shooter::entities::{Bullet, EnemyPlane, Rgb};
use plane_shooter::hud::Hud;

use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HudCall {
    Score(u32),
    Life(u32),
    ShowGameOver(u32),
    HideGameOver,
}

/// HUD that remembers every write in order.
#[derive(Debug, Default)]
pub struct RecordingHud {
    pub calls: Vec<HudCall>,
}

impl Hud for RecordingHud {
    fn set_score(&mut self, score: u32) {
        self.calls.push(HudCall::Score(score));
    }

    fn set_life(&mut self, life: u32) {
        self.calls.push(HudCall::Life(life));
    }

    fn show_game_over(&mut self, final_score: u32) {
        self.calls.push(HudCall::ShowGameOver(final_score));
    }

    fn hide_game_over(&mut self) {
        self.calls.push(HudCall::HideGameOver);
    }
}

pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

pub fn enemy_at(x: f64, y: f64, speed: f64) -> EnemyPlane {
    EnemyPlane {
        x,
        y,
        width: 40.0,
        height: 50.0,
        speed,
        hit_points: 1,
        color: Rgb::from_hex(0xff0000),
    }
}

pub fn bullet_at(x: f64, y: f64) -> Bullet {
    Bullet {
        x,
        y,
        width: 4.0,
        height: 10.0,
        color: Rgb::from_hex(0xffff00),
        speed: 10.0,
    }
}

/// A one-column playfield where every falling enemy lines up with the
/// player and the guns never fire.
pub fn collision_course_config() -> GameConfig {
    GameConfig {
        surface_width: 50.0,
        fire_interval_ms: 1.0e9,
        spawn_interval_ms: 100.0,
        spawn_interval_step_ms: 10.0,
        spawn_interval_floor_ms: 50.0,
        starting_life: 1,
        ..GameConfig::default()
    }
}
