/// Every tunable of a session, with the classic browser values as defaults.

use crate::entities::Rgb;
use crate::error::ConfigError;

/// Milliseconds of one reference frame at 60 Hz.  Time-scaled motion moves
/// entities by `speed * delta / REFERENCE_FRAME_MS`.
pub const REFERENCE_FRAME_MS: f64 = 1000.0 / 60.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MotionMode {
    /// Fixed displacement per frame; speed depends on the refresh rate.
    PerFrame,
    /// Displacement scaled by elapsed time, normalised to a 60 Hz frame.
    TimeScaled,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    pub surface_width: f64,
    pub surface_height: f64,

    pub player_width: f64,
    pub player_height: f64,
    pub player_speed: f64,
    /// Gap between the player's bottom edge and the surface bottom at spawn.
    pub player_bottom_margin: f64,
    pub fire_interval_ms: f64,
    pub player_color: Rgb,

    pub bullet_width: f64,
    pub bullet_height: f64,
    pub bullet_speed: f64,
    pub bullet_color: Rgb,
    /// Height of the player's nose; bullets spawn this far above its top edge.
    pub nose_height: f64,

    pub enemy_width: f64,
    pub enemy_height: f64,
    pub enemy_min_speed: f64,
    pub enemy_max_speed: f64,
    pub enemy_hit_points: i32,
    pub enemy_color: Rgb,

    pub score_award: u32,
    pub starting_life: u32,

    pub spawn_interval_ms: f64,
    pub spawn_interval_step_ms: f64,
    pub spawn_interval_floor_ms: f64,

    pub motion: MotionMode,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            surface_width: 480.0,
            surface_height: 640.0,

            player_width: 50.0,
            player_height: 60.0,
            player_speed: 8.0,
            player_bottom_margin: 20.0,
            fire_interval_ms: 200.0,
            player_color: Rgb::from_hex(0x00ff00),

            bullet_width: 4.0,
            bullet_height: 10.0,
            bullet_speed: 10.0,
            bullet_color: Rgb::from_hex(0xffff00),
            nose_height: 10.0,

            enemy_width: 40.0,
            enemy_height: 50.0,
            enemy_min_speed: 2.0,
            enemy_max_speed: 5.0,
            enemy_hit_points: 1,
            enemy_color: Rgb::from_hex(0xff0000),

            score_award: 10,
            starting_life: 3,

            spawn_interval_ms: 1000.0,
            spawn_interval_step_ms: 10.0,
            spawn_interval_floor_ms: 500.0,

            motion: MotionMode::PerFrame,
        }
    }
}

impl GameConfig {
    /// Reject configurations the simulation cannot run on.
    pub fn validate(self) -> Result<Self, ConfigError> {
        let positives = [
            ("surface width", self.surface_width),
            ("surface height", self.surface_height),
            ("player width", self.player_width),
            ("player height", self.player_height),
            ("player speed", self.player_speed),
            ("fire interval", self.fire_interval_ms),
            ("bullet width", self.bullet_width),
            ("bullet height", self.bullet_height),
            ("bullet speed", self.bullet_speed),
            ("enemy width", self.enemy_width),
            ("enemy height", self.enemy_height),
            ("enemy minimum speed", self.enemy_min_speed),
            ("enemy hit points", self.enemy_hit_points as f64),
            ("spawn interval", self.spawn_interval_ms),
            ("spawn interval floor", self.spawn_interval_floor_ms),
        ];
        for (what, value) in positives {
            if !(value > 0.0) {
                return Err(ConfigError::NonPositive { what, value });
            }
        }

        let fits = [
            ("player", "width", self.player_width, self.surface_width),
            ("player", "height", self.player_height, self.surface_height),
            ("enemy", "width", self.enemy_width, self.surface_width),
        ];
        for (what, axis, size, surface) in fits {
            if size > surface {
                return Err(ConfigError::DoesNotFit { what, axis, size, surface });
            }
        }

        if self.enemy_max_speed <= self.enemy_min_speed {
            return Err(ConfigError::EmptySpeedRange {
                min: self.enemy_min_speed,
                max: self.enemy_max_speed,
            });
        }
        if self.spawn_interval_floor_ms > self.spawn_interval_ms {
            return Err(ConfigError::SpawnFloorAboveInitial {
                floor: self.spawn_interval_floor_ms,
                initial: self.spawn_interval_ms,
            });
        }
        if self.starting_life == 0 {
            return Err(ConfigError::NoStartingLife);
        }
        Ok(self)
    }

    /// Player spawn position: horizontally centred, resting above the bottom margin.
    pub fn player_spawn(&self) -> (f64, f64) {
        (
            self.surface_width / 2.0 - self.player_width / 2.0,
            self.surface_height - self.player_height - self.player_bottom_margin,
        )
    }

    /// Displacement factor applied to a per-frame speed for a frame of `delta_ms`.
    pub fn motion_scale(&self, delta_ms: f64) -> f64 {
        match self.motion {
            MotionMode::PerFrame => 1.0,
            MotionMode::TimeScaled => delta_ms.max(0.0) / REFERENCE_FRAME_MS,
        }
    }
}
