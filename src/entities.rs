/// All game entity types — pure data, no logic.

// ── Geometry & colour ─────────────────────────────────────────────────────────

/// Axis-aligned rectangle in surface pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    /// Build from a `0xRRGGBB` literal.
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
        }
    }
}

// ── Session status ────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    GameOver,
}

// ── Projectiles ───────────────────────────────────────────────────────────────

/// A player projectile.  Shape, colour and speed never change after firing.
#[derive(Clone, Debug, PartialEq)]
pub struct Bullet {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: Rgb,
    /// Upward displacement per frame.
    pub speed: f64,
}

impl Bullet {
    pub fn rect(&self) -> Rect {
        Rect { x: self.x, y: self.y, width: self.width, height: self.height }
    }
}

// ── Player & enemy ────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct PlayerPlane {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub speed: f64,
    pub color: Rgb,
    /// Height of the nose above the body; shots leave from its tip.
    pub nose_height: f64,
    /// Live bullets in firing order.
    pub bullets: Vec<Bullet>,
    /// Time accumulated towards the next automatic shot.
    pub since_last_shot_ms: f64,
}

impl PlayerPlane {
    pub fn rect(&self) -> Rect {
        Rect { x: self.x, y: self.y, width: self.width, height: self.height }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnemyPlane {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Downward displacement per frame.
    pub speed: f64,
    pub hit_points: i32,
    pub color: Rgb,
}

impl EnemyPlane {
    pub fn rect(&self) -> Rect {
        Rect { x: self.x, y: self.y, width: self.width, height: self.height }
    }
}

// ── Master session state ──────────────────────────────────────────────────────

/// The entire mutable bundle of one play session.  Cloneable so pure update
/// functions can return a new copy without mutating the original.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    pub player: PlayerPlane,
    pub enemies: Vec<EnemyPlane>,
    pub score: u32,
    pub life: u32,
    pub status: GameStatus,
    /// Time accumulated towards the next enemy spawn.
    pub since_last_spawn_ms: f64,
    pub spawn_interval_ms: f64,
    /// Score captured at the game-over transition.
    pub final_score: Option<u32>,
    pub frame: u64,
}

/// Something the display collaborators need to hear about.
#[derive(Clone, Debug, PartialEq)]
pub enum SessionEvent {
    ScoreChanged(u32),
    LifeChanged(u32),
    GameOver { final_score: u32 },
    EnemySpawned { next_interval_ms: f64 },
}

/// Result of advancing the session by one frame.
#[derive(Clone, Debug)]
pub struct FrameReport {
    pub state: SessionState,
    pub events: Vec<SessionEvent>,
}
