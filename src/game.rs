/// Frame-driven game controller.
///
/// `Game` owns the session and wires the pure `compute::step` to the outside
/// world: it measures frame deltas, forwards session events to the HUD,
/// draws onto a `Surface`, and keeps exactly one frame callback pending
/// while the session is running.

use rand::Rng;
use tracing::{debug, info, trace};

use crate::compute;
use crate::config::GameConfig;
use crate::entities::{GameStatus, SessionEvent, SessionState};
use crate::error::ConfigError;
use crate::hud::Hud;
use crate::input::InputState;
use crate::render;
use crate::surface::Surface;

// ── Frame scheduling ─────────────────────────────────────────────────────────

/// Identifies one requested frame callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameHandle(u64);

/// Per-refresh callback slot.  The host's refresh loop calls `take_due` once
/// per display refresh and runs the frame if one was requested.  There is a
/// single slot, so a new request supersedes an older one.
#[derive(Debug, Default)]
pub struct FrameScheduler {
    next_id: u64,
    pending: Option<FrameHandle>,
}

impl FrameScheduler {
    pub fn request(&mut self) -> FrameHandle {
        self.next_id += 1;
        let handle = FrameHandle(self.next_id);
        self.pending = Some(handle);
        handle
    }

    /// Cancel `handle` if it is still pending.  Stale handles are ignored.
    pub fn cancel(&mut self, handle: FrameHandle) {
        if self.pending == Some(handle) {
            self.pending = None;
        }
    }

    pub fn take_due(&mut self) -> Option<FrameHandle> {
        self.pending.take()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

// ── Controller ───────────────────────────────────────────────────────────────

pub struct Game<H: Hud, R: Rng> {
    config: GameConfig,
    state: SessionState,
    input: InputState,
    hud: H,
    rng: R,
    scheduler: FrameScheduler,
    last_time_ms: Option<f64>,
}

impl<H: Hud, R: Rng> Game<H, R> {
    /// An idle game: nothing is scheduled until `restart` is called.
    /// Fails if `config` does not pass `GameConfig::validate`.
    pub fn new(config: GameConfig, hud: H, rng: R) -> Result<Self, ConfigError> {
        let config = config.validate()?;
        let state = compute::new_session(&config);
        Ok(Self {
            config,
            state,
            input: InputState::default(),
            hud,
            rng,
            scheduler: FrameScheduler::default(),
            last_time_ms: None,
        })
    }

    /// Start or restart the session.  Any pending frame is cancelled first
    /// so only one loop is ever live.
    pub fn restart(&mut self) {
        if let Some(handle) = self.scheduler.take_due() {
            debug!(?handle, "cancelled pending frame");
        }

        self.state = compute::restart(&self.config);
        self.last_time_ms = None;

        self.hud.set_score(self.state.score);
        self.hud.set_life(self.state.life);
        self.hud.hide_game_over();

        self.scheduler.request();
        info!(life = self.state.life, "session started");
    }

    /// Host refresh hook: runs the pending frame, if any.  Returns whether a
    /// frame ran.
    pub fn on_refresh<S: Surface>(&mut self, now_ms: f64, surface: &mut S) -> bool {
        if self.scheduler.take_due().is_none() {
            return false;
        }
        self.run_frame(now_ms, surface);
        true
    }

    /// One frame: step the session, notify the HUD, redraw, and schedule the
    /// next frame while still running.  The first frame after a restart
    /// sees a zero delta.
    pub fn run_frame<S: Surface>(&mut self, now_ms: f64, surface: &mut S) {
        if self.state.status == GameStatus::GameOver {
            return;
        }

        let delta_ms = match self.last_time_ms {
            Some(last) => (now_ms - last).max(0.0),
            None => 0.0,
        };
        self.last_time_ms = Some(now_ms);

        let report = compute::step(&self.state, delta_ms, &self.input, &self.config, &mut self.rng);
        self.state = report.state;
        trace!(frame = self.state.frame, delta_ms, enemies = self.state.enemies.len(), "frame");

        for event in &report.events {
            self.dispatch(event);
        }

        render::draw_frame(surface, &self.state);

        if self.state.status == GameStatus::Running {
            self.scheduler.request();
        }
    }

    fn dispatch(&mut self, event: &SessionEvent) {
        match event {
            SessionEvent::ScoreChanged(score) => self.hud.set_score(*score),
            SessionEvent::LifeChanged(life) => {
                debug!(life, "player hit");
                self.hud.set_life(*life);
            }
            SessionEvent::GameOver { final_score } => {
                info!(final_score, frames = self.state.frame, "game over");
                self.hud.show_game_over(*final_score);
            }
            SessionEvent::EnemySpawned { next_interval_ms } => {
                debug!(next_interval_ms, "enemy spawned");
            }
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn input_mut(&mut self) -> &mut InputState {
        &mut self.input
    }

    pub fn hud(&self) -> &H {
        &self.hud
    }

    pub fn is_frame_pending(&self) -> bool {
        self.scheduler.is_pending()
    }

    pub fn is_game_over(&self) -> bool {
        self.state.status == GameStatus::GameOver
    }
}
