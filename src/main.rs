mod display;

use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::PathBuf;
use std::sync::{mpsc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use plane_shooter::config::{GameConfig, MotionMode};
use plane_shooter::game::Game;
use plane_shooter::input::KeyTracker;
use plane_shooter::surface::PixelCanvas;

use display::TerminalHud;

/// Vertical shooter: dodge or shoot down the planes coming from above.
#[derive(Debug, Parser)]
#[command(name = "plane_shooter", version)]
struct Cli {
    /// Playfield width in pixels
    #[arg(long, default_value_t = 480)]
    width: u32,

    /// Playfield height in pixels
    #[arg(long, default_value_t = 640)]
    height: u32,

    /// Lives at the start of each session
    #[arg(long, default_value_t = 3)]
    lives: u32,

    /// Seed for enemy placement; random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Scale motion by elapsed time instead of moving a fixed amount per frame
    #[arg(long)]
    time_scaled: bool,

    /// Display refresh rate driving the frame loop
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Write logs to this file (filtered by RUST_LOG, default `info`)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn game_config(&self) -> GameConfig {
        GameConfig {
            surface_width: self.width as f64,
            surface_height: self.height as f64,
            starting_life: self.lives,
            motion: if self.time_scaled {
                MotionMode::TimeScaled
            } else {
                MotionMode::PerFrame
            },
            ..GameConfig::default()
        }
    }

    fn refresh_period(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.fps.max(1) as f64)
    }
}

fn init_logging(path: Option<&PathBuf>) -> Result<()> {
    // The terminal belongs to the game; logs only go to a file.
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("creating log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Drive display refreshes until the player quits.
///
/// Each refresh drains pending input events, turns held movement keys into
/// the game's `InputState`, and fires the pending frame callback, if any.
fn game_loop<W: Write>(
    out: &mut W,
    game: &mut Game<TerminalHud, StdRng>,
    canvas: &mut PixelCanvas,
    rx: &mpsc::Receiver<Event>,
    refresh: Duration,
) -> Result<()> {
    let mut keys = KeyTracker::default();
    let started = Instant::now();
    let mut refresh_count: u64 = 0;

    game.restart();

    loop {
        let refresh_start = Instant::now();
        refresh_count += 1;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            let Event::Key(KeyEvent { code, kind, modifiers, .. }) = ev else {
                continue;
            };
            match kind {
                KeyEventKind::Press => {
                    keys.press(&code, refresh_count);
                    match code {
                        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Ok(()),
                        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                            return Ok(());
                        }
                        KeyCode::Char('r') | KeyCode::Char('R') => game.restart(),
                        _ => {}
                    }
                }
                KeyEventKind::Repeat => {
                    keys.press(&code, refresh_count);
                }
                KeyEventKind::Release => keys.release(&code),
            }
        }

        keys.sync(game.input_mut(), refresh_count);

        let now_ms = started.elapsed().as_secs_f64() * 1000.0;
        game.on_refresh(now_ms, canvas);

        display::render(out, canvas, game.hud())?;

        let elapsed = refresh_start.elapsed();
        if elapsed < refresh {
            thread::sleep(refresh - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.game_config();
    init_logging(cli.log_file.as_ref())?;

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    info!(seed = ?cli.seed, motion = ?config.motion, "starting");

    let mut game = Game::new(config, TerminalHud::default(), rng)
        .context("invalid game configuration")?;
    let mut canvas = PixelCanvas::new(cli.width as usize, cli.height as usize);

    let mut out = BufWriter::new(stdout());
    terminal::enable_raw_mode().context("enabling raw mode")?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Terminals without support fall back to the hold window.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the refresh loop never blocks on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // receiver dropped → program exiting
            }
        }
    });

    let result = game_loop(&mut out, &mut game, &mut canvas, &rx, cli.refresh_period());

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    let state = game.state();
    info!(score = state.score, frames = state.frame, "exiting");
    result
}
