/// Rendering layer — all terminal I/O lives here.
///
/// The playfield is rasterised into a `PixelCanvas` by the library; this
/// module only samples that canvas onto the terminal grid (two vertical
/// pixels per cell with `▀`) and draws the HUD around it.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use plane_shooter::entities::Rgb;
use plane_shooter::hud::{Hud, HudValues};
use plane_shooter::surface::PixelCanvas;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_LIFE: Color = Color::Red;
const C_HINT: Color = Color::DarkGrey;

const HINT: &str = "← → ↑ ↓ / WASD : Move   R : Restart   Q : Quit";

// ── Terminal HUD ──────────────────────────────────────────────────────────────

/// Score, life and game-over panel as shown on the terminal.  Values are
/// stored on write and drawn with every frame.
#[derive(Debug, Default)]
pub struct TerminalHud {
    values: HudValues,
}

impl TerminalHud {
    pub fn values(&self) -> &HudValues {
        &self.values
    }
}

impl Hud for TerminalHud {
    fn set_score(&mut self, score: u32) {
        self.values.set_score(score);
    }

    fn set_life(&mut self, life: u32) {
        self.values.set_life(life);
    }

    fn show_game_over(&mut self, final_score: u32) {
        self.values.show_game_over(final_score);
    }

    fn hide_game_over(&mut self) {
        self.values.hide_game_over();
    }
}

// ── Layout ────────────────────────────────────────────────────────────────────

/// Where the canvas lands on the terminal: a block of cells between the HUD
/// row and the hint row, scaled to keep the canvas aspect ratio.
#[derive(Clone, Copy, Debug)]
struct Viewport {
    left: u16,
    top: u16,
    cols: u16,
    rows: u16,
}

impl Viewport {
    fn fit(canvas: &PixelCanvas, width: u16, height: u16) -> Self {
        let avail_cols = width.saturating_sub(2).max(1) as f64;
        let avail_rows = height.saturating_sub(4).max(1) as f64;
        let cw = canvas.pixel_width().max(1) as f64;
        let ch = canvas.pixel_height().max(1) as f64;

        // One cell is one pixel wide and two pixels tall.
        let scale = (avail_cols / cw).min(avail_rows * 2.0 / ch);
        let cols = ((cw * scale).floor() as u16).max(1);
        let rows = ((ch * scale / 2.0).floor() as u16).max(1);
        Self {
            left: (width.saturating_sub(cols)) / 2,
            top: 2,
            cols,
            rows,
        }
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(
    out: &mut W,
    canvas: &PixelCanvas,
    hud: &TerminalHud,
) -> std::io::Result<()> {
    let (width, height) = terminal::size()?;
    let view = Viewport::fit(canvas, width, height);

    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_hud(out, hud.values(), width)?;
    draw_border(out, &view)?;
    draw_playfield(out, canvas, &view)?;
    draw_controls_hint(out, height)?;

    if let Some(final_score) = hud.values().game_over {
        draw_game_over(out, final_score, width, height)?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, height.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, view: &Viewport) -> std::io::Result<()> {
    let w = view.cols as usize;
    let left = view.left.saturating_sub(1);
    let right = view.left + view.cols;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    out.queue(cursor::MoveTo(left, view.top - 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w))))?;

    out.queue(cursor::MoveTo(left, view.top + view.rows))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w))))?;

    for row in view.top..view.top + view.rows {
        out.queue(cursor::MoveTo(left, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(right, row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, hud: &HudValues, width: u16) -> std::io::Result<()> {
    // Score — left
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!("Score: {:>6}", hud.score)))?;

    // Life — right
    let hearts: String = "♥".repeat(hud.life as usize);
    let life_text = format!("Life: {} {}", hud.life, hearts);
    let rx = width.saturating_sub(life_text.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(rx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_LIFE))?;
    out.queue(Print(&life_text))?;

    Ok(())
}

// ── Playfield ─────────────────────────────────────────────────────────────────

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb { r: rgb.r, g: rgb.g, b: rgb.b }
}

/// Nearest-neighbour sample of the canvas at fractional cell coordinates.
fn sample(canvas: &PixelCanvas, fx: f64, fy: f64) -> Rgb {
    let x = (fx * canvas.pixel_width() as f64) as usize;
    let y = (fy * canvas.pixel_height() as f64) as usize;
    canvas.pixel(x, y).unwrap_or(Rgb::BLACK)
}

fn draw_playfield<W: Write>(
    out: &mut W,
    canvas: &PixelCanvas,
    view: &Viewport,
) -> std::io::Result<()> {
    let cols = view.cols as f64;
    let halves = view.rows as f64 * 2.0;
    let mut last: Option<(Rgb, Rgb)> = None;

    for row in 0..view.rows {
        out.queue(cursor::MoveTo(view.left, view.top + row))?;
        for col in 0..view.cols {
            let fx = (col as f64 + 0.5) / cols;
            let top = sample(canvas, fx, (row as f64 * 2.0 + 0.5) / halves);
            let bottom = sample(canvas, fx, (row as f64 * 2.0 + 1.5) / halves);

            if last != Some((top, bottom)) {
                out.queue(style::SetForegroundColor(to_color(top)))?;
                out.queue(style::SetBackgroundColor(to_color(bottom)))?;
                last = Some((top, bottom));
            }
            out.queue(Print('▀'))?;
        }
    }
    out.queue(style::ResetColor)?;
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, height: u16) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, height.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(HINT))?;
    Ok(())
}

// ── Game-over panel ───────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(
    out: &mut W,
    final_score: u32,
    width: u16,
    height: u16,
) -> std::io::Result<()> {
    let score_line = format!("Final Score: {}", final_score);
    let lines: &[(&str, Color)] = &[
        ("╔══════════════════╗", Color::Red),
        ("║    GAME  OVER    ║", Color::Red),
        ("╚══════════════════╝", Color::Red),
        (&score_line, Color::Yellow),
        ("R - Play Again  Q - Quit", Color::White),
    ];

    let cx = width / 2;
    let start_row = (height / 2).saturating_sub(lines.len() as u16 / 2);

    for (i, (msg, color)) in lines.iter().enumerate() {
        let row = start_row + i as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetBackgroundColor(Color::Black))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }

    Ok(())
}
