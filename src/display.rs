//! Rendering layer — all terminal I/O lives here.
//!
//! Each function receives a mutable writer and an immutable view of the
//! game state.  No game logic is performed; world rectangles are scaled onto
//! the terminal grid and drawn as glyphs.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};

use crate::entities::{
    Boss, Enemy, EndCause, Explosion, GameState, GameStatus, PlayerMode, Reaction,
};
use crate::geometry::Rect;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD: Color = Color::Yellow;
const C_PLAYER: Color = Color::White;
const C_PLAYER_HYPER: Color = Color::Magenta;
const C_BEAM: Color = Color::Cyan;
const C_ENEMY: [Color; 3] = [Color::Green, Color::DarkGreen, Color::DarkCyan];
const C_BOSS: Color = Color::Red;
const C_FLAME: Color = Color::DarkYellow;
const C_EXPLOSION: [Color; 2] = [Color::Yellow, Color::DarkRed];
const C_HINT: Color = Color::DarkGrey;

// ── Sprite tables ─────────────────────────────────────────────────────────────

/// Player glyph per facing, indexed by `Direction::index`.
pub const PLAYER_GLYPHS: [char; 8] = ['→', '↗', '↑', '↖', '←', '↙', '↓', '↘'];
const REACTION_SAD: &str = "(T_T)";
const REACTION_HAPPY: &str = "(^o^)";
const ENEMY_GLYPHS: [&str; 3] = ["«▼»", "(◎)", "}#{"];
const BOSS_ROWS: [&str; 3] = ["/▀▀▀▀▀\\", "█ ◉ ◉ █", "\\▄▄▄▄▄/"];
const BEAM_GLYPH: char = '•';
const FLAME_GLYPH: char = '✹';
const EXPLOSION_GLYPHS: [&str; 2] = ["✶✷✶", "✷✶✷"];

// ── World → terminal mapping ──────────────────────────────────────────────────

/// Maps world coordinates onto the play area inside the border.
#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    pub cols: u16,
    pub rows: u16,
    world_w: f32,
    world_h: f32,
}

impl Viewport {
    pub fn new(cols: u16, rows: u16, state: &GameState) -> Self {
        Viewport {
            cols,
            rows,
            world_w: state.width,
            world_h: state.height,
        }
    }

    /// Columns 1 .. cols-1 and rows 2 .. rows-2 hold the play area.
    fn area(&self) -> (f32, f32) {
        (
            self.cols.saturating_sub(2).max(1) as f32,
            self.rows.saturating_sub(4).max(1) as f32,
        )
    }

    /// Terminal cell for a world point, clamped into the play area.
    pub fn cell(&self, point: (f32, f32)) -> (u16, u16) {
        let (aw, ah) = self.area();
        let col = (point.0 / self.world_w * aw).clamp(0.0, aw - 1.0) as u16 + 1;
        let row = (point.1 / self.world_h * ah).clamp(0.0, ah - 1.0) as u16 + 2;
        (col, row)
    }

    /// Cell where a glyph string of `len` columns centred on `rect` starts.
    fn anchor(&self, rect: &Rect, len: usize) -> (u16, u16) {
        let (col, row) = self.cell(rect.center());
        let start = col.saturating_sub(len as u16 / 2).max(1);
        let max_start = self.cols.saturating_sub(1 + len as u16).max(1);
        (start.min(max_start), row)
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(
    out: &mut W,
    state: &GameState,
    cols: u16,
    rows: u16,
) -> std::io::Result<()> {
    let view = Viewport::new(cols, rows, state);
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_border(out, &view)?;
    draw_player(out, &view, state)?;
    for beam in &state.beams {
        draw_glyph(out, &view, &beam.rect, BEAM_GLYPH, C_BEAM)?;
    }
    for enemy in &state.enemies {
        draw_enemy(out, &view, enemy)?;
    }
    for explosion in &state.explosions {
        draw_explosion(out, &view, explosion)?;
    }
    for boss in &state.bosses {
        draw_boss(out, &view, boss)?;
    }
    for flame in &state.flames {
        draw_glyph(out, &view, &flame.rect, FLAME_GLYPH, C_FLAME)?;
    }
    draw_hud(out, &view, state)?;
    draw_controls_hint(out, &view)?;

    if let GameStatus::Ended(cause) = state.status {
        draw_game_over(out, &view, cause)?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, view: &Viewport) -> std::io::Result<()> {
    let w = view.cols as usize;
    let h = view.rows;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    out.queue(cursor::MoveTo(0, h.saturating_sub(2)))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    for row in 2..h.saturating_sub(2) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(view.cols.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, view: &Viewport, state: &GameState) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD))?;
    out.queue(Print(format!(
        "Tick:{:>6}  Boss:{}  Flames:{:>2}",
        state.frame,
        state.bosses.len(),
        state.flames.len()
    )))?;

    if state.player.mode == PlayerMode::Hyper {
        let tag = format!("[HYPER {:>3}]", state.player.hyper_life.max(0));
        let col = view.cols.saturating_sub(tag.chars().count() as u16 + 1);
        out.queue(cursor::MoveTo(col, 0))?;
        out.queue(style::SetForegroundColor(C_PLAYER_HYPER))?;
        out.queue(Print(tag))?;
    }
    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_glyph<W: Write>(
    out: &mut W,
    view: &Viewport,
    rect: &Rect,
    glyph: char,
    color: Color,
) -> std::io::Result<()> {
    let (col, row) = view.cell(rect.center());
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(glyph))?;
    Ok(())
}

fn draw_player<W: Write>(out: &mut W, view: &Viewport, state: &GameState) -> std::io::Result<()> {
    let p = &state.player;
    let color = match p.mode {
        PlayerMode::Hyper => C_PLAYER_HYPER,
        PlayerMode::Normal => C_PLAYER,
    };
    out.queue(style::SetForegroundColor(color))?;

    match p.reaction {
        Some(reaction) => {
            let face = match reaction {
                Reaction::Sad => REACTION_SAD,
                Reaction::Happy => REACTION_HAPPY,
            };
            let (col, row) = view.anchor(&p.rect, face.chars().count());
            out.queue(cursor::MoveTo(col, row))?;
            out.queue(Print(face))?;
        }
        None => {
            let (col, row) = view.cell(p.rect.center());
            out.queue(cursor::MoveTo(col, row))?;
            out.queue(Print(PLAYER_GLYPHS[p.direction.index()]))?;
        }
    }
    Ok(())
}

fn draw_enemy<W: Write>(out: &mut W, view: &Viewport, enemy: &Enemy) -> std::io::Result<()> {
    let v = enemy.variant as usize % ENEMY_GLYPHS.len();
    let sprite = ENEMY_GLYPHS[v];
    let (col, row) = view.anchor(&enemy.rect, sprite.chars().count());
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(C_ENEMY[v]))?;
    out.queue(Print(sprite))?;
    Ok(())
}

fn draw_boss<W: Write>(out: &mut W, view: &Viewport, boss: &Boss) -> std::io::Result<()> {
    let (col, row) = view.anchor(&boss.rect, BOSS_ROWS[0].chars().count());
    out.queue(style::SetForegroundColor(C_BOSS))?;
    let last_row = view.rows.saturating_sub(3);
    for (i, line) in BOSS_ROWS.iter().enumerate() {
        let r = (row + i as u16).saturating_sub(1);
        if r < 2 || r > last_row {
            continue;
        }
        out.queue(cursor::MoveTo(col, r))?;
        out.queue(Print(*line))?;
    }
    Ok(())
}

fn draw_explosion<W: Write>(
    out: &mut W,
    view: &Viewport,
    explosion: &Explosion,
) -> std::io::Result<()> {
    let frame = explosion.frame();
    let sprite = EXPLOSION_GLYPHS[frame];
    let (col, row) = view.anchor(&explosion.rect, sprite.chars().count());
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(C_EXPLOSION[frame]))?;
    out.queue(Print(sprite))?;
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, view: &Viewport) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, view.rows.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(
        "Arrows/WASD : Move   Shift : Boost   SPACE : Beam   Shift+SPACE/F : Spread   Q : Quit",
    ))?;
    Ok(())
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(out: &mut W, view: &Viewport, cause: EndCause) -> std::io::Result<()> {
    let message = match cause {
        EndCause::Defeated => "║     GAME  OVER     ║",
        EndCause::Quit => "║      GOODBYE       ║",
    };
    let lines = ["╔════════════════════╗", message, "╚════════════════════╝"];

    let cx = view.cols / 2;
    let start_row = (view.rows / 2).saturating_sub(lines.len() as u16 / 2);
    out.queue(style::SetForegroundColor(Color::Red))?;
    for (i, msg) in lines.iter().enumerate() {
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, start_row + i as u16))?;
        out.queue(Print(*msg))?;
    }
    Ok(())
}
