//! Rendering layer — all terminal I/O lives here.
//!
//! Each function receives a mutable writer and an immutable view of the
//! game state.  No game logic is performed; this module only projects the
//! 800×600 world onto the terminal grid and translates state into
//! terminal commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};

use crate::entities::{GameState, GameStatus, Mode};
use crate::physics::{WORLD_H, WORLD_W};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_TITLE: Color = Color::Cyan;
const C_HUD_PRICE: Color = Color::Yellow;
const C_HUD_SCORE: Color = Color::White;
const C_HUD_AMMO: Color = Color::Magenta;
const C_PLATFORM: Color = Color::DarkGreen;
const C_PLAYER: Color = Color::Green;
const C_COLLECTOR: Color = Color::Red;
const C_BADGE: Color = Color::Yellow;
const C_LOAF: Color = Color::Yellow;
const C_HINT: Color = Color::DarkGrey;

/// First terminal row of the play area (row 0 is the HUD).
const PLAY_TOP: u16 = 1;

// ── Projection ────────────────────────────────────────────────────────────────

/// Map a world position onto a terminal cell inside the play area.
fn cell(x: f32, y: f32, cols: u16, rows: u16) -> (u16, u16) {
    let play_rows = rows.saturating_sub(PLAY_TOP + 1).max(1);
    let col = ((x / WORLD_W) * cols as f32) as u16;
    let row = PLAY_TOP + ((y / WORLD_H) * play_rows as f32) as u16;
    (col.min(cols.saturating_sub(1)), row.min(rows.saturating_sub(2)))
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    let (cols, rows) = terminal::size()?;

    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_hud(out, state, cols)?;
    draw_platforms(out, state, cols, rows)?;

    for loaf in &state.loaves {
        if !loaf.active {
            continue;
        }
        let (col, row) = cell(loaf.x, loaf.y, cols, rows);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(C_LOAF))?;
        out.queue(Print("»"))?;
    }

    for c in &state.collectors {
        let (col, row) = cell(c.x, c.y, cols, rows);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(C_COLLECTOR))?;
        out.queue(Print("▓"))?;
        if let Some(badge) = &c.badge {
            if row > PLAY_TOP {
                out.queue(cursor::MoveTo(col, row - 1))?;
                out.queue(style::SetForegroundColor(C_BADGE))?;
                out.queue(Print(badge.glyph))?;
            }
        }
    }

    let (col, row) = cell(state.player.x, state.player.y, cols, rows);
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(C_PLAYER))?;
    out.queue(Print("█"))?;

    draw_controls_hint(out, state, rows)?;

    if state.status == GameStatus::GameOver {
        draw_game_over(out, state, cols, rows)?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, state: &GameState, cols: u16) -> std::io::Result<()> {
    // Bread price, the whole point of the game, goes first
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_PRICE))?;
    out.queue(Print(format!("Ekmek: {} TL", state.bread_price)))?;

    let title = "ENFLASYON KAÇKINI";
    let tx = (cols / 2).saturating_sub(title.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(tx, 0))?;
    out.queue(style::SetForegroundColor(C_TITLE))?;
    out.queue(Print(title))?;

    let score_text = format!("Skor: {}", state.score);
    let rx = cols.saturating_sub(score_text.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(rx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(&score_text))?;

    if state.mode == Mode::Armed {
        let ammo_text = format!("Azık: {}/10", state.ammo);
        let ax = rx.saturating_sub(ammo_text.chars().count() as u16 + 3);
        out.queue(cursor::MoveTo(ax, 0))?;
        out.queue(style::SetForegroundColor(C_HUD_AMMO))?;
        out.queue(Print(&ammo_text))?;
    }

    Ok(())
}

// ── Stage ─────────────────────────────────────────────────────────────────────

fn draw_platforms<W: Write>(
    out: &mut W,
    state: &GameState,
    cols: u16,
    rows: u16,
) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(C_PLATFORM))?;
    for p in &state.platforms {
        let (c0, row) = cell(p.left(), p.top(), cols, rows);
        let (c1, _) = cell(p.right(), p.top(), cols, rows);
        out.queue(cursor::MoveTo(c0, row))?;
        out.queue(Print("▀".repeat((c1.saturating_sub(c0) as usize).max(1))))?;
    }
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, state: &GameState, rows: u16) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, rows.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    let hint = match state.mode {
        Mode::Chase => "← → / A D : Koş   ↑ / W : Zıpla   Q : Çık",
        Mode::Armed => "← → / A D : Koş   ↑ / W : Zıpla   BOŞLUK : Fırlat   Q : Çık",
    };
    out.queue(Print(hint))?;
    Ok(())
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(
    out: &mut W,
    state: &GameState,
    cols: u16,
    rows: u16,
) -> std::io::Result<()> {
    let caption = "  TAHSİLDARLAR YAKALADI!  ";
    let bar = "═".repeat(caption.chars().count());
    let lines: Vec<(String, Color)> = vec![
        (format!("╔{}╗", bar), Color::Red),
        (format!("║{}║", caption), Color::Red),
        (format!("╚{}╝", bar), Color::Red),
        (format!("Ekmek şimdi {} TL", state.bread_price), Color::Yellow),
        (format!("Skor: {}", state.score), Color::White),
        ("R - Menü   Q - Çık".to_string(), Color::DarkGrey),
    ];

    let cx = cols / 2;
    let start_row = (rows / 2).saturating_sub(lines.len() as u16 / 2);

    for (i, (msg, color)) in lines.iter().enumerate() {
        let row = start_row + i as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(msg))?;
    }

    Ok(())
}
