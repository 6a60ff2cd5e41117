/// Rendering layer — all terminal I/O lives here.
///
/// `TerminalSurface` rasterises the logical 800×600 field onto a character
/// grid, `TerminalHud` keeps the HUD values, and `present` writes both to
/// the terminal.  No game logic is performed here.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::driver::HudSink;
use crate::render::{Rgb, Surface};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_LIVES: Color = Color::Red;
const C_HINT: Color = Color::DarkGrey;
const C_GAME_OVER: Color = Color::Red;

const BLANK: char = ' ';
const SOLID: char = '█';
/// Right half of a double-width glyph.  Never printed: the terminal fills
/// it when the glyph to its left is drawn.
pub const WIDE_TAIL: char = '\0';
const HEART: &str = "♥";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cell {
    pub ch: char,
    pub color: Rgb,
}

impl Cell {
    const EMPTY: Cell = Cell { ch: BLANK, color: Rgb(0, 0, 0) };
}

/// Character-cell surface.  Row 0 is the HUD, the last row holds the
/// controls hint, everything in between is play field.
pub struct TerminalSurface {
    logical_width: f32,
    logical_height: f32,
    cols: u16,
    rows: u16,
    cells: Vec<Cell>,
}

/// Last values pushed by the driver.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TerminalHud {
    pub score: u32,
    pub lives: u32,
    pub game_over: Option<u32>,
}

impl TerminalSurface {
    pub fn new(logical_width: f32, logical_height: f32, cols: u16, rows: u16) -> Self {
        let mut surface = TerminalSurface {
            logical_width,
            logical_height,
            cols: 0,
            rows: 0,
            cells: Vec::new(),
        };
        surface.resize(cols, rows);
        surface
    }

    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.cols = cols.max(1);
        self.rows = rows;
        self.cells = vec![Cell::EMPTY; self.cols as usize * self.field_rows() as usize];
    }

    /// Terminal rows available to the play field.
    pub fn field_rows(&self) -> u16 {
        self.rows.saturating_sub(2).max(1)
    }

    pub fn field_cols(&self) -> u16 {
        self.cols
    }

    pub fn cell(&self, col: u16, row: u16) -> Option<Cell> {
        if col < self.cols && row < self.field_rows() {
            Some(self.cells[row as usize * self.cols as usize + col as usize])
        } else {
            None
        }
    }

    // ── Coordinate mapping ───────────────────────────────────────────────────

    fn cell_w(&self) -> f32 {
        self.logical_width / self.cols as f32
    }

    fn cell_h(&self) -> f32 {
        self.logical_height / self.field_rows() as f32
    }

    /// Cell containing a logical point, if it is on the field.
    fn to_cell(&self, x: f32, y: f32) -> Option<(u16, u16)> {
        if x < 0.0 || y < 0.0 {
            return None;
        }
        let col = (x / self.cell_w()) as u32;
        let row = (y / self.cell_h()) as u32;
        if col < self.cols as u32 && row < self.field_rows() as u32 {
            Some((col as u16, row as u16))
        } else {
            None
        }
    }

    fn cell_center(&self, col: u16, row: u16) -> (f32, f32) {
        (
            (col as f32 + 0.5) * self.cell_w(),
            (row as f32 + 0.5) * self.cell_h(),
        )
    }

    /// Cells whose centres fall inside the logical box, clipped to the field.
    fn cells_in_box(&self, x0: f32, y0: f32, x1: f32, y1: f32) -> Vec<(u16, u16)> {
        let c0 = ((x0 / self.cell_w() - 0.5).ceil().max(0.0)) as u32;
        let r0 = ((y0 / self.cell_h() - 0.5).ceil().max(0.0)) as u32;
        let c1 = (x1 / self.cell_w() - 0.5).floor();
        let r1 = (y1 / self.cell_h() - 0.5).floor();
        if c1 < 0.0 || r1 < 0.0 {
            return Vec::new();
        }
        let c1 = (c1 as u32).min(self.cols as u32 - 1);
        let r1 = (r1 as u32).min(self.field_rows() as u32 - 1);

        let mut out = Vec::new();
        for row in r0..=r1 {
            for col in c0..=c1 {
                out.push((col as u16, row as u16));
            }
        }
        out
    }

    fn set(&mut self, col: u16, row: u16, ch: char, color: Rgb) {
        if col < self.cols && row < self.field_rows() {
            let idx = row as usize * self.cols as usize + col as usize;
            self.cells[idx] = Cell { ch, color };
        }
    }

    /// Plot the cells selected by `inside`; a shape smaller than one cell
    /// still shows up as `fallback` at its anchor.
    fn fill_where(
        &mut self,
        bounds: (f32, f32, f32, f32),
        anchor: (f32, f32),
        inside: impl Fn(f32, f32) -> bool,
        ch: char,
        fallback: char,
        color: Rgb,
    ) {
        let (x0, y0, x1, y1) = bounds;
        let hits: Vec<(u16, u16)> = self
            .cells_in_box(x0, y0, x1, y1)
            .into_iter()
            .filter(|&(c, r)| {
                let (cx, cy) = self.cell_center(c, r);
                inside(cx, cy)
            })
            .collect();

        if hits.is_empty() {
            if let Some((c, r)) = self.to_cell(anchor.0, anchor.1) {
                self.set(c, r, fallback, color);
            }
            return;
        }
        for (c, r) in hits {
            self.set(c, r, ch, color);
        }
    }
}

// ── Output ────────────────────────────────────────────────────────────────────

/// Write the field and HUD to the terminal.
pub fn present<W: Write>(
    out: &mut W,
    surface: &TerminalSurface,
    hud: &TerminalHud,
) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_field(out, surface)?;
    draw_hud(out, surface, hud)?;
    draw_controls_hint(out, surface)?;

    if let Some(final_score) = hud.game_over {
        draw_game_over(out, surface, final_score)?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, surface.rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

fn draw_field<W: Write>(out: &mut W, surface: &TerminalSurface) -> std::io::Result<()> {
    for row in 0..surface.field_rows() {
        for col in 0..surface.cols {
            let cell = surface.cells[row as usize * surface.cols as usize + col as usize];
            if cell.ch == BLANK || cell.ch == WIDE_TAIL {
                continue;
            }
            let Rgb(r, g, b) = cell.color;
            out.queue(cursor::MoveTo(col, row + 1))?;
            out.queue(style::SetForegroundColor(Color::Rgb { r, g, b }))?;
            out.queue(Print(cell.ch))?;
        }
    }
    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(
    out: &mut W,
    surface: &TerminalSurface,
    hud: &TerminalHud,
) -> std::io::Result<()> {
    // Score — left
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(score_text(hud.score)))?;

    // Lives — right
    let lives_text = lives_text(hud.lives);
    let rx = surface
        .cols
        .saturating_sub(lives_text.width() as u16 + 1);
    out.queue(cursor::MoveTo(rx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_LIVES))?;
    out.queue(Print(&lives_text))?;

    Ok(())
}

fn draw_controls_hint<W: Write>(out: &mut W, surface: &TerminalSurface) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, surface.rows.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("← → / A D : Move   SPACE : Shoot   Q : Quit"))?;
    Ok(())
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(
    out: &mut W,
    surface: &TerminalSurface,
    final_score: u32,
) -> std::io::Result<()> {
    let score_line = format!("Final Score: {:>6}", final_score);
    let lines: [(&str, Color); 5] = [
        ("╔════════════════════╗", C_GAME_OVER),
        ("║    GAME  OVER      ║", C_GAME_OVER),
        ("╚════════════════════╝", C_GAME_OVER),
        (score_line.as_str(), Color::Yellow),
        ("R - Play Again  Q - Quit", Color::White),
    ];

    let cx = surface.cols / 2;
    let start_row = (surface.rows / 2).saturating_sub(lines.len() as u16 / 2);

    for (i, (msg, color)) in lines.iter().enumerate() {
        let row = start_row + i as u16;
        let col = cx.saturating_sub(msg.width() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }

    Ok(())
}

pub fn score_text(score: u32) -> String {
    format!("Score: {}", score)
}

pub fn lives_text(lives: u32) -> String {
    format!("Lives: {}", HEART.repeat(lives as usize))
}

// ── Surface ───────────────────────────────────────────────────────────────────

impl Surface for TerminalSurface {
    fn clear(&mut self, _color: Rgb) {
        // The terminal background is the clear colour.
        self.cells.fill(Cell::EMPTY);
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgb) {
        let anchor = (x + w / 2.0, y + h / 2.0);
        let ch = if w < self.cell_w() { '│' } else { SOLID };
        self.fill_where((x, y, x + w, y + h), anchor, |_, _| true, ch, ch, color);
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Rgb) {
        let fallback = if radius >= 2.0 { '*' } else { '·' };
        self.fill_where(
            (x - radius, y - radius, x + radius, y + radius),
            (x, y),
            |cx, cy| (cx - x).powi(2) + (cy - y).powi(2) <= radius * radius,
            SOLID,
            fallback,
            color,
        );
    }

    fn fill_polygon(&mut self, points: &[(f32, f32)], color: Rgb) {
        if points.is_empty() {
            return;
        }
        let (mut x0, mut y0) = points[0];
        let (mut x1, mut y1) = points[0];
        for &(px, py) in points {
            x0 = x0.min(px);
            y0 = y0.min(py);
            x1 = x1.max(px);
            y1 = y1.max(py);
        }
        let n = points.len() as f32;
        let anchor = (
            points.iter().map(|p| p.0).sum::<f32>() / n,
            points.iter().map(|p| p.1).sum::<f32>() / n,
        );
        self.fill_where(
            (x0, y0, x1, y1),
            anchor,
            |cx, cy| point_in_polygon(points, cx, cy),
            SOLID,
            '▲',
            color,
        );
    }

    fn fill_text(&mut self, x: f32, y: f32, text: &str, _size: f32, color: Rgb) {
        let Some((col, row)) = self.to_cell(x, y) else {
            return;
        };
        let mut at = col.saturating_sub(text.width() as u16 / 2);
        for ch in text.chars() {
            let w = ch.width().unwrap_or(0) as u16;
            if w == 0 {
                continue;
            }
            // A wide glyph cut by the right edge would wrap; drop it.
            if at + w > self.cols {
                break;
            }
            self.set(at, row, ch, color);
            for tail in 1..w {
                self.set(at + tail, row, WIDE_TAIL, color);
            }
            at += w;
        }
    }
}

/// Even-odd crossing test.
fn point_in_polygon(points: &[(f32, f32)], x: f32, y: f32) -> bool {
    let mut inside = false;
    let mut j = points.len() - 1;
    for i in 0..points.len() {
        let (xi, yi) = points[i];
        let (xj, yj) = points[j];
        if (yi > y) != (yj > y) && x < (xj - xi) * (y - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}

// ── HUD sink ──────────────────────────────────────────────────────────────────

impl HudSink for TerminalHud {
    fn show_score(&mut self, score: u32) {
        self.score = score;
    }

    fn show_lives(&mut self, lives: u32) {
        self.lives = lives;
    }

    fn show_game_over(&mut self, final_score: u32) {
        self.game_over = Some(final_score);
    }

    fn hide_game_over(&mut self) {
        self.game_over = None;
    }
}
