/// Frame description — what to draw, not how.
///
/// `frame` turns a `GameState` into an ordered list of primitive draw
/// commands in logical play-field units.  Hosts implement `Surface` to
/// rasterise those primitives onto whatever display they own.

use crate::entities::{Bullet, Enemy, GameState, Player, Star};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

// ── Colour palette ────────────────────────────────────────────────────────────

pub const C_BACKGROUND: Rgb = Rgb(0, 0, 0);
pub const C_STAR: Rgb = Rgb(255, 255, 255);
pub const C_PLAYER: Rgb = Rgb(0x34, 0x98, 0xdb);
pub const C_BULLET: Rgb = Rgb(0xf1, 0xc4, 0x0f);
pub const C_ENEMY: Rgb = Rgb(255, 255, 255);

/// Enemy glyphs are drawn at this height.
pub const ENEMY_FONT_SIZE: f32 = 30.0;

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear { color: Rgb },
    FillRect { x: f32, y: f32, w: f32, h: f32, color: Rgb },
    FillCircle { x: f32, y: f32, radius: f32, color: Rgb },
    FillPolygon { points: Vec<(f32, f32)>, color: Rgb },
    /// Text centred on `(x, y)` both horizontally and vertically.
    FillText { x: f32, y: f32, text: String, size: f32, color: Rgb },
}

/// A 2D target exposing the primitives `frame` emits.
pub trait Surface {
    fn clear(&mut self, color: Rgb);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgb);
    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Rgb);
    fn fill_polygon(&mut self, points: &[(f32, f32)], color: Rgb);
    fn fill_text(&mut self, x: f32, y: f32, text: &str, size: f32, color: Rgb);

    fn execute(&mut self, command: &DrawCommand) {
        match command {
            DrawCommand::Clear { color } => self.clear(*color),
            DrawCommand::FillRect { x, y, w, h, color } => self.fill_rect(*x, *y, *w, *h, *color),
            DrawCommand::FillCircle { x, y, radius, color } => {
                self.fill_circle(*x, *y, *radius, *color)
            }
            DrawCommand::FillPolygon { points, color } => self.fill_polygon(points, *color),
            DrawCommand::FillText { x, y, text, size, color } => {
                self.fill_text(*x, *y, text, *size, *color)
            }
        }
    }
}

// ── Public entry points ───────────────────────────────────────────────────────

/// Describe one complete frame.  Back to front: background, stars, player,
/// bullets, enemies.
pub fn frame(state: &GameState) -> Vec<DrawCommand> {
    let mut commands =
        Vec::with_capacity(2 + state.stars.len() + state.bullets.len() + state.enemies.len());

    commands.push(DrawCommand::Clear { color: C_BACKGROUND });
    commands.extend(state.stars.iter().map(star));
    commands.push(player(&state.player));
    commands.extend(state.bullets.iter().map(bullet));
    commands.extend(state.enemies.iter().map(enemy));

    commands
}

/// Render one complete frame onto `surface`.
pub fn paint<S: Surface + ?Sized>(surface: &mut S, state: &GameState) {
    for command in frame(state) {
        surface.execute(&command);
    }
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn star(s: &Star) -> DrawCommand {
    DrawCommand::FillCircle { x: s.x, y: s.y, radius: s.radius, color: C_STAR }
}

/// Upward-pointing triangle spanning the player's size.
fn player(p: &Player) -> DrawCommand {
    let half = p.size / 2.0;
    DrawCommand::FillPolygon {
        points: vec![
            (p.x, p.y - half),
            (p.x - half, p.y + half),
            (p.x + half, p.y + half),
        ],
        color: C_PLAYER,
    }
}

fn bullet(b: &Bullet) -> DrawCommand {
    DrawCommand::FillRect {
        x: b.x - b.width / 2.0,
        y: b.y,
        w: b.width,
        h: b.height,
        color: C_BULLET,
    }
}

fn enemy(e: &Enemy) -> DrawCommand {
    DrawCommand::FillText {
        x: e.x,
        y: e.y,
        text: e.kind.glyph().to_string(),
        size: ENEMY_FONT_SIZE,
        color: C_ENEMY,
    }
}
