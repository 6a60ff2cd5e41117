//! Recording doubles for the `Surface` and `HudSink` seams.

#![allow(dead_code)]

use star_shooter::driver::HudSink;
use star_shooter::render::{DrawCommand, Rgb, Surface};

#[derive(Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
    pub frames: usize,
}

impl Surface for RecordingSurface {
    fn clear(&mut self, color: Rgb) {
        self.frames += 1;
        self.commands.push(DrawCommand::Clear { color });
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgb) {
        self.commands.push(DrawCommand::FillRect { x, y, w, h, color });
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Rgb) {
        self.commands.push(DrawCommand::FillCircle { x, y, radius, color });
    }

    fn fill_polygon(&mut self, points: &[(f32, f32)], color: Rgb) {
        self.commands.push(DrawCommand::FillPolygon { points: points.to_vec(), color });
    }

    fn fill_text(&mut self, x: f32, y: f32, text: &str, size: f32, color: Rgb) {
        self.commands.push(DrawCommand::FillText { x, y, text: text.to_string(), size, color });
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum HudEvent {
    Score(u32),
    Lives(u32),
    GameOver(u32),
    HideGameOver,
}

#[derive(Default)]
pub struct RecordingHud {
    pub events: Vec<HudEvent>,
}

impl HudSink for RecordingHud {
    fn show_score(&mut self, score: u32) {
        self.events.push(HudEvent::Score(score));
    }

    fn show_lives(&mut self, lives: u32) {
        self.events.push(HudEvent::Lives(lives));
    }

    fn show_game_over(&mut self, final_score: u32) {
        self.events.push(HudEvent::GameOver(final_score));
    }

    fn hide_game_over(&mut self) {
        self.events.push(HudEvent::HideGameOver);
    }
}
