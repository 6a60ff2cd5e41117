//! Star Shooter — a small vertical arcade shooter.
//!
//! - `entities`: plain game data
//! - `input`: held-key tracking
//! - `compute`: pure per-frame simulation, spawning and collision
//! - `render`: state → draw commands, and the `Surface` they target
//! - `driver`: the frame loop state machine and the HUD seam
//! - `display`: crossterm implementation of `Surface` and `HudSink`
//! - `config`: tunables and command-line options

pub mod compute;
pub mod config;
pub mod display;
pub mod driver;
pub mod entities;
pub mod input;
pub mod render;
