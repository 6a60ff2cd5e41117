/// Tunables and command-line options.
///
/// `Config` holds every number the simulation depends on so tests can build
/// a state without touching globals.  `Options` is what the terminal binary
/// reads from its arguments.

use std::time::Duration;

use clap::Parser;
use log::LevelFilter;

// ── Gameplay tunables ─────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Logical play-field size, independent of the host's resolution.
    pub width: f32,
    pub height: f32,

    pub player_size: f32,
    pub player_speed: f32,
    /// Distance from the bottom edge to the player's centre.
    pub player_bottom_offset: f32,

    pub bullet_speed: f32,
    pub bullet_width: f32,
    pub bullet_height: f32,
    /// Minimum milliseconds between two shots while fire is held.
    pub shoot_delay_ms: u64,

    /// Probability of a new enemy appearing on any given frame.
    pub spawn_chance: f64,
    pub enemy_size: f32,
    /// Enemy speeds are drawn from `enemy_min_speed..enemy_max_speed`.
    pub enemy_min_speed: f32,
    pub enemy_max_speed: f32,
    /// Enemies spawn this far above the top edge.
    pub enemy_spawn_y: f32,
    /// Horizontal inset kept free on each side when spawning.
    pub enemy_spawn_inset: f32,
    /// Enemies are purged once below `height + enemy_exit_margin`.
    pub enemy_exit_margin: f32,

    pub star_count: usize,
    pub starting_lives: u32,

    /// Host refresh interval.
    pub frame: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            width: 800.0,
            height: 600.0,
            player_size: 40.0,
            player_speed: 7.0,
            player_bottom_offset: 60.0,
            bullet_speed: 10.0,
            bullet_width: 4.0,
            bullet_height: 15.0,
            shoot_delay_ms: 300,
            spawn_chance: 0.02,
            enemy_size: 30.0,
            enemy_min_speed: 2.0,
            enemy_max_speed: 5.0,
            enemy_spawn_y: -40.0,
            enemy_spawn_inset: 20.0,
            enemy_exit_margin: 50.0,
            star_count: 100,
            starting_lives: 3,
            frame: Duration::from_millis(16), // ≈60 FPS
        }
    }
}

// ── Command-line options ──────────────────────────────────────────────────────

#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "star_shooter")]
#[command(
    about = "Vertical arcade shooter for the terminal",
    after_help = "Controls: ← → / A D move, SPACE fire, R restart after game over, Q quit"
)]
pub struct Options {
    /// Play a reproducible session; seeds from the OS when omitted
    #[arg(long)]
    pub seed: Option<u64>,
    /// Where to write the log
    #[arg(long, default_value = "star_shooter.log")]
    pub log_file: String,
    /// off, error, warn, info, debug or trace
    #[arg(long, default_value = "info", value_parser = parse_level)]
    pub log_level: LevelFilter,
}

fn parse_level(s: &str) -> Result<LevelFilter, String> {
    s.parse::<LevelFilter>()
        .map_err(|_| format!("unknown log level {:?}", s))
}
