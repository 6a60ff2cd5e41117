/// Frame loop state machine.
///
/// The host calls `frame` once per display refresh for as long as it keeps
/// getting `Schedule::NextFrame` back.  Once the last life is lost the driver
/// answers `Schedule::Stopped` and ignores further frames until `restart`.

use log::info;
use rand::Rng;

use crate::compute::{init_state, restart, tick};
use crate::config::Config;
use crate::entities::{GameState, GameStatus};
use crate::input::InputTracker;
use crate::render::{paint, Surface};

/// What the host should do after a call into the driver.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Schedule {
    /// Invoke `frame` again on the next refresh.
    NextFrame,
    /// Stop calling `frame` until the game is restarted.
    Stopped,
}

/// Presentation of score, lives and the game-over overlay.  Called only when
/// the displayed value actually changes.
pub trait HudSink {
    fn show_score(&mut self, score: u32);
    /// Rendered as `lives` repeated icons.
    fn show_lives(&mut self, lives: u32);
    fn show_game_over(&mut self, final_score: u32);
    fn hide_game_over(&mut self);
}

pub struct LoopDriver<R: Rng> {
    config: Config,
    state: GameState,
    input: InputTracker,
    rng: R,
    scheduled: bool,
}

impl<R: Rng> LoopDriver<R> {
    pub fn new(config: Config, mut rng: R) -> Self {
        let state = init_state(&config, &mut rng);
        LoopDriver::with_state(config, state, rng)
    }

    /// Resume from an explicit state, e.g. a hand-built scenario.
    pub fn with_state(config: Config, state: GameState, rng: R) -> Self {
        let scheduled = state.status == GameStatus::Running;
        LoopDriver {
            config,
            state,
            input: InputTracker::new(),
            rng,
            scheduled,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn input(&self) -> &InputTracker {
        &self.input
    }

    /// Input events land here between frames.
    pub fn input_mut(&mut self) -> &mut InputTracker {
        &mut self.input
    }

    pub fn is_scheduled(&self) -> bool {
        self.scheduled
    }

    /// Push the current score and lives to the HUD, e.g. right after startup.
    pub fn sync_hud<H: HudSink + ?Sized>(&self, hud: &mut H) {
        hud.show_score(self.state.score);
        hud.show_lives(self.state.lives);
    }

    /// One display refresh: update, then render.  Does nothing once stopped.
    pub fn frame<S, H>(&mut self, now_ms: u64, surface: &mut S, hud: &mut H) -> Schedule
    where
        S: Surface + ?Sized,
        H: HudSink + ?Sized,
    {
        if !self.scheduled || !self.state.is_running() {
            return Schedule::Stopped;
        }

        let input = self.input.snapshot();
        let next = tick(&self.state, &input, &self.config, now_ms, &mut self.rng);
        let score_changed = next.score != self.state.score;
        let lives_changed = next.lives != self.state.lives;
        self.state = next;

        paint(surface, &self.state);

        if score_changed {
            hud.show_score(self.state.score);
        }
        if lives_changed {
            hud.show_lives(self.state.lives);
        }

        if self.state.status == GameStatus::GameOver {
            let final_score = self.state.final_score.unwrap_or(self.state.score);
            hud.show_game_over(final_score);
            self.scheduled = false;
            return Schedule::Stopped;
        }
        Schedule::NextFrame
    }

    /// Reset the session and re-arm the loop.  Safe to call in any state.
    pub fn restart<H: HudSink + ?Sized>(&mut self, hud: &mut H) -> Schedule {
        self.state = restart(&self.state, &self.config);
        self.scheduled = true;
        info!("session restarted");

        hud.show_score(self.state.score);
        hud.show_lives(self.state.lives);
        hud.hide_game_over();
        Schedule::NextFrame
    }
}
