use std::collections::HashMap;
use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::Instant;

use clap::Parser;
use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
        KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use log::{error, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use star_shooter::config::{Config, Options};
use star_shooter::display::{present, TerminalHud, TerminalSurface};
use star_shooter::driver::{LoopDriver, Schedule};
use star_shooter::input::{held_within, Control};

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until the player quits.
///
/// Input model: a `key_frame` map records the frame of the last press/repeat
/// event for every key.  Each frame the controls whose keys are still fresh
/// are written into the driver's input tracker before it steps, so Space and
/// a direction can be held together.  On keyboard-enhancement capable
/// terminals release events remove keys immediately; elsewhere they expire
/// after `input::HOLD_WINDOW` frames of silence.
fn game_loop<W: Write>(
    out: &mut W,
    driver: &mut LoopDriver<StdRng>,
    surface: &mut TerminalSurface,
    hud: &mut TerminalHud,
    rx: &mpsc::Receiver<Event>,
) -> std::io::Result<()> {
    let clock = Instant::now();
    let refresh = driver.config().frame;

    let mut key_frame: HashMap<KeyCode, u64> = HashMap::new();
    let mut frame: u64 = 0;
    let mut schedule = Schedule::NextFrame;

    driver.sync_hud(hud);

    loop {
        let frame_start = Instant::now();
        frame += 1;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            match ev {
                Event::Key(KeyEvent { code, kind, modifiers, .. }) => match kind {
                    KeyEventKind::Press => {
                        key_frame.insert(code, frame);
                        match code {
                            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                                info!("quit requested");
                                return Ok(());
                            }
                            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                                info!("interrupted");
                                return Ok(());
                            }
                            KeyCode::Char('r') | KeyCode::Char('R')
                                if schedule == Schedule::Stopped =>
                            {
                                schedule = driver.restart(hud);
                            }
                            _ => {}
                        }
                    }
                    KeyEventKind::Repeat => {
                        key_frame.insert(code, frame);
                    }
                    KeyEventKind::Release => {
                        key_frame.remove(&code);
                    }
                },
                Event::Resize(cols, rows) => {
                    info!("terminal resized to {}x{}", cols, rows);
                    surface.resize(cols, rows);
                }
                _ => {}
            }
        }

        for control in Control::ALL {
            let held = held_within(&key_frame, control, frame);
            driver.input_mut().set_held(control, held);
        }

        if schedule == Schedule::NextFrame {
            let now_ms = clock.elapsed().as_millis() as u64;
            schedule = driver.frame(now_ms, surface, hud);
        }

        present(out, surface, hud).map_err(|e| {
            error!("failed to draw frame {}: {}", frame, e);
            e
        })?;

        let elapsed = frame_start.elapsed();
        if elapsed < refresh {
            std::thread::sleep(refresh - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> std::io::Result<()> {
    let options = Options::parse();

    if let Err(e) = simple_logging::log_to_file(&options.log_file, options.log_level) {
        eprintln!("could not open log file {}: {}", options.log_file, e);
    }
    info!("Starting star_shooter.");

    let config = Config::default();
    let rng = match options.seed {
        Some(seed) => {
            info!("using seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode().map_err(|e| {
        error!("failed to enable raw mode: {}", e);
        e
    })?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();
    info!("keyboard enhancement: {}", keyboard_enhanced);

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(e) => {
                error!("input thread stopped: {}", e);
                break;
            }
        }
    });

    let result = run(&mut out, config, rng, &rx);
    if let Err(e) = &result {
        error!("game aborted: {}", e);
    }

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();
    info!("Exiting star_shooter.");

    result
}

fn run<W: Write>(
    out: &mut W,
    config: Config,
    rng: StdRng,
    rx: &mpsc::Receiver<Event>,
) -> std::io::Result<()> {
    let (cols, rows) = terminal::size()?;
    info!("terminal size {}x{}", cols, rows);

    let mut surface = TerminalSurface::new(config.width, config.height, cols, rows);
    let mut hud = TerminalHud::default();
    let mut driver = LoopDriver::new(config, rng);

    game_loop(out, &mut driver, &mut surface, &mut hud, rx)
}
