//! Terminal front end: settings, logging, input thread and the tick loop.

use std::fs::OpenOptions;
use std::io::{stdout, BufWriter, Write};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{
        self, Event, KeyEvent, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use rand::thread_rng;

use bird_survivor::compute::{init_state, tick};
use bird_survivor::config::Settings;
use bird_survivor::display;
use bird_survivor::entities::{EndCause, GameStatus};
use bird_survivor::error::{GameError, Result};
use bird_survivor::input::KeyTracker;

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Run one session until the player quits or is hit.
///
/// Every tick drains whatever key events arrived, advances the simulation,
/// renders, then sleeps out the rest of the tick budget.
fn game_loop<W: Write>(
    out: &mut W,
    settings: &Settings,
    rx: &mpsc::Receiver<Event>,
) -> Result<GameStatus> {
    let mut rng = thread_rng();
    let mut tracker = KeyTracker::new();
    let mut state = init_state(settings);
    let budget = settings.tick_duration();

    log::info!(
        "session started: {}x{} world, {} ticks/s",
        settings.width,
        settings.height,
        settings.tick_rate
    );

    loop {
        let frame_start = Instant::now();

        // ── Drain all pending input events (non-blocking) ─────────────────────
        let mut events: Vec<KeyEvent> = Vec::new();
        while let Ok(ev) = rx.try_recv() {
            if let Event::Key(key) = ev {
                events.push(key);
            }
        }
        let input = tracker.tick_input(&events, state.frame);

        state = tick(&state, &input, settings, &mut rng);

        let (cols, rows) = terminal::size()?;
        display::render(out, &state, cols, rows)?;

        match state.status {
            GameStatus::Running => {}
            GameStatus::Ended(EndCause::Defeated) => {
                thread::sleep(Duration::from_millis(settings.defeat_pause_ms));
                return Ok(state.status);
            }
            GameStatus::Ended(EndCause::Quit) => return Ok(state.status),
        }

        let elapsed = frame_start.elapsed();
        if elapsed < budget {
            thread::sleep(budget - elapsed);
        }
    }
}

// ── Terminal setup / teardown ────────────────────────────────────────────────

/// Raw mode, alternate screen, hidden cursor.  Stops at the first failure;
/// `restore_terminal` undoes whatever part of this took effect.
fn enter_terminal<W: Write>(out: &mut W) -> Result<()> {
    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    Ok(())
}

fn restore_terminal<W: Write>(out: &mut W, keyboard_enhanced: bool) {
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();
}

// ── Logging ──────────────────────────────────────────────────────────────────

/// Log file used when `RUST_LOG` is set and `LOG_FILE_ENV` is not.
const DEFAULT_LOG_FILE: &str = "bird_survivor.log";
const LOG_FILE_ENV: &str = "BIRD_SURVIVOR_LOG";

/// The game owns the terminal, so log lines go to a file instead of stderr.
/// Without `RUST_LOG` no logger is installed at all.
fn init_logging() -> Result<()> {
    if std::env::var_os("RUST_LOG").is_none() {
        return Ok(());
    }
    let path = std::env::var_os(LOG_FILE_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|source| GameError::LogOpen { path, source })?;
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_logging()?;
    let settings = Settings::load()?;

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    let mut keyboard_enhanced = false;
    let result = enter_terminal(&mut out).and_then(|()| {
        // Key-release events let held keys drop immediately and make Shift
        // visible on its own.  Other terminals fall back to the hold window.
        keyboard_enhanced = out
            .execute(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::REPORT_EVENT_TYPES
                    | KeyboardEnhancementFlags::REPORT_ALL_KEYS_AS_ESCAPE_CODES,
            ))
            .is_ok();

        // Dedicate a thread exclusively to blocking event reads, sending them
        // through a channel so the game loop never has to block on I/O.
        let (tx, rx) = mpsc::channel::<Event>();
        thread::spawn(move || loop {
            match event::read() {
                Ok(ev) => {
                    if tx.send(ev).is_err() {
                        break;
                    }
                }
                Err(err) => {
                    log::error!("terminal event read failed: {err}");
                    break;
                }
            }
        });

        game_loop(&mut out, &settings, &rx)
    });

    // Always restore the terminal, even when setup failed partway
    restore_terminal(&mut out, keyboard_enhanced);

    let status = result?;
    log::info!("session over: {:?}", status);
    Ok(())
}
