//! Terminal key events → per-tick game input.
//!
//! Terminals report key presses, not key state.  The tracker records the
//! tick each key was last seen (press or repeat) and treats a key as held
//! while that is at most `HOLD_WINDOW` ticks old.  Terminals with keyboard
//! enhancement also send releases, which drop the key immediately.

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, ModifierKeyCode};

use crate::compute::{FireCommand, HeldKeys, TickInput};

/// A key stays held this many ticks after its last press/repeat event.
/// 8 ticks at 50 ticks/s (160 ms) outlasts the usual OS key-repeat gap.
pub const HOLD_WINDOW: u64 = 8;

#[derive(Debug, Default)]
pub struct KeyTracker {
    /// Each held key → the tick it was last seen.
    key_frame: HashMap<KeyCode, u64>,
    /// Last tick any event carried the Shift modifier.
    shift_frame: Option<u64>,
    /// A Shift key is physically down (enhanced terminals only).
    shift_down: bool,
}

/// Fold case so `W` and `w` are the same key.
fn normalize(code: KeyCode) -> KeyCode {
    match code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    }
}

fn is_shift_key(code: &KeyCode) -> bool {
    matches!(
        code,
        KeyCode::Modifier(ModifierKeyCode::LeftShift | ModifierKeyCode::RightShift)
    )
}

fn recent(seen: u64, frame: u64) -> bool {
    frame.saturating_sub(seen) <= HOLD_WINDOW
}

impl KeyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    fn is_held(&self, key: KeyCode, frame: u64) -> bool {
        self.key_frame
            .get(&key)
            .map(|&last| recent(last, frame))
            .unwrap_or(false)
    }

    fn boost_held(&self, frame: u64) -> bool {
        self.shift_down || self.shift_frame.map(|f| recent(f, frame)).unwrap_or(false)
    }

    /// Translate every event that arrived during tick `frame`.
    pub fn tick_input(&mut self, events: &[KeyEvent], frame: u64) -> TickInput {
        let mut input = TickInput::default();

        for event in events {
            let shifted = event.modifiers.contains(KeyModifiers::SHIFT)
                || matches!(event.code, KeyCode::Char(c) if c.is_ascii_uppercase());

            if is_shift_key(&event.code) {
                self.shift_down = event.kind != KeyEventKind::Release;
                continue;
            }

            let code = normalize(event.code);
            match event.kind {
                KeyEventKind::Release => {
                    self.key_frame.remove(&code);
                    continue;
                }
                KeyEventKind::Press | KeyEventKind::Repeat => {
                    self.key_frame.insert(code, frame);
                    if shifted {
                        self.shift_frame = Some(frame);
                    }
                }
            }

            // One-shot actions fire on the initial press only.
            if event.kind != KeyEventKind::Press {
                continue;
            }
            match code {
                KeyCode::Char('q') | KeyCode::Esc => input.quit = true,
                KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => {
                    input.quit = true
                }
                KeyCode::Char(' ') => {
                    let cmd = if shifted || self.boost_held(frame) {
                        FireCommand::Spread
                    } else {
                        FireCommand::Single
                    };
                    input.fire.push(cmd);
                }
                KeyCode::Char('f') => input.fire.push(FireCommand::Spread),
                _ => {}
            }
        }

        input.keys = HeldKeys {
            up: self.is_held(KeyCode::Up, frame) || self.is_held(KeyCode::Char('w'), frame),
            down: self.is_held(KeyCode::Down, frame) || self.is_held(KeyCode::Char('s'), frame),
            left: self.is_held(KeyCode::Left, frame) || self.is_held(KeyCode::Char('a'), frame),
            right: self.is_held(KeyCode::Right, frame)
                || self.is_held(KeyCode::Char('d'), frame),
            boost: self.boost_held(frame),
        };
        input
    }
}
