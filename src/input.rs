/// Keyboard → movement-action mapping.
///
/// Game logic only ever sees an `InputState`: one boolean per recognised
/// action.  Raw key codes are translated here and anything unrecognised is
/// dropped on the floor.

use std::collections::HashMap;

use crossterm::event::KeyCode;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputAction {
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
}

impl InputAction {
    pub const ALL: [InputAction; 4] = [
        InputAction::MoveLeft,
        InputAction::MoveRight,
        InputAction::MoveUp,
        InputAction::MoveDown,
    ];

    fn index(self) -> usize {
        match self {
            InputAction::MoveLeft => 0,
            InputAction::MoveRight => 1,
            InputAction::MoveUp => 2,
            InputAction::MoveDown => 3,
        }
    }
}

/// Pressed/released flag for every `InputAction`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputState {
    pressed: [bool; 4],
}

impl InputState {
    pub fn set(&mut self, action: InputAction, pressed: bool) {
        self.pressed[action.index()] = pressed;
    }

    pub fn is_pressed(&self, action: InputAction) -> bool {
        self.pressed[action.index()]
    }

    pub fn clear(&mut self) {
        self.pressed = [false; 4];
    }
}

/// Arrow keys and WASD (either case).
pub fn action_for_key(code: &KeyCode) -> Option<InputAction> {
    match code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(InputAction::MoveLeft),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(InputAction::MoveRight),
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(InputAction::MoveUp),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(InputAction::MoveDown),
        _ => None,
    }
}

// ── Held-key tracking ─────────────────────────────────────────────────────────

/// A key is considered "held" if its last press/repeat event arrived within
/// this many frames.  Covers terminals that don't emit key-release events:
/// OS key repeat refreshes the key well before the window expires.
pub const DEFAULT_HOLD_WINDOW: u64 = 4;

/// Records the frame each movement key was last seen on.
///
/// Works on two classes of terminal:
/// * **Keyboard-enhancement capable**: proper `Release` events remove keys
///   immediately.
/// * **Classic terminals**: only repeated `Press` events arrive; keys expire
///   after `hold_window` frames of silence.
#[derive(Debug)]
pub struct KeyTracker {
    last_seen: HashMap<InputAction, u64>,
    hold_window: u64,
}

impl Default for KeyTracker {
    fn default() -> Self {
        Self::new(DEFAULT_HOLD_WINDOW)
    }
}

impl KeyTracker {
    pub fn new(hold_window: u64) -> Self {
        Self { last_seen: HashMap::new(), hold_window }
    }

    /// Press or repeat.  Returns the action if the key is a movement key.
    pub fn press(&mut self, code: &KeyCode, frame: u64) -> Option<InputAction> {
        let action = action_for_key(code)?;
        self.last_seen.insert(action, frame);
        Some(action)
    }

    pub fn release(&mut self, code: &KeyCode) {
        if let Some(action) = action_for_key(code) {
            self.last_seen.remove(&action);
        }
    }

    pub fn is_held(&self, action: InputAction, frame: u64) -> bool {
        self.last_seen
            .get(&action)
            .map(|&last| frame.saturating_sub(last) <= self.hold_window)
            .unwrap_or(false)
    }

    /// Rewrite `input` from the keys still live at `frame`.
    pub fn sync(&self, input: &mut InputState, frame: u64) {
        for action in InputAction::ALL {
            input.set(action, self.is_held(action, frame));
        }
    }

    pub fn clear(&mut self) {
        self.last_seen.clear();
    }
}
