//! Keyboard input state, fed by the host page's DOM event handlers.
//!
//! The framework does not register listeners itself: the host wires
//! `keydown`/`keyup` events to [`Keyboard::key_down`] / [`Keyboard::key_up`]
//! and the game's update code queries the state. A game that needs the same
//! keyboard in several objects shares one behind `Rc<RefCell<Keyboard>>`.
//! Keys are identified by the browser's `KeyboardEvent.code` strings
//! (e.g. `"ArrowLeft"`, `"Space"`).
//!
//! Level queries (`is_down`) reflect the current held state; edge queries
//! (`was_pressed` / `was_released`) report transitions since the last
//! [`Keyboard::end_frame`], which the run-loop calls once per frame after
//! updates.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use std::collections::HashSet;

/// Per-frame keyboard state.
#[derive(Debug, Default)]
pub struct Keyboard {
    down: HashSet<String>,
    pressed: HashSet<String>,
    released: HashSet<String>,
}

impl Keyboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a `keydown` event.
    ///
    /// Browser auto-repeat delivers repeated `keydown`s for a held key;
    /// only the first one counts as a press edge.
    pub fn key_down(&mut self, code: &str) {
        if self.down.insert(code.to_owned()) {
            self.pressed.insert(code.to_owned());
        }
    }

    /// Record a `keyup` event.
    pub fn key_up(&mut self, code: &str) {
        if self.down.remove(code) {
            self.released.insert(code.to_owned());
        }
    }

    /// Whether the key is currently held.
    #[must_use]
    pub fn is_down(&self, code: &str) -> bool {
        self.down.contains(code)
    }

    /// Whether the key went down since the last `end_frame`.
    #[must_use]
    pub fn was_pressed(&self, code: &str) -> bool {
        self.pressed.contains(code)
    }

    /// Whether the key came up since the last `end_frame`.
    #[must_use]
    pub fn was_released(&self, code: &str) -> bool {
        self.released.contains(code)
    }

    /// Clear the per-frame edge sets. Held state is unaffected.
    pub fn end_frame(&mut self) {
        self.pressed.clear();
        self.released.clear();
    }
}
