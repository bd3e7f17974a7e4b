//! Polled press detector for the encoder push switch.
//!
//! ## Hardware
//!
//! Active-low momentary switch with pull-up; the board adapter inverts the
//! level so this module only sees `pressed: bool`.
//!
//! ## Detection
//!
//! | Observation                        | Result               |
//! |-----------------------------------|----------------------|
//! | first sample after `reset()`       | arms, no event       |
//! | released → pressed                 | `ButtonEvent::Pressed` |
//! | anything else                      | `None`               |
//!
//! A switch already held when the watcher arms must be released and pressed
//! again.  Contact bounce after the edge is absorbed by the caller's settle
//! delay before it polls again.

/// Button events emitted by the watcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonEvent {
    Pressed,
}

#[derive(Debug, Default)]
pub struct ButtonWatcher {
    last_pressed: Option<bool>,
}

impl ButtonWatcher {
    pub fn new() -> Self {
        Self { last_pressed: None }
    }

    /// Forget the last level; the next sample only arms the watcher.
    pub fn reset(&mut self) {
        self.last_pressed = None;
    }

    /// Feed one level sample.
    pub fn poll_once(&mut self, pressed: bool) -> Option<ButtonEvent> {
        let was_pressed = self.last_pressed.replace(pressed);
        match was_pressed {
            Some(false) if pressed => Some(ButtonEvent::Pressed),
            _ => None,
        }
    }
}
