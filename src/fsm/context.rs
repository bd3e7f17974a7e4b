//! Shared mutable context threaded through every FSM handler.
//!
//! `FsmContext` is the "blackboard" that state handlers read from and
//! write to.  The service places one [`InputEvent`] on it before each
//! tick; handlers consume it, update the session, and queue screens in
//! the outbox for the service to present.

use heapless::Vec;
use log::warn;

use crate::app::render::RenderRequest;
use crate::config::GameConfig;
use crate::drivers::encoder::Rotation;
use crate::game::{GameSession, RoundResult};

/// Screens a single tick may queue (e.g. confirmation plus the next
/// state's entry screen).
pub const OUTBOX_CAP: usize = 2;

/// What happened since the last tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// The splash animation has finished playing.
    IntroFinished,
    /// Falling edge on the encoder push switch.
    ButtonPressed,
    /// One encoder detent.
    EncoderTurned(Rotation),
    /// A round was played to completion.
    RoundPlayed(RoundResult),
}

/// Outcome of the last finished session, kept for the Win/Lose screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinalTally {
    pub won: bool,
    pub score: u32,
    pub hearts: u8,
}

pub struct FsmContext {
    // -- Input --
    /// Consumed by the current state's `on_update`.
    pub input: Option<InputEvent>,

    // -- Game data --
    /// Highlighted difficulty index while selecting (0..=2).
    pub selection: usize,
    /// Present only while in `RoundLoop`.
    pub session: Option<GameSession>,
    pub final_tally: Option<FinalTally>,

    // -- Output --
    /// Screens to present after the tick, in order.
    pub outbox: Vec<RenderRequest, OUTBOX_CAP>,

    pub config: GameConfig,
}

impl FsmContext {
    pub fn new(config: GameConfig) -> Self {
        Self {
            input: None,
            selection: 0,
            session: None,
            final_tally: None,
            outbox: Vec::new(),
            config,
        }
    }

    pub fn take_input(&mut self) -> Option<InputEvent> {
        self.input.take()
    }

    /// Queue a screen for the service.  A full outbox drops the screen.
    pub fn queue_screen(&mut self, request: RenderRequest) {
        if self.outbox.push(request).is_err() {
            warn!("Screen outbox full, dropping frame");
        }
    }

    /// Move the session into the final tally.
    pub fn close_session(&mut self, won: bool) -> Option<FinalTally> {
        let tally = self.session.take().map(|s| FinalTally {
            won,
            score: s.score,
            hearts: s.hearts,
        });
        if tally.is_some() {
            self.final_tally = tally;
        }
        tally
    }
}
