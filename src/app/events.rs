//! Outbound game events.
//!
//! The [`GameService`](super::service::GameService) emits these through the
//! [`EventSink`](super::ports::EventSink) port.  Adapters on the other side
//! decide what to do with them (serial log today).

use crate::error::SensorError;
use crate::fsm::StateId;
use crate::fsm::context::FinalTally;
use crate::game::{Difficulty, RoundResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// The service has started (carries the initial state).
    Booted(StateId),

    /// The FSM moved between states.
    StateChanged { from: StateId, to: StateId },

    /// A difficulty was confirmed and a session began.
    DifficultyChosen(Difficulty),

    /// A round finished; `level` is the round just played.
    RoundFinished { level: u8, result: RoundResult },

    /// A session ended in a win or a loss.
    SessionEnded(FinalTally),

    /// The accelerometer failed mid-round; the session was abandoned.
    SensorFault(SensorError),
}
