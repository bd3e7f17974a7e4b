//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing game events to the ESP-IDF logger
//! (UART / USB-CDC on the device) as single-line records.

use log::{info, warn};

use crate::app::events::GameEvent;
use crate::app::ports::EventSink;

#[derive(Debug, Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &GameEvent) {
        match event {
            GameEvent::Booted(state) => {
                info!("BOOT | initial_state={:?}", state);
            }
            GameEvent::StateChanged { from, to } => {
                info!("STATE | {:?} -> {:?}", from, to);
            }
            GameEvent::DifficultyChosen(d) => {
                info!("GAME | difficulty={} limit={}ms", d.name(), d.time_limit_ms());
            }
            GameEvent::RoundFinished { level, result } => {
                let seen = result.detected.gesture().map_or("SLOW", |g| g.name());
                info!(
                    "ROUND | L{} {} {} {} | score={} hearts={}",
                    level,
                    result.action.name(),
                    seen,
                    if result.success { "ok" } else { "miss" },
                    result.new_score,
                    result.new_hearts,
                );
            }
            GameEvent::SessionEnded(tally) => {
                info!(
                    "END | {} score={} hearts={}",
                    if tally.won { "win" } else { "lose" },
                    tally.score,
                    tally.hearts,
                );
            }
            GameEvent::SensorFault(e) => {
                warn!("FAULT | accelerometer: {}", e);
            }
        }
    }
}
