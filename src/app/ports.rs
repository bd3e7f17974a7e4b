//! Port traits: the hexagonal boundary between game logic and the device.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ GameService (domain)
//! ```
//!
//! One trait per peripheral.  The [`GameService`](super::service::GameService)
//! and everything below it consume these via generics, so the game core never
//! touches hardware directly and tests drive it with a simulated board.

use crate::error::SensorError;
use crate::gesture::AccelSample;

use super::events::GameEvent;
use super::render::{RenderRequest, Rgb};

// ───────────────────────────────────────────────────────────────
// Input ports (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// 3-axis accelerometer, readings in m/s².
pub trait AccelerometerPort {
    fn read_acceleration(&mut self) -> Result<AccelSample, SensorError>;
}

/// Encoder push switch.
pub trait ButtonPort {
    /// Current level: `true` while the switch is held down.
    fn read_button(&mut self) -> bool;
}

/// Quadrature rotary encoder.
pub trait EncoderPort {
    /// Current `(a, b)` channel levels, `true` = high.
    fn read_encoder_channels(&mut self) -> (bool, bool);
}

// ───────────────────────────────────────────────────────────────
// Output ports (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Display and colour indicator.
pub trait RenderSink {
    /// Draw a full frame and set the indicator to `request.indicator`.
    fn render(&mut self, request: &RenderRequest);

    /// Change only the indicator colour.
    fn set_indicator(&mut self, colour: Rgb);
}

/// The domain emits structured [`GameEvent`]s through this port.
/// Adapters decide where they go (serial log, test recorder, ...).
pub trait EventSink {
    fn emit(&mut self, event: &GameEvent);
}

// ───────────────────────────────────────────────────────────────
// Platform services
// ───────────────────────────────────────────────────────────────

/// Monotonic time and blocking delay.  Every wait in the game goes
/// through here so tests can run on simulated time.
pub trait Clock {
    /// Milliseconds since an arbitrary fixed origin.
    fn now_ms(&self) -> u64;

    /// Block for `ms` milliseconds.
    fn sleep_ms(&mut self, ms: u32);
}

/// Source of uniformly distributed random words.
pub trait RandomSource {
    fn next_u32(&mut self) -> u32;
}

// ───────────────────────────────────────────────────────────────
// Whole board
// ───────────────────────────────────────────────────────────────

/// Everything the game service needs from the device, as one bound.
pub trait Board:
    AccelerometerPort + ButtonPort + EncoderPort + RenderSink + Clock + RandomSource
{
}

impl<T> Board for T where
    T: AccelerometerPort + ButtonPort + EncoderPort + RenderSink + Clock + RandomSource
{
}
