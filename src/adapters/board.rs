//! Board adapter: bridges real peripherals to the domain port traits.
//!
//! Owns the accelerometer, the encoder's button and quadrature pins, a
//! render backend, the clock and the RNG, and exposes them through the
//! ports the [`GameService`](crate::app::service::GameService) needs.
//! Pins are any embedded-hal 1.0 [`InputPin`], so the same adapter wraps
//! ESP-IDF `PinDriver`s on the device and scripted pins in tests.
//!
//! All three inputs are active-low with pull-ups.

use embedded_hal::digital::{Error as _, InputPin};
use log::warn;

use crate::app::ports::{
    AccelerometerPort, ButtonPort, Clock, EncoderPort, RandomSource, RenderSink,
};
use crate::app::render::{RenderRequest, Rgb};
use crate::error::SensorError;
use crate::gesture::AccelSample;

use super::rng::HardwareRng;
use super::time::SystemClock;

/// Encoder channels with their push switch.
pub struct EncoderPins<A, B, BTN> {
    pub a: A,
    pub b: B,
    pub button: BTN,
}

pub struct BoardAdapter<ACC, A, B, BTN, R> {
    accel: ACC,
    pins: EncoderPins<A, B, BTN>,
    renderer: R,
    clock: SystemClock,
    rng: HardwareRng,
    /// Last good channel levels, reused when a pin read fails.
    last_channels: (bool, bool),
}

impl<ACC, A, B, BTN, R> BoardAdapter<ACC, A, B, BTN, R>
where
    ACC: AccelerometerPort,
    A: InputPin,
    B: InputPin,
    BTN: InputPin,
    R: RenderSink,
{
    pub fn new(accel: ACC, pins: EncoderPins<A, B, BTN>, renderer: R) -> Self {
        Self {
            accel,
            pins,
            renderer,
            clock: SystemClock::new(),
            rng: HardwareRng::new(),
            last_channels: (true, true),
        }
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}

// ── Sensor ports ──────────────────────────────────────────────

impl<ACC: AccelerometerPort, A, B, BTN, R> AccelerometerPort for BoardAdapter<ACC, A, B, BTN, R> {
    fn read_acceleration(&mut self) -> Result<AccelSample, SensorError> {
        self.accel.read_acceleration()
    }
}

impl<ACC, A, B, BTN: InputPin, R> ButtonPort for BoardAdapter<ACC, A, B, BTN, R> {
    fn read_button(&mut self) -> bool {
        match self.pins.button.is_low() {
            Ok(pressed) => pressed,
            Err(e) => {
                warn!("Button pin read failed: {:?}", e.kind());
                false
            }
        }
    }
}

impl<ACC, A: InputPin, B: InputPin, BTN, R> EncoderPort for BoardAdapter<ACC, A, B, BTN, R> {
    fn read_encoder_channels(&mut self) -> (bool, bool) {
        let a = self.pins.a.is_high().map_err(|e| e.kind());
        let b = self.pins.b.is_high().map_err(|e| e.kind());
        match (a, b) {
            (Ok(a), Ok(b)) => {
                self.last_channels = (a, b);
                (a, b)
            }
            (Err(kind), _) | (_, Err(kind)) => {
                warn!("Encoder pin read failed: {:?}", kind);
                self.last_channels
            }
        }
    }
}

// ── Output ports ──────────────────────────────────────────────

impl<ACC, A, B, BTN, R: RenderSink> RenderSink for BoardAdapter<ACC, A, B, BTN, R> {
    fn render(&mut self, request: &RenderRequest) {
        self.renderer.render(request);
    }

    fn set_indicator(&mut self, colour: Rgb) {
        self.renderer.set_indicator(colour);
    }
}

// ── Platform ports ────────────────────────────────────────────

impl<ACC, A, B, BTN, R> Clock for BoardAdapter<ACC, A, B, BTN, R> {
    fn now_ms(&self) -> u64 {
        self.clock.now_ms()
    }

    fn sleep_ms(&mut self, ms: u32) {
        self.clock.sleep_ms(ms);
    }
}

impl<ACC, A, B, BTN, R> RandomSource for BoardAdapter<ACC, A, B, BTN, R> {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }
}
