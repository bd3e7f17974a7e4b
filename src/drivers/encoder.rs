//! Polled quadrature decoder for the rotary encoder.
//!
//! Direction is sampled on the falling edge of channel A: B high means
//! clockwise, B low counter-clockwise.  Rising edges on A are tracked but
//! produce nothing, giving one step per detent.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    Clockwise,
    CounterClockwise,
}

#[derive(Debug, Default)]
pub struct QuadratureDecoder {
    last_a: Option<bool>,
}

impl QuadratureDecoder {
    pub fn new() -> Self {
        Self { last_a: None }
    }

    /// Forget channel A's level; the next sample only arms the decoder.
    pub fn reset(&mut self) {
        self.last_a = None;
    }

    /// Feed one `(a, b)` sample.
    pub fn poll_once(&mut self, a: bool, b: bool) -> Option<Rotation> {
        match self.last_a.replace(a) {
            Some(true) if !a => Some(if b {
                Rotation::Clockwise
            } else {
                Rotation::CounterClockwise
            }),
            _ => None,
        }
    }
}
