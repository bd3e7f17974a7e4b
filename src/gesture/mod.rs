//! Tilt-gesture recognition pipeline.
//!
//! ```text
//!  AccelerometerPort ──▶ AccelerometerSampler ──▶ GestureClassifier
//!    (raw samples)        (mean over N × 10 ms)     (vs. baseline)
//!                                   ▲                     │
//!                                   └── GestureDetector ◀─┘
//!                                       (deadline-bounded polling)
//! ```

pub mod classifier;
pub mod detector;
pub mod sampler;

pub use classifier::GestureClassifier;
pub use detector::{DetectionWindow, GestureDetector};
pub use sampler::AccelerometerSampler;

/// One instantaneous accelerometer reading (m/s²).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AccelSample {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl AccelSample {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// Per-axis arithmetic mean of a short burst of [`AccelSample`]s.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FilteredReading {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Classified tilt direction.
///
/// `None` is a real classification (nothing crossed the threshold), not a
/// timeout; timeouts are reported by [`Detection::Timeout`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gesture {
    Left,
    Right,
    Up,
    Down,
    None,
}

impl Gesture {
    /// The four directional gestures, in display order.
    pub const DIRECTIONS: [Gesture; 4] = [Self::Left, Self::Right, Self::Up, Self::Down];

    pub fn name(self) -> &'static str {
        match self {
            Self::Left => "LEFT",
            Self::Right => "RIGHT",
            Self::Up => "UP",
            Self::Down => "DOWN",
            Self::None => "NONE",
        }
    }
}

/// Result of a deadline-bounded detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Detection {
    /// A directional gesture; never [`Gesture::None`].
    Tilt(Gesture),
    /// The deadline passed with no gesture over threshold.
    Timeout,
}

impl Detection {
    /// The detected gesture, if any.
    pub fn gesture(self) -> Option<Gesture> {
        match self {
            Self::Tilt(g) => Some(g),
            Self::Timeout => None,
        }
    }
}
