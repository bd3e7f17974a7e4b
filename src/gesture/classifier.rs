//! Threshold classifier: filtered reading vs. baseline → [`Gesture`].
//!
//! Only the X and Y displacements matter.  X is checked first and must
//! *strictly* dominate Y; that ordering decides which axis wins when both
//! cross the threshold.
//!
//! | Condition                                   | Gesture           |
//! |---------------------------------------------|-------------------|
//! | `|dx| > |dy|` and `|dx| > threshold`        | LEFT if dx > 0, else RIGHT |
//! | otherwise `|dy| > threshold`                | UP if dy > 0, else DOWN    |
//! | otherwise                                   | NONE              |

use super::{FilteredReading, Gesture};

/// Default displacement threshold in m/s².
pub const DEFAULT_THRESHOLD: f32 = 2.0;

pub struct GestureClassifier {
    threshold: f32,
}

impl Default for GestureClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

impl GestureClassifier {
    pub fn new(threshold: f32) -> Self {
        Self { threshold }
    }

    /// Classify `current` against `base`.
    pub fn classify(&self, base: &FilteredReading, current: &FilteredReading) -> Gesture {
        self.classify_delta(current.x - base.x, current.y - base.y)
    }

    /// Classify a raw displacement.
    pub fn classify_delta(&self, dx: f32, dy: f32) -> Gesture {
        if dx.abs() > dy.abs() && dx.abs() > self.threshold {
            if dx > 0.0 { Gesture::Left } else { Gesture::Right }
        } else if dy.abs() > self.threshold {
            if dy > 0.0 { Gesture::Up } else { Gesture::Down }
        } else {
            Gesture::None
        }
    }
}
