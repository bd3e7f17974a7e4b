//! Deadline-bounded gesture detection.
//!
//! A detection opens a [`DetectionWindow`]: the clock is read, then a
//! baseline is averaged over `baseline_samples`.  Each
//! [`poll_once`](GestureDetector::poll_once) averages `poll_samples` more
//! readings and classifies them against that baseline.  The first
//! directional result ends the window; if the deadline passes first the
//! result is [`Detection::Timeout`].
//!
//! The baseline is never refreshed inside a window, so zero-point drift
//! during a long round is not compensated.  The deadline is measured from
//! *before* the baseline burst, so baseline capture eats into the limit.

use log::debug;

use crate::app::ports::{AccelerometerPort, Clock};
use crate::config::GameConfig;
use crate::error::SensorError;

use super::{AccelerometerSampler, Detection, FilteredReading, Gesture, GestureClassifier};

/// An open detection: baseline plus deadline.
#[derive(Debug, Clone, Copy)]
pub struct DetectionWindow {
    pub baseline: FilteredReading,
    pub started_ms: u64,
    pub timeout_ms: u32,
}

impl DetectionWindow {
    /// Whether the deadline has passed at `now_ms`.
    pub fn expired(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.started_ms) >= u64::from(self.timeout_ms)
    }
}

pub struct GestureDetector {
    sampler: AccelerometerSampler,
    classifier: GestureClassifier,
    baseline_samples: u8,
    poll_samples: u8,
}

impl GestureDetector {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            sampler: AccelerometerSampler::new(config.sample_interval_ms),
            classifier: GestureClassifier::new(config.gesture_threshold),
            baseline_samples: config.baseline_samples,
            poll_samples: config.poll_samples,
        }
    }

    /// Start the clock and capture the baseline.
    pub fn open_window(
        &self,
        hw: &mut (impl AccelerometerPort + Clock),
        timeout_ms: u32,
    ) -> Result<DetectionWindow, SensorError> {
        let started_ms = hw.now_ms();
        let baseline = self.sampler.filtered_read(hw, self.baseline_samples)?;
        debug!(
            "Gesture window open: baseline=({:.2}, {:.2}, {:.2}) timeout={}ms",
            baseline.x, baseline.y, baseline.z, timeout_ms
        );
        Ok(DetectionWindow {
            baseline,
            started_ms,
            timeout_ms,
        })
    }

    /// One poll iteration.  `Ok(None)` means "keep polling".
    pub fn poll_once(
        &self,
        window: &DetectionWindow,
        hw: &mut (impl AccelerometerPort + Clock),
    ) -> Result<Option<Detection>, SensorError> {
        if window.expired(hw.now_ms()) {
            return Ok(Some(Detection::Timeout));
        }

        let current = self.sampler.filtered_read(hw, self.poll_samples)?;
        match self.classifier.classify(&window.baseline, &current) {
            Gesture::None => Ok(None),
            g => Ok(Some(Detection::Tilt(g))),
        }
    }

    /// Block until a directional gesture or the deadline, whichever first.
    pub fn detect(
        &self,
        hw: &mut (impl AccelerometerPort + Clock),
        timeout_ms: u32,
    ) -> Result<Detection, SensorError> {
        let window = self.open_window(hw, timeout_ms)?;
        loop {
            if let Some(detection) = self.poll_once(&window, hw)? {
                debug!(
                    "Gesture window closed after {}ms: {:?}",
                    hw.now_ms().saturating_sub(window.started_ms),
                    detection
                );
                return Ok(detection);
            }
        }
    }
}
