//! Game configuration parameters
//!
//! All tunable timing and detection parameters for TamaPet.
//! The fixed game tables (difficulty limits, score per success, action
//! mapping, stage breakpoints) are deliberately not here: they live as
//! exhaustive matches on the enums in [`crate::game`].

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Core game configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    // --- Gesture detection ---
    /// Displacement from baseline (m/s^2) a tilt must exceed on one axis
    pub gesture_threshold: f32,
    /// Delay between raw accelerometer samples (milliseconds)
    pub sample_interval_ms: u32,
    /// Samples averaged into the detection baseline
    pub baseline_samples: u8,
    /// Samples averaged into each detection poll
    pub poll_samples: u8,

    // --- Session ---
    /// Hearts at the start of a session
    pub max_hearts: u8,
    /// Rounds in a session; surviving all of them wins
    pub levels: u8,

    // --- Input ---
    /// Button poll interval while waiting for a press (milliseconds)
    pub button_poll_ms: u32,
    /// Settle delay after a recognised press (milliseconds)
    pub button_settle_ms: u32,
    /// Encoder + button poll interval on the difficulty screen (milliseconds)
    pub select_poll_ms: u32,

    // --- Screen dwell times (milliseconds) ---
    pub confirm_dwell_ms: u32,
    pub success_dwell_ms: u32,
    pub miss_dwell_ms: u32,
    pub fault_dwell_ms: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            // Gesture detection
            gesture_threshold: 2.0,
            sample_interval_ms: 10,
            baseline_samples: 5,
            poll_samples: 3, // ~30 ms per poll

            // Session
            max_hearts: 3,
            levels: 10,

            // Input
            button_poll_ms: 10,
            button_settle_ms: 150,
            select_poll_ms: 2,

            // Dwell
            confirm_dwell_ms: 1500,
            success_dwell_ms: 800,
            miss_dwell_ms: 1200,
            fault_dwell_ms: 1500,
        }
    }
}

impl GameConfig {
    /// Reject values that would stall or short-circuit the game loop.
    pub fn validate(&self) -> Result<()> {
        if !(self.gesture_threshold > 0.0) {
            return Err(Error::Config("gesture_threshold must be positive"));
        }
        if self.sample_interval_ms == 0 {
            return Err(Error::Config("sample_interval_ms must be positive"));
        }
        if self.baseline_samples == 0 {
            return Err(Error::Config("baseline_samples must be >= 1"));
        }
        if self.poll_samples == 0 {
            return Err(Error::Config("poll_samples must be >= 1"));
        }
        if self.max_hearts == 0 {
            return Err(Error::Config("max_hearts must be >= 1"));
        }
        if self.levels == 0 {
            return Err(Error::Config("levels must be >= 1"));
        }
        if self.button_poll_ms == 0 || self.select_poll_ms == 0 {
            return Err(Error::Config("poll intervals must be positive"));
        }
        Ok(())
    }

    /// Parse a JSON override and validate it.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|_| Error::Config("malformed config JSON"))?;
        config.validate()?;
        Ok(config)
    }
}
