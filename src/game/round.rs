//! One prompt-and-respond round.
//!
//! ```text
//!  pick action ──▶ prompt screen ──▶ detect (limit) ──▶ score ──▶ GOOD!/MISS!
//! ```

use log::info;

use crate::app::ports::{AccelerometerPort, Clock, RandomSource, RenderSink};
use crate::app::render::present;
use crate::app::screens;
use crate::config::GameConfig;
use crate::error::Result;
use crate::gesture::GestureDetector;

use super::{Action, Difficulty, RoundResult, score_round};

pub struct RoundEngine {
    detector: GestureDetector,
    success_dwell_ms: u32,
    miss_dwell_ms: u32,
}

impl RoundEngine {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            detector: GestureDetector::new(config),
            success_dwell_ms: config.success_dwell_ms,
            miss_dwell_ms: config.miss_dwell_ms,
        }
    }

    /// Uniform pick over the four actions.  Repeats are allowed.
    pub fn pick_action(rng: &mut impl RandomSource) -> Action {
        // 2^32 is a multiple of 4, so the modulo is unbiased.
        Action::ALL[(rng.next_u32() % Action::ALL.len() as u32) as usize]
    }

    /// Play one round and show its outcome.  Only a sensor fault errors;
    /// timeouts and wrong gestures are ordinary failed rounds.
    pub fn play_round(
        &self,
        hw: &mut (impl AccelerometerPort + RenderSink + Clock + RandomSource),
        level: u8,
        difficulty: Difficulty,
        score: u32,
        hearts: u8,
    ) -> Result<RoundResult> {
        let action = Self::pick_action(hw);
        let needed = action.required_gesture();

        present(
            hw,
            &screens::round_prompt(level, difficulty, action, score, hearts),
        );

        let detected = self.detector.detect(hw, difficulty.time_limit_ms())?;
        let result = score_round(difficulty, score, hearts, action, detected);

        info!(
            "Round L{}: {} needs {} -> {:?} ({})",
            level,
            action.name(),
            needed.name(),
            detected,
            if result.success { "hit" } else { "miss" }
        );

        let outcome = if result.success {
            screens::round_success(
                difficulty.score_per_success(),
                result.new_score,
                self.success_dwell_ms,
            )
        } else {
            screens::round_miss(
                detected,
                result.new_hearts,
                result.new_score,
                self.miss_dwell_ms,
            )
        };
        present(hw, &outcome);

        Ok(result)
    }
}
