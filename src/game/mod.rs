//! Game rules: difficulty tiers, actions, the session, and round scoring.
//!
//! Every table here is a closed enum with an exhaustive `match`; nothing is
//! looked up by name at runtime.

pub mod pet;
pub mod round;

use crate::gesture::{Detection, Gesture};

// ---------------------------------------------------------------------------
// Difficulty
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Med,
    Hard,
}

impl Difficulty {
    /// Selection order on the difficulty screen.
    pub const ALL: [Difficulty; 3] = [Self::Easy, Self::Med, Self::Hard];

    /// Selection index, clamped into range.
    pub fn from_index(idx: usize) -> Self {
        Self::ALL[idx.min(Self::ALL.len() - 1)]
    }

    /// Time allowed for one gesture.
    pub fn time_limit_ms(self) -> u32 {
        match self {
            Self::Easy => 4000,
            Self::Med => 2500,
            Self::Hard => 1500,
        }
    }

    pub fn time_limit_secs(self) -> f32 {
        self.time_limit_ms() as f32 / 1000.0
    }

    /// Points for one successful round.
    pub fn score_per_success(self) -> u32 {
        match self {
            Self::Easy => 10,
            Self::Med => 15,
            Self::Hard => 20,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Easy => "EASY",
            Self::Med => "MED",
            Self::Hard => "HARD",
        }
    }
}

// ---------------------------------------------------------------------------
// Action
// ---------------------------------------------------------------------------

/// Care prompt shown to the player.  Each has exactly one required tilt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Feed,
    Play,
    Clean,
    Sleep,
}

impl Action {
    pub const ALL: [Action; 4] = [Self::Feed, Self::Play, Self::Clean, Self::Sleep];

    pub fn required_gesture(self) -> Gesture {
        match self {
            Self::Feed => Gesture::Left,
            Self::Play => Gesture::Right,
            Self::Clean => Gesture::Up,
            Self::Sleep => Gesture::Down,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Feed => "FEED",
            Self::Play => "PLAY",
            Self::Clean => "CLEAN",
            Self::Sleep => "SLEEP",
        }
    }
}

// ---------------------------------------------------------------------------
// Round result
// ---------------------------------------------------------------------------

/// Outcome of one round.  `action` and `detected` are carried for display
/// and logging only; the session keeps just score and hearts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    pub success: bool,
    pub new_score: u32,
    pub new_hearts: u8,
    pub action: Action,
    pub detected: Detection,
}

/// Apply the round rules: exact match scores, anything else costs a heart.
pub fn score_round(
    difficulty: Difficulty,
    score: u32,
    hearts: u8,
    action: Action,
    detected: Detection,
) -> RoundResult {
    let success = detected == Detection::Tilt(action.required_gesture());
    if success {
        RoundResult {
            success,
            new_score: score.saturating_add(difficulty.score_per_success()),
            new_hearts: hearts,
            action,
            detected,
        }
    } else {
        RoundResult {
            success,
            new_score: score,
            new_hearts: hearts.saturating_sub(1),
            action,
            detected,
        }
    }
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// Where a session stands after a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    InProgress,
    Won,
    Lost,
}

/// Live state of one game, from difficulty confirmation to Win/Lose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSession {
    pub difficulty: Difficulty,
    pub score: u32,
    pub hearts: u8,
    /// Current round, 1-based.
    pub level: u8,
}

impl GameSession {
    pub fn new(difficulty: Difficulty, max_hearts: u8) -> Self {
        Self {
            difficulty,
            score: 0,
            hearts: max_hearts,
            level: 1,
        }
    }

    /// Fold a round result in.  Losing the last heart ends the session even
    /// with levels remaining; surviving round `levels` wins it.  The level
    /// only advances while the session continues.
    pub fn apply(&mut self, result: &RoundResult, levels: u8) -> SessionStatus {
        self.score = result.new_score;
        self.hearts = result.new_hearts;

        if self.hearts == 0 {
            return SessionStatus::Lost;
        }
        if self.level >= levels {
            return SessionStatus::Won;
        }
        self.level += 1;
        SessionStatus::InProgress
    }
}
