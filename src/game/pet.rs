//! The virtual pet: evolution stage and mood faces.

/// Evolution tier, derived purely from cumulative score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stage {
    Egg,
    Baby,
    Teen,
    Adult,
}

impl Stage {
    pub fn from_score(score: u32) -> Self {
        match score {
            0..40 => Self::Egg,
            40..100 => Self::Baby,
            100..180 => Self::Teen,
            _ => Self::Adult,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Egg => "EGG",
            Self::Baby => "BABY",
            Self::Teen => "TEEN",
            Self::Adult => "ADULT",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mood {
    Happy,
    Sad,
    Tired,
    Neutral,
}

impl Mood {
    pub fn face(self) -> &'static str {
        match self {
            Self::Happy => "(^_^)",
            Self::Sad => "(T_T)",
            Self::Tired => "(-_-)",
            Self::Neutral => "(o_o)",
        }
    }
}
