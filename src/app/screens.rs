//! Screen builders: one [`RenderRequest`] per game screen.
//!
//! Layout targets a 128×64 panel with an 8 px font.  Game screens keep text
//! in the left ~60% and leave the right side to the pet sprite.

use crate::game::pet::Mood;
use crate::game::{Action, Difficulty};
use crate::gesture::Detection;

use super::render::{INDICATOR_OFF, RenderRequest, Rgb};

pub const COLOUR_BLUE: Rgb = (0, 0, 50);
pub const COLOUR_SELECT: Rgb = (50, 50, 0);
pub const COLOUR_CONFIRM: Rgb = (0, 80, 0);
pub const COLOUR_GOOD: Rgb = (0, 150, 0);
pub const COLOUR_BAD: Rgb = (150, 0, 0);

const SPLASH_SLIDE_MS: u32 = 50;
const SPLASH_FACE_MS: u32 = 300;

/// Intro animation: the title slides up, then the pet blinks while loading.
/// Ends on a blank frame with the indicator off.
pub fn splash_frames() -> impl Iterator<Item = RenderRequest> {
    let slide = (1..=8u8).rev().map(|step| {
        RenderRequest::new(COLOUR_BLUE)
            .line(24, step * 8, "TamaPet")
            .with_dwell(SPLASH_SLIDE_MS)
    });

    let blink = (0..4u8).map(|i| {
        let (mood, glow) = if i % 2 == 0 {
            (Mood::Happy, (0, 0, 80))
        } else {
            (Mood::Tired, (0, 0, 20))
        };
        RenderRequest::new(glow)
            .line(28, 0, "TamaPet")
            .line(32, 24, mood.face())
            .line(32, 48, "Loading")
            .with_dwell(SPLASH_FACE_MS)
    });

    slide
        .chain(blink)
        .chain(core::iter::once(RenderRequest::new(INDICATOR_OFF)))
}

pub fn start() -> RenderRequest {
    RenderRequest::new(COLOUR_BLUE)
        .line(32, 8, "TamaPet")
        .line(24, 28, "Press Btn")
        .line(28, 44, "to start")
}

pub fn difficulty_select(current: Difficulty) -> RenderRequest {
    RenderRequest::new(COLOUR_SELECT)
        .line(0, 0, "Diff")
        .text(0, 16, format_args!("> {}", current.name()))
        .line(0, 32, "Turn=chg")
        .line(0, 48, "Press=OK")
}

pub fn difficulty_confirmed(chosen: Difficulty, dwell_ms: u32) -> RenderRequest {
    RenderRequest::new(COLOUR_CONFIRM)
        .line(0, 0, "Diff OK")
        .line(0, 16, chosen.name())
        .line(0, 32, "Get ready")
        .with_dwell(dwell_ms)
}

pub fn round_prompt(
    level: u8,
    difficulty: Difficulty,
    action: Action,
    score: u32,
    hearts: u8,
) -> RenderRequest {
    let initial = &difficulty.name()[..1];
    RenderRequest::new(COLOUR_BLUE)
        .text(0, 0, format_args!("H{} S{}", hearts, score))
        .text(0, 10, format_args!("L{} {}", level, initial))
        .line(0, 20, action.name())
        .text(0, 30, format_args!("T:{:.1}s", difficulty.time_limit_secs()))
        .line(0, 45, "Tilt ->")
        .with_pet(score)
}

pub fn round_success(gained: u32, new_score: u32, dwell_ms: u32) -> RenderRequest {
    RenderRequest::new(COLOUR_GOOD)
        .line(0, 0, "GOOD!")
        .text(0, 12, format_args!("+{}p", gained))
        .line(0, 24, "Score:")
        .text(0, 34, format_args!("{}", new_score))
        .with_pet(new_score)
        .with_dwell(dwell_ms)
}

/// Miss screen.  The reason is the gesture actually seen, or "SLOW".
pub fn round_miss(detected: Detection, hearts: u8, score: u32, dwell_ms: u32) -> RenderRequest {
    let reason = detected.gesture().map_or("SLOW", |g| g.name());
    RenderRequest::new(COLOUR_BAD)
        .line(0, 0, "MISS!")
        .line(0, 12, reason)
        .text(0, 24, format_args!("H{} S{}", hearts, score))
        .line(0, 34, if hearts > 0 { "TRY" } else { "END" })
        .with_pet(score)
        .with_dwell(dwell_ms)
}

pub fn win(score: u32) -> RenderRequest {
    final_screen("YOU WIN!", Mood::Happy, score, COLOUR_GOOD)
}

pub fn lose(score: u32) -> RenderRequest {
    final_screen("GAME OVER", Mood::Sad, score, COLOUR_BAD)
}

fn final_screen(title: &str, mood: Mood, score: u32, colour: Rgb) -> RenderRequest {
    RenderRequest::new(colour)
        .line(0, 0, title)
        .line(0, 16, mood.face())
        .line(0, 32, "Score")
        .text(0, 48, format_args!("{}", score))
        .with_pet(score)
}

pub fn sensor_fault(dwell_ms: u32) -> RenderRequest {
    RenderRequest::new(COLOUR_BAD)
        .line(0, 0, "SENSOR ERR")
        .line(0, 16, Mood::Neutral.face())
        .line(0, 32, "Restarting")
        .with_dwell(dwell_ms)
}
