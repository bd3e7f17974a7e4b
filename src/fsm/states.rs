//! Concrete state handler functions and table builder.
//!
//! ```text
//!  SPLASH ──[intro done]──▶ START ──[press]──▶ DIFFICULTY_SELECT
//!                             ▲                    │ turn: move cursor
//!                             │                [press]
//!                             │                    ▼
//!                             │               ROUND_LOOP ──[hearts 0]──▶ LOSE
//!                             │                    │                      │
//!                             │             [level 10 survived]           │
//!                             │                    ▼                      │
//!                             └──────[press]───── WIN ◀──────[press]──────┘
//! ```
//!
//! Both WIN and LOSE return to START on a press.  A sensor fault during a
//! round is handled by the service, which forces START.

use log::{info, warn};

use super::context::{FsmContext, InputEvent};
use super::{StateDescriptor, StateId};
use crate::app::screens;
use crate::drivers::encoder::Rotation;
use crate::game::{Difficulty, GameSession, SessionStatus};

/// Build the static state table.  Called once at startup.
pub fn build_state_table() -> [StateDescriptor; StateId::COUNT] {
    [
        StateDescriptor {
            id: StateId::Splash,
            name: "Splash",
            on_enter: None,
            on_update: splash_update,
        },
        StateDescriptor {
            id: StateId::Start,
            name: "Start",
            on_enter: Some(start_enter),
            on_update: start_update,
        },
        StateDescriptor {
            id: StateId::DifficultySelect,
            name: "DifficultySelect",
            on_enter: Some(difficulty_enter),
            on_update: difficulty_update,
        },
        StateDescriptor {
            id: StateId::RoundLoop,
            name: "RoundLoop",
            on_enter: Some(round_loop_enter),
            on_update: round_loop_update,
        },
        StateDescriptor {
            id: StateId::Win,
            name: "Win",
            on_enter: Some(win_enter),
            on_update: ending_update,
        },
        StateDescriptor {
            id: StateId::Lose,
            name: "Lose",
            on_enter: Some(lose_enter),
            on_update: ending_update,
        },
    ]
}

// ═══════════════════════════════════════════════════════════════════════════
//  SPLASH
// ═══════════════════════════════════════════════════════════════════════════

fn splash_update(ctx: &mut FsmContext) -> Option<StateId> {
    match ctx.take_input() {
        Some(InputEvent::IntroFinished) => Some(StateId::Start),
        _ => None,
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  START
// ═══════════════════════════════════════════════════════════════════════════

fn start_enter(ctx: &mut FsmContext) {
    ctx.queue_screen(screens::start());
}

fn start_update(ctx: &mut FsmContext) -> Option<StateId> {
    match ctx.take_input() {
        Some(InputEvent::ButtonPressed) => Some(StateId::DifficultySelect),
        _ => None,
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  DIFFICULTY_SELECT
// ═══════════════════════════════════════════════════════════════════════════

fn difficulty_enter(ctx: &mut FsmContext) {
    ctx.selection = 0;
    ctx.queue_screen(screens::difficulty_select(Difficulty::Easy));
}

fn difficulty_update(ctx: &mut FsmContext) -> Option<StateId> {
    let last = Difficulty::ALL.len() - 1;
    match ctx.take_input() {
        Some(InputEvent::EncoderTurned(turn)) => {
            ctx.selection = match turn {
                Rotation::Clockwise => (ctx.selection + 1).min(last),
                Rotation::CounterClockwise => ctx.selection.saturating_sub(1),
            };
            // Redrawn on every detent, clamped or not.
            let current = Difficulty::from_index(ctx.selection);
            ctx.queue_screen(screens::difficulty_select(current));
            None
        }
        Some(InputEvent::ButtonPressed) => {
            let chosen = Difficulty::from_index(ctx.selection);
            info!("Difficulty confirmed: {}", chosen.name());
            ctx.session = Some(GameSession::new(chosen, ctx.config.max_hearts));
            ctx.queue_screen(screens::difficulty_confirmed(
                chosen,
                ctx.config.confirm_dwell_ms,
            ));
            Some(StateId::RoundLoop)
        }
        _ => None,
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  ROUND_LOOP
// ═══════════════════════════════════════════════════════════════════════════

fn round_loop_enter(ctx: &mut FsmContext) {
    if let Some(s) = &ctx.session {
        info!(
            "ROUND_LOOP: {} rounds on {}, {} hearts",
            ctx.config.levels,
            s.difficulty.name(),
            s.hearts
        );
    }
}

fn round_loop_update(ctx: &mut FsmContext) -> Option<StateId> {
    let input = ctx.take_input();
    let levels = ctx.config.levels;
    let Some(session) = ctx.session.as_mut() else {
        warn!("ROUND_LOOP without a session, back to start");
        return Some(StateId::Start);
    };

    let Some(InputEvent::RoundPlayed(result)) = input else {
        return None;
    };

    match session.apply(&result, levels) {
        SessionStatus::InProgress => None,
        SessionStatus::Won => Some(StateId::Win),
        SessionStatus::Lost => Some(StateId::Lose),
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  WIN / LOSE
// ═══════════════════════════════════════════════════════════════════════════

fn win_enter(ctx: &mut FsmContext) {
    ctx.close_session(true);
    let score = ctx.final_tally.map_or(0, |t| t.score);
    info!("WIN: final score {}", score);
    ctx.queue_screen(screens::win(score));
}

fn lose_enter(ctx: &mut FsmContext) {
    ctx.close_session(false);
    let score = ctx.final_tally.map_or(0, |t| t.score);
    info!("LOSE: final score {}", score);
    ctx.queue_screen(screens::lose(score));
}

fn ending_update(ctx: &mut FsmContext) -> Option<StateId> {
    match ctx.take_input() {
        Some(InputEvent::ButtonPressed) => Some(StateId::Start),
        _ => None,
    }
}
