//! Function-pointer finite state machine engine.
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │  StateTable                                                   │
//! │  ┌──────────────────┬──────────────┬───────────────┐          │
//! │  │ StateId          │ on_enter     │ on_update     │          │
//! │  ├──────────────────┼──────────────┼───────────────┤          │
//! │  │ Splash           │ -            │ fn(ctx)->Opt  │          │
//! │  │ Start            │ fn(ctx)      │ fn(ctx)->Opt  │          │
//! │  │ DifficultySelect │ fn(ctx)      │ fn(ctx)->Opt  │          │
//! │  │ RoundLoop        │ fn(ctx)      │ fn(ctx)->Opt  │          │
//! │  │ Win              │ fn(ctx)      │ fn(ctx)->Opt  │          │
//! │  │ Lose             │ fn(ctx)      │ fn(ctx)->Opt  │          │
//! │  └──────────────────┴──────────────┴───────────────┘          │
//! └───────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each tick the engine calls `on_update` for the **current** state.
//! If it returns `Some(next_id)`, the engine moves the current pointer
//! and runs `on_enter` for the next state.  Handlers never touch hardware: they consume the
//! input placed in [`FsmContext`] and queue screens for the service.

pub mod context;
pub mod states;

use context::FsmContext;
use log::info;

// ---------------------------------------------------------------------------
// State identity
// ---------------------------------------------------------------------------

/// Every screen-level phase of the game.
/// Must stay in sync with the state table built in [`states::build_state_table`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum StateId {
    Splash = 0,
    Start = 1,
    DifficultySelect = 2,
    RoundLoop = 3,
    Win = 4,
    Lose = 5,
}

impl StateId {
    /// Total number of states, used to size the table array.
    pub const COUNT: usize = 6;

    /// Convert an index back to `StateId`.  Asserts in debug builds;
    /// falls back to `Start` in release.
    pub fn from_index(idx: usize) -> Self {
        match idx {
            0 => Self::Splash,
            1 => Self::Start,
            2 => Self::DifficultySelect,
            3 => Self::RoundLoop,
            4 => Self::Win,
            5 => Self::Lose,
            _ => {
                debug_assert!(false, "invalid state index: {idx}");
                Self::Start
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Function-pointer type aliases
// ---------------------------------------------------------------------------

/// Signature for `on_enter` actions.
pub type StateActionFn = fn(&mut FsmContext);

/// Signature for the per-tick update handler.
/// Returns `Some(next)` to trigger a transition, or `None` to stay.
pub type StateUpdateFn = fn(&mut FsmContext) -> Option<StateId>;

/// Static descriptor for a single FSM state.
pub struct StateDescriptor {
    pub id: StateId,
    pub name: &'static str,
    pub on_enter: Option<StateActionFn>,
    pub on_update: StateUpdateFn,
}

// ---------------------------------------------------------------------------
// FSM engine
// ---------------------------------------------------------------------------

pub struct Fsm {
    /// Fixed-size table indexed by `StateId as usize`.
    table: [StateDescriptor; StateId::COUNT],
    current: usize,
}

impl Fsm {
    pub fn new(table: [StateDescriptor; StateId::COUNT], initial: StateId) -> Self {
        Self {
            table,
            current: initial as usize,
        }
    }

    /// Run the initial `on_enter` for the starting state.
    /// Call once after construction, before the first `tick()`.
    pub fn start(&mut self, ctx: &mut FsmContext) {
        info!("FSM starting in state: {}", self.table[self.current].name);
        if let Some(enter) = self.table[self.current].on_enter {
            enter(ctx);
        }
    }

    /// Advance the FSM by one tick.
    ///
    /// 1. Call `on_update` for the current state.
    /// 2. If it returns `Some(next)`, update the pointer and run
    ///    `on_enter(next)`.
    pub fn tick(&mut self, ctx: &mut FsmContext) {
        let next = (self.table[self.current].on_update)(ctx);

        if let Some(next_id) = next {
            self.transition(next_id, ctx);
        }
    }

    /// Force an immediate transition (used by the service to abandon a
    /// session after a sensor fault).
    pub fn force_transition(&mut self, next: StateId, ctx: &mut FsmContext) {
        if next as usize != self.current {
            self.transition(next, ctx);
        }
    }

    pub fn current_state(&self) -> StateId {
        StateId::from_index(self.current)
    }

    fn transition(&mut self, next_id: StateId, ctx: &mut FsmContext) {
        let next_idx = next_id as usize;

        info!(
            "FSM transition: {} -> {}",
            self.table[self.current].name, self.table[next_idx].name
        );

        self.current = next_idx;

        if let Some(enter) = self.table[self.current].on_enter {
            enter(ctx);
        }
    }
}
