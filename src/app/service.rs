//! Game service: the hexagonal core.
//!
//! [`GameService`] owns the FSM, its context, the round engine and the
//! input decoders.  All I/O flows through port traits injected at call
//! sites, so the whole game runs against a simulated board in tests.
//!
//! ```text
//!  AccelerometerPort ──▶ ┌──────────────────────────┐ ──▶ RenderSink
//!  ButtonPort ─────────▶ │       GameService        │ ──▶ EventSink
//!  EncoderPort ────────▶ │  FSM · rounds · inputs   │
//!  Clock / Random ─────▶ └──────────────────────────┘
//! ```
//!
//! Each [`step`](GameService::step) blocks until the current state has an
//! input (a press, a detent, a played round), feeds it to the FSM, and
//! presents whatever screens the handlers queued.

use log::{info, warn};

use crate::config::GameConfig;
use crate::drivers::button::{ButtonEvent, ButtonWatcher};
use crate::drivers::encoder::QuadratureDecoder;
use crate::error::{Error, Result};
use crate::fsm::context::{FinalTally, FsmContext, InputEvent};
use crate::fsm::states::build_state_table;
use crate::fsm::{Fsm, StateId};
use crate::game::GameSession;
use crate::game::round::RoundEngine;

use super::events::GameEvent;
use super::ports::{Board, ButtonPort, Clock, EncoderPort, EventSink, RenderSink};
use super::render::{INDICATOR_OFF, present};
use super::screens;

pub struct GameService {
    fsm: Fsm,
    ctx: FsmContext,
    rounds: RoundEngine,
    button: ButtonWatcher,
    encoder: QuadratureDecoder,
}

impl GameService {
    /// Construct the service.  Does **not** start the FSM; call
    /// [`start`](Self::start) next.
    pub fn new(config: GameConfig) -> Self {
        let rounds = RoundEngine::new(&config);
        Self {
            fsm: Fsm::new(build_state_table(), StateId::Splash),
            ctx: FsmContext::new(config),
            rounds,
            button: ButtonWatcher::new(),
            encoder: QuadratureDecoder::new(),
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    pub fn start(&mut self, hw: &mut (impl RenderSink + Clock), sink: &mut impl EventSink) {
        self.fsm.start(&mut self.ctx);
        self.flush_screens(hw);
        sink.emit(&GameEvent::Booted(self.fsm.current_state()));
        info!("GameService started in {:?}", self.fsm.current_state());
    }

    /// Run forever: splash once, then Start → select → rounds → ending.
    pub fn run(&mut self, hw: &mut impl Board, sink: &mut impl EventSink) -> ! {
        self.start(hw, sink);
        loop {
            self.step(hw, sink);
        }
    }

    // ── Per-step orchestration ────────────────────────────────

    /// Wait for the current state's next input, tick the FSM with it, and
    /// present the queued screens.  A sensor fault abandons the session.
    pub fn step(&mut self, hw: &mut impl Board, sink: &mut impl EventSink) {
        let prev_state = self.fsm.current_state();
        let level = self.ctx.session.as_ref().map_or(0, |s| s.level);

        let input = match self.next_input(hw) {
            Ok(input) => input,
            Err(e) => {
                self.handle_fault(e, hw, sink);
                return;
            }
        };

        if let Some(InputEvent::RoundPlayed(result)) = input {
            sink.emit(&GameEvent::RoundFinished { level, result });
        }

        self.ctx.input = input;
        self.fsm.tick(&mut self.ctx);
        self.ctx.input = None;
        self.flush_screens(hw);

        let new_state = self.fsm.current_state();
        if new_state != prev_state {
            self.on_state_changed(prev_state, new_state, sink);
        }
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn state(&self) -> StateId {
        self.fsm.current_state()
    }

    /// The live session while in `RoundLoop`.
    pub fn session(&self) -> Option<&GameSession> {
        self.ctx.session.as_ref()
    }

    /// Highlighted difficulty index on the selection screen.
    pub fn selection(&self) -> usize {
        self.ctx.selection
    }

    /// Outcome of the most recent finished session.
    pub fn last_tally(&self) -> Option<FinalTally> {
        self.ctx.final_tally
    }

    // ── Internal ──────────────────────────────────────────────

    /// Block until the current state has something to react to.
    fn next_input(&mut self, hw: &mut impl Board) -> Result<Option<InputEvent>> {
        match self.fsm.current_state() {
            StateId::Splash => {
                for frame in screens::splash_frames() {
                    present(hw, &frame);
                }
                Ok(Some(InputEvent::IntroFinished))
            }
            StateId::Start | StateId::Win | StateId::Lose => {
                self.wait_for_press(hw);
                hw.set_indicator(INDICATOR_OFF);
                Ok(Some(InputEvent::ButtonPressed))
            }
            StateId::DifficultySelect => Ok(Some(self.poll_selection(hw))),
            StateId::RoundLoop => {
                let Some(s) = self.ctx.session else {
                    return Ok(None);
                };
                let result = self
                    .rounds
                    .play_round(hw, s.level, s.difficulty, s.score, s.hearts)?;
                Ok(Some(InputEvent::RoundPlayed(result)))
            }
        }
    }

    fn wait_for_press(&mut self, hw: &mut (impl ButtonPort + Clock)) {
        loop {
            let pressed = hw.read_button();
            if let Some(ButtonEvent::Pressed) = self.button.poll_once(pressed) {
                hw.sleep_ms(self.ctx.config.button_settle_ms);
                return;
            }
            hw.sleep_ms(self.ctx.config.button_poll_ms);
        }
    }

    /// Encoder is checked before the button on every pass.
    fn poll_selection(&mut self, hw: &mut (impl ButtonPort + EncoderPort + Clock)) -> InputEvent {
        loop {
            let (a, b) = hw.read_encoder_channels();
            if let Some(turn) = self.encoder.poll_once(a, b) {
                return InputEvent::EncoderTurned(turn);
            }

            let pressed = hw.read_button();
            if let Some(ButtonEvent::Pressed) = self.button.poll_once(pressed) {
                hw.sleep_ms(self.ctx.config.button_settle_ms);
                return InputEvent::ButtonPressed;
            }

            hw.sleep_ms(self.ctx.config.select_poll_ms);
        }
    }

    fn handle_fault(&mut self, err: Error, hw: &mut impl Board, sink: &mut impl EventSink) {
        warn!("Round aborted: {}", err);
        if let Error::Sensor(sensor) = err {
            sink.emit(&GameEvent::SensorFault(sensor));
        }

        present(hw, &screens::sensor_fault(self.ctx.config.fault_dwell_ms));

        let prev_state = self.fsm.current_state();
        self.ctx.session = None;
        self.fsm.force_transition(StateId::Start, &mut self.ctx);
        self.flush_screens(hw);
        if prev_state != StateId::Start {
            self.on_state_changed(prev_state, StateId::Start, sink);
        }
    }

    fn on_state_changed(&mut self, from: StateId, to: StateId, sink: &mut impl EventSink) {
        sink.emit(&GameEvent::StateChanged { from, to });

        match to {
            StateId::RoundLoop => {
                if let Some(s) = &self.ctx.session {
                    sink.emit(&GameEvent::DifficultyChosen(s.difficulty));
                }
            }
            StateId::Win | StateId::Lose => {
                if let Some(tally) = self.ctx.final_tally {
                    sink.emit(&GameEvent::SessionEnded(tally));
                }
            }
            _ => {}
        }

        // Each state starts from fresh edge detection.
        self.button.reset();
        self.encoder.reset();
    }

    fn flush_screens(&mut self, hw: &mut (impl RenderSink + Clock)) {
        for request in self.ctx.outbox.iter() {
            present(hw, request);
        }
        self.ctx.outbox.clear();
    }
}
