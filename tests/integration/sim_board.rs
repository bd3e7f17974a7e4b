//! Simulated handheld for integration tests.
//!
//! Time is virtual: `sleep_ms` advances the clock instantly, so a full
//! ten-round session runs in microseconds.  Inputs are scripted:
//!
//! - **Controls**: a queue of presses and encoder detents.  Each one starts
//!   on the first button/encoder read after the previous finished, and
//!   drives the pin levels over a short window of simulated time.
//! - **Player**: a queue of responses, one popped per round prompt.  The
//!   simulated player reads the action off the prompt screen and tilts
//!   accordingly.
//!
//! Every rendered screen and every emitted event is recorded.

use std::collections::VecDeque;

use tamapet::app::events::GameEvent;
use tamapet::app::ports::{
    AccelerometerPort, ButtonPort, Clock, EncoderPort, EventSink, RandomSource, RenderSink,
};
use tamapet::app::render::{RenderRequest, Rgb};
use tamapet::drivers::encoder::Rotation;
use tamapet::error::SensorError;
use tamapet::game::Action;
use tamapet::gesture::{AccelSample, Gesture};

/// Pins go active this long after a control starts.
const CONTROL_LEAD_MS: u64 = 20;
/// How long the button is held / channel A stays low.
const CONTROL_HOLD_MS: u64 = 40;
/// A control is finished this long after it starts.
const CONTROL_SPAN_MS: u64 = 100;

/// Tilt magnitude in m/s², comfortably past the default threshold.
const TILT: f32 = 5.0;
/// Delay before the player tilts, past the 50 ms baseline capture.
const REACTION_MS: u64 = 200;
/// Runaway guard: no scenario needs more than ten simulated minutes.
const HORIZON_MS: u64 = 10 * 60 * 1000;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Control {
    Press,
    Turn(Rotation),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Response {
    /// Tilt the way the prompt asks.
    Correct,
    /// Tilt a fixed direction regardless of the prompt.
    Tilt(Gesture),
    /// Hold still until the deadline.
    Freeze,
    /// The accelerometer stops answering.
    Unplug,
}

pub struct SimBoard {
    pub now_ms: u64,
    controls: VecDeque<Control>,
    active_control: Option<(Control, u64)>,
    responses: VecDeque<Response>,
    /// Response to the prompt on screen, with the time it appeared.
    active_response: Option<(Response, Gesture, u64)>,
    words: VecDeque<u32>,
    pub frames: Vec<RenderRequest>,
    pub indicator: Rgb,
    pub accel_reads: u32,
}

impl SimBoard {
    pub fn new() -> Self {
        Self {
            now_ms: 0,
            controls: VecDeque::new(),
            active_control: None,
            responses: VecDeque::new(),
            active_response: None,
            words: VecDeque::new(),
            frames: Vec::new(),
            indicator: (0, 0, 0),
            accel_reads: 0,
        }
    }

    pub fn press(&mut self) -> &mut Self {
        self.controls.push_back(Control::Press);
        self
    }

    pub fn turn(&mut self, rotation: Rotation, detents: usize) -> &mut Self {
        for _ in 0..detents {
            self.controls.push_back(Control::Turn(rotation));
        }
        self
    }

    pub fn respond(&mut self, response: Response, rounds: usize) -> &mut Self {
        for _ in 0..rounds {
            self.responses.push_back(response);
        }
        self
    }

    /// Random words handed out in order; `0` once exhausted.
    pub fn random_words(&mut self, words: &[u32]) -> &mut Self {
        self.words.extend(words.iter().copied());
        self
    }

    /// Queued controls plus the one still playing out, if any.
    pub fn controls_left(&self) -> usize {
        let playing = self
            .active_control
            .is_some_and(|(_, started)| self.now_ms < started + CONTROL_SPAN_MS);
        self.controls.len() + usize::from(playing)
    }

    pub fn frames_with(&self, text: &str) -> usize {
        self.frames.iter().filter(|f| f.has_line(text)).count()
    }

    pub fn last_frame(&self) -> &RenderRequest {
        self.frames.last().expect("nothing rendered")
    }

    /// Current control, starting the next queued one if the last finished.
    fn control(&mut self) -> Option<(Control, u64)> {
        if let Some((_, started)) = self.active_control {
            if self.now_ms >= started + CONTROL_SPAN_MS {
                self.active_control = None;
            }
        }
        if self.active_control.is_none() {
            self.active_control = self.controls.pop_front().map(|c| (c, self.now_ms));
        }
        self.active_control
    }

    fn control_engaged(&self, started: u64) -> bool {
        let t = self.now_ms;
        t >= started + CONTROL_LEAD_MS && t < started + CONTROL_LEAD_MS + CONTROL_HOLD_MS
    }
}

fn gesture_vector(g: Gesture) -> (f32, f32) {
    match g {
        Gesture::Left => (TILT, 0.0),
        Gesture::Right => (-TILT, 0.0),
        Gesture::Up => (0.0, TILT),
        Gesture::Down => (0.0, -TILT),
        Gesture::None => (0.0, 0.0),
    }
}

fn prompted_action(frame: &RenderRequest) -> Option<Action> {
    if !frame.has_line("Tilt ->") {
        return None;
    }
    Action::ALL
        .into_iter()
        .find(|a| frame.has_line(a.name()))
}

// ── Ports ─────────────────────────────────────────────────────

impl AccelerometerPort for SimBoard {
    fn read_acceleration(&mut self) -> Result<AccelSample, SensorError> {
        self.accel_reads += 1;
        let still = AccelSample::new(0.0, 0.0, 9.8);
        let Some((response, wanted, shown_at)) = self.active_response else {
            return Ok(still);
        };
        if response == Response::Unplug {
            return Err(SensorError::BusReadFailed);
        }
        if self.now_ms < shown_at + REACTION_MS {
            return Ok(still);
        }
        let (x, y) = match response {
            Response::Correct => gesture_vector(wanted),
            Response::Tilt(g) => gesture_vector(g),
            Response::Freeze | Response::Unplug => (0.0, 0.0),
        };
        Ok(AccelSample::new(x, y, 9.8))
    }
}

impl ButtonPort for SimBoard {
    fn read_button(&mut self) -> bool {
        match self.control() {
            Some((Control::Press, started)) => self.control_engaged(started),
            _ => false,
        }
    }
}

impl EncoderPort for SimBoard {
    fn read_encoder_channels(&mut self) -> (bool, bool) {
        match self.control() {
            Some((Control::Turn(rotation), started)) if self.control_engaged(started) => {
                (false, rotation == Rotation::Clockwise)
            }
            _ => (true, true),
        }
    }
}

impl RenderSink for SimBoard {
    fn render(&mut self, request: &RenderRequest) {
        self.indicator = request.indicator;
        self.active_response = prompted_action(request).map(|action| {
            let response = self.responses.pop_front().unwrap_or(Response::Freeze);
            (response, action.required_gesture(), self.now_ms)
        });
        self.frames.push(request.clone());
    }

    fn set_indicator(&mut self, colour: Rgb) {
        self.indicator = colour;
    }
}

impl Clock for SimBoard {
    fn now_ms(&self) -> u64 {
        self.now_ms
    }

    fn sleep_ms(&mut self, ms: u32) {
        self.now_ms += u64::from(ms);
        assert!(
            self.now_ms < HORIZON_MS,
            "simulation ran past its horizon; a scripted input is missing"
        );
    }
}

impl RandomSource for SimBoard {
    fn next_u32(&mut self) -> u32 {
        self.words.pop_front().unwrap_or(0)
    }
}

// ── Recording event sink ──────────────────────────────────────

#[derive(Default)]
pub struct RecordingSink {
    pub events: Vec<GameEvent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn count(&self, pred: impl Fn(&GameEvent) -> bool) -> usize {
        self.events.iter().filter(|e| pred(e)).count()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &GameEvent) {
        self.events.push(*event);
    }
}
