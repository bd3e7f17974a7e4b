//! Render requests handed to the display/indicator collaborator.
//!
//! A [`RenderRequest`] is one complete frame: up to [`MAX_LINES`] positioned
//! text lines, an optional pet sprite, the indicator colour, and the dwell
//! time the game waits after issuing it.  Everything is fixed-capacity so a
//! frame never allocates.

use core::fmt::{self, Write};

use heapless::{String, Vec};

use crate::app::ports::{Clock, RenderSink};
use crate::game::pet::Stage;

/// Colour as (R, G, B) tuple, each 0–255.
pub type Rgb = (u8, u8, u8);

/// Indicator switched off.
pub const INDICATOR_OFF: Rgb = (0, 0, 0);

/// Widest line the 128 px panel fits with the 8 px font.
pub const LINE_CAP: usize = 16;
/// Most lines any screen uses.
pub const MAX_LINES: usize = 5;

/// A single positioned line of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextLine {
    pub text: String<LINE_CAP>,
    pub x: u8,
    pub y: u8,
}

/// The pet sprite to draw in the right-hand 40% of the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PetSprite {
    pub stage: Stage,
    pub score: u32,
}

/// One frame for the render sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRequest {
    pub lines: Vec<TextLine, MAX_LINES>,
    pub pet: Option<PetSprite>,
    pub indicator: Rgb,
    /// Milliseconds the caller blocks after rendering (0 = return at once).
    pub dwell_ms: u32,
}

impl RenderRequest {
    /// Empty frame with the given indicator colour.
    pub fn new(indicator: Rgb) -> Self {
        Self {
            lines: Vec::new(),
            pet: None,
            indicator,
            dwell_ms: 0,
        }
    }

    /// Append a literal line.  Text beyond [`LINE_CAP`] is cut off.
    #[must_use]
    pub fn line(self, x: u8, y: u8, text: &str) -> Self {
        self.text(x, y, format_args!("{text}"))
    }

    /// Append a formatted line.  Text beyond [`LINE_CAP`] is cut off.
    #[must_use]
    pub fn text(mut self, x: u8, y: u8, args: fmt::Arguments<'_>) -> Self {
        let mut out = Truncating(String::new());
        out.write_fmt(args).ok();
        let pushed = self.lines.push(TextLine { text: out.0, x, y });
        debug_assert!(pushed.is_ok(), "screen exceeds {MAX_LINES} lines");
        self
    }

    /// Draw the pet for `score`.
    #[must_use]
    pub fn with_pet(mut self, score: u32) -> Self {
        self.pet = Some(PetSprite {
            stage: Stage::from_score(score),
            score,
        });
        self
    }

    #[must_use]
    pub fn with_dwell(mut self, dwell_ms: u32) -> Self {
        self.dwell_ms = dwell_ms;
        self
    }

    /// Text of line `idx`, if present.
    pub fn line_text(&self, idx: usize) -> Option<&str> {
        self.lines.get(idx).map(|l| l.text.as_str())
    }

    /// Whether any line reads exactly `text`.
    pub fn has_line(&self, text: &str) -> bool {
        self.lines.iter().any(|l| l.text == text)
    }
}

/// `fmt::Write` adapter that silently drops characters once full.
struct Truncating(String<LINE_CAP>);

impl Write for Truncating {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for c in s.chars() {
            if self.0.push(c).is_err() {
                break;
            }
        }
        Ok(())
    }
}

/// Render `request`, hold it for its dwell time, then switch the indicator
/// off if it dwelled.
pub fn present(hw: &mut (impl RenderSink + Clock), request: &RenderRequest) {
    hw.render(request);
    if request.dwell_ms > 0 {
        hw.sleep_ms(request.dwell_ms);
        hw.set_indicator(INDICATOR_OFF);
    }
}
