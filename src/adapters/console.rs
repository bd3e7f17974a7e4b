//! Log-backed render sink.
//!
//! Writes each screen as `SCREEN |` records on the serial console.  The
//! OLED and NeoPixel drivers plug in behind the same [`RenderSink`] trait.

use log::{debug, info};

use crate::app::ports::RenderSink;
use crate::app::render::{INDICATOR_OFF, RenderRequest, Rgb};

#[derive(Debug)]
pub struct ConsoleRenderer {
    indicator: Rgb,
    frames: u32,
}

impl Default for ConsoleRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleRenderer {
    pub fn new() -> Self {
        Self {
            indicator: INDICATOR_OFF,
            frames: 0,
        }
    }

    /// Current indicator colour.
    pub fn indicator(&self) -> Rgb {
        self.indicator
    }

    /// Number of screens rendered so far.
    pub fn frames(&self) -> u32 {
        self.frames
    }
}

impl RenderSink for ConsoleRenderer {
    fn render(&mut self, request: &RenderRequest) {
        self.frames = self.frames.wrapping_add(1);
        self.indicator = request.indicator;

        for line in &request.lines {
            info!("SCREEN | ({:>3},{:>2}) {}", line.x, line.y, line.text);
        }
        if let Some(pet) = request.pet {
            info!("SCREEN | pet {} (score {})", pet.stage.name(), pet.score);
        }
        debug!(
            "SCREEN | led={:?} dwell={}ms",
            request.indicator, request.dwell_ms
        );
    }

    fn set_indicator(&mut self, colour: Rgb) {
        self.indicator = colour;
        debug!("SCREEN | led={:?}", colour);
    }
}
