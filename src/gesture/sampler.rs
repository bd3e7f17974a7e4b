//! Time-averaged accelerometer reads.

use crate::app::ports::{AccelerometerPort, Clock};
use crate::error::SensorError;

use super::FilteredReading;

pub struct AccelerometerSampler {
    sample_interval_ms: u32,
}

impl AccelerometerSampler {
    pub fn new(sample_interval_ms: u32) -> Self {
        debug_assert!(sample_interval_ms > 0, "sample interval must be positive");
        Self {
            sample_interval_ms: sample_interval_ms.max(1),
        }
    }

    /// Take `samples` raw readings spaced `sample_interval_ms` apart and
    /// return their per-axis mean.  `samples` of 0 is treated as 1.
    ///
    /// Blocks for `samples × sample_interval_ms`.  The first failed read
    /// aborts the burst.
    pub fn filtered_read(
        &self,
        hw: &mut (impl AccelerometerPort + Clock),
        samples: u8,
    ) -> Result<FilteredReading, SensorError> {
        let n = samples.max(1);
        let (mut sx, mut sy, mut sz) = (0.0f32, 0.0f32, 0.0f32);

        for _ in 0..n {
            let s = hw.read_acceleration()?;
            sx += s.x;
            sy += s.y;
            sz += s.z;
            hw.sleep_ms(self.sample_interval_ms);
        }

        let n = n as f32;
        Ok(FilteredReading {
            x: sx / n,
            y: sy / n,
            z: sz / n,
        })
    }
}
