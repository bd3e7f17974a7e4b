//! Random source for action picks.
//!
//! ESP-IDF: the hardware RNG via `esp_random`.  Host: `RandomState`
//! hashing of a counter, which is random per process and good enough for
//! simulation.

use crate::app::ports::RandomSource;

pub struct HardwareRng {
    #[cfg(not(target_os = "espidf"))]
    state: std::collections::hash_map::RandomState,
    #[cfg(not(target_os = "espidf"))]
    counter: u64,
}

impl Default for HardwareRng {
    fn default() -> Self {
        Self::new()
    }
}

impl HardwareRng {
    pub fn new() -> Self {
        Self {
            #[cfg(not(target_os = "espidf"))]
            state: std::collections::hash_map::RandomState::new(),
            #[cfg(not(target_os = "espidf"))]
            counter: 0,
        }
    }
}

#[cfg(target_os = "espidf")]
impl RandomSource for HardwareRng {
    fn next_u32(&mut self) -> u32 {
        // SAFETY: esp_random has no preconditions; it reads the RNG register.
        unsafe { esp_idf_sys::esp_random() }
    }
}

#[cfg(not(target_os = "espidf"))]
impl RandomSource for HardwareRng {
    fn next_u32(&mut self) -> u32 {
        use std::hash::{BuildHasher, Hasher};

        let mut hasher = self.state.build_hasher();
        hasher.write_u64(self.counter);
        self.counter = self.counter.wrapping_add(1);
        hasher.finish() as u32
    }
}
