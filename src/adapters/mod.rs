//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter    | Implements          | Connects to                  |
//! |------------|---------------------|------------------------------|
//! | `board`    | AccelerometerPort   | ADXL345 driver               |
//! |            | ButtonPort          | GPIO (active-low)            |
//! |            | EncoderPort         | GPIO quadrature pair         |
//! |            | RenderSink, Clock   | delegates below              |
//! |            | RandomSource        |                              |
//! | `console`  | RenderSink          | Serial log output            |
//! | `log_sink` | EventSink           | Serial log output            |
//! | `rng`      | RandomSource        | ESP32 hardware RNG           |
//! | `time`     | Clock               | ESP32 system timer           |

pub mod board;
pub mod console;
pub mod log_sink;
pub mod rng;
pub mod time;
