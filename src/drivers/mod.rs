//! Peripheral drivers and input decoders.

pub mod adxl345;
pub mod button;
pub mod encoder;
