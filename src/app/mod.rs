//! Application core: game rules and orchestration, zero direct I/O.
//!
//! The service drives the FSM, plays rounds and decodes inputs.  All
//! interaction with hardware happens through **port traits** defined in
//! [`ports`], keeping this layer fully testable without real peripherals.

pub mod events;
pub mod ports;
pub mod render;
pub mod screens;
pub mod service;
