//! TamaPet firmware library.
//!
//! A tilt-gesture reflex game for a handheld virtual pet.  Exposes the
//! pure-logic modules for integration testing; all ESP-IDF-specific code
//! is guarded by `#[cfg(target_os = "espidf")]` within each module.

#![deny(unused_must_use)]

pub mod app;
pub mod config;
pub mod error;
pub mod fsm;
pub mod game;
pub mod gesture;
pub mod pins;

pub mod adapters;
pub mod drivers;
