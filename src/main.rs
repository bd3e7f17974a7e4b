//! TamaPet firmware: main entry point.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                   Adapters (outer ring)                    │
//! │                                                            │
//! │  BoardAdapter                         LogEventSink         │
//! │  (ADXL345 · encoder pins · console)   (EventSink)          │
//! │  SystemClock · HardwareRng                                 │
//! │                                                            │
//! │  ──────────────── Port Trait Boundary ───────────────      │
//! │                                                            │
//! │  ┌──────────────────────────────────────────────────┐      │
//! │  │           GameService (pure logic)               │      │
//! │  │  FSM · RoundEngine · GestureDetector             │      │
//! │  └──────────────────────────────────────────────────┘      │
//! └────────────────────────────────────────────────────────────┘
//! ```

use anyhow::Result;
use esp_idf_hal::gpio::{PinDriver, Pull};
use esp_idf_hal::i2c::{I2cConfig, I2cDriver};
use esp_idf_hal::prelude::*;
use log::info;

use tamapet::adapters::board::{BoardAdapter, EncoderPins};
use tamapet::adapters::console::ConsoleRenderer;
use tamapet::adapters::log_sink::LogEventSink;
use tamapet::app::service::GameService;
use tamapet::config::GameConfig;
use tamapet::drivers::adxl345::Adxl345;
use tamapet::error::Error;
use tamapet::pins;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("TamaPet v{}", env!("CARGO_PKG_VERSION"));

    let config = GameConfig::default();
    config.validate()?;

    // ── 2. Peripherals ────────────────────────────────────────
    let peripherals = Peripherals::take()?;

    info!(
        "I2C on SDA=GPIO{} SCL=GPIO{} @ {} Hz",
        pins::I2C_SDA_GPIO,
        pins::I2C_SCL_GPIO,
        pins::I2C_BAUD_HZ
    );
    let i2c = I2cDriver::new(
        peripherals.i2c0,
        peripherals.pins.gpio5,
        peripherals.pins.gpio6,
        &I2cConfig::new().baudrate(pins::I2C_BAUD_HZ.Hz().into()),
    )?;
    let mut accel = Adxl345::new(i2c);
    accel.init().map_err(Error::from)?;

    let mut rot_a = PinDriver::input(peripherals.pins.gpio2)?;
    rot_a.set_pull(Pull::Up)?;
    let mut rot_b = PinDriver::input(peripherals.pins.gpio3)?;
    rot_b.set_pull(Pull::Up)?;
    let mut rot_btn = PinDriver::input(peripherals.pins.gpio4)?;
    rot_btn.set_pull(Pull::Up)?;
    info!(
        "Encoder A=GPIO{} B=GPIO{} BTN=GPIO{}, indicator GPIO{}",
        pins::ROT_A_GPIO,
        pins::ROT_B_GPIO,
        pins::ROT_BTN_GPIO,
        pins::NEOPIXEL_GPIO
    );

    let mut board = BoardAdapter::new(
        accel,
        EncoderPins {
            a: rot_a,
            b: rot_b,
            button: rot_btn,
        },
        ConsoleRenderer::new(),
    );
    let mut sink = LogEventSink::new();

    // ── 3. Game loop (never returns) ──────────────────────────
    let mut service = GameService::new(config);
    service.run(&mut board, &mut sink)
}
