//! GPIO / peripheral pin assignments for the TamaPet handheld.
//!
//! Single source of truth for the Seeed XIAO ESP32-S3 carrier wiring.
//! The `Dn` labels are the XIAO silk-screen names.

// ---------------------------------------------------------------------------
// I2C bus (SSD1306 OLED @ 0x3C, ADXL345 @ 0x53)
// ---------------------------------------------------------------------------

/// D4: I2C data.
pub const I2C_SDA_GPIO: i32 = 5;
/// D5: I2C clock.
pub const I2C_SCL_GPIO: i32 = 6;
/// The panel is slow to wake; the bus runs at standard mode.
pub const I2C_BAUD_HZ: u32 = 100_000;

// ---------------------------------------------------------------------------
// Rotary encoder (all inputs pull-up, active LOW)
// ---------------------------------------------------------------------------

/// D1: encoder channel A.
pub const ROT_A_GPIO: i32 = 2;
/// D2: encoder channel B.
pub const ROT_B_GPIO: i32 = 3;
/// D3: encoder push switch.
pub const ROT_BTN_GPIO: i32 = 4;

// ---------------------------------------------------------------------------
// Indicator
// ---------------------------------------------------------------------------

/// D6: single WS2812 NeoPixel data line.
pub const NEOPIXEL_GPIO: i32 = 43;
