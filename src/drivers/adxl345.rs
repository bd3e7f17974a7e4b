//! ADXL345 3-axis accelerometer over I2C.
//!
//! Generic over any `embedded_hal::i2c::I2c` bus, so the same driver runs on
//! the ESP-IDF I2C master and on a scripted bus in tests.
//!
//! Configured for full resolution at ±4 g, where every range shares the
//! 4 mg/LSB scale.  Readings are returned in m/s².

use embedded_hal::i2c::I2c;
use log::info;

use crate::app::ports::AccelerometerPort;
use crate::error::SensorError;
use crate::gesture::AccelSample;

/// 7-bit address with ALT ADDRESS tied low.
pub const ADXL345_ADDR: u8 = 0x53;

const REG_DEVID: u8 = 0x00;
const REG_BW_RATE: u8 = 0x2C;
const REG_POWER_CTL: u8 = 0x2D;
const REG_DATA_FORMAT: u8 = 0x31;
const REG_DATAX0: u8 = 0x32;

const DEVID: u8 = 0xE5;
/// POWER_CTL: measurement mode.
const MEASURE: u8 = 0x08;
/// DATA_FORMAT: FULL_RES | range ±4 g.
const FULL_RES_4G: u8 = 0x08 | 0x01;
/// BW_RATE: 100 Hz output data rate, matching the 10 ms sample spacing.
const RATE_100HZ: u8 = 0x0A;

const MG_PER_LSB: f32 = 0.004;
const STANDARD_GRAVITY: f32 = 9.806_65;

pub struct Adxl345<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C: I2c> Adxl345<I2C> {
    pub fn new(i2c: I2C) -> Self {
        Self {
            i2c,
            address: ADXL345_ADDR,
        }
    }

    /// Verify the device identity and start measuring.
    pub fn init(&mut self) -> Result<(), SensorError> {
        let id = self.read_register(REG_DEVID)?;
        if id != DEVID {
            return Err(SensorError::DeviceNotFound);
        }
        self.write_register(REG_BW_RATE, RATE_100HZ)?;
        self.write_register(REG_DATA_FORMAT, FULL_RES_4G)?;
        self.write_register(REG_POWER_CTL, MEASURE)?;
        info!("ADXL345 ready at 0x{:02X} (±4 g, full resolution)", self.address);
        Ok(())
    }

    /// Give the bus back (e.g. to share it with the display driver).
    pub fn release(self) -> I2C {
        self.i2c
    }

    fn read_register(&mut self, reg: u8) -> Result<u8, SensorError> {
        let mut buf = [0u8; 1];
        self.i2c
            .write_read(self.address, &[reg], &mut buf)
            .map_err(|_| SensorError::BusReadFailed)?;
        Ok(buf[0])
    }

    fn write_register(&mut self, reg: u8, value: u8) -> Result<(), SensorError> {
        self.i2c
            .write(self.address, &[reg, value])
            .map_err(|_| SensorError::BusWriteFailed)
    }
}

fn counts_to_ms2(lo: u8, hi: u8) -> f32 {
    f32::from(i16::from_le_bytes([lo, hi])) * MG_PER_LSB * STANDARD_GRAVITY
}

impl<I2C: I2c> AccelerometerPort for Adxl345<I2C> {
    fn read_acceleration(&mut self) -> Result<AccelSample, SensorError> {
        let mut raw = [0u8; 6];
        self.i2c
            .write_read(self.address, &[REG_DATAX0], &mut raw)
            .map_err(|_| SensorError::BusReadFailed)?;
        Ok(AccelSample {
            x: counts_to_ms2(raw[0], raw[1]),
            y: counts_to_ms2(raw[2], raw[3]),
            z: counts_to_ms2(raw[4], raw[5]),
        })
    }
}
