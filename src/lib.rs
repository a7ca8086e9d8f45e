//! Platform agnostic driver for the ST LPS35HW water resistant pressure and
//! temperature sensor, built on the [`embedded-hal`] 0.2 blocking traits.
//!
//! The sensor is reachable over I2C or 4-wire SPI; the bus is picked when the
//! driver is constructed. The driver supports:
//! - Reading pressure (hPa) and temperature (°C).
//! - Continuous sampling at 1 to 75 Hz or one-shot conversions on demand.
//! - Capturing the current pressure as a zero reference and clearing it again.
//! - High/low pressure threshold interrupts with a configurable INT pin.
//! - The ODR/9 and ODR/20 low-pass filter.
//!
//! Waiting for the device's self-clearing bits (soft reset, one-shot
//! conversion, autozero) is bounded by [`Config::poll_timeout_ms`] and reports
//! [`Error::Timeout`] instead of blocking forever.
//!
//! ## Features
//!
//! - `defmt`: log through the `defmt` framework.
//! - `log`: log through the `log` facade.
//!
//! ## Example
//!
//! ```
//! # use embedded_hal_mock::delay::MockNoop as Delay;
//! # use embedded_hal_mock::i2c::{Mock as I2cMock, Transaction as I2cTransaction};
//! # let i2c = I2cMock::new(&[
//! #     I2cTransaction::write_read(0x5D, vec![0x0F], vec![0xB1]),
//! #     I2cTransaction::write_read(0x5D, vec![0x11], vec![0x10]),
//! #     I2cTransaction::write(0x5D, vec![0x11, 0x14]),
//! #     I2cTransaction::write_read(0x5D, vec![0x11], vec![0x10]),
//! #     I2cTransaction::write_read(0x5D, vec![0x10], vec![0x00]),
//! #     I2cTransaction::write(0x5D, vec![0x10, 0x20]),
//! #     I2cTransaction::write_read(0x5D, vec![0x10], vec![0x20]),
//! #     I2cTransaction::write(0x5D, vec![0x10, 0x22]),
//! #     I2cTransaction::write_read(0x5D, vec![0x28], vec![0x00, 0x54, 0x3F]),
//! #     I2cTransaction::write_read(0x5D, vec![0x2B], vec![0xC4, 0x09]),
//! # ]);
//! # let delay = Delay::new();
//! use lps35hw::{Lps35hw, DEFAULT_ADDRESS};
//!
//! let mut lps35hw = Lps35hw::new_i2c(i2c, DEFAULT_ADDRESS, delay);
//! lps35hw.init().unwrap();
//!
//! let pressure = lps35hw.read_pressure().unwrap();
//! let temperature = lps35hw.read_temperature().unwrap();
//! assert_eq!(pressure, 1013.25);
//! assert_eq!(temperature, 25.0);
//! # lps35hw.release().0.release().done();
//! ```
//!
//! [`embedded-hal`]: https://github.com/rust-embedded/embedded-hal

#![no_std]

#[cfg(test)]
#[macro_use]
extern crate std;

#[macro_use]
mod fmt;

pub mod lps35hw;

pub use crate::lps35hw::config::{Config, LowPassBandwidth};
pub use crate::lps35hw::i2c::{I2cError, I2cInterface, ALTERNATE_ADDRESS, DEFAULT_ADDRESS};
pub use crate::lps35hw::spi::{SpiError, SpiInterface, SPI_MODE};
pub use crate::lps35hw::{
    pressure_from_raw, pressure_raw_from_bytes, temperature_from_bytes, threshold_to_raw,
    DataRate, Error, Interface, Lps35hw, CHIP_ID,
};
