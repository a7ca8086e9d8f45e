//! Settings applied by [`Lps35hw::init`](crate::Lps35hw::init).

use crate::lps35hw::DataRate;

/// Low-pass filter bandwidth on the pressure path (EN_LPFP/LPFP_CFG).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LowPassBandwidth {
    /// ODR / 9
    OdrDiv9,
    /// ODR / 20
    OdrDiv20,
}

/// Driver configuration.
///
/// The defaults reproduce the state the driver has always brought the sensor
/// into: continuous sampling at 10 Hz with block data update enabled and the
/// low-pass filter off.
///
/// ```
/// use lps35hw::{Config, DataRate, LowPassBandwidth};
///
/// let config = Config::default()
///     .with_data_rate(DataRate::Hz25)
///     .with_low_pass(Some(LowPassBandwidth::OdrDiv20));
/// assert_eq!(config.data_rate, DataRate::Hz25);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Output data rate written after the soft reset
    pub data_rate: DataRate,
    /// Keep the output registers frozen until all bytes of a sample are read
    pub block_data_update: bool,
    /// Optional low-pass filter enabled during init
    pub low_pass: Option<LowPassBandwidth>,
    /// Upper bound on waiting for a self-clearing bit (soft reset, one-shot
    /// conversion, autozero), polled every millisecond
    pub poll_timeout_ms: u32,
}

impl Config {
    pub const DEFAULT_POLL_TIMEOUT_MS: u32 = 100;

    pub const fn new() -> Self {
        Self {
            data_rate: DataRate::Hz10,
            block_data_update: true,
            low_pass: None,
            poll_timeout_ms: Self::DEFAULT_POLL_TIMEOUT_MS,
        }
    }

    pub const fn with_data_rate(mut self, data_rate: DataRate) -> Self {
        self.data_rate = data_rate;
        self
    }

    pub const fn with_block_data_update(mut self, enabled: bool) -> Self {
        self.block_data_update = enabled;
        self
    }

    pub const fn with_low_pass(mut self, low_pass: Option<LowPassBandwidth>) -> Self {
        self.low_pass = low_pass;
        self
    }

    pub const fn with_poll_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.poll_timeout_ms = timeout_ms;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
