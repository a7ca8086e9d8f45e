pub mod config;
pub mod i2c;
pub mod register;
pub mod spi;

use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::blocking::spi::{Transfer, Write};
use embedded_hal::digital::v2::OutputPin;

use self::config::{Config, LowPassBandwidth};
use self::i2c::I2cInterface;
use self::register::{BitField, Register};
use self::spi::SpiInterface;

/// Expected WHO_AM_I value.
pub const CHIP_ID: u8 = 0xB1;

/// Counts per hPa of PRESS_OUT.
const PRESSURE_SCALE: f32 = 4096.0;
/// Counts per °C of TEMP_OUT.
const TEMPERATURE_SCALE: f32 = 100.0;
/// Counts per hPa of THS_P.
const THRESHOLD_SCALE: f32 = 16.0;

const POLL_INTERVAL_MS: u32 = 1;

/// Byte-level register access, implemented for I2C and SPI.
pub trait Interface {
    type Error;

    /// Reads `buffer.len()` consecutive registers starting at `register`.
    fn read_registers(&mut self, register: u8, buffer: &mut [u8]) -> Result<(), Self::Error>;

    /// Writes `data` to consecutive registers starting at `register`.
    /// A transport that cannot carry `data` in one transfer returns an error.
    fn write_registers(&mut self, register: u8, data: &[u8]) -> Result<(), Self::Error>;
}

/// Driver errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// The bus transfer failed
    Interface(E),
    /// WHO_AM_I did not read 0xB1
    ChipId(u8),
    /// A self-clearing bit was still set after the configured poll timeout
    Timeout,
    /// The ODR field holds an encoding outside the defined data rates
    UnknownDataRate(u8),
}

/// Output data rate (ODR field of CTRL_REG1).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum DataRate {
    /// Power-down; conversions only happen on [`Lps35hw::take_measurement`]
    OneShot = 0b000,
    Hz1 = 0b001,
    Hz10 = 0b010,
    Hz25 = 0b011,
    Hz50 = 0b100,
    Hz75 = 0b101,
}

impl TryFrom<u8> for DataRate {
    type Error = u8;

    fn try_from(bits: u8) -> Result<Self, u8> {
        match bits {
            0b000 => Ok(DataRate::OneShot),
            0b001 => Ok(DataRate::Hz1),
            0b010 => Ok(DataRate::Hz10),
            0b011 => Ok(DataRate::Hz25),
            0b100 => Ok(DataRate::Hz50),
            0b101 => Ok(DataRate::Hz75),
            other => Err(other),
        }
    }
}

/// Sign-extends a 24-bit PRESS_OUT sample (LSB first) to a 32-bit count.
pub fn pressure_raw_from_bytes(bytes: [u8; 3]) -> i32 {
    // place the sample in the top three bytes and shift back down arithmetically
    i32::from_le_bytes([0, bytes[0], bytes[1], bytes[2]]) >> 8
}

/// Converts PRESS_OUT counts to hPa.
pub fn pressure_from_raw(raw: i32) -> f32 {
    raw as f32 / PRESSURE_SCALE
}

/// Converts TEMP_OUT bytes (LSB first) to °C.
pub fn temperature_from_bytes(bytes: [u8; 2]) -> f32 {
    i16::from_le_bytes(bytes) as f32 / TEMPERATURE_SCALE
}

/// Encodes a threshold in hPa as THS_P counts, rounded to nearest and saturated
/// to the register range. NaN encodes as 0.
pub fn threshold_to_raw(threshold_hpa: f32) -> u16 {
    // float to int `as` casts saturate, so negative inputs land on 0
    (threshold_hpa * THRESHOLD_SCALE + 0.5) as u16
}

/// LPS35HW driver.
///
/// Owns one bus interface and a delay provider used while waiting for the
/// device to clear its self-clearing control bits.
pub struct Lps35hw<IF, D> {
    interface: IF,
    delay: D,
    config: Config,
}

impl<I2C, D> Lps35hw<I2cInterface<I2C>, D> {
    /// Creates a driver talking I2C to the device at `address`
    /// (see [`i2c::DEFAULT_ADDRESS`]).
    pub fn new_i2c(i2c: I2C, address: u8, delay: D) -> Self {
        Self::new(I2cInterface::new(i2c, address), delay)
    }
}

impl<SPI, CS, D, S, P> Lps35hw<SpiInterface<SPI, CS>, D>
where
    SPI: Transfer<u8, Error = S> + Write<u8, Error = S>,
    CS: OutputPin<Error = P>,
{
    /// Creates a driver talking SPI with `cs` as chip select.
    pub fn new_spi(spi: SPI, cs: CS, delay: D) -> Self {
        Self::new(SpiInterface::new(spi, cs), delay)
    }
}

impl<IF, D> Lps35hw<IF, D> {
    /// Creates a driver over any [`Interface`] with the default [`Config`].
    pub fn new(interface: IF, delay: D) -> Self {
        Self {
            interface,
            delay,
            config: Config::default(),
        }
    }

    /// Replaces the configuration used by [`init`](Self::init) and the poll loops.
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Configuration applied by [`init`](Self::init).
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Gives back the bus interface and delay provider.
    pub fn release(self) -> (IF, D) {
        (self.interface, self.delay)
    }
}

impl<IF, D> Lps35hw<IF, D>
where
    IF: Interface,
    D: DelayMs<u32>,
{
    /// Checks the chip identity, soft resets the device and applies the configuration.
    ///
    /// # Errors
    /// - `ChipId` if WHO_AM_I is not 0xB1
    /// - `Interface` on any bus failure
    /// - `Timeout` if the reset bit never clears
    pub fn init(&mut self) -> Result<(), Error<IF::Error>> {
        let chip_id = self.read_register(Register::WhoAmI)? as u8;
        if chip_id != CHIP_ID {
            warn!("lps35hw: unexpected chip id {:#x}", chip_id);
            return Err(Error::ChipId(chip_id));
        }
        debug!("lps35hw: chip id ok");

        self.reset()?;

        let config = self.config;
        self.set_data_rate(config.data_rate)?;
        self.write_field(register::BLOCK_DATA_UPDATE, config.block_data_update as u8)?;
        if let Some(bandwidth) = config.low_pass {
            self.enable_low_pass(bandwidth == LowPassBandwidth::OdrDiv20)?;
        }
        Ok(())
    }

    /// Soft reset: every configuration register returns to its power-on value.
    pub fn reset(&mut self) -> Result<(), Error<IF::Error>> {
        debug!("lps35hw: soft reset");
        self.write_field(register::SOFT_RESET, 1)?;
        self.wait_for_clear(register::SOFT_RESET)
    }

    /// Temperature in °C.
    pub fn read_temperature(&mut self) -> Result<f32, Error<IF::Error>> {
        let mut bytes = [0u8; 2];
        self.read_bytes(Register::TempOut, &mut bytes)?;
        Ok(temperature_from_bytes(bytes))
    }

    /// Sign-extended PRESS_OUT counts (4096 per hPa).
    pub fn read_pressure_raw(&mut self) -> Result<i32, Error<IF::Error>> {
        let mut bytes = [0u8; 3];
        self.read_bytes(Register::PressOut, &mut bytes)?;
        Ok(pressure_raw_from_bytes(bytes))
    }

    /// Pressure in hPa, relative to the reference captured by
    /// [`zero_pressure`](Self::zero_pressure) if one is active.
    pub fn read_pressure(&mut self) -> Result<f32, Error<IF::Error>> {
        self.read_pressure_raw().map(pressure_from_raw)
    }

    /// Triggers a single conversion and waits for it to complete.
    ///
    /// Only meaningful with [`DataRate::OneShot`]; in continuous modes the
    /// output registers are refreshed by the device on its own.
    pub fn take_measurement(&mut self) -> Result<(), Error<IF::Error>> {
        self.write_field(register::ONE_SHOT, 1)?;
        self.wait_for_clear(register::ONE_SHOT)
    }

    /// Captures the current pressure as the zero reference. Later readings are
    /// reported relative to it until [`reset_pressure`](Self::reset_pressure).
    pub fn zero_pressure(&mut self) -> Result<(), Error<IF::Error>> {
        self.write_field(register::AUTOZERO, 1)?;
        self.wait_for_clear(register::AUTOZERO)
    }

    /// Drops the zero reference so readings are absolute again.
    pub fn reset_pressure(&mut self) -> Result<(), Error<IF::Error>> {
        self.write_field(register::RESET_AUTOZERO, 1)
    }

    /// Sets the pressure threshold, in hPa measured from zero, used by the
    /// high and low threshold interrupts.
    pub fn set_threshold_pressure(&mut self, threshold_hpa: f32) -> Result<(), Error<IF::Error>> {
        let raw = threshold_to_raw(threshold_hpa);
        trace!("lps35hw: threshold {} counts", raw);
        self.write_register(Register::ThsP, raw as u32)
    }

    /// THS_P register value, in 1/16 hPa.
    pub fn threshold_pressure_raw(&mut self) -> Result<u16, Error<IF::Error>> {
        Ok(self.read_register(Register::ThsP)? as u16)
    }

    /// Threshold pressure in hPa.
    pub fn threshold_pressure(&mut self) -> Result<f32, Error<IF::Error>> {
        Ok(self.threshold_pressure_raw()? as f32 / THRESHOLD_SCALE)
    }

    /// Enables the high pressure event and routes it to the INT pin.
    pub fn enable_high_threshold(&mut self) -> Result<(), Error<IF::Error>> {
        self.write_field(register::HIGH_PRESSURE_EVENT, 1)?;
        self.write_field(register::INT_PIN_HIGH, 1)
    }

    /// Enables the low pressure event and routes it to the INT pin.
    pub fn enable_low_threshold(&mut self) -> Result<(), Error<IF::Error>> {
        self.write_field(register::LOW_PRESSURE_EVENT, 1)?;
        self.write_field(register::INT_PIN_LOW, 1)
    }

    /// Configures the INT pin and turns on latched threshold interrupts.
    /// The thresholds themselves are enabled separately with
    /// [`enable_high_threshold`](Self::enable_high_threshold) and
    /// [`enable_low_threshold`](Self::enable_low_threshold).
    pub fn enable_interrupts(
        &mut self,
        active_low: bool,
        open_drain: bool,
    ) -> Result<(), Error<IF::Error>> {
        self.write_field(
            register::INT_PIN_MODE,
            (active_low as u8) << 1 | open_drain as u8,
        )?;
        self.write_field(register::INTERRUPT_LATCH, 0b11)
    }

    /// Turns off latched threshold interrupts; the INT pin routing stays as is.
    pub fn disable_interrupts(&mut self) -> Result<(), Error<IF::Error>> {
        self.write_field(register::INTERRUPT_LATCH, 0b00)
    }

    /// `true` if the high threshold was crossed since the last check.
    /// Reading INT_SOURCE clears the latched event.
    pub fn high_threshold_exceeded(&mut self) -> Result<bool, Error<IF::Error>> {
        Ok(self.read_register(Register::IntSource)? as u8 == register::INT_SOURCE_HIGH_EVENT)
    }

    /// `true` if the low threshold was crossed since the last check.
    /// Reading INT_SOURCE clears the latched event.
    pub fn low_threshold_exceeded(&mut self) -> Result<bool, Error<IF::Error>> {
        Ok(self.read_register(Register::IntSource)? as u8 == register::INT_SOURCE_LOW_EVENT)
    }

    /// Enables the low-pass filter with ODR/9 bandwidth, or ODR/20 when
    /// `extra_low_bandwidth` is set.
    pub fn enable_low_pass(&mut self, extra_low_bandwidth: bool) -> Result<(), Error<IF::Error>> {
        self.write_field(register::LOW_PASS_FILTER, 0b10 | extra_low_bandwidth as u8)
    }

    /// Turns the low-pass filter off.
    pub fn disable_low_pass(&mut self) -> Result<(), Error<IF::Error>> {
        self.write_field(register::LOW_PASS_FILTER, 0b00)
    }

    /// Selects one-shot mode or a continuous output data rate.
    pub fn set_data_rate(&mut self, rate: DataRate) -> Result<(), Error<IF::Error>> {
        debug!("lps35hw: data rate {}", rate as u8);
        self.write_field(register::OUTPUT_DATA_RATE, rate as u8)
    }

    /// Reads the output data rate back from CTRL_REG1.
    pub fn data_rate(&mut self) -> Result<DataRate, Error<IF::Error>> {
        let bits = self.read_field(register::OUTPUT_DATA_RATE)?;
        DataRate::try_from(bits).map_err(Error::UnknownDataRate)
    }

    fn read_bytes(&mut self, reg: Register, buffer: &mut [u8]) -> Result<(), Error<IF::Error>> {
        self.interface
            .read_registers(reg.address(), buffer)
            .map_err(Error::Interface)
    }

    /// Reads the full register value, assembled least-significant byte first.
    fn read_register(&mut self, reg: Register) -> Result<u32, Error<IF::Error>> {
        let mut buffer = [0u8; register::MAX_REGISTER_WIDTH];
        let bytes = &mut buffer[..reg.width()];
        self.read_bytes(reg, bytes)?;
        Ok(register::from_le_bytes(bytes))
    }

    fn write_register(&mut self, reg: Register, value: u32) -> Result<(), Error<IF::Error>> {
        let bytes = value.to_le_bytes();
        self.interface
            .write_registers(reg.address(), &bytes[..reg.width()])
            .map_err(Error::Interface)
    }

    fn read_field(&mut self, field: BitField) -> Result<u8, Error<IF::Error>> {
        let value = self.read_register(field.register)? as u8;
        Ok(field.extract(value))
    }

    fn write_field(&mut self, field: BitField, value: u8) -> Result<(), Error<IF::Error>> {
        let current = self.read_register(field.register)? as u8;
        self.write_register(field.register, field.insert(current, value) as u32)
    }

    fn wait_for_clear(&mut self, field: BitField) -> Result<(), Error<IF::Error>> {
        let mut waited_ms = 0;
        loop {
            if self.read_field(field)? == 0 {
                return Ok(());
            }
            if waited_ms >= self.config.poll_timeout_ms {
                warn!(
                    "lps35hw: register {:#x} bit {} still set after {} ms",
                    field.register.address(),
                    field.offset,
                    waited_ms
                );
                return Err(Error::Timeout);
            }
            self.delay.delay_ms(POLL_INTERVAL_MS);
            waited_ms += POLL_INTERVAL_MS;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal_mock::delay::MockNoop;
    use embedded_hal_mock::i2c::{Mock as I2cMock, Transaction as I2cTransaction};
    use embedded_hal_mock::pin::{Mock as PinMock, State as PinState, Transaction as PinTransaction};
    use embedded_hal_mock::spi::{Mock as SpiMock, Transaction as SpiTransaction};
    use embedded_hal_mock::MockError;
    use std::io::ErrorKind;
    use std::vec::Vec;

    const ADDR: u8 = i2c::DEFAULT_ADDRESS;

    fn read(register: u8, response: Vec<u8>) -> I2cTransaction {
        I2cTransaction::write_read(ADDR, vec![register], response)
    }

    fn write(register: u8, value: u8) -> I2cTransaction {
        I2cTransaction::write(ADDR, vec![register, value])
    }

    fn driver(expectations: &[I2cTransaction]) -> Lps35hw<I2cInterface<I2cMock>, MockNoop> {
        Lps35hw::new_i2c(I2cMock::new(expectations), ADDR, MockNoop::new())
    }

    fn finish(lps: Lps35hw<I2cInterface<I2cMock>, MockNoop>) {
        let (interface, _) = lps.release();
        interface.release().done();
    }

    #[test]
    fn pressure_sign_extension() {
        assert_eq!(pressure_raw_from_bytes([0x00, 0x00, 0x80]), -8_388_608);
        assert_eq!(pressure_raw_from_bytes([0xFF, 0xFF, 0xFF]), -1);
        assert_eq!(pressure_raw_from_bytes([0x01, 0x00, 0x00]), 1);
        assert_eq!(pressure_raw_from_bytes([0xFF, 0xFF, 0x7F]), 8_388_607);
        assert_eq!(pressure_from_raw(-8_388_608), -2048.0);
        assert_eq!(pressure_from_raw(1), 1.0 / 4096.0);
    }

    #[test]
    fn temperature_scaling() {
        assert_eq!(temperature_from_bytes([0xC4, 0x09]), 25.0);
        assert_eq!(temperature_from_bytes([0x0C, 0xFE]), -5.0);
    }

    #[test]
    fn threshold_rounding() {
        assert_eq!(threshold_to_raw(20.0), 320);
        assert_eq!(threshold_to_raw(1.03), 16);
        assert_eq!(threshold_to_raw(1.04), 17);
        assert_eq!(threshold_to_raw(-3.0), 0);
        assert_eq!(threshold_to_raw(1.0e6), u16::MAX);
    }

    #[test]
    fn data_rate_encodings() {
        assert_eq!(DataRate::try_from(0b010), Ok(DataRate::Hz10));
        assert_eq!(DataRate::try_from(0b101), Ok(DataRate::Hz75));
        assert_eq!(DataRate::try_from(0b110), Err(0b110));
        assert_eq!(DataRate::try_from(0b111), Err(0b111));
    }

    #[test]
    fn init_resets_and_configures() {
        let mut lps = driver(&[
            read(0x0F, vec![0xB1]),
            // soft reset, bit clears on the second poll
            read(0x11, vec![0x10]),
            write(0x11, 0x14),
            read(0x11, vec![0x14]),
            read(0x11, vec![0x10]),
            // 10 Hz
            read(0x10, vec![0x00]),
            write(0x10, 0x20),
            // block data update
            read(0x10, vec![0x20]),
            write(0x10, 0x22),
        ]);
        lps.init().unwrap();
        finish(lps);
    }

    #[test]
    fn init_with_low_pass_config() {
        let config = Config::default()
            .with_data_rate(DataRate::OneShot)
            .with_block_data_update(false)
            .with_low_pass(Some(LowPassBandwidth::OdrDiv20));
        let mut lps = driver(&[
            read(0x0F, vec![0xB1]),
            read(0x11, vec![0x10]),
            write(0x11, 0x14),
            read(0x11, vec![0x10]),
            read(0x10, vec![0x22]),
            write(0x10, 0x02),
            read(0x10, vec![0x02]),
            write(0x10, 0x00),
            read(0x10, vec![0x00]),
            write(0x10, 0x0C),
        ])
        .with_config(config);
        lps.init().unwrap();
        finish(lps);
    }

    #[test]
    fn init_rejects_wrong_chip() {
        let mut lps = driver(&[read(0x0F, vec![0xB3])]);
        assert!(matches!(lps.init(), Err(Error::ChipId(0xB3))));
        finish(lps);
    }

    #[test]
    fn init_reports_bus_failure() {
        let mut lps = driver(&[read(0x0F, vec![0x00]).with_error(MockError::Io(ErrorKind::Other))]);
        assert!(matches!(lps.init(), Err(Error::Interface(_))));
        finish(lps);
    }

    #[test]
    fn read_temperature() {
        let mut lps = driver(&[read(0x2B, vec![0xC4, 0x09])]);
        assert_eq!(lps.read_temperature().unwrap(), 25.0);
        finish(lps);
    }

    #[test]
    fn read_pressure() {
        let mut lps = driver(&[
            read(0x28, vec![0x00, 0x54, 0x3F]),
            read(0x28, vec![0x00, 0x00, 0x80]),
        ]);
        assert_eq!(lps.read_pressure().unwrap(), 1013.25);
        assert_eq!(lps.read_pressure().unwrap(), -2048.0);
        finish(lps);
    }

    #[test]
    fn take_measurement_waits_for_one_shot() {
        let mut lps = driver(&[
            read(0x11, vec![0x10]),
            write(0x11, 0x11),
            read(0x11, vec![0x11]),
            read(0x11, vec![0x11]),
            read(0x11, vec![0x10]),
        ]);
        lps.take_measurement().unwrap();
        finish(lps);
    }

    #[test]
    fn take_measurement_times_out() {
        let mut lps = driver(&[
            read(0x11, vec![0x00]),
            write(0x11, 0x01),
            read(0x11, vec![0x01]),
            read(0x11, vec![0x01]),
            read(0x11, vec![0x01]),
        ])
        .with_config(Config::default().with_poll_timeout_ms(2));
        assert!(matches!(lps.take_measurement(), Err(Error::Timeout)));
        finish(lps);
    }

    #[test]
    fn zero_and_reset_pressure() {
        let mut lps = driver(&[
            read(0x0B, vec![0x00]),
            write(0x0B, 0x20),
            read(0x0B, vec![0x00]),
            read(0x0B, vec![0x00]),
            write(0x0B, 0x10),
        ]);
        lps.zero_pressure().unwrap();
        lps.reset_pressure().unwrap();
        finish(lps);
    }

    #[test]
    fn threshold_round_trip() {
        let mut lps = driver(&[
            I2cTransaction::write(ADDR, vec![0x0C, 0x40, 0x01]),
            read(0x0C, vec![0x40, 0x01]),
            read(0x0C, vec![0x40, 0x01]),
        ]);
        lps.set_threshold_pressure(20.0).unwrap();
        assert_eq!(lps.threshold_pressure_raw().unwrap(), 320);
        assert_eq!(lps.threshold_pressure().unwrap(), 20.0);
        finish(lps);
    }

    #[test]
    fn threshold_interrupts() {
        let mut lps = driver(&[
            // high threshold
            read(0x0B, vec![0x00]),
            write(0x0B, 0x01),
            read(0x12, vec![0x00]),
            write(0x12, 0x01),
            // low threshold
            read(0x0B, vec![0x01]),
            write(0x0B, 0x03),
            read(0x12, vec![0x01]),
            write(0x12, 0x03),
            // active low, push-pull
            read(0x12, vec![0x03]),
            write(0x12, 0x83),
            read(0x0B, vec![0x03]),
            write(0x0B, 0x0F),
            // disable
            read(0x0B, vec![0x0F]),
            write(0x0B, 0x03),
        ]);
        lps.enable_high_threshold().unwrap();
        lps.enable_low_threshold().unwrap();
        lps.enable_interrupts(true, false).unwrap();
        lps.disable_interrupts().unwrap();
        finish(lps);
    }

    #[test]
    fn open_drain_pin_mode() {
        let mut lps = driver(&[
            read(0x12, vec![0x00]),
            write(0x12, 0x40),
            read(0x0B, vec![0x00]),
            write(0x0B, 0x0C),
        ]);
        lps.enable_interrupts(false, true).unwrap();
        finish(lps);
    }

    #[test]
    fn threshold_status_is_exact() {
        let mut lps = driver(&[
            read(0x25, vec![0b101]),
            read(0x25, vec![0b101]),
            read(0x25, vec![0b110]),
            read(0x25, vec![0b110]),
            read(0x25, vec![0b111]),
            read(0x25, vec![0b111]),
        ]);
        assert!(lps.high_threshold_exceeded().unwrap());
        assert!(!lps.low_threshold_exceeded().unwrap());
        assert!(!lps.high_threshold_exceeded().unwrap());
        assert!(lps.low_threshold_exceeded().unwrap());
        assert!(!lps.high_threshold_exceeded().unwrap());
        assert!(!lps.low_threshold_exceeded().unwrap());
        finish(lps);
    }

    #[test]
    fn low_pass_and_data_rate() {
        let mut lps = driver(&[
            read(0x10, vec![0x22]),
            write(0x10, 0x2E),
            read(0x10, vec![0x2E]),
            write(0x10, 0x2A),
            read(0x10, vec![0x2A]),
            write(0x10, 0x22),
            read(0x10, vec![0x22]),
            write(0x10, 0x52),
            read(0x10, vec![0x52]),
            read(0x10, vec![0x62]),
        ]);
        lps.enable_low_pass(true).unwrap();
        lps.enable_low_pass(false).unwrap();
        lps.disable_low_pass().unwrap();
        lps.set_data_rate(DataRate::Hz75).unwrap();
        assert_eq!(lps.data_rate().unwrap(), DataRate::Hz75);
        assert!(matches!(
            lps.data_rate(),
            Err(Error::UnknownDataRate(0b110))
        ));
        finish(lps);
    }

    #[test]
    fn spi_init() {
        let spi = SpiMock::new(&[
            SpiTransaction::write(vec![0x8F]),
            SpiTransaction::transfer(vec![0x00], vec![0xB1]),
            SpiTransaction::write(vec![0x91]),
            SpiTransaction::transfer(vec![0x00], vec![0x10]),
            SpiTransaction::write(vec![0x11]),
            SpiTransaction::write(vec![0x14]),
            SpiTransaction::write(vec![0x91]),
            SpiTransaction::transfer(vec![0x00], vec![0x10]),
            SpiTransaction::write(vec![0x90]),
            SpiTransaction::transfer(vec![0x00], vec![0x00]),
            SpiTransaction::write(vec![0x10]),
            SpiTransaction::write(vec![0x20]),
            SpiTransaction::write(vec![0x90]),
            SpiTransaction::transfer(vec![0x00], vec![0x20]),
            SpiTransaction::write(vec![0x10]),
            SpiTransaction::write(vec![0x22]),
        ]);
        let select: Vec<PinTransaction> = (0..8)
            .flat_map(|_| {
                [
                    PinTransaction::set(PinState::Low),
                    PinTransaction::set(PinState::High),
                ]
            })
            .collect();
        let cs = PinMock::new(&select);

        let mut lps = Lps35hw::new_spi(spi, cs, MockNoop::new());
        lps.init().unwrap();

        let (interface, _) = lps.release();
        let (mut spi, mut cs) = interface.release();
        spi.done();
        cs.done();
    }
}
