use embedded_hal::blocking::i2c::{Write, WriteRead};

use super::register::MAX_REGISTER_WIDTH;
use super::Interface;

/// Default slave address, SA0 pulled high.
pub const DEFAULT_ADDRESS: u8 = 0x5D;
/// Slave address with SA0 tied to ground.
pub const ALTERNATE_ADDRESS: u8 = 0x5C;

/// Errors of the I2C transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum I2cError<E> {
    I2c(E),
    /// More data bytes than the widest register (`MAX_REGISTER_WIDTH`) in one write
    WriteTooLong(usize),
}

/// I2C transport: the register address is sent first, the data follows in the same frame.
pub struct I2cInterface<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> I2cInterface<I2C> {
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C, E> Interface for I2cInterface<I2C>
where
    I2C: Write<Error = E> + WriteRead<Error = E>,
{
    type Error = I2cError<E>;

    fn read_registers(&mut self, register: u8, buffer: &mut [u8]) -> Result<(), Self::Error> {
        self.i2c
            .write_read(self.address, &[register], buffer)
            .map_err(I2cError::I2c)
    }

    /// Address and data go out in a single frame, so at most
    /// `MAX_REGISTER_WIDTH` data bytes fit.
    fn write_registers(&mut self, register: u8, data: &[u8]) -> Result<(), Self::Error> {
        if data.len() > MAX_REGISTER_WIDTH {
            return Err(I2cError::WriteTooLong(data.len()));
        }
        let mut frame = [0u8; MAX_REGISTER_WIDTH + 1];
        frame[0] = register;
        frame[1..=data.len()].copy_from_slice(data);
        self.i2c
            .write(self.address, &frame[..=data.len()])
            .map_err(I2cError::I2c)
    }
}
