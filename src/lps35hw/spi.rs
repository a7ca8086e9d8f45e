use super::Interface;

use embedded_hal::blocking::spi::{Transfer, Write};
use embedded_hal::digital::v2::OutputPin;
use embedded_hal::spi::{Mode, MODE_0};

/// Clock polarity/phase the device expects (mode 3 works as well).
pub const SPI_MODE: Mode = MODE_0;

// Bit 7 of the address byte selects a read
const READ_BIT: u8 = 0x80;

/// Errors of the SPI transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SpiError<S, P> {
    Spi(S),
    ChipSelect(P),
}

/// 4-wire SPI transport with a dedicated chip-select pin.
pub struct SpiInterface<SPI, CS> {
    spi: SPI,
    cs: CS,
}

impl<SPI, CS, S, P> SpiInterface<SPI, CS>
where
    SPI: Transfer<u8, Error = S> + Write<u8, Error = S>,
    CS: OutputPin<Error = P>,
{
    pub fn new(spi: SPI, cs: CS) -> Self {
        Self { spi, cs }
    }

    pub fn release(self) -> (SPI, CS) {
        (self.spi, self.cs)
    }

    // Chip select is released even when the transfer fails.
    fn selected<R>(
        &mut self,
        f: impl FnOnce(&mut SPI) -> Result<R, S>,
    ) -> Result<R, SpiError<S, P>> {
        self.cs.set_low().map_err(SpiError::ChipSelect)?;
        let result = f(&mut self.spi).map_err(SpiError::Spi);
        self.cs.set_high().map_err(SpiError::ChipSelect)?;
        result
    }
}

impl<SPI, CS, S, P> Interface for SpiInterface<SPI, CS>
where
    SPI: Transfer<u8, Error = S> + Write<u8, Error = S>,
    CS: OutputPin<Error = P>,
{
    type Error = SpiError<S, P>;

    fn read_registers(&mut self, register: u8, buffer: &mut [u8]) -> Result<(), Self::Error> {
        self.selected(|spi| {
            spi.write(&[register | READ_BIT])?;
            buffer.fill(0);
            spi.transfer(buffer)?;
            Ok(())
        })
    }

    fn write_registers(&mut self, register: u8, data: &[u8]) -> Result<(), Self::Error> {
        self.selected(|spi| {
            spi.write(&[register & !READ_BIT])?;
            spi.write(data)
        })
    }
}
