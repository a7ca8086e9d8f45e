//! LPS35HW register map and bit-field arithmetic.
//!
//! Multi-byte registers are transferred least-significant byte first and rely on
//! the device's address auto-increment (IF_ADD_INC, enabled after reset).

/// Largest register width in bytes (PRESS_OUT and REF_P).
pub const MAX_REGISTER_WIDTH: usize = 3;

/// Register addresses used by the driver.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Register {
    InterruptCfg = 0x0B,
    // Threshold pressure, low byte at 0x0C and high byte at 0x0D
    ThsP = 0x0C,
    // Chip identification, reads 0xB1
    WhoAmI = 0x0F,
    CtrlReg1 = 0x10,
    CtrlReg2 = 0x11,
    CtrlReg3 = 0x12,
    FifoCtrl = 0x14,
    RefP = 0x15,
    Rpds = 0x18,
    ResConf = 0x1A,
    // Latched interrupt events, cleared on read
    IntSource = 0x25,
    FifoStatus = 0x26,
    Status = 0x27,
    PressOut = 0x28,
    TempOut = 0x2B,
    LpfpRes = 0x33,
}

impl Register {
    pub const fn address(self) -> u8 {
        self as u8
    }

    /// Number of consecutive bytes making up the register value.
    pub const fn width(self) -> usize {
        match self {
            Register::ThsP | Register::Rpds | Register::TempOut => 2,
            Register::RefP | Register::PressOut => 3,
            _ => 1,
        }
    }
}

/// A contiguous run of bits inside a single-byte register.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BitField {
    pub register: Register,
    pub width: u8,
    pub offset: u8,
}

impl BitField {
    pub const fn new(register: Register, width: u8, offset: u8) -> Self {
        Self {
            register,
            width,
            offset,
        }
    }

    /// Mask of the field's bits in register position.
    pub const fn mask(&self) -> u8 {
        (((1u16 << self.width) - 1) as u8) << self.offset
    }

    /// Pulls the field value out of a full register value.
    pub const fn extract(&self, register_value: u8) -> u8 {
        (register_value & self.mask()) >> self.offset
    }

    /// Replaces the field bits in `register_value`, leaving every other bit alone.
    /// Bits of `value` beyond the field width are dropped.
    pub const fn insert(&self, register_value: u8, value: u8) -> u8 {
        (register_value & !self.mask()) | ((value << self.offset) & self.mask())
    }
}

// CTRL_REG1
pub const BLOCK_DATA_UPDATE: BitField = BitField::new(Register::CtrlReg1, 1, 1);
// EN_LPFP (bit 3) and LPFP_CFG (bit 2)
pub const LOW_PASS_FILTER: BitField = BitField::new(Register::CtrlReg1, 2, 2);
pub const OUTPUT_DATA_RATE: BitField = BitField::new(Register::CtrlReg1, 3, 4);

// CTRL_REG2
pub const ONE_SHOT: BitField = BitField::new(Register::CtrlReg2, 1, 0);
pub const SOFT_RESET: BitField = BitField::new(Register::CtrlReg2, 1, 2);

// CTRL_REG3
pub const INT_PIN_HIGH: BitField = BitField::new(Register::CtrlReg3, 1, 0);
pub const INT_PIN_LOW: BitField = BitField::new(Register::CtrlReg3, 1, 1);
// PP_OD (bit 6) and INT_H_L (bit 7)
pub const INT_PIN_MODE: BitField = BitField::new(Register::CtrlReg3, 2, 6);

// INTERRUPT_CFG
pub const HIGH_PRESSURE_EVENT: BitField = BitField::new(Register::InterruptCfg, 1, 0);
pub const LOW_PRESSURE_EVENT: BitField = BitField::new(Register::InterruptCfg, 1, 1);
// LIR (bit 2) and DIFF_EN (bit 3)
pub const INTERRUPT_LATCH: BitField = BitField::new(Register::InterruptCfg, 2, 2);
pub const RESET_AUTOZERO: BitField = BitField::new(Register::InterruptCfg, 1, 4);
pub const AUTOZERO: BitField = BitField::new(Register::InterruptCfg, 1, 5);

/// INT_SOURCE value after a latched high pressure event (IA | PH).
pub const INT_SOURCE_HIGH_EVENT: u8 = 0b101;
/// INT_SOURCE value after a latched low pressure event (IA | PL).
pub const INT_SOURCE_LOW_EVENT: u8 = 0b110;

/// Assembles an unsigned value from bytes received least-significant first.
pub fn from_le_bytes(bytes: &[u8]) -> u32 {
    bytes
        .iter()
        .rev()
        .fold(0u32, |value, &byte| (value << 8) | byte as u32)
}
