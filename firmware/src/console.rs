// print! / println! over UART0.
// main.rs hands the transmitter half of the UART to `init` once the peripheral is enabled;
// output written before that is dropped.

use core::cell::RefCell;
use core::fmt::{self, Write};

use critical_section::Mutex;
use rp2040_hal as hal;
use rp2040_hal::gpio::bank0::{Gpio0, Gpio1};
use rp2040_hal::pac;

pub type UartPins = (
    hal::gpio::Pin<Gpio0, hal::gpio::FunctionUart, hal::gpio::PullNone>,
    hal::gpio::Pin<Gpio1, hal::gpio::FunctionUart, hal::gpio::PullNone>,
);

pub type Transmitter = hal::uart::Writer<pac::UART0, UartPins>;

static TRANSMITTER: Mutex<RefCell<Option<Transmitter>>> = Mutex::new(RefCell::new(None));

pub fn init(transmitter: Transmitter) {
    critical_section::with(|cs| TRANSMITTER.borrow_ref_mut(cs).replace(transmitter));
}

#[macro_export]
macro_rules! print {
    ($($arg:tt)*) => ($crate::console::_print(format_args!($($arg)*)));
}

#[macro_export]
macro_rules! println {
    ($fmt:expr) => ($crate::print!(concat!($fmt, "\r\n")));
    ($fmt:expr, $($arg:tt)*) => ($crate::print!(concat!($fmt, "\r\n"), $($arg)*));
}

#[doc(hidden)]
pub fn _print(args: fmt::Arguments) {
    critical_section::with(|cs| {
        if let Some(transmitter) = TRANSMITTER.borrow_ref_mut(cs).as_mut() {
            let _ = transmitter.write_fmt(args);
        }
    });
}
