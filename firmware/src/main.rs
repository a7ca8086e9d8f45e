//! LPS35HW demo for the Raspberry Pi Pico.
//!
//! The sensor sits on SPI0 (MISO GPIO4, CS GPIO5, SCK GPIO6, MOSI GPIO7) and its
//! INT pin on GPIO8. Readings are printed on UART0 (GPIO0/GPIO1, 9600 baud).
//! Sampling runs in one-shot mode; a pressure rise of more than 2 hPa above the
//! level seen at boot is reported through the high threshold interrupt.

#![no_std]
#![no_main]

mod console;

use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::digital::v2::{InputPin, OutputPin};
use fugit::RateExtU32;
use panic_halt as _;
use rp2040_hal as hal;
use rp2040_hal::Clock;
use rp_pico::entry;

use hal::pac;
use hal::uart::{DataBits, StopBits, UartConfig};

use lps35hw::{Config, DataRate, Lps35hw, LowPassBandwidth, SPI_MODE};

const THRESHOLD_HPA: f32 = 2.0;

#[entry]
fn main() -> ! {
    let mut pac = pac::Peripherals::take().unwrap();
    let mut watchdog = hal::Watchdog::new(pac.WATCHDOG);
    let clocks = hal::clocks::init_clocks_and_plls(
        rp_pico::XOSC_CRYSTAL_FREQ,
        pac.XOSC,
        pac.CLOCKS,
        pac.PLL_SYS,
        pac.PLL_USB,
        &mut pac.RESETS,
        &mut watchdog,
    )
    .ok()
    .unwrap();

    let mut timer = hal::Timer::new(pac.TIMER, &mut pac.RESETS, &clocks);

    let sio = hal::Sio::new(pac.SIO);
    let pins = rp_pico::Pins::new(
        pac.IO_BANK0,
        pac.PADS_BANK0,
        sio.gpio_bank0,
        &mut pac.RESETS,
    );

    let uart_pins = (pins.gpio0.reconfigure(), pins.gpio1.reconfigure());
    let uart = hal::uart::UartPeripheral::new(pac.UART0, uart_pins, &mut pac.RESETS)
        .enable(
            UartConfig::new(9600.Hz(), DataBits::Eight, None, StopBits::One),
            clocks.peripheral_clock.freq(),
        )
        .unwrap();
    let (_, uart_tx) = uart.split();
    console::init(uart_tx);

    let mut led_pin = pins.led.into_push_pull_output();
    let int_pin = pins.gpio8.into_pull_down_input();

    let spi_mosi = pins.gpio7.into_function::<hal::gpio::FunctionSpi>();
    let spi_miso = pins.gpio4.into_function::<hal::gpio::FunctionSpi>();
    let spi_sclk = pins.gpio6.into_function::<hal::gpio::FunctionSpi>();
    let spi = hal::spi::Spi::<_, _, _, 8>::new(pac.SPI0, (spi_mosi, spi_miso, spi_sclk));
    let spi = spi.init(
        &mut pac.RESETS,
        clocks.peripheral_clock.freq(),
        1.MHz(),
        SPI_MODE,
    );
    let mut cs = pins.gpio5.into_push_pull_output();
    let _ = cs.set_high();

    let config = Config::default()
        .with_data_rate(DataRate::OneShot)
        .with_low_pass(Some(LowPassBandwidth::OdrDiv9));
    let mut lps35hw = Lps35hw::new_spi(spi, cs, timer).with_config(config);

    match lps35hw.init() {
        Ok(()) => println!("LPS35HW initialization successful."),
        Err(e) => {
            println!("LPS35HW initialization failed: {:?}", e);
            loop {
                led_pin.set_high().unwrap();
                timer.delay_ms(100u32);
                led_pin.set_low().unwrap();
                timer.delay_ms(100u32);
            }
        }
    }

    let baseline = lps35hw
        .take_measurement()
        .and_then(|_| lps35hw.read_pressure())
        .unwrap_or(0.0);
    println!("Baseline P = {:.2} hPa", baseline);

    let armed = lps35hw
        .set_threshold_pressure(THRESHOLD_HPA)
        .and_then(|_| lps35hw.zero_pressure())
        .and_then(|_| lps35hw.enable_high_threshold())
        .and_then(|_| lps35hw.enable_interrupts(false, false));
    if let Err(e) = armed {
        println!("Threshold setup failed: {:?}", e);
    }

    loop {
        match lps35hw.take_measurement() {
            Ok(()) => {
                if let (Ok(temp), Ok(pres)) =
                    (lps35hw.read_temperature(), lps35hw.read_pressure())
                {
                    println!("T = {:.2} ℃", temp);
                    println!("dP = {:+.3} hPa", pres);
                }
            }
            Err(e) => println!("Measurement failed: {:?}", e),
        }

        if int_pin.is_high().unwrap_or(false) {
            if let Ok(true) = lps35hw.high_threshold_exceeded() {
                println!("Pressure rose more than {:.1} hPa\r\n", THRESHOLD_HPA);
            }
        }

        led_pin.set_high().unwrap();
        timer.delay_ms(200u32);
        led_pin.set_low().unwrap();
        timer.delay_ms(800u32);
    }
}
