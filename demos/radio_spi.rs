//! Reads the radio status byte over SPI0
//!
//! Port 2 is bonded to the transceiver: P2.0 to P2.2 carry SPI0, P2.3 is the chip select,
//! driven by hand, and P2.4 the radio interrupt on IRQ8. The demo waits until the radio firmware
//! takes commands, then sleeps until the radio raises its interrupt.

#![no_main]
#![no_std]

use panic_halt as _;

use aducrf101::gpio::{Direction, Gp2Function, Pin};
use aducrf101::radio::{self, Command, FirmwareState, Status};
use aducrf101::{eint, gpio, interrupt, spi, Interrupt, Peripherals, GP2, INTERRUPT};
use core::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use cortex_m_rt::entry;

static STATUS: AtomicU8 = AtomicU8::new(0);
static RADIO_IRQ: AtomicBool = AtomicBool::new(false);

#[interrupt]
fn UHFTRX() {
    // IRQ8 is level-latched: clear it or the handler re-enters
    let lines = unsafe { INTERRUPT::steal() };
    lines.eiclr.write(|w| w.set_bit(eint::eiclr::IRQ8));
    RADIO_IRQ.store(true, Ordering::Relaxed);
}

fn transfer(spi0: &spi::RegisterBlock, byte: u8) -> u8 {
    spi0.spitx.write(|w| unsafe { w.bits(byte) });
    while spi0.spista.read().variant(spi::spista::RXFSTA) == Some(spi::FifoStatus::Empty) {}
    spi0.spirx.read().bits()
}

/// Status byte, from the second of two NOPs inside one chip select
fn read_status(port: &GP2, spi0: &spi::RegisterBlock) -> Status {
    port.gpclr.write(|w| w.set_bit(gpio::gpclr::P3));
    transfer(spi0, Command::Nop.into());
    let status = transfer(spi0, Command::Nop.into());
    port.gpset.write(|w| w.set_bit(gpio::gpset::P3));
    Status::from_bits(status)
}

#[entry]
fn main() -> ! {
    let dp = Peripherals::take().unwrap();

    dp.GP2.gpcon.modify(|_, w| {
        w.function(Gp2Function::Spi0Miso)
            .function(Gp2Function::Spi0Sclk)
            .function(Gp2Function::Spi0Mosi)
            .gpio(Pin::P3)
            .function(Gp2Function::Irq8)
            .gpio(Pin::P5)
            .gpio(Pin::P6)
            .function(Gp2Function::GpioIrq7)
    });
    // Chip select idles high
    dp.GP2.gpset.write(|w| w.set_bit(gpio::gpset::P3));
    dp.GP2.gpoen.write(|w| w.direction(Pin::P3, Direction::Out));
    // The radio drives its interrupt line push-pull
    unsafe { dp.GP2.gppul.bb_clear(gpio::gppul::P4) };

    dp.SPI0.spidiv.write(|w| w.field(spi::spidiv::DIV, radio::SPI_DIV));
    dp.SPI0.spicon.write(|w| {
        w.set_bit(spi::spicon::ENABLE)
            .set_bit(spi::spicon::MASEN)
            .set_bit(spi::spicon::TIM)
            .set_bit(spi::spicon::RFLUSH)
            .set_bit(spi::spicon::TFLUSH)
    });
    dp.SPI0
        .spicon
        .modify(|_, w| w.clear_bit(spi::spicon::RFLUSH).clear_bit(spi::spicon::TFLUSH));

    let status = loop {
        let status = read_status(&dp.GP2, &dp.SPI0);
        if status.cmd_ready() && status.state() != Some(FirmwareState::Init) {
            break status;
        }
    };
    STATUS.store(status.bits(), Ordering::Relaxed);

    dp.INTERRUPT.ei2cfg.write(|w| {
        w.variant(eint::ei2cfg::IRQ8MDE, eint::Mode::HighLevel)
            .set_bit(eint::ei2cfg::IRQ8EN)
    });
    dp.INTERRUPT.eiclr.write(|w| w.set_bit(eint::eiclr::IRQ8));

    unsafe { cortex_m::peripheral::NVIC::unmask(Interrupt::UHFTRX) };

    while !RADIO_IRQ.load(Ordering::Relaxed) {
        cortex_m::asm::wfi();
    }

    loop {
        cortex_m::asm::nop();
    }
}
