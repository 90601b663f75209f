//! Blinks the LED on P4.2 from the wake-up timer
//!
//! The wake-up timer runs from the 32 kHz internal oscillator divided by 16 and restarts
//! every time it matches field D, once a second. The core sleeps in flexi mode between
//! interrupts and refreshes the watchdog, which runs from reset.

#![no_main]
#![no_std]

use panic_halt as _;

use aducrf101::{gpio, interrupt, pwrctl, wdt, wut, Interrupt, Peripherals, GP4, WDT, WUT};
use cortex_m_rt::entry;

// LFOSC / 16
const TICKS_PER_SECOND: u32 = 2048;

#[interrupt]
fn WUT() {
    let (timer, watchdog, port) = unsafe { (WUT::steal(), WDT::steal(), GP4::steal()) };

    timer.t2clri.write(|w| w.set_bit(wut::t2clri::WUFD));
    watchdog
        .t3clri
        .write(|w| w.variant(wdt::t3clri::VALUE, wdt::t3clri::Key::ClrWdg));
    port.gptgl.write(|w| w.set_bit(gpio::gptgl::P2));
}

#[entry]
fn main() -> ! {
    let dp = Peripherals::take().unwrap();

    dp.GP4.gpcon.modify(|_, w| w.gpio(gpio::Pin::P2));
    dp.GP4.gpoen.modify(|_, w| w.set_bit(gpio::gpoen::P2));

    dp.WUT.t2wufd0.write(|w| w.field(wut::t2wufd0::VALUE, TICKS_PER_SECOND & 0xFFFF));
    dp.WUT.t2wufd1.write(|w| w.field(wut::t2wufd1::VALUE, TICKS_PER_SECOND >> 16));
    dp.WUT.t2ien.write(|w| w.set_bit(wut::t2ien::WUFD));
    dp.WUT.t2con.write(|w| {
        w.variant(wut::t2con::CLK, wut::t2con::Clk::Lfosc)
            .variant(wut::t2con::PRE, wut::t2con::Pre::Div16)
            .variant(wut::t2con::MOD, wut::t2con::Mod::Periodic)
            .set_bit(wut::t2con::WUEN)
            .set_bit(wut::t2con::ENABLE)
    });
    // T2CON crosses into the 32 kHz domain
    while dp.WUT.t2sta.read().bit(wut::t2sta::CON) {}

    unsafe { cortex_m::peripheral::NVIC::unmask(Interrupt::WUT) };

    loop {
        dp.PWRCTL
            .pwrkey
            .write(|w| w.variant(pwrctl::pwrkey::VALUE, pwrctl::pwrkey::Key::Key1));
        dp.PWRCTL
            .pwrkey
            .write(|w| w.variant(pwrctl::pwrkey::VALUE, pwrctl::pwrkey::Key::Key2));
        dp.PWRCTL
            .pwrmod
            .write(|w| w.variant(pwrctl::pwrmod::MOD, pwrctl::pwrmod::Mod::Flexi));
        cortex_m::asm::wfi();
    }
}
