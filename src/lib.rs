//! # Peripheral access crate for the ADuCRF101
//!
//! The ADuCRF101 pairs a Cortex-M3 core with an 862/928 MHz sub-GHz transceiver (reached over
//! SPI0), 128 KiB of flash and 16 KiB of SRAM. This crate describes the memory map of the device:
//! where every peripheral lives, the layout of its registers, their fields, and their values
//! after reset.
//!
//! The registers are reachable three ways:
//!
//! - through the owned peripheral singletons in [`Peripherals`], which dereference to the
//!   `RegisterBlock` of their module;
//! - through the flat pointers of [`mmr`], one per register under its datasheet name;
//! - through the bit-band alias region, see [`bb`].
//!
//! The transceiver has no registers in the core's address space. [`radio`] lists its SPI command
//! set, status byte and memory map.
//!
//! # Usage
//!
//! Enable the `rt` feature to get the device vector table and the `#[interrupt]` attribute:
//!
//! ```toml
//! [dependencies.aducrf101]
//! version = "0.1.0"
//! features = ["rt"]
//! ```
//!
//! ```rust,ignore
//! #![no_std]
//! #![no_main]
//!
//! use panic_halt as _;
//!
//! use aducrf101::{gpio, interrupt, Interrupt, Peripherals};
//! use cortex_m_rt::entry;
//!
//! #[entry]
//! fn main() -> ! {
//!     let dp = Peripherals::take().unwrap();
//!
//!     // P4.2 drives the LED
//!     dp.GP4.gpoen.modify(|_, w| w.set_bit(gpio::gpoen::P2));
//!     dp.GP4.gpclr.write(|w| w.set_bit(gpio::gpclr::P2));
//!
//!     unsafe { cortex_m::peripheral::NVIC::unmask(Interrupt::WUT) };
//!     loop {
//!         cortex_m::asm::wfi();
//!     }
//! }
//!
//! #[interrupt]
//! fn WUT() {
//!     // ...
//! }
//! ```
//!
//! # Register API
//!
//! See [`Reg`]. Fields are `const` values in the module of their register, so a write names
//! both the register and the field:
//!
//! ```rust,ignore
//! dp.SPI0.spicon.modify(|_, w| {
//!     w.set_bit(spi::spicon::MASEN)
//!         .variant(spi::spicon::MOD, spi::spicon::Mod::Tx1Rx1)
//! });
//! ```

#![cfg_attr(not(test), no_std)]
#![allow(non_camel_case_types)]

use core::fmt;
use core::marker::PhantomData;
use core::ops::Deref;

mod generic;
mod vectors;

pub use crate::generic::{
    Bit, Field, FieldValue, R, RawReg, Readable, Reg, RegisterSpec, Resettable, Writable, W,
};
pub use crate::vectors::{Interrupt, TryFromInterruptError, VECTORS};
pub use self::Interrupt as interrupt;
#[cfg(feature = "rt")]
pub use cortex_m_rt::interrupt;

pub use cortex_m::peripheral::Peripherals as CorePeripherals;
pub use cortex_m::peripheral::{CPUID, DCB, DWT, FPB, ITM, MPU, NVIC, SCB, SYST, TPIU};

/// Number of priority bits implemented by the NVIC
pub const NVIC_PRIO_BITS: u8 = 3;

pub mod adc;
pub mod bb;
pub mod clkctl;
pub mod dma;
pub mod eint;
pub mod fee;
pub mod gpio;
pub mod i2c;
pub mod misc;
pub mod mmr;
pub mod pwm;
pub mod pwrctl;
pub mod radio;
pub mod rst;
pub mod spi;
pub mod tm;
pub mod uart;
pub mod wdt;
pub mod wut;

/// Declares an owned handle to one peripheral instance
macro_rules! peripheral {
    ($(#[$attr:meta])* $NAME:ident: $module:ident @ $address:literal) => {
        $(#[$attr])*
        pub struct $NAME {
            _marker: PhantomData<*const ()>,
        }

        unsafe impl Send for $NAME {}

        impl $NAME {
            /// Base address of the register block
            pub const ADDRESS: usize = $address;
            /// Pointer to the register block
            pub const PTR: *const $module::RegisterBlock = Self::ADDRESS as *const _;

            /// Return the pointer to the register block
            #[inline(always)]
            pub const fn ptr() -> *const $module::RegisterBlock {
                Self::PTR
            }

            /// Steal an instance of this peripheral
            ///
            /// # Safety
            ///
            /// Ensure that the new instance of the peripheral cannot be used in a way that may
            /// race with any existing instances, for example by only accessing read-only or
            /// write-only registers, or by consuming the original peripheral and using critical
            /// sections to coordinate access between multiple new instances.
            #[inline]
            pub unsafe fn steal() -> Self {
                Self {
                    _marker: PhantomData,
                }
            }
        }

        impl Deref for $NAME {
            type Target = $module::RegisterBlock;

            #[inline(always)]
            fn deref(&self) -> &Self::Target {
                unsafe { &*Self::PTR }
            }
        }

        impl fmt::Debug for $NAME {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.debug_struct(stringify!($NAME)).finish()
            }
        }
    };
}

peripheral!(
    /// General purpose timer 0
    TM0: tm @ 0x4000_0000
);
peripheral!(
    /// General purpose timer 1
    TM1: tm @ 0x4000_0400
);
peripheral!(
    /// Pulse width modulation
    PWM: pwm @ 0x4000_1000
);
peripheral!(
    /// Power mode control
    PWRCTL: pwrctl @ 0x4000_2400
);
peripheral!(
    /// External interrupt configuration
    INTERRUPT: eint @ 0x4000_2420
);
peripheral!(
    /// Reset cause
    RESET: rst @ 0x4000_2440
);
peripheral!(
    /// Wake-up timer (Timer2)
    WUT: wut @ 0x4000_2500
);
peripheral!(
    /// Watchdog timer (Timer3)
    WDT: wdt @ 0x4000_2580
);
peripheral!(
    /// Flash controller
    FEE: fee @ 0x4000_2800
);
peripheral!(
    /// I2C master and slave
    I2C: i2c @ 0x4000_3000
);
peripheral!(
    /// SPI0, wired to the radio
    SPI0: spi @ 0x4000_4000
);
peripheral!(
    /// SPI1
    SPI1: spi @ 0x4000_4400
);
peripheral!(
    /// UART
    UART: uart @ 0x4000_5000
);
peripheral!(
    /// GPIO port 0
    GP0: gpio @ 0x4000_6000
);
peripheral!(
    /// GPIO port 1
    GP1: gpio @ 0x4000_6030
);
peripheral!(
    /// GPIO port 2
    GP2: gpio @ 0x4000_6060
);
peripheral!(
    /// GPIO port 3
    GP3: gpio @ 0x4000_6090
);
peripheral!(
    /// GPIO port 4
    GP4: gpio @ 0x4000_60C0
);
peripheral!(
    /// Radio test routing
    MISC: misc @ 0x4000_8820
);
peripheral!(
    /// DMA controller
    DMA: dma @ 0x4001_0000
);
peripheral!(
    /// Clock control
    CLKCTL: clkctl @ 0x4002_8000
);
peripheral!(
    /// Analog to digital converter
    ADC: adc @ 0x4005_0000
);

#[no_mangle]
static mut DEVICE_PERIPHERALS: bool = false;

/// All the device peripherals
#[allow(non_snake_case)]
pub struct Peripherals {
    pub TM0: TM0,
    pub TM1: TM1,
    pub PWM: PWM,
    pub PWRCTL: PWRCTL,
    pub INTERRUPT: INTERRUPT,
    pub RESET: RESET,
    pub WUT: WUT,
    pub WDT: WDT,
    pub FEE: FEE,
    pub I2C: I2C,
    pub SPI0: SPI0,
    pub SPI1: SPI1,
    pub UART: UART,
    pub GP0: GP0,
    pub GP1: GP1,
    pub GP2: GP2,
    pub GP3: GP3,
    pub GP4: GP4,
    pub MISC: MISC,
    pub DMA: DMA,
    pub CLKCTL: CLKCTL,
    pub ADC: ADC,
}

impl Peripherals {
    /// Returns all the peripherals *once*
    #[inline]
    pub fn take() -> Option<Self> {
        critical_section::with(|_| {
            if unsafe { DEVICE_PERIPHERALS } {
                return None;
            }
            Some(unsafe { Peripherals::steal() })
        })
    }

    /// Unchecked version of `Peripherals::take`
    ///
    /// # Safety
    ///
    /// Each of the returned peripherals must be used at most once.
    #[inline]
    pub unsafe fn steal() -> Self {
        DEVICE_PERIPHERALS = true;
        Peripherals {
            TM0: TM0::steal(),
            TM1: TM1::steal(),
            PWM: PWM::steal(),
            PWRCTL: PWRCTL::steal(),
            INTERRUPT: INTERRUPT::steal(),
            RESET: RESET::steal(),
            WUT: WUT::steal(),
            WDT: WDT::steal(),
            FEE: FEE::steal(),
            I2C: I2C::steal(),
            SPI0: SPI0::steal(),
            SPI1: SPI1::steal(),
            UART: UART::steal(),
            GP0: GP0::steal(),
            GP1: GP1::steal(),
            GP2: GP2::steal(),
            GP3: GP3::steal(),
            GP4: GP4::steal(),
            MISC: MISC::steal(),
            DMA: DMA::steal(),
            CLKCTL: CLKCTL::steal(),
            ADC: ADC::steal(),
        }
    }
}
