//! Flat register addresses
//!
//! Every register of the device as a raw pointer of its access width, under its datasheet name.
//! This is the view for code that wants `PWRMOD` rather than `PWRCTL.pwrmod`; both resolve to the
//! same address. Accesses through these pointers must be volatile.

#![allow(clippy::identity_op)]

const TM0: usize = 0x4000_0000;
const TM1: usize = 0x4000_0400;
const PWM: usize = 0x4000_1000;
const PWRCTL: usize = 0x4000_2400;
const INTERRUPT: usize = 0x4000_2420;
const RESET: usize = 0x4000_2440;
const WUT: usize = 0x4000_2500;
const WDT: usize = 0x4000_2580;
const FEE: usize = 0x4000_2800;
const I2C: usize = 0x4000_3000;
const SPI0: usize = 0x4000_4000;
const SPI1: usize = 0x4000_4400;
const UART: usize = 0x4000_5000;
const GP0: usize = 0x4000_6000;
const GP1: usize = 0x4000_6030;
const GP2: usize = 0x4000_6060;
const GP3: usize = 0x4000_6090;
const GP4: usize = 0x4000_60C0;
const MISC: usize = 0x4000_8820;
const DMA: usize = 0x4001_0000;
const CLKCTL: usize = 0x4002_8000;
const ADC: usize = 0x4005_0000;

// Timer0
pub const T0LD: *mut u16 = (TM0 + 0x00) as *mut u16;
pub const T0VAL: *mut u16 = (TM0 + 0x04) as *mut u16;
pub const T0CON: *mut u16 = (TM0 + 0x08) as *mut u16;
pub const T0CLRI: *mut u16 = (TM0 + 0x0C) as *mut u16;
pub const T0CAP: *mut u16 = (TM0 + 0x10) as *mut u16;
pub const T0STA: *mut u16 = (TM0 + 0x1C) as *mut u16;

// Timer1
pub const T1LD: *mut u16 = (TM1 + 0x00) as *mut u16;
pub const T1VAL: *mut u16 = (TM1 + 0x04) as *mut u16;
pub const T1CON: *mut u16 = (TM1 + 0x08) as *mut u16;
pub const T1CLRI: *mut u16 = (TM1 + 0x0C) as *mut u16;
pub const T1CAP: *mut u16 = (TM1 + 0x10) as *mut u16;
pub const T1STA: *mut u16 = (TM1 + 0x1C) as *mut u16;

// PWM
pub const PWMCON0: *mut u16 = (PWM + 0x00) as *mut u16;
pub const PWMCON1: *mut u16 = (PWM + 0x04) as *mut u16;
pub const PWMCLRI: *mut u16 = (PWM + 0x08) as *mut u16;

pub const PWM0COM0: *mut u16 = (PWM + 0x10) as *mut u16;
pub const PWM0COM1: *mut u16 = (PWM + 0x14) as *mut u16;
pub const PWM0COM2: *mut u16 = (PWM + 0x18) as *mut u16;
pub const PWM0LEN: *mut u16 = (PWM + 0x1C) as *mut u16;
pub const PWM1COM0: *mut u16 = (PWM + 0x20) as *mut u16;
pub const PWM1COM1: *mut u16 = (PWM + 0x24) as *mut u16;
pub const PWM1COM2: *mut u16 = (PWM + 0x28) as *mut u16;
pub const PWM1LEN: *mut u16 = (PWM + 0x2C) as *mut u16;
pub const PWM2COM0: *mut u16 = (PWM + 0x30) as *mut u16;
pub const PWM2COM1: *mut u16 = (PWM + 0x34) as *mut u16;
pub const PWM2COM2: *mut u16 = (PWM + 0x38) as *mut u16;
pub const PWM2LEN: *mut u16 = (PWM + 0x3C) as *mut u16;
pub const PWM3COM0: *mut u16 = (PWM + 0x40) as *mut u16;
pub const PWM3COM1: *mut u16 = (PWM + 0x44) as *mut u16;
pub const PWM3COM2: *mut u16 = (PWM + 0x48) as *mut u16;
pub const PWM3LEN: *mut u16 = (PWM + 0x4C) as *mut u16;

// Power control
pub const PWRMOD: *mut u16 = (PWRCTL + 0x00) as *mut u16;
pub const PWRKEY: *mut u16 = (PWRCTL + 0x04) as *mut u16;

// External interrupts
pub const EI0CFG: *mut u16 = (INTERRUPT + 0x00) as *mut u16;
pub const EI1CFG: *mut u16 = (INTERRUPT + 0x04) as *mut u16;
pub const EI2CFG: *mut u16 = (INTERRUPT + 0x08) as *mut u16;
pub const EICLR: *mut u16 = (INTERRUPT + 0x10) as *mut u16;
pub const NMICLR: *mut u16 = (INTERRUPT + 0x14) as *mut u16;

// Reset status
pub const RSTSTA: *mut u16 = (RESET + 0x00) as *mut u16;
pub const RSTCLR: *mut u16 = (RESET + 0x00) as *mut u16;

// Wake-up timer
pub const T2VAL0: *mut u16 = (WUT + 0x00) as *mut u16;
pub const T2VAL1: *mut u16 = (WUT + 0x04) as *mut u16;
pub const T2CON: *mut u16 = (WUT + 0x08) as *mut u16;
pub const T2INC: *mut u16 = (WUT + 0x0C) as *mut u16;
pub const T2WUFB0: *mut u16 = (WUT + 0x10) as *mut u16;
pub const T2WUFB1: *mut u16 = (WUT + 0x14) as *mut u16;
pub const T2WUFC0: *mut u16 = (WUT + 0x18) as *mut u16;
pub const T2WUFC1: *mut u16 = (WUT + 0x1C) as *mut u16;
pub const T2WUFD0: *mut u16 = (WUT + 0x20) as *mut u16;
pub const T2WUFD1: *mut u16 = (WUT + 0x24) as *mut u16;
pub const T2IEN: *mut u16 = (WUT + 0x28) as *mut u16;
pub const T2STA: *mut u16 = (WUT + 0x2C) as *mut u16;
pub const T2CLRI: *mut u16 = (WUT + 0x30) as *mut u16;
pub const T2WUFA0: *mut u16 = (WUT + 0x3C) as *mut u16;
pub const T2WUFA1: *mut u16 = (WUT + 0x40) as *mut u16;

// Watchdog
pub const T3LD: *mut u16 = (WDT + 0x00) as *mut u16;
pub const T3VAL: *mut u16 = (WDT + 0x04) as *mut u16;
pub const T3CON: *mut u16 = (WDT + 0x08) as *mut u16;
pub const T3CLRI: *mut u16 = (WDT + 0x0C) as *mut u16;
pub const T3STA: *mut u16 = (WDT + 0x18) as *mut u16;

// Flash controller
pub const FEESTA: *mut u16 = (FEE + 0x00) as *mut u16;
pub const FEECON0: *mut u16 = (FEE + 0x04) as *mut u16;
pub const FEECMD: *mut u16 = (FEE + 0x08) as *mut u16;
pub const FEEADR0L: *mut u16 = (FEE + 0x10) as *mut u16;
pub const FEEADR0H: *mut u16 = (FEE + 0x14) as *mut u16;
pub const FEEADR1L: *mut u16 = (FEE + 0x18) as *mut u16;
pub const FEEADR1H: *mut u16 = (FEE + 0x1C) as *mut u16;
pub const FEEKEY: *mut u16 = (FEE + 0x20) as *mut u16;
pub const FEEPROL: *mut u16 = (FEE + 0x28) as *mut u16;
pub const FEEPROH: *mut u16 = (FEE + 0x2C) as *mut u16;
pub const FEESIGL: *mut u16 = (FEE + 0x30) as *mut u16;
pub const FEESIGH: *mut u16 = (FEE + 0x34) as *mut u16;
pub const FEECON1: *mut u16 = (FEE + 0x38) as *mut u16;
pub const FEEADRAL: *mut u16 = (FEE + 0x48) as *mut u16;
pub const FEEADRAH: *mut u16 = (FEE + 0x4C) as *mut u16;
pub const FEEAEN0: *mut u16 = (FEE + 0x78) as *mut u16;
pub const FEEAEN1: *mut u16 = (FEE + 0x7C) as *mut u16;

// I2C
pub const I2CMCON: *mut u16 = (I2C + 0x00) as *mut u16;
pub const I2CMSTA: *mut u16 = (I2C + 0x04) as *mut u16;
pub const I2CMRX: *mut u8 = (I2C + 0x08) as *mut u8;
pub const I2CMTX: *mut u8 = (I2C + 0x0C) as *mut u8;
pub const I2CMRXCNT: *mut u16 = (I2C + 0x10) as *mut u16;
pub const I2CMCRXCNT: *mut u16 = (I2C + 0x14) as *mut u16;
pub const I2CADR0: *mut u8 = (I2C + 0x18) as *mut u8;
pub const I2CADR1: *mut u8 = (I2C + 0x1C) as *mut u8;
pub const I2CDIV: *mut u16 = (I2C + 0x24) as *mut u16;
pub const I2CSCON: *mut u16 = (I2C + 0x28) as *mut u16;
pub const I2CSSTA: *mut u16 = (I2C + 0x2C) as *mut u16;
pub const I2CSRX: *mut u8 = (I2C + 0x30) as *mut u8;
pub const I2CSTX: *mut u8 = (I2C + 0x34) as *mut u8;
pub const I2CALT: *mut u8 = (I2C + 0x38) as *mut u8;
pub const I2CID0: *mut u8 = (I2C + 0x3C) as *mut u8;
pub const I2CID1: *mut u8 = (I2C + 0x40) as *mut u8;
pub const I2CID2: *mut u8 = (I2C + 0x44) as *mut u8;
pub const I2CID3: *mut u8 = (I2C + 0x48) as *mut u8;
pub const I2CFSTA: *mut u16 = (I2C + 0x4C) as *mut u16;

// SPI0
pub const SPI0STA: *mut u16 = (SPI0 + 0x00) as *mut u16;
pub const SPI0RX: *mut u8 = (SPI0 + 0x04) as *mut u8;
pub const SPI0TX: *mut u8 = (SPI0 + 0x08) as *mut u8;
pub const SPI0DIV: *mut u16 = (SPI0 + 0x0C) as *mut u16;
pub const SPI0CON: *mut u16 = (SPI0 + 0x10) as *mut u16;
pub const SPI0DMA: *mut u16 = (SPI0 + 0x14) as *mut u16;
pub const SPI0CNT: *mut u16 = (SPI0 + 0x18) as *mut u16;

// SPI1
pub const SPI1STA: *mut u16 = (SPI1 + 0x00) as *mut u16;
pub const SPI1RX: *mut u8 = (SPI1 + 0x04) as *mut u8;
pub const SPI1TX: *mut u8 = (SPI1 + 0x08) as *mut u8;
pub const SPI1DIV: *mut u16 = (SPI1 + 0x0C) as *mut u16;
pub const SPI1CON: *mut u16 = (SPI1 + 0x10) as *mut u16;
pub const SPI1DMA: *mut u16 = (SPI1 + 0x14) as *mut u16;
pub const SPI1CNT: *mut u16 = (SPI1 + 0x18) as *mut u16;

// UART
pub const COMTX: *mut u8 = (UART + 0x00) as *mut u8;
pub const COMRX: *mut u8 = (UART + 0x00) as *mut u8;
pub const COMIEN: *mut u8 = (UART + 0x04) as *mut u8;
pub const COMIIR: *mut u8 = (UART + 0x08) as *mut u8;
pub const COMLCR: *mut u8 = (UART + 0x0C) as *mut u8;
pub const COMMCR: *mut u8 = (UART + 0x10) as *mut u8;
pub const COMLSR: *mut u8 = (UART + 0x14) as *mut u8;
pub const COMMSR: *mut u8 = (UART + 0x18) as *mut u8;
pub const COMFBR: *mut u16 = (UART + 0x24) as *mut u16;
pub const COMDIV: *mut u16 = (UART + 0x28) as *mut u16;
pub const COMCON: *mut u8 = (UART + 0x30) as *mut u8;

// GPIO port 0
pub const GP0CON: *mut u16 = (GP0 + 0x00) as *mut u16;
pub const GP0OEN: *mut u8 = (GP0 + 0x04) as *mut u8;
pub const GP0PUL: *mut u8 = (GP0 + 0x08) as *mut u8;
pub const GP0OCE: *mut u8 = (GP0 + 0x0C) as *mut u8;
pub const GP0IN: *mut u8 = (GP0 + 0x14) as *mut u8;
pub const GP0OUT: *mut u8 = (GP0 + 0x18) as *mut u8;
pub const GP0SET: *mut u8 = (GP0 + 0x1C) as *mut u8;
pub const GP0CLR: *mut u8 = (GP0 + 0x20) as *mut u8;
pub const GP0TGL: *mut u8 = (GP0 + 0x24) as *mut u8;

// GPIO port 1
pub const GP1CON: *mut u16 = (GP1 + 0x00) as *mut u16;
pub const GP1OEN: *mut u8 = (GP1 + 0x04) as *mut u8;
pub const GP1PUL: *mut u8 = (GP1 + 0x08) as *mut u8;
pub const GP1OCE: *mut u8 = (GP1 + 0x0C) as *mut u8;
pub const GP1IN: *mut u8 = (GP1 + 0x14) as *mut u8;
pub const GP1OUT: *mut u8 = (GP1 + 0x18) as *mut u8;
pub const GP1SET: *mut u8 = (GP1 + 0x1C) as *mut u8;
pub const GP1CLR: *mut u8 = (GP1 + 0x20) as *mut u8;
pub const GP1TGL: *mut u8 = (GP1 + 0x24) as *mut u8;

// GPIO port 2
pub const GP2CON: *mut u16 = (GP2 + 0x00) as *mut u16;
pub const GP2OEN: *mut u8 = (GP2 + 0x04) as *mut u8;
pub const GP2PUL: *mut u8 = (GP2 + 0x08) as *mut u8;
pub const GP2OCE: *mut u8 = (GP2 + 0x0C) as *mut u8;
pub const GP2IN: *mut u8 = (GP2 + 0x14) as *mut u8;
pub const GP2OUT: *mut u8 = (GP2 + 0x18) as *mut u8;
pub const GP2SET: *mut u8 = (GP2 + 0x1C) as *mut u8;
pub const GP2CLR: *mut u8 = (GP2 + 0x20) as *mut u8;
pub const GP2TGL: *mut u8 = (GP2 + 0x24) as *mut u8;

// GPIO port 3
pub const GP3CON: *mut u16 = (GP3 + 0x00) as *mut u16;
pub const GP3OEN: *mut u8 = (GP3 + 0x04) as *mut u8;
pub const GP3PUL: *mut u8 = (GP3 + 0x08) as *mut u8;
pub const GP3OCE: *mut u8 = (GP3 + 0x0C) as *mut u8;
pub const GP3IN: *mut u8 = (GP3 + 0x14) as *mut u8;
pub const GP3OUT: *mut u8 = (GP3 + 0x18) as *mut u8;
pub const GP3SET: *mut u8 = (GP3 + 0x1C) as *mut u8;
pub const GP3CLR: *mut u8 = (GP3 + 0x20) as *mut u8;
pub const GP3TGL: *mut u8 = (GP3 + 0x24) as *mut u8;

// GPIO port 4
pub const GP4CON: *mut u16 = (GP4 + 0x00) as *mut u16;
pub const GP4OEN: *mut u8 = (GP4 + 0x04) as *mut u8;
pub const GP4PUL: *mut u8 = (GP4 + 0x08) as *mut u8;
pub const GP4OCE: *mut u8 = (GP4 + 0x0C) as *mut u8;
pub const GP4IN: *mut u8 = (GP4 + 0x14) as *mut u8;
pub const GP4OUT: *mut u8 = (GP4 + 0x18) as *mut u8;
pub const GP4SET: *mut u8 = (GP4 + 0x1C) as *mut u8;
pub const GP4CLR: *mut u8 = (GP4 + 0x20) as *mut u8;
pub const GP4TGL: *mut u8 = (GP4 + 0x24) as *mut u8;

// Miscellaneous
pub const RFTST: *mut u16 = (MISC + 0x00) as *mut u16;

// DMA controller
pub const DMASTA: *mut u32 = (DMA + 0x00) as *mut u32;
pub const DMACFG: *mut u32 = (DMA + 0x04) as *mut u32;
pub const DMAPDBPTR: *mut u32 = (DMA + 0x08) as *mut u32;
pub const DMAADBPTR: *mut u32 = (DMA + 0x0C) as *mut u32;
pub const DMASWREQ: *mut u32 = (DMA + 0x14) as *mut u32;
pub const DMARMSKSET: *mut u32 = (DMA + 0x20) as *mut u32;
pub const DMARMSKCLR: *mut u32 = (DMA + 0x24) as *mut u32;
pub const DMAENSET: *mut u32 = (DMA + 0x28) as *mut u32;
pub const DMAENCLR: *mut u32 = (DMA + 0x2C) as *mut u32;
pub const DMAALTSET: *mut u32 = (DMA + 0x30) as *mut u32;
pub const DMAALTCLR: *mut u32 = (DMA + 0x34) as *mut u32;
pub const DMAPRISET: *mut u32 = (DMA + 0x38) as *mut u32;
pub const DMAPRICLR: *mut u32 = (DMA + 0x3C) as *mut u32;
pub const DMAERRCLR: *mut u32 = (DMA + 0x4C) as *mut u32;
pub const DMAPERID4: *mut u32 = (DMA + 0xFD0) as *mut u32;
pub const DMAPERID0: *mut u32 = (DMA + 0xFE0) as *mut u32;
pub const DMAPERID1: *mut u32 = (DMA + 0xFE4) as *mut u32;
pub const DMAPERID2: *mut u32 = (DMA + 0xFE8) as *mut u32;
pub const DMAPERID3: *mut u32 = (DMA + 0xFEC) as *mut u32;
pub const DMAPCELLID0: *mut u32 = (DMA + 0xFF0) as *mut u32;
pub const DMAPCELLID1: *mut u32 = (DMA + 0xFF4) as *mut u32;
pub const DMAPCELLID2: *mut u32 = (DMA + 0xFF8) as *mut u32;
pub const DMAPCELLID3: *mut u32 = (DMA + 0xFFC) as *mut u32;

// Clock control
pub const CLKCON: *mut u16 = (CLKCTL + 0x00) as *mut u16;
pub const CLKACT: *mut u16 = (CLKCTL + 0x04) as *mut u16;
pub const CLKPD: *mut u16 = (CLKCTL + 0x08) as *mut u16;

// ADC
pub const ADCCFG: *mut u16 = (ADC + 0x00) as *mut u16;
pub const ADCCON: *mut u8 = (ADC + 0x04) as *mut u8;
pub const ADCSTA: *mut u8 = (ADC + 0x08) as *mut u8;
pub const ADCDAT: *mut u16 = (ADC + 0x0C) as *mut u16;
pub const ADCGN: *mut u16 = (ADC + 0x10) as *mut u16;
pub const ADCOF: *mut u16 = (ADC + 0x14) as *mut u16;

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::{offset_of, size_of};

    fn width<T>(_: *mut T) -> usize {
        size_of::<T>()
    }

    /// Checks a flat pointer against the register block field it names
    macro_rules! same {
        ($ptr:ident: $Periph:ident, $module:ident, $field:ident, $Reg:ident) => {
            assert_eq!(
                $ptr as usize,
                crate::$Periph::ADDRESS + offset_of!(crate::$module::RegisterBlock, $field),
                stringify!($ptr)
            );
            assert_eq!(width($ptr), size_of::<crate::$module::$Reg>(), stringify!($ptr));
        };
    }

    #[test]
    fn timers() {
        same!(T0LD: TM0, tm, ld, LD);
        same!(T0VAL: TM0, tm, val, VAL);
        same!(T0CON: TM0, tm, con, CON);
        same!(T0CLRI: TM0, tm, clri, CLRI);
        same!(T0CAP: TM0, tm, cap, CAP);
        same!(T0STA: TM0, tm, sta, STA);
        same!(T1LD: TM1, tm, ld, LD);
        same!(T1VAL: TM1, tm, val, VAL);
        same!(T1CON: TM1, tm, con, CON);
        same!(T1CLRI: TM1, tm, clri, CLRI);
        same!(T1CAP: TM1, tm, cap, CAP);
        same!(T1STA: TM1, tm, sta, STA);
    }

    #[test]
    fn pwm() {
        same!(PWMCON0: PWM, pwm, pwmcon0, PWMCON0);
        same!(PWMCON1: PWM, pwm, pwmcon1, PWMCON1);
        same!(PWMCLRI: PWM, pwm, pwmclri, PWMCLRI);
        let pairs = [
            [PWM0COM0, PWM0COM1, PWM0COM2, PWM0LEN],
            [PWM1COM0, PWM1COM1, PWM1COM2, PWM1LEN],
            [PWM2COM0, PWM2COM1, PWM2COM2, PWM2LEN],
            [PWM3COM0, PWM3COM1, PWM3COM2, PWM3LEN],
        ];
        for (n, regs) in pairs.iter().enumerate() {
            let pair = crate::PWM::ADDRESS
                + offset_of!(crate::pwm::RegisterBlock, pair)
                + n * size_of::<crate::pwm::Pair>();
            assert_eq!(regs[0] as usize, pair + offset_of!(crate::pwm::Pair, com0));
            assert_eq!(regs[1] as usize, pair + offset_of!(crate::pwm::Pair, com1));
            assert_eq!(regs[2] as usize, pair + offset_of!(crate::pwm::Pair, com2));
            assert_eq!(regs[3] as usize, pair + offset_of!(crate::pwm::Pair, len));
        }
    }

    #[test]
    fn power_and_reset() {
        same!(PWRMOD: PWRCTL, pwrctl, pwrmod, PWRMOD);
        same!(PWRKEY: PWRCTL, pwrctl, pwrkey, PWRKEY);
        same!(EI0CFG: INTERRUPT, eint, ei0cfg, EI0CFG);
        same!(EI1CFG: INTERRUPT, eint, ei1cfg, EI1CFG);
        same!(EI2CFG: INTERRUPT, eint, ei2cfg, EI2CFG);
        same!(EICLR: INTERRUPT, eint, eiclr, EICLR);
        same!(NMICLR: INTERRUPT, eint, nmiclr, NMICLR);
        same!(RSTSTA: RESET, rst, rststa_rstclr, RSTSTA);
        same!(RSTCLR: RESET, rst, rststa_rstclr, RSTCLR);
    }

    #[test]
    fn wake_up_timer() {
        same!(T2VAL0: WUT, wut, t2val0, T2VAL0);
        same!(T2VAL1: WUT, wut, t2val1, T2VAL1);
        same!(T2CON: WUT, wut, t2con, T2CON);
        same!(T2INC: WUT, wut, t2inc, T2INC);
        same!(T2WUFB0: WUT, wut, t2wufb0, T2WUFB0);
        same!(T2WUFB1: WUT, wut, t2wufb1, T2WUFB1);
        same!(T2WUFC0: WUT, wut, t2wufc0, T2WUFC0);
        same!(T2WUFC1: WUT, wut, t2wufc1, T2WUFC1);
        same!(T2WUFD0: WUT, wut, t2wufd0, T2WUFD0);
        same!(T2WUFD1: WUT, wut, t2wufd1, T2WUFD1);
        same!(T2IEN: WUT, wut, t2ien, T2IEN);
        same!(T2STA: WUT, wut, t2sta, T2STA);
        same!(T2CLRI: WUT, wut, t2clri, T2CLRI);
        same!(T2WUFA0: WUT, wut, t2wufa0, T2WUFA0);
        same!(T2WUFA1: WUT, wut, t2wufa1, T2WUFA1);
    }

    #[test]
    fn watchdog() {
        same!(T3LD: WDT, wdt, t3ld, T3LD);
        same!(T3VAL: WDT, wdt, t3val, T3VAL);
        same!(T3CON: WDT, wdt, t3con, T3CON);
        same!(T3CLRI: WDT, wdt, t3clri, T3CLRI);
        same!(T3STA: WDT, wdt, t3sta, T3STA);
    }

    #[test]
    fn flash() {
        same!(FEESTA: FEE, fee, sta, STA);
        same!(FEECON0: FEE, fee, con0, CON0);
        same!(FEECMD: FEE, fee, cmd, CMD);
        same!(FEEADR0L: FEE, fee, adr0l, ADR0L);
        same!(FEEADR0H: FEE, fee, adr0h, ADR0H);
        same!(FEEADR1L: FEE, fee, adr1l, ADR1L);
        same!(FEEADR1H: FEE, fee, adr1h, ADR1H);
        same!(FEEKEY: FEE, fee, key, KEY);
        same!(FEEPROL: FEE, fee, prol, PROL);
        same!(FEEPROH: FEE, fee, proh, PROH);
        same!(FEESIGL: FEE, fee, sigl, SIGL);
        same!(FEESIGH: FEE, fee, sigh, SIGH);
        same!(FEECON1: FEE, fee, con1, CON1);
        same!(FEEADRAL: FEE, fee, adral, ADRAL);
        same!(FEEADRAH: FEE, fee, adrah, ADRAH);
        same!(FEEAEN0: FEE, fee, aen0, AEN0);
        same!(FEEAEN1: FEE, fee, aen1, AEN1);
    }

    #[test]
    fn i2c() {
        same!(I2CMCON: I2C, i2c, mcon, MCON);
        same!(I2CMSTA: I2C, i2c, msta, MSTA);
        same!(I2CMRX: I2C, i2c, mrx, MRX);
        same!(I2CMTX: I2C, i2c, mtx, MTX);
        same!(I2CMRXCNT: I2C, i2c, mrxcnt, MRXCNT);
        same!(I2CMCRXCNT: I2C, i2c, mcrxcnt, MCRXCNT);
        same!(I2CADR0: I2C, i2c, adr0, ADR0);
        same!(I2CADR1: I2C, i2c, adr1, ADR1);
        same!(I2CDIV: I2C, i2c, div, DIV);
        same!(I2CSCON: I2C, i2c, scon, SCON);
        same!(I2CSSTA: I2C, i2c, ssta, SSTA);
        same!(I2CSRX: I2C, i2c, srx, SRX);
        same!(I2CSTX: I2C, i2c, stx, STX);
        same!(I2CALT: I2C, i2c, alt, ALT);
        same!(I2CID0: I2C, i2c, id0, ID);
        same!(I2CID1: I2C, i2c, id1, ID);
        same!(I2CID2: I2C, i2c, id2, ID);
        same!(I2CID3: I2C, i2c, id3, ID);
        same!(I2CFSTA: I2C, i2c, fsta, FSTA);
    }

    #[test]
    fn spi() {
        same!(SPI0STA: SPI0, spi, spista, SPISTA);
        same!(SPI0RX: SPI0, spi, spirx, SPIRX);
        same!(SPI0TX: SPI0, spi, spitx, SPITX);
        same!(SPI0DIV: SPI0, spi, spidiv, SPIDIV);
        same!(SPI0CON: SPI0, spi, spicon, SPICON);
        same!(SPI0DMA: SPI0, spi, spidma, SPIDMA);
        same!(SPI0CNT: SPI0, spi, spicnt, SPICNT);
        same!(SPI1STA: SPI1, spi, spista, SPISTA);
        same!(SPI1RX: SPI1, spi, spirx, SPIRX);
        same!(SPI1TX: SPI1, spi, spitx, SPITX);
        same!(SPI1DIV: SPI1, spi, spidiv, SPIDIV);
        same!(SPI1CON: SPI1, spi, spicon, SPICON);
        same!(SPI1DMA: SPI1, spi, spidma, SPIDMA);
        same!(SPI1CNT: SPI1, spi, spicnt, SPICNT);
    }

    #[test]
    fn uart() {
        same!(COMTX: UART, uart, comtx_comrx, COMTX);
        same!(COMRX: UART, uart, comtx_comrx, COMRX);
        same!(COMIEN: UART, uart, comien, COMIEN);
        same!(COMIIR: UART, uart, comiir, COMIIR);
        same!(COMLCR: UART, uart, comlcr, COMLCR);
        same!(COMMCR: UART, uart, commcr, COMMCR);
        same!(COMLSR: UART, uart, comlsr, COMLSR);
        same!(COMMSR: UART, uart, commsr, COMMSR);
        same!(COMFBR: UART, uart, comfbr, COMFBR);
        same!(COMDIV: UART, uart, comdiv, COMDIV);
        same!(COMCON: UART, uart, comcon, COMCON);
    }

    #[test]
    fn gpio() {
        same!(GP0CON: GP0, gpio, gpcon, GPCON);
        same!(GP0OEN: GP0, gpio, gpoen, GPOEN);
        same!(GP0PUL: GP0, gpio, gppul, GPPUL);
        same!(GP0OCE: GP0, gpio, gpoce, GPOCE);
        same!(GP0IN: GP0, gpio, gpin, GPIN);
        same!(GP0OUT: GP0, gpio, gpout, GPOUT);
        same!(GP0SET: GP0, gpio, gpset, GPSET);
        same!(GP0CLR: GP0, gpio, gpclr, GPCLR);
        same!(GP0TGL: GP0, gpio, gptgl, GPTGL);
        same!(GP1CON: GP1, gpio, gpcon, GPCON);
        same!(GP1OEN: GP1, gpio, gpoen, GPOEN);
        same!(GP1PUL: GP1, gpio, gppul, GPPUL);
        same!(GP1OCE: GP1, gpio, gpoce, GPOCE);
        same!(GP1IN: GP1, gpio, gpin, GPIN);
        same!(GP1OUT: GP1, gpio, gpout, GPOUT);
        same!(GP1SET: GP1, gpio, gpset, GPSET);
        same!(GP1CLR: GP1, gpio, gpclr, GPCLR);
        same!(GP1TGL: GP1, gpio, gptgl, GPTGL);
        same!(GP2CON: GP2, gpio, gpcon, GPCON);
        same!(GP2OEN: GP2, gpio, gpoen, GPOEN);
        same!(GP2PUL: GP2, gpio, gppul, GPPUL);
        same!(GP2OCE: GP2, gpio, gpoce, GPOCE);
        same!(GP2IN: GP2, gpio, gpin, GPIN);
        same!(GP2OUT: GP2, gpio, gpout, GPOUT);
        same!(GP2SET: GP2, gpio, gpset, GPSET);
        same!(GP2CLR: GP2, gpio, gpclr, GPCLR);
        same!(GP2TGL: GP2, gpio, gptgl, GPTGL);
        same!(GP3CON: GP3, gpio, gpcon, GPCON);
        same!(GP3OEN: GP3, gpio, gpoen, GPOEN);
        same!(GP3PUL: GP3, gpio, gppul, GPPUL);
        same!(GP3OCE: GP3, gpio, gpoce, GPOCE);
        same!(GP3IN: GP3, gpio, gpin, GPIN);
        same!(GP3OUT: GP3, gpio, gpout, GPOUT);
        same!(GP3SET: GP3, gpio, gpset, GPSET);
        same!(GP3CLR: GP3, gpio, gpclr, GPCLR);
        same!(GP3TGL: GP3, gpio, gptgl, GPTGL);
        same!(GP4CON: GP4, gpio, gpcon, GPCON);
        same!(GP4OEN: GP4, gpio, gpoen, GPOEN);
        same!(GP4PUL: GP4, gpio, gppul, GPPUL);
        same!(GP4OCE: GP4, gpio, gpoce, GPOCE);
        same!(GP4IN: GP4, gpio, gpin, GPIN);
        same!(GP4OUT: GP4, gpio, gpout, GPOUT);
        same!(GP4SET: GP4, gpio, gpset, GPSET);
        same!(GP4CLR: GP4, gpio, gpclr, GPCLR);
        same!(GP4TGL: GP4, gpio, gptgl, GPTGL);
    }

    #[test]
    fn misc_and_clocks() {
        same!(RFTST: MISC, misc, rftst, RFTST);
    }

    #[test]
    fn dma() {
        same!(DMASTA: DMA, dma, dmasta, DMASTA);
        same!(DMACFG: DMA, dma, dmacfg, DMACFG);
        same!(DMAPDBPTR: DMA, dma, dmapdbptr, DMAPDBPTR);
        same!(DMAADBPTR: DMA, dma, dmaadbptr, DMAADBPTR);
        same!(DMASWREQ: DMA, dma, dmaswreq, DMASWREQ);
        same!(DMARMSKSET: DMA, dma, dmarmskset, DMARMSKSET);
        same!(DMARMSKCLR: DMA, dma, dmarmskclr, DMARMSKCLR);
        same!(DMAENSET: DMA, dma, dmaenset, DMAENSET);
        same!(DMAENCLR: DMA, dma, dmaenclr, DMAENCLR);
        same!(DMAALTSET: DMA, dma, dmaaltset, DMAALTSET);
        same!(DMAALTCLR: DMA, dma, dmaaltclr, DMAALTCLR);
        same!(DMAPRISET: DMA, dma, dmapriset, DMAPRISET);
        same!(DMAPRICLR: DMA, dma, dmapriclr, DMAPRICLR);
        same!(DMAERRCLR: DMA, dma, dmaerrclr, DMAERRCLR);
        same!(DMAPERID4: DMA, dma, dmaperid4, DMAPERID4);
        same!(DMAPERID0: DMA, dma, dmaperid0, DMAPERID0);
        same!(DMAPERID1: DMA, dma, dmaperid1, DMAPERID1);
        same!(DMAPERID2: DMA, dma, dmaperid2, DMAPERID2);
        same!(DMAPERID3: DMA, dma, dmaperid3, DMAPERID3);
        same!(DMAPCELLID0: DMA, dma, dmapcellid0, DMAPCELLID0);
        same!(DMAPCELLID1: DMA, dma, dmapcellid1, DMAPCELLID1);
        same!(DMAPCELLID2: DMA, dma, dmapcellid2, DMAPCELLID2);
        same!(DMAPCELLID3: DMA, dma, dmapcellid3, DMAPCELLID3);
        same!(CLKCON: CLKCTL, clkctl, clkcon, CLKCON);
        same!(CLKACT: CLKCTL, clkctl, clkact, CLKACT);
        same!(CLKPD: CLKCTL, clkctl, clkpd, CLKPD);
    }

    #[test]
    fn adc() {
        same!(ADCCFG: ADC, adc, adccfg, ADCCFG);
        same!(ADCCON: ADC, adc, adccon, ADCCON);
        same!(ADCSTA: ADC, adc, adcsta, ADCSTA);
        same!(ADCDAT: ADC, adc, adcdat, ADCDAT);
        same!(ADCGN: ADC, adc, adcgn, ADCGN);
        same!(ADCOF: ADC, adc, adcof, ADCOF);
    }

    #[test]
    fn aliased_registers_share_an_address() {
        assert_eq!(RSTSTA as usize, RSTCLR as usize);
        assert_eq!(COMTX as usize, COMRX as usize);
        assert_eq!(PWRMOD as usize, 0x4000_2400);
        assert_eq!(GP4TGL as usize, 0x4000_60E4);
    }
}
