//! Bit banding
//!
//! Support for the manipulation of peripheral registers through bit-banding.
//! Every peripheral of the ADuCRF101 lives in the peripheral bit-band region, which spans
//! `0x4000_0000` to `0x400F_FFFF`. Each bit of that region is mirrored by a full word in the
//! alias region starting at `0x4200_0000`, so a single bit can be set, cleared or read with one
//! memory access instead of a read-modify-write sequence.

use core::ptr;

// Start address of the peripheral memory region capable of being addressed by bit-banding
const PERI_ADDRESS_START: usize = 0x4000_0000;
const PERI_ADDRESS_END: usize = 0x400F_FFFF;

const PERI_BIT_BAND_BASE: usize = 0x4200_0000;

/// Alias word address of bit `bit` of the byte-addressed register at `addr`
///
/// `addr` must lie in the peripheral bit-band region and `bit` must be below 32.
#[inline(always)]
pub const fn alias(addr: usize, bit: u8) -> usize {
    PERI_BIT_BAND_BASE + (addr - PERI_ADDRESS_START) * 32 + 4 * bit as usize
}

/// Like [`alias`], but returns `None` outside the peripheral bit-band region
pub const fn try_alias(addr: usize, bit: u8) -> Option<usize> {
    if addr < PERI_ADDRESS_START || addr > PERI_ADDRESS_END || bit >= 32 {
        None
    } else {
        Some(alias(addr, bit))
    }
}

/// Clears the bit on the provided register without modifying other bits.
///
/// # Safety
///
/// Some registers have reserved bits which should not be modified.
#[inline]
pub unsafe fn clear<T>(register: *const T, bit: u8) {
    write(register, bit, false);
}

/// Sets the bit on the provided register without modifying other bits.
///
/// # Safety
///
/// Some registers have reserved bits which should not be modified.
#[inline]
pub unsafe fn set<T>(register: *const T, bit: u8) {
    write(register, bit, true);
}

/// Sets or clears the bit on the provided register without modifying other bits.
///
/// # Safety
///
/// Some registers have reserved bits which should not be modified.
#[inline]
pub unsafe fn write<T>(register: *const T, bit: u8, set: bool) {
    let bb_addr = checked_alias(register as usize, bit);
    ptr::write_volatile(bb_addr as *mut u32, u32::from(set));
}

/// Reads the bit of the provided register through its alias word.
///
/// # Safety
///
/// Reading some status registers has side effects.
#[inline]
pub unsafe fn read<T>(register: *const T, bit: u8) -> bool {
    let bb_addr = checked_alias(register as usize, bit);
    ptr::read_volatile(bb_addr as *const u32) & 1 != 0
}

#[inline(always)]
fn checked_alias(addr: usize, bit: u8) -> usize {
    assert!((PERI_ADDRESS_START..=PERI_ADDRESS_END).contains(&addr));
    assert!(bit < 32);
    alias(addr, bit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alias_follows_cortex_m3_formula() {
        for &(addr, bit) in &[
            (0x4000_0000, 0),
            (0x4000_0008, 2),
            (0x4000_6068, 4),
            (0x4001_0028, 31),
            (0x400F_FFFF, 7),
        ] {
            assert_eq!(
                alias(addr, bit),
                0x4200_0000 + (addr - 0x4000_0000) * 32 + usize::from(bit) * 4
            );
        }
    }

    #[test]
    fn alias_of_known_registers() {
        // GP2PUL bit 4, the radio interrupt pull-up
        assert_eq!(alias(0x4000_6068, 4), 0x420C_0D10);
        // GP2IN bit 0, the radio MISO line
        assert_eq!(alias(0x4000_6074, 0), 0x420C_0E80);
        // T0CON UP
        assert_eq!(alias(0x4000_0008, 2), 0x4200_0108);
    }

    #[test]
    fn try_alias_rejects_outside_region() {
        assert_eq!(try_alias(0x3FFF_FFFF, 0), None);
        assert_eq!(try_alias(0x4010_0000, 0), None);
        assert_eq!(try_alias(0xE000_E100, 0), None);
        assert_eq!(try_alias(0x4000_0000, 32), None);
        assert_eq!(try_alias(0x4000_0400, 1), Some(0x4200_8004));
    }

    #[test]
    #[should_panic]
    fn checked_alias_panics_outside_region() {
        checked_alias(0x2000_0000, 0);
    }
}
