//! # Register access core
//!
//! Every memory-mapped register of the device is a [`Reg`] parameterised by a register
//! specification type. The specification fixes the width of the register, whether it can be
//! read and/or written, and its value after reset:
//!
//! ```rust,ignore
//! let dp = aducrf101::Peripherals::take().unwrap();
//!
//! // read-modify-write of a single field
//! dp.TM0.con.modify(|_, w| w.set_bit(tm::con::ENABLE));
//!
//! // write a named value, every other bit takes its reset value
//! dp.TM0.con.write(|w| w.variant(tm::con::PRE, tm::con::Pre::Div256));
//!
//! // read a status flag
//! let timed_out = dp.TM0.sta.read().bit(tm::sta::TMOUT);
//! ```

use core::fmt;
use core::marker;

/// Raw register type (`u8`, `u16` or `u32`)
pub trait RawReg:
    Copy
    + Default
    + PartialEq
    + fmt::Debug
    + fmt::LowerHex
    + core::ops::BitOr<Output = Self>
    + core::ops::BitAnd<Output = Self>
    + core::ops::Not<Output = Self>
{
    /// Truncates `bits` to the register width
    fn from_u32(bits: u32) -> Self;
    /// Zero-extends the register value
    fn into_u32(self) -> u32;
}

macro_rules! raw_reg {
    ($($U:ty),+) => {
        $(
            impl RawReg for $U {
                #[inline(always)]
                fn from_u32(bits: u32) -> Self {
                    bits as $U
                }
                #[inline(always)]
                fn into_u32(self) -> u32 {
                    self as u32
                }
            }
        )+
    };
}
raw_reg!(u8, u16, u32);

/// Raw register type and access capabilities of a register
pub trait RegisterSpec {
    /// Raw register type
    type Ux: RawReg;
}

/// Register can be read with [`Reg::read`]
pub trait Readable: RegisterSpec {}

/// Register can be written with [`Reg::write`] and [`Reg::write_with_zero`]
pub trait Writable: RegisterSpec {}

/// Value of the register after a device reset
pub trait Resettable: RegisterSpec {
    /// Reset value of the register
    const RESET_VALUE: Self::Ux;

    /// Reset value of the register
    #[inline(always)]
    fn reset_value() -> Self::Ux {
        Self::RESET_VALUE
    }
}

/// A single memory-mapped register
#[repr(transparent)]
pub struct Reg<REG: RegisterSpec> {
    register: vcell::VolatileCell<REG::Ux>,
    _marker: marker::PhantomData<REG>,
}

unsafe impl<REG: RegisterSpec> Send for Reg<REG> where REG::Ux: Send {}

impl<REG: RegisterSpec> Reg<REG> {
    /// Returns the underlying memory address of the register
    #[inline(always)]
    pub fn as_ptr(&self) -> *mut REG::Ux {
        self.register.as_ptr()
    }
}

impl<REG: Readable> Reg<REG> {
    /// Reads the contents of the register
    #[inline(always)]
    pub fn read(&self) -> R<REG> {
        R {
            bits: self.register.get(),
            _reg: marker::PhantomData,
        }
    }
}

impl<REG: Resettable + Writable> Reg<REG> {
    /// Writes the reset value to the register
    #[inline(always)]
    pub fn reset(&self) {
        self.register.set(REG::RESET_VALUE)
    }

    /// Writes bits to the register
    ///
    /// Bits not touched by the closure keep the register's reset value.
    #[inline(always)]
    pub fn write<F>(&self, f: F)
    where
        F: FnOnce(&mut W<REG>) -> &mut W<REG>,
    {
        self.register.set(
            f(&mut W {
                bits: REG::RESET_VALUE,
                _reg: marker::PhantomData,
            })
            .bits,
        );
    }
}

impl<REG: Writable> Reg<REG> {
    /// Writes bits to the register, starting from all zeroes
    ///
    /// # Safety
    ///
    /// Zero may not be a valid value for every field of the register.
    #[inline(always)]
    pub unsafe fn write_with_zero<F>(&self, f: F)
    where
        F: FnOnce(&mut W<REG>) -> &mut W<REG>,
    {
        self.register.set(
            f(&mut W {
                bits: REG::Ux::default(),
                _reg: marker::PhantomData,
            })
            .bits,
        );
    }
}

impl<REG: Readable + Writable> Reg<REG> {
    /// Modifies the contents of the register by reading and then writing it
    #[inline(always)]
    pub fn modify<F>(&self, f: F)
    where
        for<'w> F: FnOnce(&R<REG>, &'w mut W<REG>) -> &'w mut W<REG>,
    {
        let bits = self.register.get();
        self.register.set(
            f(
                &R {
                    bits,
                    _reg: marker::PhantomData,
                },
                &mut W {
                    bits,
                    _reg: marker::PhantomData,
                },
            )
            .bits,
        );
    }
}

impl<REG: Writable> Reg<REG> {
    /// Sets or clears a single bit through the bit-band alias region
    ///
    /// Other bits of the register are not read or written.
    ///
    /// # Safety
    ///
    /// The register must live in the peripheral bit-band region.
    #[inline(always)]
    pub unsafe fn bb_write(&self, bit: Bit<REG>, set: bool) {
        crate::bb::write(self.as_ptr(), bit.offset(), set);
    }

    /// Sets a single bit through the bit-band alias region
    ///
    /// # Safety
    ///
    /// See [`Reg::bb_write`].
    #[inline(always)]
    pub unsafe fn bb_set(&self, bit: Bit<REG>) {
        self.bb_write(bit, true)
    }

    /// Clears a single bit through the bit-band alias region
    ///
    /// # Safety
    ///
    /// See [`Reg::bb_write`].
    #[inline(always)]
    pub unsafe fn bb_clear(&self, bit: Bit<REG>) {
        self.bb_write(bit, false)
    }
}

impl<REG: Readable> Reg<REG> {
    /// Reads a single bit through the bit-band alias region
    ///
    /// # Safety
    ///
    /// The register must live in the peripheral bit-band region.
    #[inline(always)]
    pub unsafe fn bb_read(&self, bit: Bit<REG>) -> bool {
        crate::bb::read(self.as_ptr(), bit.offset())
    }
}

impl<REG: Readable> fmt::Debug for Reg<REG> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.read(), f)
    }
}

/// Register reader
pub struct R<REG: RegisterSpec> {
    pub(crate) bits: REG::Ux,
    _reg: marker::PhantomData<REG>,
}

impl<REG: RegisterSpec> R<REG> {
    /// Raw value of the register
    #[inline(always)]
    pub fn bits(&self) -> REG::Ux {
        self.bits
    }

    /// State of a single bit
    #[inline(always)]
    pub fn bit(&self, bit: Bit<REG>) -> bool {
        self.bits.into_u32() & bit.mask() != 0
    }

    /// Raw value of a field, shifted down to bit 0
    #[inline(always)]
    pub fn field<V>(&self, field: Field<REG, V>) -> u32 {
        (self.bits.into_u32() & field.mask()) >> field.offset()
    }

    /// Named value of a field
    ///
    /// Returns `None` for bit patterns the field does not define.
    #[inline(always)]
    pub fn variant<V: FieldValue>(&self, field: Field<REG, V>) -> Option<V> {
        V::from_bits(self.field(field))
    }
}

impl<REG: RegisterSpec> PartialEq<REG::Ux> for R<REG> {
    #[inline(always)]
    fn eq(&self, other: &REG::Ux) -> bool {
        self.bits == *other
    }
}

impl<REG: RegisterSpec> fmt::Debug for R<REG> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.bits)
    }
}

/// Register writer
pub struct W<REG: RegisterSpec> {
    pub(crate) bits: REG::Ux,
    _reg: marker::PhantomData<REG>,
}

impl<REG: RegisterSpec> W<REG> {
    /// Writes raw bits to the register
    ///
    /// # Safety
    ///
    /// Reserved bits and undefined field values must not be written.
    #[inline(always)]
    pub unsafe fn bits(&mut self, bits: REG::Ux) -> &mut Self {
        self.bits = bits;
        self
    }

    /// Sets or clears a single bit
    #[inline(always)]
    pub fn bit(&mut self, bit: Bit<REG>, value: bool) -> &mut Self {
        let mask = REG::Ux::from_u32(bit.mask());
        self.bits = if value {
            self.bits | mask
        } else {
            self.bits & !mask
        };
        self
    }

    /// Sets a single bit
    #[inline(always)]
    pub fn set_bit(&mut self, bit: Bit<REG>) -> &mut Self {
        self.bit(bit, true)
    }

    /// Clears a single bit
    #[inline(always)]
    pub fn clear_bit(&mut self, bit: Bit<REG>) -> &mut Self {
        self.bit(bit, false)
    }

    /// Writes a named value into a field
    #[inline(always)]
    pub fn variant<V: FieldValue>(&mut self, field: Field<REG, V>, value: V) -> &mut Self {
        // Named values are always in range for their field
        unsafe { self.field_bits(field, value.bits()) }
    }

    /// Writes raw bits into a field
    ///
    /// Bits above the field width are discarded.
    ///
    /// # Safety
    ///
    /// The field may not define a meaning for every bit pattern.
    #[inline(always)]
    pub unsafe fn field_bits<V>(&mut self, field: Field<REG, V>, bits: u32) -> &mut Self {
        let mask = REG::Ux::from_u32(field.mask());
        self.bits = (self.bits & !mask) | REG::Ux::from_u32(field.value(bits));
        self
    }
}

impl<REG: RegisterSpec> W<REG> {
    /// Writes a number into a plain numeric field
    ///
    /// Bits above the field width are discarded.
    #[inline(always)]
    pub fn field(&mut self, field: Field<REG>, bits: u32) -> &mut Self {
        unsafe { self.field_bits(field, bits) }
    }
}

/// Bit field of a register
///
/// `V` is the type of the values the field holds: `u32` for plain numbers, or an enum of named
/// bit patterns.
pub struct Field<REG, V = u32> {
    offset: u8,
    width: u8,
    _marker: marker::PhantomData<fn() -> (REG, V)>,
}

impl<REG, V> Field<REG, V> {
    /// Field spanning `width` bits starting at bit `offset`
    pub const fn new(offset: u8, width: u8) -> Self {
        assert!(width > 0 && offset as u32 + width as u32 <= 32);
        Self {
            offset,
            width,
            _marker: marker::PhantomData,
        }
    }

    /// Position of the least significant bit of the field
    #[inline(always)]
    pub const fn offset(self) -> u8 {
        self.offset
    }

    /// Number of bits in the field
    #[inline(always)]
    pub const fn width(self) -> u8 {
        self.width
    }

    /// Bits covered by the field
    #[inline(always)]
    pub const fn mask(self) -> u32 {
        (((1u64 << self.width) - 1) << self.offset) as u32
    }

    /// Shifts `bits` into the field position
    #[inline(always)]
    pub const fn value(self, bits: u32) -> u32 {
        (bits << self.offset) & self.mask()
    }
}

impl<REG, V> Clone for Field<REG, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<REG, V> Copy for Field<REG, V> {}

impl<REG, V> fmt::Debug for Field<REG, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("offset", &self.offset)
            .field("width", &self.width)
            .finish()
    }
}

/// Single-bit field of a register
pub struct Bit<REG> {
    offset: u8,
    _marker: marker::PhantomData<fn() -> REG>,
}

impl<REG> Bit<REG> {
    /// Bit number `offset`
    pub const fn new(offset: u8) -> Self {
        assert!(offset < 32);
        Self {
            offset,
            _marker: marker::PhantomData,
        }
    }

    /// Bit number
    #[inline(always)]
    pub const fn offset(self) -> u8 {
        self.offset
    }

    /// Mask with only this bit set
    #[inline(always)]
    pub const fn mask(self) -> u32 {
        1 << self.offset
    }
}

impl<REG> Clone for Bit<REG> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<REG> Copy for Bit<REG> {}

impl<REG> fmt::Debug for Bit<REG> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Bit").field(&self.offset).finish()
    }
}

/// Named bit pattern of a field
pub trait FieldValue: Copy {
    /// Raw bits, not yet shifted into position
    fn bits(self) -> u32;
    /// Named value for raw bits, if any
    fn from_bits(bits: u32) -> Option<Self>;
}

/// Declares a register specification type
///
/// `rw`, `r` and `w` select the access capabilities. Every register carries its reset value.
macro_rules! reg_spec {
    ($(#[$attr:meta])* $Spec:ident: $Ux:ty, rw, $reset:expr) => {
        reg_spec!(@spec $(#[$attr])* $Spec: $Ux, $reset);
        impl $crate::Readable for $Spec {}
        impl $crate::Writable for $Spec {}
    };
    ($(#[$attr:meta])* $Spec:ident: $Ux:ty, r, $reset:expr) => {
        reg_spec!(@spec $(#[$attr])* $Spec: $Ux, $reset);
        impl $crate::Readable for $Spec {}
    };
    ($(#[$attr:meta])* $Spec:ident: $Ux:ty, w) => {
        reg_spec!(@spec $(#[$attr])* $Spec: $Ux, 0);
        impl $crate::Writable for $Spec {}
    };
    (@spec $(#[$attr:meta])* $Spec:ident: $Ux:ty, $reset:expr) => {
        $(#[$attr])*
        #[derive(Debug)]
        pub struct $Spec;
        impl $crate::RegisterSpec for $Spec {
            type Ux = $Ux;
        }
        impl $crate::Resettable for $Spec {
            const RESET_VALUE: $Ux = $reset;
        }
    };
}
pub(crate) use reg_spec;

/// Declares an enum of named field values
macro_rules! field_enum {
    (
        $(#[$attr:meta])*
        pub enum $Enum:ident: $repr:ident {
            $($(#[$vattr:meta])* $Variant:ident = $value:literal,)+
        }
    ) => {
        $(#[$attr])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        #[cfg_attr(feature = "defmt", derive(defmt::Format))]
        #[repr($repr)]
        pub enum $Enum {
            $($(#[$vattr])* $Variant = $value,)+
        }

        impl $crate::FieldValue for $Enum {
            #[inline(always)]
            fn bits(self) -> u32 {
                self as u32
            }

            #[inline]
            fn from_bits(bits: u32) -> Option<Self> {
                match bits {
                    $($value => Some(Self::$Variant),)+
                    _ => None,
                }
            }
        }
    };
}
pub(crate) use field_enum;

/// Declares one `Bit` constant per pin of an 8-bit port register
macro_rules! pin_bits {
    ($Spec:ident: $($BIT:ident = $n:literal),+ $(,)?) => {
        $(
            #[doc = concat!("Pin ", stringify!($n))]
            pub const $BIT: $crate::Bit<$Spec> = $crate::Bit::new($n);
        )+
    };
}
pub(crate) use pin_bits;

#[cfg(test)]
pub(crate) mod test_util {
    /// Panics if any two masks share a bit
    pub fn assert_disjoint(masks: &[u32]) {
        let mut seen = 0u32;
        for (i, mask) in masks.iter().enumerate() {
            assert_ne!(*mask, 0, "mask {} is empty", i);
            assert_eq!(seen & mask, 0, "mask {} ({:#x}) overlaps {:#x}", i, mask, seen);
            seen |= mask;
        }
    }

    /// Panics if `masks` reach outside a register of `width` bits
    pub fn assert_within(masks: &[u32], width: u32) {
        let limit = if width == 32 { u32::MAX } else { (1 << width) - 1 };
        for mask in masks {
            assert_eq!(mask & !limit, 0, "mask {:#x} exceeds {} bits", mask, width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    reg_spec!(TESTrs: u16, rw, 0x00A0);
    const LOW: Field<TESTrs> = Field::new(0, 4);
    const FLAG: Bit<TESTrs> = Bit::new(8);
    const TOP: Field<TESTrs, Mode> = Field::new(14, 2);

    field_enum! {
        pub enum Mode: u8 {
            A = 0,
            B = 1,
            D = 3,
        }
    }

    fn w() -> W<TESTrs> {
        W {
            bits: TESTrs::RESET_VALUE,
            _reg: marker::PhantomData,
        }
    }

    fn r(bits: u16) -> R<TESTrs> {
        R {
            bits,
            _reg: marker::PhantomData,
        }
    }

    #[test]
    fn field_masks() {
        assert_eq!(LOW.mask(), 0x000F);
        assert_eq!(FLAG.mask(), 0x0100);
        assert_eq!(TOP.mask(), 0xC000);
        assert_eq!(TOP.value(3), 0xC000);
        assert_eq!(LOW.value(0x1F), 0x000F);
        assert_eq!(Field::<TESTrs>::new(0, 32).mask(), u32::MAX);
    }

    #[test]
    fn writer_keeps_other_bits() {
        let mut w = w();
        w.field(LOW, 0x5).set_bit(FLAG).variant(TOP, Mode::D);
        assert_eq!(w.bits, 0xC1A5);
        w.clear_bit(FLAG).field(LOW, 0x12);
        assert_eq!(w.bits, 0xC0A2);
    }

    #[test]
    fn reader_decodes_fields() {
        let r = r(0x8109);
        assert_eq!(r.field(LOW), 0x9);
        assert!(r.bit(FLAG));
        assert_eq!(r.variant(TOP), None);
        assert_eq!(self::r(0x4000).variant(TOP), Some(Mode::B));
        assert!(r == 0x8109);
    }

    #[test]
    fn reset_value_is_exposed() {
        assert_eq!(TESTrs::reset_value(), 0x00A0);
    }
}
