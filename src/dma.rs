//! # Direct Memory Access
//!
//! A PL230 µDMA controller with twelve channels, each hard-wired to one peripheral request.
//! The controller reads its channel configuration from a table of [`ChannelDescriptor`]s in
//! SRAM whose address is written to `DMAPDBPTR`. Every channel has a primary descriptor and an
//! alternate descriptor used by ping-pong and scatter-gather cycles; [`DescriptorTable`] lays
//! both halves out with the alignment the controller requires.
//!
//! The channel set, clear and request registers all take one bit per channel, see [`Channels`].

use core::ptr;
use core::sync::atomic::{self, Ordering};

use crate::generic::{field_enum, reg_spec};
use crate::{Bit, Field, FieldValue, Interrupt, Reg, R, W};

/// Number of channels implemented
pub const CHANNELS: usize = 12;

/// DMA register block
#[repr(C)]
pub struct RegisterBlock {
    /// 0x00 - Status
    pub dmasta: DMASTA,
    /// 0x04 - Configuration
    pub dmacfg: DMACFG,
    /// 0x08 - Primary descriptor table base
    pub dmapdbptr: DMAPDBPTR,
    /// 0x0C - Alternate descriptor table base
    pub dmaadbptr: DMAADBPTR,
    _reserved1: [u8; 4],
    /// 0x14 - Software request
    pub dmaswreq: DMASWREQ,
    _reserved2: [u8; 8],
    /// 0x20 - Request mask set
    pub dmarmskset: DMARMSKSET,
    /// 0x24 - Request mask clear
    pub dmarmskclr: DMARMSKCLR,
    /// 0x28 - Channel enable set
    pub dmaenset: DMAENSET,
    /// 0x2C - Channel enable clear
    pub dmaenclr: DMAENCLR,
    /// 0x30 - Alternate descriptor select set
    pub dmaaltset: DMAALTSET,
    /// 0x34 - Alternate descriptor select clear
    pub dmaaltclr: DMAALTCLR,
    /// 0x38 - High priority set
    pub dmapriset: DMAPRISET,
    /// 0x3C - High priority clear
    pub dmapriclr: DMAPRICLR,
    _reserved3: [u8; 12],
    /// 0x4C - Bus error clear
    pub dmaerrclr: DMAERRCLR,
    _reserved4: [u8; 0xF80],
    /// 0xFD0 - Peripheral identification 4
    pub dmaperid4: DMAPERID4,
    _reserved5: [u8; 12],
    /// 0xFE0 - Peripheral identification 0
    pub dmaperid0: DMAPERID0,
    /// 0xFE4 - Peripheral identification 1
    pub dmaperid1: DMAPERID1,
    /// 0xFE8 - Peripheral identification 2
    pub dmaperid2: DMAPERID2,
    /// 0xFEC - Peripheral identification 3
    pub dmaperid3: DMAPERID3,
    /// 0xFF0 - PrimeCell identification 0
    pub dmapcellid0: DMAPCELLID0,
    /// 0xFF4 - PrimeCell identification 1
    pub dmapcellid1: DMAPCELLID1,
    /// 0xFF8 - PrimeCell identification 2
    pub dmapcellid2: DMAPCELLID2,
    /// 0xFFC - PrimeCell identification 3
    pub dmapcellid3: DMAPCELLID3,
}

/// DMASTA (r) register accessor
pub type DMASTA = Reg<dmasta::DMASTArs>;
/// Status
pub mod dmasta {
    use super::*;
    reg_spec!(DMASTArs: u32, r, 0x000B_0000);
    /// Controller enabled
    pub const ENABLE: Bit<DMASTArs> = Bit::new(0);
    /// State of the control state machine
    pub const STATE: Field<DMASTArs> = Field::new(4, 4);
    /// Number of channels, minus one
    pub const CHNLSMINUS1: Field<DMASTArs> = Field::new(16, 5);
}

/// DMACFG (w) register accessor
pub type DMACFG = Reg<dmacfg::DMACFGrs>;
/// Configuration
pub mod dmacfg {
    use super::*;
    reg_spec!(DMACFGrs: u32, w);
    /// Controller enable
    pub const ENABLE: Bit<DMACFGrs> = Bit::new(0);
}

/// DMAPDBPTR (rw) register accessor
pub type DMAPDBPTR = Reg<dmapdbptr::DMAPDBPTRrs>;
/// Primary descriptor table base
pub mod dmapdbptr {
    use super::*;
    reg_spec!(DMAPDBPTRrs: u32, rw, 0x0000_0000);
    /// Address of the table, low bits must be zero
    pub const ADDR: Field<DMAPDBPTRrs> = Field::new(0, 32);
}

/// DMAADBPTR (r) register accessor
pub type DMAADBPTR = Reg<dmaadbptr::DMAADBPTRrs>;
/// Alternate descriptor table base, derived from `DMAPDBPTR`
pub mod dmaadbptr {
    use super::*;
    reg_spec!(DMAADBPTRrs: u32, r, 0x0000_0000);
    /// Address of the alternate half of the table
    pub const ADDR: Field<DMAADBPTRrs> = Field::new(0, 32);
}

bitflags::bitflags! {
    /// Channel set of the per-channel registers
    pub struct Channels: u32 {
        const SPI1_TX = 1 << 0;
        const SPI1_RX = 1 << 1;
        const UART_TX = 1 << 2;
        const UART_RX = 1 << 3;
        const I2CS_TX = 1 << 4;
        const I2CS_RX = 1 << 5;
        const I2CM_TX = 1 << 6;
        const I2CM_RX = 1 << 7;
        const ADC = 1 << 9;
        const SPI0_TX = 1 << 10;
        const SPI0_RX = 1 << 11;
    }
}

/// Declares a register holding one bit per channel
macro_rules! channel_reg {
    ($Alias:ident, $module:ident, $Spec:ident, rw; $doc:literal) => {
        channel_reg!(@reg $Alias, $module, $Spec, rw, 0; $doc);
        impl R<$module::$Spec> {
            /// Channels whose bit is set
            #[inline(always)]
            pub fn channels(&self) -> Channels {
                Channels::from_bits_truncate(self.bits())
            }
        }
    };
    ($Alias:ident, $module:ident, $Spec:ident, w; $doc:literal) => {
        channel_reg!(@reg $Alias, $module, $Spec, w; $doc);
    };
    (@reg $Alias:ident, $module:ident, $Spec:ident, $access:ident $(, $reset:expr)?; $doc:literal) => {
        #[doc = concat!(stringify!($Alias), " register accessor")]
        pub type $Alias = Reg<$module::$Spec>;
        #[doc = $doc]
        pub mod $module {
            use super::*;
            reg_spec!($Spec: u32, $access $(, $reset)?);
        }
        impl W<$module::$Spec> {
            /// Sets the bit of every channel in `channels`
            #[inline(always)]
            pub fn channels(&mut self, channels: Channels) -> &mut Self {
                unsafe { self.bits(channels.bits()) }
            }
        }
    };
}

channel_reg!(DMASWREQ, dmaswreq, DMASWREQrs, w; "Software request");
channel_reg!(DMARMSKSET, dmarmskset, DMARMSKSETrs, rw; "Ignore peripheral requests of the channels written");
channel_reg!(DMARMSKCLR, dmarmskclr, DMARMSKCLRrs, w; "Accept peripheral requests of the channels written");
channel_reg!(DMAENSET, dmaenset, DMAENSETrs, rw; "Enable the channels written");
channel_reg!(DMAENCLR, dmaenclr, DMAENCLRrs, w; "Disable the channels written");
channel_reg!(DMAALTSET, dmaaltset, DMAALTSETrs, rw; "Use the alternate descriptor for the channels written");
channel_reg!(DMAALTCLR, dmaaltclr, DMAALTCLRrs, w; "Use the primary descriptor for the channels written");
channel_reg!(DMAPRISET, dmapriset, DMAPRISETrs, rw; "Give the channels written high priority");
channel_reg!(DMAPRICLR, dmapriclr, DMAPRICLRrs, w; "Give the channels written default priority");

/// DMAERRCLR (rw) register accessor
pub type DMAERRCLR = Reg<dmaerrclr::DMAERRCLRrs>;
/// Bus error, cleared by writing 1
pub mod dmaerrclr {
    use super::*;
    reg_spec!(DMAERRCLRrs: u32, rw, 0x0000_0000);
    /// Bus error occurred
    pub const ERROR: Bit<DMAERRCLRrs> = Bit::new(0);
}

/// Declares a read-only identification register
macro_rules! id_reg {
    ($Alias:ident, $module:ident, $Spec:ident, $reset:expr) => {
        #[doc = concat!(stringify!($Alias), " (r) register accessor")]
        pub type $Alias = Reg<$module::$Spec>;
        /// Identification byte
        pub mod $module {
            use super::*;
            reg_spec!($Spec: u32, r, $reset);
            /// Identification byte
            pub const VALUE: Field<$Spec> = Field::new(0, 8);
        }
    };
}

id_reg!(DMAPERID4, dmaperid4, DMAPERID4rs, 0x04);
id_reg!(DMAPERID0, dmaperid0, DMAPERID0rs, 0x30);
id_reg!(DMAPERID1, dmaperid1, DMAPERID1rs, 0xB2);
id_reg!(DMAPERID2, dmaperid2, DMAPERID2rs, 0x0B);
id_reg!(DMAPERID3, dmaperid3, DMAPERID3rs, 0x00);
id_reg!(DMAPCELLID0, dmapcellid0, DMAPCELLID0rs, 0x0D);
id_reg!(DMAPCELLID1, dmapcellid1, DMAPCELLID1rs, 0xF0);
id_reg!(DMAPCELLID2, dmapcellid2, DMAPCELLID2rs, 0x05);
id_reg!(DMAPCELLID3, dmapcellid3, DMAPCELLID3rs, 0xB1);

/// Peripheral wired to a channel
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Channel {
    Spi1Tx = 0,
    Spi1Rx = 1,
    UartTx = 2,
    UartRx = 3,
    I2csTx = 4,
    I2csRx = 5,
    I2cmTx = 6,
    I2cmRx = 7,
    Adc = 9,
    Spi0Tx = 10,
    Spi0Rx = 11,
}

impl Channel {
    /// Channel number
    #[inline(always)]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Bit of the channel in the per-channel registers
    #[inline(always)]
    pub const fn mask(self) -> Channels {
        Channels::from_bits_truncate(1 << self as u8)
    }

    /// Done interrupt raised by the channel
    pub const fn interrupt(self) -> Interrupt {
        match self {
            Channel::Spi1Tx => Interrupt::DMA_SPI1_TX,
            Channel::Spi1Rx => Interrupt::DMA_SPI1_RX,
            Channel::UartTx => Interrupt::DMA_UART_TX,
            Channel::UartRx => Interrupt::DMA_UART_RX,
            Channel::I2csTx => Interrupt::DMA_I2CS_TX,
            Channel::I2csRx => Interrupt::DMA_I2CS_RX,
            Channel::I2cmTx => Interrupt::DMA_I2CM_TX,
            Channel::I2cmRx => Interrupt::DMA_I2CM_RX,
            Channel::Adc => Interrupt::DMA_ADC,
            Channel::Spi0Tx => Interrupt::DMA_SPI0_TX,
            Channel::Spi0Rx => Interrupt::DMA_SPI0_RX,
        }
    }
}

impl TryFrom<u8> for Channel {
    type Error = Error;

    fn try_from(n: u8) -> Result<Self, Error> {
        Ok(match n {
            0 => Channel::Spi1Tx,
            1 => Channel::Spi1Rx,
            2 => Channel::UartTx,
            3 => Channel::UartRx,
            4 => Channel::I2csTx,
            5 => Channel::I2csRx,
            6 => Channel::I2cmTx,
            7 => Channel::I2cmRx,
            9 => Channel::Adc,
            10 => Channel::Spi0Tx,
            11 => Channel::Spi0Rx,
            _ => return Err(Error::NoSuchChannel),
        })
    }
}

/// DMA descriptor errors
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[non_exhaustive]
pub enum Error {
    /// A cycle moves between 1 and 1024 items
    TransferCount,
    /// Channel number not implemented
    NoSuchChannel,
}

/// Marker for the fields of a descriptor control word
#[derive(Debug)]
pub struct ControlWord;

/// Fields of the descriptor control word
pub mod control {
    use super::*;

    /// Cycle type
    pub const CYCLE_CTRL: Field<ControlWord, CycleCtrl> = Field::new(0, 3);
    /// Use bursts for the rest of a peripheral scatter-gather cycle
    pub const NEXT_USEBURST: Bit<ControlWord> = Bit::new(3);
    /// Items to move, minus one
    pub const N_MINUS_1: Field<ControlWord> = Field::new(4, 10);
    /// Items moved before re-arbitration, as a power of two
    pub const R_POWER: Field<ControlWord, RPower> = Field::new(14, 4);
    /// Source bus protection
    pub const SRC_PROT_CTRL: Field<ControlWord> = Field::new(18, 3);
    /// Destination bus protection
    pub const DST_PROT_CTRL: Field<ControlWord> = Field::new(21, 3);
    /// Source item size
    pub const SRC_SIZE: Field<ControlWord, Size> = Field::new(24, 2);
    /// Source address increment
    pub const SRC_INC: Field<ControlWord, Inc> = Field::new(26, 2);
    /// Destination item size
    pub const DST_SIZE: Field<ControlWord, Size> = Field::new(28, 2);
    /// Destination address increment
    pub const DST_INC: Field<ControlWord, Inc> = Field::new(30, 2);

    field_enum! {
        /// Cycle type
        pub enum CycleCtrl: u8 {
            /// Descriptor invalid, channel stopped
            Stop = 0,
            /// One cycle per request sequence
            Basic = 1,
            /// The whole cycle on a single request
            Auto = 2,
            /// Alternate between primary and alternate descriptors
            PingPong = 3,
            /// Memory scatter-gather, primary descriptor
            MemSgPri = 4,
            /// Memory scatter-gather, alternate descriptor
            MemSgAlt = 5,
            /// Peripheral scatter-gather, primary descriptor
            PerSgPri = 6,
            /// Peripheral scatter-gather, alternate descriptor
            PerSgAlt = 7,
        }
    }

    field_enum! {
        /// Items moved between arbitrations
        pub enum RPower: u8 {
            Every1 = 0,
            Every2 = 1,
            Every4 = 2,
            Every8 = 3,
            Every16 = 4,
            Every32 = 5,
            Every64 = 6,
            Every128 = 7,
            Every256 = 8,
            Every512 = 9,
            Every1024 = 10,
        }
    }

    field_enum! {
        /// Item size
        pub enum Size: u8 {
            Byte = 0,
            HalfWord = 1,
            Word = 2,
        }
    }

    field_enum! {
        /// Address increment after each item
        pub enum Inc: u8 {
            Byte = 0,
            HalfWord = 1,
            Word = 2,
            /// Address stays fixed, used for peripheral data registers
            None = 3,
        }
    }
}

use control::{CycleCtrl, Inc, RPower, Size};

/// Descriptor control word
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(transparent)]
pub struct Control(u32);

impl Control {
    /// Largest number of items a single cycle moves
    pub const MAX_TRANSFERS: usize = 1024;

    /// Control word moving `count` bytes, byte-incrementing both addresses
    pub const fn new(cycle: CycleCtrl, count: usize) -> Result<Self, Error> {
        if count == 0 || count > Self::MAX_TRANSFERS {
            return Err(Error::TransferCount);
        }
        Ok(Self(
            control::CYCLE_CTRL.value(cycle as u32) | control::N_MINUS_1.value(count as u32 - 1),
        ))
    }

    /// Control word from raw bits
    #[inline(always)]
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// Raw bits
    #[inline(always)]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Source item size and increment
    pub const fn src(self, size: Size, inc: Inc) -> Self {
        self.with(control::SRC_SIZE.mask(), control::SRC_SIZE.value(size as u32))
            .with(control::SRC_INC.mask(), control::SRC_INC.value(inc as u32))
    }

    /// Destination item size and increment
    pub const fn dst(self, size: Size, inc: Inc) -> Self {
        self.with(control::DST_SIZE.mask(), control::DST_SIZE.value(size as u32))
            .with(control::DST_INC.mask(), control::DST_INC.value(inc as u32))
    }

    /// Arbitration rate
    pub const fn r_power(self, r_power: RPower) -> Self {
        self.with(control::R_POWER.mask(), control::R_POWER.value(r_power as u32))
    }

    /// Source and destination bus protection bits
    pub const fn prot(self, src: u8, dst: u8) -> Self {
        self.with(control::SRC_PROT_CTRL.mask(), control::SRC_PROT_CTRL.value(src as u32))
            .with(control::DST_PROT_CTRL.mask(), control::DST_PROT_CTRL.value(dst as u32))
    }

    /// Burst-only requests for the remainder of a peripheral scatter-gather cycle
    pub const fn next_useburst(self, on: bool) -> Self {
        self.with(control::NEXT_USEBURST.mask(), (on as u32) << 3)
    }

    /// Cycle type
    pub fn cycle_ctrl(self) -> Option<CycleCtrl> {
        CycleCtrl::from_bits((self.0 & control::CYCLE_CTRL.mask()) >> control::CYCLE_CTRL.offset())
    }

    /// Items left to move in the current cycle
    pub const fn remaining(self) -> usize {
        if self.0 & control::CYCLE_CTRL.mask() == 0 {
            0
        } else {
            ((self.0 & control::N_MINUS_1.mask()) >> control::N_MINUS_1.offset()) as usize + 1
        }
    }

    const fn with(self, mask: u32, value: u32) -> Self {
        Self((self.0 & !mask) | value)
    }
}

/// Channel control descriptor
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(C, align(16))]
pub struct ChannelDescriptor {
    /// Address of the last source item
    pub src_end: u32,
    /// Address of the last destination item
    pub dst_end: u32,
    /// Control word
    pub control: Control,
    _unused: u32,
}

impl ChannelDescriptor {
    /// Descriptor with the channel stopped
    pub const STOPPED: Self = Self {
        src_end: 0,
        dst_end: 0,
        control: Control(0),
        _unused: 0,
    };

    /// Descriptor moving `count` items from `src` to `dst`
    ///
    /// The end pointers are derived from the start address, the item count and the increment,
    /// the way the controller expects them.
    pub const fn new(src: u32, dst: u32, count: usize, control: Control) -> Result<Self, Error> {
        if count == 0 || count > Control::MAX_TRANSFERS {
            return Err(Error::TransferCount);
        }
        let ctrl = Control(
            (control.0 & !control::N_MINUS_1.mask()) | control::N_MINUS_1.value(count as u32 - 1),
        );
        let last = count as u32 - 1;
        Ok(Self {
            src_end: end_address(src, last, ctrl.0 >> control::SRC_INC.offset()),
            dst_end: end_address(dst, last, ctrl.0 >> control::DST_INC.offset()),
            control: ctrl,
            _unused: 0,
        })
    }
}

// Address of item `last` for an increment field value, `Inc::None` stays at `start`
const fn end_address(start: u32, last: u32, inc: u32) -> u32 {
    match inc & 0x3 {
        3 => start,
        shift => start.wrapping_add(last << shift),
    }
}

impl Default for ChannelDescriptor {
    fn default() -> Self {
        Self::STOPPED
    }
}

/// Primary and alternate descriptors of every channel
#[derive(Debug)]
#[repr(C, align(512))]
pub struct DescriptorTable {
    /// Descriptors selected while the channel's `DMAALTSET` bit is clear
    pub primary: [ChannelDescriptor; 16],
    /// Descriptors selected while the channel's `DMAALTSET` bit is set
    pub alternate: [ChannelDescriptor; 16],
}

impl DescriptorTable {
    /// Table with every channel stopped
    pub const fn new() -> Self {
        Self {
            primary: [ChannelDescriptor::STOPPED; 16],
            alternate: [ChannelDescriptor::STOPPED; 16],
        }
    }

    /// Value for `DMAPDBPTR`
    pub fn base(&self) -> u32 {
        self as *const Self as usize as u32
    }

    /// Installs the primary descriptor of `channel`
    ///
    /// Every memory write issued before this call, buffer contents included, is ordered before
    /// the register writes that start the channel.
    pub fn set_primary(&mut self, channel: Channel, descriptor: ChannelDescriptor) {
        self.primary[usize::from(channel.number())] = descriptor;
        atomic::compiler_fence(Ordering::Release);
    }

    /// Control word of the primary descriptor of `channel`, as the controller last wrote it back
    ///
    /// Reads of the destination buffer that follow a stopped control word see the data the
    /// cycle moved.
    pub fn primary_control(&self, channel: Channel) -> Control {
        let slot = &self.primary[usize::from(channel.number())];
        // Written back by the controller
        let control = unsafe { ptr::read_volatile(&slot.control) };
        atomic::compiler_fence(Ordering::Acquire);
        control
    }
}

impl Default for DescriptorTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generic::test_util::assert_disjoint;
    use crate::Resettable;
    use core::mem::{align_of, offset_of, size_of};

    #[test]
    fn layout() {
        assert_eq!(offset_of!(RegisterBlock, dmasta), 0x000);
        assert_eq!(offset_of!(RegisterBlock, dmacfg), 0x004);
        assert_eq!(offset_of!(RegisterBlock, dmapdbptr), 0x008);
        assert_eq!(offset_of!(RegisterBlock, dmaadbptr), 0x00C);
        assert_eq!(offset_of!(RegisterBlock, dmaswreq), 0x014);
        assert_eq!(offset_of!(RegisterBlock, dmarmskset), 0x020);
        assert_eq!(offset_of!(RegisterBlock, dmarmskclr), 0x024);
        assert_eq!(offset_of!(RegisterBlock, dmaenset), 0x028);
        assert_eq!(offset_of!(RegisterBlock, dmaenclr), 0x02C);
        assert_eq!(offset_of!(RegisterBlock, dmaaltset), 0x030);
        assert_eq!(offset_of!(RegisterBlock, dmaaltclr), 0x034);
        assert_eq!(offset_of!(RegisterBlock, dmapriset), 0x038);
        assert_eq!(offset_of!(RegisterBlock, dmapriclr), 0x03C);
        assert_eq!(offset_of!(RegisterBlock, dmaerrclr), 0x04C);
        assert_eq!(offset_of!(RegisterBlock, dmaperid4), 0xFD0);
        assert_eq!(offset_of!(RegisterBlock, dmaperid0), 0xFE0);
        assert_eq!(offset_of!(RegisterBlock, dmaperid3), 0xFEC);
        assert_eq!(offset_of!(RegisterBlock, dmapcellid0), 0xFF0);
        assert_eq!(offset_of!(RegisterBlock, dmapcellid3), 0xFFC);
        assert_eq!(size_of::<RegisterBlock>(), 0x1000);
    }

    #[test]
    fn identification_matches_pl230() {
        assert_eq!(dmasta::DMASTArs::RESET_VALUE, 0x000B_0000);
        // CHNLSMINUS1 reads back the channel count
        assert_eq!(
            (dmasta::DMASTArs::RESET_VALUE & dmasta::CHNLSMINUS1.mask()) >> 16,
            CHANNELS as u32 - 1
        );
        assert_eq!(dmaperid0::DMAPERID0rs::RESET_VALUE, 0x30);
        assert_eq!(dmaperid1::DMAPERID1rs::RESET_VALUE, 0xB2);
        assert_eq!(dmapcellid0::DMAPCELLID0rs::RESET_VALUE, 0x0D);
        assert_eq!(dmapcellid3::DMAPCELLID3rs::RESET_VALUE, 0xB1);
    }

    #[test]
    fn channels_raise_consecutive_interrupts() {
        for n in 0..CHANNELS as u8 {
            match Channel::try_from(n) {
                Ok(ch) => {
                    assert_eq!(ch.number(), n);
                    assert_eq!(ch.interrupt() as u16, 20 + u16::from(n));
                    assert_eq!(ch.mask().bits(), 1 << n);
                }
                Err(e) => {
                    assert_eq!(n, 8);
                    assert_eq!(e, Error::NoSuchChannel);
                }
            }
        }
        assert_eq!(Channel::try_from(12u8), Err(Error::NoSuchChannel));
        assert_eq!(Channels::all().bits() & (1 << 8), 0);
    }

    #[test]
    fn control_word_fields() {
        assert_disjoint(&[
            control::CYCLE_CTRL.mask(),
            control::NEXT_USEBURST.mask(),
            control::N_MINUS_1.mask(),
            control::R_POWER.mask(),
            control::SRC_PROT_CTRL.mask(),
            control::DST_PROT_CTRL.mask(),
            control::SRC_SIZE.mask(),
            control::SRC_INC.mask(),
            control::DST_SIZE.mask(),
            control::DST_INC.mask(),
        ]);
        assert_eq!(control::DST_INC.mask(), 0xC000_0000);
        assert_eq!(control::SRC_INC.value(Inc::None as u32), 0x0C00_0000);
        assert_eq!(control::R_POWER.value(RPower::Every1024 as u32), 0x0002_8000);
    }

    #[test]
    fn control_word_builder() {
        let c = Control::new(CycleCtrl::Basic, 16)
            .map(|c| c.src(Size::Byte, Inc::Byte).dst(Size::Byte, Inc::None))
            .unwrap();
        assert_eq!(c.bits(), 0xC000_00F1);
        assert_eq!(c.cycle_ctrl(), Some(CycleCtrl::Basic));
        assert_eq!(c.remaining(), 16);
        assert_eq!(Control::new(CycleCtrl::Auto, 0), Err(Error::TransferCount));
        assert_eq!(Control::new(CycleCtrl::Auto, 1025), Err(Error::TransferCount));
        assert_eq!(Control::new(CycleCtrl::Auto, 1024).unwrap().bits(), 0x0000_3FF2);
        assert_eq!(Control::from_bits(0x0000_3FF0).remaining(), 0);
    }

    #[test]
    fn descriptor_end_pointers() {
        let control = Control::new(CycleCtrl::Auto, 1)
            .unwrap()
            .src(Size::Word, Inc::Word)
            .dst(Size::Word, Inc::None);
        let d = ChannelDescriptor::new(0x2000_0000, 0x4000_4008, 8, control).unwrap();
        assert_eq!(d.src_end, 0x2000_001C);
        assert_eq!(d.dst_end, 0x4000_4008);
        assert_eq!(d.control.remaining(), 8);
        assert_eq!(
            ChannelDescriptor::new(0, 0, 2000, control),
            Err(Error::TransferCount)
        );
    }

    #[test]
    fn descriptor_table_alignment() {
        assert_eq!(size_of::<ChannelDescriptor>(), 16);
        assert_eq!(align_of::<DescriptorTable>(), 512);
        assert_eq!(offset_of!(DescriptorTable, alternate), 0x100);
        let table = DescriptorTable::new();
        assert_eq!(table.base() & 0x1FF, 0);
        assert!(table.primary.iter().all(|d| *d == ChannelDescriptor::STOPPED));
    }

    #[test]
    fn primary_descriptor_handoff() {
        let mut table = DescriptorTable::new();
        let ctrl = Control::new(control::CycleCtrl::Auto, 4)
            .unwrap()
            .src(control::Size::Word, control::Inc::Word)
            .dst(control::Size::Word, control::Inc::Word);
        let descriptor = ChannelDescriptor::new(0x2000_0000, 0x2000_0100, 4, ctrl).unwrap();
        table.set_primary(Channel::Spi1Tx, descriptor);
        assert_eq!(table.primary[Channel::Spi1Tx.number() as usize], descriptor);
        assert_eq!(table.primary_control(Channel::Spi1Tx).remaining(), 4);
        assert_eq!(table.primary_control(Channel::Spi1Rx), Control::from_bits(0));

        // Write-back of a finished cycle
        table.primary[Channel::Spi1Tx.number() as usize].control =
            Control::from_bits(ctrl.bits() & !control::CYCLE_CTRL.mask());
        let done = table.primary_control(Channel::Spi1Tx);
        assert_eq!(done.cycle_ctrl(), Some(control::CycleCtrl::Stop));
        assert_eq!(done.remaining(), 0);
    }

    #[test]
    fn channel_registers_in_ram() {
        let block: RegisterBlock = unsafe { core::mem::zeroed() };
        block
            .dmaenset
            .write(|w| w.channels(Channel::Spi0Tx.mask() | Channel::Spi0Rx.mask()));
        assert_eq!(
            block.dmaenset.read().channels(),
            Channels::SPI0_TX | Channels::SPI0_RX
        );
        block.dmacfg.write(|w| w.set_bit(dmacfg::ENABLE));
        assert_eq!(unsafe { *block.dmacfg.as_ptr() }, 1);
    }
}
