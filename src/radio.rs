//! # UHF transceiver command interface
//!
//! The transceiver sits behind SPI0 on port 2, with its chip select on P2.3 driven as a GPIO and
//! its interrupt on IRQ8 (P2.4). It is not memory mapped: the core talks to it with one-byte
//! commands and reaches its memory through two-byte headers.
//!
//! Every byte the radio shifts back while idle is its [`Status`] byte. Reading the state takes
//! two [`Command::Nop`] transfers inside one chip select; the second answer is current.

use crate::generic::field_enum;
use crate::{Bit, Field, FieldValue};

/// SPI0 clock the radio firmware is driven at
pub const SPI_CLOCK_HZ: u32 = 4_000_000;

/// `SPIDIV.DIV` giving [`SPI_CLOCK_HZ`] from a 16 MHz UCLK
pub const SPI_DIV: u32 = (16_000_000 / SPI_CLOCK_HZ) / 2 - 1;

field_enum! {
    /// Command codes
    pub enum Command: u8 {
        /// Sequential memory write, OR'ed with address bits 10:8
        MemWrite = 0x18,
        /// Sequential memory read, OR'ed with address bits 10:8
        MemRead = 0x38,
        /// Synchronise with the command handler
        Sync = 0xA2,
        /// Enter PHY_OFF
        PhyOff = 0xB0,
        /// Enter PHY_ON
        PhyOn = 0xB1,
        /// Enter PHY_RX
        PhyRx = 0xB2,
        /// Enter PHY_TX
        PhyTx = 0xB5,
        /// Enter PHY_SLEEP
        PhySleep = 0xBA,
        /// Apply the configuration held in BBRAM
        ConfigDev = 0xBB,
        /// Measure RSSI into the readback register
        GetRssi = 0xBC,
        /// Reset the transceiver
        HwReset = 0xC8,
        /// Clocks out the status byte
        Nop = 0xFF,
    }
}

impl From<Command> for u8 {
    #[inline(always)]
    fn from(command: Command) -> Self {
        command as u8
    }
}

field_enum! {
    /// Firmware state reported in the status byte
    pub enum FirmwareState: u8 {
        /// Executing a command
        Busy = 0x00,
        /// Measuring RSSI
        Rssi = 0x05,
        /// Initialising after reset
        Init = 0x0F,
        /// PHY_OFF
        Off = 0x11,
        /// PHY_ON
        On = 0x12,
        /// PHY_RX
        Rx = 0x13,
        /// PHY_TX
        Tx = 0x14,
    }
}

/// Marker for the fields of the status byte
#[derive(Debug)]
pub struct StatusByte;

/// Fields of the status byte
pub mod status {
    use super::*;

    /// Firmware state
    pub const FW_STATE: Field<StatusByte, FirmwareState> = Field::new(0, 5);
    /// The command handler accepts a new command
    pub const CMD_READY: Bit<StatusByte> = Bit::new(5);
    /// An interrupt source is pending
    pub const IRQ_STATUS: Bit<StatusByte> = Bit::new(6);
    /// The SPI interface is ready
    pub const SPI_READY: Bit<StatusByte> = Bit::new(7);
}

/// Status byte shifted out by the radio
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(transparent)]
pub struct Status(u8);

impl Status {
    /// Status from the byte received over SPI
    #[inline(always)]
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    /// Raw bits
    #[inline(always)]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Firmware state, `None` for codes outside the documented set
    pub fn state(self) -> Option<FirmwareState> {
        let field = status::FW_STATE;
        FirmwareState::from_bits((u32::from(self.0) & field.mask()) >> field.offset())
    }

    /// The radio takes a new command
    #[inline(always)]
    pub const fn cmd_ready(self) -> bool {
        self.0 as u32 & status::CMD_READY.mask() != 0
    }

    /// An interrupt is pending
    #[inline(always)]
    pub const fn irq_pending(self) -> bool {
        self.0 as u32 & status::IRQ_STATUS.mask() != 0
    }

    /// The SPI interface is ready
    #[inline(always)]
    pub const fn spi_ready(self) -> bool {
        self.0 as u32 & status::SPI_READY.mask() != 0
    }
}

/// Radio memory access errors
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[non_exhaustive]
pub enum Error {
    /// Radio memory addresses are 11 bits wide
    Address,
}

/// Highest radio memory address
pub const MEM_ADDR_MAX: u16 = 0x7FF;

const fn header(command: Command, address: u16) -> Result<[u8; 2], Error> {
    if address > MEM_ADDR_MAX {
        return Err(Error::Address);
    }
    Ok([command as u8 | (address >> 8) as u8, address as u8])
}

/// Bytes opening a sequential write at `address`; data bytes follow
pub const fn mem_write(address: u16) -> Result<[u8; 2], Error> {
    header(Command::MemWrite, address)
}

/// Bytes opening a sequential read at `address`
///
/// The trailing NOP is a turnaround byte. Each further NOP clocks in one data byte.
pub const fn mem_read(address: u16) -> Result<[u8; 3], Error> {
    match header(Command::MemRead, address) {
        Ok([first, second]) => Ok([first, second, Command::Nop as u8]),
        Err(e) => Err(e),
    }
}

/// Packet RAM holding the frame to send or the frame received
pub mod packet_ram {
    /// First address
    pub const START: u16 = 0x010;
    /// Size in bytes, the longest frame
    pub const LEN: usize = 240;
    /// TX mode parameter read by `PHY_TX`
    pub const TX_MODE: u16 = 0x00D;
}

field_enum! {
    /// Value of the TX mode parameter
    pub enum TxMode: u8 {
        /// Send the frame in packet RAM
        NormalPacket = 0,
        /// Send preamble until told to stop
        PreambleForever = 2,
        /// Send an unmodulated carrier until told to stop
        CarrierForever = 3,
    }
}

/// Battery-backed configuration RAM applied by [`Command::ConfigDev`]
pub mod bbram {
    /// First address
    pub const START: u16 = 0x100;
    /// Size in bytes
    pub const LEN: usize = 64;

    /// Interrupt mask 0
    pub const INTERRUPT_MASK_0: u16 = 0x100;
    /// Channel frequency, three bytes, least significant first
    pub const CHANNEL_FREQ: u16 = 0x109;
    /// PA power and ramp
    pub const RADIO_CFG_8: u16 = 0x114;
    /// Modulation, demodulation and IF bandwidth
    pub const RADIO_CFG_9: u16 = 0x115;
    /// Symbol length, whitening and Manchester coding
    pub const SYMBOL_MODE: u16 = 0x11C;
    /// Packet RAM offset of the TX frame
    pub const TX_BASE_ADR: u16 = 0x124;
    /// Packet RAM offset of the RX frame
    pub const RX_BASE_ADR: u16 = 0x125;
    /// Length offset, data mode, CRC and fixed or variable length
    pub const PACKET_LENGTH_CONTROL: u16 = 0x126;
    /// Longest accepted frame
    pub const PACKET_LENGTH_MAX: u16 = 0x127;

    /// `INTERRUPT_MASK_0` bits
    pub mod interrupt_mask_0 {
        /// Frame received with a correct CRC
        pub const CRC_CORRECT: u8 = 1 << 2;
        /// Frame sent
        pub const TX_EOF: u8 = 1 << 4;
    }
}

/// Modem configuration registers
pub mod mcr {
    /// PA level
    pub const PA_LEVEL: u16 = 0x307;
    /// Last RSSI measurement, in dBm
    pub const RSSI_READBACK: u16 = 0x312;
    /// Function of the radio's GPIO pins, see [`GpioConfigure`](super::GpioConfigure)
    pub const GPIO_CONFIGURE: u16 = 0x3FA;
    /// Divider of the clock the radio outputs to the core
    pub const EXT_UC_CLK_DIVIDE: u16 = 0x32E;
    /// Pending interrupt sources 0, write 1 to clear
    pub const INTERRUPT_SOURCE_0: u16 = 0x336;
    /// Pending interrupt sources 1, write 1 to clear
    pub const INTERRUPT_SOURCE_1: u16 = 0x337;
}

field_enum! {
    /// Value of `mcr::GPIO_CONFIGURE`
    pub enum GpioConfigure: u8 {
        /// Radio GPIOs unused
        Default = 0x00,
        /// Serial port on the radio GPIOs, for raw data modes
        SportMode0 = 0xA0,
    }
}
