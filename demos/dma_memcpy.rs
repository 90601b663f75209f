//! Copies a buffer with a software triggered DMA cycle
//!
//! Memory to memory transfers can use any channel; this one borrows the SPI1 transmit channel
//! and runs an auto cycle, which moves every item on a single software request.

#![no_main]
#![no_std]

use panic_halt as _;

use aducrf101::dma::{self, control, ChannelDescriptor, Control, DescriptorTable};
use aducrf101::{clkctl, Peripherals};
use cortex_m::singleton;
use cortex_m_rt::entry;

const WORDS: usize = 32;

#[entry]
fn main() -> ! {
    let dp = Peripherals::take().unwrap();

    let table = singleton!(: DescriptorTable = DescriptorTable::new()).unwrap();
    let src = singleton!(: [u32; WORDS] = [0; WORDS]).unwrap();
    let dst = singleton!(: [u32; WORDS] = [0; WORDS]).unwrap();
    for (n, word) in src.iter_mut().enumerate() {
        *word = 0xA5A5_0000 | n as u32;
    }

    dp.CLKCTL
        .clkact
        .modify(|r, w| w.gates(r.gates() | clkctl::Gates::DMA));

    let channel = dma::Channel::Spi1Tx;
    let ctrl = Control::new(control::CycleCtrl::Auto, WORDS)
        .unwrap()
        .src(control::Size::Word, control::Inc::Word)
        .dst(control::Size::Word, control::Inc::Word)
        .r_power(control::RPower::Every32);
    // Orders the buffer fill before the request below
    table.set_primary(
        channel,
        ChannelDescriptor::new(src.as_ptr() as u32, dst.as_mut_ptr() as u32, WORDS, ctrl)
            .unwrap(),
    );

    dp.DMA
        .dmapdbptr
        .write(|w| w.field(dma::dmapdbptr::ADDR, table.base()));
    dp.DMA.dmacfg.write(|w| w.set_bit(dma::dmacfg::ENABLE));
    dp.DMA.dmaaltclr.write(|w| w.channels(channel.mask()));
    dp.DMA.dmaenset.write(|w| w.channels(channel.mask()));
    dp.DMA.dmaswreq.write(|w| w.channels(channel.mask()));

    // The controller writes the cycle type back to Stop once the last item has moved
    while table.primary_control(channel).cycle_ctrl() != Some(control::CycleCtrl::Stop) {}

    assert_eq!(src, dst);

    loop {
        cortex_m::asm::nop();
    }
}
