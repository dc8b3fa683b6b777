//! # Versatile Interface Adapter (`$2800`)
//!
//! Only port A is used, to bit-bang the flash cartridge's bank latch over SPI.

use bit_field::BitField;
use log::debug;

use crate::hardware::Hardware;

pub const SPI_BIT_CLK: u8 = 0b0000_0001;
pub const SPI_BIT_MOSI: u8 = 0b0000_0010;
pub const SPI_BIT_CS: u8 = 0b0000_0100;

/// 6522 register identifiers.
#[repr(u16)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ViaReg {
    Iorb = 0x2800,
    Iora = 0x2801,
    Ddrb = 0x2802,
    Ddra = 0x2803,
    T1cl = 0x2804,
    T1ch = 0x2805,
    T1ll = 0x2806,
    T1lh = 0x2807,
    T2cl = 0x2808,
    T2ch = 0x2809,
    Sr = 0x280A,
    Acr = 0x280B,
    Pcr = 0x280C,
    Ifr = 0x280D,
    Ier = 0x280E,
    IoraNh = 0x280F,
}

impl ViaReg {
    #[inline(always)]
    pub const fn address(self) -> u16 {
        self as u16
    }

    /// Register index within the VIA block (0-15).
    #[inline(always)]
    pub const fn index(self) -> usize {
        (self as u16 - 0x2800) as usize
    }
}

/// Shift `bank` MSB first into the cartridge's bank latch, then latch it.
pub fn change_rom_bank<H: Hardware>(hw: &mut H, bank: u8) {
    debug!("selecting rom bank {}", bank);

    // low three bits of port A drive CLK/MOSI/CS
    hw.write_via(ViaReg::Ddra, SPI_BIT_CLK | SPI_BIT_MOSI | SPI_BIT_CS);
    hw.write_via(ViaReg::Iora, 0);

    for bit in (0..8).rev() {
        let mosi = if bank.get_bit(bit) { SPI_BIT_MOSI } else { 0 };
        hw.write_via(ViaReg::Iora, mosi);
        hw.write_via(ViaReg::Iora, mosi | SPI_BIT_CLK);
    }

    hw.write_via(ViaReg::Iora, SPI_BIT_CS);
    hw.write_via(ViaReg::Iora, 0);
}
