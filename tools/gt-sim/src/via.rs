//! VIA register file plus the flash cartridge's bank latch on port A.

use bit_field::BitField;
use gt::via::{SPI_BIT_CLK, SPI_BIT_CS, SPI_BIT_MOSI, ViaReg};
use log::debug;

#[derive(Debug, Default)]
pub struct Via {
    regs: [u8; 16],
    bank_shifter: u8,
    bank_mask: u8,
}

impl Via {
    /// Bank selected by the last latch pulse.
    #[inline(always)]
    pub fn rom_bank(&self) -> u8 {
        self.bank_mask
    }

    #[inline(always)]
    pub fn reg(&self, reg: ViaReg) -> u8 {
        self.regs[reg.index()]
    }

    pub fn write_byte(&mut self, reg: ViaReg, data: u8) {
        if matches!(reg, ViaReg::Iora | ViaReg::IoraNh) {
            self.update_flash_shift_register(data);
        }
        self.regs[reg.index()] = data;
    }

    /// Only pins configured as outputs in DDRA reach the cartridge.
    fn pins(&self, iora: u8) -> u8 {
        iora & self.regs[ViaReg::Ddra.index()]
    }

    fn update_flash_shift_register(&mut self, next_val: u8) {
        let old_val = self.pins(self.regs[ViaReg::Iora.index()]);
        let next_val = self.pins(next_val);
        let rising_bits = next_val & !old_val;

        if rising_bits & SPI_BIT_CLK != 0 {
            self.bank_shifter <<= 1;
            self.bank_shifter.set_bit(0, old_val & SPI_BIT_MOSI != 0);
        } else if rising_bits & SPI_BIT_CS != 0 {
            // CS is wired to the latch clock
            self.bank_mask = self.bank_shifter;
            debug!("flash bank mask set to 0x{:x}", self.bank_mask);
        }
    }
}
