use gt::{BankFlags, GamepadPort, Page, ScrReg, VideoFlags};
use log::debug;

use crate::inputs::GamePad;

/// Latched state of the system control block at `$2000`.
#[derive(Debug)]
pub struct SystemControl {
    pub reset_acp: u8,
    pub nmi_acp: u8,

    pub banking_register: BankFlags,

    pub audio_enable_sample_rate: u8,
    pub dma_flags: VideoFlags,

    pub gamepads: [GamePad; 2],
}

impl Default for SystemControl {
    fn default() -> Self {
        Self {
            reset_acp: 0,
            nmi_acp: 0,
            banking_register: BankFlags::empty(),
            audio_enable_sample_rate: 0,
            dma_flags: VideoFlags::empty(),
            gamepads: [GamePad::default(); 2],
        }
    }
}

impl SystemControl {
    /// The page the blitter writes into.
    #[inline(always)]
    pub fn draw_target(&self) -> Page {
        Page::from_bit(self.banking_register.contains(BankFlags::FRAMEBUFFER_SELECT))
    }

    /// The page sent to the TV.
    #[inline(always)]
    pub fn framebuffer_out(&self) -> Page {
        Page::from_bit(self.dma_flags.contains(VideoFlags::DMA_PAGE_OUT))
    }

    #[inline(always)]
    pub fn vblank_nmi_enabled(&self) -> bool {
        self.dma_flags.contains(VideoFlags::DMA_NMI)
    }

    #[inline(always)]
    pub fn acp_enabled(&self) -> bool {
        (self.audio_enable_sample_rate & 0b1000_0000) != 0
    }

    #[inline(always)]
    pub fn write_byte(&mut self, reg: ScrReg, data: u8) {
        match reg {
            ScrReg::AudioReset => self.reset_acp = data,
            ScrReg::AudioNmi => self.nmi_acp = data,
            ScrReg::Banking => {
                debug!("setting banking register to {:08b}", data);
                self.banking_register = BankFlags::from_bits_retain(data);
            }
            ScrReg::AudioRate => self.audio_enable_sample_rate = data,
            ScrReg::Video => {
                debug!("setting video flags to {:08b}", data);
                self.dma_flags = VideoFlags::from_bits_retain(data);
            }
        }
    }

    /// Read a port: returns its byte, toggles its select line and resets the other pad's.
    #[inline(always)]
    pub fn read_gamepad_byte(&mut self, port: GamepadPort) -> u8 {
        let (this, other) = match port {
            GamepadPort::One => (0, 1),
            GamepadPort::Two => (1, 0),
        };

        let byte = self.gamepads[this].byte();

        self.gamepads[other].port_select = false;
        self.gamepads[this].port_select = !self.gamepads[this].port_select;

        byte
    }

    #[inline(always)]
    pub fn peek_gamepad_byte(&self, port: GamepadPort) -> u8 {
        match port {
            GamepadPort::One => self.gamepads[0].byte(),
            GamepadPort::Two => self.gamepads[1].byte(),
        }
    }
}
