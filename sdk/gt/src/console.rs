//! # Console
//!
//! [`Console`] owns the hardware handle and the shadows of the two write-only
//! registers, and exposes the drawing and timing primitives:
//!
//! ```ignore
//! let mut console = Console::init(hw, &Config::default());
//! loop {
//!     let pad = console.read_gamepad();
//!     console.clear(Color::BLACK);
//!     console.draw_box(x, y, 8, 8, Color::WHITE)?;
//!     console.sync();
//! }
//! ```

use log::debug;

use crate::{
    bcr::BcrReg,
    blitter::Blitter,
    color::Color,
    config::Config,
    frame_clock,
    framebuffers::{Framebuffers, Page},
    geometry::{GeometryError, Rect},
    hardware::Hardware,
    input::{self, Buttons},
    scr::{BankFlags, ScrReg, VideoFlags},
    shadow::Shadow,
    via,
};

pub struct Console<H: Hardware> {
    hw: H,
    fb: Framebuffers,
}

impl<H: Hardware> Console<H> {
    /// Bring the video hardware to a known state and blank both framebuffers.
    ///
    /// Afterwards the draw page and display page differ, and both hold
    /// `config.clear_color`.
    pub fn init(mut hw: H, config: &Config) -> Self {
        debug!("console init: {:?}", config);

        // clipping keeps boxes at the edge from wrapping around
        let banking = Shadow::init(&mut hw, ScrReg::Banking, BankFlags::CLIP_X | BankFlags::CLIP_Y);

        via::change_rom_bank(&mut hw, config.boot_rom_bank);

        hw.write_scr(ScrReg::AudioReset, 0);
        hw.write_scr(ScrReg::AudioNmi, 0);
        hw.write_scr(ScrReg::AudioRate, 0);

        // drop any blit IRQ left over from before reset
        hw.write_bcr(BcrReg::Start, 0);

        // PAGE_OUT starts set so the first flip leaves the selectors apart
        let video = Shadow::init(
            &mut hw,
            ScrReg::Video,
            VideoFlags::DMA_ENABLE | VideoFlags::DMA_PAGE_OUT | VideoFlags::DMA_IRQ | VideoFlags::DMA_OPAQUE,
        );

        let mut console = Self {
            hw,
            fb: Framebuffers { banking, video },
        };

        console.flip();

        // VRAM is garbage at power-on; wipe both pages
        console.clear(config.clear_color);
        console.flip();
        console.clear(config.clear_color);
        console.flip();

        console
    }

    /// Borrow the blitter.
    pub fn blitter(&mut self) -> Blitter<'_, H> {
        Blitter {
            hw: &mut self.hw,
            video_flags: &self.fb.video,
        }
    }

    /// Fill the whole draw page with `color`.
    pub fn clear(&mut self, color: Color) {
        self.blitter().clear(color);
    }

    /// Fill a box on the draw page.
    pub fn draw_box(&mut self, x: u8, y: u8, width: u8, height: u8, color: Color) -> Result<(), GeometryError> {
        let rect = Rect::new(x, y, width, height)?;
        self.fill(rect, color);
        Ok(())
    }

    /// Fill an already validated box on the draw page.
    pub fn fill(&mut self, rect: Rect, color: Color) {
        self.blitter().draw_box(rect, color);
    }

    /// Swap pages immediately. Prefer [`sync`](Console::sync).
    pub fn flip(&mut self) {
        self.fb.flip(&mut self.hw);
    }

    /// Wait for vblank, then flip. Call once per frame.
    pub fn sync(&mut self) {
        frame_clock::sync(&mut self.hw, &mut self.fb);
    }

    pub fn wait_vblank(&mut self) {
        frame_clock::wait_vblank(&mut self.hw, &mut self.fb.video);
    }

    pub fn read_gamepad(&mut self) -> Buttons {
        input::read_gamepad(&mut self.hw)
    }

    pub fn set_rom_bank(&mut self, bank: u8) {
        via::change_rom_bank(&mut self.hw, bank);
    }

    #[inline(always)]
    pub fn draw_page(&self) -> Page {
        self.fb.draw_page()
    }

    #[inline(always)]
    pub fn display_page(&self) -> Page {
        self.fb.display_page()
    }

    /// Shadow copy of the banking register at `$2005`.
    #[inline(always)]
    pub fn bank_flags(&self) -> BankFlags {
        self.fb.bank_flags()
    }

    /// Shadow copy of the video register at `$2007`.
    #[inline(always)]
    pub fn video_flags(&self) -> VideoFlags {
        self.fb.video_flags()
    }

    pub fn hardware(&self) -> &H {
        &self.hw
    }

    /// Direct access to the hardware.
    ///
    /// Writing `$2005` or `$2007` through this bypasses the shadows and
    /// desynchronizes them.
    pub fn hardware_mut(&mut self) -> &mut H {
        &mut self.hw
    }

    pub fn into_inner(self) -> H {
        self.hw
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hardware::recording::{Access, Recording};

    #[test]
    fn init_leaves_pages_apart() {
        let console = Console::init(Recording::default(), &Config::default());
        assert_ne!(console.draw_page(), console.display_page());
        assert_eq!(console.draw_page(), Page::One);
        assert_eq!(
            console.video_flags(),
            VideoFlags::DMA_ENABLE | VideoFlags::DMA_IRQ | VideoFlags::DMA_OPAQUE
        );
        assert_eq!(
            console.bank_flags(),
            BankFlags::CLIP_X | BankFlags::CLIP_Y | BankFlags::FRAMEBUFFER_SELECT
        );
    }

    #[test]
    fn init_clears_twice() {
        let console = Console::init(Recording::default(), &Config::default());
        let hw = console.into_inner();
        assert_eq!(hw.log.iter().filter(|a| **a == Access::Wait).count(), 8);
        assert!(hw.bcr_writes(BcrReg::Color).iter().all(|c| *c == Color::BLACK.register()));
    }

    #[test]
    fn draw_box_rejects_bad_geometry() {
        let mut console = Console::init(Recording::default(), &Config::default());
        let before = console.hardware().log.len();
        assert_eq!(
            console.draw_box(0, 0, 128, 1, Color::WHITE),
            Err(GeometryError::ExtentTooLarge(128))
        );
        assert!(console.draw_box(100, 100, 40, 4, Color::WHITE).is_err());
        assert_eq!(console.hardware().log.len(), before);

        assert_eq!(console.draw_box(0, 0, 127, 127, Color::WHITE), Ok(()));
    }
}
