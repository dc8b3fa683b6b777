//! # Blitter
//!
//! The blitter fills rectangles in the framebuffer the banking register
//! points at. Every job here is synchronous: the CPU halts until the blitter
//! raises its completion IRQ, then acknowledges it.
//!
//! ```ignore
//! let mut blitter = console.blitter();
//! blitter.clear(Color::BLACK);
//! blitter.draw_box(Rect::new(10, 10, 32, 32)?, Color::RED);
//! ```
//!
//! A full-screen clear can't be a single job: WIDTH and HEIGHT top out at
//! 127, so [`Blitter::clear`] tiles the surface with four 64×64 fills.

use log::trace;

use crate::{
    bcr::BcrReg,
    color::Color,
    geometry::{Extent, Rect},
    hardware::Hardware,
    scr::VideoFlags,
    shadow::Shadow,
};

/// One color-fill transaction.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BlitJob {
    pub x: u8,
    pub y: u8,
    pub width: Extent,
    pub height: Extent,
    pub color: Color,
}

impl BlitJob {
    pub fn fill(rect: Rect, color: Color) -> Self {
        Self {
            x: rect.x(),
            y: rect.y(),
            width: rect.width(),
            height: rect.height(),
            color,
        }
    }
}

/// Exclusive access to the blitter for the duration of a borrow.
///
/// Borrows the DMA flags shadow so fills can overlay color-fill mode and put
/// the flags back afterwards.
pub struct Blitter<'a, H: Hardware> {
    pub(crate) hw: &'a mut H,
    pub(crate) video_flags: &'a Shadow<VideoFlags>,
}

impl<'a, H: Hardware> Blitter<'a, H> {
    /// Fill `rect` with a solid color.
    pub fn draw_box(&mut self, rect: Rect, color: Color) {
        self.video_flags.overlay(self.hw, VideoFlags::DMA_COLORFILL);
        self.run(&BlitJob::fill(rect, color));
        self.video_flags.restore(self.hw);
    }

    /// Fill the whole 128×128 surface, one quadrant at a time.
    pub fn clear(&mut self, color: Color) {
        self.video_flags.overlay(self.hw, VideoFlags::DMA_COLORFILL);
        for quadrant in Rect::quadrants() {
            self.run(&BlitJob::fill(quadrant, color));
        }
        self.video_flags.restore(self.hw);
    }

    /// Program the registers, start the job and block until it completes.
    ///
    /// Color-fill mode must already be latched.
    fn run(&mut self, job: &BlitJob) {
        trace!(
            "blit {}x{} at ({}, {}) color {:#04x}",
            job.width.get(),
            job.height.get(),
            job.x,
            job.y,
            job.color.register()
        );

        self.hw.write_bcr(BcrReg::Vx, job.x);
        self.hw.write_bcr(BcrReg::Vy, job.y);
        self.hw.write_bcr(BcrReg::Width, job.width.get());
        self.hw.write_bcr(BcrReg::Height, job.height.get());
        self.hw.write_bcr(BcrReg::Color, job.color.register());
        self.hw.write_bcr(BcrReg::Start, 1);

        self.wait_blit();
    }

    /// Halt until the completion IRQ, then acknowledge it by writing 0 to START.
    fn wait_blit(&mut self) {
        self.hw.wait_for_interrupt();
        self.hw.write_bcr(BcrReg::Start, 0);
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::vec::Vec;

    use super::*;
    use crate::{
        hardware::recording::{Access, Recording},
        scr::ScrReg,
    };

    fn video_shadow(hw: &mut Recording) -> Shadow<VideoFlags> {
        Shadow::init(hw, ScrReg::Video, VideoFlags::DMA_ENABLE | VideoFlags::DMA_IRQ)
    }

    #[test]
    fn draw_box_sequence() {
        let mut hw = Recording::default();
        let video = video_shadow(&mut hw);
        hw.log.clear();

        let mut blitter = Blitter { hw: &mut hw, video_flags: &video };
        blitter.draw_box(Rect::new(3, 4, 5, 6).unwrap(), Color::from_register(0x42));

        let base = (VideoFlags::DMA_ENABLE | VideoFlags::DMA_IRQ).bits();
        assert_eq!(
            hw.log,
            [
                Access::Scr(ScrReg::Video, base | VideoFlags::DMA_COLORFILL.bits()),
                Access::Bcr(BcrReg::Vx, 3),
                Access::Bcr(BcrReg::Vy, 4),
                Access::Bcr(BcrReg::Width, 5),
                Access::Bcr(BcrReg::Height, 6),
                Access::Bcr(BcrReg::Color, 0x42),
                Access::Bcr(BcrReg::Start, 1),
                Access::Wait,
                Access::Bcr(BcrReg::Start, 0),
                Access::Scr(ScrReg::Video, base),
            ]
        );
        assert_eq!(video.get(), VideoFlags::DMA_ENABLE | VideoFlags::DMA_IRQ);
    }

    #[test]
    fn clear_issues_four_quadrant_jobs() {
        let mut hw = Recording::default();
        let video = video_shadow(&mut hw);
        hw.log.clear();

        Blitter { hw: &mut hw, video_flags: &video }.clear(Color::BLACK);

        let origins: Vec<(u8, u8)> = hw
            .bcr_writes(BcrReg::Vx)
            .into_iter()
            .zip(hw.bcr_writes(BcrReg::Vy))
            .collect();
        assert_eq!(origins, [(0, 0), (64, 0), (0, 64), (64, 64)]);
        assert_eq!(hw.bcr_writes(BcrReg::Width), [64; 4]);
        assert_eq!(hw.bcr_writes(BcrReg::Height), [64; 4]);
        assert_eq!(hw.bcr_writes(BcrReg::Start), [1, 0, 1, 0, 1, 0, 1, 0]);
        assert_eq!(hw.log.iter().filter(|a| **a == Access::Wait).count(), 4);

        // colorfill overlaid once, then restored
        assert_eq!(hw.scr_writes(ScrReg::Video).len(), 2);
        assert_eq!(hw.log.last(), Some(&Access::Scr(ScrReg::Video, video.get().bits())));
    }
}
