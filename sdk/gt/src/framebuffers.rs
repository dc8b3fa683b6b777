//! # Double Buffering
//!
//! The GameTank has two 128×128 framebuffers. Two bits decide their roles:
//! `DMA_PAGE_OUT` in the video register picks the one sent to the TV, and
//! `FRAMEBUFFER_SELECT` in the banking register picks the one the blitter
//! draws into. They are kept complementary, and a flip toggles both, so the
//! page you draw on is never the page being shown.
//!
//! ```ignore
//! loop {
//!     console.clear(Color::BLACK);
//!     console.draw_box(x, y, 8, 8, Color::WHITE)?;
//!     console.sync(); // wait for vblank, then flip
//! }
//! ```

use log::debug;

use crate::{
    hardware::Hardware,
    scr::{BankFlags, VideoFlags},
    shadow::Shadow,
};

/// One of the two framebuffers.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Page {
    Zero,
    One,
}

impl Page {
    #[inline(always)]
    pub const fn from_bit(bit: bool) -> Self {
        if bit { Page::One } else { Page::Zero }
    }

    #[inline(always)]
    pub const fn index(self) -> usize {
        match self {
            Page::Zero => 0,
            Page::One => 1,
        }
    }

    #[inline(always)]
    pub const fn other(self) -> Self {
        match self {
            Page::Zero => Page::One,
            Page::One => Page::Zero,
        }
    }
}

/// The two page selectors, owned together so they can only move together.
#[derive(Debug)]
pub struct Framebuffers {
    pub(crate) banking: Shadow<BankFlags>,
    pub(crate) video: Shadow<VideoFlags>,
}

impl Framebuffers {
    /// Swap the displayed and drawn pages.
    ///
    /// Unsynchronized; outside of vblank this tears. Use
    /// [`Console::sync`](crate::console::Console::sync) once per frame instead.
    #[inline(always)]
    pub fn flip<H: Hardware>(&mut self, hw: &mut H) {
        self.video.update(hw, |f| f.toggle(VideoFlags::DMA_PAGE_OUT));
        self.banking.update(hw, |f| f.toggle(BankFlags::FRAMEBUFFER_SELECT));
        debug!("flip: drawing {:?}, showing {:?}", self.draw_page(), self.display_page());
    }

    /// Page the blitter writes to.
    #[inline(always)]
    pub fn draw_page(&self) -> Page {
        Page::from_bit(self.banking.get().contains(BankFlags::FRAMEBUFFER_SELECT))
    }

    /// Page on screen.
    #[inline(always)]
    pub fn display_page(&self) -> Page {
        Page::from_bit(self.video.get().contains(VideoFlags::DMA_PAGE_OUT))
    }

    #[inline(always)]
    pub fn bank_flags(&self) -> BankFlags {
        self.banking.get()
    }

    #[inline(always)]
    pub fn video_flags(&self) -> VideoFlags {
        self.video.get()
    }
}
