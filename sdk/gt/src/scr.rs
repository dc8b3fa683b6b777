//! # System Control Register Flags
//!
//! This module defines the bitflags for the GameTank's system control registers
//! and the register identifiers of the system control block at `$2000`.
//!
//! ## VideoFlags (`$2007`)
//!
//! Controls the blitter and video output:
//!
//! | Flag              | Effect                                           |
//! |-------------------|--------------------------------------------------|
//! | `DMA_ENABLE`      | Blitter active (1) vs CPU video access (0)       |
//! | `DMA_PAGE_OUT`    | Which framebuffer goes to the TV                 |
//! | `DMA_NMI`         | Vertical blank raises an NMI                     |
//! | `DMA_COLORFILL`   | Fill with color (1) vs copy sprites (0)          |
//! | `DMA_IRQ`         | Blit completion raises an IRQ                    |
//! | `DMA_OPAQUE`      | Draw all pixels (1) vs skip color 0 (0)          |
//!
//! ## BankFlags (`$2005`)
//!
//! Controls sprite RAM page, framebuffer selection, and clipping.
//!
//! Both registers are write-only. The driver never writes them directly; see
//! [`Shadow`](crate::shadow::Shadow).

bitflags::bitflags! {
    /// Video/Blitter control flags at `$2007`.
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct VideoFlags: u8 {
        /// Enable blitter DMA. When set, `$4000-$7FFF` maps to blitter registers.
        const DMA_ENABLE          = 0b0000_0001;
        /// Select which framebuffer is displayed on screen.
        const DMA_PAGE_OUT        = 0b0000_0010;
        /// Enable NMI interrupt on vertical blank.
        const DMA_NMI             = 0b0000_0100;
        /// Blitter fill mode: set for color fill, clear for sprite copy.
        const DMA_COLORFILL       = 0b0000_1000;
        /// Graphics carry - enables smooth scrolling across sprite boundaries.
        const DMA_GCARRY          = 0b0001_0000;
        /// CPU video access mode: set for framebuffer, clear for sprite RAM.
        const DMA_CPU_TO_VRAM     = 0b0010_0000;
        /// Enable IRQ interrupt when blitter completes.
        const DMA_IRQ             = 0b0100_0000;
        /// Sprite transparency: set for opaque, clear to treat color 0 as transparent.
        const DMA_OPAQUE          = 0b1000_0000;
    }

    /// Banking control flags at `$2005`.
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct BankFlags: u8 {
        // Bits 0-2: Sprite RAM page (0–7)
        const SPRITE_PAGE         = 0b0000_0111;

        // Bit 3: Framebuffer the blitter draws into
        const FRAMEBUFFER_SELECT  = 0b0000_1000;

        // Bit 4: Clip L/R
        const CLIP_X              = 0b0001_0000;

        // Bit 5: Clip T/B
        const CLIP_Y              = 0b0010_0000;

        // Bits 6-7: RAM bank select
        const RAM_BANK            = 0b1100_0000;
    }
}

/// Writable registers of the system control block.
#[repr(u16)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ScrReg {
    /// Write 1 to reset the Audio Coprocessor.
    AudioReset = 0x2000,
    /// Write 1 to trigger an NMI on the Audio Coprocessor.
    AudioNmi = 0x2001,
    /// Banking control ([`BankFlags`]), write-only.
    Banking = 0x2005,
    /// Audio enable and sample rate.
    AudioRate = 0x2006,
    /// Video and blitter control ([`VideoFlags`]), write-only.
    Video = 0x2007,
}

impl ScrReg {
    #[inline(always)]
    pub const fn address(self) -> u16 {
        self as u16
    }
}

/// The two read-only gamepad ports at `$2008`/`$2009`.
#[repr(u16)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GamepadPort {
    One = 0x2008,
    Two = 0x2009,
}

impl GamepadPort {
    #[inline(always)]
    pub const fn address(self) -> u16 {
        self as u16
    }
}
