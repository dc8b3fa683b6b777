//! # Blitter Control Registers
//!
//! | Address | Name    | Description                                    |
//! |---------|---------|------------------------------------------------|
//! | `$4000` | VX      | Framebuffer X coordinate (destination)         |
//! | `$4001` | VY      | Framebuffer Y coordinate (destination)         |
//! | `$4002` | GX      | Sprite RAM X coordinate (source)               |
//! | `$4003` | GY      | Sprite RAM Y coordinate (source)               |
//! | `$4004` | WIDTH   | Width of rectangle (bit 7 = horizontal flip)   |
//! | `$4005` | HEIGHT  | Height of rectangle (bit 7 = vertical flip)    |
//! | `$4006` | START   | Write 1 to start blit, 0 to acknowledge IRQ    |
//! | `$4007` | COLOR   | Fill color (inverted, for color fill mode)     |
//!
//! The registers are only mapped while `DMA_ENABLE` is set.

/// Bit 7 of WIDTH/HEIGHT; the remaining seven bits are the extent.
pub const FLIP_BIT: u8 = 0b1000_0000;

/// Blitter control register identifiers.
#[repr(u16)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BcrReg {
    Vx = 0x4000,
    Vy = 0x4001,
    Gx = 0x4002,
    Gy = 0x4003,
    Width = 0x4004,
    Height = 0x4005,
    Start = 0x4006,
    Color = 0x4007,
}

impl BcrReg {
    #[inline(always)]
    pub const fn address(self) -> u16 {
        self as u16
    }
}
