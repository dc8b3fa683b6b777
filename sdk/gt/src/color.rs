//! Fill colors.
//!
//! The blitter inverts the COLOR register before writing it to VRAM, and
//! VRAM values index the hardware palette. A [`Color`] therefore holds the
//! already-inverted register value; build one from a palette index with
//! [`Color::from_index`].

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Color(u8);

impl Color {
    pub const BLACK: Color = Color::from_index(0x20);
    pub const WHITE: Color = Color::from_index(0xDF);
    pub const RED: Color = Color::from_index(0x5E);
    pub const GREEN: Color = Color::from_index(0x38);
    pub const BLUE: Color = Color::from_index(0xDC);
    pub const YELLOW: Color = Color::from_index(0x7E);
    pub const CYAN: Color = Color::from_index(0xFC);
    pub const MAGENTA: Color = Color::from_index(0x5C);
    pub const ORANGE: Color = Color::from_index(0x76);
    pub const DARK_GRAY: Color = Color::from_index(0x08);
    pub const LIGHT_GRAY: Color = Color::from_index(0xB6);

    /// Color that makes the blitter write palette index `index`.
    #[inline(always)]
    pub const fn from_index(index: u8) -> Self {
        Color(!index)
    }

    /// Wrap a value that is already in register form.
    #[inline(always)]
    pub const fn from_register(value: u8) -> Self {
        Color(value)
    }

    /// The palette index that ends up in VRAM.
    #[inline(always)]
    pub const fn index(self) -> u8 {
        !self.0
    }

    /// The value written to the COLOR register.
    #[inline(always)]
    pub const fn register(self) -> u8 {
        self.0
    }
}
