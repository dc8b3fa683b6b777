//! Blitter geometry.
//!
//! WIDTH and HEIGHT are seven bits wide (bit 7 is the flip flag), so a
//! single blit covers at most 127×127 pixels. [`Extent`] makes that limit
//! part of the type; [`Rect`] additionally keeps a rectangle on screen.

use core::fmt;

use crate::bcr::FLIP_BIT;

pub const SCREEN_WIDTH: u8 = 128;
pub const SCREEN_HEIGHT: u8 = 128;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GeometryError {
    /// Width or height doesn't fit in seven bits.
    ExtentTooLarge(u8),
    /// The rectangle reaches past the right or bottom edge.
    OutOfBounds { x: u8, y: u8, width: u8, height: u8 },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::ExtentTooLarge(n) => {
                write!(f, "extent {} exceeds the blitter maximum of {}", n, Extent::MAX.get())
            }
            GeometryError::OutOfBounds { x, y, width, height } => write!(
                f,
                "{}x{} box at ({}, {}) leaves the {}x{} surface",
                width, height, x, y, SCREEN_WIDTH, SCREEN_HEIGHT
            ),
        }
    }
}

impl core::error::Error for GeometryError {}

/// A blitter width or height, 0..=127.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Extent(u8);

impl Extent {
    pub const MAX: Extent = Extent(!FLIP_BIT);

    pub const fn new(n: u8) -> Result<Self, GeometryError> {
        if n & FLIP_BIT != 0 {
            Err(GeometryError::ExtentTooLarge(n))
        } else {
            Ok(Extent(n))
        }
    }

    #[inline(always)]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Extent {
    type Error = GeometryError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Extent::new(n)
    }
}

/// A rectangle that lies entirely on the 128×128 surface.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Rect {
    x: u8,
    y: u8,
    width: Extent,
    height: Extent,
}

impl Rect {
    pub fn new(x: u8, y: u8, width: u8, height: u8) -> Result<Self, GeometryError> {
        let w = Extent::new(width)?;
        let h = Extent::new(height)?;

        let fits_x = x as u16 + width as u16 <= SCREEN_WIDTH as u16;
        let fits_y = y as u16 + height as u16 <= SCREEN_HEIGHT as u16;
        // an empty box still needs an on-screen origin
        let origin_on_screen = x < SCREEN_WIDTH && y < SCREEN_HEIGHT;

        if fits_x && fits_y && origin_on_screen {
            Ok(Rect { x, y, width: w, height: h })
        } else {
            Err(GeometryError::OutOfBounds { x, y, width, height })
        }
    }

    /// Clip a signed rectangle to the surface and to the blitter's extent limit.
    ///
    /// Returns `None` if nothing of it is visible.
    pub fn clamped(x: i16, y: i16, width: u8, height: u8) -> Option<Self> {
        let (x0, x1) = clip_span(x, width, SCREEN_WIDTH)?;
        let (y0, y1) = clip_span(y, height, SCREEN_HEIGHT)?;

        let w = (x1 - x0).min(Extent::MAX.get() as i16) as u8;
        let h = (y1 - y0).min(Extent::MAX.get() as i16) as u8;

        Rect::new(x0 as u8, y0 as u8, w, h).ok()
    }

    #[inline(always)]
    pub fn x(&self) -> u8 {
        self.x
    }

    #[inline(always)]
    pub fn y(&self) -> u8 {
        self.y
    }

    #[inline(always)]
    pub fn width(&self) -> Extent {
        self.width
    }

    #[inline(always)]
    pub fn height(&self) -> Extent {
        self.height
    }

    /// The four 64×64 quadrants that tile the full surface.
    pub fn quadrants() -> [Rect; 4] {
        const HALF: u8 = SCREEN_WIDTH / 2;
        const SIDE: Extent = Extent(HALF);
        [
            Rect { x: 0, y: 0, width: SIDE, height: SIDE },
            Rect { x: HALF, y: 0, width: SIDE, height: SIDE },
            Rect { x: 0, y: HALF, width: SIDE, height: SIDE },
            Rect { x: HALF, y: HALF, width: SIDE, height: SIDE },
        ]
    }

    pub fn contains(&self, px: u8, py: u8) -> bool {
        px >= self.x
            && py >= self.y
            && (px as u16) < self.x as u16 + self.width.get() as u16
            && (py as u16) < self.y as u16 + self.height.get() as u16
    }
}

fn clip_span(start: i16, len: u8, limit: u8) -> Option<(i16, i16)> {
    let lo = start.max(0);
    let hi = start.saturating_add(len as i16).min(limit as i16);
    (lo < hi).then_some((lo, hi))
}
