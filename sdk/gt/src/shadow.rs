//! Owned mirrors of write-only registers.
//!
//! `$2005` and `$2007` can't be read back, so read-modify-write has to happen
//! on a copy. [`Shadow`] is that copy, bundled with the register it mirrors;
//! the only ways to touch the hardware register go through it.

use bitflags::Flags;

use crate::{hardware::Hardware, scr::ScrReg};

/// Last value written to a write-only flag register.
///
/// Outside of [`overlay`](Shadow::overlay) the shadow equals what the
/// hardware has latched.
#[derive(Debug)]
pub struct Shadow<F> {
    reg: ScrReg,
    value: F,
}

impl<F> Shadow<F>
where
    F: Flags<Bits = u8> + Copy,
{
    /// Set the shadow to `value` and latch it into `reg`.
    pub fn init<H: Hardware>(hw: &mut H, reg: ScrReg, value: F) -> Self {
        let shadow = Self { reg, value };
        shadow.restore(hw);
        shadow
    }

    #[inline(always)]
    pub fn get(&self) -> F {
        self.value
    }

    #[inline(always)]
    pub fn reg(&self) -> ScrReg {
        self.reg
    }

    /// Modify the shadow and write the result through.
    #[inline(always)]
    pub fn update<H: Hardware>(&mut self, hw: &mut H, f: impl FnOnce(&mut F)) {
        f(&mut self.value);
        self.restore(hw);
    }

    /// Write `shadow | extra` without remembering `extra`.
    ///
    /// The caller must [`restore`](Shadow::restore) (or `update`) before
    /// giving up control.
    #[inline(always)]
    pub fn overlay<H: Hardware>(&self, hw: &mut H, extra: F) {
        hw.write_scr(self.reg, self.value.bits() | extra.bits());
    }

    /// Latch the shadow's value, undoing any overlay.
    #[inline(always)]
    pub fn restore<H: Hardware>(&self, hw: &mut H) {
        hw.write_scr(self.reg, self.value.bits());
    }
}
