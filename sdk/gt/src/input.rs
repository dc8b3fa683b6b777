//! Gamepad input.
//!
//! Reading a port returns one byte and advances the pad's select line, so
//! the order of reads matters: a read of port 2 resets port 1's latch, then
//! two reads of port 1 return its select-low and select-high bytes. Buttons
//! are active-low.

use core::sync::atomic::{Ordering, compiler_fence};

use crate::{hardware::Hardware, scr::GamepadPort};

bitflags::bitflags! {
    /// Button masks over the combined `high << 8 | low` reading.
    ///
    /// Up and Down report in both bytes, so their masks have two bits; test
    /// them with [`Buttons::pressed`].
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct Buttons: u16 {
        const UP    = 0x0808;
        const DOWN  = 0x0404;
        const LEFT  = 0x0200;
        const RIGHT = 0x0100;
        const A     = 0x0010;
        const B     = 0x1000;
        const C     = 0x2000;
        const START = 0x0020;
    }
}

impl Default for Buttons {
    fn default() -> Self {
        Buttons::empty()
    }
}

impl Buttons {
    /// Whether any bit of `mask` is set.
    #[inline(always)]
    pub fn pressed(self, mask: Buttons) -> bool {
        self.intersects(mask)
    }
}

/// Combine the two port bytes and flip them to active-high.
#[inline(always)]
pub const fn combine(low: u8, high: u8) -> Buttons {
    Buttons::from_bits_retain(!((high as u16) << 8 | low as u16))
}

/// Read player 1's pad.
pub fn read_gamepad<H: Hardware>(hw: &mut H) -> Buttons {
    // reset select by reading port 2
    let _ = hw.read_gamepad_port(GamepadPort::Two);

    let low = hw.read_gamepad_port(GamepadPort::One);
    compiler_fence(Ordering::SeqCst);
    let high = hw.read_gamepad_port(GamepadPort::One);

    combine(low, high)
}

/// Player 1's pad, remembering the previous reading for edge detection.
#[derive(Debug, Default, Copy, Clone)]
pub struct Gamepad {
    pub buttons: Buttons,
    pub buttons_last: Buttons,
}

impl Gamepad {
    pub const fn new() -> Self {
        Self {
            buttons: Buttons::empty(),
            buttons_last: Buttons::empty(),
        }
    }

    #[inline(always)]
    pub fn read<H: Hardware>(&mut self, hw: &mut H) {
        self.update(read_gamepad(hw));
    }

    /// Push a new reading, keeping the old one for edge detection.
    #[inline]
    pub fn update(&mut self, buttons: Buttons) {
        self.buttons_last = self.buttons;
        self.buttons = buttons;
    }

    #[inline]
    pub fn is_pressed(&self, button: Buttons) -> bool {
        self.buttons.pressed(button)
    }

    #[inline]
    pub fn was_pressed(&self, button: Buttons) -> bool {
        self.buttons_last.pressed(button)
    }

    /// Returns true only on the frame the button was first pressed (edge-trigger).
    #[inline]
    pub fn just_pressed(&self, button: Buttons) -> bool {
        self.is_pressed(button) && !self.was_pressed(button)
    }

    /// Returns true only on the frame the button was released (edge-trigger).
    #[inline]
    pub fn just_released(&self, button: Buttons) -> bool {
        !self.is_pressed(button) && self.was_pressed(button)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hardware::recording::{Access, Recording};

    #[test]
    fn all_low_means_everything_pressed() {
        assert_eq!(combine(0x00, 0x00).bits(), 0xFFFF);
        assert_eq!(combine(0xFF, 0xFF).bits(), 0x0000);
    }

    #[test]
    fn bytes_land_in_the_right_half() {
        // A is bit 4 of the low byte, B is bit 4 of the high byte
        let only_a = combine(!0b0001_0000, 0xFF);
        assert_eq!(only_a, Buttons::A);
        let only_b = combine(0xFF, !0b0001_0000);
        assert_eq!(only_b, Buttons::B);
    }

    #[test]
    fn read_order_is_port_two_then_port_one_twice() {
        let mut hw = Recording {
            pad_bytes: [0xAA, 0xDF, 0xFE].into(),
            ..Default::default()
        };
        let buttons = read_gamepad(&mut hw);

        assert_eq!(
            hw.log,
            [
                Access::Pad(GamepadPort::Two),
                Access::Pad(GamepadPort::One),
                Access::Pad(GamepadPort::One),
            ]
        );
        // 0xAA is discarded; low 0xDF -> START, high 0xFE -> RIGHT
        assert_eq!(buttons, Buttons::START | Buttons::RIGHT);
    }

    #[test]
    fn up_matches_either_byte() {
        assert!(combine(0xFF, !0b0000_1000).pressed(Buttons::UP));
        assert!(combine(!0b0000_1000, 0xFF).pressed(Buttons::UP));
        assert!(!combine(0xFF, 0xFF).pressed(Buttons::UP));
    }

    #[test]
    fn edges() {
        let mut pad = Gamepad::new();
        pad.update(Buttons::A);
        assert!(pad.just_pressed(Buttons::A));
        pad.update(Buttons::A);
        assert!(pad.is_pressed(Buttons::A));
        assert!(!pad.just_pressed(Buttons::A));
        pad.update(Buttons::empty());
        assert!(pad.just_released(Buttons::A));
    }
}
