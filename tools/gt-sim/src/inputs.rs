use bit_field::BitField;
use gt::Buttons;

/// A Genesis-style pad plugged into one of the two ports.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct GamePad {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub a: bool,
    pub b: bool,
    pub c: bool,
    pub start: bool,

    /// State of the pad's select line; flips on every read of its port.
    pub port_select: bool,
}

impl GamePad {
    /// Hold exactly the buttons in `buttons`. The select line is left alone.
    pub fn set_buttons(&mut self, buttons: Buttons) {
        self.up = buttons.pressed(Buttons::UP);
        self.down = buttons.pressed(Buttons::DOWN);
        self.left = buttons.contains(Buttons::LEFT);
        self.right = buttons.contains(Buttons::RIGHT);
        self.a = buttons.contains(Buttons::A);
        self.b = buttons.contains(Buttons::B);
        self.c = buttons.contains(Buttons::C);
        self.start = buttons.contains(Buttons::START);
    }

    /// The byte the port shows for the current select line. Active-low.
    pub fn byte(&self) -> u8 {
        let mut byte: u8 = 0xFF;
        if !self.port_select {
            byte.set_bit(5, !self.start);
            byte.set_bit(4, !self.a);
        } else {
            byte.set_bit(5, !self.c);
            byte.set_bit(4, !self.b);
            byte.set_bit(1, !self.left);
            byte.set_bit(0, !self.right);
        }
        // up/down show on both lines
        byte.set_bit(3, !self.up);
        byte.set_bit(2, !self.down);
        byte
    }
}
