use crate::color::Color;

/// Boot-time settings for [`Console::init`](crate::console::Console::init).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Color both framebuffers are cleared to before the first frame.
    pub clear_color: Color,
    /// Flash bank mapped into the banked ROM window. 2MB carts need 254.
    pub boot_rom_bank: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            clear_color: Color::BLACK,
            boot_rom_bank: 254,
        }
    }
}
