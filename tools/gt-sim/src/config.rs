/// Timing and power-on state of the simulated console.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SimConfig {
    /// CPU cycles between vertical blanks (3.579545 MHz / 60 Hz).
    pub cycles_per_frame: u32,
    /// Byte both framebuffers hold at power-on. Real VRAM is garbage.
    pub power_on_fill: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            cycles_per_frame: 59_659,
            power_on_fill: 0xA5,
        }
    }
}
