use gt::bcr::BcrReg;

/// START is edge-like: the blitter consumes each write exactly once.
#[derive(Debug, Default, Copy, Clone)]
pub struct BlitStart {
    pub write: u8,
    pub addressed: bool,
}

impl BlitStart {
    /// Returns `(start bit, was addressed)` and forgets the write.
    #[inline(always)]
    pub fn read_once(&mut self) -> (bool, bool) {
        let (data, addressed) = (self.write & 1 == 1, self.addressed);
        self.write = 0;
        self.addressed = false;
        (data, addressed)
    }
}

#[derive(Debug, Default)]
pub struct BlitterRegisters {
    pub vx: u8,
    pub vy: u8,
    pub gx: u8,
    pub gy: u8,
    pub width: u8,
    pub height: u8,
    pub start: BlitStart,
    pub color: u8,
}

impl BlitterRegisters {
    #[inline(always)]
    pub fn write_byte(&mut self, reg: BcrReg, data: u8) {
        match reg {
            BcrReg::Vx => self.vx = data,
            BcrReg::Vy => self.vy = data,
            BcrReg::Gx => self.gx = data,
            BcrReg::Gy => self.gy = data,
            BcrReg::Width => self.width = data,
            BcrReg::Height => self.height = data,
            BcrReg::Start => {
                self.start.write = data;
                self.start.addressed = true;
            }
            BcrReg::Color => self.color = data,
        }
    }
}
