use log::debug;

/// Cycle counter with a vblank every `cycles_per_frame` cycles.
#[derive(Debug)]
pub struct FrameClock {
    cycles_per_frame: u64,
    cycles_to_vblank: u64,
    cycle: u64,
    frame: u64,
}

impl FrameClock {
    pub fn new(cycles_per_frame: u32) -> Self {
        let cycles_per_frame = (cycles_per_frame as u64).max(1);
        Self {
            cycles_per_frame,
            cycles_to_vblank: cycles_per_frame,
            cycle: 0,
            frame: 0,
        }
    }

    /// Move time forward. Returns the number of vblanks that started.
    pub fn advance(&mut self, mut cycles: u64) -> u64 {
        let mut vblanks = 0;
        self.cycle += cycles;

        while cycles >= self.cycles_to_vblank {
            cycles -= self.cycles_to_vblank;
            self.cycles_to_vblank = self.cycles_per_frame;
            self.frame += 1;
            vblanks += 1;
            debug!("vblank {}", self.frame);
        }
        self.cycles_to_vblank -= cycles;

        vblanks
    }

    #[inline(always)]
    pub fn cycles_to_vblank(&self) -> u64 {
        self.cycles_to_vblank
    }

    #[inline(always)]
    pub fn cycles_since_vblank(&self) -> u64 {
        self.cycles_per_frame - self.cycles_to_vblank
    }

    #[inline(always)]
    pub fn cycle(&self) -> u64 {
        self.cycle
    }

    /// Vblanks so far.
    #[inline(always)]
    pub fn frame(&self) -> u64 {
        self.frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_counts_vblanks() {
        let mut clock = FrameClock::new(100);
        assert_eq!(clock.advance(99), 0);
        assert_eq!(clock.cycles_to_vblank(), 1);
        assert_eq!(clock.advance(1), 1);
        assert_eq!(clock.cycles_since_vblank(), 0);
        assert_eq!(clock.advance(250), 2);
        assert_eq!(clock.cycles_since_vblank(), 50);
        assert_eq!(clock.frame(), 3);
        assert_eq!(clock.cycle(), 350);
    }
}
