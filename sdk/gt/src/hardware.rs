//! The seam between the driver and the machine it runs on.
//!
//! On the console itself this is [`Mmio`](crate::mmio::Mmio); in tests it is a
//! simulation that models the registers, the blitter and the frame clock.

use crate::{
    bcr::BcrReg,
    scr::{GamepadPort, ScrReg},
    via::ViaReg,
};

/// Register-level access to GameTank hardware.
///
/// Every write the driver performs goes through one of these methods, in
/// program order. Implementations must not reorder or merge accesses: the
/// gamepad latch and the blitter start register both have side effects on
/// every access.
pub trait Hardware {
    /// Write a system control register.
    fn write_scr(&mut self, reg: ScrReg, data: u8);

    /// Read one byte from a gamepad port. Each read advances the pad's latch.
    fn read_gamepad_port(&mut self, port: GamepadPort) -> u8;

    /// Write a blitter control register.
    fn write_bcr(&mut self, reg: BcrReg, data: u8);

    /// Write a VIA register.
    fn write_via(&mut self, reg: ViaReg, data: u8);

    /// Halt until any interrupt line fires (`WAI`).
    fn wait_for_interrupt(&mut self);
}

impl<H: Hardware + ?Sized> Hardware for &mut H {
    #[inline(always)]
    fn write_scr(&mut self, reg: ScrReg, data: u8) {
        (**self).write_scr(reg, data)
    }

    #[inline(always)]
    fn read_gamepad_port(&mut self, port: GamepadPort) -> u8 {
        (**self).read_gamepad_port(port)
    }

    #[inline(always)]
    fn write_bcr(&mut self, reg: BcrReg, data: u8) {
        (**self).write_bcr(reg, data)
    }

    #[inline(always)]
    fn write_via(&mut self, reg: ViaReg, data: u8) {
        (**self).write_via(reg, data)
    }

    #[inline(always)]
    fn wait_for_interrupt(&mut self) {
        (**self).wait_for_interrupt()
    }
}

#[cfg(test)]
pub(crate) mod recording {
    extern crate std;

    use std::vec::Vec;

    use super::Hardware;
    use crate::{
        bcr::BcrReg,
        scr::{GamepadPort, ScrReg},
        via::ViaReg,
    };

    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub enum Access {
        Scr(ScrReg, u8),
        Pad(GamepadPort),
        Bcr(BcrReg, u8),
        Via(ViaReg, u8),
        Wait,
    }

    /// Records every access; gamepad reads are served from a queue.
    #[derive(Default)]
    pub struct Recording {
        pub log: Vec<Access>,
        pub pad_bytes: Vec<u8>,
    }

    impl Recording {
        pub fn scr_writes(&self, reg: ScrReg) -> Vec<u8> {
            self.log
                .iter()
                .filter_map(|a| match a {
                    Access::Scr(r, d) if *r == reg => Some(*d),
                    _ => None,
                })
                .collect()
        }

        pub fn bcr_writes(&self, reg: BcrReg) -> Vec<u8> {
            self.log
                .iter()
                .filter_map(|a| match a {
                    Access::Bcr(r, d) if *r == reg => Some(*d),
                    _ => None,
                })
                .collect()
        }
    }

    impl Hardware for Recording {
        fn write_scr(&mut self, reg: ScrReg, data: u8) {
            self.log.push(Access::Scr(reg, data));
        }

        fn read_gamepad_port(&mut self, port: GamepadPort) -> u8 {
            self.log.push(Access::Pad(port));
            if self.pad_bytes.is_empty() {
                0xFF
            } else {
                self.pad_bytes.remove(0)
            }
        }

        fn write_bcr(&mut self, reg: BcrReg, data: u8) {
            self.log.push(Access::Bcr(reg, data));
        }

        fn write_via(&mut self, reg: ViaReg, data: u8) {
            self.log.push(Access::Via(reg, data));
        }

        fn wait_for_interrupt(&mut self) {
            self.log.push(Access::Wait);
        }
    }
}
