//! Memory-mapped register views for the console itself.

use volatile_register::{RO, RW, WO};

use crate::{
    bcr::BcrReg,
    boot,
    hardware::Hardware,
    scr::{GamepadPort, ScrReg},
    via::ViaReg,
};

/// System Control Register hardware layout at `$2000-$2009`.
#[repr(C, packed)]
pub struct Scr {
    pub audio_reset: WO<u8>,
    pub audio_nmi: WO<u8>,
    _pad0: [u8; 3], // Skips to $2005
    pub banking: WO<u8>,
    pub audio_rate: WO<u8>,
    pub video: WO<u8>,
    pub gamepad1: RO<u8>,
    pub gamepad2: RO<u8>,
}

/// Blitter Control Register hardware layout at `$4000-$4007`.
#[repr(C, packed)]
pub struct Bcr {
    pub vx: WO<u8>,
    pub vy: WO<u8>,
    pub gx: WO<u8>,
    pub gy: WO<u8>,
    pub width: WO<u8>,
    pub height: WO<u8>,
    pub start: WO<u8>,
    pub color: WO<u8>,
}

/// 6522 VIA hardware layout at `$2800-$280F`.
#[repr(C, packed)]
pub struct Via {
    pub iorb: RW<u8>,
    pub iora: RW<u8>,
    pub ddrb: WO<u8>,
    pub ddra: WO<u8>,
    pub t1cl: WO<u8>,
    pub t1ch: WO<u8>,
    pub t1ll: WO<u8>,
    pub t1lh: WO<u8>,
    pub t2cl: WO<u8>,
    pub t2ch: WO<u8>,
    pub sr: WO<u8>,
    pub acr: WO<u8>,
    pub pcr: WO<u8>,
    pub ifr: WO<u8>,
    pub ier: WO<u8>,
    pub iora_nh: WO<u8>,
}

/// The real register file.
pub struct Mmio {
    scr: &'static mut Scr,
    bcr: &'static mut Bcr,
    via: &'static mut Via,
}

impl Mmio {
    /// # Safety
    ///
    /// Only one `Mmio` may exist; it aliases the hardware registers.
    pub unsafe fn new() -> Self {
        unsafe {
            Self {
                scr: &mut *(0x2000 as *mut Scr),
                bcr: &mut *(0x4000 as *mut Bcr),
                via: &mut *(0x2800 as *mut Via),
            }
        }
    }
}

impl Hardware for Mmio {
    #[inline(always)]
    fn write_scr(&mut self, reg: ScrReg, data: u8) {
        let scr = &mut *self.scr;
        unsafe {
            match reg {
                ScrReg::AudioReset => scr.audio_reset.write(data),
                ScrReg::AudioNmi => scr.audio_nmi.write(data),
                ScrReg::Banking => scr.banking.write(data),
                ScrReg::AudioRate => scr.audio_rate.write(data),
                ScrReg::Video => scr.video.write(data),
            }
        }
    }

    #[inline(always)]
    fn read_gamepad_port(&mut self, port: GamepadPort) -> u8 {
        match port {
            GamepadPort::One => self.scr.gamepad1.read(),
            GamepadPort::Two => self.scr.gamepad2.read(),
        }
    }

    #[inline(always)]
    fn write_bcr(&mut self, reg: BcrReg, data: u8) {
        let bcr = &mut *self.bcr;
        unsafe {
            match reg {
                BcrReg::Vx => bcr.vx.write(data),
                BcrReg::Vy => bcr.vy.write(data),
                BcrReg::Gx => bcr.gx.write(data),
                BcrReg::Gy => bcr.gy.write(data),
                BcrReg::Width => bcr.width.write(data),
                BcrReg::Height => bcr.height.write(data),
                BcrReg::Start => bcr.start.write(data),
                BcrReg::Color => bcr.color.write(data),
            }
        }
    }

    #[inline(always)]
    fn write_via(&mut self, reg: ViaReg, data: u8) {
        let via = &mut *self.via;
        unsafe {
            match reg {
                ViaReg::Iorb => via.iorb.write(data),
                ViaReg::Iora => via.iora.write(data),
                ViaReg::Ddrb => via.ddrb.write(data),
                ViaReg::Ddra => via.ddra.write(data),
                ViaReg::T1cl => via.t1cl.write(data),
                ViaReg::T1ch => via.t1ch.write(data),
                ViaReg::T1ll => via.t1ll.write(data),
                ViaReg::T1lh => via.t1lh.write(data),
                ViaReg::T2cl => via.t2cl.write(data),
                ViaReg::T2ch => via.t2ch.write(data),
                ViaReg::Sr => via.sr.write(data),
                ViaReg::Acr => via.acr.write(data),
                ViaReg::Pcr => via.pcr.write(data),
                ViaReg::Ifr => via.ifr.write(data),
                ViaReg::Ier => via.ier.write(data),
                ViaReg::IoraNh => via.iora_nh.write(data),
            }
        }
    }

    #[inline(always)]
    fn wait_for_interrupt(&mut self) {
        unsafe { boot::wait() };
    }
}
