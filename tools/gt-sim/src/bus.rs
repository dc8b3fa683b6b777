use alloc::boxed::Box;
use alloc::vec::Vec;
use core::mem;

use gt::bcr::BcrReg;
use gt::via::ViaReg;
use gt::{BankFlags, Buttons, GamepadPort, Hardware, Page, ScrReg, VideoFlags};
use log::{debug, trace};

use crate::blitter::{BlitRecord, Blitter};
use crate::clock::FrameClock;
use crate::config::SimConfig;
use crate::reg_blitter::BlitterRegisters;
use crate::reg_system_control::SystemControl;
use crate::via::Via;
use crate::{FrameBuffer, HEIGHT, WIDTH};

/// Which line ended a `WAI`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Interrupt {
    /// Blit completion.
    Irq,
    /// Vertical blank.
    Nmi,
}

/// One access seen on the bus, in program order.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BusEvent {
    Scr(ScrReg, u8),
    Pad(GamepadPort, u8),
    Bcr(BcrReg, u8),
    Via(ViaReg, u8),
    Wake(Interrupt),
}

/// Simulated console behind the [`Hardware`] seam.
pub struct SimBus {
    pub system_control: SystemControl,
    pub blitter_regs: BlitterRegisters,
    blitter: Blitter,
    via: Via,
    framebuffers: Box<[FrameBuffer; 2]>,
    clock: FrameClock,

    events: Vec<BusEvent>,
    blits: Vec<BlitRecord>,
    last_wake: Option<Interrupt>,
}

impl Default for SimBus {
    fn default() -> Self {
        SimBus::new(SimConfig::default())
    }
}

impl SimBus {
    pub fn new(config: SimConfig) -> Self {
        debug!("powering on: {:?}", config);
        Self {
            system_control: SystemControl::default(),
            blitter_regs: BlitterRegisters::default(),
            blitter: Blitter::default(),
            via: Via::default(),
            framebuffers: Box::new([[config.power_on_fill; WIDTH * HEIGHT]; 2]),
            clock: FrameClock::new(config.cycles_per_frame),
            events: Vec::new(),
            blits: Vec::new(),
            last_wake: None,
        }
    }

    /// Let the CPU run for `cycles` without halting, e.g. game logic between frames.
    ///
    /// An NMI that fires meanwhile is taken and returned from; it does not
    /// satisfy a later `WAI`.
    pub fn burn(&mut self, cycles: u64) {
        self.advance(cycles);
    }

    fn advance(&mut self, cycles: u64) {
        self.clock.advance(cycles);
        self.blitter.advance(cycles, &self.system_control);
    }

    fn wake(&mut self, interrupt: Interrupt) {
        trace!("woke on {:?} at cycle {}", interrupt, self.clock.cycle());
        self.last_wake = Some(interrupt);
        self.events.push(BusEvent::Wake(interrupt));
    }

    pub fn page(&self, page: Page) -> &FrameBuffer {
        &self.framebuffers[page.index()]
    }

    pub fn pixel(&self, page: Page, x: u8, y: u8) -> u8 {
        self.framebuffers[page.index()][(x as usize % WIDTH) + (y as usize % HEIGHT) * WIDTH]
    }

    /// The page the blitter is writing into.
    pub fn draw_target(&self) -> Page {
        self.system_control.draw_target()
    }

    /// The page on the TV.
    pub fn displayed(&self) -> Page {
        self.system_control.framebuffer_out()
    }

    /// The framebuffer currently on the TV.
    pub fn screen(&self) -> &FrameBuffer {
        self.page(self.displayed())
    }

    pub fn bank_flags(&self) -> BankFlags {
        self.system_control.banking_register
    }

    pub fn video_flags(&self) -> VideoFlags {
        self.system_control.dma_flags
    }

    pub fn rom_bank(&self) -> u8 {
        self.via.rom_bank()
    }

    pub fn via(&self) -> &Via {
        &self.via
    }

    /// Vblanks since power-on.
    pub fn frame(&self) -> u64 {
        self.clock.frame()
    }

    pub fn cycle(&self) -> u64 {
        self.clock.cycle()
    }

    pub fn cycles_since_vblank(&self) -> u64 {
        self.clock.cycles_since_vblank()
    }

    pub fn last_wake(&self) -> Option<Interrupt> {
        self.last_wake
    }

    pub fn irq_pending(&self) -> bool {
        self.blitter.irq_trigger
    }

    pub fn blitter_busy(&self) -> bool {
        self.blitter.busy()
    }

    pub fn dropped_starts(&self) -> usize {
        self.blitter.dropped()
    }

    pub fn events(&self) -> &[BusEvent] {
        &self.events
    }

    pub fn take_events(&mut self) -> Vec<BusEvent> {
        mem::take(&mut self.events)
    }

    /// Every accepted blit since power-on.
    pub fn blits(&self) -> &[BlitRecord] {
        &self.blits
    }

    pub fn take_blits(&mut self) -> Vec<BlitRecord> {
        mem::take(&mut self.blits)
    }

    /// Hold `buttons` on the pad in `port`.
    pub fn set_buttons(&mut self, port: GamepadPort, buttons: Buttons) {
        let pad = match port {
            GamepadPort::One => &mut self.system_control.gamepads[0],
            GamepadPort::Two => &mut self.system_control.gamepads[1],
        };
        pad.set_buttons(buttons);
    }
}

impl Hardware for SimBus {
    fn write_scr(&mut self, reg: ScrReg, data: u8) {
        self.events.push(BusEvent::Scr(reg, data));
        self.system_control.write_byte(reg, data);
    }

    fn read_gamepad_port(&mut self, port: GamepadPort) -> u8 {
        let byte = self.system_control.read_gamepad_byte(port);
        self.events.push(BusEvent::Pad(port, byte));
        byte
    }

    fn write_bcr(&mut self, reg: BcrReg, data: u8) {
        self.events.push(BusEvent::Bcr(reg, data));
        self.blitter_regs.write_byte(reg, data);

        if reg == BcrReg::Start {
            let now = self.clock.cycle();
            if let Some(record) = self.blitter.start(
                &mut self.blitter_regs,
                &self.system_control,
                &mut self.framebuffers,
                now,
            ) {
                self.blits.push(record);
            }
        }
    }

    fn write_via(&mut self, reg: ViaReg, data: u8) {
        self.events.push(BusEvent::Via(reg, data));
        self.via.write_byte(reg, data);
    }

    /// Halt until the IRQ line is high or the next armed vblank.
    ///
    /// # Panics
    ///
    /// If no interrupt can ever arrive. The console would hang here.
    fn wait_for_interrupt(&mut self) {
        loop {
            if self.blitter.irq_trigger {
                self.wake(Interrupt::Irq);
                return;
            }

            let nmi = self.system_control.vblank_nmi_enabled();
            let to_vblank = self.clock.cycles_to_vblank();

            match self.blitter.cycles_remaining() {
                Some(blit) if !nmi || blit < to_vblank => self.advance(blit),
                _ if nmi => {
                    self.advance(to_vblank);
                    self.wake(Interrupt::Nmi);
                    return;
                }
                _ => panic!(
                    "WAI with no interrupt armed: video flags {:08b}, blitter idle",
                    self.system_control.dma_flags.bits()
                ),
            }
        }
    }
}
