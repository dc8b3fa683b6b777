//! A deterministic stand-in for the GameTank's video hardware.
//!
//! [`SimBus`] implements [`gt::Hardware`]: it latches register writes, runs
//! color fills into two framebuffers, raises the blit IRQ and the vblank NMI
//! on a simulated cycle clock, and follows the gamepad and flash-bank
//! protocols. Time only passes while the CPU is halted in `WAI` (or when a
//! test calls [`SimBus::burn`]).

#![no_std]
extern crate alloc;

pub mod blitter;
pub mod bus;
pub mod clock;
pub mod config;
pub mod inputs;
pub mod reg_blitter;
pub mod reg_system_control;
pub mod via;

pub use blitter::BlitRecord;
pub use bus::{BusEvent, Interrupt, SimBus};
pub use config::SimConfig;

pub const WIDTH: usize = 128;
pub const HEIGHT: usize = 128;

pub type FrameBuffer = [u8; WIDTH * HEIGHT];
