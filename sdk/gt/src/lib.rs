//! # GT
//!
//! Blitter and display synchronization for the [GameTank](https://gametank.zone/).
//!
//! Programs get a [`Console`](console::Console) and draw with four calls:
//!
//! ```ignore
//! #[unsafe(no_mangle)]
//! fn main(console: &mut Console<Mmio>) {
//!     let (mut x, mut y) = (60u8, 60u8);
//!     loop {
//!         let pad = console.read_gamepad();
//!         if pad.pressed(Buttons::LEFT) && x > 0 { x -= 1; }
//!         if pad.pressed(Buttons::RIGHT) && x < 119 { x += 1; }
//!
//!         console.clear(Color::BLACK);
//!         console.draw_box(x, y, 8, 8, Color::WHITE).ok();
//!         console.sync();
//!     }
//! }
//! ```
//!
//! Everything goes through the [`Hardware`](hardware::Hardware) trait: on the
//! console that's [`Mmio`](mmio::Mmio), in tests it's a simulation.
//!
//! ## Hardware Overview
//!
//! | Feature | Spec |
//! |---------|------|
//! | CPU | W65C02S @ ~3.58 MHz |
//! | Display | 128×128 pixels, double buffered |
//! | Blitter | 1 pixel/cycle, ≤127×127 per job, IRQ on completion |
//! | Vblank | NMI once per frame (~59,659 cycles) |

#![no_std]

pub mod bcr;
pub mod blitter;
pub mod color;
pub mod config;
pub mod console;
pub mod frame_clock;
pub mod framebuffers;
pub mod geometry;
pub mod hardware;
pub mod input;
pub mod scr;
pub mod shadow;
pub mod via;

#[cfg(target_arch = "mos")]
pub mod boot;
#[cfg(target_arch = "mos")]
pub mod mmio;

pub use blitter::{BlitJob, Blitter};
pub use color::Color;
pub use config::Config;
pub use console::Console;
pub use framebuffers::Page;
pub use geometry::{Extent, GeometryError, Rect, SCREEN_HEIGHT, SCREEN_WIDTH};
pub use hardware::Hardware;
pub use input::{Buttons, Gamepad};
pub use scr::{BankFlags, GamepadPort, ScrReg, VideoFlags};
