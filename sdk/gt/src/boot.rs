use core::panic::PanicInfo;
use core::ptr;

use crate::{config::Config, console::Console, mmio::Mmio, scr::ScrReg};

unsafe extern "Rust" {
    unsafe fn main(console: &mut Console<Mmio>);
}

#[panic_handler]
fn panic(_panic: &PanicInfo<'_>) -> ! {
    loop {}
}

unsafe extern "C" {
    pub unsafe fn return_from_interrupt();

    /// `WAI`: halt until an interrupt line fires.
    pub unsafe fn wait();

    pub unsafe static mut __rc0: u8;
    pub unsafe static mut __rc1: u8;

    unsafe static __data_load: u8;
    unsafe static mut __data_start: u8;
    unsafe static mut __data_end: u8;

    unsafe static __zp_load: u8;
    unsafe static mut __zp_start: u8;
    unsafe static mut __zp_end: u8;

    unsafe static mut __bss_start: u8;
    unsafe static mut __bss_end: u8;
}

#[inline(always)]
unsafe fn init_data_and_bss() {
    unsafe {
        // Copy .data from flash to RAM
        let mut src = &__data_load as *const u8;
        let mut dst = &raw mut __data_start as *mut u8;
        let end = &raw mut __data_end as *mut u8;
        while dst < end {
            dst.write_volatile(src.read_volatile());
            src = src.add(1);
            dst = dst.add(1);
        }

        // Zero .bss
        let mut bss = &raw mut __bss_start as *mut u8;
        let bss_end = &raw mut __bss_end as *mut u8;
        while bss < bss_end {
            bss.write_volatile(0);
            bss = bss.add(1);
        }

        // Copy .zp load to zp
        let mut src = &__zp_load as *const u8;
        let mut dst = &raw mut __zp_start as *mut u8;
        let end = &raw mut __zp_end as *mut u8;
        while dst < end {
            dst.write_volatile(src.read_volatile());
            src = src.add(1);
            dst = dst.add(1);
        }
    }
}

/// Vblank. `WAI` resumes on its own; nothing to do but return.
#[unsafe(no_mangle)]
extern "C" fn vblank_nmi() {
    unsafe { return_from_interrupt() };
}

/// Blit completion. The driver acknowledges it by writing START after `WAI`.
#[unsafe(no_mangle)]
extern "C" fn blit_irq() {
    unsafe { return_from_interrupt() };
}

#[unsafe(link_section = ".vector_table")]
#[unsafe(no_mangle)]
pub static _VECTOR_TABLE: [unsafe extern "C" fn(); 3] = [
    vblank_nmi, // Non-Maskable Interrupt vector
    __boot,     // Reset vector
    blit_irq,   // IRQ/BRK vector
];

#[inline(never)]
fn call_main() {
    let console = &mut Console::init(unsafe { Mmio::new() }, &Config::default());
    unsafe { main(console) };
}

#[unsafe(no_mangle)]
unsafe extern "C" fn __boot() {
    unsafe {
        reset_banking_register();
        init_data_and_bss();
        init_stack();

        // Console::init touches the stack, so it can't run until init_stack has
        call_main();
        core::panic!("Came out of main");
    }
}

#[inline(always)]
unsafe fn init_stack() {
    unsafe { __rc0 = 0xFF };
    unsafe { __rc1 = 0x1F }
}

#[inline(always)]
unsafe fn reset_banking_register() {
    let bank_reg = ScrReg::Banking.address() as *mut u8;
    unsafe { ptr::write_volatile(bank_reg, 0) };
}
