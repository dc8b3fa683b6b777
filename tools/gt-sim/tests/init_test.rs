//! Power-on behavior of `Console::init` against the simulated console.

use gt::{BankFlags, Color, Config, Console, Page, VideoFlags};
use gt_sim::{BusEvent, Interrupt, SimBus};

fn boot() -> Console<SimBus> {
    Console::init(SimBus::default(), &Config::default())
}

#[test]
fn test_init_leaves_pages_apart() {
    let console = boot();
    let bus = console.hardware();

    assert_eq!(console.draw_page(), Page::One);
    assert_eq!(console.display_page(), Page::Zero);
    assert_eq!(bus.draw_target(), Page::One);
    assert_eq!(bus.displayed(), Page::Zero);
}

#[test]
fn test_init_blanks_both_pages() {
    let console = boot();
    let bus = console.hardware();

    // power-on garbage is gone from both
    for page in [Page::Zero, Page::One] {
        assert!(bus.page(page).iter().all(|&p| p == Color::BLACK.index()), "{:?}", page);
    }
}

#[test]
fn test_init_clears_to_configured_color() {
    let config = Config { clear_color: Color::BLUE, ..Config::default() };
    let console = Console::init(SimBus::default(), &config);

    for page in [Page::Zero, Page::One] {
        assert!(console.hardware().page(page).iter().all(|&p| p == Color::BLUE.index()));
    }
}

#[test]
fn test_init_shadows_match_latched_registers() {
    let console = boot();
    let bus = console.hardware();

    assert_eq!(console.bank_flags(), BankFlags::CLIP_X | BankFlags::CLIP_Y | BankFlags::FRAMEBUFFER_SELECT);
    assert_eq!(console.video_flags(), VideoFlags::DMA_ENABLE | VideoFlags::DMA_IRQ | VideoFlags::DMA_OPAQUE);
    assert_eq!(bus.bank_flags(), console.bank_flags());
    assert_eq!(bus.video_flags(), console.video_flags());
}

#[test]
fn test_init_selects_boot_rom_bank() {
    assert_eq!(boot().hardware().rom_bank(), 254);

    let config = Config { boot_rom_bank: 3, ..Config::default() };
    assert_eq!(Console::init(SimBus::default(), &config).hardware().rom_bank(), 3);
}

#[test]
fn test_init_clears_each_page_with_four_jobs() {
    let console = boot();
    let bus = console.hardware();
    let blits = bus.blits();

    assert_eq!(blits.len(), 8);
    assert!(blits[..4].iter().all(|b| b.page == Page::One));
    assert!(blits[4..].iter().all(|b| b.page == Page::Zero));
    assert!(blits.iter().all(|b| b.color_fill && b.written == 64 * 64));
    assert_eq!(bus.dropped_starts(), 0);
}

#[test]
fn test_init_acknowledges_every_blit() {
    let console = boot();
    let bus = console.hardware();

    assert!(!bus.irq_pending());
    assert!(!bus.blitter_busy());

    let wakes = bus.events().iter().filter(|e| matches!(e, BusEvent::Wake(_))).count();
    assert_eq!(wakes, 8);
    assert_eq!(bus.last_wake(), Some(Interrupt::Irq));
}

#[test]
fn test_init_through_borrowed_bus() {
    let mut bus = SimBus::default();
    {
        let mut console = Console::init(&mut bus, &Config::default());
        console.clear(Color::RED);
    }

    assert!(bus.page(Page::One).iter().all(|&p| p == Color::RED.index()));
    assert!(bus.page(Page::Zero).iter().all(|&p| p == Color::BLACK.index()));
}
