//! Gamepad reads through the select-line protocol.

use gt::{Buttons, Config, Console, Gamepad, GamepadPort};
use gt_sim::{BusEvent, SimBus};
use proptest::prelude::*;

const ALL: [Buttons; 8] = [
    Buttons::UP,
    Buttons::DOWN,
    Buttons::LEFT,
    Buttons::RIGHT,
    Buttons::A,
    Buttons::B,
    Buttons::C,
    Buttons::START,
];

fn boot() -> Console<SimBus> {
    Console::init(SimBus::default(), &Config::default())
}

#[test]
fn test_idle_pad_reads_empty() {
    let mut console = boot();
    assert_eq!(console.read_gamepad(), Buttons::empty());
}

#[test]
fn test_each_button_alone() {
    let mut console = boot();
    for button in ALL {
        console.hardware_mut().set_buttons(GamepadPort::One, button);
        assert_eq!(console.read_gamepad(), button, "{:?}", button);
    }
}

#[test]
fn test_read_order() {
    let mut console = boot();
    console.hardware_mut().take_events();
    console.read_gamepad();

    let ports: Vec<GamepadPort> = console
        .hardware()
        .events()
        .iter()
        .filter_map(|e| match e {
            BusEvent::Pad(port, _) => Some(*port),
            _ => None,
        })
        .collect();
    assert_eq!(ports, [GamepadPort::Two, GamepadPort::One, GamepadPort::One]);
}

#[test]
fn test_repeated_reads_stay_in_step() {
    let mut console = boot();
    console.hardware_mut().set_buttons(GamepadPort::One, Buttons::B | Buttons::UP);

    for _ in 0..5 {
        assert_eq!(console.read_gamepad(), Buttons::B | Buttons::UP);
    }
}

#[test]
fn test_second_pad_does_not_leak() {
    let mut console = boot();
    console.hardware_mut().set_buttons(GamepadPort::Two, Buttons::A | Buttons::LEFT);
    assert_eq!(console.read_gamepad(), Buttons::empty());
}

#[test]
fn test_edges_across_frames() {
    let mut console = boot();
    let mut pad = Gamepad::new();

    console.hardware_mut().set_buttons(GamepadPort::One, Buttons::A);
    pad.read(console.hardware_mut());
    assert!(pad.just_pressed(Buttons::A));

    console.sync();
    pad.read(console.hardware_mut());
    assert!(pad.is_pressed(Buttons::A));
    assert!(!pad.just_pressed(Buttons::A));

    console.hardware_mut().set_buttons(GamepadPort::One, Buttons::empty());
    pad.read(console.hardware_mut());
    assert!(pad.just_released(Buttons::A));
}

#[test]
fn test_rom_bank_switch_at_runtime() {
    let mut console = boot();
    console.set_rom_bank(0x42);
    assert_eq!(console.hardware().rom_bank(), 0x42);
}

proptest! {
    #[test]
    fn prop_any_combination(held in any::<[bool; 8]>()) {
        let buttons = ALL
            .iter()
            .zip(held)
            .filter(|(_, h)| *h)
            .fold(Buttons::empty(), |acc, (b, _)| acc | *b);

        let mut console = boot();
        console.hardware_mut().set_buttons(GamepadPort::One, buttons);
        prop_assert_eq!(console.read_gamepad(), buttons);
    }
}
