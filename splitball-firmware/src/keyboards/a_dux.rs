use splitball_common::pointer::PointerSettings;

use super::{KeyboardDefinition, Orientation};
use crate::{auto_pointer::AutoPointerSettings, hand_swap::HandSwapTable, matrix::KeyPos};

pub const ROWS: usize = 8;
pub const COLS: usize = 5;

const fn p(row: u8, col: u8) -> KeyPos {
    KeyPos::new(row, col)
}

#[rustfmt::skip]
pub static HAND_SWAP: HandSwapTable<ROWS, COLS> = [
    // Left
    [p(4, 4), p(4, 3), p(4, 2), p(4, 1), p(4, 0)],
    [p(5, 4), p(5, 3), p(5, 2), p(5, 1), p(5, 0)],
    [p(6, 4), p(6, 3), p(6, 2), p(6, 1), p(6, 0)],
    [p(7, 1), p(7, 0), p(7, 2), p(7, 3), p(7, 4)],
    // Right
    [p(0, 4), p(0, 3), p(0, 2), p(0, 1), p(0, 0)],
    [p(1, 4), p(1, 3), p(1, 2), p(1, 1), p(1, 0)],
    [p(2, 4), p(2, 3), p(2, 2), p(2, 1), p(2, 0)],
    [p(3, 1), p(3, 0), p(3, 2), p(3, 3), p(3, 4)],
];

/// The A-Dux: 34 keys, RP2040 controller.
pub static A_DUX: KeyboardDefinition<ROWS, COLS> = KeyboardDefinition {
    name: "a-dux",
    pointer: PointerSettings::new(),
    pointer_keycodes: true,
    hand_swap: Some(&HAND_SWAP),
    dynamic_keymap_layer_count: 6,
    vial_keyboard_uid: [0x87, 0xA9, 0x8A, 0x12, 0x76, 0x85, 0xE0, 0xFA],
    auto_pointer: Some(AutoPointerSettings::new(4)),
    orientation: Orientation {
        invert_x: false,
        invert_y: false,
        rotation: 0,
    },
    // GP26-GP29 double as A0-A3; RP2040-B2 and later leave their digital inputs off (RP2040-E6).
    digital_input_pins: &[26, 27, 28, 29],
    usb_vbus_pin: None,
};
