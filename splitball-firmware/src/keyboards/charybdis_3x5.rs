use splitball_common::pointer::PointerSettings;

use super::{KeyboardDefinition, Orientation};
use crate::auto_pointer::AutoPointerSettings;

pub const ROWS: usize = 8;
pub const COLS: usize = 5;

/// The Charybdis Nano (3x5) with its trackball on the right half.
pub static CHARYBDIS_3X5: KeyboardDefinition<ROWS, COLS> = KeyboardDefinition {
    name: "charybdis-3x5",
    pointer: PointerSettings::new(),
    pointer_keycodes: true,
    hand_swap: None,
    dynamic_keymap_layer_count: 7,
    vial_keyboard_uid: [0x44, 0x9F, 0x26, 0x53, 0xD9, 0x7B, 0x72, 0x4F],
    auto_pointer: Some(AutoPointerSettings::new(4)),
    orientation: Orientation {
        invert_x: false,
        invert_y: true,
        rotation: -25,
    },
    digital_input_pins: &[],
    usb_vbus_pin: Some(19),
};
