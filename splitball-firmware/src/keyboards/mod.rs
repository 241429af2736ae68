//! The supported keyboards.

use splitball_common::pointer::PointerSettings;

use crate::{auto_pointer::AutoPointerSettings, hand_swap::HandSwapTable};

pub mod a_dux;
pub mod charybdis_3x5;

pub use a_dux::A_DUX;
pub use charybdis_3x5::CHARYBDIS_3X5;

/// How the sensor is mounted.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Orientation {
    pub invert_x: bool,
    pub invert_y: bool,
    /// Passed to the sensor as its rotational transform.
    pub rotation: i16,
}

/// Everything that differs between the supported keyboards.
#[derive(Debug)]
pub struct KeyboardDefinition<const ROWS: usize, const COLS: usize> {
    pub name: &'static str,
    pub pointer: PointerSettings,
    /// Handle the pointer keycodes; when false they pass through to the keymap untouched.
    pub pointer_keycodes: bool,
    pub hand_swap: Option<&'static HandSwapTable<ROWS, COLS>>,
    pub dynamic_keymap_layer_count: u8,
    pub vial_keyboard_uid: [u8; 8],
    pub auto_pointer: Option<AutoPointerSettings>,
    pub orientation: Orientation,
    /// GPIOs shared with analog inputs that must be switched to digital inputs before scanning.
    pub digital_input_pins: &'static [u8],
    /// GPIO used to tell which half has USB power.
    pub usb_vbus_pin: Option<u8>,
}

impl<const ROWS: usize, const COLS: usize> KeyboardDefinition<ROWS, COLS> {
    pub const fn matrix_size(&self) -> (usize, usize) {
        (ROWS, COLS)
    }
}

/// Name lookup for tools; the matrix size is fixed at 8x5 for all supported keyboards.
pub fn by_name(name: &str) -> Option<&'static KeyboardDefinition<8, 5>> {
    [&A_DUX, &CHARYBDIS_3X5]
        .into_iter()
        .find(|k| k.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
#[path = "keyboards_test.rs"]
mod test;
