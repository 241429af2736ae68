pub mod key_range {
    pub const MOUSE_MIN: u16 = 0xcd;
    pub const MOUSE_MAX: u16 = 0xdf;

    /// First keyboard-defined keycode.
    pub const KB_MIN: u16 = 0x7e00;
    pub const KB_MAX: u16 = 0x7e3f;

    pub const USER_MIN: u16 = 0x7e40;
    pub const USER_MAX: u16 = 0x7fff;

    pub const fn is_kb(code: u16) -> bool {
        code >= KB_MIN && code <= KB_MAX
    }

    pub const fn is_mouse_key(code: u16) -> bool {
        code >= MOUSE_MIN && code <= MOUSE_MAX
    }
}

pub mod modifiers {
    pub const LCTRL: u8 = 0x01;
    pub const LSHIFT: u8 = 0x02;
    pub const LALT: u8 = 0x04;
    pub const LGUI: u8 = 0x08;
    pub const RCTRL: u8 = 0x10;
    pub const RSHIFT: u8 = 0x20;
    pub const RALT: u8 = 0x40;
    pub const RGUI: u8 = 0x80;

    pub const MASK_SHIFT: u8 = LSHIFT | RSHIFT;
}

pub const POINTER_DEFAULT_DPI_FORWARD: u16 = key_range::KB_MIN;
pub const POINTER_DEFAULT_DPI_REVERSE: u16 = key_range::KB_MIN + 1;
pub const POINTER_SNIPING_DPI_FORWARD: u16 = key_range::KB_MIN + 2;
pub const POINTER_SNIPING_DPI_REVERSE: u16 = key_range::KB_MIN + 3;
pub const SNIPING_MODE: u16 = key_range::KB_MIN + 4;
pub const SNIPING_MODE_TOGGLE: u16 = key_range::KB_MIN + 5;
pub const DRAGSCROLL_MODE: u16 = key_range::KB_MIN + 6;
pub const DRAGSCROLL_MODE_TOGGLE: u16 = key_range::KB_MIN + 7;

pub const DPI_MOD: u16 = POINTER_DEFAULT_DPI_FORWARD;
pub const DPI_RMOD: u16 = POINTER_DEFAULT_DPI_REVERSE;
pub const S_D_MOD: u16 = POINTER_SNIPING_DPI_FORWARD;
pub const S_D_RMOD: u16 = POINTER_SNIPING_DPI_REVERSE;
pub const SNIPING: u16 = SNIPING_MODE;
pub const SNP_TOG: u16 = SNIPING_MODE_TOGGLE;
pub const DRGSCRL: u16 = DRAGSCROLL_MODE;
pub const DRG_TOG: u16 = DRAGSCROLL_MODE_TOGGLE;

/// The keyboard-defined pointer keycodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKey {
    DefaultDpiForward,
    DefaultDpiReverse,
    SnipingDpiForward,
    SnipingDpiReverse,
    Sniping,
    SnipingToggle,
    DragScroll,
    DragScrollToggle,
}

const POINTER_KEYS: [(PointerKey, &str, &str); 8] = [
    (PointerKey::DefaultDpiForward, "POINTER_DEFAULT_DPI_FORWARD", "DPI_MOD"),
    (PointerKey::DefaultDpiReverse, "POINTER_DEFAULT_DPI_REVERSE", "DPI_RMOD"),
    (PointerKey::SnipingDpiForward, "POINTER_SNIPING_DPI_FORWARD", "S_D_MOD"),
    (PointerKey::SnipingDpiReverse, "POINTER_SNIPING_DPI_REVERSE", "S_D_RMOD"),
    (PointerKey::Sniping, "SNIPING_MODE", "SNIPING"),
    (PointerKey::SnipingToggle, "SNIPING_MODE_TOGGLE", "SNP_TOG"),
    (PointerKey::DragScroll, "DRAGSCROLL_MODE", "DRGSCRL"),
    (PointerKey::DragScrollToggle, "DRAGSCROLL_MODE_TOGGLE", "DRG_TOG"),
];

impl PointerKey {
    pub fn from_code(code: u16) -> Option<Self> {
        let i = code.checked_sub(key_range::KB_MIN)? as usize;
        POINTER_KEYS.get(i).map(|(k, _, _)| *k)
    }

    pub const fn code(self) -> u16 {
        key_range::KB_MIN + self as u16
    }

    pub const fn name(self) -> &'static str {
        POINTER_KEYS[self as usize].1
    }

    pub const fn short_name(self) -> &'static str {
        POINTER_KEYS[self as usize].2
    }

    /// Look up a keycode by its long or short name; case is ignored.
    pub fn from_name(name: &str) -> Option<Self> {
        POINTER_KEYS
            .iter()
            .find(|(_, long, short)| {
                long.eq_ignore_ascii_case(name) || short.eq_ignore_ascii_case(name)
            })
            .map(|(k, _, _)| *k)
    }

    pub fn iter() -> impl Iterator<Item = PointerKey> {
        POINTER_KEYS.iter().map(|(k, _, _)| *k)
    }
}

#[cfg(test)]
#[path = "keycodes_test.rs"]
mod test;
