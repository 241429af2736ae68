#![no_std]

#[cfg(feature = "rp")]
pub mod rp;

#[cfg(feature = "defmt")]
use defmt_rtt as _;

pub use embassy_sync::blocking_mutex::raw::{CriticalSectionRawMutex, NoopRawMutex};
pub use splitball_firmware::*;
pub use static_cell::StaticCell;

/// Milliseconds since boot; the timestamp [Keyboard::matrix_scan] and
/// [Keyboard::pointing_device_task] expect.
pub fn now_ms() -> u64 {
    embassy_time::Instant::now().as_millis()
}

/// Place a keyboard in a static [shared::SharedKeyboard] and return a reference to it.
///
/// Can only be called once for each call site.
///
/// # Example
///
/// ```rust,ignore
/// let keyboard = splitball_builder::shared_keyboard!(
///     MyKeyboard,
///     Keyboard::new(&A_DUX, eeconfig, sensor, board, NoUserHooks)
/// );
/// keyboard.with(|kb| kb.matrix_init());
/// ```
#[macro_export]
macro_rules! shared_keyboard {
    ($kb_type:ty, $keyboard:expr) => {{
        type Shared = $crate::shared::SharedKeyboard<$crate::CriticalSectionRawMutex, $kb_type>;
        static KEYBOARD: $crate::StaticCell<Shared> = $crate::StaticCell::new();
        let keyboard: &'static Shared = KEYBOARD.init(Shared::new($keyboard));
        keyboard
    }};
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod test;
