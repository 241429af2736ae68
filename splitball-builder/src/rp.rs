//! RP2040 board support.

use embassy_rp::{
    flash::{Blocking, Flash},
    gpio::{AnyPin, Flex, Input, Pin, Pull},
    peripherals::FLASH,
};
use embassy_time::{block_for, Duration};
use splitball_firmware::{eeconfig::FlashEeconfig, host::Board, keyboards::KeyboardDefinition};

pub use embassy_rp::{bind_interrupts, gpio, init, peripherals};

/// Flash size of the Pro Micro RP2040 class controllers both keyboards use.
pub const FLASH_SIZE: usize = 2 * 1024 * 1024;

/// The eeconfig block lives in the last erase sector.
pub const EECONFIG_BASE: u32 = (FLASH_SIZE - embassy_rp::flash::ERASE_SIZE) as u32;

/// How long the VBUS pull-down gets before the pin is read.
const VBUS_SETTLE: Duration = Duration::from_micros(10);

pub type RpFlash<'d> = Flash<'d, FLASH, Blocking, FLASH_SIZE>;

pub type RpEeconfig<'f, 'd> = FlashEeconfig<'f, RpFlash<'d>, EECONFIG_BASE>;

pub fn eeconfig<'f, 'd>(flash: &'f mut RpFlash<'d>) -> RpEeconfig<'f, 'd> {
    FlashEeconfig::new(flash)
}

/// GPIO handling for an RP2040 keyboard half.
pub struct RpBoard<'d, const N: usize> {
    /// Pins shared with the ADC, keyed by GPIO number.
    analog_pins: [(u8, Flex<'d>); N],
    master: bool,
}

impl<'d, const N: usize> RpBoard<'d, N> {
    /// `vbus` is the pin that reads high on the half powered over USB. Without one this half is
    /// always the master.
    pub fn new(analog_pins: [AnyPin; N], vbus: Option<AnyPin>) -> Self {
        let master = vbus.map_or(true, |pin| {
            let input = Input::new(pin, Pull::Down);
            block_for(VBUS_SETTLE);
            input.is_high()
        });
        splitball_firmware::info!("board: master {}", master);
        Self {
            analog_pins: analog_pins.map(|pin| (pin.pin(), Flex::new(pin))),
            master,
        }
    }

    /// Like [Self::new], warning when `vbus` is not the pin `definition` names.
    pub fn for_keyboard<const ROWS: usize, const COLS: usize>(
        definition: &KeyboardDefinition<ROWS, COLS>,
        analog_pins: [AnyPin; N],
        vbus: Option<AnyPin>,
    ) -> Self {
        let pin = vbus.as_ref().map(|pin| pin.pin());
        if pin != definition.usb_vbus_pin {
            splitball_firmware::warn!(
                "board: {} VBUS pin {:?}, expected {:?}",
                definition.name,
                pin,
                definition.usb_vbus_pin
            );
        }
        Self::new(analog_pins, vbus)
    }
}

impl<const N: usize> Board for RpBoard<'_, N> {
    /// RP2040-E6: on B2 and later silicon the ADC capable pins start with their digital input
    /// disabled.
    fn enable_digital_input(&mut self, gpio: u8) {
        match self.analog_pins.iter_mut().find(|(n, _)| *n == gpio) {
            Some((_, pin)) => pin.set_as_input(),
            None => splitball_firmware::warn!("board: GPIO {} is not an analog pin", gpio),
        }
    }

    fn is_master(&self) -> bool {
        self.master
    }
}
