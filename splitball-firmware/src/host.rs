//! The seams between this crate and the firmware that runs the scan loop and USB stack.

use crate::{matrix::KeyRecord, report::MouseReport};

/// Bit set of active layers; bit `n` is layer `n`.
pub type LayerState = u32;

/// The pointing sensor.
pub trait PointingDevice {
    fn set_cpi(&mut self, cpi: u16);

    /// Sensor-side rotation of the reported axes, in degrees.
    fn set_rotation(&mut self, _degrees: i16) {}
}

/// Runtime state owned by the host firmware.
pub trait Host {
    /// Currently held modifiers.
    fn mods(&self) -> u8;

    /// Pending one-shot modifiers. Hosts without one-shot keys leave this at zero.
    fn oneshot_mods(&self) -> u8 {
        0
    }

    /// Called from inside a [crate::Keyboard] callback when the auto pointer layer changes.
    ///
    /// The host must not call back into the keyboard from here. A keyboard behind
    /// [crate::shared::SharedKeyboard] is still borrowed, and calling it again panics. Record the
    /// new layer state and pass it to [crate::Keyboard::layer_state_set] once the current call
    /// has returned.
    fn layer_on(&mut self, layer: u8);

    /// See [Self::layer_on].
    fn layer_off(&mut self, layer: u8);
}

/// Board level hardware.
pub trait Board {
    /// Turn on the digital input buffer of a GPIO that is shared with an analog input.
    fn enable_digital_input(&mut self, _gpio: u8) {}

    /// Is this the half connected to the host. Split keyboards only run pointer processing on the
    /// master half.
    fn is_master(&self) -> bool {
        true
    }
}

/// Keymap level hooks, run after the keyboard level behaviour. Every method defaults to doing
/// nothing.
#[allow(unused_variables)]
pub trait UserHooks {
    fn keyboard_pre_init_user(&mut self) {}

    fn matrix_init_user(&mut self) {}

    fn matrix_scan_user(&mut self) {}

    fn eeconfig_init_user(&mut self) {}

    fn pointing_device_init_user(&mut self) {}

    fn pointing_device_task_user(&mut self, report: MouseReport) -> MouseReport {
        report
    }

    /// Return false to stop the keyboard from processing `keycode`.
    fn process_record_user(&mut self, keycode: u16, record: &KeyRecord) -> bool {
        true
    }

    fn layer_state_set_user(&mut self, state: LayerState) -> LayerState {
        state
    }
}

/// [UserHooks] with nothing overridden.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoUserHooks;
impl UserHooks for NoUserHooks {}
