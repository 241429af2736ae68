extern crate std;

use std::vec::Vec;

use crate::{
    host::{Board, Host, LayerState, PointingDevice, UserHooks},
    matrix::KeyRecord,
    report::MouseReport,
};

#[derive(Debug, Default)]
pub struct DeviceStub {
    pub cpi: Vec<u16>,
    pub rotation: Option<i16>,
}
impl DeviceStub {
    pub fn last_cpi(&self) -> Option<u16> {
        self.cpi.last().copied()
    }
}
impl PointingDevice for DeviceStub {
    fn set_cpi(&mut self, cpi: u16) {
        self.cpi.push(cpi);
    }

    fn set_rotation(&mut self, degrees: i16) {
        self.rotation = Some(degrees);
    }
}

#[derive(Debug, Default)]
pub struct HostStub {
    pub mods: u8,
    pub oneshot_mods: u8,
    pub layers: LayerState,
    pub layer_calls: Vec<(u8, bool)>,
}
impl HostStub {
    pub fn is_layer_on(&self, layer: u8) -> bool {
        self.layers & (1 << layer) != 0
    }
}
impl Host for HostStub {
    fn mods(&self) -> u8 {
        self.mods
    }

    fn oneshot_mods(&self) -> u8 {
        self.oneshot_mods
    }

    fn layer_on(&mut self, layer: u8) {
        self.layers |= 1 << layer;
        self.layer_calls.push((layer, true));
    }

    fn layer_off(&mut self, layer: u8) {
        self.layers &= !(1 << layer);
        self.layer_calls.push((layer, false));
    }
}

#[derive(Debug)]
pub struct BoardStub {
    pub digital_inputs: Vec<u8>,
    pub master: bool,
}
impl Default for BoardStub {
    fn default() -> Self {
        Self {
            digital_inputs: Vec::new(),
            master: true,
        }
    }
}
impl Board for BoardStub {
    fn enable_digital_input(&mut self, gpio: u8) {
        self.digital_inputs.push(gpio);
    }

    fn is_master(&self) -> bool {
        self.master
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum UserCall {
    KeyboardPreInit,
    MatrixInit,
    MatrixScan,
    EeconfigInit,
    PointingDeviceInit,
    PointingDeviceTask(MouseReport),
    ProcessRecord(u16, bool),
    LayerStateSet(LayerState),
}

/// Records every hook call. `process_record_user` returns `handled_by_user == false`.
#[derive(Debug, Default)]
pub struct UserStub {
    pub calls: Vec<UserCall>,
    pub handled_by_user: bool,
}
impl UserHooks for UserStub {
    fn keyboard_pre_init_user(&mut self) {
        self.calls.push(UserCall::KeyboardPreInit);
    }

    fn matrix_init_user(&mut self) {
        self.calls.push(UserCall::MatrixInit);
    }

    fn matrix_scan_user(&mut self) {
        self.calls.push(UserCall::MatrixScan);
    }

    fn eeconfig_init_user(&mut self) {
        self.calls.push(UserCall::EeconfigInit);
    }

    fn pointing_device_init_user(&mut self) {
        self.calls.push(UserCall::PointingDeviceInit);
    }

    fn pointing_device_task_user(&mut self, report: MouseReport) -> MouseReport {
        self.calls.push(UserCall::PointingDeviceTask(report));
        report
    }

    fn process_record_user(&mut self, keycode: u16, record: &KeyRecord) -> bool {
        self.calls
            .push(UserCall::ProcessRecord(keycode, record.pressed()));
        !self.handled_by_user
    }

    fn layer_state_set_user(&mut self, state: LayerState) -> LayerState {
        self.calls.push(UserCall::LayerStateSet(state));
        state
    }
}
