use splitball_common::keycodes::{key_range, modifiers, PointerKey};

use crate::{
    auto_pointer::AutoPointerLayer,
    debug,
    eeconfig::Eeconfig,
    hand_swap::HandSwap,
    host::{Board, Host, LayerState, NoUserHooks, PointingDevice, UserHooks},
    info,
    keyboards::KeyboardDefinition,
    matrix::{KeyRecord, ScanKey},
    pointer::Pointer,
    report::MouseReport,
    warn,
};

/// The keyboard level behaviour of a split trackball keyboard.
///
/// The host firmware calls the callback methods at the same points QMK calls its `*_kb` hooks.
/// Each callback does the keyboard's work and then runs the matching [UserHooks] method.
pub struct Keyboard<const ROWS: usize, const COLS: usize, E, P, B, U = NoUserHooks> {
    definition: &'static KeyboardDefinition<ROWS, COLS>,
    pointer: Pointer,
    hand_swap: HandSwap<'static, ROWS, COLS>,
    auto_pointer: Option<AutoPointerLayer>,
    eeconfig: E,
    device: P,
    board: B,
    user: U,
}

impl<const ROWS: usize, const COLS: usize, E, P, B, U> Keyboard<ROWS, COLS, E, P, B, U>
where
    E: Eeconfig,
    P: PointingDevice,
    B: Board,
    U: UserHooks,
{
    pub fn new(
        definition: &'static KeyboardDefinition<ROWS, COLS>,
        eeconfig: E,
        device: P,
        board: B,
        user: U,
    ) -> Self {
        Self {
            definition,
            pointer: Pointer::new(definition.pointer),
            hand_swap: HandSwap::new(definition.hand_swap),
            auto_pointer: definition.auto_pointer.map(AutoPointerLayer::new),
            eeconfig,
            device,
            board,
            user,
        }
    }

    pub fn definition(&self) -> &'static KeyboardDefinition<ROWS, COLS> {
        self.definition
    }

    pub fn pointer(&self) -> &Pointer {
        &self.pointer
    }

    pub fn auto_pointer(&self) -> Option<&AutoPointerLayer> {
        self.auto_pointer.as_ref()
    }

    pub fn device(&self) -> &P {
        &self.device
    }

    pub fn device_mut(&mut self) -> &mut P {
        &mut self.device
    }

    pub fn board(&self) -> &B {
        &self.board
    }

    pub fn user(&self) -> &U {
        &self.user
    }

    pub fn user_mut(&mut self) -> &mut U {
        &mut self.user
    }

    pub fn eeconfig_mut(&mut self) -> &mut E {
        &mut self.eeconfig
    }

    pub fn keyboard_pre_init(&mut self) {
        for gpio in self.definition.digital_input_pins {
            self.board.enable_digital_input(*gpio);
        }
        self.user.keyboard_pre_init_user();
    }

    /// Reset the pointer config to its first boot value and store it.
    pub fn eeconfig_init(&mut self) {
        self.pointer.reset();
        self.write_config();
        self.update_cpi();
        self.user.eeconfig_init_user();
    }

    /// Load the stored pointer config, formatting the storage first if needed. When the storage
    /// cannot be used the first boot config stays in memory.
    pub fn matrix_init(&mut self) {
        if self.prepare_eeconfig() {
            self.read_config();
        } else {
            self.pointer.reset();
        }
        self.user.matrix_init_user();
    }

    fn prepare_eeconfig(&mut self) -> bool {
        match self.eeconfig.is_initialized() {
            Ok(true) => return true,
            Ok(false) => info!("eeconfig: formatting"),
            Err(err) => {
                warn!("eeconfig: read failed {:?}", err);
                return false;
            }
        }
        let formatted = match self.eeconfig.initialize() {
            Ok(()) => true,
            Err(err) => {
                warn!("eeconfig: initialize failed {:?}", err);
                false
            }
        };
        self.eeconfig_init();
        formatted
    }

    pub fn matrix_scan(&mut self, now: u64, host: &mut impl Host) {
        if let Some(ap) = self.auto_pointer.as_mut() {
            ap.scan(now, host);
        }
        self.user.matrix_scan_user();
    }

    pub fn pointing_device_init(&mut self) {
        self.update_cpi();
        let rotation = self.definition.orientation.rotation;
        if rotation != 0 {
            self.device.set_rotation(rotation);
        }
        self.user.pointing_device_init_user();
    }

    /// Only the master half changes the report; the other half returns it untouched.
    pub fn pointing_device_task(
        &mut self,
        mut report: MouseReport,
        now: u64,
        host: &mut impl Host,
    ) -> MouseReport {
        if !self.board.is_master() {
            return report;
        }
        let orientation = &self.definition.orientation;
        if orientation.invert_x {
            report.x = report.x.saturating_neg();
        }
        if orientation.invert_y {
            report.y = report.y.saturating_neg();
        }
        self.pointer.dragscroll(&mut report);
        if let Some(ap) = self.auto_pointer.as_mut() {
            ap.motion(&report, now, host);
        }
        self.user.pointing_device_task_user(report)
    }

    /// Returns false when `keycode` should not be processed any further.
    pub fn process_record(&mut self, keycode: u16, record: &KeyRecord, host: &impl Host) -> bool {
        if !self.user.process_record_user(keycode, record) {
            self.debug_config();
            return false;
        }
        if self.definition.pointer_keycodes {
            if let Some(key) = PointerKey::from_code(keycode) {
                self.pointer_key(key, record.pressed(), host);
            }
        }
        if key_range::is_kb(keycode) || key_range::is_mouse_key(keycode) {
            self.debug_config();
        }
        true
    }

    fn pointer_key(&mut self, key: PointerKey, pressed: bool, host: &impl Host) {
        let forward = (host.mods() | host.oneshot_mods()) & modifiers::MASK_SHIFT == 0;
        match key {
            PointerKey::DefaultDpiForward if pressed => self.cycle_pointer_default_dpi(forward),
            PointerKey::DefaultDpiReverse if pressed => self.cycle_pointer_default_dpi(!forward),
            PointerKey::SnipingDpiForward if pressed => self.cycle_pointer_sniping_dpi(forward),
            PointerKey::SnipingDpiReverse if pressed => self.cycle_pointer_sniping_dpi(!forward),
            PointerKey::Sniping => self.set_pointer_sniping_enabled(pressed),
            PointerKey::SnipingToggle if pressed => {
                self.set_pointer_sniping_enabled(!self.get_pointer_sniping_enabled())
            }
            PointerKey::DragScroll => self.set_pointer_dragscroll_enabled(pressed),
            PointerKey::DragScrollToggle if pressed => {
                self.set_pointer_dragscroll_enabled(!self.get_pointer_dragscroll_enabled())
            }
            _ => {}
        }
    }

    pub fn layer_state_set(&mut self, state: LayerState) -> LayerState {
        if let Some(sniping) = self.auto_pointer.as_ref().and_then(|ap| ap.sniping_for(state)) {
            self.set_pointer_sniping_enabled(sniping);
        }
        self.user.layer_state_set_user(state)
    }

    pub fn get_pointer_default_dpi(&self) -> u16 {
        self.pointer.default_dpi()
    }

    pub fn get_pointer_sniping_dpi(&self) -> u16 {
        self.pointer.sniping_dpi()
    }

    pub fn cycle_pointer_default_dpi(&mut self, forward: bool) {
        self.pointer.step_default_dpi(forward);
        self.write_config();
        self.update_cpi();
    }

    /// Like [Self::cycle_pointer_default_dpi] but not stored; a reset restores the stored value.
    pub fn cycle_pointer_default_dpi_noeeprom(&mut self, forward: bool) {
        self.pointer.step_default_dpi(forward);
        self.update_cpi();
    }

    pub fn cycle_pointer_sniping_dpi(&mut self, forward: bool) {
        self.pointer.step_sniping_dpi(forward);
        self.write_config();
        self.update_cpi();
    }

    pub fn cycle_pointer_sniping_dpi_noeeprom(&mut self, forward: bool) {
        self.pointer.step_sniping_dpi(forward);
        self.update_cpi();
    }

    pub fn get_pointer_sniping_enabled(&self) -> bool {
        self.pointer.is_sniping_enabled()
    }

    pub fn set_pointer_sniping_enabled(&mut self, enable: bool) {
        self.pointer.set_sniping_enabled(enable);
        self.update_cpi();
    }

    pub fn get_pointer_dragscroll_enabled(&self) -> bool {
        self.pointer.is_dragscroll_enabled()
    }

    pub fn set_pointer_dragscroll_enabled(&mut self, enable: bool) {
        self.pointer.set_dragscroll_enabled(enable);
        self.update_cpi();
    }

    pub fn is_swap_hands_on(&self) -> bool {
        self.hand_swap.is_on()
    }

    pub fn swap_hands_on(&mut self) {
        self.hand_swap.set(true);
    }

    pub fn swap_hands_off(&mut self) {
        self.hand_swap.set(false);
    }

    pub fn swap_hands_toggle(&mut self) {
        self.hand_swap.toggle();
    }

    /// The position the keymap should see for a switch change.
    pub fn swap_key(&mut self, key: ScanKey) -> ScanKey {
        self.hand_swap.swap_key(key)
    }

    fn read_config(&mut self) {
        match self.eeconfig.read_kb() {
            Ok(raw) => self.pointer.load(raw),
            Err(err) => {
                warn!("eeconfig: read kb failed {:?}", err);
                self.pointer.reset();
            }
        }
    }

    fn write_config(&mut self) {
        let raw = self.pointer.config().raw() as u32;
        if let Err(err) = self.eeconfig.update_kb(raw) {
            warn!("eeconfig: update kb failed {:?}", err);
        }
    }

    fn update_cpi(&mut self) {
        self.device.set_cpi(self.pointer.active_cpi());
    }

    fn debug_config(&self) {
        let config = self.pointer.config();
        debug!(
            "{}: config raw {} dpi {} sniping dpi {} sniping {} dragscroll {}",
            self.definition.name,
            config.raw(),
            config.default_dpi_index(),
            config.sniping_dpi_index(),
            config.is_sniping_enabled(),
            config.is_dragscroll_enabled()
        );
    }
}

#[cfg(test)]
#[path = "keyboard_test.rs"]
mod test;
