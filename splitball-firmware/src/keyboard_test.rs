extern crate std;

use splitball_common::{
    keycodes::{modifiers, DPI_MOD, DPI_RMOD, DRGSCRL, DRG_TOG, SNIPING, SNP_TOG, S_D_MOD, S_D_RMOD},
    pointer::PointerSettings,
};

use super::*;

use crate::{
    auto_pointer::AutoPointerSettings,
    eeconfig::FlashEeconfig,
    flash_test_stub::{FlashStubError, NorFlashStub},
    host_test_stub::{BoardStub, DeviceStub, HostStub, UserCall, UserStub},
    keyboards::{Orientation, A_DUX, CHARYBDIS_3X5},
};

type Flash = NorFlashStub<1024>;
type TestKeyboard<'f> = Keyboard<8, 5, FlashEeconfig<'f, Flash, 0>, DeviceStub, BoardStub, UserStub>;

/// Offset of the keyboard word's low byte in the flash stub.
const KB_BYTE: usize = 8;

static PLAIN: KeyboardDefinition<8, 5> = KeyboardDefinition {
    name: "plain",
    pointer: PointerSettings::new(),
    pointer_keycodes: false,
    hand_swap: None,
    dynamic_keymap_layer_count: 4,
    vial_keyboard_uid: [0; 8],
    auto_pointer: None,
    orientation: Orientation {
        invert_x: true,
        invert_y: false,
        rotation: 0,
    },
    digital_input_pins: &[],
    usb_vbus_pin: None,
};

static SNIPING_LAYER: KeyboardDefinition<8, 5> = KeyboardDefinition {
    name: "sniping-layer",
    pointer: PointerSettings::new(),
    pointer_keycodes: true,
    hand_swap: None,
    dynamic_keymap_layer_count: 6,
    vial_keyboard_uid: [0; 8],
    auto_pointer: Some(AutoPointerSettings::new(4).with_sniping_layer(5)),
    orientation: Orientation {
        invert_x: false,
        invert_y: false,
        rotation: 0,
    },
    digital_input_pins: &[],
    usb_vbus_pin: None,
};

fn keyboard<'f>(
    definition: &'static KeyboardDefinition<8, 5>,
    flash: &'f mut Flash,
) -> TestKeyboard<'f> {
    Keyboard::new(
        definition,
        FlashEeconfig::new(flash),
        DeviceStub::default(),
        BoardStub::default(),
        UserStub::default(),
    )
}

fn press() -> KeyRecord {
    KeyRecord::new(ScanKey::new(1, 2, true), 10)
}

fn release() -> KeyRecord {
    KeyRecord::new(ScanKey::new(1, 2, false), 20)
}

fn tap(kb: &mut TestKeyboard, keycode: u16, host: &HostStub) {
    assert!(kb.process_record(keycode, &press(), host));
    assert!(kb.process_record(keycode, &release(), host));
}

#[test]
fn first_boot() {
    let mut flash = Flash::default();
    let mut kb = keyboard(&A_DUX, &mut flash);

    kb.matrix_init();

    assert_eq!(kb.get_pointer_default_dpi(), 1000);
    assert_eq!(kb.get_pointer_sniping_dpi(), 200);
    assert_eq!(kb.device().last_cpi(), Some(1000));
    assert_eq!(kb.user().calls, [UserCall::EeconfigInit, UserCall::MatrixInit]);

    assert_eq!(flash.buf[KB_BYTE], 3);
}

#[test]
fn matrix_init_loads_stored_config() {
    let mut flash = Flash::default();
    {
        let mut ee = FlashEeconfig::<_, 0>::new(&mut flash);
        ee.initialize().unwrap();
        ee.update_kb(0xe5).unwrap();
    }
    let mut kb = keyboard(&A_DUX, &mut flash);

    kb.matrix_init();
    kb.pointing_device_init();

    assert_eq!(kb.get_pointer_default_dpi(), 1400);
    assert_eq!(kb.get_pointer_sniping_dpi(), 400);
    assert!(!kb.get_pointer_sniping_enabled());
    assert!(!kb.get_pointer_dragscroll_enabled());
    assert_eq!(kb.device().cpi, [1400]);
    assert_eq!(kb.device().rotation, None);
    assert_eq!(
        kb.user().calls,
        [UserCall::MatrixInit, UserCall::PointingDeviceInit]
    );
}

#[test]
fn eeconfig_init_resets() {
    let mut flash = Flash::default();
    let host = HostStub::default();
    {
        let mut kb = keyboard(&A_DUX, &mut flash);
        kb.matrix_init();
        tap(&mut kb, DPI_MOD, &host);
        tap(&mut kb, S_D_MOD, &host);
        assert_eq!(flash_byte(&mut kb), 0x14);

        kb.eeconfig_init();
        assert_eq!(kb.get_pointer_default_dpi(), 1000);
        assert_eq!(kb.get_pointer_sniping_dpi(), 200);
        assert_eq!(kb.device().last_cpi(), Some(1000));
    }
    assert_eq!(flash.buf[KB_BYTE], 3);
}

fn flash_byte(kb: &mut TestKeyboard) -> u8 {
    kb.eeconfig_mut().read_kb().unwrap() as u8
}

#[test]
fn pre_init_pins() {
    let mut flash = Flash::default();
    let mut kb = keyboard(&A_DUX, &mut flash);
    kb.keyboard_pre_init();
    assert_eq!(kb.board().digital_inputs, [26, 27, 28, 29]);
    assert_eq!(kb.user().calls, [UserCall::KeyboardPreInit]);

    let mut flash = Flash::default();
    let mut kb = keyboard(&CHARYBDIS_3X5, &mut flash);
    kb.keyboard_pre_init();
    assert!(kb.board().digital_inputs.is_empty());
}

#[test]
fn default_dpi_keys() {
    let mut flash = Flash::default();
    let mut host = HostStub::default();
    let mut kb = keyboard(&A_DUX, &mut flash);
    kb.matrix_init();

    tap(&mut kb, DPI_MOD, &host);
    assert_eq!(kb.get_pointer_default_dpi(), 1200);
    assert_eq!(kb.device().last_cpi(), Some(1200));
    assert_eq!(flash_byte(&mut kb), 4);

    host.mods = modifiers::LSHIFT;
    tap(&mut kb, DPI_MOD, &host);
    assert_eq!(kb.get_pointer_default_dpi(), 1000);

    host.mods = modifiers::LCTRL;
    tap(&mut kb, DPI_RMOD, &host);
    assert_eq!(kb.get_pointer_default_dpi(), 800);

    host.mods = 0;
    host.oneshot_mods = modifiers::RSHIFT;
    tap(&mut kb, DPI_RMOD, &host);
    assert_eq!(kb.get_pointer_default_dpi(), 1000);
    assert_eq!(flash_byte(&mut kb), 3);
}

#[test]
fn default_dpi_wraps() {
    let mut flash = Flash::default();
    let host = HostStub::default();
    let mut kb = keyboard(&A_DUX, &mut flash);
    kb.matrix_init();

    for _ in 0..4 {
        tap(&mut kb, DPI_RMOD, &host);
    }
    assert_eq!(kb.get_pointer_default_dpi(), 3400);

    tap(&mut kb, DPI_MOD, &host);
    assert_eq!(kb.get_pointer_default_dpi(), 400);
}

#[test]
fn sniping_dpi_keys() {
    let mut flash = Flash::default();
    let mut host = HostStub::default();
    let mut kb = keyboard(&A_DUX, &mut flash);
    kb.matrix_init();

    tap(&mut kb, S_D_MOD, &host);
    assert_eq!(kb.get_pointer_sniping_dpi(), 300);
    // sniping is off so the sensor stays at the default dpi
    assert_eq!(kb.device().last_cpi(), Some(1000));

    tap(&mut kb, S_D_RMOD, &host);
    tap(&mut kb, S_D_RMOD, &host);
    assert_eq!(kb.get_pointer_sniping_dpi(), 500);

    host.mods = modifiers::RSHIFT;
    tap(&mut kb, S_D_RMOD, &host);
    assert_eq!(kb.get_pointer_sniping_dpi(), 200);
    assert_eq!(flash_byte(&mut kb), 0x03);
}

#[test]
fn noeeprom_not_stored() {
    let mut flash = Flash::default();
    {
        let mut kb = keyboard(&A_DUX, &mut flash);
        kb.matrix_init();
        kb.cycle_pointer_default_dpi_noeeprom(true);
        kb.cycle_pointer_sniping_dpi_noeeprom(false);
        assert_eq!(kb.get_pointer_default_dpi(), 1200);
        assert_eq!(kb.get_pointer_sniping_dpi(), 500);
        assert_eq!(kb.device().last_cpi(), Some(1200));
    }
    // format plus the first boot config
    assert_eq!(flash.write_count(), 2);

    let mut kb = keyboard(&A_DUX, &mut flash);
    kb.matrix_init();
    assert_eq!(kb.get_pointer_default_dpi(), 1000);
    assert_eq!(kb.get_pointer_sniping_dpi(), 200);
}

#[test]
fn sniping_keys() {
    let mut flash = Flash::default();
    let host = HostStub::default();
    let mut kb = keyboard(&A_DUX, &mut flash);
    kb.matrix_init();

    assert!(kb.process_record(SNIPING, &press(), &host));
    assert!(kb.get_pointer_sniping_enabled());
    assert_eq!(kb.device().last_cpi(), Some(200));
    assert!(kb.process_record(SNIPING, &release(), &host));
    assert!(!kb.get_pointer_sniping_enabled());
    assert_eq!(kb.device().last_cpi(), Some(1000));

    tap(&mut kb, SNP_TOG, &host);
    assert!(kb.get_pointer_sniping_enabled());
    tap(&mut kb, SNP_TOG, &host);
    assert!(!kb.get_pointer_sniping_enabled());

    // modes are not stored
    assert_eq!(flash_byte(&mut kb), 3);
}

#[test]
fn dragscroll_keys() {
    let mut flash = Flash::default();
    let mut host = HostStub::default();
    let mut kb = keyboard(&A_DUX, &mut flash);
    kb.matrix_init();

    assert!(kb.process_record(DRGSCRL, &press(), &host));
    assert!(kb.get_pointer_dragscroll_enabled());
    assert_eq!(kb.device().last_cpi(), Some(100));
    assert!(kb.process_record(DRGSCRL, &release(), &host));
    assert!(!kb.get_pointer_dragscroll_enabled());

    tap(&mut kb, DRG_TOG, &host);
    assert!(kb.get_pointer_dragscroll_enabled());

    let report = kb.pointing_device_task(MouseReport::new(2, 7), 0, &mut host);
    assert_eq!(
        report,
        MouseReport {
            v: 1,
            ..Default::default()
        }
    );
    assert_eq!(
        kb.user().calls.last(),
        Some(&UserCall::PointingDeviceTask(report))
    );
    // scrolling does not trigger the pointer layer
    assert!(host.layer_calls.is_empty());

    tap(&mut kb, DRG_TOG, &host);
    assert!(!kb.get_pointer_dragscroll_enabled());
    assert_eq!(kb.device().last_cpi(), Some(1000));
}

#[test]
fn user_handles_first() {
    let mut flash = Flash::default();
    let host = HostStub::default();
    let mut kb = keyboard(&A_DUX, &mut flash);
    kb.matrix_init();
    kb.user_mut().handled_by_user = true;

    assert!(!kb.process_record(DPI_MOD, &press(), &host));
    assert_eq!(kb.get_pointer_default_dpi(), 1000);
    assert_eq!(
        kb.user().calls.last(),
        Some(&UserCall::ProcessRecord(DPI_MOD, true))
    );

    kb.user_mut().handled_by_user = false;
    assert!(kb.process_record(0x04, &press(), &host));
    assert!(kb.process_record(DPI_MOD, &press(), &host));
    assert_eq!(kb.get_pointer_default_dpi(), 1200);
}

#[test]
fn pointer_keycodes_disabled() {
    let mut flash = Flash::default();
    let mut host = HostStub::default();
    let mut kb = keyboard(&PLAIN, &mut flash);
    kb.matrix_init();

    tap(&mut kb, DPI_MOD, &host);
    tap(&mut kb, DRG_TOG, &host);
    assert_eq!(kb.get_pointer_default_dpi(), 1000);
    assert!(!kb.get_pointer_dragscroll_enabled());

    // no auto pointer layer either
    let report = kb.pointing_device_task(MouseReport::new(30, -30), 0, &mut host);
    assert_eq!(report, MouseReport::new(-30, -30));
    assert!(host.layer_calls.is_empty());
    assert!(kb.auto_pointer().is_none());
}

#[test]
fn slave_half_passes_through() {
    let mut flash = Flash::default();
    let mut host = HostStub::default();
    let mut kb: TestKeyboard = Keyboard::new(
        &CHARYBDIS_3X5,
        FlashEeconfig::new(&mut flash),
        DeviceStub::default(),
        BoardStub {
            master: false,
            ..Default::default()
        },
        UserStub::default(),
    );
    kb.matrix_init();
    kb.set_pointer_dragscroll_enabled(true);

    let report = kb.pointing_device_task(MouseReport::new(20, 20), 0, &mut host);
    assert_eq!(report, MouseReport::new(20, 20));
    assert!(host.layer_calls.is_empty());
    assert!(!kb
        .user()
        .calls
        .iter()
        .any(|c| matches!(c, UserCall::PointingDeviceTask(_))));
}

#[test]
fn charybdis_orientation() {
    let mut flash = Flash::default();
    let mut host = HostStub::default();
    let mut kb = keyboard(&CHARYBDIS_3X5, &mut flash);
    kb.matrix_init();
    kb.pointing_device_init();

    assert_eq!(kb.device().rotation, Some(-25));
    assert_eq!(kb.device().last_cpi(), Some(1000));

    let report = kb.pointing_device_task(MouseReport::new(5, 5), 0, &mut host);
    assert_eq!(report, MouseReport::new(5, -5));
    let report = kb.pointing_device_task(MouseReport::new(0, i16::MIN), 0, &mut host);
    assert_eq!(report.y, i16::MAX);
}

#[test]
fn auto_pointer_layer() {
    let mut flash = Flash::default();
    let mut host = HostStub::default();
    let mut kb = keyboard(&A_DUX, &mut flash);
    kb.matrix_init();

    kb.pointing_device_task(MouseReport::new(3, 3), 100, &mut host);
    assert!(!host.is_layer_on(4));

    kb.pointing_device_task(MouseReport::new(9, 0), 100, &mut host);
    assert!(host.is_layer_on(4));

    kb.matrix_scan(1099, &mut host);
    assert!(host.is_layer_on(4));
    kb.matrix_scan(1100, &mut host);
    assert!(!host.is_layer_on(4));
    assert_eq!(host.layer_calls, [(4, true), (4, false)]);
    assert_eq!(kb.user().calls.last(), Some(&UserCall::MatrixScan));
}

#[test]
fn layer_state_sniping() {
    let mut flash = Flash::default();
    let mut kb = keyboard(&SNIPING_LAYER, &mut flash);
    kb.matrix_init();

    assert_eq!(kb.layer_state_set(1 << 5 | 1), 1 << 5 | 1);
    assert!(kb.get_pointer_sniping_enabled());
    assert_eq!(kb.device().last_cpi(), Some(200));

    kb.layer_state_set(1);
    assert!(!kb.get_pointer_sniping_enabled());
    assert_eq!(kb.user().calls.last(), Some(&UserCall::LayerStateSet(1)));

    // without a sniping layer the layer state leaves sniping alone
    let mut flash = Flash::default();
    let host = HostStub::default();
    let mut kb = keyboard(&A_DUX, &mut flash);
    kb.matrix_init();
    tap(&mut kb, SNP_TOG, &host);
    kb.layer_state_set(0);
    assert!(kb.get_pointer_sniping_enabled());
}

#[test]
fn swap_hands() {
    let mut flash = Flash::default();
    let mut kb = keyboard(&A_DUX, &mut flash);

    assert!(!kb.is_swap_hands_on());
    kb.swap_hands_on();
    assert!(kb.is_swap_hands_on());
    assert_eq!(kb.swap_key(ScanKey::new(0, 0, true)), ScanKey::new(4, 4, true));
    assert_eq!(kb.swap_key(ScanKey::new(7, 1, true)), ScanKey::new(3, 0, true));

    kb.swap_hands_toggle();
    assert!(!kb.is_swap_hands_on());
    assert_eq!(kb.swap_key(ScanKey::new(0, 0, false)), ScanKey::new(4, 4, false));
    assert_eq!(kb.swap_key(ScanKey::new(7, 1, false)), ScanKey::new(3, 0, false));
    assert_eq!(kb.swap_key(ScanKey::new(0, 0, true)), ScanKey::new(0, 0, true));

    kb.swap_hands_on();
    kb.swap_hands_off();
    assert!(!kb.is_swap_hands_on());

    let mut flash = Flash::default();
    let mut kb = keyboard(&CHARYBDIS_3X5, &mut flash);
    kb.swap_hands_on();
    assert!(!kb.is_swap_hands_on());
    assert_eq!(kb.swap_key(ScanKey::new(0, 0, true)), ScanKey::new(0, 0, true));
}

#[test]
fn mode_keys_not_stored() {
    let mut flash = Flash::default();
    let host = HostStub::default();
    {
        let mut kb = keyboard(&A_DUX, &mut flash);
        kb.matrix_init();

        tap(&mut kb, SNIPING, &host);
        tap(&mut kb, SNP_TOG, &host);
        assert!(kb.get_pointer_sniping_enabled());
        tap(&mut kb, DRGSCRL, &host);
        tap(&mut kb, DRG_TOG, &host);
        assert!(kb.get_pointer_dragscroll_enabled());
        tap(&mut kb, DRG_TOG, &host);
        tap(&mut kb, SNP_TOG, &host);

        kb.set_pointer_sniping_enabled(true);
        kb.set_pointer_dragscroll_enabled(true);
        assert_eq!(kb.device().last_cpi(), Some(100));
    }
    // format plus the first boot config
    assert_eq!(flash.write_count(), 2);
    assert_eq!(flash.buf[KB_BYTE], 3);
}

#[test]
fn flash_failure_keeps_memory_config() {
    let mut flash = Flash::default();
    flash.fail_with = Some(FlashStubError::Failed);
    let host = HostStub::default();
    let mut kb = keyboard(&A_DUX, &mut flash);

    kb.matrix_init();
    assert_eq!(kb.get_pointer_default_dpi(), 1000);
    assert_eq!(kb.user().calls, [UserCall::EeconfigInit, UserCall::MatrixInit]);

    tap(&mut kb, DPI_MOD, &host);
    assert_eq!(kb.get_pointer_default_dpi(), 1200);
    assert_eq!(kb.device().last_cpi(), Some(1200));
}

#[test]
fn unreadable_flash_keeps_first_boot_config() {
    let mut flash = Flash::default();
    flash.fail_reads = Some(FlashStubError::Failed);
    let host = HostStub::default();
    let mut kb = keyboard(&A_DUX, &mut flash);

    kb.matrix_init();
    assert_eq!(kb.get_pointer_default_dpi(), 1000);
    assert_eq!(kb.get_pointer_sniping_dpi(), 200);
    assert_eq!(kb.user().calls, [UserCall::MatrixInit]);

    kb.pointing_device_init();
    assert_eq!(kb.device().last_cpi(), Some(1000));

    tap(&mut kb, DPI_MOD, &host);
    assert_eq!(kb.get_pointer_default_dpi(), 1200);
    assert_eq!(kb.device().last_cpi(), Some(1200));
    drop(kb);
    assert_eq!(flash.write_count(), 0);
}

#[test]
fn kb_word_read_failure_keeps_first_boot_config() {
    let mut flash = Flash::default();
    {
        let mut ee = FlashEeconfig::<_, 0>::new(&mut flash);
        ee.initialize().unwrap();
        ee.update_kb(0x05).unwrap();
    }
    // the format check reads, loading the keyboard word fails
    flash.fail_reads = Some(FlashStubError::Failed);
    flash.good_reads = 1;
    let mut kb = keyboard(&A_DUX, &mut flash);

    kb.matrix_init();
    assert_eq!(kb.get_pointer_default_dpi(), 1000);
    assert!(!kb.get_pointer_sniping_enabled());
    assert_eq!(kb.user().calls, [UserCall::MatrixInit]);
}
