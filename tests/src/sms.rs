use io_lib::IoManager;
use common::buttons::*;
use common::constants::PIN58_GND;
use common::io_type::IoType;
use common::ports::{PhysPort, VirtPort};

fn setup() -> IoManager {
    let mut io = IoManager::new();
    io.set_dev_type(VirtPort::Port1, IoType::TwoButton).unwrap();
    io.set_dev_type(VirtPort::Port2, IoType::TwoButton).unwrap();
    io.write_ctrl_sms(0xFF);
    io
}

#[test]
fn released() {
    let io = setup();
    assert_eq!(io.read_data_sms_dc(), 0xFF);
    assert_eq!(io.read_data_sms_dd(), 0xFF);
}

#[test]
fn dc_dd_split() {
    let mut io = setup();
    io.set_buttons(VirtPort::Port1, !(BTN_UP | BTN_1));
    io.set_buttons(VirtPort::Port2, !(BTN_DOWN | BTN_LEFT | BTN_2));

    // Port A up and 1, port B down.
    assert_eq!(io.read_data_sms_dc(), 0x6E);
    // Port B left and 2.
    assert_eq!(io.read_data_sms_dd(), 0xF6);
}

#[test]
fn reset_button() {
    let mut io = setup();
    io.set_reset_button(true);
    assert_eq!(io.read_data_sms_dd(), 0xEF);
    io.set_reset_button(false);
    assert_eq!(io.read_data_sms_dd(), 0xFF);
}

#[test]
fn th_output() {
    let mut io = setup();
    // Port A TH output low, everything else input.
    io.write_ctrl_sms(0xDD);
    assert_eq!(io.read_ctrl_md(PhysPort::Port1), 0x40);
    assert_eq!(io.read_ctrl_md(PhysPort::Port2), 0x00);
    assert_eq!(io.read_data_sms_dd() & 0xC0, 0x80);

    // Both TH outputs, port B high.
    io.write_ctrl_sms(0x85);
    assert_eq!(io.read_data_sms_dd() & 0xC0, 0x80);
    io.write_ctrl_sms(0xC5);
    assert_eq!(io.read_data_sms_dd() & 0xC0, 0x80);
    io.write_ctrl_sms(0x25);
    assert_eq!(io.read_data_sms_dd() & 0xC0, 0x40);
}

#[test]
fn pause() {
    let mut io = setup();
    assert!(!io.is_pause_sms());
    assert_eq!(io.read_start_gg(), 0x80);

    io.set_buttons(VirtPort::Port2, !BTN_PAUSE);
    assert!(io.is_pause_sms());
    assert_eq!(io.read_start_gg(), 0x00);
}

#[test]
fn pause_through_master_tap() {
    let mut io = IoManager::new();
    io.set_dev_type(VirtPort::Port1, IoType::MasterTap).unwrap();
    io.set_dev_type(VirtPort::Mt1C, IoType::TwoButton).unwrap();
    io.set_buttons(VirtPort::Mt1C, !BTN_PAUSE);
    assert!(io.is_pause_sms());
}

#[test]
fn pin8_not_grounded() {
    let mut io = setup();
    io.set_buttons(VirtPort::Port1, !BTN_UP);
    assert_eq!(io.read_data_sms_dc() & 0x3F, 0x3E);
    io.set_pin58(PhysPort::Port1, PIN58_GND);
    assert_eq!(io.read_data_sms_dc() & 0x3F, 0x3F);
}
