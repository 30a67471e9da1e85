use io_lib::IoManager;
use common::buttons::*;
use common::constants::IOPIN_TH;
use common::ports::{PhysPort, VirtPort};
use crate::helpers::write_read;

fn setup(buttons: u32) -> IoManager {
    let mut io = IoManager::new();
    io.set_buttons(VirtPort::Port1, buttons);
    io.write_ctrl_md(PhysPort::Port1, IOPIN_TH);
    io
}

#[test]
fn released() {
    let mut io = setup(BUTTONS_RELEASED);
    assert_eq!(write_read(&mut io, PhysPort::Port1, 0x40), 0x7F);
    // Left and right read low with TH=0.
    assert_eq!(write_read(&mut io, PhysPort::Port1, 0x00), 0x33);
}

#[test]
fn th_high() {
    // ?1CBRLDU
    let mut io = setup(!(BTN_UP | BTN_C));
    assert_eq!(write_read(&mut io, PhysPort::Port1, 0x40), 0x5E);

    let mut io = setup(!(BTN_RIGHT | BTN_B));
    assert_eq!(write_read(&mut io, PhysPort::Port1, 0x40), 0x67);
}

#[test]
fn th_low() {
    // ?0SA00DU
    let mut io = setup(!BTN_START);
    assert_eq!(write_read(&mut io, PhysPort::Port1, 0x00), 0x13);

    let mut io = setup(0xFFFFFFBF);
    assert_eq!(write_read(&mut io, PhysPort::Port1, 0x00), 0x23);

    let mut io = setup(!BTN_DOWN);
    assert_eq!(write_read(&mut io, PhysPort::Port1, 0x00), 0x31);
}

#[test]
fn pure_function_of_inputs() {
    let mut io = setup(!(BTN_A | BTN_LEFT));
    let first: Vec<u8> = [0x40, 0x00, 0x40, 0x00].iter().map(|&d| write_read(&mut io, PhysPort::Port1, d)).collect();
    let second: Vec<u8> = [0x40, 0x00, 0x40, 0x00].iter().map(|&d| write_read(&mut io, PhysPort::Port1, d)).collect();
    assert_eq!(first, second);
    assert_eq!(first, vec![0x7B, 0x23, 0x7B, 0x23]);
}

#[test]
fn port2_independent() {
    let mut io = IoManager::new();
    io.set_buttons(VirtPort::Port2, !BTN_UP);
    io.write_ctrl_md(PhysPort::Port1, IOPIN_TH);
    io.write_ctrl_md(PhysPort::Port2, IOPIN_TH);
    assert_eq!(write_read(&mut io, PhysPort::Port1, 0x40), 0x7F);
    assert_eq!(write_read(&mut io, PhysPort::Port2, 0x40), 0x7E);
}

#[test]
fn constrain_dpad() {
    let mut io = IoManager::new();
    io.write_ctrl_md(PhysPort::Port1, IOPIN_TH);

    io.set_buttons(VirtPort::Port1, !(BTN_UP | BTN_DOWN));
    assert_eq!(write_read(&mut io, PhysPort::Port1, 0x40), 0x7C);

    io.set_constrain_dpad(true);
    io.set_buttons(VirtPort::Port1, !(BTN_UP | BTN_DOWN | BTN_LEFT));
    assert_eq!(write_read(&mut io, PhysPort::Port1, 0x40), 0x7B);
}
