use io_lib::IoManager;
use common::buttons::*;
use common::constants::{IOPIN_TH, IOPIN_TL, IOPIN_TR};
use common::io_type::IoType;
use common::ports::{PhysPort, VirtPort};
use crate::helpers::{tr, with_device, write_read};

fn setup() -> IoManager {
    let mut io = with_device(VirtPort::Port1, IoType::MegaMouse);
    io.write_ctrl_md(PhysPort::Port1, IOPIN_TH | IOPIN_TR);
    io
}

// TH low, then 8 TR transitions. Returns the nibbles for phases 1-9.
fn transfer(io: &mut IoManager) -> Vec<u8> {
    write_read(io, PhysPort::Port1, IOPIN_TH | IOPIN_TR);
    let mut nibbles = vec![write_read(io, PhysPort::Port1, IOPIN_TR) & 0x0F];
    for i in 0..8 {
        let tr_high = i % 2 == 1;
        let val = write_read(io, PhysPort::Port1, tr(tr_high));
        assert_eq!(val & IOPIN_TL != 0, tr_high, "TL at phase {}", i + 2);
        nibbles.push(val & 0x0F);
    }
    nibbles
}

#[test]
fn idle() {
    let mut io = setup();
    assert_eq!(write_read(&mut io, PhysPort::Port1, IOPIN_TH | IOPIN_TR), 0x70);
}

#[test]
fn motion_and_buttons() {
    let mut io = setup();
    io.set_buttons(VirtPort::Port1, BTN_MOUSE_LEFT | BTN_MOUSE_START);
    io.mouse_move(VirtPort::Port1, 0x20, 0);
    io.mouse_move(VirtPort::Port1, 0x05, -0x13);

    assert_eq!(transfer(&mut io), vec![0xB, 0xF, 0xF, 0x0, 0x9, 0x2, 0x5, 0x1, 0x3]);

    // Motion was consumed by the latch.
    assert_eq!(transfer(&mut io), vec![0xB, 0xF, 0xF, 0x0, 0x9, 0x0, 0x0, 0x0, 0x0]);
}

#[test]
fn negative_and_overflow() {
    let mut io = setup();
    // Host down is mouse down: negative Y.
    io.mouse_move(VirtPort::Port1, -300, 2);

    let nibbles = transfer(&mut io);
    // Y overflow clear, X overflow set, Y sign set, X sign set.
    assert_eq!(nibbles[3], 0x7);
    assert_eq!(&nibbles[5..], &[0x0, 0x0, 0xF, 0xE]);
}

#[test]
fn stops_at_last_phase() {
    let mut io = setup();
    io.mouse_move(VirtPort::Port1, 0, -0x42);
    transfer(&mut io);
    assert_eq!(write_read(&mut io, PhysPort::Port1, IOPIN_TR) & 0x0F, 0x2);
    assert_eq!(write_read(&mut io, PhysPort::Port1, 0x00) & 0x0F, 0x2);
}
