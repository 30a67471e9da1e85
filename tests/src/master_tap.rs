use io_lib::IoManager;
use common::buttons::*;
use common::constants::IOPIN_TH;
use common::io_type::IoType;
use common::ports::{PhysPort, VirtPort};
use crate::helpers::{counter, write_read};

fn setup() -> IoManager {
    let mut io = IoManager::new();
    io.set_dev_type(VirtPort::Port1, IoType::MasterTap).unwrap();
    io.set_dev_type(VirtPort::Mt1A, IoType::TwoButton).unwrap();
    io.set_dev_type(VirtPort::Mt1B, IoType::TwoButton).unwrap();
    io.set_buttons(VirtPort::Mt1A, !BTN_1);
    io.set_buttons(VirtPort::Mt1B, !BTN_2);
    io.write_ctrl_md(PhysPort::Port1, IOPIN_TH);
    io.write_data_md(PhysPort::Port1, IOPIN_TH);
    io
}

#[test]
fn cycles_on_th_falling() {
    let mut io = setup();
    assert_eq!(io.read_data_md(PhysPort::Port1), 0x6F);

    // Pad B
    assert_eq!(write_read(&mut io, PhysPort::Port1, 0x00), 0x1F);
    assert_eq!(write_read(&mut io, PhysPort::Port1, 0x40), 0x5F);
    // C and D are empty.
    assert_eq!(write_read(&mut io, PhysPort::Port1, 0x00), 0x3F);
    write_read(&mut io, PhysPort::Port1, 0x40);
    assert_eq!(write_read(&mut io, PhysPort::Port1, 0x00), 0x3F);
    write_read(&mut io, PhysPort::Port1, 0x40);
    // Wraps to A.
    assert_eq!(write_read(&mut io, PhysPort::Port1, 0x00), 0x2F);
}

#[test]
fn th_high_timeout() {
    let mut io = setup();
    write_read(&mut io, PhysPort::Port1, 0x00);
    write_read(&mut io, PhysPort::Port1, 0x40);
    assert_eq!(counter(&io, VirtPort::Port1), 1);

    for _ in 0..16 {
        io.do_scanline();
    }
    assert_eq!(io.read_data_md(PhysPort::Port1), 0x5F);

    io.do_scanline();
    assert_eq!(counter(&io, VirtPort::Port1), 0);
    assert_eq!(io.read_data_md(PhysPort::Port1), 0x6F);
}

#[test]
fn no_timeout_while_th_low() {
    let mut io = setup();
    write_read(&mut io, PhysPort::Port1, 0x00);
    for _ in 0..40 {
        io.do_scanline();
    }
    assert_eq!(counter(&io, VirtPort::Port1), 1);
}

#[test]
fn only_sms_pads() {
    let mut io = IoManager::new();
    io.set_dev_type(VirtPort::Port2, IoType::MasterTap).unwrap();
    assert!(io.set_dev_type(VirtPort::Mt2A, IoType::ThreeButton).is_err());
    assert!(io.set_dev_type(VirtPort::Mt2A, IoType::TwoButton).is_ok());
    assert!(io.set_dev_type(VirtPort::PortExt, IoType::MasterTap).is_err());
}
