use io_lib::IoManager;
use common::buttons::*;
use common::constants::{IOPIN_TH, IOPIN_TL, IOPIN_TR};
use common::io_type::IoType;
use common::ports::{PhysPort, VirtPort};
use crate::helpers::with_device;

fn setup(buttons: u32) -> IoManager {
    let mut io = with_device(VirtPort::Port1, IoType::Xe1ap);
    io.set_buttons(VirtPort::Port1, buttons);
    io.set_analog(VirtPort::Port1, 0x12, 0x34, 0x56);
    io.write_ctrl_md(PhysPort::Port1, IOPIN_TH);
    io.write_data_md(PhysPort::Port1, IOPIN_TH);
    io
}

fn start(io: &mut IoManager) {
    io.write_data_md(PhysPort::Port1, IOPIN_TH);
    io.write_data_md(PhysPort::Port1, 0x00);
}

fn reads(io: &mut IoManager, n: usize) -> Vec<u8> {
    (0..n).map(|_| io.read_data_md(PhysPort::Port1)).collect()
}

#[test]
fn idle_until_th_falls() {
    let mut io = setup(BUTTONS_RELEASED);
    assert_eq!(reads(&mut io, 3), vec![0x7F, 0x7F, 0x7F]);
}

#[test]
fn full_acquisition() {
    let mut io = setup(!(BTN_XE1AP_A | BTN_XE1AP_START));
    start(&mut io);
    let vals = reads(&mut io, 48);

    for (cycle, &val) in vals.iter().enumerate() {
        let c = cycle % 8;
        assert_eq!(val & IOPIN_TL != 0, c >= 4, "TL at cycle {cycle}");
        assert_eq!(val & IOPIN_TR != 0, c % 4 == 0, "TR at cycle {cycle}");
    }

    let nibbles: Vec<(u8, u8)> = vals.chunks(8).map(|seq| (seq[1] & 0x0F, seq[5] & 0x0F)).collect();
    assert_eq!(nibbles, vec![
        // E1 E2 Start Select, A B C D
        (0xD, 0x7),
        (0x1, 0x3),
        (0x5, 0x0),
        (0x2, 0x4),
        (0x6, 0x0),
        // A' B' A B
        (0xD, 0xF),
    ]);

    // Done.
    assert_eq!(reads(&mut io, 2), vec![0x3F, 0x3F]);
}

#[test]
fn restart_needs_reads() {
    let mut io = setup(BUTTONS_RELEASED);
    start(&mut io);
    assert_eq!(reads(&mut io, 2), vec![0x2F, 0x0F]);

    // Too soon: carries on from cycle 2.
    start(&mut io);
    assert_eq!(reads(&mut io, 1), vec![0x0F]);

    start(&mut io);
    assert_eq!(reads(&mut io, 1), vec![0x2F]);
}

#[test]
fn centered_by_default() {
    let mut io = with_device(VirtPort::Port1, IoType::Xe1ap);
    io.write_ctrl_md(PhysPort::Port1, IOPIN_TH);
    start(&mut io);
    let vals = reads(&mut io, 40);
    // X hi, Y hi, Z hi
    assert_eq!(vals[9] & 0x0F, 0x8);
    assert_eq!(vals[13] & 0x0F, 0x8);
    assert_eq!(vals[17] & 0x0F, 0x0);
}
