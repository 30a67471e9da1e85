use io_lib::IoManager;
use common::buttons::*;
use common::constants::IOPIN_TH;
use common::io_type::IoType;
use common::ports::{PhysPort, VirtPort};
use crate::helpers::{counter, th, with_device, write_read};

fn setup(buttons: u32) -> IoManager {
    let mut io = with_device(VirtPort::Port1, IoType::SixButton);
    io.set_buttons(VirtPort::Port1, buttons);
    io.write_ctrl_md(PhysPort::Port1, IOPIN_TH);
    io
}

// TH=1,0,1,0,... for `n` writes.
fn toggle(io: &mut IoManager, n: usize) -> Vec<u8> {
    (0..n).map(|i| write_read(io, PhysPort::Port1, th(i % 2 == 0))).collect()
}

#[test]
fn eight_writes() {
    let mut io = setup(0xFFFFFFBF);
    let reads = toggle(&mut io, 8);

    // D1CBRLDU
    assert_eq!(reads[0], 0x7F);
    assert_eq!(reads[2], 0x7F);
    assert_eq!(reads[4], 0x7F);
    // D0SA00DU
    assert_eq!(reads[1], 0x23);
    assert_eq!(reads[3], 0x23);
    // D0SA0000
    assert_eq!(reads[5], 0x20);
    // D1CBMXYZ
    assert_eq!(reads[6], 0x7F);
    // D0SA1111
    assert_eq!(reads[7], 0x2F);
}

#[test]
fn extra_buttons() {
    let mut io = setup(!(BTN_X | BTN_MODE | BTN_C));
    let reads = toggle(&mut io, 8);
    assert_eq!(reads[0], 0x5F);
    assert_eq!(reads[6], 0x53);
}

#[test]
fn counter_steps() {
    let mut io = setup(BUTTONS_RELEASED);
    let mut seen = Vec::new();
    for i in 0..10 {
        write_read(&mut io, PhysPort::Port1, th(i % 2 == 0));
        if i % 2 == 0 {
            seen.push(counter(&io, VirtPort::Port1));
        }
    }
    assert_eq!(seen, vec![0, 2, 4, 6, 0]);
}

#[test]
fn scanline_reset() {
    let mut io = setup(BUTTONS_RELEASED);
    toggle(&mut io, 3);
    assert_eq!(counter(&io, VirtPort::Port1), 2);

    for _ in 0..25 {
        io.do_scanline();
    }
    assert_eq!(counter(&io, VirtPort::Port1), 2);

    io.do_scanline();
    assert_eq!(counter(&io, VirtPort::Port1), 0);

    // Back at the start: TH low is the plain 3-button read.
    let reads: Vec<u8> = [0x00, 0x40, 0x00].iter().map(|&d| write_read(&mut io, PhysPort::Port1, d)).collect();
    assert_eq!(reads, vec![0x33, 0x7F, 0x33]);
}

#[test]
fn no_reset_while_toggling() {
    let mut io = setup(BUTTONS_RELEASED);
    toggle(&mut io, 3);
    for _ in 0..20 {
        io.do_scanline();
    }
    // A rising edge restarts the count.
    write_read(&mut io, PhysPort::Port1, 0x00);
    write_read(&mut io, PhysPort::Port1, 0x40);
    for _ in 0..20 {
        io.do_scanline();
    }
    assert_eq!(counter(&io, VirtPort::Port1), 4);
    assert_eq!(write_read(&mut io, PhysPort::Port1, 0x00), 0x30);
}
