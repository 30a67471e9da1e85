use io_lib::{IoEvent, IoManager};
use common::buttons::*;
use common::io_type::IoType;
use common::ports::{PhysPort, VirtPort};
use crate::helpers::with_device;

fn tap(io: &mut IoManager, button: u32) {
    io.set_buttons(VirtPort::Port1, !button);
    io.set_buttons(VirtPort::Port1, BUTTONS_RELEASED);
}

#[test]
fn page_buttons() {
    let mut io = with_device(VirtPort::Port1, IoType::Pico);
    assert_eq!(io.pico_page(PhysPort::Port1), Some(0));

    io.set_buttons(VirtPort::Port1, !BTN_PICO_PAGE_DOWN);
    assert_eq!(io.pico_page(PhysPort::Port1), Some(0));
    io.set_buttons(VirtPort::Port1, BUTTONS_RELEASED);
    assert_eq!(io.pico_page(PhysPort::Port1), Some(1));
    assert_eq!(io.drain_events(), vec![IoEvent::PicoPageChanged { page: 1 }]);
    assert!(io.drain_events().is_empty());

    tap(&mut io, BTN_PICO_PAGE_DOWN);
    tap(&mut io, BTN_PICO_PAGE_DOWN);
    assert_eq!(io.pico_page(PhysPort::Port1), Some(3));
    assert_eq!(io.pico_page_reg(PhysPort::Port1), Some(0x07));

    tap(&mut io, BTN_PICO_PAGE_UP);
    assert_eq!(io.pico_page(PhysPort::Port1), Some(2));
    assert_eq!(io.drain_events().len(), 3);
}

#[test]
fn page_clamped() {
    let mut io = with_device(VirtPort::Port1, IoType::Pico);
    tap(&mut io, BTN_PICO_PAGE_UP);
    assert_eq!(io.pico_page(PhysPort::Port1), Some(0));
    assert!(io.drain_events().is_empty());

    for _ in 0..10 {
        tap(&mut io, BTN_PICO_PAGE_DOWN);
    }
    assert_eq!(io.pico_page(PhysPort::Port1), Some(7));
    assert_eq!(io.pico_page_reg(PhysPort::Port1), Some(0x7F));
    assert_eq!(io.drain_events().len(), 7);
}

#[test]
fn all_inputs() {
    let mut io = with_device(VirtPort::Port1, IoType::Pico);
    io.write_ctrl_md(PhysPort::Port1, 0xFF);
    assert_eq!(io.read_ctrl_md(PhysPort::Port1), 0x00);

    io.set_buttons(VirtPort::Port1, !(BTN_PICO_RED | BTN_LEFT));
    assert_eq!(io.read_data_md(PhysPort::Port1) & 0x7F, 0x6B);
}

#[test]
fn not_a_pico() {
    let io = IoManager::new();
    assert_eq!(io.pico_page(PhysPort::Port1), None);
    assert_eq!(io.pico_page_reg(PhysPort::Port2), None);
}
