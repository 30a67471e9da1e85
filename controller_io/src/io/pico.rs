use std::collections::VecDeque;

use crate::io::{IoEvent, PortRegs, Protocol, SubPorts};

use common::buttons::{BTN_PICO_PAGE_DOWN, BTN_PICO_PAGE_UP, BUTTONS_RELEASED};
use common::io_type::IoType;

use log::info;

/// Sega Pico controller. The lines are all inputs and it drives the button
/// byte as-is. It also owns the storyware page, turned with the page buttons.
#[derive(Debug, Clone)]
pub struct Pico {
    old_buttons: u32,
    page: u8,
    events: VecDeque<IoEvent>,
}

impl Default for Pico {
    fn default() -> Self {
        Self::new()
    }
}

impl Pico {
    pub const MAX_PAGE: u8 = 7;

    pub fn new() -> Self {
        Pico {
            old_buttons: BUTTONS_RELEASED,
            page: 0,
            events: VecDeque::new(),
        }
    }

    pub fn page(&self) -> u8 {
        self.page
    }

    /// Page register value: one bit set per page turned.
    pub fn page_reg(&self) -> u8 {
        ((1u16 << self.page) - 1) as u8
    }

    pub fn set_page(&mut self, page: u8) {
        let page = page.min(Self::MAX_PAGE);
        if page != self.page {
            self.page = page;
            info!("Pico page {}", page);
            self.events.push_back(IoEvent::PicoPageChanged { page });
        }
    }

    // Pages turn when the button is let go.
    fn check_page_buttons(&mut self, buttons: u32) {
        let released = !self.old_buttons & buttons;
        self.old_buttons = buttons;

        if released & BTN_PICO_PAGE_DOWN != 0 && self.page < Self::MAX_PAGE {
            self.set_page(self.page + 1);
        }
        if released & BTN_PICO_PAGE_UP != 0 && self.page > 0 {
            self.set_page(self.page - 1);
        }
    }
}

impl Protocol for Pico {
    fn io_type(&self) -> IoType {
        IoType::Pico
    }

    fn reset_dev(&mut self, regs: &mut PortRegs) {
        regs.counter = 0;
        self.old_buttons = regs.buttons;
    }

    fn update(&mut self, regs: &mut PortRegs, _: &mut SubPorts) {
        regs.ctrl = 0;
        regs.update_bus_cache();

        self.check_page_buttons(regs.buttons);
        regs.output_data = regs.buttons as u8;
    }

    fn take_event(&mut self) -> Option<IoEvent> {
        self.events.pop_front()
    }
}
