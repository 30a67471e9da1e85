use crate::io::{PortRegs, Protocol, SubPorts};

use common::constants::IOPIN_TH;
use common::io_type::IoType;

/// Standard Mega Drive control pad. TH picks which half of the buttons is on
/// the lines.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreeButton();

impl ThreeButton {
    // TH=1: ?1CBRLDU
    pub fn th_high(buttons: u8) -> u8 {
        (buttons & 0x3F) | 0x40
    }

    // TH=0: ?0SA00DU. Left and right held low identify the pad.
    pub fn th_low(buttons: u8) -> u8 {
        ((buttons & 0xC0) >> 2) | (buttons & 0x03)
    }
}

impl Protocol for ThreeButton {
    fn io_type(&self) -> IoType {
        IoType::ThreeButton
    }

    fn update(&mut self, regs: &mut PortRegs, _: &mut SubPorts) {
        let buttons = regs.buttons_lo();
        regs.output_data = if regs.check_input_line(IOPIN_TH) {
            Self::th_high(buttons)
        } else {
            Self::th_low(buttons)
        };
    }
}
