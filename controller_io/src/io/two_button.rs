use crate::io::{PortRegs, Protocol, SubPorts};

use common::buttons::BTN_PAUSE;
use common::constants::PIN58_GND;
use common::io_type::IoType;
use common::misc::ActiveLow;

/// Master System pad: the buttons sit on the lines directly.
#[derive(Debug, Default, Clone, Copy)]
pub struct TwoButton();

impl TwoButton {
    pub fn is_pause_pressed(regs: &PortRegs) -> bool {
        regs.buttons.is_pressed(BTN_PAUSE)
    }
}

impl Protocol for TwoButton {
    fn io_type(&self) -> IoType {
        IoType::TwoButton
    }

    fn update(&mut self, regs: &mut PortRegs, _: &mut SubPorts) {
        regs.output_data = if regs.pin58 & PIN58_GND != 0 {
            // Pin 8 isn't grounded.
            0xFF
        } else {
            0xC0 | (regs.buttons_lo() & 0x3F)
        };
    }
}
