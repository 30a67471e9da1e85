use crate::io::{PortRegs, Protocol, SubPorts};

use common::buttons::*;
use common::constants::OPEN_BUS;
use common::io_type::IoType;
use common::misc::ActiveLow;

/// ColecoVision hand controller, through an SMS-style adapter. Pins 5 and 8
/// select what it drives: the joystick and left fire when pin 8 is grounded,
/// the keypad and right fire when pin 5 is. Both at once is allowed; the
/// results are ANDed together.
#[derive(Debug, Clone, Default)]
pub struct ColecoVision();

impl ColecoVision {
    const JOYSTICK_SELECT: u8 = 0x01;
    const KEYPAD_SELECT: u8 = 0x02;

    const FIRE_BIT: u8 = 0x40;

    // Keypad codes on the low nibble, in key order 0-9, then * and #.
    const KEY_CODES: [(u32, u8); 12] = [
        (cv_key(0), 0x0A),
        (cv_key(1), 0x0D),
        (cv_key(2), 0x07),
        (cv_key(3), 0x0C),
        (cv_key(4), 0x02),
        (cv_key(5), 0x03),
        (cv_key(6), 0x0E),
        (cv_key(7), 0x05),
        (cv_key(8), 0x01),
        (cv_key(9), 0x0B),
        (BTN_CV_STAR, 0x09),
        (BTN_CV_HASH, 0x06),
    ];

    // Joystick bits are in a different order than the MD pads.
    const JOYSTICK: [(u32, u8); 5] = [
        (BTN_UP, 0x01),
        (BTN_RIGHT, 0x02),
        (BTN_DOWN, 0x04),
        (BTN_LEFT, 0x08),
        (BTN_CV_FIRE_L, Self::FIRE_BIT),
    ];

    pub fn output(pin58: u8, buttons: u32) -> u8 {
        let mut val = OPEN_BUS;

        if pin58 & Self::JOYSTICK_SELECT == 0 {
            for &(btn, bit) in Self::JOYSTICK.iter() {
                if buttons.is_pressed(btn) {
                    val &= !bit;
                }
            }
        }

        if pin58 & Self::KEYPAD_SELECT == 0 {
            // Multiple keys short the matrix lines together, so e.g. 1+2
            // reads as 7. That matches the hardware.
            for &(key, code) in Self::KEY_CODES.iter() {
                if buttons.is_pressed(key) {
                    val &= 0x70 | code;
                }
            }
            if buttons.is_pressed(BTN_CV_FIRE_R) {
                val &= !Self::FIRE_BIT;
            }
        }

        val
    }
}

impl Protocol for ColecoVision {
    fn io_type(&self) -> IoType {
        IoType::ColecoVision
    }

    fn update(&mut self, regs: &mut PortRegs, _: &mut SubPorts) {
        regs.output_data = Self::output(regs.pin58, regs.buttons);
    }
}
