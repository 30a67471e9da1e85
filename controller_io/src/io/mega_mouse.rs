use crate::io::{PortRegs, Protocol, SubPorts};

use common::buttons::BUTTONS_RELEASED_ACTIVE_HIGH;
use common::constants::{IOPIN_TH, IOPIN_TL, IOPIN_TR};
use common::io_type::IoType;
use common::misc::{changed, falling, Nibbles};

/// Motion and flags captured at the start of a transfer.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MouseLatch {
    // Y overflow, X overflow, Y sign, X sign
    pub flags: u8,
    pub x: u8,
    pub y: u8,
}

impl MouseLatch {
    const X_SIGN: u8 = 0x01;
    const Y_SIGN: u8 = 0x02;
    const X_OVERFLOW: u8 = 0x04;
    const Y_OVERFLOW: u8 = 0x08;

    // 9-bit signed: a sign flag plus 8 data bits. Anything larger saturates.
    fn axis(delta: i32) -> (u8, bool, bool) {
        if delta > 0xFF {
            (0xFF, false, true)
        } else if delta < -0x100 {
            (0x00, true, true)
        } else {
            (delta as u8, delta < 0, false)
        }
    }

    pub fn new(dx: i32, dy: i32) -> Self {
        let (x, x_sign, x_ovf) = Self::axis(dx);
        let (y, y_sign, y_ovf) = Self::axis(dy);

        let mut flags = 0;
        if x_sign {
            flags |= Self::X_SIGN;
        }
        if y_sign {
            flags |= Self::Y_SIGN;
        }
        if x_ovf {
            flags |= Self::X_OVERFLOW;
        }
        if y_ovf {
            flags |= Self::Y_OVERFLOW;
        }

        MouseLatch { flags, x, y }
    }
}

/// Sega Mega Mouse. After TH goes low, each TR transition clocks out the next
/// nibble: ID, two fillers, sign/overflow, buttons, then X and Y a nibble at a
/// time. Buttons are active-high.
#[derive(Debug, Clone)]
pub struct MegaMouse {
    old_lines: u8,
    acc_x: i32,
    acc_y: i32,
    latch: MouseLatch,
}

impl Default for MegaMouse {
    fn default() -> Self {
        Self::new()
    }
}

impl MegaMouse {
    pub const ID: u8 = 0x0B;
    pub const LAST_PHASE: i32 = 9;

    pub fn new() -> Self {
        MegaMouse {
            old_lines: 0xFF,
            acc_x: 0,
            acc_y: 0,
            latch: MouseLatch::default(),
        }
    }

    /// Accumulate host motion. Host Y grows downward, the mouse reports up as
    /// positive.
    pub fn move_rel(&mut self, dx: i32, dy: i32) {
        self.acc_x = self.acc_x.saturating_add(dx);
        self.acc_y = self.acc_y.saturating_sub(dy);
    }

    pub fn accumulated(&self) -> (i32, i32) {
        (self.acc_x, self.acc_y)
    }

    // Capture the motion so far and start accumulating afresh.
    pub fn latch(&mut self) {
        self.latch = MouseLatch::new(self.acc_x, self.acc_y);
        self.acc_x = 0;
        self.acc_y = 0;
    }

    pub fn latched(&self) -> MouseLatch {
        self.latch
    }

    pub fn nibble(&self, phase: i32, buttons: u32) -> u8 {
        match phase {
            0 => 0x00,
            1 => Self::ID,
            2 | 3 => 0x0F,
            4 => self.latch.flags,
            5 => (buttons & 0x0F) as u8,
            6 => self.latch.x.hi_nibble(),
            7 => self.latch.x.lo_nibble(),
            8 => self.latch.y.hi_nibble(),
            _ => self.latch.y.lo_nibble(),
        }
    }
}

impl Protocol for MegaMouse {
    fn io_type(&self) -> IoType {
        IoType::MegaMouse
    }

    fn reset_dev(&mut self, regs: &mut PortRegs) {
        regs.counter = 0;
        self.old_lines = regs.bus_cache;
        self.acc_x = 0;
        self.acc_y = 0;
        self.latch = MouseLatch::default();
    }

    fn update(&mut self, regs: &mut PortRegs, _: &mut SubPorts) {
        let lines = regs.bus_cache;
        if regs.check_input_line(IOPIN_TH) {
            regs.counter = 0;
        } else if falling(self.old_lines, lines, IOPIN_TH) {
            regs.counter = 1;
            self.latch();
        } else if changed(self.old_lines, lines, IOPIN_TR) && regs.counter < Self::LAST_PHASE {
            regs.counter += 1;
        }
        self.old_lines = lines;

        regs.output_data = if regs.counter == 0 {
            IOPIN_TL
        } else {
            self.nibble(regs.counter, regs.buttons) | regs.tl_from_tr()
        };
    }

    fn released_buttons(&self) -> u32 {
        BUTTONS_RELEASED_ACTIVE_HIGH
    }
}
