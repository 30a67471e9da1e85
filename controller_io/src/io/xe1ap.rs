use crate::io::{PortRegs, Protocol, SubPorts};

use common::buttons::*;
use common::constants::{IOPIN_TH, IOPIN_TL, IOPIN_TR, OPEN_BUS};
use common::io_type::IoType;
use common::misc::{falling, Nibbles};

/// Dempa XE-1AP analog pad, in MD mode.
///
/// A TH falling edge starts an acquisition: six sequences of eight cycles,
/// and every read of the data register moves on one cycle. Within a
/// sequence, cycles 0-3 carry the first nibble (TL=0) and cycles 4-7 the
/// second (TL=1). TR is high ("not ready") on the first cycle of each half.
#[derive(Debug, Clone)]
pub struct Xe1ap {
    old_lines: u8,
    running: bool,
    // Reads since the acquisition started.
    latency: u32,
    x: u8,
    y: u8,
    z: u8,
}

impl Default for Xe1ap {
    fn default() -> Self {
        Self::new()
    }
}

impl Xe1ap {
    pub const SEQUENCES: i32 = 6;
    pub const CYCLES_PER_SEQUENCE: i32 = 8;
    const CYCLES: i32 = Self::SEQUENCES * Self::CYCLES_PER_SEQUENCE;

    // A new acquisition can't start until the current one has been read this often.
    pub const MIN_LATENCY: u32 = 3;

    pub const CENTER: u8 = 0x80;

    pub fn new() -> Self {
        Xe1ap {
            old_lines: 0xFF,
            running: false,
            latency: 0,
            x: Self::CENTER,
            y: Self::CENTER,
            z: 0,
        }
    }

    // Left stick X/Y and throttle.
    pub fn set_analog(&mut self, x: u8, y: u8, z: u8) {
        self.x = x;
        self.y = y;
        self.z = z;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    // A' B' A B
    fn extra_buttons(buttons: u32) -> u8 {
        let mut val = 0;
        if buttons & BTN_XE1AP_A2 != 0 {
            val |= 0x08;
        }
        if buttons & BTN_XE1AP_B2 != 0 {
            val |= 0x04;
        }
        if buttons & BTN_XE1AP_A != 0 {
            val |= 0x02;
        }
        if buttons & BTN_XE1AP_B != 0 {
            val |= 0x01;
        }
        val
    }

    // The nibble for a sequence, first or second half. Buttons are active-low
    // on the wire, same as in the buttons word.
    pub fn nibble(&self, seq: i32, second: bool, buttons: u32) -> u8 {
        match (seq, second) {
            // E1 E2 Start Select
            (0, false) => (buttons as u8).hi_nibble(),
            // A B C D
            (0, true) => (buttons as u8).lo_nibble(),
            (1, false) => self.x.hi_nibble(),
            (1, true) => self.y.hi_nibble(),
            (2, false) => self.z.hi_nibble(),
            (3, false) => self.x.lo_nibble(),
            (3, true) => self.y.lo_nibble(),
            (4, false) => self.z.lo_nibble(),
            (5, false) => Self::extra_buttons(buttons),
            (5, true) => 0x0F,
            _ => 0x00,
        }
    }

    fn compute_output(&self, regs: &mut PortRegs) {
        if !self.running {
            regs.output_data = OPEN_BUS;
            return;
        }

        let seq = regs.counter / Self::CYCLES_PER_SEQUENCE;
        let cycle = regs.counter % Self::CYCLES_PER_SEQUENCE;
        let second = cycle >= 4;

        let mut val = self.nibble(seq, second, regs.buttons);
        if second {
            val |= IOPIN_TL;
        }
        if cycle % 4 == 0 {
            val |= IOPIN_TR;
        }
        regs.output_data = val;
    }
}

impl Protocol for Xe1ap {
    fn io_type(&self) -> IoType {
        IoType::Xe1ap
    }

    fn reset_dev(&mut self, regs: &mut PortRegs) {
        regs.counter = 0;
        self.old_lines = regs.bus_cache;
        self.running = false;
        self.latency = 0;
    }

    fn update(&mut self, regs: &mut PortRegs, _: &mut SubPorts) {
        let lines = regs.bus_cache;
        if falling(self.old_lines, lines, IOPIN_TH)
            && (!self.running || self.latency >= Self::MIN_LATENCY) {
            regs.counter = 0;
            self.latency = 0;
            self.running = true;
        }
        self.old_lines = lines;
        self.compute_output(regs);
    }

    fn update_on_read(&mut self, regs: &mut PortRegs) {
        if !self.running {
            return;
        }

        self.latency += 1;
        regs.counter += 1;
        if regs.counter >= Self::CYCLES {
            regs.counter = 0;
            self.running = false;
        }
        self.compute_output(regs);
    }
}
