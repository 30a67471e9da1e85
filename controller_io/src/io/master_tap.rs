use crate::error::IoError;
use crate::io::{set_sub_port, Multitap, PortRegs, Protocol, SubPorts};

use common::constants::{IOPIN_TH, OPEN_BUS};
use common::io_type::IoType;
use common::misc::falling;
use common::ports::VirtPort;

/// SMS Master Tap. Each TH falling edge selects the next of four SMS pads;
/// leaving TH high for a while goes back to the first.
#[derive(Debug, Clone)]
pub struct MasterTap {
    ports: [Option<VirtPort>; VirtPort::SUB_PORTS],
    old_lines: u8,
    scanlines: u32,
}

impl Default for MasterTap {
    fn default() -> Self {
        Self::new()
    }
}

impl MasterTap {
    pub const SCANLINE_COUNT_MAX: u32 = 16;

    pub fn new() -> Self {
        MasterTap {
            ports: [None; VirtPort::SUB_PORTS],
            old_lines: 0xFF,
            scanlines: 0,
        }
    }
}

impl Protocol for MasterTap {
    fn io_type(&self) -> IoType {
        IoType::MasterTap
    }

    fn reset_dev(&mut self, regs: &mut PortRegs) {
        regs.counter = 0;
        self.old_lines = regs.bus_cache;
        self.scanlines = 0;
    }

    fn update(&mut self, regs: &mut PortRegs, subs: &mut SubPorts) {
        let lines = regs.bus_cache;
        if falling(self.old_lines, lines, IOPIN_TH) {
            regs.counter = (regs.counter + 1) & 3;
            self.scanlines = 0;
        }
        self.old_lines = lines;

        let port = self.ports[regs.counter as usize];
        regs.output_data = subs.proxy(port, regs).unwrap_or(OPEN_BUS);
    }

    fn update_on_scanline(&mut self, regs: &mut PortRegs) -> bool {
        if !regs.check_input_line(IOPIN_TH) {
            self.scanlines = 0;
            return false;
        }

        self.scanlines += 1;
        if self.scanlines <= Self::SCANLINE_COUNT_MAX {
            return false;
        }

        self.scanlines = 0;
        let reset = regs.counter != 0;
        regs.counter = 0;
        reset
    }
}

impl Multitap for MasterTap {
    fn sub_device(&self, idx: usize) -> Option<VirtPort> {
        self.ports.get(idx).copied().flatten()
    }

    fn set_sub_device(&mut self, idx: usize, port: Option<VirtPort>) -> Result<(), IoError> {
        set_sub_port(&mut self.ports, idx, port)
    }
}
