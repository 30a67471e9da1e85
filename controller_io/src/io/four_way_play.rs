use crate::error::IoError;
use crate::io::{set_sub_port, Multitap, PortRegs, Protocol, SubPorts};

use common::constants::OPEN_BUS;
use common::io_type::IoType;
use common::ports::VirtPort;

/// EA 4-Way Play, port 2 half. The console writes the player number here;
/// the pads themselves are read through port 1.
#[derive(Debug, Clone, Default)]
pub struct FourWayMaster {
    player: u8,
}

impl FourWayMaster {
    pub fn player(&self) -> u8 {
        self.player
    }
}

impl Protocol for FourWayMaster {
    fn io_type(&self) -> IoType {
        IoType::FourWayMaster
    }

    fn reset_dev(&mut self, regs: &mut PortRegs) {
        regs.counter = 0;
        self.player = 0;
    }

    fn update(&mut self, regs: &mut PortRegs, _: &mut SubPorts) {
        self.player = (regs.bus_data >> 4) & 0x07;
        regs.output_data = OPEN_BUS;
    }
}

////////////////////////////////////////////////////////////////////////////////

/// EA 4-Way Play, port 1 half. Passes the port through to whichever pad the
/// master selected.
#[derive(Debug, Clone, Default)]
pub struct FourWaySlave {
    ports: [Option<VirtPort>; VirtPort::SUB_PORTS],
    player: u8,
}

impl FourWaySlave {
    // Read back when the selection doesn't name a pad.
    pub const OUTPUT_NO_PAD: u8 = 0x70;

    pub fn player(&self) -> u8 {
        self.player
    }

    pub fn set_player(&mut self, player: u8) {
        self.player = player;
    }
}

impl Protocol for FourWaySlave {
    fn io_type(&self) -> IoType {
        IoType::FourWaySlave
    }

    fn update(&mut self, regs: &mut PortRegs, subs: &mut SubPorts) {
        let player = self.player as usize;
        regs.output_data = if player >= VirtPort::SUB_PORTS {
            Self::OUTPUT_NO_PAD
        } else {
            subs.proxy(self.ports[player], regs).unwrap_or(OPEN_BUS)
        };
    }
}

impl Multitap for FourWaySlave {
    fn sub_device(&self, idx: usize) -> Option<VirtPort> {
        self.ports.get(idx).copied().flatten()
    }

    fn set_sub_device(&mut self, idx: usize, port: Option<VirtPort>) -> Result<(), IoError> {
        set_sub_port(&mut self.ports, idx, port)
    }
}
