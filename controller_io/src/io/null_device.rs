use crate::io::{PortRegs, Protocol, SubPorts};

use common::constants::OPEN_BUS;
use common::io_type::IoType;

// Stand-in for an empty physical port.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullDevice();

impl Protocol for NullDevice {
    fn io_type(&self) -> IoType {
        IoType::None
    }

    fn update(&mut self, regs: &mut PortRegs, _: &mut SubPorts) {
        regs.output_data = OPEN_BUS;
    }
}
