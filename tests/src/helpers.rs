use io_lib::IoManager;

use common::constants::{IOPIN_TH, IOPIN_TR};
use common::io_type::IoType;
use common::ports::{PhysPort, VirtPort};

pub fn with_device(port: VirtPort, io_type: IoType) -> IoManager {
    let mut io = IoManager::new();
    io.set_dev_type(port, io_type).unwrap();
    io
}

// Write the data register and read it straight back.
pub fn write_read(io: &mut IoManager, port: PhysPort, data: u8) -> u8 {
    io.write_data_md(port, data);
    io.read_data_md(port)
}

pub fn th(high: bool) -> u8 {
    if high { IOPIN_TH } else { 0 }
}

pub fn tr(high: bool) -> u8 {
    if high { IOPIN_TR } else { 0 }
}

pub fn counter(io: &IoManager, port: VirtPort) -> i32 {
    io.device(port).unwrap().regs().counter()
}
