use common::io_type::IoType;
use common::ports::VirtPort;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum IoError {
    #[error("{io_type} can't be connected to port {}", .port.name())]
    InvalidPlacement { port: VirtPort, io_type: IoType },

    #[error("Sub-port index {0} out of range")]
    SubPortOutOfRange(usize),

    #[error("Bad save state: expected {} bytes, got {0}", crate::savestate::ZomgMdIoSave::SIZE)]
    BadSaveState(usize),
}
