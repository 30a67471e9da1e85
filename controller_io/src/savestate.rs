use bytemuck::{bytes_of, try_pod_read_unaligned, Pod, Zeroable};

use crate::error::IoError;

/// One port's registers, as laid out in a ZOMG save.
#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
pub struct ZomgMdIoPort {
    pub data: u8,
    pub ctrl: u8,
    pub ser_tx: u8,
    pub ser_rx: u8,
    pub ser_ctrl: u8,
}

/// The MD I/O block of a ZOMG save.
#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
pub struct ZomgMdIoSave {
    pub port1: ZomgMdIoPort,
    pub port2: ZomgMdIoPort,
    pub port_ext: ZomgMdIoPort,
}

impl ZomgMdIoSave {
    pub const SIZE: usize = std::mem::size_of::<ZomgMdIoSave>();

    pub fn as_bytes(&self) -> &[u8] {
        bytes_of(self)
    }

    pub fn from_bytes(buf: &[u8]) -> Result<ZomgMdIoSave, IoError> {
        try_pod_read_unaligned(buf).map_err(|_| IoError::BadSaveState(buf.len()))
    }

    pub fn ports(&self) -> [&ZomgMdIoPort; 3] {
        [&self.port1, &self.port2, &self.port_ext]
    }

    pub fn ports_mut(&mut self) -> [&mut ZomgMdIoPort; 3] {
        [&mut self.port1, &mut self.port2, &mut self.port_ext]
    }
}
