use std::str::FromStr;

use crate::error::IoError;
use crate::io_manager::IoManager;

use common::io_type::{FourCCError, IoType};
use common::ports::VirtPort;

use log::warn;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Expected PORT=TYPE, got \"{0}\"")]
    Malformed(String),

    #[error("Unknown port \"{0}\"")]
    UnknownPort(String),

    #[error(transparent)]
    FourCC(#[from] FourCCError),

    #[error(transparent)]
    Io(#[from] IoError),
}

/// Which device goes in which port, as the user asked for it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IoConfig {
    pub ports: Vec<(VirtPort, IoType)>,
    pub constrain_dpad: bool,
}

impl IoConfig {
    /// Parse one `PORT=FOURCC` assignment, e.g. `1=6BTN` or `tp1a=mous`.
    pub fn parse_port(s: &str) -> Result<(VirtPort, IoType), ConfigError> {
        let (port, io_type) = s.split_once('=').ok_or_else(|| ConfigError::Malformed(s.to_string()))?;
        let port = VirtPort::from_name(port).ok_or_else(|| ConfigError::UnknownPort(port.trim().to_string()))?;
        let io_type = IoType::from_str(io_type.trim())?;
        Ok((port, io_type))
    }

    pub fn from_args<S: AsRef<str>>(ports: &[S], constrain_dpad: bool) -> Result<IoConfig, ConfigError> {
        let ports = ports
            .iter()
            .map(|s| Self::parse_port(s.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(IoConfig { ports, constrain_dpad })
    }

    /// Physical ports are configured before sub-ports, so a multitap is in
    /// place by the time its pads arrive.
    pub fn apply(&self, io: &mut IoManager) -> Result<(), ConfigError> {
        io.set_constrain_dpad(self.constrain_dpad);

        let mut ports = self.ports.clone();
        ports.sort_by_key(|(port, _)| !port.is_physical());

        for (port, io_type) in ports {
            if !io_type.is_usable() {
                warn!("{} isn't usable in this build", io_type.name());
            }
            io.set_dev_type(port, io_type)?;
        }
        Ok(())
    }
}
