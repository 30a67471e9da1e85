pub mod config;
pub mod device;
pub mod error;
pub mod factory;
pub mod io;
pub mod io_manager;
pub mod savestate;
pub mod script;

pub use config::{ConfigError, IoConfig};
pub use device::{Device, DeviceKind};
pub use error::IoError;
pub use io::{IoEvent, Multitap, PortRegs, Protocol, SubPorts};
pub use io_manager::IoManager;
pub use savestate::{ZomgMdIoPort, ZomgMdIoSave};
pub use script::{run_script, ScriptError};
