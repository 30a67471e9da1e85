pub mod colecovision;
pub mod four_way_play;
pub mod master_tap;
pub mod mega_mouse;
pub mod null_device;
pub mod pico;
pub mod six_button;
pub mod team_player;
pub mod three_button;
pub mod two_button;
pub mod xe1ap;

use crate::device::Device;
use crate::error::IoError;

use common::buttons::BUTTONS_RELEASED;
use common::constants::*;
use common::io_type::IoType;
use common::ports::{PhysPort, VirtPort};

/// Something a peripheral wants the front-end to know about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoEvent {
    PicoPageChanged { page: u8 },
}

/// Register state shared by every peripheral.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortRegs {
    // 1 = driven by the console.
    pub(crate) ctrl: u8,
    // Last value written to the data register.
    pub(crate) bus_data: u8,
    // What the peripheral sees on the lines: inputs float high.
    pub(crate) bus_cache: u8,
    // What the peripheral drives.
    pub(crate) output_data: u8,

    pub(crate) buttons: u32,
    pub(crate) counter: i32,

    pub(crate) ser_ctrl: u8,
    pub(crate) ser_last_tx: u8,

    pub(crate) pin58: u8,
}

impl Default for PortRegs {
    fn default() -> Self {
        Self::new()
    }
}

impl PortRegs {
    pub fn new() -> Self {
        PortRegs {
            ctrl: 0,
            bus_data: 0xFF,
            bus_cache: 0xFF,
            output_data: 0xFF,
            buttons: BUTTONS_RELEASED,
            counter: 0,
            ser_ctrl: 0,
            ser_last_tx: 0xFF,
            pin58: PIN58_NORMAL,
        }
    }

    pub fn ctrl(&self) -> u8 {
        self.ctrl
    }

    pub fn bus_data(&self) -> u8 {
        self.bus_data
    }

    pub fn bus_cache(&self) -> u8 {
        self.bus_cache
    }

    pub fn output_data(&self) -> u8 {
        self.output_data
    }

    pub fn buttons(&self) -> u32 {
        self.buttons
    }

    pub fn counter(&self) -> i32 {
        self.counter
    }

    pub fn ser_ctrl(&self) -> u8 {
        self.ser_ctrl
    }

    pub fn ser_last_tx(&self) -> u8 {
        self.ser_last_tx
    }

    pub fn pin58(&self) -> u8 {
        self.pin58
    }

    pub fn update_bus_cache(&mut self) {
        self.bus_cache = !self.ctrl | self.bus_data;
    }

    /// The byte the console reads back from the data register. Output pins
    /// return what the console wrote, input pins what the peripheral drives.
    /// Bit 7 is the TH interrupt latch and always comes from the written data.
    pub fn read_data(&self) -> u8 {
        (self.output_data & !self.ctrl & IO_LINES_MASK) | (self.bus_data & (self.ctrl | IO_LATCH_BIT))
    }

    pub fn check_input_line(&self, pin: u8) -> bool {
        self.bus_cache & pin != 0
    }

    // Low byte of the buttons word. The register bits of most pads map onto it directly.
    pub fn buttons_lo(&self) -> u8 {
        self.buttons as u8
    }

    // TL echoes TR, the acknowledge used by the handshaking peripherals.
    pub fn tl_from_tr(&self) -> u8 {
        (self.bus_cache & IOPIN_TR) >> 1
    }
}

////////////////////////////////////////////////////////////////////////////////

/// The protocol half of a peripheral: how its output byte follows from the bus
/// lines, its buttons and whatever internal state it keeps.
pub trait Protocol {
    fn io_type(&self) -> IoType;

    // Clears variant state after the common registers have been reset.
    fn reset_dev(&mut self, regs: &mut PortRegs) {
        regs.counter = 0;
    }

    // Must set regs.output_data.
    fn update(&mut self, regs: &mut PortRegs, subs: &mut SubPorts);

    // Returns true if a timeout changed the state and the output needs recomputing.
    fn update_on_scanline(&mut self, _regs: &mut PortRegs) -> bool {
        false
    }

    fn update_on_read(&mut self, _regs: &mut PortRegs) {}

    fn released_buttons(&self) -> u32 {
        BUTTONS_RELEASED
    }

    fn take_event(&mut self) -> Option<IoEvent> {
        None
    }
}

/// Peripherals that put other peripherals behind a single port.
pub trait Multitap {
    fn sub_device(&self, idx: usize) -> Option<VirtPort>;

    fn set_sub_device(&mut self, idx: usize, port: Option<VirtPort>) -> Result<(), IoError>;

    // Called after the sub-devices change.
    fn relink(&mut self, _subs: &SubPorts) {}
}

// Fixed-size sub-port table shared by the multitaps.
pub(crate) fn set_sub_port(
    ports: &mut [Option<VirtPort>; VirtPort::SUB_PORTS],
    idx: usize,
    port: Option<VirtPort>,
) -> Result<(), IoError> {
    let slot = ports.get_mut(idx).ok_or(IoError::SubPortOutOfRange(idx))?;
    *slot = port;
    Ok(())
}

////////////////////////////////////////////////////////////////////////////////

/// A view of the virtual sub-ports, through which multitaps reach the
/// devices plugged into them. Multitaps only keep port numbers; the devices
/// themselves stay owned by the IoManager.
pub struct SubPorts<'a> {
    slots: &'a mut [Option<Device>],
}

impl<'a> SubPorts<'a> {
    // `slots` starts at the first virtual sub-port.
    pub fn new(slots: &'a mut [Option<Device>]) -> Self {
        SubPorts { slots }
    }

    // For devices that don't have any.
    pub fn none() -> SubPorts<'static> {
        SubPorts { slots: &mut [] }
    }

    fn slot(port: VirtPort) -> Option<usize> {
        port.index().checked_sub(PhysPort::COUNT)
    }

    pub fn get(&self, port: VirtPort) -> Option<&Device> {
        self.slots.get(Self::slot(port)?)?.as_ref()
    }

    pub fn get_mut(&mut self, port: VirtPort) -> Option<&mut Device> {
        self.slots.get_mut(Self::slot(port)?)?.as_mut()
    }

    pub fn io_type(&self, port: Option<VirtPort>) -> IoType {
        port.and_then(|p| self.get(p)).map(|d| d.io_type()).unwrap_or(IoType::None)
    }

    /// Puts the console's view of the port onto the sub-device behind it and
    /// returns what the sub-device drives in response.
    pub fn proxy(&mut self, port: Option<VirtPort>, regs: &PortRegs) -> Option<u8> {
        let dev = self.get_mut(port?)?;
        dev.regs.ctrl = regs.ctrl;
        dev.regs.bus_data = regs.bus_data;
        dev.refresh(&mut SubPorts::none());
        Some(dev.regs.output_data)
    }
}
