use crate::io::colecovision::ColecoVision;
use crate::io::four_way_play::{FourWayMaster, FourWaySlave};
use crate::io::master_tap::MasterTap;
use crate::io::mega_mouse::MegaMouse;
use crate::io::null_device::NullDevice;
use crate::io::pico::Pico;
use crate::io::six_button::SixButton;
use crate::io::team_player::TeamPlayer;
use crate::io::three_button::ThreeButton;
use crate::io::two_button::TwoButton;
use crate::io::xe1ap::Xe1ap;
use crate::io::{IoEvent, Multitap, PortRegs, Protocol, SubPorts};

use common::io_type::IoType;

use delegate::delegate;
use derive_more::IsVariant;

#[derive(Debug, Clone, IsVariant)]
pub enum DeviceKind {
    None(NullDevice),
    ThreeButton(ThreeButton),
    SixButton(SixButton),
    TwoButton(TwoButton),
    MegaMouse(MegaMouse),
    TeamPlayer(TeamPlayer),
    FourWayMaster(FourWayMaster),
    FourWaySlave(FourWaySlave),
    Xe1ap(Xe1ap),
    ColecoVision(ColecoVision),
    Pico(Pico),
    MasterTap(MasterTap),
}

impl DeviceKind {
    delegate! {
        to match self {
            DeviceKind::None(x) => x,
            DeviceKind::ThreeButton(x) => x,
            DeviceKind::SixButton(x) => x,
            DeviceKind::TwoButton(x) => x,
            DeviceKind::MegaMouse(x) => x,
            DeviceKind::TeamPlayer(x) => x,
            DeviceKind::FourWayMaster(x) => x,
            DeviceKind::FourWaySlave(x) => x,
            DeviceKind::Xe1ap(x) => x,
            DeviceKind::ColecoVision(x) => x,
            DeviceKind::Pico(x) => x,
            DeviceKind::MasterTap(x) => x,
        } {
            pub fn io_type(&self) -> IoType;
            pub fn reset_dev(&mut self, regs: &mut PortRegs);
            pub fn update(&mut self, regs: &mut PortRegs, subs: &mut SubPorts);
            pub fn update_on_scanline(&mut self, regs: &mut PortRegs) -> bool;
            pub fn update_on_read(&mut self, regs: &mut PortRegs);
            pub fn released_buttons(&self) -> u32;
            pub fn take_event(&mut self) -> Option<IoEvent>;
        }
    }

    pub fn as_multitap(&self) -> Option<&dyn Multitap> {
        match self {
            DeviceKind::TeamPlayer(x) => Some(x),
            DeviceKind::FourWaySlave(x) => Some(x),
            DeviceKind::MasterTap(x) => Some(x),
            _ => None,
        }
    }

    pub fn as_multitap_mut(&mut self) -> Option<&mut dyn Multitap> {
        match self {
            DeviceKind::TeamPlayer(x) => Some(x),
            DeviceKind::FourWaySlave(x) => Some(x),
            DeviceKind::MasterTap(x) => Some(x),
            _ => None,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////

/// A peripheral plugged into a port: the shared register state plus the
/// protocol that drives it.
#[derive(Debug, Clone)]
pub struct Device {
    pub(crate) regs: PortRegs,
    kind: DeviceKind,
}

impl Device {
    pub fn new(kind: DeviceKind) -> Device {
        let mut dev = Device {
            regs: PortRegs::new(),
            kind,
        };
        dev.regs.buttons = dev.kind.released_buttons();
        dev.reset();
        dev
    }

    pub fn reset(&mut self) {
        self.regs.ctrl = 0;
        self.regs.bus_data = 0xFF;
        self.regs.ser_ctrl = 0;
        self.regs.ser_last_tx = 0xFF;
        self.regs.update_bus_cache();
        self.kind.reset_dev(&mut self.regs);
    }

    pub fn io_type(&self) -> IoType {
        self.kind.io_type()
    }

    pub fn regs(&self) -> &PortRegs {
        &self.regs
    }

    pub fn kind(&self) -> &DeviceKind {
        &self.kind
    }

    pub fn kind_mut(&mut self) -> &mut DeviceKind {
        &mut self.kind
    }

    pub fn update(&mut self, buttons: u32, subs: &mut SubPorts) {
        self.regs.buttons = buttons;
        self.regs.update_bus_cache();
        self.kind.update(&mut self.regs, subs);
    }

    // Recompute the output with the current buttons.
    pub fn refresh(&mut self, subs: &mut SubPorts) {
        self.update(self.regs.buttons, subs);
    }

    pub fn update_on_scanline(&mut self) -> bool {
        self.kind.update_on_scanline(&mut self.regs)
    }

    pub fn update_on_read(&mut self) {
        self.kind.update_on_read(&mut self.regs);
    }

    pub fn take_event(&mut self) -> Option<IoEvent> {
        self.kind.take_event()
    }

    pub fn read_data(&self) -> u8 {
        self.regs.read_data()
    }

    pub fn check_input_line(&self, pin: u8) -> bool {
        self.regs.check_input_line(pin)
    }

    /// Takes over the live bus state of the device this one replaces, so a
    /// transaction in progress isn't disturbed by the swap.
    pub fn copy_from(&mut self, other: &Device) {
        self.regs.ctrl = other.regs.ctrl;
        self.regs.bus_data = other.regs.bus_data;
        self.regs.bus_cache = other.regs.bus_cache;
        self.regs.output_data = other.regs.output_data;
    }
}
