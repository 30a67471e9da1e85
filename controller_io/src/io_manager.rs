use crate::device::{Device, DeviceKind};
use crate::error::IoError;
use crate::factory;
use crate::io::null_device::NullDevice;
use crate::io::three_button::ThreeButton;
use crate::io::two_button::TwoButton;
use crate::io::{IoEvent, SubPorts};
use crate::savestate::ZomgMdIoSave;

use common::buttons::{BTN_DOWN, BTN_LEFT, BTN_RIGHT, BTN_UP};
use common::constants::*;
use common::io_type::IoType;
use common::misc::ActiveLow;
use common::ports::{PhysPort, VirtPort};

use log::{debug, trace, warn};

/// Owns every controller device, physical and virtual, and routes register
/// accesses from the console to them.
pub struct IoManager {
    // Indexed by VirtPort. Physical ports are never empty.
    devices: Vec<Option<Device>>,

    constrain_dpad: bool,

    // SMS/GG reset button.
    reset_pressed: bool,

    events: Vec<IoEvent>,
}

impl Default for IoManager {
    fn default() -> Self {
        Self::new()
    }
}

impl IoManager {
    pub fn new() -> IoManager {
        let mut devices: Vec<Option<Device>> = (0..VirtPort::COUNT).map(|_| None).collect();
        devices[VirtPort::Port1.index()] = Some(Device::new(DeviceKind::ThreeButton(ThreeButton())));
        devices[VirtPort::Port2.index()] = Some(Device::new(DeviceKind::ThreeButton(ThreeButton())));
        devices[VirtPort::PortExt.index()] = Some(Device::new(DeviceKind::None(NullDevice())));

        let mut io = IoManager {
            devices,
            constrain_dpad: false,
            reset_pressed: false,
            events: Vec::new(),
        };
        io.reset();
        io
    }

    pub fn reset(&mut self) {
        for dev in self.devices.iter_mut().flatten() {
            dev.reset();
        }

        // Sub-ports first so the multitaps see settled outputs.
        for port in VirtPort::all().filter(|p| !p.is_physical()) {
            self.refresh(port);
        }
        for port in PhysPort::ALL {
            self.update_port(port.into());
        }
    }

    pub fn device(&self, port: VirtPort) -> Option<&Device> {
        self.devices[port.index()].as_ref()
    }

    fn device_mut(&mut self, port: VirtPort) -> Option<&mut Device> {
        self.devices[port.index()].as_mut()
    }

    fn phys_mut(&mut self, port: PhysPort) -> Option<&mut Device> {
        let dev = self.devices[port.index()].as_mut();
        debug_assert!(dev.is_some(), "physical port {} is empty", port);
        dev
    }

    ////////////////////////////////////////////////////////////////////////////////
    // Configuration

    pub fn dev_type(&self, port: VirtPort) -> IoType {
        self.device(port).map(|d| d.io_type()).unwrap_or(IoType::None)
    }

    /// Plug a device of type `io_type` into `port`, replacing whatever was
    /// there. On error nothing changes.
    pub fn set_dev_type(&mut self, port: VirtPort, io_type: IoType) -> Result<(), IoError> {
        let old_type = self.dev_type(port);
        if old_type == io_type {
            return Ok(());
        }

        if !io_type.is_valid_for(port) {
            warn!("{} can't be connected to port {}", io_type, port);
            return Err(IoError::InvalidPlacement { port, io_type });
        }

        let mut new_dev = factory::create(io_type, port);
        if new_dev.is_none() && port.is_physical() {
            warn!("{} can't be connected to port {}", io_type, port);
            return Err(IoError::InvalidPlacement { port, io_type });
        }

        if let (Some(new_dev), Some(old_dev)) = (new_dev.as_mut(), self.device(port)) {
            new_dev.copy_from(old_dev);
        }
        debug!("Port {}: {} -> {}", port, old_type, io_type);
        self.devices[port.index()] = new_dev;

        // Either the multitap just plugged in, or the one above this sub-port.
        let tap_port = port.phys().or(port.parent());
        if let Some(tap_port) = tap_port {
            self.relink_tap(tap_port)?;
        }

        self.update_port(port);
        if port == VirtPort::Port1 {
            self.sync_four_way_play();
        }
        Ok(())
    }

    fn relink_tap(&mut self, phys: PhysPort) -> Result<(), IoError> {
        let (head, subs) = self.devices.split_at_mut(PhysPort::COUNT);
        let Some(dev) = head[phys.index()].as_mut() else {
            return Ok(());
        };
        let io_type = dev.io_type();
        let Some(group) = io_type.tap_group(phys) else {
            return Ok(());
        };
        let Some(tap) = dev.kind_mut().as_multitap_mut() else {
            return Ok(());
        };

        let subs = SubPorts::new(subs);
        for (i, port) in group.ports().into_iter().enumerate() {
            let occupant = subs.get(port).map(|_| port);
            tap.set_sub_device(i, occupant)?;
        }
        tap.relink(&subs);

        debug!("Relinked {} on port {}", io_type, phys);
        Ok(())
    }

    pub fn set_constrain_dpad(&mut self, constrain: bool) {
        self.constrain_dpad = constrain;
    }

    pub fn constrain_dpad(&self) -> bool {
        self.constrain_dpad
    }

    ////////////////////////////////////////////////////////////////////////////////
    // Device updates

    // Recompute one device's output from its current state.
    fn refresh(&mut self, port: VirtPort) {
        let (head, subs) = self.devices.split_at_mut(PhysPort::COUNT);
        match port.phys() {
            Some(phys) => {
                if let Some(dev) = head[phys.index()].as_mut() {
                    dev.refresh(&mut SubPorts::new(subs));
                }
            }
            None => {
                if let Some(dev) = subs[port.index() - PhysPort::COUNT].as_mut() {
                    dev.refresh(&mut SubPorts::none());
                }
            }
        }
    }

    // Recompute a port and everything that depends on it.
    fn update_port(&mut self, port: VirtPort) {
        self.refresh(port);
        if let Some(parent) = port.parent() {
            self.refresh(parent.into());
        }
        if port == VirtPort::Port2 {
            self.sync_four_way_play();
        }
        self.collect_events(port);
    }

    // Hand the player number the master latched over to the slave on port 1.
    fn sync_four_way_play(&mut self) {
        let player = match self.device(VirtPort::Port2).map(|d| d.kind()) {
            Some(DeviceKind::FourWayMaster(master)) => master.player(),
            _ => return,
        };
        let Some(DeviceKind::FourWaySlave(slave)) = self.device_mut(VirtPort::Port1).map(|d| d.kind_mut()) else {
            return;
        };
        slave.set_player(player);
        self.refresh(VirtPort::Port1);
    }

    fn collect_events(&mut self, port: VirtPort) {
        let Some(dev) = self.devices[port.index()].as_mut() else {
            return;
        };
        while let Some(event) = dev.take_event() {
            self.events.push(event);
        }
    }

    pub fn drain_events(&mut self) -> Vec<IoEvent> {
        std::mem::take(&mut self.events)
    }

    // Opposite directions pressed together cancel out.
    fn constrain(buttons: u32) -> u32 {
        let mut buttons = buttons;
        if buttons.is_pressed(BTN_UP) && buttons.is_pressed(BTN_DOWN) {
            buttons |= BTN_UP | BTN_DOWN;
        }
        if buttons.is_pressed(BTN_LEFT) && buttons.is_pressed(BTN_RIGHT) {
            buttons |= BTN_LEFT | BTN_RIGHT;
        }
        buttons
    }

    /// New button state from the input front-end.
    pub fn set_buttons(&mut self, port: VirtPort, buttons: u32) {
        let constrain_dpad = self.constrain_dpad;
        let Some(dev) = self.device_mut(port) else {
            return;
        };
        dev.regs.buttons = if constrain_dpad && dev.io_type().has_dpad() {
            Self::constrain(buttons)
        } else {
            buttons
        };
        self.update_port(port);
    }

    pub fn mouse_move(&mut self, port: VirtPort, dx: i32, dy: i32) {
        if let Some(DeviceKind::MegaMouse(mouse)) = self.device_mut(port).map(|d| d.kind_mut()) {
            mouse.move_rel(dx, dy);
        }
    }

    pub fn set_analog(&mut self, port: VirtPort, x: u8, y: u8, z: u8) {
        if let Some(DeviceKind::Xe1ap(pad)) = self.device_mut(port).map(|d| d.kind_mut()) {
            pad.set_analog(x, y, z);
            self.update_port(port);
        }
    }

    pub fn set_pin58(&mut self, port: PhysPort, pin58: u8) {
        if let Some(dev) = self.phys_mut(port) {
            dev.regs.pin58 = pin58;
            self.update_port(port.into());
        }
    }

    pub fn set_reset_button(&mut self, pressed: bool) {
        self.reset_pressed = pressed;
    }

    pub fn pico_page(&self, port: PhysPort) -> Option<u8> {
        match self.device(port.into())?.kind() {
            DeviceKind::Pico(pico) => Some(pico.page()),
            _ => None,
        }
    }

    pub fn pico_page_reg(&self, port: PhysPort) -> Option<u8> {
        match self.device(port.into())?.kind() {
            DeviceKind::Pico(pico) => Some(pico.page_reg()),
            _ => None,
        }
    }

    pub fn do_scanline(&mut self) {
        for port in VirtPort::all() {
            let fired = self.device_mut(port).is_some_and(|d| d.update_on_scanline());
            if fired {
                trace!("Port {}: scanline timeout", port);
                self.update_port(port);
            }
        }
    }

    ////////////////////////////////////////////////////////////////////////////////
    // MD registers

    pub fn read_data_md(&mut self, port: PhysPort) -> u8 {
        let Some(dev) = self.phys_mut(port) else {
            return 0xFF;
        };
        let val = dev.read_data();
        dev.update_on_read();
        trace!("Port {}: read data {:02x}", port, val);
        val
    }

    pub fn write_data_md(&mut self, port: PhysPort, val: u8) {
        trace!("Port {}: write data {:02x}", port, val);
        if let Some(dev) = self.phys_mut(port) {
            dev.regs.bus_data = val;
            self.update_port(port.into());
        }
    }

    pub fn read_ctrl_md(&self, port: PhysPort) -> u8 {
        self.device(port.into()).map(|d| d.regs.ctrl).unwrap_or(0)
    }

    pub fn write_ctrl_md(&mut self, port: PhysPort, val: u8) {
        trace!("Port {}: write ctrl {:02x}", port, val);
        if let Some(dev) = self.phys_mut(port) {
            dev.regs.ctrl = val;
            self.update_port(port.into());
        }
    }

    ////////////////////////////////////////////////////////////////////////////////
    // Serial registers. Only the register file is kept; nothing is shifted.

    pub fn read_ser_ctrl(&self, port: PhysPort) -> u8 {
        self.device(port.into()).map(|d| d.regs.ser_ctrl).unwrap_or(0)
    }

    pub fn write_ser_ctrl(&mut self, port: PhysPort, val: u8) {
        if let Some(dev) = self.phys_mut(port) {
            dev.regs.ser_ctrl = val & SER_CTRL_WRITE_MASK;
        }
    }

    pub fn read_ser_tx(&self, port: PhysPort) -> u8 {
        self.device(port.into()).map(|d| d.regs.ser_last_tx).unwrap_or(0xFF)
    }

    pub fn write_ser_tx(&mut self, port: PhysPort, val: u8) {
        if let Some(dev) = self.phys_mut(port) {
            dev.regs.ser_last_tx = val;
        }
    }

    pub fn read_ser_rx(&self, _port: PhysPort) -> u8 {
        SER_RX_IDLE
    }

    ////////////////////////////////////////////////////////////////////////////////
    // SMS/GG registers

    /// Port $3F. Bits 0-3 set TR/TH direction (1 = input) for port A then
    /// port B, bits 4-7 their output levels.
    pub fn write_ctrl_sms(&mut self, val: u8) {
        trace!("SMS ctrl {:02x}", val);
        for (port, shift) in [(PhysPort::Port1, 0), (PhysPort::Port2, 2)] {
            let dir = (val >> shift) & 0x03;
            let lvl = (val >> (4 + shift)) & 0x03;

            let mut ctrl = 0;
            if dir & 0x01 == 0 {
                ctrl |= IOPIN_TR;
            }
            if dir & 0x02 == 0 {
                ctrl |= IOPIN_TH;
            }

            let mut data = 0;
            if lvl & 0x01 != 0 {
                data |= IOPIN_TR;
            }
            if lvl & 0x02 != 0 {
                data |= IOPIN_TH;
            }

            if let Some(dev) = self.phys_mut(port) {
                dev.regs.ctrl = ctrl;
                dev.regs.bus_data = (dev.regs.bus_data & !(IOPIN_TR | IOPIN_TH)) | data;
                self.update_port(port.into());
            }
        }
    }

    fn read_data_sms(&self, port: PhysPort) -> u8 {
        self.device(port.into()).map(|d| d.read_data()).unwrap_or(0xFF)
    }

    /// Port $DC: port A, then Up/Down of port B.
    pub fn read_data_sms_dc(&self) -> u8 {
        let p1 = self.read_data_sms(PhysPort::Port1);
        let p2 = self.read_data_sms(PhysPort::Port2);
        (p1 & 0x3F) | ((p2 & 0x03) << 6)
    }

    /// Port $DD: the rest of port B, reset, and both TH lines.
    pub fn read_data_sms_dd(&self) -> u8 {
        let p1 = self.read_data_sms(PhysPort::Port1);
        let p2 = self.read_data_sms(PhysPort::Port2);
        let reset = if self.reset_pressed { 0x00 } else { 0x10 };
        ((p2 >> 2) & 0x0F) | reset | 0x20 | (p1 & 0x40) | ((p2 & 0x40) << 1)
    }

    pub fn is_pause_sms(&self) -> bool {
        self.devices
            .iter()
            .flatten()
            .any(|d| d.kind().is_two_button() && TwoButton::is_pause_pressed(d.regs()))
    }

    // GG Start is only the top bit.
    pub fn read_start_gg(&self) -> u8 {
        if self.is_pause_sms() { 0x00 } else { 0x80 }
    }

    ////////////////////////////////////////////////////////////////////////////////
    // Save states

    pub fn zomg_save_md(&self) -> ZomgMdIoSave {
        let mut save = ZomgMdIoSave::default();
        for (port, state) in PhysPort::ALL.into_iter().zip(save.ports_mut()) {
            if let Some(dev) = self.device(port.into()) {
                state.data = dev.regs.bus_data;
                state.ctrl = dev.regs.ctrl;
                state.ser_tx = dev.regs.ser_last_tx;
                state.ser_rx = SER_RX_IDLE;
                state.ser_ctrl = dev.regs.ser_ctrl;
            }
        }
        save
    }

    pub fn zomg_restore_md(&mut self, save: &ZomgMdIoSave) {
        for (port, state) in PhysPort::ALL.into_iter().zip(save.ports()) {
            if let Some(dev) = self.phys_mut(port) {
                dev.regs.bus_data = state.data;
                dev.regs.ctrl = state.ctrl;
                dev.regs.ser_last_tx = state.ser_tx;
                dev.regs.ser_ctrl = state.ser_ctrl & SER_CTRL_WRITE_MASK;
                dev.regs.pin58 = PIN58_NORMAL;
            }
        }
        for port in PhysPort::ALL {
            self.update_port(port.into());
        }
        debug!("Restored I/O state");
    }
}
