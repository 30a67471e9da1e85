use crate::device::DeviceKind;
use crate::error::IoError;
use crate::io::mega_mouse::MegaMouse;
use crate::io::{set_sub_port, Multitap, PortRegs, Protocol, SubPorts};

use common::constants::{IOPIN_TH, IOPIN_TL, IOPIN_TR};
use common::io_type::IoType;
use common::ports::VirtPort;

use log::debug;

/// Which part of a pad's state a Team Player slot carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PadNibble {
    Rldu,
    Sacb,
    Mxyz,
    // Phase of the Mega Mouse's own transfer.
    Mouse(i32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TpSlot {
    Ack1,
    Ack2,
    PadType(usize),
    Pad(usize, PadNibble),
}

/// Sega Team Player. Four sub-ports behind one port. After TH goes low every
/// TH or TR transition clocks out the next nibble of a table laid out for the
/// pads currently connected.
#[derive(Debug, Clone)]
pub struct TeamPlayer {
    ports: [Option<VirtPort>; VirtPort::SUB_PORTS],
    table: Vec<TpSlot>,
    old_lines: u8,
    scanlines: u32,
}

impl Default for TeamPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl TeamPlayer {
    pub const SCANLINE_COUNT_MAX: u32 = 25;

    pub const OUTPUT_INIT: u8 = 0x73;
    pub const OUTPUT_START: u8 = 0x3F;

    pub const PAD_3BTN: u8 = 0x0;
    pub const PAD_6BTN: u8 = 0x1;
    pub const PAD_MOUSE: u8 = 0x2;
    pub const PAD_NONE: u8 = 0xF;

    // Counter values before the table.
    const COUNTER_INIT: i32 = 0;
    const COUNTER_START: i32 = 1;
    const TABLE_START: i32 = 2;

    pub fn new() -> Self {
        let mut tp = TeamPlayer {
            ports: [None; VirtPort::SUB_PORTS],
            table: Vec::new(),
            old_lines: 0xFF,
            scanlines: 0,
        };
        tp.rebuild_ctrl_index_table(&SubPorts::none());
        tp
    }

    pub fn table(&self) -> &[TpSlot] {
        &self.table
    }

    pub fn pad_type_id(io_type: IoType) -> u8 {
        match io_type {
            IoType::ThreeButton => Self::PAD_3BTN,
            IoType::SixButton => Self::PAD_6BTN,
            IoType::MegaMouse => Self::PAD_MOUSE,
            _ => Self::PAD_NONE,
        }
    }

    /// Lay out the nibbles for the pads currently connected. Returns the
    /// number of slots.
    pub fn rebuild_ctrl_index_table(&mut self, subs: &SubPorts) -> usize {
        self.table.clear();
        self.table.push(TpSlot::Ack1);
        self.table.push(TpSlot::Ack2);
        self.table.extend((0..VirtPort::SUB_PORTS).map(TpSlot::PadType));

        for (i, &port) in self.ports.iter().enumerate() {
            let nibbles: &[PadNibble] = match subs.io_type(port) {
                IoType::ThreeButton => &[PadNibble::Rldu, PadNibble::Sacb],
                IoType::SixButton => &[PadNibble::Rldu, PadNibble::Sacb, PadNibble::Mxyz],
                IoType::MegaMouse => &[
                    PadNibble::Mouse(4),
                    PadNibble::Mouse(5),
                    PadNibble::Mouse(6),
                    PadNibble::Mouse(7),
                    PadNibble::Mouse(8),
                    PadNibble::Mouse(9),
                ],
                _ => &[],
            };
            self.table.extend(nibbles.iter().map(|&n| TpSlot::Pad(i, n)));
        }

        debug!("Team Player table: {} slots", self.table.len());
        self.table.len()
    }

    fn slot_nibble(&self, slot: TpSlot, subs: &SubPorts) -> u8 {
        match slot {
            TpSlot::Ack1 | TpSlot::Ack2 => 0x0,
            TpSlot::PadType(i) => Self::pad_type_id(subs.io_type(self.ports[i])),
            TpSlot::Pad(i, nibble) => {
                let Some(dev) = self.ports[i].and_then(|p| subs.get(p)) else {
                    return 0xF;
                };
                let buttons = dev.regs().buttons();
                match (nibble, dev.kind()) {
                    (PadNibble::Mouse(phase), DeviceKind::MegaMouse(mouse)) => mouse.nibble(phase, buttons),
                    (PadNibble::Rldu, _) => (buttons & 0xF) as u8,
                    (PadNibble::Sacb, _) => ((buttons >> 4) & 0xF) as u8,
                    (PadNibble::Mxyz, _) => ((buttons >> 8) & 0xF) as u8,
                    _ => 0xF,
                }
            }
        }
    }

    fn latch_mice(&self, subs: &mut SubPorts) {
        for port in self.ports.iter().flatten() {
            if let Some(DeviceKind::MegaMouse(mouse)) = subs.get_mut(*port).map(|d| d.kind_mut()) {
                mouse.latch();
            }
        }
    }

    fn last_counter(&self) -> i32 {
        self.table.len() as i32 + Self::TABLE_START
    }
}

impl Protocol for TeamPlayer {
    fn io_type(&self) -> IoType {
        IoType::TeamPlayer
    }

    fn reset_dev(&mut self, regs: &mut PortRegs) {
        regs.counter = Self::COUNTER_INIT;
        self.old_lines = regs.bus_cache;
        self.scanlines = 0;
    }

    fn update(&mut self, regs: &mut PortRegs, subs: &mut SubPorts) {
        let lines = regs.bus_cache;
        let transition = (self.old_lines ^ lines) & (IOPIN_TH | IOPIN_TR) != 0;
        self.old_lines = lines;

        if regs.check_input_line(IOPIN_TH) {
            regs.counter = Self::COUNTER_INIT;
            regs.output_data = (Self::OUTPUT_INIT & !IOPIN_TL) | regs.tl_from_tr();
            return;
        }

        if transition {
            self.scanlines = 0;
            if regs.counter == Self::COUNTER_INIT {
                regs.counter = Self::COUNTER_START;
                self.latch_mice(subs);
            } else if regs.counter < self.last_counter() {
                regs.counter += 1;
            }
        }

        let data = if regs.counter == Self::COUNTER_START {
            Self::OUTPUT_START
        } else if regs.counter >= Self::TABLE_START {
            self.table
                .get((regs.counter - Self::TABLE_START) as usize)
                .map(|&slot| self.slot_nibble(slot, subs))
                .unwrap_or(0xF)
        } else {
            // TH low but no transition seen yet.
            Self::OUTPUT_INIT
        };
        regs.output_data = (data & !IOPIN_TL) | regs.tl_from_tr();
    }

    fn update_on_scanline(&mut self, regs: &mut PortRegs) -> bool {
        if regs.counter == Self::COUNTER_INIT {
            return false;
        }

        self.scanlines += 1;
        if self.scanlines <= Self::SCANLINE_COUNT_MAX {
            return false;
        }

        self.scanlines = 0;
        regs.counter = Self::COUNTER_INIT;
        true
    }
}

impl Multitap for TeamPlayer {
    fn sub_device(&self, idx: usize) -> Option<VirtPort> {
        self.ports.get(idx).copied().flatten()
    }

    fn set_sub_device(&mut self, idx: usize, port: Option<VirtPort>) -> Result<(), IoError> {
        set_sub_port(&mut self.ports, idx, port)
    }

    fn relink(&mut self, subs: &SubPorts) {
        self.rebuild_ctrl_index_table(subs);
    }
}
