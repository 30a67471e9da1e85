use crate::io::three_button::ThreeButton;
use crate::io::{PortRegs, Protocol, SubPorts};

use common::constants::IOPIN_TH;
use common::io_type::IoType;
use common::misc::rising;

/// Six-button pad. Every TH rising edge steps a counter that selects the
/// extra reads for X/Y/Z/Mode. A capacitor on the pad drops it back to the
/// start if TH stops toggling for a while.
#[derive(Debug, Clone)]
pub struct SixButton {
    old_lines: u8,
    scanlines: u32,
}

impl Default for SixButton {
    fn default() -> Self {
        Self::new()
    }
}

impl SixButton {
    // Lines without a TH rising edge before the counter resets.
    pub const SCANLINE_COUNT_MAX: u32 = 25;

    pub fn new() -> Self {
        SixButton {
            old_lines: 0xFF,
            scanlines: 0,
        }
    }

    // Index into the read sequence: the edge counter, plus 1 while TH is low.
    fn phase(counter: i32, th: bool) -> i32 {
        counter | if th { 0 } else { 1 }
    }

    fn output(phase: i32, buttons: u32) -> u8 {
        let lo = buttons as u8;
        match phase {
            // D0SA00DU
            1 | 3 => ThreeButton::th_low(lo),
            // D0SA0000
            5 => (lo & 0xC0) >> 2,
            // D1CBMXYZ
            6 => (lo & 0x30) | 0x40 | ((buttons >> 8) as u8 & 0x0F),
            // D0SA1111
            7 => ((lo & 0xC0) >> 2) | 0x0F,
            // D1CBRLDU
            _ => ThreeButton::th_high(lo),
        }
    }
}

impl Protocol for SixButton {
    fn io_type(&self) -> IoType {
        IoType::SixButton
    }

    fn reset_dev(&mut self, regs: &mut PortRegs) {
        regs.counter = 0;
        self.scanlines = 0;
        self.old_lines = regs.bus_cache;
    }

    fn update(&mut self, regs: &mut PortRegs, _: &mut SubPorts) {
        let lines = regs.bus_cache;
        if rising(self.old_lines, lines, IOPIN_TH) {
            regs.counter = (regs.counter + 2) & 6;
            self.scanlines = 0;
        }
        self.old_lines = lines;

        let phase = Self::phase(regs.counter, regs.check_input_line(IOPIN_TH));
        regs.output_data = Self::output(phase, regs.buttons);
    }

    fn update_on_scanline(&mut self, regs: &mut PortRegs) -> bool {
        self.scanlines += 1;
        if self.scanlines <= Self::SCANLINE_COUNT_MAX {
            return false;
        }

        self.scanlines = 0;
        let reset = regs.counter != 0;
        regs.counter = 0;
        reset
    }
}
