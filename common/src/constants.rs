
// Controller port pins, as seen in the data and ctrl registers.
pub const IOPIN_UP: u8 = 0x01;
pub const IOPIN_DOWN: u8 = 0x02;
pub const IOPIN_LEFT: u8 = 0x04;
pub const IOPIN_RIGHT: u8 = 0x08;
pub const IOPIN_TL: u8 = 0x10;
pub const IOPIN_TR: u8 = 0x20;
pub const IOPIN_TH: u8 = 0x40;

// Not a pin. Reads always return the latched data bit.
pub const IO_LATCH_BIT: u8 = 0x80;

// Lines a peripheral can drive.
pub const IO_LINES_MASK: u8 = 0x7F;

// Pins 5 and 8 wired to +5V and GND.
pub const PIN58_NORMAL: u8 = 0x02;
pub const PIN58_GND: u8 = 0x01;
pub const PIN58_VCC: u8 = 0x02;

// Serial control bits 0-2 are status, and read-only.
pub const SER_CTRL_WRITE_MASK: u8 = 0xF8;

// The serial receive path isn't emulated.
pub const SER_RX_IDLE: u8 = 0xFF;

// Nothing plugged in, every line pulled up.
pub const OPEN_BUS: u8 = 0x7F;
