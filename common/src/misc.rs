pub trait Nibbles: Copy {
    fn hi_nibble(self) -> u8;
    fn lo_nibble(self) -> u8;
}

impl Nibbles for u8 {
    fn hi_nibble(self) -> u8 {
        self >> 4
    }

    fn lo_nibble(self) -> u8 {
        self & 0x0F
    }
}

////////////////////////////////////////////////////////////////////////////////

// Active-low button words: a cleared bit is a pressed button.
pub trait ActiveLow: Copy {
    fn is_pressed(self, mask: u32) -> bool;
    fn pressed(self) -> u32;
}

impl ActiveLow for u32 {
    fn is_pressed(self, mask: u32) -> bool {
        self & mask == 0
    }

    fn pressed(self) -> u32 {
        !self
    }
}

////////////////////////////////////////////////////////////////////////////////

// Bits that went from clear to set.
pub fn rising(old: u8, new: u8, mask: u8) -> bool {
    (!old & new & mask) != 0
}

// Bits that went from set to clear.
pub fn falling(old: u8, new: u8, mask: u8) -> bool {
    (old & !new & mask) != 0
}

pub fn changed(old: u8, new: u8, mask: u8) -> bool {
    ((old ^ new) & mask) != 0
}
