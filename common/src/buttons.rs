use std::fmt;

use derive_more::IsVariant;

// Standard pads. Active-low: a cleared bit is a pressed button.
pub const BTN_UP: u32 = 0x01;
pub const BTN_DOWN: u32 = 0x02;
pub const BTN_LEFT: u32 = 0x04;
pub const BTN_RIGHT: u32 = 0x08;
pub const BTN_B: u32 = 0x10;
pub const BTN_C: u32 = 0x20;
pub const BTN_A: u32 = 0x40;
pub const BTN_START: u32 = 0x80;
pub const BTN_Z: u32 = 0x100;
pub const BTN_Y: u32 = 0x200;
pub const BTN_X: u32 = 0x400;
pub const BTN_MODE: u32 = 0x800;

// SMS pads share the lower bits with MD pads.
pub const BTN_1: u32 = BTN_B;
pub const BTN_2: u32 = BTN_C;
pub const BTN_PAUSE: u32 = BTN_START;

// Mega Mouse. Active-high.
pub const BTN_MOUSE_LEFT: u32 = 0x01;
pub const BTN_MOUSE_RIGHT: u32 = 0x02;
pub const BTN_MOUSE_MIDDLE: u32 = 0x04;
pub const BTN_MOUSE_START: u32 = 0x08;

// XE-1AP.
pub const BTN_XE1AP_D: u32 = 0x01;
pub const BTN_XE1AP_C: u32 = 0x02;
pub const BTN_XE1AP_B: u32 = 0x04;
pub const BTN_XE1AP_A: u32 = 0x08;
pub const BTN_XE1AP_SELECT: u32 = 0x10;
pub const BTN_XE1AP_START: u32 = 0x20;
pub const BTN_XE1AP_E2: u32 = 0x40;
pub const BTN_XE1AP_E1: u32 = 0x80;
pub const BTN_XE1AP_B2: u32 = 0x100;
pub const BTN_XE1AP_A2: u32 = 0x200;

// ColecoVision. Keys 0-9 are BTN_CV_0 << n.
pub const BTN_CV_FIRE_L: u32 = 0x10;
pub const BTN_CV_FIRE_R: u32 = 0x20;
pub const BTN_CV_0: u32 = 0x100;
pub const BTN_CV_STAR: u32 = 0x40000;
pub const BTN_CV_HASH: u32 = 0x80000;

// Sega Pico.
pub const BTN_PICO_RED: u32 = 0x10;
pub const BTN_PICO_PEN: u32 = 0x80;
pub const BTN_PICO_PAGE_DOWN: u32 = 0x100;
pub const BTN_PICO_PAGE_UP: u32 = 0x200;

pub const BUTTONS_RELEASED: u32 = !0;
pub const BUTTONS_RELEASED_ACTIVE_HIGH: u32 = 0;

pub const fn cv_key(n: u32) -> u32 {
    assert!(n <= 9);
    BTN_CV_0 << n
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum ButtonName {
    Up,
    Down,
    Left,
    Right,
    A,
    B,
    C,
    Start,
    X,
    Y,
    Z,
    Mode,

    // SMS
    Button1,
    Button2,
    Pause,

    // Mega Mouse
    MouseLeft,
    MouseMiddle,
    MouseRight,
    MouseStart,

    // XE-1AP
    XeA,
    XeB,
    XeC,
    XeD,
    XeE1,
    XeE2,
    XeStart,
    XeSelect,
    XeA2,
    XeB2,

    // ColecoVision
    FireLeft,
    FireRight,
    Key(u8),
    KeyStar,
    KeyHash,

    // Pico
    PicoRed,
    PicoPen,
    PageDown,
    PageUp,
}

impl ButtonName {
    pub fn as_str(&self) -> &'static str {
        use ButtonName::*;
        match self {
            Up => "Up",
            Down => "Down",
            Left => "Left",
            Right => "Right",
            A => "A",
            B => "B",
            C => "C",
            Start => "Start",
            X => "X",
            Y => "Y",
            Z => "Z",
            Mode => "Mode",
            Button1 => "1",
            Button2 => "2",
            Pause => "Pause",
            MouseLeft => "Left Click",
            MouseMiddle => "Middle Click",
            MouseRight => "Right Click",
            MouseStart => "Start",
            XeA => "A",
            XeB => "B",
            XeC => "C",
            XeD => "D",
            XeE1 => "E1",
            XeE2 => "E2",
            XeStart => "Start",
            XeSelect => "Select",
            XeA2 => "A'",
            XeB2 => "B'",
            FireLeft => "Left Fire",
            FireRight => "Right Fire",
            Key(0) => "0",
            Key(1) => "1",
            Key(2) => "2",
            Key(3) => "3",
            Key(4) => "4",
            Key(5) => "5",
            Key(6) => "6",
            Key(7) => "7",
            Key(8) => "8",
            Key(9) => "9",
            Key(_) => "?",
            KeyStar => "*",
            KeyHash => "#",
            PicoRed => "Red",
            PicoPen => "Pen",
            PageDown => "Page Down",
            PageUp => "Page Up",
        }
    }
}

impl fmt::Display for ButtonName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
