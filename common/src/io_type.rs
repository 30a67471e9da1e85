use std::fmt;
use std::str::FromStr;

use crate::buttons::*;
use crate::ports::{PhysPort, TapGroup, VirtPort};

use derive_more::IsVariant;
use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::FromPrimitive;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, ToPrimitive, IsVariant)]
pub enum IoType {
    None = 0,
    ThreeButton,
    SixButton,
    TwoButton,
    MegaMouse,
    TeamPlayer,
    FourWayMaster,
    FourWaySlave,
    Xe1ap,
    ColecoVision,
    Pico,
    MasterTap,
}

pub const fn fourcc(code: &[u8; 4]) -> u32 {
    u32::from_be_bytes(*code)
}

pub fn fourcc_to_string(code: u32) -> String {
    code.to_be_bytes().iter().map(|b| *b as char).collect()
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FourCCError {
    #[error("FourCC \"{0}\" must be 1 to 4 ASCII characters")]
    Malformed(String),

    #[error("Unknown device FourCC \"{0}\"")]
    Unknown(String),
}

// Bit index of a button in the buttons word, and what to call it.
pub type LogicalButton = (u8, ButtonName);

pub struct IoTypeInfo {
    pub fourcc: u32,
    pub name: &'static str,
    pub buttons: &'static [LogicalButton],
    pub has_dpad: bool,
    pub usable: bool,
}

const fn bit(mask: u32) -> u8 {
    mask.trailing_zeros() as u8
}

const BUTTONS_3BTN: &[LogicalButton] = &[
    (bit(BTN_UP), ButtonName::Up),
    (bit(BTN_DOWN), ButtonName::Down),
    (bit(BTN_LEFT), ButtonName::Left),
    (bit(BTN_RIGHT), ButtonName::Right),
    (bit(BTN_START), ButtonName::Start),
    (bit(BTN_A), ButtonName::A),
    (bit(BTN_B), ButtonName::B),
    (bit(BTN_C), ButtonName::C),
];

const BUTTONS_6BTN: &[LogicalButton] = &[
    (bit(BTN_UP), ButtonName::Up),
    (bit(BTN_DOWN), ButtonName::Down),
    (bit(BTN_LEFT), ButtonName::Left),
    (bit(BTN_RIGHT), ButtonName::Right),
    (bit(BTN_START), ButtonName::Start),
    (bit(BTN_A), ButtonName::A),
    (bit(BTN_B), ButtonName::B),
    (bit(BTN_C), ButtonName::C),
    (bit(BTN_MODE), ButtonName::Mode),
    (bit(BTN_X), ButtonName::X),
    (bit(BTN_Y), ButtonName::Y),
    (bit(BTN_Z), ButtonName::Z),
];

const BUTTONS_2BTN: &[LogicalButton] = &[
    (bit(BTN_UP), ButtonName::Up),
    (bit(BTN_DOWN), ButtonName::Down),
    (bit(BTN_LEFT), ButtonName::Left),
    (bit(BTN_RIGHT), ButtonName::Right),
    (bit(BTN_1), ButtonName::Button1),
    (bit(BTN_2), ButtonName::Button2),
    (bit(BTN_PAUSE), ButtonName::Pause),
];

const BUTTONS_MOUSE: &[LogicalButton] = &[
    (bit(BTN_MOUSE_LEFT), ButtonName::MouseLeft),
    (bit(BTN_MOUSE_MIDDLE), ButtonName::MouseMiddle),
    (bit(BTN_MOUSE_RIGHT), ButtonName::MouseRight),
    (bit(BTN_MOUSE_START), ButtonName::MouseStart),
];

const BUTTONS_XE1AP: &[LogicalButton] = &[
    (bit(BTN_XE1AP_A), ButtonName::XeA),
    (bit(BTN_XE1AP_B), ButtonName::XeB),
    (bit(BTN_XE1AP_C), ButtonName::XeC),
    (bit(BTN_XE1AP_D), ButtonName::XeD),
    (bit(BTN_XE1AP_E1), ButtonName::XeE1),
    (bit(BTN_XE1AP_E2), ButtonName::XeE2),
    (bit(BTN_XE1AP_START), ButtonName::XeStart),
    (bit(BTN_XE1AP_SELECT), ButtonName::XeSelect),
    (bit(BTN_XE1AP_A2), ButtonName::XeA2),
    (bit(BTN_XE1AP_B2), ButtonName::XeB2),
];

const BUTTONS_COLECO: &[LogicalButton] = &[
    (bit(BTN_UP), ButtonName::Up),
    (bit(BTN_DOWN), ButtonName::Down),
    (bit(BTN_LEFT), ButtonName::Left),
    (bit(BTN_RIGHT), ButtonName::Right),
    (bit(BTN_CV_FIRE_L), ButtonName::FireLeft),
    (bit(BTN_CV_FIRE_R), ButtonName::FireRight),
    (bit(cv_key(1)), ButtonName::Key(1)),
    (bit(cv_key(2)), ButtonName::Key(2)),
    (bit(cv_key(3)), ButtonName::Key(3)),
    (bit(cv_key(4)), ButtonName::Key(4)),
    (bit(cv_key(5)), ButtonName::Key(5)),
    (bit(cv_key(6)), ButtonName::Key(6)),
    (bit(cv_key(7)), ButtonName::Key(7)),
    (bit(cv_key(8)), ButtonName::Key(8)),
    (bit(cv_key(9)), ButtonName::Key(9)),
    (bit(BTN_CV_STAR), ButtonName::KeyStar),
    (bit(cv_key(0)), ButtonName::Key(0)),
    (bit(BTN_CV_HASH), ButtonName::KeyHash),
];

const BUTTONS_PICO: &[LogicalButton] = &[
    (bit(BTN_UP), ButtonName::Up),
    (bit(BTN_DOWN), ButtonName::Down),
    (bit(BTN_LEFT), ButtonName::Left),
    (bit(BTN_RIGHT), ButtonName::Right),
    (bit(BTN_PICO_RED), ButtonName::PicoRed),
    (bit(BTN_PICO_PEN), ButtonName::PicoPen),
    (bit(BTN_PICO_PAGE_DOWN), ButtonName::PageDown),
    (bit(BTN_PICO_PAGE_UP), ButtonName::PageUp),
];

static IO_TYPE_INFO: [IoTypeInfo; IoType::COUNT] = [
    IoTypeInfo { fourcc: fourcc(b"NONE"), name: "None", buttons: &[], has_dpad: false, usable: true },
    IoTypeInfo { fourcc: fourcc(b"3BTN"), name: "3-button", buttons: BUTTONS_3BTN, has_dpad: true, usable: true },
    IoTypeInfo { fourcc: fourcc(b"6BTN"), name: "6-button", buttons: BUTTONS_6BTN, has_dpad: true, usable: true },
    IoTypeInfo { fourcc: fourcc(b"2BTN"), name: "2-button", buttons: BUTTONS_2BTN, has_dpad: true, usable: true },
    IoTypeInfo { fourcc: fourcc(b"MOUS"), name: "Mega Mouse", buttons: BUTTONS_MOUSE, has_dpad: false, usable: true },
    IoTypeInfo { fourcc: fourcc(b"TEAM"), name: "Team Player", buttons: &[], has_dpad: false, usable: true },
    IoTypeInfo { fourcc: fourcc(b"4WPM"), name: "4-Way Play (master)", buttons: &[], has_dpad: false, usable: true },
    IoTypeInfo { fourcc: fourcc(b"4WPS"), name: "4-Way Play (slave)", buttons: &[], has_dpad: false, usable: true },
    // Nothing commercial has been verified against it yet.
    IoTypeInfo { fourcc: fourcc(b"XE1A"), name: "XE-1AP", buttons: BUTTONS_XE1AP, has_dpad: false, usable: cfg!(debug_assertions) },
    IoTypeInfo { fourcc: fourcc(b"COLV"), name: "ColecoVision", buttons: BUTTONS_COLECO, has_dpad: true, usable: true },
    IoTypeInfo { fourcc: fourcc(b"PICO"), name: "Sega Pico", buttons: BUTTONS_PICO, has_dpad: true, usable: true },
    IoTypeInfo { fourcc: fourcc(b"MTAP"), name: "Master Tap", buttons: &[], has_dpad: false, usable: true },
];

impl IoType {
    pub const COUNT: usize = 12;

    pub fn all() -> impl Iterator<Item = IoType> {
        (0..Self::COUNT).map(|i| IoType::from_usize(i).unwrap())
    }

    pub fn info(self) -> &'static IoTypeInfo {
        &IO_TYPE_INFO[self as usize]
    }

    pub fn fourcc(self) -> u32 {
        self.info().fourcc
    }

    pub fn from_fourcc(code: u32) -> Option<IoType> {
        IoType::all().find(|t| t.fourcc() == code)
    }

    pub fn name(self) -> &'static str {
        self.info().name
    }

    pub fn num_buttons(self) -> usize {
        self.info().buttons.len()
    }

    pub fn has_dpad(self) -> bool {
        self.info().has_dpad
    }

    pub fn is_usable(self) -> bool {
        self.info().usable
    }

    pub fn button_name(self, bit: u8) -> Option<ButtonName> {
        self.info().buttons.iter().find(|(b, _)| *b == bit).map(|(_, name)| *name)
    }

    pub fn first_logical_button(self) -> Option<u8> {
        self.info().buttons.first().map(|(b, _)| *b)
    }

    // The button after `bit` in UI order.
    pub fn next_logical_button(self, bit: u8) -> Option<u8> {
        let buttons = self.info().buttons;
        let pos = buttons.iter().position(|(b, _)| *b == bit)?;
        buttons.get(pos + 1).map(|(b, _)| *b)
    }

    pub fn is_multitap(self) -> bool {
        matches!(self, IoType::TeamPlayer | IoType::FourWaySlave | IoType::MasterTap)
    }

    // The sub-ports a multitap of this type owns when plugged into `port`.
    pub fn tap_group(self, port: PhysPort) -> Option<TapGroup> {
        match (self, port) {
            (IoType::TeamPlayer, PhysPort::Port1) => Some(TapGroup::TeamPlayer1),
            (IoType::TeamPlayer, PhysPort::Port2) => Some(TapGroup::TeamPlayer2),
            (IoType::FourWaySlave, PhysPort::Port1) => Some(TapGroup::FourWayPlay),
            (IoType::MasterTap, PhysPort::Port1) => Some(TapGroup::MasterTap1),
            (IoType::MasterTap, PhysPort::Port2) => Some(TapGroup::MasterTap2),
            _ => None,
        }
    }

    // Which pads each multitap can talk to.
    pub fn fits_sub_port(self, group: TapGroup) -> bool {
        let pads: &[IoType] = match group {
            TapGroup::TeamPlayer1 | TapGroup::TeamPlayer2 => {
                &[IoType::None, IoType::ThreeButton, IoType::SixButton, IoType::MegaMouse]
            }
            TapGroup::FourWayPlay => &[IoType::None, IoType::ThreeButton, IoType::SixButton],
            TapGroup::MasterTap1 | TapGroup::MasterTap2 => &[IoType::None, IoType::TwoButton],
        };
        pads.contains(&self)
    }

    pub fn is_valid_for(self, port: VirtPort) -> bool {
        if let Some(group) = port.group() {
            return self.fits_sub_port(group);
        }
        match self {
            IoType::FourWayMaster => port == VirtPort::Port2,
            IoType::FourWaySlave => port == VirtPort::Port1,
            IoType::TeamPlayer | IoType::MasterTap => port != VirtPort::PortExt,
            _ => true,
        }
    }
}

impl fmt::Display for IoType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", fourcc_to_string(self.fourcc()))
    }
}

impl FromStr for IoType {
    type Err = FourCCError;

    // Short codes are padded with spaces.
    fn from_str(s: &str) -> Result<IoType, FourCCError> {
        if s.is_empty() || s.len() > 4 || !s.is_ascii() {
            return Err(FourCCError::Malformed(s.to_string()));
        }
        let mut code = [b' '; 4];
        for (dst, src) in code.iter_mut().zip(s.to_ascii_uppercase().bytes()) {
            *dst = src;
        }
        IoType::from_fourcc(fourcc(&code)).ok_or_else(|| FourCCError::Unknown(s.to_string()))
    }
}
