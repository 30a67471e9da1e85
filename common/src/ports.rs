use std::fmt;

use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::FromPrimitive;

/// One of the console's real connectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, ToPrimitive)]
pub enum PhysPort {
    Port1 = 0,
    Port2,
    PortExt,
}

impl PhysPort {
    pub const COUNT: usize = 3;
    pub const ALL: [PhysPort; Self::COUNT] = [PhysPort::Port1, PhysPort::Port2, PhysPort::PortExt];

    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for PhysPort {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", VirtPort::from(*self).name())
    }
}

impl From<PhysPort> for VirtPort {
    fn from(port: PhysPort) -> VirtPort {
        match port {
            PhysPort::Port1 => VirtPort::Port1,
            PhysPort::Port2 => VirtPort::Port2,
            PhysPort::PortExt => VirtPort::PortExt,
        }
    }
}

/// Every controller slot tracked independently, physical ports first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, ToPrimitive)]
pub enum VirtPort {
    Port1 = 0,
    Port2,
    PortExt,

    // Team Player on port 1
    Tp1A,
    Tp1B,
    Tp1C,
    Tp1D,

    // Team Player on port 2
    Tp2A,
    Tp2B,
    Tp2C,
    Tp2D,

    // EA 4-Way Play
    Wp4A,
    Wp4B,
    Wp4C,
    Wp4D,

    // Master Tap on port 1
    Mt1A,
    Mt1B,
    Mt1C,
    Mt1D,

    // Master Tap on port 2
    Mt2A,
    Mt2B,
    Mt2C,
    Mt2D,
}

/// The kind of multitap a group of sub-ports belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapGroup {
    TeamPlayer1,
    TeamPlayer2,
    FourWayPlay,
    MasterTap1,
    MasterTap2,
}

impl TapGroup {
    pub fn first(self) -> VirtPort {
        match self {
            TapGroup::TeamPlayer1 => VirtPort::Tp1A,
            TapGroup::TeamPlayer2 => VirtPort::Tp2A,
            TapGroup::FourWayPlay => VirtPort::Wp4A,
            TapGroup::MasterTap1 => VirtPort::Mt1A,
            TapGroup::MasterTap2 => VirtPort::Mt2A,
        }
    }

    // The physical port the multitap hangs off. The 4-Way Play slave takes port 1.
    pub fn parent(self) -> PhysPort {
        match self {
            TapGroup::TeamPlayer1 | TapGroup::FourWayPlay | TapGroup::MasterTap1 => PhysPort::Port1,
            TapGroup::TeamPlayer2 | TapGroup::MasterTap2 => PhysPort::Port2,
        }
    }

    pub fn ports(self) -> [VirtPort; VirtPort::SUB_PORTS] {
        let first = self.first() as usize;
        std::array::from_fn(|i| VirtPort::from_usize(first + i).unwrap())
    }
}

impl VirtPort {
    pub const COUNT: usize = 23;
    pub const SUB_PORTS: usize = 4;

    const NAMES: [&'static str; Self::COUNT] = [
        "1", "2", "EXT",
        "TP1A", "TP1B", "TP1C", "TP1D",
        "TP2A", "TP2B", "TP2C", "TP2D",
        "4WPA", "4WPB", "4WPC", "4WPD",
        "MT1A", "MT1B", "MT1C", "MT1D",
        "MT2A", "MT2B", "MT2C", "MT2D",
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn all() -> impl Iterator<Item = VirtPort> {
        (0..Self::COUNT).map(|i| VirtPort::from_usize(i).unwrap())
    }

    pub fn is_physical(self) -> bool {
        self.index() < PhysPort::COUNT
    }

    pub fn phys(self) -> Option<PhysPort> {
        PhysPort::from_usize(self.index())
    }

    pub fn group(self) -> Option<TapGroup> {
        use VirtPort::*;
        match self {
            Port1 | Port2 | PortExt => None,
            Tp1A | Tp1B | Tp1C | Tp1D => Some(TapGroup::TeamPlayer1),
            Tp2A | Tp2B | Tp2C | Tp2D => Some(TapGroup::TeamPlayer2),
            Wp4A | Wp4B | Wp4C | Wp4D => Some(TapGroup::FourWayPlay),
            Mt1A | Mt1B | Mt1C | Mt1D => Some(TapGroup::MasterTap1),
            Mt2A | Mt2B | Mt2C | Mt2D => Some(TapGroup::MasterTap2),
        }
    }

    pub fn parent(self) -> Option<PhysPort> {
        self.group().map(TapGroup::parent)
    }

    // Position within the multitap, 0 through 3.
    pub fn sub_index(self) -> Option<usize> {
        self.group().map(|g| self.index() - g.first().index())
    }

    pub fn name(self) -> &'static str {
        Self::NAMES[self.index()]
    }

    pub fn from_name(name: &str) -> Option<VirtPort> {
        let name = name.trim();
        Self::NAMES
            .iter()
            .position(|n| n.eq_ignore_ascii_case(name))
            .and_then(VirtPort::from_usize)
    }
}

impl fmt::Display for VirtPort {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
