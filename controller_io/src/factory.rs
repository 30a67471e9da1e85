use crate::device::{Device, DeviceKind};
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

use common::io_type::IoType;
use common::ports::VirtPort;

/// Build a device of `io_type` for `port`. Returns None for combinations that
/// can't exist: the 4-Way Play halves on the wrong port, or an empty sub-port.
pub fn create(io_type: IoType, port: VirtPort) -> Option<Device> {
    let kind = match io_type {
        IoType::None => {
            if !port.is_physical() {
                return None;
            }
            DeviceKind::None(NullDevice())
        }
        IoType::ThreeButton => DeviceKind::ThreeButton(ThreeButton()),
        IoType::SixButton => DeviceKind::SixButton(SixButton::new()),
        IoType::TwoButton => DeviceKind::TwoButton(TwoButton()),
        IoType::MegaMouse => DeviceKind::MegaMouse(MegaMouse::new()),
        IoType::TeamPlayer => DeviceKind::TeamPlayer(TeamPlayer::new()),
        IoType::FourWayMaster => {
            if port != VirtPort::Port2 {
                return None;
            }
            DeviceKind::FourWayMaster(FourWayMaster::default())
        }
        IoType::FourWaySlave => {
            if port != VirtPort::Port1 {
                return None;
            }
            DeviceKind::FourWaySlave(FourWaySlave::default())
        }
        IoType::Xe1ap => DeviceKind::Xe1ap(Xe1ap::new()),
        IoType::ColecoVision => DeviceKind::ColecoVision(ColecoVision()),
        IoType::Pico => DeviceKind::Pico(Pico::new()),
        IoType::MasterTap => DeviceKind::MasterTap(MasterTap::new()),
    };
    Some(Device::new(kind))
}
