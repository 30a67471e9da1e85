use io_lib::{run_script, IoConfig, IoManager};
use common::io_type::IoType;
use common::ports::VirtPort;

#[test]
fn six_button_script() {
    let script = r#"
        type 1 6BTN
        buttons 1 FFFFFFBF
        ctrl 1 40
        data 1 40
        read 1
        data 1 00
        read 1
    "#;

    let mut io = IoManager::new();
    let out = run_script(&mut io, script).unwrap();
    assert_eq!(out, vec!["read 1: 7F", "read 1: 23"]);
}

#[test]
fn sms_script() {
    let script = r#"
        type 1 2BTN
        type 2 2btn   # lower case is fine
        smsctrl FF
        buttons 2 FFFFFF7F
        dc
        dd
        pause
        ggstart
    "#;

    let mut io = IoManager::new();
    let out = run_script(&mut io, script).unwrap();
    assert_eq!(out, vec!["dc: FF", "dd: FF", "pause: true", "ggstart: 00"]);
}

#[test]
fn save_and_restore() {
    let script = r#"
        ctrl 1 40
        stx 2 33
        save
        ctrl 1 00
        stx 2 44
        restore
        readctrl 1
        rstx 2
        rrx 2
    "#;

    let mut io = IoManager::new();
    let out = run_script(&mut io, script).unwrap();
    assert_eq!(out, vec!["readctrl 1: 40", "rstx 2: 33", "rrx 2: FF"]);
}

#[test]
fn pico_events() {
    let script = r#"
        type 1 PICO
        buttons 1 FFFFFEFF
        buttons 1 FFFFFFFF
    "#;

    let mut io = IoManager::new();
    let out = run_script(&mut io, script).unwrap();
    assert_eq!(out, vec!["event: PicoPageChanged { page: 1 }"]);
}

#[test]
fn config() {
    let config = IoConfig::from_args(&["TP1B=MOUS", "1=TEAM", "2=6btn"], true).unwrap();
    let mut io = IoManager::new();
    config.apply(&mut io).unwrap();

    assert_eq!(io.dev_type(VirtPort::Port1), IoType::TeamPlayer);
    assert_eq!(io.dev_type(VirtPort::Port2), IoType::SixButton);
    assert_eq!(io.dev_type(VirtPort::Tp1B), IoType::MegaMouse);
    assert!(io.constrain_dpad());
}

#[test]
fn config_rejects_placement() {
    let config = IoConfig::from_args(&["EXT=TEAM"], false).unwrap();
    let mut io = IoManager::new();
    assert!(config.apply(&mut io).is_err());
    assert_eq!(io.dev_type(VirtPort::PortExt), IoType::None);
}
