//! Register scripts: one command per line, driving an IoManager the way a CPU
//! core would and collecting everything read back.
//!
//! ```text
//! type 1 6BTN
//! buttons 1 FFFFFF7F
//! ctrl 1 40
//! data 1 40
//! read 1
//! ```

use std::str::FromStr;

use crate::config::ConfigError;
use crate::io_manager::IoManager;
use crate::savestate::ZomgMdIoSave;

use common::io_type::IoType;
use common::ports::{PhysPort, VirtPort};

use log::debug;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScriptError {
    #[error("Line {line}: unknown command \"{cmd}\"")]
    UnknownCommand { line: usize, cmd: String },

    #[error("Line {line}: missing argument")]
    MissingArgument { line: usize },

    #[error("Line {line}: bad argument \"{arg}\"")]
    BadArgument { line: usize, arg: String },

    #[error("Line {line}: {source}")]
    Config { line: usize, source: ConfigError },

    #[error("Line {line}: restore without save")]
    NothingSaved { line: usize },
}

struct Args<'a> {
    line: usize,
    words: std::str::SplitWhitespace<'a>,
}

impl<'a> Args<'a> {
    fn next(&mut self) -> Result<&'a str, ScriptError> {
        self.words.next().ok_or(ScriptError::MissingArgument { line: self.line })
    }

    fn bad(&self, arg: &str) -> ScriptError {
        ScriptError::BadArgument { line: self.line, arg: arg.to_string() }
    }

    fn virt_port(&mut self) -> Result<VirtPort, ScriptError> {
        let arg = self.next()?;
        VirtPort::from_name(arg).ok_or_else(|| self.bad(arg))
    }

    fn phys_port(&mut self) -> Result<PhysPort, ScriptError> {
        let arg = self.next()?;
        VirtPort::from_name(arg).and_then(VirtPort::phys).ok_or_else(|| self.bad(arg))
    }

    fn hex_u8(&mut self) -> Result<u8, ScriptError> {
        let arg = self.next()?;
        u8::from_str_radix(arg.trim_start_matches("0x"), 16).map_err(|_| self.bad(arg))
    }

    fn hex_u32(&mut self) -> Result<u32, ScriptError> {
        let arg = self.next()?;
        u32::from_str_radix(arg.trim_start_matches("0x"), 16).map_err(|_| self.bad(arg))
    }

    fn int(&mut self) -> Result<i32, ScriptError> {
        let arg = self.next()?;
        arg.parse().map_err(|_| self.bad(arg))
    }

    fn io_type(&mut self) -> Result<IoType, ScriptError> {
        let arg = self.next()?;
        IoType::from_str(arg).map_err(|e| ScriptError::Config { line: self.line, source: e.into() })
    }
}

/// Run `script` against `io`. Returns one line per value read.
pub fn run_script(io: &mut IoManager, script: &str) -> Result<Vec<String>, ScriptError> {
    let mut out = Vec::new();
    let mut saved: Option<ZomgMdIoSave> = None;

    for (i, text) in script.lines().enumerate() {
        let line = i + 1;
        let text = text.split('#').next().unwrap_or("");
        let mut words = text.split_whitespace();
        let Some(cmd) = words.next() else {
            continue;
        };
        let mut args = Args { line, words };
        debug!("{}: {}", line, text.trim());

        match cmd.to_ascii_lowercase().as_str() {
            "type" => {
                let port = args.virt_port()?;
                let io_type = args.io_type()?;
                io.set_dev_type(port, io_type)
                    .map_err(|e| ScriptError::Config { line, source: e.into() })?;
            }
            "buttons" => {
                let port = args.virt_port()?;
                let buttons = args.hex_u32()?;
                io.set_buttons(port, buttons);
            }
            "mouse" => {
                let port = args.virt_port()?;
                let dx = args.int()?;
                let dy = args.int()?;
                io.mouse_move(port, dx, dy);
            }
            "analog" => {
                let port = args.virt_port()?;
                let x = args.hex_u8()?;
                let y = args.hex_u8()?;
                let z = args.hex_u8()?;
                io.set_analog(port, x, y, z);
            }
            "pin58" => {
                let port = args.phys_port()?;
                let val = args.hex_u8()?;
                io.set_pin58(port, val);
            }
            "ctrl" => {
                let port = args.phys_port()?;
                let val = args.hex_u8()?;
                io.write_ctrl_md(port, val);
            }
            "data" => {
                let port = args.phys_port()?;
                let val = args.hex_u8()?;
                io.write_data_md(port, val);
            }
            "read" => {
                let port = args.phys_port()?;
                out.push(format!("read {}: {:02X}", port, io.read_data_md(port)));
            }
            "readctrl" => {
                let port = args.phys_port()?;
                out.push(format!("readctrl {}: {:02X}", port, io.read_ctrl_md(port)));
            }
            "sctrl" => {
                let port = args.phys_port()?;
                let val = args.hex_u8()?;
                io.write_ser_ctrl(port, val);
            }
            "stx" => {
                let port = args.phys_port()?;
                let val = args.hex_u8()?;
                io.write_ser_tx(port, val);
            }
            "rsctrl" => {
                let port = args.phys_port()?;
                out.push(format!("rsctrl {}: {:02X}", port, io.read_ser_ctrl(port)));
            }
            "rstx" => {
                let port = args.phys_port()?;
                out.push(format!("rstx {}: {:02X}", port, io.read_ser_tx(port)));
            }
            "rrx" => {
                let port = args.phys_port()?;
                out.push(format!("rrx {}: {:02X}", port, io.read_ser_rx(port)));
            }
            "smsctrl" => {
                let val = args.hex_u8()?;
                io.write_ctrl_sms(val);
            }
            "dc" => out.push(format!("dc: {:02X}", io.read_data_sms_dc())),
            "dd" => out.push(format!("dd: {:02X}", io.read_data_sms_dd())),
            "pause" => out.push(format!("pause: {}", io.is_pause_sms())),
            "ggstart" => out.push(format!("ggstart: {:02X}", io.read_start_gg())),
            "scanline" => {
                let count = match args.words.next() {
                    Some(arg) => arg.parse::<u32>().map_err(|_| args.bad(arg))?,
                    None => 1,
                };
                for _ in 0..count {
                    io.do_scanline();
                }
            }
            "reset" => io.reset(),
            "save" => saved = Some(io.zomg_save_md()),
            "restore" => {
                let save = saved.as_ref().ok_or(ScriptError::NothingSaved { line })?;
                io.zomg_restore_md(save);
            }
            _ => return Err(ScriptError::UnknownCommand { line, cmd: cmd.to_string() }),
        }

        for event in io.drain_events() {
            out.push(format!("event: {:?}", event));
        }
    }

    Ok(out)
}
