#![cfg(test)]

mod helpers;

mod coleco;
mod dev_type;
mod four_way_play;
mod io_type;
mod master_tap;
mod mouse;
mod pico;
mod savestate;
mod script;
mod six_button;
mod sms;
mod team_player;
mod three_button;
mod tristate;
mod xe1ap;
