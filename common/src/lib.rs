pub mod buttons;
pub mod constants;
pub mod io_type;
pub mod misc;
pub mod ports;
