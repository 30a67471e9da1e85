use io_lib::{run_script, IoConfig, IoManager};

use clap::Parser;


/// Mega Drive / Master System controller port probe
#[derive(Parser)]
struct Args {
    /// Register script to run
    script: String,

    /// Device to connect, as PORT=FOURCC (e.g. 1=6BTN, TP1A=MOUS). May be repeated.
    #[arg(long = "port")]
    ports: Vec<String>,

    /// Release both directions when opposite D-pad directions are held.
    #[arg(long)]
    constrain_dpad: bool,
}



fn main() {
    env_logger::init();

    let opt = Args::parse();

    let config = IoConfig::from_args(&opt.ports, opt.constrain_dpad).unwrap();
    let mut io = IoManager::new();
    config.apply(&mut io).unwrap();

    let script = std::fs::read_to_string(opt.script).unwrap();
    for line in run_script(&mut io, &script).unwrap() {
        println!("{line}");
    }
}
