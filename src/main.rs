use std::io;
use std::process;

use clap::Parser;
use log::error;

use powerset::cli::{run, Args};

fn main() {
    env_logger::init();

    let args = Args::parse();
    let stdout = io::stdout();

    if let Err(err) = run(&args, &mut stdout.lock()) {
        error!("{}", err);
        eprintln!("{}", err);
        process::exit(1);
    }
}
