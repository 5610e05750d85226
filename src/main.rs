// src/main.rs
use std::process;

fn main() {
    env_logger::init();

    if let Err(err) = wc::app::run_cli() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}
