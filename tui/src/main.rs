mod args;
mod chart;
mod tui;

use std::{error::Error, process};

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let args = args::parse()?;
    if args.no_tui {
        tui::run_headless(&args)
    } else {
        tui::run(&args)
    }
}
