//! Parsing command-line arguments.

use clap::parser::ValueSource;
use clap::{command, value_parser, Arg, ArgAction, ArgMatches};
use std::error::Error;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use toruslife_lib::{Config, Seed};

/// A struct to store the parse results.
pub struct Args {
    pub config: Config,
    pub tick: Duration,
    pub max_turns: u32,
    pub no_tui: bool,
}

/// Parses the command-line arguments.
///
/// A `--config` file supplies the base [`Config`]; explicit command-line
/// values override it.
pub fn parse() -> Result<Args, Box<dyn Error>> {
    let matches = command!()
        .arg(
            Arg::new("X")
                .help("Extent of the x axis (lines of the board)")
                .index(1)
                .default_value("24")
                .value_parser(value_parser!(i32).range(1..)),
        )
        .arg(
            Arg::new("Y")
                .help("Extent of the y axis (cells per line)")
                .index(2)
                .default_value("72")
                .value_parser(value_parser!(i32).range(1..)),
        )
        .arg(
            Arg::new("STRIPES")
                .help("Fill the first generation with stripes: every M-th cell is alive")
                .short('m')
                .long("stripes")
                .value_name("M")
                .value_parser(value_parser!(usize))
                .conflicts_with("FILE"),
        )
        .arg(
            Arg::new("FILE")
                .help("Load the first generation from a plaintext board file ('0' = dead)")
                .short('f')
                .long("file")
                .value_name("PATH")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("CONFIG")
                .help("Read the configuration from a TOML or JSON file")
                .long("config")
                .value_name("PATH")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("TICK")
                .help("Delay between turns in milliseconds")
                .short('t')
                .long("tick")
                .value_name("MS")
                .default_value("100")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("MAX")
                .help("Stop after this many turns; 0 means no limit")
                .long("max-turns")
                .value_name("N")
                .default_value("0")
                .value_parser(value_parser!(u32)),
        )
        .arg(
            Arg::new("NOTUI")
                .help("Print per-turn statistics instead of drawing the board")
                .short('n')
                .long("no-tui")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let mut config = match matches.get_one::<PathBuf>("CONFIG") {
        Some(path) => read_config(path)?,
        None => Config::new(24, 72),
    };
    if from_cli(&matches, "X") {
        config.width = *matches.get_one::<i32>("X").unwrap();
    }
    if from_cli(&matches, "Y") {
        config.height = *matches.get_one::<i32>("Y").unwrap();
    }
    if let Some(m) = matches.get_one::<usize>("STRIPES") {
        config.seed = Seed::Stripes(*m);
    }
    if let Some(path) = matches.get_one::<PathBuf>("FILE") {
        config.seed = Seed::File(path.clone());
    }

    Ok(Args {
        config,
        tick: Duration::from_millis(*matches.get_one::<u64>("TICK").unwrap()),
        max_turns: *matches.get_one::<u32>("MAX").unwrap(),
        no_tui: matches.get_flag("NOTUI"),
    })
}

/// Whether an argument was given explicitly, rather than defaulted.
fn from_cli(matches: &ArgMatches, id: &str) -> bool {
    matches.value_source(id) == Some(ValueSource::CommandLine)
}

/// Deserializes a [`Config`] from a TOML or JSON file, by extension.
fn read_config(path: &Path) -> Result<Config, Box<dyn Error>> {
    let text = fs::read_to_string(path)?;
    let config = match path.extension().and_then(OsStr::to_str) {
        Some("json") => serde_json::from_str(&text)?,
        _ => toml::from_str(&text)?,
    };
    Ok(config)
}
