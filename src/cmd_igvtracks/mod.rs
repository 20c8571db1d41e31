//! Subcommand modules for the `igvtracks` binary.

use clap::{Arg, ArgAction, ArgMatches};
use igvtracks::libs::config::Config;
use igvtracks::libs::sample::SampleType;
use igvtracks::libs::session::FamilyBundle;

pub mod locus;
pub mod session;
pub mod tracks;
pub mod types;

pub fn arg_types() -> Arg {
    Arg::new("type")
        .long("type")
        .short('t')
        .num_args(1)
        .action(ArgAction::Append)
        .value_parser(|s: &str| s.parse::<SampleType>().map_err(|e| e.to_string()))
        .help("Sample type to show; repeat for several")
}

pub fn arg_all() -> Arg {
    Arg::new("all")
        .long("all")
        .action(ArgAction::SetTrue)
        .conflicts_with("type")
        .help("Show every sample type of the family")
}

pub fn arg_config() -> Arg {
    Arg::new("config")
        .long("config")
        .num_args(1)
        .help("JSON config with track profiles, policy and browser options")
}

pub fn arg_outfile() -> Arg {
    Arg::new("outfile")
        .long("outfile")
        .short('o')
        .num_args(1)
        .default_value("stdout")
        .help("Output filename. [stdout] for screen")
}

/// `--type` values, or every type of the bundle with `--all`
pub fn enabled_types(args: &ArgMatches, bundle: &FamilyBundle) -> Vec<SampleType> {
    if args.get_flag("all") {
        bundle.sample_types()
    } else {
        args.get_many::<SampleType>("type")
            .map(|types| types.copied().collect())
            .unwrap_or_default()
    }
}

pub fn load_config(args: &ArgMatches) -> anyhow::Result<Config> {
    match args.get_one::<String>("config") {
        Some(path) => Config::from_path(path),
        None => Ok(Config::default()),
    }
}
