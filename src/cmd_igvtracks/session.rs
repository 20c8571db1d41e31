use clap::*;
use igvtracks::libs::session::{FamilyBundle, IgvSession};
use std::io::Write;

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    Command::new("session")
        .about("Writes a complete browser session of one family")
        .after_help(
            r###"
The session holds the reference genome of the family's project, the locus of the bundled
variant (when there is one), the assembled tracks and the browser options.

Notes:
* Reference tracks are kept only while an RNA type (coverage, splice-junction) is shown
* The locus uses lifted-over coordinates when the variant's build differs from the project's

Examples:
1. Session with RNA tracks:
   igvtracks session family.json -t splice-junction -t coverage

"###,
        )
        .arg(
            Arg::new("infile")
                .required(true)
                .index(1)
                .help("Family bundle in JSON"),
        )
        .arg(super::arg_types())
        .arg(super::arg_all())
        .arg(super::arg_config())
        .arg(super::arg_outfile())
}

// command implementation
pub fn execute(args: &ArgMatches) -> anyhow::Result<()> {
    let infile = args.get_one::<String>("infile").unwrap();
    let mut writer = igvtracks::writer(args.get_one::<String>("outfile").unwrap())?;

    let bundle: FamilyBundle = igvtracks::read_json(infile)?;
    let enabled = super::enabled_types(args, &bundle);
    let config = super::load_config(args)?;

    let session = IgvSession::compose(&bundle, &enabled, &config)?;

    serde_json::to_writer_pretty(&mut writer, &session)?;
    writeln!(writer)?;
    writer.flush()?;

    Ok(())
}
