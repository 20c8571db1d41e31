use clap::*;
use igvtracks::libs::assemble::TrackAssembler;
use igvtracks::libs::session::FamilyBundle;
use std::io::Write;

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    Command::new("tracks")
        .about("Assembles the track descriptors of one family")
        .after_help(
            r###"
Reads a family bundle (individuals, samples by type and individual, reference tracks)
and writes the descriptors of the enabled sample types as a JSON array.

Notes:
* Reference tracks are passed through ahead of the family's tracks
* Splice junctions are merged with the coverage of the same individual
* Copy-number records sharing a file are collapsed into one batch track
* Supports both plain text and gzipped (.gz) files
* Reads from stdin if input file is 'stdin'

Examples:
1. Alignments only:
   igvtracks tracks family.json -t alignment

2. Coverage only, dropping individuals that also have junction files:
   igvtracks tracks family.json -t coverage --hide-coverage-with-junctions

3. Everything:
   igvtracks tracks family.json --all -o tracks.json

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
        .arg(
            Arg::new("hide_coverage")
                .long("hide-coverage-with-junctions")
                .action(ArgAction::SetTrue)
                .help("Hide coverage of individuals with a junction file, even when junctions are not shown"),
        )
        .arg(super::arg_config())
        .arg(super::arg_outfile())
}

// command implementation
pub fn execute(args: &ArgMatches) -> anyhow::Result<()> {
    //----------------------------
    // Args
    //----------------------------
    let infile = args.get_one::<String>("infile").unwrap();
    let mut writer = igvtracks::writer(args.get_one::<String>("outfile").unwrap())?;

    let bundle: FamilyBundle = igvtracks::read_json(infile)?;
    let enabled = super::enabled_types(args, &bundle);

    let mut config = super::load_config(args)?;
    if args.get_flag("hide_coverage") {
        config.policy.suppress_coverage_if_junction_record_exists = true;
    }

    //----------------------------
    // Ops
    //----------------------------
    let assembler = TrackAssembler::new(config.profiles, config.policy);
    let tracks = assembler.assemble(
        &bundle.samples,
        &bundle.individuals,
        &enabled,
        &bundle.references,
    )?;
    log::info!(
        "{}: {} tracks from {} enabled types",
        bundle.family_label(),
        tracks.len(),
        enabled.len()
    );

    //----------------------------
    // Output
    //----------------------------
    serde_json::to_writer_pretty(&mut writer, &tracks)?;
    writeln!(writer)?;
    writer.flush()?;

    Ok(())
}
