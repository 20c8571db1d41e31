use clap::*;
use igvtracks::libs::selection::{available_types, families_by_type};
use igvtracks::libs::session::FamilyBundle;
use itertools::Itertools;
use std::io::Write;

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    Command::new("types")
        .about("Lists the sample types available in families")
        .after_help(
            r###"
For one family, prints a tab-separated line per available type:

    group   type    shows

where `group` is DNA or RNA and `shows` lists the types enabled when that type is opened
(splice junctions always come with coverage).

For several families, prints each type followed by the families having it.

Examples:
1. One family:
   igvtracks types family.json

2. Several families of a variant:
   igvtracks types family_1.json family_2.json

"###,
        )
        .arg(
            Arg::new("infiles")
                .required(true)
                .num_args(1..)
                .index(1)
                .help("Family bundle(s) in JSON"),
        )
        .arg(super::arg_outfile())
}

// command implementation
pub fn execute(args: &ArgMatches) -> anyhow::Result<()> {
    let mut writer = igvtracks::writer(args.get_one::<String>("outfile").unwrap())?;

    let mut bundles: Vec<FamilyBundle> = vec![];
    for infile in args.get_many::<String>("infiles").unwrap() {
        bundles.push(igvtracks::read_json(infile)?);
    }

    if bundles.len() == 1 {
        let available = available_types(&bundles[0].samples);
        for (group, types) in [("DNA", &available.dna), ("RNA", &available.rna)] {
            for sample_type in types {
                writeln!(
                    writer,
                    "{}\t{}\t{}",
                    group,
                    sample_type,
                    sample_type.show_reads_types().iter().join(",")
                )?;
            }
        }
    } else {
        let by_type = families_by_type(
            bundles
                .iter()
                .map(|bundle| (bundle.family_label(), &bundle.samples)),
        );
        for (sample_type, families) in &by_type {
            writeln!(writer, "{}\t{}", sample_type, families.iter().join(","))?;
        }
    }
    writer.flush()?;

    Ok(())
}
