use clap::*;
use igvtracks::libs::locus::{resolve_locus, GenomeBuild, Variant};
use serde::Deserialize;
use std::io::Write;

#[derive(Deserialize)]
#[serde(untagged)]
enum Variants {
    One(Variant),
    Many(Vec<Variant>),
}

fn genome_build(s: &str) -> Result<GenomeBuild, String> {
    s.parse::<GenomeBuild>().map_err(|e| e.to_string())
}

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    Command::new("locus")
        .about("Computes the browser window of variants")
        .after_help(
            r###"
Prints one `chrN:start-end` line per variant.

The window is centred on the variant and padded by a third of its size on each side,
at least 100 bp. When the variant was called on a build other than the project's and
carries lifted-over coordinates for the project's build, those are used.

Examples:
1. Variants stored as JSON (one object or an array):
   igvtracks locus variants.json --build 38

2. A single variant id:
   igvtracks locus --id 1-248367227-TC-T --variant-build 37 --build 37

"###,
        )
        .arg(
            Arg::new("infile")
                .index(1)
                .required_unless_present("id")
                .help("Variant(s) in JSON"),
        )
        .arg(
            Arg::new("id")
                .long("id")
                .num_args(1)
                .conflicts_with("infile")
                .help("Variant id as CHROM-POS-REF-ALT"),
        )
        .arg(
            Arg::new("end")
                .long("end")
                .num_args(1)
                .requires("id")
                .value_parser(value_parser!(u64))
                .help("End position of the variant given by --id"),
        )
        .arg(
            Arg::new("variant_build")
                .long("variant-build")
                .num_args(1)
                .default_value("38")
                .value_parser(genome_build)
                .help("Genome build of the variant given by --id"),
        )
        .arg(
            Arg::new("build")
                .long("build")
                .short('b')
                .required(true)
                .num_args(1)
                .value_parser(genome_build)
                .help("Genome build of the project: 37/38, GRCh37/GRCh38 or hg19/hg38"),
        )
        .arg(super::arg_outfile())
}

// command implementation
pub fn execute(args: &ArgMatches) -> anyhow::Result<()> {
    //----------------------------
    // Args
    //----------------------------
    let mut writer = igvtracks::writer(args.get_one::<String>("outfile").unwrap())?;
    let project_build = *args.get_one::<GenomeBuild>("build").unwrap();

    let variants = match args.get_one::<String>("id") {
        Some(id) => {
            let mut variant = Variant::from_id(id, *args.get_one::<GenomeBuild>("variant_build").unwrap())?;
            variant.end = args.get_one::<u64>("end").copied();
            vec![variant]
        }
        None => {
            let infile = args.get_one::<String>("infile").unwrap();
            match igvtracks::read_json::<Variants>(infile)? {
                Variants::One(variant) => vec![variant],
                Variants::Many(variants) => variants,
            }
        }
    };

    //----------------------------
    // Output
    //----------------------------
    for variant in &variants {
        let locus = resolve_locus(variant, project_build);
        writeln!(writer, "{}", locus)?;
    }
    writer.flush()?;

    Ok(())
}
