extern crate clap;
use clap::*;

mod cmd_igvtracks;

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let app = Command::new("igvtracks")
        .version(crate_version!())
        .about("`igvtracks` - Genome browser tracks for family sequencing data")
        .propagate_version(true)
        .arg_required_else_help(true)
        .color(ColorChoice::Auto)
        .subcommand(cmd_igvtracks::tracks::make_subcommand())
        .subcommand(cmd_igvtracks::locus::make_subcommand())
        .subcommand(cmd_igvtracks::types::make_subcommand())
        .subcommand(cmd_igvtracks::session::make_subcommand())
        .after_help(
            r###"Subcommand groups:

* Tracks:
    * tracks  - Track descriptors of one family
    * types   - Sample types available per family

* Browser:
    * locus   - Viewing window of a variant
    * session - Reference, locus, tracks and options in one document

Set RUST_LOG=debug to trace track resolution.

"###,
        );

    match app.get_matches().subcommand() {
        Some(("tracks", sub_matches)) => cmd_igvtracks::tracks::execute(sub_matches),
        Some(("locus", sub_matches)) => cmd_igvtracks::locus::execute(sub_matches),
        Some(("types", sub_matches)) => cmd_igvtracks::types::execute(sub_matches),
        Some(("session", sub_matches)) => cmd_igvtracks::session::execute(sub_matches),
        _ => unreachable!(),
    }?;

    Ok(())
}
