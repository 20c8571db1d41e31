use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

fn tracks(args: &[&str]) -> anyhow::Result<Vec<Value>> {
    let mut cmd = Command::cargo_bin("igvtracks")?;
    let output = cmd
        .arg("tracks")
        .arg("tests/igv/trio.json")
        .args(args)
        .output()?;
    assert!(output.status.success());

    let value: Value = serde_json::from_slice(&output.stdout)?;
    Ok(value.as_array().cloned().unwrap_or_default())
}

#[test]
fn command_tracks_all() -> anyhow::Result<()> {
    let tracks = tracks(&["--all"])?;

    // reference, 3 alignments, merged junction, lone coverage, one batch
    assert_eq!(tracks.len(), 7);
    let kinds: Vec<&str> = tracks.iter().map(|t| t["kind"].as_str().unwrap()).collect();
    assert_eq!(
        kinds,
        vec!["simple", "simple", "simple", "simple", "merged", "simple", "batch"]
    );
    assert_eq!(tracks[0]["name"], "GTEx Muscle");

    Ok(())
}

#[test]
fn command_tracks_alignment_formats() -> anyhow::Result<()> {
    let tracks = tracks(&["-t", "alignment"])?;
    assert_eq!(tracks.len(), 4);

    let cram = &tracks[1];
    assert_eq!(cram["format"], "cram");
    assert_eq!(
        cram["url"],
        "/api/project/R0001_1kg/igv_track/gs%3A%2F%2Fseqr-datasets%2FNA19675.cram"
    );
    assert_eq!(
        cram["indexURL"],
        "/api/project/R0001_1kg/igv_track/gs%3A%2F%2Fseqr-datasets%2FNA19675.cram.crai"
    );
    assert_eq!(cram["name"]["displayName"], "NA19675");
    assert_eq!(cram["name"]["sex"], "M");
    assert_eq!(cram["name"]["affected"], "A");

    let proxy = &tracks[2];
    assert_eq!(proxy["sourceType"], "pysam");
    assert!(proxy.get("indexURL").is_none());

    let bam = &tracks[3];
    assert_eq!(bam["indexed"], false);
    assert!(bam.get("format").is_none());

    Ok(())
}

#[test]
fn command_tracks_junction_merge() -> anyhow::Result<()> {
    let tracks = tracks(&["-t", "splice-junction", "-t", "coverage"])?;
    assert_eq!(tracks.len(), 3);

    let merged = &tracks[1];
    assert_eq!(merged["kind"], "merged");
    assert_eq!(merged["height"], 170);
    assert_eq!(merged["name"]["displayName"], "NA19675");
    assert_eq!(merged["tracks"][0]["type"], "wig");
    assert_eq!(merged["tracks"][1]["type"], "spliceJunctions");
    assert!(merged["tracks"][1]["indexURL"]
        .as_str()
        .unwrap()
        .ends_with(".junctions.bed.gz.tbi"));

    assert_eq!(tracks[2]["name"]["displayName"], "NA19679");

    Ok(())
}

#[test]
fn command_tracks_coverage_policy() -> anyhow::Result<()> {
    // junctions are not shown, so NA19675 keeps its coverage
    let tracks_default = tracks(&["-t", "coverage"])?;
    assert_eq!(tracks_default.len(), 3);
    assert_eq!(tracks_default[1]["kind"], "simple");
    assert_eq!(tracks_default[1]["name"]["displayName"], "NA19675");

    // NA19675 has a junction record, so its coverage is hidden
    let tracks_hidden = tracks(&["-t", "coverage", "--hide-coverage-with-junctions"])?;
    assert_eq!(tracks_hidden.len(), 2);
    assert_eq!(tracks_hidden[1]["name"]["displayName"], "NA19679");

    // same through the config file
    let tracks_config = tracks(&["-t", "coverage", "--config", "tests/igv/config.json"])?;
    assert_eq!(tracks_config, tracks_hidden);

    Ok(())
}

#[test]
fn command_tracks_batch() -> anyhow::Result<()> {
    let tracks = tracks(&["-t", "gcnv"])?;
    assert_eq!(tracks.len(), 2);

    let batch = &tracks[1];
    assert_eq!(batch["kind"], "batch");
    assert_eq!(batch["type"], "gcnv");
    assert_eq!(batch["name"], "NA19675, NA19678, NA19679");
    assert!(batch["indexURL"].as_str().unwrap().ends_with("batch_1.dcr.bed.gz.tbi"));

    let highlight = batch["highlightSamples"].as_object().unwrap();
    assert_eq!(highlight.len(), 3);
    assert_eq!(highlight["HG00731"], "red");
    assert_eq!(highlight["NA19678"], "blue");
    assert_eq!(highlight["NA19679"], "blue");

    let tracks = tracks_with_config(&["-t", "gcnv"])?;
    let highlight = tracks[1]["highlightSamples"].as_object().unwrap();
    assert_eq!(highlight["HG00731"], "orange");
    assert_eq!(highlight["NA19679"], "grey");

    Ok(())
}

fn tracks_with_config(args: &[&str]) -> anyhow::Result<Vec<Value>> {
    let mut all = vec!["--config", "tests/igv/config.json"];
    all.extend_from_slice(args);
    tracks(&all)
}

#[test]
fn command_tracks_empty_selection() -> anyhow::Result<()> {
    let tracks = tracks(&[])?;
    assert_eq!(tracks.len(), 1);
    assert_eq!(tracks[0]["url"], "gs://seqr-reference-data/GRCh38/rna-seq/gtex_muscle.bigWig");

    Ok(())
}

#[test]
fn command_tracks_idempotent_outfile() -> anyhow::Result<()> {
    let temp = TempDir::new()?;
    let first = temp.path().join("first.json");
    let second = temp.path().join("second.json");

    for outfile in [&first, &second] {
        let mut cmd = Command::cargo_bin("igvtracks")?;
        cmd.arg("tracks")
            .arg("tests/igv/trio.json")
            .arg("--all")
            .arg("-o")
            .arg(outfile);
        cmd.assert().success();
    }

    assert_eq!(std::fs::read_to_string(&first)?, std::fs::read_to_string(&second)?);

    Ok(())
}

#[test]
fn command_tracks_bad_input() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("igvtracks")?;
    cmd.arg("tracks")
        .arg("tests/igv/trio.json")
        .arg("-t")
        .arg("vcf");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unknown sample type: vcf"));

    let mut cmd = Command::cargo_bin("igvtracks")?;
    cmd.arg("tracks").arg("tests/igv/missing.json").arg("--all");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("could not open"));

    Ok(())
}
