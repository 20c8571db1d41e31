use assert_cmd::Command;
use serde_json::Value;

fn session(args: &[&str]) -> anyhow::Result<Value> {
    let mut cmd = Command::cargo_bin("igvtracks")?;
    let output = cmd
        .arg("session")
        .arg("tests/igv/trio.json")
        .args(args)
        .output()?;
    assert!(output.status.success());

    Ok(serde_json::from_slice(&output.stdout)?)
}

#[test]
fn command_session_dna() -> anyhow::Result<()> {
    let session = session(&["-t", "alignment"])?;

    assert_eq!(session["reference"], "hg38");
    // GRCh37 variant shown at its lifted GRCh38 position
    assert_eq!(session["locus"], "chr1:248203825-248204026");
    // no RNA type, no RNA reference tracks
    assert_eq!(session["tracks"].as_array().unwrap().len(), 3);
    assert_eq!(session["showCenterGuide"], true);
    assert_eq!(session["loadDefaultTracks"], false);

    Ok(())
}

#[test]
fn command_session_rna() -> anyhow::Result<()> {
    let session = session(&["-t", "splice-junction", "-t", "coverage"])?;

    let tracks = session["tracks"].as_array().unwrap();
    assert_eq!(tracks.len(), 3);
    assert_eq!(tracks[0]["name"], "GTEx Muscle");
    assert_eq!(tracks[1]["kind"], "merged");

    Ok(())
}

#[test]
fn command_session_config() -> anyhow::Result<()> {
    let session = session(&["--all", "--config", "tests/igv/config.json"])?;
    assert_eq!(session["showKaryo"], true);
    assert_eq!(session["minTrackHeight"], 100);

    Ok(())
}
