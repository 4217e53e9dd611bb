use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

const ADF: &str = r#"{"type":"doc","content":[
  {"type":"heading","attrs":{"level":1},"content":[{"type":"text","text":"Title"}]},
  {"type":"paragraph","content":[{"type":"text","text":"Body","marks":[{"type":"em"}]}]}
]}"#;

fn write_doc() -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempdir().unwrap();
    let path = dir.path().join("body.adf.json");
    fs::write(&path, ADF).unwrap();
    (dir, path)
}

#[test]
fn default_transform_is_markup_treeviz() {
    let (_dir, path) = write_doc();

    let mut cmd = cargo_bin_cmd!("adf");
    cmd.arg("inspect").arg(path.as_os_str());

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("⧉ doc\n"))
        .stdout(predicate::str::contains("§ heading level=1"))
        .stdout(predicate::str::contains("[em] Body"));
}

#[test]
fn blocks_json() {
    let (_dir, path) = write_doc();

    let mut cmd = cargo_bin_cmd!("adf");
    cmd.arg("inspect").arg(path.as_os_str()).arg("blocks-json");

    let output = cmd.assert().success().get_output().stdout.clone();
    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["blocks"][0]["kind"], "heading");
    assert_eq!(value["blocks"][1]["runs"][0]["italic"], true);
}

#[test]
fn blocks_tag_with_runs() {
    let (_dir, path) = write_doc();

    let mut cmd = cargo_bin_cmd!("adf");
    cmd.arg("inspect")
        .arg(path.as_os_str())
        .arg("blocks-tag")
        .arg("--extra-runs");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("<heading level=\"1\">"))
        .stdout(predicate::str::contains("italic=\"true\""));
}

#[test]
fn unknown_transform_is_rejected() {
    let (_dir, path) = write_doc();

    let mut cmd = cargo_bin_cmd!("adf");
    cmd.arg("inspect").arg(path.as_os_str()).arg("ast-tag");

    cmd.assert().failure();
}

#[test]
fn list_formats() {
    let mut cmd = cargo_bin_cmd!("adf");
    cmd.arg("--list-formats");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Input formats:"))
        .stdout(predicate::str::contains("  issue"))
        .stdout(predicate::str::contains("  markup-treeviz"));
}

#[test]
fn generate_css_prints_baseline() {
    let mut cmd = cargo_bin_cmd!("adf");
    cmd.arg("generate-css");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(".adf-panel"));
}
