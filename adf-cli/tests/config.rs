use assert_cmd::cargo::cargo_bin_cmd;
use std::fs;
use tempfile::tempdir;

const ADF: &str = r#"{"type":"doc","content":[
  {"type":"bulletList","content":[
    {"type":"listItem","content":[
      {"type":"paragraph","content":[{"type":"text","text":"outer"}]},
      {"type":"bulletList","content":[
        {"type":"listItem","content":[
          {"type":"paragraph","content":[{"type":"text","text":"inner"}]}
        ]}
      ]}
    ]}
  ]}
]}"#;

#[test]
fn text_options_come_from_config() {
    let dir = tempdir().unwrap();
    let input_path = dir.path().join("body.adf.json");
    fs::write(&input_path, ADF).unwrap();

    let config_path = dir.path().join("adf.toml");
    fs::write(
        &config_path,
        r#"[convert.text]
bullet = "*"
indent = "    "
"#,
    )
    .unwrap();

    let mut cmd = cargo_bin_cmd!("adf");
    cmd.arg("convert")
        .arg(input_path.as_os_str())
        .arg("--to")
        .arg("text")
        .arg("--config")
        .arg(config_path.as_os_str());

    cmd.assert().success().stdout("* outer\n    * inner\n");
}

#[test]
fn list_levels_are_clamped_from_config() {
    let dir = tempdir().unwrap();
    let input_path = dir.path().join("body.adf.json");
    fs::write(&input_path, ADF).unwrap();

    let config_path = dir.path().join("adf.toml");
    fs::write(&config_path, "[transduce]\nmax_list_level = 1\n").unwrap();

    let mut cmd = cargo_bin_cmd!("adf");
    cmd.arg(input_path.as_os_str())
        .arg("--to")
        .arg("text")
        .arg("--config")
        .arg(config_path.as_os_str());

    cmd.assert().success().stdout("• outer\n• inner\n");
}

#[test]
fn custom_css_file_from_config() {
    let dir = tempdir().unwrap();
    let input_path = dir.path().join("body.adf.json");
    fs::write(&input_path, ADF).unwrap();
    let css_path = dir.path().join("report.css");
    fs::write(&css_path, ".adf-marker { color: teal; }").unwrap();

    let config_path = dir.path().join("adf.toml");
    fs::write(
        &config_path,
        format!("[convert.html]\ncustom_css = {:?}\n", css_path.to_string_lossy()),
    )
    .unwrap();

    let mut cmd = cargo_bin_cmd!("adf");
    cmd.arg(input_path.as_os_str())
        .arg("--to")
        .arg("html")
        .arg("--config")
        .arg(config_path.as_os_str());

    let output = cmd.assert().success().get_output().stdout.clone();
    let stdout = String::from_utf8(output).unwrap();
    assert!(stdout.contains(".adf-marker { color: teal; }"));
}

#[test]
fn missing_config_file_fails() {
    let mut cmd = cargo_bin_cmd!("adf");
    cmd.arg("generate-css").arg("--config").arg("/definitely/not/adf.toml");

    cmd.assert().failure();
}
