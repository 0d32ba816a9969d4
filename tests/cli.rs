//! Integration tests: run the `rost` binary.

use std::fs;
use std::process::Command;

#[test]
fn binary_prints_version() {
    let output = Command::new(env!("CARGO_BIN_EXE_rost"))
        .arg("--version")
        .output()
        .expect("Failed to execute binary");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains(env!("CARGO_PKG_VERSION")),
        "Expected version in output, got: {}",
        stdout
    );
}

#[test]
fn registry_subcommand_splits_manifest() {
    let dir = std::env::temp_dir().join("rost_cli_registry");
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();

    let manifest = dir.join("registry.json");
    fs::write(&manifest, r#"{"items": [{"name": "card", "type": "registry:ui"}]}"#).unwrap();
    let config = dir.join("config.toml");
    fs::write(
        &config,
        format!("log_file_path = {:?}\n", dir.join("rost.log").display().to_string()),
    )
    .unwrap();
    let out_dir = dir.join("components-json");

    let output = Command::new(env!("CARGO_BIN_EXE_rost"))
        .arg("--config")
        .arg(&config)
        .arg("registry")
        .arg("--manifest")
        .arg(&manifest)
        .arg("--out")
        .arg(&out_dir)
        .output()
        .expect("Failed to execute binary");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("✓ Generated card.json"), "got: {}", stdout);
    assert_eq!(
        fs::read_to_string(out_dir.join("card.json")).unwrap(),
        "{\n  \"name\": \"card\",\n  \"type\": \"registry:ui\"\n}\n"
    );

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn view_without_input_fails_cleanly() {
    let dir = std::env::temp_dir().join("rost_cli_view_missing");
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    let config = dir.join("config.toml");
    fs::write(
        &config,
        format!("log_file_path = {:?}\n", dir.join("rost.log").display().to_string()),
    )
    .unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_rost"))
        .arg("--config")
        .arg(&config)
        .arg("view")
        .arg(dir.join("missing.json"))
        .output()
        .expect("Failed to execute binary");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("missing.json"), "got: {}", stderr);

    let _ = fs::remove_dir_all(&dir);
}
