use serde_json::Value;
use std::fs;
use std::process::Command;

#[test]
fn compress_roundtrip_cli() {
    let exe = env!("CARGO_BIN_EXE_tessera");
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.txt");
    let compressed = dir.path().join("compressed.tess");
    let output = dir.path().join("output.txt");

    let text = "#".repeat(64) + "hello world";
    fs::write(&input, &text).unwrap();

    let status = Command::new(exe)
        .args([
            "compress",
            input.to_str().unwrap(),
            compressed.to_str().unwrap(),
        ])
        .status()
        .expect("compress failed");
    assert!(status.success());

    let status = Command::new(exe)
        .args([
            "decompress",
            compressed.to_str().unwrap(),
            output.to_str().unwrap(),
        ])
        .status()
        .expect("decompress failed");
    assert!(status.success());

    assert_eq!(fs::read_to_string(&output).unwrap(), text);
}

#[test]
fn volumetric_json_report() {
    let exe = env!("CARGO_BIN_EXE_tessera");
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.txt");
    let compressed = dir.path().join("compressed.tess");
    fs::write(&input, "z".repeat(60)).unwrap();

    let out = Command::new(exe)
        .args([
            "c",
            input.to_str().unwrap(),
            compressed.to_str().unwrap(),
            "--dims",
            "3",
            "--json",
        ])
        .output()
        .expect("failed to run compress");
    assert!(out.status.success());
    let json: Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(json["engine"], "volumetric");
    assert_eq!(json["originalChars"].as_u64().unwrap(), 60);
    let wire = json["compiledBlueprint"].as_str().unwrap();
    assert!(wire.starts_with("60¬"));
    assert_eq!(fs::read_to_string(&compressed).unwrap(), wire);
}

#[test]
fn invalid_extension_error() {
    let exe = env!("CARGO_BIN_EXE_tessera");
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.txt");
    fs::write(&input, "0¬‡").unwrap();
    let out = dir.path().join("out.txt");
    let output = Command::new(exe)
        .args(["d", input.to_str().unwrap(), out.to_str().unwrap()])
        .output()
        .expect("run failed");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid file extension"));
}

#[test]
fn malformed_blueprint_error() {
    let exe = env!("CARGO_BIN_EXE_tessera");
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("bad.tess");
    fs::write(&input, "not-a-blueprint").unwrap();
    let out = dir.path().join("out.txt");
    let output = Command::new(exe)
        .args(["d", input.to_str().unwrap(), out.to_str().unwrap()])
        .output()
        .expect("run failed");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Verify the blueprint is intact"));
    assert!(!out.exists());
}

#[test]
fn empty_input_is_refused() {
    let exe = env!("CARGO_BIN_EXE_tessera");
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("empty.txt");
    fs::write(&input, "").unwrap();
    let out = dir.path().join("out.tess");
    let output = Command::new(exe)
        .args(["c", input.to_str().unwrap(), out.to_str().unwrap()])
        .output()
        .expect("run failed");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("input is empty"));
}

#[test]
fn candidate_dump_writes_csv() {
    let exe = env!("CARGO_BIN_EXE_candidate_dump");
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.txt");
    let csv_path = dir.path().join("candidates.csv");
    fs::write(&input, "r".repeat(40)).unwrap();
    let status = Command::new(exe)
        .args([
            input.to_str().unwrap(),
            "--csv",
            csv_path.to_str().unwrap(),
        ])
        .status()
        .expect("run failed");
    assert!(status.success());
    let csv = fs::read_to_string(&csv_path).unwrap();
    let mut lines = csv.lines();
    assert_eq!(
        lines.next(),
        Some("character,descriptor,points,savings,committed")
    );
    assert!(lines.any(|l| l.ends_with(",true")));
}

#[test]
fn candidate_dump_honours_rust_log() {
    let exe = env!("CARGO_BIN_EXE_candidate_dump");
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.txt");
    fs::write(&input, "r".repeat(40)).unwrap();
    let output = Command::new(exe)
        .arg(input.to_str().unwrap())
        .env("RUST_LOG", "debug")
        .output()
        .expect("run failed");
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("scanning 1 characters"), "{stderr}");
}
