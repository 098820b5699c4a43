use std::fs;
use std::process::Command;

fn write_scenario(dir: &std::path::Path) -> std::path::PathBuf {
    let input = dir.join("labels.idx1-ubyte");
    fs::write(&input, [0x00u8, 0x00, 0x08, 0x01, 0x00, 0x00, 0x00, 0x03, 0x05, 0x10, 0xFF]).unwrap();
    input
}

#[test]
fn prints_shape() {
    let exe = env!("CARGO_BIN_EXE_idx-reader");
    let dir = tempfile::tempdir().unwrap();
    let input = write_scenario(dir.path());

    let output = Command::new(exe)
        .args(["--quiet", input.to_str().unwrap()])
        .output()
        .expect("run failed");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "[3]");
}

#[test]
fn json_summary() {
    let exe = env!("CARGO_BIN_EXE_idx-reader");
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("images.idx3-ubyte");
    let mut bytes = vec![0u8, 0, 0x08, 3, 0, 0, 0, 2, 0, 0, 0, 2, 0, 0, 0, 2];
    bytes.extend_from_slice(&[0u8; 8]);
    fs::write(&input, &bytes).unwrap();

    let output = Command::new(exe)
        .args(["--quiet", "--json", input.to_str().unwrap()])
        .output()
        .expect("run failed");
    assert!(output.status.success());
    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(summary["type"], "u8");
    assert_eq!(summary["shape"], serde_json::json!([2, 2, 2]));
    assert_eq!(summary["elements"], 8);
    assert_eq!(summary["truncated"], false);
}

#[test]
fn bad_magic_exits_with_hint() {
    let exe = env!("CARGO_BIN_EXE_idx-reader");
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("not-idx.bin");
    fs::write(&input, b"PK\x03\x04zipdata").unwrap();

    let output = Command::new(exe)
        .args(["-q", input.to_str().unwrap()])
        .output()
        .expect("run failed");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Are you sure this is an IDX file?"));
}

#[test]
fn truncated_file_needs_flag() {
    let exe = env!("CARGO_BIN_EXE_idx-reader");
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("short.idx");
    fs::write(&input, [0u8, 0, 0x08, 1, 0, 0, 0, 4, 1, 2]).unwrap();

    let output = Command::new(exe)
        .args(["-q", input.to_str().unwrap()])
        .output()
        .expect("run failed");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("--allow-truncated"));

    let output = Command::new(exe)
        .args(["-q", "--allow-truncated", input.to_str().unwrap()])
        .output()
        .expect("run failed");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "[4]");
    assert!(String::from_utf8_lossy(&output.stderr).contains("decoded 2 of 4"));
}

#[test]
fn missing_file_reports_path() {
    let exe = env!("CARGO_BIN_EXE_idx-reader");
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("absent.idx");

    let output = Command::new(exe)
        .args(["-q", input.to_str().unwrap()])
        .output()
        .expect("run failed");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("absent.idx"));
    assert!(stderr.contains("Check that the file exists"));
}

#[test]
fn info_reads_header_only() {
    let exe = env!("CARGO_BIN_EXE_idx_info");
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("floats.idx");
    // Header only: the payload is never read.
    fs::write(&input, [0u8, 0, 0x0D, 2, 0, 0, 0, 10, 0, 0, 0, 3]).unwrap();

    let output = Command::new(exe)
        .args(["--json", input.to_str().unwrap()])
        .output()
        .expect("run failed");
    assert!(output.status.success());
    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(summary["type"], "f32");
    assert_eq!(summary["tag"], 13);
    assert_eq!(summary["shape"], serde_json::json!([10, 3]));
    assert_eq!(summary["elements"], 30);
    assert_eq!(summary["payload_bytes"], 120);
    assert_eq!(summary["header_bytes"], 12);
}

#[test]
fn info_rejects_unknown_type() {
    let exe = env!("CARGO_BIN_EXE_idx_info");
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("odd.idx");
    fs::write(&input, [0u8, 0, 0x0A, 1, 0, 0, 0, 1]).unwrap();

    let output = Command::new(exe)
        .arg(input.to_str().unwrap())
        .output()
        .expect("run failed");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("unknown data type 0x0A"));
}

#[test]
fn info_rejects_directory() {
    let exe = env!("CARGO_BIN_EXE_idx_info");
    let dir = tempfile::tempdir().unwrap();

    let output = Command::new(exe)
        .arg(dir.path().to_str().unwrap())
        .output()
        .expect("run failed");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("is a directory, not an IDX file"));
}
