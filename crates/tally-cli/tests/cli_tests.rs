use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use std::time::{SystemTime, UNIX_EPOCH};

const EXIT_SUCCESS: i32 = 0;
const EXIT_CLI: i32 = 2;
const EXIT_CHECKSUM: i32 = 3;
const EXIT_IO: i32 = 4;

fn run_cmd(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tally-cli"))
        .args(args)
        .output()
        .expect("run tally-cli")
}

fn temp_dir(label: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("time")
        .as_nanos();
    dir.push(format!(
        "tally-cli-test-{}-{}-{}",
        label,
        std::process::id(),
        nanos
    ));
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

fn path_str(path: &Path) -> &str {
    path.to_str().expect("utf-8 path")
}

fn assert_exit(output: &Output, expected: i32) {
    assert_eq!(
        output.status.code(),
        Some(expected),
        "stdout: {}\nstderr: {}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
}

fn stdout_line(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

#[test]
fn sum_reports_check_value() {
    let dir = temp_dir("sum-check");
    let input = dir.join("input.bin");
    fs::write(&input, b"123456789").expect("write input");

    let out = run_cmd(&["sum", path_str(&input)]);

    assert_exit(&out, EXIT_SUCCESS);
    assert!(
        stdout_line(&out).starts_with("BB3D"),
        "stdout: {}",
        stdout_line(&out)
    );
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn sum_honors_variant_flag() {
    let dir = temp_dir("sum-variant");
    let input = dir.join("input.bin");
    fs::write(&input, b"123456789").expect("write input");

    let out = run_cmd(&["sum", path_str(&input), "--variant", "x25"]);

    assert_exit(&out, EXIT_SUCCESS);
    assert!(
        stdout_line(&out).starts_with("906E"),
        "stdout: {}",
        stdout_line(&out)
    );
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn sum_reads_stdin() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_tally-cli"))
        .arg("sum")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn tally-cli");
    child
        .stdin
        .as_mut()
        .expect("stdin")
        .write_all(b"123456789")
        .expect("write stdin");

    let out = child.wait_with_output().expect("wait tally-cli");

    assert_exit(&out, EXIT_SUCCESS);
    assert_eq!(stdout_line(&out), "BB3D  -");
}

#[test]
fn text_reports_digest() {
    let out = run_cmd(&["text", "123456789", "--variant", "kermit"]);

    assert_exit(&out, EXIT_SUCCESS);
    assert_eq!(stdout_line(&out), "2189");
}

#[test]
fn unknown_variant_is_cli_error() {
    let out = run_cmd(&["text", "abc", "--variant", "crc32"]);
    assert_exit(&out, EXIT_CLI);
}

#[test]
fn missing_file_is_io_error() {
    let dir = temp_dir("sum-missing");
    let missing = dir.join("does-not-exist.bin");

    let out = run_cmd(&["sum", path_str(&missing)]);

    assert_exit(&out, EXIT_IO);
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn non_ascii_text_is_checksum_error() {
    let out = run_cmd(&["text", "na\u{EF}ve"]);
    assert_exit(&out, EXIT_CHECKSUM);
}

#[test]
fn variants_lists_catalog() {
    let out = run_cmd(&["variants"]);

    assert_exit(&out, EXIT_SUCCESS);
    let stdout = String::from_utf8_lossy(&out.stdout);
    for name in ["arc", "ccitt", "ieee", "kermit", "x25", "xmodem", "zmodem"] {
        assert!(stdout.contains(name), "missing {name} in: {stdout}");
    }
    assert!(stdout.contains("0x1021"));
}
