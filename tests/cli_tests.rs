//! Tests for the sqlpretty binary

use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn sqlpretty(dir: &Path) -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_sqlpretty"));
    command
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .env("CLICOLOR", "0")
        .env_remove("CLICOLOR_FORCE")
        .env_remove("RUST_LOG");
    command
}

fn run_with_stdin(command: &mut Command, input: &str) -> Output {
    let mut child = command
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    // argument errors exit before reading stdin
    let _ = child.stdin.take().unwrap().write_all(input.as_bytes());
    child.wait_with_output().unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

// ============================================
// Files
// ============================================

#[test]
fn test_file_to_stdout() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("query.sql"), "select a from t\n").unwrap();

    let output = sqlpretty(dir.path()).arg("query.sql").output().unwrap();

    assert!(output.status.success());
    assert_eq!(stdout(&output), "SELECT\n  a\nFROM\n  t\n");
    // stdout mode never touches the file
    assert_eq!(
        fs::read_to_string(dir.path().join("query.sql")).unwrap(),
        "select a from t\n"
    );
}

#[test]
fn test_write_in_place() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("query.sql");
    fs::write(&path, "select a, b from t where x = 1 and y = 2").unwrap();

    let output = sqlpretty(dir.path()).args(["--write", "query.sql"]).output().unwrap();

    assert!(output.status.success());
    assert!(stdout(&output).contains("Formatted:"));
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "SELECT\n  a, b\nFROM\n  t\nWHERE\n  x = 1\n  AND y = 2\n"
    );
}

#[test]
fn test_check_formatted_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("ok.sql"), "SELECT\n  a\nFROM\n  t\n").unwrap();

    let output = sqlpretty(dir.path()).args(["--check", "ok.sql"]).output().unwrap();

    assert!(output.status.success());
    assert_eq!(stdout(&output), "");
}

#[test]
fn test_check_unformatted_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("ok.sql"), "SELECT\n  a\n").unwrap();
    fs::write(dir.path().join("bad.sql"), "select a").unwrap();

    let output = sqlpretty(dir.path())
        .args(["--check", "ok.sql", "bad.sql"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let out = stdout(&output);
    assert!(out.contains("need formatting"));
    assert!(out.contains("bad.sql"));
    assert!(!out.contains("ok.sql"));
    assert!(stderr(&output).contains("not properly formatted"));
    // check mode never writes
    assert_eq!(fs::read_to_string(dir.path().join("bad.sql")).unwrap(), "select a");
}

#[test]
fn test_write_then_check_passes() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("q.sql"), "select 'x' as y -- note\nfrom t").unwrap();

    let write = sqlpretty(dir.path()).args(["-w", "q.sql"]).output().unwrap();
    assert!(write.status.success());

    let check = sqlpretty(dir.path()).args(["-c", "q.sql"]).output().unwrap();
    assert!(check.status.success());
}

#[test]
fn test_diff_output() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("q.sql"), "select a from t\n").unwrap();

    let output = sqlpretty(dir.path()).args(["--diff", "q.sql"]).output().unwrap();

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("Diff for"));
    assert!(out.contains("-select a from t"));
    assert!(out.contains("+SELECT"));
}

#[test]
fn test_empty_file_is_skipped() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("empty.sql"), "  \n").unwrap();

    let output = sqlpretty(dir.path()).arg("empty.sql").output().unwrap();

    assert!(output.status.success());
    assert_eq!(stdout(&output), "");
    assert!(stderr(&output).contains("empty input"));
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().unwrap();

    let output = sqlpretty(dir.path()).arg("nope.sql").output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("nope.sql"));
}

// ============================================
// Stdin
// ============================================

#[test]
fn test_stdin_to_stdout() {
    let dir = TempDir::new().unwrap();

    let output = run_with_stdin(&mut sqlpretty(dir.path()), "select 1");

    assert!(output.status.success());
    assert_eq!(stdout(&output), "SELECT\n  1\n");
}

#[test]
fn test_empty_stdin_fails() {
    let dir = TempDir::new().unwrap();

    let output = run_with_stdin(&mut sqlpretty(dir.path()), " \n\t");

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Input is empty"));
}

#[test]
fn test_stdin_check() {
    let dir = TempDir::new().unwrap();

    let formatted = run_with_stdin(&mut sqlpretty(dir.path()).arg("--check"), "SELECT\n  1\n");
    assert!(formatted.status.success());

    let unformatted = run_with_stdin(&mut sqlpretty(dir.path()).arg("--check"), "select 1");
    assert_eq!(unformatted.status.code(), Some(1));
}

// ============================================
// Options
// ============================================

#[test]
fn test_formatting_flags() {
    let dir = TempDir::new().unwrap();

    let mut command = sqlpretty(dir.path());
    command.args([
        "--stdin",
        "--indent",
        "4",
        "--keyword-case",
        "preserve",
        "--comma-style",
        "leading",
    ]);
    let output = run_with_stdin(&mut command, "select a, b from t");

    assert!(output.status.success());
    assert_eq!(stdout(&output), "select\n    a\n    , b\nfrom\n    t\n");
}

#[test]
fn test_indent_out_of_range_rejected() {
    let dir = TempDir::new().unwrap();

    for width in ["0", "9"] {
        let output = run_with_stdin(&mut sqlpretty(dir.path()).args(["--indent", width]), "select 1");
        assert!(!output.status.success());
        assert_eq!(stdout(&output), "");
    }
}

#[test]
fn test_verbose_enables_debug_logging() {
    let dir = TempDir::new().unwrap();

    let quiet = run_with_stdin(&mut sqlpretty(dir.path()), "select 1");
    assert!(!stderr(&quiet).contains("format config"));

    let verbose = run_with_stdin(&mut sqlpretty(dir.path()).arg("-v"), "select 1");
    assert!(verbose.status.success());
    assert_eq!(stdout(&verbose), "SELECT\n  1\n");
    assert!(stderr(&verbose).contains("format config"));
}

#[test]
fn test_config_file() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("style.toml"),
        "indent_width = 3\nkeyword_case = \"preserve_original\"\n",
    )
    .unwrap();

    let output = run_with_stdin(
        sqlpretty(dir.path()).args(["--config", "style.toml"]),
        "select a from t",
    );

    assert!(output.status.success());
    assert_eq!(stdout(&output), "select\n   a\nfrom\n   t\n");
}

#[test]
fn test_config_file_in_working_directory() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("sqlpretty.toml"), "indent_width = 4\n").unwrap();

    let output = run_with_stdin(&mut sqlpretty(dir.path()), "select a");

    assert!(output.status.success());
    assert_eq!(stdout(&output), "SELECT\n    a\n");
}

#[test]
fn test_flags_override_config_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("sqlpretty.toml"), "indent_width = 4\n").unwrap();

    let output = run_with_stdin(&mut sqlpretty(dir.path()).args(["--indent", "1"]), "select a");

    assert!(output.status.success());
    assert_eq!(stdout(&output), "SELECT\n a\n");
}

#[test]
fn test_invalid_config_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("sqlpretty.toml"), "indent_width = 12\n").unwrap();

    let output = run_with_stdin(&mut sqlpretty(dir.path()), "select a");

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("indent width must be between 1 and 8"));
}
