use std::{
    io::Write,
    process::{Command, Output, Stdio},
};

fn lazyseq(args: &[&str], stdin: Option<&str>) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_lazyseq"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("binary starts");
    {
        let mut pipe = child.stdin.take().expect("stdin is piped");
        if let Some(input) = stdin {
            pipe.write_all(input.as_bytes()).expect("stdin accepts input");
        }
    }
    child.wait_with_output().expect("binary finishes")
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_owned)
        .collect()
}

#[test]
fn flatten_skips_empty_containers() {
    let output = lazyseq(&["flatten", "[[], [[]], 5]"], None);
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), ["[5]"]);
}

#[test]
fn flatten_reads_stdin() {
    let output = lazyseq(&["flatten"], Some(r#"[1, ["two", [b"\xff"]]]"#));
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), [r#"[1, "two", b"\xff"]"#]);
}

#[test]
fn flatten_rejects_map() {
    let output = lazyseq(&["flatten", r#"{"a": 1}"#], None);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to flatten literal"));
}

#[test]
fn flatten_rejects_malformed_literal() {
    let output = lazyseq(&["flatten", "[1, 2"], None);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to parse literal"));
}

#[test]
fn flatten_depth_limit() {
    let output = lazyseq(&["flatten", "--max-depth", "1", "[1, [2, [3]]]"], None);
    assert!(!output.status.success());
}

#[test]
fn fib_default_and_seeded() {
    let output = lazyseq(&["fib", "--count", "5"], None);
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), ["1", "1", "2", "3", "5"]);

    let output = lazyseq(&["fib", "--count", "4", "--seed", "2", "1"], None);
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), ["1", "3", "4", "7"]);
}

#[test]
fn countdown_lockstep() {
    let output = lazyseq(&["countdown", "--from", "2"], None);
    assert!(output.status.success());
    assert_eq!(
        stdout_lines(&output),
        ["2", "2", "1", "1", r#""liftoff""#, r#""liftoff""#]
    );
}

#[test]
fn countdown_rejects_huge_start() {
    let output = lazyseq(&["countdown", "--from", "10000000000"], None);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
