use std::{
    io::Write,
    process::{Command, Stdio},
};

fn landfall(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_landfall"))
        .args(args)
        .env("RUST_LOG", "warn")
        .output()
        .expect("failed to launch landfall binary")
}

#[test]
fn headless_script_prints_banner_and_frames() {
    let output = landfall(&["--headless", "--seed", "5", "--script", "q"]);

    assert!(output.status.success(), "headless run should exit cleanly");
    let stdout = String::from_utf8(output.stdout).expect("frames are utf-8");
    let mut lines = stdout.lines();
    assert_eq!(lines.next(), Some("Welcome to Landfall."));
    assert!(stdout.contains('@'), "player glyph must be drawn");
    assert!(stdout.contains('╔'), "landing site must be drawn");
}

#[test]
fn same_seed_renders_identical_sessions() {
    let first = landfall(&["--headless", "--seed", "11", "--script", "sdsaq"]);
    let second = landfall(&["--headless", "--seed", "11", "--script", "sdsaq"]);

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn unknown_script_key_fails() {
    let output = landfall(&["--headless", "--script", "wx"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown script key"));
}

#[test]
fn quiet_log_level_suppresses_info_lines() {
    let output = landfall(&["--headless", "--script", "q"]);

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        !stderr.contains("INFO"),
        "RUST_LOG=warn must hide info logs, got: {stderr}"
    );
}

#[test]
fn default_log_level_shows_startup() {
    let output = Command::new(env!("CARGO_BIN_EXE_landfall"))
        .args(["--headless", "--script", "q"])
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to launch landfall binary");

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("starting session"));
}

#[test]
fn headless_without_script_streams_keys_from_stdin() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_landfall"))
        .args(["--headless", "--seed", "11"])
        .env("RUST_LOG", "warn")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to launch landfall binary");
    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(b"s d\nsa\n")
        .expect("keys written");
    let streamed = child.wait_with_output().expect("landfall exits");

    let scripted = landfall(&["--headless", "--seed", "11", "--script", "sdsaq"]);

    assert!(streamed.status.success());
    assert_eq!(streamed.stdout, scripted.stdout);
}
