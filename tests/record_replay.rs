//! Cassette replay integration tests — zero network I/O.
//!
//! All tests set `PICGEN_REPLAY` to a cassette file path so that the binary
//! never contacts the live API endpoint.

use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("picgen").unwrap();
    cmd.env("PICGEN_CONFIG", "/nonexistent/picgen/config.toml")
        .env_remove("GEMINI_API_KEY")
        .env_remove("PICGEN_REC");
    cmd
}

/// Absolute path to the `test_fixtures` directory.
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("test_fixtures")
}

#[test]
fn replay_happy_path_writes_decoded_bytes() {
    let cassette = fixtures_dir().join("lighthouse.cassette.yaml");
    let out = std::env::temp_dir().join("picgen_test_happy.png");
    let _ = std::fs::remove_file(&out);

    cmd()
        .env("PICGEN_REPLAY", cassette.to_str().unwrap())
        .args(["generate", "--output", out.to_str().unwrap()])
        .assert()
        .success()
        .stderr(predicate::str::contains("Image saved as"));

    // The cassette payload is base64("hello picgen")
    assert_eq!(std::fs::read(&out).unwrap(), b"hello picgen");
    let _ = std::fs::remove_file(&out);
}

#[test]
fn replay_without_output_flag_uses_default_filename() {
    let cassette = fixtures_dir().join("lighthouse.cassette.yaml");
    let work_dir = std::env::temp_dir().join("picgen_test_default_name");
    std::fs::create_dir_all(&work_dir).unwrap();
    let out = work_dir.join("output-image.png");
    let _ = std::fs::remove_file(&out);

    cmd()
        .env("PICGEN_REPLAY", cassette.to_str().unwrap())
        .args(["generate", "a lighthouse"])
        .current_dir(&work_dir)
        .assert()
        .success();

    assert!(out.exists(), "default output-image.png should have been created");
    let _ = std::fs::remove_dir_all(&work_dir);
}

#[test]
fn replay_text_only_reply_fails_and_writes_nothing() {
    let cassette = fixtures_dir().join("text_only.cassette.yaml");
    let out = std::env::temp_dir().join("picgen_test_textonly.png");
    let _ = std::fs::remove_file(&out);

    cmd()
        .env("PICGEN_REPLAY", cassette.to_str().unwrap())
        .args(["generate", "--output", out.to_str().unwrap(), "a cat"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("contained no image data"));

    assert!(!out.exists(), "no file may be written when the reply has no image");
}

#[test]
fn replay_keeps_last_of_multiple_images() {
    let cassette = fixtures_dir().join("two_images.cassette.yaml");
    let out = std::env::temp_dir().join("picgen_test_lastwins.png");
    let _ = std::fs::remove_file(&out);

    cmd()
        .env("PICGEN_REPLAY", cassette.to_str().unwrap())
        .args(["generate", "--output", out.to_str().unwrap(), "a cat"])
        .assert()
        .success();

    assert_eq!(std::fs::read(&out).unwrap(), b"second");
    let _ = std::fs::remove_file(&out);
}

#[test]
fn replay_recorded_error_surfaces_its_message() {
    let cassette = fixtures_dir().join("outage.cassette.yaml");

    cmd()
        .env("PICGEN_REPLAY", cassette.to_str().unwrap())
        .args(["generate", "a cat"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("simulated upstream outage"));
}

#[test]
fn replay_verbose_reports_the_cassette() {
    let cassette = fixtures_dir().join("lighthouse.cassette.yaml");
    let out = std::env::temp_dir().join("picgen_test_verbose.png");
    let _ = std::fs::remove_file(&out);

    cmd()
        .env("PICGEN_REPLAY", cassette.to_str().unwrap())
        .args(["generate", "--verbose", "--output", out.to_str().unwrap()])
        .assert()
        .success()
        .stderr(predicate::str::contains("Replaying from:"));

    let _ = std::fs::remove_file(&out);
}
