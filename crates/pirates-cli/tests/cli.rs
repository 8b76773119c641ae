use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn pirates() -> Command {
    Command::cargo_bin("pirates").expect("binary built")
}

fn demo(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("demos")
        .join(name)
}

#[test]
fn play_prints_announcement() {
    pirates()
        .args(["play", "1M", "4M"])
        .assert()
        .success()
        .stdout("Gana jugador 2\n");
}

#[test]
fn play_accepts_a_single_quoted_round() {
    pirates()
        .args(["play", "SR BB KK 8V 1N SK PR"])
        .assert()
        .success()
        .stdout("Gana jugador 5\n");
}

#[test]
fn play_json_includes_converted_values() {
    pirates()
        .args(["--format", "json", "play", "6A", "KK", "BB", "SR"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""player":4"#))
        .stdout(predicate::str::contains(r#""values":["6A","-1","00","7"]"#));
}

#[test]
fn play_rejects_malformed_tokens() {
    pirates()
        .args(["play", "1M", "ZZ"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed token 'ZZ'"));
}

#[test]
fn batch_reproduces_acceptance_table() {
    pirates()
        .arg("batch")
        .arg(demo("acceptance.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Evaluated 38 rounds (38 verified, 0 mismatched)",
        ))
        .stdout(predicate::str::contains("[MISMATCH]").not());
}

#[test]
fn batch_with_config_and_jsonl_output() {
    let dir = tempdir().expect("temp dir");
    let jsonl = dir.path().join("rows.jsonl");

    pirates()
        .arg("--config")
        .arg(demo("pirates.yaml"))
        .arg("batch")
        .arg(demo("acceptance.txt"))
        .arg("--jsonl")
        .arg(&jsonl)
        .assert()
        .success()
        .stdout(predicate::str::contains("Result rows:"));

    let written = fs::read_to_string(&jsonl).expect("jsonl written");
    assert_eq!(written.lines().count(), 38);
}

#[test]
fn batch_fails_on_mismatch() {
    let dir = tempdir().expect("temp dir");
    let input = dir.path().join("rounds.txt");
    fs::write(&input, "1M 4M, Gana jugador 1\n").expect("write input");

    pirates()
        .arg("batch")
        .arg(&input)
        .assert()
        .failure()
        .stdout(predicate::str::contains("[MISMATCH]"))
        .stderr(predicate::str::contains("line(s) 1"));
}

#[test]
fn missing_config_names_its_path() {
    pirates()
        .args(["--config", "no/such/pirates.yaml", "play", "1M"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "loading configuration from no/such/pirates.yaml",
        ));
}

#[test]
fn log_level_flag_is_validated() {
    pirates()
        .args(["--log-level", "chatty", "play", "1M"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("logging.tracing_level"));
}
