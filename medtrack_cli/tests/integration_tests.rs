//! Integration tests for the medtrack binary.
//!
//! These tests drive the interactive session over scripted stdin:
//! - Rendering the grouped medication list
//! - Adding, editing, and logging doses through the menu
//! - Dose history and CSV export
//! - Configuration overrides
//!
//! State lives only in memory, so every invocation starts clean.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::TempDir;

/// Helper to create an isolated home/config directory
fn setup_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Helper to get the CLI binary with config lookup pointed away from
/// the developer's real home
fn cli(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("medtrack"));
    cmd.env("HOME", temp_dir.path());
    cmd.env("XDG_CONFIG_HOME", temp_dir.path());
    cmd
}

#[test]
fn test_cli_help() {
    let temp_dir = setup_test_dir();
    cli(&temp_dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Single-session medication tracker"));
}

#[test]
fn test_once_renders_empty_session() {
    let temp_dir = setup_test_dir();
    cli(&temp_dir)
        .args(["run", "--once"])
        .assert()
        .success()
        .stdout(predicate::str::contains("MEDTRACK"))
        .stdout(predicate::str::contains("No medications yet"));
}

#[test]
fn test_once_renders_seeded_sections() {
    let temp_dir = setup_test_dir();
    cli(&temp_dir)
        .args(["run", "--seed", "--once"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Scheduled Medications"))
        .stdout(predicate::str::contains("Morning"))
        .stdout(predicate::str::contains("As Needed Medications"))
        .stdout(predicate::str::contains("Aspirin (81mg)"))
        .stdout(predicate::str::contains("Ibuprofen (400mg)"))
        .stdout(predicate::str::contains("Next dose: in"))
        .stdout(predicate::str::contains("Next refill: Mar 20, 2024"))
        .stdout(predicate::str::contains("Dr. Smith"))
        .stdout(predicate::str::contains("Take with food in the morning"));
}

#[test]
fn test_default_command_starts_a_session() {
    let temp_dir = setup_test_dir();
    cli(&temp_dir)
        .write_stdin("q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("MEDTRACK"))
        .stdout(predicate::str::contains("Session ended. Nothing was saved."));
}

#[test]
fn test_add_medication_appears_in_its_group() {
    let temp_dir = setup_test_dir();
    cli(&temp_dir)
        .arg("run")
        .write_stdin(
            "a\nLisinopril\nmorning\nHeart\n10mg\nOnce daily\nPatel\n\n\n\nTake in the morning\nn\nq\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Added Lisinopril"))
        .stdout(predicate::str::contains("Morning"))
        .stdout(predicate::str::contains("Lisinopril (10mg)"))
        .stdout(predicate::str::contains("Next dose: now"))
        .stdout(predicate::str::contains("Dr. Patel"));
}

#[test]
fn test_added_as_needed_medication_lands_in_as_needed_section() {
    let temp_dir = setup_test_dir();
    cli(&temp_dir)
        .arg("run")
        .write_stdin("a\nMelatonin\n\n\n3mg\n\n\n\n\n\n\ny\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Added Melatonin"))
        .stdout(predicate::str::contains("As Needed Medications"))
        .stdout(predicate::str::contains("Melatonin (3mg)"));
}

#[test]
fn test_log_dose_then_history_shows_the_entry() {
    let temp_dir = setup_test_dir();
    cli(&temp_dir)
        .args(["run", "--seed"])
        .write_stdin("l\n1\n2024-03-01 08:00\n\nwith breakfast\nh\n1\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Log Dose: Aspirin"))
        .stdout(predicate::str::contains("✓ Dose logged"))
        .stdout(predicate::str::contains("Dose History: Aspirin"))
        .stdout(predicate::str::contains("with breakfast"));
}

#[test]
fn test_history_before_any_logging_says_so() {
    let temp_dir = setup_test_dir();
    cli(&temp_dir)
        .args(["run", "--seed"])
        .write_stdin("h\n2\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Dose History: Ibuprofen"))
        .stdout(predicate::str::contains("No medication logs yet"));
}

#[test]
fn test_missed_dose_is_marked_in_history() {
    let temp_dir = setup_test_dir();
    cli(&temp_dir)
        .args(["run", "--seed"])
        .write_stdin("l\n1\n\nn\nfelt dizzy\nh\n1\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("✗"))
        .stdout(predicate::str::contains("felt dizzy"));
}

#[test]
fn test_edit_moves_medication_to_another_group() {
    let temp_dir = setup_test_dir();
    cli(&temp_dir)
        .args(["run", "--seed"])
        .write_stdin("e\n1\n\nevening\n\n\n\n\n\n\n\n\nn\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Updated Aspirin"))
        .stdout(predicate::str::contains("Evening"));
}

#[test]
fn test_edit_keeps_unchanged_fields() {
    let temp_dir = setup_test_dir();
    cli(&temp_dir)
        .args(["run", "--seed"])
        .write_stdin("e\n1\n\n\n\n325mg\n\n\n\n\n\n\n\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Updated Aspirin"))
        .stdout(predicate::str::contains("Aspirin (325mg)"))
        .stdout(predicate::str::contains("Dr. Smith"));
}

#[test]
fn test_export_writes_csv_rows_for_logged_doses() {
    let temp_dir = setup_test_dir();
    cli(&temp_dir)
        .args(["run", "--seed"])
        .write_stdin("l\n1\n2024-03-01 08:00\n\n\nx\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "medication,medication_id,timestamp,logged_at,taken,notes",
        ))
        .stdout(predicate::str::contains("Aspirin,"))
        .stderr(predicate::str::contains("Exported 1 dose log rows"));
}

#[test]
fn test_export_with_no_logs_still_writes_the_header() {
    let temp_dir = setup_test_dir();
    cli(&temp_dir)
        .args(["run", "--seed"])
        .write_stdin("x\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "medication,medication_id,timestamp,logged_at,taken,notes",
        ))
        .stderr(predicate::str::contains("Exported 0 dose log rows"));
}

#[test]
fn test_unknown_menu_command_is_reported() {
    let temp_dir = setup_test_dir();
    cli(&temp_dir)
        .arg("run")
        .write_stdin("z\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown command: z"));
}

#[test]
fn test_config_file_can_seed_and_switch_clock() {
    let temp_dir = setup_test_dir();
    let config_path = temp_dir.path().join("config.toml");
    let mut file = std::fs::File::create(&config_path).expect("Failed to write config");
    writeln!(
        file,
        "[display]\nuse_24h_clock = true\n\n[session]\nseed_samples = true"
    )
    .expect("Failed to write config");

    cli(&temp_dir)
        .args(["run", "--once", "--config"])
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Aspirin (81mg)"))
        .stdout(predicate::str::is_match(r"Next dose: in .+ \(\d{4}-\d{2}-\d{2} \d{2}:\d{2}\)").unwrap());
}

#[test]
fn test_config_can_disable_icons() {
    let temp_dir = setup_test_dir();
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, "[display]\nshow_icons = false\n").expect("Failed to write config");

    cli(&temp_dir)
        .args(["run", "--seed", "--once", "--config"])
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Aspirin (81mg)"));
}
