//! Integration tests for the bitd CLI commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Create a temp directory with a roster of one character and their crew.
fn test_roster() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("roster.json");
    fs::write(
        &path,
        r#"{
    "actors": [
        {
            "type": "character",
            "id": "c1",
            "name": "Silver",
            "attributes": [
                { "name": "insight", "bonus": 1, "skills": [
                    { "name": "hunt", "value": 2 },
                    { "name": "study", "value": 0 }
                ] },
                { "name": "prowess", "bonus": 0, "skills": [
                    { "name": "finesse", "value": 1 },
                    { "name": "prowl", "value": "2" }
                ] },
                { "name": "resolve", "bonus": 2, "skills": [
                    { "name": "attune", "value": 0 },
                    { "name": "consort", "value": 1 }
                ] }
            ],
            "stress": { "value": 3, "max": 9 },
            "trauma": { "value": 1, "max": 4 },
            "healing_clock": { "value": 1, "min": 2 },
            "crew": [ { "id": "k1", "name": "Shadows" } ]
        },
        {
            "type": "crew",
            "id": "k1",
            "name": "Shadows",
            "tier": 2,
            "scoundrel": { "mastery": true, "add_stress": 1 }
        }
    ]
}"#,
    )
    .unwrap();
    (dir, path)
}

fn bitd() -> Command {
    let mut cmd = Command::cargo_bin("bitd").unwrap();
    cmd.env("NO_COLOR", "1");
    cmd
}

// ---------------------------------------------------------------------------
// pools
// ---------------------------------------------------------------------------

#[test]
fn pools_shows_attributes_skills_and_vice() {
    let (_dir, roster) = test_roster();
    bitd()
        .args(["pools", "Silver", "-f", roster.to_str().unwrap()])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("insight")
                .and(predicate::str::contains("prowl"))
                .and(predicate::str::contains("0-4"))
                .and(predicate::str::contains("Vice: 2d")),
        );
}

#[test]
fn pools_finds_character_by_id() {
    let (_dir, roster) = test_roster();
    bitd()
        .args(["pools", "c1", "-f", roster.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Silver"));
}

#[test]
fn pools_unknown_character_fails() {
    let (_dir, roster) = test_roster();
    bitd()
        .args(["pools", "Nobody", "-f", roster.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("character not found"));
}

#[test]
fn rust_log_debug_enables_debug_logs() {
    let (_dir, roster) = test_roster();
    bitd()
        .env("RUST_LOG", "debug")
        .args(["pools", "Silver", "-f", roster.to_str().unwrap()])
        .assert()
        .success()
        .stderr(predicate::str::contains("roster loaded"));
}

#[test]
fn debug_logs_hidden_without_rust_log() {
    let (_dir, roster) = test_roster();
    bitd()
        .env_remove("RUST_LOG")
        .args(["pools", "Silver", "-f", roster.to_str().unwrap()])
        .assert()
        .success()
        .stderr(predicate::str::contains("roster loaded").not());
}

#[test]
fn default_roster_file_is_used() {
    let (dir, _roster) = test_roster();
    bitd()
        .args(["pools", "silver"])
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Vice: 2d"));
}

#[test]
fn missing_roster_fails() {
    let dir = TempDir::new().unwrap();
    bitd()
        .args(["pools", "Silver"])
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read"));
}

#[test]
fn malformed_roster_fails() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("roster.json"), "{ not json").unwrap();
    bitd()
        .args(["pools", "Silver"])
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid roster"));
}

// ---------------------------------------------------------------------------
// stats
// ---------------------------------------------------------------------------

#[test]
fn stats_include_crew_bonuses() {
    let (_dir, roster) = test_roster();
    bitd()
        .args(["stats", "Silver", "-f", roster.to_str().unwrap()])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Shadows (tier 2)")
                .and(predicate::str::contains("3/10"))
                .and(predicate::str::contains("1/4"))
                .and(predicate::str::contains("Healing min: 2"))
                .and(predicate::str::contains("yes")),
        );
}

// ---------------------------------------------------------------------------
// actions
// ---------------------------------------------------------------------------

#[test]
fn actions_grouped_by_attribute() {
    let (_dir, roster) = test_roster();
    bitd()
        .args(["actions", "Silver", "-f", roster.to_str().unwrap()])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("resolve 3d")
                .and(predicate::str::contains("(resistance)"))
                .and(predicate::str::contains("consort")),
        );
}

// ---------------------------------------------------------------------------
// roll
// ---------------------------------------------------------------------------

#[test]
fn roll_fortune() {
    let (_dir, roster) = test_roster();
    bitd()
        .args(["roll", "Silver", "hunt", "--seed", "7", "-f", roster.to_str().unwrap()])
        .write_stdin("fortune\n\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Fortune 2d"));
}

#[test]
fn roll_defaults_to_action_roll() {
    let (_dir, roster) = test_roster();
    bitd()
        .args(["roll", "Silver", "hunt", "--seed", "7", "-f", roster.to_str().unwrap()])
        .write_stdin("\n\n\n\n\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("hunt 2d")
                .and(predicate::str::contains("Position: Risky | Effect: Standard")),
        );
}

#[test]
fn roll_threat_when_action_roll_disabled() {
    let (_dir, roster) = test_roster();
    bitd()
        .args([
            "roll",
            "Silver",
            "prowl",
            "--no-action-roll",
            "--seed",
            "1",
            "-f",
            roster.to_str().unwrap(),
        ])
        .write_stdin("\n\n\n\n\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Threat Roll 2d")
                .and(predicate::str::contains("Position: Risky")),
        );
}

#[test]
fn roll_engagement_uses_dice_hint() {
    let (_dir, roster) = test_roster();
    bitd()
        .args([
            "roll",
            "Silver",
            "hunt",
            "--dice",
            "5",
            "--seed",
            "3",
            "-f",
            roster.to_str().unwrap(),
        ])
        .write_stdin("engagement\n\n\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Engagement 5d"));
}

#[test]
fn roll_acquire_asset_from_crew_tier() {
    let (_dir, roster) = test_roster();
    bitd()
        .args(["roll", "Silver", "hunt", "--seed", "3", "-f", roster.to_str().unwrap()])
        .write_stdin("acquireAsset\n-1\n\n\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Acquire Asset 1d").and(predicate::str::contains("Tier: 2")),
        );
}

#[test]
fn roll_attribute_is_resistance() {
    let (_dir, roster) = test_roster();
    bitd()
        .args(["roll", "Silver", "resolve", "--seed", "5", "-f", roster.to_str().unwrap()])
        .write_stdin("1\nbrace\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("resolve 4d")
                .and(predicate::str::contains("Note: brace"))
                .and(predicate::str::contains("Roll Type").not()),
        );
}

#[test]
fn roll_cancelled_on_end_of_input() {
    let (_dir, roster) = test_roster();
    bitd()
        .args(["roll", "Silver", "hunt", "-f", roster.to_str().unwrap()])
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Roll cancelled"));
}

#[test]
fn roll_same_seed_same_dice() {
    let (_dir, roster) = test_roster();
    let run = || {
        bitd()
            .args(["roll", "Silver", "hunt", "--seed", "42", "-f", roster.to_str().unwrap()])
            .write_stdin("fortune\n\n\n")
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(), run());
}
