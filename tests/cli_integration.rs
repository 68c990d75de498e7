//! CLI integration tests for Gear
//!
//! These tests drive the real binary against a temporary inventory file,
//! verifying the command surface and the persistence round-trip across
//! separate invocations.

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Get a command instance pointed at a temp inventory file
fn gear_cmd(dir: &TempDir) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("gear"));
    cmd.env("GEAR_FILE", dir.path().join("inventory.json"));
    cmd
}

// =============================================================================
// List Tests
// =============================================================================

#[test]
fn test_lists_empty_without_snapshot() {
    let dir = TempDir::new().unwrap();

    gear_cmd(&dir)
        .arg("lists")
        .assert()
        .success()
        .stdout(predicate::str::contains("No lists available."));

    // A read-only command must not create the snapshot
    assert!(!dir.path().join("inventory.json").exists());
}

#[test]
fn test_list_new_creates_and_persists() {
    let dir = TempDir::new().unwrap();

    gear_cmd(&dir)
        .args(["list", "new", "Camping"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created list 'Camping'"));

    assert!(dir.path().join("inventory.json").exists());

    gear_cmd(&dir)
        .arg("lists")
        .assert()
        .success()
        .stdout(predicate::str::contains("Camping"));
}

#[test]
fn test_duplicate_list_fails() {
    let dir = TempDir::new().unwrap();

    gear_cmd(&dir).args(["list", "new", "Camping"]).assert().success();

    gear_cmd(&dir)
        .args(["list", "new", "Camping"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_blank_list_name_is_rejected() {
    let dir = TempDir::new().unwrap();

    gear_cmd(&dir)
        .args(["list", "new", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must not be empty"));
}

#[test]
fn test_rename_onto_existing_list_fails_and_keeps_both() {
    let dir = TempDir::new().unwrap();

    gear_cmd(&dir).args(["list", "new", "A"]).assert().success();
    gear_cmd(&dir).args(["list", "new", "B"]).assert().success();

    gear_cmd(&dir)
        .args(["list", "rename", "A", "B"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    gear_cmd(&dir)
        .arg("lists")
        .assert()
        .success()
        .stdout(predicate::str::contains("A").and(predicate::str::contains("B")));
}

#[test]
fn test_rename_missing_list_is_silent() {
    let dir = TempDir::new().unwrap();

    gear_cmd(&dir)
        .args(["list", "rename", "Ghost", "Anything"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No list named 'Ghost'"));

    gear_cmd(&dir)
        .arg("lists")
        .assert()
        .success()
        .stdout(predicate::str::contains("No lists available."));
}

#[test]
fn test_list_delete() {
    let dir = TempDir::new().unwrap();

    gear_cmd(&dir).args(["list", "new", "Camping"]).assert().success();
    gear_cmd(&dir)
        .args(["list", "delete", "Camping"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted list 'Camping'"));

    gear_cmd(&dir)
        .arg("lists")
        .assert()
        .success()
        .stdout(predicate::str::contains("No lists available."));
}

// =============================================================================
// Item Tests
// =============================================================================

#[test]
fn test_camping_roundtrip_across_invocations() {
    let dir = TempDir::new().unwrap();

    gear_cmd(&dir).args(["list", "new", "Camping"]).assert().success();
    gear_cmd(&dir)
        .args(["item", "add", "Camping", "Tent"])
        .assert()
        .success();

    // A fresh process sees the list with its child at depth 1
    gear_cmd(&dir)
        .args(["show", "Camping"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Camping\n  Tent"));
}

#[test]
fn test_item_add_under_path() {
    let dir = TempDir::new().unwrap();

    gear_cmd(&dir).args(["list", "new", "Camping"]).assert().success();
    gear_cmd(&dir)
        .args(["item", "add", "Camping", "Tent"])
        .assert()
        .success();
    gear_cmd(&dir)
        .args(["item", "add", "Camping", "Poles", "--under", "Tent"])
        .assert()
        .success();

    gear_cmd(&dir)
        .args(["show", "Camping"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Camping\n  Tent\n    Poles"));
}

#[test]
fn test_item_add_under_missing_path_fails() {
    let dir = TempDir::new().unwrap();

    gear_cmd(&dir).args(["list", "new", "Camping"]).assert().success();

    gear_cmd(&dir)
        .args(["item", "add", "Camping", "Poles", "--under", "Tent"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No item at 'Tent'"));
}

#[test]
fn test_duplicate_item_fails() {
    let dir = TempDir::new().unwrap();

    gear_cmd(&dir).args(["list", "new", "Camping"]).assert().success();
    gear_cmd(&dir)
        .args(["item", "add", "Camping", "Tent"])
        .assert()
        .success();

    gear_cmd(&dir)
        .args(["item", "add", "Camping", "Tent"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_item_remove_missing_is_not_an_error() {
    let dir = TempDir::new().unwrap();

    gear_cmd(&dir).args(["list", "new", "Camping"]).assert().success();

    gear_cmd(&dir)
        .args(["item", "remove", "Camping", "Lantern"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No item named 'Lantern'"));
}

#[test]
fn test_item_rename_has_no_collision_check() {
    // Renaming an item onto a sibling's name is allowed; only list renames
    // guard against collisions
    let dir = TempDir::new().unwrap();

    gear_cmd(&dir).args(["list", "new", "Camping"]).assert().success();
    gear_cmd(&dir)
        .args(["item", "add", "Camping", "Tent"])
        .assert()
        .success();
    gear_cmd(&dir)
        .args(["item", "add", "Camping", "Stove"])
        .assert()
        .success();

    gear_cmd(&dir)
        .args(["item", "rename", "Camping", "Stove", "Tent"])
        .assert()
        .success();

    gear_cmd(&dir)
        .args(["show", "Camping"])
        .assert()
        .success()
        .stdout(predicate::str::contains("  Tent\n  Tent"));
}

#[test]
fn test_show_missing_list_fails() {
    let dir = TempDir::new().unwrap();

    gear_cmd(&dir)
        .args(["show", "Ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No list named 'Ghost'"));
}

// =============================================================================
// Persistence Failure Tests
// =============================================================================

#[test]
fn test_corrupt_snapshot_recovers_with_warning() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("inventory.json"), "{ definitely not json").unwrap();

    gear_cmd(&dir)
        .arg("lists")
        .assert()
        .success()
        .stdout(predicate::str::contains("No lists available."))
        .stderr(predicate::str::contains("starting with an empty one"));
}

#[test]
fn test_mutation_after_corruption_writes_fresh_snapshot() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("inventory.json");
    fs::write(&path, "garbage").unwrap();

    gear_cmd(&dir).args(["list", "new", "Fresh"]).assert().success();

    let raw = fs::read_to_string(&path).unwrap();
    let snapshot: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(snapshot["version"], 1);
    assert_eq!(snapshot["lists"][0]["name"], "Fresh");
}

// =============================================================================
// Output and Flags
// =============================================================================

#[test]
fn test_json_output() {
    let dir = TempDir::new().unwrap();

    let output = gear_cmd(&dir)
        .args(["list", "new", "Camping", "--format", "json"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(json["success"], true);

    let output = gear_cmd(&dir)
        .args(["show", "Camping", "--format", "json"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(json["name"], "Camping");
}

#[test]
fn test_file_flag_overrides_location() {
    let dir = TempDir::new().unwrap();
    let custom = dir.path().join("elsewhere.json");

    assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("gear"))
        .args(["list", "new", "Camping", "--file"])
        .arg(&custom)
        .assert()
        .success();

    assert!(custom.exists());
}

// =============================================================================
// Shell Tests
// =============================================================================

#[test]
fn test_shell_creates_list_through_menu() {
    let dir = TempDir::new().unwrap();

    gear_cmd(&dir)
        .arg("shell")
        .write_stdin("2\nCamping\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Main menu"));

    gear_cmd(&dir)
        .arg("lists")
        .assert()
        .success()
        .stdout(predicate::str::contains("Camping"));
}

#[test]
fn test_shell_exits_on_end_of_input() {
    let dir = TempDir::new().unwrap();

    gear_cmd(&dir).arg("shell").write_stdin("").assert().success();
}
