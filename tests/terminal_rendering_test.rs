use assert_cmd::cargo;
use predicates::prelude::*;
use serial_test::serial;
use std::path::Path;
use tempfile::TempDir;

fn seed_entry(dir: &Path) {
    let mut cmd = cargo::cargo_bin_cmd!("shiplog");
    cmd.current_dir(dir)
        .arg("add")
        .arg("--date=2025-03-14")
        .arg("--slug=seed")
        .arg("--thing=seed thing")
        .arg("--type=test")
        .arg("--proofUrl=/")
        .arg("--proofText=proof")
        .arg("--reflection=done.")
        .assert()
        .success();
}

#[test]
#[serial]
fn test_list_with_no_color() {
    let temp = TempDir::new().unwrap();
    seed_entry(temp.path());

    std::env::set_var("NO_COLOR", "1");

    let mut cmd = cargo::cargo_bin_cmd!("shiplog");
    cmd.current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("seed"));

    std::env::remove_var("NO_COLOR");
}

#[test]
#[serial]
fn test_list_with_colors_forced() {
    let temp = TempDir::new().unwrap();
    seed_entry(temp.path());

    std::env::set_var("CLICOLOR_FORCE", "1");

    // Styled output still carries the entry data
    let mut cmd = cargo::cargo_bin_cmd!("shiplog");
    cmd.current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("seed"));

    std::env::remove_var("CLICOLOR_FORCE");
}

#[test]
#[serial]
fn test_show_latest_with_no_color() {
    let temp = TempDir::new().unwrap();
    seed_entry(temp.path());

    std::env::set_var("NO_COLOR", "1");

    let mut cmd = cargo::cargo_bin_cmd!("shiplog");
    cmd.current_dir(temp.path())
        .args(["show", "latest"])
        .assert()
        .success()
        .stdout(predicate::str::contains("seed thing"));

    std::env::remove_var("NO_COLOR");
}
