mod common;

use assert_cmd::Command;
use common::Home;
use predicates::prelude::*;

#[allow(deprecated)]
fn ccgho(home: &Home) -> Command {
    let mut cmd = Command::cargo_bin("ccgho").expect("binary");
    cmd.env("HOME", home.path())
        .env("CCFIND_CONFIG", home.config())
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn opens_single_match() {
    let home = Home::new();
    home.write("cc.v3/src/components/MapContainer.tsx", "");

    ccgho(&home)
        .arg("MapContainer")
        .assert()
        .success()
        .stdout(
            "Opening: https://github.com/Curbcut/cc.v3/blob/main/src/components/MapContainer.tsx\n",
        );
}

#[test]
fn folder_hint_restricts_search() {
    let home = Home::new();
    home.write("cc.v3/src/services/UserService.ts", "");
    home.write("curbcut-api/src/UserService.ts", "");

    ccgho(&home)
        .args(["-f", "api", "UserService"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "https://github.com/Curbcut/curbcut-api/blob/main/src/UserService.ts",
        ))
        .stdout(predicate::str::contains("Multiple files found").not());
}

#[test]
fn prompts_when_ambiguous() {
    let home = Home::new();
    home.write("cc.v3/src/services/UserService.ts", "");
    home.write("curbcut-api/src/UserService.ts", "");

    ccgho(&home)
        .arg("UserService")
        .write_stdin("2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Multiple files found. Please choose one:"))
        .stdout(predicate::str::contains("1. "))
        .stdout(predicate::str::contains("2. "))
        .stdout(predicate::str::contains("Enter number (1-2): "))
        .stdout(predicate::str::contains("Opening: https://github.com/Curbcut/"));
}

#[test]
fn invalid_choice_fails() {
    let home = Home::new();
    home.write("cc.v3/src/services/UserService.ts", "");
    home.write("curbcut-api/src/UserService.ts", "");

    ccgho(&home)
        .arg("UserService")
        .write_stdin("5\n")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Opening:").not())
        .stderr(predicate::str::contains("Invalid choice"));
}

#[test]
fn no_matches_fails() {
    let home = Home::new();
    home.write("cc.v3/src/App.tsx", "");

    ccgho(&home)
        .arg("MapContainer")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No files matching 'MapContainer' found"));
}

#[test]
fn unknown_folder_fails() {
    let home = Home::new();
    home.write("cc.v3/src/App.tsx", "");

    ccgho(&home)
        .args(["-f", "pipe", "App"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No subfolder matching 'pipe' found"));
}

#[test]
fn missing_filename_fails_with_usage() {
    let home = Home::new();

    ccgho(&home)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage:"))
        .stderr(predicate::str::contains("ccgho -f v3 MapContainer"))
        .stderr(predicate::str::contains("ccgho UserService"));
}

#[test]
fn missing_home_fails() {
    let home = Home::new();

    ccgho(&home)
        .env_remove("HOME")
        .arg("App")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Could not determine home directory"));
}
