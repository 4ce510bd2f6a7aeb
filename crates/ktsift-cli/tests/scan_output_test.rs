use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn ktsift() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_ktsift"));
    // Keep host config out of the picture.
    cmd.env_remove("KTSIFT_CONFIG");
    cmd
}

#[test]
fn data_class_file_is_reported() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("A.kt"), "data class Foo(val x: Int)").unwrap();

    ktsift()
        .current_dir(dir.path())
        .arg("scan")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("DATA_CLASSES: [\"A.kt\"]"))
        .stdout(predicate::str::contains("VIEWMODELS: []"))
        .stdout(predicate::str::contains("SCREENS: []"));
}

#[test]
fn viewmodel_file_is_reported() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("B.kt"), "class LoginViewModel { }").unwrap();

    ktsift()
        .current_dir(dir.path())
        .arg("scan")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("DATA_CLASSES: []"))
        .stdout(predicate::str::contains("VIEWMODELS: [\"B.kt\"]"))
        .stdout(predicate::str::contains("SCREENS: []"));
}

#[test]
fn composable_file_is_reported() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("C.kt"), "@Composable\nfun Screen() {}").unwrap();

    ktsift()
        .current_dir(dir.path())
        .arg("scan")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("SCREENS: [\"C.kt\"]"));
}

#[test]
fn multi_category_file_appears_in_both_lists() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("D.kt"),
        "data class UiState(val on: Boolean)\n\n@Composable\nfun Home() {}",
    )
    .unwrap();

    ktsift()
        .current_dir(dir.path())
        .arg("scan")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("DATA_CLASSES: [\"D.kt\"]"))
        .stdout(predicate::str::contains("SCREENS: [\"D.kt\"]"))
        .stdout(predicate::str::contains("VIEWMODELS: []"));
}

#[test]
fn non_matching_extension_is_ignored() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("E.txt"), "data class Bar").unwrap();

    ktsift()
        .current_dir(dir.path())
        .arg("scan")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("E.txt").not())
        .stdout(predicate::str::contains("DATA_CLASSES: []"));
}

#[test]
fn empty_root_prints_three_empty_lists() {
    let dir = tempdir().unwrap();

    ktsift()
        .current_dir(dir.path())
        .arg("scan")
        .arg(dir.path())
        .arg("--quiet")
        .assert()
        .success()
        .stdout("DATA_CLASSES: []\nVIEWMODELS: []\nSCREENS: []\n");
}

#[test]
fn json_format_carries_schema_and_categories() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("A.kt"), "data class Foo(val x: Int)").unwrap();

    let output = ktsift()
        .current_dir(dir.path())
        .arg("scan")
        .arg(dir.path())
        .arg("--format")
        .arg("json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["schemaVersion"], "ktsift-v1");
    assert_eq!(value["categories"]["DATA_CLASSES"][0], "A.kt");
    assert!(value["categories"]["SCREENS"].as_array().unwrap().is_empty());
    assert_eq!(value["summary"]["scanned_files"], 1);
}

#[test]
fn unknown_format_is_rejected() {
    let dir = tempdir().unwrap();

    ktsift()
        .current_dir(dir.path())
        .arg("scan")
        .arg(dir.path())
        .arg("--format")
        .arg("yaml")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Unknown format"));
}

#[test]
fn extension_flag_overrides_filter() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("Script.kts"), "data class S(val x: Int)").unwrap();
    fs::write(dir.path().join("Plain.kt"), "data class P(val x: Int)").unwrap();

    ktsift()
        .current_dir(dir.path())
        .arg("scan")
        .arg(dir.path())
        .arg("--extension")
        .arg(".kts")
        .assert()
        .success()
        .stdout(predicate::str::contains("DATA_CLASSES: [\"Script.kts\"]"));
}

#[test]
fn summary_goes_to_stderr_not_stdout() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("A.kt"), "data class Foo(val x: Int)").unwrap();

    ktsift()
        .current_dir(dir.path())
        .arg("scan")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Scanned").not())
        .stderr(predicate::str::contains("Scanned 1 of 1 files"));
}

#[test]
fn quiet_suppresses_summary() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("A.kt"), "data class Foo(val x: Int)").unwrap();

    ktsift()
        .current_dir(dir.path())
        .arg("scan")
        .arg(dir.path())
        .arg("--quiet")
        .assert()
        .success()
        .stderr(predicate::str::contains("Scanned").not());
}
