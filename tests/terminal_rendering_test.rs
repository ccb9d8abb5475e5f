use assert_cmd::cargo;
use predicates::prelude::*;
use serial_test::serial;
use std::fs;
use tempfile::TempDir;

fn blog_with_draft() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir(temp_dir.path().join("_drafts")).unwrap();
    fs::write(temp_dir.path().join("_drafts/my-title.markdown"), "x").unwrap();
    temp_dir
}

#[test]
#[serial]
fn test_drafts_with_no_color_is_plain_markdown() {
    let temp_dir = blog_with_draft();

    std::env::set_var("NO_COLOR", "1");

    cargo::cargo_bin_cmd!("quire")
        .current_dir(temp_dir.path())
        .arg("drafts")
        .assert()
        .success()
        .stdout(predicate::str::contains("## Drafts"))
        .stdout(predicate::str::contains("| 0 | `my-title.markdown` | my title |"));

    std::env::remove_var("NO_COLOR");
}

#[test]
#[serial]
fn test_drafts_with_clicolor_force() {
    let temp_dir = blog_with_draft();

    std::env::set_var("CLICOLOR_FORCE", "1");

    cargo::cargo_bin_cmd!("quire")
        .current_dir(temp_dir.path())
        .arg("drafts")
        .assert()
        .success()
        .stdout(predicate::str::contains("my-title.markdown"))
        .stdout(predicate::str::contains("\x1b["))
        .stdout(predicate::str::contains("## Drafts").not());

    std::env::remove_var("CLICOLOR_FORCE");
}

#[test]
fn test_drafts_missing_directory_fails() {
    let temp_dir = TempDir::new().unwrap();

    cargo::cargo_bin_cmd!("quire")
        .current_dir(temp_dir.path())
        .arg("drafts")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}
