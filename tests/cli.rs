use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn spending(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("spending").unwrap();
    cmd.env("SPENDING_TRACKER_DIR", dir.path());
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn config_prints_paths_and_defaults() {
    let dir = TempDir::new().unwrap();

    spending(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("config.json"))
        .stdout(predicate::str::contains("spending.log"))
        .stdout(predicate::str::contains("Currency suffix: KRW"))
        .stdout(predicate::str::contains("Histogram bins:  10"));
}

#[test]
fn config_reads_settings_file() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.json"),
        r#"{"currency_suffix": "USD", "histogram_bins": 0}"#,
    )
    .unwrap();

    spending(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Currency suffix: USD"))
        .stdout(predicate::str::contains("Histogram bins:  1"));
}

#[test]
fn title_flag_overrides_settings() {
    let dir = TempDir::new().unwrap();

    spending(&dir)
        .args(["--title", "My Money", "config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Title:           My Money"));
}

#[test]
fn malformed_settings_file_fails() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.json"), "{ not json").unwrap();

    spending(&dir)
        .arg("config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse settings file"));
}

#[test]
fn help_lists_subcommands() {
    let dir = TempDir::new().unwrap();

    spending(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("tui"))
        .stdout(predicate::str::contains("config"));
}
