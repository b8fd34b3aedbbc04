//! Integration tests for the `paths` command.

mod common;

use common::{TestEnv, MISSING_USER};
use predicates::prelude::*;

#[test]
fn test_paths_lists_resolved_settings() {
    let env = TestEnv::new();
    let config = env.write_config(
        "confpath.yaml",
        "paths:\n  music_directory: ~/music\n  db_file: /var/lib/mpd/db\n",
    );

    env.command()
        .arg("--config")
        .arg(&config)
        .arg("paths")
        .assert()
        .success()
        .stdout(format!(
            "db_file = /var/lib/mpd/db\nmusic_directory = {}\n",
            env.home_path("music")
        ));
}

#[test]
fn test_paths_from_user_config() {
    let env = TestEnv::new();
    env.write_user_config("paths:\n  state_file: ~/state\n");

    env.command()
        .arg("paths")
        .assert()
        .success()
        .stdout(predicate::str::contains("state_file = "));
}

#[test]
fn test_no_user_config_skips_user_file() {
    let env = TestEnv::new();
    env.write_user_config("paths:\n  state_file: ~/state\n");

    env.command()
        .args(["--no-user-config", "paths"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_paths_failure_reported_per_entry() {
    let env = TestEnv::new();
    let config = env.write_config(
        "confpath.yaml",
        &format!(
            "paths:\n  a_bad: relative\n  b_user: ~{MISSING_USER}/x\n  c_good: /srv/c\n"
        ),
    );

    env.command()
        .arg("--config")
        .arg(&config)
        .arg("paths")
        .assert()
        .code(1)
        .stdout("c_good = /srv/c\n")
        .stderr(predicate::str::contains("a_bad: not an absolute path: relative"))
        .stderr(predicate::str::contains(format!(
            "b_user: no such user: {MISSING_USER}"
        )))
        .stderr(predicate::str::contains("2 of 3 configured paths failed"));
}

#[test]
fn test_paths_json_output() {
    let env = TestEnv::new();
    let config = env.write_config(
        "confpath.yaml",
        "paths:\n  db_file: ~/db\n  rel: relative\n",
    );

    let output = env
        .command()
        .arg("--config")
        .arg(&config)
        .args(["paths", "--format", "json"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["name"], "db_file");
    assert_eq!(entries[0]["path"], env.home_path("db"));
    assert_eq!(entries[1]["error"], "not an absolute path: relative");
}

#[test]
fn test_config_from_environment_variable() {
    let env = TestEnv::new();
    let config = env.write_config("confpath.yaml", "paths:\n  db_file: /var/db\n");

    env.command()
        .env("CONFPATH_CONFIG", &config)
        .arg("paths")
        .assert()
        .success()
        .stdout("db_file = /var/db\n");
}
