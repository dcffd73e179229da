use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create an isolated settings directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color and isolated settings
fn missive_cmd(env: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("missive").expect("Failed to find missive binary");
    cmd.env("XDG_CONFIG_HOME", env.path());
    cmd.arg("--no-color");
    cmd
}

#[test]
fn test_cli_send_formal() {
    let env = create_cli_test_environment();

    missive_cmd(&env)
        .args(["send", "--name", "Ana", "--tone", "formal", "Test"])
        .assert()
        .success()
        .stdout("Dear Ana,\n\nTest\n\nSincerely,\nAna\n");
}

#[test]
fn test_cli_send_defaults_to_friendly_and_friend() {
    let env = create_cli_test_environment();

    missive_cmd(&env)
        .args(["send", "  Hello there  "])
        .assert()
        .success()
        .stdout("Hi Friend 👋\n\nHello there\n\nTake care,\nFriend\n");
}

#[test]
fn test_cli_send_reads_body_from_stdin() {
    let env = create_cli_test_environment();

    missive_cmd(&env)
        .args(["send", "-n", "Bo", "-t", "funny"])
        .write_stdin("Pizza?\n")
        .assert()
        .success()
        .stdout("Yo Bo!\n\nPizza? 😂\n\nCheers,\nYour pal\n");
}

#[test]
fn test_cli_send_blank_body_fails_with_prompt() {
    let env = create_cli_test_environment();

    missive_cmd(&env)
        .args(["send", "--name", "Ana", "   "])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Write a message before sending."));
}

#[test]
fn test_cli_preview_keeps_body_verbatim() {
    let env = create_cli_test_environment();

    missive_cmd(&env)
        .args(["preview", "--tone", "funny", " hey "])
        .assert()
        .success()
        .stdout("Yo Friend!\n\n hey  😂\n\nCheers,\nYour pal\n");
}

#[test]
fn test_cli_preview_accepts_blank_body() {
    let env = create_cli_test_environment();

    missive_cmd(&env)
        .args(["preview", "--name", "Ana", ""])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Hi Ana 👋"));
}

#[test]
fn test_cli_rejects_unknown_tone_flag() {
    let env = create_cli_test_environment();

    missive_cmd(&env)
        .args(["send", "--tone", "loud", "Hi"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("loud"));
}

#[test]
fn test_cli_tones_lists_all() {
    let env = create_cli_test_environment();

    missive_cmd(&env)
        .arg("tones")
        .assert()
        .success()
        .stdout(predicate::str::contains("# Tones"))
        .stdout(predicate::str::contains("**Friendly** (default)"))
        .stdout(predicate::str::contains("- Formal"))
        .stdout(predicate::str::contains("- Funny"));
}

#[test]
fn test_cli_config_file_supplies_defaults() {
    let env = create_cli_test_environment();
    let config_path = env.path().join("settings.json");
    fs::write(
        &config_path,
        r#"{"default_name": "Ana", "default_tone": "formal"}"#,
    )
    .unwrap();

    missive_cmd(&env)
        .args(["--config-file", config_path.to_str().unwrap(), "send", "Hi"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Dear Ana,"));

    missive_cmd(&env)
        .args([
            "--config-file",
            config_path.to_str().unwrap(),
            "send",
            "--name",
            "Bo",
            "--tone",
            "friendly",
            "Hi",
        ])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Hi Bo 👋"));
}

#[test]
fn test_cli_xdg_config_is_picked_up() {
    let env = create_cli_test_environment();
    let dir = env.path().join("missive");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("config.json"), r#"{"default_tone": "funny"}"#).unwrap();

    missive_cmd(&env)
        .args(["send", "Hi"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Yo Friend!"));
}

#[test]
fn test_cli_invalid_config_fails() {
    let env = create_cli_test_environment();
    let config_path = env.path().join("broken.json");
    fs::write(&config_path, r#"{"default_tone": "loud"}"#).unwrap();

    missive_cmd(&env)
        .args(["--config-file", config_path.to_str().unwrap(), "tones"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load settings"));
}

#[test]
fn test_cli_session_script() {
    let env = create_cli_test_environment();

    missive_cmd(&env)
        .arg("session")
        .write_stdin(":name Ana\n:tone formal\nSee you soon.\n:send\n:quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Dear Ana,\n\nSee you soon.\n\nSincerely,\nAna\n",
        ));
}

#[test]
fn test_cli_session_is_default_command() {
    let env = create_cli_test_environment();

    missive_cmd(&env)
        .write_stdin(":send\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Write a message before sending."));
}

#[test]
fn test_cli_help_hides_clipboard_holder() {
    let env = create_cli_test_environment();

    missive_cmd(&env)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("send"))
        .stdout(predicate::str::contains("hold-clipboard").not());
}
