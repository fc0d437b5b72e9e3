// postfmt/tests/integration_line_buffered.rs
//! Integration tests for `postfmt censor --line-buffered`.

use anyhow::Result;
use assert_cmd::Command;
use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::process::{Command as StdCommand, Stdio};
use std::time::Duration;
use tempfile::{tempdir, TempDir};

fn postfmt(dir: &TempDir) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo_bin!("postfmt"));
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env("XDG_CONFIG_HOME", dir.path())
        .env_remove("POSTFMT_CENSORED_WORDS");
    cmd
}

#[test]
fn each_line_is_censored() -> Result<()> {
    let dir = tempdir()?;
    postfmt(&dir)
        .args(["--censor", "drat", "censor", "--line-buffered"])
        .write_stdin("first drat\nsecond\nDRAT third\n")
        .assert()
        .success()
        .stdout("first ****\nsecond\n**** third\n");
    Ok(())
}

#[test]
fn missing_trailing_newline_is_added() -> Result<()> {
    let dir = tempdir()?;
    postfmt(&dir)
        .args(["--censor", "drat", "censor", "--line-buffered"])
        .write_stdin("drat")
        .assert()
        .success()
        .stdout("****\n");
    Ok(())
}

#[test]
fn reads_from_input_file() -> Result<()> {
    let dir = tempdir()?;
    let input = dir.path().join("log.txt");
    fs::write(&input, "a drat\nb\n")?;
    postfmt(&dir)
        .args(["--censor", "drat", "censor", "--line-buffered", "-i"])
        .arg(&input)
        .assert()
        .success()
        .stdout("a ****\nb\n");
    Ok(())
}

/// Edits to the config file's word list apply to lines read afterwards.
#[test]
fn config_edits_apply_to_following_lines() -> Result<()> {
    let dir = tempdir()?;
    let config = dir.path().join("words.yaml");
    fs::write(&config, "censored_words: \"alpha\"\n")?;

    let mut child = StdCommand::new(assert_cmd::cargo_bin!("postfmt"))
        .current_dir(dir.path())
        .env("HOME", dir.path())
        .env("XDG_CONFIG_HOME", dir.path())
        .env_remove("POSTFMT_CENSORED_WORDS")
        .arg("--config")
        .arg(&config)
        .args(["censor", "--line-buffered"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()?;

    let mut stdin = child.stdin.take().expect("stdin is piped");
    let mut stdout = BufReader::new(child.stdout.take().expect("stdout is piped"));
    let mut line = String::new();

    writeln!(stdin, "alpha beta")?;
    stdin.flush()?;
    stdout.read_line(&mut line)?;
    assert_eq!(line, "**** beta\n");

    // A different length guarantees the change is seen even when the
    // modification time has coarse resolution.
    std::thread::sleep(Duration::from_millis(20));
    fs::write(&config, "censored_words: \"beta, gamma\"\n")?;

    line.clear();
    writeln!(stdin, "alpha beta")?;
    stdin.flush()?;
    stdout.read_line(&mut line)?;
    assert_eq!(line, "alpha ****\n");

    drop(stdin);
    assert!(child.wait()?.success());
    Ok(())
}
