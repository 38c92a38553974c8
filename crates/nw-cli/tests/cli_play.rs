//! Integration tests for the `nightwood` binary.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use assert_cmd::Command;
use predicates::prelude::*;

fn nightwood() -> Command {
    Command::cargo_bin("nightwood").unwrap()
}

// ---------------------------------------------------------------------------
// full playthroughs
// ---------------------------------------------------------------------------

#[test]
fn hills_route_is_lost_to_the_forest() {
    nightwood()
        .write_stdin("north\nno\nno\nstone\nhills\nno\nno\nno\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("NIGHTWOOD"))
        .stdout(predicate::str::contains("You take 1 damage. Health: 2"))
        .stdout(predicate::str::contains("*** Lost to the Forest ***"))
        .stdout(predicate::str::contains("Final score: 2"))
        .stdout(predicate::str::contains("Inventory: nothing"))
        .stdout(predicate::str::contains("Thanks for playing."));
}

#[test]
fn east_route_survives_the_night() {
    nightwood()
        .write_stdin("east\nno\nfollow\nno\nno\nno\nno\nno\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("*** Survived the Night ***"))
        .stdout(predicate::str::contains("Final score: 10"));
}

#[test]
fn replay_runs_a_second_playthrough() {
    let one_round = "north\nno\nno\nstone\nhills\nno\nno\n";
    let input = format!("{one_round}yes\n{one_round}no\n");
    let output = nightwood().write_stdin(input).assert().success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    assert_eq!(stdout.matches("*** Lost to the Forest ***").count(), 2);
    assert_eq!(stdout.matches("Final score: 2").count(), 2);
}

// ---------------------------------------------------------------------------
// input handling
// ---------------------------------------------------------------------------

#[test]
fn invalid_answers_are_reprompted() {
    nightwood()
        .write_stdin("sideways\nn\n NORTH \nno\nno\nstone\nhills\nno\nno\nno\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Please type one of: north, east"))
        .stdout(predicate::str::contains("Lost to the Forest"));
}

#[test]
fn closed_stdin_says_farewell() {
    nightwood()
        .write_stdin("north\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Farewell"))
        .stdout(predicate::str::contains("Final score").not());
}

#[test]
fn empty_stdin_says_farewell() {
    nightwood()
        .write_stdin("")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Farewell"));
}

#[cfg(unix)]
#[test]
fn interrupt_at_prompt_says_farewell() {
    use std::io::Read;
    use std::process::{Command as Process, Stdio};

    let mut child = Process::new(assert_cmd::cargo::cargo_bin("nightwood"))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .unwrap();
    // Held open so the binary stays blocked on the prompt.
    let _stdin = child.stdin.take().unwrap();
    let mut stdout = child.stdout.take().unwrap();

    let mut seen = Vec::new();
    let mut byte = [0u8; 1];
    while !String::from_utf8_lossy(&seen).contains("(north/east): ") {
        let n = stdout.read(&mut byte).unwrap();
        assert!(n > 0, "nightwood exited before the first prompt");
        seen.push(byte[0]);
    }

    let kill = Process::new("kill")
        .arg("-INT")
        .arg(child.id().to_string())
        .status()
        .unwrap();
    assert!(kill.success());

    stdout.read_to_end(&mut seen).unwrap();
    let status = child.wait().unwrap();
    assert_eq!(status.code(), Some(0));
    assert!(String::from_utf8_lossy(&seen).contains("Farewell"));
}

#[test]
fn garbled_bytes_are_reprompted() {
    nightwood()
        .write_stdin(b"nor\xffth\nnorth\nno\nno\nstone\nhills\nno\nno\nno\n".to_vec())
        .assert()
        .success()
        .stdout(predicate::str::contains("Please type one of: north, east"))
        .stdout(predicate::str::contains("*** Lost to the Forest ***"));
}

// ---------------------------------------------------------------------------
// arguments
// ---------------------------------------------------------------------------

#[test]
fn version_flag() {
    nightwood()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("nightwood"));
}

#[test]
fn rejects_unknown_arguments() {
    nightwood().arg("--seed").arg("3").assert().failure();
}
