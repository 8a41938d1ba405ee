//! Integration tests for the gridbot CLI.
//!
//! These tests invoke the `gridbot` binary as a subprocess and check
//! exit codes, stdout, and stderr.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[allow(deprecated)]
fn gridbot() -> Command {
    Command::cargo_bin("gridbot").unwrap()
}

/// Write a puzzle/program pair to a temp dir, returning their paths.
fn write_pair(dir: &TempDir, puzzle: &str, program: &str) -> (PathBuf, PathBuf) {
    let puzzle_path = dir.path().join("test.gbp");
    let program_path = dir.path().join("test.gbf");
    fs::write(&puzzle_path, puzzle).unwrap();
    fs::write(&program_path, program).unwrap();
    (puzzle_path, program_path)
}

/// A 3-wide red strip with the goal on the right.
const STRIP: &str = "\
grid
rrR
end
robot 0 0 right
slots 2 0 0 0 0
";

// ---- No-args / help ----

#[test]
fn no_args_prints_usage_and_exits_1() {
    gridbot()
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Usage: gridbot"));
}

#[test]
fn help_flag_exits_0() {
    gridbot()
        .arg("--help")
        .assert()
        .success()
        .stderr(predicate::str::contains("Commands:"));
}

#[test]
fn unknown_command_exits_1() {
    gridbot()
        .arg("frobnicate")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("unknown command"));
}

// ---- run ----

#[test]
fn run_solving_program_exits_0() {
    let dir = TempDir::new().unwrap();
    let (puzzle, program) = write_pair(&dir, STRIP, "f1: advance advance\n");
    gridbot()
        .args(["run", puzzle.to_str().unwrap(), program.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("won: 1/1 goals in 2 steps"));
}

#[test]
fn run_losing_program_exits_2() {
    let dir = TempDir::new().unwrap();
    // Turn up and walk off the strip into the void.
    let (puzzle, program) = write_pair(&dir, STRIP, "f1: turn-left advance\n");
    gridbot()
        .args(["run", puzzle.to_str().unwrap(), program.to_str().unwrap()])
        .assert()
        .failure()
        .code(2)
        .stdout(predicate::str::contains("lost"));
}

#[test]
fn run_missing_file_exits_1() {
    let dir = TempDir::new().unwrap();
    let (puzzle, _) = write_pair(&dir, STRIP, "");
    gridbot()
        .args([
            "run",
            puzzle.to_str().unwrap(),
            dir.path().join("nope.gbf").to_str().unwrap(),
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("cannot read"));
}

#[test]
fn run_bad_program_exits_1() {
    let dir = TempDir::new().unwrap();
    let (puzzle, program) = write_pair(&dir, STRIP, "f1: jump\n");
    gridbot()
        .args(["run", puzzle.to_str().unwrap(), program.to_str().unwrap()])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("unknown instruction"));
}

#[test]
fn run_guarded_program_solves() {
    let dir = TempDir::new().unwrap();
    // The red guard matches every tile of the strip; the blue-guarded
    // turn never fires.
    let (puzzle, program) = write_pair(&dir, STRIP, "f1: turn-left?blue advance?red\n");
    gridbot()
        .args(["run", puzzle.to_str().unwrap(), program.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("won"));
}

// ---- trace ----

#[test]
fn trace_prints_step_lines() {
    let dir = TempDir::new().unwrap();
    let (puzzle, program) = write_pair(&dir, STRIP, "f1: advance advance\n");
    gridbot()
        .args(["trace", puzzle.to_str().unwrap(), program.to_str().unwrap()])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("step    1")
                .and(predicate::str::contains("step    2"))
                .and(predicate::str::contains("won")),
        );
}

#[test]
fn trace_limit_stops_early() {
    let dir = TempDir::new().unwrap();
    // Spin in place forever; the limit cuts the trace off.
    let (puzzle, program) = write_pair(&dir, STRIP, "f1: turn-left turn-right\n");
    gridbot()
        .args([
            "trace",
            puzzle.to_str().unwrap(),
            program.to_str().unwrap(),
            "--limit",
            "5",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("stopped after 5 steps"));
}

// ---- check ----

#[test]
fn check_valid_pair_exits_0() {
    let dir = TempDir::new().unwrap();
    let (puzzle, program) = write_pair(&dir, STRIP, "f1: advance -\n");
    gridbot()
        .args(["check", puzzle.to_str().unwrap(), program.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "ok: 3 tiles, 1 goals, 1 instructions in 2 slots",
        ));
}

#[test]
fn check_disallowed_kind_exits_1() {
    let dir = TempDir::new().unwrap();
    let puzzle_text = format!("{STRIP}allow advance\n");
    let (puzzle, program) = write_pair(&dir, &puzzle_text, "f1: paint-blue\n");
    gridbot()
        .args(["check", puzzle.to_str().unwrap(), program.to_str().unwrap()])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("not allowed"));
}

#[test]
fn check_invalid_puzzle_exits_1() {
    let dir = TempDir::new().unwrap();
    // No goal anywhere on the board.
    let (puzzle, program) = write_pair(
        &dir,
        "grid\nrr\nend\nrobot 0 0 right\nslots 1 0 0 0 0\n",
        "f1: advance\n",
    );
    gridbot()
        .args(["check", puzzle.to_str().unwrap(), program.to_str().unwrap()])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("no goal markers"));
}
