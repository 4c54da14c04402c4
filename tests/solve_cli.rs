use std::fs;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;

use rush_hour::solution::load_report;

fn solve_cmd() -> Command {
    Command::cargo_bin("solve").expect("binary exists")
}

#[test]
fn lists_builtin_puzzles() {
    solve_cmd()
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("jam_1"))
        .stdout(predicate::str::contains("boxed_in"));
}

#[test]
fn solves_builtin_puzzle_and_prints_moves() {
    solve_cmd()
        .args(["--puzzle", "lone_target"])
        .assert()
        .success()
        .stdout(predicate::str::contains("solved: 2 moves"))
        .stdout(predicate::str::contains("1. X (vehicle 0) +1"));
}

#[test]
fn slides_group_consecutive_moves() {
    solve_cmd()
        .args(["--puzzle", "lone_target", "--slides"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. X (vehicle 0) +2"));
}

#[test]
fn exhausted_puzzle_exits_3() {
    solve_cmd()
        .args(["--puzzle", "boxed_in"])
        .assert()
        .code(3)
        .stdout(predicate::str::contains("exhausted"));
}

#[test]
fn tiny_budget_exits_4() {
    solve_cmd()
        .args(["--puzzle", "jam_1", "--max-expansions", "1"])
        .assert()
        .code(4)
        .stdout(predicate::str::contains("budget exceeded: expansions limit 1"));
}

#[test]
fn budget_from_config_file_applies() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("solver.toml");
    fs::write(&config, "[limits]\nmax_expansions = 3\n").unwrap();

    solve_cmd()
        .args(["--puzzle", "jam_1", "--config"])
        .arg(&config)
        .assert()
        .code(4);
}

#[test]
fn bad_input_exits_2() {
    solve_cmd()
        .args(["--puzzle", "no_such_puzzle"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unknown puzzle"));

    solve_cmd().assert().code(2);

    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("broken.txt");
    fs::write(&file, "cars = [(\"H\", 2, 2)]").unwrap();
    solve_cmd().arg("--file").arg(&file).assert().code(2);
}

#[test]
fn solves_tuple_file_and_exports_report() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("blocker.txt");
    fs::write(&file, "cars = [(\"H\", 2, 2, 0), (\"V\", 2, 1, 3)]").unwrap();
    let report = dir.path().join("blocker.json");

    solve_cmd()
        .arg("--file")
        .arg(&file)
        .arg("--export")
        .arg(&report)
        .assert()
        .success()
        .stdout(predicate::str::contains("solved: 5 moves"));

    let loaded = load_report(&report).unwrap();
    assert_eq!(loaded.puzzle_name, "blocker");
    assert_eq!(loaded.moves.len(), 5);

    Command::cargo_bin("play_solution")
        .expect("binary exists")
        .arg(&report)
        .args(["--delay-ms", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("step 5/5"))
        .stdout(predicate::str::contains("target freed"));
}
