use assert_cmd::Command;
use predicates::prelude::*;

fn isolation() -> Command {
    Command::cargo_bin("isolation").expect("binary exists")
}

#[test]
fn perft_counts_empty_board_placements() {
    isolation()
        .args(["perft", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nodes: 49"));

    isolation()
        .args(["perft", "2", "--width", "3", "--height", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nodes: 72"));
}

#[test]
fn perft_divide_reports_total() {
    isolation()
        .args(["perft", "1", "--moves", "3,3 0,0", "--divide"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total: 8"));
}

#[test]
fn search_reports_best_move() {
    for method in ["minimax", "alphabeta"] {
        isolation()
            .args(["search", "--method", method, "--depth", "2", "--moves", "3,3 0,0"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Best move:"))
            .stdout(predicate::str::contains("Depth: 2"));
    }
}

#[test]
fn search_rejects_zero_depth() {
    isolation()
        .args(["search", "--depth", "0", "--moves", "3,3 0,0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Search depth must be at least 1"));
}

#[test]
fn illegal_history_is_rejected() {
    isolation()
        .args(["search", "--moves", "3,3 3,3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Illegal move"));

    isolation()
        .args(["perft", "1", "--moves", "3;x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid move notation"));
}

#[test]
fn play_finishes_a_seeded_game() {
    isolation()
        .args([
            "play", "--p1", "greedy", "--p2", "random", "--seed", "3", "--width", "5",
            "--height", "5", "--time-limit", "1000", "--quiet",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Player 1: Greedy"))
        .stdout(predicate::str::contains("wins"));
}
