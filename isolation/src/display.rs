use crossterm::style::Stylize;
use isolation_core::{Board, GameState, Move, Player};
use std::fmt::Write;

/// Renders the board with coloured player markers.
pub fn render(board: &Board) -> String {
    let mut out = String::from("   ");
    for col in 0..board.width() {
        let _ = write!(out, " {col}");
    }
    out.push('\n');

    let first = board.player_location(Player::First);
    let second = board.player_location(Player::Second);

    for row in 0..i32::from(board.height()) {
        let _ = write!(out, "{row:>2} ");
        for col in 0..i32::from(board.width()) {
            let cell = Move::new(row, col);
            if first == Some(cell) {
                let _ = write!(out, " {}", "1".cyan().bold());
            } else if second == Some(cell) {
                let _ = write!(out, " {}", "2".magenta().bold());
            } else if board.is_blank(cell) {
                out.push_str(" .");
            } else {
                let _ = write!(out, " {}", "#".dark_grey());
            }
        }
        out.push('\n');
    }

    let _ = writeln!(
        out,
        "{} to move, ply {}",
        board.active_player(),
        board.ply_count()
    );
    out
}
