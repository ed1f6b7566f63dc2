use crate::search::{LOSS, WIN};
use isolation_core::{Board, GameState, Player};

/// Heuristic scoring of a position from one player's point of view.
pub trait Evaluator<G: GameState> {
    fn evaluate(&self, state: &G, player: Player) -> f64;
}

impl<G: GameState, E: Evaluator<G> + ?Sized> Evaluator<G> for Box<E> {
    fn evaluate(&self, state: &G, player: Player) -> f64 {
        (**self).evaluate(state, player)
    }
}

/// `LOSS` or `WIN` if the game is over for `player`, otherwise `None`.
fn terminal_score<G: GameState>(state: &G, player: Player) -> Option<f64> {
    if state.is_loser(player) {
        Some(LOSS)
    } else if state.is_winner(player) {
        Some(WIN)
    } else {
        None
    }
}

/// Only distinguishes won and lost positions.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullScore;

impl<G: GameState> Evaluator<G> for NullScore {
    fn evaluate(&self, state: &G, player: Player) -> f64 {
        terminal_score(state, player).unwrap_or(0.0)
    }
}

/// Number of moves open to the player.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenMoveScore;

impl<G: GameState> Evaluator<G> for OpenMoveScore {
    fn evaluate(&self, state: &G, player: Player) -> f64 {
        terminal_score(state, player)
            .unwrap_or_else(|| state.legal_moves_for(player).len() as f64)
    }
}

/// Own mobility minus the opponent's.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImprovedScore;

impl<G: GameState> Evaluator<G> for ImprovedScore {
    fn evaluate(&self, state: &G, player: Player) -> f64 {
        terminal_score(state, player).unwrap_or_else(|| {
            let own = state.legal_moves_for(player).len() as f64;
            let opp = state.legal_moves_for(player.opponent()).len() as f64;
            own - opp
        })
    }
}

/// Prefers cells near the centre of the board.
#[derive(Debug, Clone, Copy, Default)]
pub struct CenterScore;

impl Evaluator<Board> for CenterScore {
    fn evaluate(&self, state: &Board, player: Player) -> f64 {
        if let Some(score) = terminal_score(state, player) {
            return score;
        }
        let Some(loc) = state.player_location(player) else {
            return 0.0;
        };
        let center_row = f64::from(state.height() - 1) / 2.0;
        let center_col = f64::from(state.width() - 1) / 2.0;
        let dr = f64::from(loc.row) - center_row;
        let dc = f64::from(loc.col) - center_col;
        -(dr * dr + dc * dc)
    }
}

/// Reads the score of the cell the player stands on from a fixed table.
/// Cells outside the table, and unplaced players, score 0.
#[derive(Debug, Clone, Default)]
pub struct ValueTable {
    values: Vec<Vec<f64>>,
}

impl ValueTable {
    pub fn new(values: Vec<Vec<f64>>) -> Self {
        Self { values }
    }

    /// A `height` x `width` table of zeros.
    pub fn zeros(width: usize, height: usize) -> Self {
        Self::new(vec![vec![0.0; width]; height])
    }

    /// Sets one cell. Out-of-range cells are ignored.
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        if let Some(cell) = self.values.get_mut(row).and_then(|r| r.get_mut(col)) {
            *cell = value;
        }
    }
}

impl<G: GameState> Evaluator<G> for ValueTable {
    fn evaluate(&self, state: &G, player: Player) -> f64 {
        let Some(loc) = state.player_location(player) else {
            return 0.0;
        };
        let (Ok(row), Ok(col)) = (usize::try_from(loc.row), usize::try_from(loc.col)) else {
            return 0.0;
        };
        self.values
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(0.0)
    }
}
