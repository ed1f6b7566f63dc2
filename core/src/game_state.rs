use crate::types::{Move, Player};

/// The view of a game position that the search agents work against.
///
/// States are values: `forecast` must return a fresh successor and leave
/// `self` untouched, so sibling branches of a search never alias.
pub trait GameState: Clone {
    /// Legal moves for `player`, in generation order.
    fn legal_moves_for(&self, player: Player) -> Vec<Move>;

    /// Returns the successor state after the side to move plays `mv`.
    fn forecast(&self, mv: Move) -> Self;

    /// The player whose turn it is.
    fn active_player(&self) -> Player;

    /// Current cell of `player`, or `None` before its first move.
    fn player_location(&self, player: Player) -> Option<Move>;

    /// Number of moves applied so far.
    fn ply_count(&self) -> u32;

    /// Legal moves for the side to move. Order is significant to the search.
    fn legal_moves(&self) -> Vec<Move> {
        self.legal_moves_for(self.active_player())
    }

    fn inactive_player(&self) -> Player {
        self.active_player().opponent()
    }

    /// True when `player` is to move and has no legal move.
    fn is_loser(&self, player: Player) -> bool {
        self.active_player() == player && self.legal_moves().is_empty()
    }

    /// True when the opponent of `player` is to move and has no legal move.
    fn is_winner(&self, player: Player) -> bool {
        self.inactive_player() == player && self.legal_moves().is_empty()
    }
}
