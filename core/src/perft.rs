use crate::game_state::GameState;
use crate::types::Move;

/// Counts the leaf positions reachable in exactly `depth` plies.
///
/// Positions where the side to move is stuck end the line early and are not
/// counted at the deeper plies.
pub fn perft<G: GameState>(state: &G, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = state.legal_moves();

    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0;
    for mv in moves {
        let next = state.forecast(mv);
        nodes += perft(&next, depth - 1);
    }

    nodes
}

/// Perft split by root move, in generation order.
pub fn perft_divide<G: GameState>(state: &G, depth: u8) -> Vec<(Move, u64)> {
    let moves = state.legal_moves();
    let mut results = Vec::new();

    for mv in moves {
        let next = state.forecast(mv);
        let nodes = if depth <= 1 {
            1
        } else {
            perft(&next, depth - 1)
        };
        results.push((mv, nodes));
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    #[test]
    fn test_perft_empty_board() {
        let board = Board::new();

        // 49 placements, then 48 for the second player
        let test_depths = &[(0, 1), (1, 49), (2, 49 * 48)];

        for &(depth, expected) in test_depths {
            let result = perft(&board, depth);
            assert_eq!(
                result, expected,
                "Perft({}) failed: expected {}, got {}",
                depth, expected, result
            );
        }
    }

    #[test]
    fn test_perft_divide() {
        let board = Board::from_moves(7, 7, &[Move::new(3, 3), Move::new(0, 0)]).unwrap();
        let results = perft_divide(&board, 1);

        assert_eq!(results.len(), 8);
        assert_eq!(results.iter().map(|(_, n)| n).sum::<u64>(), 8);
        assert_eq!(
            results.iter().map(|(_, n)| n).sum::<u64>(),
            perft(&board, 1)
        );
    }

    #[test]
    fn test_perft_divide_matches_perft() {
        let board = Board::from_moves(5, 5, &[Move::new(2, 2), Move::new(0, 0)]).unwrap();
        let total: u64 = perft_divide(&board, 3).iter().map(|(_, n)| n).sum();
        assert_eq!(total, perft(&board, 3));
    }
}
