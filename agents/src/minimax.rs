use crate::evaluation::Evaluator;
use crate::search::{Cutoff, SearchContext, SearchOutcome, SearchResult};
use isolation_core::GameState;

/// Minimax scores every child of a node at depth 1.
pub const CUTOFF: Cutoff = Cutoff::Children;

/// Depth-limited minimax from the point of view of `ctx.player()`.
///
/// Each child's score is paired with the move that reaches it, so the result
/// names a move of `state`. Among equal scores the smallest move wins; see
/// [`select`].
pub fn minimax<G, E>(
    ctx: &mut SearchContext<'_, E>,
    state: &G,
    depth: u32,
    maximizing: bool,
) -> SearchOutcome
where
    G: GameState,
    E: Evaluator<G> + ?Sized,
{
    ctx.enter()?;

    let moves = state.legal_moves();
    if moves.is_empty() {
        return Ok(SearchResult::no_moves(maximizing));
    }

    let mut scored = Vec::with_capacity(moves.len());
    for mv in moves {
        let child = state.forecast(mv);
        let score = if CUTOFF.reached(depth) {
            ctx.evaluate(&child)
        } else {
            minimax(ctx, &child, depth - 1, !maximizing)?.score
        };
        scored.push(SearchResult::new(score, mv));
    }

    Ok(select(scored, maximizing).unwrap_or_else(|| SearchResult::no_moves(maximizing)))
}

/// Picks the highest (or lowest) score. Ties go to the lexicographically
/// smallest move, whatever order the moves were generated in.
pub fn select(scored: Vec<SearchResult>, maximizing: bool) -> Option<SearchResult> {
    scored.into_iter().reduce(|best, candidate| {
        let better = if maximizing {
            candidate.score > best.score
        } else {
            candidate.score < best.score
        };
        let tie = candidate.score == best.score && candidate.best_move < best.best_move;
        if better || tie {
            candidate
        } else {
            best
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::{ImprovedScore, OpenMoveScore};
    use crate::search::{SearchTimeout, LOSS};
    use crate::timer::TimeGovernor;
    use isolation_core::{Board, Move, Player};

    #[test]
    fn test_select_tie_break() {
        let scored = vec![
            SearchResult::new(5.0, Move::new(4, 4)),
            SearchResult::new(5.0, Move::new(1, 2)),
            SearchResult::new(2.0, Move::new(0, 0)),
        ];

        assert_eq!(
            select(scored.clone(), true),
            Some(SearchResult::new(5.0, Move::new(1, 2)))
        );
        assert_eq!(
            select(scored, false),
            Some(SearchResult::new(2.0, Move::new(0, 0)))
        );
        assert_eq!(select(Vec::new(), true), None);
    }

    #[test]
    fn test_depth_one_matches_direct_evaluation() {
        let board = Board::from_moves(7, 7, &[Move::new(3, 3), Move::new(0, 0)]).unwrap();
        let mut ctx = SearchContext::new(TimeGovernor::unlimited(), &ImprovedScore, Player::First);

        let result = minimax(&mut ctx, &board, 1, true).unwrap();

        let expected = board
            .legal_moves()
            .into_iter()
            .map(|mv| ImprovedScore.evaluate(&board.forecast(mv), Player::First))
            .fold(LOSS, f64::max);
        assert_eq!(result.score, expected);
        assert!(board.legal_moves().contains(&result.best_move));
        assert_eq!(ctx.stats().evaluations, 8);
        assert_eq!(ctx.stats().nodes, 1);
    }

    #[test]
    fn test_stuck_root() {
        let board = Board::from_moves(3, 1, &[Move::new(0, 0), Move::new(0, 2)]).unwrap();
        let mut ctx = SearchContext::new(TimeGovernor::unlimited(), &OpenMoveScore, Player::First);

        assert_eq!(
            minimax(&mut ctx, &board, 3, true),
            Ok(SearchResult::no_moves(true))
        );
        assert_eq!(
            minimax(&mut ctx, &board, 3, false),
            Ok(SearchResult::no_moves(false))
        );
    }

    #[test]
    fn test_timeout_at_root() {
        let board = Board::new();
        let clock = || 0.0;
        let mut ctx =
            SearchContext::new(TimeGovernor::new(&clock, 10.0), &OpenMoveScore, Player::First);

        assert_eq!(minimax(&mut ctx, &board, 2, true), Err(SearchTimeout));
        assert_eq!(ctx.stats().evaluations, 0);
    }
}
