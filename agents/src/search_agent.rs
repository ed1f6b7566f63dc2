use crate::alphabeta::alphabeta;
use crate::config::{Method, SearchConfig};
use crate::evaluation::Evaluator;
use crate::minimax::minimax;
use crate::opening::OpeningBook;
use crate::search::{SearchContext, SearchOutcome, SearchStats, LOSS, WIN};
use crate::timer::TimeGovernor;
use crate::Agent;
use isolation_core::{GameState, Move};
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Where the move of a `Decision` came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveSource {
    Opening,
    Search,
    /// No search depth completed; the first legal move was returned.
    Fallback,
    NoMoves,
}

/// Outcome of one call to `SearchAgent::decide`.
#[derive(Debug, Clone, PartialEq)]
pub struct Decision {
    pub best_move: Move,
    /// Score of the deepest completed search, if any.
    pub score: Option<f64>,
    /// Deepest completed search depth (0 if none).
    pub depth: u32,
    pub stats: SearchStats,
    /// True if the time governor cut the search short.
    pub stopped: bool,
    pub source: MoveSource,
}

impl Decision {
    fn immediate(best_move: Move, source: MoveSource) -> Self {
        Self {
            best_move,
            score: None,
            depth: 0,
            stats: SearchStats::default(),
            stopped: false,
            source,
        }
    }
}

/// Game-playing agent: opening book for the first two plies, then minimax or
/// alpha-beta, optionally with iterative deepening, under a time budget.
pub struct SearchAgent<E, R = StdRng> {
    name: String,
    config: SearchConfig,
    evaluator: E,
    openings: OpeningBook,
    rng: R,
}

impl<E> SearchAgent<E, StdRng> {
    pub fn new(config: SearchConfig, evaluator: E) -> Self {
        Self::with_rng(config, evaluator, StdRng::from_entropy())
    }
}

impl<E, R: Rng> SearchAgent<E, R> {
    /// Uses `rng` for the opening book's random fallback.
    pub fn with_rng(config: SearchConfig, evaluator: E, rng: R) -> Self {
        let name = if config.iterative {
            format!("{}(depth<={})", config.method, config.depth)
        } else {
            format!("{}(depth={})", config.method, config.depth)
        };
        Self {
            name,
            config,
            evaluator,
            openings: OpeningBook::default(),
            rng,
        }
    }

    pub fn with_openings(mut self, openings: OpeningBook) -> Self {
        self.openings = openings;
        self
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Chooses a move for the side to move in `state`.
    ///
    /// `time_left` reports the milliseconds left in the turn. The search is
    /// abandoned once it drops below the configured threshold, and the move of
    /// the last fully completed depth is returned (or `legal_moves[0]` if no
    /// depth completed).
    pub fn decide<G>(&mut self, state: &G, legal_moves: &[Move], time_left: &dyn Fn() -> f64) -> Decision
    where
        G: GameState,
        E: Evaluator<G>,
    {
        let ply = state.ply_count();
        if self.openings.applies(ply) {
            let mv = self.openings.choose(legal_moves, &mut self.rng);
            debug!("{}: opening move {} at ply {}", self.name, mv, ply);
            let source = if mv.is_none() {
                MoveSource::NoMoves
            } else {
                MoveSource::Opening
            };
            return Decision::immediate(mv, source);
        }

        let Some(&fallback) = legal_moves.first() else {
            return Decision::immediate(Move::NONE, MoveSource::NoMoves);
        };
        let mut decision = Decision::immediate(fallback, MoveSource::Fallback);

        let governor = TimeGovernor::new(time_left, self.config.threshold_ms);
        let mut ctx = SearchContext::new(governor, &self.evaluator, state.active_player());

        let first_depth = if self.config.iterative {
            1
        } else {
            self.config.depth
        };

        for depth in first_depth..=self.config.depth {
            match run(self.config.method, &mut ctx, state, depth) {
                Ok(result) => {
                    debug!(
                        "{}: depth {} complete, best {} score {} ({} nodes)",
                        self.name,
                        depth,
                        result.best_move,
                        result.score,
                        ctx.stats().nodes
                    );
                    if !result.best_move.is_none() {
                        decision.best_move = result.best_move;
                        decision.score = Some(result.score);
                        decision.depth = depth;
                        decision.source = MoveSource::Search;
                    }
                }
                Err(timeout) => {
                    debug!(
                        "{}: {} during depth {}, keeping {}",
                        self.name, timeout, depth, decision.best_move
                    );
                    decision.stopped = true;
                    break;
                }
            }
        }

        decision.stats = ctx.stats();
        decision
    }
}

fn run<G, E>(
    method: Method,
    ctx: &mut SearchContext<'_, E>,
    state: &G,
    depth: u32,
) -> SearchOutcome
where
    G: GameState,
    E: Evaluator<G> + ?Sized,
{
    match method {
        Method::Minimax => minimax(ctx, state, depth, true),
        Method::AlphaBeta => alphabeta(ctx, state, depth, LOSS, WIN, true),
    }
}

impl<G, E, R> Agent<G> for SearchAgent<E, R>
where
    G: GameState,
    E: Evaluator<G>,
    R: Rng,
{
    fn get_move(&mut self, state: &G, legal_moves: &[Move], time_left: &dyn Fn() -> f64) -> Move {
        self.decide(state, legal_moves, time_left).best_move
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::{ImprovedScore, OpenMoveScore};
    use crate::timer::countdown;
    use isolation_core::Board;
    use std::time::Duration;

    fn agent(config: SearchConfig) -> SearchAgent<ImprovedScore> {
        SearchAgent::with_rng(config, ImprovedScore, StdRng::seed_from_u64(1))
    }

    #[test]
    fn test_opening_on_empty_board() {
        let board = Board::new();
        let mut legal = board.legal_moves();
        let mut player = agent(SearchConfig::default());

        let decision = player.decide(&board, &legal, &|| 1000.0);
        assert_eq!(decision.best_move, Move::new(2, 3));
        assert_eq!(decision.source, MoveSource::Opening);

        legal.reverse();
        assert_eq!(player.get_move(&board, &legal, &|| 1000.0), Move::new(2, 3));
    }

    #[test]
    fn test_second_ply_avoids_taken_cell() {
        let board = Board::from_moves(7, 7, &[Move::new(2, 3)]).unwrap();
        let mut player = agent(SearchConfig::default());

        let mv = player.get_move(&board, &board.legal_moves(), &|| 1000.0);
        assert_eq!(mv, Move::new(3, 4));
    }

    #[test]
    fn test_search_returns_legal_move() {
        let board = Board::from_moves(7, 7, &[Move::new(3, 3), Move::new(0, 0)]).unwrap();
        let legal = board.legal_moves();

        for config in [SearchConfig::minimax(3), SearchConfig::alphabeta(3)] {
            let mut player = agent(config);
            let clock = countdown(Duration::from_secs(10));
            let decision = player.decide(&board, &legal, &clock);

            assert!(legal.contains(&decision.best_move));
            assert_eq!(decision.source, MoveSource::Search);
            assert_eq!(decision.depth, 3);
            assert!(!decision.stopped);
        }
    }

    #[test]
    fn test_no_time_returns_first_legal_move() {
        let board = Board::from_moves(7, 7, &[Move::new(3, 3), Move::new(0, 0)]).unwrap();
        let legal = board.legal_moves();
        let mut player = agent(SearchConfig::alphabeta(3));

        let decision = player.decide(&board, &legal, &|| 0.0);

        assert_eq!(decision.best_move, legal[0]);
        assert_eq!(decision.source, MoveSource::Fallback);
        assert_eq!(decision.depth, 0);
        assert!(decision.stopped);
        assert_eq!(decision.score, None);
    }

    #[test]
    fn test_no_legal_moves() {
        let board = Board::from_moves(3, 1, &[Move::new(0, 0), Move::new(0, 2)]).unwrap();
        let mut player = SearchAgent::with_rng(
            SearchConfig::default(),
            OpenMoveScore,
            StdRng::seed_from_u64(1),
        );

        let decision = player.decide(&board, &[], &|| 1000.0);
        assert_eq!(decision.best_move, Move::NONE);
        assert_eq!(decision.source, MoveSource::NoMoves);
    }

    #[test]
    fn test_names() {
        assert_eq!(
            Agent::<Board>::name(&agent(SearchConfig::alphabeta(4))),
            "alphabeta(depth<=4)"
        );
        assert_eq!(
            Agent::<Board>::name(&agent(SearchConfig::minimax(2).with_iterative(false))),
            "minimax(depth=2)"
        );
    }
}
