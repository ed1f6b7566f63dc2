use crate::evaluation::Evaluator;
use crate::timer::TimeGovernor;
use isolation_core::{GameState, Move, Player};
use std::fmt;

/// Score of a forced win for the searching player.
pub const WIN: f64 = f64::INFINITY;
/// Score of a forced loss for the searching player.
pub const LOSS: f64 = f64::NEG_INFINITY;

/// Score of a node paired with the move that leads to it.
///
/// `best_move` is a legal move of the state that produced the result, or
/// `Move::NONE`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchResult {
    pub score: f64,
    pub best_move: Move,
}

impl SearchResult {
    pub const fn new(score: f64, best_move: Move) -> Self {
        Self { score, best_move }
    }

    /// Result for a node whose side to move is stuck. The stuck side loses,
    /// so a maximizing layer scores `LOSS` and a minimizing layer `WIN`.
    pub const fn no_moves(maximizing: bool) -> Self {
        let score = if maximizing { LOSS } else { WIN };
        Self::new(score, Move::NONE)
    }
}

/// Raised when the time budget runs below the governor's threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTimeout;

impl fmt::Display for SearchTimeout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "search time budget exhausted")
    }
}

impl std::error::Error for SearchTimeout {}

/// A search either completes or is cancelled. Cancellation is passed up with
/// `?` and only the decision driver looks at it.
pub type SearchOutcome = Result<SearchResult, SearchTimeout>;

/// Counters collected over one decision.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Engine invocations that passed the time check.
    pub nodes: u64,
    /// Calls into the evaluator.
    pub evaluations: u64,
}

/// Where a search stops expanding and asks the evaluator instead.
///
/// The two engines use different conventions for the same nominal depth and
/// both are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cutoff {
    /// At depth 1, score each child of the node. Used by minimax.
    Children,
    /// At depth 0, score the node itself. Used by alpha-beta.
    Node,
}

impl Cutoff {
    /// Returns true if a node searched with `depth` remaining is a cutoff node.
    pub const fn reached(self, depth: u32) -> bool {
        match self {
            Cutoff::Children => depth <= 1,
            Cutoff::Node => depth == 0,
        }
    }
}

/// Per-decision state threaded through the recursion: the time governor, the
/// evaluator, the perspective player and the counters.
pub struct SearchContext<'a, E: ?Sized> {
    governor: TimeGovernor<'a>,
    evaluator: &'a E,
    player: Player,
    stats: SearchStats,
}

impl<'a, E: ?Sized> SearchContext<'a, E> {
    pub fn new(governor: TimeGovernor<'a>, evaluator: &'a E, player: Player) -> Self {
        Self {
            governor,
            evaluator,
            player,
            stats: SearchStats::default(),
        }
    }

    /// Must be called at the entry of every node, before any child work.
    pub fn enter(&mut self) -> Result<(), SearchTimeout> {
        self.governor.check()?;
        self.stats.nodes += 1;
        Ok(())
    }

    /// Scores `state` from the searching player's perspective.
    pub fn evaluate<G>(&mut self, state: &G) -> f64
    where
        G: GameState,
        E: Evaluator<G>,
    {
        self.stats.evaluations += 1;
        self.evaluator.evaluate(state, self.player)
    }

    pub fn player(&self) -> Player {
        self.player
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }
}
