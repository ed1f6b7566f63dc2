use std::fmt;
use std::str::FromStr;

/// Represents one of the two players in an isolation game.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Player {
    First,
    Second,
}

impl Player {
    /// Returns the other player.
    pub const fn opponent(self) -> Self {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }

    /// Returns the player as an index (0 or 1).
    pub const fn index(self) -> usize {
        match self {
            Player::First => 0,
            Player::Second => 1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::First => write!(f, "player 1"),
            Player::Second => write!(f, "player 2"),
        }
    }
}

/// A move names the cell the player jumps to, as (row, column).
///
/// The derived ordering is lexicographic: row first, then column.
/// `Move::NONE` is the sentinel for "no legal move available".
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Move {
    pub row: i32,
    pub col: i32,
}

impl Move {
    /// The sentinel move, (-1, -1).
    pub const NONE: Move = Move { row: -1, col: -1 };

    /// Creates a new move to the given cell.
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Returns true if this is the sentinel.
    pub const fn is_none(self) -> bool {
        self.row == Self::NONE.row && self.col == Self::NONE.col
    }

    /// Returns the move shifted by the given offset.
    pub const fn offset(self, dr: i32, dc: i32) -> Self {
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl FromStr for Move {
    type Err = String;

    /// Parses "r,c" or "(r, c)".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_start_matches('(').trim_end_matches(')');
        let (row, col) = trimmed
            .split_once(',')
            .ok_or_else(|| format!("expected 'row,col', got '{s}'"))?;
        let row = row
            .trim()
            .parse::<i32>()
            .map_err(|_| format!("invalid row in '{s}'"))?;
        let col = col
            .trim()
            .parse::<i32>()
            .map_err(|_| format!("invalid column in '{s}'"))?;
        Ok(Move::new(row, col))
    }
}
