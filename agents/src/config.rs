use crate::search::Cutoff;
use crate::timer::DEFAULT_THRESHOLD_MS;
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_DEPTH: u32 = 3;

/// Which engine the decision driver runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    #[default]
    Minimax,
    AlphaBeta,
}

impl Method {
    /// The cutoff convention the engine uses.
    pub const fn cutoff(self) -> Cutoff {
        match self {
            Method::Minimax => Cutoff::Children,
            Method::AlphaBeta => Cutoff::Node,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Minimax => write!(f, "minimax"),
            Method::AlphaBeta => write!(f, "alphabeta"),
        }
    }
}

impl FromStr for Method {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "minimax" => Ok(Method::Minimax),
            "alphabeta" | "alpha-beta" => Ok(Method::AlphaBeta),
            _ => Err(ConfigError::UnknownMethod(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    ZeroDepth,
    InvalidThreshold(f64),
    UnknownMethod(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroDepth => write!(f, "Search depth must be at least 1"),
            ConfigError::InvalidThreshold(t) => {
                write!(f, "Time threshold must be a positive number of ms, got {t}")
            }
            ConfigError::UnknownMethod(s) => {
                write!(f, "Unknown search method '{s}' (expected minimax or alphabeta)")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Settings for a `SearchAgent`. The evaluator is passed to the agent
/// separately.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    /// Deepest iteration (or the only one, without iterative deepening).
    pub depth: u32,
    pub method: Method,
    pub iterative: bool,
    /// Milliseconds left at which the search aborts.
    pub threshold_ms: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            method: Method::Minimax,
            iterative: true,
            threshold_ms: DEFAULT_THRESHOLD_MS,
        }
    }
}

impl SearchConfig {
    pub fn minimax(depth: u32) -> Self {
        Self {
            depth,
            method: Method::Minimax,
            ..Self::default()
        }
    }

    pub fn alphabeta(depth: u32) -> Self {
        Self {
            depth,
            method: Method::AlphaBeta,
            ..Self::default()
        }
    }

    pub fn with_iterative(mut self, iterative: bool) -> Self {
        self.iterative = iterative;
        self
    }

    pub fn with_threshold(mut self, threshold_ms: f64) -> Self {
        self.threshold_ms = threshold_ms;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.depth == 0 {
            return Err(ConfigError::ZeroDepth);
        }
        if !self.threshold_ms.is_finite() || self.threshold_ms <= 0.0 {
            return Err(ConfigError::InvalidThreshold(self.threshold_ms));
        }
        Ok(())
    }
}
