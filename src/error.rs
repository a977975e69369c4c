//! Error types for board construction, scrambling, searching and comparison.

use thiserror::Error;

use crate::board::Move;
use crate::compare::StrategyReport;
use crate::search::Strategy;

/// Rejected board input. Raised only while building a [`crate::Board`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("board has no rows")]
    Empty,

    #[error("board is not square: row {row} has {len} cells, expected {size}")]
    NotSquare { row: usize, len: usize, size: usize },

    #[error("expected {expected} tiles, found {found}")]
    WrongTileCount { expected: usize, found: usize },

    #[error("unsupported board size {0}, expected {min}..={max}", min = crate::board::MIN_SIZE, max = crate::board::MAX_SIZE)]
    UnsupportedSize(usize),

    #[error("tile {tile} out of range, expected 0..={max}")]
    TileOutOfRange { tile: u8, max: u8 },

    #[error("tile {0} appears more than once")]
    DuplicateTile(u8),

    #[error("move {mv} at step {step} pushes the blank off the board")]
    IllegalMove { mv: Move, step: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScrambleError {
    #[error("scramble needs at least one move")]
    InvalidMoveCount,

    #[error(transparent)]
    Board(#[from] BoardError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("initial board is {initial}x{initial} but goal is {goal}x{goal}")]
    SizeMismatch { initial: usize, goal: usize },

    /// The strategy ran to exhaustion (or its depth bound) without reaching the goal.
    #[error("{strategy} found no solution after expanding {nodes_expanded} nodes")]
    NotFound {
        strategy: Strategy,
        nodes_expanded: usize,
    },
}

#[derive(Debug, Error)]
pub enum CompareError {
    #[error(transparent)]
    Search(#[from] SearchError),

    /// Strategies disagree on the optimal move count. Always a defect.
    #[error("move counts differ (expected all optimal): {}", format_counts(.reports))]
    MoveCountMismatch { reports: Vec<StrategyReport> },
}

fn format_counts(reports: &[StrategyReport]) -> String {
    reports
        .iter()
        .map(|r| format!("{}={}", r.strategy, r.move_count))
        .collect::<Vec<_>>()
        .join(" ")
}
