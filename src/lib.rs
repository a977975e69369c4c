//! Sliding-tile puzzle search engine.
//!
//! Breadth-first, iterative-deepening and A* (Manhattan distance) solvers
//! over N×N boards, a seeded scramble generator, a parity diagnostic and a
//! comparator that cross-checks the strategies against each other.

pub mod board;
pub mod cache;
pub mod compare;
pub mod config;
pub mod error;
pub mod scramble;
pub mod search;
pub mod solvability;
pub mod state;

pub use crate::board::{replay, Board, Move};
pub use crate::cache::{CacheStats, SolverCache};
pub use crate::compare::{compare, Comparison, StrategyReport};
pub use crate::config::Difficulty;
pub use crate::error::{BoardError, CompareError, ScrambleError, SearchError};
pub use crate::scramble::{generate_solvable_board, rng_for_seed, scramble};
pub use crate::search::{
    manhattan_distance, solve_astar, solve_bfs, solve_iddfs, GoalPositions, SearchResult, Strategy,
};
pub use crate::solvability::{inversions, is_reachable, is_solvable};
pub use crate::state::{Node, NodeId, StateTree, Step};
