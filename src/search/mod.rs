//! Uninformed and informed search over board arrangements.

use std::fmt;
use std::time::Duration;

use crate::board::{Board, Move};
use crate::error::SearchError;
use crate::state::Step;

pub mod astar;
pub mod bfs;
pub mod iddfs;

pub use astar::{manhattan_distance, solve_astar, GoalPositions};
pub use bfs::solve_bfs;
pub use iddfs::solve_iddfs;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    Bfs,
    Iddfs,
    AStar,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Bfs, Strategy::Iddfs, Strategy::AStar];

    /// Runs this strategy. `max_depth` only bounds iterative deepening.
    pub fn solve(
        self,
        initial: &Board,
        goal: &Board,
        max_depth: usize,
    ) -> Result<SearchResult, SearchError> {
        match self {
            Strategy::Bfs => solve_bfs(initial, goal),
            Strategy::Iddfs => solve_iddfs(initial, goal, max_depth),
            Strategy::AStar => solve_astar(initial, goal),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Strategy::Bfs => "BFS",
            Strategy::Iddfs => "DFS",
            Strategy::AStar => "A*",
        };
        write!(f, "{}", s)
    }
}

/// A solved instance.
///
/// The path always starts at the initial board and ends at the goal, so the
/// move count is derived from it rather than stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub strategy: Strategy,
    path: Vec<Step>,
    /// States taken off the frontier (or recursive calls for IDDFS).
    pub nodes_expanded: usize,
    pub elapsed: Duration,
}

impl SearchResult {
    pub(crate) fn new(
        strategy: Strategy,
        path: Vec<Step>,
        nodes_expanded: usize,
        elapsed: Duration,
    ) -> Self {
        debug_assert!(!path.is_empty());
        Self {
            strategy,
            path,
            nodes_expanded,
            elapsed,
        }
    }

    pub fn path(&self) -> &[Step] {
        &self.path
    }

    pub fn move_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// `(board, action)` pairs from the initial board to the goal.
    pub fn steps(&self) -> impl Iterator<Item = (&Board, Option<Move>)> + '_ {
        self.path.iter().map(|step| (&step.board, step.action))
    }

    /// The actions along the path, skipping the root.
    pub fn moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.path.iter().filter_map(|step| step.action)
    }

    pub fn initial_board(&self) -> &Board {
        &self.path[0].board
    }

    pub fn final_board(&self) -> &Board {
        &self.path[self.path.len() - 1].board
    }
}

pub(crate) fn check_sizes(initial: &Board, goal: &Board) -> Result<(), SearchError> {
    if initial.size() == goal.size() {
        Ok(())
    } else {
        Err(SearchError::SizeMismatch {
            initial: initial.size(),
            goal: goal.size(),
        })
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::config;

    #[test]
    fn strategies_reject_size_mismatch() {
        let three = Board::goal(3).unwrap();
        let four = Board::goal(4).unwrap();
        for strategy in Strategy::ALL {
            assert_eq!(
                strategy.solve(&three, &four, 10),
                Err(SearchError::SizeMismatch { initial: 3, goal: 4 })
            );
        }
    }

    #[test]
    fn result_accessors_follow_path() {
        let initial = Board::from_rows(&config::EASY_3X3).unwrap();
        let goal = Board::goal(3).unwrap();
        let result = solve_bfs(&initial, &goal).unwrap();

        assert_eq!(result.move_count(), 1);
        assert_eq!(result.initial_board(), &initial);
        assert_eq!(result.final_board(), &goal);
        assert_eq!(result.moves().collect::<Vec<_>>(), vec![Move::Right]);
        let actions: Vec<Option<Move>> = result.steps().map(|(_, a)| a).collect();
        assert_eq!(actions, vec![None, Some(Move::Right)]);
    }

    #[test]
    fn display_names() {
        assert_eq!(Strategy::Bfs.to_string(), "BFS");
        assert_eq!(Strategy::Iddfs.to_string(), "DFS");
        assert_eq!(Strategy::AStar.to_string(), "A*");
    }
}
