use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};
use std::time::Instant;

use log::debug;

use super::{check_sizes, SearchResult, Strategy};
use crate::board::Board;
use crate::error::SearchError;
use crate::state::StateTree;

/// Goal cell of every tile, indexed by tile value.
#[derive(Debug, Clone)]
pub struct GoalPositions {
    positions: Vec<(usize, usize)>,
}

impl GoalPositions {
    pub fn new(goal: &Board) -> Self {
        let size = goal.size();
        let mut positions = vec![(0, 0); size * size];
        for (idx, &tile) in goal.tiles().iter().enumerate() {
            positions[tile as usize] = (idx / size, idx % size);
        }
        Self { positions }
    }

    pub fn get(&self, tile: u8) -> (usize, usize) {
        self.positions[tile as usize]
    }
}

/// Sum of row and column offsets of each non-blank tile from its goal cell.
pub fn manhattan_distance(board: &Board, goal: &GoalPositions) -> usize {
    let size = board.size();
    board
        .tiles()
        .iter()
        .enumerate()
        .filter(|&(_, &tile)| tile != 0)
        .map(|(idx, &tile)| {
            let (goal_row, goal_col) = goal.get(tile);
            (idx / size).abs_diff(goal_row) + (idx % size).abs_diff(goal_col)
        })
        .sum()
}

/// A* ordered by `f = depth + manhattan`.
///
/// Equal `f` pops in insertion order. A board may sit in the heap several
/// times; only its first pop counts, later ones are discarded. The heuristic
/// is consistent, so that first pop already carries the cheapest depth.
pub fn solve_astar(initial: &Board, goal: &Board) -> Result<SearchResult, SearchError> {
    check_sizes(initial, goal)?;
    let start = Instant::now();

    let goal_positions = GoalPositions::new(goal);
    let mut tree = StateTree::new(initial.clone());
    let mut open = BinaryHeap::new();
    let mut visited: HashSet<Board> = HashSet::new();
    let mut nodes_expanded = 0;
    let mut counter: u64 = 0;

    open.push(Reverse((
        manhattan_distance(initial, &goal_positions),
        counter,
        StateTree::ROOT,
    )));

    while let Some(Reverse((_, _, id))) = open.pop() {
        if visited.contains(tree.board(id)) {
            continue;
        }
        visited.insert(tree.board(id).clone());
        nodes_expanded += 1;

        if tree.board(id) == goal {
            let path = tree.path_to(id);
            let elapsed = start.elapsed();
            debug!(
                "astar: solved in {} moves, {} nodes expanded, {} states generated",
                path.len() - 1,
                nodes_expanded,
                tree.len()
            );
            return Ok(SearchResult::new(Strategy::AStar, path, nodes_expanded, elapsed));
        }

        let g = tree.node(id).depth + 1;
        for child in tree.expand(id, |board| !visited.contains(board)) {
            counter += 1;
            let f = g + manhattan_distance(tree.board(child), &goal_positions);
            open.push(Reverse((f, counter, child)));
        }
    }

    debug!("astar: open set exhausted after {} nodes", nodes_expanded);
    Err(SearchError::NotFound {
        strategy: Strategy::AStar,
        nodes_expanded,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config;
    use crate::search::solve_bfs;
    use crate::search::test_support::init_logging;

    #[test]
    fn manhattan_of_goal_is_zero() {
        let goal = Board::goal(3).unwrap();
        let positions = GoalPositions::new(&goal);
        assert_eq!(manhattan_distance(&goal, &positions), 0);
        assert_eq!(positions.get(0), (2, 2));
        assert_eq!(positions.get(4), (1, 0));

        let easy = Board::from_rows(&config::EASY_3X3).unwrap();
        assert_eq!(manhattan_distance(&easy, &positions), 1);
    }

    #[test]
    fn manhattan_ignores_blank() {
        let goal = Board::goal(3).unwrap();
        let positions = GoalPositions::new(&goal);
        let medium = Board::from_rows(&config::MEDIUM_3X3).unwrap();
        assert_eq!(manhattan_distance(&medium, &positions), 5);

        let hard = Board::from_rows(&config::HARD_3X3).unwrap();
        // 8:3 7:3 6:1 5:1 4:1 3:1 2:3 1:3
        assert_eq!(manhattan_distance(&hard, &positions), 16);
    }

    #[test]
    fn already_solved() {
        init_logging();
        let goal = Board::goal(3).unwrap();
        let result = solve_astar(&goal, &goal).unwrap();
        assert_eq!(result.move_count(), 0);
        assert_eq!(result.nodes_expanded, 1);
        assert_eq!(result.path().len(), 1);
    }

    #[test]
    fn medium_follows_heuristic_straight_down() {
        init_logging();
        let initial = Board::from_rows(&config::MEDIUM_3X3).unwrap();
        let goal = Board::goal(3).unwrap();
        let astar = solve_astar(&initial, &goal).unwrap();
        let bfs = solve_bfs(&initial, &goal).unwrap();
        assert_eq!(astar.move_count(), 5);
        assert_eq!(astar.move_count(), bfs.move_count());
        assert!(astar.nodes_expanded < bfs.nodes_expanded);
    }

    #[test]
    fn hard_board_is_deep() {
        init_logging();
        let initial = Board::from_rows(&config::HARD_3X3).unwrap();
        let goal = Board::goal(3).unwrap();
        let result = solve_astar(&initial, &goal).unwrap();
        assert!(result.move_count() >= 16);
        assert_eq!(result.move_count() % 2, 0);
        assert_eq!(result.path().len(), result.move_count() + 1);
    }

    #[test]
    fn custom_goal_positions() {
        let goal = Board::from_rows(&[[0u8, 1, 2], [3, 4, 5], [6, 7, 8]]).unwrap();
        let initial = goal.apply(crate::board::Move::Right).unwrap();
        let result = solve_astar(&initial, &goal).unwrap();
        assert_eq!(result.move_count(), 1);
        assert_eq!(result.final_board(), &goal);
    }
}
