use std::collections::{HashSet, VecDeque};
use std::time::Instant;

use log::debug;

use super::{check_sizes, SearchResult, Strategy};
use crate::board::Board;
use crate::error::SearchError;
use crate::state::StateTree;

/// Breadth-first search. Returns a shortest path since every move costs one.
///
/// A board is marked visited when it is first enqueued, so it is expanded at
/// most once. `nodes_expanded` counts dequeues, including the goal's.
pub fn solve_bfs(initial: &Board, goal: &Board) -> Result<SearchResult, SearchError> {
    check_sizes(initial, goal)?;
    let start = Instant::now();

    let mut tree = StateTree::new(initial.clone());
    let mut frontier = VecDeque::from([StateTree::ROOT]);
    let mut visited: HashSet<Board> = HashSet::from([initial.clone()]);
    let mut nodes_expanded = 0;

    while let Some(id) = frontier.pop_front() {
        nodes_expanded += 1;

        if tree.board(id) == goal {
            let path = tree.path_to(id);
            let elapsed = start.elapsed();
            debug!(
                "bfs: solved in {} moves, {} nodes expanded",
                path.len() - 1,
                nodes_expanded
            );
            return Ok(SearchResult::new(Strategy::Bfs, path, nodes_expanded, elapsed));
        }

        let children = tree.expand(id, |board| visited.insert(board.clone()));
        frontier.extend(children);
    }

    debug!("bfs: frontier exhausted after {} nodes", nodes_expanded);
    Err(SearchError::NotFound {
        strategy: Strategy::Bfs,
        nodes_expanded,
    })
}
