use std::collections::HashSet;
use std::time::Instant;

use log::{debug, trace};

use super::{check_sizes, SearchResult, Strategy};
use crate::board::Board;
use crate::error::SearchError;
use crate::state::{NodeId, StateTree};

/// Iterative-deepening depth-first search.
///
/// Runs a depth-limited DFS for each limit in `0..=max_depth` and returns the
/// first hit, which is therefore a shortest path. Only boards on the current
/// recursion path are pruned, so a board may be explored again under a
/// different prefix or limit. `nodes_expanded` counts recursive calls across
/// all limits.
///
/// `max_depth` below the optimal move count yields [`SearchError::NotFound`].
pub fn solve_iddfs(
    initial: &Board,
    goal: &Board,
    max_depth: usize,
) -> Result<SearchResult, SearchError> {
    check_sizes(initial, goal)?;
    let start = Instant::now();

    let mut search = DepthLimited {
        goal,
        tree: StateTree::new(initial.clone()),
        on_path: HashSet::new(),
        nodes_expanded: 0,
    };

    for limit in 0..=max_depth {
        trace!("iddfs: limit {} ({} nodes so far)", limit, search.nodes_expanded);
        search.tree.truncate(1);
        search.on_path.clear();
        search.on_path.insert(initial.clone());

        if let Some(found) = search.descend(StateTree::ROOT, limit) {
            let path = search.tree.path_to(found);
            let elapsed = start.elapsed();
            debug!(
                "iddfs: solved in {} moves at limit {}, {} nodes expanded",
                path.len() - 1,
                limit,
                search.nodes_expanded
            );
            return Ok(SearchResult::new(
                Strategy::Iddfs,
                path,
                search.nodes_expanded,
                elapsed,
            ));
        }
    }

    debug!(
        "iddfs: no solution within depth {} after {} nodes",
        max_depth, search.nodes_expanded
    );
    Err(SearchError::NotFound {
        strategy: Strategy::Iddfs,
        nodes_expanded: search.nodes_expanded,
    })
}

struct DepthLimited<'a> {
    goal: &'a Board,
    /// Used as a stack: a subtree is truncated away once it fails.
    tree: StateTree,
    on_path: HashSet<Board>,
    nodes_expanded: usize,
}

impl DepthLimited<'_> {
    fn descend(&mut self, id: NodeId, remaining: usize) -> Option<NodeId> {
        self.nodes_expanded += 1;

        if self.tree.board(id) == self.goal {
            return Some(id);
        }
        if remaining == 0 {
            return None;
        }

        let mark = self.tree.len();
        let on_path = &self.on_path;
        let children = self.tree.expand(id, |board| !on_path.contains(board));

        for child in children {
            let board = self.tree.board(child).clone();
            self.on_path.insert(board.clone());
            if let Some(found) = self.descend(child, remaining - 1) {
                return Some(found);
            }
            self.on_path.remove(&board);
        }

        self.tree.truncate(mark);
        None
    }
}
