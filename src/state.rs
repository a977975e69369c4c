//! Search tree storage.
//!
//! States live in a growable arena and point at their parent by index, so
//! expanding a node never copies its ancestry. Each search run owns its own
//! [`StateTree`]; nothing is shared between strategies.

use std::hash::{Hash, Hasher};

use crate::board::{Board, Move};

pub type NodeId = usize;

/// A board plus the bookkeeping needed to rebuild the path that reached it.
#[derive(Debug, Clone)]
pub struct Node {
    pub board: Board,
    pub parent: Option<NodeId>,
    /// Move that produced this node from its parent; `None` for the root.
    pub action: Option<Move>,
    pub depth: usize,
}

// Identity is the board alone. The parent chain is deliberately ignored so
// visited sets collapse different paths to the same arrangement.
impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.board == other.board
    }
}

impl Eq for Node {}

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.board.hash(state);
    }
}

/// One element of a solution path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub board: Board,
    pub action: Option<Move>,
}

#[derive(Debug, Clone)]
pub struct StateTree {
    nodes: Vec<Node>,
}

impl StateTree {
    pub const ROOT: NodeId = 0;

    pub fn new(root: Board) -> Self {
        Self {
            nodes: vec![Node {
                board: root,
                parent: None,
                action: None,
                depth: 0,
            }],
        }
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    pub fn board(&self, id: NodeId) -> &Board {
        &self.nodes[id].board
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Move generator: adds the successors of `id` (Up, Down, Left, Right)
    /// for which `keep` returns true, and returns their ids in that order.
    pub fn expand<F>(&mut self, id: NodeId, mut keep: F) -> Vec<NodeId>
    where
        F: FnMut(&Board) -> bool,
    {
        let depth = self.nodes[id].depth + 1;
        let successors: Vec<(Move, Board)> = self.nodes[id].board.successors().collect();

        let mut children = Vec::with_capacity(successors.len());
        for (action, board) in successors {
            if !keep(&board) {
                continue;
            }
            children.push(self.nodes.len());
            self.nodes.push(Node {
                board,
                parent: Some(id),
                action: Some(action),
                depth,
            });
        }
        children
    }

    /// Drops every node at index `len` and above. Depth-first searches use
    /// this to release a subtree once it has been fully explored.
    pub fn truncate(&mut self, len: usize) {
        self.nodes.truncate(len.max(1));
    }

    /// Walks parent links from `id` back to the root; returned root first.
    pub fn path_to(&self, id: NodeId) -> Vec<Step> {
        let mut path = Vec::with_capacity(self.nodes[id].depth + 1);
        let mut current = Some(id);
        while let Some(idx) = current {
            let node = &self.nodes[idx];
            path.push(Step {
                board: node.board.clone(),
                action: node.action,
            });
            current = node.parent;
        }
        path.reverse();
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge_board() -> Board {
        Board::from_rows(&[[1u8, 2, 3], [4, 5, 6], [7, 0, 8]]).unwrap()
    }

    #[test]
    fn expand_links_children_to_parent() {
        let mut tree = StateTree::new(edge_board());
        let children = tree.expand(StateTree::ROOT, |_| true);
        assert_eq!(children.len(), 3);

        let actions: Vec<Option<Move>> = children.iter().map(|&c| tree.node(c).action).collect();
        assert_eq!(actions, vec![Some(Move::Up), Some(Move::Left), Some(Move::Right)]);
        for &c in &children {
            assert_eq!(tree.node(c).parent, Some(StateTree::ROOT));
            assert_eq!(tree.node(c).depth, 1);
        }
        // Root untouched.
        assert_eq!(tree.board(StateTree::ROOT), &edge_board());
    }

    #[test]
    fn expand_respects_filter() {
        let goal = Board::goal(3).unwrap();
        let mut tree = StateTree::new(edge_board());
        let children = tree.expand(StateTree::ROOT, |b| *b != goal);
        assert_eq!(children.len(), 2);
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn path_runs_root_to_node() {
        let mut tree = StateTree::new(edge_board());
        let first = tree.expand(StateTree::ROOT, |_| true)[2];
        let second = tree.expand(first, |_| true)[0];

        let path = tree.path_to(second);
        assert_eq!(path.len(), 3);
        assert_eq!(path[0].action, None);
        assert_eq!(path[0].board, edge_board());
        assert_eq!(path[1].action, Some(Move::Right));
        assert_eq!(path[1].board, Board::goal(3).unwrap());
        assert_eq!(path[2].action, Some(Move::Up));
    }

    #[test]
    fn nodes_compare_by_board_only() {
        let mut tree = StateTree::new(edge_board());
        let right = tree.expand(StateTree::ROOT, |_| true)[2];
        let back = tree.expand(right, |_| true)[1];

        let root = tree.node(StateTree::ROOT);
        let returned = tree.node(back);
        assert_eq!(returned.action, Some(Move::Left));
        assert_eq!(returned.depth, 2);
        assert_eq!(root, returned);
    }

    #[test]
    fn truncate_keeps_root() {
        let mut tree = StateTree::new(edge_board());
        tree.expand(StateTree::ROOT, |_| true);
        tree.truncate(0);
        assert_eq!(tree.len(), 1);
    }
}
