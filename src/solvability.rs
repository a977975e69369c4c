//! Inversion-parity test for reachability between boards.
//!
//! This is a diagnostic. The scramble generator guarantees solvability by
//! walking from the goal, and the solvers never consult it.

use crate::board::Board;

/// Pairs of tiles out of ascending order, reading row-major with the blank removed.
pub fn inversions(board: &Board) -> usize {
    let tiles = board.tiles();
    tiles
        .iter()
        .enumerate()
        .filter(|&(_, &val)| val != 0)
        .map(|(i, &val)| {
            tiles[i + 1..]
                .iter()
                .filter(|&&next| next != 0 && next < val)
                .count()
        })
        .sum()
}

/// Invariant preserved by every legal move.
///
/// Odd sizes: inversion parity. Even sizes: parity of inversions plus the
/// blank's row counted from the bottom, since a vertical move there shifts a
/// tile past an odd number of others.
pub fn parity_class(board: &Board) -> usize {
    let inversions = inversions(board);
    if board.size() % 2 == 1 {
        inversions % 2
    } else {
        let (row, _) = board.blank();
        let row_from_bottom = board.size() - 1 - row;
        (inversions + row_from_bottom) % 2
    }
}

/// Whether `to` can be reached from `from` by sliding the blank.
pub fn is_reachable(from: &Board, to: &Board) -> bool {
    from.size() == to.size() && parity_class(from) == parity_class(to)
}

/// Whether the board can reach the canonical goal of its size.
pub fn is_solvable(board: &Board) -> bool {
    Board::goal(board.size())
        .map(|goal| is_reachable(board, &goal))
        .unwrap_or(false)
}
