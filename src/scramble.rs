//! Seeded scramble generation.
//!
//! Boards are produced by walking the blank away from the goal, so every
//! scramble is solvable by construction.

use std::collections::HashSet;

use log::debug;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

use crate::board::{Board, Move};
use crate::error::ScrambleError;

/// Deterministic generator for a seed.
pub fn rng_for_seed(seed: u64) -> Pcg64 {
    Pcg64::seed_from_u64(seed)
}

/// Random walk of `move_count` blank moves starting from `goal`.
///
/// Each step drops the reversal of the previous move and, when any remain,
/// moves that revisit a board already seen on this walk, then picks uniformly
/// among what is left. The result never equals `goal`.
pub fn scramble<R>(goal: &Board, move_count: usize, rng: &mut R) -> Result<Board, ScrambleError>
where
    R: Rng + ?Sized,
{
    if move_count == 0 {
        return Err(ScrambleError::InvalidMoveCount);
    }

    let mut board = goal.clone();
    let mut last: Option<Move> = None;
    let mut seen: HashSet<Board> = HashSet::from([goal.clone()]);

    for _ in 0..move_count {
        let mut candidates: Vec<(Move, Board)> = board.successors().collect();

        if let Some(prev) = last {
            if candidates.len() > 1 {
                candidates.retain(|(mv, _)| *mv != prev.opposite());
            }
        }

        if candidates.iter().any(|(_, b)| !seen.contains(b)) {
            candidates.retain(|(_, b)| !seen.contains(b));
        }

        let Some((mv, next)) = candidates.choose(rng).cloned() else {
            break;
        };
        seen.insert(next.clone());
        board = next;
        last = Some(mv);
    }

    if board == *goal {
        let options: Vec<Board> = board.successors().map(|(_, b)| b).collect();
        if let Some(next) = options.choose(rng) {
            board = next.clone();
        }
    }

    debug!("scrambled {}x{} board with {} moves", goal.size(), goal.size(), move_count);
    Ok(board)
}

/// Solvable scramble of the canonical `size`×`size` goal, fixed by `seed`.
pub fn generate_solvable_board(
    size: usize,
    move_count: usize,
    seed: u64,
) -> Result<Board, ScrambleError> {
    let goal = Board::goal(size)?;
    let mut rng = rng_for_seed(seed);
    scramble(&goal, move_count, &mut rng)
}
