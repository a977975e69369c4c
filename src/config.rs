//! Scramble presets and fixed boards.

use std::fmt;

use clap::ValueEnum;

/// Walk lengths of the interactive game's shuffle button. Too long for
/// BFS and IDDFS on 4×4; the driver uses [`DEFAULT_DIFFICULTY`] instead.
pub const GUI_SHUFFLE_3X3: usize = 30;
pub const GUI_SHUFFLE_4X4: usize = 60;

/// Preset used when neither a difficulty nor an explicit length is given.
pub const DEFAULT_DIFFICULTY: Difficulty = Difficulty::Medium;

/// Lower bound on the iterative-deepening depth the driver hands out.
pub const MIN_IDDFS_DEPTH: usize = 20;

pub const EASY_3X3: [[u8; 3]; 3] = [[1, 2, 3], [4, 5, 6], [7, 0, 8]];
pub const MEDIUM_3X3: [[u8; 3]; 3] = [[2, 0, 3], [1, 5, 6], [4, 7, 8]];
pub const HARD_3X3: [[u8; 3]; 3] = [[8, 7, 6], [5, 4, 3], [2, 1, 0]];
/// Two tiles swapped: not reachable from the standard goal.
pub const EXPERT_4X4: [[u8; 4]; 4] = [[1, 2, 3, 4], [5, 6, 7, 8], [9, 10, 11, 12], [13, 15, 14, 0]];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Random-walk length for this preset on an N×N board.
    ///
    /// Larger boards stay short so breadth-first search still finishes.
    pub fn shuffle_moves(self, size: usize) -> usize {
        match (size, self) {
            (3, Difficulty::Easy) => 5,
            (3, Difficulty::Medium) => 15,
            (3, Difficulty::Hard) => 30,
            (_, Difficulty::Easy) => 4,
            (_, Difficulty::Medium) => 8,
            (_, Difficulty::Hard) => 12,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        };
        write!(f, "{}", s)
    }
}

/// Shuffle length for a size, falling back to [`DEFAULT_DIFFICULTY`].
pub fn shuffle_moves(size: usize, difficulty: Option<Difficulty>) -> usize {
    difficulty.unwrap_or(DEFAULT_DIFFICULTY).shuffle_moves(size)
}

/// Depth bound for iterative deepening after a scramble of `shuffle_moves`.
///
/// A walk of k moves has an optimal solution of at most k, so twice that
/// never cuts a solution off.
pub fn iddfs_depth(shuffle_moves: usize) -> usize {
    (shuffle_moves * 2).max(MIN_IDDFS_DEPTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_by_size() {
        assert_eq!(Difficulty::Easy.shuffle_moves(3), 5);
        assert_eq!(Difficulty::Hard.shuffle_moves(3), 30);
        assert_eq!(Difficulty::Easy.shuffle_moves(4), 4);
        assert_eq!(Difficulty::Medium.shuffle_moves(4), 8);
        assert_eq!(Difficulty::Hard.shuffle_moves(4), 12);
        assert_eq!(Difficulty::Hard.shuffle_moves(5), 12);
    }

    #[test]
    fn defaults_to_medium_without_preset() {
        assert_eq!(shuffle_moves(3, None), 15);
        assert_eq!(shuffle_moves(4, None), 8);
        assert_eq!(shuffle_moves(4, Some(Difficulty::Easy)), 4);
        assert_eq!(iddfs_depth(shuffle_moves(4, None)), MIN_IDDFS_DEPTH);
    }

    #[test]
    fn depth_bound_has_floor() {
        assert_eq!(iddfs_depth(4), 20);
        assert_eq!(iddfs_depth(12), 24);
    }
}
