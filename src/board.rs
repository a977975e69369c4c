use std::fmt;

use crate::error::BoardError;

pub const MIN_SIZE: usize = 2;
pub const MAX_SIZE: usize = 15;

/// Direction the blank travels. Generation order is [`Move::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// Successor ordering; BFS and DFS tie-breaking depend on it.
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

    /// (row, col) offset of the blank.
    pub fn as_offset(&self) -> (isize, isize) {
        match self {
            Move::Up => (-1, 0),
            Move::Down => (1, 0),
            Move::Left => (0, -1),
            Move::Right => (0, 1),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            Move::Up => "Move blank up",
            Move::Down => "Move blank down",
            Move::Left => "Move blank left",
            Move::Right => "Move blank right",
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Move::Up => "UP",
            Move::Down => "DOWN",
            Move::Left => "LEFT",
            Move::Right => "RIGHT",
        };
        write!(f, "{}", s)
    }
}

/// An N×N arrangement of tiles `0..N²`, 0 being the blank.
///
/// Immutable once built: every constructor validates, and moves produce a new
/// board. Equality and hashing look at tile contents only.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    tiles: Box<[u8]>,
    blank: usize,
}

impl Board {
    /// Builds a board from rows, checking shape and that each tile appears once.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, BoardError> {
        let size = rows.len();
        if size == 0 {
            return Err(BoardError::Empty);
        }

        let mut tiles = Vec::with_capacity(size * size);
        for (row, cells) in rows.iter().enumerate() {
            let cells = cells.as_ref();
            if cells.len() != size {
                return Err(BoardError::NotSquare {
                    row,
                    len: cells.len(),
                    size,
                });
            }
            tiles.extend_from_slice(cells);
        }

        Self::from_tiles(size, tiles)
    }

    /// Builds a board from row-major tiles.
    pub fn from_tiles(size: usize, tiles: Vec<u8>) -> Result<Self, BoardError> {
        check_size(size)?;
        if tiles.len() != size * size {
            return Err(BoardError::WrongTileCount {
                expected: size * size,
                found: tiles.len(),
            });
        }

        let max = (size * size - 1) as u8;
        let mut seen = vec![false; size * size];
        for &tile in &tiles {
            if tile > max {
                return Err(BoardError::TileOutOfRange { tile, max });
            }
            if std::mem::replace(&mut seen[tile as usize], true) {
                return Err(BoardError::DuplicateTile(tile));
            }
        }

        // Range and uniqueness over N² cells leave exactly one blank.
        let blank = tiles.iter().position(|&t| t == 0).unwrap_or_default();

        Ok(Self {
            size,
            tiles: tiles.into_boxed_slice(),
            blank,
        })
    }

    /// The canonical goal: `1..N²` row-major with the blank in the last cell.
    pub fn goal(size: usize) -> Result<Self, BoardError> {
        check_size(size)?;
        let cells = size * size;
        let tiles = (1..cells as u8).chain(std::iter::once(0)).collect();
        Self::from_tiles(size, tiles)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Row-major tiles.
    pub fn tiles(&self) -> &[u8] {
        &self.tiles
    }

    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.tiles[row * self.size + col]
    }

    /// (row, col) of the blank.
    pub fn blank(&self) -> (usize, usize) {
        (self.blank / self.size, self.blank % self.size)
    }

    /// Copy of the grid as rows, for presentation layers.
    pub fn rows(&self) -> Vec<Vec<u8>> {
        self.tiles.chunks(self.size).map(<[u8]>::to_vec).collect()
    }

    pub fn can_move(&self, movement: Move) -> bool {
        self.target(movement).is_some()
    }

    /// Slides the blank one cell, or `None` if it would leave the grid.
    pub fn apply(&self, movement: Move) -> Option<Board> {
        let target = self.target(movement)?;
        let mut tiles = self.tiles.clone();
        tiles.swap(self.blank, target);
        Some(Board {
            size: self.size,
            tiles,
            blank: target,
        })
    }

    /// Legal moves in generation order, paired with the board each produces.
    pub fn successors(&self) -> impl Iterator<Item = (Move, Board)> + '_ {
        Move::ALL
            .into_iter()
            .filter_map(move |mv| self.apply(mv).map(|board| (mv, board)))
    }

    fn target(&self, movement: Move) -> Option<usize> {
        let (dr, dc) = movement.as_offset();
        let (row, col) = self.blank();

        let new_row = row as isize + dr;
        let new_col = col as isize + dc;
        let size = self.size as isize;

        if new_row >= 0 && new_row < size && new_col >= 0 && new_col < size {
            Some(new_row as usize * self.size + new_col as usize)
        } else {
            None
        }
    }
}

/// Applies `moves` in order, failing on the first one that leaves the grid.
pub fn replay<I>(initial: &Board, moves: I) -> Result<Board, BoardError>
where
    I: IntoIterator<Item = Move>,
{
    let mut board = initial.clone();
    for (step, mv) in moves.into_iter().enumerate() {
        board = board
            .apply(mv)
            .ok_or(BoardError::IllegalMove { mv, step })?;
    }
    Ok(board)
}

fn check_size(size: usize) -> Result<(), BoardError> {
    if (MIN_SIZE..=MAX_SIZE).contains(&size) {
        Ok(())
    } else {
        Err(BoardError::UnsupportedSize(size))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = (self.size * self.size - 1).to_string().len();
        for row in self.tiles.chunks(self.size) {
            for &val in row {
                write!(f, "{:>width$} ", val, width = width)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn goal_places_blank_last() {
        let goal = Board::goal(3).unwrap();
        assert_eq!(goal.rows(), vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 0]]);
        assert_eq!(goal.blank(), (2, 2));

        let goal4 = Board::goal(4).unwrap();
        assert_eq!(goal4.tiles()[14], 15);
        assert_eq!(goal4.blank(), (3, 3));
    }

    #[test]
    fn rejects_malformed_grids() {
        let empty: [[u8; 0]; 0] = [];
        assert_eq!(Board::from_rows(&empty), Err(BoardError::Empty));
        assert_eq!(
            Board::from_rows(&[vec![1u8, 2, 3], vec![4, 5], vec![7, 8, 0]]),
            Err(BoardError::NotSquare { row: 1, len: 2, size: 3 })
        );
        assert_eq!(
            Board::from_rows(&[[1u8, 2, 3], [4, 5, 6], [7, 9, 0]]),
            Err(BoardError::TileOutOfRange { tile: 9, max: 8 })
        );
        assert_eq!(
            Board::from_rows(&[[1u8, 2, 3], [4, 5, 6], [7, 7, 0]]),
            Err(BoardError::DuplicateTile(7))
        );
        assert_eq!(Board::from_rows(&[[0u8]]), Err(BoardError::UnsupportedSize(1)));
        assert_eq!(
            Board::from_tiles(3, (0..10).collect()),
            Err(BoardError::WrongTileCount { expected: 9, found: 10 })
        );
        assert_eq!(
            Board::from_tiles(3, vec![1, 2, 0]),
            Err(BoardError::WrongTileCount { expected: 9, found: 3 })
        );
        assert_eq!(Board::goal(16), Err(BoardError::UnsupportedSize(16)));
    }

    #[test]
    fn corner_edge_and_interior_successor_counts() {
        let corner = Board::goal(3).unwrap();
        assert_eq!(corner.successors().count(), 2);

        let edge = Board::from_rows(&[[1u8, 2, 3], [4, 5, 6], [7, 0, 8]]).unwrap();
        assert_eq!(edge.successors().count(), 3);

        let interior = Board::from_rows(&[[1u8, 2, 3], [4, 0, 6], [7, 5, 8]]).unwrap();
        let moves: Vec<Move> = interior.successors().map(|(mv, _)| mv).collect();
        assert_eq!(moves, Move::ALL.to_vec());
    }

    #[test]
    fn apply_swaps_blank_with_neighbour() {
        let board = Board::from_rows(&[[1u8, 2, 3], [4, 5, 6], [7, 0, 8]]).unwrap();
        let moved = board.apply(Move::Right).unwrap();
        assert_eq!(moved, Board::goal(3).unwrap());
        assert_eq!(moved.blank(), (2, 2));
        assert!(moved.apply(Move::Down).is_none());
        // The source board is untouched.
        assert_eq!(board.get(2, 1), 0);
    }

    #[test]
    fn replay_stops_on_illegal_move() {
        let goal = Board::goal(3).unwrap();
        let err = replay(&goal, [Move::Up, Move::Down, Move::Down]).unwrap_err();
        assert_eq!(err, BoardError::IllegalMove { mv: Move::Down, step: 2 });

        let back = replay(&goal, [Move::Up, Move::Left, Move::Down, Move::Right]).unwrap();
        assert_ne!(back, goal);
    }

    #[test]
    fn opposite_is_an_involution() {
        for mv in Move::ALL {
            assert_eq!(mv.opposite().opposite(), mv);
            assert_ne!(mv.opposite(), mv);
        }
    }

    #[test]
    fn display_aligns_two_digit_tiles() {
        let text = Board::goal(4).unwrap().to_string();
        assert!(text.starts_with(" 1  2  3  4 \n"));
        assert!(text.ends_with("13 14 15  0 \n"));
    }
}
