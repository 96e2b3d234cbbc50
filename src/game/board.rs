use crate::error::GameError;

/// A board coordinate as (row, col). Row 0 is the top row.
pub type Coord = (usize, usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

/// The playing grid. Row 0 is the top, row `height - 1` is the floor.
///
/// Gravity invariant: within every column, occupied cells form one
/// contiguous block resting on the floor. The move executor violates this
/// transiently while a token is falling and restores it on landing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board. Zero width or height is a construction
    /// error; it is never reported mid-game.
    pub fn new(width: usize, height: usize) -> Result<Self, GameError> {
        if width == 0 || height == 0 {
            return Err(GameError::InvalidDimensions { width, height });
        }
        Ok(Board {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the cell at a specific position.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.width + col]
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row * self.width + col] = cell;
    }

    /// Bounds check for signed coordinates, used by directional scans that
    /// may step past an edge.
    pub fn in_bounds(&self, row: i64, col: i64) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.height && (col as usize) < self.width
    }

    /// Check if a column is full. Out-of-range columns count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= self.width {
            return true;
        }
        self.get(0, col) != Cell::Empty
    }

    /// The row a token dropped into `col` would land on: the row above the
    /// topmost occupied cell, or the floor for an empty column. None when
    /// the column is full or out of range.
    pub fn landing_row(&self, col: usize) -> Option<usize> {
        if self.is_column_full(col) {
            return None;
        }
        let mut row = 0;
        while row + 1 < self.height && self.get(row + 1, col) == Cell::Empty {
            row += 1;
        }
        Some(row)
    }

    /// Drop a token straight to its resting place, without animation.
    /// Returns the landing row, or None (no mutation) when the column is
    /// full or out of range.
    pub fn place(&mut self, col: usize, cell: Cell) -> Option<usize> {
        let row = self.landing_row(col)?;
        self.set(row, col, cell);
        Some(row)
    }

    pub(crate) fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(7, 6).unwrap();
        for row in 0..6 {
            for col in 0..7 {
                assert_eq!(board.get(row, col), Cell::Empty);
            }
        }
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(Board::new(0, 6).is_err());
        assert!(Board::new(7, 0).is_err());
        assert!(Board::new(0, 0).is_err());
    }

    #[test]
    fn test_place_lands_on_floor_then_stacks() {
        let mut board = Board::new(7, 6).unwrap();

        let row = board.place(3, Cell::Red).unwrap();
        assert_eq!(row, 5);
        assert_eq!(board.get(5, 3), Cell::Red);

        let row = board.place(3, Cell::Yellow).unwrap();
        assert_eq!(row, 4);
        assert_eq!(board.get(4, 3), Cell::Yellow);
    }

    #[test]
    fn test_full_column_returns_none() {
        let mut board = Board::new(7, 6).unwrap();
        for _ in 0..6 {
            board.place(0, Cell::Red).unwrap();
        }
        assert!(board.is_column_full(0));
        let before = board.clone();
        assert_eq!(board.place(0, Cell::Yellow), None);
        assert_eq!(board, before);
    }

    #[test]
    fn test_out_of_range_column_returns_none() {
        let mut board = Board::new(7, 6).unwrap();
        assert_eq!(board.place(7, Cell::Red), None);
        assert_eq!(board.place(100, Cell::Red), None);
    }

    #[test]
    fn test_gravity_invariant_after_drop_sequence() {
        let mut board = Board::new(7, 6).unwrap();
        let drops = [3, 3, 0, 6, 3, 2, 2, 6, 0, 3, 1, 5];
        for (i, &col) in drops.iter().enumerate() {
            let cell = if i % 2 == 0 { Cell::Red } else { Cell::Yellow };
            board.place(col, cell).unwrap();
        }

        // In every column the occupied rows are exactly the bottom k rows.
        for col in 0..7 {
            let occupied: Vec<usize> = (0..6)
                .filter(|&row| board.get(row, col) != Cell::Empty)
                .collect();
            let k = occupied.len();
            let expected: Vec<usize> = (6 - k..6).collect();
            assert_eq!(occupied, expected, "gap in column {col}");
        }
    }

    #[test]
    fn test_landing_row_tracks_stack_height() {
        let mut board = Board::new(4, 4).unwrap();
        assert_eq!(board.landing_row(1), Some(3));
        board.place(1, Cell::Red).unwrap();
        assert_eq!(board.landing_row(1), Some(2));
        board.place(1, Cell::Red).unwrap();
        board.place(1, Cell::Red).unwrap();
        assert_eq!(board.landing_row(1), Some(0));
        board.place(1, Cell::Red).unwrap();
        assert_eq!(board.landing_row(1), None);
    }
}
