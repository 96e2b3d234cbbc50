//! Win detection: scan the four axes through a just-landed token and report
//! the full contiguous run when it reaches four.

use super::board::{Board, Cell, Coord};
use super::player::Player;

const MIN_RUN: usize = 4;

/// The contiguous run of same-owner cells that won the game, ordered along
/// the positive direction of its axis. Length is the full run, which can
/// exceed four.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinLine {
    cells: Vec<Coord>,
}

impl WinLine {
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.contains(&coord)
    }
}

/// Check whether the token just landed at (row, col) completes a line for
/// `player`. Axes are evaluated in a fixed order: vertical, horizontal,
/// diagonal down-right, diagonal down-left; the first winning axis is
/// reported.
pub fn check_win(board: &Board, row: usize, col: usize, player: Player) -> Option<WinLine> {
    let cell = player.to_cell();
    vertical_run(board, row, col, cell)
        .or_else(|| axis_run(board, row, col, cell, 0, 1))
        .or_else(|| axis_run(board, row, col, cell, 1, 1))
        .or_else(|| axis_run(board, row, col, cell, 1, -1))
}

/// Vertical is one-directional: gravity guarantees nothing of ours sits
/// above a token the instant it lands, so scanning downward from the
/// landing cell covers the whole run. Bounded strictly by board height.
fn vertical_run(board: &Board, row: usize, col: usize, cell: Cell) -> Option<WinLine> {
    let mut cells = Vec::new();
    let mut r = row;
    while r < board.height() && board.get(r, col) == cell {
        cells.push((r, col));
        r += 1;
    }
    (cells.len() >= MIN_RUN).then(|| WinLine { cells })
}

/// Horizontal and diagonal runs have no gravity asymmetry: walk backward to
/// the run's boundary, then count forward along (d_row, d_col).
fn axis_run(
    board: &Board,
    row: usize,
    col: usize,
    cell: Cell,
    d_row: i64,
    d_col: i64,
) -> Option<WinLine> {
    let (start_row, start_col) = find_boundary(board, row, col, cell, d_row, d_col);
    let cells = count_run(board, start_row, start_col, cell, d_row, d_col);
    (cells.len() >= MIN_RUN).then(|| WinLine { cells })
}

/// Walk opposite to (d_row, d_col) from the landing cell until the next
/// step would leave the board or hit a cell not owned by `cell`.
fn find_boundary(
    board: &Board,
    row: usize,
    col: usize,
    cell: Cell,
    d_row: i64,
    d_col: i64,
) -> (usize, usize) {
    let (mut r, mut c) = (row as i64, col as i64);
    loop {
        let (pr, pc) = (r - d_row, c - d_col);
        if !board.in_bounds(pr, pc) || board.get(pr as usize, pc as usize) != cell {
            break;
        }
        r = pr;
        c = pc;
    }
    (r as usize, c as usize)
}

/// Collect the contiguous run owned by `cell` starting at the boundary and
/// stepping along (d_row, d_col), stopping at the first mismatch or edge.
fn count_run(
    board: &Board,
    start_row: usize,
    start_col: usize,
    cell: Cell,
    d_row: i64,
    d_col: i64,
) -> Vec<Coord> {
    let mut cells = Vec::new();
    let (mut r, mut c) = (start_row as i64, start_col as i64);
    while board.in_bounds(r, c) && board.get(r as usize, c as usize) == cell {
        cells.push((r as usize, c as usize));
        r += d_row;
        c += d_col;
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(width: usize, height: usize) -> Board {
        Board::new(width, height).unwrap()
    }

    #[test]
    fn test_vertical_win_reports_bottom_four() {
        let mut b = board(7, 6);
        for _ in 0..4 {
            b.place(3, Cell::Red);
        }
        let line = check_win(&b, 2, 3, Player::Red).expect("vertical win");
        assert_eq!(line.cells(), &[(2, 3), (3, 3), (4, 3), (5, 3)]);
    }

    #[test]
    fn test_vertical_win_on_tall_narrow_board() {
        // Height well above width: the vertical scan must be bounded by
        // height. A run whose rows all sit at or below row `width` would be
        // missed entirely under a width bound.
        let mut b = board(4, 10);
        for _ in 0..2 {
            b.place(2, Cell::Yellow); // rows 9, 8
        }
        for _ in 0..4 {
            b.place(2, Cell::Red); // rows 7, 6, 5, 4
        }
        let line = check_win(&b, 4, 2, Player::Red).expect("vertical win on tall board");
        assert_eq!(line.cells(), &[(4, 2), (5, 2), (6, 2), (7, 2)]);
    }

    #[test]
    fn test_horizontal_win_reports_floor_cells_in_order() {
        let mut b = board(7, 6);
        for col in 0..4 {
            b.place(col, Cell::Red);
        }
        // Landing cell in the middle of the run; the reported line still
        // starts at the run's left boundary.
        let line = check_win(&b, 5, 2, Player::Red).expect("horizontal win");
        assert_eq!(line.cells(), &[(5, 0), (5, 1), (5, 2), (5, 3)]);
    }

    #[test]
    fn test_horizontal_win_at_right_edge() {
        let mut b = board(7, 6);
        for col in 3..7 {
            b.place(col, Cell::Yellow);
        }
        let line = check_win(&b, 5, 6, Player::Yellow).expect("edge win");
        assert_eq!(line.cells(), &[(5, 3), (5, 4), (5, 5), (5, 6)]);
    }

    #[test]
    fn test_five_in_a_row_reports_full_run() {
        let mut b = board(7, 6);
        for col in [0, 1, 3, 4].iter() {
            b.place(*col, Cell::Red);
        }
        b.place(2, Cell::Red);
        let line = check_win(&b, 5, 2, Player::Red).expect("five-run win");
        assert_eq!(line.cells().len(), 5);
        assert_eq!(
            line.cells(),
            &[(5, 0), (5, 1), (5, 2), (5, 3), (5, 4)]
        );
    }

    #[test]
    fn test_diagonal_down_right_win() {
        let mut b = board(7, 6);
        // Red on the \ diagonal from (2,0) to (5,3).
        b.place(0, Cell::Yellow);
        b.place(0, Cell::Yellow);
        b.place(0, Cell::Yellow);
        b.place(0, Cell::Red); // (2, 0)
        b.place(1, Cell::Yellow);
        b.place(1, Cell::Yellow);
        b.place(1, Cell::Red); // (3, 1)
        b.place(2, Cell::Yellow);
        b.place(2, Cell::Red); // (4, 2)
        b.place(3, Cell::Red); // (5, 3)
        let line = check_win(&b, 2, 0, Player::Red).expect("diagonal \\ win");
        assert_eq!(line.cells(), &[(2, 0), (3, 1), (4, 2), (5, 3)]);
    }

    #[test]
    fn test_diagonal_down_left_win() {
        let mut b = board(7, 6);
        // Red on the / diagonal from (2,3) down-left to (5,0).
        b.place(0, Cell::Red); // (5, 0)
        b.place(1, Cell::Yellow);
        b.place(1, Cell::Red); // (4, 1)
        b.place(2, Cell::Yellow);
        b.place(2, Cell::Yellow);
        b.place(2, Cell::Red); // (3, 2)
        b.place(3, Cell::Yellow);
        b.place(3, Cell::Yellow);
        b.place(3, Cell::Yellow);
        b.place(3, Cell::Red); // (2, 3)
        let line = check_win(&b, 2, 3, Player::Red).expect("diagonal / win");
        assert_eq!(line.cells(), &[(2, 3), (3, 2), (4, 1), (5, 0)]);
    }

    #[test]
    fn test_three_in_a_row_is_not_a_win() {
        let mut b = board(7, 6);
        for col in 0..3 {
            b.place(col, Cell::Red);
        }
        assert!(check_win(&b, 5, 1, Player::Red).is_none());
    }

    #[test]
    fn test_mixed_owners_break_the_run() {
        let mut b = board(7, 6);
        b.place(0, Cell::Red);
        b.place(1, Cell::Red);
        b.place(2, Cell::Yellow);
        b.place(3, Cell::Red);
        b.place(4, Cell::Red);
        assert!(check_win(&b, 5, 4, Player::Red).is_none());
    }

    #[test]
    fn test_win_line_contains() {
        let mut b = board(7, 6);
        for col in 0..4 {
            b.place(col, Cell::Red);
        }
        let line = check_win(&b, 5, 0, Player::Red).unwrap();
        assert!(line.contains((5, 1)));
        assert!(!line.contains((4, 1)));
    }
}
