use super::player::Seat;

pub const DEFAULT_HEIGHT: usize = 6;
pub const DEFAULT_WIDTH: usize = 7;

/// Number of pieces in a winning line.
pub const LINE_LENGTH: usize = 4;

/// Probe directions as (row step, column step): right, down, down-right, down-left.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Occupied(Seat),
}

/// A `height` x `width` grid. Row 0 is the top, row `height - 1` the bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    height: usize,
    width: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board. Boards smaller than 4 in either dimension are
    /// allowed; they just never produce a line.
    pub fn new(height: usize, width: usize) -> Self {
        Board {
            height,
            width,
            cells: vec![Cell::Empty; height * width],
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the cell at a specific position
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[self.index(row, col)]
    }

    /// Lowest empty row in `col`, or `None` if the column is full or out of range.
    pub fn find_landing_row(&self, col: usize) -> Option<usize> {
        if col >= self.width {
            return None;
        }
        (0..self.height)
            .rev()
            .find(|&row| self.get(row, col) == Cell::Empty)
    }

    pub fn is_column_full(&self, col: usize) -> bool {
        self.find_landing_row(col).is_none()
    }

    /// Mark a cell for `seat`. The cell must be empty and in bounds; callers
    /// get `row` from [`Board::find_landing_row`].
    pub fn occupy(&mut self, row: usize, col: usize, seat: Seat) {
        let idx = self.index(row, col);
        debug_assert_eq!(self.cells[idx], Cell::Empty, "cell ({row}, {col}) already occupied");
        self.cells[idx] = Cell::Occupied(seat);
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Cell::Empty)
    }

    /// Whether `seat` owns any four-in-a-row anywhere on the board.
    pub fn has_line(&self, seat: Seat) -> bool {
        self.find_line(seat).is_some()
    }

    /// First line of four owned by `seat`, scanning every cell as a start and
    /// probing the four directions from it. Stops at the first hit.
    pub fn find_line(&self, seat: Seat) -> Option<[(usize, usize); LINE_LENGTH]> {
        let target = Cell::Occupied(seat);
        for row in 0..self.height {
            for col in 0..self.width {
                for &(dr, dc) in &DIRECTIONS {
                    if let Some(line) = self.probe(row, col, dr, dc) {
                        if line.iter().all(|&(r, c)| self.get(r, c) == target) {
                            return Some(line);
                        }
                    }
                }
            }
        }
        None
    }

    /// The four coordinates starting at (row, col) stepping by (dr, dc), or
    /// `None` if any of them falls off the board.
    fn probe(
        &self,
        row: usize,
        col: usize,
        dr: isize,
        dc: isize,
    ) -> Option<[(usize, usize); LINE_LENGTH]> {
        let mut line = [(0, 0); LINE_LENGTH];
        for (step, slot) in line.iter_mut().enumerate() {
            let r = row.checked_add_signed(dr * step as isize)?;
            let c = col.checked_add_signed(dc * step as isize)?;
            if r >= self.height || c >= self.width {
                return None;
            }
            *slot = (r, c);
        }
        Some(line)
    }

    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.height && col < self.width,
            "cell ({row}, {col}) outside {}x{} board",
            self.height,
            self.width
        );
        row * self.width + col
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_HEIGHT, DEFAULT_WIDTH)
    }
}
