use super::player::Slot;

/// Smallest board edge on which four-in-a-row is possible.
pub const MIN_DIMENSION: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Taken(Slot),
}

/// Requested board smaller than the minimum playable size.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("board must be at least 4x4, got {width}x{height}")]
pub struct InvalidDimension {
    pub width: usize,
    pub height: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropError {
    ColumnFull,
    InvalidColumn,
}

/// Grid state and column-drop mechanics. Row 0 is the top, row
/// `height - 1` the bottom; cells are stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board of the given size
    pub fn new(width: usize, height: usize) -> Result<Self, InvalidDimension> {
        if width < MIN_DIMENSION || height < MIN_DIMENSION {
            return Err(InvalidDimension { width, height });
        }
        Ok(Board {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
        })
    }

    /// Fresh empty board with the same dimensions
    pub fn cleared(&self) -> Board {
        Board {
            width: self.width,
            height: self.height,
            cells: vec![Cell::Empty; self.cells.len()],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the cell at a specific position
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.width + col]
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= self.width {
            return true;
        }
        self.get(0, col) != Cell::Empty
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, slot: Slot) -> Result<usize, DropError> {
        if col >= self.width {
            return Err(DropError::InvalidColumn);
        }

        if self.is_column_full(col) {
            return Err(DropError::ColumnFull);
        }

        // Find the lowest empty row in this column
        for row in (0..self.height).rev() {
            if self.get(row, col) == Cell::Empty {
                self.cells[row * self.width + col] = slot.to_cell();
                return Ok(row);
            }
        }

        unreachable!("Column should not be full if is_column_full returned false");
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..self.width).all(|col| self.is_column_full(col))
    }

    /// Check if the last move at (row, col) resulted in a win
    pub fn check_win(&self, row: usize, col: usize) -> bool {
        let cell = self.get(row, col);
        if cell == Cell::Empty {
            return false;
        }

        self.check_horizontal(row, col, cell)
            || self.check_vertical(row, col, cell)
            || self.check_diagonal_up(row, col, cell)
            || self.check_diagonal_down(row, col, cell)
    }

    /// Check horizontal win (left-right through the position)
    fn check_horizontal(&self, row: usize, col: usize, cell: Cell) -> bool {
        let mut count = 1; // Count the current piece

        // Check left
        let mut c = col as isize - 1;
        while c >= 0 && self.get(row, c as usize) == cell {
            count += 1;
            c -= 1;
        }

        // Check right
        let mut c = col + 1;
        while c < self.width && self.get(row, c) == cell {
            count += 1;
            c += 1;
        }

        count >= 4
    }

    /// Check vertical win (down from the position)
    fn check_vertical(&self, row: usize, col: usize, cell: Cell) -> bool {
        let mut count = 1;

        // Only need to check downward (pieces fall down)
        let mut r = row + 1;
        while r < self.height && self.get(r, col) == cell {
            count += 1;
            r += 1;
        }

        count >= 4
    }

    /// Check diagonal win (bottom-left to top-right, /)
    fn check_diagonal_up(&self, row: usize, col: usize, cell: Cell) -> bool {
        let mut count = 1;

        // Check down-left
        let mut r = row as isize + 1;
        let mut c = col as isize - 1;
        while r < self.height as isize && c >= 0 && self.get(r as usize, c as usize) == cell {
            count += 1;
            r += 1;
            c -= 1;
        }

        // Check up-right
        let mut r = row as isize - 1;
        let mut c = col as isize + 1;
        while r >= 0 && c < self.width as isize && self.get(r as usize, c as usize) == cell {
            count += 1;
            r -= 1;
            c += 1;
        }

        count >= 4
    }

    /// Check diagonal win (top-left to bottom-right, \)
    fn check_diagonal_down(&self, row: usize, col: usize, cell: Cell) -> bool {
        let mut count = 1;

        // Check up-left
        let mut r = row as isize - 1;
        let mut c = col as isize - 1;
        while r >= 0 && c >= 0 && self.get(r as usize, c as usize) == cell {
            count += 1;
            r -= 1;
            c -= 1;
        }

        // Check down-right
        let mut r = row as isize + 1;
        let mut c = col as isize + 1;
        while r < self.height as isize
            && c < self.width as isize
            && self.get(r as usize, c as usize) == cell
        {
            count += 1;
            r += 1;
            c += 1;
        }

        count >= 4
    }
}
