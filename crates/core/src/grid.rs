//! Grid module - the playfield matrix.
//!
//! A `cols x rows` matrix of [`Cell`]s in row-major flat storage, where
//! `rows` includes the hidden buffer above the visible area. Coordinates are
//! `(col, row)` with row 0 at the top; negative or too-large coordinates are
//! simply out of bounds.
//!
//! The grid knows nothing about the active piece. Collision checks only ever
//! consult the `locked` flag, so the falling piece's `filled` overlay never
//! blocks its own movement.

use arrayvec::ArrayVec;

use gridfall_types::{Cell, Rgb};

/// The playfield grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    cols: u8,
    rows: u8,
    /// Flat cells, row-major (`row * cols + col`).
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an empty grid.
    pub fn new(cols: u8, rows: u8) -> Self {
        Self {
            cols,
            rows,
            cells: vec![Cell::EMPTY; cols as usize * rows as usize],
        }
    }

    /// Flat index for (col, row), or `None` when out of bounds.
    #[inline(always)]
    fn index(&self, col: i8, row: i8) -> Option<usize> {
        if col < 0 || col >= self.cols as i8 || row < 0 || row >= self.rows as i8 {
            return None;
        }
        Some(row as usize * self.cols as usize + col as usize)
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    /// Whether (col, row) lies inside the grid (hidden buffer included).
    pub fn in_bounds(&self, col: i8, row: i8) -> bool {
        self.index(col, row).is_some()
    }

    /// Cell at (col, row), or `None` when out of bounds.
    pub fn cell(&self, col: i8, row: i8) -> Option<Cell> {
        self.index(col, row).map(|idx| self.cells[idx])
    }

    /// Whether the cell at (col, row) is permanently resting.
    /// Out-of-bounds coordinates are not locked.
    pub fn is_locked(&self, col: i8, row: i8) -> bool {
        matches!(self.cell(col, row), Some(cell) if cell.locked)
    }

    /// Mark a cell as part of the falling overlay.
    pub fn fill_cell(&mut self, col: i8, row: i8, color: Rgb) {
        if let Some(idx) = self.index(col, row) {
            self.cells[idx] = Cell {
                filled: true,
                locked: false,
                color,
            };
        }
    }

    /// Clear a cell back to empty.
    pub fn clear_cell(&mut self, col: i8, row: i8) {
        if let Some(idx) = self.index(col, row) {
            self.cells[idx] = Cell::EMPTY;
        }
    }

    /// Promote a cell to permanently resting; the fill flag and color stay.
    pub fn lock_cell(&mut self, col: i8, row: i8) {
        if let Some(idx) = self.index(col, row) {
            self.cells[idx].filled = true;
            self.cells[idx].locked = true;
        }
    }

    fn row_range(&self, row: u8) -> std::ops::Range<usize> {
        let start = row as usize * self.cols as usize;
        start..start + self.cols as usize
    }

    /// Whether every cell in the row is filled (a "complete" row).
    pub fn is_row_filled(&self, row: u8) -> bool {
        if row >= self.rows {
            return false;
        }
        self.cells[self.row_range(row)].iter().all(|cell| cell.filled)
    }

    /// Whether no cell in the row is filled.
    pub fn is_row_empty(&self, row: u8) -> bool {
        if row >= self.rows {
            return true;
        }
        self.cells[self.row_range(row)].iter().all(|cell| !cell.filled)
    }

    /// Reset a whole row to empty.
    pub fn clear_row(&mut self, row: u8) {
        if row >= self.rows {
            return;
        }
        let range = self.row_range(row);
        for cell in &mut self.cells[range] {
            *cell = Cell::EMPTY;
        }
    }

    /// Copy the contents of `src` over `dst`; `src` is left unchanged.
    pub fn copy_row(&mut self, src: u8, dst: u8) {
        if src >= self.rows || dst >= self.rows || src == dst {
            return;
        }
        let src_range = self.row_range(src);
        let dst_start = self.row_range(dst).start;
        self.cells.copy_within(src_range, dst_start);
    }

    /// Reset every cell to empty.
    pub fn clear_all(&mut self) {
        for cell in &mut self.cells {
            *cell = Cell::EMPTY;
        }
    }

    /// Remove every complete row among `touched` and settle the rows above.
    ///
    /// Returns the removed row indices, bottom-most first. Compaction runs
    /// per removed row: the gap pulls down the nearest row above that is not
    /// itself marked for removal, then the vacated source becomes the next
    /// gap, cascading upward until an entirely empty row is reached (that
    /// row and everything above stay untouched) or the chain runs off the
    /// top of the grid.
    pub fn clear_lines(&mut self, touched: &[u8]) -> ArrayVec<u8, 4> {
        let mut rows: ArrayVec<u8, 4> = ArrayVec::new();
        for &row in touched {
            if row < self.rows && !rows.contains(&row) {
                rows.push(row);
            }
        }
        // Bottom-most first, so lower gaps are filled before the rows above
        // them are reprocessed.
        rows.sort_unstable_by(|a, b| b.cmp(a));

        let mut removed = [false; u8::MAX as usize + 1];
        let mut cleared: ArrayVec<u8, 4> = ArrayVec::new();
        for &row in &rows {
            if self.is_row_filled(row) {
                cleared.push(row);
                removed[row as usize] = true;
            }
        }

        for &row in &cleared {
            self.clear_row(row);
            let mut target = row;
            loop {
                // Nearest pullable row above the gap.
                let Some(src) = (0..target).rev().find(|&r| !removed[r as usize]) else {
                    break; // chain ran off the top; the gap stays empty
                };
                if self.is_row_empty(src) {
                    break; // only empty space above; nothing left to settle
                }
                self.copy_row(src, target);
                self.clear_row(src);
                target = src;
            }
        }

        cleared
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lock_row(grid: &mut Grid, row: u8) {
        for col in 0..grid.cols() {
            grid.fill_cell(col as i8, row as i8, Rgb::new(1, 2, 3));
            grid.lock_cell(col as i8, row as i8);
        }
    }

    #[test]
    fn test_index_bounds() {
        let grid = Grid::new(10, 24);
        assert!(grid.in_bounds(0, 0));
        assert!(grid.in_bounds(9, 23));
        assert!(!grid.in_bounds(-1, 0));
        assert!(!grid.in_bounds(10, 0));
        assert!(!grid.in_bounds(0, 24));
        assert_eq!(grid.cell(10, 0), None);
    }

    #[test]
    fn test_fill_lock_clear() {
        let mut grid = Grid::new(10, 24);
        let color = Rgb::new(10, 20, 30);

        grid.fill_cell(3, 5, color);
        let cell = grid.cell(3, 5).unwrap();
        assert!(cell.filled && !cell.locked);
        assert_eq!(cell.color, color);
        assert!(!grid.is_locked(3, 5));

        grid.lock_cell(3, 5);
        assert!(grid.is_locked(3, 5));
        assert!(grid.cell(3, 5).unwrap().filled);

        grid.clear_cell(3, 5);
        assert_eq!(grid.cell(3, 5), Some(Cell::EMPTY));
    }

    #[test]
    fn test_row_scans() {
        let mut grid = Grid::new(10, 24);
        assert!(grid.is_row_empty(23));
        assert!(!grid.is_row_filled(23));

        // One short of complete.
        for col in 0..9 {
            grid.fill_cell(col, 23, Rgb::BLACK);
        }
        assert!(!grid.is_row_filled(23));
        assert!(!grid.is_row_empty(23));

        grid.fill_cell(9, 23, Rgb::BLACK);
        assert!(grid.is_row_filled(23));
    }

    #[test]
    fn test_clear_lines_single_row_settles_above() {
        let mut grid = Grid::new(10, 24);
        lock_row(&mut grid, 23);
        // Partial content above the complete row.
        grid.fill_cell(0, 22, Rgb::new(9, 9, 9));
        grid.lock_cell(0, 22);
        grid.fill_cell(4, 21, Rgb::new(8, 8, 8));
        grid.lock_cell(4, 21);

        let cleared = grid.clear_lines(&[22, 23]);
        assert_eq!(cleared.as_slice(), &[23]);

        // Both partial rows moved down one; their old rows are empty.
        assert!(grid.is_locked(0, 23));
        assert!(grid.is_locked(4, 22));
        assert!(grid.is_row_empty(21));
        assert_eq!(grid.cell(0, 23).unwrap().color, Rgb::new(9, 9, 9));
    }

    #[test]
    fn test_clear_lines_adjacent_rows_settle_by_two() {
        let mut grid = Grid::new(10, 24);
        lock_row(&mut grid, 23);
        lock_row(&mut grid, 22);
        grid.fill_cell(7, 21, Rgb::new(5, 5, 5));
        grid.lock_cell(7, 21);

        let cleared = grid.clear_lines(&[21, 22, 23]);
        assert_eq!(cleared.as_slice(), &[23, 22]);

        assert!(grid.is_locked(7, 23));
        assert!(grid.is_row_empty(22));
        assert!(grid.is_row_empty(21));
    }

    #[test]
    fn test_clear_lines_chain_stops_at_empty_row() {
        let mut grid = Grid::new(10, 24);
        lock_row(&mut grid, 23);
        grid.fill_cell(2, 22, Rgb::BLACK);
        grid.lock_cell(2, 22);
        // Row 21 empty; a stranded block further up must not be pulled.
        grid.fill_cell(6, 20, Rgb::BLACK);
        grid.lock_cell(6, 20);

        grid.clear_lines(&[23]);

        assert!(grid.is_locked(2, 23));
        assert!(grid.is_row_empty(22));
        // Untouched above the empty row.
        assert!(grid.is_locked(6, 20));
    }

    #[test]
    fn test_clear_lines_ignores_incomplete_touched_rows() {
        let mut grid = Grid::new(10, 24);
        grid.fill_cell(0, 23, Rgb::BLACK);
        grid.lock_cell(0, 23);

        let cleared = grid.clear_lines(&[23]);
        assert!(cleared.is_empty());
        assert!(grid.is_locked(0, 23));
    }

    #[test]
    fn test_clear_all() {
        let mut grid = Grid::new(10, 24);
        lock_row(&mut grid, 23);
        grid.clear_all();
        for row in 0..24 {
            assert!(grid.is_row_empty(row));
        }
    }
}
