//! The fixed 6×5 tile grid and the typing cursor

use crate::core::{CellStatus, RowFeedback, WORD_LENGTH};

/// Number of attempts per round
pub const MAX_ATTEMPTS: usize = 6;

/// One tile: an optional letter and its feedback state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    letter: Option<char>,
    status: CellStatus,
}

impl Cell {
    #[must_use]
    pub const fn letter(self) -> Option<char> {
        self.letter
    }

    #[must_use]
    pub const fn status(self) -> CellStatus {
        self.status
    }

    fn type_letter(&mut self, letter: char) {
        self.letter = Some(letter);
        self.status = CellStatus::Typed;
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Active row and next writable column
///
/// `row` is in `0..MAX_ATTEMPTS`, `col` in `0..=WORD_LENGTH`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub row: usize,
    pub col: usize,
}

impl Cursor {
    /// True when every column of the active row holds a letter
    #[must_use]
    pub const fn row_full(self) -> bool {
        self.col == WORD_LENGTH
    }
}

pub type Row = [Cell; WORD_LENGTH];

/// Six rows of five cells. Never resized; a reset replaces the whole grid.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grid {
    rows: [Row; MAX_ATTEMPTS],
}

impl Grid {
    /// A grid of empty cells
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All rows, top to bottom
    #[must_use]
    pub const fn rows(&self) -> &[Row; MAX_ATTEMPTS] {
        &self.rows
    }

    /// A single row
    ///
    /// # Panics
    /// Panics if `row >= MAX_ATTEMPTS`
    #[must_use]
    pub const fn row(&self, row: usize) -> &Row {
        &self.rows[row]
    }

    /// A single cell
    ///
    /// # Panics
    /// Panics if either index is out of range
    #[must_use]
    pub const fn cell(&self, row: usize, col: usize) -> Cell {
        self.rows[row][col]
    }

    /// Letters of a row, or `None` while any cell is still empty
    #[must_use]
    pub fn row_letters(&self, row: usize) -> Option<[char; WORD_LENGTH]> {
        let mut letters = [' '; WORD_LENGTH];
        for (slot, cell) in letters.iter_mut().zip(&self.rows[row]) {
            *slot = cell.letter?;
        }
        Some(letters)
    }

    pub(crate) fn type_letter(&mut self, cursor: Cursor, letter: char) {
        self.rows[cursor.row][cursor.col].type_letter(letter);
    }

    pub(crate) fn clear_cell(&mut self, row: usize, col: usize) {
        self.rows[row][col].clear();
    }

    pub(crate) fn apply_feedback(&mut self, row: usize, feedback: &RowFeedback) {
        for (cell, &status) in self.rows[row].iter_mut().zip(feedback) {
            cell.status = status;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_empty() {
        let grid = Grid::new();
        assert_eq!(grid.rows().len(), MAX_ATTEMPTS);
        for row in grid.rows() {
            assert_eq!(row.len(), WORD_LENGTH);
            assert!(row.iter().all(|c| c.letter().is_none() && c.status() == CellStatus::Empty));
        }
    }

    #[test]
    fn row_letters_requires_full_row() {
        let mut grid = Grid::new();
        for (col, letter) in "robo".chars().enumerate() {
            grid.type_letter(Cursor { row: 2, col }, letter);
        }
        assert_eq!(grid.row_letters(2), None);

        grid.type_letter(Cursor { row: 2, col: 4 }, 't');
        assert_eq!(grid.row_letters(2), Some(['r', 'o', 'b', 'o', 't']));
        assert_eq!(grid.cell(2, 4).status(), CellStatus::Typed);
    }

    #[test]
    fn clear_cell_resets_letter_and_status() {
        let mut grid = Grid::new();
        grid.type_letter(Cursor { row: 0, col: 0 }, 'a');
        grid.clear_cell(0, 0);
        assert_eq!(grid.cell(0, 0), Cell::default());
    }

    #[test]
    fn apply_feedback_keeps_letters() {
        let mut grid = Grid::new();
        for (col, letter) in "speed".chars().enumerate() {
            grid.type_letter(Cursor { row: 0, col }, letter);
        }
        grid.apply_feedback(0, &[CellStatus::Correct; WORD_LENGTH]);

        assert!(grid.row(0).iter().all(|c| c.status() == CellStatus::Correct));
        assert_eq!(grid.cell(0, 1).letter(), Some('p'));
    }
}
