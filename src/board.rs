//! One side's grid of cells.
//!
//! A board is built in two phases. [`BoardSetup`] is the placement phase and
//! is the only way to put ships on cells. [`BoardSetup::finish`] turns it into
//! a [`Board`], whose ship layout can no longer change; only hit state moves
//! during play.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::cell::Cell;
use crate::common::BoardError;

/// Square grid of cells stored row-major.
#[derive(Clone, PartialEq, Eq)]
struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    fn new(size: usize) -> Self {
        Grid {
            size,
            cells: vec![Cell::new(); size * size],
        }
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> Result<usize, BoardError> {
        if row >= self.size || col >= self.size {
            Err(BoardError::OutOfBounds {
                row,
                col,
                size: self.size,
            })
        } else {
            Ok(row * self.size + col)
        }
    }

    fn get(&self, row: usize, col: usize) -> Result<&Cell, BoardError> {
        let idx = self.index(row, col)?;
        Ok(&self.cells[idx])
    }

    fn get_mut(&mut self, row: usize, col: usize) -> Result<&mut Cell, BoardError> {
        let idx = self.index(row, col)?;
        Ok(&mut self.cells[idx])
    }

    fn count(&self, pred: impl Fn(&Cell) -> bool) -> usize {
        self.cells.iter().filter(|&c| pred(c)).count()
    }
}

/// Placement phase of a board: ships may be added, nothing may be hit.
#[derive(Clone, PartialEq, Eq)]
pub struct BoardSetup {
    grid: Grid,
}

impl BoardSetup {
    /// Allocate a `size`×`size` grid of empty cells.
    pub fn new(size: usize) -> Self {
        BoardSetup {
            grid: Grid::new(size),
        }
    }

    pub fn size(&self) -> usize {
        self.grid.size
    }

    /// Put a ship on (row, col). Returns `false` when the cell already held one.
    pub fn set_occupied(&mut self, row: usize, col: usize) -> Result<bool, BoardError> {
        let cell = self.grid.get_mut(row, col)?;
        let fresh = !cell.is_occupied();
        cell.set_occupied(true);
        Ok(fresh)
    }

    pub fn is_ship_cell(&self, row: usize, col: usize) -> Result<bool, BoardError> {
        Ok(self.grid.get(row, col)?.is_occupied())
    }

    /// Number of distinct occupied cells so far.
    pub fn ship_count(&self) -> usize {
        self.grid.count(Cell::is_occupied)
    }

    /// Coordinates of cells that do not hold a ship yet.
    pub fn open_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let size = self.grid.size;
        self.grid
            .cells
            .iter()
            .enumerate()
            .filter(|(_, c)| !c.is_occupied())
            .map(move |(i, _)| (i / size, i % size))
    }

    /// Close the placement phase and start play.
    pub fn finish(self) -> Board {
        Board { grid: self.grid }
    }
}

impl fmt::Debug for BoardSetup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BoardSetup {{\n{}}}", BoardView::new(&self.grid, true))
    }
}

/// Play phase of a board: the ship layout is fixed, cells can be hit.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    grid: Grid,
}

impl Board {
    /// Build a board with ships at the given coordinates.
    pub fn with_ships(
        size: usize,
        ships: impl IntoIterator<Item = (usize, usize)>,
    ) -> Result<Self, BoardError> {
        let mut setup = BoardSetup::new(size);
        for (row, col) in ships {
            setup.set_occupied(row, col)?;
        }
        Ok(setup.finish())
    }

    pub fn size(&self) -> usize {
        self.grid.size
    }

    pub fn cell(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        self.grid.get(row, col).copied()
    }

    /// Mark (row, col) as guessed. Marking twice leaves it hit.
    pub fn mark_cell(&mut self, row: usize, col: usize) -> Result<(), BoardError> {
        self.grid.get_mut(row, col)?.mark_hit();
        Ok(())
    }

    pub fn is_cell_hit(&self, row: usize, col: usize) -> Result<bool, BoardError> {
        Ok(self.grid.get(row, col)?.is_hit())
    }

    pub fn is_ship_cell(&self, row: usize, col: usize) -> Result<bool, BoardError> {
        Ok(self.grid.get(row, col)?.is_occupied())
    }

    /// Number of cells holding a ship.
    pub fn ship_count(&self) -> usize {
        self.grid.count(Cell::is_occupied)
    }

    /// Ship cells that have not been hit yet.
    pub fn ships_remaining(&self) -> usize {
        self.grid.count(Cell::is_afloat)
    }

    /// Returns `true` when no ship cell is left unhit. A board without ships
    /// counts as defeated.
    pub fn all_ships_hit(&self) -> bool {
        !self.grid.cells.iter().any(Cell::is_afloat)
    }

    /// Coordinates of cells nobody has guessed yet.
    pub fn unhit_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let size = self.grid.size;
        self.grid
            .cells
            .iter()
            .enumerate()
            .filter(|(_, c)| !c.is_hit())
            .map(move |(i, _)| (i / size, i % size))
    }

    /// Text rendering of the board. Ships are only drawn when `reveal_ships`
    /// is set; hits are always drawn.
    pub fn render(&self, reveal_ships: bool) -> BoardView<'_> {
        BoardView::new(&self.grid, reveal_ships)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board {{\n{}}}", self.render(true))
    }
}

/// Lazy text view of a board, produced by [`Board::render`].
///
/// ```text
///   0 1 2 3 4
/// 0 ~ ~ H ~ ~
/// 1 ~ X ~ ~ ~
/// ```
pub struct BoardView<'a> {
    grid: &'a Grid,
    reveal_ships: bool,
}

impl<'a> BoardView<'a> {
    fn new(grid: &'a Grid, reveal_ships: bool) -> Self {
        BoardView { grid, reveal_ships }
    }
}

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.grid.size;
        // every column is as wide as the largest index
        let w = label_width(size.saturating_sub(1));
        write!(f, "{:w$} ", "")?;
        for c in 0..size {
            write!(f, "{:>w$} ", c)?;
        }
        writeln!(f)?;
        for (r, row) in self.grid.cells.chunks(size.max(1)).enumerate() {
            write!(f, "{:>w$} ", r)?;
            for cell in row {
                write!(f, "{:>w$} ", cell.marker(self.reveal_ships))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn label_width(mut n: usize) -> usize {
    let mut digits = 1;
    while n >= 10 {
        n /= 10;
        digits += 1;
    }
    digits
}
