use std::fmt;

use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;
use thiserror::Error;
use tracing::debug;
use tracing::info;
use tracing::trace;
use tracing::warn;

use crate::cell::Cell;
use crate::cell::CellState;
use crate::display::Display;
use crate::display::RenderTarget;
use crate::rules;

/// A full copy of a grid's cells, indexed `[row][col]`.
pub type Field = Vec<Vec<Cell>>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("Display resolution must be non-zero, got {width}x{height}")]
    InvalidResolution { width: u32, height: u32 },

    #[error("Cell extent must be non-zero")]
    InvalidCellExtent,

    #[error("Field has no cells")]
    EmptyField,

    #[error("Row {row} has {got} cells, expected {expected}")]
    RaggedField {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("Cell at ({col}, {row}) belongs at ({got_col}, {got_row})")]
    MisplacedCell {
        col: usize,
        row: usize,
        got_col: usize,
        got_row: usize,
    },

    #[error("Field is {got_cols}x{got_rows}, expected {cols}x{rows}")]
    DimensionMismatch {
        cols: usize,
        rows: usize,
        got_cols: usize,
        got_rows: usize,
    },
}

pub struct Grid {
    /// Every cell on screen, indexed `[row][col]`. All rows have the same length.
    cells: Field,

    /// Population of the generation before the last advance.
    alive_count: usize,

    /// Number of generations advanced so far
    generation: u64,

    /// Side length of a cell in pixels
    extent: u32,

    rng: StdRng,
}

impl Grid {
    /// Create a randomized grid covering `display`, seeded from the OS.
    pub fn new<D: Display + ?Sized>(display: &D, extent: u32) -> Result<Self, GridError> {
        Self::from_rng(display, extent, StdRng::from_entropy())
    }

    /// Like [`Grid::new`], drawing its randomness from `rng`.
    ///
    /// There is one extra row and column past what fits on `display`, so that a partially
    /// visible cell at the right and bottom edges still gets drawn.
    pub fn from_rng<D: Display + ?Sized>(
        display: &D,
        extent: u32,
        rng: StdRng,
    ) -> Result<Self, GridError> {
        let (width, height) = display.resolution();

        if width == 0 || height == 0 {
            return Err(GridError::InvalidResolution { width, height });
        }

        if extent == 0 {
            return Err(GridError::InvalidCellExtent);
        }

        let cols = (width / extent) as usize + 1;
        let rows = (height / extent) as usize + 1;

        let cells = (0..rows)
            .map(|row| {
                (0..cols)
                    .map(|col| {
                        let mut cell = Cell::default();
                        cell.set_location(col, row);
                        cell
                    })
                    .collect()
            })
            .collect();

        info!("Creating {cols}x{rows} grid for a {width}x{height} display");

        let mut grid = Self {
            cells,
            alive_count: 0,
            generation: 0,
            extent,
            rng,
        };
        grid.randomize();

        Ok(grid)
    }

    pub fn columns(&self) -> usize {
        self.cells[0].len()
    }

    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    pub fn extent(&self) -> u32 {
        self.extent
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Seed the field: each cell is alive with probability 1/5, otherwise seeded.
    pub fn randomize(&mut self) {
        for cell in self.cells.iter_mut().flatten() {
            let n: u32 = self.rng.gen_range(1..=10_000);

            if n % 5 != 0 {
                cell.set_state(CellState::Seeded);
            } else {
                cell.set_state(CellState::Alive);
            }
        }

        debug!("Randomized field, {} cells alive", self.count_alive_cells());
    }

    /// Kill every cell
    pub fn clear(&mut self) {
        for cell in self.cells.iter_mut().flatten() {
            cell.set_state(CellState::Dead);
        }

        debug!("Cleared field");
    }

    /// Wrap `(col, row)` around the edges of the grid.
    fn wrap(&self, col: isize, row: isize) -> (usize, usize) {
        let cols = self.columns() as isize;
        let rows = self.rows() as isize;

        (col.rem_euclid(cols) as usize, row.rem_euclid(rows) as usize)
    }

    /// The cell at `(col, row)`. The grid is a torus: `-1` is the last column or row, and one
    /// past the last is the first.
    pub fn get_element(&self, col: isize, row: isize) -> &Cell {
        let (col, row) = self.wrap(col, row);

        &self.cells[row][col]
    }

    /// Mutable version of [`Grid::get_element`]
    pub fn get_element_mut(&mut self, col: isize, row: isize) -> &mut Cell {
        let (col, row) = self.wrap(col, row);

        &mut self.cells[row][col]
    }

    /// Flip the cell at `(col, row)` between alive and dead.
    pub fn toggle(&mut self, col: isize, row: isize) {
        let cell = self.get_element_mut(col, row);

        let state = if cell.state().is_alive() {
            CellState::Dead
        } else {
            CellState::Alive
        };

        cell.set_state(state);
    }

    fn alive_neighbors(&self, col: usize, row: usize) -> u8 {
        let (col, row) = (col as isize, row as isize);

        rules::NEIGHBORHOOD
            .iter()
            .filter(|(dc, dr)| self.get_element(col + dc, row + dr).state().is_alive())
            .count() as u8
    }

    /// Compute the next generation.
    ///
    /// Every cell is evaluated against the current generation before any of them is committed,
    /// so no cell ever sees a neighbor's new state.
    pub fn advance_generation(&mut self) {
        self.alive_count = self.count_alive_cells();

        for row in 0..self.rows() {
            for col in 0..self.columns() {
                let neighbors = self.alive_neighbors(col, row);

                let cell = &mut self.cells[row][col];
                cell.stage_next_state(rules::next_state(cell.state(), neighbors));
            }
        }

        for cell in self.cells.iter_mut().flatten() {
            cell.apply_new_state();
        }

        self.generation += 1;

        trace!(
            "Generation {} computed from {} alive cells",
            self.generation, self.alive_count
        );
    }

    /// Count every alive cell on the field
    pub fn count_alive_cells(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| cell.state().is_alive())
            .count()
    }

    /// Population as of the start of the last [`Grid::advance_generation`].
    pub fn alive_cell_count(&self) -> usize {
        self.alive_count
    }

    /// A deep copy of the field
    pub fn snapshot(&self) -> Field {
        self.cells.clone()
    }

    /// Replace the field with `field`, which must be rectangular, have the same dimensions as this
    /// grid, and keep every cell at the location it was created for. On error the grid is left
    /// untouched.
    pub fn restore(&mut self, field: Field) -> Result<(), GridError> {
        if let Err(e) = self.check_field(&field) {
            warn!("Rejected field restore: {e}");

            return Err(e);
        }

        self.cells = field;
        debug!("Restored field");

        Ok(())
    }

    fn check_field(&self, field: &Field) -> Result<(), GridError> {
        let Some(first) = field.first() else {
            return Err(GridError::EmptyField);
        };

        if first.is_empty() {
            return Err(GridError::EmptyField);
        }

        let expected = first.len();
        if let Some((row, cells)) = field
            .iter()
            .enumerate()
            .find(|(_, cells)| cells.len() != expected)
        {
            return Err(GridError::RaggedField {
                row,
                expected,
                got: cells.len(),
            });
        }

        if expected != self.columns() || field.len() != self.rows() {
            return Err(GridError::DimensionMismatch {
                cols: self.columns(),
                rows: self.rows(),
                got_cols: expected,
                got_rows: field.len(),
            });
        }

        for (row, cells) in field.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                let loc = cell.location();

                if (loc.col, loc.row) != (col, row) {
                    return Err(GridError::MisplacedCell {
                        col,
                        row,
                        got_col: loc.col,
                        got_row: loc.row,
                    });
                }
            }
        }

        Ok(())
    }

    /// Draw every cell onto `target`
    pub fn draw<T: RenderTarget + ?Sized>(&self, target: &mut T) {
        for cell in self.cells.iter().flatten() {
            cell.draw(target, self.extent);
        }
    }
}

/// One line per row, `#` for alive cells and `.` for everything else.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for cell in row {
                let c = if cell.state().is_alive() { '#' } else { '.' };
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
