use tracing::debug;

use crate::grid::Field;
use crate::grid::Grid;
use crate::grid::GridError;

/// Hand editing of a [`Grid`] with rollback.
///
/// Entering edit mode takes a snapshot of the field. Edits go straight to the grid, and rolling
/// back installs the snapshot again.
#[derive(Default)]
pub struct Editor {
    /// Field as it was when editing started. `Some` while editing.
    backup: Option<Field>,

    /// Cursor position `(col, row)`
    cursor: (usize, usize),
}

impl Editor {
    pub fn is_editing(&self) -> bool {
        self.backup.is_some()
    }

    pub fn cursor(&self) -> (usize, usize) {
        self.cursor
    }

    /// Start editing `grid`. Does nothing if already editing.
    pub fn begin(&mut self, grid: &Grid) {
        if self.is_editing() {
            return;
        }

        self.backup = Some(grid.snapshot());
        debug!("Editing started");
    }

    /// Move the cursor by `(dcol, drow)`, wrapping around the grid like its neighbors do.
    pub fn move_cursor(&mut self, grid: &Grid, dcol: isize, drow: isize) {
        let (col, row) = self.cursor;
        let col = (col as isize + dcol).rem_euclid(grid.columns() as isize);
        let row = (row as isize + drow).rem_euclid(grid.rows() as isize);

        self.cursor = (col as usize, row as usize);
    }

    /// Toggle the cell under the cursor
    pub fn toggle(&self, grid: &mut Grid) {
        if !self.is_editing() {
            return;
        }

        let (col, row) = self.cursor;
        grid.toggle(col as isize, row as isize);
    }

    /// Keep the edits
    pub fn commit(&mut self) {
        if self.backup.take().is_some() {
            debug!("Edits committed");
        }
    }

    /// Undo every edit made since [`Editor::begin`]
    pub fn rollback(&mut self, grid: &mut Grid) -> Result<(), GridError> {
        let Some(field) = self.backup.take() else {
            return Ok(());
        };

        grid.restore(field)?;
        debug!("Edits rolled back");

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::cell::CellState;
    use crate::display::Resolution;

    fn grid() -> Grid {
        let mut grid =
            Grid::from_rng(&Resolution::new(64, 64), 16, StdRng::seed_from_u64(1)).unwrap();
        grid.clear();
        grid
    }

    #[test]
    fn rollback_undoes_edits() {
        let mut grid = grid();
        let mut editor = Editor::default();

        editor.begin(&grid);
        editor.move_cursor(&grid, 2, 1);
        editor.toggle(&mut grid);
        assert_eq!(grid.get_element(2, 1).state(), CellState::Alive);

        editor.rollback(&mut grid).unwrap();
        assert_eq!(grid.get_element(2, 1).state(), CellState::Dead);
        assert!(!editor.is_editing());
    }

    #[test]
    fn commit_keeps_edits() {
        let mut grid = grid();
        let mut editor = Editor::default();

        editor.begin(&grid);
        editor.toggle(&mut grid);
        editor.commit();

        assert_eq!(grid.get_element(0, 0).state(), CellState::Alive);
        editor.rollback(&mut grid).unwrap();
        assert_eq!(grid.get_element(0, 0).state(), CellState::Alive);
    }

    #[test]
    fn toggle_outside_edit_mode_is_ignored() {
        let mut grid = grid();
        let editor = Editor::default();

        editor.toggle(&mut grid);
        assert_eq!(grid.count_alive_cells(), 0);
    }

    #[test]
    fn second_begin_keeps_first_snapshot() {
        let mut grid = grid();
        let mut editor = Editor::default();

        editor.begin(&grid);
        editor.toggle(&mut grid);
        editor.begin(&grid);
        editor.rollback(&mut grid).unwrap();

        assert_eq!(grid.count_alive_cells(), 0);
    }

    #[test]
    fn cursor_wraps() {
        let grid = grid();
        let mut editor = Editor::default();

        editor.move_cursor(&grid, -1, -1);
        assert_eq!(editor.cursor(), (grid.columns() - 1, grid.rows() - 1));

        editor.move_cursor(&grid, 1, 1);
        assert_eq!(editor.cursor(), (0, 0));
    }
}
