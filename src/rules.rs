use crate::cell::CellState;

/// Offsets `(dcol, drow)` of the eight cells around a cell.
///
/// ```notrust
/// (-1, -1) (0, -1) (1, -1)
/// (-1,  0)    x    (1,  0)
/// (-1,  1) (0,  1) (1,  1)
/// ```
pub const NEIGHBORHOOD: [(isize, isize); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (1, -1),
    (-1, 1),
    (1, 1),
];

/// Rules of Conway's Game of Life, B3/S23.
///
/// Returns the state to stage for a cell currently in `current` with `neighbors` alive cells
/// around it. With exactly two neighbors the cell keeps whatever it has, so a live cell survives
/// and a dead or seeded one stays that way.
///
/// See: https://conwaylife.com/wiki/Rulestring
pub fn next_state(current: CellState, neighbors: u8) -> CellState {
    match neighbors {
        // isolation
        0 | 1 => CellState::Dead,

        2 => current,

        // birth, or survival of a live cell
        3 => CellState::Pending,

        // overcrowding
        _ => CellState::Dead,
    }
}
