use crate::display::RenderTarget;
use crate::display::Rgb;

/// State of a single [`Cell`].
///
/// Only [`CellState::Alive`] counts as alive. `Dead` and `Seeded` are both dead as far as the
/// rules are concerned, they only differ in how they are drawn.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellState {
    Alive,

    /// Explicitly killed, either by a clear or by the rules.
    #[default]
    Dead,

    /// The non-alive outcome of randomizing the field.
    Seeded,

    /// A birth staged during evaluation. This only ever lives in `next_state` and is committed
    /// as [`CellState::Alive`].
    Pending,
}

impl CellState {
    pub const fn is_alive(self) -> bool {
        matches!(self, Self::Alive)
    }

    /// Color used when drawing a cell in this state
    pub const fn color(self) -> Rgb {
        match self {
            Self::Alive => Rgb::new(0xF0, 0xF0, 0xF0),
            Self::Dead => Rgb::new(0x10, 0x10, 0x10),
            Self::Seeded => Rgb::new(0x28, 0x28, 0x30),
            Self::Pending => Rgb::new(0x40, 0xC0, 0x40),
        }
    }
}

/// Logical position of a [`Cell`] in its grid
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location {
    pub col: usize,
    pub row: usize,
}

impl Location {
    /// Top left corner of the cell on screen, in pixels.
    pub const fn pixel(&self, extent: u32) -> (u32, u32) {
        (self.col as u32 * extent, self.row as u32 * extent)
    }
}

/// A single unit of the automaton.
///
/// A cell is double buffered: the rules write into `next_state` while every neighbor still reads
/// `state`, and [`Cell::apply_new_state`] makes the staged value current once the whole grid has
/// been evaluated.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Cell {
    state: CellState,
    next_state: CellState,
    location: Location,
}

impl Cell {
    pub fn state(&self) -> CellState {
        self.state
    }

    pub fn location(&self) -> Location {
        self.location
    }

    /// Only the owning grid places cells, and it does so once at construction.
    pub(crate) fn set_location(&mut self, col: usize, row: usize) {
        self.location = Location { col, row };
    }

    /// Overwrite the current state. The staged state is left alone.
    ///
    /// A pending birth lands as [`CellState::Alive`], so `state` never holds
    /// [`CellState::Pending`].
    pub fn set_state(&mut self, state: CellState) {
        self.state = Self::settle(state);
    }

    /// Stage the state this cell takes on at the next commit.
    pub fn stage_next_state(&mut self, state: CellState) {
        self.next_state = state;
    }

    /// Commit the staged state.
    pub fn apply_new_state(&mut self) {
        self.state = Self::settle(self.next_state);
    }

    const fn settle(state: CellState) -> CellState {
        match state {
            CellState::Pending => CellState::Alive,
            state => state,
        }
    }

    /// Paint this cell onto `target`. `extent` is the side length of a cell in pixels.
    pub fn draw<T: RenderTarget + ?Sized>(&self, target: &mut T, extent: u32) {
        let (x, y) = self.location.pixel(extent);

        target.fill_square(x, y, extent, self.state.color());
    }
}
