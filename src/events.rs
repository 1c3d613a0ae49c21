#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    EngineEvent(EngineEvent),
    EditEvent(EditEvent),
    AppEvent(AppEvent),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineEvent {
    /// Pause or resume the simulation
    TogglePause,

    /// Advance a single generation
    Step,

    Randomize,
    Clear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditEvent {
    /// Pause and start editing
    Begin,

    /// Move the cursor by `(dcol, drow)`
    Move(isize, isize),

    Toggle,
    Commit,
    Rollback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// The terminal now has `cols` x `rows` characters
    Resize { cols: u16, rows: u16 },

    /// Exit the application
    Exit,
}
