use std::fmt;
use std::time::Duration;

use tracing::debug;
use tracing::warn;

use crate::camera::Camera;
use crate::config::Config;
use crate::editor::Editor;
use crate::events::AppEvent;
use crate::events::EditEvent;
use crate::events::EngineEvent;
use crate::events::Event;
use crate::grid::Grid;
use crate::grid::GridError;

/// Terminal lines kept below the field for statistics
pub const STATUS_LINES: u16 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Running,
    Paused,
    Editing,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Mode::Running => "running",
            Mode::Paused => "paused",
            Mode::Editing => "editing",
        };

        f.write_str(s)
    }
}

/// Everything the interactive front-end needs, minus the terminal itself.
pub struct App {
    grid: Grid,
    editor: Editor,
    camera: Camera,
    config: Config,
    paused: bool,

    /// Time accumulated towards the next generation
    since_tick: Duration,
}

impl App {
    /// Build an app for a terminal of `cols` x `rows` characters
    pub fn new(config: Config, cols: u16, rows: u16) -> Result<Self, GridError> {
        let camera = Camera::new(cols, rows.saturating_sub(STATUS_LINES), config.cell_extent);
        let grid = Grid::new(&camera, config.cell_extent)?;

        Ok(Self::with_grid(config, camera, grid))
    }

    pub fn with_grid(config: Config, camera: Camera, grid: Grid) -> Self {
        Self {
            grid,
            editor: Editor::default(),
            camera,
            paused: config.start_paused,
            config,
            since_tick: Duration::ZERO,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    pub fn mode(&self) -> Mode {
        if self.editor.is_editing() {
            Mode::Editing
        } else if self.paused {
            Mode::Paused
        } else {
            Mode::Running
        }
    }

    /// Apply `event`. Returns true if the app should exit.
    pub fn handle(&mut self, event: Event) -> bool {
        debug!("Handling {event:?}");

        match event {
            Event::AppEvent(AppEvent::Exit) => return true,
            Event::AppEvent(AppEvent::Resize { cols, rows }) => {
                self.resize(cols, rows);
            }

            // The field is frozen while editing
            Event::EngineEvent(_) if self.editor.is_editing() => {}
            Event::EngineEvent(EngineEvent::TogglePause) => self.paused = !self.paused,
            Event::EngineEvent(EngineEvent::Step) => self.grid.advance_generation(),
            Event::EngineEvent(EngineEvent::Randomize) => self.grid.randomize(),
            Event::EngineEvent(EngineEvent::Clear) => self.grid.clear(),

            Event::EditEvent(EditEvent::Begin) => self.editor.begin(&self.grid),
            Event::EditEvent(EditEvent::Move(dcol, drow)) => {
                self.editor.move_cursor(&self.grid, dcol, drow)
            }
            Event::EditEvent(EditEvent::Toggle) => self.editor.toggle(&mut self.grid),
            Event::EditEvent(EditEvent::Commit) => self.editor.commit(),
            Event::EditEvent(EditEvent::Rollback) => {
                if let Err(e) = self.editor.rollback(&mut self.grid) {
                    warn!("Could not roll back edits: {e}");
                }
            }
        }

        false
    }

    /// Fit the camera to a terminal of `cols` x `rows` characters. Returns false if nothing of
    /// the field fits.
    fn resize(&mut self, cols: u16, rows: u16) -> bool {
        self.camera.resize(cols, rows.saturating_sub(STATUS_LINES));

        let fits = self.camera.width() > 0 && self.camera.height() > 0;
        if !fits {
            warn!("Terminal too small to draw the field ({cols}x{rows})");
        }

        fits
    }

    /// Let `dt` pass. Advances at most one generation per call.
    pub fn update(&mut self, dt: Duration) {
        if self.mode() != Mode::Running {
            self.since_tick = Duration::ZERO;
            return;
        }

        self.since_tick += dt;

        if self.since_tick >= self.config.tick {
            self.since_tick = Duration::ZERO;
            self.grid.advance_generation();
        }
    }

    pub fn status(&self) -> String {
        format!(
            "generation {} | alive {} | {}",
            self.grid.generation(),
            self.grid.alive_cell_count(),
            self.mode()
        )
    }

    /// Draw the field into the camera and return it as text
    pub fn frame(&mut self) -> &str {
        self.camera.reset();

        self.grid.draw(&mut self.camera);

        if self.editor.is_editing() {
            let (col, row) = self.editor.cursor();
            let extent = self.grid.extent();

            self.camera.invert(col as u32 * extent, row as u32 * extent);
        }

        self.camera.render()
    }
}

#[cfg(test)]
mod test {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::cell::CellState;

    fn app(config: Config) -> App {
        let camera = Camera::new(4, 2, config.cell_extent);
        let mut grid =
            Grid::from_rng(&camera, config.cell_extent, StdRng::seed_from_u64(3)).unwrap();
        grid.clear();

        App::with_grid(config, camera, grid)
    }

    #[test]
    fn grid_covers_camera() {
        let app = app(Config::default());

        // 8x8 dots, plus the partial edge cell
        assert_eq!((app.grid().columns(), app.grid().rows()), (9, 9));
    }

    #[test]
    fn ticks_advance_generations() {
        let mut app = app(Config::default());

        app.update(Duration::from_millis(60));
        assert_eq!(app.grid().generation(), 0);

        app.update(Duration::from_millis(60));
        assert_eq!(app.grid().generation(), 1);
    }

    #[test]
    fn paused_app_does_not_tick() {
        let mut app = app(Config {
            start_paused: true,
            ..Config::default()
        });

        app.update(Duration::from_secs(5));
        assert_eq!(app.grid().generation(), 0);
        assert_eq!(app.mode(), Mode::Paused);

        app.handle(Event::EngineEvent(EngineEvent::Step));
        assert_eq!(app.grid().generation(), 1);
    }

    #[test]
    fn editing_freezes_the_field() {
        let mut app = app(Config::default());

        app.handle(Event::EditEvent(EditEvent::Begin));
        app.handle(Event::EditEvent(EditEvent::Toggle));
        app.handle(Event::EngineEvent(EngineEvent::Clear));
        app.update(Duration::from_secs(1));

        assert_eq!(app.mode(), Mode::Editing);
        assert_eq!(app.grid().count_alive_cells(), 1);
        assert_eq!(app.grid().generation(), 0);

        app.handle(Event::EditEvent(EditEvent::Rollback));
        assert_eq!(app.grid().count_alive_cells(), 0);
        assert_eq!(app.mode(), Mode::Running);
    }

    #[test]
    fn exit_event_stops() {
        let mut app = app(Config::default());

        assert!(app.handle(Event::AppEvent(AppEvent::Exit)));
        assert!(!app.handle(Event::EngineEvent(EngineEvent::TogglePause)));
    }

    #[test]
    fn frame_draws_alive_cells() {
        let mut app = app(Config::default());
        app.grid.get_element_mut(0, 0).set_state(CellState::Alive);

        assert!(app.frame().starts_with('\u{2801}'));
    }

    #[test]
    fn tiny_terminal_draws_nothing() {
        let mut app = app(Config::default());
        app.grid.get_element_mut(0, 0).set_state(CellState::Alive);

        assert!(!app.resize(10, STATUS_LINES));
        assert_eq!(app.frame(), "\n");

        assert!(app.resize(4, 2));
        assert!(app.frame().starts_with('\u{2801}'));
    }

    #[test]
    fn status_reports_generation_and_mode() {
        let mut app = app(Config::default());
        app.handle(Event::EngineEvent(EngineEvent::Step));

        assert_eq!(app.status(), "generation 1 | alive 0 | running");
    }
}
