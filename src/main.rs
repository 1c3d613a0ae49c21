use std::io;
use std::io::Write;
use std::thread;
use std::time::Instant;

use anyhow::Context;
use crossterm::cursor;
use crossterm::event;
use crossterm::execute;
use crossterm::queue;
use crossterm::style;
use crossterm::terminal;
use tracing::info;
use tracing_subscriber::EnvFilter;

use lifegrid::app::App;
use lifegrid::config::Config;
use lifegrid::io::convert_event;

/// Leaves raw mode and the alternate screen, even on early returns
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> anyhow::Result<Self> {
        terminal::enable_raw_mode().context("Failed to enable raw mode")?;
        execute!(io::stdout(), terminal::EnterAlternateScreen, cursor::Hide)
            .context("Failed to enter alternate screen")?;

        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr, redirect it to keep the field readable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = Config::from_env().context("Invalid configuration")?;
    let frametime = config.frametime();

    let (cols, rows) = terminal::size().context("Failed to read terminal size")?;
    let mut app = App::new(config, cols, rows).context("Failed to build the field")?;

    info!(
        "Field is {}x{} cells",
        app.grid().columns(),
        app.grid().rows()
    );

    let _guard = TerminalGuard::enter()?;
    let mut stdout = io::stdout();
    let mut last = Instant::now();

    loop {
        let t = Instant::now();

        // Poll events for as long as a frame lasts
        if event::poll(frametime)? {
            if let Some(event) = convert_event(event::read()?) {
                if app.handle(event) {
                    break;
                }
            }
        }

        app.update(last.elapsed());
        last = Instant::now();

        let status = app.status();

        queue!(stdout, cursor::MoveTo(0, 0))?;
        for line in app.frame().lines() {
            queue!(stdout, style::Print(line), cursor::MoveToNextLine(1))?;
        }
        queue!(
            stdout,
            terminal::Clear(terminal::ClearType::CurrentLine),
            style::Print(status),
        )?;
        stdout.flush()?;

        let time_left = frametime.saturating_sub(t.elapsed());
        thread::sleep(time_left);
    }

    Ok(())
}
