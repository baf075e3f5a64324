//! RuStat TUI entry point: terminal lifecycle and the main event loop.

use std::io::{self, stdout};
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use rustat_tui::app::AppState;
use rustat_tui::{config, data_loader, navigation, ui, Theme};

fn main() -> Result<()> {
    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    let cfg = config::load()?;
    let outcome = data_loader::load_or_sample(&cfg.data_dir)?;

    let mut app = AppState::new(outcome.indicators, cfg.window(), cfg.show_forecast);
    app.set_status(outcome.note);
    let theme = Theme::default();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app, &theme);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
    theme: &Theme,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app, theme))?;

        // Poll for input (50ms timeout keeps the loop responsive without
        // spinning; there is no background work to wake up for).
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                navigation::handle_key_event(app, key);
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
