//! Keyboard navigation and event handling.
//!
//! Maps keyboard events to app actions; all state changes go through
//! `AppState` methods so the pipelines stay the single source of truth.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::AppState;

/// Handle keyboard input and update app state.
pub fn handle_key_event(app: &mut AppState, key: KeyEvent) {
    match key.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.quit();
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.quit();
        }

        // Table paging
        KeyCode::Right | KeyCode::Char('l') => {
            app.next_page();
        }
        KeyCode::Left | KeyCode::Char('h') => {
            app.prev_page();
        }
        KeyCode::Home => {
            app.first_page();
        }
        KeyCode::End => {
            app.go_last_page();
        }

        // Catalog navigation
        KeyCode::Up | KeyCode::Char('k') => {
            app.prev_indicator();
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.next_indicator();
        }

        // View parameters
        KeyCode::Char('y') | KeyCode::Char('Y') => {
            app.cycle_year_filter();
        }
        KeyCode::Char('w') | KeyCode::Char('W') => {
            app.cycle_window();
        }
        KeyCode::Char('f') | KeyCode::Char('F') => {
            app.toggle_forecast();
        }

        // Lower panel
        KeyCode::Tab => {
            app.next_panel();
        }

        _ => {}
    }
}

/// Key bindings help text for the status bar.
pub fn key_bindings_help() -> Vec<(&'static str, &'static str)> {
    vec![
        ("q", "выход"),
        ("←/→", "страница"),
        ("↑/↓", "индикатор"),
        ("y", "год"),
        ("w", "период"),
        ("f", "прогноз"),
        ("Tab", "панель"),
    ]
}
