//! Screen layout and panel dispatch.
//!
//! Fixed vertical layout: summary cards, chart, one switchable lower panel
//! (table / forecast / yearly stats), status bar.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::Frame;

use crate::app::{AppState, Panel};
use crate::theme::Theme;

pub mod chart_panel;
pub mod forecast_panel;
pub mod stats_panel;
pub mod status_bar;
pub mod summary_panel;
pub mod table_panel;

pub fn draw(f: &mut Frame, app: &AppState, theme: &Theme) {
    let [summary, chart, lower, status] = layout(f.area());

    summary_panel::render(f, summary, app, theme);
    chart_panel::render(f, chart, app, theme);

    match app.panel {
        Panel::Table => table_panel::render(f, lower, app, theme),
        Panel::Forecast => forecast_panel::render(f, lower, app, theme),
        Panel::Stats => stats_panel::render(f, lower, app, theme),
    }

    status_bar::render(f, status, app, theme);
}

fn layout(area: Rect) -> [Rect; 4] {
    Layout::vertical([
        Constraint::Length(5),
        Constraint::Min(10),
        Constraint::Length(16),
        Constraint::Length(1),
    ])
    .areas(area)
}
