//! One-line status bar: key hints, status note, dataset hash.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::AppState;
use crate::navigation::key_bindings_help;
use crate::theme::Theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState, theme: &Theme) {
    let mut spans: Vec<Span> = Vec::new();

    for (key, action) in key_bindings_help() {
        spans.push(Span::styled(format!(" {key}"), Style::default().fg(theme.accent)));
        spans.push(Span::styled(
            format!(":{action} "),
            Style::default().fg(theme.muted),
        ));
    }

    if !app.status.is_empty() {
        spans.push(Span::styled("| ", Style::default().fg(theme.muted)));
        spans.push(Span::styled(
            app.status.clone(),
            Style::default().fg(theme.warning),
        ));
    }

    if let Some(loaded) = app.current() {
        spans.push(Span::styled(
            format!(" | данные {}", loaded.dataset_hash.short()),
            Style::default().fg(theme.muted),
        ));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
