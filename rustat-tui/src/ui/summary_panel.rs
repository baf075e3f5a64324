//! Summary cards: current value, previous month, 12-month average, forecast.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use rustat_core::stats::{latest_snapshot, previous_trailing_average, trailing_average};

use crate::app::AppState;
use crate::format;
use crate::theme::Theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState, theme: &Theme) {
    let cards: [Rect; 4] = Layout::horizontal([
        Constraint::Ratio(1, 4),
        Constraint::Ratio(1, 4),
        Constraint::Ratio(1, 4),
        Constraint::Ratio(1, 4),
    ])
    .areas(area);

    let Some(loaded) = app.current() else {
        render_card(f, cards[0], theme, "Текущее значение", "—", None, theme.muted);
        return;
    };
    let series = &loaded.indicator.data;
    let snapshot = latest_snapshot(series);

    // Current value with its month-over-month delta.
    let (current_text, current_delta) = match snapshot {
        Some(s) => (format::percent(s.value), s.change),
        None => ("—".to_string(), None),
    };
    render_card(
        f,
        cards[0],
        theme,
        "Текущее значение",
        &current_text,
        current_delta,
        theme.accent,
    );

    // Previous month, reconstructed from the delta.
    let previous_text = snapshot
        .and_then(|s| s.change.map(|c| format::percent(s.value - c)))
        .unwrap_or_else(|| "—".to_string());
    render_card(f, cards[1], theme, "Предыдущий месяц", &previous_text, None, theme.muted);

    // Trailing year vs. the year before it.
    let avg = trailing_average(series, 12);
    let avg_delta = match (avg, previous_trailing_average(series, 12)) {
        (Some(a), Some(b)) => Some(a - b),
        _ => None,
    };
    let avg_text = avg.map(format::percent).unwrap_or_else(|| "—".to_string());
    render_card(f, cards[2], theme, "Среднее за год", &avg_text, avg_delta, theme.accent);

    // Next-month forecast vs. the current value.
    let next = loaded.indicator.forecast().and_then(|fc| fc.first().copied());
    let (forecast_text, forecast_delta) = match (next, snapshot) {
        (Some(p), Some(s)) => (format::percent(p.value), Some(p.value - s.value)),
        (Some(p), None) => (format::percent(p.value), None),
        _ => ("—".to_string(), None),
    };
    render_card(
        f,
        cards[3],
        theme,
        "Прогноз (след. месяц)",
        &forecast_text,
        forecast_delta,
        theme.forecast,
    );
}

fn render_card(
    f: &mut Frame,
    area: Rect,
    theme: &Theme,
    label: &str,
    value: &str,
    delta: Option<f64>,
    accent: ratatui::style::Color,
) {
    let mut lines = vec![Line::from(Span::styled(
        value.to_string(),
        Style::default().fg(accent).add_modifier(Modifier::BOLD),
    ))];
    if delta.is_some() {
        lines.push(Line::from(Span::styled(
            format::change(delta),
            Style::default().fg(theme.change_color(delta)),
        )));
    }

    let block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.muted))
        .title_style(Style::default().fg(theme.text_secondary));

    f.render_widget(Paragraph::new(lines).block(block), area);
}
