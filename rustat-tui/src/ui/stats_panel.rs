//! Statistics panel: series extremes plus the per-year aggregate table.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

use rustat_core::stats::{yearly_stats, YearlyStats};

use crate::app::AppState;
use crate::format;
use crate::theme::Theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState, theme: &Theme) {
    let [left, right] =
        Layout::horizontal([Constraint::Length(36), Constraint::Min(40)]).areas(area);

    render_summary(f, left, app, theme);
    render_yearly(f, right, app, theme);
}

fn render_summary(f: &mut Frame, area: Rect, app: &AppState, theme: &Theme) {
    let block = Block::default()
        .title(" Статистика ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.muted));

    let mut lines: Vec<Line> = Vec::new();
    if let Some(stats) = app.current().and_then(|l| l.indicator.summary_stats()) {
        lines.push(Line::from(vec![
            Span::styled("Максимум  ", Style::default().fg(theme.text_secondary)),
            Span::styled(
                format::percent(stats.highest.value),
                Style::default().fg(theme.negative).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", format::month_long(stats.highest.date)),
                Style::default().fg(theme.muted),
            ),
        ]));
        lines.push(Line::from(vec![
            Span::styled("Минимум   ", Style::default().fg(theme.text_secondary)),
            Span::styled(
                format::percent(stats.lowest.value),
                Style::default().fg(theme.positive).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", format::month_long(stats.lowest.date)),
                Style::default().fg(theme.muted),
            ),
        ]));
        lines.push(Line::from(vec![
            Span::styled("Среднее   ", Style::default().fg(theme.text_secondary)),
            Span::styled(
                format::percent(stats.average),
                Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
            ),
        ]));
    } else {
        lines.push(Line::from(Span::styled(
            "Нет данных",
            Style::default().fg(theme.muted),
        )));
    }

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_yearly(f: &mut Frame, area: Rect, app: &AppState, theme: &Theme) {
    let block = Block::default()
        .title(" По годам ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.muted));

    let Some(series) = app.current().map(|l| &l.indicator.data) else {
        f.render_widget(block, area);
        return;
    };

    // Newest years first; show as many as fit the panel.
    let mut stats = yearly_stats(series);
    stats.reverse();
    let visible = area.height.saturating_sub(4) as usize;
    stats.truncate(visible.max(1));

    let header = Row::new(["Год", "Среднее", "Ст. откл.", "Мин", "Макс"])
        .style(Style::default().fg(theme.text_secondary).add_modifier(Modifier::BOLD))
        .bottom_margin(1);

    let rows: Vec<Row> = stats.iter().map(|y| yearly_row(y, theme)).collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(6),
            Constraint::Length(9),
            Constraint::Length(10),
            Constraint::Length(9),
            Constraint::Length(9),
        ],
    )
    .header(header)
    .block(block);

    f.render_widget(table, area);
}

fn yearly_row<'a>(y: &YearlyStats, theme: &Theme) -> Row<'a> {
    Row::new(vec![
        Cell::from(y.year.to_string()).style(Style::default().fg(theme.text_primary)),
        Cell::from(format!("{:.2}", y.mean)).style(Style::default().fg(theme.accent)),
        Cell::from(format!("{:.2}", y.std_dev)).style(Style::default().fg(theme.muted)),
        Cell::from(format!("{:.2}", y.min)).style(Style::default().fg(theme.positive)),
        Cell::from(format!("{:.2}", y.max)).style(Style::default().fg(theme.negative)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample_data::sample_catalog;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use rustat_core::view::Window;

    fn render_to_text(app: &AppState) -> String {
        let theme = Theme::default();
        let backend = TestBackend::new(100, 16);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render(f, f.area(), app, &theme)).unwrap();

        let buffer = terminal.backend().buffer().clone();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer.cell((x, y)).unwrap().symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn shows_extremes_and_recent_years() {
        let app = AppState::new(sample_catalog(), Window::FiveYears, true);
        let text = render_to_text(&app);
        assert!(text.contains("Максимум"));
        assert!(text.contains("2025")); // newest year leads the table
    }

    #[test]
    fn renders_empty_catalog_without_panic() {
        let app = AppState::new(Vec::new(), Window::All, false);
        let text = render_to_text(&app);
        assert!(text.contains("Нет данных"));
    }
}
