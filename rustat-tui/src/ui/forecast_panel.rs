//! Forecast table: month, point forecast, 95% bounds, interpretation.

use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

use crate::app::AppState;
use crate::format;
use crate::theme::Theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState, theme: &Theme) {
    let block = Block::default()
        .title(" Прогноз SARIMA на 12 месяцев ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.forecast));

    let Some(forecast) = app.current().and_then(|l| l.indicator.forecast()) else {
        let msg = Paragraph::new("Прогноз для этого индикатора недоступен")
            .style(Style::default().fg(theme.muted))
            .block(block);
        f.render_widget(msg, area);
        return;
    };

    let header = Row::new(["Месяц", "Прогноз", "Нижняя (95%)", "Верхняя (95%)", "Оценка"])
        .style(Style::default().fg(theme.text_secondary).add_modifier(Modifier::BOLD))
        .bottom_margin(1);

    let rows: Vec<Row> = forecast
        .iter()
        .map(|p| {
            Row::new(vec![
                Cell::from(format::month_long(p.date))
                    .style(Style::default().fg(theme.text_primary)),
                Cell::from(format::percent(p.value))
                    .style(Style::default().fg(theme.forecast).add_modifier(Modifier::BOLD)),
                Cell::from(format::percent(p.lower)).style(Style::default().fg(theme.muted)),
                Cell::from(format::percent(p.upper)).style(Style::default().fg(theme.muted)),
                Cell::from(format::interpretation(p.value))
                    .style(Style::default().fg(theme.interpretation_color(p.value))),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(18),
            Constraint::Length(10),
            Constraint::Length(14),
            Constraint::Length(14),
            Constraint::Length(16),
        ],
    )
    .header(header)
    .block(block);

    f.render_widget(table, area);
}
