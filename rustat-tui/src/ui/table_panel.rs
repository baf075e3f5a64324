//! Data table panel: paginated, year-filtered rows with delta glyphs.

use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Row, Table};
use ratatui::Frame;

use rustat_core::view::YearFilter;

use crate::app::AppState;
use crate::format;
use crate::theme::Theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState, theme: &Theme) {
    let view = app.table();

    let year_label = match app.year_filter {
        YearFilter::All => "Все годы".to_string(),
        YearFilter::Year(y) => y.to_string(),
    };
    let title = format!(
        " Исторические данные | {year_label} | Страница {} из {} | Показано {} из {} ",
        app.page.min(view.total_pages.max(1)),
        view.total_pages.max(1),
        view.rows.len(),
        view.total_filtered,
    );

    let header = Row::new(["Дата", "Значение", "Изменение"])
        .style(Style::default().fg(theme.text_secondary).add_modifier(Modifier::BOLD))
        .bottom_margin(1);

    let rows: Vec<Row> = view
        .rows
        .iter()
        .map(|r| {
            Row::new(vec![
                Cell::from(format::month_long(r.date))
                    .style(Style::default().fg(theme.text_primary)),
                Cell::from(format::percent(r.value))
                    .style(Style::default().fg(theme.accent)),
                Cell::from(format::change(r.change))
                    .style(Style::default().fg(theme.change_color(r.change))),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(18),
            Constraint::Length(12),
            Constraint::Length(14),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.muted)),
    );

    f.render_widget(table, area);
}
