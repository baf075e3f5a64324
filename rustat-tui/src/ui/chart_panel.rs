//! Chart panel: historical line, forecast overlay, confidence bounds.
//!
//! The merged sequence from the chart pipeline is plotted over a uniform
//! monthly x-axis (one unit per point); the join point belongs to both the
//! historical and forecast datasets, which is what closes the visual gap.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::symbols;
use ratatui::text::Span;
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, GraphType};
use ratatui::Frame;

use rustat_core::view::ChartPoint;

use crate::app::AppState;
use crate::format;
use crate::theme::Theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState, theme: &Theme) {
    let points = app.chart();
    let title = title_for(app);

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent));

    if points.is_empty() {
        f.render_widget(block, area);
        return;
    }

    let historical: Vec<(f64, f64)> = extract(&points, |p| p.value);
    let forecast: Vec<(f64, f64)> = extract(&points, |p| p.forecast);
    let lower: Vec<(f64, f64)> = extract(&points, |p| p.lower);
    let upper: Vec<(f64, f64)> = extract(&points, |p| p.upper);

    let x_max = (points.len() - 1) as f64;
    let (y_lower, y_upper) = y_bounds(&points);

    // Dashed 100% baseline across the full width.
    let baseline: Vec<(f64, f64)> = (0..points.len())
        .step_by(2)
        .map(|i| (i as f64, 100.0))
        .collect();

    let mut datasets = Vec::new();
    if y_lower <= 100.0 && 100.0 <= y_upper {
        datasets.push(
            Dataset::default()
                .marker(symbols::Marker::Dot)
                .graph_type(GraphType::Scatter)
                .style(Style::default().fg(theme.muted))
                .data(&baseline),
        );
    }
    datasets.push(
        Dataset::default()
            .name("Фактические данные")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(theme.accent))
            .data(&historical),
    );
    if !forecast.is_empty() {
        datasets.push(
            Dataset::default()
                .marker(symbols::Marker::Dot)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(theme.muted))
                .data(&lower),
        );
        datasets.push(
            Dataset::default()
                .marker(symbols::Marker::Dot)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(theme.muted))
                .data(&upper),
        );
        datasets.push(
            Dataset::default()
                .name("Прогноз SARIMA")
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(theme.forecast))
                .data(&forecast),
        );
    }

    let x_labels = x_axis_labels(&points);
    let y_labels = vec![
        Span::raw(format!("{y_lower:.1}")),
        Span::raw(format!("{:.1}", (y_lower + y_upper) / 2.0)),
        Span::raw(format!("{y_upper:.1}")),
    ];

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .style(Style::default().fg(theme.muted))
                .bounds([0.0, x_max.max(1.0)])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title(Span::styled("%", Style::default().fg(theme.text_secondary)))
                .style(Style::default().fg(theme.muted))
                .bounds([y_lower, y_upper])
                .labels(y_labels),
        );

    f.render_widget(chart, area);
}

fn title_for(app: &AppState) -> String {
    let name = app
        .current()
        .map(|l| l.indicator.name.as_str())
        .unwrap_or("Нет данных");
    let overlay = if app.show_forecast { "вкл" } else { "выкл" };
    format!(
        " {name} | {} | Прогноз: {overlay} ",
        format::window_label(app.window)
    )
}

fn extract(points: &[ChartPoint], field: impl Fn(&ChartPoint) -> Option<f64>) -> Vec<(f64, f64)> {
    points
        .iter()
        .enumerate()
        .filter_map(|(i, p)| field(p).map(|v| (i as f64, v)))
        .collect()
}

/// Min/max over every plotted value with 5% padding.
fn y_bounds(points: &[ChartPoint]) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for p in points {
        for v in [p.value, p.forecast, p.lower, p.upper].into_iter().flatten() {
            min = min.min(v);
            max = max.max(v);
        }
    }
    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }
    let range = max - min;
    let pad = if range > 0.0 { range * 0.05 } else { 1.0 };
    (min - pad, max + pad)
}

fn x_axis_labels(points: &[ChartPoint]) -> Vec<Span<'static>> {
    let first = points[0].date;
    let mid = points[points.len() / 2].date;
    let last = points[points.len() - 1].date;
    vec![
        Span::raw(format::month_short(first)),
        Span::raw(format::month_short(mid)),
        Span::raw(format::month_short(last)),
    ]
}
