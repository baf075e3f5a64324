//! Application state: the loaded catalog plus externally-owned view
//! parameters.
//!
//! The derived table/chart structures are *not* stored here — every draw
//! recomputes them through the pure pipelines, so the UI can never render a
//! view that disagrees with the current parameters.

use rustat_core::data::LoadedIndicator;
use rustat_core::domain::{ForecastSeries, Series};
use rustat_core::view::{
    available_years, chart_series, table_view, ChartPoint, TableView, Window, YearFilter,
};

/// Which panel occupies the lower half of the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Table,
    Forecast,
    Stats,
}

impl Panel {
    pub fn next(&self) -> Panel {
        match self {
            Panel::Table => Panel::Forecast,
            Panel::Forecast => Panel::Stats,
            Panel::Stats => Panel::Table,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Panel::Table => "Исторические данные",
            Panel::Forecast => "Прогноз SARIMA",
            Panel::Stats => "Статистика по годам",
        }
    }
}

pub struct AppState {
    pub indicators: Vec<LoadedIndicator>,
    pub selected: usize,
    pub panel: Panel,

    // View parameters, re-fed into the pipelines on every draw.
    pub page: usize,
    pub year_filter: YearFilter,
    pub window: Window,
    pub show_forecast: bool,

    pub status: String,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(indicators: Vec<LoadedIndicator>, window: Window, show_forecast: bool) -> Self {
        Self {
            indicators,
            selected: 0,
            panel: Panel::Table,
            page: 1,
            year_filter: YearFilter::All,
            window,
            show_forecast,
            status: String::new(),
            should_quit: false,
        }
    }

    pub fn current(&self) -> Option<&LoadedIndicator> {
        self.indicators.get(self.selected)
    }

    fn series(&self) -> Option<&Series> {
        self.current().map(|l| &l.indicator.data)
    }

    fn forecast(&self) -> Option<&ForecastSeries> {
        self.current().and_then(|l| l.indicator.forecast())
    }

    /// Current table page through the pure pipeline.
    pub fn table(&self) -> TableView {
        match self.series() {
            Some(series) => table_view(series, self.year_filter, self.page),
            None => TableView {
                rows: Vec::new(),
                total_filtered: 0,
                total_pages: 0,
            },
        }
    }

    /// Current chart sequence through the pure pipeline.
    pub fn chart(&self) -> Vec<ChartPoint> {
        match self.series() {
            Some(series) => chart_series(series, self.forecast(), self.window, self.show_forecast),
            None => Vec::new(),
        }
    }

    pub fn years(&self) -> Vec<i32> {
        self.series().map(available_years).unwrap_or_default()
    }

    // ── Paging ───────────────────────────────────────────────────────

    fn last_page(&self) -> usize {
        self.table().total_pages.max(1)
    }

    pub fn next_page(&mut self) {
        self.page = (self.page + 1).min(self.last_page());
    }

    pub fn prev_page(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }

    pub fn first_page(&mut self) {
        self.page = 1;
    }

    pub fn go_last_page(&mut self) {
        self.page = self.last_page();
    }

    // ── Filters ──────────────────────────────────────────────────────

    /// All -> newest year -> ... -> oldest year -> All. Resets to page 1,
    /// as changing the filter invalidates the page position.
    pub fn cycle_year_filter(&mut self) {
        let years = self.years();
        self.year_filter = match self.year_filter {
            YearFilter::All => match years.first() {
                Some(&y) => YearFilter::Year(y),
                None => YearFilter::All,
            },
            YearFilter::Year(current) => {
                match years.iter().position(|&y| y == current) {
                    Some(i) if i + 1 < years.len() => YearFilter::Year(years[i + 1]),
                    _ => YearFilter::All,
                }
            }
        };
        self.page = 1;
    }

    pub fn cycle_window(&mut self) {
        self.window = self.window.next();
    }

    pub fn toggle_forecast(&mut self) {
        self.show_forecast = !self.show_forecast;
    }

    // ── Catalog navigation ───────────────────────────────────────────

    pub fn next_indicator(&mut self) {
        if self.selected + 1 < self.indicators.len() {
            self.selected += 1;
            self.reset_view();
        }
    }

    pub fn prev_indicator(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
            self.reset_view();
        }
    }

    fn reset_view(&mut self) {
        self.page = 1;
        self.year_filter = YearFilter::All;
    }

    pub fn next_panel(&mut self) {
        self.panel = self.panel.next();
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status = msg.into();
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample_data::sample_catalog;

    fn app() -> AppState {
        AppState::new(sample_catalog(), Window::FiveYears, true)
    }

    #[test]
    fn paging_clamps_at_both_ends() {
        let mut app = app();
        let last = app.table().total_pages;
        assert!(last > 1);

        app.prev_page();
        assert_eq!(app.page, 1);

        for _ in 0..last + 10 {
            app.next_page();
        }
        assert_eq!(app.page, last);

        app.first_page();
        assert_eq!(app.page, 1);
        app.go_last_page();
        assert_eq!(app.page, last);
    }

    #[test]
    fn year_cycle_walks_years_then_returns_to_all() {
        let mut app = app();
        let years = app.years();

        app.cycle_year_filter();
        assert_eq!(app.year_filter, YearFilter::Year(years[0]));

        for &y in &years[1..] {
            app.cycle_year_filter();
            assert_eq!(app.year_filter, YearFilter::Year(y));
        }

        app.cycle_year_filter();
        assert_eq!(app.year_filter, YearFilter::All);
    }

    #[test]
    fn year_cycle_resets_page() {
        let mut app = app();
        app.next_page();
        assert_eq!(app.page, 2);
        app.cycle_year_filter();
        assert_eq!(app.page, 1);
    }

    #[test]
    fn forecast_toggle_drives_chart_contents() {
        let mut app = app();
        assert!(app.chart().iter().any(|p| p.forecast.is_some()));

        app.toggle_forecast();
        assert!(app.chart().iter().all(|p| p.forecast.is_none()));
    }

    #[test]
    fn window_cycle_covers_all_windows() {
        let mut app = app();
        let start = app.window;
        let mut seen = vec![start];
        for _ in 0..3 {
            app.cycle_window();
            seen.push(app.window);
        }
        app.cycle_window();
        assert_eq!(app.window, start);
        seen.dedup();
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn empty_catalog_produces_empty_views() {
        let app = AppState::new(Vec::new(), Window::All, true);
        assert!(app.current().is_none());
        assert!(app.table().rows.is_empty());
        assert!(app.chart().is_empty());
        assert!(app.years().is_empty());
    }

    #[test]
    fn panel_cycle() {
        let mut app = app();
        assert_eq!(app.panel, Panel::Table);
        app.next_panel();
        assert_eq!(app.panel, Panel::Forecast);
        app.next_panel();
        assert_eq!(app.panel, Panel::Stats);
        app.next_panel();
        assert_eq!(app.panel, Panel::Table);
    }
}
