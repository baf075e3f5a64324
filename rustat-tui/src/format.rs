//! Russian-locale formatting for dates, percents, and deltas.
//!
//! All rounding happens here, at the presentation boundary; the pipelines
//! hand over full-precision values.

use chrono::{Datelike, NaiveDate};
use rustat_core::view::Window;

const MONTHS_NOMINATIVE: [&str; 12] = [
    "Январь",
    "Февраль",
    "Март",
    "Апрель",
    "Май",
    "Июнь",
    "Июль",
    "Август",
    "Сентябрь",
    "Октябрь",
    "Ноябрь",
    "Декабрь",
];

const MONTHS_SHORT: [&str; 12] = [
    "янв", "фев", "мар", "апр", "май", "июн", "июл", "авг", "сен", "окт", "ноя", "дек",
];

/// "Март 2024" — table and forecast rows.
pub fn month_long(date: NaiveDate) -> String {
    format!("{} {}", MONTHS_NOMINATIVE[date.month0() as usize], date.year())
}

/// "мар 24" — chart axis labels.
pub fn month_short(date: NaiveDate) -> String {
    format!("{} {:02}", MONTHS_SHORT[date.month0() as usize], date.year() % 100)
}

/// "100.86%" — two decimals, the dashboard convention.
pub fn percent(value: f64) -> String {
    format!("{value:.2}%")
}

/// "↑ 0.30%" / "↓ 0.18%" / "→ 0.00%" / "—" for an absent delta.
pub fn change(change: Option<f64>) -> String {
    match change {
        Some(c) if c > 0.0 => format!("↑ {:.2}%", c.abs()),
        Some(c) if c < 0.0 => format!("↓ {:.2}%", c.abs()),
        Some(_) => "→ 0.00%".to_string(),
        None => "—".to_string(),
    }
}

/// Period-selector label for a chart window.
pub fn window_label(window: Window) -> &'static str {
    match window {
        Window::OneYear => "1 год",
        Window::FiveYears => "5 лет",
        Window::TenYears => "10 лет",
        Window::All => "Все данные",
    }
}

/// Index-level reading relative to the 100% baseline.
pub fn interpretation(value: f64) -> &'static str {
    if value > 100.0 {
        "Рост цен"
    } else if value < 100.0 {
        "Снижение цен"
    } else {
        "Стабильно"
    }
}
