//! Color tokens for the RuStat dashboard.
//!
//! Dark terminal palette, two series roles:
//! - **Accent**: indigo — the historical line, focus highlights
//! - **Forecast**: magenta — the SARIMA overlay and its bounds
//! plus the usual positive/negative/muted/text roles.

use ratatui::style::Color;

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Near-black background (primary surface)
    pub background: Color,
    /// Indigo accent (historical series, focus)
    pub accent: Color,
    /// Magenta (forecast overlay, confidence bounds)
    pub forecast: Color,
    /// Green (values rising month-over-month)
    pub positive: Color,
    /// Red (values falling month-over-month)
    pub negative: Color,
    /// Amber (warnings, sample-data notices)
    pub warning: Color,
    /// Slate blue (secondary info, disabled, axis labels)
    pub muted: Color,
    /// White (primary text)
    pub text_primary: Color,
    /// Light gray (secondary text)
    pub text_secondary: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::indigo_dark()
    }
}

impl Theme {
    /// Default dark palette.
    pub fn indigo_dark() -> Self {
        Self {
            background: Color::Rgb(15, 23, 42),

            // Accent: indigo
            accent: Color::Rgb(102, 126, 234),

            // Forecast: deep magenta
            forecast: Color::Rgb(162, 59, 114),

            positive: Color::Rgb(34, 197, 94),
            negative: Color::Rgb(239, 68, 68),
            warning: Color::Rgb(245, 158, 11),
            muted: Color::Rgb(100, 116, 139),

            text_primary: Color::White,
            text_secondary: Color::Rgb(170, 178, 189),
        }
    }

    /// Color for a month-over-month delta (green up, red down, muted flat).
    pub fn change_color(&self, change: Option<f64>) -> Color {
        match change {
            Some(c) if c > 0.0 => self.positive,
            Some(c) if c < 0.0 => self.negative,
            Some(_) => self.muted,
            None => self.muted,
        }
    }

    /// Color for an index level relative to the 100% baseline.
    pub fn interpretation_color(&self, value: f64) -> Color {
        if value > 100.0 {
            self.negative // prices rising
        } else if value < 100.0 {
            self.positive // prices falling
        } else {
            self.muted
        }
    }
}
