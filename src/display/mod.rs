//! Terminal presentation of cost reports
//!
//! Renders the device list, the monthly total and a share-of-total bar chart.
//! All figures come from the [`CostReport`]; this module only formats them.
//! Colours depend on the [`Theme`], which the estimator never sees.

use crate::core::{CostReport, Error, Result};
use crate::i18n::I18n;
use crate::registry::Presenter;
use std::fmt::Write as _;
use std::str::FromStr;

/// Width of a full chart bar in cells
const BAR_WIDTH: usize = 24;

/// Chart slice colours, cycled when there are more devices than entries
const PALETTE: [(u8, u8, u8); 7] = [
    (0x2E, 0x7D, 0x32),
    (0x4C, 0xAF, 0x50),
    (0x66, 0xBB, 0x6A),
    (0x81, 0xC7, 0x84),
    (0xA5, 0xD6, 0xA7),
    (0xC8, 0xE6, 0xC9),
    (0xE8, 0xF5, 0xE9),
];

/// Colour theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn key(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    fn text_color(self) -> (u8, u8, u8) {
        match self {
            Self::Light => (0x1A, 0x1A, 0x1A),
            Self::Dark => (0xFF, 0xFF, 0xFF),
        }
    }
}

impl FromStr for Theme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(Error::Config(format!("Unknown theme: {}", other))),
        }
    }
}

/// How a report is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub theme: Theme,
    /// Emit 24-bit ANSI colour escapes
    pub color: bool,
}

impl Style {
    pub fn plain() -> Self {
        Self {
            theme: Theme::Light,
            color: false,
        }
    }

    fn paint(&self, (r, g, b): (u8, u8, u8), text: &str) -> String {
        if self.color {
            format!("\x1b[38;2;{};{};{}m{}\x1b[0m", r, g, b, text)
        } else {
            text.to_string()
        }
    }

    fn heading(&self, text: &str) -> String {
        self.paint(self.theme.text_color(), &format!("== {} ==", text))
    }
}

/// Render a full report: device list, total, and chart
pub fn render_report(report: &CostReport, i18n: &I18n, symbol: &str, style: &Style) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", style.heading(&i18n.get("report.devices")));
    if report.is_empty() {
        let _ = writeln!(out, "{}", i18n.get("report.empty"));
        return out;
    }

    for (index, costed) in report.devices.iter().enumerate() {
        let device = &costed.device;
        let daily_hours = device.daily_usage_hours.to_string();
        let hours = i18n.fill("report.daily_hours", &[("hours", daily_hours.as_str())]);
        let _ = writeln!(
            out,
            "{:>2}. {:<24} {:>6.0}W | {:<18} {:>10.2} {}",
            index + 1,
            device.name,
            device.equivalent_wattage,
            hours,
            costed.monthly_cost,
            symbol
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{}: {:.2} {}{}",
        i18n.get("report.total"),
        report.total_cost,
        symbol,
        i18n.get("unit.per_month")
    );
    let _ = writeln!(
        out,
        "{}: {} {}{}",
        i18n.get("report.unit_price"),
        report.unit_price,
        symbol,
        i18n.get("unit.per_kwh")
    );

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", style.heading(&i18n.get("report.chart")));
    out.push_str(&render_chart(report, symbol, style));

    out
}

/// Render the share-of-total chart, one bar per device
pub fn render_chart(report: &CostReport, symbol: &str, style: &Style) -> String {
    let mut out = String::new();

    for (index, slice) in report.chart_slices().iter().enumerate() {
        let filled = ((slice.share * BAR_WIDTH as f64).round() as usize).min(BAR_WIDTH);
        let bar = format!("{}{}", "\u{2588}".repeat(filled), "\u{2591}".repeat(BAR_WIDTH - filled));
        let _ = writeln!(
            out,
            "{:<24} {} {:>5.1}%  {:.2} {}",
            slice.name,
            style.paint(PALETTE[index % PALETTE.len()], &bar),
            slice.share * 100.0,
            slice.cost,
            symbol
        );
    }

    out
}

/// Presenter that prints notices immediately and the latest report on demand
pub struct ConsolePresenter {
    i18n: I18n,
    symbol: String,
    style: Style,
    pending: Option<String>,
}

impl ConsolePresenter {
    pub fn new(i18n: I18n, symbol: &str, style: Style) -> Self {
        Self {
            i18n,
            symbol: symbol.to_string(),
            style,
            pending: None,
        }
    }

    /// Print the most recent report, if one arrived since the last flush
    pub fn flush(&mut self) {
        if let Some(rendered) = self.pending.take() {
            print!("{}", rendered);
        }
    }

    /// The most recent rendered report not yet flushed
    pub fn pending(&self) -> Option<&str> {
        self.pending.as_deref()
    }
}

impl Presenter for ConsolePresenter {
    fn refresh(&mut self, report: &CostReport) {
        self.pending = Some(render_report(report, &self.i18n, &self.symbol, &self.style));
    }

    fn notify(&mut self, message: &str) {
        println!("{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::NormalizedDevice;
    use crate::pricing::compute_costs;

    #[test]
    fn test_empty_report() {
        let i18n = I18n::new("tr");
        let rendered = render_report(&compute_costs(&[], 2.59), &i18n, "TL", &Style::plain());
        assert!(rendered.contains("Hen\u{00FC}z cihaz eklenmedi."));
        assert!(!rendered.contains("Ayl\u{0131}k Tahmini Fatura"));
    }

    #[test]
    fn test_device_lines_and_total() {
        let i18n = I18n::new("tr");
        let report = compute_costs(&[NormalizedDevice::new("Ampul", 18.0, 5.0)], 2.59);
        let rendered = render_report(&report, &i18n, "TL", &Style::plain());

        assert!(rendered.contains("18W"));
        assert!(rendered.contains("G\u{00FC}nl\u{00FC}k 5 Saat"));
        assert!(rendered.contains("6.99 TL"));
        assert!(rendered.contains("Ayl\u{0131}k Tahmini Fatura: 6.99 TL/ay"));
        assert!(!rendered.contains('\x1b'));
    }

    #[test]
    fn test_chart_bars() {
        let report = compute_costs(
            &[
                NormalizedDevice::new("A", 100.0, 1.0),
                NormalizedDevice::new("B", 300.0, 1.0),
            ],
            1.0,
        );
        let chart = render_chart(&report, "TL", &Style::plain());
        let lines: Vec<_> = chart.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].matches('\u{2588}').count(), BAR_WIDTH / 4);
        assert_eq!(lines[1].matches('\u{2588}').count(), BAR_WIDTH * 3 / 4);
        assert!(lines[1].contains("75.0%"));
    }

    #[test]
    fn test_colour_follows_theme() {
        let report = compute_costs(&[NormalizedDevice::new("A", 100.0, 1.0)], 1.0);
        let i18n = I18n::new("en");
        let dark = render_report(&report, &i18n, "TL", &Style { theme: Theme::Dark, color: true });
        let light = render_report(&report, &i18n, "TL", &Style { theme: Theme::Light, color: true });

        assert!(dark.contains("\x1b[38;2;255;255;255m"));
        assert!(light.contains("\x1b[38;2;26;26;26m"));
        assert!(dark.contains("\x1b[38;2;46;125;50m"));
    }

    #[test]
    fn test_theme_parsing() {
        assert_eq!("Dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert!("sepia".parse::<Theme>().is_err());
    }

    #[test]
    fn test_console_presenter_keeps_latest() {
        let mut presenter = ConsolePresenter::new(I18n::new("en"), "TL", Style::plain());
        presenter.refresh(&compute_costs(&[], 2.59));
        presenter.refresh(&compute_costs(&[NormalizedDevice::new("TV", 60.0, 4.0)], 2.59));
        assert!(presenter.pending().unwrap().contains("TV"));
        presenter.flush();
        assert!(presenter.pending().is_none());
    }
}
