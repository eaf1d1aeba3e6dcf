use chrono::{DateTime, Datelike, Duration, TimeZone};

use crate::reading::Reading;

/// Relative range selected in the history view. Transient UI state, never
/// persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeWindow {
    #[default]
    Day,
    Week,
    Month,
    All,
}

impl TimeWindow {
    pub const ALL_WINDOWS: [TimeWindow; 4] = [
        TimeWindow::Day,
        TimeWindow::Week,
        TimeWindow::Month,
        TimeWindow::All,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeWindow::Day => "day",
            TimeWindow::Week => "week",
            TimeWindow::Month => "month",
            TimeWindow::All => "all",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeWindow::Day => "Today",
            TimeWindow::Week => "Last 7 Days",
            TimeWindow::Month => "This Month",
            TimeWindow::All => "All Data",
        }
    }
}

impl From<&str> for TimeWindow {
    // unrecognized selector values leave the data unfiltered
    fn from(s: &str) -> Self {
        match s {
            "day" => TimeWindow::Day,
            "week" => TimeWindow::Week,
            "month" => TimeWindow::Month,
            _ => TimeWindow::All,
        }
    }
}

/// Keeps the readings falling inside `window` relative to `now`. Date
/// boundaries (`Day`, `Month`) are evaluated in `now`'s timezone.
pub fn filter_by_window<Tz: TimeZone>(
    readings: &[Reading],
    window: TimeWindow,
    now: &DateTime<Tz>,
) -> Vec<Reading> {
    match window {
        TimeWindow::Day => {
            let today = now.date_naive();
            readings
                .iter()
                .filter(|r| r.timestamp.with_timezone(&now.timezone()).date_naive() == today)
                .cloned()
                .collect()
        }
        TimeWindow::Week => {
            // rolling window; the cutoff is fixed once, the predicate must not move it
            let cutoff = now.clone() - Duration::days(7);
            readings
                .iter()
                .filter(|r| r.timestamp >= cutoff)
                .cloned()
                .collect()
        }
        TimeWindow::Month => {
            let (year, month) = (now.year(), now.month());
            readings
                .iter()
                .filter(|r| {
                    let ts = r.timestamp.with_timezone(&now.timezone());
                    ts.year() == year && ts.month() == month
                })
                .cloned()
                .collect()
        }
        TimeWindow::All => readings.to_vec(),
    }
}
