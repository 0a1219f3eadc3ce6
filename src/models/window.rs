//! Visible calendar window.
//!
//! The window is the date range the calendar currently renders: a start
//! date plus a fixed day span. It exists only to clip timeline bars; it is
//! never persisted.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// The date range currently rendered by the calendar.
///
/// # Example
///
/// ```
/// use booking_engine::models::VisibleWindow;
/// use chrono::NaiveDate;
///
/// let window = VisibleWindow {
///     start: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
///     days: 30,
/// };
/// assert_eq!(window.end_exclusive(), NaiveDate::from_ymd_opt(2024, 7, 1).unwrap());
/// assert!(window.contains(NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()));
/// assert!(!window.contains(NaiveDate::from_ymd_opt(2024, 7, 1).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibleWindow {
    /// First rendered date.
    pub start: NaiveDate,
    /// Number of rendered days.
    pub days: u32,
}

impl VisibleWindow {
    /// Returns the first date after the window, saturating at the
    /// calendar maximum.
    pub fn end_exclusive(&self) -> NaiveDate {
        self.start
            .checked_add_days(Days::new(u64::from(self.days)))
            .unwrap_or(NaiveDate::MAX)
    }

    /// Whether the given date falls inside the window.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date < self.end_exclusive()
    }

    /// Iterates over every date in the window, in order.
    pub fn iter_dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        let end = self.end_exclusive();
        self.start.iter_days().take_while(move |d| *d < end)
    }
}
