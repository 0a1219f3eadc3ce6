//! Per-night occupancy summary.
//!
//! Counts, for every night in the visible window, how many bookable
//! resources are occupied by a stay and how many are blocked by a date
//! lock. Cancelled reservations contribute to no night, exactly as in
//! conflict checks.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{Resource, VisibleWindow};

use super::conflict::intervals_overlap;
use super::CalendarIndex;

/// Occupancy counts for a single night.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NightOccupancy {
    /// The night being counted.
    pub date: NaiveDate,
    /// Resources occupied by a non-cancelled reservation.
    pub occupied: u32,
    /// Resources blocked by a date lock. A resource that is both booked
    /// and locked counts once in each column.
    pub locked: u32,
    /// Number of bookable resources considered.
    pub capacity: u32,
}

/// Summarises per-night occupancy over a window.
///
/// # Arguments
///
/// * `resources` - The bookable units to count (typically
///   [`crate::config::PropertyConfig::bookable_resources`])
/// * `index` - The pre-indexed calendar snapshot
/// * `window` - The nights to summarise
///
/// # Returns
///
/// One [`NightOccupancy`] per night in the window, in calendar order.
///
/// # Example
///
/// ```
/// use booking_engine::calendar::{occupancy_for_window, CalendarIndex};
/// use booking_engine::models::VisibleWindow;
/// use chrono::NaiveDate;
///
/// let index = CalendarIndex::build(&[], &[], &[]);
/// let window = VisibleWindow {
///     start: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
///     days: 7,
/// };
/// let nights = occupancy_for_window(&[], &index, &window);
/// assert_eq!(nights.len(), 7);
/// assert!(nights.iter().all(|n| n.occupied == 0));
/// ```
pub fn occupancy_for_window(
    resources: &[Resource],
    index: &CalendarIndex,
    window: &VisibleWindow,
) -> Vec<NightOccupancy> {
    let capacity = resources.len() as u32;

    window
        .iter_dates()
        .map(|night| {
            let night_end = night.succ_opt().unwrap_or(NaiveDate::MAX);
            let mut occupied = 0;
            let mut locked = 0;

            for resource in resources {
                let key = resource.key();
                if index
                    .reservations_for(key)
                    .iter()
                    .any(|r| intervals_overlap(night, night_end, r.check_in, r.check_out))
                {
                    occupied += 1;
                }
                if index
                    .locks_for(key)
                    .iter()
                    .any(|l| intervals_overlap(night, night_end, l.start_date, l.comparison_end()))
                {
                    locked += 1;
                }
            }

            NightOccupancy {
                date: night,
                occupied,
                locked,
                capacity,
            }
        })
        .collect()
}
