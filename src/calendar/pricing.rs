//! Nightly price aggregation.
//!
//! Prices a stay by enumerating every night in the half-open interval
//! `[check_in, check_out)` (the last night is the day before check-out).
//! Each night uses the room's daily override when one exists, otherwise
//! the resource's default nightly rate. Override lookup is an O(1) read
//! of the pre-built (room, date) map.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::Resource;

use super::CalendarIndex;

/// The price of a single night within a quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NightCharge {
    /// The night being charged (the date the guest sleeps over).
    pub date: NaiveDate,
    /// The rate charged for that night.
    pub rate: Decimal,
    /// Whether a daily override supplied the rate.
    pub overridden: bool,
}

/// The priced result of a candidate stay.
///
/// # Example
///
/// ```
/// use booking_engine::calendar::{CalendarIndex, quote_stay};
/// use booking_engine::models::{Resource, RoomKind};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let resource = Resource {
///     room_id: 1,
///     bed_id: None,
///     default_nightly_rate: Decimal::from_str("100.00").unwrap(),
///     kind: RoomKind::Private,
/// };
/// let index = CalendarIndex::build(&[], &[], &[]);
/// let quote = quote_stay(
///     &resource,
///     NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
///     &index,
/// );
/// assert_eq!(quote.total, Decimal::from_str("200.00").unwrap());
/// assert_eq!(quote.nights.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StayQuote {
    /// Total price of the stay, at two-decimal precision.
    pub total: Decimal,
    /// Per-night breakdown, in calendar order.
    pub nights: Vec<NightCharge>,
}

impl StayQuote {
    /// An empty quote: zero total, no nights.
    fn empty() -> Self {
        StayQuote {
            total: Decimal::ZERO,
            nights: Vec::new(),
        }
    }
}

/// Computes the total price for a candidate stay on a resource.
///
/// # Arguments
///
/// * `resource` - The booked resource, carrying its default nightly rate
/// * `check_in` - Check-in date (inclusive)
/// * `check_out` - Check-out date (exclusive)
/// * `index` - The pre-indexed snapshot holding daily rate overrides
///
/// # Returns
///
/// A [`StayQuote`] with the per-night breakdown and the total rounded to
/// two decimals. A zero-night or inverted interval yields a zero total
/// with no nights. Dorm beds price through their parent room's overrides,
/// so every bed in a dorm shares the same nightly price.
pub fn quote_stay(
    resource: &Resource,
    check_in: NaiveDate,
    check_out: NaiveDate,
    index: &CalendarIndex,
) -> StayQuote {
    if check_out <= check_in {
        return StayQuote::empty();
    }

    let mut nights = Vec::with_capacity((check_out - check_in).num_days().max(0) as usize);
    let mut total = Decimal::ZERO;

    for night in check_in.iter_days().take_while(|d| *d < check_out) {
        let override_rate = index.override_for(resource.room_id, night);
        let rate = override_rate.unwrap_or(resource.default_nightly_rate);
        total += rate;
        nights.push(NightCharge {
            date: night,
            rate,
            overridden: override_rate.is_some(),
        });
    }

    StayQuote {
        total: total.round_dp(2),
        nights,
    }
}
