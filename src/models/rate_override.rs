//! Daily rate override model.
//!
//! An override maps a (room, date) pair to a price that supersedes the
//! resource's default nightly rate for that single night. At most one
//! override exists per room per date; writes are upserts on that key.
//! Dorm beds price through their parent room's overrides.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A per-night price for a room on a specific date.
///
/// # Example
///
/// ```
/// use booking_engine::models::DailyRateOverride;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let override_rate = DailyRateOverride {
///     room_id: 2,
///     date: NaiveDate::from_ymd_opt(2024, 6, 2).unwrap(),
///     price: Decimal::from_str("150.00").unwrap(),
/// };
/// assert_eq!(override_rate.price, Decimal::from_str("150.00").unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRateOverride {
    /// The room the override applies to.
    pub room_id: i64,
    /// The single night the override prices.
    pub date: NaiveDate,
    /// The price for that night.
    pub price: Decimal,
}
