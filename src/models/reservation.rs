//! Reservation model and lifecycle status.
//!
//! A reservation occupies a resource for the half-open date interval
//! `[check_in, check_out)`. The check-out day itself is reusable: a new
//! stay may check in on the day a previous guest checks out.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};

use super::ResourceKey;

/// Lifecycle status of a reservation.
///
/// Transitions are driven by the booking workflow outside this engine
/// (confirmed → checked-in → checked-out, or cancelled/no-show from any
/// non-terminal state). The engine only needs to know that a cancelled
/// reservation no longer blocks the calendar.
///
/// # Example
///
/// ```
/// use booking_engine::models::ReservationStatus;
///
/// assert!(ReservationStatus::Confirmed.blocks_calendar());
/// assert!(!ReservationStatus::Cancelled.blocks_calendar());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatus {
    /// Booked and expected to arrive.
    Confirmed,
    /// The guest has arrived.
    CheckedIn,
    /// The stay is complete.
    CheckedOut,
    /// The booking was cancelled; the dates are free again.
    Cancelled,
    /// The guest never arrived.
    NoShow,
}

impl ReservationStatus {
    /// Whether a reservation in this status participates in conflict
    /// checks and occupancy. Only cancellation frees the dates.
    pub fn blocks_calendar(self) -> bool {
        !matches!(self, ReservationStatus::Cancelled)
    }

    /// Whether this status is terminal (no further transitions expected).
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            ReservationStatus::CheckedOut | ReservationStatus::Cancelled | ReservationStatus::NoShow
        )
    }
}

impl std::fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReservationStatus::Confirmed => write!(f, "confirmed"),
            ReservationStatus::CheckedIn => write!(f, "checked_in"),
            ReservationStatus::CheckedOut => write!(f, "checked_out"),
            ReservationStatus::Cancelled => write!(f, "cancelled"),
            ReservationStatus::NoShow => write!(f, "no_show"),
        }
    }
}

/// A guest booking for a resource over a date interval.
///
/// A set `bed_id` means a dorm bed booking; `bed_id: None` with a room id
/// means a private-room booking. `paid_amount` may transiently exceed
/// `total_amount` when an edit shortens a stay after payment; that overage
/// is flagged by payment reconciliation, never blocked here.
///
/// # Example
///
/// ```
/// use booking_engine::models::{Reservation, ReservationStatus};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
/// use uuid::Uuid;
///
/// let reservation = Reservation {
///     id: Uuid::new_v4(),
///     room_id: 2,
///     bed_id: Some(203),
///     check_in: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
///     check_out: NaiveDate::from_ymd_opt(2024, 6, 5).unwrap(),
///     status: ReservationStatus::Confirmed,
///     total_amount: Decimal::from_str("114.00").unwrap(),
///     paid_amount: Decimal::from_str("50.00").unwrap(),
///     guest_name: "Ana Costa".to_string(),
/// };
/// assert_eq!(reservation.nights(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    /// Unique identifier for the reservation.
    pub id: Uuid,
    /// The room the stay is in.
    pub room_id: i64,
    /// The booked bed for dorm stays; `None` for private-room stays.
    pub bed_id: Option<i64>,
    /// Check-in date (inclusive).
    pub check_in: NaiveDate,
    /// Check-out date (exclusive — the last night is the day before).
    pub check_out: NaiveDate,
    /// Lifecycle status.
    pub status: ReservationStatus,
    /// Total price of the stay.
    pub total_amount: Decimal,
    /// Amount the guest has paid so far.
    pub paid_amount: Decimal,
    /// Display name for conflict messages and calendar bars.
    pub guest_name: String,
}

impl Reservation {
    /// Returns the calendar key for the booked resource.
    pub fn resource_key(&self) -> ResourceKey {
        ResourceKey::from_parts(self.room_id, self.bed_id)
    }

    /// Returns the number of nights in the stay.
    ///
    /// An inverted interval yields zero rather than a negative count; such
    /// records are rejected by [`Reservation::validate`] before they reach
    /// the calendar.
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days().max(0)
    }

    /// Validates the record before it is written to the record store.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidReservation`] when `check_out` is not
    /// after `check_in` or when a monetary amount is negative. Overpayment
    /// (`paid_amount > total_amount`) is allowed; it is surfaced by payment
    /// reconciliation instead.
    pub fn validate(&self) -> EngineResult<()> {
        if self.check_out <= self.check_in {
            return Err(EngineError::InvalidReservation {
                reservation_id: self.id,
                message: format!(
                    "check-out {} is not after check-in {}",
                    self.check_out, self.check_in
                ),
            });
        }
        if self.total_amount.is_sign_negative() {
            return Err(EngineError::InvalidReservation {
                reservation_id: self.id,
                message: format!("total amount {} is negative", self.total_amount),
            });
        }
        if self.paid_amount.is_sign_negative() {
            return Err(EngineError::InvalidReservation {
                reservation_id: self.id,
                message: format!("paid amount {} is negative", self.paid_amount),
            });
        }
        Ok(())
    }
}
