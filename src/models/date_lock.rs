//! Date lock model.
//!
//! A date lock blocks a resource for a non-guest reason (maintenance, a
//! volunteer stay, or anything else). It participates in conflict checks
//! exactly like a reservation but carries no guest or payment. Unlike a
//! reservation, the lock's end date is inclusive.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};

use super::ResourceKey;

/// The reason a resource is blocked.
///
/// # Example
///
/// ```
/// use booking_engine::models::LockKind;
///
/// assert_eq!(LockKind::Maintenance.to_string(), "maintenance");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LockKind {
    /// The resource is out of service for repairs or cleaning.
    Maintenance,
    /// A volunteer is staying in the bed without a paying booking.
    Volunteer,
    /// Any other reason, described in the lock's free-text field.
    Other,
}

impl std::fmt::Display for LockKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LockKind::Maintenance => write!(f, "maintenance"),
            LockKind::Volunteer => write!(f, "volunteer"),
            LockKind::Other => write!(f, "other"),
        }
    }
}

/// A resource blocked over an inclusive date range.
///
/// # Example
///
/// ```
/// use booking_engine::models::{DateLock, LockKind};
/// use chrono::NaiveDate;
/// use uuid::Uuid;
///
/// let lock = DateLock {
///     id: Uuid::new_v4(),
///     room_id: Some(1),
///     bed_id: None,
///     start_date: NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2024, 6, 12).unwrap(),
///     kind: LockKind::Maintenance,
///     description: "repainting".to_string(),
/// };
/// // Inclusive end: the lock blocks the nights of June 10, 11 and 12.
/// assert_eq!(lock.comparison_end(), NaiveDate::from_ymd_opt(2024, 6, 13).unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateLock {
    /// Unique identifier for the lock.
    pub id: Uuid,
    /// The locked room, for room-level locks.
    pub room_id: Option<i64>,
    /// The locked bed, for bed-level locks.
    pub bed_id: Option<i64>,
    /// First blocked date (inclusive).
    pub start_date: NaiveDate,
    /// Last blocked date (inclusive).
    pub end_date: NaiveDate,
    /// Why the resource is blocked.
    pub kind: LockKind,
    /// Free-text reason shown to operators.
    pub description: String,
}

impl DateLock {
    /// Returns the calendar key for the locked resource, or `None` when
    /// the record names neither a room nor a bed.
    pub fn resource_key(&self) -> Option<ResourceKey> {
        match (self.bed_id, self.room_id) {
            (Some(bed_id), _) => Some(ResourceKey::Bed(bed_id)),
            (None, Some(room_id)) => Some(ResourceKey::Room(room_id)),
            (None, None) => None,
        }
    }

    /// Returns the exclusive comparison end of the lock.
    ///
    /// The stored end date is inclusive, so overlap arithmetic uses
    /// `end_date + 1 day`, saturating at the calendar maximum.
    pub fn comparison_end(&self) -> NaiveDate {
        self.end_date
            .checked_add_days(Days::new(1))
            .unwrap_or(NaiveDate::MAX)
    }

    /// Validates the record before it is written to the record store.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidLock`] when the end date precedes the
    /// start date or when no resource is named.
    pub fn validate(&self) -> EngineResult<()> {
        if self.end_date < self.start_date {
            return Err(EngineError::InvalidLock {
                lock_id: self.id,
                message: format!(
                    "end date {} is before start date {}",
                    self.end_date, self.start_date
                ),
            });
        }
        if self.resource_key().is_none() {
            return Err(EngineError::InvalidLock {
                lock_id: self.id,
                message: "lock names neither a room nor a bed".to_string(),
            });
        }
        Ok(())
    }
}
