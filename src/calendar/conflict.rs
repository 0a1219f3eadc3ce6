//! Booking-interval conflict detection.
//!
//! Decides whether a candidate stay interval on a resource collides with
//! an existing reservation or date lock. Two half-open intervals
//! `[a1, a2)` and `[b1, b2)` overlap iff `a1 < b2 && b1 < a2`, so a new
//! guest may check in on the day a previous guest checks out.
//!
//! Granularity filtering falls out of the index keying: a bed-level
//! candidate is only compared against entries on that exact bed, a
//! room-level candidate only against room-level entries. A dorm's beds
//! are independent resources; a private room is one resource.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::models::{LockKind, ResourceKey};

use super::CalendarIndex;

/// The calendar entry a candidate interval collides with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConflictSource {
    /// An existing reservation occupies part of the interval.
    Reservation {
        /// Id of the conflicting reservation.
        id: Uuid,
        /// Guest name for the operator-facing message.
        guest_name: String,
    },
    /// A date lock blocks part of the interval.
    Lock {
        /// Id of the conflicting lock.
        id: Uuid,
        /// Why the resource is blocked.
        kind: LockKind,
    },
}

impl ConflictSource {
    /// Returns a human-readable label identifying the conflicting entry.
    pub fn display_label(&self) -> String {
        match self {
            ConflictSource::Reservation { guest_name, .. } => guest_name.clone(),
            ConflictSource::Lock { kind, .. } => kind.to_string(),
        }
    }
}

/// The outcome of a conflict check.
///
/// # Example
///
/// ```
/// use booking_engine::calendar::{CalendarIndex, check_conflict};
/// use booking_engine::models::ResourceKey;
/// use chrono::NaiveDate;
///
/// let index = CalendarIndex::build(&[], &[], &[]);
/// let result = check_conflict(
///     ResourceKey::Bed(203),
///     NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 6, 5).unwrap(),
///     &index,
///     None,
/// );
/// assert!(!result.has_conflict());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConflictCheck {
    /// The first conflicting entry found, if any. Reservations are
    /// reported in preference to locks.
    pub conflict: Option<ConflictSource>,
}

impl ConflictCheck {
    /// Whether the candidate interval collides with anything.
    pub fn has_conflict(&self) -> bool {
        self.conflict.is_some()
    }
}

/// Whether two half-open date intervals overlap.
pub(crate) fn intervals_overlap(
    a_start: NaiveDate,
    a_end: NaiveDate,
    b_start: NaiveDate,
    b_end: NaiveDate,
) -> bool {
    a_start < b_end && b_start < a_end
}

/// Checks whether a candidate stay interval is bookable on a resource.
///
/// This is the fast, user-facing pre-check. It must be re-run at write
/// time against a fresh snapshot to narrow the race window; the
/// authoritative guard is the persistence layer's exclusion constraint.
///
/// # Arguments
///
/// * `key` - The target resource at its booking granularity
/// * `check_in` - Candidate check-in date (inclusive)
/// * `check_out` - Candidate check-out date (exclusive)
/// * `index` - The pre-indexed calendar snapshot
/// * `exclude` - Reservation id to skip, so editing a reservation's own
///   dates never self-conflicts
///
/// # Returns
///
/// A [`ConflictCheck`] carrying the first conflicting entry found.
/// Existing reservations are reported in preference to locks. An empty or
/// inverted candidate interval (`check_out <= check_in`) reports no
/// conflict; form validation upstream rejects such input before a write.
pub fn check_conflict(
    key: ResourceKey,
    check_in: NaiveDate,
    check_out: NaiveDate,
    index: &CalendarIndex,
    exclude: Option<Uuid>,
) -> ConflictCheck {
    if check_out <= check_in {
        return ConflictCheck { conflict: None };
    }

    for reservation in index.reservations_for(key) {
        if exclude == Some(reservation.id) {
            continue;
        }
        if intervals_overlap(check_in, check_out, reservation.check_in, reservation.check_out) {
            return ConflictCheck {
                conflict: Some(ConflictSource::Reservation {
                    id: reservation.id,
                    guest_name: reservation.guest_name.clone(),
                }),
            };
        }
    }

    for lock in index.locks_for(key) {
        if intervals_overlap(check_in, check_out, lock.start_date, lock.comparison_end()) {
            return ConflictCheck {
                conflict: Some(ConflictSource::Lock {
                    id: lock.id,
                    kind: lock.kind,
                }),
            };
        }
    }

    ConflictCheck { conflict: None }
}
