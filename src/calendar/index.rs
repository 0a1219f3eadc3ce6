//! Snapshot pre-indexing for calendar lookups.
//!
//! The calendar loads one snapshot of reservations, locks, and rate
//! overrides per visible window, then runs many conflict checks and
//! per-night rate lookups against it. This module indexes the snapshot
//! once so each lookup is an O(1) map read instead of a scan over the
//! full record lists.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use crate::models::{DailyRateOverride, DateLock, Reservation, ResourceKey};

/// A pre-indexed snapshot of the record store's calendar data.
///
/// Reservations and locks are grouped by resource key; overrides are keyed
/// by (room id, date). Cancelled reservations are dropped at build time
/// since they never participate in conflict checks or occupancy. Locks
/// that name neither a room nor a bed are likewise dropped.
///
/// The index holds a read-only copy of the snapshot. Callers rebuild it
/// when the window's data is refetched; consistency between the snapshot
/// and the store at write time is the caller's concern.
///
/// # Example
///
/// ```
/// use booking_engine::calendar::CalendarIndex;
/// use booking_engine::models::ResourceKey;
///
/// let index = CalendarIndex::build(&[], &[], &[]);
/// assert!(index.reservations_for(ResourceKey::Bed(203)).is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CalendarIndex {
    reservations: HashMap<ResourceKey, Vec<Reservation>>,
    locks: HashMap<ResourceKey, Vec<DateLock>>,
    overrides: HashMap<(i64, NaiveDate), Decimal>,
}

impl CalendarIndex {
    /// Builds the index from a snapshot of record-store rows.
    ///
    /// Later overrides for the same (room, date) replace earlier ones,
    /// matching the store's upsert semantics on that key.
    pub fn build(
        reservations: &[Reservation],
        locks: &[DateLock],
        overrides: &[DailyRateOverride],
    ) -> Self {
        let mut index = Self::default();

        for reservation in reservations {
            if !reservation.status.blocks_calendar() {
                continue;
            }
            index
                .reservations
                .entry(reservation.resource_key())
                .or_default()
                .push(reservation.clone());
        }

        for lock in locks {
            if let Some(key) = lock.resource_key() {
                index.locks.entry(key).or_default().push(lock.clone());
            }
        }

        for override_rate in overrides {
            index
                .overrides
                .insert((override_rate.room_id, override_rate.date), override_rate.price);
        }

        debug!(
            reservations = reservations.len(),
            locks = locks.len(),
            overrides = overrides.len(),
            indexed_keys = index.reservations.len() + index.locks.len(),
            "built calendar index"
        );

        index
    }

    /// Returns the non-cancelled reservations on the given resource.
    pub fn reservations_for(&self, key: ResourceKey) -> &[Reservation] {
        self.reservations.get(&key).map_or(&[], Vec::as_slice)
    }

    /// Returns the date locks on the given resource.
    pub fn locks_for(&self, key: ResourceKey) -> &[DateLock] {
        self.locks.get(&key).map_or(&[], Vec::as_slice)
    }

    /// Returns the override price for a room on a date, if one exists.
    pub fn override_for(&self, room_id: i64, date: NaiveDate) -> Option<Decimal> {
        self.overrides.get(&(room_id, date)).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LockKind, ReservationStatus};
    use std::str::FromStr;
    use uuid::Uuid;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn make_reservation(bed_id: Option<i64>, status: ReservationStatus) -> Reservation {
        Reservation {
            id: Uuid::new_v4(),
            room_id: 2,
            bed_id,
            check_in: date("2024-06-01"),
            check_out: date("2024-06-05"),
            status,
            total_amount: dec("114.00"),
            paid_amount: dec("0.00"),
            guest_name: "Ana Costa".to_string(),
        }
    }

    fn make_lock(room_id: Option<i64>, bed_id: Option<i64>) -> DateLock {
        DateLock {
            id: Uuid::new_v4(),
            room_id,
            bed_id,
            start_date: date("2024-06-10"),
            end_date: date("2024-06-12"),
            kind: LockKind::Maintenance,
            description: String::new(),
        }
    }

    #[test]
    fn test_reservations_grouped_by_resource_key() {
        let reservations = vec![
            make_reservation(Some(203), ReservationStatus::Confirmed),
            make_reservation(Some(204), ReservationStatus::Confirmed),
            make_reservation(None, ReservationStatus::Confirmed),
        ];
        let index = CalendarIndex::build(&reservations, &[], &[]);

        assert_eq!(index.reservations_for(ResourceKey::Bed(203)).len(), 1);
        assert_eq!(index.reservations_for(ResourceKey::Bed(204)).len(), 1);
        assert_eq!(index.reservations_for(ResourceKey::Room(2)).len(), 1);
        assert!(index.reservations_for(ResourceKey::Bed(205)).is_empty());
    }

    #[test]
    fn test_cancelled_reservations_dropped_at_build() {
        let reservations = vec![
            make_reservation(Some(203), ReservationStatus::Cancelled),
            make_reservation(Some(203), ReservationStatus::Confirmed),
        ];
        let index = CalendarIndex::build(&reservations, &[], &[]);

        assert_eq!(index.reservations_for(ResourceKey::Bed(203)).len(), 1);
        assert_eq!(
            index.reservations_for(ResourceKey::Bed(203))[0].status,
            ReservationStatus::Confirmed
        );
    }

    #[test]
    fn test_no_show_still_indexed() {
        let reservations = vec![make_reservation(Some(203), ReservationStatus::NoShow)];
        let index = CalendarIndex::build(&reservations, &[], &[]);
        assert_eq!(index.reservations_for(ResourceKey::Bed(203)).len(), 1);
    }

    #[test]
    fn test_locks_keyed_at_their_granularity() {
        let locks = vec![make_lock(Some(2), None), make_lock(Some(2), Some(203))];
        let index = CalendarIndex::build(&[], &locks, &[]);

        assert_eq!(index.locks_for(ResourceKey::Room(2)).len(), 1);
        assert_eq!(index.locks_for(ResourceKey::Bed(203)).len(), 1);
    }

    #[test]
    fn test_unaddressed_lock_dropped() {
        let locks = vec![make_lock(None, None)];
        let index = CalendarIndex::build(&[], &locks, &[]);
        assert!(index.locks_for(ResourceKey::Room(2)).is_empty());
    }

    #[test]
    fn test_override_lookup_by_room_and_date() {
        let overrides = vec![DailyRateOverride {
            room_id: 2,
            date: date("2024-06-02"),
            price: dec("150.00"),
        }];
        let index = CalendarIndex::build(&[], &[], &overrides);

        assert_eq!(index.override_for(2, date("2024-06-02")), Some(dec("150.00")));
        assert_eq!(index.override_for(2, date("2024-06-03")), None);
        assert_eq!(index.override_for(3, date("2024-06-02")), None);
    }

    #[test]
    fn test_later_override_wins_for_same_key() {
        let overrides = vec![
            DailyRateOverride {
                room_id: 2,
                date: date("2024-06-02"),
                price: dec("150.00"),
            },
            DailyRateOverride {
                room_id: 2,
                date: date("2024-06-02"),
                price: dec("120.00"),
            },
        ];
        let index = CalendarIndex::build(&[], &[], &overrides);
        assert_eq!(index.override_for(2, date("2024-06-02")), Some(dec("120.00")));
    }
}
