//! Bookable resource model and resource keys.
//!
//! A resource is the unit the calendar books against: a private room books
//! as a single unit, a dorm books per-bed. Bed-level and room-level entries
//! on the same room are independent resources and never conflict with each
//! other.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents how a room is booked.
///
/// # Example
///
/// ```
/// use booking_engine::models::RoomKind;
///
/// let kind = RoomKind::Dorm;
/// assert_eq!(format!("{:?}", kind), "Dorm");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomKind {
    /// The whole room books as a single unit.
    Private,
    /// Each bed in the room books independently.
    Dorm,
}

impl std::fmt::Display for RoomKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoomKind::Private => write!(f, "private"),
            RoomKind::Dorm => write!(f, "dorm"),
        }
    }
}

/// Identifies a bookable unit at its booking granularity.
///
/// Calendar entries are indexed by this key, so a candidate stay is only
/// ever compared against entries at the same granularity: a bed-level stay
/// against that exact bed, a room-level stay against the whole room.
///
/// # Example
///
/// ```
/// use booking_engine::models::ResourceKey;
///
/// assert_eq!(ResourceKey::Room(3).to_string(), "room-3");
/// assert_eq!(ResourceKey::Bed(201).to_string(), "bed-201");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKey {
    /// A whole room (private rooms, or a room-level date lock).
    Room(i64),
    /// A specific bed within a dorm room.
    Bed(i64),
}

impl ResourceKey {
    /// Builds the key for a (room id, optional bed id) pair.
    ///
    /// A set bed id means a bed-level resource; otherwise the key targets
    /// the whole room.
    pub fn from_parts(room_id: i64, bed_id: Option<i64>) -> Self {
        match bed_id {
            Some(bed_id) => ResourceKey::Bed(bed_id),
            None => ResourceKey::Room(room_id),
        }
    }
}

impl std::fmt::Display for ResourceKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceKey::Room(id) => write!(f, "room-{id}"),
            ResourceKey::Bed(id) => write!(f, "bed-{id}"),
        }
    }
}

/// A bookable unit together with its pricing defaults.
///
/// # Example
///
/// ```
/// use booking_engine::models::{Resource, ResourceKey, RoomKind};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let bed = Resource {
///     room_id: 2,
///     bed_id: Some(201),
///     default_nightly_rate: Decimal::from_str("28.50").unwrap(),
///     kind: RoomKind::Dorm,
/// };
/// assert_eq!(bed.key(), ResourceKey::Bed(201));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    /// The room this resource belongs to.
    pub room_id: i64,
    /// The bed id for dorm beds; `None` for room-level resources.
    pub bed_id: Option<i64>,
    /// The nightly rate used when no daily override exists.
    pub default_nightly_rate: Decimal,
    /// Whether the parent room is a dorm or a private room.
    pub kind: RoomKind,
}

impl Resource {
    /// Returns the calendar key for this resource.
    pub fn key(&self) -> ResourceKey {
        ResourceKey::from_parts(self.room_id, self.bed_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_key_from_parts_prefers_bed() {
        assert_eq!(ResourceKey::from_parts(2, Some(201)), ResourceKey::Bed(201));
        assert_eq!(ResourceKey::from_parts(2, None), ResourceKey::Room(2));
    }

    #[test]
    fn test_key_display() {
        assert_eq!(ResourceKey::Room(1).to_string(), "room-1");
        assert_eq!(ResourceKey::Bed(305).to_string(), "bed-305");
    }

    #[test]
    fn test_bed_and_room_keys_are_distinct() {
        // Same numeric id at different granularity must not collide.
        assert_ne!(ResourceKey::Room(7), ResourceKey::Bed(7));
    }

    #[test]
    fn test_resource_key_matches_granularity() {
        let private = Resource {
            room_id: 1,
            bed_id: None,
            default_nightly_rate: dec("85.00"),
            kind: RoomKind::Private,
        };
        assert_eq!(private.key(), ResourceKey::Room(1));

        let bed = Resource {
            room_id: 2,
            bed_id: Some(201),
            default_nightly_rate: dec("28.50"),
            kind: RoomKind::Dorm,
        };
        assert_eq!(bed.key(), ResourceKey::Bed(201));
    }

    #[test]
    fn test_room_kind_display() {
        assert_eq!(RoomKind::Private.to_string(), "private");
        assert_eq!(RoomKind::Dorm.to_string(), "dorm");
    }

    #[test]
    fn test_resource_serialization_round_trip() {
        let resource = Resource {
            room_id: 2,
            bed_id: Some(201),
            default_nightly_rate: dec("28.50"),
            kind: RoomKind::Dorm,
        };

        let json = serde_json::to_string(&resource).unwrap();
        let deserialized: Resource = serde_json::from_str(&json).unwrap();
        assert_eq!(resource, deserialized);
    }
}
