//! Property configuration types.
//!
//! These types describe the static setup of a hostel: its rooms, their
//! beds, booking kind, and default nightly rates. The configuration is the
//! source of the bookable resources the calendar operates on.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{EngineError, EngineResult};
use crate::models::{Resource, RoomKind};

/// Metadata about the property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyMetadata {
    /// Display name of the property.
    pub name: String,
    /// Short machine-friendly code for the property.
    pub code: String,
    /// ISO 4217 currency code all rates are denominated in.
    pub currency: String,
    /// IANA timezone the property's calendar dates are local to.
    pub timezone: String,
}

/// A bed within a dorm room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BedConfig {
    /// Unique bed id (unique across the whole property).
    pub id: i64,
    /// Display name, e.g. "Bed 3".
    pub name: String,
}

/// A room and its booking setup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomConfig {
    /// Unique room id.
    pub id: i64,
    /// Display name, e.g. "6-Bed Dorm".
    pub name: String,
    /// Whether the room books as a unit or per-bed.
    pub kind: RoomKind,
    /// Nightly rate used when no daily override exists. A missing rate
    /// prices as zero so a misconfigured room surfaces to the operator
    /// instead of failing the booking flow.
    #[serde(default)]
    pub default_nightly_rate: Decimal,
    /// Beds in the room; empty for private rooms.
    #[serde(default)]
    pub beds: Vec<BedConfig>,
}

/// Wrapper for the rooms file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomsConfig {
    /// All rooms of the property.
    pub rooms: Vec<RoomConfig>,
}

/// The complete property configuration.
///
/// Construct via [`crate::config::ConfigLoader::load`] or directly with
/// [`PropertyConfig::new`] in tests.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyConfig {
    metadata: PropertyMetadata,
    rooms: Vec<RoomConfig>,
    rooms_by_id: HashMap<i64, usize>,
}

impl PropertyConfig {
    /// Creates a configuration from already-parsed parts.
    pub fn new(metadata: PropertyMetadata, rooms: Vec<RoomConfig>) -> Self {
        let rooms_by_id = rooms
            .iter()
            .enumerate()
            .map(|(index, room)| (room.id, index))
            .collect();
        Self {
            metadata,
            rooms,
            rooms_by_id,
        }
    }

    /// Returns the property metadata.
    pub fn metadata(&self) -> &PropertyMetadata {
        &self.metadata
    }

    /// Returns all configured rooms.
    pub fn rooms(&self) -> &[RoomConfig] {
        &self.rooms
    }

    /// Looks up a room by id.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::RoomNotFound`] when the id is unknown.
    pub fn room(&self, room_id: i64) -> EngineResult<&RoomConfig> {
        self.rooms_by_id
            .get(&room_id)
            .map(|&index| &self.rooms[index])
            .ok_or(EngineError::RoomNotFound { room_id })
    }

    /// Resolves a (room id, optional bed id) pair into a bookable resource.
    ///
    /// Private rooms resolve at room level; dorm beds resolve at bed level
    /// and inherit the room's default nightly rate.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::RoomNotFound`] or [`EngineError::BedNotFound`]
    /// when either id is unknown.
    pub fn resource(&self, room_id: i64, bed_id: Option<i64>) -> EngineResult<Resource> {
        let room = self.room(room_id)?;
        if let Some(bed_id) = bed_id {
            if !room.beds.iter().any(|bed| bed.id == bed_id) {
                return Err(EngineError::BedNotFound { room_id, bed_id });
            }
        }
        Ok(Resource {
            room_id: room.id,
            bed_id,
            default_nightly_rate: room.default_nightly_rate,
            kind: room.kind,
        })
    }

    /// Enumerates every bookable unit of the property: one resource per
    /// private room and one per dorm bed.
    pub fn bookable_resources(&self) -> Vec<Resource> {
        let mut resources = Vec::new();
        for room in &self.rooms {
            match room.kind {
                RoomKind::Private => resources.push(Resource {
                    room_id: room.id,
                    bed_id: None,
                    default_nightly_rate: room.default_nightly_rate,
                    kind: room.kind,
                }),
                RoomKind::Dorm => {
                    for bed in &room.beds {
                        resources.push(Resource {
                            room_id: room.id,
                            bed_id: Some(bed.id),
                            default_nightly_rate: room.default_nightly_rate,
                            kind: room.kind,
                        });
                    }
                }
            }
        }
        resources
    }

    /// Returns the number of bookable units.
    pub fn capacity(&self) -> usize {
        self.rooms
            .iter()
            .map(|room| match room.kind {
                RoomKind::Private => 1,
                RoomKind::Dorm => room.beds.len(),
            })
            .sum()
    }
}
