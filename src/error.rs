//! Error types for the Availability & Pricing Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur in the engine. The calendar
//! operations themselves never fail: malformed intervals degrade to empty
//! results and missing rates price as zero. Errors arise from configuration
//! loading, resource lookup, and explicit record validation.

use thiserror::Error;
use uuid::Uuid;

/// The main error type for the Availability & Pricing Engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use booking_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/property.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/property.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Room id was not found in the property configuration.
    #[error("Room not found: {room_id}")]
    RoomNotFound {
        /// The room id that was not found.
        room_id: i64,
    },

    /// Bed id was not found within the given room.
    #[error("Bed {bed_id} not found in room {room_id}")]
    BedNotFound {
        /// The room the bed was looked up in.
        room_id: i64,
        /// The bed id that was not found.
        bed_id: i64,
    },

    /// A reservation record was invalid or contained inconsistent data.
    #[error("Invalid reservation '{reservation_id}': {message}")]
    InvalidReservation {
        /// The id of the invalid reservation.
        reservation_id: Uuid,
        /// A description of what made the reservation invalid.
        message: String,
    },

    /// A date lock record was invalid or contained inconsistent data.
    #[error("Invalid date lock '{lock_id}': {message}")]
    InvalidLock {
        /// The id of the invalid lock.
        lock_id: Uuid,
        /// A description of what made the lock invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
