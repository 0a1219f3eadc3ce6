//! Core data models for the Availability & Pricing Engine.
//!
//! This module contains all the domain records used throughout the engine.
//! They mirror the rows held by the external record store; the engine only
//! reads them as plain values and returns derived, non-persisted results.

mod date_lock;
mod rate_override;
mod reservation;
mod resource;
mod window;

pub use date_lock::{DateLock, LockKind};
pub use rate_override::DailyRateOverride;
pub use reservation::{Reservation, ReservationStatus};
pub use resource::{Resource, ResourceKey, RoomKind};
pub use window::VisibleWindow;
