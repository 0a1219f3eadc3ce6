//! Calendar operations for the Availability & Pricing Engine.
//!
//! This module contains the engine's pure operations: snapshot indexing,
//! booking-interval conflict detection, nightly price aggregation,
//! timeline bar geometry, payment reconciliation, and per-night occupancy
//! summaries. All of them are deterministic functions of their inputs and
//! safe to call from concurrent request handlers without coordination.

mod conflict;
mod geometry;
mod index;
mod occupancy;
mod payment;
mod pricing;

pub use conflict::{ConflictCheck, ConflictSource, check_conflict};
pub use geometry::{
    BarGeometry, ClipShape, SHORT_SLANT_PX, SLANT_PX, bar_geometry, lock_bar, reservation_bar,
};
pub use index::CalendarIndex;
pub use occupancy::{NightOccupancy, occupancy_for_window};
pub use payment::{PaymentPosition, reconcile_payment, reservation_position};
pub use pricing::{NightCharge, StayQuote, quote_stay};
