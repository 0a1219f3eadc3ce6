//! Availability & Pricing Engine for hostel property management
//!
//! This crate provides the calendar core of a hostel property-management
//! system: booking-interval conflict detection, nightly price aggregation
//! with per-date rate overrides, timeline bar geometry for calendar
//! rendering, payment reconciliation, and per-night occupancy summaries.
//!
//! All operations are deterministic pure functions over a pre-indexed
//! snapshot of reservations, date locks, and rate overrides. Persistence,
//! authentication, and rendering are the caller's concern.

#![warn(missing_docs)]

pub mod calendar;
pub mod config;
pub mod error;
pub mod models;
