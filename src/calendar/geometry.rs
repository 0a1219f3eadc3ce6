//! Timeline bar geometry.
//!
//! Computes the rectangle used to draw a booking or lock bar on the
//! calendar grid: left offset, width, and clip shape, with correct
//! handling of bars that start before or end after the visible window.
//!
//! Bars start and end at the midpoint of their cells so the previous
//! occupant's checkout and the next arrival share a day cell. A clipped
//! side starts at the cell edge instead and gains half a day of width to
//! compensate. The same rule draws reservation and lock bars.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{DateLock, Reservation, VisibleWindow};

/// Slant applied to a bar's left/right edges, in pixels.
pub const SLANT_PX: f64 = 16.0;

/// Reduced slant for stays of two nights or fewer, keeping the label
/// legible on short bars.
pub const SHORT_SLANT_PX: f64 = 6.0;

/// The outline drawn for a timeline bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClipShape {
    /// Both ends inside the window: slanted left and right edges.
    Parallelogram,
    /// Clipped at the window's left edge: flat left, slanted right.
    FlatLeft,
    /// Clipped at the window's right edge: slanted left, flat right.
    FlatRight,
    /// Clipped on both sides: plain rectangle.
    Rectangle,
}

/// The layout of one bar on the timeline.
///
/// # Example
///
/// ```
/// use booking_engine::calendar::bar_geometry;
/// use booking_engine::models::VisibleWindow;
/// use chrono::NaiveDate;
///
/// let window = VisibleWindow {
///     start: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
///     days: 30,
/// };
/// let bar = bar_geometry(
///     NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 6, 7).unwrap(),
///     &window,
///     120.0,
/// );
/// assert!(bar.visible);
/// assert_eq!(bar.left_px, 2.0 * 120.0 + 60.0);
/// assert_eq!(bar.width_px, 4.0 * 120.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarGeometry {
    /// Whether any part of the bar falls inside the window. Hidden bars
    /// must not be drawn; their pixel fields are zero.
    pub visible: bool,
    /// Distance from the window's left edge to the bar's left edge.
    pub left_px: f64,
    /// Width of the bar.
    pub width_px: f64,
    /// The outline to draw.
    pub clip: ClipShape,
    /// Whether the bar starts before the window.
    pub is_clipped_left: bool,
    /// Whether the bar ends after the window.
    pub is_clipped_right: bool,
    /// Edge slant to apply on unclipped sides.
    pub slant_px: f64,
}

impl BarGeometry {
    /// A bar entirely outside the window.
    fn hidden() -> Self {
        BarGeometry {
            visible: false,
            left_px: 0.0,
            width_px: 0.0,
            clip: ClipShape::Rectangle,
            is_clipped_left: false,
            is_clipped_right: false,
            slant_px: 0.0,
        }
    }
}

/// Computes the timeline rectangle for a half-open date interval.
///
/// # Arguments
///
/// * `start` - Interval start date (inclusive)
/// * `end_exclusive` - Interval end date (exclusive)
/// * `window` - The visible calendar window
/// * `day_width` - Width of one day cell in pixels
///
/// # Returns
///
/// A [`BarGeometry`]. Empty or inverted intervals and bars entirely
/// outside the window come back with `visible: false`.
pub fn bar_geometry(
    start: NaiveDate,
    end_exclusive: NaiveDate,
    window: &VisibleWindow,
    day_width: f64,
) -> BarGeometry {
    let duration_days = (end_exclusive - start).num_days();
    if duration_days <= 0 {
        return BarGeometry::hidden();
    }

    let window_end = window.end_exclusive();
    let offset_days = (start - window.start).num_days();

    let is_clipped_left = start < window.start;
    let is_clipped_right = end_exclusive > window_end;

    let overhang_left = (-offset_days).max(0);
    let overhang_right = (end_exclusive - window_end).num_days().max(0);
    let visible_days = duration_days - overhang_left - overhang_right;
    if visible_days <= 0 {
        return BarGeometry::hidden();
    }

    let half_day = day_width / 2.0;

    let left_px = if is_clipped_left {
        0.0
    } else {
        offset_days as f64 * day_width + half_day
    };

    let mut width_px = visible_days as f64 * day_width;
    if is_clipped_left {
        width_px += half_day;
    }
    if is_clipped_right {
        width_px += half_day;
    }

    let clip = match (is_clipped_left, is_clipped_right) {
        (false, false) => ClipShape::Parallelogram,
        (true, false) => ClipShape::FlatLeft,
        (false, true) => ClipShape::FlatRight,
        (true, true) => ClipShape::Rectangle,
    };

    let slant_px = if duration_days <= 2 {
        SHORT_SLANT_PX
    } else {
        SLANT_PX
    };

    BarGeometry {
        visible: true,
        left_px,
        width_px,
        clip,
        is_clipped_left,
        is_clipped_right,
        slant_px,
    }
}

/// Computes the timeline bar for a reservation.
pub fn reservation_bar(
    reservation: &Reservation,
    window: &VisibleWindow,
    day_width: f64,
) -> BarGeometry {
    bar_geometry(reservation.check_in, reservation.check_out, window, day_width)
}

/// Computes the timeline bar for a date lock.
///
/// The lock's inclusive end date is converted to the exclusive end the
/// shared geometry rule expects.
pub fn lock_bar(lock: &DateLock, window: &VisibleWindow, day_width: f64) -> BarGeometry {
    bar_geometry(lock.start_date, lock.comparison_end(), window, day_width)
}
