// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-gesture session: origin, timing, element extent, offsets and axis lock.
//!
//! ## Usage
//!
//! 1) Begin a gesture with [`DragSession::start`], passing the first touch
//!    point, the event time and the element extent along the tracked axis.
//! 2) On each move, call [`DragSession::update`] to record the cumulative
//!    offset from the origin, then [`DragSession::resolve_lock`] to classify
//!    the gesture as on- or off-axis. The first decision sticks.
//! 3) Settle the gesture with [`DragSession::end`], which resets the lock.
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use understory_panel_drag::{AxisLock, DragAxis, DragSession};
//!
//! let mut session = DragSession::default();
//! session.start(Point::new(0.0, 0.0), 1_000, 200.0);
//!
//! let offset = session.update(Point::new(50.0, 0.0)).unwrap();
//! assert_eq!(offset, Vec2::new(50.0, 0.0));
//! assert_eq!(session.offset_percent(DragAxis::Horizontal), 25.0);
//! assert_eq!(session.resolve_lock(DragAxis::Horizontal, 40.0), AxisLock::OnAxis);
//! ```

use kurbo::{Point, Vec2};

use crate::config::DragAxis;

/// Per-gesture classification of the motion direction.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum AxisLock {
    /// No move has been classified yet.
    #[default]
    Undetermined,
    /// The gesture follows the tracked axis and drives the panel.
    OnAxis,
    /// The gesture strayed off the tracked axis and is ignored until it ends.
    OffAxis,
}

/// Mutable state of one gesture, from touch-start to touch-end.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct DragSession {
    /// Touch position at the start of the gesture.
    pub origin: Option<Point>,
    /// Event time at the start of the gesture, in milliseconds.
    pub start_time: u64,
    /// Element extent along the tracked axis, captured at start.
    pub axis_extent: f64,
    /// Cumulative offset of the latest touch from `origin`.
    pub offset: Vec2,
    lock: AxisLock,
}

impl DragSession {
    /// Begin a new gesture.
    pub fn start(&mut self, origin: Point, start_time: u64, axis_extent: f64) {
        self.origin = Some(origin);
        self.start_time = start_time;
        self.axis_extent = axis_extent;
        self.offset = Vec2::ZERO;
        self.lock = AxisLock::Undetermined;
    }

    /// Record the latest touch position, returning the offset from the origin.
    ///
    /// Returns `None` if no gesture has started.
    pub fn update(&mut self, pos: Point) -> Option<Vec2> {
        let origin = self.origin?;
        self.offset = pos - origin;
        Some(self.offset)
    }

    /// Classify the gesture against `axis`, once.
    ///
    /// While undetermined, compares the angle between the current offset and
    /// the tracked axis with `threshold_degrees`. Once decided, the lock is
    /// returned unchanged until [`DragSession::end`].
    pub fn resolve_lock(&mut self, axis: DragAxis, threshold_degrees: f64) -> AxisLock {
        if self.lock != AxisLock::Undetermined {
            return self.lock;
        }
        let angle = deviation_degrees(axis, self.offset);
        self.lock = if angle > threshold_degrees {
            AxisLock::OffAxis
        } else {
            AxisLock::OnAxis
        };
        tracing::debug!(
            angle,
            threshold = threshold_degrees,
            lock = ?self.lock,
            "axis lock resolved"
        );
        self.lock
    }

    /// The current axis lock.
    #[must_use]
    pub fn lock(&self) -> AxisLock {
        self.lock
    }

    /// Along-axis offset as a percentage of the element extent. Signed.
    #[must_use]
    pub fn offset_percent(&self, axis: DragAxis) -> f64 {
        axis.along(self.offset) / self.axis_extent * 100.0
    }

    /// Milliseconds since start, at least 1 so speeds stay finite.
    #[must_use]
    pub fn elapsed_ms(&self, now: u64) -> f64 {
        now.saturating_sub(self.start_time).max(1) as f64
    }

    /// Settle the gesture. Offsets are kept for inspection; the lock is reset.
    pub fn end(&mut self) {
        self.origin = None;
        self.lock = AxisLock::Undetermined;
    }

    /// Returns `true` between [`DragSession::start`] and [`DragSession::end`].
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.origin.is_some()
    }
}

/// Angle in degrees between `offset` and `axis`, in `[0, 90]`.
#[must_use]
pub fn deviation_degrees(axis: DragAxis, offset: Vec2) -> f64 {
    Vec2::new(axis.along(offset).abs(), axis.across(offset).abs())
        .atan2()
        .to_degrees()
}
