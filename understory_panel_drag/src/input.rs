// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host touch events as seen by the recognizer.

use kurbo::{Point, Size};

/// The lifecycle phase of a touch event.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TouchPhase {
    /// `touchstart`.
    Start,
    /// `touchmove`.
    Move,
    /// `touchend`.
    End,
    /// `touchcancel`. Settles the gesture exactly like [`TouchPhase::End`].
    Cancel,
}

/// What the recognizer needs to read from a host touch event.
///
/// Implement this for your platform's event type, or decode into a
/// [`TouchSample`].
pub trait TouchInput {
    /// Position of the first active touch, or `None` if no touch is active.
    fn primary_touch(&self) -> Option<Point>;

    /// Size of the element the handler is attached to.
    ///
    /// Return `None` if the event's current target is not a measurable
    /// element; the recognizer then ignores the start event.
    fn surface_size(&self) -> Option<Size>;

    /// Event time in milliseconds on a monotonic host clock.
    fn timestamp_ms(&self) -> u64;

    /// Suppress the platform's default scroll/selection handling.
    fn prevent_default(&mut self);
}

/// A decoded touch event.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TouchSample {
    /// First touch point, if any.
    pub touch: Option<Point>,
    /// Size of the current target, if it is an element.
    pub surface: Option<Size>,
    /// Event time in milliseconds.
    pub timestamp_ms: u64,
    /// Set once the recognizer has claimed the event.
    pub default_prevented: bool,
}

impl TouchSample {
    /// A sample with one touch at `touch` on a surface of `surface` size.
    #[must_use]
    pub const fn new(touch: Point, surface: Size, timestamp_ms: u64) -> Self {
        Self {
            touch: Some(touch),
            surface: Some(surface),
            timestamp_ms,
            default_prevented: false,
        }
    }

    /// A sample with no active touches, as delivered with `touchend`.
    #[must_use]
    pub const fn released(timestamp_ms: u64) -> Self {
        Self {
            touch: None,
            surface: None,
            timestamp_ms,
            default_prevented: false,
        }
    }
}

impl TouchInput for TouchSample {
    fn primary_touch(&self) -> Option<Point> {
        self.touch
    }

    fn surface_size(&self) -> Option<Size> {
        self.surface
    }

    fn timestamp_ms(&self) -> u64 {
        self.timestamp_ms
    }

    fn prevent_default(&mut self) {
        self.default_prevented = true;
    }
}
