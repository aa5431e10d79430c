// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-of-drag open/close decision.
//!
//! A [`SwitchBoundary`] is compiled once into a [`SwitchRule`]. At the end of
//! each recognized gesture the rule looks at the committed state, the signed
//! along-axis speed and the signed offset percentage, and picks a
//! [`SwitchTarget`]:
//!
//! 1. Motion that continues towards the committed state re-commits it.
//! 2. Otherwise the [`TriggerRule`] says whether the gesture was decisive.
//! 3. A decisive gesture in the closing direction closes. A decisive gesture
//!    in the opening direction opens. An indecisive gesture towards closing
//!    opens (the panel snaps back), and towards opening closes.

use crate::config::{OpenSide, SwitchBoundary};

/// Width of the band near either extreme where the speed-only rule never fires, in percent.
pub const EDGE_BAND_PERCENT: f64 = 5.0;

/// The state a completed gesture asks to commit.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SwitchTarget {
    /// Commit the open state.
    Open,
    /// Commit the closed state.
    Close,
}

impl SwitchTarget {
    /// The target matching a committed `is_open` state.
    #[must_use]
    pub const fn from_open(is_open: bool) -> Self {
        if is_open { Self::Open } else { Self::Close }
    }
}

/// Which thresholds are configured, resolved once.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TriggerRule {
    /// No threshold configured; never triggers.
    NoThreshold,
    /// Speed threshold only, in px/ms.
    SpeedOnly(f64),
    /// Distance threshold only, in percent.
    DistanceOnly(f64),
    /// Both thresholds; either one suffices.
    Both {
        /// Speed threshold, in px/ms.
        speed: f64,
        /// Distance threshold, in percent.
        distance: f64,
    },
}

impl TriggerRule {
    /// Resolve the variant for `boundary`.
    #[must_use]
    pub const fn from_boundary(boundary: SwitchBoundary) -> Self {
        match (boundary.speed_threshold, boundary.distance_threshold) {
            (None, None) => Self::NoThreshold,
            (Some(speed), None) => Self::SpeedOnly(speed),
            (None, Some(distance)) => Self::DistanceOnly(distance),
            (Some(speed), Some(distance)) => Self::Both { speed, distance },
        }
    }

    /// Whether a gesture ending at `speed` and `offset_percent` is decisive.
    #[must_use]
    pub fn should_trigger(self, speed: f64, offset_percent: f64) -> bool {
        let distance = offset_percent.abs();
        match self {
            Self::NoThreshold => false,
            // Tiny jitters at either extreme can look like flings; ignore them.
            Self::SpeedOnly(threshold) => {
                speed.abs() > threshold
                    && distance > EDGE_BAND_PERCENT
                    && distance < 100.0 - EDGE_BAND_PERCENT
            }
            Self::DistanceOnly(threshold) => distance > threshold,
            Self::Both {
                speed: speed_threshold,
                distance: distance_threshold,
            } => speed.abs() > speed_threshold || distance > distance_threshold,
        }
    }
}

/// A compiled switch boundary for one open side.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SwitchRule {
    side: OpenSide,
    trigger: TriggerRule,
}

impl SwitchRule {
    /// Compile `boundary` for a panel opening from `side`.
    #[must_use]
    pub const fn new(side: OpenSide, boundary: SwitchBoundary) -> Self {
        Self {
            side,
            trigger: TriggerRule::from_boundary(boundary),
        }
    }

    /// The resolved trigger variant.
    #[must_use]
    pub const fn trigger(&self) -> TriggerRule {
        self.trigger
    }

    /// Whether `speed` continues towards the committed state.
    #[must_use]
    pub fn is_continuation(&self, is_open: bool, speed: f64) -> bool {
        let opening = if self.side.opens_positive() {
            speed > 0.0
        } else {
            speed < 0.0
        };
        let closing = if self.side.opens_positive() {
            speed < 0.0
        } else {
            speed > 0.0
        };
        (is_open && opening) || (!is_open && closing)
    }

    /// Whether the along-axis offset points away from the opening direction.
    ///
    /// A zero offset counts as motion towards negative coordinates.
    #[must_use]
    pub fn is_closing_direction(&self, along_offset: f64) -> bool {
        (along_offset > 0.0) != self.side.opens_positive()
    }

    /// Pick the state to commit for a completed gesture.
    #[must_use]
    pub fn decide(
        &self,
        is_open: bool,
        speed: f64,
        along_offset: f64,
        offset_percent: f64,
    ) -> SwitchTarget {
        if self.is_continuation(is_open, speed) {
            return SwitchTarget::from_open(is_open);
        }
        let closing = self.is_closing_direction(along_offset);
        if self.trigger.should_trigger(speed, offset_percent) == closing {
            SwitchTarget::Close
        } else {
            SwitchTarget::Open
        }
    }
}
