// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration errors.

use alloc::string::String;
use core::fmt;

use crate::config::{DragAxis, OpenSide};

/// Error returned when a [`PanelDragConfig`](crate::PanelDragConfig) cannot be used.
///
/// Configuration errors are raised once, when a recognizer is built. Event
/// handling itself never fails.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// A drag axis name was neither `"horizontal"` nor `"vertical"`.
    UnknownAxis(String),
    /// An open side name was not one of `"left"`, `"right"`, `"top"` or `"bottom"`.
    UnknownSide(String),
    /// The open side does not lie on the drag axis.
    SideAxisMismatch {
        /// The configured drag axis.
        axis: DragAxis,
        /// The configured open side.
        side: OpenSide,
    },
    /// The angle threshold is outside `[0, 90]` degrees (or NaN).
    AngleOutOfRange(f64),
    /// The speed threshold is negative (or NaN).
    NegativeSpeedThreshold(f64),
    /// The distance threshold is negative (or NaN).
    NegativeDistanceThreshold(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownAxis(name) => write!(
                f,
                "invalid drag axis {name:?}, must be \"horizontal\" or \"vertical\""
            ),
            Self::UnknownSide(name) => write!(
                f,
                "invalid open side {name:?}, must be \"left\", \"right\", \"top\" or \"bottom\""
            ),
            Self::SideAxisMismatch { axis, side } => write!(
                f,
                "open side {} is not valid for a {} drag, must be {}",
                side.as_str(),
                axis.as_str(),
                match axis {
                    DragAxis::Horizontal => "\"left\" or \"right\"",
                    DragAxis::Vertical => "\"top\" or \"bottom\"",
                }
            ),
            Self::AngleOutOfRange(angle) => write!(
                f,
                "invalid angle threshold {angle}, must be between 0 and 90 degrees"
            ),
            Self::NegativeSpeedThreshold(speed) => write!(
                f,
                "invalid speed threshold {speed}, must be a non-negative number"
            ),
            Self::NegativeDistanceThreshold(distance) => write!(
                f,
                "invalid distance threshold {distance}, must be a non-negative number"
            ),
        }
    }
}

impl core::error::Error for ConfigError {}
