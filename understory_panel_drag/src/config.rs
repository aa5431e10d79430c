// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recognizer configuration: tracked axis, open side, angle filter and switch boundary.
//!
//! A configuration is a plain value. It is checked once by
//! [`PanelDragConfig::validate`] (which [`PanelDrag::new`](crate::PanelDrag::new)
//! calls for you) and never changes afterwards.
//!
//! ```
//! use understory_panel_drag::{DragAxis, OpenSide, PanelDragConfig, SwitchBoundary};
//!
//! let config = PanelDragConfig::new(DragAxis::Horizontal, OpenSide::Right)
//!     .with_angle_threshold(30.0)
//!     .with_switch_boundary(SwitchBoundary::new().with_distance_threshold(30.0));
//! assert!(config.validate().is_ok());
//!
//! let side: OpenSide = "top".parse().unwrap();
//! let bad = PanelDragConfig::new(DragAxis::Horizontal, side);
//! assert!(bad.validate().is_err());
//! ```

use alloc::string::ToString;
use core::str::FromStr;

use kurbo::{Size, Vec2};

use crate::error::ConfigError;

/// Angle threshold used when none is configured, in degrees.
pub const DEFAULT_ANGLE_THRESHOLD: f64 = 40.0;

/// The screen axis a panel drag tracks.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DragAxis {
    /// Track motion along x.
    Horizontal,
    /// Track motion along y.
    Vertical,
}

impl DragAxis {
    /// The lowercase name of this axis.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }

    /// Component of `offset` along this axis.
    #[must_use]
    pub fn along(self, offset: Vec2) -> f64 {
        match self {
            Self::Horizontal => offset.x,
            Self::Vertical => offset.y,
        }
    }

    /// Component of `offset` across this axis.
    #[must_use]
    pub fn across(self, offset: Vec2) -> f64 {
        match self {
            Self::Horizontal => offset.y,
            Self::Vertical => offset.x,
        }
    }

    /// Element size along this axis (width or height).
    #[must_use]
    pub fn extent(self, size: Size) -> f64 {
        match self {
            Self::Horizontal => size.width,
            Self::Vertical => size.height,
        }
    }
}

impl FromStr for DragAxis {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "horizontal" => Ok(Self::Horizontal),
            "vertical" => Ok(Self::Vertical),
            other => Err(ConfigError::UnknownAxis(other.to_string())),
        }
    }
}

/// The edge a panel opens from.
///
/// `Right` and `Bottom` treat motion towards positive coordinates as opening;
/// `Left` and `Top` treat motion towards negative coordinates as opening.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum OpenSide {
    /// Opens from the left edge. Horizontal only.
    Left,
    /// Opens from the right edge. Horizontal only.
    Right,
    /// Opens from the top edge. Vertical only.
    Top,
    /// Opens from the bottom edge. Vertical only.
    Bottom,
}

impl OpenSide {
    /// The lowercase name of this side.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Top => "top",
            Self::Bottom => "bottom",
        }
    }

    /// The axis this side lies on.
    #[must_use]
    pub const fn axis(self) -> DragAxis {
        match self {
            Self::Left | Self::Right => DragAxis::Horizontal,
            Self::Top | Self::Bottom => DragAxis::Vertical,
        }
    }

    /// Whether motion towards positive coordinates opens the panel.
    #[must_use]
    pub const fn opens_positive(self) -> bool {
        matches!(self, Self::Right | Self::Bottom)
    }
}

impl FromStr for OpenSide {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            "top" => Ok(Self::Top),
            "bottom" => Ok(Self::Bottom),
            other => Err(ConfigError::UnknownSide(other.to_string())),
        }
    }
}

/// Thresholds governing the open/close decision at the end of a drag.
///
/// Speeds are in px/ms, distances in percent of the element extent.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SwitchBoundary {
    /// Minimum along-axis speed that counts as a fling.
    pub speed_threshold: Option<f64>,
    /// Minimum drag distance that counts as a deliberate switch.
    pub distance_threshold: Option<f64>,
}

impl SwitchBoundary {
    /// A boundary with no thresholds set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            speed_threshold: None,
            distance_threshold: None,
        }
    }

    /// Sets the speed threshold, in px/ms.
    #[must_use]
    pub const fn with_speed_threshold(mut self, speed: f64) -> Self {
        self.speed_threshold = Some(speed);
        self
    }

    /// Sets the distance threshold, in percent.
    #[must_use]
    pub const fn with_distance_threshold(mut self, distance: f64) -> Self {
        self.distance_threshold = Some(distance);
        self
    }
}

/// Immutable configuration of a [`PanelDrag`](crate::PanelDrag).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PanelDragConfig {
    /// Which axis the gesture tracks.
    pub axis: DragAxis,
    /// Which edge the panel opens from. Must lie on `axis`.
    pub side: OpenSide,
    /// Maximum deviation from `axis`, in degrees, before a gesture is ignored.
    pub angle_threshold: f64,
    /// End-of-drag thresholds. `None` leaves the decision to the caller.
    pub switch_boundary: Option<SwitchBoundary>,
}

impl PanelDragConfig {
    /// A configuration with the default angle threshold and no switch boundary.
    #[must_use]
    pub const fn new(axis: DragAxis, side: OpenSide) -> Self {
        Self {
            axis,
            side,
            angle_threshold: DEFAULT_ANGLE_THRESHOLD,
            switch_boundary: None,
        }
    }

    /// Sets the angle threshold, in degrees.
    #[must_use]
    pub const fn with_angle_threshold(mut self, degrees: f64) -> Self {
        self.angle_threshold = degrees;
        self
    }

    /// Sets the switch boundary.
    #[must_use]
    pub const fn with_switch_boundary(mut self, boundary: SwitchBoundary) -> Self {
        self.switch_boundary = Some(boundary);
        self
    }

    /// Parses axis and side names, as a host carrying string attributes would.
    pub fn parse(axis: &str, side: &str) -> Result<Self, ConfigError> {
        let config = Self::new(axis.parse()?, side.parse()?);
        config.validate()?;
        Ok(config)
    }

    /// Checks that this configuration can drive a recognizer.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.side.axis() != self.axis {
            return Err(ConfigError::SideAxisMismatch {
                axis: self.axis,
                side: self.side,
            });
        }
        if !(0.0..=90.0).contains(&self.angle_threshold) {
            return Err(ConfigError::AngleOutOfRange(self.angle_threshold));
        }
        if let Some(boundary) = self.switch_boundary {
            if let Some(speed) = boundary.speed_threshold
                && (speed.is_nan() || speed < 0.0)
            {
                return Err(ConfigError::NegativeSpeedThreshold(speed));
            }
            if let Some(distance) = boundary.distance_threshold
                && (distance.is_nan() || distance < 0.0)
            {
                return Err(ConfigError::NegativeDistanceThreshold(distance));
            }
        }
        Ok(())
    }
}
