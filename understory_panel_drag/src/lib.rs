// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Panel Drag: touch drag recognition for slide-in panels.
//!
//! This crate turns a stream of touch events on one surface into the state of
//! a panel that slides in from a screen edge (a drawer, a side sheet, a
//! bottom sheet). It handles:
//!
//! - **Axis locking**: the first move of a gesture decides whether the finger
//!   follows the tracked axis. Gestures steeper than the configured angle are
//!   ignored until the finger lifts, so vertical scrolling inside a
//!   horizontal drawer keeps working.
//! - **Visual feedback**: while dragging, the along-axis offset is converted
//!   to a percentage of the element's extent and added to the committed state
//!   to give an expansion percentage in `[0, 100]`.
//! - **Intent detection**: at the end of a gesture, a [`SwitchBoundary`] of
//!   speed and/or distance thresholds decides whether the panel should open or
//!   close.
//!
//! The crate does not assume any UI framework. Hosts decode their platform
//! events into something implementing [`TouchInput`] (or a [`TouchSample`]),
//! forward them to a [`PanelDrag`], and read back [`PanelState`]. Time comes
//! from the events; the crate never reads a clock.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use understory_panel_drag::{
//!     DragAxis, OpenSide, PanelDrag, PanelDragConfig, SwitchBoundary, TouchPhase, TouchSample,
//! };
//!
//! let config = PanelDragConfig::new(DragAxis::Horizontal, OpenSide::Right)
//!     .with_switch_boundary(
//!         SwitchBoundary::new()
//!             .with_speed_threshold(0.5)
//!             .with_distance_threshold(30.0),
//!     );
//! let mut drawer = PanelDrag::new(config)?
//!     .on_drag_end(|panel, end| panel.switch(end.switch));
//!
//! let surface = Size::new(320.0, 640.0);
//! drawer.handle(TouchPhase::Start, &mut TouchSample::new(Point::new(10.0, 300.0), surface, 0));
//!
//! // A quick flick to the right.
//! let mut flick = TouchSample::new(Point::new(90.0, 305.0), surface, 60);
//! drawer.handle(TouchPhase::Move, &mut flick);
//! assert!(flick.default_prevented);
//! assert_eq!(drawer.state().expansion_percent(), 25.0);
//!
//! drawer.handle(TouchPhase::End, &mut TouchSample::released(80));
//! assert!(drawer.state().is_open());
//! # Ok::<(), understory_panel_drag::ConfigError>(())
//! ```
//!
//! ## Deciding open or closed
//!
//! When a recognized gesture ends, the recognizer reports a [`DragEnd`] with
//! the final offset, the signed along-axis speed and the precomputed
//! [`SwitchTarget`]. Nothing is committed until the caller passes that target
//! to [`PanelControl::switch`] (inside the end callback) or
//! [`PanelDrag::switch`]. Without a boundary the target is `None` and callers
//! decide for themselves with `open()`/`close()`.
//!
//! See [`SwitchRule`] for the exact decision table.
//!
//! ## Features
//!
//! - `std` (default): use the standard library for float math.
//! - `libm`: use `libm` for float math in `no_std` builds.
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

mod config;
mod decision;
mod error;
mod input;
mod recognizer;
mod session;
mod state;

pub use config::{DEFAULT_ANGLE_THRESHOLD, DragAxis, OpenSide, PanelDragConfig, SwitchBoundary};
pub use decision::{EDGE_BAND_PERCENT, SwitchRule, SwitchTarget, TriggerRule};
pub use error::ConfigError;
pub use input::{TouchInput, TouchPhase, TouchSample};
pub use recognizer::{DragEnd, DragMove, DragStart, PanelDrag, Toward, TowardX, TowardY};
pub use session::{AxisLock, DragSession, deviation_degrees};
pub use state::{PanelControl, PanelState};
