// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The panel drag recognizer.

use alloc::boxed::Box;
use core::fmt;

use kurbo::{Point, Vec2};

use crate::config::PanelDragConfig;
use crate::decision::{SwitchRule, SwitchTarget};
use crate::error::ConfigError;
use crate::input::{TouchInput, TouchPhase};
use crate::session::{AxisLock, DragSession};
use crate::state::{PanelControl, PanelState};

/// Horizontal component of a drag direction.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TowardX {
    /// Towards negative x. Also used for zero offset.
    Left,
    /// Towards positive x.
    Right,
}

/// Vertical component of a drag direction, in screen coordinates (y down).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TowardY {
    /// Towards negative y. Also used for zero offset.
    Top,
    /// Towards positive y.
    Bottom,
}

/// Direction of the cumulative drag offset on each axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Toward {
    /// Horizontal direction.
    pub x: TowardX,
    /// Vertical direction.
    pub y: TowardY,
}

impl Toward {
    /// Classify `offset` by the sign of each component.
    #[must_use]
    pub fn from_offset(offset: Vec2) -> Self {
        Self {
            x: if offset.x > 0.0 {
                TowardX::Right
            } else {
                TowardX::Left
            },
            y: if offset.y > 0.0 {
                TowardY::Bottom
            } else {
                TowardY::Top
            },
        }
    }
}

/// Passed to the start callback.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DragStart {
    /// First touch position.
    pub origin: Point,
    /// Event time, in milliseconds.
    pub timestamp_ms: u64,
    /// Element size along the tracked axis.
    pub axis_extent: f64,
}

/// Passed to the move callback for every accepted on-axis move.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DragMove {
    /// Offset of the current touch from the origin.
    pub offset: Vec2,
    /// Along-axis offset in percent of the element extent. Signed.
    pub offset_percent: f64,
    /// First touch position.
    pub origin: Point,
    /// Expansion after applying this move.
    pub expansion_percent: f64,
    /// Direction of `offset`.
    pub toward: Toward,
}

/// Passed to the end callback once a recognized gesture completes.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DragEnd {
    /// Final along-axis offset in percent of the element extent. Signed.
    pub offset_percent: f64,
    /// Signed along-axis speed, in px/ms.
    pub speed: f64,
    /// Speed of the full 2-D offset, in px/ms.
    pub speed_with_angle: f64,
    /// Committed state when the gesture ended.
    pub is_open: bool,
    /// What the switch boundary decided. `None` if no boundary is configured.
    ///
    /// Nothing is committed until the decision is passed to
    /// [`PanelControl::switch`] or [`PanelDrag::switch`].
    pub switch: Option<SwitchTarget>,
}

type StartCallback = Box<dyn FnMut(&mut PanelControl<'_>, &DragStart)>;
type MoveCallback = Box<dyn FnMut(&mut PanelControl<'_>, &DragMove)>;
type EndCallback = Box<dyn FnMut(&mut PanelControl<'_>, &DragEnd)>;

/// Turns touch events on one surface into an open/closed panel state.
///
/// ```
/// use kurbo::{Point, Size};
/// use understory_panel_drag::{
///     DragAxis, OpenSide, PanelDrag, PanelDragConfig, SwitchBoundary, TouchSample,
/// };
///
/// let config = PanelDragConfig::new(DragAxis::Horizontal, OpenSide::Right)
///     .with_switch_boundary(SwitchBoundary::new().with_distance_threshold(30.0));
/// let mut drag = PanelDrag::new(config)
///     .unwrap()
///     .on_drag_end(|panel, end| panel.switch(end.switch));
///
/// let surface = Size::new(200.0, 600.0);
/// drag.on_touch_start(&mut TouchSample::new(Point::new(0.0, 0.0), surface, 0));
/// drag.on_touch_move(&mut TouchSample::new(Point::new(80.0, 4.0), surface, 120));
/// assert_eq!(drag.state().expansion_percent(), 40.0);
///
/// drag.on_touch_end(&mut TouchSample::released(150));
/// assert!(drag.state().is_open());
/// assert_eq!(drag.state().expansion_percent(), 100.0);
/// ```
pub struct PanelDrag {
    config: PanelDragConfig,
    switch_rule: Option<SwitchRule>,
    session: DragSession,
    state: PanelState,
    on_drag_start: Option<StartCallback>,
    on_drag_move: Option<MoveCallback>,
    on_drag_end: Option<EndCallback>,
}

impl fmt::Debug for PanelDrag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PanelDrag")
            .field("config", &self.config)
            .field("switch_rule", &self.switch_rule)
            .field("session", &self.session)
            .field("state", &self.state)
            .field("on_drag_start", &self.on_drag_start.is_some())
            .field("on_drag_move", &self.on_drag_move.is_some())
            .field("on_drag_end", &self.on_drag_end.is_some())
            .finish()
    }
}

impl PanelDrag {
    /// Build a recognizer, starting closed.
    pub fn new(config: PanelDragConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            switch_rule: config
                .switch_boundary
                .map(|boundary| SwitchRule::new(config.side, boundary)),
            config,
            session: DragSession::default(),
            state: PanelState::default(),
            on_drag_start: None,
            on_drag_move: None,
            on_drag_end: None,
        })
    }

    /// Call `f` when a gesture starts.
    #[must_use]
    pub fn on_drag_start(
        mut self,
        f: impl FnMut(&mut PanelControl<'_>, &DragStart) + 'static,
    ) -> Self {
        self.on_drag_start = Some(Box::new(f));
        self
    }

    /// Call `f` for every accepted on-axis move.
    #[must_use]
    pub fn on_drag_move(
        mut self,
        f: impl FnMut(&mut PanelControl<'_>, &DragMove) + 'static,
    ) -> Self {
        self.on_drag_move = Some(Box::new(f));
        self
    }

    /// Call `f` when a recognized gesture ends or is cancelled.
    #[must_use]
    pub fn on_drag_end(mut self, f: impl FnMut(&mut PanelControl<'_>, &DragEnd) + 'static) -> Self {
        self.on_drag_end = Some(Box::new(f));
        self
    }

    /// The configuration this recognizer was built with.
    #[must_use]
    pub fn config(&self) -> &PanelDragConfig {
        &self.config
    }

    /// Observable panel state.
    #[must_use]
    pub fn state(&self) -> &PanelState {
        &self.state
    }

    /// Axis lock of the current gesture.
    #[must_use]
    pub fn axis_lock(&self) -> AxisLock {
        self.session.lock()
    }

    /// The current (or most recent) gesture session.
    #[must_use]
    pub fn session(&self) -> &DragSession {
        &self.session
    }

    /// Open the panel: `is_open = true`, expansion 100.
    pub fn open(&mut self) {
        self.control().open();
    }

    /// Close the panel: `is_open = false`, expansion 0.
    pub fn close(&mut self) {
        self.control().close();
    }

    /// Commit a [`DragEnd::switch`] decision. `None` does nothing.
    pub fn switch(&mut self, target: Option<SwitchTarget>) {
        self.control().switch(target);
    }

    /// Route an event to the handler for `phase`.
    pub fn handle(&mut self, phase: TouchPhase, event: &mut impl TouchInput) {
        match phase {
            TouchPhase::Start => {
                self.on_touch_start(event);
            }
            TouchPhase::Move => {
                self.on_touch_move(event);
            }
            TouchPhase::End => {
                self.on_touch_end(event);
            }
            TouchPhase::Cancel => {
                self.on_touch_cancel(event);
            }
        }
    }

    /// Handle `touchstart`. Returns `true` if a gesture began.
    ///
    /// Ignored while a gesture is already in progress, when the target has no
    /// usable size, or when the event carries no touch.
    pub fn on_touch_start(&mut self, event: &mut impl TouchInput) -> bool {
        if self.state.is_dragging() {
            return false;
        }
        let Some(size) = event.surface_size() else {
            return false;
        };
        let extent = self.config.axis.extent(size);
        if !extent.is_finite() || extent <= 0.0 {
            return false;
        }
        let Some(origin) = event.primary_touch().filter(|p| p.is_finite()) else {
            return false;
        };
        let timestamp_ms = event.timestamp_ms();

        self.session.start(origin, timestamp_ms, extent);
        self.state.set_dragging(true);
        tracing::debug!(x = origin.x, y = origin.y, extent, "panel drag started");

        let start = DragStart {
            origin,
            timestamp_ms,
            axis_extent: extent,
        };
        if let Some(callback) = self.on_drag_start.as_mut() {
            callback(&mut PanelControl::new(&mut self.state), &start);
        }
        true
    }

    /// Handle `touchmove`. Returns the move payload if the move was accepted.
    pub fn on_touch_move(&mut self, event: &mut impl TouchInput) -> Option<DragMove> {
        if !self.state.is_dragging() || self.session.lock() == AxisLock::OffAxis {
            return None;
        }
        let touch = event.primary_touch().filter(|p| p.is_finite())?;
        let offset = self.session.update(touch)?;
        if self
            .session
            .resolve_lock(self.config.axis, self.config.angle_threshold)
            == AxisLock::OffAxis
        {
            return None;
        }

        event.prevent_default();
        let offset_percent = self.session.offset_percent(self.config.axis);
        self.state
            .set_expansion(self.state.expansion_with(offset_percent));

        let moved = DragMove {
            offset,
            offset_percent,
            origin: self.session.origin.unwrap_or(touch),
            expansion_percent: self.state.expansion_percent(),
            toward: Toward::from_offset(offset),
        };
        tracing::trace!(
            dx = offset.x,
            dy = offset.y,
            offset_percent,
            "panel drag moved"
        );
        if let Some(callback) = self.on_drag_move.as_mut() {
            callback(&mut PanelControl::new(&mut self.state), &moved);
        }
        Some(moved)
    }

    /// Handle `touchend`. Returns the end payload if a recognized gesture completed.
    ///
    /// Off-axis gestures settle silently and return `None`.
    pub fn on_touch_end(&mut self, event: &mut impl TouchInput) -> Option<DragEnd> {
        if !self.state.is_dragging() {
            return None;
        }
        self.state.set_dragging(false);
        let lock = self.session.lock();
        self.session.end();
        if lock == AxisLock::OffAxis {
            tracing::debug!("off-axis gesture ignored");
            return None;
        }

        let axis = self.config.axis;
        let elapsed = self.session.elapsed_ms(event.timestamp_ms());
        let offset = self.session.offset;
        let along = axis.along(offset);
        let speed = along / elapsed;
        let speed_with_angle = offset.hypot() / elapsed;
        let offset_percent = self.session.offset_percent(axis);
        self.state
            .set_expansion(self.state.expansion_with(offset_percent));

        let is_open = self.state.is_open();
        let switch = self
            .switch_rule
            .map(|rule| rule.decide(is_open, speed, along, offset_percent));
        let end = DragEnd {
            offset_percent,
            speed,
            speed_with_angle,
            is_open,
            switch,
        };
        tracing::debug!(
            speed,
            speed_with_angle,
            offset_percent,
            ?switch,
            "panel drag ended"
        );
        if let Some(callback) = self.on_drag_end.as_mut() {
            callback(&mut PanelControl::new(&mut self.state), &end);
        }
        Some(end)
    }

    /// Handle `touchcancel`, identically to [`PanelDrag::on_touch_end`].
    pub fn on_touch_cancel(&mut self, event: &mut impl TouchInput) -> Option<DragEnd> {
        self.on_touch_end(event)
    }

    fn control(&mut self) -> PanelControl<'_> {
        PanelControl::new(&mut self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DragAxis, OpenSide, SwitchBoundary};
    use crate::input::TouchSample;
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::{Cell, RefCell};
    use kurbo::Size;

    const SURFACE: Size = Size::new(200.0, 400.0);

    fn at(x: f64, y: f64, t: u64) -> TouchSample {
        TouchSample::new(Point::new(x, y), SURFACE, t)
    }

    fn horizontal_right() -> PanelDrag {
        PanelDrag::new(PanelDragConfig::new(DragAxis::Horizontal, OpenSide::Right)).unwrap()
    }

    fn with_distance(side: OpenSide, distance: f64) -> PanelDrag {
        let config = PanelDragConfig::new(side.axis(), side)
            .with_switch_boundary(SwitchBoundary::new().with_distance_threshold(distance));
        PanelDrag::new(config)
            .unwrap()
            .on_drag_end(|panel, end| panel.switch(end.switch))
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = PanelDragConfig::new(DragAxis::Horizontal, OpenSide::Top);
        assert!(matches!(
            PanelDrag::new(config),
            Err(ConfigError::SideAxisMismatch { .. })
        ));
    }

    #[test]
    fn quarter_drag_expands_quarter() {
        let mut drag = horizontal_right();
        assert!(drag.on_touch_start(&mut at(0.0, 0.0, 0)));
        assert!(drag.state().is_dragging());

        let mut event = at(50.0, 0.0, 16);
        let moved = drag.on_touch_move(&mut event).unwrap();

        assert_eq!(moved.offset_percent, 25.0);
        assert_eq!(moved.expansion_percent, 25.0);
        assert_eq!(drag.state().expansion_percent(), 25.0);
        assert_eq!(drag.axis_lock(), AxisLock::OnAxis);
        assert!(event.default_prevented);
        assert_eq!(
            moved.toward,
            Toward {
                x: TowardX::Right,
                y: TowardY::Top,
            }
        );
    }

    #[test]
    fn steep_move_locks_off_axis() {
        let moves = Rc::new(Cell::new(0_u32));
        let counter = moves.clone();
        let mut drag = horizontal_right().on_drag_move(move |_, _| counter.set(counter.get() + 1));

        drag.on_touch_start(&mut at(0.0, 0.0, 0));
        let mut steep = at(10.0, 50.0, 16);
        assert_eq!(drag.on_touch_move(&mut steep), None);
        assert!(!steep.default_prevented);
        assert_eq!(drag.axis_lock(), AxisLock::OffAxis);

        // Later on-axis moves in the same gesture stay rejected.
        let mut flat = at(150.0, 50.0, 32);
        assert_eq!(drag.on_touch_move(&mut flat), None);
        assert!(!flat.default_prevented);
        assert_eq!(moves.get(), 0);
        assert_eq!(drag.state().expansion_percent(), 0.0);

        assert_eq!(drag.on_touch_end(&mut TouchSample::released(50)), None);
        assert_eq!(drag.axis_lock(), AxisLock::Undetermined);
        assert!(!drag.state().is_dragging());
    }

    #[test]
    fn move_without_start_is_ignored() {
        let mut drag = horizontal_right();
        let mut event = at(50.0, 0.0, 16);
        assert_eq!(drag.on_touch_move(&mut event), None);
        assert!(!event.default_prevented);
        assert_eq!(drag.axis_lock(), AxisLock::Undetermined);
    }

    #[test]
    fn start_is_not_reentrant() {
        let starts = Rc::new(Cell::new(0_u32));
        let counter = starts.clone();
        let mut drag = horizontal_right().on_drag_start(move |_, _| counter.set(counter.get() + 1));

        assert!(drag.on_touch_start(&mut at(0.0, 0.0, 0)));
        assert!(!drag.on_touch_start(&mut at(30.0, 30.0, 10)));
        assert_eq!(starts.get(), 1);
        assert_eq!(drag.session().origin, Some(Point::ZERO));
    }

    #[test]
    fn start_without_surface_is_ignored() {
        let mut drag = horizontal_right();
        let mut no_surface = TouchSample {
            surface: None,
            ..at(0.0, 0.0, 0)
        };
        assert!(!drag.on_touch_start(&mut no_surface));
        assert!(!drag.state().is_dragging());

        let mut empty = TouchSample::new(Point::ZERO, Size::new(0.0, 400.0), 0);
        assert!(!drag.on_touch_start(&mut empty));

        let mut no_touch = TouchSample {
            touch: None,
            ..at(0.0, 0.0, 0)
        };
        assert!(!drag.on_touch_start(&mut no_touch));
        assert_eq!(drag.state().revision(), 0);
    }

    #[test]
    fn expansion_stays_in_range_mid_drag() {
        let mut drag = horizontal_right();
        drag.open();
        drag.on_touch_start(&mut at(100.0, 0.0, 0));
        for x in [120.0, 400.0, 60.0, -300.0, 0.0] {
            drag.on_touch_move(&mut at(x, 0.0, 10));
            let expansion = drag.state().expansion_percent();
            assert!((0.0..=100.0).contains(&expansion), "{expansion} at x={x}");
        }
        // Open panel dragged back by half its width.
        drag.on_touch_move(&mut at(0.0, 0.0, 20));
        assert_eq!(drag.state().expansion_percent(), 50.0);
        // Committed state does not change mid-drag.
        assert!(drag.state().is_open());
    }

    #[test]
    fn distance_threshold_opens_past_boundary() {
        let mut drag = with_distance(OpenSide::Right, 30.0);
        drag.on_touch_start(&mut at(0.0, 0.0, 0));
        drag.on_touch_move(&mut at(80.0, 0.0, 100));
        let end = drag.on_touch_end(&mut TouchSample::released(200)).unwrap();

        assert_eq!(end.offset_percent, 40.0);
        assert_eq!(end.switch, Some(SwitchTarget::Open));
        assert!(drag.state().is_open());
        assert_eq!(drag.state().expansion_percent(), 100.0);
    }

    #[test]
    fn distance_threshold_closes_short_of_boundary() {
        let mut drag = with_distance(OpenSide::Right, 30.0);
        drag.on_touch_start(&mut at(0.0, 0.0, 0));
        drag.on_touch_move(&mut at(40.0, 0.0, 100));
        assert_eq!(drag.state().expansion_percent(), 20.0);

        let end = drag.on_touch_end(&mut TouchSample::released(200)).unwrap();

        assert_eq!(end.offset_percent, 20.0);
        assert_eq!(end.switch, Some(SwitchTarget::Close));
        assert!(!drag.state().is_open());
        assert_eq!(drag.state().expansion_percent(), 0.0);
    }

    #[test]
    fn end_reports_speeds() {
        let mut drag = horizontal_right();
        drag.on_touch_start(&mut at(0.0, 0.0, 1_000));
        drag.on_touch_move(&mut at(30.0, 40.0 / 3.0, 1_050));
        drag.on_touch_move(&mut at(60.0, 80.0 / 3.0, 1_080));
        let end = drag.on_touch_end(&mut TouchSample::released(1_100)).unwrap();

        assert_eq!(end.speed, 0.6);
        let expected = Vec2::new(60.0, 80.0 / 3.0).hypot() / 100.0;
        assert!((end.speed_with_angle - expected).abs() < 1e-12);
        assert!(!end.is_open);
        // No boundary: the decision is left to the caller.
        assert_eq!(end.switch, None);
        assert_eq!(drag.state().expansion_percent(), 30.0);
    }

    #[test]
    fn no_boundary_leaves_state_uncommitted() {
        let mut drag = horizontal_right().on_drag_end(|panel, end| panel.switch(end.switch));
        drag.on_touch_start(&mut at(0.0, 0.0, 0));
        drag.on_touch_move(&mut at(180.0, 0.0, 10));
        drag.on_touch_end(&mut TouchSample::released(20));
        assert!(!drag.state().is_open());
        assert_eq!(drag.state().expansion_percent(), 90.0);
    }

    #[test]
    fn cancel_settles_like_end() {
        let mut drag = with_distance(OpenSide::Right, 30.0);
        drag.on_touch_start(&mut at(0.0, 0.0, 0));
        drag.on_touch_move(&mut at(100.0, 0.0, 50));

        let end = drag.on_touch_cancel(&mut TouchSample::released(60));

        assert!(end.is_some());
        assert!(!drag.state().is_dragging());
        assert_eq!(drag.axis_lock(), AxisLock::Undetermined);
        assert!(drag.state().is_open());

        // A new gesture can begin immediately.
        assert!(drag.on_touch_start(&mut at(0.0, 0.0, 100)));
    }

    #[test]
    fn end_without_start_is_ignored() {
        let ends = Rc::new(Cell::new(0_u32));
        let counter = ends.clone();
        let mut drag = horizontal_right().on_drag_end(move |_, _| counter.set(counter.get() + 1));
        assert_eq!(drag.on_touch_end(&mut TouchSample::released(0)), None);
        assert_eq!(ends.get(), 0);
    }

    #[test]
    fn full_cycle_always_resets() {
        for points in [
            &[(60.0, 2.0), (120.0, 3.0)][..],
            &[(2.0, 60.0), (120.0, 60.0)][..],
            &[][..],
        ] {
            let mut drag = with_distance(OpenSide::Right, 30.0);
            drag.on_touch_start(&mut at(0.0, 0.0, 0));
            for (i, &(x, y)) in points.iter().enumerate() {
                drag.on_touch_move(&mut at(x, y, 10 * (i as u64 + 1)));
            }
            drag.on_touch_end(&mut TouchSample::released(100));
            assert_eq!(drag.axis_lock(), AxisLock::Undetermined);
            assert!(!drag.state().is_dragging());
        }
    }

    #[test]
    fn open_close_are_idempotent() {
        let mut drag = horizontal_right();
        drag.open();
        let once = *drag.state();
        drag.open();
        assert_eq!(*drag.state(), once);

        drag.close();
        drag.open();
        assert!(drag.state().is_open());
        assert_eq!(drag.state().expansion_percent(), 100.0);
        drag.open();
        drag.close();
        assert!(!drag.state().is_open());
        assert_eq!(drag.state().expansion_percent(), 0.0);
    }

    #[test]
    fn callbacks_receive_payloads_and_control() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let (start_log, move_log, end_log) = (log.clone(), log.clone(), log.clone());
        let mut drag = horizontal_right()
            .on_drag_start(move |panel, start| {
                start_log.borrow_mut().push(("start", start.axis_extent));
                assert!(panel.state().is_dragging());
            })
            .on_drag_move(move |_, moved| {
                move_log.borrow_mut().push(("move", moved.offset_percent));
            })
            .on_drag_end(move |panel, end| {
                end_log.borrow_mut().push(("end", end.offset_percent));
                // Callers without a boundary decide for themselves.
                if end.offset_percent > 50.0 {
                    panel.open();
                } else {
                    panel.close();
                }
            });

        drag.on_touch_start(&mut at(0.0, 0.0, 0));
        drag.on_touch_move(&mut at(60.0, 0.0, 10));
        drag.on_touch_move(&mut at(120.0, 0.0, 20));
        drag.on_touch_end(&mut TouchSample::released(30));

        assert_eq!(
            *log.borrow(),
            [("start", 200.0), ("move", 30.0), ("move", 60.0), ("end", 60.0)]
        );
        assert!(drag.state().is_open());
    }

    #[test]
    fn vertical_top_panel_opens_upwards() {
        let mut drag = with_distance(OpenSide::Top, 30.0);
        drag.on_touch_start(&mut at(50.0, 300.0, 0));
        let moved = drag.on_touch_move(&mut at(52.0, 150.0, 100)).unwrap();
        assert_eq!(moved.offset_percent, -37.5);
        assert_eq!(moved.toward.y, TowardY::Top);

        let end = drag.on_touch_end(&mut TouchSample::released(150)).unwrap();
        assert_eq!(end.switch, Some(SwitchTarget::Open));
        assert!(drag.state().is_open());
    }

    #[test]
    fn dispatch_routes_phases() {
        let mut drag = with_distance(OpenSide::Right, 30.0);
        drag.handle(TouchPhase::Start, &mut at(0.0, 0.0, 0));
        assert!(drag.state().is_dragging());
        let mut event = at(100.0, 0.0, 20);
        drag.handle(TouchPhase::Move, &mut event);
        assert!(event.default_prevented);
        drag.handle(TouchPhase::End, &mut TouchSample::released(40));
        assert!(drag.state().is_open());

        drag.handle(TouchPhase::Start, &mut at(100.0, 0.0, 100));
        drag.handle(TouchPhase::Cancel, &mut TouchSample::released(110));
        assert!(!drag.state().is_dragging());
    }
}
