// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Observable panel state and the open/close capability handed to callbacks.

use crate::decision::SwitchTarget;

/// Panel state visible to the host for the recognizer's whole lifetime.
///
/// Only the recognizer (or a [`PanelControl`] it lends out) mutates this.
/// `revision` increases whenever any field changes, so hosts without a
/// reactive runtime can poll for re-render.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct PanelState {
    expansion_percent: f64,
    is_dragging: bool,
    is_open: bool,
    revision: u64,
}

impl PanelState {
    /// Visual openness, 0 = fully closed, 100 = fully open.
    #[must_use]
    pub fn expansion_percent(&self) -> f64 {
        self.expansion_percent
    }

    /// Whether a gesture is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    /// The committed open/closed state.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Change counter, bumped on every observable change.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub(crate) fn set_expansion(&mut self, percent: f64) {
        let percent = percent.clamp(0.0, 100.0);
        if percent != self.expansion_percent {
            self.expansion_percent = percent;
            self.bump();
        }
    }

    pub(crate) fn set_dragging(&mut self, dragging: bool) {
        if dragging != self.is_dragging {
            self.is_dragging = dragging;
            self.bump();
        }
    }

    pub(crate) fn commit(&mut self, target: SwitchTarget) {
        let open = target == SwitchTarget::Open;
        if open != self.is_open {
            self.is_open = open;
            self.bump();
        }
        self.set_expansion(if open { 100.0 } else { 0.0 });
        tracing::debug!(?target, "panel state committed");
    }

    /// Expansion implied by the committed state plus a signed drag offset.
    pub(crate) fn expansion_with(&self, offset_percent: f64) -> f64 {
        let base = if self.is_open { 100.0 } else { 0.0 };
        (base + offset_percent).clamp(0.0, 100.0)
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

/// The restricted interface lifecycle callbacks receive.
///
/// Callbacks may read the panel state and commit open/closed, but cannot
/// touch the gesture session.
#[derive(Debug)]
pub struct PanelControl<'a> {
    state: &'a mut PanelState,
}

impl<'a> PanelControl<'a> {
    pub(crate) fn new(state: &'a mut PanelState) -> Self {
        Self { state }
    }

    /// Open the panel: `is_open = true`, expansion 100.
    pub fn open(&mut self) {
        self.state.commit(SwitchTarget::Open);
    }

    /// Close the panel: `is_open = false`, expansion 0.
    pub fn close(&mut self) {
        self.state.commit(SwitchTarget::Close);
    }

    /// Commit a decision computed at the end of a drag. `None` does nothing.
    pub fn switch(&mut self, target: Option<SwitchTarget>) {
        if let Some(target) = target {
            self.state.commit(target);
        }
    }

    /// Read-only view of the panel state.
    #[must_use]
    pub fn state(&self) -> &PanelState {
        self.state
    }
}
