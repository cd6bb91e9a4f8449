// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Saved painter state, the [`Contours`] bundle handed to a
//! [`PaintEngine`](crate::engine::PaintEngine), and the [`PaintSaver`]
//! scope guard.

use crate::geom::Mat2x3;
use crate::path::Path;
use crate::rect::Rect;

/// One entry of the [`Painter`](crate::painter::Painter)'s save/restore
/// stack.
#[derive(Clone, Debug)]
pub(crate) struct SavedState {
    pub(crate) transform: Mat2x3,
    /// Accumulated clip bounds in device space, used for a cheap
    /// quick-reject before handing geometry to the back-end. The
    /// precise clip shape itself lives in the back-end's own state.
    pub(crate) clip_bounds: Rect,
    /// Whether this stack entry corresponds to a pushed compositing
    /// layer, so `restore` knows to also call `compose_layer`.
    pub(crate) is_layer: bool,
    /// Suppresses fills/strokes without suppressing state tracking, set
    /// once the clip bounds become empty so later calls are cheap no-ops
    /// instead of handed to the back-end to reject.
    pub(crate) discard: bool,
    /// Whether area this frame never draws into is left as-is
    /// (`true`) or painted with the engine's background brush
    /// (`false`).
    pub(crate) pass_transparent: bool,
}

impl SavedState {
    pub(crate) fn root(bounds: Rect, pass_transparent: bool) -> Self {
        Self { transform: Mat2x3::IDENTITY, clip_bounds: bounds, is_layer: false, discard: bounds.is_empty(), pass_transparent }
    }
}

/// A device-space path ready to hand to a [`PaintEngine`](crate::engine::PaintEngine),
/// together with its bounds, produced by [`Painter::prepare_contours`](crate::painter::Painter::prepare_contours).
#[derive(Clone, Debug)]
pub struct Contours {
    /// The flattened, transformed geometry.
    pub path: Path,
    /// The geometry's bounds, in the same (device) space as `path`.
    pub bounds: Rect,
}

impl Contours {
    /// Whether there is no geometry to draw.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.path.is_empty() || self.bounds.is_empty()
    }
}

/// An RAII guard for [`Painter::save`](crate::painter::Painter::save):
/// restores the painter's state when dropped, or when [`restore`](Self::restore)
/// is called explicitly.
///
/// Dropping without calling `restore` is the common case (the `?`
/// operator or an early return unwinding past the guard should still
/// leave the painter balanced). Because `Drop::drop` runs during a panic
/// unwind too, it deliberately does not re-assert stack balance the way
/// [`Painter::restore`](crate::painter::Painter::restore) does directly: panicking again while already
/// unwinding would abort the process instead of propagating the
/// original panic.
#[must_use = "dropping a PaintSaver immediately restores; bind it to a variable to hold the save"]
pub struct PaintSaver<'p, E> {
    painter: Option<&'p mut crate::painter::Painter<E>>,
}

impl<'p, E: crate::engine::PaintEngine> PaintSaver<'p, E> {
    pub(crate) fn new(painter: &'p mut crate::painter::Painter<E>) -> Self {
        Self { painter: Some(painter) }
    }

    /// Restores the painter's state now, consuming the guard. Equivalent
    /// to dropping it, but lets the restore happen somewhere other than
    /// the end of the enclosing scope.
    pub fn restore(mut self) {
        if let Some(p) = self.painter.take() {
            p.restore();
        }
    }
}

impl<E: crate::engine::PaintEngine> Drop for PaintSaver<'_, E> {
    fn drop(&mut self) {
        if let Some(p) = self.painter.take() {
            p.restore_for_drop();
        }
    }
}

impl<E> core::fmt::Debug for PaintSaver<'_, E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PaintSaver").field("active", &self.painter.is_some()).finish()
    }
}
