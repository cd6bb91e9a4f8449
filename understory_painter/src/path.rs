// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! [`Path`]: a sequence of subpaths built from move/line/quad/cubic/close
//! commands, with cached bounds and degenerate-point filtering.

use alloc::vec::Vec;
use core::cell::Cell;

use crate::geom::Vec2;
use crate::rect::Rect;

/// Squared distance below which two points are treated as coincident when
/// building a path, suppressing the zero-length segment that would
/// otherwise result.
const DEGENERATE_TOLERANCE_SQ: f64 = 1e-6 * 1e-6;

fn nearly_equal(a: Vec2, b: Vec2) -> bool {
    a.distance_squared(b) < DEGENERATE_TOLERANCE_SQ
}

/// A single drawing command within a [`Subpath`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PathCommand {
    /// Starts a new subpath at the given point (only ever the first
    /// command of a [`Subpath`]).
    MoveTo(Vec2),
    /// A straight line to the given point.
    LineTo(Vec2),
    /// A quadratic Bézier curve, `(control, end)`.
    QuadTo(Vec2, Vec2),
    /// A cubic Bézier curve, `(control1, control2, end)`.
    CurveTo(Vec2, Vec2, Vec2),
    /// Closes the subpath with a straight line back to its start point.
    Close,
}

/// A contiguous run of connected path commands starting with a
/// [`PathCommand::MoveTo`].
#[derive(Clone, Debug)]
pub struct Subpath {
    commands: Vec<PathCommand>,
    start: Vec2,
    closed: bool,
}

impl Subpath {
    fn new(start: Vec2) -> Self {
        Self { commands: alloc::vec![PathCommand::MoveTo(start)], start, closed: false }
    }

    /// The commands making up this subpath, starting with a `MoveTo`.
    #[must_use]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// This subpath's start point.
    #[must_use]
    pub fn start(&self) -> Vec2 {
        self.start
    }

    /// Whether [`Path::close`] has been called on this subpath.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

/// A path: a list of [`Subpath`]s, each a connected run of line and curve
/// segments.
///
/// Bounds are computed from every point in every command, including
/// curve control points (a cheap, conservative bound: a Bézier curve
/// always lies within the convex hull of its control points), and are
/// cached until the next mutation.
#[derive(Debug)]
pub struct Path {
    subpaths: Vec<Subpath>,
    current: Vec2,
    bounds_cache: Cell<Option<Rect>>,
}

impl Path {
    /// An empty path.
    #[must_use]
    pub fn new() -> Self {
        Self { subpaths: Vec::new(), current: Vec2::ZERO, bounds_cache: Cell::new(Some(Rect::EMPTY)) }
    }

    /// Whether this path has no subpaths.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subpaths.is_empty()
    }

    /// The point the next drawing command will start from.
    #[must_use]
    pub fn current_point(&self) -> Vec2 {
        self.current
    }

    /// All subpaths, in drawing order.
    #[must_use]
    pub fn subpaths(&self) -> &[Subpath] {
        &self.subpaths
    }

    fn invalidate_bounds(&mut self) {
        self.bounds_cache.set(None);
    }

    fn active_subpath_mut(&mut self) -> Option<&mut Subpath> {
        match self.subpaths.last() {
            Some(sp) if !sp.closed => self.subpaths.last_mut(),
            _ => None,
        }
    }

    /// Starts a new subpath at `p`.
    pub fn move_to(&mut self, p: Vec2) {
        self.subpaths.push(Subpath::new(p));
        self.current = p;
        self.invalidate_bounds();
    }

    fn ensure_open_subpath(&mut self) {
        if self.active_subpath_mut().is_none() {
            // Drawing without an open subpath (either the very first
            // command, or right after `close`) implicitly starts one at
            // the current point.
            self.move_to(self.current);
        }
    }

    /// A straight line to `p`. A no-op if `p` coincides with the current
    /// point within tolerance.
    pub fn line_to(&mut self, p: Vec2) {
        if nearly_equal(self.current, p) {
            return;
        }
        self.ensure_open_subpath();
        self.active_subpath_mut().expect("subpath just ensured open").commands.push(PathCommand::LineTo(p));
        self.current = p;
        self.invalidate_bounds();
    }

    /// A quadratic Bézier curve through control point `c` to `end`. A
    /// no-op if `c` and `end` both coincide with the current point
    /// within tolerance.
    pub fn quad_to(&mut self, c: Vec2, end: Vec2) {
        if nearly_equal(self.current, c) && nearly_equal(self.current, end) {
            return;
        }
        self.ensure_open_subpath();
        self.active_subpath_mut().expect("subpath just ensured open").commands.push(PathCommand::QuadTo(c, end));
        self.current = end;
        self.invalidate_bounds();
    }

    /// A cubic Bézier curve through control points `c1`, `c2` to `end`.
    /// A no-op if all three coincide with the current point within
    /// tolerance.
    pub fn curve_to(&mut self, c1: Vec2, c2: Vec2, end: Vec2) {
        if nearly_equal(self.current, c1) && nearly_equal(self.current, c2) && nearly_equal(self.current, end) {
            return;
        }
        self.ensure_open_subpath();
        self.active_subpath_mut().expect("subpath just ensured open").commands.push(PathCommand::CurveTo(c1, c2, end));
        self.current = end;
        self.invalidate_bounds();
    }

    /// Closes the current subpath with a straight line back to its start
    /// point. A no-op if there is no open subpath.
    pub fn close(&mut self) {
        let Some(sp) = self.active_subpath_mut() else { return };
        sp.commands.push(PathCommand::Close);
        sp.closed = true;
        self.current = sp.start;
        self.invalidate_bounds();
    }

    /// Removes every subpath, resetting the current point to the origin.
    pub fn clear(&mut self) {
        self.subpaths.clear();
        self.current = Vec2::ZERO;
        self.bounds_cache.set(Some(Rect::EMPTY));
    }

    /// The bounding box of every point in every command, including curve
    /// control points. Cached until the next mutating call.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        if let Some(b) = self.bounds_cache.get() {
            return b;
        }
        let mut b = Rect::EMPTY;
        for sp in &self.subpaths {
            for cmd in &sp.commands {
                match *cmd {
                    PathCommand::MoveTo(p) | PathCommand::LineTo(p) => b = b.include_point(p),
                    PathCommand::QuadTo(c, p) => {
                        b = b.include_point(c);
                        b = b.include_point(p);
                    }
                    PathCommand::CurveTo(c1, c2, p) => {
                        b = b.include_point(c1);
                        b = b.include_point(c2);
                        b = b.include_point(p);
                    }
                    PathCommand::Close => {}
                }
            }
        }
        self.bounds_cache.set(Some(b));
        b
    }
}

impl Default for Path {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for Path {
    fn clone(&self) -> Self {
        Self { subpaths: self.subpaths.clone(), current: self.current, bounds_cache: Cell::new(self.bounds_cache.get()) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_path_is_empty() {
        let p = Path::new();
        assert!(p.is_empty());
        assert!(p.bounds().is_empty());
    }

    #[test]
    fn line_to_equal_to_current_point_is_filtered() {
        let mut p = Path::new();
        p.move_to(Vec2::new(1.0, 1.0));
        p.line_to(Vec2::new(1.0, 1.0));
        assert_eq!(p.subpaths()[0].commands().len(), 1);
    }

    #[test]
    fn close_returns_current_point_to_subpath_start() {
        let mut p = Path::new();
        p.move_to(Vec2::new(0.0, 0.0));
        p.line_to(Vec2::new(10.0, 0.0));
        p.line_to(Vec2::new(10.0, 10.0));
        p.close();
        assert_eq!(p.current_point(), Vec2::new(0.0, 0.0));
        assert!(p.subpaths()[0].is_closed());
    }

    #[test]
    fn drawing_after_close_opens_a_new_subpath() {
        let mut p = Path::new();
        p.move_to(Vec2::new(0.0, 0.0));
        p.line_to(Vec2::new(5.0, 0.0));
        p.close();
        p.line_to(Vec2::new(1.0, 1.0));
        assert_eq!(p.subpaths().len(), 2);
        assert_eq!(p.subpaths()[1].start(), Vec2::new(0.0, 0.0));
    }

    #[test]
    fn bounds_include_control_points_outside_the_curve() {
        let mut p = Path::new();
        p.move_to(Vec2::new(0.0, 0.0));
        p.quad_to(Vec2::new(0.0, 100.0), Vec2::new(10.0, 0.0));
        let b = p.bounds();
        assert_eq!(b, Rect::new(0.0, 0.0, 10.0, 100.0));
    }

    #[test]
    fn bounds_are_cached_and_invalidated_on_mutation() {
        let mut p = Path::new();
        p.move_to(Vec2::new(0.0, 0.0));
        p.line_to(Vec2::new(5.0, 5.0));
        let first = p.bounds();
        p.line_to(Vec2::new(20.0, 20.0));
        let second = p.bounds();
        assert_ne!(first, second);
    }
}
