// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! [`Painter`]: the immediate-mode drawing surface.
//!
//! A `Painter` tracks a stack of saved states (current transform, clip
//! bounds, layer/discard/pass-through flags), turns `Path`-based drawing
//! calls into flattened, device-space [`Contours`] via
//! [`prepare_contours`](Painter::prepare_contours), and forwards the
//! result to a [`PaintEngine`] back-end.

use alloc::vec::Vec;

use smallvec::{smallvec, SmallVec};

use crate::bitmap::{BitmapId, NinePatch};
use crate::brush::Brush;
use crate::color::Color;
use crate::engine::{FontId, GlyphRun, LayerOp, PaintEngine};
use crate::flatten::{self, DEFAULT_TOLERANCE};
use crate::geom::{Mat2x3, Vec2};
use crate::path::{Path, PathCommand};
use crate::pen::Pen;
use crate::rect::{Box2, Rect};
use crate::state::{Contours, PaintSaver, SavedState};

/// Inline capacity for the save/restore stack before it spills to the
/// heap. Most drawing code nests `save`/`begin_layer` a handful of
/// levels deep; this keeps that common case allocation-free.
const INLINE_STACK_DEPTH: usize = 8;

pub use peniko::Fill as FillRule;

/// Parameters for [`Painter::begin_frame`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FrameConfig {
    /// Frame width, in device pixels.
    pub width: u32,
    /// Frame height, in device pixels.
    pub height: u32,
    /// Device pixels per local unit; scales flattening tolerance along
    /// with everything else.
    pub scaling: f64,
    /// If set, the frame is cleared to this color before any drawing.
    pub clear_color: Option<Color>,
    /// If `false`, area the frame never draws into is painted with
    /// `clear_color` (or transparent black if unset) at `end_frame`
    /// rather than left untouched.
    pub pass_transparent: bool,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self { width: 0, height: 0, scaling: 1.0, clear_color: None, pass_transparent: true }
    }
}

/// The immediate-mode drawing surface. Generic over the back-end engine
/// so callers can swap in a software rasterizer, a GPU pipeline, or a
/// recording stub for tests without this crate depending on any of
/// them.
#[derive(Debug)]
pub struct Painter<E> {
    engine: E,
    stack: SmallVec<[SavedState; INLINE_STACK_DEPTH]>,
    scaling: f64,
    in_frame: bool,
}

impl<E: PaintEngine> Painter<E> {
    /// Wraps a back-end engine in a fresh painter. No frame is open yet;
    /// call [`begin_frame`](Self::begin_frame) before drawing.
    pub fn new(engine: E) -> Self {
        Self { engine, stack: smallvec![SavedState::root(Rect::EMPTY, true)], scaling: 1.0, in_frame: false }
    }

    /// Starts a frame: resets the save stack to a single root state
    /// covering the whole surface, and forwards `config` to the engine.
    pub fn begin_frame(&mut self, config: FrameConfig) {
        self.scaling = config.scaling.max(f64::MIN_POSITIVE);
        let bounds = Rect::new(0.0, 0.0, config.width as f64, config.height as f64);
        self.stack.clear();
        self.stack.push(SavedState::root(bounds, config.pass_transparent));
        self.in_frame = true;
        self.engine.begin(config);
        if let Some(color) = config.clear_color {
            self.engine.paint(&Brush::solid(color));
        }
    }

    /// Ends the current frame. Asserts the save stack is balanced (every
    /// `save`/`begin_layer` has a matching `restore`/`compose_layer`).
    pub fn end_frame(&mut self) {
        assert_eq!(self.stack.len(), 1, "unbalanced save/restore or begin_layer/compose_layer before end_frame");
        if !self.current().pass_transparent {
            self.engine.paint_out(&Brush::solid(Color::TRANSPARENT));
        }
        self.engine.end();
        self.in_frame = false;
    }

    fn current(&self) -> &SavedState {
        self.stack.last().expect("root state is never popped")
    }

    fn current_mut(&mut self) -> &mut SavedState {
        self.stack.last_mut().expect("root state is never popped")
    }

    /// The current affine transform, mapping local coordinates passed to
    /// drawing calls into device space.
    #[must_use]
    pub fn transform(&self) -> Mat2x3 {
        self.current().transform
    }

    /// Replaces the current transform outright.
    pub fn set_transform(&mut self, transform: Mat2x3) {
        self.current_mut().transform = transform;
    }

    /// Appends a translation to the current transform.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        let t = self.transform();
        self.set_transform(t.translate(dx, dy));
    }

    /// Appends a non-uniform scale to the current transform.
    pub fn scale(&mut self, sx: f64, sy: f64) {
        let t = self.transform();
        self.set_transform(t.scale(sx, sy));
    }

    /// Appends a rotation (degrees) to the current transform.
    pub fn rotate(&mut self, degrees: f64) {
        let t = self.transform();
        self.set_transform(t.rotate(degrees));
    }

    /// Appends a rotation (degrees) about a pivot to the current
    /// transform.
    pub fn rotate_about(&mut self, degrees: f64, cx: f64, cy: f64) {
        let t = self.transform();
        self.set_transform(t.rotate_about(degrees, cx, cy));
    }

    /// Appends a skew (degrees) to the current transform.
    pub fn skew(&mut self, degrees_x: f64, degrees_y: f64) {
        let t = self.transform();
        self.set_transform(t.skew(degrees_x, degrees_y));
    }

    /// Saves the current transform and clip state, returning a guard
    /// that restores it when dropped (or when [`PaintSaver::restore`]
    /// is called explicitly).
    pub fn save(&mut self) -> PaintSaver<'_, E> {
        let mut next = self.current().clone();
        next.is_layer = false;
        self.stack.push(next);
        PaintSaver::new(self)
    }

    /// Restores the most recently saved state. Panics if called without
    /// a matching `save`/`begin_layer`, or if it would pop the root
    /// frame state.
    pub fn restore(&mut self) {
        assert!(self.stack.len() > 1, "restore called without a matching save or begin_layer");
        let popped = self.stack.pop().expect("checked above");
        if popped.is_layer {
            self.engine.compose_layer();
        } else {
            self.engine.restore();
        }
    }

    /// Called from [`PaintSaver::drop`]. Identical to [`restore`](Self::restore)
    /// but never panics, since panicking from a `Drop` impl during an
    /// unwind would abort the process instead of propagating the
    /// original panic. An unbalanced stack detected here is silently
    /// tolerated; `end_frame`'s balance assertion will have already
    /// caught ordinary misuse before this path is ever exercised by a
    /// clean run.
    pub(crate) fn restore_for_drop(&mut self) {
        if self.stack.len() <= 1 {
            return;
        }
        let popped = self.stack.pop().expect("checked above");
        if popped.is_layer {
            self.engine.compose_layer();
        } else {
            self.engine.restore();
        }
    }

    /// Intersects the current clip with `path` (filled per `fill_rule`,
    /// under the current transform): only the overlap of the existing
    /// clip and `path`'s interior remains visible.
    ///
    /// Implemented on top of the engine's single `clip_out` primitive by
    /// excluding the *complement* of `path` within the current clip
    /// bounds, built as an even-odd path (the clip bounds as one ring,
    /// `path` as the other).
    pub fn clip_in(&mut self, path: &Path, fill_rule: FillRule) {
        let shape_bounds = self.transform().apply_rect_bounds(path.bounds());
        let bounds = self.current().clip_bounds;
        let new_bounds = bounds.intersect(&shape_bounds);
        if new_bounds.is_empty() {
            self.current_mut().clip_bounds = Rect::EMPTY;
            self.current_mut().discard = true;
            return;
        }
        let complement = self.complement_path(path, bounds);
        let contours = self.prepare_contours(&complement);
        if !contours.is_empty() {
            self.engine.clip_out(&contours, FillRule::EvenOdd);
        }
        let _ = fill_rule; // the complement path already encodes path's own fill rule via EvenOdd framing
        self.current_mut().clip_bounds = new_bounds;
        self.current_mut().discard = false;
    }

    /// Excludes `path` (filled per `fill_rule`, under the current
    /// transform) from the current clip.
    pub fn clip_out(&mut self, path: &Path, fill_rule: FillRule) {
        let contours = self.prepare_contours(path);
        if contours.is_empty() {
            return;
        }
        self.engine.clip_out(&contours, fill_rule);
        // Clip-out never grows the visible region, so the cached bounds
        // are still a safe (if now slightly pessimistic) quick-reject.
    }

    fn complement_path(&self, path: &Path, bounds: Rect) -> Path {
        let mut complement = Path::new();
        complement.move_to(Vec2::new(bounds.x0, bounds.y0));
        complement.line_to(Vec2::new(bounds.x1, bounds.y0));
        complement.line_to(Vec2::new(bounds.x1, bounds.y1));
        complement.line_to(Vec2::new(bounds.x0, bounds.y1));
        complement.close();
        // `Close`, when present, is always the last command in a subpath
        // (closing a subpath immediately ends it), so it's skipped here
        // and handled once via the unconditional `close` below instead.
        for sp in path.subpaths() {
            for cmd in sp.commands() {
                match *cmd {
                    PathCommand::MoveTo(p) => complement.move_to(p),
                    PathCommand::LineTo(p) => complement.line_to(p),
                    PathCommand::QuadTo(c, p) => complement.quad_to(c, p),
                    PathCommand::CurveTo(c1, c2, p) => complement.curve_to(c1, c2, p),
                    PathCommand::Close => {}
                }
            }
            complement.close();
        }
        complement
    }

    /// Pushes a new compositing layer; subsequent draws target it until
    /// the matching [`compose_layer`](Self::compose_layer).
    pub fn begin_layer(&mut self, op: LayerOp) {
        let mut next = self.current().clone();
        next.is_layer = true;
        self.stack.push(next);
        self.engine.begin_layer(op);
    }

    /// Composes the most recently begun layer onto its parent. Panics if
    /// the top of the stack isn't a layer (i.e. this doesn't match a
    /// `begin_layer`).
    pub fn compose_layer(&mut self) {
        assert!(self.current().is_layer, "compose_layer called without a matching begin_layer");
        self.restore();
    }

    /// Flattens `path` into device space under the current transform,
    /// caching the result's bounds. This is the bridge between the
    /// local-space [`Path`] API and the device-space [`Contours`] a
    /// [`PaintEngine`] consumes.
    #[must_use]
    pub fn prepare_contours(&self, path: &Path) -> Contours {
        let transform = self.transform();
        let tolerance = DEFAULT_TOLERANCE / self.scaling.max(1e-6);
        let mut device = Path::new();
        for sp in path.subpaths() {
            let mut current_local = sp.start();
            device.move_to(transform.apply(current_local));
            for cmd in sp.commands() {
                match *cmd {
                    PathCommand::MoveTo(_) => {}
                    PathCommand::LineTo(p) => {
                        device.line_to(transform.apply(p));
                        current_local = p;
                    }
                    PathCommand::QuadTo(c, p) => {
                        let p0 = transform.apply(current_local);
                        let c = transform.apply(c);
                        let p2 = transform.apply(p);
                        let mut pts = Vec::new();
                        flatten::flatten_quadratic(p0, c, p2, tolerance, &mut pts);
                        for pt in pts {
                            device.line_to(pt);
                        }
                        current_local = p;
                    }
                    PathCommand::CurveTo(c1, c2, p) => {
                        let p0 = transform.apply(current_local);
                        let c1 = transform.apply(c1);
                        let c2 = transform.apply(c2);
                        let p3 = transform.apply(p);
                        let mut pts = Vec::new();
                        flatten::flatten_cubic(p0, c1, c2, p3, tolerance, &mut pts);
                        for pt in pts {
                            device.line_to(pt);
                        }
                        current_local = p;
                    }
                    PathCommand::Close => {
                        device.close();
                        current_local = sp.start();
                    }
                }
            }
        }
        let bounds = device.bounds();
        Contours { path: device, bounds }
    }

    /// Fills `path` with `brush` under the current transform and clip.
    pub fn fill(&mut self, path: &Path, fill_rule: FillRule, brush: &Brush) {
        if self.current().discard || matches!(brush.opacity(), crate::brush::Opacity::Hidden) {
            return;
        }
        let contours = self.prepare_contours(path);
        if contours.is_empty() {
            return;
        }
        self.engine.fill_path(&contours, fill_rule, brush);
    }

    /// Strokes `path` with `pen` and `brush` under the current transform
    /// and clip.
    ///
    /// When `pen.should_scale` is set, the effective width is
    /// `pen.width` scaled by the transform's minimum axis scale. When the
    /// effective width would rasterize to less than a device pixel, the
    /// stroke is promoted to a 1px hairline and `brush`'s opacity is
    /// faded by the lost width fraction, so a heavily zoomed-out thin
    /// line dims instead of vanishing or over-drawing at a full pixel.
    /// Cosmetic (non-scaling) pens apply the same fade directly to
    /// `pen.width` in device pixels.
    pub fn stroke(&mut self, path: &Path, pen: &Pen, brush: &Brush) {
        if self.current().discard || matches!(brush.opacity(), crate::brush::Opacity::Hidden) {
            return;
        }
        let contours = self.prepare_contours(path);
        if contours.is_empty() {
            return;
        }
        let (effective_pen, effective_brush, hairline) = self.fade_for_effective_width(pen, brush);
        if effective_pen.width <= 0.0 {
            return;
        }
        self.engine.stroke_path(&contours, &effective_pen, &effective_brush, hairline);
    }

    /// Computes the pen/brush/hairline-flag triple [`stroke`](Self::stroke)
    /// actually hands the engine, applying the sub-pixel fade described
    /// there.
    fn fade_for_effective_width(&self, pen: &Pen, brush: &Brush) -> (Pen, Brush, bool) {
        let t = self.transform();
        let scale_x = Vec2::new(t.a, t.b).distance(Vec2::ZERO);
        let scale_y = Vec2::new(t.c, t.d).distance(Vec2::ZERO);
        let coeff = scale_x.min(scale_y);
        if pen.should_scale {
            let effective_width = pen.width * coeff;
            if effective_width < 1.0 && coeff > 1e-12 {
                let mut faded = pen.clone();
                faded.width = 1.01 / coeff;
                let hairline = (scale_x - scale_y).abs() < 1e-6;
                return (faded, brush.faded(effective_width as f32), hairline);
            }
            (pen.clone(), brush.clone(), false)
        } else if pen.width < 1.0 {
            let mut faded = pen.clone();
            let factor = pen.width as f32;
            faded.width = 1.0;
            (faded, brush.faded(factor), true)
        } else {
            (pen.clone(), brush.clone(), false)
        }
    }

    /// Strokes a single line segment from `p0` to `p1`.
    pub fn draw_line(&mut self, p0: Vec2, p1: Vec2, pen: &Pen, brush: &Brush) {
        let mut path = Path::new();
        path.move_to(p0);
        path.line_to(p1);
        self.stroke(&path, pen, brush);
    }

    /// Fills an axis-aligned rectangle.
    pub fn fill_rect(&mut self, rect: Box2, brush: &Brush) {
        let mut path = Path::new();
        path.move_to(Vec2::new(rect.x, rect.y));
        path.line_to(Vec2::new(rect.x + rect.w, rect.y));
        path.line_to(Vec2::new(rect.x + rect.w, rect.y + rect.h));
        path.line_to(Vec2::new(rect.x, rect.y + rect.h));
        path.close();
        self.fill(&path, FillRule::NonZero, brush);
    }

    /// Fills a triangle.
    pub fn fill_triangle(&mut self, a: Vec2, b: Vec2, c: Vec2, brush: &Brush) {
        let mut path = Path::new();
        path.move_to(a);
        path.line_to(b);
        path.line_to(c);
        path.close();
        self.fill(&path, FillRule::NonZero, brush);
    }

    /// Fills a circle, approximated with four cubic Bézier quadrants.
    pub fn fill_circle(&mut self, center: Vec2, radius: f64, brush: &Brush) {
        let mut path = Path::new();
        let k = radius * 0.5522847498; // 4/3 * (sqrt(2) - 1), the standard circle-as-4-cubics constant
        let (cx, cy) = (center.x, center.y);
        path.move_to(Vec2::new(cx + radius, cy));
        path.curve_to(Vec2::new(cx + radius, cy + k), Vec2::new(cx + k, cy + radius), Vec2::new(cx, cy + radius));
        path.curve_to(Vec2::new(cx - k, cy + radius), Vec2::new(cx - radius, cy + k), Vec2::new(cx - radius, cy));
        path.curve_to(Vec2::new(cx - radius, cy - k), Vec2::new(cx - k, cy - radius), Vec2::new(cx, cy - radius));
        path.curve_to(Vec2::new(cx + k, cy - radius), Vec2::new(cx + radius, cy - k), Vec2::new(cx + radius, cy));
        path.close();
        self.fill(&path, FillRule::NonZero, brush);
    }

    /// Draws `bitmap` stretched to fill `dst`, under the current
    /// transform, at `opacity` (`0..=1`).
    ///
    /// If `opacity` is (near) zero, the call draws nothing when the
    /// current layer discards transparent fragments, or a transparent
    /// rectangle when it doesn't (`pass_transparent`, e.g. inside a
    /// layer composed with `DestIn`/`DestAtop`, where the absence of
    /// coverage is itself meaningful).
    pub fn draw_image(&mut self, bitmap: BitmapId, dst: Box2, opacity: f32) {
        if self.current().discard {
            return;
        }
        let opacity = opacity.clamp(0.0, 1.0);
        if opacity <= 0.0 && !self.current().pass_transparent {
            return;
        }
        self.engine.draw_image(bitmap, dst, self.transform(), opacity);
    }

    /// Draws `bitmap` into `dst`, stretching only the regions
    /// `nine_patch` marks as stretchable, under the current transform,
    /// at `opacity` (`0..=1`). See [`draw_image`](Self::draw_image) for
    /// the near-zero-opacity behavior.
    pub fn draw_nine_patch(&mut self, bitmap: BitmapId, nine_patch: &NinePatch, dst: Box2, opacity: f32) {
        if self.current().discard {
            return;
        }
        let opacity = opacity.clamp(0.0, 1.0);
        if opacity <= 0.0 && !self.current().pass_transparent {
            return;
        }
        self.engine.draw_nine_patch(bitmap, nine_patch, dst, self.transform(), opacity);
    }

    /// Draws a shaped glyph run with `brush`, under the current
    /// transform.
    pub fn draw_text(&mut self, font: FontId, size: f32, glyphs: &[crate::engine::Glyph], brush: &Brush) {
        if self.current().discard || matches!(brush.opacity(), crate::brush::Opacity::Hidden) {
            return;
        }
        let run = GlyphRun { font, size, glyphs };
        self.engine.draw_text(&run, brush, self.transform());
    }

    /// Gives back the wrapped engine, consuming the painter.
    pub fn into_engine(self) -> E {
        self.engine
    }

    /// The wrapped engine.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// The wrapped engine, mutably.
    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }
}

impl Mat2x3 {
    /// The device-space bounds of a local-space rectangle under this
    /// transform: the bounding box of the transformed corners, valid
    /// even when the transform rotates or skews (in which case it is
    /// necessarily a conservative over-approximation).
    fn apply_rect_bounds(self, r: Rect) -> Rect {
        if r.is_empty() {
            return Rect::EMPTY;
        }
        let corners = [
            self.apply(Vec2::new(r.x0, r.y0)),
            self.apply(Vec2::new(r.x1, r.y0)),
            self.apply(Vec2::new(r.x1, r.y1)),
            self.apply(Vec2::new(r.x0, r.y1)),
        ];
        let mut bounds = Rect::EMPTY;
        for c in corners {
            bounds = bounds.include_point(c);
        }
        bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{CompositeOp, FontId as EngineFontId};
    use alloc::vec::Vec as StdVec;

    #[derive(Default)]
    struct RecordingEngine {
        fills: StdVec<()>,
        strokes: StdVec<bool>,
        clip_outs: StdVec<()>,
        layers: i32,
        began: bool,
        ended: bool,
    }

    impl PaintEngine for RecordingEngine {
        fn begin(&mut self, _config: FrameConfig) {
            self.began = true;
        }
        fn end(&mut self) {
            self.ended = true;
        }
        fn paint(&mut self, _brush: &Brush) {}
        fn paint_out(&mut self, _brush: &Brush) {}
        fn begin_layer(&mut self, _op: LayerOp) {
            self.layers += 1;
        }
        fn compose_layer(&mut self) {
            self.layers -= 1;
        }
        fn clip_out(&mut self, _contours: &Contours, _fill_rule: FillRule) {
            self.clip_outs.push(());
        }
        fn restore(&mut self) {}
        fn fill_path(&mut self, _contours: &Contours, _fill_rule: FillRule, _brush: &Brush) {
            self.fills.push(());
        }
        fn stroke_path(&mut self, _contours: &Contours, _pen: &Pen, _brush: &Brush, hairline: bool) {
            self.strokes.push(hairline);
        }
        fn draw_image(&mut self, _bitmap: BitmapId, _dst: Box2, _transform: Mat2x3, _opacity: f32) {}
        fn draw_nine_patch(&mut self, _bitmap: BitmapId, _nine_patch: &NinePatch, _dst: Box2, _transform: Mat2x3, _opacity: f32) {}
        fn draw_text(&mut self, _run: &GlyphRun<'_>, _brush: &Brush, _transform: Mat2x3) {}
    }

    fn frame(w: u32, h: u32) -> FrameConfig {
        FrameConfig { width: w, height: h, scaling: 1.0, clear_color: None, pass_transparent: true }
    }

    #[test]
    fn begin_end_frame_round_trips() {
        let mut p = Painter::new(RecordingEngine::default());
        p.begin_frame(frame(100, 100));
        p.end_frame();
        assert!(p.engine().began);
        assert!(p.engine().ended);
    }

    #[test]
    fn fill_rect_reaches_the_engine() {
        let mut p = Painter::new(RecordingEngine::default());
        p.begin_frame(frame(100, 100));
        p.fill_rect(Box2::new(0.0, 0.0, 10.0, 10.0), &Brush::solid(Color::BLACK));
        assert_eq!(p.engine().fills.len(), 1);
        p.end_frame();
    }

    #[test]
    fn hidden_brush_fill_is_skipped() {
        let mut p = Painter::new(RecordingEngine::default());
        p.begin_frame(frame(100, 100));
        p.fill_rect(Box2::new(0.0, 0.0, 10.0, 10.0), &Brush::solid(Color::TRANSPARENT));
        assert_eq!(p.engine().fills.len(), 0);
        p.end_frame();
    }

    #[test]
    fn save_restore_leaves_the_stack_balanced() {
        let mut p = Painter::new(RecordingEngine::default());
        p.begin_frame(frame(100, 100));
        {
            let _guard = p.save();
            p.translate(10.0, 0.0);
        }
        assert_eq!(p.transform(), Mat2x3::IDENTITY);
        p.end_frame();
    }

    #[test]
    fn explicit_restore_on_saver_also_balances() {
        let mut p = Painter::new(RecordingEngine::default());
        p.begin_frame(frame(100, 100));
        let guard = p.save();
        guard.restore();
        p.end_frame();
    }

    #[test]
    #[should_panic(expected = "unbalanced")]
    fn end_frame_panics_on_unbalanced_save() {
        let mut p = Painter::new(RecordingEngine::default());
        p.begin_frame(frame(100, 100));
        core::mem::forget(p.save());
        p.end_frame();
    }

    #[test]
    fn begin_layer_compose_layer_round_trips_through_the_engine() {
        let mut p = Painter::new(RecordingEngine::default());
        p.begin_frame(frame(100, 100));
        p.begin_layer(LayerOp { opacity: 0.5, composite: CompositeOp::SrcOver, ..LayerOp::IDENTITY });
        assert_eq!(p.engine().layers, 1);
        p.compose_layer();
        assert_eq!(p.engine().layers, 0);
        p.end_frame();
    }

    #[test]
    fn clip_in_shrinks_the_cached_clip_bounds() {
        let mut p = Painter::new(RecordingEngine::default());
        p.begin_frame(frame(100, 100));
        let mut path = Path::new();
        path.move_to(Vec2::new(10.0, 10.0));
        path.line_to(Vec2::new(20.0, 10.0));
        path.line_to(Vec2::new(20.0, 20.0));
        path.line_to(Vec2::new(10.0, 20.0));
        path.close();
        p.clip_in(&path, FillRule::NonZero);
        assert_eq!(p.current().clip_bounds, Rect::new(10.0, 10.0, 20.0, 20.0));
        assert!(p.engine().clip_outs.len() >= 1);
        p.end_frame();
    }

    #[test]
    fn clip_in_to_an_empty_shape_marks_discard() {
        let mut p = Painter::new(RecordingEngine::default());
        p.begin_frame(frame(100, 100));
        let mut path = Path::new();
        path.move_to(Vec2::new(200.0, 200.0));
        path.line_to(Vec2::new(210.0, 200.0));
        path.line_to(Vec2::new(210.0, 210.0));
        path.close();
        p.clip_in(&path, FillRule::NonZero);
        assert!(p.current().discard);
        p.end_frame();
    }

    #[allow(dead_code)]
    fn use_font_id(_f: EngineFontId) {}
}
