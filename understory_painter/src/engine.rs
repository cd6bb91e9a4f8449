// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! [`PaintEngine`]: the back-end contract this crate's [`Painter`](crate::painter::Painter)
//! consumes.
//!
//! This module specifies the interface only. A concrete engine —
//! software rasterizer, GPU pipeline, a headless recorder for tests — is
//! a collaborator that implements this trait; none ships from this
//! crate.

use crate::bitmap::{BitmapId, NinePatch};
use crate::brush::Brush;
use crate::geom::Mat2x3;
use crate::pen::Pen;
use crate::rect::Box2;
use crate::state::Contours;

pub use peniko::{Compose as CompositeOp, Fill as FillRule, Mix as BlendMode};

/// An opaque font/shaping handle. Text shaping and font management are a
/// back-end concern; this crate only carries the placed glyphs through
/// to [`PaintEngine::draw_text`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct FontId(pub u64);

/// A single positioned glyph, in the coordinate space [`Painter::draw_text`](crate::painter::Painter::draw_text)
/// was called in.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Glyph {
    /// The font's internal glyph index.
    pub id: u32,
    /// The glyph's origin.
    pub x: f64,
    /// The glyph's origin.
    pub y: f64,
}

/// A run of glyphs sharing a font and size.
#[derive(Clone, Debug, PartialEq)]
pub struct GlyphRun<'a> {
    /// The font to draw with.
    pub font: FontId,
    /// Font size, in local coordinate units.
    pub size: f32,
    /// The glyphs to draw, already positioned.
    pub glyphs: &'a [Glyph],
}

/// Parameters for [`PaintEngine::begin_layer`]: what compositing effects
/// a layer applies when it is composed back onto its parent.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LayerOp {
    /// Overall opacity multiplier, `0.0..=1.0`.
    pub opacity: f32,
    /// Blend mode used when compositing the layer's content.
    pub blend: BlendMode,
    /// Porter-Duff compositing operator used when the layer is composed.
    pub composite: CompositeOp,
}

impl LayerOp {
    /// A layer with no compositing effects: full opacity, normal blend,
    /// source-over compositing.
    pub const IDENTITY: Self = Self { opacity: 1.0, blend: BlendMode::Normal, composite: CompositeOp::SrcOver };

    /// Whether this layer changes the result relative to drawing its
    /// content directly into the parent (i.e. whether compositing it
    /// through a separate layer is actually necessary).
    #[must_use]
    pub fn has_compositing_effects(&self) -> bool {
        self.opacity < 1.0 || self.blend != BlendMode::Normal || self.composite != CompositeOp::SrcOver
    }
}

impl Default for LayerOp {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// The contract a rasterization back-end implements to receive drawing
/// commands from a [`Painter`](crate::painter::Painter).
///
/// Path geometry always arrives pre-flattened and pre-transformed into
/// device space as [`Contours`], via [`Painter::prepare_contours`](crate::painter::Painter::prepare_contours);
/// the engine never tracks a current-transform-matrix itself. Image and
/// text placement, which the painter cannot flatten into plain polygons
/// ahead of time, instead carry an explicit transform.
pub trait PaintEngine {
    /// Starts a new frame, sized per `config`. Called once per frame
    /// before any other method.
    fn begin(&mut self, config: crate::painter::FrameConfig);

    /// Ends the current frame. No further drawing calls are made until
    /// the next [`begin`](Self::begin).
    fn end(&mut self);

    /// Paints the entire current clip region with `brush`, used for
    /// `Painter`'s full-surface clear/background fill.
    fn paint(&mut self, brush: &Brush);

    /// Paints everything *outside* the current clip region with `brush`.
    /// Used when a frame's `pass_transparent` flag is false: area the
    /// frame never draws into still needs a defined color.
    fn paint_out(&mut self, brush: &Brush);

    /// Pushes a new compositing layer; subsequent draw calls target it
    /// until the matching [`compose_layer`](Self::compose_layer).
    fn begin_layer(&mut self, op: LayerOp);

    /// Composes the most recently pushed layer onto its parent per the
    /// [`LayerOp`] it was begun with, and pops it.
    fn compose_layer(&mut self);

    /// Excludes `contours`' interior (already flattened and transformed
    /// into device space by [`Painter::prepare_contours`](crate::painter::Painter::prepare_contours))
    /// from the current clip region.
    fn clip_out(&mut self, contours: &Contours, fill_rule: FillRule);

    /// Restores the clip and layer state to what it was at the matching
    /// prior save point.
    fn restore(&mut self);

    /// Fills already-flattened, device-space `contours` with `brush`.
    fn fill_path(&mut self, contours: &Contours, fill_rule: FillRule, brush: &Brush);

    /// Strokes already-flattened, device-space `contours` with `pen` and
    /// `brush`. `hairline` promises the stroke is exactly one device
    /// pixel wide after `pen.width` was already folded into `brush`'s
    /// faded opacity by the painter; the back-end may rasterize it via
    /// line drawing instead of polygon expansion.
    fn stroke_path(&mut self, contours: &Contours, pen: &Pen, brush: &Brush, hairline: bool);

    /// Draws `bitmap` stretched to fill `dst` under `transform`, at
    /// `opacity` (`0..=1`).
    fn draw_image(&mut self, bitmap: BitmapId, dst: Box2, transform: Mat2x3, opacity: f32);

    /// Draws `bitmap` into `dst` under `transform`, stretching only the
    /// regions `nine_patch` marks as stretchable, at `opacity` (`0..=1`).
    fn draw_nine_patch(&mut self, bitmap: BitmapId, nine_patch: &NinePatch, dst: Box2, transform: Mat2x3, opacity: f32);

    /// Draws a shaped glyph run with `brush` under `transform`.
    fn draw_text(&mut self, run: &GlyphRun<'_>, brush: &Brush, transform: Mat2x3);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_layer_has_no_compositing_effects() {
        assert!(!LayerOp::IDENTITY.has_compositing_effects());
    }

    #[test]
    fn reduced_opacity_layer_has_compositing_effects() {
        let op = LayerOp { opacity: 0.5, ..LayerOp::IDENTITY };
        assert!(op.has_compositing_effects());
    }
}
