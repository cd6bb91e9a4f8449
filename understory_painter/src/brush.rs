// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! [`Brush`]: the paint source for fills and strokes, a tagged union of
//! solid color, linear gradient, radial gradient, and image pattern,
//! together with an opacity classification and the [`GradientBuilder`]
//! that collapses degenerate gradients down to a solid color.

use alloc::vec::Vec;

use crate::bitmap::BitmapId;
use crate::color::Color;
use crate::geom::{Mat2x3, Vec2};

pub use peniko::Extend;

/// A single color stop in a gradient, at `offset` in `[0, 1]`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GradientStop {
    /// Position along the gradient, clamped to `[0, 1]`.
    pub offset: f32,
    /// The stop's color.
    pub color: Color,
}

/// A linear gradient between `start` and `end`.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearGradient {
    /// The gradient's start point.
    pub start: Vec2,
    /// The gradient's end point.
    pub end: Vec2,
    /// Color stops, sorted by offset.
    pub stops: Vec<GradientStop>,
    /// Behavior for offsets outside `[0, 1]`.
    pub extend: Extend,
}

/// A radial gradient centered at `center` with radius `radius`.
#[derive(Clone, Debug, PartialEq)]
pub struct RadialGradient {
    /// The gradient's center.
    pub center: Vec2,
    /// The gradient's radius. Must be positive; see [`GradientBuilder`].
    pub radius: f64,
    /// Color stops, sorted by offset.
    pub stops: Vec<GradientStop>,
    /// Behavior for offsets outside `[0, 1]`.
    pub extend: Extend,
}

/// A repeating image used as a paint source.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ImagePattern {
    /// The source bitmap's identity; the pixels themselves live with the
    /// back-end's resource table.
    pub bitmap: BitmapId,
    /// Maps pattern space to the coordinate space the brush is painted
    /// in.
    pub transform: Mat2x3,
    /// Behavior for sample points outside the bitmap.
    pub extend: Extend,
}

/// The paint source for a fill or stroke.
#[derive(Clone, Debug, PartialEq)]
pub enum BrushKind {
    /// A single flat color.
    Solid(Color),
    /// A linear gradient.
    Linear(LinearGradient),
    /// A radial gradient.
    Radial(RadialGradient),
    /// A tiled image.
    Pattern(ImagePattern),
}

/// How visible a brush is, used by the painter to skip work for brushes
/// that can't affect the output and to batch brushes that don't need
/// blending.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Opacity {
    /// The brush paints nothing visible; draw calls using it can be
    /// skipped entirely.
    Hidden,
    /// The brush may have partially transparent coverage and needs
    /// blending against the destination.
    Translucent,
    /// The brush fully replaces whatever is underneath it.
    Opaque,
}

/// The paint source for a fill or stroke, plus its cached opacity
/// classification.
#[derive(Clone, Debug, PartialEq)]
pub struct Brush {
    kind: BrushKind,
}

impl Brush {
    /// A solid color brush.
    #[must_use]
    pub const fn solid(color: Color) -> Self {
        Self { kind: BrushKind::Solid(color) }
    }

    /// A linear gradient brush.
    #[must_use]
    pub const fn linear(gradient: LinearGradient) -> Self {
        Self { kind: BrushKind::Linear(gradient) }
    }

    /// A radial gradient brush.
    #[must_use]
    pub const fn radial(gradient: RadialGradient) -> Self {
        Self { kind: BrushKind::Radial(gradient) }
    }

    /// An image pattern brush.
    #[must_use]
    pub const fn pattern(pattern: ImagePattern) -> Self {
        Self { kind: BrushKind::Pattern(pattern) }
    }

    /// The brush's underlying kind.
    #[must_use]
    pub fn kind(&self) -> &BrushKind {
        &self.kind
    }

    /// Fades every color this brush paints with toward transparent by
    /// `factor` (`0..=1`). Used by [`Painter::stroke`](crate::painter::Painter::stroke)
    /// when a cosmetic stroke's effective width drops below a device
    /// pixel: rather than drawing a full-strength line narrower than the
    /// rasterizer can represent, the width is promoted to a hairline and
    /// the brush is faded to approximate the lost coverage.
    #[must_use]
    pub fn faded(&self, factor: f32) -> Self {
        let fade_stops = |stops: &[GradientStop]| -> Vec<GradientStop> {
            stops.iter().map(|s| GradientStop { offset: s.offset, color: s.color.faded(factor) }).collect()
        };
        let kind = match &self.kind {
            BrushKind::Solid(c) => BrushKind::Solid(c.faded(factor)),
            BrushKind::Linear(g) => BrushKind::Linear(LinearGradient { stops: fade_stops(&g.stops), ..g.clone() }),
            BrushKind::Radial(g) => BrushKind::Radial(RadialGradient { stops: fade_stops(&g.stops), ..g.clone() }),
            BrushKind::Pattern(p) => BrushKind::Pattern(*p),
        };
        Self { kind }
    }

    /// Classifies how visible this brush is.
    ///
    /// A solid color is hidden iff fully transparent and opaque iff
    /// fully opaque. A gradient is hidden iff every stop is fully
    /// transparent, opaque iff every stop is fully opaque, and
    /// translucent otherwise. A pattern's opacity depends on pixels this
    /// crate doesn't own, so it is always translucent.
    #[must_use]
    pub fn opacity(&self) -> Opacity {
        match &self.kind {
            BrushKind::Solid(c) => {
                if c.is_fully_transparent() {
                    Opacity::Hidden
                } else if c.is_opaque() {
                    Opacity::Opaque
                } else {
                    Opacity::Translucent
                }
            }
            BrushKind::Linear(g) => stops_opacity(&g.stops),
            BrushKind::Radial(g) => stops_opacity(&g.stops),
            BrushKind::Pattern(_) => Opacity::Translucent,
        }
    }
}

fn stops_opacity(stops: &[GradientStop]) -> Opacity {
    if stops.is_empty() || stops.iter().all(|s| s.color.is_fully_transparent()) {
        Opacity::Hidden
    } else if stops.iter().all(|s| s.color.is_opaque()) {
        Opacity::Opaque
    } else {
        Opacity::Translucent
    }
}

/// Builds a gradient brush, collapsing degenerate cases (zero or one
/// stop, every stop the same color, zero-length geometry) down to a
/// plain [`Brush::solid`] instead of handing the back-end a
/// single-color "gradient" to evaluate.
#[derive(Clone, Debug, Default)]
pub struct GradientBuilder {
    stops: Vec<GradientStop>,
}

impl GradientBuilder {
    /// An empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self { stops: Vec::new() }
    }

    /// Adds a color stop. Offsets are clamped to `[0, 1]` and the final
    /// stop list is sorted by offset when the gradient is built.
    pub fn add_stop(&mut self, offset: f32, color: Color) -> &mut Self {
        self.stops.push(GradientStop { offset: offset.clamp(0.0, 1.0), color });
        self
    }

    fn sorted_stops(&self) -> Vec<GradientStop> {
        let mut stops = self.stops.clone();
        stops.sort_by(|a, b| a.offset.total_cmp(&b.offset));
        stops
    }

    fn all_same_color(stops: &[GradientStop]) -> Option<Color> {
        let first = stops.first()?.color;
        if stops.iter().all(|s| s.color == first) { Some(first) } else { None }
    }

    /// Builds a linear gradient from `start` to `end`, or a solid brush
    /// if the stop list or geometry is degenerate.
    #[must_use]
    pub fn build_linear(&self, start: Vec2, end: Vec2, extend: Extend) -> Brush {
        let stops = self.sorted_stops();
        if let Some(solid) = Self::collapse(&stops, start.distance_squared(end) < 1e-12) {
            return solid;
        }
        Brush::linear(LinearGradient { start, end, stops, extend })
    }

    /// Builds a radial gradient, or a solid brush if the stop list or
    /// radius is degenerate.
    #[must_use]
    pub fn build_radial(&self, center: Vec2, radius: f64, extend: Extend) -> Brush {
        let stops = self.sorted_stops();
        if let Some(solid) = Self::collapse(&stops, radius <= 0.0) {
            return solid;
        }
        Brush::radial(RadialGradient { center, radius, stops, extend })
    }

    fn collapse(stops: &[GradientStop], geometry_degenerate: bool) -> Option<Brush> {
        match stops.len() {
            0 => Some(Brush::solid(Color::TRANSPARENT)),
            1 => Some(Brush::solid(stops[0].color)),
            _ if geometry_degenerate => Some(Brush::solid(stops.last().expect("non-empty").color)),
            _ => Self::all_same_color(stops).map(Brush::solid),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_stop_collapses_to_solid() {
        let mut b = GradientBuilder::new();
        b.add_stop(0.5, Color::rgb(1, 2, 3));
        let brush = b.build_linear(Vec2::ZERO, Vec2::new(10.0, 0.0), Extend::Pad);
        assert_eq!(brush.kind(), &BrushKind::Solid(Color::rgb(1, 2, 3)));
    }

    #[test]
    fn identical_stop_colors_collapse_to_solid() {
        let mut b = GradientBuilder::new();
        b.add_stop(0.0, Color::rgb(9, 9, 9)).add_stop(1.0, Color::rgb(9, 9, 9));
        let brush = b.build_linear(Vec2::ZERO, Vec2::new(10.0, 0.0), Extend::Pad);
        assert_eq!(brush.kind(), &BrushKind::Solid(Color::rgb(9, 9, 9)));
    }

    #[test]
    fn zero_length_linear_gradient_collapses_to_last_stop() {
        let mut b = GradientBuilder::new();
        b.add_stop(0.0, Color::BLACK).add_stop(1.0, Color::WHITE);
        let brush = b.build_linear(Vec2::new(3.0, 3.0), Vec2::new(3.0, 3.0), Extend::Pad);
        assert_eq!(brush.kind(), &BrushKind::Solid(Color::WHITE));
    }

    #[test]
    fn distinct_stops_with_real_geometry_stay_a_gradient() {
        let mut b = GradientBuilder::new();
        b.add_stop(0.0, Color::BLACK).add_stop(1.0, Color::WHITE);
        let brush = b.build_linear(Vec2::ZERO, Vec2::new(10.0, 0.0), Extend::Pad);
        assert!(matches!(brush.kind(), BrushKind::Linear(_)));
    }

    #[test]
    fn opacity_classification_for_solid_colors() {
        assert_eq!(Brush::solid(Color::TRANSPARENT).opacity(), Opacity::Hidden);
        assert_eq!(Brush::solid(Color::BLACK).opacity(), Opacity::Opaque);
        assert_eq!(Brush::solid(Color::rgba(0, 0, 0, 128)).opacity(), Opacity::Translucent);
    }

    #[test]
    fn gradient_opacity_is_opaque_only_if_every_stop_is() {
        let mut b = GradientBuilder::new();
        b.add_stop(0.0, Color::BLACK).add_stop(1.0, Color::rgba(1, 1, 1, 5));
        let brush = b.build_linear(Vec2::ZERO, Vec2::new(1.0, 0.0), Extend::Pad);
        assert_eq!(brush.opacity(), Opacity::Translucent);
    }
}
