// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! [`Pen`]: stroke parameters (width, caps, joins, dashing) for
//! [`Painter::stroke`](crate::painter::Painter::stroke).

use alloc::vec::Vec;

/// How a line ends. Re-exported from `kurbo` since stroking ultimately
/// has to agree with whatever geometry crate does the fill conversion
/// downstream.
pub use kurbo::Cap as LineCap;
/// How two segments meet. See [`LineCap`].
pub use kurbo::Join as LineJoin;

/// A dash pattern: alternating on/off lengths, plus a starting offset
/// into the pattern.
#[derive(Clone, Debug, PartialEq)]
pub struct Dash {
    /// Alternating dash/gap lengths, in the same units as [`Pen::width`].
    /// Must have at least one entry; an odd-length pattern is repeated
    /// to make an even one, matching the usual SVG `stroke-dasharray`
    /// convention.
    pub pattern: Vec<f64>,
    /// Offset into `pattern` at which dashing starts.
    pub offset: f64,
}

/// Stroke parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct Pen {
    /// Stroke width, in local coordinates if [`should_scale`](Self::should_scale)
    /// is set, otherwise in device pixels.
    pub width: f64,
    /// Cap style for the start and end of open subpaths.
    pub cap: LineCap,
    /// Join style at interior vertices.
    pub join: LineJoin,
    /// Cutoff ratio at which a miter join is converted to a bevel.
    pub miter_limit: f64,
    /// Dash pattern, or `None` for a solid stroke.
    pub dash: Option<Dash>,
    /// Whether the stroke width (and dash lengths) scale with the
    /// current transform. Cosmetic strokes (`should_scale == false`)
    /// stay a constant width in device pixels regardless of zoom.
    pub should_scale: bool,
}

impl Pen {
    /// A solid, round-jointed, round-capped pen of the given width, with
    /// the default miter limit and scaling with the current transform.
    #[must_use]
    pub fn new(width: f64) -> Self {
        Self { width, cap: LineCap::Round, join: LineJoin::Round, miter_limit: 10.0, dash: None, should_scale: true }
    }

    /// Returns this pen with a different cap style.
    #[must_use]
    pub fn with_cap(mut self, cap: LineCap) -> Self {
        self.cap = cap;
        self
    }

    /// Returns this pen with a different join style.
    #[must_use]
    pub fn with_join(mut self, join: LineJoin) -> Self {
        self.join = join;
        self
    }

    /// Returns this pen with a dash pattern applied.
    #[must_use]
    pub fn with_dash(mut self, dash: Dash) -> Self {
        self.dash = Some(dash);
        self
    }

    /// Returns this pen with cosmetic (non-scaling) width.
    #[must_use]
    pub fn without_scaling(mut self) -> Self {
        self.should_scale = false;
        self
    }

    /// The effective width at the given uniform scale factor: unchanged
    /// if [`should_scale`](Self::should_scale) is false.
    #[must_use]
    pub fn effective_width(&self, scale: f64) -> f64 {
        if self.should_scale { self.width * scale } else { self.width }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cosmetic_pen_ignores_scale() {
        let pen = Pen::new(2.0).without_scaling();
        assert_eq!(pen.effective_width(10.0), 2.0);
    }

    #[test]
    fn scaling_pen_follows_scale() {
        let pen = Pen::new(2.0);
        assert_eq!(pen.effective_width(3.0), 6.0);
    }
}
