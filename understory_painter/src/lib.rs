// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Painter: a retained-state, immediate-mode 2D vector graphics core.
//!
//! This crate is the front-end API (the [`Painter`]) that records drawing
//! intent under a current transform, clip, and layer stack, together with
//! the geometric machinery it depends on: [`Path`] (subpaths of line
//! segments with cached bounds), adaptive [`flatten`] of quadratic and
//! cubic Bézier curves plus circular arcs into polylines, and a [`Brush`]
//! model (solid color, linear gradient, radial gradient, image pattern)
//! carrying an opacity classification.
//!
//! Rasterization is delegated to a pluggable back-end, specified only
//! through the [`PaintEngine`] contract this core consumes. Concrete
//! back-ends (software rasterizers, GPU renderers, font shaping, image
//! decoding) are collaborators that live outside this crate.
//!
//! # Position in the stack
//!
//! - **Geometry**: [`Vec2`]/[`Mat2x3`] affine math, [`Rect`]/[`Box2`] and
//!   their integer counterparts, [`flatten`] curve subdivision.
//! - **Drawing model (this crate)**: [`Path`], [`Brush`], [`Pen`],
//!   [`Bitmap`], and the [`Painter`] state machine that turns calls into
//!   [`Contours`] handed to a back-end.
//! - **Back-ends**: anything implementing [`PaintEngine`] on top of a
//!   software rasterizer, a GPU pipeline, or similar technology.
//!
//! Each frame is recorded fresh: there is no retained scene graph carried
//! across frames, and this crate does not itself rasterize anything.

#![no_std]

extern crate alloc;

pub mod bitmap;
pub mod brush;
pub mod color;
pub mod engine;
pub mod flatten;
pub mod geom;
pub mod painter;
pub mod path;
pub mod pen;
pub mod rect;
pub mod state;

pub use bitmap::{Bitmap, BitmapId, NinePatch, PixelFormat};
pub use brush::{Brush, BrushKind, GradientBuilder, GradientStop, ImagePattern, LinearGradient, Opacity, RadialGradient};
pub use color::Color;
pub use engine::{LayerOp, PaintEngine};
pub use geom::{Mat2x3, Vec2};
pub use painter::{FrameConfig, Painter};
pub use path::Path;
pub use pen::{Dash, LineCap, LineJoin, Pen};
pub use rect::{Box2, Box2I, Rect, RectI};
pub use state::{Contours, PaintSaver};

pub use peniko::{Compose as CompositeOp, Fill as FillRule, Mix as BlendMode};
