// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adaptive flattening of quadratic and cubic Bézier curves, and of
//! circular arcs, into polylines.
//!
//! The curve subdivision is the classic recursive midpoint algorithm:
//! split the curve at its parametric midpoint, measure how far the
//! control points deviate from the chord using a cross-product area
//! test, and stop recursing once that deviation is within tolerance (or
//! a depth cap is hit, to guarantee termination on pathological input).
//! Arcs are first converted to one or more cubic Béziers (each spanning
//! at most 90 degrees, using the usual `kappa` tangent-length
//! approximation) and then flattened the same way.

use alloc::vec::Vec;

use crate::geom::Vec2;

/// Recursion depth cap for curve subdivision. Bounds worst-case output
/// size to `2^MAX_DEPTH` segments per curve regardless of how the
/// flatness test behaves on degenerate input.
const MAX_DEPTH: u32 = 10;

/// The default flatness tolerance (`minDist`), in the same units as the
/// curve's control points (typically device pixels after the current
/// transform has been applied). [`flatten_quadratic`]/[`flatten_cubic`]
/// square this internally, so a flat curve's maximum deviation from its
/// chord stays within `minDist`.
pub const DEFAULT_TOLERANCE: f64 = 0.7;

fn midpoint(a: Vec2, b: Vec2) -> Vec2 {
    Vec2::new((a.x + b.x) * 0.5, (a.y + b.y) * 0.5)
}

/// Appends the flattened polyline for a quadratic Bézier with control
/// points `p0, p1, p2` to `out`. `p0` is assumed already present in
/// `out`; this only appends the points from after `p0` through `p2`.
pub fn flatten_quadratic(p0: Vec2, p1: Vec2, p2: Vec2, tolerance: f64, out: &mut Vec<Vec2>) {
    recursive_quadratic(p0, p1, p2, tolerance * tolerance, 0, out);
    out.push(p2);
}

fn recursive_quadratic(p0: Vec2, p1: Vec2, p2: Vec2, tolerance_sq: f64, depth: u32, out: &mut Vec<Vec2>) {
    if depth >= MAX_DEPTH {
        return;
    }
    let dx = p2.x - p0.x;
    let dy = p2.y - p0.y;
    // Twice the area of the triangle (p0, p1, p2); zero iff p1 lies on
    // the line through p0 and p2.
    let cross = (p1.x - p2.x) * dy - (p1.y - p2.y) * dx;
    if cross * cross < tolerance_sq * (dx * dx + dy * dy) {
        return;
    }
    let p01 = midpoint(p0, p1);
    let p12 = midpoint(p1, p2);
    let p012 = midpoint(p01, p12);
    recursive_quadratic(p0, p01, p012, tolerance_sq, depth + 1, out);
    out.push(p012);
    recursive_quadratic(p012, p12, p2, tolerance_sq, depth + 1, out);
}

/// Appends the flattened polyline for a cubic Bézier with control
/// points `p0, p1, p2, p3` to `out`. `p0` is assumed already present in
/// `out`.
pub fn flatten_cubic(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, tolerance: f64, out: &mut Vec<Vec2>) {
    recursive_cubic(p0, p1, p2, p3, tolerance * tolerance, 0, out);
    out.push(p3);
}

fn recursive_cubic(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, tolerance_sq: f64, depth: u32, out: &mut Vec<Vec2>) {
    if depth >= MAX_DEPTH {
        return;
    }
    let dx = p3.x - p0.x;
    let dy = p3.y - p0.y;
    let d2 = ((p1.x - p3.x) * dy - (p1.y - p3.y) * dx).abs();
    let d3 = ((p2.x - p3.x) * dy - (p2.y - p3.y) * dx).abs();
    let d = d2 + d3;
    if d * d < tolerance_sq * (dx * dx + dy * dy) {
        return;
    }
    let p01 = midpoint(p0, p1);
    let p12 = midpoint(p1, p2);
    let p23 = midpoint(p2, p3);
    let p012 = midpoint(p01, p12);
    let p123 = midpoint(p12, p23);
    let p0123 = midpoint(p012, p123);
    recursive_cubic(p0, p01, p012, p0123, tolerance_sq, depth + 1, out);
    out.push(p0123);
    recursive_cubic(p0123, p123, p23, p3, tolerance_sq, depth + 1, out);
}

/// One cubic Bézier approximating a circular arc segment of at most 90
/// degrees.
struct ArcSegment {
    p0: Vec2,
    p1: Vec2,
    p2: Vec2,
    p3: Vec2,
}

/// Converts an elliptical arc, swept from `start_angle` to `end_angle`
/// (radians, counterclockwise positive) around `center` with radii
/// `(rx, ry)`, into a sequence of cubic Bézier segments each spanning at
/// most 90 degrees.
fn arc_to_cubics(center: Vec2, rx: f64, ry: f64, start_angle: f64, end_angle: f64) -> Vec<ArcSegment> {
    let mut segments = Vec::new();
    let total = end_angle - start_angle;
    if total.abs() < 1e-12 {
        return segments;
    }
    let segment_count = (total.abs() / (core::f64::consts::FRAC_PI_2)).ceil().max(1.0) as u32;
    let step = total / segment_count as f64;
    let point_at = |angle: f64| -> Vec2 { Vec2::new(center.x + rx * angle.cos(), center.y + ry * angle.sin()) };
    let tangent_at = |angle: f64| -> Vec2 { Vec2::new(-rx * angle.sin(), ry * angle.cos()) };
    for i in 0..segment_count {
        let a0 = start_angle + step * i as f64;
        let a1 = a0 + step;
        // Tangent-length scale for a single-segment cubic approximation
        // of a circular arc spanning `step` radians: `4/3 * tan(halfΔ/2)`,
        // equivalently `4/3 * (1 - cos(halfΔ)) / sin(halfΔ)` via the
        // half-angle identity, with `halfΔ = step/2`.
        let kappa = (4.0 / 3.0) * (step / 4.0).tan();
        let p0 = point_at(a0);
        let p3 = point_at(a1);
        let p1 = p0 + tangent_at(a0) * kappa;
        let p2 = p3 - tangent_at(a1) * kappa;
        segments.push(ArcSegment { p0, p1, p2, p3 });
    }
    segments
}

/// Flattens an elliptical arc directly into a polyline, appending to
/// `out`. `p0` (the arc's start point) is assumed already present in
/// `out`.
pub fn flatten_arc(center: Vec2, rx: f64, ry: f64, start_angle: f64, end_angle: f64, tolerance: f64, out: &mut Vec<Vec2>) {
    for seg in arc_to_cubics(center, rx, ry, start_angle, end_angle) {
        flatten_cubic(seg.p0, seg.p1, seg.p2, seg.p3, tolerance, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::PI;

    #[test]
    fn flat_quadratic_produces_no_subdivision() {
        let p0 = Vec2::new(0.0, 0.0);
        let p1 = Vec2::new(5.0, 0.0);
        let p2 = Vec2::new(10.0, 0.0);
        let mut out = alloc::vec![p0];
        flatten_quadratic(p0, p1, p2, DEFAULT_TOLERANCE, &mut out);
        assert_eq!(out, alloc::vec![p0, p2]);
    }

    #[test]
    fn curved_quadratic_subdivides() {
        let p0 = Vec2::new(0.0, 0.0);
        let p1 = Vec2::new(50.0, 100.0);
        let p2 = Vec2::new(100.0, 0.0);
        let mut out = alloc::vec![p0];
        flatten_quadratic(p0, p1, p2, DEFAULT_TOLERANCE, &mut out);
        assert!(out.len() > 2);
        assert_eq!(*out.last().unwrap(), p2);
    }

    #[test]
    fn flat_cubic_produces_no_subdivision() {
        let p0 = Vec2::new(0.0, 0.0);
        let p1 = Vec2::new(3.0, 0.0);
        let p2 = Vec2::new(7.0, 0.0);
        let p3 = Vec2::new(10.0, 0.0);
        let mut out = alloc::vec![p0];
        flatten_cubic(p0, p1, p2, p3, DEFAULT_TOLERANCE, &mut out);
        assert_eq!(out, alloc::vec![p0, p3]);
    }

    #[test]
    fn recursion_depth_is_capped() {
        // A control point configuration that never satisfies the
        // flatness test (p1 pinned far off the chord at every scale)
        // still terminates, bounded by MAX_DEPTH.
        let p0 = Vec2::new(0.0, 0.0);
        let p1 = Vec2::new(1e6, 1.0);
        let p2 = Vec2::new(0.0, 0.0);
        let mut out = alloc::vec![p0];
        flatten_quadratic(p0, p1, p2, DEFAULT_TOLERANCE, &mut out);
        assert!(out.len() <= (1 << MAX_DEPTH) + 2);
    }

    #[test]
    fn quarter_circle_arc_stays_near_radius() {
        let center = Vec2::new(0.0, 0.0);
        let mut out = alloc::vec![Vec2::new(10.0, 0.0)];
        flatten_arc(center, 10.0, 10.0, 0.0, PI / 2.0, 0.1, &mut out);
        for p in &out {
            let r = (p.x * p.x + p.y * p.y).sqrt();
            assert!((r - 10.0).abs() < 0.2, "radius drifted to {r}");
        }
        let last = *out.last().unwrap();
        assert!((last.x - 0.0).abs() < 1e-6);
        assert!((last.y - 10.0).abs() < 1e-6);
    }

    #[test]
    fn full_circle_splits_into_at_least_four_segments() {
        let segs = arc_to_cubics(Vec2::ZERO, 5.0, 5.0, 0.0, 2.0 * PI);
        assert!(segs.len() >= 4);
    }
}
