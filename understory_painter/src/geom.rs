// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! 2D point/vector and affine transform types.
//!
//! [`Mat2x3`] wraps [`kurbo::Affine`] for the actual matrix algebra rather
//! than reimplementing it, but keeps its own construction API because the
//! composition order and the pivot/skew conventions below are specific to
//! this crate's painter semantics.

use kurbo::Affine;

/// A 2D point or displacement.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec2 {
    /// Horizontal component.
    pub x: f64,
    /// Vertical component.
    pub y: f64,
}

impl Vec2 {
    /// The zero vector.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Creates a new vector.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns this vector translated by `(dx, dy)`.
    #[must_use]
    pub const fn translate(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Squared Euclidean distance to `other`. Cheaper than [`distance`](Self::distance)
    /// when only comparisons are needed.
    #[must_use]
    pub fn distance_squared(self, other: Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        self.distance_squared(other).sqrt()
    }

    /// Whether both components are finite (neither NaN nor infinite).
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub(crate) fn to_kurbo(self) -> kurbo::Point {
        kurbo::Point::new(self.x, self.y)
    }

    pub(crate) fn from_kurbo(p: kurbo::Point) -> Self {
        Self::new(p.x, p.y)
    }
}

impl core::ops::Add for Vec2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl core::ops::Sub for Vec2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl core::ops::Mul<f64> for Vec2 {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

/// A 2D affine transform, `[a c e; b d f]`, mapping
/// `(x, y) -> (a*x + c*y + e, b*x + d*y + f)`.
///
/// Chained builder calls compose left to right: `m.translate(..).rotate(..)`
/// means "translate, then rotate in the resulting local frame", i.e. each
/// new operation is appended on the right of the accumulated matrix.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Mat2x3 {
    /// Column-major affine coefficients, see the struct documentation.
    pub a: f64,
    /// See [`a`](Self::a).
    pub b: f64,
    /// See [`a`](Self::a).
    pub c: f64,
    /// See [`a`](Self::a).
    pub d: f64,
    /// See [`a`](Self::a).
    pub e: f64,
    /// See [`a`](Self::a).
    pub f: f64,
}

impl Mat2x3 {
    /// The identity transform.
    pub const IDENTITY: Self = Self { a: 1.0, b: 0.0, c: 0.0, d: 1.0, e: 0.0, f: 0.0 };

    /// A pure translation.
    #[must_use]
    pub const fn translation(dx: f64, dy: f64) -> Self {
        Self { a: 1.0, b: 0.0, c: 0.0, d: 1.0, e: dx, f: dy }
    }

    /// A pure non-uniform scale about the origin.
    #[must_use]
    pub const fn scaling(sx: f64, sy: f64) -> Self {
        Self { a: sx, b: 0.0, c: 0.0, d: sy, e: 0.0, f: 0.0 }
    }

    fn to_kurbo(self) -> Affine {
        Affine::new([self.a, self.b, self.c, self.d, self.e, self.f])
    }

    fn from_kurbo(m: Affine) -> Self {
        let c = m.as_coeffs();
        Self { a: c[0], b: c[1], c: c[2], d: c[3], e: c[4], f: c[5] }
    }

    /// Appends a translation by `(dx, dy)`.
    #[must_use]
    pub fn translate(self, dx: f64, dy: f64) -> Self {
        self.then(Self::translation(dx, dy))
    }

    /// Appends a non-uniform scale about the origin.
    #[must_use]
    pub fn scale(self, sx: f64, sy: f64) -> Self {
        self.then(Self::scaling(sx, sy))
    }

    /// Appends a rotation of `degrees` about the origin.
    #[must_use]
    pub fn rotate(self, degrees: f64) -> Self {
        Self::from_kurbo(self.to_kurbo() * Affine::rotate(degrees.to_radians()))
    }

    /// Appends a rotation of `degrees` about `(cx, cy)`, implemented as
    /// translate-rotate-translate around the pivot.
    #[must_use]
    pub fn rotate_about(self, degrees: f64, cx: f64, cy: f64) -> Self {
        self.translate(cx, cy).rotate(degrees).translate(-cx, -cy)
    }

    /// Appends a skew. Angles are in degrees; the Y angle's sign is
    /// flipped relative to the mathematical convention because this
    /// crate's device space has Y increasing downward.
    #[must_use]
    pub fn skew(self, degrees_x: f64, degrees_y: f64) -> Self {
        let tx = degrees_x.to_radians().tan();
        let ty = (-degrees_y).to_radians().tan();
        self.then(Self::from_kurbo(Affine::new([1.0, ty, tx, 1.0, 0.0, 0.0])))
    }

    /// Composes `self` followed by `rhs`: applying the result to a point
    /// is the same as applying `rhs` to `self`'s result... in other words
    /// `rhs` is appended to the right of the accumulated matrix, so when
    /// the composed matrix is later applied to a point, `rhs` takes effect
    /// first (innermost) and `self` last (outermost).
    #[must_use]
    pub fn then(self, rhs: Self) -> Self {
        Self::from_kurbo(self.to_kurbo() * rhs.to_kurbo())
    }

    /// Applies this transform to a point.
    #[must_use]
    pub fn apply(self, p: Vec2) -> Vec2 {
        Vec2::from_kurbo(self.to_kurbo() * p.to_kurbo())
    }

    /// Applies the linear part only (no translation); useful for
    /// transforming vectors/offsets rather than points.
    #[must_use]
    pub fn apply_vector(self, v: Vec2) -> Vec2 {
        Vec2::new(self.a * v.x + self.c * v.y, self.b * v.x + self.d * v.y)
    }

    /// The determinant of the linear part.
    #[must_use]
    pub fn determinant(self) -> f64 {
        self.a * self.d - self.b * self.c
    }

    /// The inverse transform, or `None` if the matrix is singular.
    #[must_use]
    pub fn invert(self) -> Option<Self> {
        if self.determinant().abs() < 1e-12 {
            None
        } else {
            Some(Self::from_kurbo(self.to_kurbo().inverse()))
        }
    }

    /// Whether this transform is a pure translation (no rotation, scale,
    /// or skew component).
    #[must_use]
    pub fn is_translation(self) -> bool {
        (self.a - 1.0).abs() < 1e-9 && self.b.abs() < 1e-9 && self.c.abs() < 1e-9 && (self.d - 1.0).abs() < 1e-9
    }

    /// Whether this transform preserves angles and relative lengths
    /// (uniform scale, rotation, translation; no skew or non-uniform
    /// scale).
    #[must_use]
    pub fn is_orthonormal(self) -> bool {
        let scale_x_sq = self.a * self.a + self.b * self.b;
        let scale_y_sq = self.c * self.c + self.d * self.d;
        let dot = self.a * self.c + self.b * self.d;
        dot.abs() < 1e-9 && (scale_x_sq - scale_y_sq).abs() < 1e-9
    }
}

impl Default for Mat2x3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl core::ops::Mul<Vec2> for Mat2x3 {
    type Output = Vec2;
    fn mul(self, rhs: Vec2) -> Vec2 {
        self.apply(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_is_a_no_op() {
        let p = Vec2::new(3.0, 4.0);
        assert_eq!(Mat2x3::IDENTITY * p, p);
    }

    #[test]
    fn translate_then_rotate_rotates_about_the_translated_origin() {
        let m = Mat2x3::IDENTITY.translate(10.0, 0.0).rotate(90.0);
        let p = m.apply(Vec2::new(1.0, 0.0));
        // Local x-axis unit vector, after a 90-degree rotation about the
        // new (translated) origin, points in +y from (10, 0).
        assert!((p.x - 10.0).abs() < 1e-9);
        assert!((p.y - 1.0).abs() < 1e-9);
    }

    #[test]
    fn invert_undoes_a_transform() {
        let m = Mat2x3::IDENTITY.translate(5.0, -2.0).rotate(37.0).scale(2.0, 0.5);
        let inv = m.invert().expect("non-singular");
        let p = Vec2::new(11.0, -3.0);
        let round_trip = inv.apply(m.apply(p));
        assert!((round_trip.x - p.x).abs() < 1e-6);
        assert!((round_trip.y - p.y).abs() < 1e-6);
    }

    #[test]
    fn singular_matrix_has_no_inverse() {
        let m = Mat2x3::scaling(0.0, 1.0);
        assert!(m.invert().is_none());
    }

    #[test]
    fn rotate_about_pivot_fixes_the_pivot_point() {
        let m = Mat2x3::IDENTITY.rotate_about(45.0, 5.0, 5.0);
        let p = m.apply(Vec2::new(5.0, 5.0));
        assert!((p.x - 5.0).abs() < 1e-9);
        assert!((p.y - 5.0).abs() < 1e-9);
    }
}
