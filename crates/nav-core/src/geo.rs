//! Planar geometry: points, axis-aligned squares, and the shared tolerance.
//!
//! Coordinates are `f64` world units in a Cartesian frame where **y grows
//! upward**, so a square's `top_left` carries the minimum x and the *maximum*
//! y.  `Point` doubles as a displacement vector in the funnel math; the
//! vector helpers (`dot`, `cross`, `normalized`, …) read `self` as a
//! direction rather than a position.

use std::ops::{Add, Sub};

/// Comparison tolerance for adjacency detection and axis-alignment checks.
///
/// Two boundary coordinates closer than this are considered coincident.
/// Always compare against this constant; never inline the literal.
pub const EDGE_EPSILON: f64 = 1e-5;

// ── Point ─────────────────────────────────────────────────────────────────────

/// A position (or displacement) in world space.  Value type, no identity.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance to `other`.  Preserves distance ordering
    /// without the square root; all search costs use this form.
    #[inline]
    pub fn distance_sq(self, other: Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx * dx + dy * dy
    }

    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        self.distance_sq(other).sqrt()
    }

    /// Point halfway between `self` and `other`.
    #[inline]
    pub fn midpoint(self, other: Point) -> Point {
        Point::new((self.x + other.x) * 0.5, (self.y + other.y) * 0.5)
    }

    // ── Vector helpers (self read as a direction) ─────────────────────────

    #[inline]
    pub fn dot(self, other: Point) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// z-component of the 3-D cross product.  Positive when `other` lies
    /// counter-clockwise of `self` (y-up frame).
    #[inline]
    pub fn cross(self, other: Point) -> f64 {
        self.x * other.y - self.y * other.x
    }

    #[inline]
    pub fn length(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Unit-length copy.  The zero vector normalizes to itself.
    pub fn normalized(self) -> Point {
        let len = self.length();
        if len <= f64::EPSILON {
            return Point::default();
        }
        Point::new(self.x / len, self.y / len)
    }

    #[inline]
    pub fn scale(self, k: f64) -> Point {
        Point::new(self.x * k, self.y * k)
    }

    /// Unsigned angle between `self` and `other` as direction vectors, in
    /// radians within `[0, π]`.  Degenerate (zero) vectors yield `0.0`.
    #[inline]
    pub fn angle_to(self, other: Point) -> f64 {
        self.cross(other).abs().atan2(self.dot(other))
    }
}

impl Add for Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;
    #[inline]
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.x, self.y)
    }
}

// ── Square ────────────────────────────────────────────────────────────────────

/// An axis-aligned rectangle of traversable space.
///
/// Invariants (y-up frame):
/// - `top_left.x <= bottom_right.x`
/// - `top_left.y >= bottom_right.y`
///
/// Squares are created by world-construction code and never mutated after
/// the mesh is built.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Square {
    pub top_left: Point,
    pub bottom_right: Point,
}

impl Square {
    pub fn new(top_left: Point, bottom_right: Point) -> Self {
        debug_assert!(top_left.x <= bottom_right.x, "inverted x extent");
        debug_assert!(top_left.y >= bottom_right.y, "inverted y extent");
        Self { top_left, bottom_right }
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.bottom_right.x - self.top_left.x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.top_left.y - self.bottom_right.y
    }

    #[inline]
    pub fn center(&self) -> Point {
        self.top_left.midpoint(self.bottom_right)
    }

    /// Point-in-rectangle test, inclusive of the boundary.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.top_left.x
            && p.x <= self.bottom_right.x
            && p.y <= self.top_left.y
            && p.y >= self.bottom_right.y
    }

    /// Closest point of the rectangle to `p` (clamp into the extent).
    ///
    /// For a `p` outside the rectangle this is the nearest boundary point;
    /// for an interior `p` it is `p` itself.
    pub fn closest_point(&self, p: Point) -> Point {
        Point::new(
            p.x.clamp(self.top_left.x, self.bottom_right.x),
            p.y.clamp(self.bottom_right.y, self.top_left.y),
        )
    }

    /// Squared distance from `p` to the rectangle; zero when `p` is inside.
    #[inline]
    pub fn distance_sq_to(&self, p: Point) -> f64 {
        p.distance_sq(self.closest_point(p))
    }
}
