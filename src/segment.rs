// Copyright 2026 the Morph Targets Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Line segments and point-to-segment distance.

use crate::{Point, Vec2};

/// The distance reported for a segment too short to project onto.
///
/// This stands in for "effectively infinite" while keeping the arithmetic of
/// callers finite.
pub const DEGENERATE_DISTANCE: f64 = 9999.0;

/// Segments shorter than this are treated as degenerate.
pub const DEGENERATE_LENGTH: f64 = 0.00000001;

/// Projection parameters below this count as falling before the segment start.
///
/// This is a small positive tolerance rather than `0.0`, so points projecting
/// just inside the start are scored against the endpoints.
pub const PROJECTION_TOLERANCE: f64 = 0.00001;

/// A finite line segment.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    /// The segment's start point.
    pub start: Point,
    /// The segment's end point.
    pub end: Point,
}

impl Segment {
    /// Create a new segment.
    #[inline(always)]
    pub fn new(start: impl Into<Point>, end: impl Into<Point>) -> Segment {
        Segment {
            start: start.into(),
            end: end.into(),
        }
    }

    /// The length of the segment.
    #[inline]
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }

    /// Whether the segment is too short to project onto.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.length() < DEGENERATE_LENGTH
    }

    /// The displacement from start to end.
    #[inline]
    pub fn delta(&self) -> Vec2 {
        self.end - self.start
    }

    /// The point at parameter `t`, where `0` is the start and `1` the end.
    #[inline]
    pub fn eval(&self, t: f64) -> Point {
        self.start.lerp(self.end, t)
    }

    /// The parameter of the projection of `pt` onto the infinite line through
    /// this segment.
    ///
    /// Values in `[0, 1]` land on the segment. Returns `None` for a
    /// degenerate segment.
    pub fn project(&self, pt: Point) -> Option<f64> {
        let length = self.length();
        if length < DEGENERATE_LENGTH {
            return None;
        }
        Some((pt - self.start).dot(self.delta()) / (length * length))
    }

    /// Distance from `pt` to this segment.
    ///
    /// When the projection of `pt` falls on the segment this is the
    /// perpendicular distance. When it falls outside (a parameter below
    /// [`PROJECTION_TOLERANCE`] or above `1`), the result is the *larger* of
    /// the two endpoint distances, not the nearer one. Degenerate segments
    /// report [`DEGENERATE_DISTANCE`].
    ///
    /// # Examples
    ///
    /// ```
    /// use morph_targets::{Point, Segment};
    ///
    /// let seg = Segment::new((0.0, 10.0), (100.0, 10.0));
    /// assert_eq!(seg.distance(Point::new(50.0, 20.0)), 10.0);
    /// // Beyond the start, the far endpoint decides.
    /// assert_eq!(seg.distance(Point::new(-10.0, 10.0)), 110.0);
    /// ```
    pub fn distance(&self, pt: Point) -> f64 {
        let Some(u) = self.project(pt) else {
            return DEGENERATE_DISTANCE;
        };
        if u < PROJECTION_TOLERANCE || u > 1.0 {
            pt.distance(self.start).max(pt.distance(self.end))
        } else {
            pt.distance(self.eval(u))
        }
    }

    /// Returns a copy of this segment with the end points swapped.
    #[must_use]
    #[inline(always)]
    pub fn reversed(&self) -> Segment {
        Segment {
            start: self.end,
            end: self.start,
        }
    }

    /// Is this segment finite?
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.start.is_finite() && self.end.is_finite()
    }
}

impl From<(Point, Point)> for Segment {
    #[inline(always)]
    fn from((start, end): (Point, Point)) -> Self {
        Segment::new(start, end)
    }
}

impl From<((f64, f64), (f64, f64))> for Segment {
    #[inline(always)]
    fn from((start, end): ((f64, f64), (f64, f64))) -> Self {
        Segment::new(start, end)
    }
}
